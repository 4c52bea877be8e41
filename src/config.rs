use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::view::Timings;

/// Runtime settings. Every field has a built-in default; environment
/// variables override them.
#[derive(Debug, Clone)]
pub struct Config {
    /// Alternate roster table (`ROSTER_CSV`); the embedded roster otherwise
    pub roster_path: Option<PathBuf>,
    /// No-match notice lifetime (`ROSTER_NOTICE_SECS`)
    pub notice_delay: Duration,
    /// Staff details lifetime (`ROSTER_DETAILS_SECS`)
    pub details_delay: Duration,
    /// Header clock refresh (`ROSTER_CLOCK_SECS`)
    pub clock_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_path: None,
            notice_delay: Duration::from_secs(3),
            details_delay: Duration::from_secs(10),
            clock_interval: Duration::from_secs(60),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unparsable values keep the default
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let seconds = |key: &str, fallback: Duration| match lookup(key) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(key, value = %raw, "ignoring invalid duration");
                    fallback
                }
            },
            None => fallback,
        };

        Self {
            roster_path: lookup("ROSTER_CSV")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            notice_delay: seconds("ROSTER_NOTICE_SECS", defaults.notice_delay),
            details_delay: seconds("ROSTER_DETAILS_SECS", defaults.details_delay),
            clock_interval: seconds("ROSTER_CLOCK_SECS", defaults.clock_interval),
        }
    }

    pub fn timings(&self) -> Timings {
        Timings {
            notice: self.notice_delay,
            details: self.details_delay,
        }
    }
}
