use crate::error::ViewError;

/// Built-in terminal layout
pub const DEFAULT_LAYOUT: &str = include_str!("../../templates/page.txt");

/// Named regions a layout can mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Clock,
    Search,
    Results,
    Grid,
    Details,
}

impl Region {
    const ALL: [Region; 5] = [
        Region::Clock,
        Region::Search,
        Region::Results,
        Region::Grid,
        Region::Details,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Region::Clock => "clock",
            Region::Search => "search",
            Region::Results => "results",
            Region::Grid => "grid",
            Region::Details => "details",
        }
    }

    fn from_placeholder(line: &str) -> Option<Region> {
        let name = line.trim().strip_prefix('{')?.strip_suffix('}')?;
        Region::ALL.into_iter().find(|region| region.name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone)]
enum Line {
    Text(String),
    Mount(Region),
}

/// A layout template plus the current content of each mounted region.
///
/// Setting a region replaces its content wholesale; empty regions are
/// left out of the rendered page entirely.
#[derive(Debug, Clone)]
pub struct Page {
    lines: Vec<Line>,
    content: [String; 5],
}

impl Page {
    /// Parses a layout. Placeholders such as `{grid}` must sit on their own line.
    /// The grid and search regions are required.
    pub fn parse(layout: &str) -> Result<Self, ViewError> {
        let lines: Vec<Line> = layout
            .lines()
            .map(|line| match Region::from_placeholder(line) {
                Some(region) => Line::Mount(region),
                None => Line::Text(line.to_string()),
            })
            .collect();

        let page = Self {
            lines,
            content: Default::default(),
        };
        for required in [Region::Grid, Region::Search] {
            if !page.has_mount(required) {
                return Err(ViewError::MissingMount(required.name()));
            }
        }
        Ok(page)
    }

    pub fn has_mount(&self, region: Region) -> bool {
        self.lines
            .iter()
            .any(|line| matches!(line, Line::Mount(r) if *r == region))
    }

    pub fn set(&mut self, region: Region, content: String) {
        self.content[region.index()] = content;
    }

    pub fn clear(&mut self, region: Region) {
        self.content[region.index()].clear();
    }

    pub fn region(&self, region: Region) -> &str {
        &self.content[region.index()]
    }

    pub fn render(&self) -> String {
        let mut out = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            match line {
                Line::Text(text) => out.push(text.as_str()),
                Line::Mount(region) => {
                    let content = self.region(*region);
                    if !content.is_empty() {
                        out.push(content);
                    }
                }
            }
        }
        let mut page = out.join("\n");
        page.push('\n');
        page
    }
}
