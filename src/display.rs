use chrono::{NaiveDate, NaiveDateTime};

/// Formats a date for the grid's leading column, e.g. `December 21, 2025`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Formats a date for a search result row, e.g. `Sun, Dec 21, 2025`
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

/// Formats the header clock, e.g. `Sunday, December 21, 2025 at 09:30 AM`
pub fn format_clock(now: NaiveDateTime) -> String {
    now.format("%A, %B %-d, %Y at %I:%M %p").to_string()
}

/// Formats the "last updated" stamp in the staff details panel
pub fn format_timestamp(now: NaiveDateTime) -> String {
    now.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

pub fn format_match_count(count: usize) -> String {
    if count == 1 {
        "1 assignment found".to_string()
    } else {
        format!("{} assignments found", count)
    }
}

/// Lays rows out as a plain-text table with a ruled header.
///
/// Short rows are padded with blank cells so every column lines up.
pub fn format_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let columns = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0);

    let mut widths = vec![0usize; columns];
    for (i, title) in header.iter().enumerate() {
        widths[i] = widths[i].max(title.chars().count());
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&render_line(&widths, header.iter().copied()));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format!("|-{}-|", rule.join("-|-")));
    for row in rows {
        out.push('\n');
        out.push_str(&render_line(&widths, row.iter().map(String::as_str)));
    }
    out
}

fn render_line<'a>(widths: &[usize], mut cells: impl Iterator<Item = &'a str>) -> String {
    let padded: Vec<String> = widths
        .iter()
        .map(|width| format!("{:<width$}", cells.next().unwrap_or(""), width = *width))
        .collect();
    format!("| {} |", padded.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, 21)
            .unwrap()
            .and_hms_opt(21, 5, 9)
            .unwrap()
    }

    #[test]
    fn dates_use_fixed_english_formats() {
        let date = sample().date();
        assert_eq!(format_long_date(date), "December 21, 2025");
        assert_eq!(format_short_date(date), "Sun, Dec 21, 2025");
        assert_eq!(format_clock(sample()), "Sunday, December 21, 2025 at 09:05 PM");
        assert_eq!(format_timestamp(sample()), "12/21/2025, 9:05:09 PM");
    }

    #[test]
    fn pluralises_match_count() {
        assert_eq!(format_match_count(1), "1 assignment found");
        assert_eq!(format_match_count(12), "12 assignments found");
    }

    #[test]
    fn table_columns_line_up() {
        let rows = vec![
            vec!["Sunday".to_string(), "Nibras".to_string()],
            vec!["".to_string()],
        ];
        let table = format_table(&["Date", "SURIA88"], &rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "| Date   | SURIA88 |");
        assert_eq!(lines[1], "|--------|---------|");
        assert_eq!(lines[2], "| Sunday | Nibras  |");
        assert_eq!(lines[3], "|        |         |");
    }
}
