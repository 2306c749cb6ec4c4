//! Plain-text tables for CLI output.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Missing cells are rendered empty, extra cells are ignored.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| UnicodeWidthStr::width(c.as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(h.as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        write_line(&mut out, self.headers.iter().map(String::as_str), &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_line(&mut out, rule.iter().map(String::as_str), &widths);

        for row in &self.rows {
            let cells = (0..self.headers.len()).map(|i| row.get(i).map(String::as_str).unwrap_or(""));
            write_line(&mut out, cells, &widths);
        }

        out
    }
}

fn write_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let parts: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(UnicodeWidthStr::width(cell));
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(parts.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::Table;

    #[test]
    fn pads_columns_by_display_width() {
        let mut table = Table::new(["Job", "Helpers"]);
        table.add_row(vec!["Küche".into(), "12".into()]);
        table.add_row(vec!["Bar".into()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Job    Helpers");
        assert_eq!(lines[1], "-----  -------");
        assert_eq!(lines[2], "Küche  12");
        assert_eq!(lines[3], "Bar");
    }
}
