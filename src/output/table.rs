//! Plain column-aligned tables.

use console::{measure_text_width, pad_str, style, Alignment};

use crate::api::pagination::PageMeta;

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

    pub fn row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| measure_text_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let w = measure_text_width(cell);
                if i < widths.len() {
                    widths[i] = widths[i].max(w);
                } else {
                    widths.push(w);
                }
            }
        }
        widths
    }

    pub fn print(&self) {
        let widths = self.widths();

        let header_line = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| pad_str(h, widths[i], Alignment::Left, None).to_string())
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", style(header_line).bold());

        for row in &self.rows {
            // pad_str measures display width, so styled cells stay aligned.
            let line = row
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    let width = widths.get(i).copied().unwrap_or(0);
                    pad_str(cell, width, Alignment::Left, None).to_string()
                })
                .collect::<Vec<_>>()
                .join("  ");
            println!("{line}");
        }
    }
}

/// "page 2/3 (45 items)" footer under paginated tables.
pub fn page_footer(meta: &PageMeta) {
    if meta.total_pages > 1 {
        println!(
            "{}",
            style(format!(
                "page {}/{} ({} items)",
                meta.page, meta.total_pages, meta.total_items
            ))
            .dim()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_cover_headers_and_cells() {
        let mut table = Table::new(["id", "name"]);
        table.row(["240327", "A"]);
        table.row(["1", "A very long name"]);
        assert_eq!(table.widths(), vec![6, 16]);
    }

    #[test]
    fn empty_table_reports_empty() {
        let table = Table::new(["a"]);
        assert!(table.is_empty());
    }
}
