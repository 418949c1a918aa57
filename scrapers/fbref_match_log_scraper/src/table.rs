use scraper::{ElementRef, Html, Selector};

/// Thin view over a stats table, keeping selector plumbing out of the
/// extraction logic.
pub struct StatsTable<'a> {
    table: ElementRef<'a>,
}

impl<'a> StatsTable<'a> {
    /// First table in the document matching `selector`.
    pub fn find(document: &'a Html, selector: &str) -> Option<Self> {
        let table_selector = Selector::parse(selector).ok()?;
        document
            .select(&table_selector)
            .next()
            .map(|table| Self { table })
    }

    /// Body rows in document order, structural rows (spacers, repeated
    /// header rows) already dropped.
    pub fn rows(&self) -> Vec<StatRow<'a>> {
        let row_selector = Selector::parse("tbody tr").unwrap();
        self.table
            .select(&row_selector)
            .map(|row| StatRow { row })
            .filter(|row| !row.is_structural())
            .collect()
    }
}

pub struct StatRow<'a> {
    row: ElementRef<'a>,
}

impl<'a> StatRow<'a> {
    /// Trimmed text of the cell carrying the given `data-stat` key.
    /// `None` when the cell is absent or empty.
    pub fn cell(&self, stat: &str) -> Option<String> {
        let cell_selector = Selector::parse("th[data-stat], td[data-stat]").unwrap();
        self.row
            .select(&cell_selector)
            .find(|cell| cell.value().attr("data-stat") == Some(stat))
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
    }

    fn is_structural(&self) -> bool {
        self.row
            .value()
            .classes()
            .any(|class| class == "spacer" || class == "thead")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"
        <table class="stats_table">
            <tbody>
                <tr><th data-stat="date">2025-05-10</th><td data-stat="shots">15</td><td data-stat="possession"></td></tr>
                <tr class="spacer"><td data-stat="date"></td></tr>
                <tr class="thead"><th data-stat="date">Date</th></tr>
            </tbody>
        </table>
    "#;

    #[test]
    fn test_find_and_rows_skip_structural() {
        let document = Html::parse_document(TABLE);
        let table = StatsTable::find(&document, "table.stats_table").unwrap();
        let rows = table.rows();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_cell_lookup_by_stat_key() {
        let document = Html::parse_document(TABLE);
        let table = StatsTable::find(&document, "table.stats_table").unwrap();
        let rows = table.rows();
        assert_eq!(rows[0].cell("date").as_deref(), Some("2025-05-10"));
        assert_eq!(rows[0].cell("shots").as_deref(), Some("15"));
        // Present but empty counts as absent.
        assert_eq!(rows[0].cell("possession"), None);
        assert_eq!(rows[0].cell("corners"), None);
    }

    #[test]
    fn test_find_missing_table() {
        let document = Html::parse_document("<html><body><p>no tables here</p></body></html>");
        assert!(StatsTable::find(&document, "table.stats_table").is_none());
    }
}
