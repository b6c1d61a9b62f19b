//! Career record leaderboards from the statleaders host
//!
//! This page lives on a different host than the athlete pages. Each results
//! group is a category with a header and a table of rows; the first row is a
//! column header marked with a modifier class, and ranks are positional.

use super::dom;
use scraper::Html;
use serde::Serialize;

/// All leaderboard categories, in page order
pub type Records = Vec<RecordCategory>;

/// One leaderboard category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordCategory {
    pub category: String,
    pub entries: Vec<RecordEntry>,
}

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordEntry {
    /// 1-based row position within the category
    pub rank: u32,
    pub fighter: String,
    pub statistic: String,
}

/// Extracts the career leaderboards from statleaders page markup
///
/// Header rows (the `results-table--th` modifier) are excluded. Ranks count
/// data-row positions, so an incomplete row leaves a gap rather than
/// shifting the rows after it. Rows missing the fighter or statistic cell
/// are dropped entirely. A repeated category header replaces the earlier
/// category's rows (last write wins).
pub fn parse_records(html: &str) -> Records {
    let document = Html::parse_document(html);
    let root = document.root_element();
    let mut categories: Records = Vec::new();

    for group in dom::select_all(root, ".results-group") {
        let category = dom::first_text(group, "header h3");
        let mut entries = Vec::new();
        let mut rank = 0u32;

        for row in dom::select_all(group, ".results-table--tr") {
            if row
                .value()
                .classes()
                .any(|class| class == "results-table--th")
            {
                continue;
            }
            rank += 1;

            let cells = dom::select_all(row, "span");
            let fighter = cells.get(1).copied().map(dom::element_text).unwrap_or_default();
            let statistic = cells.get(2).copied().map(dom::element_text).unwrap_or_default();

            if fighter.is_empty() || statistic.is_empty() {
                tracing::debug!(
                    "Skipping incomplete leaderboard row {} in '{}'",
                    rank,
                    category
                );
                continue;
            }

            entries.push(RecordEntry {
                rank,
                fighter,
                statistic,
            });
        }

        if let Some(existing) = categories.iter_mut().find(|c| c.category == category) {
            existing.entries = entries;
        } else {
            categories.push(RecordCategory { category, entries });
        }
    }

    categories
}
