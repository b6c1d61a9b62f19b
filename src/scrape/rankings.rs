//! Divisional rankings extraction
//!
//! The rankings page is a sequence of grouping containers, one per
//! division, each holding a header and a table of ranked rows.

use super::dom;
use scraper::Html;
use serde::Serialize;
use std::collections::BTreeMap;

/// All divisions on the rankings page, in page order
pub type Rankings = Vec<DivisionRanking>;

/// One division's ranked fighters
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DivisionRanking {
    pub division: String,
    /// Rank number to fighter name, ordered numerically
    pub ranks: BTreeMap<u32, String>,
}

/// Extracts the divisional rankings from rankings page markup
///
/// Rows whose rank cell does not parse as a number are skipped. A repeated
/// division header replaces the earlier division's rows (last write wins).
pub fn parse_rankings(html: &str) -> Rankings {
    let document = Html::parse_document(html);
    let root = document.root_element();
    let mut divisions: Rankings = Vec::new();

    for group in dom::select_all(root, ".view-grouping") {
        let division = dom::first_text(group, ".view-grouping-header");
        let mut ranks = BTreeMap::new();

        for row in dom::select_all(group, "tbody tr") {
            let rank_text = dom::first_text(row, ".views-field-weight-class-rank");
            let fighter = dom::first_text(row, ".views-field-title a");

            match rank_text.parse::<u32>() {
                Ok(rank) => {
                    ranks.insert(rank, fighter);
                }
                Err(_) => {
                    tracing::debug!(
                        "Skipping rankings row with unparsable rank '{}' in '{}'",
                        rank_text,
                        division
                    );
                }
            }
        }

        if let Some(existing) = divisions.iter_mut().find(|d| d.division == division) {
            existing.ranks = ranks;
        } else {
            divisions.push(DivisionRanking { division, ranks });
        }
    }

    divisions
}
