//! Current titleholders extraction from the athletes listing page

use super::dom;
use scraper::Html;
use serde::Serialize;

/// All current champions, in page order
pub type Titleholders = Vec<Titleholder>;

/// One division's champion entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Titleholder {
    pub division: String,
    pub weight: String,
    pub champion: String,
    pub nickname: String,
    pub record: String,
    pub last_fight: String,
}

/// Extracts current titleholders from athletes listing markup
///
/// Listing items without a division string are decorative (promo tiles,
/// pager rows) and are skipped. A repeated division replaces the earlier
/// entry (last write wins).
pub fn parse_titleholders(html: &str) -> Titleholders {
    let document = Html::parse_document(html);
    let root = document.root_element();
    let mut titleholders: Titleholders = Vec::new();

    for item in dom::select_all(root, ".l-listing__item") {
        let division = dom::first_text(item, ".ath-wlcass strong");
        if division.is_empty() {
            continue;
        }

        let entry = Titleholder {
            division,
            weight: dom::first_text(item, ".ath-weight"),
            champion: dom::first_text(item, ".ath-n__name a span"),
            nickname: dom::first_text(item, ".ath-nn__nickname .field__item"),
            record: dom::first_text(item, ".c-ath--record"),
            // First row of the nested fight-history block
            last_fight: dom::first_text(
                item,
                ".view-fighter-last-fight .view-content .views-row",
            ),
        };

        if let Some(existing) = titleholders
            .iter_mut()
            .find(|t| t.division == entry.division)
        {
            *existing = entry;
        } else {
            titleholders.push(entry);
        }
    }

    titleholders
}
