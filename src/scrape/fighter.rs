//! Fighter bio and stats extraction from athlete pages
//!
//! Both extractors read the same athlete page URL but fetch it
//! independently; the composite [`Fighter`] record is assembled by
//! [`Scraper::fighter`](super::Scraper::fighter) from two concurrent
//! fetches.

use super::dom;
use scraper::{ElementRef, Html};
use serde::Serialize;

/// Fighter name used when the caller does not supply one
pub const DEFAULT_FIGHTER: &str = "max holloway";

/// Biographical details from an athlete page's hero and bio sections
///
/// String fields are empty when the page lacks the element; `image_url` is
/// `None` when the hero image is absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FighterInfo {
    pub name: String,
    pub nickname: String,
    pub status: String,
    pub age: String,
    pub height: String,
    pub weight: String,
    pub arm_reach: String,
    pub leg_reach: String,
    pub fighting_style: String,
    pub division: String,
    pub place_of_birth: String,
    pub training_camp: String,
    pub octagon_debut: String,
    #[serde(rename = "ImageURL", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Win counts by finish method
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WinByMethod {
    #[serde(rename = "KO")]
    pub ko: String,
    pub decision: String,
    pub submission: String,
}

/// Significant strike share by position
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SigStrikesByPosition {
    pub standing: String,
    pub clinch: String,
    pub ground: String,
}

/// Significant strike share by target
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SigStrikesByTarget {
    pub head: String,
    pub body: String,
    pub leg: String,
}

/// Landed/attempted pair for significant strikes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StrikingAccuracy {
    pub sig_strikes_landed: String,
    pub sig_strikes_attempted: String,
}

/// Landed/attempted pair for takedowns
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TakedownAccuracy {
    pub takedowns_landed: String,
    pub takedowns_attempted: String,
}

/// Career statistics from an athlete page's stats widgets
///
/// All values are the page's display strings (percentages, counts, times),
/// empty when the corresponding widget is missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FighterStats {
    pub record: String,
    pub win_by_method: WinByMethod,
    pub avg_fight_time: String,
    pub sig_strikes_by_position: SigStrikesByPosition,
    pub sig_strikes_by_target: SigStrikesByTarget,
    pub striking_accuracy: StrikingAccuracy,
    pub takedown_accuracy: TakedownAccuracy,
}

/// Composite of both athlete-page extractions
///
/// Either half may be `None` independently when its fetch failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fighter {
    #[serde(rename = "FighterInfo")]
    pub info: Option<FighterInfo>,
    #[serde(rename = "FighterStats")]
    pub stats: Option<FighterStats>,
}

/// Builds the URL path segment for a fighter's display name
///
/// The first space becomes a hyphen and the result is lowercased; further
/// spaces pass through untouched, matching the upstream URL scheme.
pub fn slugify_name(name: &str) -> String {
    name.replacen(' ', "-", 1).to_lowercase()
}

/// Full athlete page URL for a fighter's display name
pub(super) fn athlete_url(base: &str, name: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), slugify_name(name))
}

/// Extracts biographical details from athlete page markup
pub fn parse_fighter_info(html: &str) -> FighterInfo {
    let document = Html::parse_document(html);
    let root = document.root_element();

    FighterInfo {
        name: dom::first_text(root, ".hero-profile__name"),
        nickname: dom::first_text(root, ".hero-profile__nickname"),
        status: bio_field(root, "Status"),
        // Age sits one level deeper than the other bio rows
        age: dom::labeled_next_nested(root, ".c-bio__label", "Age", ".c-bio__text", ".field__item"),
        height: bio_field(root, "Height"),
        weight: bio_field(root, "Weight"),
        arm_reach: bio_field(root, "Reach"),
        leg_reach: bio_field(root, "Leg reach"),
        fighting_style: bio_field(root, "Fighting style"),
        division: dom::first_text(root, ".hero-profile__division-title"),
        place_of_birth: bio_field(root, "Place of Birth"),
        training_camp: bio_field(root, "Trains at"),
        octagon_debut: bio_field(root, "Octagon Debut"),
        image_url: dom::first_attr(root, ".hero-profile__image", "src"),
    }
}

/// Extracts career statistics from athlete page markup
pub fn parse_fighter_stats(html: &str) -> FighterStats {
    let document = Html::parse_document(html);
    let root = document.root_element();

    FighterStats {
        record: dom::first_text(root, ".hero-profile__division-body"),
        win_by_method: WinByMethod {
            ko: bar_stat(root, "KO/TKO"),
            decision: bar_stat(root, "DEC"),
            submission: bar_stat(root, "SUB"),
        },
        // The comparison widget puts the value before its label
        avg_fight_time: dom::labeled_prev(
            root,
            ".c-stat-compare__label",
            "Average fight time",
            ".c-stat-compare__number",
        ),
        sig_strikes_by_position: SigStrikesByPosition {
            standing: bar_stat(root, "Standing"),
            clinch: bar_stat(root, "Clinch"),
            ground: bar_stat(root, "Ground"),
        },
        sig_strikes_by_target: SigStrikesByTarget {
            // The body diagram carries fixed element ids
            head: dom::first_text(root, "#e-stat-body_x5F__x5F_head_value"),
            body: dom::first_text(root, "#e-stat-body_x5F__x5F_body_value"),
            leg: dom::first_text(root, "#e-stat-body_x5F__x5F_leg_value"),
        },
        striking_accuracy: StrikingAccuracy {
            sig_strikes_landed: overlap_stat(root, "Sig. Strikes Landed"),
            sig_strikes_attempted: overlap_stat(root, "Sig. Strikes Attempted"),
        },
        takedown_accuracy: TakedownAccuracy {
            takedowns_landed: overlap_stat(root, "Takedowns Landed"),
            takedowns_attempted: overlap_stat(root, "Takedowns Attempted"),
        },
    }
}

/// Bio rows are "label, value" sibling pairs
fn bio_field(root: ElementRef<'_>, label: &str) -> String {
    dom::labeled_next(root, ".c-bio__label", label, ".c-bio__text")
}

/// Three-bar chart rows are "label, value" sibling pairs
fn bar_stat(root: ElementRef<'_>, label: &str) -> String {
    dom::labeled_next(root, ".c-stat-3bar__label", label, ".c-stat-3bar__value")
}

/// Accuracy overlap widgets are "text, value" sibling pairs
fn overlap_stat(root: ElementRef<'_>, label: &str) -> String {
    dom::labeled_next(root, ".c-overlap__stats-text", label, ".c-overlap__stats-value")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATHLETE_PAGE: &str = r#"
<html><body>
  <div class="hero-profile">
    <img class="hero-profile__image" src="https://dmxg5wxfqgb4u.cloudfront.net/styles/athlete_bio_full_body/max.png">
    <h1 class="hero-profile__name">Max Holloway</h1>
    <p class="hero-profile__nickname">"Blessed"</p>
    <p class="hero-profile__division-title">Featherweight Division</p>
    <p class="hero-profile__division-body">25-7-0 (W-L-D)</p>
  </div>
  <div class="c-bio">
    <div class="c-bio__field">
      <div class="c-bio__label">Status</div>
      <div class="c-bio__text">Active</div>
    </div>
    <div class="c-bio__field">
      <div class="c-bio__label">Place of Birth</div>
      <div class="c-bio__text">Waianae, United States</div>
    </div>
    <div class="c-bio__field">
      <div class="c-bio__label">Trains at</div>
      <div class="c-bio__text">Hawaii Elite MMA</div>
    </div>
    <div class="c-bio__field">
      <div class="c-bio__label">Fighting style</div>
      <div class="c-bio__text">Muay Thai</div>
    </div>
    <div class="c-bio__field">
      <div class="c-bio__label">Age</div>
      <div class="c-bio__text"><div class="field field--name-age"><div class="field__item">32</div></div></div>
    </div>
    <div class="c-bio__field">
      <div class="c-bio__label">Height</div>
      <div class="c-bio__text">71.00</div>
    </div>
    <div class="c-bio__field">
      <div class="c-bio__label">Weight</div>
      <div class="c-bio__text">146.00</div>
    </div>
    <div class="c-bio__field">
      <div class="c-bio__label">Octagon Debut</div>
      <div class="c-bio__text">Feb. 4, 2012</div>
    </div>
    <div class="c-bio__field">
      <div class="c-bio__label">Reach</div>
      <div class="c-bio__text">69.00</div>
    </div>
    <div class="c-bio__field">
      <div class="c-bio__label">Leg reach</div>
      <div class="c-bio__text">42.00</div>
    </div>
  </div>
  <div class="stats-records">
    <div class="c-stat-3bar__group">
      <div class="c-stat-3bar__label">KO/TKO</div>
      <div class="c-stat-3bar__value">12 (48%)</div>
    </div>
    <div class="c-stat-3bar__group">
      <div class="c-stat-3bar__label">DEC</div>
      <div class="c-stat-3bar__value">11 (44%)</div>
    </div>
    <div class="c-stat-3bar__group">
      <div class="c-stat-3bar__label">SUB</div>
      <div class="c-stat-3bar__value">2 (8%)</div>
    </div>
    <div class="c-stat-3bar__group">
      <div class="c-stat-3bar__label">Standing</div>
      <div class="c-stat-3bar__value">88%</div>
    </div>
    <div class="c-stat-3bar__group">
      <div class="c-stat-3bar__label">Clinch</div>
      <div class="c-stat-3bar__value">9%</div>
    </div>
    <div class="c-stat-3bar__group">
      <div class="c-stat-3bar__label">Ground</div>
      <div class="c-stat-3bar__value">3%</div>
    </div>
    <svg>
      <text id="e-stat-body_x5F__x5F_head_value">70%</text>
      <text id="e-stat-body_x5F__x5F_body_value">20%</text>
      <text id="e-stat-body_x5F__x5F_leg_value">10%</text>
    </svg>
    <div class="c-stat-compare__group">
      <div class="c-stat-compare__number">15:00</div>
      <div class="c-stat-compare__label">Average fight time</div>
    </div>
    <div class="c-overlap__stats">
      <dt class="c-overlap__stats-text">Sig. Strikes Landed</dt>
      <dd class="c-overlap__stats-value">2605</dd>
    </div>
    <div class="c-overlap__stats">
      <dt class="c-overlap__stats-text">Sig. Strikes Attempted</dt>
      <dd class="c-overlap__stats-value">5455</dd>
    </div>
    <div class="c-overlap__stats">
      <dt class="c-overlap__stats-text">Takedowns Landed</dt>
      <dd class="c-overlap__stats-value">4</dd>
    </div>
    <div class="c-overlap__stats">
      <dt class="c-overlap__stats-text">Takedowns Attempted</dt>
      <dd class="c-overlap__stats-value">13</dd>
    </div>
  </div>
</body></html>
"#;

    #[test]
    fn test_slugify_name() {
        assert_eq!(slugify_name("Max Holloway"), "max-holloway");
    }

    #[test]
    fn test_slugify_name_no_space() {
        assert_eq!(slugify_name("Shogun"), "shogun");
    }

    #[test]
    fn test_slugify_name_only_first_space_replaced() {
        assert_eq!(slugify_name("Jose Aldo Junior"), "jose-aldo junior");
    }

    #[test]
    fn test_athlete_url() {
        assert_eq!(
            athlete_url("https://www.ufc.com/athlete", "Max Holloway"),
            "https://www.ufc.com/athlete/max-holloway"
        );
    }

    #[test]
    fn test_athlete_url_trailing_slash() {
        assert_eq!(
            athlete_url("https://www.ufc.com/athlete/", "Max Holloway"),
            "https://www.ufc.com/athlete/max-holloway"
        );
    }

    #[test]
    fn test_parse_fighter_info_full_page() {
        let info = parse_fighter_info(ATHLETE_PAGE);

        assert_eq!(info.name, "Max Holloway");
        assert_eq!(info.nickname, "\"Blessed\"");
        assert_eq!(info.status, "Active");
        assert_eq!(info.age, "32");
        assert_eq!(info.height, "71.00");
        assert_eq!(info.weight, "146.00");
        assert_eq!(info.arm_reach, "69.00");
        assert_eq!(info.leg_reach, "42.00");
        assert_eq!(info.fighting_style, "Muay Thai");
        assert_eq!(info.division, "Featherweight Division");
        assert_eq!(info.place_of_birth, "Waianae, United States");
        assert_eq!(info.training_camp, "Hawaii Elite MMA");
        assert_eq!(info.octagon_debut, "Feb. 4, 2012");
        assert_eq!(
            info.image_url.as_deref(),
            Some("https://dmxg5wxfqgb4u.cloudfront.net/styles/athlete_bio_full_body/max.png")
        );
    }

    #[test]
    fn test_parse_fighter_info_missing_elements() {
        let html = r#"<html><body>
            <h1 class="hero-profile__name">Max Holloway</h1>
        </body></html>"#;
        let info = parse_fighter_info(html);

        assert_eq!(info.name, "Max Holloway");
        assert_eq!(info.nickname, "");
        assert_eq!(info.status, "");
        assert_eq!(info.age, "");
        assert_eq!(info.image_url, None);
    }

    #[test]
    fn test_parse_fighter_info_empty_document() {
        let info = parse_fighter_info("");
        assert_eq!(info.name, "");
        assert_eq!(info.image_url, None);
    }

    #[test]
    fn test_parse_fighter_stats_full_page() {
        let stats = parse_fighter_stats(ATHLETE_PAGE);

        assert_eq!(stats.record, "25-7-0 (W-L-D)");
        assert_eq!(stats.win_by_method.ko, "12 (48%)");
        assert_eq!(stats.win_by_method.decision, "11 (44%)");
        assert_eq!(stats.win_by_method.submission, "2 (8%)");
        assert_eq!(stats.avg_fight_time, "15:00");
        assert_eq!(stats.sig_strikes_by_position.standing, "88%");
        assert_eq!(stats.sig_strikes_by_position.clinch, "9%");
        assert_eq!(stats.sig_strikes_by_position.ground, "3%");
        assert_eq!(stats.sig_strikes_by_target.head, "70%");
        assert_eq!(stats.sig_strikes_by_target.body, "20%");
        assert_eq!(stats.sig_strikes_by_target.leg, "10%");
        assert_eq!(stats.striking_accuracy.sig_strikes_landed, "2605");
        assert_eq!(stats.striking_accuracy.sig_strikes_attempted, "5455");
        assert_eq!(stats.takedown_accuracy.takedowns_landed, "4");
        assert_eq!(stats.takedown_accuracy.takedowns_attempted, "13");
    }

    #[test]
    fn test_parse_fighter_stats_missing_widgets() {
        let html = r#"<html><body>
            <p class="hero-profile__division-body">25-7-0 (W-L-D)</p>
        </body></html>"#;
        let stats = parse_fighter_stats(html);

        assert_eq!(stats.record, "25-7-0 (W-L-D)");
        assert_eq!(stats.win_by_method.ko, "");
        assert_eq!(stats.avg_fight_time, "");
        assert_eq!(stats.sig_strikes_by_target.head, "");
        assert_eq!(stats.takedown_accuracy.takedowns_attempted, "");
    }

    #[test]
    fn test_fighter_info_serializes_upstream_field_names() {
        let info = parse_fighter_info(ATHLETE_PAGE);
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(json["Name"], "Max Holloway");
        assert_eq!(json["ArmReach"], "69.00");
        assert!(json["ImageURL"].is_string());
    }

    #[test]
    fn test_fighter_info_omits_missing_image_url() {
        let info = parse_fighter_info("<html></html>");
        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("ImageURL").is_none());
    }

    #[test]
    fn test_fighter_stats_serializes_upstream_field_names() {
        let stats = parse_fighter_stats(ATHLETE_PAGE);
        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["WinByMethod"]["KO"], "12 (48%)");
        assert_eq!(json["StrikingAccuracy"]["SigStrikesLanded"], "2605");
    }
}
