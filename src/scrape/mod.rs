//! Scraping module: one extractor per target page
//!
//! Each extractor is split into a pure `parse_*` function (markup in, typed
//! record out) and a [`Scraper`] method that fetches the page first. The
//! parse functions never fail; missing elements become empty fields. The
//! methods fail only on fetch errors.

mod dom;
mod fetcher;
mod fighter;
mod rankings;
mod records;
mod titleholders;

pub use fetcher::{build_http_client, fetch_html};
pub use fighter::{
    parse_fighter_info, parse_fighter_stats, slugify_name, Fighter, FighterInfo, FighterStats,
    SigStrikesByPosition, SigStrikesByTarget, StrikingAccuracy, TakedownAccuracy, WinByMethod,
    DEFAULT_FIGHTER,
};
pub use rankings::{parse_rankings, DivisionRanking, Rankings};
pub use records::{parse_records, RecordCategory, RecordEntry, Records};
pub use titleholders::{parse_titleholders, Titleholder, Titleholders};

use crate::config::Config;
use crate::Result;
use reqwest::Client;

/// Handle over a configured HTTP client and the endpoint URLs
///
/// Cheap to clone; the underlying `reqwest::Client` shares its connection
/// pool between clones.
#[derive(Debug, Clone)]
pub struct Scraper {
    client: Client,
    config: Config,
}

impl Scraper {
    /// Creates a scraper from a configuration
    pub fn new(config: Config) -> Result<Self> {
        let client = build_http_client(&config.http)?;
        Ok(Scraper { client, config })
    }

    /// The configuration this scraper was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scrapes a fighter's biographical details from their athlete page
    pub async fn fighter_info(&self, name: &str) -> Result<FighterInfo> {
        let url = fighter::athlete_url(&self.config.endpoints.athlete_base_url, name);
        tracing::info!("Fetching fighter bio: {}", url);
        let html = fetch_html(&self.client, &url).await?;
        Ok(parse_fighter_info(&html))
    }

    /// Scrapes a fighter's career statistics from their athlete page
    ///
    /// Fetches the page independently of [`fighter_info`](Self::fighter_info)
    /// even though both read the same URL.
    pub async fn fighter_stats(&self, name: &str) -> Result<FighterStats> {
        let url = fighter::athlete_url(&self.config.endpoints.athlete_base_url, name);
        tracing::info!("Fetching fighter stats: {}", url);
        let html = fetch_html(&self.client, &url).await?;
        Ok(parse_fighter_stats(&html))
    }

    /// Scrapes a fighter's bio and stats concurrently
    ///
    /// Both fetches are in flight before either is awaited. A half whose
    /// fetch fails is logged and degrades to `None`; the other half is kept.
    pub async fn fighter(&self, name: &str) -> Result<Fighter> {
        let (info, stats) = tokio::join!(self.fighter_info(name), self.fighter_stats(name));

        Ok(Fighter {
            info: degraded("fighter bio", info),
            stats: degraded("fighter stats", stats),
        })
    }

    /// Scrapes the divisional rankings page
    pub async fn rankings(&self) -> Result<Rankings> {
        let url = &self.config.endpoints.rankings_url;
        tracing::info!("Fetching rankings: {}", url);
        let html = fetch_html(&self.client, url).await?;
        Ok(parse_rankings(&html))
    }

    /// Scrapes the current titleholders from the athletes listing page
    pub async fn titleholders(&self) -> Result<Titleholders> {
        let url = &self.config.endpoints.athletes_url;
        tracing::info!("Fetching titleholders: {}", url);
        let html = fetch_html(&self.client, url).await?;
        Ok(parse_titleholders(&html))
    }

    /// Scrapes the career record leaderboards from the statleaders host
    pub async fn records(&self) -> Result<Records> {
        let url = &self.config.endpoints.statleaders_url;
        tracing::info!("Fetching records: {}", url);
        let html = fetch_html(&self.client, url).await?;
        Ok(parse_records(&html))
    }
}

/// Collapses a failed half of the composite to `None`, keeping the error
/// visible in the logs
fn degraded<T>(what: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Scraping {} failed: {}", what, e);
            None
        }
    }
}
