use serde::Deserialize;

/// Main configuration structure for Cageside
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub endpoints: EndpointsConfig,
}

/// HTTP client behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Total request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            user_agent: format!("cageside/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Endpoint URLs for the scraped pages
///
/// The athlete base URL has the fighter's slug appended; the other three are
/// fetched as-is. The statleaders endpoint lives on a different host than the
/// rest and is plain HTTP upstream.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    /// Base URL for athlete pages, without a trailing slash
    #[serde(rename = "athlete-base-url")]
    pub athlete_base_url: String,

    /// Divisional rankings page
    #[serde(rename = "rankings-url")]
    pub rankings_url: String,

    /// Athletes listing page (current titleholders)
    #[serde(rename = "athletes-url")]
    pub athletes_url: String,

    /// Career statistics leaderboard
    #[serde(rename = "statleaders-url")]
    pub statleaders_url: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        EndpointsConfig {
            athlete_base_url: "https://www.ufc.com/athlete".to_string(),
            rankings_url: "https://www.ufc.com/rankings".to_string(),
            athletes_url: "https://www.ufc.com/athletes".to_string(),
            statleaders_url: "http://statleaders.ufc.com/en/career".to_string(),
        }
    }
}
