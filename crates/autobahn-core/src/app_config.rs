/// Public endpoint of the autobahn road-information API.
pub const DEFAULT_BASE_URL: &str = "https://verkehr.autobahn.de/o/autobahn";

pub const DEFAULT_USER_AGENT: &str = "autobahn-status/0.1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub base_url: String,
    pub log_level: String,
    pub user_agent: String,
    /// `None` leaves requests without an overall timeout.
    pub request_timeout_secs: Option<u64>,
    /// `None` processes every road at once.
    pub max_concurrent_roads: Option<usize>,
}
