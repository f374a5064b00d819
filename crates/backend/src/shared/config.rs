use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub sheets: SheetsConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub irpv: IrpvConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

/// Remote workbook the dashboard reads from
#[derive(Debug, Deserialize, Clone)]
pub struct SheetsConfig {
    pub document_id: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://docs.google.com/spreadsheets/d".to_string()
}

fn default_cache_ttl() -> u64 {
    300
}

fn default_request_timeout() -> u64 {
    30
}

/// Targets that are not part of the workbook
#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub target_margin_pct: f64,
    pub productivity_target_pct: f64,
    pub efficiency_target_pct: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            target_margin_pct: 15.0,
            productivity_target_pct: 85.0,
            efficiency_target_pct: 100.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct IrpvConfig {
    pub first_year: i32,
    pub last_year: i32,
    /// Per-request upload limit (both files together)
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: usize,
    /// Idle sessions older than this are dropped from memory
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
}

fn default_max_upload_mb() -> usize {
    25
}

fn default_session_ttl_secs() -> u64 {
    3600
}

impl Default for IrpvConfig {
    fn default() -> Self {
        Self {
            first_year: 2023,
            last_year: 2025,
            max_upload_mb: default_max_upload_mb(),
            session_ttl_secs: default_session_ttl_secs(),
        }
    }
}

impl IrpvConfig {
    pub fn years(&self) -> std::ops::RangeInclusive<i32> {
        self.first_year..=self.last_year
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[sheets]
document_id = "1kR3n8VtX0cQ2pW7yZ4aB6dE9fH1jL5mN8oP2qS4uT6w"
base_url = "https://docs.google.com/spreadsheets/d"
cache_ttl_secs = 300
request_timeout_secs = 30

[dashboard]
target_margin_pct = 15.0
productivity_target_pct = 85.0
efficiency_target_pct = 100.0

[irpv]
first_year = 2023
last_year = 2025
max_upload_mb = 25
session_ttl_secs = 3600
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.irpv.first_year > config.irpv.last_year {
        anyhow::bail!(
            "irpv.first_year ({}) is after irpv.last_year ({})",
            config.irpv.first_year,
            config.irpv.last_year
        );
    }
    Ok(config)
}

/// Embedded defaults with a dummy workbook id
#[cfg(test)]
pub fn test_config() -> Config {
    parse_config("[sheets]\ndocument_id = \"test\"\nbase_url = \"http://localhost\"\n")
        .expect("test config must parse")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.sheets.cache_ttl_secs, 300);
        assert_eq!(config.dashboard.target_margin_pct, 15.0);
        assert_eq!(config.irpv.years(), 2023..=2025);
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = parse_config("[sheets]\ndocument_id = \"abc\"\n").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.sheets.base_url, "https://docs.google.com/spreadsheets/d");
        assert_eq!(config.sheets.request_timeout_secs, 30);
        assert_eq!(config.dashboard.efficiency_target_pct, 100.0);
        assert_eq!(config.irpv.max_upload_mb, 25);
        assert_eq!(config.irpv.session_ttl_secs, 3600);
    }

    #[test]
    fn test_inverted_year_range_is_rejected() {
        let text = "[sheets]\ndocument_id = \"abc\"\n[irpv]\nfirst_year = 2026\nlast_year = 2024\n";
        assert!(parse_config(text).is_err());
    }
}
