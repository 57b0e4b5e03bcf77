//! Frontend configuration module
//!
//! Build-time settings for the playground client. Every value can be
//! overridden with an environment variable when the bundle is compiled.

use shared::api::DEFAULT_BASE_URL;

/// Frontend configuration for URLs and runtime knobs
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Root of the demo REST API
    pub api_base_url: String,
    /// Documentation URL linked from the dashboard
    pub documentation_url: String,
    /// Minimum level written to the browser console
    pub log_level: String,
    /// Whether API calls and login wait out their artificial latency
    pub simulate_latency: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("PLAYGROUND_API_BASE_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
            documentation_url: option_env!("PLAYGROUND_DOCUMENTATION_URL")
                .unwrap_or("https://yew.rs/docs/getting-started/introduction")
                .to_string(),
            log_level: option_env!("PLAYGROUND_LOG_LEVEL")
                .unwrap_or("info")
                .to_string(),
            simulate_latency: parse_flag(option_env!("PLAYGROUND_SIMULATE_LATENCY"), true),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn documentation_url(&self) -> &str {
        &self.documentation_url
    }

    /// Parsed log level, `Info` when the configured value is not a level name.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    pub fn simulate_latency(&self) -> bool {
        self.simulate_latency
    }
}

fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    match raw.map(str::trim) {
        Some("0" | "false" | "no" | "off") => false,
        Some("1" | "true" | "yes" | "on") => true,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(config.api_base_url().starts_with("http"));
        assert!(config.documentation_url().starts_with("http"));
    }

    #[test]
    fn test_log_level_falls_back_to_info() {
        let config = FrontendConfig {
            log_level: "chatty".to_string(),
            ..FrontendConfig::new()
        };
        assert_eq!(config.log_level(), log::Level::Info);

        let config = FrontendConfig {
            log_level: "debug".to_string(),
            ..FrontendConfig::new()
        };
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_parse_flag() {
        assert!(!parse_flag(Some("false"), true));
        assert!(!parse_flag(Some(" 0 "), true));
        assert!(parse_flag(Some("yes"), false));
        assert!(parse_flag(None, true));
        assert!(!parse_flag(Some("maybe"), false));
    }

    #[test]
    fn test_frontend_config_debug() {
        let debug_str = format!("{:?}", FrontendConfig::new());
        assert!(debug_str.contains("FrontendConfig"));
        assert!(debug_str.contains("api_base_url"));
    }
}
