use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub carousel: CarouselConfig,
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the REST backend. Empty means "same origin as the page".
    #[serde(default)]
    pub base: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CarouselConfig {
    pub interval_ms: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationsConfig {
    pub ttl_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base = ""

[carousel]
interval_ms = 5000

[notifications]
ttl_ms = 5000
"#;

static CONFIG: Lazy<AppConfig> = Lazy::new(load_config);

/// Load configuration
///
/// The embedded defaults can be overridden at build time:
/// `DN_API_BASE=https://api.example.com trunk build`
pub fn load_config() -> AppConfig {
    let mut config = parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("Embedded config is invalid, using hardcoded values: {}", e);
        AppConfig {
            api: ApiConfig {
                base: String::new(),
            },
            carousel: CarouselConfig { interval_ms: 5000 },
            notifications: NotificationsConfig { ttl_ms: 5000 },
        }
    });

    if let Some(base) = option_env!("DN_API_BASE") {
        config.api.base = base.trim_end_matches('/').to_string();
    }

    config
}

pub fn parse_config(source: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(source)
}

/// Cached application configuration
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.base, "");
        assert_eq!(config.carousel.interval_ms, 5000);
        assert_eq!(config.notifications.ttl_ms, 5000);
    }

    #[test]
    fn test_api_base_is_optional() {
        let config = parse_config(
            r#"
            [api]

            [carousel]
            interval_ms = 3000

            [notifications]
            ttl_ms = 1000
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base, "");
        assert_eq!(config.carousel.interval_ms, 3000);
    }
}
