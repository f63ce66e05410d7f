//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Upstream used when `VENDOO_API_URL` is not set
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the Vendoo API that `/auth` and `/api` are proxied to
    /// Example: https://api.vendoo.app
    pub api_base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::var("VENDOO_API_URL").ok())
    }

    fn from_vars(api_base_url: Option<String>) -> Self {
        let api_base_url = api_base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self { api_base_url }
    }

    /// Check if an upstream other than the local default is configured
    pub fn has_custom_api(&self) -> bool {
        self.api_base_url != DEFAULT_API_BASE_URL
    }

    /// Join an API path onto the upstream base URL
    pub fn upstream_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_base_url, path)
        } else {
            format!("{}/{}", self.api_base_url, path)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_url_falls_back_to_default() {
        let config = Config::from_vars(None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(!config.has_custom_api());
    }

    #[test]
    fn test_blank_api_url_is_ignored() {
        let config = Config::from_vars(Some("   ".to_string()));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = Config::from_vars(Some("https://api.vendoo.app/".to_string()));
        assert_eq!(config.api_base_url, "https://api.vendoo.app");
        assert!(config.has_custom_api());
    }

    #[test]
    fn test_upstream_url_joins_paths() {
        let config = Config::from_vars(Some("https://api.vendoo.app".to_string()));
        assert_eq!(
            config.upstream_url("/auth/login"),
            "https://api.vendoo.app/auth/login"
        );
        assert_eq!(
            config.upstream_url("api/categories"),
            "https://api.vendoo.app/api/categories"
        );
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment
        let config = Config::from_env();
        assert!(!config.api_base_url.is_empty());
    }
}
