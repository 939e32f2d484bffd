// =========================================================
// Client Configuration
// =========================================================

/// Used when no override is baked in at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Build-time environment variable that overrides the API base URL.
pub const API_BASE_URL_ENV: &str = "AROMI_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Reads `AROMI_API_BASE_URL` as captured by the compiler.
    ///
    /// A WASM bundle has no process environment, so the override has to be
    /// fixed when the bundle is built.
    pub fn from_build_env() -> Self {
        Self::from_override(option_env!("AROMI_API_BASE_URL"))
    }

    /// Falls back to the default for a missing or blank override.
    pub fn from_override(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::new(DEFAULT_API_BASE_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_default() {
        let cfg = ClientConfig::from_override(Some("https://api.arogyamitra.app/"));
        assert_eq!(cfg.base_url(), "https://api.arogyamitra.app");
    }

    #[test]
    fn blank_override_uses_default() {
        assert_eq!(
            ClientConfig::from_override(Some("  ")).base_url(),
            DEFAULT_API_BASE_URL
        );
        assert_eq!(
            ClientConfig::from_override(None).base_url(),
            DEFAULT_API_BASE_URL
        );
    }

    #[test]
    fn joins_paths_with_single_slash() {
        let cfg = ClientConfig::new("http://localhost:8000///");
        assert_eq!(cfg.url("/auth/me"), "http://localhost:8000/auth/me");
        assert_eq!(cfg.url("chat"), "http://localhost:8000/chat");
    }
}
