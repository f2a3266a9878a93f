//! Process-wide settings.
//!
//! Built once at startup and shared read-only; nothing mutates a
//! `Settings` after construction.

use std::time::Duration;

/// Default DataForSEO API URL.
pub const DEFAULT_SERP_URL: &str = "https://api.dataforseo.com/v3";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3001;

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Top-level application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub serp: SerpSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            serp: SerpSettings::default(),
        }
    }
}

impl Settings {
    /// Both credential halves, if configured.
    pub fn credentials(&self) -> Option<Credentials> {
        self.serp.credentials()
    }

    /// Whether the real-data path is available at all.
    pub fn has_credentials(&self) -> bool {
        self.credentials().is_some()
    }
}

/// Search provider settings.
#[derive(Debug, Clone)]
pub struct SerpSettings {
    pub base_url: String,
    pub login: Option<String>,
    pub password: Option<String>,
    /// Delay between task submission and the first retrieval.
    pub initial_wait: Duration,
    /// Total number of retrievals attempted per task.
    pub poll_attempts: u32,
    pub request_timeout: Duration,
}

impl Default for SerpSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERP_URL.to_string(),
            login: None,
            password: None,
            initial_wait: Duration::from_secs(5),
            poll_attempts: 1,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl SerpSettings {
    /// Settings with the given credential pair and defaults elsewhere.
    pub fn with_credentials(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: Some(login.into()),
            password: Some(password.into()),
            ..Self::default()
        }
    }

    /// Blank values count as absent.
    pub fn credentials(&self) -> Option<Credentials> {
        let login = self.login.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let password = self.password.as_deref().filter(|s| !s.trim().is_empty())?;

        Some(Credentials {
            login: login.to_string(),
            password: password.to_string(),
        })
    }
}

/// Basic-auth credential pair for the search provider.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials() {
        let settings = Settings::default();
        assert!(settings.credentials().is_none());
        assert!(!settings.has_credentials());
    }

    #[test]
    fn test_half_credentials_are_absent() {
        let mut serp = SerpSettings::default();
        serp.login = Some("user@example.com".to_string());
        assert!(serp.credentials().is_none());

        serp.login = None;
        serp.password = Some("secret".to_string());
        assert!(serp.credentials().is_none());
    }

    #[test]
    fn test_blank_credentials_are_absent() {
        let serp = SerpSettings::with_credentials("  ", "secret");
        assert!(serp.credentials().is_none());

        let serp = SerpSettings::with_credentials("user", "");
        assert!(serp.credentials().is_none());
    }

    #[test]
    fn test_full_credentials() {
        let serp = SerpSettings::with_credentials("user", "secret");
        let creds = serp.credentials().unwrap();
        assert_eq!(creds.login, "user");
        assert_eq!(creds.password, "secret");
        assert!(!format!("{:?}", creds).contains("secret"));
    }
}
