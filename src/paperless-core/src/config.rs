use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ENV_URL: &str = "PAPERLESS_URL";
pub const ENV_TOKEN: &str = "PAPERLESS_TOKEN";
pub const ENV_INSECURE_SKIP_VERIFY: &str = "PAPERLESS_INSECURE_SKIP_VERIFY";

/// Connection settings for a Paperless-ngx server
#[derive(Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: String,
    #[serde(default)]
    pub insecure_skip_verify: bool,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            insecure_skip_verify: false,
        }
    }

    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        let config: ClientConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Read `PAPERLESS_URL`, `PAPERLESS_TOKEN` and the optional
    /// `PAPERLESS_INSECURE_SKIP_VERIFY` (`1` or `true`)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let base_url = lookup(ENV_URL).with_context(|| format!("{} is not set", ENV_URL))?;
        let token = lookup(ENV_TOKEN).with_context(|| format!("{} is not set", ENV_TOKEN))?;
        let insecure_skip_verify = lookup(ENV_INSECURE_SKIP_VERIFY)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true"))
            .unwrap_or(false);

        Ok(Self {
            base_url,
            token,
            insecure_skip_verify,
        })
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("insecure_skip_verify", &self.insecure_skip_verify)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/".to_string(),
            token: String::new(),
            insecure_skip_verify: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"base_url": "https://docs.example.com/", "token": "abc123"}}"#
        )
        .unwrap();

        let config = ClientConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.base_url, "https://docs.example.com/");
        assert_eq!(config.token, "abc123");
        assert!(!config.insecure_skip_verify);
    }

    #[test]
    fn test_debug_hides_token() {
        let config = ClientConfig::new("http://paperless:8000", "abc123secret");
        let printed = format!("{:?}", config);

        assert!(!printed.contains("abc123secret"));
        assert!(printed.contains("<redacted>"));
        assert!(printed.contains("http://paperless:8000"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = ClientConfig::load("/nonexistent/paperless.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (ENV_URL, "http://paperless:8000"),
            (ENV_TOKEN, "secret"),
            (ENV_INSECURE_SKIP_VERIFY, "TRUE"),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.base_url, "http://paperless:8000");
        assert_eq!(config.token, "secret");
        assert!(config.insecure_skip_verify);
    }

    #[test]
    fn test_from_lookup_requires_token() {
        let err = ClientConfig::from_lookup(|k| {
            (k == ENV_URL).then(|| "http://paperless:8000".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains(ENV_TOKEN));
    }
}
