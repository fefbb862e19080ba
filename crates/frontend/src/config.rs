use std::{fs, io::ErrorKind, path::Path, time::Duration};

use anyhow::{bail, Context};
use serde::Deserialize;
use tracing::warn;
use wp_client::{AuthMode, ClientConfig};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub backend_url: Option<String>,
    pub api_token: Option<String>,
    pub bind_host: String,
    pub port: u16,
    pub upstream_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: None,
            api_token: None,
            bind_host: "0.0.0.0".into(),
            port: 3000,
            upstream_timeout_secs: 10,
        }
    }
}

impl Settings {
    /// Overlays environment variables. `APP__*` names win over the short ones.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        for key in ["WORDPRESS_URL", "APP__BACKEND_URL"] {
            if let Some(v) = lookup(key) {
                self.backend_url = Some(v);
            }
        }
        for key in ["WORDPRESS_API_TOKEN", "APP__API_TOKEN"] {
            if let Some(v) = lookup(key) {
                self.api_token = Some(v);
            }
        }
        if let Some(v) = lookup("APP__BIND_HOST") {
            self.bind_host = v;
        }
        for key in ["PORT", "APP__PORT"] {
            if let Some(v) = lookup(key) {
                match v.trim().parse::<u16>() {
                    Ok(port) => self.port = port,
                    Err(_) => warn!(key, value = %v, "ignoring invalid port"),
                }
            }
        }
        if let Some(v) = lookup("APP__UPSTREAM_TIMEOUT_SECS") {
            match v.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.upstream_timeout_secs = secs,
                _ => warn!(value = %v, "ignoring invalid upstream timeout"),
            }
        }
    }

    /// Resolves the upstream client configuration. Without a backend URL there
    /// is nothing to serve, so this is the startup gate.
    pub fn client_config(&self) -> anyhow::Result<ClientConfig> {
        let Some(backend_url) = self
            .backend_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
        else {
            bail!("backend url is not configured; set WORDPRESS_URL or backend_url in the config file");
        };

        let auth = AuthMode::from_token(self.api_token.clone());
        let timeout = Duration::from_secs(self.upstream_timeout_secs.max(1));
        ClientConfig::new(backend_url, auth, timeout)
            .with_context(|| format!("invalid backend url '{backend_url}'"))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }
}

pub fn parse_settings(raw: &str) -> anyhow::Result<Settings> {
    Ok(toml::from_str(raw)?)
}

/// Defaults, then the optional TOML file, then the environment.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let mut settings = match fs::read_to_string(path) {
        Ok(raw) => parse_settings(&raw)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?,
        Err(error) if error.kind() == ErrorKind::NotFound => Settings::default(),
        Err(error) => {
            return Err(error)
                .with_context(|| format!("failed to read config file '{}'", path.display()))
        }
    };

    settings.apply_env(|key| std::env::var(key).ok());
    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
