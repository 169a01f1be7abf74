use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: DEFAULT_PORT, worker_threads: None }
    }
}

/// The single shared credential pair and the static bearer token handed out on login.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AuthConfig {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_password")]
    pub password: String,
    #[serde(default = "default_token")]
    pub token: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
            token: default_token(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_username() -> String {
    "admin".into()
}

fn default_password() -> String {
    "secret".into()
}

fn default_token() -> String {
    "mytoken".into()
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Config file (`CONFIG_PATH`, default `config.toml`) when present, otherwise
    /// defaults; then `SERVER_HOST` / `PORT` / `TOKIO_WORKER_THREADS` on top.
    /// An unreadable file or an unparsable variable is an error.
    pub fn load_or_env() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        let mut cfg = if std::path::Path::new(&path).exists() {
            load_from_file(&path)?
        } else {
            Self::default()
        };
        cfg.apply_env_overrides(|key| std::env::var(key).ok())?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Overlay environment values read through `lookup`. Blank values are skipped.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(host) = var("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("PORT") {
            self.server.port = port
                .trim()
                .parse::<u16>()
                .map_err(|e| anyhow!("PORT={port:?} is not a valid port: {e}"))?;
        }
        if let Some(raw) = var("TOKIO_WORKER_THREADS") {
            let threads = raw
                .trim()
                .parse::<usize>()
                .map_err(|e| anyhow!("TOKIO_WORKER_THREADS={raw:?} is not a count: {e}"))?;
            self.server.worker_threads = Some(threads);
        }
        Ok(())
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.auth.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        if self.worker_threads == Some(0) {
            self.worker_threads = None;
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AuthConfig {
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(anyhow!("auth.username and auth.password must not be empty"));
        }
        if self.token.trim().is_empty() || self.token.contains(' ') {
            return Err(anyhow!("auth.token must be a non-empty string without spaces"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let mut cfg = parse("").unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.port, 5000);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.auth, AuthConfig::default());
        assert_eq!(cfg.auth.token, "mytoken");
    }

    #[test]
    fn sections_override_defaults() {
        let cfg = parse(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8088
            worker_threads = 2

            [auth]
            token = "brew-token"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.bind_addr(), "127.0.0.1:8088");
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert_eq!(cfg.auth.username, "admin");
        assert_eq!(cfg.auth.token, "brew-token");
    }

    #[test]
    fn zero_port_rejected() {
        let mut cfg = parse("[server]\nport = 0\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn blank_credentials_rejected() {
        let mut cfg = parse("[auth]\nusername = \"  \"\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = parse("[auth]\ntoken = \"two words\"\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string())
    }

    #[test]
    fn env_overrides_win_over_file() {
        let mut cfg = parse("[server]\nhost = \"127.0.0.1\"\nport = 8088\n").unwrap();
        cfg.apply_env_overrides(env(&[("PORT", "9090"), ("TOKIO_WORKER_THREADS", "3")]))
            .unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.bind_addr(), "127.0.0.1:9090");
        assert_eq!(cfg.server.worker_threads, Some(3));

        cfg.apply_env_overrides(env(&[("SERVER_HOST", "10.0.0.5"), ("PORT", " ")])).unwrap();
        assert_eq!(cfg.server.bind_addr(), "10.0.0.5:9090");
    }

    #[test]
    fn unparsable_env_values_are_errors() {
        let mut cfg = AppConfig::default();
        assert!(cfg.apply_env_overrides(env(&[("PORT", "abc")])).is_err());
        assert!(cfg.apply_env_overrides(env(&[("PORT", "70000")])).is_err());
        assert!(cfg.apply_env_overrides(env(&[("TOKIO_WORKER_THREADS", "-2")])).is_err());
        assert_eq!(cfg.server.port, DEFAULT_PORT);

        cfg.apply_env_overrides(env(&[("PORT", "0")])).unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }
}
