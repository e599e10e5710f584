//! Process-wide defaults read from the environment.

/// Port used for the local base URL when `PORT` is unset.
pub const DEFAULT_PORT: &str = "8081";

/// Environment variable holding the local server port.
pub const PORT_VAR: &str = "PORT";

/// Environment variable holding the user API key.
pub const API_KEY_VAR: &str = "USER_API_KEY";

/// Snapshot of the environment fallbacks, taken once at startup.
///
/// Empty variables are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvDefaults {
    /// Port for `http://localhost:<port>` when no `--url` is given.
    pub port: Option<String>,
    /// API key used when no `--key` is given.
    pub api_key: Option<String>,
}

impl EnvDefaults {
    /// Read the defaults from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the defaults through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());

        Self {
            port: non_empty(PORT_VAR),
            api_key: non_empty(API_KEY_VAR),
        }
    }

    /// Port to target when no URL is given.
    pub fn port(&self) -> &str {
        self.port.as_deref().unwrap_or(DEFAULT_PORT)
    }

    /// Base URL of a server on this machine.
    pub fn local_base_url(&self) -> String {
        format!("http://localhost:{}", self.port())
    }
}
