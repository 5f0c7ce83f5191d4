use serde::Deserialize;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origins() -> String {
    "http://localhost:5173".to_string()
}

/// Process configuration read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Comma separated list of allowed origins.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: String,
    #[serde(default)]
    pub seed_demo_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        if let Err(error) = dotenvy::dotenv() {
            tracing::debug!(%error, "no .env file loaded");
        }
        envy::from_env::<AppConfig>()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn allowed_origins(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}
