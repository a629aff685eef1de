use serde::{Deserialize, Serialize};

use std::{env, fs, path::Path, time::Duration};

use crate::dto::NoteId;

const fn default_listen_port() -> u16 {
    3000
}

const fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: Api,
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
    #[serde(with = "humantime_serde", default = "default_request_timeout")]
    pub request_timeout: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Api {
    pub base_url: String,
}

impl Api {
    /// Collection endpoint, `<base>/notes/`.
    pub fn notes_url(&self) -> String {
        format!("{}/notes/", self.base_url.trim_end_matches('/'))
    }

    /// Item endpoint, `<base>/notes/<id>/`, with the id as one encoded segment.
    pub fn note_url(&self, id: &NoteId) -> String {
        format!("{}{}/", self.notes_url(), id.path_segment())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: Api {
                base_url: "http://127.0.0.1:8000/api".to_string(),
            },
            listen_port: default_listen_port(),
            request_timeout: default_request_timeout(),
        }
    }
}

// Flat view of `Config` for envy, which cannot fill nested structs
#[derive(Debug, Deserialize)]
struct EnvConfig {
    api_base_url: String,
    #[serde(default = "default_listen_port")]
    listen_port: u16,
    #[serde(with = "humantime_serde", default = "default_request_timeout")]
    request_timeout: Duration,
}

fn load_from_env() -> Result<Config, Box<dyn std::error::Error>> {
    let env_cfg = envy::prefixed("NOTES_CLIENT_")
        .from_env::<EnvConfig>()
        .map_err(|e| format!("Failed to read NOTES_CLIENT_* environment variables: {e}"))?;

    Ok(Config {
        api: Api {
            base_url: env_cfg.api_base_url,
        },
        listen_port: env_cfg.listen_port,
        request_timeout: env_cfg.request_timeout,
    })
}

fn load_from_file(path: &str) -> Result<Config, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    serde_yaml::from_str(&contents).map_err(Into::into)
}

// Tried in order after NOTES_CLIENT_CONFIG
const CONFIG_FILES: [&str; 2] = ["config.yaml", "config.example.yaml"];

pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    let requested = env::var("NOTES_CLIENT_CONFIG").ok();

    if let Some(path) = requested.as_deref() {
        if Path::new(path).exists() {
            tracing::info!("Reading notes client config from '{}'", path);
            return load_from_file(path);
        }
        tracing::warn!("NOTES_CLIENT_CONFIG names '{}', which does not exist", path);
    }

    for path in CONFIG_FILES {
        if !Path::new(path).exists() {
            continue;
        }
        if path == "config.example.yaml" {
            tracing::warn!(
                "Notes client is running on 'config.example.yaml'; copy it to 'config.yaml' \
                 and point api.base_url at the real notes service"
            );
        } else {
            tracing::info!("Reading notes client config from '{}'", path);
        }
        return load_from_file(path);
    }

    tracing::info!("No notes client config file found, reading NOTES_CLIENT_* variables");
    load_from_env().map_err(|e| {
        format!(
            "Notes client has no configuration: no file at NOTES_CLIENT_CONFIG, \
             'config.yaml' or 'config.example.yaml', and {e}"
        )
        .into()
    })
}
