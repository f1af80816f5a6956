use anyhow::Result;
use serde::{Deserialize, Serialize};

// The Flask agent's default port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

fn config_path() -> Result<std::path::PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
    let dir = home.join(".trip-aid");
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("config.json"))
}

/// Load the config file, writing one with defaults on first run.
pub fn load_config() -> Result<Config> {
    let path = config_path()?;
    if path.exists() {
        let bytes = std::fs::read(&path)?;
        let cfg: Config = serde_json::from_slice(&bytes)?;
        return Ok(cfg);
    }

    let default = Config::default();
    let json = serde_json::to_vec_pretty(&default)?;
    std::fs::write(path, json)?;
    Ok(default)
}
