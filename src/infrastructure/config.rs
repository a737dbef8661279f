use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
    pub donki: DonkiSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_listen")]
    pub listen: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DonkiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// NASA's public demo credential; callers should pass their own key.
    #[serde(default = "default_api_key")]
    pub default_api_key: String,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

fn default_listen() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_base_url() -> String {
    "https://api.nasa.gov/DONKI".to_string()
}

fn default_api_key() -> String {
    "DEMO_KEY".to_string()
}

fn default_cache_ttl_secs() -> u64 {
    3600
}

pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server").required(false))
        .add_source(config::Environment::with_prefix("DONKI_DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
