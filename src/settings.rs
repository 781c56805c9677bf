use config::Config;
use serde::Deserialize;

/// Runtime settings. Defaults match the live site; any field can be
/// overridden through `CAMARA_*` environment variables
/// (e.g. `CAMARA_CACHE_DIR=/var/cache/votes`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,
    pub cache_dir: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "https://www.camara.cl/legislacion/sala_sesiones/votacion_detalle.aspx"
                .into(),
            cache_dir: "temp".into(),
            user_agent: "Mozilla/5.0".into(),
            timeout_secs: 25,
        }
    }
}

impl Settings {
    /// Load settings from the environment, falling back to defaults.
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::Environment::with_prefix("CAMARA"))
            .build()
            .ok()
            .and_then(|config| config.try_deserialize().ok())
            .unwrap_or_default()
    }

    /// Detail-page URL for one vote id.
    pub fn record_url(&self, id: &str) -> String {
        format!("{}?prmIdVotacion={}", self.base_url, id)
    }
}

// ── Tests ──
