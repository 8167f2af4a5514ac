//! Renderer configuration loaded from the environment.
//!
//! All knobs have defaults so the server starts with no `.env` present.
//! The logo lives under a single configured asset root; renderers never
//! probe alternative locations.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_ASSET_ROOT: &str = "./static";
const DEFAULT_LOGO_FILE: &str = "logo.png";
const DEFAULT_CHROMIUM_BIN: &str = "chromium";
const DEFAULT_RENDER_TIMEOUT_SECS: u64 = 20;

/// Configuration shared by every render backend.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Root directory for static render assets.
    pub asset_root: PathBuf,
    /// Logo image filename, resolved relative to `asset_root`.
    pub logo_file: String,
    /// Headless browser binary used by the chromium backend.
    pub chromium_binary: String,
    /// Hard wall-clock bound for a single headless render.
    pub render_timeout: Duration,
}

impl RendererConfig {
    pub fn from_env() -> Self {
        let asset_root = env::var("CD_ASSET_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_ASSET_ROOT));
        let logo_file =
            env::var("CD_LOGO_FILE").unwrap_or_else(|_| DEFAULT_LOGO_FILE.to_string());
        let chromium_binary =
            env::var("CD_CHROMIUM_BIN").unwrap_or_else(|_| DEFAULT_CHROMIUM_BIN.to_string());
        let render_timeout = env::var("CD_RENDER_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_RENDER_TIMEOUT_SECS));

        Self {
            asset_root,
            logo_file,
            chromium_binary,
            render_timeout,
        }
    }

    /// Full path of the logo image.
    pub fn logo_path(&self) -> PathBuf {
        self.asset_root.join(&self.logo_file)
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
            logo_file: DEFAULT_LOGO_FILE.to_string(),
            chromium_binary: DEFAULT_CHROMIUM_BIN.to_string(),
            render_timeout: Duration::from_secs(DEFAULT_RENDER_TIMEOUT_SECS),
        }
    }
}
