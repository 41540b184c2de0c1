//! Layered configuration loading.

use crate::cli::CommonArgs;
use crate::config::{defaults, KilnConfig};
use crate::error::{ConfigError, Result};
use figment::{
    providers::{Env, Format as _, Json, Serialized},
    Figment,
};
use std::path::Path;

impl KilnConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    pub fn load(args: &CommonArgs) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default_config()));

        // An explicit --config path must exist; the conventional
        // kiln.config.json is picked up only when present.
        let config_file = match args.config {
            Some(ref path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.clone()).into());
                }
                Some(path.clone())
            }
            None => {
                let default_path = Path::new("kiln.config.json");
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        if let Some(path) = config_file {
            figment = figment.merge(Json::file(path));
        }

        // Environment variables (KILN_PORT, KILN_OUT_DIR, etc.)
        figment = figment.merge(Env::prefixed("KILN_"));

        let mut config: Self = figment.extract().map_err(|e| {
            ConfigError::InvalidValue {
                field: "configuration".to_string(),
                value: e.to_string(),
                hint: "Check kiln.config.json syntax and field types".to_string(),
            }
        })?;

        // CLI args override everything
        if args.prod {
            config.production = true;
        }
        if let Some(ref dir) = args.out_dir {
            config.out_dir = dir.clone();
        }
        if let Some(ref cwd) = args.cwd {
            config.cwd = Some(cwd.clone());
        }

        Ok(config)
    }

    /// Get default configuration values.
    pub fn default_config() -> Self {
        Self {
            production: false,
            port: defaults::port(),
            source_root: defaults::source_root(),
            core_entry: defaults::core_entry(),
            components_dir: defaults::components_dir(),
            component_entry: defaults::component_entry(),
            markup_entry: defaults::markup_entry(),
            asset_dirs: defaults::asset_dirs(),
            out_dir: defaults::out_dir(),
            watch_extensions: defaults::watch_extensions(),
            bundler: defaults::bundler(),
            cwd: None,
        }
    }
}

impl Default for KilnConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
