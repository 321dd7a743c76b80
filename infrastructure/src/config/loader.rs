//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_FILES: &[&str] = &["solver.toml", ".solver.toml"];

/// Environment variables mapped onto `[endpoint]` keys (later entries win)
const ENV_KEYS: &[(&str, &str)] = &[
    ("API_KEY", "endpoint.api_key"),
    ("OPENAI_API_KEY", "endpoint.api_key"),
    ("API_BASE", "endpoint.api_base"),
    ("MODEL_NAME", "endpoint.model"),
];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `MODEL_NAME`, `API_BASE`, `OPENAI_API_KEY` (or `API_KEY`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./solver.toml` or `./.solver.toml`
    /// 4. Global: `~/.config/quorum-solver/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::with_env(Self::files(config_path)).extract().map_err(Box::new)
    }

    /// Load from an explicit file only (plus defaults), ignoring the environment
    pub fn load_file(path: &Path) -> Result<FileConfig, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration plus the environment (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        Self::with_env(Figment::new().merge(Serialized::defaults(FileConfig::default())))
            .extract()
            .map_err(Box::new)
    }

    fn files(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    fn with_env(mut figment: Figment) -> Figment {
        for (var, key) in ENV_KEYS {
            let target = *key;
            figment = figment.merge(
                Env::raw()
                    .only(&[*var])
                    .map(move |_| target.to_string().into()),
            );
        }
        figment
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/quorum-solver/config.toml` when set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("quorum-solver").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config sources in priority order (for the `config` command)
    pub fn describe_sources(config_path: Option<&PathBuf>) -> Vec<String> {
        let mut lines = Vec::new();

        for (var, _) in ENV_KEYS.iter().rev() {
            let mark = if std::env::var_os(var).is_some() {
                "SET  "
            } else {
                "     "
            };
            lines.push(format!("[{}] Env:     {}", mark, var));
        }

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            lines.push(format!("[{}] Explicit: {}", mark, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("[FOUND] Project: {}", path.display())),
            None => lines.push("[     ] Project: ./solver.toml or ./.solver.toml".to_string()),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("[{}] Global:  {}", mark, path.display()));
        }

        lines.push("[     ] Default: built-in defaults".to_string());
        lines
    }
}
