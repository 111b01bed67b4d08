//! Process-wide configuration: scoring parameters, inventory item tables,
//! and career profiles. Everything here follows an initialize-once,
//! read-many lifecycle; the pipeline only ever sees shared references.

pub mod careers;
pub mod inventory;
pub mod scoring;

pub use careers::{CareerProfile, CareerProfileTable};
pub use inventory::{AreaItems, InventoryDefinition, ITEM_COUNT};
pub use scoring::ScoringConfig;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "chaside.toml";

/// Top-level TOML config file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChasideConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Optional career profile overrides for custom cohorts; `None` means
    /// the built-in institutional table.
    #[serde(default)]
    pub careers: Option<BTreeMap<String, CareerProfile>>,
}

impl ChasideConfig {
    pub fn career_table(&self) -> CareerProfileTable {
        match &self.careers {
            Some(profiles) => CareerProfileTable::new(profiles.clone()),
            None => CareerProfileTable::institutional(),
        }
    }
}

/// Parse and validate config from a TOML string.
pub fn parse_and_validate_config(contents: &str) -> Result<ChasideConfig, String> {
    let mut config = toml::from_str::<ChasideConfig>(contents)
        .map_err(|e| format!("failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Err(e) = config.scoring.validate() {
        eprintln!("Warning: invalid scoring config: {}. Using defaults.", e);
        config.scoring = ScoringConfig::default();
    }

    Ok(config)
}

/// Load configuration from a specific path, or from `chaside.toml` in the
/// working directory when no path is given. A missing file and an invalid
/// file both fall back to defaults; only the latter warns.
pub fn load_config(path: Option<&Path>) -> ChasideConfig {
    let path = path.unwrap_or_else(|| Path::new(CONFIG_FILE_NAME));
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("failed to read config file {}: {}", path.display(), e);
            }
            return ChasideConfig::default();
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("loaded config from {}", path.display());
            config
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            ChasideConfig::default()
        }
    }
}
