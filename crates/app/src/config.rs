//! Demo host configuration loading

use scratchoff_config::EraseConfig;
use tracing::{info, warn};

/// Load the erase configuration for the demo card
///
/// The first CLI argument, when present, names a JSON file with an
/// [`EraseConfig`]; a missing or malformed file falls back to defaults.
/// Dimensions left unset (or invalid) are filled from the card size so
/// the overlay always covers the card.
pub fn load_erase_config(card_width: i32, card_height: i32) -> EraseConfig {
    let mut config = match std::env::args().nth(1) {
        Some(path) => read_config_file(&path).unwrap_or_default(),
        None => EraseConfig::default(),
    };

    if !config.has_valid_dimensions() {
        config.width = card_width;
        config.height = card_height;
    }
    config
}

fn read_config_file(path: &str) -> Option<EraseConfig> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            warn!("could not read config file {path}: {err}");
            return None;
        }
    };
    match serde_json::from_str(&data) {
        Ok(config) => {
            info!("loaded erase config from {path}");
            Some(config)
        }
        Err(err) => {
            warn!("malformed config file {path}: {err}");
            None
        }
    }
}
