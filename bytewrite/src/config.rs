//! Configuration file loading
//!
//! Settings are read from a TOML file such as:
//!
//! ```toml
//! samples = "/usr/share/bytewrite/samples"
//!
//! [pipeline]
//! greyscale = true
//! ink_ratio = 0.575
//! downsample = 4
//! ```
//!
//! Every key is optional. A file that is missing or does not parse is
//! reported with a warning and the defaults are used instead.

use bytewrite_recog::PipelineOptions;
use config::File;
use log::warn;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "bytewrite.toml";

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Config {
    /// Directory of reference samples, laid out as `<dir>/<letter>/*`
    #[serde(default)]
    pub samples: Option<PathBuf>,
    #[serde(default)]
    pub pipeline: PipelineOptions,
}

/// Load configuration from `path`, falling back to defaults on failure.
pub fn load_config(path: &Path) -> Config {
    match config::Config::builder()
        .add_source(File::from(path))
        .build()
    {
        Ok(c) => match c.try_deserialize() {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Incompatible configuration in {}: {}\nUsing default config",
                    path.display(),
                    e
                );
                Config::default()
            }
        },
        Err(e) => {
            warn!(
                "Failed to load config file {}: {}\nUsing default config",
                path.display(),
                e
            );
            Config::default()
        }
    }
}
