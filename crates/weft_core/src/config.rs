//! Device configuration file handling
//!
//! Devices can be declared in TOML, widest device first:
//!
//! ```toml
//! [[devices]]
//! id = "desktop"
//!
//! [[devices]]
//! id = "tablet"
//! max_width = 768
//!
//! [[devices]]
//! id = "mobile"
//! max_width = 575
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::device::Devices;
use crate::error::{Result, WeftError};

/// Top-level device configuration document
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeviceConfig {
    #[serde(default)]
    pub devices: Vec<DeviceSpec>,
}

/// One device entry as written in configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeviceSpec {
    pub id: String,
    #[serde(default)]
    pub min_width: Option<u32>,
    #[serde(default)]
    pub max_width: Option<u32>,
}

impl DeviceConfig {
    /// Parse a configuration document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Validate into an ordered device set
    pub fn into_devices(self) -> Result<Devices> {
        Devices::new(self.devices)
    }
}

impl Devices {
    /// Parse and validate a device set from TOML source
    pub fn from_toml_str(source: &str) -> Result<Self> {
        DeviceConfig::from_toml_str(source)?.into_devices()
    }

    /// Load and validate a device set from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| WeftError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        let devices = Self::from_toml_str(&source)?;
        tracing::debug!(
            "Loaded {} devices from {}",
            devices.len(),
            path.display()
        );
        Ok(devices)
    }
}
