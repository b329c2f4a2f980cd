//! Devices (breakpoints) and their media queries
//!
//! A [`Devices`] set is the ordered list of viewport buckets a responsive
//! property can be overridden on. Order is fixed **widest-first**: the first
//! device is the base that narrower devices inherit from.
//!
//! ```text
//!  rank 0   desktop   @media only screen
//!  rank 1   tablet    @media only screen and (max-width: 768px)
//!  rank 2   mobile    @media only screen and (max-width: 575px)
//! ```
//!
//! The process-wide set is installed once with [`init_global`] and read with
//! [`global`]. When nothing is installed the built-in three devices are used.

use std::sync::OnceLock;

use crate::config::DeviceSpec;
use crate::error::{Result, WeftError};

/// Process-wide device configuration
static GLOBAL_DEVICES: OnceLock<Devices> = OnceLock::new();

/// Id of the widest built-in device
pub const DESKTOP: &str = "desktop";
/// Id of the medium built-in device
pub const TABLET: &str = "tablet";
/// Id of the narrowest built-in device
pub const MOBILE: &str = "mobile";

/// A single breakpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    id: String,
    rank: usize,
    min_width: Option<u32>,
    max_width: Option<u32>,
    media_query: String,
}

impl Device {
    fn new(id: String, rank: usize, min_width: Option<u32>, max_width: Option<u32>) -> Self {
        let media_query = media_query_for(min_width, max_width);
        Self {
            id,
            rank,
            min_width,
            max_width,
            media_query,
        }
    }

    /// Device identifier, e.g. `"tablet"`
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Position in the widest-first order (0 is the base device)
    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn min_width(&self) -> Option<u32> {
        self.min_width
    }

    pub fn max_width(&self) -> Option<u32> {
        self.max_width
    }

    /// CSS media query this device's styles are emitted under
    pub fn media_query(&self) -> &str {
        &self.media_query
    }
}

/// Build the media query for a pair of optional width bounds.
///
/// Unbounded devices map to the bare `@media only screen` query.
pub fn media_query_for(min_width: Option<u32>, max_width: Option<u32>) -> String {
    let mut query = String::from("@media only screen");
    if let Some(min) = min_width {
        query.push_str(&format!(" and (min-width: {}px)", min));
    }
    if let Some(max) = max_width {
        query.push_str(&format!(" and (max-width: {}px)", max));
    }
    query
}

/// Ordered, validated set of devices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Devices {
    devices: Vec<Device>,
}

impl Devices {
    /// Build a device set from specs listed widest-first.
    ///
    /// # Errors
    ///
    /// Fails when the list is empty, an id repeats, or a device's min width
    /// exceeds its max width.
    pub fn new(specs: impl IntoIterator<Item = DeviceSpec>) -> Result<Self> {
        let mut devices: Vec<Device> = Vec::new();

        for (rank, spec) in specs.into_iter().enumerate() {
            if devices.iter().any(|d| d.id == spec.id) {
                return Err(WeftError::DuplicateDevice(spec.id));
            }
            if let (Some(min_width), Some(max_width)) = (spec.min_width, spec.max_width) {
                if min_width > max_width {
                    return Err(WeftError::InvertedBounds {
                        id: spec.id,
                        min_width,
                        max_width,
                    });
                }
            }
            devices.push(Device::new(spec.id, rank, spec.min_width, spec.max_width));
        }

        if devices.is_empty() {
            return Err(WeftError::NoDevices);
        }

        Ok(Self { devices })
    }

    /// The built-in desktop / tablet / mobile set
    pub fn builtin() -> Self {
        Self {
            devices: vec![
                Device::new(DESKTOP.to_string(), 0, None, None),
                Device::new(TABLET.to_string(), 1, None, Some(768)),
                Device::new(MOBILE.to_string(), 2, None, Some(575)),
            ],
        }
    }

    /// Iterate devices widest-first
    pub fn iter(&self) -> std::slice::Iter<'_, Device> {
        self.devices.iter()
    }

    /// Look up a device by id
    pub fn get(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    /// Rank of a device id, if configured
    pub fn position(&self, id: &str) -> Option<usize> {
        self.devices.iter().position(|d| d.id == id)
    }

    /// The widest device, which every other device falls back to
    pub fn base(&self) -> &Device {
        // Construction rejects empty sets
        &self.devices[0]
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl Default for Devices {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Devices {
    type Item = &'a Device;
    type IntoIter = std::slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Install the process-wide device set.
///
/// Call once at startup, before any style is resolved against [`global`].
///
/// # Errors
///
/// Returns [`WeftError::AlreadyInitialized`] if a set was already installed
/// or [`global`] was already read (which pins the built-in set).
pub fn init_global(devices: Devices) -> Result<()> {
    let count = devices.len();
    GLOBAL_DEVICES
        .set(devices)
        .map_err(|_| WeftError::AlreadyInitialized)?;
    tracing::debug!("Installed global device configuration with {} devices", count);
    Ok(())
}

/// The process-wide device set, falling back to [`Devices::builtin`]
pub fn global() -> &'static Devices {
    GLOBAL_DEVICES.get_or_init(|| {
        tracing::trace!("No device configuration installed, using built-in devices");
        Devices::builtin()
    })
}
