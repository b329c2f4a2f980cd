//! Weft Core Runtime
//!
//! This crate provides the responsive resolution engine behind the Weft
//! site-builder runtime:
//!
//! - **Devices**: the ordered breakpoints (widest-first) and their media queries
//! - **Responsive Values**: sparse per-device property overrides
//! - **Fallback Strategies**: how a device without an override gets a value
//! - **Style Combinator**: joins responsive inputs into media-query keyed styles
//!
//! # Example
//!
//! ```rust
//! use weft_core::{combine, Devices, InheritWider, ResponsiveValue, Style};
//!
//! let devices = Devices::builtin();
//!
//! // Padding overridden on desktop and mobile only
//! let padding = ResponsiveValue::new().with("desktop", 24u32).with("mobile", 8u32);
//!
//! let fragment = combine(&devices, &(Some(&padding),), &InheritWider, |(padding,)| {
//!     Style::new().with("padding", format!("{}px", padding.unwrap_or(0)))
//! });
//!
//! // Tablet inherits desktop's value
//! let css = fragment.to_css(".card");
//! assert!(css.contains("@media only screen and (max-width: 768px) { .card { padding: 24px; } }"));
//! ```

pub mod combine;
pub mod config;
pub mod device;
pub mod error;
pub mod fallback;
pub mod responsive;
pub mod style;

pub use combine::{combine, combine_default, join, ResponsiveInputs};
pub use config::{DeviceConfig, DeviceSpec};
pub use device::{Device, Devices, DESKTOP, MOBILE, TABLET};
pub use error::{Result, WeftError};
pub use fallback::{FallbackStrategy, InheritWider, NoFallback, WithDefault};
pub use responsive::{
    find_device_override, resolve_across_devices, DeviceOverride, Resolved, ResolvedEntry,
    ResponsiveValue,
};
pub use style::{CssValue, Style, StyleFragment};
