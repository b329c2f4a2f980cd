//! Weft Style Builders
//!
//! Responsive CSS builders for the stored property values of Weft components.
//! Each builder resolves its inputs across the configured devices with
//! [`weft_core::combine`] and fills gaps with the property's default.
//!
//! # Example
//!
//! ```rust
//! use weft_core::{Devices, ResponsiveValue};
//! use weft_style::{responsive_padding, Length, Padding};
//!
//! let devices = Devices::builtin();
//! let padding = ResponsiveValue::new().with("desktop", Padding::all(Length::px(16.0)));
//!
//! let fragment = responsive_padding(&devices, Some(&padding), &Padding::default());
//! assert!(fragment.to_css(".hero").contains("padding-top: 16px;"));
//! ```

pub mod border;
pub mod color;
pub mod grid;
pub mod length;
pub mod shadow;
pub mod spacing;
pub mod text;
pub mod width;

pub use border::{responsive_border, Border, BorderSide, BorderStyle};
pub use color::Color;
pub use grid::{get_indexes, responsive_grid_item, GridLayout};
pub use length::{Length, LengthUnit};
pub use shadow::{responsive_shadow, shadows_to_css, Shadow, ShadowPayload, DEFAULT_SHADOW_COLOR};
pub use spacing::{
    responsive_border_radius, responsive_margin, responsive_padding, BorderRadius, Margin,
    MarginKeyword, MarginSide, Padding,
};
pub use text::{responsive_text_style, FontStyle, TextStyle, TextTransform};
pub use width::{responsive_width, Width};
