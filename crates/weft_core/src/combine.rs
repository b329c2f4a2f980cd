//! Responsive style combinator
//!
//! Combines any number of independent responsive inputs into one
//! [`StyleFragment`]:
//!
//! ```text
//!  inputs ──resolve per input──▶ rows (one per device) ──join──▶ Style
//!                                                                  │
//!                         StyleFragment[device.media_query] ◀──merge
//! ```
//!
//! Inputs are either a tuple of up to six `Option<&ResponsiveValue<_>>` with
//! independent value types, or a slice / array of inputs sharing one type.
//! A `None` input behaves like an empty responsive value: it shows up as
//! `None` in every row and the join function substitutes its own default.
//!
//! # Example
//!
//! ```rust
//! use weft_core::{combine, Devices, InheritWider, ResponsiveValue, Style};
//!
//! let devices = Devices::builtin();
//! let width = ResponsiveValue::new().with("desktop", 50u32).with("mobile", 100u32);
//!
//! let fragment = combine(&devices, &(Some(&width),), &InheritWider, |(width,)| {
//!     Style::new().with("width", format!("{}%", width.unwrap_or(100)))
//! });
//!
//! let tablet = fragment.rule("@media only screen and (max-width: 768px)").unwrap();
//! assert_eq!(tablet.get("width").and_then(|v| v.as_str()), Some("50%"));
//! ```

use crate::device::{self, Device, Devices};
use crate::fallback::{FallbackStrategy, InheritWider};
use crate::responsive::{resolve_across_devices, ResponsiveValue};
use crate::style::{Style, StyleFragment};

/// A set of responsive inputs that can be resolved row-by-row
pub trait ResponsiveInputs<S: ?Sized> {
    /// Per-device values, one slot per input
    type Row;

    /// Resolve every input and align the results by device, widest-first
    fn resolve_rows(&self, devices: &Devices, strategy: &S) -> Vec<Self::Row>;
}

macro_rules! impl_responsive_inputs {
    ($($value:ident => $input:ident),+) => {
        impl<'a, S, $($value),+> ResponsiveInputs<S> for ($(Option<&'a ResponsiveValue<$value>>,)+)
        where
            S: ?Sized,
            $($value: Clone, S: FallbackStrategy<$value>,)+
        {
            type Row = ($(Option<$value>,)+);

            fn resolve_rows(&self, devices: &Devices, strategy: &S) -> Vec<Self::Row> {
                let ($($input,)+) = *self;
                $(let mut $input = resolve_across_devices(devices, $input, strategy).into_values();)+
                devices
                    .iter()
                    .map(|_| ($($input.next().flatten(),)+))
                    .collect()
            }
        }
    };
}

impl_responsive_inputs!(A => a);
impl_responsive_inputs!(A => a, B => b);
impl_responsive_inputs!(A => a, B => b, C => c);
impl_responsive_inputs!(A => a, B => b, C => c, D => d);
impl_responsive_inputs!(A => a, B => b, C => c, D => d, E => e);
impl_responsive_inputs!(A => a, B => b, C => c, D => d, E => e, F => f);

impl<'a, S, V> ResponsiveInputs<S> for [Option<&'a ResponsiveValue<V>>]
where
    S: FallbackStrategy<V> + ?Sized,
    V: Clone,
{
    type Row = Vec<Option<V>>;

    fn resolve_rows(&self, devices: &Devices, strategy: &S) -> Vec<Self::Row> {
        let mut columns: Vec<_> = self
            .iter()
            .map(|input| resolve_across_devices(devices, *input, strategy).into_values())
            .collect();

        devices
            .iter()
            .map(|_| columns.iter_mut().map(|c| c.next().flatten()).collect())
            .collect()
    }
}

impl<'a, S, V, const N: usize> ResponsiveInputs<S> for [Option<&'a ResponsiveValue<V>>; N]
where
    S: FallbackStrategy<V> + ?Sized,
    V: Clone,
{
    type Row = Vec<Option<V>>;

    fn resolve_rows(&self, devices: &Devices, strategy: &S) -> Vec<Self::Row> {
        self[..].resolve_rows(devices, strategy)
    }
}

/// Align inputs by device and reduce each row.
///
/// Always yields one result per configured device, widest-first.
pub fn join<'d, I, S, F, T>(
    devices: &'d Devices,
    inputs: &I,
    strategy: &S,
    mut reducer: F,
) -> Vec<(&'d Device, T)>
where
    I: ResponsiveInputs<S> + ?Sized,
    S: ?Sized,
    F: FnMut(I::Row) -> T,
{
    devices
        .iter()
        .zip(inputs.resolve_rows(devices, strategy))
        .map(|(device, row)| (device, reducer(row)))
        .collect()
}

/// Build a style fragment from responsive inputs.
///
/// Each device's joined style is shallow-merged under that device's media
/// query. Devices sharing a media query merge in device order, so the
/// narrower device wins on key collisions.
pub fn combine<I, S, F>(devices: &Devices, inputs: &I, strategy: &S, join_fn: F) -> StyleFragment
where
    I: ResponsiveInputs<S> + ?Sized,
    S: ?Sized,
    F: FnMut(I::Row) -> Style,
{
    let mut fragment = StyleFragment::new();
    for (device, style) in join(devices, inputs, strategy, join_fn) {
        fragment.merge_rule(device.media_query(), style);
    }
    fragment
}

/// [`combine`] against the global devices, inheriting from wider devices
pub fn combine_default<I, F>(inputs: &I, join_fn: F) -> StyleFragment
where
    I: ResponsiveInputs<InheritWider> + ?Sized,
    F: FnMut(I::Row) -> Style,
{
    combine(device::global(), inputs, &InheritWider, join_fn)
}
