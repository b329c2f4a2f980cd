//! Fallback strategies for devices without an explicit override
//!
//! When a responsive value has no entry for a device, the resolver asks a
//! [`FallbackStrategy`] to fill the gap. The strategy sees the *carry* value
//! (the last explicit value found at a wider device) and the device being
//! resolved. Returning `None` leaves the device unresolved, which means
//! "emit nothing for this breakpoint".
//!
//! Any closure `Fn(Option<&V>, &Device) -> Option<V>` is a strategy:
//!
//! ```rust
//! use weft_core::{resolve_across_devices, Devices, ResponsiveValue};
//!
//! let devices = Devices::builtin();
//! let columns = ResponsiveValue::new().with("desktop", 4u32);
//!
//! // Halve the inherited column count on every narrower device
//! let halve = |carry: Option<&u32>, _device: &weft_core::Device| carry.map(|c| (c / 2).max(1));
//! let resolved = resolve_across_devices(&devices, Some(&columns), &halve);
//!
//! assert_eq!(resolved.values().collect::<Vec<_>>(), vec![Some(&4), Some(&2), Some(&2)]);
//! ```

use crate::device::Device;

/// Fills a device's value when it has no explicit override
pub trait FallbackStrategy<V> {
    /// Value for `device`, given the carry value from wider devices
    fn fallback(&self, carry: Option<&V>, device: &Device) -> Option<V>;
}

impl<V, F> FallbackStrategy<V> for F
where
    F: Fn(Option<&V>, &Device) -> Option<V>,
{
    fn fallback(&self, carry: Option<&V>, device: &Device) -> Option<V> {
        self(carry, device)
    }
}

/// Inherit the nearest wider device's explicit value (the default)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InheritWider;

impl<V: Clone> FallbackStrategy<V> for InheritWider {
    fn fallback(&self, carry: Option<&V>, _device: &Device) -> Option<V> {
        carry.cloned()
    }
}

/// Never fill gaps; only explicit overrides produce values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoFallback;

impl<V> FallbackStrategy<V> for NoFallback {
    fn fallback(&self, _carry: Option<&V>, _device: &Device) -> Option<V> {
        None
    }
}

/// Inherit from wider devices, else use a fixed default
#[derive(Debug, Clone, PartialEq)]
pub struct WithDefault<V>(pub V);

impl<V: Clone> FallbackStrategy<V> for WithDefault<V> {
    fn fallback(&self, carry: Option<&V>, _device: &Device) -> Option<V> {
        Some(carry.cloned().unwrap_or_else(|| self.0.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Devices;

    #[test]
    fn test_inherit_wider() {
        let devices = Devices::builtin();
        let tablet = devices.get("tablet").unwrap();
        assert_eq!(InheritWider.fallback(Some(&3), tablet), Some(3));
        assert_eq!(FallbackStrategy::<i32>::fallback(&InheritWider, None, tablet), None);
    }

    #[test]
    fn test_no_fallback() {
        let devices = Devices::builtin();
        let mobile = devices.get("mobile").unwrap();
        assert_eq!(NoFallback.fallback(Some(&3), mobile), None);
    }

    #[test]
    fn test_with_default() {
        let devices = Devices::builtin();
        let mobile = devices.get("mobile").unwrap();
        let strategy = WithDefault(10);
        assert_eq!(strategy.fallback(Some(&3), mobile), Some(3));
        assert_eq!(strategy.fallback(None, mobile), Some(10));
    }

    #[test]
    fn test_closure_strategy_sees_device() {
        let devices = Devices::builtin();
        let by_rank = |_carry: Option<&usize>, device: &Device| Some(device.rank() * 100);
        let mobile = devices.get("mobile").unwrap();
        assert_eq!(by_rank.fallback(None, mobile), Some(200));
    }
}
