//! Responsive values and per-device resolution
//!
//! A [`ResponsiveValue`] is a sparse list of per-device overrides. Resolution
//! walks the configured devices widest-first and produces a dense
//! [`Resolved`] sequence with exactly one entry per device:
//!
//! 1. A device with an explicit override uses it, and that value becomes the
//!    carry value for narrower devices.
//! 2. Otherwise the [`FallbackStrategy`] is asked, given the carry value.
//! 3. If the strategy has nothing either, the entry's value is `None`. This is
//!    not an error: the device simply contributes no style.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::device::{Device, Devices};
use crate::fallback::FallbackStrategy;

/// One explicit per-device value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceOverride<V> {
    pub device_id: String,
    pub value: V,
}

/// Sparse per-device overrides for one property
///
/// Holds at most one entry per device. Serialized as a list of
/// `{ "deviceId": ..., "value": ... }` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResponsiveValue<V> {
    entries: Vec<DeviceOverride<V>>,
}

impl<V> ResponsiveValue<V> {
    /// Create an empty responsive value
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an override, returning the updated value for chaining
    pub fn with(mut self, device_id: impl Into<String>, value: V) -> Self {
        self.set(device_id, value);
        self
    }

    /// Set a device's override, returning the value it replaced
    pub fn set(&mut self, device_id: impl Into<String>, value: V) -> Option<V> {
        let device_id = device_id.into();
        match self.entries.iter_mut().find(|e| e.device_id == device_id) {
            Some(entry) => Some(std::mem::replace(&mut entry.value, value)),
            None => {
                self.entries.push(DeviceOverride { device_id, value });
                None
            }
        }
    }

    /// Remove a device's override
    pub fn remove(&mut self, device_id: &str) -> Option<V> {
        let index = self.entries.iter().position(|e| e.device_id == device_id)?;
        Some(self.entries.remove(index).value)
    }

    /// Explicit override for a device, ignoring fallbacks
    pub fn get(&self, device_id: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|e| e.device_id == device_id)
            .map(|e| &e.value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DeviceOverride<V>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for ResponsiveValue<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Into<String>, V> FromIterator<(S, V)> for ResponsiveValue<V> {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        let mut value = Self::new();
        for (device_id, v) in iter {
            value.set(device_id, v);
        }
        value
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for ResponsiveValue<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<DeviceOverride<V>>::deserialize(deserializer)?;
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.device_id == entry.device_id) {
                return Err(D::Error::custom(format!(
                    "duplicate override for device '{}'",
                    entry.device_id
                )));
            }
        }
        Ok(Self { entries })
    }
}

/// One device's slot in a resolved sequence
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEntry<'d, V> {
    pub device: &'d Device,
    /// `None` when neither an override nor the fallback produced a value
    pub value: Option<V>,
}

impl<V> ResolvedEntry<'_, V> {
    pub fn device_id(&self) -> &str {
        self.device.id()
    }

    pub fn media_query(&self) -> &str {
        self.device.media_query()
    }
}

/// Dense resolution result, one entry per configured device, widest-first
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<'d, V> {
    entries: Vec<ResolvedEntry<'d, V>>,
}

impl<'d, V> Resolved<'d, V> {
    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedEntry<'d, V>> {
        self.entries.iter()
    }

    /// Resolved value for a device id
    pub fn get(&self, device_id: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|e| e.device.id() == device_id)
            .and_then(|e| e.value.as_ref())
    }

    /// Resolved values in device order
    pub fn values(&self) -> impl Iterator<Item = Option<&V>> + '_ {
        self.entries.iter().map(|e| e.value.as_ref())
    }

    /// Consume into resolved values in device order
    pub fn into_values(self) -> std::vec::IntoIter<Option<V>> {
        self.entries
            .into_iter()
            .map(|e| e.value)
            .collect::<Vec<_>>()
            .into_iter()
    }

    /// Whether every device resolved to a value
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|e| e.value.is_some())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'d, V> IntoIterator for Resolved<'d, V> {
    type Item = ResolvedEntry<'d, V>;
    type IntoIter = std::vec::IntoIter<ResolvedEntry<'d, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Resolve a responsive value into one entry per device.
///
/// `value` may be `None` (the property was never set) or empty; every device
/// is still enumerated and left to the strategy.
pub fn resolve_across_devices<'d, V, S>(
    devices: &'d Devices,
    value: Option<&ResponsiveValue<V>>,
    strategy: &S,
) -> Resolved<'d, V>
where
    V: Clone,
    S: FallbackStrategy<V> + ?Sized,
{
    let mut carry: Option<&V> = None;

    let entries = devices
        .iter()
        .map(|device| {
            let resolved = match value.and_then(|v| v.get(device.id())) {
                Some(explicit) => {
                    carry = Some(explicit);
                    Some(explicit.clone())
                }
                None => strategy.fallback(carry, device),
            };

            if resolved.is_none() {
                tracing::trace!("No value resolved for device '{}'", device.id());
            }

            ResolvedEntry {
                device,
                value: resolved,
            }
        })
        .collect();

    Resolved { entries }
}

/// The value a single device resolves to.
///
/// Returns `None` for device ids that are not configured.
pub fn find_device_override<V, S>(
    devices: &Devices,
    value: Option<&ResponsiveValue<V>>,
    device_id: &str,
    strategy: &S,
) -> Option<V>
where
    V: Clone,
    S: FallbackStrategy<V> + ?Sized,
{
    devices.position(device_id)?;
    resolve_across_devices(devices, value, strategy)
        .into_iter()
        .find(|e| e.device.id() == device_id)
        .and_then(|e| e.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::{InheritWider, NoFallback, WithDefault};

    #[test]
    fn test_set_replaces_existing_entry() {
        let mut value = ResponsiveValue::new().with("desktop", 1);
        assert_eq!(value.set("desktop", 2), Some(1));
        assert_eq!(value.len(), 1);
        assert_eq!(value.get("desktop"), Some(&2));
    }

    #[test]
    fn test_from_iter_keeps_last_duplicate() {
        let value: ResponsiveValue<i32> = vec![("mobile", 1), ("mobile", 5)].into_iter().collect();
        assert_eq!(value.len(), 1);
        assert_eq!(value.get("mobile"), Some(&5));
    }

    #[test]
    fn test_remove() {
        let mut value = ResponsiveValue::new().with("desktop", 1).with("tablet", 2);
        assert_eq!(value.remove("desktop"), Some(1));
        assert_eq!(value.remove("desktop"), None);
        assert_eq!(value.len(), 1);
    }

    #[test]
    fn test_deserialize() {
        let value: ResponsiveValue<String> = serde_json::from_str(
            r#"[{"deviceId":"mobile","value":"b"},{"deviceId":"desktop","value":"a"}]"#,
        )
        .unwrap();
        assert_eq!(value.get("desktop").map(String::as_str), Some("a"));
        assert_eq!(value.get("mobile").map(String::as_str), Some("b"));
    }

    #[test]
    fn test_deserialize_rejects_duplicates() {
        let result: Result<ResponsiveValue<i32>, _> = serde_json::from_str(
            r#"[{"deviceId":"desktop","value":1},{"deviceId":"desktop","value":2}]"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("duplicate override for device 'desktop'"));
    }

    #[test]
    fn test_serialize_shape() {
        let value = ResponsiveValue::new().with("tablet", 3);
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, serde_json::json!([{ "deviceId": "tablet", "value": 3 }]));
    }

    #[test]
    fn test_resolve_inherits_from_wider_device() {
        let devices = Devices::builtin();
        let value = ResponsiveValue::new().with("desktop", 10);
        let resolved = resolve_across_devices(&devices, Some(&value), &InheritWider);

        assert_eq!(resolved.len(), 3);
        assert!(resolved.is_complete());
        assert_eq!(resolved.get("tablet"), Some(&10));
        assert_eq!(resolved.get("mobile"), Some(&10));
    }

    #[test]
    fn test_resolve_override_becomes_new_carry() {
        let devices = Devices::builtin();
        let value = ResponsiveValue::new().with("tablet", 20).with("desktop", 10);
        let resolved = resolve_across_devices(&devices, Some(&value), &InheritWider);

        let values: Vec<Option<&i32>> = resolved.values().collect();
        assert_eq!(values, vec![Some(&10), Some(&20), Some(&20)]);
    }

    #[test]
    fn test_resolve_never_cascades_upward() {
        let devices = Devices::builtin();
        let value = ResponsiveValue::new().with("mobile", 5);
        let resolved = resolve_across_devices(&devices, Some(&value), &InheritWider);

        let values: Vec<Option<&i32>> = resolved.values().collect();
        assert_eq!(values, vec![None, None, Some(&5)]);
        assert!(!resolved.is_complete());
    }

    #[test]
    fn test_resolve_absent_value_still_enumerates_devices() {
        let devices = Devices::builtin();
        let resolved = resolve_across_devices::<i32, _>(&devices, None, &InheritWider);

        let ids: Vec<&str> = resolved.iter().map(|e| e.device_id()).collect();
        assert_eq!(ids, vec!["desktop", "tablet", "mobile"]);
        assert!(resolved.values().all(|v| v.is_none()));
    }

    #[test]
    fn test_resolve_with_default_fills_every_device() {
        let devices = Devices::builtin();
        let value = ResponsiveValue::new();
        let resolved = resolve_across_devices(&devices, Some(&value), &WithDefault(7));
        assert!(resolved.is_complete());
        assert_eq!(resolved.get("mobile"), Some(&7));
    }

    #[test]
    fn test_resolve_no_fallback_leaves_gaps() {
        let devices = Devices::builtin();
        let value = ResponsiveValue::new().with("desktop", 1);
        let resolved = resolve_across_devices(&devices, Some(&value), &NoFallback);
        let values: Vec<Option<&i32>> = resolved.values().collect();
        assert_eq!(values, vec![Some(&1), None, None]);
    }

    #[test]
    fn test_into_values_outlives_devices_borrow() {
        let values: Vec<Option<String>> = {
            let devices = Devices::builtin();
            let value = ResponsiveValue::new().with("tablet", "narrow".to_string());
            resolve_across_devices(&devices, Some(&value), &InheritWider)
                .into_values()
                .collect()
        };
        assert_eq!(values, vec![None, Some("narrow".to_string()), Some("narrow".to_string())]);
    }

    #[test]
    fn test_resolve_carries_explicit_value_not_fallback_result() {
        let devices = Devices::builtin();
        let value = ResponsiveValue::new().with("desktop", 1);
        let add_rank = |carry: Option<&i32>, device: &Device| carry.map(|c| c + device.rank() as i32);
        let resolved = resolve_across_devices(&devices, Some(&value), &add_rank);
        let values: Vec<Option<&i32>> = resolved.values().collect();
        assert_eq!(values, vec![Some(&1), Some(&2), Some(&3)]);
    }

    #[test]
    fn test_resolved_entries_carry_media_queries() {
        let devices = Devices::builtin();
        let value = ResponsiveValue::new().with("desktop", 1);
        let resolved = resolve_across_devices(&devices, Some(&value), &InheritWider);
        let mobile = resolved.iter().last().unwrap();
        assert_eq!(mobile.media_query(), "@media only screen and (max-width: 575px)");
    }

    #[test]
    fn test_find_device_override() {
        let devices = Devices::builtin();
        let value = ResponsiveValue::new().with("desktop", "fadeIn");

        assert_eq!(
            find_device_override(&devices, Some(&value), "mobile", &InheritWider),
            Some("fadeIn")
        );
        assert_eq!(
            find_device_override(&devices, Some(&value), "mobile", &NoFallback),
            None
        );
        assert_eq!(
            find_device_override(&devices, Some(&value), "watch", &InheritWider),
            None
        );
    }
}
