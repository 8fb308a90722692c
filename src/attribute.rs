use crate::error::InvalidArgument;
use serde::Serialize;

/// Value payload of an attribute, stored as protocol-agnostic JSON.
///
/// The event record stores and enumerates these without interpreting
/// them; scalar vs. structured shape is a concern of whoever produces
/// and formats the value.
pub type AttributeValue = serde_json::Value;

/// A named, typed value attached to an event.
///
/// Entries are only built through [`EventAttribute::new`], which
/// guarantees every entry in circulation carries a usable name. The
/// value side is opaque; see [`AttributeValue`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventAttribute {
    name: String,
    value: AttributeValue,
}

impl EventAttribute {
    /// Build an attribute entry from a raw name and value.
    ///
    /// **Parameters**
    /// - `name`: attribute name; must contain at least one
    ///   non-whitespace character.
    /// - `value`: anything convertible to [`AttributeValue`], including
    ///   `serde_json::json!` literals.
    ///
    /// **Returns**
    /// - `Ok(entry)` with the name kept verbatim (no trimming).
    /// - `Err(InvalidArgument::EmptyAttributeName)` for an empty or
    ///   all-whitespace name.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Result<Self, InvalidArgument> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InvalidArgument::EmptyAttributeName);
        }

        Ok(EventAttribute {
            name,
            value: value.into(),
        })
    }

    /// Name identifying this entry within an event.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the value payload.
    pub fn value(&self) -> &AttributeValue {
        &self.value
    }

    /// Consume the entry, yielding its name and value.
    pub fn into_parts(self) -> (String, AttributeValue) {
        (self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn factory_builds_entry_with_name_and_value() {
        let attr = EventAttribute::new("user", "bob").unwrap();
        assert_eq!(attr.name(), "user");
        assert_eq!(attr.value(), &json!("bob"));
    }

    #[test]
    fn factory_rejects_empty_name() {
        assert_eq!(
            EventAttribute::new("", 1).unwrap_err(),
            InvalidArgument::EmptyAttributeName
        );
    }

    #[test]
    fn factory_rejects_whitespace_only_name() {
        assert_eq!(
            EventAttribute::new("   \t", 1).unwrap_err(),
            InvalidArgument::EmptyAttributeName
        );
    }

    #[test]
    fn structured_values_are_stored_untouched() {
        let payload = json!({ "region": "eu-west-1", "attempts": [1, 2, 3] });
        let attr = EventAttribute::new("context", payload.clone()).unwrap();
        assert_eq!(attr.value(), &payload);
    }

    #[test]
    fn into_parts_yields_owned_name_and_value() {
        let attr = EventAttribute::new("latency_ms", 42).unwrap();
        let (name, value) = attr.into_parts();
        assert_eq!(name, "latency_ms");
        assert_eq!(value, json!(42));
    }

    #[test]
    fn serializes_name_and_value_fields() {
        let attr = EventAttribute::new("user", "bob").unwrap();
        let json = serde_json::to_value(&attr).unwrap();
        assert_eq!(json, json!({ "name": "user", "value": "bob" }));
    }
}
