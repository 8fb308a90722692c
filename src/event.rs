use crate::attribute::{AttributeValue, EventAttribute};
use crate::error::{CapturedError, InvalidArgument};
use crate::severity::Severity;
use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use serde::Serialize;

/// Read-only view over an event's named attributes.
///
/// Enumeration yields entries in first-insertion order: upserting an
/// existing name keeps its original position, while a name that was
/// removed and later re-added re-enters at the end. All mutation goes
/// through the operations on [`EventRecord`]; this view only reads.
#[derive(Debug, Clone, Serialize)]
pub struct Attributes(IndexMap<String, EventAttribute>);

impl Attributes {
    /// Number of distinct attribute names currently present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the event carries no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Name-keyed lookup of a single entry.
    pub fn get(&self, name: &str) -> Option<&EventAttribute> {
        self.0.get(name)
    }

    /// Whether an entry with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Iterate name/entry pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EventAttribute)> + '_ {
        self.0.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Iterate attribute names in first-insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a EventAttribute);
    type IntoIter = indexmap::map::Iter<'a, String, EventAttribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A single structured log event: the in-memory record every downstream
/// stage (filtering, formatting, sinks) consumes.
///
/// The capture time, severity, associated error, and message template
/// are fixed at construction. The attribute set stays mutable so that
/// enrichment stages can reshape it before the event is handed over for
/// consumption; afterwards, share it as `&EventRecord` and the
/// attribute set is frozen along with the rest.
///
/// Mutation requires `&mut self`, so a record enriched from several
/// threads needs external coordination. The intended shape is one
/// record owned by one log-call path at a time.
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    captured_at: DateTime<FixedOffset>,
    severity: Severity,
    error: Option<CapturedError>,
    template: String,
    attributes: Attributes,
}

impl EventRecord {
    /// Assemble an event from the data captured at the log call site.
    ///
    /// **Parameters**
    /// - `captured_at`: offset-carrying capture timestamp. This crate
    ///   never consults a clock; callers decide the time source.
    /// - `severity`: level the event was logged at.
    /// - `error`: failure associated with the event, if any.
    /// - `template`: raw message template text, stored unparsed.
    /// - `attributes`: initial attribute entries. The sequence is
    ///   consumed once and folded through [`upsert_attribute`], so
    ///   duplicate names collapse to the last value seen while keeping
    ///   the position of their first occurrence.
    ///
    /// An empty `attributes` sequence is fine and yields a record whose
    /// attribute collection is present but empty.
    ///
    /// [`upsert_attribute`]: EventRecord::upsert_attribute
    pub fn new(
        captured_at: DateTime<FixedOffset>,
        severity: Severity,
        error: Option<CapturedError>,
        template: impl Into<String>,
        attributes: impl IntoIterator<Item = EventAttribute>,
    ) -> Self {
        let mut record = EventRecord {
            captured_at,
            severity,
            error,
            template: template.into(),
            attributes: Attributes(IndexMap::new()),
        };

        for entry in attributes {
            record.upsert_attribute(entry);
        }

        record
    }

    /// Assemble an event from inputs that may have gone missing upstream,
    /// e.g. fields decoded from a wire format where everything is
    /// optional.
    ///
    /// **Returns**
    /// - `Ok(record)` built exactly as by [`EventRecord::new`].
    /// - `Err(InvalidArgument::MissingTemplate)` when `template` is
    ///   `None`.
    /// - `Err(InvalidArgument::MissingAttributes)` when `attributes` is
    ///   `None`. An empty vec is valid input.
    pub fn try_new(
        captured_at: DateTime<FixedOffset>,
        severity: Severity,
        error: Option<CapturedError>,
        template: Option<String>,
        attributes: Option<Vec<EventAttribute>>,
    ) -> Result<Self, InvalidArgument> {
        let template = template.ok_or(InvalidArgument::MissingTemplate)?;
        let attributes = attributes.ok_or(InvalidArgument::MissingAttributes)?;

        Ok(EventRecord::new(
            captured_at,
            severity,
            error,
            template,
            attributes,
        ))
    }

    /// Moment the event was captured, with its original UTC offset.
    pub fn captured_at(&self) -> DateTime<FixedOffset> {
        self.captured_at
    }

    /// Level the event was logged at.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Raw message template text.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Failure associated with the event, when one was captured.
    pub fn error(&self) -> Option<&CapturedError> {
        self.error.as_ref()
    }

    /// Read-only view of the attribute collection.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Insert an attribute, unconditionally replacing any existing entry
    /// with the same name.
    ///
    /// **Effects**
    /// - Last write wins: after the call, the entry under
    ///   `entry.name()` is exactly `entry`.
    /// - A replaced name keeps its enumeration position; a new name is
    ///   appended at the end.
    ///
    /// This is the operation for enrichers that are allowed to override
    /// values set by earlier stages.
    pub fn upsert_attribute(&mut self, entry: EventAttribute) {
        self.attributes.0.insert(entry.name().to_string(), entry);
    }

    /// Build an entry from `name` and `value` via
    /// [`EventAttribute::new`], then [`upsert_attribute`] it.
    ///
    /// **Returns**
    /// - `Err(InvalidArgument::EmptyAttributeName)` if the factory
    ///   rejects the name; the attribute collection is left untouched.
    ///
    /// [`upsert_attribute`]: EventRecord::upsert_attribute
    pub fn upsert_attribute_value(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Result<(), InvalidArgument> {
        let entry = EventAttribute::new(name, value)?;
        self.upsert_attribute(entry);
        Ok(())
    }

    /// Insert an attribute only if no entry with that name exists yet;
    /// otherwise keep the existing value and drop `entry`.
    ///
    /// This is the operation for context-scoped enrichers that must not
    /// clobber a value the caller set explicitly.
    pub fn add_attribute_if_absent(&mut self, entry: EventAttribute) {
        if !self.attributes.0.contains_key(entry.name()) {
            self.attributes.0.insert(entry.name().to_string(), entry);
        }
    }

    /// Build an entry from `name` and `value` via
    /// [`EventAttribute::new`], then [`add_attribute_if_absent`] it.
    ///
    /// **Returns**
    /// - `Err(InvalidArgument::EmptyAttributeName)` if the factory
    ///   rejects the name; the attribute collection is left untouched.
    ///
    /// [`add_attribute_if_absent`]: EventRecord::add_attribute_if_absent
    pub fn add_attribute_value_if_absent(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Result<(), InvalidArgument> {
        let entry = EventAttribute::new(name, value)?;
        self.add_attribute_if_absent(entry);
        Ok(())
    }

    /// Delete the entry under `name`, if present.
    ///
    /// Removing a name that is not present is a silent no-op with no
    /// error path, so enrichers can strip attributes idempotently.
    /// Remaining entries keep their relative order, which makes removal
    /// O(n) in the attribute count.
    pub fn remove_attribute_if_present(&mut self, name: &str) {
        self.attributes.0.shift_remove(name);
    }
}
