//! Walks one event through a chain of enrichment stages and shows which
//! mutation each stage should use: `upsert_attribute` when overriding is
//! intended, `add_attribute_if_absent` when the caller's value must win,
//! `remove_attribute_if_present` when stripping before hand-off.

use chrono::Utc;
use tracing::info;

use log_event::attribute::EventAttribute;
use log_event::event::EventRecord;
use log_event::severity::Severity;

fn main() {
    tracing_subscriber::fmt::init();

    // Stage 0: the log call site. The caller sets `user` explicitly.
    let mut record = EventRecord::new(
        Utc::now().fixed_offset(),
        Severity::Warning,
        None,
        "login throttled for {user}",
        vec![EventAttribute::new("user", "bob").unwrap()],
    );

    // Stage 1: ambient context. Must not clobber caller-set values, so
    // everything goes in via add-if-absent; `user` stays "bob".
    record.add_attribute_value_if_absent("host", "edge-7").unwrap();
    record.add_attribute_value_if_absent("region", "eu-west-1").unwrap();
    record.add_attribute_value_if_absent("user", "anonymous").unwrap();

    // Stage 2: a policy stage that is allowed to override.
    record.upsert_attribute_value("region", "eu").unwrap();

    // Stage 3: scrubbing before hand-off. Removing a name that was never
    // set is fine.
    record.remove_attribute_if_present("host");
    record.remove_attribute_if_present("session_token");

    // Hand-off: downstream gets a shared reference and only reads.
    consume(&record);
}

fn consume(record: &EventRecord) {
    if record.severity() >= Severity::Warning {
        info!(
            severity = %record.severity(),
            template = record.template(),
            "event passed the severity threshold"
        );
    }

    for (name, entry) in record.attributes() {
        info!(%name, value = %entry.value(), "enriched attribute");
    }

    println!(
        "{}",
        serde_json::to_string_pretty(record).expect("serialize record")
    );
}
