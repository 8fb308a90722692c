use chrono::Utc;
use tracing::info;

use log_event::attribute::EventAttribute;
use log_event::error::CapturedError;
use log_event::event::EventRecord;
use log_event::severity::Severity;

fn main() {
    tracing_subscriber::fmt::init();

    // Simulate the failure a log call would be reporting.
    let io_error = std::io::Error::new(std::io::ErrorKind::TimedOut, "backend did not respond");

    let record = EventRecord::new(
        Utc::now().fixed_offset(),
        Severity::Error,
        Some(CapturedError::from_error(&io_error)),
        "payment for order {order_id} failed",
        vec![
            EventAttribute::new("order_id", "A-1042").unwrap(),
            EventAttribute::new("amount_cents", 1999).unwrap(),
        ],
    );

    info!(
        severity = %record.severity(),
        template = record.template(),
        attribute_count = record.attributes().len(),
        "captured event"
    );

    for (name, entry) in record.attributes() {
        info!(%name, value = %entry.value(), "attribute");
    }

    if let Some(err) = record.error() {
        info!(message = err.message(), "associated error");
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&record).expect("serialize record")
    );
}
