//! Field and event names shared by the logging macros and the test capture
//!
//! `tracing` field names must be identifiers at the call site, so the macros
//! spell these out literally; the constants exist for readers of the events
//! (capture layers, log processors) to match against.

/// Module path of the code that logged the event
pub const FIELD_COMPONENT: &str = "component";
/// Directory operation name, e.g. `create_student`
pub const FIELD_OP: &str = "op";
/// One of [`EVENT_START`], [`EVENT_END`], [`EVENT_END_ERROR`]
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_distinct() {
        let events = [EVENT_START, EVENT_END, EVENT_END_ERROR];
        for (i, a) in events.iter().enumerate() {
            for b in &events[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_error_fields_are_flat_identifiers() {
        for field in [FIELD_ERR_KIND, FIELD_ERR_CODE, FIELD_DURATION_MS] {
            assert!(field.chars().all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }
}
