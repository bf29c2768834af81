//! Structured logging conventions for tasklabel.
//!
//! Events name their fields inline (`subsystem`, `op`, `task`, `category`,
//! `path`, `record_count`, `task_count`, `error`). Fields filled in after a
//! span is opened are recorded through the constants below.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Request failed on an infrastructure error |
//! | WARN  | Recoverable issue (conflict, ignored config value) |
//! | INFO  | Lifecycle events, store mutations |
//! | DEBUG | Per-request decision points |
//! | TRACE | Per-record iteration |

/// Correlation ID recorded on the per-request span from the `x-request-id`
/// header.
pub const REQUEST_ID: &str = "request_id";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_field_is_snake_case() {
        assert!(REQUEST_ID
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '_'));
    }
}
