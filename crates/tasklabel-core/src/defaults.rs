//! Centralized default constants for tasklabel.
//!
//! Crates reference these constants instead of defining their own literals.

// =============================================================================
// SERVER
// =============================================================================

/// Default bind host.
pub const HOST: &str = "0.0.0.0";

/// Default bind port.
pub const PORT: u16 = 3000;

/// Default request body limit (1 MiB). Classification records are tiny.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

// =============================================================================
// STORAGE
// =============================================================================

/// Default settings store path.
pub const SETTINGS_FILE: &str = "settings.json";

/// Default classification store path.
pub const CLASSIFICATIONS_FILE: &str = "classifications.json";

/// Default training corpus directory.
pub const TRAINING_DIR: &str = "../data/training";

/// Default static file root.
pub const STATIC_DIR: &str = "apps";

/// File extension (without dot) of task files in the training corpus.
pub const TASK_FILE_EXTENSION: &str = "json";

// =============================================================================
// LOGGING
// =============================================================================

/// Default `RUST_LOG` filter when none is set.
pub const LOG_FILTER: &str = "tasklabel_api=debug,tasklabel_store=debug,tower_http=debug";

/// Default log file name when `LOG_FILE` has no file component.
pub const LOG_FILE_NAME: &str = "tasklabel-api.log";
