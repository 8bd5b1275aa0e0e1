//! Structured logging field name schema for folio.
//!
//! `tracing` macros require field names to be literals, so call sites in the
//! store spell these out (`subsystem = "store"`, `doc_version = ...`). This
//! module is the queryable schema those literals must follow: log tooling
//! filters by these constants, and the test below pins each constant to the
//! exact name the call sites use.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Commit failed after the caller was told it would be attempted |
//! | WARN  | Recoverable issue, automatic fallback applied (skeleton load) |
//! | INFO  | Lifecycle events (load, commit) and operation completions |
//! | DEBUG | Decision points, intermediate values, config choices |

/// Subsystem originating the log event. Values: "store", "core".
pub const SUBSYSTEM: &str = "subsystem";

/// Logical operation name. Examples: "load", "commit", "snapshot".
pub const OPERATION: &str = "op";

/// Document version involved in the operation.
pub const DOC_VERSION: &str = "doc_version";

/// Base version a mutation was built against.
pub const BASE_VERSION: &str = "base_version";

/// Mutation kind, as returned by `DocumentMutation::kind()`.
pub const MUTATION_KIND: &str = "mutation_kind";

/// Path of the persisted document file.
pub const DATA_PATH: &str = "data_path";

/// Count of validation warnings attached to a successful commit.
pub const WARNING_COUNT: &str = "warning_count";

#[cfg(test)]
mod tests {
    use super::*;

    // The store's tracing calls must keep using exactly these field names;
    // renaming a constant here without touching the call sites (or vice
    // versa) breaks saved queries in log tooling.
    #[test]
    fn test_field_names_match_call_site_literals() {
        assert_eq!(SUBSYSTEM, "subsystem");
        assert_eq!(OPERATION, "op");
        assert_eq!(DOC_VERSION, "doc_version");
        assert_eq!(BASE_VERSION, "base_version");
        assert_eq!(MUTATION_KIND, "mutation_kind");
        assert_eq!(DATA_PATH, "data_path");
        assert_eq!(WARNING_COUNT, "warning_count");
    }
}
