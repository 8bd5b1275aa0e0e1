//! Centralized default constants for the folio document store.
//!
//! **This module is the single source of truth** for shared default values.
//! Both crates reference these constants instead of defining their own
//! magic strings.

// =============================================================================
// SKELETON DOCUMENT
// =============================================================================

/// Placeholder profile name used when no persisted document exists.
pub const SKELETON_PROFILE_NAME: &str = "Your Name";

/// Placeholder profile role used when no persisted document exists.
pub const SKELETON_PROFILE_ROLE: &str = "Your Role";

/// Placeholder profile summary for a fresh skeleton.
pub const SKELETON_PROFILE_SUMMARY: &str =
    "Edit this summary from the admin panel to introduce yourself.";

/// Metric keys seeded into the skeleton, in display order.
/// Values are free-text display labels ("8+"), intentionally not numeric.
pub const SKELETON_METRIC_KEYS: &[&str] = &["dashboards", "manual_reduction", "efficiency"];

/// Category substituted at read time for projects with an empty category.
/// Grouping-only: never written back to the document.
pub const UNCATEGORIZED: &str = "Uncategorized";

// =============================================================================
// SKILLS
// =============================================================================

/// Inclusive lower bound for a skill proficiency value.
pub const SKILL_MIN: i32 = 0;

/// Inclusive upper bound for a skill proficiency value.
pub const SKILL_MAX: i32 = 100;

// =============================================================================
// STORAGE
// =============================================================================

/// Default path of the persisted document file, relative to the working
/// directory. Overridden by `FOLIO_DATA_PATH`.
pub const DATA_PATH: &str = "data/portfolio.json";

/// Environment variable naming the persisted document file.
pub const DATA_PATH_ENV: &str = "FOLIO_DATA_PATH";
