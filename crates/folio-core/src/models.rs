//! Core data models for the folio document store.
//!
//! `PortfolioDocument` is the root aggregate. It is owned exclusively by the
//! document store and mutated only through its commit path; everything here
//! is plain data plus read-side helpers.
//!
//! All records carry a flattened `extra` map so fields added by newer
//! versions of the schema survive a load → edit → snapshot round-trip
//! unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::defaults;
use crate::ids::new_record_id;

// =============================================================================
// PROFILE
// =============================================================================

/// A single contact line (email, LinkedIn, phone, ...).
///
/// Labels need not be unique; duplicates are flagged as a data-quality
/// warning by the validator but never rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon: String,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, JsonValue>,
}

/// Operator profile: the hero section of the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact_info: Vec<ContactEntry>,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, JsonValue>,
}

// =============================================================================
// EXPERIENCE
// =============================================================================

/// One work-history entry. Order within `PortfolioDocument::experience` is
/// editorial (reverse-chronological by convention, not enforced).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Surrogate identity, assigned at creation. Mutations target this id,
    /// never a list position.
    pub id: Uuid,
    pub role: String,
    pub company: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, JsonValue>,
}

impl ExperienceEntry {
    /// Create a new entry with a fresh surrogate id.
    pub fn new(
        role: impl Into<String>,
        company: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: new_record_id(),
            role: role.into(),
            company: company.into(),
            date: date.into(),
            description: description.into(),
            extra: Map::new(),
        }
    }
}

// =============================================================================
// PROJECTS
// =============================================================================

/// One portfolio project / case study.
///
/// `title` is the display key but is not required to be unique; `id` is the
/// only identity consumers may rely on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Surrogate identity, assigned at creation.
    pub id: Uuid,
    pub title: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub problem: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub solution: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub impact: String,
    /// Long-form description shown on the detail view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Hero image for the detail view; falls back to `image` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_image: Option<String>,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, JsonValue>,
}

impl Project {
    /// Create a new project with a fresh surrogate id.
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            title: title.into(),
            category: category.into(),
            image: String::new(),
            problem: String::new(),
            solution: String::new(),
            impact: String::new(),
            details: None,
            dashboard_image: None,
            extra: Map::new(),
        }
    }

    /// Category for grouping: empty categories read as "Uncategorized".
    /// The coercion is read-only and never persisted.
    pub fn display_category(&self) -> &str {
        if self.category.is_empty() {
            defaults::UNCATEGORIZED
        } else {
            &self.category
        }
    }

    /// Image for the detail view: the dashboard image when set and
    /// non-empty, otherwise the thumbnail.
    pub fn display_image(&self) -> &str {
        match &self.dashboard_image {
            Some(img) if !img.is_empty() => img,
            _ => &self.image,
        }
    }
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// The root aggregate: the entire portfolio site's content.
///
/// Exactly one instance is live per store. `version` is monotonic and only
/// the store's commit path may change it; it is persisted and round-trips
/// through snapshots exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioDocument {
    pub profile: Profile,
    /// Short key → free-text display label ("8+"). Not numeric by design.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metrics: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<Project>,
    /// Skill name → proficiency in [0, 100].
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub skills: BTreeMap<String, i32>,
    #[serde(default)]
    pub version: u64,
    #[serde(default = "Utc::now")]
    pub updated_at_utc: DateTime<Utc>,
    /// Unknown top-level keys, preserved on round-trip.
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, JsonValue>,
}

impl PortfolioDocument {
    /// The documented default skeleton: placeholder profile, seeded metric
    /// keys, empty collections, version 0. Used when no persisted document
    /// exists or the persisted bytes are unreadable.
    pub fn skeleton() -> Self {
        Self {
            profile: Profile {
                name: defaults::SKELETON_PROFILE_NAME.to_string(),
                role: defaults::SKELETON_PROFILE_ROLE.to_string(),
                summary: defaults::SKELETON_PROFILE_SUMMARY.to_string(),
                image_url: String::new(),
                contact_info: Vec::new(),
                extra: Map::new(),
            },
            metrics: defaults::SKELETON_METRIC_KEYS
                .iter()
                .map(|k| (k.to_string(), String::new()))
                .collect(),
            experience: Vec::new(),
            projects: Vec::new(),
            skills: BTreeMap::new(),
            version: 0,
            updated_at_utc: Utc::now(),
            extra: Map::new(),
        }
    }

    /// Look up a project by surrogate id.
    pub fn project(&self, id: Uuid) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub(crate) fn project_mut(&mut self, id: Uuid) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    /// Look up an experience entry by surrogate id.
    pub fn experience_entry(&self, id: Uuid) -> Option<&ExperienceEntry> {
        self.experience.iter().find(|e| e.id == id)
    }

    pub(crate) fn experience_entry_mut(&mut self, id: Uuid) -> Option<&mut ExperienceEntry> {
        self.experience.iter_mut().find(|e| e.id == id)
    }

    /// Projects grouped by display category, preserving editorial order
    /// within each group. Empty categories group under "Uncategorized".
    pub fn projects_by_category(&self) -> BTreeMap<&str, Vec<&Project>> {
        let mut groups: BTreeMap<&str, Vec<&Project>> = BTreeMap::new();
        for project in &self.projects {
            groups.entry(project.display_category()).or_default().push(project);
        }
        groups
    }
}
