//! Schema validation for portfolio documents.
//!
//! `validate_document` is a pure function over a fully-merged candidate
//! document. It collects *all* field-level problems rather than stopping at
//! the first, so the admin UI can annotate every offending form field in one
//! pass. Data-quality findings that should not block a commit (duplicate
//! contact labels, duplicate project titles) come back as warnings.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::defaults::{SKILL_MAX, SKILL_MIN};
use crate::models::PortfolioDocument;

/// One field-level finding: where, and what is wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Dotted path into the document, e.g. `skills.Go` or
    /// `projects[0198c0de-...].title`.
    pub path: String,
    pub reason: String,
}

impl FieldError {
    fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

/// Outcome of validating a candidate document.
///
/// A report with a non-empty `errors` list rejects the commit; `warnings`
/// are surfaced to the operator but never block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
    pub warnings: Vec<FieldError>,
}

impl ValidationReport {
    /// True when the document may be committed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, reason: impl Into<String>) {
        self.errors.push(FieldError::new(path, reason));
    }

    fn warn(&mut self, path: impl Into<String>, reason: impl Into<String>) {
        self.warnings.push(FieldError::new(path, reason));
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "valid");
        }
        let joined = self
            .errors
            .iter()
            .map(FieldError::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{joined}")
    }
}

/// Validate a fully-merged candidate document.
///
/// Pure and side-effect free: the input is never mutated. Returns every
/// finding, errors and warnings both.
pub fn validate_document(doc: &PortfolioDocument) -> ValidationReport {
    let mut report = ValidationReport::default();

    if doc.profile.name.trim().is_empty() {
        report.error("profile.name", "must not be empty");
    }
    if doc.profile.role.trim().is_empty() {
        report.error("profile.role", "must not be empty");
    }

    let mut contact_labels = HashSet::new();
    for entry in &doc.profile.contact_info {
        if entry.label.trim().is_empty() {
            report.error("profile.contact_info", "contact label must not be empty");
        } else if !contact_labels.insert(entry.label.as_str()) {
            report.warn(
                format!("profile.contact_info.{}", entry.label),
                "duplicate contact label",
            );
        }
    }

    for (name, level) in &doc.skills {
        if name.trim().is_empty() {
            report.error("skills", "skill name must not be empty");
            continue;
        }
        if *level < SKILL_MIN || *level > SKILL_MAX {
            report.error(
                format!("skills.{name}"),
                format!("proficiency {level} outside [{SKILL_MIN}, {SKILL_MAX}]"),
            );
        }
    }

    let mut experience_ids = HashSet::new();
    for entry in &doc.experience {
        let path = format!("experience[{}]", entry.id);
        if !experience_ids.insert(entry.id) {
            report.error(path.clone(), "duplicate entry id");
        }
        if entry.role.trim().is_empty() {
            report.error(format!("{path}.role"), "must not be empty");
        }
    }

    let mut project_ids = HashSet::new();
    let mut project_titles = HashSet::new();
    for project in &doc.projects {
        let path = format!("projects[{}]", project.id);
        if !project_ids.insert(project.id) {
            report.error(path.clone(), "duplicate project id");
        }
        if project.title.trim().is_empty() {
            report.error(format!("{path}.title"), "must not be empty");
        } else if !project_titles.insert(project.title.as_str()) {
            report.warn(format!("{path}.title"), "duplicate project title");
        }
        if project.category.trim().is_empty() {
            report.error(format!("{path}.category"), "must not be empty");
        }
    }

    report
}
