//! Mutation vocabulary for the document store's commit path.
//!
//! Each variant corresponds to one admin form: profile, metrics, a single
//! experience entry, a single project, a single skill, or a wholesale
//! document replacement (the re-upload path). Mutations target records by
//! surrogate id, never by list position, so a concurrent reorder can never
//! silently retarget an edit.
//!
//! A mutation is applied to a *clone* of the live document; the store
//! validates and persists the merged result before anything becomes visible
//! to readers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{ExperienceEntry, PortfolioDocument, Profile, Project};

/// One operator edit, expressed as data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DocumentMutation {
    /// Replace the entire document (snapshot re-upload). The incoming
    /// `version` is ignored; the store's version still climbs monotonically.
    ReplaceDocument { document: Box<PortfolioDocument> },

    UpdateProfile { profile: Profile },

    /// Upsert one metric display label.
    SetMetric { key: String, value: String },
    RemoveMetric { key: String },

    AddExperience { entry: ExperienceEntry },
    /// Full-record update, targeted by `entry.id`.
    UpdateExperience { entry: ExperienceEntry },
    RemoveExperience { id: Uuid },

    AddProject { project: Project },
    /// Full-record update, targeted by `project.id`.
    UpdateProject { project: Project },
    RemoveProject { id: Uuid },

    /// Upsert one skill proficiency. Range checking happens when the merged
    /// document is validated.
    SetSkill { name: String, level: i32 },
    RemoveSkill { name: String },
}

impl DocumentMutation {
    /// Short operation name for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ReplaceDocument { .. } => "replace_document",
            Self::UpdateProfile { .. } => "update_profile",
            Self::SetMetric { .. } => "set_metric",
            Self::RemoveMetric { .. } => "remove_metric",
            Self::AddExperience { .. } => "add_experience",
            Self::UpdateExperience { .. } => "update_experience",
            Self::RemoveExperience { .. } => "remove_experience",
            Self::AddProject { .. } => "add_project",
            Self::UpdateProject { .. } => "update_project",
            Self::RemoveProject { .. } => "remove_project",
            Self::SetSkill { .. } => "set_skill",
            Self::RemoveSkill { .. } => "remove_skill",
        }
    }

    /// Apply this mutation to a candidate document.
    ///
    /// Upserts are lenient; removals and targeted updates of an id that no
    /// longer exists fail with [`Error::NotFound`] so a stale admin form
    /// cannot silently edit the wrong record.
    pub fn apply(self, doc: &mut PortfolioDocument) -> Result<()> {
        match self {
            Self::ReplaceDocument { document } => {
                *doc = *document;
            }
            Self::UpdateProfile { profile } => {
                doc.profile = profile;
            }
            Self::SetMetric { key, value } => {
                doc.metrics.insert(key, value);
            }
            Self::RemoveMetric { key } => {
                if doc.metrics.remove(&key).is_none() {
                    return Err(Error::NotFound(format!("metric {key}")));
                }
            }
            Self::AddExperience { entry } => {
                doc.experience.push(entry);
            }
            Self::UpdateExperience { entry } => {
                let target = doc
                    .experience_entry_mut(entry.id)
                    .ok_or_else(|| Error::NotFound(format!("experience entry {}", entry.id)))?;
                *target = entry;
            }
            Self::RemoveExperience { id } => {
                let before = doc.experience.len();
                doc.experience.retain(|e| e.id != id);
                if doc.experience.len() == before {
                    return Err(Error::NotFound(format!("experience entry {id}")));
                }
            }
            Self::AddProject { project } => {
                doc.projects.push(project);
            }
            Self::UpdateProject { project } => {
                let target = doc
                    .project_mut(project.id)
                    .ok_or_else(|| Error::NotFound(format!("project {}", project.id)))?;
                *target = project;
            }
            Self::RemoveProject { id } => {
                let before = doc.projects.len();
                doc.projects.retain(|p| p.id != id);
                if doc.projects.len() == before {
                    return Err(Error::NotFound(format!("project {id}")));
                }
            }
            Self::SetSkill { name, level } => {
                doc.skills.insert(name, level);
            }
            Self::RemoveSkill { name } => {
                if doc.skills.remove(&name).is_none() {
                    return Err(Error::NotFound(format!("skill {name}")));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_doc() -> PortfolioDocument {
        let mut doc = PortfolioDocument::skeleton();
        doc.profile.name = "Asha Rao".to_string();
        doc
    }

    #[test]
    fn test_update_profile_replaces_whole_record() {
        let mut doc = base_doc();
        let mut profile = doc.profile.clone();
        profile.role = "Analytics Lead".to_string();
        DocumentMutation::UpdateProfile { profile }
            .apply(&mut doc)
            .unwrap();
        assert_eq!(doc.profile.role, "Analytics Lead");
        assert_eq!(doc.profile.name, "Asha Rao");
    }

    #[test]
    fn test_set_skill_upserts() {
        let mut doc = base_doc();
        DocumentMutation::SetSkill {
            name: "Go".to_string(),
            level: 80,
        }
        .apply(&mut doc)
        .unwrap();
        assert_eq!(doc.skills["Go"], 80);

        DocumentMutation::SetSkill {
            name: "Go".to_string(),
            level: 85,
        }
        .apply(&mut doc)
        .unwrap();
        assert_eq!(doc.skills["Go"], 85);
    }

    #[test]
    fn test_remove_unknown_skill_is_not_found() {
        let mut doc = base_doc();
        let err = DocumentMutation::RemoveSkill {
            name: "Fortran".to_string(),
        }
        .apply(&mut doc)
        .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_update_project_targets_id_not_position() {
        let mut doc = base_doc();
        let first = Project::new("First", "Analytics");
        let second = Project::new("Second", "Analytics");
        let second_id = second.id;
        doc.projects = vec![first, second];

        // Reorder, then update by id: the right record still changes.
        doc.projects.reverse();
        let mut edited = doc.project(second_id).unwrap().clone();
        edited.title = "Second (revised)".to_string();
        DocumentMutation::UpdateProject { project: edited }
            .apply(&mut doc)
            .unwrap();

        assert_eq!(doc.project(second_id).unwrap().title, "Second (revised)");
        assert!(doc.projects.iter().any(|p| p.title == "First"));
    }

    #[test]
    fn test_update_stale_project_id_fails() {
        let mut doc = base_doc();
        let ghost = Project::new("Ghost", "Analytics");
        let err = DocumentMutation::UpdateProject { project: ghost }
            .apply(&mut doc)
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert!(doc.projects.is_empty());
    }

    #[test]
    fn test_remove_experience_by_id() {
        let mut doc = base_doc();
        let entry = ExperienceEntry::new("Engineer", "Acme", "2023 - 2025", "Built things");
        let id = entry.id;
        doc.experience.push(entry);

        DocumentMutation::RemoveExperience { id }
            .apply(&mut doc)
            .unwrap();
        assert!(doc.experience.is_empty());

        let err = DocumentMutation::RemoveExperience { id }
            .apply(&mut doc)
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_mutation_serde_round_trip() {
        let m = DocumentMutation::SetSkill {
            name: "Rust".to_string(),
            level: 90,
        };
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"op\":\"set_skill\""));
        let back: DocumentMutation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
