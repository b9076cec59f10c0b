//! Local state for the subject create/edit form on the subjects view.

use planner_core::model::{Subject, SubjectId};

/// Color pre-selected for new subjects.
pub const DEFAULT_COLOR: &str = "#4A90D9";

#[derive(Clone, Debug, PartialEq)]
pub struct SubjectDraft {
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub editing: Option<SubjectId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubjectFormState {
    name: String,
    description: String,
    color: String,
    editing: Option<SubjectId>,
}

impl Default for SubjectFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            color: DEFAULT_COLOR.to_string(),
            editing: None,
        }
    }
}

impl SubjectFormState {
    // Accessors
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn editing(&self) -> Option<SubjectId> {
        self.editing
    }

    // Mutations
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Pre-populate from an existing subject and enter edit mode.
    pub fn begin_edit(&mut self, subject: &Subject) {
        self.name = subject.name().to_string();
        self.description = subject.description().unwrap_or_default().to_string();
        self.color = subject.color().to_string();
        self.editing = Some(subject.id());
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// The payload a submit would carry, or `None` while the name is blank.
    #[must_use]
    pub fn draft(&self) -> Option<SubjectDraft> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        let description = {
            let trimmed = self.description.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };
        Some(SubjectDraft {
            name: name.to_string(),
            description,
            color: self.color.clone(),
            editing: self.editing,
        })
    }
}
