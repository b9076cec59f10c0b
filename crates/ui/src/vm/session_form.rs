//! Reconciliation state for the session form, shared by the create and edit
//! flows on the subject-details and sessions views.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use planner_core::model::{SessionId, StudySession, SubjectId};

/// One-click session lengths offered by the form, in minutes.
pub const QUICK_DURATIONS: [u32; 6] = [15, 30, 45, 60, 90, 120];

//
// ─── DURATION CHOICE ───────────────────────────────────────────────────────────
//

/// Two-slot tagged duration selection. A quick pick and a custom value are
/// mutually exclusive; whichever was set last wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DurationChoice {
    #[default]
    Unset,
    Quick(u32),
    Custom(String),
}

impl DurationChoice {
    /// Choice matching an existing session's duration: a value in the quick
    /// set selects that option, anything else fills the custom field with the
    /// exact number as a string.
    #[must_use]
    pub fn from_minutes(minutes: u32) -> Self {
        if QUICK_DURATIONS.contains(&minutes) {
            Self::Quick(minutes)
        } else {
            Self::Custom(minutes.to_string())
        }
    }

    /// The duration the form would submit. A quick pick resolves as-is; a
    /// custom value resolves only when it parses to a positive integer.
    #[must_use]
    pub fn resolved(&self) -> Option<u32> {
        match self {
            Self::Unset => None,
            Self::Quick(minutes) => Some(*minutes),
            Self::Custom(raw) => raw.trim().parse::<u32>().ok().filter(|m| *m > 0),
        }
    }

    #[must_use]
    pub fn quick_selection(&self) -> Option<u32> {
        match self {
            Self::Quick(minutes) => Some(*minutes),
            _ => None,
        }
    }

    /// What the custom input should display. Empty unless a custom value is
    /// the active slot.
    #[must_use]
    pub fn custom_value(&self) -> &str {
        match self {
            Self::Custom(raw) => raw,
            _ => "",
        }
    }
}

//
// ─── FORM STATE ────────────────────────────────────────────────────────────────
//

/// What a submitted form hands to the owning view.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionDraft {
    pub date: DateTime<Utc>,
    pub duration_minutes: u32,
    pub notes: Option<String>,
    pub subject: Option<SubjectId>,
    pub editing: Option<SessionId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionFormState {
    date: NaiveDate,
    duration: DurationChoice,
    notes: String,
    subject: Option<SubjectId>,
    editing: Option<SessionId>,
}

impl SessionFormState {
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today,
            duration: DurationChoice::Unset,
            notes: String::new(),
            subject: None,
            editing: None,
        }
    }

    /// Clear every field, returning the date to today.
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    // Accessors
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn duration(&self) -> &DurationChoice {
        &self.duration
    }

    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    #[must_use]
    pub fn subject(&self) -> Option<SubjectId> {
        self.subject
    }

    #[must_use]
    pub fn editing(&self) -> Option<SessionId> {
        self.editing
    }

    // Mutations
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Accept the raw value of a date input; invalid input is ignored.
    pub fn set_date_str(&mut self, raw: &str) {
        if let Ok(date) = raw.parse::<NaiveDate>() {
            self.date = date;
        }
    }

    /// Pick a quick duration, clearing any custom value.
    pub fn select_quick(&mut self, minutes: u32) {
        self.duration = DurationChoice::Quick(minutes);
    }

    /// Type into the custom field, clearing any quick selection. An empty
    /// value leaves the duration unset.
    pub fn set_custom(&mut self, raw: impl Into<String>) {
        let raw = raw.into();
        self.duration = if raw.is_empty() {
            DurationChoice::Unset
        } else {
            DurationChoice::Custom(raw)
        };
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn select_subject(&mut self, id: SubjectId) {
        self.subject = Some(id);
    }

    /// Pre-populate every field from an existing session and enter edit mode.
    pub fn begin_edit(&mut self, session: &StudySession) {
        self.date = session.date().date_naive();
        self.duration = DurationChoice::from_minutes(session.duration_minutes());
        self.notes = session.notes().unwrap_or_default().to_string();
        self.subject = Some(session.subject_id());
        self.editing = Some(session.id());
    }

    #[must_use]
    pub fn resolved_duration(&self) -> Option<u32> {
        self.duration.resolved()
    }

    /// Whether the submit button is enabled. Outside a subject-details
    /// context a subject must also have been chosen.
    #[must_use]
    pub fn can_submit(&self, require_subject: bool) -> bool {
        self.resolved_duration().is_some() && (!require_subject || self.subject.is_some())
    }

    /// The payload a submit would carry, or `None` while no positive
    /// duration resolves. The date field is a calendar day; it goes over the
    /// wire as midnight UTC.
    #[must_use]
    pub fn draft(&self) -> Option<SessionDraft> {
        let duration_minutes = self.resolved_duration()?;
        let notes = {
            let trimmed = self.notes.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };
        Some(SessionDraft {
            date: self.date.and_time(NaiveTime::MIN).and_utc(),
            duration_minutes,
            notes,
            subject: self.subject,
            editing: self.editing,
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
