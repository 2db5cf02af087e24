//! Intake accumulator: the transient state behind the intake form.
//!
//! The HTML form carries this state between requests (hidden JSON lists plus
//! the visible inputs), so every POST rebuilds an [`IntakeForm`], applies one
//! [`IntakeAction`] and renders the result. Nothing is stored server-side.

pub mod completeness;
pub mod dedup;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::intake::completeness::{check_completeness, CompletenessReport};
use crate::intake::dedup::{AddOutcome, UniqueList};
use crate::models::profile::Profile;
use crate::navigation::NavigationState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Modules,
    Interests,
}

impl ListField {
    pub fn name(self) -> &'static str {
        match self {
            ListField::Modules => "modules",
            ListField::Interests => "interests",
        }
    }
}

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("the {field} list is not a JSON array of strings: {source}")]
    MalformedList {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Wire format
// ────────────────────────────────────────────────────────────────────────────

/// Urlencoded body posted by the intake form to `/form` and `/results`.
///
/// Only the clicked submit button contributes its name, so at most one of
/// `action`, `remove_module`, `remove_interest` is present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntakeSubmission {
    pub degree: String,
    pub goals: String,
    pub life_goals: String,
    pub module_input: String,
    pub interest_input: String,
    /// JSON array of the modules accumulated so far.
    pub modules: String,
    /// JSON array of the interests accumulated so far.
    pub interests: String,
    pub action: Option<String>,
    pub remove_module: Option<String>,
    pub remove_interest: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeAction {
    /// Default button (Enter key): add whatever is pending in the add boxes.
    Save,
    Add(ListField),
    Remove(ListField, String),
    Submit,
}

impl IntakeSubmission {
    pub fn action(&self) -> IntakeAction {
        if let Some(item) = &self.remove_module {
            return IntakeAction::Remove(ListField::Modules, item.clone());
        }
        if let Some(item) = &self.remove_interest {
            return IntakeAction::Remove(ListField::Interests, item.clone());
        }
        match self.action.as_deref() {
            Some("add_module") => IntakeAction::Add(ListField::Modules),
            Some("add_interest") => IntakeAction::Add(ListField::Interests),
            Some("submit") => IntakeAction::Submit,
            _ => IntakeAction::Save,
        }
    }
}

fn parse_list(field: ListField, raw: &str) -> Result<UniqueList, IntakeError> {
    if raw.trim().is_empty() {
        return Ok(UniqueList::new());
    }
    let items: Vec<String> =
        serde_json::from_str(raw).map_err(|source| IntakeError::MalformedList {
            field: field.name(),
            source,
        })?;
    Ok(UniqueList::from_items(items))
}

// ────────────────────────────────────────────────────────────────────────────
// Accumulator
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeForm {
    degree: String,
    modules: UniqueList,
    interests: UniqueList,
    goals: String,
    life_goals: String,
    module_input: String,
    interest_input: String,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_submission(submission: &IntakeSubmission) -> Result<Self, IntakeError> {
        let mut form = Self {
            modules: parse_list(ListField::Modules, &submission.modules)?,
            interests: parse_list(ListField::Interests, &submission.interests)?,
            ..Self::default()
        };
        form.set_degree(submission.degree.as_str());
        form.set_goals(submission.goals.as_str());
        form.set_life_goals(submission.life_goals.as_str());
        form.set_pending(ListField::Modules, submission.module_input.as_str());
        form.set_pending(ListField::Interests, submission.interest_input.as_str());
        Ok(form)
    }

    pub fn degree(&self) -> &str {
        &self.degree
    }

    pub fn goals(&self) -> &str {
        &self.goals
    }

    pub fn life_goals(&self) -> &str {
        &self.life_goals
    }

    pub fn set_degree(&mut self, degree: impl Into<String>) {
        self.degree = degree.into();
    }

    pub fn set_goals(&mut self, goals: impl Into<String>) {
        self.goals = goals.into();
    }

    pub fn set_life_goals(&mut self, life_goals: impl Into<String>) {
        self.life_goals = life_goals.into();
    }

    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::Modules => self.modules.as_slice(),
            ListField::Interests => self.interests.as_slice(),
        }
    }

    fn list_mut(&mut self, field: ListField) -> &mut UniqueList {
        match field {
            ListField::Modules => &mut self.modules,
            ListField::Interests => &mut self.interests,
        }
    }

    /// Text currently typed into the add box of `field`.
    pub fn pending(&self, field: ListField) -> &str {
        match field {
            ListField::Modules => &self.module_input,
            ListField::Interests => &self.interest_input,
        }
    }

    pub fn set_pending(&mut self, field: ListField, text: impl Into<String>) {
        let text = text.into();
        match field {
            ListField::Modules => self.module_input = text,
            ListField::Interests => self.interest_input = text,
        }
    }

    pub fn add(&mut self, field: ListField, item: &str) -> AddOutcome {
        let list = self.list_mut(field);
        let outcome = list.insert(item);
        debug!("Add to {}: {:?}, {} entries", field.name(), outcome, list.len());
        outcome
    }

    pub fn remove(&mut self, field: ListField, item: &str) -> bool {
        self.list_mut(field).remove(item)
    }

    /// Moves the pending text of `field` into its list. The add box is
    /// cleared only when the item was actually added.
    pub fn add_pending(&mut self, field: ListField) -> AddOutcome {
        let pending = self.pending(field).to_string();
        let outcome = self.add(field, &pending);
        if outcome == AddOutcome::Added {
            self.set_pending(field, String::new());
        }
        outcome
    }

    /// Snapshot of the accumulated data. Pending add-box text is not part
    /// of the profile.
    pub fn profile(&self) -> Profile {
        Profile {
            degree: self.degree.clone(),
            modules: self.modules.as_slice().to_vec(),
            interests: self.interests.as_slice().to_vec(),
            goals: self.goals.clone(),
            life_goals: self.life_goals.clone(),
        }
    }

    pub fn completeness(&self) -> CompletenessReport {
        check_completeness(&self.profile())
    }

    pub fn can_submit(&self) -> bool {
        self.completeness().is_complete()
    }

    /// Hands the profile off to the results view. Returns `None` (and the
    /// submit is inert) while any required field is empty.
    pub fn submit(&self) -> Option<NavigationState> {
        if !self.can_submit() {
            debug!("Submit ignored, missing: {}", self.completeness().describe());
            return None;
        }
        Some(NavigationState::handoff(self.profile()))
    }

    /// Applies one form action. Only [`IntakeAction::Submit`] can navigate.
    pub fn apply(&mut self, action: &IntakeAction) -> Option<NavigationState> {
        match action {
            IntakeAction::Save => {
                self.add_pending(ListField::Modules);
                self.add_pending(ListField::Interests);
                None
            }
            IntakeAction::Add(field) => {
                self.add_pending(*field);
                None
            }
            IntakeAction::Remove(field, item) => {
                self.remove(*field, item);
                None
            }
            IntakeAction::Submit => self.submit(),
        }
    }
}
