//! Numbered instruction steps.
//!
//! Steps are stored dense and viewed 1-based: the map form's keys are always
//! exactly 1..=len, and every mutation keeps them that way.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DraftError;

/// Ordered instruction steps, numbered contiguously from 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<u32, String>", into = "BTreeMap<u32, String>")]
pub struct InstructionList(Vec<String>);

impl InstructionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` as step `len + 1`. Blank text is ignored.
    pub fn add(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        self.0.push(text.to_string());
    }

    /// Replace the text of an existing step.
    pub fn edit(&mut self, step: u32, text: &str) -> Result<(), DraftError> {
        match self.index_of(step) {
            Some(i) => {
                self.0[i] = text.to_string();
                Ok(())
            }
            None => Err(DraftError::UnknownStep(step)),
        }
    }

    /// Delete a step. Only the last step can go; anything earlier would
    /// leave a hole in the numbering.
    pub fn delete(&mut self, step: u32) -> Result<(), DraftError> {
        match self.last_step() {
            Some(last) if step == last => {
                self.0.pop();
                Ok(())
            }
            Some(last) if self.index_of(step).is_some() => {
                Err(DraftError::InvalidStepDeletion { step, last })
            }
            _ => Err(DraftError::UnknownStep(step)),
        }
    }

    /// Text of a step, if it exists.
    pub fn get(&self, step: u32) -> Option<&str> {
        self.index_of(step).map(|i| self.0[i].as_str())
    }

    /// Steps in order as (number, text) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.0
            .iter()
            .enumerate()
            .map(|(i, text)| (i as u32 + 1, text.as_str()))
    }

    /// Number of the last step, if any.
    pub fn last_step(&self) -> Option<u32> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.len() as u32)
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn index_of(&self, step: u32) -> Option<usize> {
        if step >= 1 && (step as usize) <= self.0.len() {
            Some(step as usize - 1)
        } else {
            None
        }
    }
}

impl TryFrom<BTreeMap<u32, String>> for InstructionList {
    type Error = DraftError;

    fn try_from(steps: BTreeMap<u32, String>) -> Result<Self, Self::Error> {
        let mut texts = Vec::with_capacity(steps.len());
        for (expected, (step, text)) in (1u32..).zip(steps) {
            if step != expected {
                return Err(DraftError::NonContiguousSteps {
                    expected,
                    found: step,
                });
            }
            texts.push(text);
        }
        Ok(Self(texts))
    }
}

impl From<InstructionList> for BTreeMap<u32, String> {
    fn from(list: InstructionList) -> Self {
        list.0
            .into_iter()
            .enumerate()
            .map(|(i, text)| (i as u32 + 1, text))
            .collect()
    }
}

/// Editing state of the single-slot step editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    /// No step is open.
    #[default]
    Idle,
    /// One step is open, with its working text.
    Editing { step: u32, pending: String },
}

/// Single-slot editor for instruction steps.
///
/// At most one step is ever open; opening another discards the first.
#[derive(Debug, Clone, Default)]
pub struct StepEditor {
    state: EditState,
}

impl StepEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// Step currently open for editing, if any.
    pub fn editing_step(&self) -> Option<u32> {
        match &self.state {
            EditState::Idle => None,
            EditState::Editing { step, .. } => Some(*step),
        }
    }

    /// Working text of the open edit, if any.
    pub fn pending_text(&self) -> Option<&str> {
        match &self.state {
            EditState::Idle => None,
            EditState::Editing { pending, .. } => Some(pending),
        }
    }

    /// Open `step` for editing, seeding the working text with its current
    /// text. Opening while another edit is in progress discards that edit.
    pub fn begin(&mut self, list: &InstructionList, step: u32) -> Result<(), DraftError> {
        let current = list.get(step).ok_or(DraftError::UnknownStep(step))?;
        if let EditState::Editing { step: open, .. } = &self.state {
            tracing::warn!("Discarding unsaved edit of step {} to open step {}", open, step);
        }
        self.state = EditState::Editing {
            step,
            pending: current.to_string(),
        };
        Ok(())
    }

    /// Replace the working text of the open edit. Ignored when idle.
    pub fn set_pending_text(&mut self, text: &str) {
        if let EditState::Editing { pending, .. } = &mut self.state {
            *pending = text.to_string();
        }
    }

    /// Commit the working text back to its step and return to idle.
    ///
    /// Saving while idle is a no-op. If the step was deleted after the edit
    /// began, the edit is dropped and `UnknownStep` is returned.
    pub fn save(&mut self, list: &mut InstructionList) -> Result<(), DraftError> {
        match std::mem::take(&mut self.state) {
            EditState::Idle => Ok(()),
            EditState::Editing { step, pending } => list.edit(step, &pending),
        }
    }

    /// Drop any in-progress edit.
    pub fn cancel(&mut self) {
        self.state = EditState::Idle;
    }
}
