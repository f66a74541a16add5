//! @acp:module "Candidate Selector"
//! @acp:summary "Interactive and preset ways of choosing one candidate"
//! @acp:domain cli
//! @acp:layer service

use dialoguer::theme::ColorfulTheme;
use dialoguer::FuzzySelect;

use crate::error::{PickError, Result};

/// Chooses exactly one candidate from a list
pub trait Selector {
    /// Return the chosen candidate.
    ///
    /// Fails with [`PickError::EmptyCandidates`] for an empty list and with
    /// [`PickError::SelectionCancelled`] when the operator backs out.
    fn select(&mut self, candidates: &[String]) -> Result<String>;
}

/// Fuzzy-finder prompt on the terminal
pub struct FuzzySelector {
    prompt: String,
    theme: ColorfulTheme,
}

impl FuzzySelector {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            theme: ColorfulTheme::default(),
        }
    }
}

impl Selector for FuzzySelector {
    fn select(&mut self, candidates: &[String]) -> Result<String> {
        if candidates.is_empty() {
            return Err(PickError::EmptyCandidates);
        }

        let choice = FuzzySelect::with_theme(&self.theme)
            .with_prompt(&self.prompt)
            .items(candidates)
            .default(0)
            .interact_opt()?;

        match choice {
            Some(index) => Ok(candidates[index].clone()),
            None => Err(PickError::SelectionCancelled),
        }
    }
}

/// Picks a candidate named up front, without prompting
#[derive(Debug, Clone)]
pub struct PresetSelector {
    name: String,
}

impl PresetSelector {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Selector for PresetSelector {
    fn select(&mut self, candidates: &[String]) -> Result<String> {
        if candidates.is_empty() {
            return Err(PickError::EmptyCandidates);
        }
        candidates
            .iter()
            .find(|c| **c == self.name)
            .cloned()
            .ok_or_else(|| PickError::UnknownCandidate(self.name.clone()))
    }
}
