use std::sync::Arc;

use serde_json::Value;
use shared::{
    error::DraftFieldError,
    protocol::{DraftField, InvestorDraft},
};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    api::{InvestorApi, SubmissionError},
    catalog::InterestCatalog,
};

pub const SUCCESS_MESSAGE: &str = "Investor created successfully!";
pub const FAILURE_MESSAGE: &str = "Failed to create investor. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionOutcome {
    #[default]
    None,
    Submitting,
    Success(String),
    Error(String),
}

impl SubmissionOutcome {
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Success(message) | SubmissionOutcome::Error(message) => {
                Some(message)
            }
            SubmissionOutcome::None | SubmissionOutcome::Submitting => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("an investor submission is already in flight")]
    AlreadySubmitting,
}

pub struct InvestorFormModel {
    api: Arc<dyn InvestorApi>,
    draft: InvestorDraft,
    catalog: InterestCatalog,
    outcome: SubmissionOutcome,
    custom_interest_input: String,
}

impl InvestorFormModel {
    pub fn new(api: Arc<dyn InvestorApi>) -> Self {
        Self {
            api,
            draft: InvestorDraft::default(),
            catalog: InterestCatalog::new(),
            outcome: SubmissionOutcome::None,
            custom_interest_input: String::new(),
        }
    }

    pub fn draft(&self) -> &InvestorDraft {
        &self.draft
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    pub fn catalog(&self) -> &InterestCatalog {
        &self.catalog
    }

    pub fn is_submitting(&self) -> bool {
        self.outcome == SubmissionOutcome::Submitting
    }

    pub fn set_field(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), DraftFieldError> {
        let field = name.parse::<DraftField>()?;
        self.set_draft_field(field, value)
    }

    pub fn set_draft_field(
        &mut self,
        field: DraftField,
        value: impl Into<String>,
    ) -> Result<(), DraftFieldError> {
        self.draft.set(field, value)
    }

    /// Replaces the selection with the full set emitted by the multi-select.
    /// Order is kept, repeats collapse to their first occurrence, and labels
    /// the catalog does not offer are dropped.
    pub fn set_interests<I, S>(&mut self, selected: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut interests: Vec<String> = Vec::new();
        for label in selected {
            let label = label.into();
            if !self.catalog.contains(&label) {
                warn!(label = %label, "form: ignoring interest missing from catalog");
                continue;
            }
            if !interests.contains(&label) {
                interests.push(label);
            }
        }
        self.draft.areas_of_interest = interests;
    }

    pub fn add_custom_interest(&mut self, raw: &str) -> bool {
        if !self.catalog.add_label(raw) {
            return false;
        }
        let label = raw.trim().to_string();
        if !self.draft.areas_of_interest.contains(&label) {
            self.draft.areas_of_interest.push(label);
        }
        true
    }

    pub fn custom_interest_input(&self) -> &str {
        &self.custom_interest_input
    }

    pub fn set_custom_interest_input(&mut self, value: impl Into<String>) {
        self.custom_interest_input = value.into();
    }

    pub fn add_custom_interest_from_input(&mut self) -> bool {
        let raw = std::mem::take(&mut self.custom_interest_input);
        let added = self.add_custom_interest(&raw);
        if !added {
            self.custom_interest_input = raw;
        }
        added
    }

    pub fn begin_submit(&mut self) -> Result<InvestorDraft, SubmitError> {
        if self.is_submitting() {
            warn!("form: submit ignored, previous submission still pending");
            return Err(SubmitError::AlreadySubmitting);
        }
        self.outcome = SubmissionOutcome::Submitting;
        Ok(self.draft.clone())
    }

    /// Applies the result of the creation request. Success resets the draft
    /// and the catalog; failure keeps the draft so the operator can retry.
    pub fn finish_submit(&mut self, result: Result<Value, SubmissionError>) {
        match result {
            Ok(_) => {
                info!("form: investor created, resetting draft");
                self.outcome = SubmissionOutcome::Success(SUCCESS_MESSAGE.to_string());
                self.draft = InvestorDraft::default();
                self.catalog.reset();
            }
            Err(err) => {
                warn!(error = %err, "form: investor creation failed");
                self.outcome = SubmissionOutcome::Error(FAILURE_MESSAGE.to_string());
            }
        }
    }

    /// Drops an outstanding `Submitting` state whose result will never be
    /// applied, so the form accepts the next attempt.
    pub fn cancel_submit(&mut self) {
        if self.is_submitting() {
            warn!("form: pending submission abandoned");
            self.outcome = SubmissionOutcome::None;
        }
    }

    /// One full submit round: a single request against the record-creation
    /// endpoint. Dropping the future before it resolves releases the form.
    pub async fn submit(&mut self) -> Result<SubmissionOutcome, SubmitError> {
        let payload = self.begin_submit()?;
        let api = Arc::clone(&self.api);
        let mut pending = PendingSubmit {
            form: self,
            completed: false,
        };
        let result = api.create_investor(&payload).await;
        pending.form.finish_submit(result);
        pending.completed = true;
        Ok(pending.form.outcome.clone())
    }
}

struct PendingSubmit<'a> {
    form: &'a mut InvestorFormModel,
    completed: bool,
}

impl Drop for PendingSubmit<'_> {
    fn drop(&mut self) {
        if !self.completed {
            self.form.cancel_submit();
        }
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
