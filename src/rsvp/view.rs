//! RSVP state machine.
//!
//! `Idle` shows both answer buttons. Picking one opens its form; a valid
//! "yes" lands on `Success`, any "no" goes back to `Idle`. The answer buttons
//! stay live in `Success` so another response can be entered right away.
//!
//! Operations return [`ViewEffect`]s describing what the presentation layer
//! should do. The view itself never draws anything.

use crate::store::{Accepted, Counts, Declined, ResponseKind, ResponseRecord, ResponseStore};
use chrono::{DateTime, Utc};

pub const DECLINE_ACKNOWLEDGMENT: &str = "Thanks for letting us know! See you next time 👋";
pub const MISSING_FIELDS_NOTICE: &str = "Please enter both your name and email.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AcceptingForm,
    DecliningForm,
    Success,
}

impl Phase {
    pub fn is_form(self) -> bool {
        matches!(self, Phase::AcceptingForm | Phase::DecliningForm)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accept { name: String, email: String },
    Decline { message: String },
}

impl Submission {
    pub fn kind(&self) -> ResponseKind {
        match self {
            Submission::Accept { .. } => ResponseKind::Yes,
            Submission::Decline { .. } => ResponseKind::No,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEffect {
    /// Hide the answer buttons and open the form for `kind`.
    ShowForm(ResponseKind),
    /// Close any form and clear its fields.
    ShowIdle,
    ShowSuccess { share_url: String },
    /// Authoritative counts after a read of the store.
    Counts(Counts),
    Celebrate,
    /// Short-lived message, e.g. after a decline.
    Acknowledge(String),
    /// Submission rejected; the form stays open.
    Invalid(String),
    /// The store could not be written; the form stays open.
    WriteFailed(String),
}

pub struct RsvpView {
    store: ResponseStore,
    phase: Phase,
    share_url: String,
    counts: Counts,
}

impl RsvpView {
    pub fn new(store: ResponseStore, share_url: impl Into<String>) -> Self {
        let counts = store.counts();
        Self {
            store,
            phase: Phase::Idle,
            share_url: share_url.into(),
            counts,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Counts as of the last read of the store.
    pub fn counts(&self) -> Counts {
        self.counts
    }

    pub fn share_url(&self) -> &str {
        &self.share_url
    }

    pub fn store(&self) -> &ResponseStore {
        &self.store
    }

    pub fn select(&mut self, kind: ResponseKind) -> Vec<ViewEffect> {
        self.phase = match kind {
            ResponseKind::Yes => Phase::AcceptingForm,
            ResponseKind::No => Phase::DecliningForm,
        };
        vec![ViewEffect::ShowForm(kind)]
    }

    /// Leave a form without submitting.
    pub fn cancel(&mut self) -> Vec<ViewEffect> {
        if !self.phase.is_form() {
            return vec![];
        }
        self.phase = Phase::Idle;
        vec![ViewEffect::ShowIdle]
    }

    /// Handle a form submission. Submissions that don't match the open form
    /// are ignored.
    pub fn submit(&mut self, submission: Submission, now: DateTime<Utc>) -> Vec<ViewEffect> {
        let expected = match self.phase {
            Phase::AcceptingForm => ResponseKind::Yes,
            Phase::DecliningForm => ResponseKind::No,
            Phase::Idle | Phase::Success => return vec![],
        };
        if submission.kind() != expected {
            return vec![];
        }

        let record = match submission {
            Submission::Accept { name, email } => {
                let (name, email) = (name.trim(), email.trim());
                if name.is_empty() || email.is_empty() {
                    return vec![ViewEffect::Invalid(MISSING_FIELDS_NOTICE.to_string())];
                }
                ResponseRecord::Accepted(Accepted::new(name, email, now))
            }
            Submission::Decline { message } => {
                ResponseRecord::Declined(Declined::with_message(&message, now))
            }
        };

        if let Err(err) = self.store.append(record) {
            tracing::error!(error = %err, "failed to save response");
            return vec![ViewEffect::WriteFailed(format!("Could not save your response: {}", err))];
        }
        self.counts = self.store.counts();

        match expected {
            ResponseKind::Yes => {
                self.phase = Phase::Success;
                vec![
                    ViewEffect::Counts(self.counts),
                    ViewEffect::ShowSuccess {
                        share_url: self.share_url.clone(),
                    },
                    ViewEffect::Celebrate,
                ]
            }
            ResponseKind::No => {
                self.phase = Phase::Idle;
                vec![
                    ViewEffect::ShowIdle,
                    ViewEffect::Counts(self.counts),
                    ViewEffect::Acknowledge(DECLINE_ACKNOWLEDGMENT.to_string()),
                ]
            }
        }
    }
}
