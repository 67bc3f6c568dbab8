//! Transition policy: which action is legal from which state, and where it leads.
//!
//! Legality is a single lookup in [`TRANSITIONS`]. Any `(action, state)` pair
//! without a row is rejected with [`DomainError::InvalidTransition`].

use serde::{Deserialize, Serialize};

use billflow_core::{DomainError, DomainResult};

use crate::state::{InvoiceAction, InvoiceState};

/// Every legal transition as `(action, from, to)`.
pub const TRANSITIONS: &[(InvoiceAction, InvoiceState, InvoiceState)] = &[
    (InvoiceAction::Finalize, InvoiceState::Draft, InvoiceState::Open),
    (InvoiceAction::Pay, InvoiceState::Open, InvoiceState::Paid),
    (InvoiceAction::Pay, InvoiceState::Uncollectable, InvoiceState::Paid),
    (InvoiceAction::Void, InvoiceState::Open, InvoiceState::Void),
    (InvoiceAction::Void, InvoiceState::Uncollectable, InvoiceState::Void),
    (InvoiceAction::Cancel, InvoiceState::Open, InvoiceState::Uncollectable),
];

/// Outcome of a permitted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub action: InvoiceAction,
    pub from: InvoiceState,
    pub to: InvoiceState,
}

impl core::fmt::Display for Transition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} - changing from {} to {}",
            self.action.verb(),
            self.from.label(),
            self.to.label()
        )
    }
}

/// Decide the outcome of `action` requested from `state`.
pub fn decide(action: InvoiceAction, state: InvoiceState) -> DomainResult<Transition> {
    TRANSITIONS
        .iter()
        .find(|(a, from, _)| *a == action && *from == state)
        .map(|&(action, from, to)| Transition { action, from, to })
        .ok_or_else(|| DomainError::invalid_transition(action.verb(), state.as_str()))
}

pub fn finalize(state: InvoiceState) -> DomainResult<Transition> {
    decide(InvoiceAction::Finalize, state)
}

pub fn pay(state: InvoiceState) -> DomainResult<Transition> {
    decide(InvoiceAction::Pay, state)
}

pub fn void(state: InvoiceState) -> DomainResult<Transition> {
    decide(InvoiceAction::Void, state)
}

pub fn cancel(state: InvoiceState) -> DomainResult<Transition> {
    decide(InvoiceAction::Cancel, state)
}

/// Actions legal from `state`, in table order.
pub fn allowed_actions(state: InvoiceState) -> Vec<InvoiceAction> {
    TRANSITIONS
        .iter()
        .filter(|(_, from, _)| *from == state)
        .map(|(action, _, _)| *action)
        .collect()
}
