use core::str::FromStr;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use billflow_core::{AggregateRoot, DomainError, DomainResult, ValueObject};

use crate::policy::{self, Transition};
use crate::state::{InvoiceAction, InvoiceState};

/// Invoice identifier. Always positive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct InvoiceId(u64);

impl InvoiceId {
    pub fn new(id: u64) -> DomainResult<Self> {
        if id == 0 {
            return Err(DomainError::invalid_id("InvoiceId: must be positive"));
        }
        Ok(Self(id))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<u64> for InvoiceId {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<InvoiceId> for u64 {
    fn from(value: InvoiceId) -> Self {
        value.0
    }
}

impl FromStr for InvoiceId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("InvoiceId: {e}")))?;
        Self::new(raw)
    }
}

/// Amount in smallest currency unit (e.g., cents).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    pub fn new(minor_units: u64) -> Self {
        Self(minor_units)
    }

    pub fn minor_units(self) -> u64 {
        self.0
    }
}

impl ValueObject for Amount {}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Aggregate root: Invoice.
///
/// `state` is private and written only in [`Invoice::apply_action`], after the
/// policy has approved the transition. `id`, `amount` and `created_at` are
/// fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    id: InvoiceId,
    amount: Amount,
    state: InvoiceState,
    created_at: DateTime<Utc>,
    version: u64,
}

impl Invoice {
    /// Create a draft invoice stamped with the current time.
    pub fn new(id: InvoiceId, amount: Amount) -> Self {
        Self::new_at(id, amount, Utc::now())
    }

    /// Create a draft invoice with an explicit creation time.
    ///
    /// `created_at` is truncated to whole seconds, the precision snapshots
    /// are serialized with.
    pub fn new_at(id: InvoiceId, amount: Amount, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            amount,
            state: InvoiceState::Draft,
            created_at: created_at.trunc_subsecs(0),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> InvoiceId {
        self.id
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn state(&self) -> InvoiceState {
        self.state
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn finalize(&mut self) -> DomainResult<Transition> {
        self.apply_action(InvoiceAction::Finalize)
    }

    pub fn pay(&mut self) -> DomainResult<Transition> {
        self.apply_action(InvoiceAction::Pay)
    }

    pub fn void(&mut self) -> DomainResult<Transition> {
        self.apply_action(InvoiceAction::Void)
    }

    pub fn cancel(&mut self) -> DomainResult<Transition> {
        self.apply_action(InvoiceAction::Cancel)
    }

    /// Ask the policy about `action` and, if permitted, move to the new state.
    ///
    /// On rejection the invoice is left untouched and the error is returned
    /// as-is.
    pub fn apply_action(&mut self, action: InvoiceAction) -> DomainResult<Transition> {
        let transition = policy::decide(action, self.state).inspect_err(|err| {
            tracing::warn!(invoice_id = %self.id, error = %err, "invoice transition rejected");
        })?;

        self.state = transition.to;
        self.version += 1;

        tracing::info!(
            invoice_id = %self.id,
            from = transition.from.as_str(),
            to = transition.to.as_str(),
            "{transition}"
        );
        Ok(transition)
    }

    pub fn snapshot(&self) -> InvoiceSnapshot {
        InvoiceSnapshot {
            id: self.id,
            amount: self.amount,
            state: self.state,
            created_at: self.created_at,
        }
    }
}

impl AggregateRoot for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Read-only copy of an invoice for rendering and serialization.
///
/// Serializes as `{"id": 1001, "amount": 1500, "state": "draft",
/// "created_at": "2024-05-01T12:00:00Z"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceSnapshot {
    pub id: InvoiceId,
    pub amount: Amount,
    pub state: InvoiceState,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// RFC 3339, UTC, second precision.
mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
