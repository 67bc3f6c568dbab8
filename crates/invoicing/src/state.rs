use core::str::FromStr;

use serde::{Deserialize, Serialize};

use billflow_core::DomainError;

/// Invoice status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceState {
    Draft,
    Open,
    Paid,
    Void,
    Uncollectable,
}

impl InvoiceState {
    pub const ALL: [InvoiceState; 5] = [
        InvoiceState::Draft,
        InvoiceState::Open,
        InvoiceState::Paid,
        InvoiceState::Void,
        InvoiceState::Uncollectable,
    ];

    /// Lowercase wire name (errors, snapshots).
    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceState::Draft => "draft",
            InvoiceState::Open => "open",
            InvoiceState::Paid => "paid",
            InvoiceState::Void => "void",
            InvoiceState::Uncollectable => "uncollectable",
        }
    }

    /// Capitalised name used in transition descriptions.
    pub fn label(self) -> &'static str {
        match self {
            InvoiceState::Draft => "Draft",
            InvoiceState::Open => "Open",
            InvoiceState::Paid => "Paid",
            InvoiceState::Void => "Void",
            InvoiceState::Uncollectable => "Uncollectable",
        }
    }

    /// `Paid` and `Void` accept no further actions.
    pub fn is_terminal(self) -> bool {
        matches!(self, InvoiceState::Paid | InvoiceState::Void)
    }
}

impl core::fmt::Display for InvoiceState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(InvoiceState::Draft),
            "open" => Ok(InvoiceState::Open),
            "paid" => Ok(InvoiceState::Paid),
            "void" => Ok(InvoiceState::Void),
            "uncollectable" => Ok(InvoiceState::Uncollectable),
            _ => Err(DomainError::validation(
                "state must be one of: draft, open, paid, void, uncollectable",
            )),
        }
    }
}

/// Lifecycle actions a caller may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceAction {
    Finalize,
    Pay,
    Void,
    Cancel,
}

impl InvoiceAction {
    pub const ALL: [InvoiceAction; 4] = [
        InvoiceAction::Finalize,
        InvoiceAction::Pay,
        InvoiceAction::Void,
        InvoiceAction::Cancel,
    ];

    pub fn verb(self) -> &'static str {
        match self {
            InvoiceAction::Finalize => "finalize",
            InvoiceAction::Pay => "pay",
            InvoiceAction::Void => "void",
            InvoiceAction::Cancel => "cancel",
        }
    }
}

impl core::fmt::Display for InvoiceAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.verb())
    }
}
