//! Walks a handful of invoices through their lifecycle and prints every step
//! as one JSON line on stdout.

use std::io::Write;

use anyhow::{Context, bail};
use serde_json::json;

use billflow_core::DomainError;
use billflow_invoicing::{Amount, InvoiceAction, InvoiceBook, InvoiceId, InvoiceState};

struct Scenario {
    id: u64,
    amount: u64,
    actions: &'static [InvoiceAction],
    /// Expected final state and, if any, the message of the last rejection.
    expect: (InvoiceState, Option<&'static str>),
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        id: 1001,
        amount: 1500,
        actions: &[InvoiceAction::Finalize, InvoiceAction::Pay, InvoiceAction::Pay],
        expect: (InvoiceState::Paid, Some("Cannot pay invoice in paid state")),
    },
    Scenario {
        id: 1002,
        amount: 750,
        actions: &[InvoiceAction::Finalize, InvoiceAction::Void],
        expect: (InvoiceState::Void, None),
    },
    Scenario {
        id: 1003,
        amount: 2000,
        actions: &[InvoiceAction::Finalize, InvoiceAction::Cancel, InvoiceAction::Pay],
        expect: (InvoiceState::Paid, None),
    },
    Scenario {
        id: 1004,
        amount: 500,
        actions: &[InvoiceAction::Finalize, InvoiceAction::Cancel, InvoiceAction::Void],
        expect: (InvoiceState::Void, None),
    },
    Scenario {
        id: 1005,
        amount: 300,
        actions: &[InvoiceAction::Pay],
        expect: (InvoiceState::Draft, Some("Cannot pay invoice in draft state")),
    },
];

fn main() -> anyhow::Result<()> {
    billflow_observability::init();

    let mut book = InvoiceBook::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for scenario in SCENARIOS {
        run(&mut book, scenario, &mut out)
            .with_context(|| format!("scenario for invoice {}", scenario.id))?;
    }

    tracing::info!(invoices = book.len(), "all scenarios completed");
    Ok(())
}

fn run(book: &mut InvoiceBook, scenario: &Scenario, out: &mut impl Write) -> anyhow::Result<()> {
    let id = InvoiceId::new(scenario.id)?;
    let snapshot = book.create(id, Amount::new(scenario.amount))?;
    writeln!(out, "{}", serde_json::to_string(&snapshot)?)?;

    let mut last_rejection: Option<String> = None;
    for &action in scenario.actions {
        match book.apply(id, action) {
            Ok(transition) => {
                let snapshot = book.snapshot(id).context("invoice vanished from book")?;
                let line = json!({ "transition": transition.to_string(), "invoice": snapshot });
                writeln!(out, "{line}")?;
            }
            Err(err @ DomainError::InvalidTransition { .. }) => {
                let line = json!({ "error": err.code(), "message": err.to_string() });
                writeln!(out, "{line}")?;
                last_rejection = Some(err.to_string());
            }
            Err(err) => return Err(err.into()),
        }
    }

    let (expected_state, expected_rejection) = scenario.expect;
    let final_state = book.get(id).context("invoice vanished from book")?.state();
    if final_state != expected_state {
        bail!("ended in {final_state}, expected {expected_state}");
    }
    if last_rejection.as_deref() != expected_rejection {
        bail!("rejection {last_rejection:?}, expected {expected_rejection:?}");
    }
    Ok(())
}
