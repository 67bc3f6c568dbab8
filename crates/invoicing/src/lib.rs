//! Invoicing domain module (table-driven lifecycle).
//!
//! This crate contains the invoice state machine, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod book;
pub mod invoice;
pub mod policy;
pub mod state;

pub use book::InvoiceBook;
pub use invoice::{Amount, Invoice, InvoiceId, InvoiceSnapshot};
pub use policy::{Transition, allowed_actions, decide};
pub use state::{InvoiceAction, InvoiceState};
