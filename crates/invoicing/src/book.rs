//! In-memory collection owning invoices by id.
//!
//! Single-threaded: wrap the book in your own lock if several callers share it.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use billflow_core::{DomainError, DomainResult};

use crate::invoice::{Amount, Invoice, InvoiceId, InvoiceSnapshot};
use crate::policy::Transition;
use crate::state::InvoiceAction;

#[derive(Debug, Default)]
pub struct InvoiceBook {
    invoices: BTreeMap<InvoiceId, Invoice>,
}

impl InvoiceBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a draft invoice stamped with the current time.
    pub fn create(&mut self, id: InvoiceId, amount: Amount) -> DomainResult<InvoiceSnapshot> {
        self.create_at(id, amount, Utc::now())
    }

    pub fn create_at(
        &mut self,
        id: InvoiceId,
        amount: Amount,
        created_at: DateTime<Utc>,
    ) -> DomainResult<InvoiceSnapshot> {
        if self.invoices.contains_key(&id) {
            return Err(DomainError::conflict(format!("invoice {id} already exists")));
        }

        let invoice = Invoice::new_at(id, amount, created_at);
        let snapshot = invoice.snapshot();
        self.invoices.insert(id, invoice);

        tracing::debug!(invoice_id = %id, amount = %amount, "invoice created");
        Ok(snapshot)
    }

    pub fn get(&self, id: InvoiceId) -> Option<&Invoice> {
        self.invoices.get(&id)
    }

    pub fn snapshot(&self, id: InvoiceId) -> Option<InvoiceSnapshot> {
        self.invoices.get(&id).map(Invoice::snapshot)
    }

    /// Snapshots of every invoice, ordered by id.
    pub fn list(&self) -> Vec<InvoiceSnapshot> {
        self.invoices.values().map(Invoice::snapshot).collect()
    }

    pub fn apply(&mut self, id: InvoiceId, action: InvoiceAction) -> DomainResult<Transition> {
        let invoice = self.invoices.get_mut(&id).ok_or_else(DomainError::not_found)?;
        invoice.apply_action(action)
    }

    /// Remove an invoice from the book, ending its lifetime.
    pub fn discard(&mut self, id: InvoiceId) -> Option<Invoice> {
        self.invoices.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::InvoiceState;

    fn id(raw: u64) -> InvoiceId {
        InvoiceId::new(raw).unwrap()
    }

    #[test]
    fn create_rejects_duplicate_ids() {
        let mut book = InvoiceBook::new();
        book.create(id(1001), Amount::new(1500)).unwrap();

        let err = book.create(id(1001), Amount::new(1)).unwrap_err();
        assert_eq!(err, DomainError::conflict("invoice 1001 already exists"));
        assert_eq!(book.len(), 1);
        assert_eq!(book.get(id(1001)).unwrap().amount(), Amount::new(1500));
    }

    #[test]
    fn created_snapshot_survives_json_round_trip() {
        let mut book = InvoiceBook::new();
        let snapshot = book.create(id(1), Amount::new(1)).unwrap();

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: InvoiceSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
        assert_eq!(book.snapshot(id(1)).unwrap(), snapshot);
    }

    #[test]
    fn apply_to_unknown_invoice_is_not_found() {
        let mut book = InvoiceBook::new();
        let err = book.apply(id(9), InvoiceAction::Finalize).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn apply_delegates_to_the_invoice() {
        let mut book = InvoiceBook::new();
        book.create(id(1002), Amount::new(750)).unwrap();

        book.apply(id(1002), InvoiceAction::Finalize).unwrap();
        book.apply(id(1002), InvoiceAction::Void).unwrap();
        assert_eq!(book.snapshot(id(1002)).unwrap().state, InvoiceState::Void);

        let err = book.apply(id(1002), InvoiceAction::Pay).unwrap_err();
        assert_eq!(err.to_string(), "Cannot pay invoice in void state");
    }

    #[test]
    fn list_is_ordered_by_id_and_discard_removes() {
        let mut book = InvoiceBook::new();
        for raw in [1005, 1001, 1003] {
            book.create(id(raw), Amount::new(raw * 10)).unwrap();
        }

        let ids: Vec<u64> = book.list().iter().map(|s| s.id.get()).collect();
        assert_eq!(ids, vec![1001, 1003, 1005]);

        let removed = book.discard(id(1003)).unwrap();
        assert_eq!(removed.id_typed(), id(1003));
        assert!(book.get(id(1003)).is_none());
        assert!(book.discard(id(1003)).is_none());
        assert_eq!(book.len(), 2);
        assert!(!book.is_empty());
    }
}
