//! Typed collection implementation.

use crate::error::{StoreError, StoreResult};
use clubsync_model::{RecordId, ResourceRecord, Stored};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A typed collection of records for one resource kind.
///
/// `Collection<T>` keeps records in insertion order and hands out clones,
/// so callers never hold a lock. All mutating operations go through the
/// shared connectivity flag: once the owning store is closed, every
/// operation fails with [`StoreError::Disconnected`].
///
/// Filtering and aggregation are host-language constructs, not a query
/// DSL:
///
/// ```rust,ignore
/// let total = store.donations().sum_of(|d| d.amount)?;
/// let paid: Vec<_> = store.members().list()?
///     .into_iter()
///     .filter(|m| m.fields.role == "Player")
///     .collect();
/// ```
#[derive(Debug)]
pub struct Collection<T: ResourceRecord> {
    /// Records, in insertion order.
    rows: RwLock<Vec<Stored<T>>>,
    /// Connectivity flag shared with the owning store.
    connected: Arc<AtomicBool>,
}

impl<T: ResourceRecord> Collection<T> {
    /// Creates an empty collection bound to the store's connectivity flag.
    pub(crate) fn new(connected: Arc<AtomicBool>) -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            connected,
        }
    }

    fn guard(&self) -> StoreResult<()> {
        if self.connected.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Disconnected)
        }
    }

    /// Returns all records in insertion order; empty when none exist.
    pub fn list(&self) -> StoreResult<Vec<Stored<T>>> {
        self.guard()?;
        Ok(self.rows.read().clone())
    }

    /// Stores new fields under a freshly issued identifier and returns
    /// the stored record.
    ///
    /// Two creates with identical fields yield two records with distinct
    /// identifiers.
    pub fn create(&self, fields: T) -> StoreResult<Stored<T>> {
        self.guard()?;
        let stored = Stored::new(fields);
        self.rows.write().push(stored.clone());
        Ok(stored)
    }

    /// Replaces the full document stored under `id`.
    ///
    /// Returns `Ok(None)` when no record with that identifier exists;
    /// callers treat that as a non-fatal not-found indication.
    pub fn update(&self, id: RecordId, fields: T) -> StoreResult<Option<Stored<T>>> {
        self.guard()?;
        let mut rows = self.rows.write();
        match rows.iter_mut().find(|r| r.id == id) {
            Some(row) => {
                row.fields = fields;
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    /// Removes the record stored under `id`.
    ///
    /// Idempotent in effect: deleting an absent identifier returns
    /// `Ok(false)` rather than an error.
    pub fn delete(&self, id: RecordId) -> StoreResult<bool> {
        self.guard()?;
        let mut rows = self.rows.write();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() != before)
    }

    /// Returns the number of records in the collection.
    pub fn count(&self) -> StoreResult<u64> {
        self.guard()?;
        Ok(self.rows.read().len() as u64)
    }

    /// Sums a numeric projection over every record; 0 when empty.
    pub fn sum_of<F>(&self, f: F) -> StoreResult<f64>
    where
        F: Fn(&T) -> f64,
    {
        self.guard()?;
        Ok(self.rows.read().iter().map(|r| f(&r.fields)).sum())
    }

    /// Replaces the entire contents, preserving the given order.
    ///
    /// Used when restoring a snapshot; not part of the public CRUD
    /// contract.
    pub(crate) fn replace_all(&self, rows: Vec<Stored<T>>) {
        *self.rows.write() = rows;
    }

    /// Copies the entire contents out, in insertion order.
    pub(crate) fn dump(&self) -> Vec<Stored<T>> {
        self.rows.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubsync_model::Donation;

    fn donation(amount: f64) -> Donation {
        Donation {
            donor_name: "Anon".into(),
            amount,
            date: "2025-01-01".into(),
            purpose: "General fund".into(),
        }
    }

    fn open_collection() -> (Collection<Donation>, Arc<AtomicBool>) {
        let connected = Arc::new(AtomicBool::new(true));
        (Collection::new(Arc::clone(&connected)), connected)
    }

    #[test]
    fn create_issues_distinct_ids_for_identical_fields() {
        let (coll, _) = open_collection();
        let a = coll.create(donation(10.0)).unwrap();
        let b = coll.create(donation(10.0)).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.fields, b.fields);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let (coll, _) = open_collection();
        let first = coll.create(donation(1.0)).unwrap();
        let second = coll.create(donation(2.0)).unwrap();
        let third = coll.create(donation(3.0)).unwrap();

        let ids: Vec<_> = coll.list().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![first.id, second.id, third.id]);
    }

    #[test]
    fn update_replaces_full_document() {
        let (coll, _) = open_collection();
        let stored = coll.create(donation(10.0)).unwrap();

        let updated = coll.update(stored.id, donation(99.0)).unwrap().unwrap();
        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.fields.amount, 99.0);

        let listed = coll.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].fields.amount, 99.0);
    }

    #[test]
    fn update_missing_returns_none() {
        let (coll, _) = open_collection();
        let result = coll.update(RecordId::new(), donation(1.0)).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn delete_is_idempotent() {
        let (coll, _) = open_collection();
        let stored = coll.create(donation(5.0)).unwrap();

        assert!(coll.delete(stored.id).unwrap());
        assert!(!coll.delete(stored.id).unwrap());
        assert_eq!(coll.count().unwrap(), 0);
    }

    #[test]
    fn sum_of_empty_collection_is_zero() {
        let (coll, _) = open_collection();
        assert_eq!(coll.sum_of(|d| d.amount).unwrap(), 0.0);
    }

    #[test]
    fn sum_of_folds_all_records() {
        let (coll, _) = open_collection();
        coll.create(donation(10.0)).unwrap();
        coll.create(donation(2.5)).unwrap();
        assert_eq!(coll.sum_of(|d| d.amount).unwrap(), 12.5);
    }

    #[test]
    fn operations_fail_when_disconnected() {
        let (coll, connected) = open_collection();
        coll.create(donation(1.0)).unwrap();

        connected.store(false, Ordering::SeqCst);

        assert!(matches!(coll.list(), Err(StoreError::Disconnected)));
        assert!(matches!(
            coll.create(donation(2.0)),
            Err(StoreError::Disconnected)
        ));
        assert!(matches!(
            coll.delete(RecordId::new()),
            Err(StoreError::Disconnected)
        ));
        assert!(matches!(coll.count(), Err(StoreError::Disconnected)));
    }
}
