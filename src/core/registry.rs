//! Operations on the in-memory NGO list. Every mutation persists the full
//! list immediately; a rejected operation never touches disk.
//!
//! Index convention: `remove_at` (and the donate selection) are 1-indexed
//! against insertion order, the order the plain listing displays. The
//! donation-sorted view is display-only.

use crate::errors::{AppError, AppResult};
use crate::models::ngo::Ngo;
use crate::store::RecordStore;
use std::cmp::Ordering;

/// Display-only view sorted by total donations, descending. The sort is
/// stable, so NGOs with equal totals keep their insertion order.
pub fn sorted_view(ngos: &[Ngo]) -> Vec<&Ngo> {
    let mut view: Vec<&Ngo> = ngos.iter().collect();
    view.sort_by(|a, b| {
        b.donations
            .partial_cmp(&a.donations)
            .unwrap_or(Ordering::Equal)
    });
    view
}

/// Append a new NGO with a zero total and persist. Both fields are trimmed;
/// an empty field rejects the whole operation before any mutation.
pub fn add(ngos: &mut Vec<Ngo>, store: &RecordStore, name: &str, cause: &str) -> AppResult<()> {
    let name = name.trim();
    let cause = cause.trim();

    if name.is_empty() {
        return Err(AppError::EmptyField("NGO name"));
    }
    if cause.is_empty() {
        return Err(AppError::EmptyField("Cause"));
    }

    ngos.push(Ngo::new(name, cause));
    store.save_ngos(ngos)
}

/// Remove the NGO at the given 1-indexed insertion-order position and
/// persist. Returns the removed record.
pub fn remove_at(ngos: &mut Vec<Ngo>, store: &RecordStore, index: usize) -> AppResult<Ngo> {
    if ngos.is_empty() {
        return Err(AppError::NoNgos);
    }
    if index == 0 || index > ngos.len() {
        return Err(AppError::InvalidSelection(format!(
            "{} is out of range (1-{})",
            index,
            ngos.len()
        )));
    }

    let removed = ngos.remove(index - 1);
    store.save_ngos(ngos)?;
    Ok(removed)
}

/// Case-insensitive exact match on the cause. An empty result is a normal
/// "not found" report, not an error.
pub fn find_by_cause<'a>(ngos: &'a [Ngo], cause: &str) -> Vec<&'a Ngo> {
    let cause = cause.trim();
    ngos.iter()
        .filter(|n| n.cause.eq_ignore_ascii_case(cause))
        .collect()
}
