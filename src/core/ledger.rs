//! Donation history: append-only list in creation order.

use crate::errors::AppResult;
use crate::models::donation::Donation;
use crate::store::RecordStore;

/// Append a record and persist the full history.
pub fn append(
    history: &mut Vec<Donation>,
    store: &RecordStore,
    record: Donation,
) -> AppResult<()> {
    history.push(record);
    store.save_donations(history)
}

/// Case-insensitive exact match on the donor name.
pub fn find_by_donor<'a>(history: &'a [Donation], donor: &str) -> Vec<&'a Donation> {
    let donor = donor.trim();
    history
        .iter()
        .filter(|d| d.donor.eq_ignore_ascii_case(donor))
        .collect()
}

/// Case-insensitive exact match on the recorded NGO name. Records keep the
/// name the NGO had at donation time, so this also finds donations to NGOs
/// that were deleted afterwards.
pub fn find_by_ngo<'a>(history: &'a [Donation], ngo: &str) -> Vec<&'a Donation> {
    let ngo = ngo.trim();
    history
        .iter()
        .filter(|d| d.ngo.eq_ignore_ascii_case(ngo))
        .collect()
}
