//! Dirty-field diff engine.
//!
//! Pure comparisons between candidate values and the snapshot. Dates are
//! compared by calendar day, so a stored `2024-01-01T13:45:00` equals a
//! candidate `2024-01-01`. Title and content compare raw.

use crate::domain::parse_date;

use super::fields::{Candidates, Field};
use super::snapshot::Snapshot;

/// Whether a single candidate value differs from the snapshot.
///
/// An unparsable date is never dirty: there is nothing valid to persist.
pub fn field_is_dirty(field: Field, candidate: &str, snapshot: &Snapshot) -> bool {
    match field {
        Field::Title => candidate != snapshot.title,
        Field::Content => candidate != snapshot.content,
        Field::Date => match parse_date(candidate) {
            Ok(date) => date != snapshot.date.date(),
            Err(e) => {
                tracing::debug!(candidate = %candidate, error = %e, "Ignoring unparsable date");
                false
            }
        },
    }
}

/// The fields whose candidate differs from the snapshot.
pub fn dirty_fields(candidates: &Candidates, snapshot: &Snapshot) -> Vec<Field> {
    candidates
        .iter()
        .filter(|(field, value)| field_is_dirty(*field, value, snapshot))
        .map(|(field, _)| field)
        .collect()
}
