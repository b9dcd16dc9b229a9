use super::records::{CategoryTable, ContactRecord};
use crate::config::DueBasis;
use crate::error::DataError;
use chrono::{DateTime, Duration, Utc};

fn stamp_for(basis: DueBasis, contact: &ContactRecord) -> Option<&str> {
    match basis {
        DueBasis::LastSelected => contact.selected_on(),
        DueBasis::LastContacted => contact.contacted_on(),
    }
}

/// Whether `contact` is due at `now`.
///
/// A contact without a stamp is always due. Otherwise the stamp is read as
/// local midnight at `offset` (`±HH:MM`), and the contact is due once
/// stamp + interval lies strictly before `now`. An interval reaching past
/// the representable calendar never elapses.
pub fn is_due(
    contact: &ContactRecord,
    categories: &CategoryTable,
    basis: DueBasis,
    now: DateTime<Utc>,
    offset: &str,
) -> Result<bool, DataError> {
    let Some(stamp) = stamp_for(basis, contact) else {
        return Ok(true);
    };
    let weeks = categories
        .frequency_weeks(&contact.category)
        .ok_or_else(|| DataError::UnknownCategory {
            contact: contact.name.clone(),
            category: contact.category.clone(),
        })?;
    let since = local_midnight(stamp, offset).ok_or_else(|| DataError::InvalidDate {
        contact: contact.name.clone(),
        value: stamp.to_string(),
    })?;
    let due_at = Duration::try_weeks(i64::from(weeks))
        .and_then(|interval| since.checked_add_signed(interval));
    Ok(due_at.is_some_and(|due_at| due_at < now))
}

fn local_midnight(date: &str, offset: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&format!("{}T00:00:00.000{}", date.trim(), offset))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
