//! Coercion of loose request payloads into typed rows, followed by the
//! field checks the create path requires.

use crate::errors::ValidationError;
use crate::models::{CreateEntryRequest, DateInput, EntryChanges, NewEntry, UpdateEntryRequest};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use uuid::Uuid;

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Create payload after coercion, before validation.
#[derive(Debug, Clone)]
pub struct CoercedCreate {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub scheduled_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Parses a date-like input. Offsets are normalised to UTC; inputs without
/// one are read as UTC, and bare dates land on midnight. Only years
/// 0000-9999 are accepted so every stored value reads back as RFC 3339.
pub fn parse_date(field: &'static str, input: &DateInput) -> Result<DateTime<Utc>, ValidationError> {
    parse_any(input)
        .filter(|dt| (0..=9999).contains(&dt.year()))
        .ok_or_else(|| ValidationError::InvalidDate {
            field,
            value: match input {
                DateInput::Flag(value) => value.to_string(),
                DateInput::Millis(value) => value.to_string(),
                DateInput::Text(value) => value.clone(),
            },
        })
}

fn parse_any(input: &DateInput) -> Option<DateTime<Utc>> {
    let raw = match input {
        DateInput::Flag(_) => return None,
        DateInput::Millis(millis) if millis.is_finite() => {
            return DateTime::from_timestamp_millis(millis.trunc() as i64);
        }
        DateInput::Millis(_) => return None,
        DateInput::Text(raw) => raw.trim(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Falsy or absent inputs become `now`; anything else must parse.
fn date_or_now(
    field: &'static str,
    input: Option<&DateInput>,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, ValidationError> {
    match input {
        Some(input) if !input.is_falsy() => parse_date(field, input),
        _ => Ok(now),
    }
}

pub fn coerce_create(
    request: CreateEntryRequest,
    now: DateTime<Utc>,
) -> Result<CoercedCreate, ValidationError> {
    let scheduled_date = date_or_now("scheduled_date", request.scheduled_date.as_ref(), now)?;
    let created_at = date_or_now("created_at", request.created_at.as_ref(), now)?;

    Ok(CoercedCreate {
        id: request.id.filter(|id| !id.trim().is_empty()),
        title: request.title,
        description: request.description,
        scheduled_date,
        created_at,
    })
}

pub fn validate_create(coerced: CoercedCreate) -> Result<NewEntry, ValidationError> {
    let title = coerced
        .title
        .filter(|title| !title.trim().is_empty())
        .ok_or(ValidationError::MissingTitle)?;
    let description = coerced
        .description
        .filter(|description| !description.trim().is_empty())
        .ok_or(ValidationError::MissingDescription)?;

    Ok(NewEntry {
        id: coerced.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
        title,
        description,
        created_at: coerced.created_at,
        scheduled_date: coerced.scheduled_date,
    })
}

/// Update coercion. `scheduled_date` is only touched when supplied, while
/// `created_at` falls back to `now` whenever it is absent or falsy. Title and
/// description pass through unchecked.
pub fn coerce_update(
    request: UpdateEntryRequest,
    now: DateTime<Utc>,
) -> Result<EntryChanges, ValidationError> {
    let scheduled_date = match request.scheduled_date.as_ref() {
        Some(input) if !input.is_falsy() => Some(parse_date("scheduled_date", input)?),
        _ => None,
    };
    let created_at = date_or_now("created_at", request.created_at.as_ref(), now)?;

    Ok(EntryChanges {
        title: request.title,
        description: request.description,
        scheduled_date,
        created_at,
    })
}
