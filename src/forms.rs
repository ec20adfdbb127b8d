use crate::context::EntryContext;
use crate::errors::ClientError;
use crate::models::{CreateEntryRequest, DateInput, Entry};
use chrono::{Local, NaiveDate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub description: String,
    pub created_at: NaiveDate,
    pub scheduled_date: NaiveDate,
}

impl EntryDraft {
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            created_at: today,
            scheduled_date: today,
        }
    }

    pub fn to_request(&self) -> CreateEntryRequest {
        CreateEntryRequest {
            id: None,
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            created_at: Some(DateInput::Text(self.created_at.format("%Y-%m-%d").to_string())),
            scheduled_date: Some(DateInput::Text(self.scheduled_date.format("%Y-%m-%d").to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FieldError {
    #[error("unknown field {0}")]
    Unknown(String),
    #[error("{0} must be a YYYY-MM-DD date")]
    BadDate(&'static str),
}

/// Local draft state behind the creation form.
#[derive(Debug, Clone)]
pub struct NewEntryForm {
    draft: EntryDraft,
}

impl Default for NewEntryForm {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl NewEntryForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            draft: EntryDraft::blank(today),
        }
    }

    pub fn draft(&self) -> &EntryDraft {
        &self.draft
    }

    /// Applies an input change by field name, as the form inputs report it.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), FieldError> {
        match name {
            "title" => self.draft.title = value.to_string(),
            "description" => self.draft.description = value.to_string(),
            "created_at" => self.draft.created_at = parse_input_date("created_at", value)?,
            "scheduled_date" => self.draft.scheduled_date = parse_input_date("scheduled_date", value)?,
            other => return Err(FieldError::Unknown(other.to_string())),
        }
        Ok(())
    }

    /// Clears the form straight away and saves the previous draft. A failed
    /// save puts the draft back.
    pub async fn submit(&mut self, context: &mut EntryContext) -> Result<Entry, ClientError> {
        let today = Local::now().date_naive();
        let draft = std::mem::replace(&mut self.draft, EntryDraft::blank(today));

        match context.save_entry(&draft.to_request()).await {
            Ok(entry) => Ok(entry.clone()),
            Err(err) => {
                self.draft = draft;
                Err(err)
            }
        }
    }
}

fn parse_input_date(field: &'static str, value: &str) -> Result<NaiveDate, FieldError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| FieldError::BadDate(field))
}
