//! Support ticket form

use serde::{Deserialize, Serialize};

use crate::errors::{missing_fields, ValidationError};
use crate::types::TicketType;

/// Values typed into the ticket form. Kept as entered so a failed submission
/// can re-render them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketForm {
    pub ticket_type: Option<TicketType>,
    pub subject: String,
    pub message: String,
}

/// Ticket that passed validation and is ready to hand off
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketSubmission {
    pub ticket_type: TicketType,
    pub subject: String,
    pub message: String,
}

impl TicketForm {
    pub fn new(ticket_type: &str, subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            ticket_type: ticket_type.parse().ok(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Every field is required
    pub fn validate(&self) -> Result<TicketSubmission, ValidationError> {
        let kind = self.ticket_type.map(|t| t.as_str()).unwrap_or_default();
        let missing = missing_fields(&[
            ("ticket_type", kind),
            ("subject", self.subject.as_str()),
            ("message", self.message.as_str()),
        ]);

        match self.ticket_type {
            Some(ticket_type) if missing.is_empty() => Ok(TicketSubmission {
                ticket_type,
                subject: self.subject.clone(),
                message: self.message.clone(),
            }),
            _ => Err(ValidationError::IncompleteTicket { missing }),
        }
    }
}
