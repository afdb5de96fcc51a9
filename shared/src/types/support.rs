//! Support center view models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue type offered by the ticket form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketType {
    DeliveryIssue,
    AccountIssue,
    PaymentIssue,
    FeatureRequest,
    Other,
}

impl TicketType {
    pub const ALL: [TicketType; 5] = [
        TicketType::DeliveryIssue,
        TicketType::AccountIssue,
        TicketType::PaymentIssue,
        TicketType::FeatureRequest,
        TicketType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::DeliveryIssue => "delivery_issue",
            TicketType::AccountIssue => "account_issue",
            TicketType::PaymentIssue => "payment_issue",
            TicketType::FeatureRequest => "feature_request",
            TicketType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketType::DeliveryIssue => "Delivery Issue",
            TicketType::AccountIssue => "Account Issue",
            TicketType::PaymentIssue => "Payment Issue",
            TicketType::FeatureRequest => "Feature Request",
            TicketType::Other => "Other",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TicketType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown ticket type: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    InProgress,
    AwaitingResponse,
}

impl TicketStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::InProgress => "In Progress",
            TicketStatus::AwaitingResponse => "Awaiting Response",
        }
    }
}

/// Open ticket listed beside the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveTicket {
    pub id: String,
    pub kind: TicketType,
    pub subject: String,
    pub status: TicketStatus,
    pub created: String,
    pub last_update: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}
