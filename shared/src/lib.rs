//! Domain crate for the QuickBiteRush site
//!
//! Holds the mock catalog, the view models built from it, and the few pieces
//! of behavior the pages have: order filtering, delivery timeline derivation,
//! the onboarding wizard and support ticket validation.

pub mod catalog;
pub mod errors;
pub mod logging;
pub mod onboarding;
pub mod orders;
pub mod support;
pub mod tracking;
pub mod types;

pub use errors::*;
pub use types::*;

pub use onboarding::{Registration, RegistrationDraft, WizardStep};
pub use orders::{OrderAction, OrderQuery, StatusFilter};
pub use support::{TicketForm, TicketSubmission};
