//! Core types used throughout the site
//!
//! Every entity here is a transient view model: built from the mock catalog or
//! from request input, read for rendering, then dropped.

pub mod dashboard;
pub mod delivery;
pub mod order;
pub mod support;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use dashboard::{Courier, CourierAvailability, OrderStats, RecentOrder};
pub use delivery::{Delivery, DeliveryItem, DeliveryTab, GeoPoint, LocationData, TrackingStep};
pub use order::{LineItem, Order, OrderStatus};
pub use support::{ActiveTicket, FaqEntry, TicketStatus, TicketType};

/// Page identifier for every route the site serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    Dashboard,
    Orders,
    Tracking,
    Support,
    Register,
    NotFound,
}

impl Page {
    /// Pages shown in the navigation bar, in display order
    pub const NAVIGATION: [Page; 5] = [
        Page::Home,
        Page::Dashboard,
        Page::Orders,
        Page::Tracking,
        Page::Support,
    ];

    /// Client-side path of the page
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Dashboard => "/dashboard",
            Page::Orders => "/orders",
            Page::Tracking => "/tracking",
            Page::Support => "/support",
            Page::Register => "/register",
            Page::NotFound => "/404",
        }
    }

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Dashboard => "Dashboard",
            Page::Orders => "Orders",
            Page::Tracking => "Tracking",
            Page::Support => "Support",
            Page::Register => "Register",
            Page::NotFound => "Not Found",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Home => write!(f, "home"),
            Page::Dashboard => write!(f, "dashboard"),
            Page::Orders => write!(f, "orders"),
            Page::Tracking => write!(f, "tracking"),
            Page::Support => write!(f, "support"),
            Page::Register => write!(f, "register"),
            Page::NotFound => write!(f, "not_found"),
        }
    }
}

/// Visual style of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// Transient notification rendered at the top of a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    /// Destructive toast titled "Error", the way every validation failure is surfaced
    pub fn error(description: impl Into<String>) -> Self {
        Self::destructive("Error", description)
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

/// Amount of money in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(pub u32);

impl Cents {
    pub fn dollars(&self) -> u32 {
        self.0 / 100
    }

    pub fn remainder(&self) -> u32 {
        self.0 % 100
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars(), self.remainder())
    }
}
