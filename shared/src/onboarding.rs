//! Business onboarding wizard
//!
//! Three linear steps: business info, owner info, menu setup. The whole draft
//! is a plain value; the web layer carries it between requests inside the
//! form and it is discarded once the visitor leaves the page.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::{missing_fields, SharedError, SharedResult, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    #[default]
    BusinessInfo,
    OwnerInfo,
    MenuSetup,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::BusinessInfo,
        WizardStep::OwnerInfo,
        WizardStep::MenuSetup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::BusinessInfo => "business-info",
            WizardStep::OwnerInfo => "owner-info",
            WizardStep::MenuSetup => "menu-setup",
        }
    }

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::BusinessInfo => "Business Information",
            WizardStep::OwnerInfo => "Owner Details",
            WizardStep::MenuSetup => "Menu Setup",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::BusinessInfo => Some(WizardStep::OwnerInfo),
            WizardStep::OwnerInfo => Some(WizardStep::MenuSetup),
            WizardStep::MenuSetup => None,
        }
    }

    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::BusinessInfo => None,
            WizardStep::OwnerInfo => Some(WizardStep::BusinessInfo),
            WizardStep::MenuSetup => Some(WizardStep::OwnerInfo),
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declares a select-backed enum with its form value and display label
macro_rules! choice_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => ($value:literal, $label:literal)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Form value to choice; anything unknown counts as "not selected"
            pub fn from_form(value: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|choice| choice.as_str() == value)
            }
        }
    };
}

choice_enum!(
    /// Kind of business being registered
    BusinessType {
        Restaurant => ("restaurant", "Restaurant"),
        Cafe => ("cafe", "Café"),
        Bakery => ("bakery", "Bakery"),
        Grocery => ("grocery", "Grocery"),
        Other => ("other", "Other"),
    }
);

choice_enum!(
    /// Owner's role in the business
    OwnerRole {
        Owner => ("owner", "Owner"),
        Manager => ("manager", "Manager"),
        Director => ("director", "Director"),
        Other => ("other", "Other"),
    }
);

choice_enum!(
    MenuCategory {
        Appetizers => ("appetizers", "Appetizers"),
        Mains => ("mains", "Main Dishes"),
        Sides => ("sides", "Side Dishes"),
        Desserts => ("desserts", "Desserts"),
        Drinks => ("drinks", "Beverages"),
    }
);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub name: String,
    pub kind: Option<BusinessType>,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub phone: String,
    pub email: String,
    pub description: String,
}

impl BusinessInfo {
    /// Required: name, type, address, phone, email
    pub fn missing(&self) -> Vec<&'static str> {
        let kind = self.kind.map(|k| k.as_str()).unwrap_or_default();
        missing_fields(&[
            ("name", self.name.as_str()),
            ("type", kind),
            ("address", self.address.as_str()),
            ("phone", self.phone.as_str()),
            ("email", self.email.as_str()),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: Option<OwnerRole>,
}

impl OwnerInfo {
    /// Required: first name, last name, email, phone
    pub fn missing(&self) -> Vec<&'static str> {
        missing_fields(&[
            ("first_name", self.first_name.as_str()),
            ("last_name", self.last_name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
        ])
    }
}

/// Inputs of the "Add Menu Item" box, not yet part of the menu
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemDraft {
    pub name: String,
    pub category: Option<MenuCategory>,
    pub price: String,
    pub description: String,
}

impl MenuItemDraft {
    pub fn missing(&self) -> Vec<&'static str> {
        let category = self.category.map(|c| c.as_str()).unwrap_or_default();
        missing_fields(&[
            ("name", self.name.as_str()),
            ("category", category),
            ("price", self.price.as_str()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub category: MenuCategory,
    /// Price exactly as typed
    pub price: String,
    pub description: String,
}

/// Finished registration handed to the submission sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub business: BusinessInfo,
    pub owner: OwnerInfo,
    pub menu_items: Vec<MenuItem>,
}

/// Everything the wizard has accumulated so far
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub step: WizardStep,
    pub business: BusinessInfo,
    pub owner: OwnerInfo,
    pub menu_items: Vec<MenuItem>,
    pub pending_item: MenuItemDraft,
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a draft from its form encoding; an empty string is a fresh draft
    pub fn decode(encoded: &str) -> SharedResult<Self> {
        if encoded.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(encoded).map_err(|e| SharedError::InvalidDraft {
            message: e.to_string(),
        })
    }

    pub fn encode(&self) -> SharedResult<String> {
        serde_json::to_string(self).map_err(|e| SharedError::InvalidDraft {
            message: e.to_string(),
        })
    }

    /// Move to the next step once the current one has its required fields.
    ///
    /// On failure the step is left unchanged. Advancing from the last step is a no-op.
    pub fn advance(&mut self) -> Result<WizardStep, ValidationError> {
        let missing = match self.step {
            WizardStep::BusinessInfo => self.business.missing(),
            WizardStep::OwnerInfo => self.owner.missing(),
            WizardStep::MenuSetup => return Ok(self.step),
        };

        if !missing.is_empty() {
            return Err(ValidationError::IncompleteStep {
                step: self.step,
                missing,
            });
        }

        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    pub fn go_back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Append the pending item to the menu and clear the inputs
    pub fn add_menu_item(&mut self) -> Result<&MenuItem, ValidationError> {
        let missing = self.pending_item.missing();
        let category = match self.pending_item.category {
            Some(category) if missing.is_empty() => category,
            _ => return Err(ValidationError::IncompleteMenuItem { missing }),
        };

        let pending = std::mem::take(&mut self.pending_item);
        self.menu_items.push(MenuItem {
            id: format!("item-{}", Uuid::new_v4().simple()),
            name: pending.name,
            category,
            price: pending.price,
            description: pending.description,
        });

        Ok(&self.menu_items[self.menu_items.len() - 1])
    }

    /// Remove a menu item by id, returning it when it existed
    pub fn remove_menu_item(&mut self, id: &str) -> Option<MenuItem> {
        let index = self.menu_items.iter().position(|item| item.id == id)?;
        Some(self.menu_items.remove(index))
    }

    /// Complete the registration; only allowed from the menu setup step.
    ///
    /// The earlier steps are checked again since the draft comes back from the
    /// browser. The error names the first step with missing fields.
    pub fn submit(&self) -> Result<Registration, ValidationError> {
        if self.step != WizardStep::MenuSetup {
            return Err(ValidationError::NotReadyToSubmit { step: self.step });
        }

        for (step, missing) in [
            (WizardStep::BusinessInfo, self.business.missing()),
            (WizardStep::OwnerInfo, self.owner.missing()),
        ] {
            if !missing.is_empty() {
                return Err(ValidationError::IncompleteStep { step, missing });
            }
        }

        Ok(Registration {
            business: self.business.clone(),
            owner: self.owner.clone(),
            menu_items: self.menu_items.clone(),
        })
    }
}
