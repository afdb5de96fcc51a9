//! Business onboarding wizard
//!
//! The draft travels with the form as a hidden JSON field. Each post carries
//! the draft, the inputs of the step on screen and the button that was pressed.

use std::str::FromStr;

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde::{Deserialize, Serialize};
use shared::onboarding::{BusinessType, MenuCategory, OwnerRole};
use shared::{page_debug, page_error, page_info, page_warn, Page, RegistrationDraft, Toast, ValidationError, WizardStep};

use crate::error::{WebServerError, WebServerResult};
use crate::web::views::{Choice, MenuItemView};
use crate::webserver_impl::WebServer;

/// Button pressed on the wizard form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    Next,
    Back,
    AddItem,
    RemoveItem(String),
    Submit,
}

impl FromStr for WizardAction {
    type Err = WebServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "next" => Ok(WizardAction::Next),
            "back" => Ok(WizardAction::Back),
            "add_item" => Ok(WizardAction::AddItem),
            "submit" => Ok(WizardAction::Submit),
            other => other
                .strip_prefix("remove:")
                .filter(|id| !id.is_empty())
                .map(|id| WizardAction::RemoveItem(id.to_string()))
                .ok_or_else(|| WebServerError::invalid_request(format!("unknown wizard action '{other}'"))),
        }
    }
}

/// Posted wizard form. Inputs missing from the post leave the draft untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WizardForm {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub draft: String,

    pub business_name: Option<String>,
    pub business_type: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub business_phone: Option<String>,
    pub business_email: Option<String>,
    pub description: Option<String>,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub owner_email: Option<String>,
    pub owner_phone: Option<String>,
    pub role: Option<String>,

    pub item_name: Option<String>,
    pub item_category: Option<String>,
    pub item_price: Option<String>,
    pub item_description: Option<String>,
}

fn overlay(target: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *target = value;
    }
}

impl WizardForm {
    /// Copy the inputs of the draft's current step into the draft
    pub fn apply_to(self, draft: &mut RegistrationDraft) {
        match draft.step {
            WizardStep::BusinessInfo => {
                let business = &mut draft.business;
                overlay(&mut business.name, self.business_name);
                if let Some(kind) = self.business_type {
                    business.kind = BusinessType::from_form(&kind);
                }
                overlay(&mut business.address, self.address);
                overlay(&mut business.city, self.city);
                overlay(&mut business.zip_code, self.zip_code);
                overlay(&mut business.phone, self.business_phone);
                overlay(&mut business.email, self.business_email);
                overlay(&mut business.description, self.description);
            }
            WizardStep::OwnerInfo => {
                let owner = &mut draft.owner;
                overlay(&mut owner.first_name, self.first_name);
                overlay(&mut owner.last_name, self.last_name);
                overlay(&mut owner.email, self.owner_email);
                overlay(&mut owner.phone, self.owner_phone);
                if let Some(role) = self.role {
                    owner.role = OwnerRole::from_form(&role);
                }
            }
            WizardStep::MenuSetup => {
                let item = &mut draft.pending_item;
                overlay(&mut item.name, self.item_name);
                if let Some(category) = self.item_category {
                    item.category = MenuCategory::from_form(&category);
                }
                overlay(&mut item.price, self.item_price);
                overlay(&mut item.description, self.item_description);
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct StepTab {
    value: &'static str,
    label: &'static str,
    enabled: bool,
}

pub async fn register_page(State(server): State<WebServer>) -> WebServerResult<Html<String>> {
    render(&server, &RegistrationDraft::new(), &[])
}

pub async fn register_step(State(server): State<WebServer>, Form(form): Form<WizardForm>) -> WebServerResult<Html<String>> {
    let mut draft = RegistrationDraft::decode(&form.draft)?;
    let action: WizardAction = form.action.parse()?;
    form.apply_to(&mut draft);

    let mut toasts = Vec::new();
    match action {
        WizardAction::Next => {
            if let Err(err) = draft.advance() {
                page_warn!(Page::Register, step = %draft.step, missing = ?err.missing_fields(), "Step incomplete");
                toasts.push(Toast::error(err.to_string()));
            }
        }
        WizardAction::Back => {
            draft.go_back();
        }
        WizardAction::AddItem => match draft.add_menu_item() {
            Ok(item) => toasts.push(Toast::success(
                "Menu Item Added",
                format!("{} has been added to your menu.", item.name),
            )),
            Err(err) => toasts.push(Toast::error(err.to_string())),
        },
        WizardAction::RemoveItem(id) => {
            if draft.remove_menu_item(&id).is_none() {
                page_debug!(Page::Register, "No menu item {} to remove", id);
            }
            toasts.push(Toast::success("Menu Item Removed", "The menu item has been removed."));
        }
        WizardAction::Submit => match draft.submit() {
            Ok(registration) => {
                if let Err(err) = server.sink().business_registered(&registration).await {
                    page_error!(Page::Register, "Registration hand-off failed: {}", err);
                    return Err(err);
                }
                return render_registered(&server);
            }
            Err(err) => {
                if let ValidationError::IncompleteStep { step, missing } = &err {
                    page_warn!(Page::Register, step = %step, missing = ?missing, "Submitted draft skipped a step");
                    draft.step = *step;
                }
                toasts.push(Toast::error(err.to_string()));
            }
        },
    }

    render(&server, &draft, &toasts)
}

fn render(server: &WebServer, draft: &RegistrationDraft, toasts: &[Toast]) -> WebServerResult<Html<String>> {
    let steps: Vec<StepTab> = WizardStep::ALL
        .iter()
        .map(|step| StepTab {
            value: step.as_str(),
            label: step.label(),
            enabled: *step == draft.step,
        })
        .collect();

    let business_types: Vec<Choice> = BusinessType::ALL
        .iter()
        .map(|kind| Choice::new(kind.as_str(), kind.label(), draft.business.kind == Some(*kind)))
        .collect();
    let roles: Vec<Choice> = OwnerRole::ALL
        .iter()
        .map(|role| Choice::new(role.as_str(), role.label(), draft.owner.role == Some(*role)))
        .collect();
    let categories: Vec<Choice> = MenuCategory::ALL
        .iter()
        .map(|category| {
            Choice::new(
                category.as_str(),
                category.label(),
                draft.pending_item.category == Some(*category),
            )
        })
        .collect();
    let menu_items: Vec<MenuItemView> = draft.menu_items.iter().map(MenuItemView::from).collect();

    let renderer = server.renderer();
    let mut context = renderer.context(Page::Register, toasts);
    context.insert("registered", &false);
    context.insert("step", draft.step.as_str());
    context.insert("steps", &steps);
    context.insert("draft", &draft.encode()?);
    context.insert("business", &draft.business);
    context.insert("owner", &draft.owner);
    context.insert("pending_item", &draft.pending_item);
    context.insert("business_types", &business_types);
    context.insert("roles", &roles);
    context.insert("categories", &categories);
    context.insert("menu_items", &menu_items);
    renderer.render("register.html", &context)
}

fn render_registered(server: &WebServer) -> WebServerResult<Html<String>> {
    let delay = server.state().config.redirect_delay_secs;
    page_info!(Page::Register, "Registration complete, redirecting to dashboard in {}s", delay);

    let toast = Toast::success(
        "Registration Successful!",
        "Your business has been registered. You'll be redirected to your dashboard.",
    );

    let renderer = server.renderer();
    let mut context = renderer.context(Page::Register, &[toast]);
    context.insert("registered", &true);
    context.insert("redirect_delay", &delay);
    context.insert("redirect_to", Page::Dashboard.path());
    renderer.render("register.html", &context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions() {
        assert_eq!("next".parse::<WizardAction>().unwrap(), WizardAction::Next);
        assert_eq!("submit".parse::<WizardAction>().unwrap(), WizardAction::Submit);
        assert_eq!(
            "remove:item-42".parse::<WizardAction>().unwrap(),
            WizardAction::RemoveItem("item-42".into())
        );
        assert!("remove:".parse::<WizardAction>().is_err());
        assert!("finish".parse::<WizardAction>().is_err());
    }

    #[test]
    fn test_form_only_touches_current_step() {
        let mut draft = RegistrationDraft::new();
        draft.owner.first_name = "Kept".into();

        let form = WizardForm {
            business_name: Some("Taco Town".into()),
            business_type: Some("cafe".into()),
            first_name: Some("Ignored".into()),
            ..Default::default()
        };
        form.apply_to(&mut draft);

        assert_eq!(draft.business.name, "Taco Town");
        assert_eq!(draft.business.kind, Some(BusinessType::Cafe));
        assert_eq!(draft.owner.first_name, "Kept");
    }

    #[test]
    fn test_missing_inputs_keep_draft_values() {
        let mut draft = RegistrationDraft::new();
        draft.business.name = "Existing".into();

        WizardForm::default().apply_to(&mut draft);
        assert_eq!(draft.business.name, "Existing");
    }

    #[test]
    fn test_unknown_select_value_clears_choice() {
        let mut draft = RegistrationDraft::new();
        draft.step = WizardStep::MenuSetup;
        draft.pending_item.category = Some(MenuCategory::Drinks);

        let form = WizardForm {
            item_category: Some(String::new()),
            ..Default::default()
        };
        form.apply_to(&mut draft);
        assert_eq!(draft.pending_item.category, None);
    }
}
