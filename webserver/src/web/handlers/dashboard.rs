//! Business dashboard

use axum::extract::{Path, Query, State};
use axum::response::Html;
use serde::{Deserialize, Serialize};
use shared::{catalog, page_warn, Page, SharedError, Toast};

use crate::error::WebServerResult;
use crate::web::views::{CourierView, RecentOrderRow};
use crate::webserver_impl::WebServer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardTab {
    #[default]
    Overview,
    Orders,
    Deliveries,
    Menu,
    Settings,
}

/// Card shown by the tabs that have no content yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub title: &'static str,
    pub description: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Serialize)]
struct TabLink {
    value: &'static str,
    label: &'static str,
    active: bool,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 5] = [
        DashboardTab::Overview,
        DashboardTab::Orders,
        DashboardTab::Deliveries,
        DashboardTab::Menu,
        DashboardTab::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "overview",
            DashboardTab::Orders => "orders",
            DashboardTab::Deliveries => "deliveries",
            DashboardTab::Menu => "menu",
            DashboardTab::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Orders => "Orders",
            DashboardTab::Deliveries => "Deliveries",
            DashboardTab::Menu => "Menu",
            DashboardTab::Settings => "Settings",
        }
    }

    /// Unknown or missing values fall back to the overview
    pub fn parse_lenient(value: Option<&str>) -> Self {
        let value = value.map(str::trim).unwrap_or_default();
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(value))
            .unwrap_or_default()
    }

    pub fn placeholder(&self) -> Option<Placeholder> {
        let (title, description, body) = match self {
            DashboardTab::Overview => return None,
            DashboardTab::Orders => (
                "Order Management",
                "View and manage all your orders here",
                "Detailed order management interface will be displayed here",
            ),
            DashboardTab::Deliveries => (
                "Delivery Management",
                "Manage your delivery personnel and routes",
                "Detailed delivery management interface will be displayed here",
            ),
            DashboardTab::Menu => (
                "Menu Management",
                "Update and manage your menu items",
                "Menu management interface will be displayed here",
            ),
            DashboardTab::Settings => (
                "Business Settings",
                "Manage your business profile and settings",
                "Settings interface will be displayed here",
            ),
        };
        Some(Placeholder {
            title,
            description,
            body,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardParams {
    pub tab: Option<String>,
}

pub async fn dashboard(
    State(server): State<WebServer>,
    Query(params): Query<DashboardParams>,
) -> WebServerResult<Html<String>> {
    render(&server, DashboardTab::parse_lenient(params.tab.as_deref()), &[])
}

/// Simulated acceptance of a pending order from the recent orders table
pub async fn accept_order(
    State(server): State<WebServer>,
    Path(id): Path<String>,
) -> WebServerResult<Html<String>> {
    let toast = match catalog::accept_recent_order(&id) {
        Ok(order) => {
            server.sink().order_accepted(&order).await?;
            Toast::success(
                "Order Accepted",
                format!("You've accepted order {}. Assign a delivery person now.", order.id),
            )
        }
        Err(err @ SharedError::OrderNotPending { .. }) => {
            page_warn!(Page::Dashboard, "Refused to accept {}: {}", id, err);
            Toast::error(err.to_string())
        }
        Err(err) => return Err(err.into()),
    };

    render(&server, DashboardTab::Overview, &[toast])
}

fn render(server: &WebServer, tab: DashboardTab, toasts: &[Toast]) -> WebServerResult<Html<String>> {
    let tabs: Vec<TabLink> = DashboardTab::ALL
        .iter()
        .map(|t| TabLink {
            value: t.as_str(),
            label: t.label(),
            active: *t == tab,
        })
        .collect();
    let recent: Vec<RecentOrderRow> = catalog::recent_orders().iter().map(RecentOrderRow::from).collect();
    let couriers: Vec<CourierView> = catalog::couriers().iter().map(CourierView::from).collect();

    let renderer = server.renderer();
    let mut context = renderer.context(Page::Dashboard, toasts);
    context.insert("tab", &tab);
    context.insert("tabs", &tabs);
    context.insert("placeholder", &tab.placeholder());
    context.insert("stats", &catalog::order_stats());
    context.insert("recent_orders", &recent);
    context.insert("couriers", &couriers);
    renderer.render("dashboard.html", &context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_parse_lenient() {
        assert_eq!(DashboardTab::parse_lenient(Some("menu")), DashboardTab::Menu);
        assert_eq!(DashboardTab::parse_lenient(Some("Settings")), DashboardTab::Settings);
        assert_eq!(DashboardTab::parse_lenient(Some("reports")), DashboardTab::Overview);
        assert_eq!(DashboardTab::parse_lenient(None), DashboardTab::Overview);
    }

    #[test]
    fn test_only_overview_has_content() {
        assert!(DashboardTab::Overview.placeholder().is_none());
        for tab in &DashboardTab::ALL[1..] {
            assert!(tab.placeholder().is_some(), "{} should be a placeholder", tab.as_str());
        }
    }
}
