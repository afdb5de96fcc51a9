//! Order tracking page

use axum::extract::{Query, State};
use axum::response::Html;
use axum::Form;
use serde::Deserialize;
use shared::{catalog, page_debug, DeliveryTab, Page, Toast};

use crate::error::WebServerResult;
use crate::web::views::DeliveryCard;
use crate::webserver_impl::WebServer;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackingParams {
    pub tab: Option<String>,
}

/// "Find Order" form; `tab` is the tab that was open when it was posted
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FindOrderForm {
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub tab: String,
}

pub async fn tracking(
    State(server): State<WebServer>,
    Query(params): Query<TrackingParams>,
) -> WebServerResult<Html<String>> {
    render(&server, DeliveryTab::parse_lenient(params.tab.as_deref()), None, &[])
}

/// Look an order up by id and open the tab that holds it.
///
/// A blank id leaves the page as it was.
pub async fn find_order(State(server): State<WebServer>, Form(form): Form<FindOrderForm>) -> WebServerResult<Html<String>> {
    let current = DeliveryTab::parse_lenient(Some(&form.tab));
    let wanted = form.order_id.trim();
    if wanted.is_empty() {
        return render(&server, current, None, &[]);
    }

    let found = catalog::find_delivery(wanted);
    server.sink().order_lookup(wanted, found.as_ref().map(|(tab, _)| *tab)).await?;

    match found {
        Some((tab, delivery)) => render(&server, tab, Some(&delivery.id), &[]),
        None => {
            let toast = Toast::destructive("Order Not Found", format!("No delivery matches order ID {wanted}."));
            render(&server, current, None, &[toast])
        }
    }
}

fn render(server: &WebServer, tab: DeliveryTab, highlight: Option<&str>, toasts: &[Toast]) -> WebServerResult<Html<String>> {
    let active: Vec<DeliveryCard> = catalog::active_deliveries()
        .iter()
        .map(|delivery| DeliveryCard::new(delivery, highlight))
        .collect();
    let completed: Vec<DeliveryCard> = catalog::completed_deliveries()
        .iter()
        .map(|delivery| DeliveryCard::new(delivery, highlight))
        .collect();

    if tab == DeliveryTab::Active {
        for card in &active {
            page_debug!(Page::Tracking, "Map would display locations for {}: {:?}", card.id, card.map);
        }
    }

    let renderer = server.renderer();
    let mut context = renderer.context(Page::Tracking, toasts);
    context.insert("tab", tab.as_str());
    context.insert("active", &active);
    context.insert("completed", &completed);
    context.insert("highlight", &highlight);
    renderer.render("tracking.html", &context)
}
