//! Order management page

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;
use shared::{catalog, page_debug, OrderQuery, OrderStatus, Page, StatusFilter};

use crate::error::WebServerResult;
use crate::web::views::{Choice, OrderCard};
use crate::webserver_impl::WebServer;

/// `?status=&q=` of the order list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrdersParams {
    pub status: Option<String>,
    pub q: Option<String>,
}

impl OrdersParams {
    pub fn to_query(&self) -> OrderQuery {
        OrderQuery::new(
            StatusFilter::parse_lenient(self.status.as_deref()),
            self.q.clone().unwrap_or_default(),
        )
    }
}

/// Status selector options, "All Orders" first
pub fn status_choices(filter: StatusFilter) -> Vec<Choice> {
    std::iter::once(Choice::new("all", "All Orders", filter == StatusFilter::All))
        .chain(OrderStatus::ALL.iter().map(|status| {
            Choice::new(
                status.as_str(),
                status.label(),
                filter == StatusFilter::Only(*status),
            )
        }))
        .collect()
}

pub async fn orders(
    State(server): State<WebServer>,
    Query(params): Query<OrdersParams>,
) -> WebServerResult<Html<String>> {
    let query = params.to_query();
    let all = catalog::orders();
    let cards: Vec<OrderCard> = query.apply(&all).into_iter().map(OrderCard::from).collect();

    page_debug!(
        Page::Orders,
        status = query.status.as_str(),
        "Showing {} of {} orders for '{}'",
        cards.len(),
        all.len(),
        query.search
    );

    let renderer = server.renderer();
    let mut context = renderer.context(Page::Orders, &[]);
    context.insert("orders", &cards);
    context.insert("shown", &cards.len());
    context.insert("total", &all.len());
    context.insert("search", &query.search);
    context.insert("status_choices", &status_choices(query.status));
    renderer.render("orders.html", &context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_to_query() {
        let params = OrdersParams {
            status: Some("in_progress".into()),
            q: Some("john".into()),
        };
        let query = params.to_query();
        assert_eq!(query.status, StatusFilter::Only(OrderStatus::InProgress));
        assert_eq!(query.search, "john");

        assert_eq!(OrdersParams::default().to_query(), OrderQuery::default());
    }

    #[test]
    fn test_status_choices_mark_selection() {
        let choices = status_choices(StatusFilter::Only(OrderStatus::Delivered));
        assert_eq!(choices.len(), 5);
        assert_eq!(choices[0].value, "all");
        let selected: Vec<_> = choices.iter().filter(|c| c.selected).map(|c| c.value).collect();
        assert_eq!(selected, ["delivered"]);
    }
}
