//! Support center: ticket form, active tickets and FAQ

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;
use shared::{catalog, page_warn, Page, TicketForm, TicketType, Toast};

use crate::error::WebServerResult;
use crate::web::views::{faq_views, Choice, TicketView};
use crate::webserver_impl::WebServer;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketInput {
    #[serde(default)]
    pub ticket_type: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

pub async fn support(State(server): State<WebServer>) -> WebServerResult<Html<String>> {
    render(&server, &TicketForm::default(), &[])
}

pub async fn submit_ticket(State(server): State<WebServer>, Form(input): Form<TicketInput>) -> WebServerResult<Html<String>> {
    let form = TicketForm::new(&input.ticket_type, input.subject, input.message);

    match form.validate() {
        Ok(ticket) => {
            server.sink().ticket_submitted(&ticket).await?;
            let toast = Toast::success(
                "Support Ticket Submitted",
                "We've received your request and will get back to you shortly.",
            );
            render(&server, &TicketForm::default(), &[toast])
        }
        Err(err) => {
            page_warn!(Page::Support, missing = ?err.missing_fields(), "Ticket rejected");
            render(&server, &form, &[Toast::error(err.to_string())])
        }
    }
}

fn render(server: &WebServer, form: &TicketForm, toasts: &[Toast]) -> WebServerResult<Html<String>> {
    let ticket_types: Vec<Choice> = TicketType::ALL
        .iter()
        .map(|kind| Choice::new(kind.as_str(), kind.label(), form.ticket_type == Some(*kind)))
        .collect();
    let tickets: Vec<TicketView> = catalog::active_tickets().iter().map(TicketView::from).collect();

    let renderer = server.renderer();
    let mut context = renderer.context(Page::Support, toasts);
    context.insert("ticket_types", &ticket_types);
    context.insert("subject", &form.subject);
    context.insert("message", &form.message);
    context.insert("tickets", &tickets);
    context.insert("faqs", &faq_views(&catalog::faqs()));
    renderer.render("support.html", &context)
}
