//! Template rendering
//!
//! Every page extends `base.html`, which draws the navigation bar, the toast
//! stack and the footer. Templates are compiled into the binary.

use axum::response::Html;
use chrono::{Datelike, Utc};
use serde::Serialize;
use shared::{Page, Toast};
use tera::{Context, Tera};

use crate::error::WebServerResult;

const TEMPLATES: [(&str, &str); 8] = [
    ("base.html", include_str!("../templates/base.html")),
    ("home.html", include_str!("../templates/home.html")),
    ("dashboard.html", include_str!("../templates/dashboard.html")),
    ("orders.html", include_str!("../templates/orders.html")),
    ("tracking.html", include_str!("../templates/tracking.html")),
    ("support.html", include_str!("../templates/support.html")),
    ("register.html", include_str!("../templates/register.html")),
    ("not_found.html", include_str!("../templates/not_found.html")),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Navigation bar entries with the current page marked
pub fn nav_links(current: Page) -> Vec<NavLink> {
    Page::NAVIGATION
        .iter()
        .map(|page| NavLink {
            path: page.path(),
            label: page.label(),
            active: *page == current,
        })
        .collect()
}

pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> WebServerResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Self { tera })
    }

    /// Context shared by every page: navigation, footer year and toasts
    pub fn context(&self, page: Page, toasts: &[Toast]) -> Context {
        let mut context = Context::new();
        context.insert("page", &page);
        context.insert("title", page.label());
        context.insert("nav", &nav_links(page));
        context.insert("year", &Utc::now().year());
        context.insert("toasts", toasts);
        context
    }

    pub fn render(&self, template: &str, context: &Context) -> WebServerResult<Html<String>> {
        Ok(Html(self.tera.render(template, context)?))
    }

    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.tera.get_template_names().collect();
        names.sort_unstable();
        names
    }
}
