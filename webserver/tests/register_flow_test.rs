//! Integration tests for the onboarding wizard
//!
//! The draft is read back from each rendered page and posted with the next
//! step, the way a browser carries it.

mod helpers;

use axum::http::StatusCode;
use axum::Router;
use quickbite_web::traits::MockSubmissionSink;
use quickbite_web::WebServerConfig;
use shared::{RegistrationDraft, WizardStep};

use helpers::*;

async fn step(router: &Router, draft: &str, action: &str, fields: &[(&str, &str)]) -> (StatusCode, String) {
    let mut form = vec![("draft", draft), ("action", action)];
    form.extend_from_slice(fields);
    post_form(router, "/register", &form).await
}

const BUSINESS: [(&str, &str); 5] = [
    ("business_name", "Pasta Palace"),
    ("business_type", "restaurant"),
    ("address", "12 Noodle Lane"),
    ("business_phone", "555-0199"),
    ("business_email", "hello@pastapalace.test"),
];

const OWNER: [(&str, &str); 4] = [
    ("first_name", "Gina"),
    ("last_name", "Rossi"),
    ("owner_email", "gina@pastapalace.test"),
    ("owner_phone", "555-0198"),
];

/// Draft of a wizard that has reached the menu setup step
async fn draft_at_menu_setup(router: &Router) -> String {
    let (_, page) = get(router, "/register").await;
    let (_, page) = step(router, &hidden_draft(&page), "next", &BUSINESS).await;
    let (_, page) = step(router, &hidden_draft(&page), "next", &OWNER).await;
    assert!(page.contains(r#"data-step="menu-setup""#));
    hidden_draft(&page)
}

#[tokio::test]
async fn test_incomplete_business_info_stays_put() {
    let router = quiet_router();
    let (_, page) = get(&router, "/register").await;

    let (status, page) = step(&router, &hidden_draft(&page), "next", &[("business_name", "Pasta Palace")]).await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains(r#"data-step="business-info""#));
    assert!(page.contains("Please fill in all required fields before proceeding."));
    assert!(page.contains(r#"value="Pasta Palace""#));
}

#[tokio::test]
async fn test_back_keeps_entered_values() {
    let router = quiet_router();
    let (_, page) = get(&router, "/register").await;
    let (_, page) = step(&router, &hidden_draft(&page), "next", &BUSINESS).await;
    assert!(page.contains(r#"data-step="owner-info""#));

    let (_, page) = step(&router, &hidden_draft(&page), "back", &[("first_name", "Gina")]).await;
    assert!(page.contains(r#"data-step="business-info""#));
    assert!(page.contains(r#"value="Pasta Palace""#));
    assert!(page.contains(r#"<option value="restaurant" selected>"#));

    // The owner's first name was typed before going back and survives the trip
    let (_, page) = step(&router, &hidden_draft(&page), "next", &[]).await;
    assert!(page.contains(r#"value="Gina""#));
}

#[tokio::test]
async fn test_menu_items_added_and_removed() {
    let router = quiet_router();
    let draft = draft_at_menu_setup(&router).await;

    let (_, page) = step(&router, &draft, "add_item", &[("item_name", "Carbonara")]).await;
    assert!(page.contains("Please fill in all required fields for the menu item."));
    assert!(page.contains("Menu Items (0)"));

    let item = [("item_name", "Carbonara"), ("item_category", "mains"), ("item_price", "13.50")];
    let (_, page) = step(&router, &hidden_draft(&page), "add_item", &item).await;
    assert!(page.contains("Menu Item Added"));
    assert!(page.contains("Carbonara has been added to your menu."));
    assert!(page.contains("Menu Items (1)"));

    let item = [("item_name", "Tiramisu"), ("item_category", "desserts"), ("item_price", "6")];
    let (_, page) = step(&router, &hidden_draft(&page), "add_item", &item).await;
    let ids = menu_item_ids(&page);
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);

    let remove = format!("remove:{}", ids[0]);
    let (_, page) = step(&router, &hidden_draft(&page), &remove, &[]).await;
    assert!(page.contains("Menu Item Removed"));
    assert_eq!(menu_item_ids(&page), [ids[1].clone()]);
    assert!(page.contains("Tiramisu"));
}

#[tokio::test]
async fn test_complete_registration() {
    let mut sink = MockSubmissionSink::new();
    sink.expect_business_registered()
        .withf(|registration| {
            registration.business.name == "Pasta Palace"
                && registration.owner.last_name == "Rossi"
                && registration.menu_items.len() == 1
        })
        .times(1)
        .returning(|_| Ok(()));
    let config = WebServerConfig {
        redirect_delay_secs: 3,
        ..Default::default()
    };
    let router = server_with_sink(config, sink).build_router();

    let draft = draft_at_menu_setup(&router).await;
    let item = [("item_name", "Carbonara"), ("item_category", "mains"), ("item_price", "13.50")];
    let (_, page) = step(&router, &draft, "add_item", &item).await;

    let (status, page) = step(&router, &hidden_draft(&page), "submit", &[]).await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("Registration Successful!"));
    assert!(page.contains(r#"<meta http-equiv="refresh" content="3;url=/dashboard">"#));
    assert!(!page.contains(r#"name="draft""#));
}

#[tokio::test]
async fn test_submit_before_menu_setup_is_refused() {
    let router = quiet_router();
    let (_, page) = get(&router, "/register").await;

    let (status, page) = step(&router, &hidden_draft(&page), "submit", &BUSINESS).await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("Registration can only be completed from the menu setup step."));
    assert!(!page.contains("http-equiv"));
}

#[tokio::test]
async fn test_tampered_draft_is_rejected() {
    let router = quiet_router();
    let (status, body) = step(&router, "{\"step\":\"payment\"}", "next", &[]).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Malformed registration draft"));
}

#[tokio::test]
async fn test_unknown_action_is_rejected() {
    let router = quiet_router();
    let (status, body) = step(&router, "", "finish", &[]).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("unknown wizard action"));
}

#[tokio::test]
async fn test_failed_hand_off_is_server_error() {
    let mut sink = MockSubmissionSink::new();
    sink.expect_business_registered()
        .times(1)
        .returning(|_| Err(quickbite_web::WebServerError::ResponseError("backend unavailable".into())));
    let router = router_with_sink(sink);

    let draft = draft_at_menu_setup(&router).await;
    let (status, body) = step(&router, &draft, "submit", &[]).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("backend unavailable"));
}

#[tokio::test]
async fn test_forged_menu_step_draft_is_sent_back() {
    // Sink expects nothing: an empty registration must never reach it
    let router = quiet_router();
    let forged = RegistrationDraft {
        step: WizardStep::MenuSetup,
        ..Default::default()
    }
    .encode()
    .unwrap();

    let (status, page) = step(&router, &forged, "submit", &[]).await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("Please fill in all required fields before proceeding."));
    assert!(page.contains(r#"data-step="business-info""#));
    assert!(!page.contains("Registration Successful!"));
}

#[tokio::test]
async fn test_forged_draft_missing_owner_returns_to_owner_step() {
    let router = quiet_router();
    let mut draft = RegistrationDraft::new();
    business_only_on_menu_step(&mut draft);
    let forged = draft.encode().unwrap();

    let (_, page) = step(&router, &forged, "submit", &[]).await;
    assert!(page.contains(r#"data-step="owner-info""#));
    assert!(!page.contains("http-equiv"));
}

/// Business info filled in, owner left blank, parked on the menu step
fn business_only_on_menu_step(draft: &mut RegistrationDraft) {
    draft.business.name = "Pasta Palace".into();
    draft.business.kind = shared::onboarding::BusinessType::from_form("restaurant");
    draft.business.address = "12 Noodle Lane".into();
    draft.business.phone = "555-0199".into();
    draft.business.email = "hello@pastapalace.test".into();
    draft.step = WizardStep::MenuSetup;
}

#[tokio::test]
async fn test_removing_unknown_item_still_confirms() {
    let router = quiet_router();
    let draft = draft_at_menu_setup(&router).await;

    let (status, page) = step(&router, &draft, "remove:item-missing", &[]).await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("Menu Item Removed"));
    assert!(page.contains("Menu Items (0)"));
}
