mod common;

use aracy::context::RitualContext;
use aracy::ui::app::Tab;
use aracy::ui::bonding::{BondingError, BondingScreen};
use common::mock_backend::{MockBackend, MockResponse};
use common::{client_for, make_app, BOND};

#[tokio::test]
async fn link_stores_bond_in_shared_context() {
    let backend = MockBackend::start().await;
    backend
        .respond(
            "/api/bond/link",
            MockResponse::json(r#"{"status": "linked", "bond_id": "bond-99"}"#),
        )
        .await;

    let context = RitualContext::new();
    let mut screen = BondingScreen::new(client_for(&backend.base_url()), context.clone());
    screen.set_code("  ARACY-7  ");

    assert_eq!(screen.link("me").await.unwrap(), "bond-99");
    assert_eq!(context.bond_id().as_deref(), Some("bond-99"));

    let body = backend.requests_to("/api/bond/link").await[0].json();
    assert_eq!(body["bond_code"], "ARACY-7");
}

#[tokio::test]
async fn blank_code_is_rejected_locally() {
    let backend = MockBackend::start().await;
    let mut screen = BondingScreen::new(client_for(&backend.base_url()), RitualContext::new());
    screen.set_code("   ");

    assert!(!screen.can_submit());
    assert!(matches!(screen.link("me").await, Err(BondingError::EmptyCode)));
    assert!(backend.captured_requests().await.is_empty());
}

#[tokio::test]
async fn unlinked_status_leaves_context_untouched() {
    let backend = MockBackend::start().await;
    backend
        .respond("/api/bond/link", MockResponse::json(r#"{"status": "pending"}"#))
        .await;

    let context = RitualContext::new();
    let mut screen = BondingScreen::new(client_for(&backend.base_url()), context.clone());
    screen.set_code("ARACY-7");

    match screen.link("me").await {
        Err(BondingError::NotLinked { status }) => assert_eq!(status, "pending"),
        other => panic!("expected NotLinked, got {other:?}"),
    }
    assert!(context.bond_id().is_none());
}

#[tokio::test]
async fn screens_share_the_app_context() {
    let backend = MockBackend::start().await;
    backend
        .respond(
            "/api/bond/link",
            MockResponse::json(r#"{"status": "linked", "bond_id": "bond-new"}"#),
        )
        .await;

    let app = make_app(&backend.base_url());
    assert_eq!(app.context().bond_id().as_deref(), Some(BOND));

    let mut bonding = app.bonding_screen();
    bonding.set_code("CODE");
    bonding.link("me").await.unwrap();

    // A screen created afterwards reads the newly linked bond.
    let reflection = app.reflection_screen(Vec::new());
    reflection.toggle(0).unwrap().await;
    let body = backend.requests_to("/api/ritual/reflect").await[0].json();
    assert_eq!(body["bond_id"], "bond-new");
    assert_eq!(reflection.cards().len(), 19);
}

#[tokio::test]
async fn streak_screen_starts_at_configured_time() {
    let backend = MockBackend::start().await;
    let app = make_app(&backend.base_url());
    app.config()
        .update(|c| c.ritual.default_delivery_time = "05:30".to_string());

    assert_eq!(app.streak_screen().delivery_time().to_string(), "05:30");
}

#[test]
fn tab_navigation_wraps() {
    let mut app = make_app("http://127.0.0.1:9");
    assert_eq!(app.tab(), Tab::Ritual);

    app.previous_tab();
    assert_eq!(app.tab(), Tab::Bonding);
    app.next_tab();
    app.next_tab();
    assert_eq!(app.tab(), Tab::Lab);

    app.select_tab(Tab::Riddle);
    assert_eq!(app.tab().title(), Tab::Riddle.title());
}

#[test]
fn context_tracks_revealed_categories() {
    let context = RitualContext::new();
    context.save_category("moon", "Pisces");
    assert!(!context.ritual_result("moon").unwrap().is_revealed);

    assert!(context.reveal_category("moon"));
    assert!(context.ritual_result("moon").unwrap().is_revealed);
    assert!(!context.reveal_category("sun"));
}
