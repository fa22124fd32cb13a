mod common;

use aracy::context::RitualContext;
use aracy::remote::{GeneratedAlint, StylePreset};
use aracy::ui::profile::{ProfileField, ProfileScreen, SubmitPhase, CHEMISTRY_CATEGORY};
use common::mock_backend::{MockBackend, MockResponse};
use common::{client_for, make_app};

#[tokio::test]
async fn lab_sends_style_language_catalysts_and_vibe() {
    let backend = MockBackend::start().await;
    backend
        .respond(
            "/generate-alint",
            MockResponse::json(
                r#"{"title": "Saudade", "origin": "Portuguese", "reflection": "r", "interaction": "i"}"#,
            ),
        )
        .await;

    let mut lab = make_app(&backend.base_url()).lab_screen();
    lab.select_style(StylePreset::Scientific);
    lab.search_language("port");
    lab.select_language("pt");
    for keyword in ["tide", "  ", "lantern"] {
        lab.edit_keyword(keyword);
        lab.add_keyword();
    }
    lab.remove_keyword(0);
    lab.edit_vibe("quiet harbour");

    let alint = lab.generate().await.unwrap();
    assert!(matches!(alint, GeneratedAlint::Reflection { ref title, .. } if title == "Saudade"));
    assert_eq!(lab.last_generated(), Some(&alint));
    assert!(!lab.state().generating);

    let body = backend.requests_to("/generate-alint").await[0].json();
    assert_eq!(body["style"], "scientific");
    assert_eq!(body["language"], "pt");
    assert_eq!(body["catalysts"], serde_json::json!(["lantern"]));
    assert_eq!(body["vibe"], "quiet harbour");
}

#[tokio::test]
async fn lab_keeps_previous_alint_when_generation_fails() {
    let backend = MockBackend::start().await;
    backend
        .respond("/generate-alint", MockResponse::json(r#"{"raw": "first"}"#))
        .await;
    backend
        .respond("/generate-alint", MockResponse::error(500, "model asleep"))
        .await;

    let mut lab = make_app(&backend.base_url()).lab_screen();
    lab.generate().await.unwrap();

    let err = lab.generate().await.unwrap_err();
    assert_eq!(err.reason(), "model asleep");
    assert!(!lab.state().generating);
    assert_eq!(
        lab.last_generated(),
        Some(&GeneratedAlint::Raw {
            raw: "first".to_string()
        })
    );
}

#[test]
fn lab_caps_catalysts_at_five() {
    let mut lab = make_app("http://127.0.0.1:9").lab_screen();
    let added: Vec<bool> = ["a", "b", "c", "d", "e", "f"]
        .into_iter()
        .map(|keyword| {
            lab.edit_keyword(keyword);
            lab.add_keyword()
        })
        .collect();

    assert_eq!(added, vec![true, true, true, true, true, false]);
    assert_eq!(lab.state().catalysts.len(), 5);
}

#[tokio::test]
async fn profile_submission_saves_hidden_chemistry_reading() {
    let backend = MockBackend::start().await;
    backend
        .respond(
            "/api/context",
            MockResponse::json(r#"{"name": "Lua", "profession": "cartographer"}"#),
        )
        .await;
    backend
        .respond(
            "/api/ritual",
            MockResponse::json(r#"{"chemistry_result": "Mercury in silver"}"#),
        )
        .await;

    let context = RitualContext::new();
    let mut screen = ProfileScreen::new(client_for(&backend.base_url()), context.clone());
    screen.mount().await;
    screen.edit(ProfileField::DisplayName, "Ana");
    screen.edit(ProfileField::Astrology, "Scorpio rising");

    assert_eq!(screen.submit().await.unwrap(), "Mercury in silver");
    assert_eq!(
        screen.state().phase,
        SubmitPhase::Succeeded {
            chemistry: "Mercury in silver".to_string()
        }
    );

    let saved = context.ritual_result(CHEMISTRY_CATEGORY).unwrap();
    assert_eq!(saved.result, "Mercury in silver");
    assert!(!saved.is_revealed);

    let revealed = screen.reveal(CHEMISTRY_CATEGORY).unwrap();
    assert!(revealed.is_revealed);
    assert!(screen.reveal("music").is_none());

    let body = backend.requests_to("/api/ritual").await[0].json();
    assert_eq!(body["displayName"], "Ana");
    assert_eq!(body["astrology"], "Scorpio rising");
    assert_eq!(body["museContext"]["profession"], "cartographer");
}

#[tokio::test]
async fn profile_without_muse_context_sends_null() {
    let backend = MockBackend::start().await;
    backend
        .respond("/api/context", MockResponse::error(500, "no muse"))
        .await;
    backend
        .respond("/api/ritual", MockResponse::json("{}"))
        .await;

    let context = RitualContext::new();
    let mut screen = ProfileScreen::new(client_for(&backend.base_url()), context.clone());
    screen.mount().await;
    assert!(screen.muse_context().is_none());

    // No reading still saves an empty result.
    assert_eq!(screen.submit().await.unwrap(), "");
    assert_eq!(context.ritual_result(CHEMISTRY_CATEGORY).unwrap().result, "");

    let body = backend.requests_to("/api/ritual").await[0].json();
    assert!(body["museContext"].is_null());
}

#[tokio::test]
async fn failed_ritual_saves_nothing() {
    let backend = MockBackend::start().await;
    backend
        .respond("/api/ritual", MockResponse::error(502, "Ritual failed."))
        .await;

    let context = RitualContext::new();
    let mut screen = ProfileScreen::new(client_for(&backend.base_url()), context.clone());
    screen.edit(ProfileField::Notes, "full moon");

    assert!(screen.submit().await.unwrap_err().is_rejection());
    assert_eq!(
        screen.state().phase,
        SubmitPhase::Failed {
            message: "Ritual failed.".to_string()
        }
    );
    assert!(context.ritual_results().is_empty());
    assert_eq!(screen.state().form.notes, "full moon");
}

#[test]
fn night_before_note_is_shared() {
    let app = make_app("http://127.0.0.1:9");
    let screen = app.profile_screen();

    screen.set_night_before("  light a candle ");
    assert_eq!(app.context().night_before().as_deref(), Some("light a candle"));

    screen.set_night_before("   ");
    assert!(screen.night_before().is_none());
}
