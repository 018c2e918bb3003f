use crate::site_harness::{site_harness, site_harness_with};
use sdherbs::admin::GuardView;
use sdherbs::chat::{InputOrigin, Sender};
use sdherbs::config::VoiceProvider;
use sdherbs::navigation::{AdminPage, Route};
use sdherbs::theme::Theme;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn replies_with(reply: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({ "reply": reply }))
}

#[tokio::test]
async fn product_request_navigates_and_shows_clean_text() {
    let h = site_harness().await;
    Mock::given(method("POST"))
        .and(path("/api/chatbot"))
        .and(body_json(serde_json::json!({"message": "Show me your products"})))
        .respond_with(replies_with("Sure! [NAVIGATE: /products]"))
        .expect(1)
        .mount(&h.server)
        .await;

    let mut widget = h.site.chat_widget();
    widget.open();
    let outcome = widget
        .send("Show me your products", InputOrigin::Typed)
        .await
        .unwrap();

    assert_eq!(h.site.router().current(), Route::Products);
    assert_eq!(outcome.navigated_to.as_deref(), Some("/products"));

    let messages = widget.transcript().messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].sender, Sender::User);
    assert_eq!(messages[1].display_text, "Show me your products");
    assert_eq!(messages[2].sender, Sender::Bot);
    assert_eq!(messages[2].display_text, "Sure!");
    assert_eq!(messages[2].raw_text, "Sure! [NAVIGATE: /products]");

    let page = h.site.render_current().await;
    assert_eq!(page.view, GuardView::Content);
}

#[tokio::test]
async fn repeated_dark_mode_request_toggles_once() {
    let h = site_harness().await;
    Mock::given(method("POST"))
        .and(path("/api/chatbot"))
        .respond_with(replies_with("Dark mode on 🌙 [ACTION: THEME_DARK]"))
        .expect(2)
        .mount(&h.server)
        .await;

    let mut theme = h.site.theme().subscribe();
    let mut widget = h.site.chat_widget();

    widget.send("dark mode please", InputOrigin::Typed).await.unwrap();
    assert!(theme.has_changed().unwrap());
    assert_eq!(*theme.borrow_and_update(), Theme::Dark);

    let second = widget.send("dark mode please", InputOrigin::Typed).await.unwrap();
    assert!(!second.theme_changed);
    assert!(!theme.has_changed().unwrap());
    assert_eq!(h.site.theme().current(), Theme::Dark);
    assert_eq!(second.reply.display_text, "Dark mode on 🌙");
}

#[tokio::test]
async fn backend_failure_answers_from_catalog() {
    let h = site_harness().await;
    Mock::given(method("POST"))
        .and(path("/api/chatbot"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"_id": "a1", "name": "Ashwagandha Churna", "description": "Classic rasayana powder"},
            {"_id": "t2", "name": "Tulsi Drops", "description": "Holy basil extract"}
        ])))
        .mount(&h.server)
        .await;

    let mut widget = h.site.chat_widget();
    let outcome = widget
        .send("Do you have ashwagandha churna?", InputOrigin::Typed)
        .await
        .unwrap();

    assert!(outcome.offline);
    assert_eq!(
        outcome.reply.display_text,
        "🌿 *Ashwagandha Churna* — Classic rasayana powder"
    );
    assert!(outcome.navigated_to.is_none());
    assert_eq!(h.site.router().current(), Route::Home);
}

#[tokio::test]
async fn both_services_down_gives_connection_message() {
    let h = site_harness().await;
    Mock::given(method("POST"))
        .and(path("/api/chatbot"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&h.server)
        .await;

    let mut widget = h.site.chat_widget();
    let outcome = widget.send("hello?", InputOrigin::Typed).await.unwrap();
    assert!(outcome.reply.display_text.contains("connection issues"));
}

#[tokio::test]
async fn chat_navigation_into_admin_runs_the_guard() {
    let h = site_harness().await;
    Mock::given(method("POST"))
        .and(path("/api/chatbot"))
        .respond_with(replies_with(
            "Opening the gallery. [NAVIGATE: /admin/gallery]",
        ))
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/me"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&h.server)
        .await;

    let mut widget = h.site.chat_widget();
    widget.send("open the gallery", InputOrigin::Typed).await.unwrap();
    assert_eq!(h.site.router().current(), Route::Admin(AdminPage::Gallery));

    let page = h.site.render_current().await;
    assert_eq!(page.requested, Route::Admin(AdminPage::Gallery));
    assert_eq!(page.view, GuardView::Redirect("/admin/login".into()));
    assert_eq!(h.site.router().current(), Route::AdminLogin);
    assert_eq!(h.site.router().entries(), vec!["/", "/admin/login"]);
}

#[tokio::test]
async fn voice_turn_speaks_through_backend_proxy() {
    let h = site_harness_with(|config| config.voice.provider = VoiceProvider::Backend).await;
    Mock::given(method("POST"))
        .and(path("/api/chatbot"))
        .respond_with(replies_with("**Namaste!** 🌿 [NAVIGATE: /about]"))
        .mount(&h.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/voice/speak"))
        .and(body_json(serde_json::json!({"text": "Namaste! "})))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"ID3fake".to_vec()))
        .expect(1)
        .mount(&h.server)
        .await;

    let mut widget = h.site.chat_widget();
    let outcome = widget.send("tell me about you", InputOrigin::Voice).await.unwrap();

    let audio = outcome.audio.expect("voice turn should produce audio");
    assert_eq!(std::fs::read(&audio).unwrap(), b"ID3fake");
    assert!(audio.starts_with(h.site.config().audio_dir()));
    assert_eq!(outcome.reply.display_text, "**Namaste!** 🌿");
    assert_eq!(h.site.router().current(), Route::About);
}

#[tokio::test]
async fn failed_speech_does_not_fail_the_turn() {
    let h = site_harness_with(|config| config.voice.provider = VoiceProvider::Backend).await;
    Mock::given(method("POST"))
        .and(path("/api/chatbot"))
        .respond_with(replies_with("Hello"))
        .mount(&h.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/voice/speak"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&h.server)
        .await;

    let mut widget = h.site.chat_widget();
    let outcome = widget.send("hi", InputOrigin::Voice).await.unwrap();
    assert!(outcome.audio.is_none());
    assert_eq!(widget.transcript().last().unwrap().display_text, "Hello");
}

#[tokio::test]
async fn unauthorized_chat_reply_keeps_shopper_in_place() {
    let h = site_harness().await;
    Mock::given(method("POST"))
        .and(path("/api/chatbot"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&h.server)
        .await;

    h.site.router().push("/products");
    let mut widget = h.site.chat_widget();
    let outcome = widget
        .send("is [NAVIGATE: /admin/login] a page?", InputOrigin::Typed)
        .await
        .unwrap();

    assert!(outcome.offline);
    assert!(outcome.navigated_to.is_none());
    assert!(outcome.reply.directives.is_empty());
    assert!(
        outcome
            .reply
            .display_text
            .contains("\"is [NAVIGATE: /admin/login] a page?\"")
    );
    assert_eq!(h.site.router().current(), Route::Products);
    assert_eq!(h.site.router().entries(), vec!["/", "/products"]);
}
