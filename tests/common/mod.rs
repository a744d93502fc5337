//! Shared harness: a controller wired to mock terminal streams and a
//! wiremock backend.

#![allow(dead_code)]

use carline::repl::io::{MockEventStream, MockRenderStream, RenderRecorder};
use carline::repl::services::ApiClient;
use carline::AppController;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub type TestController = AppController<MockEventStream, MockRenderStream>;

pub const TOKEN: &str = "tok";
pub const EMAIL: &str = "driver@example.com";
pub const PASSWORD: &str = "secret";

pub fn controller_for(server: &MockServer) -> (TestController, RenderRecorder) {
    let render_stream = MockRenderStream::new();
    let recorder = render_stream.recorder();
    let client = ApiClient::new(&server.uri()).expect("mock server uri");
    let controller = AppController::with_client(client, MockEventStream::empty(), render_stream)
        .expect("controller");
    (controller, recorder)
}

pub fn press(controller: &mut TestController, code: KeyCode) {
    controller
        .process_key_event(KeyEvent::new(code, KeyModifiers::empty()))
        .expect("key event");
}

pub fn press_ctrl(controller: &mut TestController, ch: char) {
    controller
        .process_key_event(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
        .expect("key event");
}

pub fn type_text(controller: &mut TestController, text: &str) {
    for ch in text.chars() {
        press(controller, KeyCode::Char(ch));
    }
}

/// Fill the credential form with [`EMAIL`] and [`PASSWORD`]
pub fn fill_credentials(controller: &mut TestController) {
    type_text(controller, EMAIL);
    press(controller, KeyCode::Tab);
    type_text(controller, PASSWORD);
}

/// Log in against a `/login` mock that hands out [`TOKEN`]
pub async fn login(controller: &mut TestController, server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"email": EMAIL, "password": PASSWORD})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": TOKEN})))
        .mount(server)
        .await;

    fill_credentials(controller);
    press(controller, KeyCode::Enter);
    controller.settle().await;
    assert!(controller.view_model().is_logged_in(), "login should succeed");
}

pub async fn mount_catalog(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/car-makers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Toyota"},
            {"id": 2, "name": "Honda"}
        ])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/car-models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 5, "maker_id": 2, "name": "Civic"}
        ])))
        .mount(server)
        .await;
}
