//! # View Model Tests
//!
//! State transitions for login, the catalog caches and the model dialog.

use super::{ViewModel, ViewModelSnapshot};
use crate::repl::events::{DialogField, LoginField, Screen};
use crate::repl::models::{CarMaker, CarModel, NotificationLevel, RecordId};
use crate::repl::services::{
    ApiRequest, ApiResult, Credentials, LoginResponse, ModelPayload, Reply, RequestTicket,
};

fn logged_in_view_model() -> ViewModel {
    let mut vm = ViewModel::new();
    vm.apply_response(
        RequestTicket(1),
        ApiResult::LoggedIn(Reply::Accepted(LoginResponse {
            access_token: "tok-abc".to_string(),
        })),
    );
    vm
}

fn makers() -> Vec<CarMaker> {
    vec![
        CarMaker {
            id: RecordId::Number(1),
            name: "Toyota".to_string(),
        },
        CarMaker {
            id: RecordId::Number(2),
            name: "Honda".to_string(),
        },
    ]
}

fn models() -> Vec<CarModel> {
    vec![
        CarModel {
            id: RecordId::Number(4),
            maker_id: RecordId::Number(1),
            name: "Corolla".to_string(),
        },
        CarModel {
            id: RecordId::Number(5),
            maker_id: RecordId::Number(2),
            name: "Civic".to_string(),
        },
    ]
}

fn rejected<T>(body: &str) -> Reply<T> {
    Reply::Rejected {
        status: 400,
        body: body.to_string(),
    }
}

#[test]
fn new_view_model_should_start_on_login_screen() {
    let vm = ViewModel::new();
    assert_eq!(vm.screen(), Screen::Login);
    assert!(!vm.is_logged_in());
    assert!(vm.makers().is_empty());
    assert!(vm.edit_model_id().is_none());
}

#[test]
fn typing_should_fill_focused_login_field() {
    let mut vm = ViewModel::new();
    for ch in "a@b.c".chars() {
        vm.insert_login_char(ch);
    }
    vm.switch_login_field();
    assert_eq!(vm.login_field(), LoginField::Password);
    for ch in "pw1".chars() {
        vm.insert_login_char(ch);
    }
    vm.backspace_login();

    assert_eq!(vm.session().email(), "a@b.c");
    assert_eq!(vm.session().password(), "pw");
    assert_eq!(
        vm.login_request(),
        ApiRequest::Login(Credentials {
            email: "a@b.c".to_string(),
            password: "pw".to_string(),
        })
    );
}

#[test]
fn successful_login_should_store_token_and_switch_screen() {
    let vm = logged_in_view_model();

    assert!(vm.is_logged_in());
    assert_eq!(vm.session().access_token(), "tok-abc");
    assert_eq!(vm.screen(), Screen::Catalog);
    assert_eq!(vm.notification().unwrap().title, "Login Successful");
}

#[test]
fn failed_login_should_surface_server_text() {
    let mut vm = ViewModel::new();
    let follow_ups = vm.apply_response(
        RequestTicket(1),
        ApiResult::LoggedIn(rejected("invalid credentials")),
    );

    assert!(follow_ups.is_empty());
    assert!(!vm.is_logged_in());
    let notification = vm.notification().unwrap();
    assert_eq!(notification.level, NotificationLevel::Error);
    assert_eq!(notification.title, "Login Failed");
    assert!(notification.text().contains("invalid credentials"));
}

#[test]
fn signup_should_not_log_in() {
    let mut vm = ViewModel::new();
    vm.apply_response(RequestTicket(1), ApiResult::SignedUp(Reply::Accepted(())));

    assert!(!vm.is_logged_in());
    let notification = vm.notification().unwrap();
    assert_eq!(notification.title, "Signup Successful");
    assert_eq!(
        notification.description.as_deref(),
        Some("You can now login with your credentials")
    );
}

#[test]
fn failed_signup_should_surface_server_text() {
    let mut vm = ViewModel::new();
    vm.apply_response(RequestTicket(1), ApiResult::SignedUp(rejected("email taken")));
    assert_eq!(vm.notification().unwrap().text(), "Signup Failed: email taken");
}

#[test]
fn transport_error_should_leave_state_untouched() {
    let mut vm = ViewModel::new();
    vm.apply_transport_error("login", "connection refused");

    assert!(!vm.is_logged_in());
    assert!(vm.notification().is_none());
}

#[test]
fn list_responses_should_replace_caches() {
    let mut vm = logged_in_view_model();
    vm.apply_response(RequestTicket(2), ApiResult::Makers(Reply::Accepted(makers())));
    vm.apply_response(RequestTicket(3), ApiResult::Models(Reply::Accepted(models())));

    assert_eq!(vm.makers(), makers().as_slice());
    assert_eq!(vm.models(), models().as_slice());

    vm.apply_response(RequestTicket(4), ApiResult::Makers(Reply::Accepted(Vec::new())));
    assert!(vm.makers().is_empty());
}

#[test]
fn stale_list_response_should_be_discarded() {
    let mut vm = ViewModel::new();
    vm.apply_response(RequestTicket(7), ApiResult::Makers(Reply::Accepted(makers())));
    vm.apply_response(RequestTicket(3), ApiResult::Makers(Reply::Accepted(Vec::new())));

    assert_eq!(vm.makers().len(), 2);
}

#[test]
fn rejected_list_response_should_keep_stale_cache() {
    let mut vm = ViewModel::new();
    vm.apply_response(RequestTicket(1), ApiResult::Models(Reply::Accepted(models())));
    vm.apply_response(RequestTicket(2), ApiResult::Models(rejected("boom")));

    assert_eq!(vm.models().len(), 2);
    assert!(vm.notification().is_none());
}

#[test]
fn created_maker_should_request_maker_refresh() {
    let mut vm = logged_in_view_model();
    let follow_ups = vm.apply_response(RequestTicket(2), ApiResult::MakerCreated(Reply::Accepted(())));

    assert_eq!(follow_ups, vec![ApiRequest::ListMakers]);
    assert_eq!(vm.notification().unwrap().title, "Car Maker Created");
}

#[test]
fn failed_maker_creation_should_use_generic_notice() {
    let mut vm = logged_in_view_model();
    let follow_ups = vm.apply_response(
        RequestTicket(2),
        ApiResult::MakerCreated(rejected("name already used")),
    );

    assert!(follow_ups.is_empty());
    let notification = vm.notification().unwrap();
    assert_eq!(notification.text(), "Failed to Create Car Maker");
}

#[test]
fn create_maker_request_should_carry_token() {
    let vm = logged_in_view_model();
    assert_eq!(
        vm.create_maker_request(),
        Some(ApiRequest::CreateMaker {
            access_token: "tok-abc".to_string()
        })
    );
    assert!(ViewModel::new().create_maker_request().is_none());
}

#[test]
fn edit_dialog_should_prefill_and_submit_update() {
    let mut vm = logged_in_view_model();
    vm.apply_response(RequestTicket(2), ApiResult::Models(Reply::Accepted(models())));
    vm.move_model_selection(1);
    assert!(vm.open_edit_dialog());

    assert_eq!(vm.screen(), Screen::ModelDialog);
    assert_eq!(vm.edit_model_id(), Some(&RecordId::Number(5)));
    assert_eq!(
        vm.submit_dialog_request(),
        Some(ApiRequest::UpdateModel {
            access_token: "tok-abc".to_string(),
            id: RecordId::Number(5),
            payload: ModelPayload {
                maker_id: RecordId::Number(2),
                name: "Civic".to_string(),
            },
        })
    );
}

#[test]
fn successful_update_should_close_dialog_and_refresh_models() {
    let mut vm = logged_in_view_model();
    vm.apply_response(RequestTicket(2), ApiResult::Models(Reply::Accepted(models())));
    vm.open_edit_dialog();

    let follow_ups = vm.apply_response(RequestTicket(3), ApiResult::ModelUpdated(Reply::Accepted(())));

    assert_eq!(follow_ups, vec![ApiRequest::ListModels]);
    assert!(!vm.dialog().is_open());
    assert!(vm.edit_model_id().is_none());
    assert_eq!(vm.notification().unwrap().title, "Car Model Updated");
}

#[test]
fn failed_update_should_keep_dialog_open() {
    let mut vm = logged_in_view_model();
    vm.apply_response(RequestTicket(2), ApiResult::Models(Reply::Accepted(models())));
    vm.open_edit_dialog();

    vm.apply_response(RequestTicket(3), ApiResult::ModelUpdated(rejected("nope")));

    assert!(vm.dialog().is_open());
    assert_eq!(vm.edit_model_id(), Some(&RecordId::Number(4)));
    assert_eq!(vm.notification().unwrap().text(), "Failed to Update Car Model");
}

#[test]
fn create_dialog_should_submit_empty_maker_as_is() {
    let mut vm = logged_in_view_model();
    vm.open_create_dialog();
    vm.switch_dialog_field();
    for ch in "Yaris".chars() {
        vm.insert_dialog_char(ch);
    }

    assert_eq!(vm.dialog_field(), DialogField::Name);
    assert_eq!(
        vm.submit_dialog_request(),
        Some(ApiRequest::CreateModel {
            access_token: "tok-abc".to_string(),
            payload: ModelPayload {
                maker_id: RecordId::empty(),
                name: "Yaris".to_string(),
            },
        })
    );
}

#[test]
fn successful_create_should_clear_draft() {
    let mut vm = logged_in_view_model();
    vm.open_create_dialog();
    vm.insert_dialog_char('X');

    let follow_ups = vm.apply_response(RequestTicket(2), ApiResult::ModelCreated(Reply::Accepted(())));

    assert_eq!(follow_ups, vec![ApiRequest::ListModels]);
    assert!(!vm.dialog().is_open());
    assert!(vm.submit_dialog_request().is_none());

    vm.open_create_dialog();
    assert_eq!(vm.dialog().draft().unwrap().name, "");
}

#[test]
fn closing_dialog_should_discard_draft() {
    let mut vm = logged_in_view_model();
    vm.apply_response(RequestTicket(2), ApiResult::Models(Reply::Accepted(models())));
    vm.open_edit_dialog();
    vm.close_dialog();

    assert_eq!(vm.screen(), Screen::Catalog);
    assert!(vm.edit_model_id().is_none());
    assert!(vm.dialog().draft().is_none());
}

#[test]
fn maker_cycling_should_wrap_through_empty_choice() {
    let mut vm = logged_in_view_model();
    vm.apply_response(RequestTicket(2), ApiResult::Makers(Reply::Accepted(makers())));
    vm.open_create_dialog();

    assert_eq!(vm.dialog_maker_label().as_deref(), Some("Select a car maker"));
    vm.cycle_dialog_maker(true);
    assert_eq!(vm.dialog_maker_label().as_deref(), Some("Toyota"));
    vm.cycle_dialog_maker(true);
    assert_eq!(vm.dialog_maker_label().as_deref(), Some("Honda"));
    vm.cycle_dialog_maker(true);
    assert_eq!(vm.dialog_maker_label().as_deref(), Some("Select a car maker"));
    vm.cycle_dialog_maker(false);
    assert_eq!(vm.dialog().draft().unwrap().maker_id, RecordId::Number(2));
}

#[test]
fn text_maker_reference_should_resolve_like_numeric_id() {
    let mut vm = logged_in_view_model();
    vm.apply_response(RequestTicket(2), ApiResult::Makers(Reply::Accepted(makers())));
    vm.apply_response(
        RequestTicket(3),
        ApiResult::Models(Reply::Accepted(vec![CarModel {
            id: RecordId::Number(5),
            maker_id: RecordId::from("2"),
            name: "Civic".to_string(),
        }])),
    );
    assert!(vm.open_edit_dialog());

    assert_eq!(vm.dialog_maker_label().as_deref(), Some("Honda"));
    vm.cycle_dialog_maker(false);
    assert_eq!(vm.dialog_maker_label().as_deref(), Some("Toyota"));
}

#[test]
fn null_maker_reference_should_read_as_unselected() {
    let mut vm = logged_in_view_model();
    vm.apply_response(RequestTicket(2), ApiResult::Makers(Reply::Accepted(makers())));
    vm.apply_response(
        RequestTicket(3),
        ApiResult::Models(Reply::Accepted(vec![CarModel {
            id: RecordId::Number(6),
            maker_id: RecordId::Other(serde_json::Value::Null),
            name: "Prius".to_string(),
        }])),
    );
    assert!(vm.open_edit_dialog());

    assert_eq!(vm.dialog_maker_label().as_deref(), Some("Select a car maker"));
    vm.cycle_dialog_maker(true);
    assert_eq!(vm.dialog_maker_label().as_deref(), Some("Toyota"));
}

#[test]
fn unknown_maker_should_show_raw_id() {
    let mut vm = logged_in_view_model();
    vm.apply_response(RequestTicket(2), ApiResult::Models(Reply::Accepted(models())));
    vm.open_edit_dialog();

    assert_eq!(vm.dialog_maker_label().as_deref(), Some("1"));
}

#[test]
fn model_selection_should_stay_in_bounds() {
    let mut vm = logged_in_view_model();
    vm.move_model_selection(1);
    assert_eq!(vm.selected_model(), 0);
    assert!(!vm.open_edit_dialog());

    vm.apply_response(RequestTicket(2), ApiResult::Models(Reply::Accepted(models())));
    vm.move_model_selection(10);
    assert_eq!(vm.selected_model(), 1);
    vm.move_model_selection(-5);
    assert_eq!(vm.selected_model(), 0);
}

#[test]
fn shrinking_model_list_should_clamp_selection() {
    let mut vm = logged_in_view_model();
    vm.apply_response(RequestTicket(2), ApiResult::Models(Reply::Accepted(models())));
    vm.move_model_selection(1);
    vm.apply_response(
        RequestTicket(3),
        ApiResult::Models(Reply::Accepted(models()[..1].to_vec())),
    );

    assert_eq!(vm.selected_model(), 0);
}

#[test]
fn snapshot_should_hide_password_text() {
    let mut vm = ViewModel::new();
    vm.switch_login_field();
    for ch in "secret".chars() {
        vm.insert_login_char(ch);
    }
    let snapshot = ViewModelSnapshot::from_view_model(&vm);

    assert_eq!(snapshot.screen, Screen::Login);
    assert_eq!(snapshot.password_len, 6);
    assert!(snapshot.dialog.is_none());
}

#[test]
fn snapshot_should_describe_open_dialog() {
    let mut vm = logged_in_view_model();
    vm.apply_response(RequestTicket(2), ApiResult::Makers(Reply::Accepted(makers())));
    vm.apply_response(RequestTicket(3), ApiResult::Models(Reply::Accepted(models())));
    vm.move_model_selection(1);
    vm.open_edit_dialog();

    let dialog = ViewModelSnapshot::from_view_model(&vm).dialog.unwrap();
    assert_eq!(dialog.title, "Edit Car Model");
    assert_eq!(dialog.submit_label, "Update Model");
    assert_eq!(dialog.maker_label, "Honda");
    assert_eq!(dialog.name, "Civic");
}
