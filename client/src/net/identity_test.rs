use super::*;

fn client_from(json: serde_json::Value) -> ClientResource {
    serde_json::from_value(json).unwrap()
}

fn session_json(id: &str, status: &str, user_id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "status": status,
        "user": {
            "id": user_id,
            "first_name": "Ana",
            "last_name": "Cruz",
            "image_url": "https://img.example.com/a.png",
            "primary_email_address_id": "em2",
            "email_addresses": [
                { "id": "em1", "email_address": "old@example.com" },
                { "id": "em2", "email_address": "ana@example.com" }
            ]
        }
    })
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(client_endpoint("/identity"), "/identity/v1/client");
    assert_eq!(sign_ins_endpoint("/identity"), "/identity/v1/client/sign_ins");
    assert_eq!(sign_ups_endpoint("/identity"), "/identity/v1/client/sign_ups");
    assert_eq!(
        sign_up_action_endpoint("/identity", "sua_1", "prepare_verification"),
        "/identity/v1/client/sign_ups/sua_1/prepare_verification"
    );
    assert_eq!(
        session_action_endpoint("/identity", "sess_1", "end"),
        "/identity/v1/client/sessions/sess_1/end"
    );
}

// =============================================================
// active_session
// =============================================================

#[test]
fn active_session_uses_primary_email_and_joined_name() {
    let client = client_from(serde_json::json!({
        "sessions": [session_json("sess_1", "active", "user_1")],
        "last_active_session_id": "sess_1"
    }));
    let session = active_session(&client).unwrap();
    assert_eq!(session.session_id, "sess_1");
    assert_eq!(session.user_id, "user_1");
    assert_eq!(session.email.as_deref(), Some("ana@example.com"));
    assert_eq!(session.full_name.as_deref(), Some("Ana Cruz"));
    assert_eq!(session.image_url.as_deref(), Some("https://img.example.com/a.png"));
}

#[test]
fn active_session_skips_ended_last_active_session() {
    let client = client_from(serde_json::json!({
        "sessions": [
            session_json("sess_old", "ended", "user_1"),
            session_json("sess_new", "active", "user_2")
        ],
        "last_active_session_id": "sess_old"
    }));
    assert_eq!(active_session(&client).unwrap().session_id, "sess_new");
}

#[test]
fn active_session_none_without_sessions() {
    assert_eq!(active_session(&ClientResource::default()), None);
}

#[test]
fn session_without_names_has_no_full_name() {
    let client = client_from(serde_json::json!({
        "sessions": [{ "id": "s", "status": "active", "user": { "id": "u", "email_addresses": [] } }]
    }));
    let session = active_session(&client).unwrap();
    assert_eq!(session.full_name, None);
    assert_eq!(session.email, None);
}

// =============================================================
// completed_session_id
// =============================================================

#[test]
fn completed_session_id_requires_complete_status() {
    let attempt = AttemptResource {
        id: "sia_1".to_owned(),
        status: "needs_second_factor".to_owned(),
        created_session_id: None,
    };
    assert_eq!(
        completed_session_id(&attempt),
        Err(IdentityError::Incomplete("needs_second_factor".to_owned()))
    );
}

#[test]
fn completed_session_id_returns_created_session() {
    let attempt = AttemptResource {
        id: "sua_1".to_owned(),
        status: "complete".to_owned(),
        created_session_id: Some("sess_9".to_owned()),
    };
    assert_eq!(completed_session_id(&attempt), Ok("sess_9".to_owned()));
}

// =============================================================
// rejection_message
// =============================================================

#[test]
fn rejection_message_prefers_long_message() {
    let body = r#"{"errors":[{"message":"is incorrect","long_message":"Password is incorrect. Try again."}]}"#;
    assert_eq!(rejection_message(body, 422), "Password is incorrect. Try again.");
}

#[test]
fn rejection_message_falls_back_to_status() {
    assert_eq!(rejection_message("<html>", 502), "identity request failed: 502");
    assert_eq!(rejection_message(r#"{"errors":[]}"#, 400), "identity request failed: 400");
}
