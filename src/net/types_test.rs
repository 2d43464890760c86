use super::*;

#[test]
fn login_response_deserializes_service_payload() {
    let json = r#"{
        "token": "eyJhbGciOi.payload.sig",
        "user": {"id": "65f0", "name": "Ada", "email": "ada@example.com", "role": "user"}
    }"#;
    let resp: LoginResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.token, "eyJhbGciOi.payload.sig");
    assert_eq!(resp.user.name, "Ada");
    assert_eq!(resp.user.role, "user");
}

#[test]
fn login_response_without_user_is_rejected() {
    let json = r#"{"token": "t"}"#;
    assert!(serde_json::from_str::<LoginResponse>(json).is_err());
}

#[test]
fn register_request_serializes_all_fields() {
    let req = RegisterRequest {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "pw".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value, serde_json::json!({"name": "Ada", "email": "ada@example.com", "password": "pw"}));
}

#[test]
fn register_response_tolerates_missing_message() {
    let resp: RegisterResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.message.is_empty());
}

#[test]
fn resume_reads_camel_case_created_at() {
    let json = r#"{"id": "r1", "filename": "cv.pdf", "createdAt": "2026-01-02T03:04:05Z"}"#;
    let resume: Resume = serde_json::from_str(json).unwrap();
    assert_eq!(resume.created_at, "2026-01-02T03:04:05Z");
    assert_eq!(resume.filename, "cv.pdf");
}
