mod common;

use bioai_core::error::{ApiError, UNREACHABLE_MESSAGE};
use bioai_core::gateway::{Method, RequestBody};
use bioai_core::models::{SequenceType, UploadFile};
use bioai_core::session::KeyValueStore;
use bioai_core::validation::LoginForm;

use common::{harness, logged_in, ScriptedTransport, STORED_USER};

const LOGIN_OK: &str = r#"{"access_token":"T","token_type":"bearer","user":{"id":1,"name":"A"}}"#;

const ANALYSIS_OK: &str = r#"{
    "sequence_type": "DNA",
    "sequence_length": 4,
    "gc_content": "50.00%",
    "nucleotide_counts": {"A": 1, "T": 1, "G": 1, "C": 1},
    "protein_sequence": "M",
    "orfs": []
}"#;

#[tokio::test]
async fn test_login_persists_token_and_user() {
    let h = harness(ScriptedTransport::new().respond(200, LOGIN_OK), &[], "/login");

    let session = h.gateway.login("a@b.com", "password123").await.unwrap();

    assert!(session.is_authenticated());
    assert_eq!(h.storage.get("token").unwrap().as_deref(), Some("T"));
    assert_eq!(h.storage.get("user").unwrap().as_deref(), Some(STORED_USER));

    let requests = h.transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].path, "/auth/login");
    assert_eq!(requests[0].bearer, None);
    assert_eq!(
        requests[0].body,
        RequestBody::Json(serde_json::json!({"email": "a@b.com", "password": "password123"}))
    );
}

#[tokio::test]
async fn test_short_password_never_reaches_network() {
    let h = harness(ScriptedTransport::new().respond(200, LOGIN_OK), &[], "/login");
    let form = LoginForm {
        email: "a@b.com".to_string(),
        password: "1234567".to_string(),
    };

    if form.validate().is_ok() {
        h.gateway.login(&form.email, &form.password).await.unwrap();
    }

    assert!(h.transport.requests().is_empty());
    assert!(!h.gateway.session().is_authenticated());
}

#[tokio::test]
async fn test_login_failure_uses_server_detail() {
    let transport = ScriptedTransport::new().respond(401, r#"{"detail":"Incorrect email or password"}"#);
    let h = harness(transport, &[], "/login");

    let err = h.gateway.login("a@b.com", "password123").await.unwrap_err();

    assert_eq!(err.to_string(), "Incorrect email or password");
    assert!(h.navigator.visited().is_empty());
}

#[tokio::test]
async fn test_unauthorized_clears_session_and_redirects() {
    let transport = ScriptedTransport::new().respond(401, r#"{"detail":"Token expired"}"#);
    let h = harness(transport, &logged_in(), "/history");
    assert!(h.gateway.session().is_authenticated());

    let err = h.gateway.history().await.unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized { .. }));
    assert_eq!(err.status(), Some(401));
    assert!(!h.gateway.session().is_authenticated());
    assert_eq!(h.storage.get("token").unwrap(), None);
    assert_eq!(h.storage.get("user").unwrap(), None);
    assert_eq!(h.navigator.visited(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn test_unauthorized_on_public_route_does_not_redirect() {
    for path in ["/login", "/register", "/about", "/register/"] {
        let transport = ScriptedTransport::new().respond(401, "");
        let h = harness(transport, &logged_in(), path);

        let _ = h.gateway.history().await;

        assert!(!h.gateway.session().is_authenticated(), "{}", path);
        assert!(h.navigator.visited().is_empty(), "{}", path);
    }
}

#[tokio::test]
async fn test_unreachable_backend() {
    let h = harness(ScriptedTransport::new().fail("connection refused"), &logged_in(), "/dashboard");

    let err = h.gateway.analyze("ATGC", SequenceType::Dna).await.unwrap_err();

    assert_eq!(err, ApiError::Unreachable);
    assert_eq!(String::from(err), UNREACHABLE_MESSAGE);
    assert!(h.gateway.session().is_authenticated());
}

#[tokio::test]
async fn test_server_error_message_precedence() {
    let transport = ScriptedTransport::new()
        .respond(400, r#"{"message":"Sequence too long"}"#)
        .respond(422, r#"{"detail":"Invalid sequence type"}"#)
        .respond(500, "Internal Server Error");
    let h = harness(transport, &logged_in(), "/dashboard");

    let first = h.gateway.analyze("ATGC", SequenceType::Dna).await.unwrap_err();
    let second = h.gateway.analyze("ATGC", SequenceType::Dna).await.unwrap_err();
    let third = h.gateway.analyze("ATGC", SequenceType::Dna).await.unwrap_err();

    assert_eq!(first.to_string(), "Sequence too long");
    assert_eq!(second.to_string(), "Invalid sequence type");
    assert_eq!(third.to_string(), "Analysis failed. Please try again.");
    assert_eq!(third.status(), Some(500));
}

#[tokio::test]
async fn test_analyze_sends_bearer_and_type() {
    let h = harness(ScriptedTransport::new().respond(200, ANALYSIS_OK), &logged_in(), "/dashboard");

    let result = h.gateway.analyze("ATGC", SequenceType::Dna).await.unwrap();

    assert_eq!(result.sequence_length, 4);
    assert_eq!(result.gc_content, Some(50.0));
    assert_eq!(result.composition().map(|c| c.len()), Some(4));

    let request = &h.transport.requests()[0];
    assert_eq!(request.path, "/analyze");
    assert_eq!(request.bearer.as_deref(), Some("T"));
    assert_eq!(
        request.body,
        RequestBody::Json(serde_json::json!({"sequence": "ATGC", "type": "DNA"}))
    );
}

#[tokio::test]
async fn test_upload_sends_multipart_file_and_type() {
    let h = harness(ScriptedTransport::new().respond(200, ANALYSIS_OK), &logged_in(), "/dashboard");
    let file = UploadFile {
        name: "seq.fasta".to_string(),
        bytes: b">seq\nATGC\n".to_vec(),
    };

    h.gateway.upload(file.clone(), SequenceType::Rna).await.unwrap();

    let request = &h.transport.requests()[0];
    assert_eq!(request.path, "/upload");
    assert_eq!(
        request.body,
        RequestBody::Multipart {
            file,
            fields: vec![("type".to_string(), "RNA".to_string())],
        }
    );
}

#[tokio::test]
async fn test_upload_failure_fallback() {
    let h = harness(ScriptedTransport::new().respond(413, ""), &logged_in(), "/dashboard");
    let file = UploadFile {
        name: "big.gb".to_string(),
        bytes: Vec::new(),
    };

    let err = h.gateway.upload(file, SequenceType::Dna).await.unwrap_err();

    assert_eq!(err.to_string(), "File upload failed. Please try again.");
}

#[tokio::test]
async fn test_register_returns_created_user() {
    let transport = ScriptedTransport::new().respond(201, r#"{"id":7,"name":"Ada","email":"ada@b.com"}"#);
    let h = harness(transport, &[], "/register");

    let created = h.gateway.register("Ada", "ada@b.com", "password123").await.unwrap();

    assert_eq!(created["id"], 7);
    assert!(!h.gateway.session().is_authenticated());
    assert_eq!(h.transport.requests()[0].path, "/auth/register");
}

#[tokio::test]
async fn test_register_conflict_message() {
    let transport = ScriptedTransport::new().respond(400, r#"{"detail":"Email already registered"}"#);
    let h = harness(transport, &[], "/register");

    let err = h.gateway.register("Ada", "ada@b.com", "password123").await.unwrap_err();

    assert_eq!(err.to_string(), "Email already registered");
}

#[tokio::test]
async fn test_delete_analysis_with_empty_body() {
    let h = harness(ScriptedTransport::new().respond(204, ""), &logged_in(), "/history");

    h.gateway.delete_analysis(42).await.unwrap();

    let request = &h.transport.requests()[0];
    assert_eq!(request.method, Method::Delete);
    assert_eq!(request.path, "/history/42");
}

#[tokio::test]
async fn test_analysis_by_id() {
    let body = r#"{"id":3,"input_sequence":"ATGC","created_at":"2024-03-01T10:00:00","results":null}"#;
    let h = harness(ScriptedTransport::new().respond(200, body), &logged_in(), "/history");

    let record = h.gateway.analysis(3).await.unwrap();

    assert_eq!(record.id, 3);
    assert_eq!(record.input_sequence, "ATGC");
    assert_eq!(h.transport.requests()[0].method, Method::Get);
}
