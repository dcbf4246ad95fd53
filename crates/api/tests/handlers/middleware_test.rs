use axum::{
    extract::FromRequestParts,
    http::{Request, StatusCode},
};
use pretty_assertions::assert_eq;
use rstest::rstest;

use schoolsync_api::middleware::{
    auth::{ActorRole, ROLE_HEADER},
    error_handling::map_error,
};
use schoolsync_core::errors::SchoolError;

fn not_found() -> SchoolError {
    SchoolError::NotFound("Student with ID 1 not found".to_string())
}

fn validation() -> SchoolError {
    SchoolError::Validation("start_time is required".to_string())
}

fn authorization() -> SchoolError {
    SchoolError::Authorization("Admin role required".to_string())
}

fn database() -> SchoolError {
    SchoolError::Database(eyre::eyre!("connection refused"))
}

#[rstest]
#[case(not_found(), StatusCode::NOT_FOUND)]
#[case(validation(), StatusCode::BAD_REQUEST)]
#[case(authorization(), StatusCode::FORBIDDEN)]
#[case(database(), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] err: SchoolError, #[case] expected: StatusCode) {
    let response = map_error(err);
    assert_eq!(response.status(), expected);
}

async fn extract_role(request: Request<()>) -> Result<ActorRole, StatusCode> {
    let (mut parts, _) = request.into_parts();
    ActorRole::from_request_parts(&mut parts, &())
        .await
        .map_err(|rejection| {
            use axum::response::IntoResponse;
            rejection.into_response().status()
        })
}

#[tokio::test]
async fn test_missing_role_header_defaults_to_admin() {
    let request = Request::builder().uri("/api/students").body(()).unwrap();

    let role = extract_role(request).await.unwrap();
    assert_eq!(role, ActorRole::Admin);
}

#[rstest]
#[case("admin", ActorRole::Admin)]
#[case("teacher", ActorRole::Teacher)]
#[tokio::test]
async fn test_role_header_parses(#[case] value: &str, #[case] expected: ActorRole) {
    let request = Request::builder()
        .uri("/api/students")
        .header(ROLE_HEADER, value)
        .body(())
        .unwrap();

    let role = extract_role(request).await.unwrap();
    assert_eq!(role, expected);
}

#[tokio::test]
async fn test_unknown_role_header_is_rejected() {
    let request = Request::builder()
        .uri("/api/students")
        .header(ROLE_HEADER, "principal")
        .body(())
        .unwrap();

    let status = extract_role(request).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[test]
fn test_require_admin_gates_teacher_role() {
    assert!(ActorRole::Admin.require_admin().is_ok());

    let err = ActorRole::Teacher.require_admin().unwrap_err();
    assert!(matches!(err, SchoolError::Authorization(_)));
}
