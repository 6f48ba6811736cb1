use coursecal_api::middleware::error_handling::map_error;
use coursecal_core::errors::CourseError;

#[tokio::test]
async fn test_error_handling_not_found() {
    let error = CourseError::NotFound("Subject not found".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    let error = CourseError::Validation("Invalid input".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_field_validation() {
    // Field-level validation reports as a 400, same as general validation
    let error = CourseError::field("end_time", "End time must be after start time");

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_authentication() {
    let error = CourseError::Authentication("Missing user identity header".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_error_handling_authorization() {
    // Denials are responses, not hard failures
    let error = CourseError::Authorization("Not the owner".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_error_handling_database() {
    let error = CourseError::Database(eyre::eyre!("Database error"));

    let response = map_error(error);

    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_error_handling_internal() {
    let error = CourseError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    let response = map_error(error);

    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}
