use coursecal_core::errors::{CourseError, CourseResult};
use std::error::Error;

#[test]
fn test_course_error_display() {
    let not_found = CourseError::NotFound("Subject not found".to_string());
    let validation = CourseError::Validation("Invalid input".to_string());
    let authentication = CourseError::Authentication("Missing identity".to_string());
    let authorization = CourseError::Authorization("Not the owner".to_string());
    let database = CourseError::Database(eyre::eyre!("Database connection failed"));
    let internal = CourseError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(not_found.to_string(), "Resource not found: Subject not found");
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert_eq!(
        authentication.to_string(),
        "Authentication error: Missing identity"
    );
    assert_eq!(
        authorization.to_string(),
        "Authorization error: Not the owner"
    );
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_field_validation_names_the_field() {
    let error = CourseError::field("end_time", "End time must be after start time");

    assert_eq!(
        error.to_string(),
        "Validation error on end_time: End time must be after start time"
    );

    match error {
        CourseError::FieldValidation { field, .. } => assert_eq!(field, "end_time"),
        other => panic!("Expected FieldValidation, got: {:?}", other),
    }
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let course_error = CourseError::Internal(Box::new(io_error));

    assert!(course_error.source().is_some());
}

#[test]
fn test_course_result() {
    let result: CourseResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: CourseResult<i32> = Err(CourseError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_eyre_report() {
    let report = eyre::eyre!("Connection refused");
    let course_error = CourseError::from(report);

    assert!(matches!(course_error, CourseError::Database(_)));
}
