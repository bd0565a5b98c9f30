// Unit tests for error conversion and classification

use crate::error::TasknotesError;

use client_core::error::{ApiClientError, CoreError};

use common::{ErrorLocation, HttpStatusCode};
use models::{Credentials, ModelError};

use std::panic::Location;
use std::process::ExitCode;

fn status(code: u16) -> ApiClientError {
    ApiClientError::Status {
        status_code: HttpStatusCode(code),
        message: String::from("test"),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// **VALUE**: Form validation errors become input errors with the bare message.
///
/// **WHY THIS MATTERS**: The user sees "Username is required", not a debug dump.
///
/// **BUG THIS CATCHES**: Would catch model errors being wrapped as core failures.
#[test]
fn given_model_error_when_converted_then_input_error_with_message() {
    // GIVEN: A validation failure from the models crate
    let model_error: ModelError = Credentials::new("  ", "pw").expect_err("blank username");

    // WHEN: Converting
    let err = TasknotesError::from(model_error);

    // THEN: Input variant, exit code 2
    match &err {
        TasknotesError::Input { message, .. } => assert_eq!(message, "Username is required"),
        other => panic!("expected input error, got {other:?}"),
    }
    assert_eq!(err.exit_code(), ExitCode::from(2));
}

/// **VALUE**: 401/403 are recognizable after wrapping.
///
/// **BUG THIS CATCHES**: Would catch the login hint never showing because the
/// status was lost in conversion.
#[test]
fn given_api_errors_when_converted_then_authorization_detected() {
    let unauthorized = TasknotesError::from(status(401));
    let forbidden = TasknotesError::from(CoreError::from(status(403)));
    let server = TasknotesError::from(status(500));

    assert!(unauthorized.is_authorization());
    assert!(forbidden.is_authorization());
    assert!(!server.is_authorization());
    assert_eq!(server.exit_code(), ExitCode::FAILURE);
}
