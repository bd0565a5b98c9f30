use crate::HttpStatusCode;

/// **VALUE**: Verifies that 401 and 403 are classified as authorization failures.
///
/// **WHY THIS MATTERS**: Front ends use `is_authorization()` to decide whether to route
/// the user back to login. Misclassifying a 404 would log users out for nothing.
///
/// **BUG THIS CATCHES**: Would catch if the match arms drift or include other 4xx codes.
#[test]
fn given_auth_statuses_when_checked_then_only_401_and_403_are_authorization() {
    assert!(HttpStatusCode(401).is_authorization());
    assert!(HttpStatusCode(403).is_authorization());
    assert!(!HttpStatusCode(404).is_authorization());
    assert!(!HttpStatusCode(500).is_authorization());
}

/// **VALUE**: Verifies the class boundaries for success, client and server errors.
///
/// **WHY THIS MATTERS**: The API client turns any non-2xx into an error using these ranges.
///
/// **BUG THIS CATCHES**: Off-by-one errors at 200/299/300/499/500/599.
#[test]
fn given_boundary_codes_when_classified_then_ranges_are_correct() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode(300).is_success());

    assert!(HttpStatusCode(400).is_client_error());
    assert!(HttpStatusCode(499).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());

    assert!(HttpStatusCode(500).is_server_error());
    assert!(HttpStatusCode(599).is_server_error());
    assert!(!HttpStatusCode(600).is_server_error());
}

#[test]
fn given_status_when_displayed_then_shows_bare_number() {
    assert_eq!(HttpStatusCode::from(503).to_string(), "503");
}
