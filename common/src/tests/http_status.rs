use crate::HttpStatusCode;

#[test]
fn given_status_codes_when_classified_then_ranges_are_disjoint() {
    let ok = HttpStatusCode::from(200);
    let created = HttpStatusCode::from(201);
    let bad_request = HttpStatusCode::from(400);
    let internal = HttpStatusCode::from(500);

    assert!(ok.is_success() && created.is_success());
    assert!(!ok.is_client_error() && !ok.is_server_error());

    assert!(bad_request.is_client_error());
    assert!(!bad_request.is_success() && !bad_request.is_server_error());

    assert!(internal.is_server_error());
    assert!(!internal.is_success() && !internal.is_client_error());
}

#[test]
fn given_redirect_status_when_classified_then_not_success() {
    // 3xx never carries converted_code
    assert!(!HttpStatusCode(302).is_success());
}

#[test]
fn given_status_when_displayed_then_prints_bare_number() {
    assert_eq!(HttpStatusCode(503).to_string(), "503");
}
