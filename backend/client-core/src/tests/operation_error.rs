use crate::error::OperationError;

use common::ErrorLocation;

use std::panic::Location;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[test]
fn given_busy_error_when_mapped_to_notice_then_silent() {
    let err = OperationError::Busy {
        message: String::from("in flight"),
        location: here(),
    };

    assert_eq!(err.status_notice(), None);
}

#[test]
fn given_transport_error_when_mapped_then_hides_details_from_user() {
    let err = OperationError::Transport {
        message: String::from("connection refused"),
        location: here(),
    };

    let notice = err.status_notice().unwrap();

    assert_eq!(
        notice.message,
        "Error converting code. Check console for details."
    );
    assert!(notice.is_error);
}

#[test]
fn given_service_error_without_message_when_mapped_then_uses_default() {
    let err = OperationError::Service {
        message: None,
        location: here(),
    };

    assert_eq!(
        err.status_notice().unwrap().message,
        "Error: Unknown error occurred"
    );
}

#[test]
fn given_operation_error_when_displayed_then_includes_location() {
    let err = OperationError::NothingToCopy {
        message: String::from("No converted code to copy"),
        location: here(),
    };

    let text = err.to_string();

    assert!(text.starts_with("Nothing To Copy Error: No converted code to copy ["));
    assert!(text.contains("operation_error.rs"));
}
