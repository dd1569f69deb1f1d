use super::*;

// =============================================================
// error_from_response
// =============================================================

#[test]
fn server_error_body_is_surfaced_verbatim() {
    let err = error_from_response(401, r#"{"error":"Invalid credentials"}"#);
    assert_eq!(err, ApiError::Server("Invalid credentials".to_owned()));
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn server_error_with_extra_fields_still_parses() {
    let err = error_from_response(500, r#"{"error":"model unavailable","detail":"x"}"#);
    assert_eq!(err, ApiError::Server("model unavailable".to_owned()));
}

#[test]
fn unparseable_body_is_a_network_error() {
    let err = error_from_response(502, "<html>Bad Gateway</html>");
    match err {
        ApiError::Network(msg) => assert!(msg.contains("502")),
        ApiError::Server(_) => panic!("expected network error"),
    }
}

#[test]
fn empty_body_is_a_network_error() {
    assert!(matches!(error_from_response(500, ""), ApiError::Network(_)));
}

#[test]
fn body_without_error_field_is_a_network_error() {
    assert!(matches!(
        error_from_response(500, r#"{"message":"nope"}"#),
        ApiError::Network(_)
    ));
}

// =============================================================
// SSR stubs fail closed
// =============================================================

#[cfg(not(feature = "hydrate"))]
mod ssr_stubs {
    use futures::executor::block_on;

    use crate::i18n::Language;
    use crate::net::api::{ApiError, ask, check_login, login, logout};

    #[test]
    fn check_login_stub_reports_logged_out() {
        assert!(!block_on(check_login()));
    }

    #[test]
    fn login_stub_is_a_network_error() {
        let result = block_on(login("a@b.com", "secret"));
        assert!(matches!(result, Err(ApiError::Network(_))));
    }

    #[test]
    fn ask_stub_is_a_network_error() {
        let result = block_on(ask("hello", Language::En));
        assert!(matches!(result, Err(ApiError::Network(_))));
    }

    #[test]
    fn logout_stub_completes() {
        block_on(logout());
    }
}
