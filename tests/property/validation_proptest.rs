//! Property tests for request validation

use moviefav::backend::auth::handlers::types::{is_valid_email, RegisterRequest};
use proptest::prelude::*;

proptest! {
    #[test]
    fn well_formed_emails_are_accepted(
        local in "[a-z0-9._+]{1,20}",
        domain in "[a-z0-9]{1,20}",
        tld in "[a-z]{2,6}",
    ) {
        let email = format!("{local}@{domain}.{tld}");
        prop_assert!(is_valid_email(&email));
    }

    #[test]
    fn emails_without_at_are_rejected(text in "[a-z0-9.]{0,40}") {
        prop_assert!(!is_valid_email(&text));
    }

    #[test]
    fn short_passwords_are_rejected(password in "[a-zA-Z0-9]{0,5}") {
        let request = RegisterRequest {
            username: "alice".to_string(),
            email: "a@x.io".to_string(),
            password,
        };
        let err = request.validate().unwrap_err();
        prop_assert_eq!(err.field(), "password");
    }
}
