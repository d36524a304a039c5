//! Property tests for access tokens
//!
//! A token is only ever accepted exactly as issued: flipping any single bit
//! anywhere in it must make verification fail.

use chrono::Duration;
use moviefav::backend::auth::sessions::{TokenError, TokenMaker};
use proptest::prelude::*;

const SECRET: &str = "0123456789abcdef0123456789abcdef";

fn maker() -> TokenMaker {
    TokenMaker::new(SECRET).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn issued_tokens_verify(subject in "[a-zA-Z0-9_]{3,40}", minutes in 1i64..10_000) {
        let token = maker().create_token(&subject, Duration::minutes(minutes)).unwrap();
        let payload = maker().verify_token(&token).unwrap();
        prop_assert_eq!(payload.subject, subject);
        prop_assert_eq!(payload.expired_at - payload.issued_at, Duration::minutes(minutes));
    }

    #[test]
    fn single_bit_flip_is_rejected(
        subject in "[a-z]{3,20}",
        position in any::<prop::sample::Index>(),
        bit in 0u8..7,
    ) {
        let token = maker().create_token(&subject, Duration::minutes(15)).unwrap();

        let mut bytes = token.into_bytes();
        let index = position.index(bytes.len());
        // tokens are ASCII; flipping one of the low seven bits keeps them ASCII
        bytes[index] ^= 1 << bit;
        let tampered = String::from_utf8(bytes).unwrap();

        prop_assert!(matches!(maker().verify_token(&tampered), Err(TokenError::Invalid)));
    }

    #[test]
    fn expired_tokens_are_rejected(seconds in 1i64..100_000) {
        let token = maker().create_token("alice", Duration::seconds(-seconds)).unwrap();
        prop_assert!(matches!(maker().verify_token(&token), Err(TokenError::Expired)));
    }
}
