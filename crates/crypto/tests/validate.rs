//! End-to-end signing and validation properties.

use hooksig_crypto::{sign, sign_encoded, validate, Algorithm, SignatureError, Verifier};
use proptest::prelude::*;
use std::sync::Arc;
use std::thread;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("hooksig_crypto=trace")
        .with_test_writer()
        .try_init();
}

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![Just(Algorithm::Sha1), Just(Algorithm::Sha256)]
}

#[test]
fn known_vectors_validate() {
    init_tracing();

    let payload = b"sign this message";
    assert!(validate(payload, "sha1=6791a762f7568f945c2e1e396cea243e944100a6", "my key").is_ok());
    assert!(validate(
        payload,
        "sha256=41f8b7712c58dc25be8d30cf25e57739a65f5f2f449b59a42e04da1f191512e7",
        b"my key"
    )
    .is_ok());
}

#[test]
fn short_signature_is_format_error() {
    init_tracing();

    let err = validate(b"test", "ab", "key").unwrap_err();
    assert_eq!(err, SignatureError::TooShort { len: 2 });
    assert_eq!(err.to_string(), "invalid signature, should have at least 5 characters");
}

#[test]
fn unknown_prefix_names_supported_prefixes() {
    init_tracing();

    let err = validate(b"test", "unknown=abcdef", "key").unwrap_err();
    assert_eq!(err.to_string(), "valid hash prefixes: [sha1=, sha256=], got: unknown=abcdef");
}

#[test]
fn verifier_is_shareable_across_threads() {
    init_tracing();

    let verifier = Arc::new(Verifier::new("shared secret"));
    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            let verifier = Arc::clone(&verifier);
            thread::spawn(move || {
                let payload = vec![i; 64];
                let header = sign_encoded(&payload, "shared secret", Algorithm::Sha256);
                verifier.verify(&payload, &header)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
}

proptest! {
    #[test]
    fn sign_is_deterministic(payload in any::<Vec<u8>>(), key in any::<Vec<u8>>(), alg in algorithm()) {
        prop_assert_eq!(sign(&payload, &key, alg), sign(&payload, &key, alg));
    }

    #[test]
    fn hex_digest_has_fixed_lowercase_length(payload in any::<Vec<u8>>(), key in any::<Vec<u8>>(), alg in algorithm()) {
        let digest = hex::encode(sign(&payload, &key, alg));
        prop_assert_eq!(digest.len(), alg.hex_len());
        prop_assert!(digest.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[test]
    fn round_trip_validates(payload in any::<Vec<u8>>(), key in any::<Vec<u8>>(), alg in algorithm()) {
        let encoded = format!("{}{}", alg.prefix(), hex::encode(sign(&payload, &key, alg)));
        prop_assert_eq!(validate(&payload, &encoded, &key), Ok(()));
    }

    #[test]
    fn short_signatures_are_rejected(payload in any::<Vec<u8>>(), signature in ".{0,4}", key in any::<Vec<u8>>()) {
        prop_assume!(signature.len() < 5);
        prop_assert_eq!(
            validate(&payload, &signature, &key),
            Err(SignatureError::TooShort { len: signature.len() })
        );
    }

    #[test]
    fn flipped_hex_char_is_mismatch(
        payload in any::<Vec<u8>>(),
        key in any::<Vec<u8>>(),
        alg in algorithm(),
        index in any::<prop::sample::Index>()
    ) {
        let encoded = sign_encoded(&payload, &key, alg);
        let position = alg.prefix().len() + index.index(alg.hex_len());

        let mut bytes = encoded.into_bytes();
        bytes[position] = if bytes[position] == b'0' { b'1' } else { b'0' };
        let tampered = String::from_utf8(bytes).unwrap();

        prop_assert_eq!(validate(&payload, &tampered, &key), Err(SignatureError::Mismatch));
    }

    #[test]
    fn tampered_payload_is_mismatch(payload in any::<Vec<u8>>(), key in any::<Vec<u8>>(), alg in algorithm()) {
        let encoded = sign_encoded(&payload, &key, alg);
        let mut tampered = payload.clone();
        tampered.push(0);
        prop_assert_eq!(validate(&tampered, &encoded, &key), Err(SignatureError::Mismatch));
    }
}
