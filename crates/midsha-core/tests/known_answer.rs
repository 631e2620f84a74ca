//! # Known-Answer and Cross-Implementation Tests
//!
//! FIPS 180-2 vectors plus equivalence against the `sha2` crate, which
//! serves as the reference SHA-256 implementation.

use midsha_core::{sha256, Sha256Engine};
use sha2::{Digest, Sha256};

/// (input, expected hex digest)
fn vectors() -> Vec<(Vec<u8>, &'static str)> {
    vec![
        (
            b"".to_vec(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        ),
        (
            b"abc".to_vec(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ),
        (
            b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq".to_vec(),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
        ),
        (
            vec![b'a'; 129],
            "c12cb024a2e5551cca0e08fce8f1c5e314555cc3fef6329ee994a3db752166ae",
        ),
        (
            vec![b'a'; 1_000_000],
            "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
        ),
    ]
}

fn reference_hex(data: &[u8]) -> String {
    Sha256::digest(data)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

#[test]
fn test_known_answer_vectors_single_update() {
    for (input, expected) in vectors() {
        let mut engine = Sha256Engine::new();
        engine.update(&input);
        assert_eq!(engine.hexdigest(), expected, "input length {}", input.len());
    }
}

#[test]
fn test_known_answer_vectors_byte_at_a_time() {
    for (input, expected) in vectors().into_iter().take(4) {
        let mut engine = Sha256Engine::new();
        for byte in &input {
            engine.update([*byte]);
        }
        assert_eq!(engine.hexdigest(), expected, "input length {}", input.len());
    }
}

#[test]
fn test_million_a_in_uneven_chunks() {
    let data = vec![b'a'; 1_000_000];
    let mut engine = Sha256Engine::new();
    for chunk in data.chunks(997) {
        engine.update(chunk);
    }
    assert_eq!(engine.byte_count(), 1_000_000);
    assert_eq!(
        engine.hexdigest(),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}

#[test]
fn test_matches_reference_for_vectors() {
    for (input, _) in vectors() {
        assert_eq!(sha256(&input).to_hex(), reference_hex(&input));
    }
}

#[test]
fn test_matches_reference_for_every_length_up_to_three_blocks() {
    let data: Vec<u8> = (0..=192u32).map(|i| (i * 31 + 7) as u8).collect();
    for len in 0..=data.len() {
        let slice = &data[..len];
        assert_eq!(sha256(slice).to_hex(), reference_hex(slice), "length {len}");
    }
}

#[test]
fn test_binary_input_with_all_byte_values() {
    let data: Vec<u8> = (0..=255u8).cycle().take(1024).collect();
    assert_eq!(
        sha256(&data).as_bytes().as_slice(),
        Sha256::digest(&data).as_slice()
    );
}

#[test]
fn test_digest_bytes_and_hex_agree() {
    let engine = Sha256Engine::with_data(b"abc");
    let digest = engine.digest();
    assert_eq!(digest.as_bytes().len(), 32);
    assert_eq!(digest.to_hex(), engine.hexdigest());
    assert_eq!(engine.hexdigest().len(), 64);
    assert!(engine
        .hexdigest()
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}
