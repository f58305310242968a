use credtable::hash::md5_hex;
use credtable::hash::md5::{MD5_INIT, core::compress};
use credtable::primitives::{Digest, ParseDigestError};

use ::md5::{Digest as _, Md5};

fn reference_hex(input: &[u8]) -> String {
    Md5::digest(input)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

fn expect_md5_eq(input: &[u8], expected: &str) {
    let got = md5_hex(input);

    assert_eq!(
        got, expected,
        "Digest mismatch for input {:?}\nExpected {}\nGot      {}",
        input, expected, got,
    );
}

fn expect_matches_reference(input: &[u8]) {
    expect_md5_eq(input, &reference_hex(input));
}

// -------------------------------------------------------
// 1. RFC 1321 TEST SUITE
// -------------------------------------------------------

#[test]
fn md5_empty_vector() {
    expect_md5_eq(b"", "d41d8cd98f00b204e9800998ecf8427e");
}

#[test]
fn md5_single_char_vector() {
    expect_md5_eq(b"a", "0cc175b9c0f1b6a831c399e269772661");
}

#[test]
fn md5_abc_vector() {
    expect_md5_eq(b"abc", "900150983cd24fb0d6963f7d28e17f72");
}

#[test]
fn md5_message_digest_vector() {
    expect_md5_eq(b"message digest", "f96b697d7cb7938d525a2f31aaf161d0");
}

#[test]
fn md5_alphabet_vector() {
    expect_md5_eq(
        b"abcdefghijklmnopqrstuvwxyz",
        "c3fcd3d76192e4007dfb496cca67e13b",
    );
}

#[test]
fn md5_alphanumeric_vector() {
    expect_md5_eq(
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        "d174ab98d277d9f5a5611c2c9f419d9f",
    );
}

#[test]
fn md5_digits_vector() {
    expect_md5_eq(
        b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
        "57edf4a22be3c955ac49da2e2107b67a",
    );
}

#[test]
fn md5_known_phrase() {
    expect_md5_eq(
        b"The quick brown fox jumps over the lazy dog",
        "9e107d9d372bb6826bd81d3542a419d6",
    );
}

// -------------------------------------------------------
// 2. LENGTHS FROM 0 TO 256
// -------------------------------------------------------

#[test]
fn md5_incremental_lengths() {
    let mut buf = Vec::with_capacity(256);
    expect_matches_reference(&buf);

    for i in 0..256 {
        buf.push(i as u8);
        expect_matches_reference(&buf);
    }
}

// -------------------------------------------------------
// 3. PADDING BOUNDARIES
// -------------------------------------------------------

#[test]
fn md5_padding_boundaries() {
    // 55 fits the length suffix in the same block, 56..=63 spill into a
    // second one, 64 starts a fresh block.
    for len in [55, 56, 57, 63, 64, 65, 119, 120, 127, 128] {
        let buf = vec![0x61u8; len];
        expect_matches_reference(&buf);
    }
}

#[test]
fn md5_zeroes_and_ff_various_lengths() {
    for len in [1, 2, 4, 8, 16, 32, 64, 128, 255, 256] {
        expect_matches_reference(&vec![0u8; len]);
        expect_matches_reference(&vec![0xFF; len]);
    }
}

#[test]
fn md5_single_bytes() {
    for b in 0u8..=255 {
        expect_matches_reference(&[b]);
    }
}

// -------------------------------------------------------
// 4. MULTI-BLOCK AND TEXT INPUTS
// -------------------------------------------------------

#[test]
fn md5_large_multiblock() {
    let buf: Vec<u8> = (0..5000).map(|i| (i % 251) as u8).collect();
    expect_matches_reference(&buf);
}

#[test]
fn md5_1mb_data() {
    let buf = vec![0xAAu8; 1_000_000];
    expect_matches_reference(&buf);
}

#[test]
fn md5_hashes_utf8_bytes() {
    for text in ["你好吗？", "お元気ですか", "pässwörd", "🦀"] {
        expect_matches_reference(text.as_bytes());
    }
}

#[test]
fn md5_is_deterministic() {
    let a = credtable::hash::md5(b"same input");
    let b = credtable::hash::md5(b"same input");
    assert_eq!(a, b);
    assert_ne!(a, credtable::hash::md5(b"other input"));
}

// -------------------------------------------------------
// 5. COMPRESSION AND DIGEST VALUE
// -------------------------------------------------------

#[test]
fn md5_output_is_low_byte_first() {
    let digest = Digest::from(MD5_INIT);
    assert_eq!(digest.to_hex(), "0123456789abcdeffedcba9876543210");
    assert_eq!(<[u32; 4]>::from(digest), MD5_INIT);
}

#[test]
fn md5_compress_matches_padded_empty_message() {
    let mut block = [0u8; 64];
    block[0] = 0x80;

    let mut state = MD5_INIT;
    compress(&block, &mut state);

    assert_eq!(
        Digest::from(state).to_hex(),
        "d41d8cd98f00b204e9800998ecf8427e"
    );
}

#[test]
fn digest_renders_32_lowercase_hex() {
    let hex = md5_hex(b"Hello, World");
    assert_eq!(hex.len(), 32);
    assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}

#[test]
fn digest_parses_its_rendering() {
    let digest = credtable::hash::md5(b"abc");
    let parsed: Digest = digest.to_string().parse().unwrap();
    assert_eq!(parsed, digest);

    let upper: Digest = "900150983CD24FB0D6963F7D28E17F72".parse().unwrap();
    assert_eq!(upper, digest);
    assert!(digest == "900150983cd24fb0d6963f7d28e17f72");
}

#[test]
fn digest_rejects_malformed_hex() {
    assert_eq!(
        "abc".parse::<Digest>(),
        Err(ParseDigestError::InvalidLength(3))
    );
    assert_eq!(
        "z00150983cd24fb0d6963f7d28e17f72".parse::<Digest>(),
        Err(ParseDigestError::InvalidCharacter('z'))
    );
}

#[test]
fn digest_byte_conversions() {
    let digest = credtable::hash::md5(b"");
    let bytes: [u8; 16] = digest.into();
    assert_eq!(Digest::from(bytes), digest);
    assert_eq!(digest.as_ref(), &bytes[..]);
    assert_eq!(Digest::try_from(&bytes[..]), Ok(digest));
    assert!(Digest::try_from(&bytes[..15]).is_err());
}

#[test]
fn digest_hex_display_and_debug_agree() {
    for bytes in [[0u8; 16], [0xffu8; 16], [0x0a; 16]] {
        let digest = Digest::from(bytes);
        let hex = digest.to_hex();
        assert_eq!(hex.len(), Digest::HEX_LEN);
        assert_eq!(hex, digest.to_string());
        assert_eq!(format!("{:?}", digest), format!("Digest({hex})"));
    }

    assert_eq!(Digest::from([0x0a; 16]).to_hex(), "0a".repeat(16));
}
