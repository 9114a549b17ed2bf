use hex_literal::hex;
use sha3::digest::{ExtendableOutput, Update, XofReader as _};
use sha3::{Digest, Sha3_256, Shake256};
use spongecrypt::hash::keccak::{Sponge, sha3_256, shake256};

fn reference_sha3_256(input: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha3_256::digest(input));
    out
}

fn reference_shake256(input: &[u8], len: usize) -> Vec<u8> {
    let mut hasher = Shake256::default();
    hasher.update(input);

    let mut out = vec![0u8; len];
    hasher.finalize_xof().read(&mut out);
    out
}

// -------------------------------------------------------
// 1. OFFICIAL VECTORS
// -------------------------------------------------------

#[test]
fn sha3_256_empty_vector() {
    assert_eq!(
        sha3_256(b""),
        hex!("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a")
    );
}

#[test]
fn sha3_256_abc_vector() {
    assert_eq!(
        sha3_256(b"abc"),
        hex!("3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532")
    );
}

#[test]
fn shake256_empty_vector() {
    assert_eq!(
        shake256(b"", 32),
        hex!("46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f")
    );
}

// -------------------------------------------------------
// 2. CROSS-CHECK AGAINST AN INDEPENDENT IMPLEMENTATION
// -------------------------------------------------------

#[test]
fn sha3_256_matches_reference_around_rate_boundaries() {
    let data: Vec<u8> = (0..600u32).map(|i| (i * 7 + 3) as u8).collect();

    for len in [0, 1, 134, 135, 136, 137, 271, 272, 273, 408, 600] {
        assert_eq!(
            sha3_256(&data[..len]),
            reference_sha3_256(&data[..len]),
            "length {len}"
        );
    }
}

#[test]
fn shake256_matches_reference_for_long_outputs() {
    let data = b"The quick brown fox jumps over the lazy dog";

    for len in [1, 64, 135, 136, 137, 500, 1000] {
        assert_eq!(shake256(data, len), reference_shake256(data, len), "length {len}");
    }
}

// -------------------------------------------------------
// 3. SPONGE STATE MACHINE
// -------------------------------------------------------

#[test]
fn absorbing_in_pieces_equals_absorbing_at_once() {
    let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();

    for split in [0, 1, 135, 136, 137, 500, 999, 1000] {
        let mut sponge = Sponge::new();
        sponge.absorb(&data[..split]);
        sponge.absorb(&data[split..]);

        let mut out = [0u8; 32];
        sponge.finalize_sha3().squeeze(&mut out);

        assert_eq!(out, sha3_256(&data), "split at {split}");
    }
}

#[test]
fn squeezing_in_pieces_continues_the_stream() {
    let expected = shake256(b"stream", 400);

    let mut sponge = Sponge::new();
    sponge.absorb(b"stream");
    let mut reader = sponge.finalize_shake();

    let mut got = Vec::new();
    for chunk in [1, 10, 125, 136, 128] {
        got.extend(reader.squeeze_vec(chunk));
    }

    assert_eq!(got, expected);
}

#[test]
fn reset_sponge_starts_over() {
    let mut sponge = Sponge::new();
    sponge.absorb(b"something else entirely");
    let reader = sponge.finalize_sha3();

    let mut sponge = reader.reset();
    sponge.absorb(b"abc");

    let mut out = [0u8; 32];
    sponge.finalize_sha3().squeeze(&mut out);

    assert_eq!(out, sha3_256(b"abc"));
}

#[test]
fn reset_while_absorbing_discards_input() {
    let mut sponge = Sponge::new();
    sponge.absorb(b"discarded");

    let mut sponge = sponge.reset();
    sponge.absorb(b"abc");

    let mut out = [0u8; 32];
    sponge.finalize_sha3().squeeze(&mut out);

    assert_eq!(out, sha3_256(b"abc"));
}

#[test]
fn rate_is_136_bytes() {
    assert_eq!(Sponge::new().rate(), 136);
}
