use proptest::prelude::*;
use spongecrypt::Error;
use spongecrypt::encryption::TAG_LEN;
use spongecrypt::encryption::symmetric::{
    SALT_LEN, SymmetricCryptogram, decrypt, encrypt, encrypt_with_rng,
};
use spongecrypt::rng::Csprng;

// -------------------------------------------------------
// 1. ROUND TRIPS
// -------------------------------------------------------

#[test]
fn hello_round_trips_under_test() {
    let cryptogram = encrypt(b"hello", b"test");

    assert_eq!(decrypt(&cryptogram, b"test").unwrap(), b"hello");
}

#[test]
fn empty_message_round_trips() {
    let cryptogram = encrypt(b"", b"pw");

    assert!(cryptogram.c().is_empty());
    assert_eq!(decrypt(&cryptogram, b"pw").unwrap(), b"");
}

#[test]
fn empty_passphrase_round_trips() {
    let cryptogram = encrypt(b"message", b"");

    assert_eq!(decrypt(&cryptogram, b"").unwrap(), b"message");
}

#[test]
fn ciphertext_has_message_length_and_differs_from_it() {
    let m = vec![0u8; 300];
    let cryptogram = encrypt(&m, b"pw");

    assert_eq!(cryptogram.c().len(), m.len());
    assert_ne!(cryptogram.c(), &m[..]);
}

#[test]
fn same_seed_gives_same_cryptogram() {
    let a = encrypt_with_rng(b"hello", b"test", &mut Csprng::from_seed([7u8; 32]));
    let b = encrypt_with_rng(b"hello", b"test", &mut Csprng::from_seed([7u8; 32]));

    assert_eq!(a, b);
}

#[test]
fn fresh_salt_for_every_encryption() {
    let a = encrypt(b"hello", b"test");
    let b = encrypt(b"hello", b"test");

    assert_ne!(a.z(), b.z());
    assert_ne!(a.c(), b.c());
}

// -------------------------------------------------------
// 2. AUTHENTICATION FAILURES
// -------------------------------------------------------

#[test]
fn wrong_passphrase_fails() {
    let cryptogram = encrypt(b"hello", b"test");

    assert!(matches!(
        decrypt(&cryptogram, b"wrong"),
        Err(Error::AuthenticationFailure)
    ));
}

#[test]
fn flipped_ciphertext_bit_fails() {
    let cryptogram = encrypt(b"attack at dawn", b"pw");

    for bit in [0, 7, 50, 8 * 14 - 1] {
        let mut c = cryptogram.c().to_vec();
        c[bit / 8] ^= 1 << (bit % 8);
        let tampered = SymmetricCryptogram::new(*cryptogram.z(), c, *cryptogram.t());

        assert!(matches!(
            decrypt(&tampered, b"pw"),
            Err(Error::AuthenticationFailure)
        ));
    }
}

#[test]
fn flipped_tag_or_salt_bit_fails() {
    let cryptogram = encrypt(b"attack at dawn", b"pw");

    let mut t = *cryptogram.t();
    t[TAG_LEN - 1] ^= 0x80;
    let tampered = SymmetricCryptogram::new(*cryptogram.z(), cryptogram.c().to_vec(), t);
    assert!(matches!(decrypt(&tampered, b"pw"), Err(Error::AuthenticationFailure)));

    let mut z = *cryptogram.z();
    z[0] ^= 0x01;
    let tampered = SymmetricCryptogram::new(z, cryptogram.c().to_vec(), *cryptogram.t());
    assert!(matches!(decrypt(&tampered, b"pw"), Err(Error::AuthenticationFailure)));
}

// -------------------------------------------------------
// 3. SERIALIZATION
// -------------------------------------------------------

#[test]
fn bytes_are_salt_ciphertext_tag() {
    let cryptogram = encrypt(b"hello", b"test");
    let bytes = cryptogram.to_bytes();

    assert_eq!(bytes.len(), SALT_LEN + 5 + TAG_LEN);
    assert_eq!(&bytes[..SALT_LEN], cryptogram.z());
    assert_eq!(&bytes[SALT_LEN..SALT_LEN + 5], cryptogram.c());
    assert_eq!(&bytes[SALT_LEN + 5..], cryptogram.t());

    let parsed = SymmetricCryptogram::from_bytes(&bytes).unwrap();
    assert_eq!(parsed, cryptogram);
    assert_eq!(decrypt(&parsed, b"test").unwrap(), b"hello");
}

#[test]
fn short_input_is_malformed() {
    for len in [0, 1, 64, SALT_LEN + TAG_LEN - 1] {
        assert!(matches!(
            SymmetricCryptogram::from_bytes(&vec![0u8; len]),
            Err(Error::MalformedCryptogram(_))
        ));
    }

    assert!(SymmetricCryptogram::from_bytes(&[0u8; SALT_LEN + TAG_LEN]).is_ok());
}

// -------------------------------------------------------
// 4. PROPERTIES
// -------------------------------------------------------

proptest! {
    #[test]
    fn any_message_round_trips(
        m in proptest::collection::vec(any::<u8>(), 0..512),
        pw in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let cryptogram = encrypt(&m, &pw);
        prop_assert_eq!(decrypt(&cryptogram, &pw).unwrap(), m);
    }

    #[test]
    fn any_single_bit_flip_is_detected(
        m in proptest::collection::vec(any::<u8>(), 1..256),
        flip in any::<prop::sample::Index>(),
    ) {
        let mut bytes = encrypt(&m, b"pw").to_bytes();
        let bit = flip.index(bytes.len() * 8);
        bytes[bit / 8] ^= 1 << (bit % 8);

        let tampered = SymmetricCryptogram::from_bytes(&bytes).unwrap();
        prop_assert!(matches!(decrypt(&tampered, b"pw"), Err(Error::AuthenticationFailure)));
    }
}
