use hex_literal::hex;
use proptest::prelude::*;
use spongecrypt::Error;
use spongecrypt::hash::keccak::shake256;
use spongecrypt::hash::sp800_185::{
    KmacXof256, bytepad, cshake256, customization, encode_string, kmacxof256, kmacxof256_into,
    left_encode, right_encode,
};

fn sample_key() -> Vec<u8> {
    (0x40..=0x5Fu8).collect()
}

fn sample_data_long() -> Vec<u8> {
    (0x00..=0xC7u8).collect()
}

// -------------------------------------------------------
// 1. ENCODERS
// -------------------------------------------------------

#[test]
fn left_encode_vectors() {
    assert_eq!(left_encode(0).as_bytes(), &[0x01, 0x00]);
    assert_eq!(left_encode(136).as_bytes(), &[0x01, 0x88]);
    assert_eq!(left_encode(255).as_bytes(), &[0x01, 0xFF]);
    assert_eq!(left_encode(256).as_bytes(), &[0x02, 0x01, 0x00]);
    assert_eq!(left_encode(65536).as_bytes(), &[0x03, 0x01, 0x00, 0x00]);
}

#[test]
fn right_encode_vectors() {
    assert_eq!(right_encode(0).as_bytes(), &[0x00, 0x01]);
    assert_eq!(right_encode(256).as_bytes(), &[0x01, 0x00, 0x02]);
    assert_eq!(right_encode(512).as_bytes(), &[0x02, 0x00, 0x02]);
}

#[test]
fn encode_string_prefixes_bit_length() {
    assert_eq!(encode_string(b"KMAC"), hex!("01204b4d4143"));
    assert_eq!(encode_string(b""), hex!("0100"));
}

#[test]
fn bytepad_pads_to_multiple_of_width() {
    let empty = bytepad(b"", 136).unwrap();
    assert_eq!(empty.len(), 136);
    assert_eq!(&empty[..4], &[0x01, 0x88, 0x00, 0x00]);

    assert_eq!(bytepad(&[b'x'; 134], 136).unwrap().len(), 136);
    assert_eq!(bytepad(&[b'x'; 135], 136).unwrap().len(), 272);
}

#[test]
fn bytepad_rejects_zero_width() {
    assert!(matches!(bytepad(b"abc", 0), Err(Error::InvalidEncodingInput(_))));
}

// -------------------------------------------------------
// 2. NIST SP 800-185 SAMPLES
// -------------------------------------------------------

#[test]
fn cshake256_sample_3() {
    let out = cshake256(&hex!("00010203"), 512, b"", b"Email Signature").unwrap();

    assert_eq!(
        out,
        hex!(
            "d008828e2b80ac9d2218ffee1d070c48b8e4c87bff32c9699d5b6896eee0edd1"
            "64020e2be0560858d9c00c037e34a96937c561a74c412bb4c746469527281c8c"
        )
    );
}

#[test]
fn cshake256_sample_4() {
    let out = cshake256(&sample_data_long(), 512, b"", b"Email Signature").unwrap();

    assert_eq!(
        out,
        hex!(
            "07dc27b11e51fbac75bc7b3c1d983e8b4b85fb1defaf218912ac864302730917"
            "27f42b17ed1df63e8ec118f04b23633c1dfb1574c8fb55cb45da8e25afb092bb"
        )
    );
}

#[test]
fn kmacxof256_sample_4() {
    let out = kmacxof256(&sample_key(), &hex!("00010203"), 512, b"My Tagged Application").unwrap();

    assert_eq!(
        out,
        hex!(
            "1755133f1534752aad0748f2c706fb5c784512cab835cd15676b16c0c6647fa9"
            "6faa7af634a0bf8ff6df39374fa00fad9a39e322a7c92065a64eb1fb0801eb2b"
        )
    );
}

#[test]
fn kmacxof256_sample_5() {
    let out = kmacxof256(&sample_key(), &sample_data_long(), 512, b"").unwrap();

    assert_eq!(
        out,
        hex!(
            "ff7b171f1e8a2b24683eed37830ee797538ba8dc563f6da1e667391a75edc02c"
            "a633079f81ce12a25f45615ec89972031d18337331d24ceb8f8ca8e6a19fd98b"
        )
    );
}

#[test]
fn kmacxof256_sample_6() {
    let out = kmacxof256(&sample_key(), &sample_data_long(), 512, b"My Tagged Application").unwrap();

    assert_eq!(
        out,
        hex!(
            "d5be731c954ed7732846bb59dbe3a8e30f83e77a4bff4459f2f1c2b4ecebb8ce"
            "67ba01c62e8ab8578d2d499bd1bb276768781190020a306a97de281dcc30305d"
        )
    );
}

// -------------------------------------------------------
// 3. DERIVED CONSTANTS AND EDGE CASES
// -------------------------------------------------------

#[test]
fn empty_hash_constant() {
    let out = kmacxof256(b"", b"", 512, customization::HASH).unwrap();

    assert_eq!(
        out,
        hex!(
            "d714347493b4cf23af8bea77bf811ee75a99c4087b3329966a0952f57d087aba"
            "d4a31831f05a815db330bee0e61be30dc78d4bdcc57f0ce5515a98a53e73505d"
        )
    );
}

#[test]
fn output_length_follows_requested_bits() {
    for bits in [0, 8, 256, 512, 1024, 8 * 1000] {
        assert_eq!(kmacxof256(b"k", b"m", bits, b"S").unwrap().len(), bits / 8);
    }
}

#[test]
fn non_byte_aligned_length_is_rejected() {
    assert!(matches!(
        kmacxof256(b"k", b"m", 511, b"S"),
        Err(Error::InvalidEncodingInput(_))
    ));
    assert!(matches!(
        cshake256(b"m", 7, b"", b"S"),
        Err(Error::InvalidEncodingInput(_))
    ));
}

#[test]
fn into_variant_matches_one_shot() {
    let mut out = [0u8; 128];
    kmacxof256_into(b"key", b"message", b"SKE", &mut out);

    assert_eq!(out.to_vec(), kmacxof256(b"key", b"message", 1024, b"SKE").unwrap());
}

#[test]
fn shorter_output_is_a_prefix_of_longer_output() {
    let short = kmacxof256(b"key", b"message", 256, b"T").unwrap();
    let long = kmacxof256(b"key", b"message", 2048, b"T").unwrap();

    assert_eq!(short, long[..32]);
}

#[test]
fn customization_separates_domains() {
    let d = kmacxof256(b"pw", b"m", 512, customization::HASH).unwrap();
    let t = kmacxof256(b"pw", b"m", 512, customization::TAG).unwrap();

    assert_ne!(d, t);
}

// -------------------------------------------------------
// 4. PROPERTIES
// -------------------------------------------------------

proptest! {
    #[test]
    fn cshake_without_names_is_shake(data in proptest::collection::vec(any::<u8>(), 0..400)) {
        prop_assert_eq!(cshake256(&data, 512, b"", b"").unwrap(), shake256(&data, 64));
    }

    #[test]
    fn streaming_equals_one_shot(
        key in proptest::collection::vec(any::<u8>(), 0..200),
        data in proptest::collection::vec(any::<u8>(), 0..600),
        split in any::<prop::sample::Index>(),
    ) {
        let cut = split.index(data.len() + 1);

        let mut mac = KmacXof256::new(&key, b"S");
        mac.update(&data[..cut]);
        mac.update(&data[cut..]);

        prop_assert_eq!(mac.finalize(64), kmacxof256(&key, &data, 512, b"S").unwrap());
    }
}
