use super::{LANES, PILN, RC, ROTC, ROUNDS, WIDTH};

#[inline(always)]
pub fn theta(a: &mut [u64; LANES]) {
    let mut bc = [0u64; 5];

    for (i, parity) in bc.iter_mut().enumerate() {
        *parity = a[i] ^ a[i + 5] ^ a[i + 10] ^ a[i + 15] ^ a[i + 20];
    }

    for i in 0..5 {
        let t = bc[(i + 4) % 5] ^ bc[(i + 1) % 5].rotate_left(1);
        for j in (0..LANES).step_by(5) {
            a[j + i] ^= t;
        }
    }
}

#[inline(always)]
pub fn rho_pi(a: &mut [u64; LANES]) {
    let mut t = a[1];

    for (&j, &r) in PILN.iter().zip(ROTC.iter()) {
        let next = a[j];
        a[j] = t.rotate_left(r);
        t = next;
    }
}

#[inline(always)]
pub fn chi(a: &mut [u64; LANES]) {
    for j in (0..LANES).step_by(5) {
        let row = [a[j], a[j + 1], a[j + 2], a[j + 3], a[j + 4]];
        for i in 0..5 {
            a[j + i] ^= (!row[(i + 1) % 5]) & row[(i + 2) % 5];
        }
    }
}

#[inline(always)]
pub fn iota(a: &mut [u64; LANES], round: usize) {
    a[0] ^= RC[round];
}

#[cfg(not(feature = "speed"))]
pub fn all_rounds(a: &mut [u64; LANES]) {
    for round in 0..ROUNDS {
        theta(a);
        rho_pi(a);
        chi(a);
        iota(a, round);
    }
}

#[cfg(feature = "speed")]
pub fn all_rounds(a: &mut [u64; LANES]) {
    macro_rules! R {
        ($round:expr) => {{
            theta(a);
            rho_pi(a);
            chi(a);
            iota(a, $round);
        }};
    }

    R!(0);
    R!(1);
    R!(2);
    R!(3);
    R!(4);
    R!(5);
    R!(6);
    R!(7);

    R!(8);
    R!(9);
    R!(10);
    R!(11);
    R!(12);
    R!(13);
    R!(14);
    R!(15);

    R!(16);
    R!(17);
    R!(18);
    R!(19);
    R!(20);
    R!(21);
    R!(22);
    R!(23);
}

/// Applies Keccak-f[1600] to a lane array.
#[inline]
pub fn keccakf_lanes(lanes: &mut [u64; LANES]) {
    all_rounds(lanes);
}

/// Applies Keccak-f[1600] in place to a 200-byte state.
///
/// Lanes are read and written little-endian, so the byte layout matches
/// every other SHA-3 implementation regardless of the host byte order.
pub fn keccakf(state: &mut [u8; WIDTH]) {
    let mut lanes = [0u64; LANES];

    for (lane, chunk) in lanes.iter_mut().zip(state.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *lane = u64::from_le_bytes(bytes);
    }

    all_rounds(&mut lanes);

    for (chunk, lane) in state.chunks_exact_mut(8).zip(lanes.iter()) {
        chunk.copy_from_slice(&lane.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Keccak-f[1600] applied once to the all-zero state.
    const ZERO_STATE_FIRST_LANES: [u64; 5] = [
        0xF1258F7940E1DDE7,
        0x84D5CCF933C0478A,
        0xD598261EA65AA9EE,
        0xBD1547306F80494D,
        0x8B284E056253D057,
    ];

    #[test]
    fn permutes_zero_state_to_reference_lanes() {
        let mut lanes = [0u64; LANES];
        keccakf_lanes(&mut lanes);

        assert_eq!(lanes[..5], ZERO_STATE_FIRST_LANES);
    }

    #[test]
    fn byte_and_lane_entry_points_agree() {
        let mut bytes = [0u8; WIDTH];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }

        let mut lanes = [0u64; LANES];
        for (lane, chunk) in lanes.iter_mut().zip(bytes.chunks_exact(8)) {
            *lane = u64::from_le_bytes(chunk.try_into().unwrap());
        }

        keccakf(&mut bytes);
        keccakf_lanes(&mut lanes);

        for (lane, chunk) in lanes.iter().zip(bytes.chunks_exact(8)) {
            assert_eq!(*lane, u64::from_le_bytes(chunk.try_into().unwrap()));
        }
    }

    #[test]
    fn theta_of_zero_is_zero() {
        let mut lanes = [0u64; LANES];
        theta(&mut lanes);
        rho_pi(&mut lanes);
        chi(&mut lanes);

        assert!(lanes.iter().all(|&l| l == 0));
    }
}
