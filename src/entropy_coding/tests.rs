use super::{decode, encode, encode_into, io::BitSequence};
use crate::{error::Error, helpers::ACStats, models::build_model};

fn roundtrip(input: &[u8]) -> BitSequence {
    let (_, model) = build_model(input).unwrap();
    let bits = encode(input, &model).unwrap();
    let decoded = decode(&bits, &model, input.len()).unwrap();
    assert_eq!(input, decoded);
    bits
}

/// Deterministic pseudo random bytes, xorshift
fn noise(len: usize, mut state: u64) -> Vec<u8> {
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 56) as u8
        })
        .collect()
}

#[test]
fn bytes_0001() {
    let input = [0, 0, 0, 1];
    let bits = roundtrip(&input);
    // -3 * log2(3/4) - log2(1/4) ~ 3.25 bits
    assert!(bits.len() <= 6);
}

#[test]
fn single_byte() {
    let bits = roundtrip(&[0x42]);
    // full range is never narrowed, only the flush tail is written
    assert_eq!(bits.iter().collect::<Vec<_>>(), [0, 1]);
}

#[test]
fn single_symbol_alphabet() {
    let input = [0xffu8].repeat(1 << 16);
    let bits = roundtrip(&input);
    assert_eq!(bits.len(), 2);
}

#[test]
fn uniform_alphabet() {
    let input: Vec<u8> = (0..=255).cycle().take(256 * 16).collect();
    let bits = roundtrip(&input);
    // every byte costs exactly 8 bits
    assert_eq!(bits.len(), input.len() * 8 + 2);
}

#[test]
fn dominant_byte() {
    let mut input = [b'a'].repeat(5000);
    for (i, rare) in [b'x', b'y', b'z', 0, 0xff].into_iter().enumerate() {
        input[i * 997 + 13] = rare;
    }
    roundtrip(&input);
}

#[test]
fn random_bytes() {
    for (len, seed) in [(1, 1), (2, 7), (3, 99), (100, 5), (4096, 42), (50_000, 1234)] {
        roundtrip(&noise(len, seed));
    }
}

#[test]
fn text() {
    let input = b"It was the best of times, it was the worst of times, it was the age of \
        wisdom, it was the age of foolishness, it was the epoch of belief, it was the \
        epoch of incredulity, it was the season of Light, it was the season of Darkness";
    roundtrip(input);
}

#[test]
fn deterministic() {
    let input = noise(10_000, 77);
    let (_, model) = build_model(&input).unwrap();
    let first = encode(&input, &model).unwrap();
    let second = encode(&input, &model).unwrap();
    assert_eq!(first, second);
}

#[test]
fn repeated_straddles() {
    // 'b' owns exactly [Q1, Q3), so each one only defers a bit
    let k = 40;
    let mut input = [b'a'].repeat(k);
    input.extend([b'b'].repeat(2 * k));
    input.extend([b'c'].repeat(k));
    let bits = roundtrip(&input);

    let mut truth = vec![0; 2 * k]; // a's: 00 each
    truth.push(1); // first c resolves the straddles upwards
    truth.extend(vec![0; 2 * k]);
    truth.push(1);
    truth.extend([1, 1].repeat(k - 1)); // rest of the c's
    truth.extend([0, 1]); // flush
    assert_eq!(bits.iter().collect::<Vec<_>>(), truth);

    // entropy is exactly 6k bits, the flush adds 2
    assert_eq!(bits.len(), 6 * k + 2);
}

#[test]
fn within_entropy_bound() {
    for (len, seed) in [(500, 3), (10_000, 8)] {
        // skewed: squash noise into a small alphabet
        let input: Vec<u8> = noise(len, seed).iter().map(|b| b.leading_zeros() as u8).collect();
        let (_, model) = build_model(&input).unwrap();
        let bits = encode(&input, &model).unwrap();
        assert!((bits.len() as f64) <= model.entropy_bits() + 2.05);
        assert_eq!(decode(&bits, &model, input.len()).unwrap(), input);
    }
}

#[test]
fn stats_match_bit_count() {
    let input = noise(3000, 11);
    let (_, model) = build_model(&input).unwrap();
    let mut stats = ACStats::new();
    encode_into(&input, &model, &mut stats).unwrap();
    let bits = encode(&input, &model).unwrap();
    assert_eq!(stats.bit_count(), bits.len() as u64);
}

#[test]
fn empty_input() {
    let (_, model) = build_model(b"a").unwrap();
    assert!(matches!(encode(&[], &model), Err(Error::EmptyInput)));
    assert!(matches!(build_model(&[]), Err(Error::EmptyInput)));
}

#[test]
fn unknown_symbol() {
    let (_, model) = build_model(b"abc").unwrap();
    assert!(matches!(encode(b"abd", &model), Err(Error::UnknownSymbol(b'd'))));
}

#[test]
fn stream_exhausted() {
    let input = noise(1000, 21);
    let (_, model) = build_model(&input).unwrap();
    let bits = encode(&input, &model).unwrap();

    // asking for more symbols than were encoded
    let err = decode(&bits, &model, input.len() * 4).unwrap_err();
    assert!(matches!(err, Error::StreamExhausted { expected, .. } if expected == 4000));

    // dropping most of the stream runs off the padded end
    let truncated: BitSequence = bits.iter().take(bits.len() / 2).collect();
    assert!(matches!(
        decode(&truncated, &model, input.len()),
        Err(Error::StreamExhausted { .. })
    ));
}

fn assert_count_rejected(input: &[u8], count: usize) {
    let (_, model) = build_model(input).unwrap();
    let bits = encode(input, &model).unwrap();
    let err = decode(&bits, &model, count).unwrap_err();
    assert!(
        matches!(err, Error::StreamExhausted { decoded: 0, expected } if expected == count),
        "count {count} for {} bytes gave {err:?}",
        input.len()
    );
}

#[test]
fn count_overrun_single_symbol() {
    // no bits are ever read for a one symbol alphabet
    assert_count_rejected(b"aaaa", 1000);
    assert_count_rejected(b"a", 2);
}

#[test]
fn count_overrun_skewed() {
    let mut input = [b'e'].repeat(200);
    input.push(b'x');
    assert_count_rejected(&input, input.len() + 10);
    assert_count_rejected(&input, input.len() + 1);
}

#[test]
fn count_underrun() {
    assert_count_rejected(b"abracadabra", 3);
    assert_count_rejected(b"abracadabra", 10);
    assert_count_rejected(&[0xffu8].repeat(64), 1);
    assert_count_rejected(&noise(2000, 5), 100);
}
