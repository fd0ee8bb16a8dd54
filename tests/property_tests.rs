use proptest::prelude::*;
use static_ac::{build_model, compress, decode, decompress, encode, Container};

proptest! {
    #[test]
    fn test_roundtrip(input in prop::collection::vec(any::<u8>(), 1..2000)) {
        let (_, model) = build_model(&input).unwrap();
        let bits = encode(&input, &model).unwrap();
        prop_assert_eq!(decode(&bits, &model, input.len()).unwrap(), input);
    }

    #[test]
    fn test_roundtrip_small_alphabet(
        input in prop::collection::vec(0..3u8, 1..5000),
    ) {
        let packed = compress(&input).unwrap();
        prop_assert_eq!(decompress(&packed).unwrap(), input);
    }

    #[test]
    fn test_skewed(
        len in 1..4000usize,
        rare in prop::collection::vec((any::<usize>(), any::<u8>()), 0..8),
    ) {
        let mut input = vec![b'e'; len];
        for (pos, byte) in rare {
            input[pos % len] = byte;
        }
        let packed = compress(&input).unwrap();
        prop_assert_eq!(decompress(&packed).unwrap(), input);
    }

    #[test]
    fn test_entropy_bound(input in prop::collection::vec(0..16u8, 1..3000)) {
        let (_, model) = build_model(&input).unwrap();
        let bits = encode(&input, &model).unwrap();
        prop_assert!((bits.len() as f64) <= model.entropy_bits() + 2.01);
    }

    #[test]
    fn test_wrong_count_rejected(
        input in prop::collection::vec(0..4u8, 1..1000),
        delta in 1..50usize,
        over in any::<bool>(),
    ) {
        let (_, model) = build_model(&input).unwrap();
        let bits = encode(&input, &model).unwrap();
        let count = if over { input.len() + delta } else { input.len().saturating_sub(delta) };
        prop_assert!(decode(&bits, &model, count).is_err());
    }

    #[test]
    fn test_container_roundtrip(input in prop::collection::vec(any::<u8>(), 1..500)) {
        let (table, model) = build_model(&input).unwrap();
        let bits = encode(&input, &model).unwrap();
        let container = Container::new(table, bits).unwrap();
        let parsed = Container::from_bytes(&container.to_bytes()).unwrap();
        prop_assert_eq!(parsed, container);
    }
}
