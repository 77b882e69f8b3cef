//! Tests for the Water hash engine

use crate::params::*;
use crate::primitives::{mum, permute, splitmix64, wow};
use crate::water::finish64;
use crate::{
    Flavor, MISTS, Mist, Opaque, Water, YOLKS, Yolk, hash, hash_iter, hash_range, hash_strided,
    hash64, hash64_iter, hash64_range, hash64_strided,
};

use proptest::prelude::*;

/// Deterministic pseudo-random corpus source
fn corpus_word(i: u64) -> u64 {
    splitmix64(i.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

#[test]
fn test_mum_folds_high_half() {
    assert_eq!(mum(0, 12345), 0);
    assert_eq!(mum(3, 5), 15);
    // 2^32 * 2^16 = 2^48: high half 2^16 subtracted from the product
    assert_eq!(mum(1 << 32, 1 << 16), (1u64 << 48) - (1 << 16));
}

#[test]
fn test_wow_mixes_both_operands() {
    assert_eq!(wow(0, 0), 0);
    assert_eq!(wow(1, 2), 2_748_779_070_082);
    assert_ne!(wow(1, 2), wow(2, 3));
    assert_eq!(wow(7, 9), wow(7, 9));
}

#[test]
fn test_basic_hash() {
    let data = [1i32, 2, 3, 4, 5, 6];

    // Hash should be deterministic
    assert_eq!(hash64(&data), hash64(&data));
    assert_eq!(hash(&data), hash(&data));

    // Slices, arrays and vecs of the same elements agree
    assert_eq!(hash64(&data), hash64(&data[..]));
    assert_eq!(hash64(&data), hash64(&data.to_vec()));
}

#[test]
fn test_absent_is_zero() {
    assert_eq!(hash64(&None::<&[i32]>), 0);
    assert_eq!(hash(&None::<&[i32]>), 0);
    assert_eq!(hash64(&None::<Vec<i64>>), 0);
    assert_eq!(hash64(&None::<&str>), 0);
    assert_eq!(hash(&None::<String>), 0);
    assert_eq!(Mist::new(7).hash64(&None::<&[u8]>), 0);
}

#[test]
fn test_empty_is_not_absent() {
    assert_ne!(hash64(&[0i32; 0]), 0);
    assert_ne!(hash64(&[0u8; 0]), 0);
    assert_ne!(hash64(&[0i64; 0]), 0);
    assert_ne!(hash(&[0i32; 0]), 0);
    assert_ne!(hash64(""), 0);
}

#[test]
fn test_empty_int_matches_closed_form() {
    let seed = mum(B1 ^ SEED_64, B4.wrapping_add(SEED_64));
    let closed_form = finish64(seed, B0) as i64;

    assert_eq!(hash64(&[0i32; 0]), closed_form);
    assert_eq!(closed_form, -1_410_060_107_982_134_235);
    assert_eq!(hash(&[0i32; 0]), 633_845_048);
}

/// Golden vectors for `[1, 2, ..., n]` as `i32`, covering every tail branch
/// with and without a preceding bulk group.
#[test]
fn test_remainder_branch_vectors() {
    let expected: [i64; 9] = [
        -1_410_060_107_982_134_235,
        1_490_396_820_786_384_452,
        -8_188_324_125_863_255_474,
        -3_723_111_803_077_530_070,
        6_481_187_506_558_573_641,
        -2_593_835_484_738_090_230,
        -8_479_603_249_256_127_545,
        -5_915_652_521_009_573_859,
        -2_465_664_588_762_369_921,
    ];

    for (n, want) in expected.iter().enumerate() {
        let data: Vec<i32> = (1..=n as i32).collect();
        assert_eq!(hash64(&data), *want, "hash64 of [1..={}]", n);
    }
}

#[test]
fn test_zero_runs_are_length_sensitive() {
    let expected: [i64; 9] = [
        -1_410_060_107_982_134_235,
        -1_477_038_864_962_415_088,
        7_780_997_111_794_081_813,
        -8_187_593_491_225_893_038,
        7_285_615_843_192_636_323,
        427_507_090_538_952_652,
        -2_110_681_123_282_221_591,
        3_971_591_979_103_306_900,
        3_673_442_583_383_516_904,
    ];

    for (n, want) in expected.iter().enumerate() {
        assert_eq!(hash64(&vec![0i32; n]), *want, "hash64 of {} zeros", n);
    }
    assert_ne!(hash(&[0i32]), hash(&[0i32, 0]));
}

#[test]
fn test_byte_vector_one_group_then_single_tail() {
    // Indices 0..3 form the bulk group, element 4 goes through the r=1 tail
    assert_eq!(hash64(&[1u8, 2, 3, 4, 5]), -2_593_835_484_738_090_230);
    assert_eq!(hash64(&[1i8, 2, 3, 4, 5]), -2_593_835_484_738_090_230);

    let wire = hex::decode("0102030405").unwrap();
    assert_eq!(hash64(&wire), -2_593_835_484_738_090_230);
    println!("bytes 01..05: {}", hex::encode(hash64(&wire).to_be_bytes()));
}

#[test]
fn test_byte_packing_in_three_element_tail() {
    // Bytes pack the middle tail element at 8 bits, ints at 32
    assert_eq!(hash64(&[1u8, 2, 3, 4, 5, 6, 7]), 4_915_527_022_861_708_782);
    assert_eq!(hash64(&[1i32, 2, 3, 4, 5, 6, 7]), -5_915_652_521_009_573_859);
}

#[test]
fn test_long_vector_uses_lanes() {
    assert_eq!(hash64(&[1i64, 2, 3, 4, 5]), 1_122_096_131_876_756_225);
    assert_eq!(hash64(&[1u64, 2, 3, 4, 5]), 1_122_096_131_876_756_225);
    assert_eq!(hash64(&[0i64; 0]), -6_351_619_517_710_265_032);

    // The 32-bit path folds each long and runs the bulk core instead
    assert_eq!(hash(&[1i64, 2, 3, 4, 5]), 1_920_019_260);
    assert_eq!(hash(&[1i32, 2, 3, 4, 5]), 1_920_019_260);
    assert_ne!(hash64(&[1i64, 2, 3, 4, 5]), hash64(&[1i32, 2, 3, 4, 5]));
}

#[test]
fn test_char_sequences() {
    assert_eq!(hash64("abc"), 4_858_508_445_369_157_708);
    assert_eq!(hash64("abc"), hash64(&['a', 'b', 'c']));
    assert_eq!(hash64("abc"), hash64(&String::from("abc")));
    assert_ne!(hash64("abc"), hash64("acb"));
    // chars, not bytes
    assert_eq!(hash("日本"), hash(&['日', '本']));
    // one element above U+FFFF, not a surrogate pair
    assert_eq!(hash64("a\u{1F600}"), hash64(&['a', '\u{1F600}']));
    assert_ne!(hash64("\u{1F600}"), hash64(&[0xD83Du16, 0xDE00]));
}

#[test]
fn test_32_and_64_bit_are_independent() {
    let mut truncations = 0;
    for i in 0..10_000u64 {
        let len = (corpus_word(i) % 9) as usize;
        let data: Vec<i64> = (0..len as u64)
            .map(|j| corpus_word(i * 16 + j) as i64)
            .collect();
        if hash64(&data) as i32 == hash(&data) {
            truncations += 1;
        }
    }
    assert!(
        truncations < 100,
        "{} of 10000 32-bit hashes were truncations of the 64-bit hash",
        truncations
    );
}

#[test]
fn test_floats_hash_raw_bits() {
    assert_ne!(hash64(&[0.0f64]), hash64(&[-0.0f64]));
    assert_ne!(hash(&[0.0f32]), hash(&[-0.0f32]));
    assert_eq!(hash64(&[f64::NAN, 1.5]), hash64(&[f64::NAN, 1.5]));
    assert_eq!(hash64(&[1.5f32]), hash64(&[1.5f32.to_bits() as i32]));
    assert_eq!(hash64(&[2.5f64]), hash64(&[2.5f64.to_bits()]));
}

#[test]
fn test_bools_use_sentinels() {
    assert_ne!(hash64(&[true]), hash64(&[false]));
    assert_ne!(hash64(&[false]), hash64(&[0u8]));
    assert_ne!(hash64(&[true, false]), hash64(&[false, true]));
}

#[test]
fn test_nested_sequences() {
    let a: [&[i32]; 2] = [&[1, 2], &[3]];
    let b: [&[i32]; 2] = [&[1], &[2, 3]];
    assert_ne!(hash64(&a), hash64(&b));

    // Nested vecs and nested slices agree
    let nested = vec![vec![1i32, 2], vec![3]];
    assert_eq!(hash64(&nested), hash64(&a));

    // Elements are reduced to their 32-bit hash, then hashed as i32s
    assert_eq!(hash64(&a), hash64(&[hash(&[1i32, 2]), hash(&[3i32])]));

    // An absent element is -1, distinct from an empty element
    let with_none: [Option<&[i32]>; 2] = [None, Some(&[3])];
    let with_empty: [Option<&[i32]>; 2] = [Some(&[]), Some(&[3])];
    assert_ne!(hash64(&with_none), hash64(&with_empty));
    assert_eq!(hash64(&with_none), hash64(&[-1i32, hash(&[3i32])]));
}

#[test]
fn test_string_collections() {
    let words = vec![String::from("alpha"), String::from("beta"), String::from("gamma")];
    let refs = ["alpha", "beta", "gamma"];

    assert_eq!(hash64(&words), hash64(&refs));
    assert_eq!(hash64_iter(&words), hash64(&words));
    assert_eq!(hash_iter(&words), hash(&words));

    let set: std::collections::BTreeSet<&str> = refs.iter().copied().collect();
    assert_eq!(hash64_iter(&set), hash64(&refs));

    let deque: std::collections::VecDeque<String> = words.iter().rev().cloned().collect();
    assert_ne!(hash64_iter(&deque), hash64(&words));
}

#[test]
fn test_ranges_match_subslices() {
    let data: Vec<i32> = (0..20).collect();

    assert_eq!(hash64_range(&data, 2, 9), hash64(&data[2..9]));
    assert_eq!(hash_range(&data, 0, 20), hash(&data));
    // end is clamped to the length
    assert_eq!(hash64_range(&data, 15, 100), hash64(&data[15..]));

    assert_eq!(
        hash64_strided(&data, 1, 11, 3),
        hash64(&[data[1], data[4], data[7], data[10]])
    );
    assert_eq!(hash_strided(&data, 0, 20, 1), hash(&data));

    let longs: Vec<i64> = (0..10).map(|i| i * 1_000_000_007).collect();
    assert_eq!(
        hash64_strided(&longs, 0, 10, 2),
        hash64(&[longs[0], longs[2], longs[4], longs[6], longs[8]])
    );
}

#[test]
fn test_string_ranges_index_chars() {
    let text = "hello world";
    assert_eq!(hash_range(text, 6, 11), hash("world"));
    assert_eq!(hash64_range(text, 0, 5), hash64("hello"));
    assert_eq!(hash64_strided(text, 0, 11, 2), hash64("hlowrd"));
    assert_eq!(hash64_range("añb", 1, 3), hash64("ñb"));
}

#[test]
fn test_malformed_ranges_return_zero() {
    let data = [1i32, 2, 3, 4];
    assert_eq!(hash64_range(&data, 3, 3), 0);
    assert_eq!(hash64_range(&data, 3, 1), 0);
    assert_eq!(hash64_range(&data, 4, 10), 0);
    assert_eq!(hash_strided(&data, 0, 4, 0), 0);
    assert_eq!(hash_range("abc", 2, 2), 0);
    assert_eq!(Mist::new(1).hash64_range(&data, 2, 1), 0);
}

#[test]
fn test_salted_functors_differ() {
    let x = [1i32, 2, 3, 4, 5];

    assert_ne!(Yolk::new("alpha").hash64(&x), Yolk::new("beta").hash64(&x));
    assert_ne!(Mist::new("alpha").hash64(&x), Mist::new("beta").hash64(&x));
    assert_ne!(Mist::new("alpha").hash64(&x), Yolk::new("alpha").hash64(&x));
    assert_ne!(Mist::new("alpha").hash64(&x), hash64(&x));

    // Same label, same function
    assert_eq!(Mist::new("alpha").hash64(&x), Mist::new("alpha").hash64(&x));
    assert_eq!(Yolk::new("alpha").hash(&x), Yolk::new("alpha").hash(&x));
}

#[test]
fn test_seed_sources() {
    assert_eq!(Yolk::new(42), Yolk::new(42i64));
    assert_eq!(Yolk::new(42u64), Yolk::from_seed(42));
    assert_eq!(Mist::new(-1), Mist::from_seed(u64::MAX));
    assert_eq!(Mist::new("alpha").seed(), hash64("alpha") as u64);
    assert_eq!(Mist::new(&String::from("alpha")), Mist::new("alpha"));
}

#[test]
fn test_randomize_derives_without_mutating() {
    let mist = Mist::new("gamma");
    let before = mist.hash64("payload");

    let derived = mist.randomize();
    assert_ne!(derived, mist);
    assert_ne!(derived.hash64("payload"), before);
    assert_eq!(mist.hash64("payload"), before);

    // Derivation is itself deterministic
    assert_eq!(mist.randomize(), Mist::new("gamma").randomize());
    assert_eq!(Yolk::new(9).randomize(), Yolk::new(9).randomize());
}

#[test]
fn test_predefined_tables() {
    assert_eq!(YOLKS.len(), PREDEFINED_COUNT);
    assert_eq!(MISTS.len(), PREDEFINED_COUNT);

    for (k, label) in PREDEFINED_LABELS.iter().enumerate() {
        assert_eq!(Yolk::predefined(k), Some(Yolk::new(*label)));
        assert_eq!(Mist::predefined(k), Some(Mist::new(*label)));
    }
    assert_eq!(Mist::predefined(PREDEFINED_COUNT), None);
    assert_eq!(Yolk::predefined(usize::MAX), None);
}

#[test]
fn test_predefined_functors_are_uncorrelated() {
    let corpus: Vec<Vec<u8>> = (0..1000u64)
        .map(|i| {
            let len = 1 + (i % 17) as usize;
            let mut bytes: Vec<u8> = (0..len)
                .map(|j| corpus_word(i * 32 + j as u64) as u8)
                .collect();
            // make every entry distinct
            bytes.extend_from_slice(&i.to_le_bytes());
            bytes
        })
        .collect();

    for (first, second) in [(MISTS[0], MISTS[1]), (MISTS[2], MISTS[23])] {
        let disagreements = corpus
            .iter()
            .filter(|bytes| first.hash64(*bytes) != second.hash64(*bytes))
            .count();
        assert!(disagreements >= 990, "only {} of 1000 differ", disagreements);
    }

    let disagreements = corpus
        .iter()
        .filter(|bytes| YOLKS[0].hash(*bytes) != YOLKS[1].hash(*bytes))
        .count();
    assert!(disagreements >= 990, "only {} of 1000 differ", disagreements);
}

#[test]
fn test_functors_share_across_threads() {
    let mist = Mist::predefined(3).unwrap();
    let expected = mist.hash64(&[10i64, 20, 30]);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(mist.hash64(&[10i64, 20, 30]), expected);
                }
            });
        }
    });
}

#[test]
fn test_opaque_fallback() {
    #[derive(Hash)]
    struct Point {
        x: i32,
        y: i32,
    }

    let a = Point { x: 1, y: 2 };
    let b = Point { x: 2, y: 1 };

    assert_eq!(hash64(&Opaque(&a)), hash64(&Opaque(&a)));
    assert_ne!(
        hash64(&[Opaque(&a), Opaque(&b)]),
        hash64(&[Opaque(&b), Opaque(&a)])
    );
    assert_ne!(Mist::new(1).hash64(&Opaque(&a)), Mist::new(2).hash64(&Opaque(&a)));
}

#[test]
fn test_avalanche_effect() {
    // Flipping one input bit should change roughly half the output bits
    let mut total = 0u32;
    let rounds = 64u32;
    for bit in 0..rounds {
        let base = [0x1234_5678i32, 0x0BAD_F00D, 0x7777_0000, 42, 9];
        let mut flipped = base;
        flipped[(bit % 5) as usize] ^= 1 << (bit % 31);
        total += (hash64(&base) ^ hash64(&flipped)).count_ones();
    }
    let average = total / rounds;
    assert!(
        (20..=44).contains(&average),
        "Avalanche effect: {} bits differ on average (expected ~32)",
        average
    );
}

#[test]
fn test_permute_and_salts_are_stable() {
    assert_eq!(permute(0), 0);
    assert_ne!(permute(1), permute(2));
    assert_eq!(Water.hash64(&[5i32]), hash64(&[5i32]));
}

proptest! {
    #[test]
    fn appending_changes_the_hash(
        data in proptest::collection::vec(any::<i32>(), 0..=32),
        extra in any::<i32>()
    ) {
        let mut longer = data.clone();
        longer.push(extra);
        prop_assert_ne!(hash64(&data), hash64(&longer));
    }

    #[test]
    fn appending_changes_the_long_hash(
        data in proptest::collection::vec(any::<i64>(), 0..=32),
        extra in any::<i64>()
    ) {
        let mut longer = data.clone();
        longer.push(extra);
        prop_assert_ne!(hash64(&data), hash64(&longer));
    }

    #[test]
    fn hashing_is_deterministic(
        data in proptest::collection::vec(any::<u16>(), 0..=64),
        seed in any::<u64>()
    ) {
        let mist = Mist::new(seed);
        prop_assert_eq!(mist.hash64(&data), Mist::new(seed).hash64(&data));
        prop_assert_eq!(hash(&data), hash(&data));
    }

    #[test]
    fn ranges_agree_with_subslices(
        data in proptest::collection::vec(any::<i16>(), 1..=48),
        a in any::<usize>(),
        b in any::<usize>(),
        step in 1usize..=5
    ) {
        let start = a % data.len();
        let end = start + 1 + b % (data.len() - start);
        let picked: Vec<i16> = data[start..end].iter().step_by(step).copied().collect();
        prop_assert_eq!(hash64_strided(&data, start, end, step), hash64(&picked));
        prop_assert_eq!(hash_range(&data, start, end), hash(&data[start..end]));
    }
}
