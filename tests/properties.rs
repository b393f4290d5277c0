use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use randkit::Casing;
use randkit::Error;
use randkit::RngSource;
use randkit::Sampler;

fn sampler(seed: u64) -> Sampler<RngSource<StdRng>> {
    Sampler::new(RngSource::new(StdRng::seed_from_u64(seed)))
}

proptest! {
    #[test]
    fn int_between_stays_in_normalized_range(seed: u64, a: i64, b: i64) {
        let value = sampler(seed).int_between(a, b);
        prop_assert!(a.min(b) <= value && value <= a.max(b));
    }

    #[test]
    fn fractional_bounds_round_inwards(seed: u64, a in -1e6f64..1e6, b in -1e6f64..1e6) {
        let (lo, hi) = (a.min(b).ceil(), a.max(b).floor());
        match sampler(seed).int_between_fractional(a, b) {
            Ok(value) => prop_assert!(lo <= value as f64 && value as f64 <= hi),
            Err(error) => {
                prop_assert!(lo > hi);
                prop_assert_eq!(error, Error::DegenerateRange { min: a, max: b });
            }
        }
    }

    #[test]
    fn sample_draws_distinct_positions(seed: u64, len in 1usize..40, pick in 0usize..40) {
        let pool: Vec<usize> = (0..len).collect();
        let result = sampler(seed).sample(&pool, Some(pick));
        if pick < len {
            let mut picked = result.unwrap();
            prop_assert_eq!(picked.len(), pick);
            picked.sort_unstable();
            picked.dedup();
            prop_assert_eq!(picked.len(), pick);
        } else {
            prop_assert_eq!(result, Err(Error::InvalidSampleSize { requested: pick, len }));
        }
        prop_assert_eq!(pool, (0..len).collect::<Vec<_>>());
    }

    #[test]
    fn letters_respect_swapped_bounds(seed: u64, a in b'a'..=b'z', b in b'a'..=b'z') {
        let (a, b) = (char::from(a), char::from(b));
        let value = sampler(seed).letter(Some(Casing::Upper), Some(b), Some(a));
        let lower = value.to_ascii_lowercase();
        prop_assert!(value.is_ascii_uppercase());
        prop_assert!(a.min(b) <= lower && lower <= a.max(b));
    }

    #[test]
    fn digit_patterns_stay_within_each_position(seed: u64, min in "[0-9]{1,12}", max in "[0-9]{1,12}") {
        let result = sampler(seed).arbitrary_string(&min, &max);
        if min.len() != max.len() {
            prop_assert!(
                matches!(result, Err(Error::LengthMismatch { .. })),
                "expected a length mismatch"
            );
        } else {
            let value = result.unwrap();
            prop_assert_eq!(value.len(), min.len());
            for ((low, high), got) in min.chars().zip(max.chars()).zip(value.chars()) {
                prop_assert!(low.min(high) <= got && got <= low.max(high));
            }
        }
    }

    #[test]
    fn equal_patterns_are_returned_verbatim(seed: u64, pattern in "[0-9A-Za-z]{1,16}") {
        prop_assert_eq!(sampler(seed).arbitrary_string(&pattern, &pattern).unwrap(), pattern);
    }
}

#[test]
fn documented_examples_hold_with_the_thread_source() {
    let sampler = Sampler::thread_rng();
    for _ in 0..500 {
        assert!([1, 2, 3].contains(&sampler.int_between(3, 1)));
        assert!([-3, -2, -1].contains(&sampler.int_between(-3, -1)));
        assert!(["11", "12", "13"].contains(&sampler.arbitrary_string("11", "13").unwrap().as_str()));
        assert!(['a', 'b', 'c'].contains(&sampler.letter(None, Some('c'), Some('a'))));
    }
    assert_eq!(sampler.from_slice(&[7]), Ok(&7));
}
