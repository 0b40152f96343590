use container_workload::core::{matrix, memory, primes};
use proptest::prelude::*;

fn has_nontrivial_divisor(n: u64) -> bool {
    (2..n).any(|d| n % d == 0)
}

proptest! {
    #[test]
    fn primes_are_exactly_the_indivisible_numbers(limit in 2u64..600) {
        let found = primes::find_primes(limit);
        let expected: Vec<u64> = (2..limit).filter(|&n| !has_nontrivial_divisor(n)).collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn primes_are_ascending_and_in_range(limit in 0u64..5_000) {
        let found = primes::find_primes(limit);
        prop_assert!(found.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(found.iter().all(|&p| p >= 2 && p < limit));
    }

    #[test]
    fn matrix_sum_matches_closed_form(size in 1usize..120) {
        let n = size as u64;
        let triangle = n * (n - 1) / 2;
        prop_assert_eq!(matrix::matrix_task(size), triangle * triangle);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn allocation_count_matches_request(size_mb in 0usize..4, filler in prop::char::range('!', '~')) {
        let chunks = memory::allocate_chunks(size_mb, filler);
        prop_assert_eq!(chunks.len(), size_mb);
        for chunk in &chunks {
            prop_assert_eq!(chunk.len(), memory::CHUNK_SIZE);
            prop_assert!(chunk.chars().all(|c| c == filler));
        }
    }
}
