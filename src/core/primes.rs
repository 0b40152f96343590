//! CPU phase: prime enumeration by trial division.

/// Trial division by every integer in `2..=floor(sqrt(n))`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut divisor = 2u64;
    // `divisor <= n / divisor` is `divisor * divisor <= n` without overflow.
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// All primes `p` with `2 <= p < limit`, ascending.
pub fn find_primes(limit: u64) -> Vec<u64> {
    (2..limit).filter(|&n| is_prime(n)).collect()
}
