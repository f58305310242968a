/// Returns `true` when `n` is prime.
///
/// Trial division by odd candidates up to `sqrt(n)`; table capacities stay
/// small enough that a sieve buys nothing.
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }

    let mut d = 3;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }

    true
}

/// Returns the smallest prime greater than or equal to `n`.
pub fn next_prime(n: usize) -> usize {
    let mut candidate = n.max(2);

    while !is_prime(candidate) {
        candidate += 1;
    }

    candidate
}

#[cfg(test)]
mod tests {
    use super::{is_prime, next_prime};

    #[test]
    fn small_primes() {
        let primes: Vec<usize> = (0..50).filter(|&n| is_prime(n)).collect();
        assert_eq!(
            primes,
            [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
    }

    #[test]
    fn squares_of_primes_are_composite() {
        for p in [3usize, 5, 7, 11, 13, 101] {
            assert!(!is_prime(p * p));
        }
    }

    #[test]
    fn growth_sequence_from_eleven() {
        assert_eq!(next_prime(22), 23);
        assert_eq!(next_prime(46), 47);
        assert_eq!(next_prime(94), 97);
        assert_eq!(next_prime(194), 197);
        assert_eq!(next_prime(13), 13);
        assert_eq!(next_prime(0), 2);
    }
}
