//! Prime helpers for table sizing.

/// Modulus used when no prime lies below the capacity
pub const FALLBACK_MODULUS: usize = 3;

/// Trial division up to `sqrt(n)`
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }

    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Largest prime strictly below `capacity`, scanning down to 2.
/// Falls back to 3 when there is none (capacity <= 2), so the result is
/// not guaranteed to be below capacity for tiny tables.
pub fn secondary_modulus(capacity: usize) -> usize {
    (2..capacity)
        .rev()
        .find(|&n| is_prime(n))
        .unwrap_or(FALLBACK_MODULUS)
}

/// Smallest prime `>= n`
pub fn next_prime(n: usize) -> usize {
    let mut candidate = n.max(2);
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime() {
        let primes: Vec<usize> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_secondary_modulus() {
        assert_eq!(secondary_modulus(11), 7);
        assert_eq!(secondary_modulus(10), 7);
        assert_eq!(secondary_modulus(13), 11);
        assert_eq!(secondary_modulus(3), 2);
    }

    #[test]
    fn test_secondary_modulus_fallback() {
        // nothing in [2, capacity) for these
        assert_eq!(secondary_modulus(1), FALLBACK_MODULUS);
        assert_eq!(secondary_modulus(2), FALLBACK_MODULUS);
    }

    #[test]
    fn test_next_prime() {
        assert_eq!(next_prime(0), 2);
        assert_eq!(next_prime(10), 11);
        assert_eq!(next_prime(11), 11);
        assert_eq!(next_prime(24), 29);
    }
}
