//! Prime helpers used to size the bucket array and the universal hash
//! modulus.
//!
//! Bucket counts here stay small enough that trial division is fast, and the
//! modulus only changes on resize, so nothing fancier is needed.

/// Returns `true` if `n` is prime.
///
/// Trial division by every candidate up to and including `floor(sqrt(n))`.
/// The inclusive bound matters: squares of primes such as `4` and `9` have no
/// divisor strictly below their square root.
///
/// # Examples
///
/// ```rust
/// use chain_hash::primes::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(101));
/// assert!(!is_prime(1));
/// assert!(!is_prime(9));
/// ```
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }

    let mut divisor = 3;
    // `divisor <= n / divisor` is `divisor * divisor <= n` without overflow.
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }

    true
}

/// Returns the smallest prime greater than or equal to `n`.
///
/// Returns `None` if no such prime fits in a `u64`.
///
/// # Examples
///
/// ```rust
/// use chain_hash::primes::next_prime;
///
/// assert_eq!(next_prime(0), Some(2));
/// assert_eq!(next_prime(15), Some(17));
/// assert_eq!(next_prime(101), Some(101));
/// assert_eq!(next_prime(u64::MAX), None);
/// ```
pub fn next_prime(n: u64) -> Option<u64> {
    if n <= 2 {
        return Some(2);
    }

    let mut candidate = n | 1;
    loop {
        if is_prime(candidate) {
            return Some(candidate);
        }
        candidate = candidate.checked_add(2)?;
    }
}
