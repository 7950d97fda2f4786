use rand::Rng;

use crate::primes::next_prime;

/// Smallest prime above `u32::MAX`.
///
/// Hash codes are 32 bits wide, so every distinct code is a distinct residue
/// modulo any prime at least this large.
pub(crate) const INITIAL_MODULUS: u64 = 4_294_967_311;

/// Folds a 64-bit hash into the 32-bit code fed to [`UniversalHash`].
#[inline(always)]
pub(crate) fn hash_code(hash: u64) -> u32 {
    (hash ^ (hash >> 32)) as u32
}

#[cold]
#[inline(never)]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

/// A member of the Carter-Wegman family `((a * code + b) mod p) mod N`.
///
/// For a prime `p` above every code, two distinct codes land in the same
/// bucket with probability at most `1 / N` over the random choice of
/// `(a, b)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct UniversalHash {
    a: u64,
    b: u64,
    p: u64,
}

impl UniversalHash {
    /// Draws a new function for a table with `buckets` buckets.
    pub(crate) fn new(buckets: usize, rng: &mut impl Rng) -> Self {
        let p = next_prime(INITIAL_MODULUS.max(buckets as u64 + 1))
            .unwrap_or_else(|| capacity_overflow());
        let mut family = UniversalHash { a: 1, b: 0, p };
        family.reroll(rng);
        family
    }

    /// Draws a fresh `a` in `[1, p - 1]` and `b` in `[0, p - 1]`.
    pub(crate) fn reroll(&mut self, rng: &mut impl Rng) {
        self.a = rng.random_range(1..self.p);
        self.b = rng.random_range(0..self.p);
    }

    /// Moves to the next prime modulus at or above twice the current one
    /// (and above `buckets`), then rerolls `a` and `b`.
    pub(crate) fn grow(&mut self, buckets: usize, rng: &mut impl Rng) {
        let doubled = self
            .p
            .checked_mul(2)
            .unwrap_or_else(|| capacity_overflow());
        self.p =
            next_prime(doubled.max(buckets as u64 + 1)).unwrap_or_else(|| capacity_overflow());
        self.reroll(rng);
    }

    /// Maps `code` to a bucket index in `[0, buckets)`.
    ///
    /// `a < 2^64` and `code < 2^32`, so the product cannot wrap in `u128`.
    #[inline]
    pub(crate) fn compress(&self, code: u32, buckets: usize) -> usize {
        debug_assert!(buckets > 0);
        let mixed = (self.a as u128 * code as u128 + self.b as u128) % self.p as u128;
        (mixed % buckets as u128) as usize
    }

    #[cfg(any(test, feature = "stats"))]
    pub(crate) fn modulus(&self) -> u64 {
        self.p
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::primes::is_prime;

    #[test]
    fn starts_above_u32_range() {
        let mut rng = SmallRng::seed_from_u64(1);
        let family = UniversalHash::new(101, &mut rng);
        assert_eq!(family.modulus(), INITIAL_MODULUS);
        assert!(family.modulus() > u32::MAX as u64);
        assert!((1..family.p).contains(&family.a));
        assert!(family.b < family.p);
    }

    #[test]
    fn modulus_exceeds_bucket_count() {
        let mut rng = SmallRng::seed_from_u64(2);
        let buckets = INITIAL_MODULUS as usize + 10;
        let family = UniversalHash::new(buckets, &mut rng);
        assert!(family.modulus() > buckets as u64);
        assert!(is_prime(family.modulus()));
    }

    #[test]
    fn grow_doubles_to_prime() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut family = UniversalHash::new(17, &mut rng);
        let before = family.modulus();
        family.grow(37, &mut rng);
        assert!(family.modulus() >= before * 2);
        assert!(is_prime(family.modulus()));
        assert!((1..family.p).contains(&family.a));
        assert!(family.b < family.p);
    }

    #[test]
    fn compress_stays_in_range() {
        let mut rng = SmallRng::seed_from_u64(4);
        for buckets in [2usize, 17, 101, 7919] {
            let family = UniversalHash::new(buckets, &mut rng);
            for code in [0u32, 1, 2, 12345, u32::MAX - 1, u32::MAX] {
                assert!(family.compress(code, buckets) < buckets);
            }
        }
    }

    #[test]
    fn compress_with_extreme_parameters() {
        let family = UniversalHash {
            a: INITIAL_MODULUS - 1,
            b: INITIAL_MODULUS - 1,
            p: INITIAL_MODULUS,
        };
        let expected = ((INITIAL_MODULUS as u128 - 1) * u32::MAX as u128
            + INITIAL_MODULUS as u128
            - 1)
            % INITIAL_MODULUS as u128
            % 101;
        assert_eq!(family.compress(u32::MAX, 101), expected as usize);
    }

    #[test]
    fn distinct_codes_rarely_collide() {
        let mut rng = SmallRng::seed_from_u64(5);
        let buckets = 17;
        let mut family = UniversalHash::new(buckets, &mut rng);

        let trials = 10_000;
        let mut collisions = 0;
        for _ in 0..trials {
            family.reroll(&mut rng);
            // Codes that are congruent mod `buckets` would always collide
            // under plain modular hashing.
            if family.compress(3, buckets) == family.compress(3 + 17 * 1000, buckets) {
                collisions += 1;
            }
        }

        // The family guarantees a rate of at most 1/17 (about 588 in 10k).
        assert!(collisions < 2 * trials / buckets, "{collisions} collisions");
    }

    #[test]
    fn hash_code_folds_high_bits() {
        assert_eq!(hash_code(0), 0);
        assert_eq!(hash_code(1 << 32), 1);
        assert_eq!(hash_code(u64::MAX), 0);
        assert_eq!(hash_code(0xDEAD_BEEF), 0xDEAD_BEEF);
    }
}
