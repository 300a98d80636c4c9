//! Sieve of Eratosthenes.

/// The primes in `[2, bound]`, stored as a dense flag table.
///
/// Membership is O(1); iteration yields primes in ascending order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeSet {
    bound: u32,
    flags: Vec<bool>,
    count: usize,
}

impl PrimeSet {
    /// Inclusive upper bound the set was sieved to.
    pub fn bound(&self) -> u32 {
        self.bound
    }

    /// Whether `v` is a prime no greater than [`bound`](Self::bound).
    pub fn contains(&self, v: u32) -> bool {
        self.flags.get(v as usize).copied().unwrap_or(false)
    }

    /// Number of primes in the set.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the set holds no primes (`bound < 2`).
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Primes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter(|&(_, &is_prime)| is_prime)
            .map(|(v, _)| v as u32)
    }
}

/// Return the primes `p` with `2 <= p <= n`.
///
/// Starts from every candidate in `[2, n]` marked prime, then for each `p`
/// with `p * p <= n` still marked, clears its multiples from `p * p`
/// upwards. Smaller multiples were already cleared by smaller factors.
/// For `n < 2` the set is empty.
///
/// # Examples
///
/// ```
/// use ulam_spiral::sieve;
///
/// let primes = sieve(30);
/// assert_eq!(
///     primes.iter().collect::<Vec<_>>(),
///     vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
/// );
/// assert!(sieve(1).is_empty());
/// ```
pub fn sieve(n: u32) -> PrimeSet {
    let len = n as usize + 1;
    let mut flags = vec![true; len];
    flags[0] = false;
    if len > 1 {
        flags[1] = false;
    }

    let mut p = 2usize;
    while p * p < len {
        if flags[p] {
            for multiple in (p * p..len).step_by(p) {
                flags[multiple] = false;
            }
        }
        p += 1;
    }

    let count = flags.iter().filter(|&&f| f).count();
    tracing::debug!(bound = n, primes = count, "sieve complete");
    PrimeSet {
        bound: n,
        flags,
        count,
    }
}
