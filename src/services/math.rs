//! Pure numeric helpers behind the bfhl operations.

/// First `n` Fibonacci numbers, starting `0, 1, 0+1, ...`.
///
/// Computed in f64: `n` can reach 1000 and the larger terms exceed every
/// fixed-width integer type. Terms below 2^53 remain exact.
pub fn fibonacci(n: u32) -> Vec<f64> {
    let mut sequence = Vec::with_capacity(n as usize);
    let (mut a, mut b) = (0.0_f64, 1.0_f64);
    for _ in 0..n {
        sequence.push(a);
        let next = a + b;
        a = b;
        b = next;
    }
    sequence
}

/// Trial-division primality test; anything below 2 is not prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n as u64;
    let mut i = 2_u64;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Euclidean greatest common divisor.
pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// Least common multiple; `None` on u64 overflow.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    (a / gcd(a, b)).checked_mul(b)
}

/// Left-to-right LCM reduction over a non-empty slice.
pub fn lcm_fold(values: &[u64]) -> Option<u64> {
    let (first, rest) = values.split_first()?;
    rest.iter().try_fold(*first, |acc, &n| lcm(acc, n))
}

/// Left-to-right GCD reduction over a non-empty slice.
pub fn gcd_fold(values: &[u64]) -> Option<u64> {
    let (first, rest) = values.split_first()?;
    Some(rest.iter().fold(*first, |acc, &n| gcd(acc, n)))
}
