//! Bernstein polynomial evaluation.
//!
//! The Bernstein polynomials of degree n on [0, 1] are
//! B_{n,i}(x) = K(n,i) x^i (1-x)^(n-i),  i = 0, ..., n
//!
//! They form a partition of unity: Σᵢ B_{n,i}(x) = 1 for all x.

/// Binomial coefficient K(n, k) = n! / (k! (n-k)!) as a float.
///
/// Uses the multiplicative formula, which stays exact in f64 for every
/// degree a CST shape function realistically uses.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut c = 1.0;
    for j in 0..k {
        c = c * (n - j) as f64 / (j + 1) as f64;
    }
    c.round()
}

/// Evaluate the Bernstein polynomial B_{n,i}(x).
pub fn bernstein(n: usize, i: usize, x: f64) -> f64 {
    if i > n {
        return 0.0;
    }
    binomial(n, i) * x.powi(i as i32) * (1.0 - x).powi((n - i) as i32)
}

/// Evaluate all n+1 Bernstein polynomials of degree n at x.
///
/// Builds the powers of x and (1-x) once, so this is cheaper than calling
/// [`bernstein`] in a loop.
pub fn bernstein_basis(n: usize, x: f64) -> Vec<f64> {
    let one_minus = 1.0 - x;

    let mut x_pow = vec![1.0; n + 1];
    let mut xm_pow = vec![1.0; n + 1];
    for k in 1..=n {
        x_pow[k] = x_pow[k - 1] * x;
        xm_pow[k] = xm_pow[k - 1] * one_minus;
    }

    (0..=n)
        .map(|i| binomial(n, i) * x_pow[i] * xm_pow[n - i])
        .collect()
}

/// Evaluate a shape function S(x) = Σᵢ aᵢ B_{n,i}(x) with n = a.len() - 1.
///
/// Returns 0 for an empty coefficient slice.
pub fn bernstein_sum(coeffs: &[f64], x: f64) -> f64 {
    if coeffs.is_empty() {
        return 0.0;
    }
    let n = coeffs.len() - 1;
    bernstein_basis(n, x)
        .iter()
        .zip(coeffs.iter())
        .map(|(b, a)| b * a)
        .sum()
}
