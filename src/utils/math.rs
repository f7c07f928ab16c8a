/// Standard normal cumulative distribution function.
pub fn normal_probability(a: f64) -> f64 {
    0.5 * (1.0 + libm::erf(a / (2.0f64).sqrt()))
}

/// Arithmetic mean of a non-empty slice.
pub fn mean(values: &[f64]) -> f64 {
    let sum: f64 = values.iter().sum();
    sum / values.len() as f64
}

/// Median of an ascending-sorted slice: middle element when the length is
/// odd, mean of the two central elements when even.
pub fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Logistic transform `1 / (1 + exp(delta))`, stable for large `|delta|`.
pub fn logistic(delta: f64) -> f64 {
    if delta >= 0.0 {
        let e = (-delta).exp();
        e / (1.0 + e)
    } else {
        1.0 / (1.0 + delta.exp())
    }
}

/// `ln(1 + exp(delta))` without overflow for large positive `delta`.
pub fn softplus(delta: f64) -> f64 {
    delta.max(0.0) + (-delta.abs()).exp().ln_1p()
}
