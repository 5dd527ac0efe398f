/// Round half-up (`floor(x + 0.5)`), matching browser `Math.round` semantics for negative halves.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Round half-up to `places` decimal places.
pub fn round_to_places(x: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    round_half_up(x * scale) / scale
}

/// Clamp that tolerates inverted bounds by treating `(lo, hi)` as an unordered pair.
pub(crate) fn clamp_unordered(v: f64, a: f64, b: f64) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    v.clamp(lo, hi)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
