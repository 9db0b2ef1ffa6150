use num_complex::Complex;

/// Number of iterations of `z = z² + z0` before `|z|` exceeds `bound`.
///
/// The magnitude is tested before each update, so a `z0` already outside the
/// bound returns 0. Orbits that stay within the bound for all `max` iterations
/// return `max` (in the set, as far as we can tell).
pub fn escape_time(z0: Complex<f64>, bound: f64, max: u32) -> u32 {
    let mut z = z0;
    for i in 0..max {
        if z.norm() > bound {
            return i;
        }
        z = z * z + z0;
    }
    max
}
