//! Rounding that matches the dashboard: ties go toward positive infinity.

/// Nearest integer with ties toward `+∞`, computed from the exact fractional
/// part so values just below a tie are not pushed over it.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to the nearest integer, ties toward `+∞` (so `-2.5` becomes `-2`).
///
/// Non-finite input collapses to zero; callers clamp before rounding so this
/// only guards against a misconfigured constant.
pub fn round_days(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    round_half_up(value) as i64
}

/// Round to `decimals` places with the same tie rule as [`round_days`].
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(decimals);
    round_half_up(value * factor) / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_round_up() {
        assert_eq!(round_days(2.5), 3);
        assert_eq!(round_days(-2.5), -2);
        assert_eq!(round_days(-2.51), -3);
        assert_eq!(round_days(2445.5000000000005), 2446);
    }

    #[test]
    fn values_just_below_a_tie_round_down() {
        assert_eq!(round_days(0.49999999999999994), 0);
        assert_eq!(round_days(-0.5000000000000001), -1);
        assert_eq!(round_days(4_503_599_627_370_495.0), 4_503_599_627_370_495);
    }

    #[test]
    fn non_finite_collapses() {
        assert_eq!(round_days(f64::NAN), 0);
        assert_eq!(round_to(f64::INFINITY, 2), 0.0);
    }

    #[test]
    fn rounds_to_decimals() {
        assert_eq!(round_to(68.0, 1), 68.0);
        assert_eq!(round_to(159.67078189300412, 2), 159.67);
    }
}
