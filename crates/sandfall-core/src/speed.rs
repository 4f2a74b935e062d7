//! Mapping from a speed control to steps per frame

/// Highest value of the speed control
pub const MAX_SPEED_CONTROL: u8 = 100;

/// Speed control used when nothing else is configured
pub const DEFAULT_SPEED_CONTROL: u8 = 50;

/// Number of `step_once` calls to run between two redraws.
///
/// The control is exponential: 0 gives 10^3 steps, 100 gives 10^6.
/// Values above [`MAX_SPEED_CONTROL`] are clamped.
pub fn steps_per_frame(control: u8) -> u64 {
    let control = control.min(MAX_SPEED_CONTROL);
    let exponent = 3.0 + 0.03 * f64::from(control);
    10f64.powf(exponent) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(steps_per_frame(0), 1_000);
        assert_eq!(steps_per_frame(100), 1_000_000);
    }

    #[test]
    fn test_default_speed() {
        let steps = steps_per_frame(DEFAULT_SPEED_CONTROL);
        assert!((31_600..=31_700).contains(&steps), "{steps}");
    }

    #[test]
    fn test_monotonic() {
        let mut last = 0;
        for control in 0..=MAX_SPEED_CONTROL {
            let steps = steps_per_frame(control);
            assert!(steps >= last);
            last = steps;
        }
    }

    #[test]
    fn test_clamped_above_max() {
        assert_eq!(steps_per_frame(255), steps_per_frame(MAX_SPEED_CONTROL));
    }
}
