// Math utilities and helper functions

/// Move `current` towards `target` by at most `max_delta`
pub fn approach(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

/// Sign of `value` with a dead zone: -1, 0 or 1
pub fn sign(value: f32, dead_zone: f32) -> f32 {
    if value > dead_zone {
        1.0
    } else if value < -dead_zone {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approach() {
        assert_eq!(approach(0.0, 10.0, 3.0), 3.0);
        assert_eq!(approach(0.0, -10.0, 3.0), -3.0);
        assert_eq!(approach(9.0, 10.0, 3.0), 10.0);
        assert_eq!(approach(5.0, 5.0, 1.0), 5.0);
    }

    #[test]
    fn test_sign_dead_zone() {
        assert_eq!(sign(0.5, 0.1), 1.0);
        assert_eq!(sign(-0.5, 0.1), -1.0);
        assert_eq!(sign(0.05, 0.1), 0.0);
    }
}
