//! 弧度到归一化角度（0°~180°）的换算。

use std::f64::consts::TAU;

const FULL_TURN_DEG: f64 = 360.0;
const HALF_TURN_DEG: f64 = 180.0;

/// 将弧度换算为 [0, 180] 区间内的角度。
///
/// 先换算为角度并以 floor-modulo 规范到 [0, 360)，再以 180° 为轴折回。
pub fn normalize_degrees(radians: f64) -> f64 {
    let mut degrees = radians.to_degrees();
    // 超大弧度换算后溢出为 inf，先在弧度域取模
    if !degrees.is_finite() {
        degrees = radians.rem_euclid(TAU).to_degrees();
    }
    // `+ 0.0` 把 -0.0 变成 0.0；rem_euclid 对极小负数可能舍入为 360.0，折回后恰为 0
    degrees = degrees.rem_euclid(FULL_TURN_DEG) + 0.0;
    if degrees > HALF_TURN_DEG {
        degrees = FULL_TURN_DEG - degrees;
    }
    degrees
}

pub fn normalize_group(radians: &[f64]) -> Vec<f64> {
    radians.iter().copied().map(normalize_degrees).collect()
}

/// 按下标对齐计算两组角度的绝对差。
pub fn abs_differences(first: &[f64], second: &[f64]) -> Vec<f64> {
    first
        .iter()
        .zip(second)
        .map(|(a, b)| (a - b).abs())
        .collect()
}

/// 差值严格大于 `limit` 的下标（从 0 开始）。
pub fn indices_over(differences: &[f64], limit: f64) -> Vec<usize> {
    differences
        .iter()
        .enumerate()
        .filter(|(_, diff)| **diff > limit)
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    #[test]
    fn known_angles_map_into_half_turn() {
        assert!(normalize_degrees(0.0).abs() < EPS);
        assert!((normalize_degrees(FRAC_PI_2) - 90.0).abs() < EPS);
        assert!((normalize_degrees(PI) - 180.0).abs() < EPS);
        assert!((normalize_degrees(1.5 * PI) - 90.0).abs() < EPS);
    }

    #[test]
    fn negative_input_uses_floor_modulo() {
        // -90° -> 270° -> 90°
        assert!((normalize_degrees(-FRAC_PI_2) - 90.0).abs() < EPS);
        // -30° -> 330° -> 30°
        assert!((normalize_degrees(-PI / 6.0) - 30.0).abs() < 1e-6);
    }

    #[test]
    fn result_stays_in_range() {
        let samples = [
            -1e12, -12345.678, -TAU, -3.0, -1e-300, -0.0, 0.0, 1e-300, 0.5, 2.0, 3.5, 6.0, 7.0,
            1000.0, 1e15, 1e307, -1e307, f64::MAX, f64::MIN,
        ];
        for r in samples {
            let d = normalize_degrees(r);
            assert!((0.0..=180.0).contains(&d), "{r} -> {d}");
        }
    }

    #[test]
    fn periodic_in_full_turn() {
        for r in [-2.5, -0.3, 0.0, 0.7, 1.2, 2.9] {
            let base = normalize_degrees(r);
            for k in [-3.0, -1.0, 1.0, 2.0, 5.0] {
                let shifted = normalize_degrees(r + TAU * k);
                assert!((base - shifted).abs() < 1e-6, "r={r} k={k}");
            }
        }
    }

    #[test]
    fn huge_magnitudes_do_not_overflow() {
        for r in [1e307, -1e307, f64::MAX] {
            assert!(r.to_degrees().is_infinite());
            let d = normalize_degrees(r);
            assert!(d.is_finite() && (0.0..=180.0).contains(&d), "{r} -> {d}");
        }
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(format!("{:.6}", normalize_degrees(-0.0)), "0.000000");
    }

    #[test]
    fn values_past_half_turn_fold_back() {
        // 200° -> 160°
        let r = 200.0_f64.to_radians();
        assert!((normalize_degrees(r) - 160.0).abs() < 1e-9);
    }

    #[test]
    fn differences_are_index_aligned() {
        let diffs = abs_differences(&[10.0, 20.0, 30.0], &[12.5, 20.0, 29.0]);
        assert_eq!(diffs, vec![2.5, 0.0, 1.0]);
    }

    #[test]
    fn indices_over_is_strict() {
        assert_eq!(indices_over(&[1.0, 1.5, 0.2, 3.0], 1.0), vec![1, 3]);
        assert!(indices_over(&[], 1.0).is_empty());
    }
}
