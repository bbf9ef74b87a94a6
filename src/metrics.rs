// ABOUTME: Derived fitness metric calculations for logged workout sets
// ABOUTME: Pure functions for estimated one-rep max and training volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Derived fitness metrics.
//!
//! Both functions are pure and deterministic; the store calls
//! [`estimate_one_rep_max`] at write time and the progress service calls
//! both again at read time rather than trusting stored values.

/// Epley-style estimated one-repetition maximum.
///
/// `weight * (1 + reps / 40)`, rounded to one decimal place. Returns 0 when
/// either weight or reps is zero (or weight is negative), so bodyweight-only
/// sets carry no 1RM estimate.
#[must_use]
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> f64 {
    if weight <= 0.0 || reps == 0 {
        return 0.0;
    }
    let raw = weight * (1.0 + f64::from(reps) / 40.0);
    (raw * 10.0).round() / 10.0
}

/// Training volume: weight × reps × sets.
///
/// Zero whenever any factor is zero.
#[must_use]
pub fn volume(weight: f64, reps: u32, sets: f64) -> f64 {
    if weight <= 0.0 || reps == 0 || sets <= 0.0 {
        return 0.0;
    }
    weight * f64::from(reps) * sets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_rep_max_matches_epley_formula() {
        // 80kg x 8 reps: 80 * (1 + 8/40) = 96.0
        assert!((estimate_one_rep_max(80.0, 8) - 96.0).abs() < f64::EPSILON);
        // 100kg x 5 reps: 100 * 1.125 = 112.5
        assert!((estimate_one_rep_max(100.0, 5) - 112.5).abs() < f64::EPSILON);
    }

    #[test]
    fn one_rep_max_rounds_to_one_decimal() {
        // 62.5 * (1 + 3/40) = 67.1875 -> 67.2
        assert!((estimate_one_rep_max(62.5, 3) - 67.2).abs() < f64::EPSILON);
    }

    #[test]
    fn one_rep_max_is_zero_for_bodyweight_or_zero_reps() {
        assert!(estimate_one_rep_max(0.0, 10).abs() < f64::EPSILON);
        assert!(estimate_one_rep_max(60.0, 0).abs() < f64::EPSILON);
        assert!(estimate_one_rep_max(-5.0, 10).abs() < f64::EPSILON);
    }

    #[test]
    fn volume_multiplies_all_factors() {
        assert!((volume(80.0, 8, 3.0) - 1920.0).abs() < f64::EPSILON);
    }

    #[test]
    fn volume_is_zero_when_any_factor_is_zero() {
        assert!(volume(0.0, 8, 3.0).abs() < f64::EPSILON);
        assert!(volume(80.0, 0, 3.0).abs() < f64::EPSILON);
        assert!(volume(80.0, 8, 0.0).abs() < f64::EPSILON);
    }
}
