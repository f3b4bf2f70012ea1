// tween/lerp.rs
//
// Linear interpolation primitives. No dependencies on Entity/Scene — just math.
//
// The blend factor is clamped to [0, 1]: t <= 0 returns the start, t >= 1
// returns the target. Both endpoints are returned verbatim — the affine
// blend `a + (b - a) * t` can miss `b` by an ulp at t = 1, and callers
// compare against the target exactly. A NaN blend factor (a zero-length
// path divides 0/0) also resolves to the target.

use glam::Vec3;

/// Linearly interpolate between two values, clamping `t` to [0, 1].
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    if t.is_nan() || t >= 1.0 {
        return b;
    }
    if t <= 0.0 {
        return a;
    }
    a + (b - a) * t
}

/// Linearly interpolate between two Vec3 values, clamping `t` to [0, 1].
#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    if t.is_nan() || t >= 1.0 {
        return b;
    }
    if t <= 0.0 {
        return a;
    }
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(lerp(0.1, 10.3, 0.0), 0.1);
        assert_eq!(lerp(0.1, 10.3, 1.0), 10.3);
        let a = Vec3::new(0.1, 0.2, 0.3);
        let b = Vec3::new(10.3, -7.7, 0.01);
        assert_eq!(lerp_vec3(a, b, 1.0), b);
        assert_eq!(lerp_vec3(a, b, 0.0), a);
    }

    #[test]
    fn midpoint() {
        let result = lerp(100.0, 200.0, 0.5);
        assert!((result - 150.0).abs() < 0.001);
        let v = lerp_vec3(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 0.5);
        assert!((v.x - 5.0).abs() < 0.001);
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(lerp(1.0, 2.0, -0.5), 1.0);
        assert_eq!(lerp(1.0, 2.0, 1.5), 2.0);
        assert_eq!(lerp(1.0, 2.0, f32::INFINITY), 2.0);
    }

    #[test]
    fn non_finite_factor_resolves_to_target() {
        // 0/0 from a zero-length path must not poison the output.
        assert_eq!(lerp(3.0, 3.0, f32::NAN), 3.0);
        let b = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(lerp_vec3(Vec3::ZERO, b, f32::NAN), b);
    }
}
