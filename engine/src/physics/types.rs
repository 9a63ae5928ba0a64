//! Physics math types and helpers
//!
//! Re-exports the glam types used throughout the controller and adds the
//! handful of vector/rotation helpers the gravity model needs.
//!
//! # Conventions
//!
//! Right-handed, +Y is world up. A body's local axes are:
//! - forward = -Z
//! - right = +X
//! - up = +Y

pub use glam::{Mat3, Quat, Vec2, Vec3};

/// Local forward axis of every body (-Z).
pub const LOCAL_FORWARD: Vec3 = Vec3::NEG_Z;

/// Local right axis of every body (+X).
pub const LOCAL_RIGHT: Vec3 = Vec3::X;

/// Local up axis of every body (+Y).
pub const LOCAL_UP: Vec3 = Vec3::Y;

/// Squared length below which a direction is treated as degenerate.
pub const DEGENERATE_EPSILON_SQ: f32 = 1e-8;

/// Remove the component of `v` along `normal`.
///
/// `normal` must be unit length.
#[inline]
pub fn project_on_plane(v: Vec3, normal: Vec3) -> Vec3 {
    v - normal * v.dot(normal)
}

/// Normalize `v`, or return zero when it is too short to carry a direction.
#[inline]
pub fn normalize_or_degenerate(v: Vec3) -> Vec3 {
    if v.length_squared() < DEGENERATE_EPSILON_SQ {
        Vec3::ZERO
    } else {
        v.normalize()
    }
}

/// Build a rotation whose local forward (-Z) points along `forward` and whose
/// local up is as close to `up` as the orthonormal basis allows.
///
/// When `forward` and `up` are parallel an arbitrary perpendicular right axis
/// is chosen. A zero `forward` yields the identity.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let f = normalize_or_degenerate(forward);
    if f == Vec3::ZERO {
        return Quat::IDENTITY;
    }

    let mut right = f.cross(up);
    if right.length_squared() < DEGENERATE_EPSILON_SQ {
        right = f.any_orthonormal_vector();
    }
    let right = right.normalize();
    let up = right.cross(f);

    Quat::from_mat3(&Mat3::from_cols(right, up, -f)).normalize()
}

/// Rotate `from` toward `to` by at most `max_radians`.
///
/// Returns `to` exactly once it is within reach.
pub fn rotate_towards(from: Quat, to: Quat, max_radians: f32) -> Quat {
    let angle = from.angle_between(to);
    if angle <= max_radians || angle < 1e-6 {
        return to;
    }
    if max_radians <= 0.0 {
        return from;
    }
    from.slerp(to, max_radians / angle).normalize()
}

/// Frame-rate independent interpolation factor for exponential smoothing.
///
/// `rate` is in 1/seconds. Zero rate never moves, very large rates approach 1.
#[inline]
pub fn smoothing_factor(rate: f32, dt: f32) -> f32 {
    if rate <= 0.0 || dt <= 0.0 {
        return 0.0;
    }
    1.0 - (-rate * dt).exp()
}
