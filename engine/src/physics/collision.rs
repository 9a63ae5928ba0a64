//! Collision detection module
//!
//! Ray casts against static axis-aligned boxes. This is what the sandbox body
//! uses to answer ground probes; a real engine would answer them itself.
//!
//! # Ray-AABB Intersection
//!
//! The slab method is used for ray-AABB intersection, which finds the
//! intersection points by computing entry and exit times for each axis.
//!
//! # Example
//!
//! ```ignore
//! use gravity_cube_engine::physics::{Aabb, LayerMask, StaticCollider, ray_cast_colliders};
//! use glam::Vec3;
//!
//! let floor = StaticCollider::new(
//!     Aabb::new(Vec3::new(-10.0, -1.0, -10.0), Vec3::new(10.0, 0.0, 10.0)),
//!     LayerMask::GROUND,
//! );
//! let hit = ray_cast_colliders(&[floor], Vec3::new(0.0, 0.5, 0.0), Vec3::NEG_Y, 0.55, LayerMask::all());
//! assert!(hit.is_some());
//! ```

use glam::Vec3;

use super::{LayerMask, RayHit};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from its corners. Corners are reordered if swapped.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create a box from a center and half extents.
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Strict containment (points on the boundary are outside).
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpgt(self.min).all() && point.cmplt(self.max).all()
    }

    /// Penetration depth per axis when the boxes overlap with positive volume.
    pub fn overlap(&self, other: &Aabb) -> Option<Vec3> {
        let depth = Vec3::new(
            (self.max.x - other.min.x).min(other.max.x - self.min.x),
            (self.max.y - other.min.y).min(other.max.y - self.min.y),
            (self.max.z - other.min.z).min(other.max.z - self.min.z),
        );
        if depth.cmpgt(Vec3::ZERO).all() {
            Some(depth)
        } else {
            None
        }
    }
}

/// Immovable box collider tagged with a layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticCollider {
    pub bounds: Aabb,
    pub layer: LayerMask,
}

impl StaticCollider {
    pub fn new(bounds: Aabb, layer: LayerMask) -> Self {
        Self { bounds, layer }
    }
}

/// Performs ray-AABB (Axis-Aligned Bounding Box) intersection test using the slab method.
///
/// The slab method works by finding the intersection of the ray with each pair of
/// axis-aligned planes that make up the AABB. If the ray enters and exits the AABB
/// at valid times (t_enter < t_exit and t_exit > 0), there is an intersection.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (must be normalized)
/// * `aabb_min` - Minimum corner of the AABB
/// * `aabb_max` - Maximum corner of the AABB
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the intersection point (t >= 0)
/// * `None` - No intersection or intersection is behind the ray origin
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    // Near-zero components get a huge inverse so that slab never limits t
    let inv_dir = Vec3::new(
        if ray_dir.x.abs() > 1e-10 { 1.0 / ray_dir.x } else { f32::MAX * ray_dir.x.signum() },
        if ray_dir.y.abs() > 1e-10 { 1.0 / ray_dir.y } else { f32::MAX * ray_dir.y.signum() },
        if ray_dir.z.abs() > 1e-10 { 1.0 / ray_dir.z } else { f32::MAX * ray_dir.z.signum() },
    );

    let t1 = (aabb_min - ray_origin) * inv_dir;
    let t2 = (aabb_max - ray_origin) * inv_dir;

    let t_min = t1.min(t2).max_element();
    let t_max = t1.max(t2).min_element();

    if t_max >= t_min && t_max >= 0.0 {
        if t_min >= 0.0 {
            Some(t_min)
        } else {
            // Ray starts inside the AABB
            Some(t_max)
        }
    } else {
        None
    }
}

/// Computes the outward surface normal for a point on an AABB surface.
///
/// Picks the face whose axis has the largest normalized offset from the center.
pub fn aabb_surface_normal(point: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Vec3 {
    let center = (aabb_min + aabb_max) * 0.5;
    let half_extents = (aabb_max - aabb_min) * 0.5;
    let normalized = (point - center) / half_extents;
    let abs_normalized = normalized.abs();

    if abs_normalized.x >= abs_normalized.y && abs_normalized.x >= abs_normalized.z {
        Vec3::new(normalized.x.signum(), 0.0, 0.0)
    } else if abs_normalized.y >= abs_normalized.x && abs_normalized.y >= abs_normalized.z {
        Vec3::new(0.0, normalized.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, normalized.z.signum())
    }
}

/// Cast a bounded ray against a set of static colliders and return the nearest hit.
///
/// Colliders that do not share a layer with `mask`, or that already contain
/// the origin, are ignored.
pub fn ray_cast_colliders(
    colliders: &[StaticCollider],
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
    mask: LayerMask,
) -> Option<RayHit> {
    let mut nearest: Option<RayHit> = None;

    for collider in colliders {
        if !collider.layer.intersects(mask) || collider.bounds.contains(origin) {
            continue;
        }
        let Some(t) = ray_aabb_intersect(origin, direction, collider.bounds.min, collider.bounds.max)
        else {
            continue;
        };
        if t > max_distance {
            continue;
        }
        if nearest.is_some_and(|hit| hit.distance <= t) {
            continue;
        }

        let point = origin + direction * t;
        nearest = Some(RayHit {
            point,
            normal: aabb_surface_normal(point, collider.bounds.min, collider.bounds.max),
            distance: t,
        });
    }

    nearest
}
