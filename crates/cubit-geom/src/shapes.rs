use crate::{Axis, Vec3};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box spanned by two arbitrary corners; the result is always ordered.
    #[inline]
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    #[inline]
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length when built through [`Ray::new`].
    pub direction: Vec3,
}

impl Ray {
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Slab test. Returns the distance along the ray to the entry point, or `0.0` when
    /// the origin is inside the box. Axes whose direction component is within `eps` of
    /// zero are treated as parallel.
    pub fn intersect_aabb(&self, b: &Aabb, eps: f32) -> Option<f32> {
        let mut t_near = 0.0f32;
        let mut t_far = f32::INFINITY;
        for axis in Axis::ALL {
            let o = self.origin.get(axis);
            let d = self.direction.get(axis);
            let lo = b.min.get(axis);
            let hi = b.max.get(axis);
            if d.abs() < eps {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / d;
            let mut t0 = (lo - o) * inv;
            let mut t1 = (hi - o) * inv;
            if t0 > t1 {
                core::mem::swap(&mut t0, &mut t1);
            }
            t_near = t_near.max(t0);
            t_far = t_far.min(t1);
            if t_near > t_far {
                return None;
            }
        }
        Some(t_near)
    }

    /// Point where the ray crosses `plane`, if it does so in front of the origin.
    pub fn intersect_plane(&self, plane: &Plane, eps: f32) -> Option<Vec3> {
        let denom = plane.normal.dot(self.direction);
        let dist = plane.distance(self.origin);
        if denom.abs() < eps {
            // Parallel: only a hit when the origin already lies on the plane.
            return (dist.abs() < eps).then_some(self.origin);
        }
        let t = -dist / denom;
        if t < 0.0 {
            return None;
        }
        Some(self.at(t))
    }
}

/// Plane `normal . p + d = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub d: f32,
}

impl Plane {
    #[inline]
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let normal = normal.normalized();
        Self {
            normal,
            d: -normal.dot(point),
        }
    }

    /// Signed distance of `p` from the plane.
    #[inline]
    pub fn distance(&self, p: Vec3) -> f32 {
        self.normal.dot(p) + self.d
    }
}
