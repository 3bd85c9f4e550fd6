use std::fmt;

use crate::*;

/// A ball described by its center and radius.
///
/// radius <= 0 means the sphere is empty, it encloses at most the center point.
/// Nothing here produces a negative radius, and the queries are only meaningful
/// for a non negative one.
#[repr(C)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Facet)]
pub struct HyperSphere<T, V> {
  pub center: V,
  pub radius: T,
}

impl<T, V> HyperSphere<T, V> {
  pub const fn new(center: V, radius: T) -> Self {
    Self { center, radius }
  }
}

impl<T, V> HyperSphere<T, V>
where
  T: Scalar,
  V: InnerProductSpace<T>,
{
  pub fn set(&mut self, center: V, radius: T) -> &mut Self {
    self.center = center;
    self.radius = radius;
    self
  }

  pub fn is_empty(&self) -> bool {
    self.radius <= T::zero()
  }

  /// Collapse to the center point.
  ///
  /// The center is kept, so a later [`Self::expand_by_point`] or [`Self::union`]
  /// grows a sphere that still encloses this center.
  pub fn make_empty(&mut self) -> &mut Self {
    self.radius = T::zero();
    self
  }

  /// signed distance to the surface, negative inside
  pub fn distance_to(&self, point: V) -> T {
    point.distance(self.center) - self.radius
  }

  pub fn translate(&mut self, offset: V) -> &mut Self {
    self.center = self.center + offset;
    self
  }

  /// Points inside are returned as is, points outside are projected along the
  /// center to point direction onto the surface.
  pub fn clamp_point(&self, point: V) -> V {
    let distance = self.center.distance(point);
    if distance <= self.radius {
      return point;
    }
    if distance == T::zero() {
      log::debug!("clamp against a sphere with negative radius, center returned");
      return self.center;
    }
    let direction: NormalizedVector<T, V> = (point - self.center).into_normalized();
    direction * self.radius + self.center
  }

  /// grow the sphere as little as possible so the point is enclosed
  pub fn expand_by_point(&mut self, point: V) -> &mut Self {
    let delta = point - self.center;
    let length2 = delta.length2();
    if length2 > self.radius * self.radius {
      let length = length2.sqrt();
      let missing_half = (length - self.radius) * T::half();
      self.center = self.center + delta * (missing_half / length);
      self.radius += missing_half;
    }
    self
  }

  /// grow the sphere as little as possible so the other sphere is enclosed
  pub fn union(&mut self, other: Self) -> &mut Self
  where
    V: PartialEq,
  {
    if self.center == other.center {
      self.radius = self.radius.max(other.radius);
      return self;
    }
    let direction: NormalizedVector<T, V> = (other.center - self.center).into_normalized();
    self.expand_by_point(direction * other.radius + other.center);
    self.expand_by_point(direction.reverse() * other.radius + other.center);
    self
  }
}

impl<T, V> fmt::Display for HyperSphere<T, V>
where
  T: fmt::Debug,
  V: fmt::Display,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{} radius: {:?}", self.center, self.radius)
  }
}
