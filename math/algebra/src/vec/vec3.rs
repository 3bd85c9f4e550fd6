use std::fmt;
use std::fmt::Debug;
use std::ops::*;

use crate::*;

#[repr(C)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq, Facet)]
pub struct Vec3<T> {
  pub x: T,
  pub y: T,
  pub z: T,
}

impl<T> Vec3<T> {
  #[inline]
  pub const fn new(x: T, y: T, z: T) -> Self {
    Self { x, y, z }
  }
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vec3<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vec3<T> {}

impl<T: Scalar> RealVector<T> for Vec3<T> {}
impl<T: Scalar> VectorSpace<T> for Vec3<T> {}
impl<T: Scalar> InnerProductSpace<T> for Vec3<T> {
  #[inline]
  fn dot_impl(&self, b: Self) -> T {
    self.x * b.x + self.y * b.y + self.z * b.z
  }
}
impl<T: Scalar> Vector<T> for Vec3<T> {
  #[inline]
  fn create<F>(f: F) -> Self
  where
    F: Fn() -> T,
  {
    Self {
      x: f(),
      y: f(),
      z: f(),
    }
  }

  #[inline]
  fn map<F>(self, f: F) -> Self
  where
    F: Fn(T) -> T,
  {
    Self {
      x: f(self.x),
      y: f(self.y),
      z: f(self.z),
    }
  }

  #[inline]
  fn zip<F>(self, v2: Self, f: F) -> Self
  where
    F: Fn(T, T) -> T,
  {
    Self {
      x: f(self.x, v2.x),
      y: f(self.y, v2.y),
      z: f(self.z, v2.z),
    }
  }
}

impl<T: Scalar> Vec3<T> {
  #[inline]
  pub fn cross(&self, b: Self) -> Self {
    Self {
      x: self.y * b.z - self.z * b.y,
      y: self.z * b.x - self.x * b.z,
      z: self.x * b.y - self.y * b.x,
    }
  }

  #[inline]
  pub fn expand_with_one(&self) -> Vec4<T> {
    Vec4::new(self.x, self.y, self.z, T::one())
  }

  #[inline]
  pub fn is_finite(&self) -> bool {
    self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
  }
}

/// the vector is interpreted as a point, translation applies
impl<T: Scalar> SpaceEntity<T, 3> for Vec3<T> {
  type Matrix = Mat4<T>;
  #[inline(always)]
  fn apply_matrix(&mut self, m: Self::Matrix) -> &mut Self {
    *self = m * *self;
    self
  }
}

impl_vector_ops!(Vec3 { x, y, z });
impl_vector_conversions!(Vec3 { x: 0, y: 1, z: 2 }, 3, (T, T, T));

impl<T> fmt::Display for Vec3<T>
where
  T: Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "({:?}, {:?}, {:?})", self.x, self.y, self.z)
  }
}

#[test]
fn component_ops() {
  let a = Vec3::new(1., 2., 3.);
  let b = Vec3::new(4., 6., 8.);
  assert_eq!(a + b, Vec3::new(5., 8., 11.));
  assert_eq!(b - a, Vec3::new(3., 4., 5.));
  assert_eq!(a * 2., Vec3::new(2., 4., 6.));
  assert_eq!(b / 2., Vec3::new(2., 3., 4.));
  assert_eq!(-a, Vec3::new(-1., -2., -3.));

  let mut c = a;
  c += b;
  c -= a;
  c *= 0.5;
  assert_eq!(c, Vec3::new(2., 3., 4.));

  assert_eq!(a.min(Vec3::splat(2.)), Vec3::new(1., 2., 2.));
  assert_eq!(a.max(Vec3::splat(2.)), Vec3::new(2., 2., 3.));
  assert_eq!(b.clamp(Vec3::splat(5.), Vec3::splat(7.)), Vec3::new(5., 6., 7.));
}

#[test]
fn metric() {
  let a = Vec3::new(1., 2., 2.);
  assert_eq!(a.length2(), 9.);
  assert_eq!(a.length(), 3.);
  assert_eq!(a.distance(Vec3::new(1., 2., 7.)), 5.);
  assert_eq!(a.dot(Vec3::new(2., 0., 1.)), 4.);
  assert_eq!(
    Vec3::new(1., 0., 0.).cross(Vec3::new(0., 1., 0.)),
    Vec3::new(0., 0., 1.)
  );
}

#[test]
fn conversions() {
  let v: Vec3<f32> = [1., 2., 3.].into();
  let arr: [f32; 3] = v.into();
  assert_eq!(arr, [1., 2., 3.]);

  let v: Vec3<f32> = (4., 5., 6.).into();
  let tuple: (f32, f32, f32) = v.into();
  assert_eq!(tuple, (4., 5., 6.));

  assert_eq!(format!("{}", Vec3::new(1.0_f32, 0.5, -2.0)), "(1.0, 0.5, -2.0)");
}
