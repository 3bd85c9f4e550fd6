use std::fmt;
use std::fmt::Debug;
use std::ops::*;

use crate::*;

#[repr(C)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq, Facet)]
pub struct Vec4<T> {
  pub x: T,
  pub y: T,
  pub z: T,
  pub w: T,
}

impl<T> Vec4<T> {
  #[inline]
  pub const fn new(x: T, y: T, z: T, w: T) -> Self {
    Self { x, y, z, w }
  }
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vec4<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vec4<T> {}

impl<T: Scalar> RealVector<T> for Vec4<T> {}
impl<T: Scalar> VectorSpace<T> for Vec4<T> {}
impl<T: Scalar> InnerProductSpace<T> for Vec4<T> {
  #[inline]
  fn dot_impl(&self, b: Self) -> T {
    self.x * b.x + self.y * b.y + self.z * b.z + self.w * b.w
  }
}
impl<T: Scalar> Vector<T> for Vec4<T> {
  #[inline]
  fn create<F>(f: F) -> Self
  where
    F: Fn() -> T,
  {
    Self {
      x: f(),
      y: f(),
      z: f(),
      w: f(),
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
      w: f(self.w),
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
      w: f(self.w, v2.w),
    }
  }
}

impl<T: Copy> Vec4<T> {
  /// drop the w channel as is, without perspective divide
  #[inline]
  pub fn xyz(&self) -> Vec3<T> {
    Vec3::new(self.x, self.y, self.z)
  }
}

impl_vector_ops!(Vec4 { x, y, z, w });
impl_vector_conversions!(Vec4 { x: 0, y: 1, z: 2, w: 3 }, 4, (T, T, T, T));

impl<T> fmt::Display for Vec4<T>
where
  T: Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(
      f,
      "({:?}, {:?}, {:?}, {:?})",
      self.x, self.y, self.z, self.w
    )
  }
}
