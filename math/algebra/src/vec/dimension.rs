use std::ops::*;

use crate::*;

// this trait abstract for ops on vector
pub trait Vector<T: One + Zero + Copy>: Copy {
  fn create<F>(f: F) -> Self
  where
    F: Fn() -> T;

  /// Perform the given operation on each field in the vector, returning a new point
  /// constructed from the operations.
  #[must_use]
  fn map<F>(self, f: F) -> Self
  where
    F: Fn(T) -> T;

  /// Construct a new vector where each component is the result of
  /// applying the given operation to each pair of components of the
  /// given vectors.
  #[must_use]
  fn zip<F>(self, v2: Self, f: F) -> Self
  where
    F: Fn(T, T) -> T;

  #[inline]
  #[must_use]
  fn one() -> Self {
    Self::create(|| T::one())
  }
  #[inline]
  #[must_use]
  fn zero() -> Self {
    Self::create(|| T::zero())
  }
  #[inline]
  #[must_use]
  fn splat(v: T) -> Self {
    Self::create(|| v)
  }
}

/// the vector that in real number space
pub trait RealVector<T: Scalar>: Vector<T> {
  #[inline]
  fn min(self, rhs: Self) -> Self {
    self.zip(rhs, |a, b| a.min(b))
  }
  #[inline]
  fn max(self, rhs: Self) -> Self {
    self.zip(rhs, |a, b| a.max(b))
  }
  #[inline]
  fn clamp(self, min: Self, max: Self) -> Self {
    self.max(min).min(max)
  }
}

/// https://en.wikipedia.org/wiki/Vector_space
pub trait VectorSpace<T>:
  Add<Self, Output = Self>
  + Sub<Self, Output = Self>
  + Mul<T, Output = Self>
  + Div<T, Output = Self>
  + Sized
  + Copy
{
}

/// https://en.wikipedia.org/wiki/Inner_product
///
/// inner space define the length and angle based on vector space
pub trait InnerProductSpace<T: Scalar>: VectorSpace<T> {
  /// a zero length vector has no direction, it is returned as is
  #[inline]
  fn normalize(&self) -> Self {
    let mag_sq = self.length2();
    if mag_sq > T::zero() {
      let inv_sqrt = T::one() / mag_sq.sqrt();
      return *self * inv_sqrt;
    }
    *self
  }

  #[inline]
  fn length(&self) -> T {
    self.length2().sqrt()
  }

  #[inline]
  fn length2(&self) -> T {
    self.dot(*self)
  }

  #[inline]
  fn distance<Rhs: InnerData<Self>>(&self, b: Rhs) -> T {
    (*self - b.get_inner()).length()
  }

  #[inline]
  fn reverse(&self) -> Self {
    *self * -T::one()
  }

  #[inline]
  fn dot<Rhs: InnerData<Self>>(&self, b: Rhs) -> T {
    self.dot_impl(b.get_inner())
  }
  fn dot_impl(&self, b: Self) -> T;
}
