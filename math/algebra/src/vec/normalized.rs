use std::{marker::PhantomData, ops::*};

use crate::*;

/// A direction. The wrapped vector is unit length, except when it was built
/// from a zero vector which has no direction to normalize to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct NormalizedVector<T, V> {
  pub value: V,
  phantom: PhantomData<T>,
}

pub trait IntoNormalizedVector<T, V> {
  #[must_use]
  fn into_normalized(self) -> NormalizedVector<T, V>;

  /// # Safety
  ///
  /// caller must make sure the vector is already unit length
  #[must_use]
  unsafe fn into_normalized_unchecked(self) -> NormalizedVector<T, V>;
}

impl<T: Scalar, V: InnerProductSpace<T>> IntoNormalizedVector<T, V> for V {
  #[inline(always)]
  fn into_normalized(self) -> NormalizedVector<T, V> {
    unsafe { NormalizedVector::wrap(self.normalize()) }
  }
  #[inline(always)]
  unsafe fn into_normalized_unchecked(self) -> NormalizedVector<T, V> {
    NormalizedVector::wrap(self)
  }
}

impl<T, V> NormalizedVector<T, V> {
  /// # Safety
  ///
  /// caller must make sure the vector is already unit length
  #[inline(always)]
  pub unsafe fn wrap(v: V) -> Self {
    Self {
      value: v,
      phantom: PhantomData,
    }
  }
}

impl<T: Scalar, V: InnerProductSpace<T>> NormalizedVector<T, V> {
  #[inline]
  #[must_use]
  pub fn reverse(&self) -> Self {
    unsafe { self.value.reverse().into_normalized_unchecked() }
  }
}

pub trait InnerData<T> {
  fn get_inner(self) -> T;
}

impl<T, V> InnerData<V> for NormalizedVector<T, V> {
  #[inline(always)]
  fn get_inner(self) -> V {
    self.value
  }
}
impl<V> InnerData<V> for V {
  #[inline(always)]
  fn get_inner(self) -> V {
    self
  }
}

// after add / sub / mul scalar, the vector may not be normalized
impl<T, V: VectorSpace<T>, Rhs: InnerData<V>> Add<Rhs> for NormalizedVector<T, V> {
  type Output = V;
  #[inline(always)]
  fn add(self, rhs: Rhs) -> Self::Output {
    self.value + rhs.get_inner()
  }
}
impl<T, V: VectorSpace<T>> Mul<T> for NormalizedVector<T, V> {
  type Output = V;
  #[inline(always)]
  fn mul(self, rhs: T) -> Self::Output {
    self.value * rhs
  }
}

impl<T, V> Deref for NormalizedVector<T, V> {
  type Target = V;
  #[inline(always)]
  fn deref(&self) -> &Self::Target {
    &self.value
  }
}

#[test]
fn normalize() {
  let a = Vec3::<f32>::new(3., 0., 4.).into_normalized();
  assert!((a.length() - 1.).abs() < 1e-6);
  assert!((*a - Vec3::new(0.6, 0., 0.8)).length() < 1e-6);
  assert!((*a.reverse() + Vec3::new(0.6, 0., 0.8)).length() < 1e-6);

  let scaled = a * 5.;
  assert!((scaled - Vec3::new(3., 0., 4.)).length() < 1e-5);

  let zero = Vec3::<f32>::zero().into_normalized();
  assert_eq!(*zero, Vec3::zero());
}
