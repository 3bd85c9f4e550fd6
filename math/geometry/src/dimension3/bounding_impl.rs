use crate::*;

/// What sphere fitting needs from an axis aligned box implementation.
///
/// Sphere only consumes these, so any box type (or a test double) can be
/// plugged into [`Sphere::from_points_by`] and [`Sphere::bounding_box_by`].
pub trait AxisAlignedBounding<T: Scalar>: Sized {
  /// the smallest box enclosing all the points
  fn from_points<I: IntoIterator<Item = Vec3<T>>>(items: I) -> Self;

  fn from_point(point: Vec3<T>) -> Self {
    Self::from_points(std::iter::once(point))
  }

  fn center(&self) -> Vec3<T>;

  fn expand_by_scalar(&mut self, scalar: T) -> &mut Self;
}

impl<T: Scalar> AxisAlignedBounding<T> for Box3<T> {
  #[inline(always)]
  fn from_points<I: IntoIterator<Item = Vec3<T>>>(items: I) -> Self {
    items.into_iter().collect()
  }

  #[inline(always)]
  fn from_point(point: Vec3<T>) -> Self {
    Self::new(point, point)
  }

  #[inline(always)]
  fn center(&self) -> Vec3<T> {
    Box3::<T>::center(self)
  }

  #[inline(always)]
  fn expand_by_scalar(&mut self, scalar: T) -> &mut Self {
    Box3::<T>::expand_by_scalar(self, scalar)
  }
}

impl<T: Scalar> SpaceBounding<T, Box3<T>, 3> for Sphere<T> {
  #[inline(always)]
  fn to_bounding(&self) -> Box3<T> {
    self.bounding_box_by()
  }
}
