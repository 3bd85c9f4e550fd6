use crate::Scalar;

pub trait SquareMatrix<T: Scalar>: Sized {
  #[must_use]
  fn identity() -> Self;

  #[must_use]
  fn transpose(&self) -> Self;

  /// the largest length of the basis vectors of the linear part, in other words
  /// the largest scale one axis will get after transform
  fn max_scale(&self) -> T;
}
