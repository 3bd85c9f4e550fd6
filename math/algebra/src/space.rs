use crate::Scalar;

/// Something that lives in a D dimensional space and can be moved around by
/// the space's homogeneous matrix.
pub trait SpaceEntity<T: Scalar, const D: usize> {
  type Matrix;

  fn apply_matrix(&mut self, mat: Self::Matrix) -> &mut Self;

  #[must_use]
  fn transform_by(&self, mat: Self::Matrix) -> Self
  where
    Self: Copy,
  {
    let mut entity = *self;
    entity.apply_matrix(mat);
    entity
  }
}
