#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundingError {
  #[error("can not fit a bounding volume to an empty point set")]
  EmptyPointSet,
  #[error("fitted bounding volume is not finite, the input points contain infinity or nan")]
  NonFinite,
}
