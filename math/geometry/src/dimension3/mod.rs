mod bounding_impl;
mod box3;
mod intersection;
mod sphere;

pub use bounding_impl::*;
pub use box3::*;
pub use sphere::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis3 {
  X,
  Y,
  Z,
}
