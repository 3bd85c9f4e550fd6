//! Bounding volumes for 3d scene math: spheres and axis aligned boxes.

use volumetric_algebra::*;

/// implement the symmetric intersection by forwarding to the existing one
macro_rules! intersect_reverse {
  (<$T:ident> $self_item: ty, $result:ty, $param:ty, $target:ty) => {
    impl<$T: volumetric_algebra::Scalar> $crate::IntersectAble<$target, $result, $param>
      for $self_item
    {
      fn intersect(&self, other: &$target, p: &$param) -> $result {
        $crate::IntersectAble::<$self_item, $result, $param>::intersect(other, self, p)
      }
    }
  };
}

mod dimension3;
mod error;
mod hyper_aabb;
mod hyper_sphere;

pub use dimension3::*;
pub use error::*;
pub use hyper_aabb::*;
pub use hyper_sphere::*;

pub trait ContainAble<T: Scalar, Target, const D: usize> {
  fn contains(&self, target: &Target) -> bool;
}

pub trait IntersectAble<Target, Result, Parameter = ()> {
  fn intersect(&self, other: &Target, param: &Parameter) -> Result;
}

/// derive a bounding volume of another kind that encloses self
pub trait SpaceBounding<T: Scalar, Bound, const D: usize> {
  fn to_bounding(&self) -> Bound;
}

/// https://en.wikipedia.org/wiki/Lebesgue_measure
///
/// D is the dimension being measured, for a 3d solid 3 is volume and 2 is surface area
pub trait LebesgueMeasurable<T: Scalar, const D: usize> {
  fn measure(&self) -> T;
}

pub trait SolidEntity<T: Scalar, const D: usize> {
  type Center;
  fn centroid(&self) -> Self::Center;
}
