//! Scalar, vector and matrix primitives for the volumetric geometry crates.

use std::fmt::{Debug, Display};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

mod mat;
mod space;
mod vec;

pub use mat::*;
pub use space::*;
pub use vec::*;

pub use facet::Facet;
pub use num_traits::{Float, One, Zero};
pub use serde::{Deserialize, Serialize};

/// The real number type all the algebra is generic over.
///
/// Only f32 and f64 are implemented, and the rest of the crates assume IEEE
/// semantics without any extra NaN or infinity checks.
pub trait Scalar:
  Float
  + Default
  + Debug
  + Display
  + Send
  + Sync
  + AddAssign
  + SubAssign
  + MulAssign
  + DivAssign
  + 'static
{
  fn half() -> Self;
  fn two() -> Self;
  fn pi() -> Self;

  /// for writing constants in generic code
  fn by_f32(v: f32) -> Self;
}

impl Scalar for f32 {
  #[inline(always)]
  fn half() -> Self {
    0.5
  }
  #[inline(always)]
  fn two() -> Self {
    2.0
  }
  #[inline(always)]
  fn pi() -> Self {
    std::f32::consts::PI
  }
  #[inline(always)]
  fn by_f32(v: f32) -> Self {
    v
  }
}

impl Scalar for f64 {
  #[inline(always)]
  fn half() -> Self {
    0.5
  }
  #[inline(always)]
  fn two() -> Self {
    2.0
  }
  #[inline(always)]
  fn pi() -> Self {
    std::f64::consts::PI
  }
  #[inline(always)]
  fn by_f32(v: f32) -> Self {
    v as f64
  }
}
