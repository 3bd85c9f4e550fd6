use crate::*;

/// axis aligned box described by its two extreme corners
#[repr(C)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Facet)]
pub struct HyperAABB<V> {
  pub min: V,
  pub max: V,
}

impl<V> HyperAABB<V> {
  pub const fn new(min: V, max: V) -> Self {
    Self { min, max }
  }
}
