mod dimension;
mod mat4;

pub use dimension::*;
pub use mat4::*;
