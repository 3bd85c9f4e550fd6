/// component wise ops, vector by vector for add / sub, vector by scalar for mul / div
macro_rules! impl_vector_ops {
  ($VectorN:ident { $($field:ident),+ }) => {
    impl_vector_ops!(@vector $VectorN { $($field),+ }, Add, add, +);
    impl_vector_ops!(@vector $VectorN { $($field),+ }, Sub, sub, -);
    impl_vector_ops!(@scalar $VectorN { $($field),+ }, Mul, mul, *);
    impl_vector_ops!(@scalar $VectorN { $($field),+ }, Div, div, /);

    impl<T: Scalar> Neg for $VectorN<T> {
      type Output = Self;
      #[inline]
      fn neg(self) -> Self {
        Self { $($field: -self.$field),+ }
      }
    }
  };
  (@vector $VectorN:ident { $($field:ident),+ }, $Op:ident, $op:ident, $tk:tt) => {
    paste::paste! {
      impl<T: Scalar> $Op for $VectorN<T> {
        type Output = Self;
        #[inline]
        fn $op(self, rhs: Self) -> Self {
          Self { $($field: self.$field $tk rhs.$field),+ }
        }
      }
      impl<T: Scalar> [<$Op Assign>] for $VectorN<T> {
        #[inline]
        fn [<$op _assign>](&mut self, rhs: Self) {
          $(self.$field = self.$field $tk rhs.$field;)+
        }
      }
    }
  };
  (@scalar $VectorN:ident { $($field:ident),+ }, $Op:ident, $op:ident, $tk:tt) => {
    paste::paste! {
      impl<T: Scalar> $Op<T> for $VectorN<T> {
        type Output = Self;
        #[inline]
        fn $op(self, rhs: T) -> Self {
          Self { $($field: self.$field $tk rhs),+ }
        }
      }
      impl<T: Scalar> [<$Op Assign>]<T> for $VectorN<T> {
        #[inline]
        fn [<$op _assign>](&mut self, rhs: T) {
          $(self.$field = self.$field $tk rhs;)+
        }
      }
    }
  };
}

/// array and homogeneous tuple conversions
macro_rules! impl_vector_conversions {
  ($VectorN:ident { $($field:ident : $index:expr),+ }, $n:expr, $Tuple:ty) => {
    impl<T: Copy> From<[T; $n]> for $VectorN<T> {
      #[inline]
      fn from(v: [T; $n]) -> Self {
        Self { $($field: v[$index]),+ }
      }
    }

    impl<T> From<$VectorN<T>> for [T; $n] {
      #[inline]
      fn from(v: $VectorN<T>) -> Self {
        [$(v.$field),+]
      }
    }

    impl<T> From<$Tuple> for $VectorN<T> {
      #[inline]
      fn from(($($field),+): $Tuple) -> Self {
        Self { $($field),+ }
      }
    }

    impl<T> From<$VectorN<T>> for $Tuple {
      #[inline]
      fn from(v: $VectorN<T>) -> Self {
        ($(v.$field),+)
      }
    }
  };
}

mod dimension;
mod normalized;
mod vec3;
mod vec4;

pub use dimension::*;
pub use normalized::*;
pub use vec3::*;
pub use vec4::*;
