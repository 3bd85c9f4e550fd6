use std::ops::{Add, Mul};

use crate::*;

/// column major, a is the first column and d holds the translation
#[repr(C)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq, Facet)]
#[rustfmt::skip]
pub struct Mat4<T> {
  pub a1: T, pub a2: T, pub a3: T, pub a4: T,
  pub b1: T, pub b2: T, pub b3: T, pub b4: T,
  pub c1: T, pub c2: T, pub c3: T, pub c4: T,
  pub d1: T, pub d2: T, pub d3: T, pub d4: T,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Mat4<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Mat4<T> {}

#[rustfmt::skip]
impl<T: Sized> Mat4<T> {
  pub const fn new(
    m11: T, m12: T, m13: T, m14: T,
    m21: T, m22: T, m23: T, m24: T,
    m31: T, m32: T, m33: T, m34: T,
    m41: T, m42: T, m43: T, m44: T,
  ) -> Self {
    Self {
      a1: m11, a2: m12, a3: m13, a4: m14,
      b1: m21, b2: m22, b3: m23, b4: m24,
      c1: m31, c2: m32, c3: m33, c4: m34,
      d1: m41, d2: m42, d3: m43, d4: m44,
    }
  }
}

impl<T: Scalar> SquareMatrix<T> for Mat4<T> {
  #[rustfmt::skip]
  fn identity() -> Self {
    let zero = T::zero();
    let one = T::one();
    Self::new(
      one,  zero, zero, zero,
      zero, one,  zero, zero,
      zero, zero, one,  zero,
      zero, zero, zero, one,
    )
  }

  #[rustfmt::skip]
  fn transpose(&self) -> Self {
    Self::new(
      self.a1, self.b1, self.c1, self.d1,
      self.a2, self.b2, self.c2, self.d2,
      self.a3, self.b3, self.c3, self.d3,
      self.a4, self.b4, self.c4, self.d4,
    )
  }

  fn max_scale(&self) -> T {
    let x = self.a1 * self.a1 + self.a2 * self.a2 + self.a3 * self.a3;
    let y = self.b1 * self.b1 + self.b2 * self.b2 + self.b3 * self.b3;
    let z = self.c1 * self.c1 + self.c2 * self.c2 + self.c3 * self.c3;
    x.max(y).max(z).sqrt()
  }
}

impl<T: Scalar> Mat4<T> {
  #[rustfmt::skip]
  pub fn translate(v: impl Into<Vec3<T>>) -> Self {
    let v = v.into();
    let zero = T::zero();
    let one = T::one();
    Self::new(
      one,  zero, zero, zero,
      zero, one,  zero, zero,
      zero, zero, one,  zero,
      v.x,  v.y,  v.z,  one,
    )
  }

  #[rustfmt::skip]
  pub fn scale(v: impl Into<Vec3<T>>) -> Self {
    let v = v.into();
    let zero = T::zero();
    let one = T::one();
    Self::new(
      v.x,  zero, zero, zero,
      zero, v.y,  zero, zero,
      zero, zero, v.z,  zero,
      zero, zero, zero, one,
    )
  }

  #[rustfmt::skip]
  pub fn rotate_x(theta: T) -> Self {
    let (s, c) = theta.sin_cos();
    let zero = T::zero();
    let one = T::one();
    Self::new(
      one,  zero, zero, zero,
      zero, c,    s,    zero,
      zero, -s,   c,    zero,
      zero, zero, zero, one,
    )
  }

  #[rustfmt::skip]
  pub fn rotate_y(theta: T) -> Self {
    let (s, c) = theta.sin_cos();
    let zero = T::zero();
    let one = T::one();
    Self::new(
      c,    zero, -s,   zero,
      zero, one,  zero, zero,
      s,    zero, c,    zero,
      zero, zero, zero, one,
    )
  }

  #[rustfmt::skip]
  pub fn rotate_z(theta: T) -> Self {
    let (s, c) = theta.sin_cos();
    let zero = T::zero();
    let one = T::one();
    Self::new(
      c,    s,    zero, zero,
      -s,   c,    zero, zero,
      zero, zero, one,  zero,
      zero, zero, zero, one,
    )
  }

  pub fn position(&self) -> Vec3<T> {
    Vec3::new(self.d1, self.d2, self.d3)
  }
}

impl<T> Mul<Vec4<T>> for Mat4<T>
where
  T: Copy + Add<Output = T> + Mul<Output = T>,
{
  type Output = Vec4<T>;

  fn mul(self, v: Vec4<T>) -> Vec4<T> {
    Vec4 {
      x: v.x * self.a1 + v.y * self.b1 + v.z * self.c1 + v.w * self.d1,
      y: v.x * self.a2 + v.y * self.b2 + v.z * self.c2 + v.w * self.d2,
      z: v.x * self.a3 + v.y * self.b3 + v.z * self.c3 + v.w * self.d3,
      w: v.x * self.a4 + v.y * self.b4 + v.z * self.c4 + v.w * self.d4,
    }
  }
}

/// the vector is treated as a point (w = 1), the projective row is ignored
impl<T: Scalar> Mul<Vec3<T>> for Mat4<T> {
  type Output = Vec3<T>;

  fn mul(self, v: Vec3<T>) -> Vec3<T> {
    (self * v.expand_with_one()).xyz()
  }
}

impl<T: Scalar> Mul for Mat4<T> {
  type Output = Self;

  #[rustfmt::skip]
  fn mul(self, b: Self) -> Self {
    let a = self;
    let c1 = a * Vec4::new(b.a1, b.a2, b.a3, b.a4);
    let c2 = a * Vec4::new(b.b1, b.b2, b.b3, b.b4);
    let c3 = a * Vec4::new(b.c1, b.c2, b.c3, b.c4);
    let c4 = a * Vec4::new(b.d1, b.d2, b.d3, b.d4);
    Self::new(
      c1.x, c1.y, c1.z, c1.w,
      c2.x, c2.y, c2.z, c2.w,
      c3.x, c3.y, c3.z, c3.w,
      c4.x, c4.y, c4.z, c4.w,
    )
  }
}

impl<T> From<Mat4<T>> for [T; 16] {
  #[rustfmt::skip]
  fn from(m: Mat4<T>) -> Self {
    [
      m.a1, m.a2, m.a3, m.a4,
      m.b1, m.b2, m.b3, m.b4,
      m.c1, m.c2, m.c3, m.c4,
      m.d1, m.d2, m.d3, m.d4,
    ]
  }
}

#[test]
fn mul() {
  let cgmath_mat1 = cgmath::Matrix4::<f32>::from_translation(cgmath::vec3(1., 2., 3.));
  let cgmath_mat2 = cgmath::Matrix4::<f32>::from_nonuniform_scale(3., -2., 0.5);
  let cgmath_point = cgmath::vec4(1., 2., 3., 1.);
  let cgmath_r = cgmath_mat1 * cgmath_mat2 * cgmath_point;
  let cgmath_r: [f32; 4] = *cgmath_r.as_ref();

  let math_mat1 = Mat4::<f32>::translate((1., 2., 3.));
  let math_mat2 = Mat4::<f32>::scale((3., -2., 0.5));
  let math_point = Vec4::new(1., 2., 3., 1.);
  let math_r = math_mat1 * math_mat2 * math_point;
  let math_r: [f32; 4] = math_r.into();

  assert_eq!(cgmath_r, math_r);

  let point = math_mat1 * math_mat2 * Vec3::new(1., 2., 3.);
  assert_eq!(point, Vec3::new(4., -2., 4.5));
}

#[test]
fn rotation() {
  use cgmath::Rad;

  let cases = [
    (
      cgmath::Matrix4::<f32>::from_angle_x(Rad(0.7)),
      Mat4::<f32>::rotate_x(0.7),
    ),
    (
      cgmath::Matrix4::<f32>::from_angle_y(Rad(0.7)),
      Mat4::<f32>::rotate_y(0.7),
    ),
    (
      cgmath::Matrix4::<f32>::from_angle_z(Rad(0.7)),
      Mat4::<f32>::rotate_z(0.7),
    ),
  ];

  for (cgmath_mat, math_mat) in cases {
    let cgmath_r = cgmath_mat * cgmath::vec4(1., -2., 3., 1.);
    let cgmath_r: [f32; 4] = *cgmath_r.as_ref();
    let math_r: [f32; 4] = (math_mat * Vec4::new(1., -2., 3., 1.)).into();
    for (a, b) in cgmath_r.iter().zip(math_r.iter()) {
      assert!((a - b).abs() < 1e-6);
    }
  }
}

#[test]
fn max_scale() {
  let m = Mat4::<f32>::translate((10., 20., 30.))
    * Mat4::rotate_z(0.3)
    * Mat4::scale((2., -5., 3.));
  assert!((m.max_scale() - 5.).abs() < 1e-5);

  assert_eq!(Mat4::<f32>::identity().max_scale(), 1.);
  assert_eq!(Mat4::<f32>::translate((1., 1., 1.)).max_scale(), 1.);

  let m = Mat4::<f32>::translate((1., 2., 3.));
  assert_eq!(m.transpose().transpose(), m);
  assert_eq!(m.position(), Vec3::new(1., 2., 3.));
}

#[test]
fn point_ignores_projective_row() {
  #[rustfmt::skip]
  let m = Mat4::<f32>::new(
    1., 0., 0., 1.,
    0., 1., 0., 0.,
    0., 0., 1., 0.,
    5., 0., 0., 1.,
  );
  assert_eq!((m * Vec4::new(1., 2., 3., 1.)).w, 2.);
  assert_eq!(m * Vec3::new(1., 2., 3.), Vec3::new(6., 2., 3.));
}
