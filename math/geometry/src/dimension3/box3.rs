use std::iter::FromIterator;

use crate::*;

pub type Box3<T = f32> = HyperAABB<Vec3<T>>;

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Box3<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Box3<T> {}

impl<T: Scalar> Default for Box3<T> {
  fn default() -> Self {
    Self::empty()
  }
}

impl<T: Scalar> Box3<T> {
  /// min at positive infinity and max at negative infinity, so any point expands it
  pub fn empty() -> Self {
    Self::new(
      Vec3::splat(T::infinity()),
      Vec3::splat(T::neg_infinity()),
    )
  }

  pub fn is_empty(&self) -> bool {
    (self.max.x < self.min.x) || (self.max.y < self.min.y) || (self.max.z < self.min.z)
  }

  /// the origin for an empty box
  pub fn center(&self) -> Vec3<T> {
    if self.is_empty() {
      return Vec3::zero();
    }
    (self.min + self.max) * T::half()
  }

  pub fn size(&self) -> Vec3<T> {
    if self.is_empty() {
      return Vec3::zero();
    }
    self.max - self.min
  }

  #[rustfmt::skip]
  pub fn max_corner(&self, direction: Vec3<T>) -> Vec3<T> {
    Vec3::new(
      if direction.x > T::zero() { self.max.x } else { self.min.x },
      if direction.y > T::zero() { self.max.y } else { self.min.y },
      if direction.z > T::zero() { self.max.z } else { self.min.z },
    )
  }

  pub fn longest_axis(&self) -> (Axis3, T) {
    let size = self.size();
    if size.x > size.y {
      if size.x > size.z {
        (Axis3::X, size.x)
      } else {
        (Axis3::Z, size.z)
      }
    } else if size.y > size.z {
      (Axis3::Y, size.y)
    } else {
      (Axis3::Z, size.z)
    }
  }

  /// the point in the box nearest to the given one
  pub fn closest_point(&self, point: Vec3<T>) -> Vec3<T> {
    point.clamp(self.min, self.max)
  }

  pub fn expand_by_point(&mut self, point: Vec3<T>) {
    self.min = self.min.min(point);
    self.max = self.max.max(point);
  }

  pub fn expand_by_box(&mut self, box3: Self) {
    self.min = self.min.min(box3.min);
    self.max = self.max.max(box3.max);
  }

  /// grow (or shrink for negative input) every face by the scalar
  pub fn expand_by_scalar(&mut self, scalar: T) -> &mut Self {
    self.min -= Vec3::splat(scalar);
    self.max += Vec3::splat(scalar);
    self
  }
}

impl<T: Scalar> ContainAble<T, Vec3<T>, 3> for Box3<T> {
  #[rustfmt::skip]
  fn contains(&self, point: &Vec3<T>) -> bool {
    point.x >= self.min.x && point.x <= self.max.x &&
    point.y >= self.min.y && point.y <= self.max.y &&
    point.z >= self.min.z && point.z <= self.max.z
  }
}

impl<T: Scalar> SpaceEntity<T, 3> for Box3<T> {
  type Matrix = Mat4<T>;

  /// refit to the eight transformed corners
  fn apply_matrix(&mut self, m: Self::Matrix) -> &mut Self {
    if self.is_empty() {
      return self;
    }
    let points = [
      Vec3::new(self.min.x, self.min.y, self.min.z), // 000
      Vec3::new(self.min.x, self.min.y, self.max.z), // 001
      Vec3::new(self.min.x, self.max.y, self.min.z), // 010
      Vec3::new(self.min.x, self.max.y, self.max.z), // 011
      Vec3::new(self.max.x, self.min.y, self.min.z), // 100
      Vec3::new(self.max.x, self.min.y, self.max.z), // 101
      Vec3::new(self.max.x, self.max.y, self.min.z), // 110
      Vec3::new(self.max.x, self.max.y, self.max.z), // 111
    ];
    *self = points.iter().map(|&p| m * p).collect();
    self
  }
}

impl<'a, T: Scalar> FromIterator<&'a Vec3<T>> for Box3<T> {
  fn from_iter<I: IntoIterator<Item = &'a Vec3<T>>>(items: I) -> Self {
    let mut bbox = Self::empty();
    items.into_iter().for_each(|p| bbox.expand_by_point(*p));
    bbox
  }
}

impl<T: Scalar> FromIterator<Vec3<T>> for Box3<T> {
  fn from_iter<I: IntoIterator<Item = Vec3<T>>>(items: I) -> Self {
    let mut bbox = Self::empty();
    items.into_iter().for_each(|p| bbox.expand_by_point(p));
    bbox
  }
}

impl<T: Scalar> FromIterator<Box3<T>> for Box3<T> {
  fn from_iter<I: IntoIterator<Item = Box3<T>>>(items: I) -> Self {
    let mut bbox = Self::empty();
    items.into_iter().for_each(|b| bbox.expand_by_box(b));
    bbox
  }
}

#[test]
fn fit_points() {
  let points = [
    Vec3::new(1., -2., 3.),
    Vec3::new(-1., 4., 0.),
    Vec3::new(0., 0., -5.),
  ];
  let box3: Box3 = points.iter().collect();
  assert_eq!(box3.min, Vec3::new(-1., -2., -5.));
  assert_eq!(box3.max, Vec3::new(1., 4., 3.));
  assert_eq!(box3.center(), Vec3::new(0., 1., -1.));
  assert_eq!(box3.size(), Vec3::new(2., 6., 8.));
  assert_eq!(box3.longest_axis(), (Axis3::Z, 8.));
  assert!(points.iter().all(|p| box3.contains(p)));
  assert!(!box3.contains(&Vec3::new(0., 5., 0.)));
}

#[test]
fn empty_box() {
  let box3: Box3 = std::iter::empty::<Vec3<f32>>().collect();
  assert!(box3.is_empty());
  assert_eq!(box3.center(), Vec3::zero());
  assert_eq!(box3.size(), Vec3::zero());
  assert!(!box3.contains(&Vec3::zero()));

  let mut expanded = box3;
  expanded.expand_by_scalar(10.);
  assert!(expanded.is_empty());

  let mut transformed = box3;
  transformed.apply_matrix(Mat4::translate((1., 2., 3.)));
  assert!(transformed.is_empty());
}

#[test]
fn expand_and_transform() {
  let mut box3 = Box3::new(Vec3::new(0., 0., 0.), Vec3::new(1., 2., 3.));
  box3.expand_by_scalar(1.);
  assert_eq!(box3.min, Vec3::new(-1., -1., -1.));
  assert_eq!(box3.max, Vec3::new(2., 3., 4.));

  box3.expand_by_box(Box3::new(Vec3::splat(-2.), Vec3::splat(0.)));
  assert_eq!(box3.min, Vec3::new(-2., -2., -2.));

  let moved = Box3::new(Vec3::zero(), Vec3::one()).transform_by(Mat4::translate((1., 2., 3.)));
  assert_eq!(moved.min, Vec3::new(1., 2., 3.));
  assert_eq!(moved.max, Vec3::new(2., 3., 4.));

  let boxes = [moved, Box3::new(Vec3::splat(-1.), Vec3::zero())];
  let merged: Box3 = boxes.into_iter().collect();
  assert_eq!(merged.min, Vec3::splat(-1.));
  assert_eq!(merged.max, Vec3::new(2., 3., 4.));

  assert_eq!(
    merged.closest_point(Vec3::new(10., -10., 1.)),
    Vec3::new(2., -1., 1.)
  );
  assert_eq!(merged.max_corner(Vec3::new(1., -1., 1.)), Vec3::new(2., -1., 4.));
}
