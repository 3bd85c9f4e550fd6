use crate::*;

/// touching spheres intersect, as does a sphere nested in the other
impl<T: Scalar> IntersectAble<Sphere<T>, bool> for Sphere<T> {
  #[inline]
  fn intersect(&self, other: &Sphere<T>, _: &()) -> bool {
    let radius_sum = self.radius + other.radius;
    other.center.distance(self.center) <= radius_sum
  }
}

intersect_reverse!(<T> Box3<T>, bool, (), Sphere<T>);
impl<T: Scalar> IntersectAble<Box3<T>, bool> for Sphere<T> {
  #[inline]
  fn intersect(&self, box3: &Box3<T>, _: &()) -> bool {
    if box3.is_empty() {
      return false;
    }
    box3.closest_point(self.center).distance(self.center) <= self.radius
  }
}

#[test]
fn sphere_box() {
  let box3 = Box3::new(Vec3::new(0., 0., 0.), Vec3::new(2., 2., 2.));

  let touching = Sphere::new(Vec3::new(3., 1., 1.), 1.);
  assert!(touching.intersect(&box3, &()));
  assert!(box3.intersect(&touching, &()));

  let apart = Sphere::new(Vec3::new(3., 3., 3.), 1.);
  assert!(!apart.intersect(&box3, &()));
  assert!(!box3.intersect(&apart, &()));

  let inside = Sphere::new(Vec3::new(1., 1., 1.), 0.1);
  assert!(inside.intersect(&box3, &()));

  assert!(!inside.intersect(&Box3::empty(), &()));
}
