use crate::*;

fn sample_points() -> Vec<Vec3<f32>> {
  vec![
    Vec3::new(1., 2., 3.),
    Vec3::new(-4., 0.5, 2.),
    Vec3::new(3., -3., -1.),
    Vec3::new(0., 7., 0.25),
    Vec3::new(-2., -2., 5.),
  ]
}

fn approx(a: f32, b: f32) -> bool {
  (a - b).abs() < 1e-5
}

fn approx_vec(a: Vec3<f32>, b: Vec3<f32>) -> bool {
  a.distance(b) < 1e-5
}

#[test]
fn fitted_sphere_contains_all_points() {
  let points = sample_points();
  let sphere = Sphere::from_points(points.iter().copied());
  assert!(points.iter().all(|p| sphere.contains(p)));

  let box3: Box3 = points.iter().collect();
  assert_eq!(sphere.center, box3.center());

  // at least one point is on the surface
  assert!(points.iter().any(|p| sphere.distance_to(*p) == 0.));
}

#[test]
fn fitted_random_clouds_contain_all_points() {
  use rand::{rngs::StdRng, Rng, SeedableRng};

  let mut rng = StdRng::seed_from_u64(42);
  for _ in 0..500 {
    let count = rng.gen_range(1..64);
    let scale = rng.gen_range(0.01..1000.0_f32);
    let offset = Vec3::new(
      rng.gen_range(-100.0..100.),
      rng.gen_range(-100.0..100.),
      rng.gen_range(-100.0..100.),
    );
    let points: Vec<Vec3<f32>> = (0..count)
      .map(|_| {
        Vec3::new(
          rng.gen_range(-1.0..1.),
          rng.gen_range(-1.0..1.),
          rng.gen_range(-1.0..1.),
        ) * scale
          + offset
      })
      .collect();

    let sphere = Sphere::from_points(points.iter().copied());
    assert!(!sphere.radius.is_nan());
    assert!(points.iter().all(|p| sphere.contains(p)));

    let single = Sphere::from_points(points.iter().copied().take(1));
    assert_eq!(single, Sphere::new(points[0], 0.));
  }
}

#[test]
fn fitting_is_not_minimal() {
  // the minimal enclosing sphere is the unit sphere at origin, but the box
  // center of these points is (0, -0.5, 0)
  let points = [
    Vec3::new(-1., 0., 0.),
    Vec3::new(1., 0., 0.),
    Vec3::new(0., -1., 0.),
  ];
  let fitted = Sphere::from_points(points);
  assert_eq!(fitted.center, Vec3::new(0., -0.5, 0.));
  assert!(approx(fitted.radius, 1.25_f32.sqrt()));

  let centered = Sphere::from_points_and_center(points, Vec3::zero());
  assert_eq!(centered.radius, 1.);
  assert!(centered.radius < fitted.radius);
  assert!(points.iter().all(|p| centered.contains(p)));
}

#[test]
fn fitting_around_given_center() {
  let mut sphere = Sphere::new(Vec3::splat(100.), 100.);
  sphere.set_from_points_and_center(sample_points(), Vec3::new(1., 1., 1.));
  assert_eq!(sphere.center, Vec3::new(1., 1., 1.));
  assert!(sample_points().iter().all(|p| sphere.contains(p)));

  sphere.set_from_points_and_center(Vec::new(), Vec3::new(5., 5., 5.));
  assert_eq!(sphere.center, Vec3::new(5., 5., 5.));
  assert_eq!(sphere.radius, 0.);
  assert!(sphere.is_empty());
}

#[test]
fn empty_point_set() {
  let sphere = Sphere::<f32>::from_points(Vec::new());
  assert_eq!(sphere.radius, 0.);
  assert_eq!(sphere.center, Vec3::zero());
  assert!(sphere.is_empty());

  let mut reused = Sphere::new(Vec3::new(1., 2., 3.), 4.);
  reused.set_from_points(std::iter::empty());
  assert!(reused.is_empty());
}

/// pretends every point set is centered at a fixed location
struct FixedCenterBox {
  center: Vec3<f32>,
  expanded: f32,
}

impl AxisAlignedBounding<f32> for FixedCenterBox {
  fn from_points<I: IntoIterator<Item = Vec3<f32>>>(_: I) -> Self {
    Self {
      center: Vec3::new(0., 0., 10.),
      expanded: 0.,
    }
  }

  fn from_point(point: Vec3<f32>) -> Self {
    Self {
      center: point,
      expanded: 0.,
    }
  }

  fn center(&self) -> Vec3<f32> {
    self.center
  }

  fn expand_by_scalar(&mut self, scalar: f32) -> &mut Self {
    self.expanded += scalar;
    self
  }
}

#[test]
fn injected_box_fitter() {
  let points = [Vec3::new(0., 0., 0.), Vec3::new(0., 0., 4.)];
  let sphere = Sphere::from_points_by::<FixedCenterBox, _>(points);
  assert_eq!(sphere.center, Vec3::new(0., 0., 10.));
  assert_eq!(sphere.radius, 10.);

  let mut sphere = Sphere::zero();
  sphere.set_from_points_by::<FixedCenterBox, _>(points);
  assert_eq!(sphere.radius, 10.);

  let bounding: FixedCenterBox = Sphere::new(Vec3::new(1., 2., 3.), 4.).bounding_box_by();
  assert_eq!(bounding.center, Vec3::new(1., 2., 3.));
  assert_eq!(bounding.expanded, 4.);
}

#[test]
fn try_fitting() {
  let sphere = Sphere::try_from_points(sample_points()).unwrap();
  assert_eq!(sphere, Sphere::from_points(sample_points()));

  assert_eq!(
    Sphere::<f32>::try_from_points(Vec::new()),
    Err(BoundingError::EmptyPointSet)
  );
  assert_eq!(
    Sphere::try_from_points(vec![Vec3::zero(), Vec3::new(f32::INFINITY, 0., 0.)]),
    Err(BoundingError::NonFinite)
  );
  assert_eq!(
    Sphere::try_from_points(vec![Vec3::new(0., f32::NAN, 0.)]),
    Err(BoundingError::NonFinite)
  );
}

#[test]
fn containment_boundary() {
  let sphere = Sphere::new(Vec3::zero(), 5.);
  assert!(sphere.contains(&Vec3::new(5., 0., 0.)));
  assert!(sphere.contains(&Vec3::new(0., -5., 0.)));
  assert!(!sphere.contains(&Vec3::new(5.0001, 0., 0.)));
  assert!(!sphere.is_empty());
}

#[test]
fn signed_distance() {
  let sphere = Sphere::new(Vec3::zero(), 5.);
  assert_eq!(sphere.distance_to(Vec3::new(0., 0., 0.)), -5.);
  assert_eq!(sphere.distance_to(Vec3::new(5., 0., 0.)), 0.);
  assert_eq!(sphere.distance_to(Vec3::new(10., 0., 0.)), 5.);

  let point = Sphere::new(Vec3::new(1., 1., 1.), 0.);
  assert_eq!(point.distance_to(Vec3::new(1., 1., 4.)), 3.);
}

#[test]
fn sphere_intersection() {
  let a = Sphere::new(Vec3::zero(), 3.);
  let b = Sphere::new(Vec3::new(6., 0., 0.), 3.);
  assert!(a.intersect(&b, &()));
  assert!(b.intersect(&a, &()));

  let b = Sphere::new(Vec3::new(6.001, 0., 0.), 3.);
  assert!(!a.intersect(&b, &()));
  assert!(!b.intersect(&a, &()));

  let nested = Sphere::new(Vec3::new(0.5, 0., 0.), 1.);
  assert!(a.intersect(&nested, &()));
  assert!(nested.intersect(&a, &()));
}

#[test]
fn clamp_keeps_interior_points() {
  let sphere = Sphere::from_points(sample_points());
  for p in sample_points() {
    assert_eq!(sphere.clamp_point(p), p);
  }
  assert_eq!(sphere.clamp_point(sphere.center), sphere.center);
}

#[test]
fn clamp_projects_exterior_points() {
  let sphere = Sphere::new(Vec3::zero(), 2.);
  assert_eq!(sphere.clamp_point(Vec3::new(10., 0., 0.)), Vec3::new(2., 0., 0.));

  let exterior = [
    Vec3::new(3., 4., 0.),
    Vec3::new(-7., 1., 2.),
    Vec3::new(0.5, -9., 12.),
  ];
  for p in exterior {
    let clamped = sphere.clamp_point(p);
    assert!(approx(sphere.distance_to(clamped), 0.));
    // same direction as the original point
    assert!(approx_vec(clamped.normalize(), p.normalize()));
  }

  let offset = Sphere::new(Vec3::new(1., 1., 1.), 1.);
  assert!(approx_vec(
    offset.clamp_point(Vec3::new(1., 1., 5.)),
    Vec3::new(1., 1., 2.)
  ));
}

#[test]
fn clamp_degenerate_direction() {
  let broken = Sphere::new(Vec3::new(1., 2., 3.), -1.);
  assert_eq!(broken.clamp_point(Vec3::new(1., 2., 3.)), Vec3::new(1., 2., 3.));
}

#[test]
fn bounding_box() {
  let sphere = Sphere::new(Vec3::new(1., 2., 3.), 4.);
  let box3 = sphere.to_bounding();
  assert_eq!(box3.min, Vec3::new(-3., -2., -1.));
  assert_eq!(box3.max, Vec3::new(5., 6., 7.));
  assert_eq!(box3.center(), sphere.center);

  let empty = Sphere::new(Vec3::new(1., 2., 3.), 0.).to_bounding();
  assert_eq!(empty.min, empty.max);
}

#[test]
fn translate_clone_independence() {
  let s = Sphere::new(Vec3::new(1., 2., 3.), 4.);
  let mut t = s;
  t.translate(Vec3::new(1., 0., 0.));
  assert_eq!(s.center, Vec3::new(1., 2., 3.));
  assert_eq!(t.center, s.center + Vec3::new(1., 0., 0.));
  assert_eq!(t.radius, s.radius);

  #[allow(clippy::clone_on_copy)]
  let mut c = s.clone();
  c.set(Vec3::zero(), 1.).translate(Vec3::new(0., 1., 0.));
  assert_eq!(c, Sphere::new(Vec3::new(0., 1., 0.), 1.));
  assert_eq!(s, Sphere::new(Vec3::new(1., 2., 3.), 4.));
}

#[test]
fn exact_equality() {
  let s = Sphere::new(Vec3::new(1., 2., 3.), 4.);
  assert_eq!(s, s.clone());

  let mut moved = s;
  moved.center.x += 1e-6;
  assert_ne!(s, moved);

  let mut grown = s;
  grown.radius += 1e-6;
  assert_ne!(s, grown);
}

#[test]
fn transform() {
  let sphere = Sphere::new(Vec3::new(1., 0., 0.), 1.);

  let moved = sphere.transform_by(Mat4::translate((0., 2., 0.)) * Mat4::scale((2., 2., 2.)));
  assert_eq!(moved.center, Vec3::new(2., 2., 0.));
  assert_eq!(moved.radius, 2.);

  let rotated = sphere.transform_by(Mat4::rotate_z(std::f32::consts::FRAC_PI_2));
  assert!(approx_vec(rotated.center, Vec3::new(0., 1., 0.)));
  assert!(approx(rotated.radius, 1.));

  let mut identity = sphere;
  identity.apply_matrix(Mat4::identity());
  assert_eq!(identity, sphere);
}

#[test]
fn non_uniform_scale_stays_conservative() {
  let sphere = Sphere::new(Vec3::new(0., 0., 0.), 1.);
  let mat = Mat4::scale((1., 3., 0.5));
  let transformed = sphere.transform_by(mat);
  assert_eq!(transformed.radius, 3.);

  let surface = [
    Vec3::new(1., 0., 0.),
    Vec3::new(0., 1., 0.),
    Vec3::new(0., 0., -1.),
    Vec3::new(0.6, 0.8, 0.),
  ];
  assert!(surface.iter().all(|&p| transformed.contains(&(mat * p))));
}

#[test]
fn measure() {
  let sphere = Sphere::new(Vec3::<f64>::zero(), 2.);
  let volume = LebesgueMeasurable::<f64, 3>::measure(&sphere);
  let area = LebesgueMeasurable::<f64, 2>::measure(&sphere);
  assert!((volume - 32. / 3. * std::f64::consts::PI).abs() < 1e-12);
  assert!((area - 16. * std::f64::consts::PI).abs() < 1e-12);
  assert_eq!(sphere.centroid(), Vec3::zero());
}

#[test]
fn grow() {
  let mut sphere = Sphere::new(Vec3::zero(), 1.);
  sphere.expand_by_point(Vec3::new(0.5, 0., 0.));
  assert_eq!(sphere, Sphere::new(Vec3::zero(), 1.));

  sphere.expand_by_point(Vec3::new(3., 0., 0.));
  assert!(approx_vec(sphere.center, Vec3::new(1., 0., 0.)));
  assert!(approx(sphere.radius, 2.));

  let mut a = Sphere::new(Vec3::zero(), 1.);
  a.union(Sphere::new(Vec3::new(4., 0., 0.), 1.));
  assert!(approx_vec(a.center, Vec3::new(2., 0., 0.)));
  assert!(approx(a.radius, 3.));

  let mut b = Sphere::new(Vec3::zero(), 1.);
  b.union(Sphere::new(Vec3::zero(), 2.));
  assert_eq!(b.radius, 2.);

  let mut c = Sphere::new(Vec3::zero(), 1.);
  c.make_empty();
  assert!(c.is_empty());

  // the emptied sphere still encloses its center while growing
  c.expand_by_point(Vec3::new(10., 0., 0.));
  assert!(approx_vec(c.center, Vec3::new(5., 0., 0.)));
  assert!(approx(c.radius, 5.));
  assert!(c.contains(&Vec3::zero()));

  let mut d = Sphere::default();
  d.union(Sphere::new(Vec3::new(10., 0., 0.), 1.));
  assert!(approx_vec(d.center, Vec3::new(5.5, 0., 0.)));
  assert!(approx(d.radius, 5.5));
}

#[test]
fn merge_spheres() {
  let spheres = [
    Sphere::new(Vec3::new(-2., 0., 0.), 1.),
    Sphere::new(Vec3::new(2., 0., 0.), 1.),
  ];
  let merged = Sphere::from_spheres(spheres);
  assert_eq!(merged, Sphere::new(Vec3::zero(), 3.));

  let points = [
    Sphere::new(Vec3::new(-2., 0., 0.), 0.),
    Sphere::new(Vec3::new(2., 0., 0.), 0.),
  ];
  let merged = Sphere::from_spheres(points);
  assert_eq!(merged, Sphere::new(Vec3::zero(), 2.));

  let nothing = Sphere::<f32>::from_spheres(Vec::new());
  assert!(nothing.is_empty());
}

#[test]
fn from_box() {
  let box3 = Box3::new(Vec3::new(-1., -2., -2.), Vec3::new(1., 2., 2.));
  let sphere = Sphere::new_from_box(box3);
  assert_eq!(sphere, Sphere::new(Vec3::zero(), 3.));

  assert_eq!(Sphere::new_from_box(Box3::<f32>::empty()), Sphere::zero());
}

#[test]
fn display() {
  let sphere = Sphere::new(Vec3::new(1., 2., 3.), 4.);
  assert_eq!(sphere.to_string(), "(1.0, 2.0, 3.0) radius: 4.0");
  assert_eq!(Sphere::<f32>::default().to_string(), "(0.0, 0.0, 0.0) radius: 0.0");
}

#[test]
fn serialization() {
  let sphere = Sphere::new(Vec3::new(1., 2., 3.), 4.);
  let json = serde_json::to_string(&sphere).unwrap();
  let back: Sphere = serde_json::from_str(&json).unwrap();
  assert_eq!(back, sphere);

  let described: Sphere =
    serde_json::from_str(r#"{ "center": { "x": 0.0, "y": 1.0, "z": 0.0 }, "radius": 0.5 }"#)
      .unwrap();
  assert_eq!(described, Sphere::new(Vec3::new(0., 1., 0.), 0.5));
}

#[test]
fn gpu_layout() {
  let spheres: [Sphere<f32>; 2] = [
    Sphere::new(Vec3::new(1., 2., 3.), 4.),
    Sphere::new(Vec3::new(5., 6., 7.), 8.),
  ];
  let raw: &[f32] = bytemuck::cast_slice(&spheres);
  assert_eq!(raw, &[1., 2., 3., 4., 5., 6., 7., 8.]);
}
