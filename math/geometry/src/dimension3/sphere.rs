use crate::*;

#[cfg(test)]
mod test;

pub type Sphere<T = f32> = HyperSphere<T, Vec3<T>>;

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Sphere<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Sphere<T> {}

impl<T: Scalar> LebesgueMeasurable<T, 3> for Sphere<T> {
  #[inline(always)]
  fn measure(&self) -> T {
    T::by_f32(4.) / T::by_f32(3.) * T::pi() * self.radius * self.radius * self.radius
  }
}

impl<T: Scalar> LebesgueMeasurable<T, 2> for Sphere<T> {
  #[inline(always)]
  fn measure(&self) -> T {
    T::by_f32(4.) * T::pi() * self.radius * self.radius
  }
}

impl<T: Scalar> SolidEntity<T, 3> for Sphere<T> {
  type Center = Vec3<T>;
  fn centroid(&self) -> Self::Center {
    self.center
  }
}

impl<T: Scalar> ContainAble<T, Vec3<T>, 3> for Sphere<T> {
  /// points on the surface are contained
  #[inline(always)]
  fn contains(&self, point: &Vec3<T>) -> bool {
    self.center.distance(*point) <= self.radius
  }
}

impl<T: Scalar> SpaceEntity<T, 3> for Sphere<T> {
  type Matrix = Mat4<T>;

  /// The radius is scaled by the largest axis scale of the matrix. Under non
  /// uniform scale the real shape is an ellipsoid, the result still encloses it.
  fn apply_matrix(&mut self, mat: Self::Matrix) -> &mut Self {
    self.center.apply_matrix(mat);
    self.radius *= mat.max_scale();
    self
  }
}

impl<T: Scalar> Sphere<T> {
  pub fn zero() -> Self {
    Self::new(Vec3::zero(), T::zero())
  }

  /// the sphere passing through all the corners of the box
  pub fn new_from_box(box3: Box3<T>) -> Self {
    if box3.is_empty() {
      return Self::zero();
    }
    let center = box3.center();
    let radius = (box3.max - center).length();
    Self::new(center, radius)
  }

  // we cant impl from iter trait because it need iter twice

  /// Center at the center of the points' bounding box, radius reaching the
  /// farthest point.
  ///
  /// This is cheap but not the minimal enclosing sphere, a point set whose
  /// box center is off the optimal center gets a larger radius than needed.
  pub fn from_points<I>(items: I) -> Self
  where
    I: IntoIterator<Item = Vec3<T>> + Clone,
  {
    Self::from_points_by::<Box3<T>, I>(items)
  }

  /// same as [`Self::from_points`], the center is taken from the given box implementation
  pub fn from_points_by<B, I>(items: I) -> Self
  where
    B: AxisAlignedBounding<T>,
    I: IntoIterator<Item = Vec3<T>> + Clone,
  {
    let mut sphere = Self::zero();
    sphere.set_from_points_by::<B, I>(items);
    sphere
  }

  pub fn from_points_and_center<I>(items: I, center: Vec3<T>) -> Self
  where
    I: IntoIterator<Item = Vec3<T>>,
  {
    let mut sphere = Self::zero();
    sphere.set_from_points_and_center(items, center);
    sphere
  }

  /// [`Self::from_points`] that refuses the input it can not fit a meaningful sphere to
  pub fn try_from_points<I>(items: I) -> Result<Self, BoundingError>
  where
    I: IntoIterator<Item = Vec3<T>> + Clone,
  {
    let mut iter = items.clone().into_iter().peekable();
    if iter.peek().is_none() {
      return Err(BoundingError::EmptyPointSet);
    }
    if iter.any(|point| !point.is_finite()) {
      return Err(BoundingError::NonFinite);
    }
    Ok(Self::from_points(items))
  }

  /// merge spheres into one that encloses all of them, the center is the radius
  /// weighted average of the input centers
  pub fn from_spheres<I>(items: I) -> Self
  where
    I: IntoIterator<Item = Self> + Clone,
  {
    let (center, weight) =
      items
        .clone()
        .into_iter()
        .fold((Vec3::zero(), T::zero()), |(center, weight), sphere| {
          (
            center + sphere.center * sphere.radius,
            weight + sphere.radius,
          )
        });

    if weight <= T::zero() {
      log::trace!("merge spheres without volume, fit their centers instead");
      let centers: Vec<_> = items.into_iter().map(|sphere| sphere.center).collect();
      return Self::from_points(centers);
    }

    let center = center / weight;

    let radius = items.into_iter().fold(T::zero(), |radius, sphere| {
      radius.max((sphere.center - center).length() + sphere.radius)
    });

    Self::new(center, radius)
  }

  pub fn set_from_points<I>(&mut self, items: I) -> &mut Self
  where
    I: IntoIterator<Item = Vec3<T>> + Clone,
  {
    self.set_from_points_by::<Box3<T>, I>(items)
  }

  pub fn set_from_points_by<B, I>(&mut self, items: I) -> &mut Self
  where
    B: AxisAlignedBounding<T>,
    I: IntoIterator<Item = Vec3<T>> + Clone,
  {
    let center = B::from_points(items.clone()).center();
    self.set_from_points_and_center(items, center)
  }

  /// keep the given center and take the farthest point distance as radius,
  /// an empty point set gives radius zero
  pub fn set_from_points_and_center<I>(&mut self, items: I, center: Vec3<T>) -> &mut Self
  where
    I: IntoIterator<Item = Vec3<T>>,
  {
    let mut count = 0;
    let mut max_distance2 = T::zero();
    items.into_iter().for_each(|point| {
      count += 1;
      max_distance2 = max_distance2.max((point - center).length2());
    });
    if count == 0 {
      log::debug!("bounding sphere fitted from an empty point set, result is empty");
    }
    self.set(center, max_distance2.sqrt())
  }

  /// the box has both corners at the center, then grows by radius on every axis
  pub fn bounding_box_by<B: AxisAlignedBounding<T>>(&self) -> B {
    let mut box3 = B::from_point(self.center);
    box3.expand_by_scalar(self.radius);
    box3
  }
}
