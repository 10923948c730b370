use crate::all::*;

// Closed polyline of homogeneous points. Point `i` connects to point `(i + 1) % n`.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
  pub points: Vec<Vector4d>,
}

impl Shape {
  pub fn new(points: &[Vector3d]) -> Shape {
    Shape {
      points: points.iter().map(homogeneous).collect(),
    }
  }

  // Two squares of side 2 at depths 50 and 48, traced as one closed loop.
  pub fn default_box() -> Shape {
    Shape::new(&[
      Vector3d::new(1., 1., 50.),
      Vector3d::new(1., -1., 50.),
      Vector3d::new(-1., -1., 50.),
      Vector3d::new(-1., 1., 50.),
      Vector3d::new(-1., 1., 48.),
      Vector3d::new(-1., -1., 48.),
      Vector3d::new(1., -1., 48.),
      Vector3d::new(1., 1., 48.),
    ])
  }

  pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> {
    let n = self.points.len();
    (0..n).map(move |i| (i, (i + 1) % n))
  }
}

// Combined intrinsic and extrinsic projection for one frame.
pub struct Projector {
  projection: Matrix3x4d,
}

impl Projector {
  pub fn new(intrinsic: &Matrix3x4d, extrinsic: &Matrix4d) -> Projector {
    Projector {
      projection: intrinsic * extrinsic,
    }
  }

  pub fn project(&self, point: &Vector4d) -> GeometryResult<Vector2d> {
    let v = self.projection * point;
    if !(v[2] > 0.) {
      return Err(GeometryError::Domain(
        format!("Point has camera-space depth {} and cannot be displayed.", v[2])));
    }
    let pixel = Vector2d::new(
      check_finite(v[0] / v[2], "Projected x")?,
      check_finite(v[1] / v[2], "Projected y")?,
    );
    Ok(pixel)
  }

  // One result per point, in input order. Failed points are left for the caller to skip.
  pub fn project_points(&self, points: &[Vector4d]) -> Vec<GeometryResult<Vector2i>> {
    points.iter()
      .map(|p| self.project(p).and_then(|pixel| to_pixel(&pixel)))
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn intrinsics() -> Intrinsics {
    let fov = FieldOfView::from_degrees(61., 37.).unwrap();
    let sensor = SensorDimensions::new(1280, 720).unwrap();
    Intrinsics::from_fov(&fov, &sensor).unwrap()
  }

  #[test]
  fn test_identity_extrinsic_matches_intrinsics() {
    let k = intrinsics();
    let projector = Projector::new(&k.intrinsic_matrix(), &Pose::default().extrinsic());
    for p in &[
      Vector3d::new(0., 0., 1.),
      Vector3d::new(1., -1., 50.),
      Vector3d::new(-3.5, 2.25, 7.),
    ] {
      let a = projector.project(&homogeneous(p)).unwrap();
      let b = k.project(p).unwrap();
      assert!((a - b).norm() < 1e-9);
    }
  }

  #[test]
  fn test_center_projects_to_principal_point() {
    let k = intrinsics();
    let projector = Projector::new(&k.intrinsic_matrix(), &Matrix4d::identity());
    let pixel = projector.project(&Vector4d::new(0., 0., 10., 1.)).unwrap();
    assert_eq!(pixel, Vector2d::new(640., 360.));
  }

  #[test]
  fn test_points_behind_camera_fail() {
    let k = intrinsics();
    let pose = Pose::at(Vector3d::new(0., 0., -49.));
    let projector = Projector::new(&k.intrinsic_matrix(), &pose.extrinsic());
    let pixels = projector.project_points(&Shape::default_box().points);
    assert_eq!(pixels.len(), 8);
    // Depth 50 - 49 = 1 is visible, depth 48 - 49 = -1 is not.
    for (i, pixel) in pixels.iter().enumerate() {
      if i < 4 {
        assert!(pixel.is_ok());
      }
      else {
        assert!(matches!(pixel.as_ref(), Err(GeometryError::Domain(_))));
      }
    }
    let on_plane = Projector::new(&k.intrinsic_matrix(), &Matrix4d::identity());
    assert!(matches!(on_plane.project(&Vector4d::new(1., 1., 0., 1.)), Err(GeometryError::Domain(_))));
  }

  #[test]
  fn test_shape_edges_wrap() {
    let edges: Vec<_> = Shape::default_box().edges().collect();
    assert_eq!(edges.len(), 8);
    assert_eq!(edges[0], (0, 1));
    assert_eq!(edges[7], (7, 0));
  }

  #[test]
  fn test_default_box_pixels() {
    let k = intrinsics();
    let projector = Projector::new(&k.intrinsic_matrix(), &Matrix4d::identity());
    let pixels = projector.project_points(&Shape::default_box().points);
    let first = pixels[0].as_ref().unwrap();
    let expected = k.project(&Vector3d::new(1., 1., 50.)).unwrap();
    assert_eq!(*first, to_pixel(&expected).unwrap());
  }

  #[test]
  fn test_point_near_camera_plane() {
    let k = intrinsics();
    let projector = Projector::new(&k.intrinsic_matrix(), &Matrix4d::identity());
    let points = [
      Vector4d::new(-1., 0., 1e-9, 1.),
      Vector4d::new(1., 0., 5., 1.),
      // On the optical axis a tiny depth still has a pixel.
      Vector4d::new(0., 0., 1e-9, 1.),
    ];
    // The divide itself is finite, the pixel is not drawable.
    assert!(projector.project(&points[0]).unwrap()[0] < -1e11);
    let pixels = projector.project_points(&points);
    assert!(matches!(pixels[0], Err(GeometryError::Domain(_))));
    assert_eq!(pixels[1], Ok(Vector2i::new(857, 360)));
    assert_eq!(pixels[2], Ok(Vector2i::new(640, 360)));
  }
}
