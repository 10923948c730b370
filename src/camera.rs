use crate::all::*;

// Angular extent of the image along each axis, in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldOfView {
  pub horizontal: f64,
  pub vertical: f64,
}

// Image size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SensorDimensions {
  pub width: usize,
  pub height: usize,
}

// Pinhole intrinsics. Built once per session and never mutated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intrinsics {
  pub focal_x: f64,
  pub focal_y: f64,
  pub principal_x: f64,
  pub principal_y: f64,
}

impl FieldOfView {
  pub fn new(horizontal: f64, vertical: f64) -> GeometryResult<FieldOfView> {
    check_fov(horizontal, "Horizontal field of view")?;
    check_fov(vertical, "Vertical field of view")?;
    Ok(FieldOfView { horizontal, vertical })
  }

  pub fn from_degrees(horizontal: f64, vertical: f64) -> GeometryResult<FieldOfView> {
    FieldOfView::new(horizontal.to_radians(), vertical.to_radians())
  }
}

impl SensorDimensions {
  pub fn new(width: usize, height: usize) -> GeometryResult<SensorDimensions> {
    if width == 0 || height == 0 {
      return Err(GeometryError::Configuration(
        format!("Sensor dimensions must be positive, got {}x{}.", width, height)));
    }
    Ok(SensorDimensions { width, height })
  }

  pub fn center(&self) -> Vector2d {
    Vector2d::new(self.width as f64 * 0.5, self.height as f64 * 0.5)
  }
}

fn check_fov(fov: f64, what: &str) -> GeometryResult<()> {
  if !(fov > 0. && fov < std::f64::consts::PI) {
    return Err(GeometryError::Configuration(
      format!("{} must lie strictly between 0 and pi radians, got {}.", what, fov)));
  }
  Ok(())
}

// Focal length in pixels for a full field of view angle spanning `dimension` pixels.
pub fn focal_length(fov: f64, dimension: usize) -> GeometryResult<f64> {
  check_fov(fov, "Field of view")?;
  if dimension == 0 {
    return Err(GeometryError::Configuration("Sensor dimension must be positive.".to_string()));
  }
  let f = dimension as f64 / (2. * (fov / 2.).tan());
  if !f.is_finite() || f <= 0. {
    return Err(GeometryError::Configuration(format!("Focal length {} is not usable.", f)));
  }
  Ok(f)
}

impl Intrinsics {
  pub fn new(
    focal_x: f64,
    focal_y: f64,
    principal_x: f64,
    principal_y: f64,
  ) -> GeometryResult<Intrinsics> {
    for (f, name) in [(focal_x, "x"), (focal_y, "y")] {
      if !f.is_finite() || f <= 0. {
        return Err(GeometryError::Configuration(
          format!("Focal length {} must be positive, got {}.", name, f)));
      }
    }
    if !principal_x.is_finite() || !principal_y.is_finite() {
      return Err(GeometryError::Configuration("Principal point must be finite.".to_string()));
    }
    Ok(Intrinsics { focal_x, focal_y, principal_x, principal_y })
  }

  // The principal point is the image center.
  pub fn from_fov(fov: &FieldOfView, sensor: &SensorDimensions) -> GeometryResult<Intrinsics> {
    let center = sensor.center();
    Intrinsics::new(
      focal_length(fov.horizontal, sensor.width)?,
      focal_length(fov.vertical, sensor.height)?,
      center[0],
      center[1],
    )
  }

  // 3x4 projection used with homogeneous camera-space points.
  pub fn intrinsic_matrix(&self) -> Matrix3x4d {
    Matrix3x4d::new(
      self.focal_x, 0., self.principal_x, 0.,
      0., self.focal_y, self.principal_y, 0.,
      0., 0., 1., 0.,
    )
  }

  // Projects a camera-space point. Points on or behind the camera plane have no pixel.
  pub fn project(&self, point: &Vector3d) -> GeometryResult<Vector2d> {
    if !(point[2] > 0.) {
      return Err(GeometryError::Domain(
        format!("Cannot project a point with depth {}.", point[2])));
    }
    let iz = 1. / point[2];
    let pixel = Vector2d::new(
      point[0] * self.focal_x * iz + self.principal_x,
      point[1] * self.focal_y * iz + self.principal_y,
    );
    check_finite(pixel[0], "Projected x")?;
    check_finite(pixel[1], "Projected y")?;
    Ok(pixel)
  }
}
