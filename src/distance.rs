// Monocular depth from known object size.
//
// The apparent area of a fronto-parallel planar object falls with the square
// of its distance, so `z^2 = real_area / observed_area * fx * fy`. The estimate
// assumes the object faces the camera and keeps its real aspect ratio in the image.

use crate::all::*;

// Observed region in pixels, `(x, y)` being the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
  pub x: f64,
  pub y: f64,
  pub width: f64,
  pub height: f64,
}

// Known physical size of the tracked object. Estimates come out in the same units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectFootprint {
  pub width: f64,
  pub height: f64,
}

// Camera-space position. `z > 0` for every successful estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionEstimate {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

impl BoundingBox {
  pub fn new(x: f64, y: f64, width: f64, height: f64) -> BoundingBox {
    BoundingBox { x, y, width, height }
  }

  // Box spanned by two opposite corners in any order.
  pub fn from_corners(a: Vector2d, b: Vector2d) -> BoundingBox {
    BoundingBox {
      x: a[0].min(b[0]),
      y: a[1].min(b[1]),
      width: (a[0] - b[0]).abs(),
      height: (a[1] - b[1]).abs(),
    }
  }

  pub fn area(&self) -> f64 {
    self.width * self.height
  }

  pub fn center(&self) -> Vector2d {
    Vector2d::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
  }
}

impl ObjectFootprint {
  pub fn new(width: f64, height: f64) -> GeometryResult<ObjectFootprint> {
    if !(width > 0. && height > 0.) || !width.is_finite() || !height.is_finite() {
      return Err(GeometryError::Configuration(
        format!("Object footprint must be positive, got {}x{}.", width, height)));
    }
    Ok(ObjectFootprint { width, height })
  }

  pub fn area(&self) -> f64 {
    self.width * self.height
  }
}

pub fn estimate_position(
  bbox: &BoundingBox,
  footprint: &ObjectFootprint,
  intrinsics: &Intrinsics,
  sensor: &SensorDimensions,
) -> GeometryResult<PositionEstimate> {
  if !(bbox.width >= 0. && bbox.height >= 0.) {
    return Err(GeometryError::Domain(
      format!("Bounding box has negative size {}x{}.", bbox.width, bbox.height)));
  }
  let observed_area = bbox.area();
  if !(observed_area > 0.) {
    return Err(GeometryError::Domain("Cannot estimate depth from a zero-area observation.".to_string()));
  }
  let real_area = footprint.area();
  if !(real_area > 0.) {
    return Err(GeometryError::Domain("Object footprint has no area.".to_string()));
  }

  let ratio = real_area / observed_area;
  let z = check_finite((ratio * intrinsics.focal_x * intrinsics.focal_y).sqrt(), "Depth")?;
  if !(z > 0.) {
    return Err(GeometryError::Domain(format!("Estimated depth {} is not positive.", z)));
  }

  // Box center relative to the frame center.
  let frame = bbox.center() - sensor.center();
  let x_frame = frame[0];
  let y_frame = frame[1];

  Ok(PositionEstimate {
    x: check_finite(x_frame * z / intrinsics.focal_x, "Estimated x")?,
    y: check_finite(y_frame * z / intrinsics.focal_y, "Estimated y")?,
    z,
  })
}
