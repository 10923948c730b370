use crate::all::*;

// Eigen-like aliases.
pub type Vector2d = nalgebra::Vector2::<f64>;
pub type Vector3d = nalgebra::Vector3::<f64>;
pub type Vector4d = nalgebra::Vector4::<f64>;
pub type Vector2i = nalgebra::Vector2::<i32>;
pub type Matrix3d = nalgebra::Matrix3::<f64>;
pub type Matrix4d = nalgebra::Matrix4::<f64>;
pub type Matrix3x4d = nalgebra::Matrix3x4::<f64>;

// Largest pixel coordinate handed to the renderer. The difference of two
// coordinates stays far inside `i32`.
pub const PIXEL_LIMIT: f64 = 1e6;

// Pixel coordinates are rounded only when leaving the floating point pipeline.
// Points very close to the camera plane land far outside any image and are rejected.
pub fn to_pixel(p: &Vector2d) -> GeometryResult<Vector2i> {
  let x = p[0].round();
  let y = p[1].round();
  if !(x.abs() <= PIXEL_LIMIT && y.abs() <= PIXEL_LIMIT) {
    return Err(GeometryError::Domain(
      format!("Pixel ({}, {}) is outside the drawable range.", p[0], p[1])));
  }
  Ok(Vector2i::new(x as i32, y as i32))
}

// Homogeneous point for affine transforms.
pub fn homogeneous(p: &Vector3d) -> Vector4d {
  Vector4d::new(p[0], p[1], p[2], 1.)
}
