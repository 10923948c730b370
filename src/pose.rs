use crate::all::*;

// Position offset and orientation driven by the pose controller.
// Angles are radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
  pub position: Vector3d,
  pub yaw: f64,
  pub pitch: f64,
  pub roll: f64,
}

impl Default for Pose {
  fn default() -> Pose {
    Pose {
      position: Vector3d::zeros(),
      yaw: 0.,
      pitch: 0.,
      roll: 0.,
    }
  }
}

impl Pose {
  pub fn at(position: Vector3d) -> Pose {
    Pose { position, ..Pose::default() }
  }

  // R = Rx(pitch) * Ry(yaw) * Rz(roll), embedded with zero translation.
  pub fn rotation(&self) -> Matrix4d {
    to_affine(&rotation_matrix(self.yaw, self.pitch, self.roll))
  }

  pub fn translation(&self) -> Matrix4d {
    translation_matrix(&self.position)
  }

  // Scene to camera transform. Points are translated by `position` first and
  // then rotated, so rotation pivots around the camera origin after the offset.
  // Keep the order: the interactive shape demo depends on it.
  pub fn extrinsic(&self) -> Matrix4d {
    self.rotation() * self.translation()
  }
}
