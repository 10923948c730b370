use crate::all::*;

// Combined-axis rotation: yaw about y, pitch about x, roll about z.
pub fn rotation_matrix(yaw: f64, pitch: f64, roll: f64) -> Matrix3d {
  let (s1, c1) = pitch.sin_cos();
  let (s2, c2) = yaw.sin_cos();
  let (s3, c3) = roll.sin_cos();
  Matrix3d::new(
    c2 * c3, -c2 * s3, s2,
    c1 * s3 + c3 * s1 * s2, c1 * c3 - s1 * s2 * s3, -c2 * s1,
    s1 * s3 - c1 * c3 * s2, c3 * s1 + c1 * s2 * s3, c1 * c2,
  )
}

pub fn to_affine(r: &Matrix3d) -> Matrix4d {
  let mut m = Matrix4d::identity();
  m.fixed_slice_mut::<3, 3>(0, 0).copy_from(r);
  m
}

pub fn translation_matrix(t: &Vector3d) -> Matrix4d {
  let mut m = Matrix4d::identity();
  m.fixed_slice_mut::<3, 1>(0, 3).copy_from(t);
  m
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::f64::consts::FRAC_PI_2;

  #[allow(non_snake_case)]
  fn transform_3d(T: &Matrix4d, x: &Vector3d) -> Vector3d {
    T.fixed_slice::<3, 3>(0, 0) * x + T.fixed_slice::<3, 1>(0, 3)
  }

  #[test]
  fn test_rotation_axes() {
    // Yaw alone turns about the y axis.
    let r = rotation_matrix(FRAC_PI_2, 0., 0.);
    assert!((r * Vector3d::new(0., 0., 1.) - Vector3d::new(1., 0., 0.)).norm() < 1e-12);
    assert!((r * Vector3d::new(0., 1., 0.) - Vector3d::new(0., 1., 0.)).norm() < 1e-12);

    // Pitch alone turns about the x axis.
    let r = rotation_matrix(0., FRAC_PI_2, 0.);
    assert!((r * Vector3d::new(1., 0., 0.) - Vector3d::new(1., 0., 0.)).norm() < 1e-12);
    assert!((r * Vector3d::new(0., 1., 0.) - Vector3d::new(0., 0., 1.)).norm() < 1e-12);

    // Roll alone turns about the z axis.
    let r = rotation_matrix(0., 0., FRAC_PI_2);
    assert!((r * Vector3d::new(0., 0., 1.) - Vector3d::new(0., 0., 1.)).norm() < 1e-12);
    assert!((r * Vector3d::new(1., 0., 0.) - Vector3d::new(0., 1., 0.)).norm() < 1e-12);
  }

  #[test]
  fn test_rotation_is_orthonormal() {
    let r = rotation_matrix(0.3, -1.1, 2.4);
    assert!((r.transpose() * r - Matrix3d::identity()).norm() < 1e-12);
    assert!((r.determinant() - 1.).abs() < 1e-12);
  }

  #[test]
  #[allow(non_snake_case)]
  fn test_transform_3d() {
    let r = rotation_matrix(0.2, 0.1, -0.4);
    let t = Vector3d::new(1., -2., 3.);
    let T = translation_matrix(&t) * to_affine(&r);
    let x = Vector3d::new(0.5, 0.25, 4.);
    assert!((transform_3d(&T, &x) - (r * x + t)).norm() < 1e-12);
    let h = T * homogeneous(&x);
    assert!((h.fixed_rows::<3>(0) - transform_3d(&T, &x)).norm() < 1e-12);
    assert_eq!(h[3], 1.);
  }
}
