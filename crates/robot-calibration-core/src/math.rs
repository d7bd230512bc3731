//! Mathematical utilities and type definitions.
//!
//! This module provides the scalar and matrix aliases used throughout the
//! workspace and the elementary homogeneous transforms that link models are
//! composed from.

use nalgebra::{Isometry3, Matrix3, Matrix4, Vector3};

/// Scalar type used throughout the library (currently `f64`).
pub type Real = f64;

/// 3D vector with [`Real`] components.
pub type Vec3 = Vector3<Real>;
/// 3×3 matrix with [`Real`] entries.
pub type Mat3 = Matrix3<Real>;
/// 4×4 homogeneous matrix with [`Real`] entries.
pub type Mat4 = Matrix4<Real>;
/// 3D rigid transform (SE(3)) using [`Real`].
pub type Iso3 = Isometry3<Real>;

/// Homogeneous rotation about the X axis.
pub fn rot_x(angle: Real) -> Mat4 {
    let (s, c) = angle.sin_cos();
    Mat4::new(
        1.0, 0.0, 0.0, 0.0, //
        0.0, c, -s, 0.0, //
        0.0, s, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Homogeneous rotation about the Z axis.
pub fn rot_z(angle: Real) -> Mat4 {
    let (s, c) = angle.sin_cos();
    Mat4::new(
        c, -s, 0.0, 0.0, //
        s, c, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Homogeneous translation along the X axis.
pub fn trans_x(dist: Real) -> Mat4 {
    Mat4::new_translation(&Vec3::new(dist, 0.0, 0.0))
}

/// Homogeneous translation along the Z axis.
pub fn trans_z(dist: Real) -> Mat4 {
    Mat4::new_translation(&Vec3::new(0.0, 0.0, dist))
}

/// Convert a homogeneous matrix into an [`Iso3`].
///
/// The rotation block is assumed to be orthonormal, which holds for every
/// transform produced by a link model.
pub fn mat4_to_iso3(m: &Mat4) -> Iso3 {
    let rot: Mat3 = m.fixed_view::<3, 3>(0, 0).into_owned();
    let rotation = nalgebra::UnitQuaternion::from_matrix(&rot);
    let translation = nalgebra::Translation3::new(m[(0, 3)], m[(1, 3)], m[(2, 3)]);
    Iso3::from_parts(translation, rotation)
}
