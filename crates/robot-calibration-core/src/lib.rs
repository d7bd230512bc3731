//! Core math and link primitives for `robot-calibration`.
//!
//! This crate contains:
//! - linear algebra type aliases (`Real`, `Vec3`, `Mat4`, ...) and elementary
//!   homogeneous transforms,
//! - link conventions ([`LinkConvention`]) and joint kinds ([`KinematicPair`]),
//! - the [`Link`] value type and the [`LinkModel`] capability a chain consumes,
//! - validation predicates and the shared [`KinematicsError`].
//!
//! Link transform (modified Denavit–Hartenberg):
//! `T = RotX(alpha) · TransX(a) · RotZ(theta) · TransZ(d)`

/// Link conventions and joint kinds.
pub mod convention;
/// Error type shared by the workspace.
pub mod error;
/// Link parameter blocks and transforms.
pub mod link;
/// Linear algebra type aliases and homogeneous helpers.
pub mod math;
/// Input validation predicates.
pub mod validation;

pub use convention::*;
pub use error::*;
pub use link::*;
pub use math::*;
