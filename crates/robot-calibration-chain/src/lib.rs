//! Kinematic chains and optimization masks for robot calibration.
//!
//! This crate builds on `robot-calibration-core` and provides:
//!
//! - [`KinematicChain`]: an ordered link sequence with a shared convention,
//!   flat parameter-vector views and per-link forward kinematics,
//! - [`OptimizationMask`]: selection of the free parameters an external
//!   optimizer may change,
//! - [`ChainConfig`]: a serde description of a chain,
//! - [`synthetic`]: deterministic chains and noise for tests.
//!
//! # Example
//!
//! ```
//! use robot_calibration_chain::KinematicChain;
//! use robot_calibration_core::LinkConvention;
//!
//! let mut chain =
//!     KinematicChain::from_array(&[0.0, 1.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0], LinkConvention::Mdh)
//!         .unwrap();
//!
//! // Free the two link lengths.
//! chain.set_optimization_mask([false, true, false, false, false, true, false, false]);
//! assert_eq!(chain.optimization_vector().as_slice(), &[1.0, 0.5]);
//!
//! chain.apply_optimization_vector(&[1.01, 0.49]).unwrap();
//! assert_eq!(chain.vector()[5], 0.49);
//! ```

mod chain;
mod config;
mod mask;
pub mod synthetic;

pub use chain::KinematicChain;
pub use config::{ChainConfig, LinkConfig};
pub use mask::OptimizationMask;
