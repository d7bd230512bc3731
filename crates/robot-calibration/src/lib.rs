//! High-level entry crate for the `robot-calibration` toolbox.
//!
//! A serial manipulator is modelled as a [`KinematicChain`] of [`Link`]s that
//! share one [`LinkConvention`]. The chain offers two views used during
//! kinematic calibration:
//!
//! - **Forward kinematics** - [`KinematicChain::transforms`] evaluates every
//!   link's local 4×4 transform at a joint configuration. Composing them into
//!   a tool pose is left to the caller.
//! - **Parameter vectors** - [`KinematicChain::vector`] flattens all link
//!   parameters; an [`OptimizationMask`] picks the free subset exposed by
//!   [`KinematicChain::optimization_vector`], and
//!   [`KinematicChain::apply_optimization_vector`] writes optimizer proposals
//!   back.
//!
//! ```
//! use robot_calibration::{KinematicChain, LinkConvention};
//!
//! # fn main() -> Result<(), robot_calibration::KinematicsError> {
//! let mut chain = KinematicChain::from_array(&[1.0, 2.0, 3.0, 4.0], LinkConvention::Mdh)?;
//! chain.set_optimization_mask([true, false, true, false]);
//! assert_eq!(chain.optimization_vector().as_slice(), &[1.0, 3.0]);
//!
//! chain.apply_optimization_vector(&[9.0, 7.0])?;
//! assert_eq!(chain.vector().as_slice(), &[9.0, 2.0, 7.0, 4.0]);
//!
//! let transforms = chain.transforms(None)?;
//! assert_eq!(transforms.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate layout
//!
//! - [`core`]: math aliases, link models, conventions, validation, errors
//! - [`chain`]: kinematic chains, masks, serde configs, synthetic fixtures

pub use robot_calibration_chain as chain;
pub use robot_calibration_core as core;

pub use robot_calibration_chain::{ChainConfig, KinematicChain, LinkConfig, OptimizationMask};
pub use robot_calibration_core::{
    DhParams, KinematicPair, KinematicsError, Link, LinkConvention, LinkModel, Mat4, Real,
};
