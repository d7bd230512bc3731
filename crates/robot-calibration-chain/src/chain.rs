//! Ordered chain of links sharing a single convention.
//!
//! A [`KinematicChain`] owns its links and exposes them three ways:
//!
//! - **Links** - the ordered [`Link`] sequence, replaced only as a whole,
//! - **Full parameter vector** - every link's scalars concatenated in link order,
//! - **Optimization vector** - the scalars selected by the optimization mask.
//!
//! # Parameter layout
//!
//! For an MDH chain with `n` links the full vector has `4 * n` entries:
//!
//! ```text
//! [alpha_0, a_0, theta_0, d_0, alpha_1, a_1, theta_1, d_1, ...]
//! ```
//!
//! The optimization mask holds one flag per entry of that vector. An external
//! optimizer reads [`KinematicChain::optimization_vector`], proposes new values
//! and writes them back with [`KinematicChain::apply_optimization_vector`].

use log::{debug, warn};
use nalgebra::DVector;
use robot_calibration_core::validation::{is_same_link_conventions, is_sequence_length_correct};
use robot_calibration_core::{
    DhParams, KinematicPair, KinematicsError, Link, LinkConvention, LinkModel, Mat4, Real,
};

use crate::OptimizationMask;

/// Serial kinematic chain with a per-parameter optimization mask.
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicChain {
    links: Vec<Link>,
    optimization_mask: Vec<bool>,
}

impl KinematicChain {
    /// Build a chain from an explicit link sequence.
    ///
    /// The optimization mask starts all-`false`, one flag per scalar of the
    /// full parameter vector.
    ///
    /// # Errors
    ///
    /// [`KinematicsError::LinkSequence`] if the links mix conventions.
    pub fn new(links: Vec<Link>) -> Result<Self, KinematicsError> {
        if !is_same_link_conventions(&links) {
            return Err(KinematicsError::LinkSequence);
        }
        let optimization_mask = vec![false; num_parameters(&links)];
        Ok(Self {
            links,
            optimization_mask,
        })
    }

    /// Build a chain from a flat parameter array, see [`Self::array_2_links`].
    pub fn from_array(array: &[Real], convention: LinkConvention) -> Result<Self, KinematicsError> {
        Self::new(Self::array_2_links(array, convention)?)
    }

    /// Split a flat parameter array into one revolute link per row.
    ///
    /// Row `i` (entries `i * k .. (i + 1) * k`, `k = convention.params_per_link()`)
    /// becomes link `i`.
    ///
    /// # Errors
    ///
    /// - [`KinematicsError::LinkConvention`] for conventions other than MDH,
    ///   checked before anything else.
    /// - [`KinematicsError::Shape`] if `array.len()` is not a multiple of `k`.
    pub fn array_2_links(
        array: &[Real],
        convention: LinkConvention,
    ) -> Result<Vec<Link>, KinematicsError> {
        match convention {
            LinkConvention::Mdh => {
                let row_len = convention.params_per_link();
                if array.len() % row_len != 0 {
                    return Err(KinematicsError::Shape {
                        len: array.len(),
                        row_len,
                    });
                }
                array
                    .chunks_exact(row_len)
                    .map(|row| {
                        DhParams::from_slice(row)
                            .map(|params| Link::new(convention, KinematicPair::Revolute, params))
                            .ok_or(KinematicsError::Shape {
                                len: array.len(),
                                row_len,
                            })
                    })
                    .collect()
            }
            LinkConvention::Dh => Err(KinematicsError::LinkConvention(convention)),
        }
    }

    /// Links in base-to-tip order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Replace the whole link sequence.
    ///
    /// If the number of scalars changes, the mask is resized to match: existing
    /// flags keep their positions and new positions are fixed (`false`).
    ///
    /// # Errors
    ///
    /// [`KinematicsError::LinkSequence`] if the links mix conventions. The chain
    /// is left untouched in that case.
    pub fn set_links(&mut self, links: Vec<Link>) -> Result<(), KinematicsError> {
        if !is_same_link_conventions(&links) {
            return Err(KinematicsError::LinkSequence);
        }

        let old_len = self.num_parameters();
        let new_len = num_parameters(&links);
        if new_len != old_len {
            debug!(
                "parameter count changed from {} to {}; resizing optimization mask ({} entries)",
                old_len,
                new_len,
                self.optimization_mask.len()
            );
            self.optimization_mask.resize(new_len, false);
        }

        self.links = links;
        Ok(())
    }

    /// Convention shared by all links, `None` for an empty chain.
    pub fn convention(&self) -> Option<LinkConvention> {
        self.links.first().map(LinkModel::convention)
    }

    /// Number of degrees of freedom (one per link).
    pub fn num_dof(&self) -> usize {
        self.links.len()
    }

    /// Number of links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// `true` if the chain has no links.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Length of the full parameter vector.
    pub fn num_parameters(&self) -> usize {
        num_parameters(&self.links)
    }

    /// Full parameter vector: every link's scalars in link order.
    pub fn vector(&self) -> DVector<Real> {
        DVector::from_iterator(self.num_parameters(), self.scalars())
    }

    /// Per-scalar free flags, as last set.
    pub fn optimization_mask(&self) -> &[bool] {
        &self.optimization_mask
    }

    /// Set which scalars of the full vector are free.
    ///
    /// A single `bool` is broadcast to the current full vector length. A
    /// sequence is stored as given; a length mismatch is only logged, and
    /// the shorter of mask and vector bounds [`Self::optimization_vector`].
    pub fn set_optimization_mask(&mut self, mask: impl Into<OptimizationMask>) {
        let len = self.num_parameters();
        let mask = mask.into().resolve(len);
        if mask.len() != len {
            warn!(
                "optimization mask has {} entries but the parameter vector has {}",
                mask.len(),
                len
            );
        }
        self.optimization_mask = mask;
    }

    /// Scalars of the full vector whose mask flag is `true`, in order.
    pub fn optimization_vector(&self) -> DVector<Real> {
        let values: Vec<Real> = self
            .scalars()
            .zip(&self.optimization_mask)
            .filter_map(|(v, &free)| free.then_some(v))
            .collect();
        DVector::from_vec(values)
    }

    /// Write new values for the free scalars back into the chain.
    ///
    /// `values` is consumed left to right, one value per `true` flag. Positions
    /// with a `false` flag, or past the end of a short mask, keep their current
    /// value. The merged vector is turned back into links with
    /// [`Self::array_2_links`]; each link keeps its joint kind. Extra values
    /// are ignored.
    ///
    /// # Errors
    ///
    /// - [`KinematicsError::OptimizationVectorExhausted`] if `values` runs out.
    /// - [`KinematicsError::LinkConvention`] if the chain convention cannot be
    ///   rebuilt from an array.
    ///
    /// The chain is unchanged on error.
    pub fn apply_optimization_vector(&mut self, values: &[Real]) -> Result<(), KinematicsError> {
        let Some(convention) = self.convention() else {
            debug!("ignoring optimization vector for an empty chain");
            return Ok(());
        };

        let mut supplied = values.iter().copied();
        let mut updated = Vec::with_capacity(self.num_parameters());
        for (idx, current) in self.scalars().enumerate() {
            let free = self.optimization_mask.get(idx).copied().unwrap_or(false);
            if free {
                let value = supplied
                    .next()
                    .ok_or(KinematicsError::OptimizationVectorExhausted {
                        supplied: values.len(),
                    })?;
                updated.push(value);
            } else {
                updated.push(current);
            }
        }

        let ignored = supplied.count();
        debug!(
            "applying {} optimization values ({} ignored)",
            values.len() - ignored,
            ignored
        );

        let links: Vec<Link> = Self::array_2_links(&updated, convention)?
            .into_iter()
            .zip(&self.links)
            .map(|(link, old)| link.with_pair(old.kinematic_pair()))
            .collect();
        self.set_links(links)
    }

    /// Local transform of every link at the given joint positions.
    ///
    /// `None` evaluates all links at zero. The transforms are not composed.
    ///
    /// # Errors
    ///
    /// [`KinematicsError::SequenceLength`] if `position` does not hold exactly
    /// [`Self::num_dof`] values.
    pub fn transforms(&self, position: Option<&[Real]>) -> Result<Vec<Mat4>, KinematicsError> {
        let zeros;
        let position = match position {
            Some(p) => {
                if !is_sequence_length_correct(p, self.num_dof()) {
                    return Err(KinematicsError::SequenceLength {
                        name: "position",
                        expected: self.num_dof(),
                        got: p.len(),
                    });
                }
                p
            }
            None => {
                zeros = vec![0.0; self.num_dof()];
                zeros.as_slice()
            }
        };

        Ok(self
            .links
            .iter()
            .zip(position)
            .map(|(link, &p)| link.transform(p))
            .collect())
    }

    fn scalars(&self) -> impl Iterator<Item = Real> + '_ {
        self.links.iter().flat_map(Link::iter)
    }
}

fn num_parameters(links: &[Link]) -> usize {
    links
        .iter()
        .map(|link| link.convention().params_per_link())
        .sum()
}
