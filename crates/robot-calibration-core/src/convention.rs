use serde::{Deserialize, Serialize};

use crate::DhParams;
use std::fmt;

/// Parameterization scheme used by a link.
///
/// Each convention fixes how many scalars one link consumes in the flattened
/// parameter vector of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkConvention {
    /// Modified (Craig) Denavit–Hartenberg: `RotX(alpha) TransX(a) RotZ(theta) TransZ(d)`.
    Mdh,
    /// Standard Denavit–Hartenberg: `RotZ(theta) TransZ(d) TransX(a) RotX(alpha)`.
    Dh,
}

impl LinkConvention {
    /// Number of scalar parameters one link of this convention consumes.
    pub const fn params_per_link(self) -> usize {
        match self {
            LinkConvention::Mdh => DhParams::DIM,
            LinkConvention::Dh => DhParams::DIM,
        }
    }
}

impl fmt::Display for LinkConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkConvention::Mdh => f.write_str("mdh"),
            LinkConvention::Dh => f.write_str("dh"),
        }
    }
}

/// Kind of joint connecting a link to its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KinematicPair {
    /// Joint position is an angle added to `theta`.
    #[default]
    Revolute,
    /// Joint position is a distance added to `d`.
    Prismatic,
}
