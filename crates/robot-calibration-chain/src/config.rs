//! Serializable chain descriptions.
//!
//! A [`ChainConfig`] is the JSON-friendly form of a [`KinematicChain`]:
//!
//! ```json
//! {
//!   "convention": "mdh",
//!   "links": [
//!     { "alpha": 0.0, "a": 0.0, "theta": 0.0, "d": 0.0 },
//!     { "pair": "prismatic", "alpha": -1.5708, "a": 0.0, "theta": 0.0, "d": 0.2 }
//!   ],
//!   "optimization_mask": true
//! }
//! ```

use anyhow::{Context, Result};
use robot_calibration_core::{DhParams, KinematicPair, KinematicsError, Link, LinkConvention, LinkModel};
use serde::{Deserialize, Serialize};

use crate::{KinematicChain, OptimizationMask};

/// One link entry of a [`ChainConfig`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkConfig {
    #[serde(default)]
    pub pair: KinematicPair,
    #[serde(flatten)]
    pub params: DhParams,
}

/// Serializable description of a kinematic chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Convention applied to every link.
    pub convention: LinkConvention,
    /// Links in base-to-tip order.
    pub links: Vec<LinkConfig>,
    /// Optional free-parameter selection; all parameters are fixed when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization_mask: Option<OptimizationMask>,
}

impl ChainConfig {
    /// Build the runtime chain described by this config.
    pub fn build(&self) -> Result<KinematicChain, KinematicsError> {
        let links = self
            .links
            .iter()
            .map(|l| Link::new(self.convention, l.pair, l.params))
            .collect();
        let mut chain = KinematicChain::new(links)?;
        if let Some(mask) = &self.optimization_mask {
            chain.set_optimization_mask(mask.clone());
        }
        Ok(chain)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse kinematic chain config")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize kinematic chain config")
    }
}

impl KinematicChain {
    /// Describe this chain as a [`ChainConfig`].
    ///
    /// Returns `None` for an empty chain, which has no convention to record.
    pub fn to_config(&self) -> Option<ChainConfig> {
        let convention = self.convention()?;
        let links = self
            .links()
            .iter()
            .map(|l| LinkConfig {
                pair: l.kinematic_pair(),
                params: *l.params(),
            })
            .collect();
        Some(ChainConfig {
            convention,
            links,
            optimization_mask: Some(OptimizationMask::Explicit(
                self.optimization_mask().to_vec(),
            )),
        })
    }
}
