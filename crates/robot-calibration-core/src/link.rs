//! Rigid-body link models.
//!
//! A [`Link`] is an immutable value holding four Denavit–Hartenberg style
//! parameters, the convention they are interpreted under, and the kind of
//! joint that drives it. Chains never edit a link in place; they replace
//! whole link sequences.

use serde::{Deserialize, Serialize};

use crate::{rot_x, rot_z, trans_x, trans_z, KinematicPair, LinkConvention, Mat4, Real};

/// Four-parameter link geometry, stored as `[alpha, a, theta, d]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DhParams {
    /// Twist angle between consecutive joint axes (rad).
    pub alpha: Real,
    /// Common normal length between consecutive joint axes.
    pub a: Real,
    /// Joint angle offset (rad).
    pub theta: Real,
    /// Link offset along the joint axis.
    pub d: Real,
}

impl DhParams {
    pub const DIM: usize = 4;

    pub const fn new(alpha: Real, a: Real, theta: Real, d: Real) -> Self {
        Self { alpha, a, theta, d }
    }

    /// Parameters in storage order `[alpha, a, theta, d]`.
    pub const fn to_array(&self) -> [Real; 4] {
        [self.alpha, self.a, self.theta, self.d]
    }

    /// Build from a slice in storage order.
    ///
    /// Returns `None` unless `v.len() == DhParams::DIM`.
    pub fn from_slice(v: &[Real]) -> Option<Self> {
        match *v {
            [alpha, a, theta, d] => Some(Self { alpha, a, theta, d }),
            _ => None,
        }
    }
}

/// Capability every link model exposes to a kinematic chain.
pub trait LinkModel {
    /// Convention the parameters are interpreted under.
    fn convention(&self) -> LinkConvention;

    /// Joint kind driving this link.
    fn kinematic_pair(&self) -> KinematicPair;

    /// Parameter vector in storage order.
    fn parameters(&self) -> [Real; 4];

    /// Parameters after applying the joint `position` to the joint variable.
    fn displace(&self, position: Real) -> DhParams;

    /// Local homogeneous transform at the given joint `position`.
    fn transform(&self, position: Real) -> Mat4;
}

/// A single rigid-body segment of a serial manipulator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Link {
    convention: LinkConvention,
    pair: KinematicPair,
    params: DhParams,
}

impl Link {
    pub const fn new(convention: LinkConvention, pair: KinematicPair, params: DhParams) -> Self {
        Self {
            convention,
            pair,
            params,
        }
    }

    pub const fn revolute_mdh(alpha: Real, a: Real, theta: Real, d: Real) -> Self {
        Self::new(
            LinkConvention::Mdh,
            KinematicPair::Revolute,
            DhParams::new(alpha, a, theta, d),
        )
    }

    pub const fn prismatic_mdh(alpha: Real, a: Real, theta: Real, d: Real) -> Self {
        Self::new(
            LinkConvention::Mdh,
            KinematicPair::Prismatic,
            DhParams::new(alpha, a, theta, d),
        )
    }

    pub const fn revolute_dh(alpha: Real, a: Real, theta: Real, d: Real) -> Self {
        Self::new(
            LinkConvention::Dh,
            KinematicPair::Revolute,
            DhParams::new(alpha, a, theta, d),
        )
    }

    /// Same geometry and convention, driven by a different joint kind.
    pub const fn with_pair(self, pair: KinematicPair) -> Self {
        Self { pair, ..self }
    }

    pub const fn params(&self) -> &DhParams {
        &self.params
    }

    /// Iterate over the link's scalars in storage order.
    pub fn iter(&self) -> std::array::IntoIter<Real, 4> {
        self.parameters().into_iter()
    }
}

impl<'a> IntoIterator for &'a Link {
    type Item = Real;
    type IntoIter = std::array::IntoIter<Real, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl LinkModel for Link {
    fn convention(&self) -> LinkConvention {
        self.convention
    }

    fn kinematic_pair(&self) -> KinematicPair {
        self.pair
    }

    fn parameters(&self) -> [Real; 4] {
        self.params.to_array()
    }

    fn displace(&self, position: Real) -> DhParams {
        let mut p = self.params;
        match self.pair {
            KinematicPair::Revolute => p.theta += position,
            KinematicPair::Prismatic => p.d += position,
        }
        p
    }

    fn transform(&self, position: Real) -> Mat4 {
        let p = self.displace(position);
        match self.convention {
            LinkConvention::Mdh => mdh_transform(&p),
            LinkConvention::Dh => rot_z(p.theta) * trans_z(p.d) * trans_x(p.a) * rot_x(p.alpha),
        }
    }
}

/// Closed form of `RotX(alpha) TransX(a) RotZ(theta) TransZ(d)`.
fn mdh_transform(p: &DhParams) -> Mat4 {
    let (sa, ca) = p.alpha.sin_cos();
    let (st, ct) = p.theta.sin_cos();
    Mat4::new(
        ct, -st, 0.0, p.a, //
        st * ca, ct * ca, -sa, -p.d * sa, //
        st * sa, ct * sa, ca, p.d * ca, //
        0.0, 0.0, 0.0, 1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn mdh_closed_form_matches_composition() {
        let link = Link::revolute_mdh(0.3, 0.25, -0.4, 0.1);
        let p = link.displace(0.2);
        let composed = rot_x(p.alpha) * trans_x(p.a) * rot_z(p.theta) * trans_z(p.d);
        assert!((link.transform(0.2) - composed).norm() < 1e-12);
    }

    #[test]
    fn revolute_displaces_theta() {
        let link = Link::revolute_mdh(0.0, 1.0, 0.5, 2.0);
        let p = link.displace(0.25);
        assert!((p.theta - 0.75).abs() < 1e-12);
        assert!((p.d - 2.0).abs() < 1e-12);
    }

    #[test]
    fn prismatic_displaces_d() {
        let link = Link::prismatic_mdh(0.0, 1.0, 0.5, 2.0);
        let p = link.displace(0.25);
        assert!((p.theta - 0.5).abs() < 1e-12);
        assert!((p.d - 2.25).abs() < 1e-12);

        let t = link.transform(0.25);
        assert!((t[(2, 3)] - 2.25).abs() < 1e-12);
    }

    #[test]
    fn dh_quarter_turn() {
        // a along the rotated x axis ends up on +y.
        let link = Link::revolute_dh(0.0, 1.0, 0.0, 0.0);
        let t = link.transform(FRAC_PI_2);
        assert!(t[(0, 3)].abs() < 1e-12);
        assert!((t[(1, 3)] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_link_is_identity() {
        let link = Link::revolute_mdh(0.0, 0.0, 0.0, 0.0);
        assert!((link.transform(0.0) - Mat4::identity()).norm() < 1e-12);
    }

    #[test]
    fn iterates_in_storage_order() {
        let link = Link::revolute_mdh(1.0, 2.0, 3.0, 4.0);
        let values: Vec<Real> = link.iter().collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!((&link).into_iter().count(), DhParams::DIM);
    }

    #[test]
    fn from_slice_requires_exact_length() {
        assert!(DhParams::from_slice(&[1.0, 2.0, 3.0]).is_none());
        assert_eq!(
            DhParams::from_slice(&[1.0, 2.0, 3.0, 4.0]),
            Some(DhParams::new(1.0, 2.0, 3.0, 4.0))
        );
    }

    #[test]
    fn with_pair_keeps_geometry() {
        let link = Link::revolute_dh(0.1, 0.2, 0.3, 0.4).with_pair(KinematicPair::Prismatic);
        assert_eq!(link.kinematic_pair(), KinematicPair::Prismatic);
        assert_eq!(link.convention(), LinkConvention::Dh);
        assert_eq!(link.parameters(), [0.1, 0.2, 0.3, 0.4]);
    }
}
