//! Integration tests for the optimization mask on realistic chains.

use robot_calibration_chain::{
    synthetic::{puma560_mdh, ParamNoise},
    KinematicChain,
};
use robot_calibration_core::{KinematicsError, LinkConvention, LinkModel};

/// Mask freeing the `a` and `d` entries of every link.
fn lengths_mask(num_links: usize) -> Vec<bool> {
    (0..num_links)
        .flat_map(|_| [false, true, false, true])
        .collect()
}

#[test]
fn puma_vector_roundtrip() {
    let params = puma560_mdh();
    let chain = KinematicChain::from_array(&params, LinkConvention::Mdh).unwrap();
    assert_eq!(chain.num_dof(), 6);
    assert_eq!(chain.vector().as_slice(), params.as_slice());
}

#[test]
fn lengths_only_update_leaves_angles_untouched() {
    let nominal = puma560_mdh();
    let mut chain = KinematicChain::from_array(&nominal, LinkConvention::Mdh).unwrap();
    chain.set_optimization_mask(lengths_mask(6));

    let free = chain.optimization_vector();
    assert_eq!(free.len(), 12);

    let noise = ParamNoise {
        seed: 7,
        max_abs: 1e-3,
    };
    let proposed = noise.perturb(free.as_slice());
    chain.apply_optimization_vector(&proposed).unwrap();

    let updated = chain.vector();
    for (idx, (&before, &after)) in nominal.iter().zip(updated.iter()).enumerate() {
        match idx % 4 {
            // alpha, theta
            0 | 2 => assert_eq!(before, after, "angle {idx} changed"),
            _ => assert!((before - after).abs() <= 1e-3, "length {idx} moved too far"),
        }
    }
    assert_eq!(chain.optimization_vector().as_slice(), proposed.as_slice());
}

#[test]
fn transforms_follow_applied_parameters() {
    let mut chain = KinematicChain::from_array(&puma560_mdh(), LinkConvention::Mdh).unwrap();
    let q = [0.1, -0.4, 0.9, 0.0, 0.3, -1.2];
    let before = chain.transforms(Some(&q)).unwrap();

    // Free only `d` of link 1.
    let mut mask = vec![false; chain.num_parameters()];
    mask[7] = true;
    chain.set_optimization_mask(mask);
    chain.apply_optimization_vector(&[0.25]).unwrap();

    let after = chain.transforms(Some(&q)).unwrap();
    assert_eq!(after.len(), 6);
    for (i, (b, a)) in before.iter().zip(&after).enumerate() {
        if i == 1 {
            assert!((b - a).norm() > 1e-3);
            assert_eq!(*a, chain.links()[1].transform(q[1]));
        } else {
            assert_eq!(b, a);
        }
    }
}

#[test]
fn repeated_read_apply_is_stable() {
    let mut chain = KinematicChain::from_array(&puma560_mdh(), LinkConvention::Mdh).unwrap();
    chain.set_optimization_mask(true);
    let original = chain.clone();

    for _ in 0..3 {
        let x = chain.optimization_vector();
        chain.apply_optimization_vector(x.as_slice()).unwrap();
    }
    assert_eq!(chain, original);
}

#[test]
fn wrong_position_length_produces_no_transforms() {
    let chain = KinematicChain::from_array(&puma560_mdh(), LinkConvention::Mdh).unwrap();
    let result = chain.transforms(Some(&[0.0; 5]));
    assert!(matches!(
        result,
        Err(KinematicsError::SequenceLength {
            expected: 6,
            got: 5,
            ..
        })
    ));
}
