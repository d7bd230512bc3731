use serde::{Deserialize, Serialize};

/// Selector of free parameters in a chain's full parameter vector.
///
/// `Uniform` is broadcast to the full vector length when assigned;
/// `Explicit` is stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptimizationMask {
    Uniform(bool),
    Explicit(Vec<bool>),
}

impl OptimizationMask {
    /// Resolve into per-scalar flags for a vector of `len` parameters.
    pub fn resolve(self, len: usize) -> Vec<bool> {
        match self {
            OptimizationMask::Uniform(flag) => vec![flag; len],
            OptimizationMask::Explicit(flags) => flags,
        }
    }
}

impl From<bool> for OptimizationMask {
    fn from(flag: bool) -> Self {
        OptimizationMask::Uniform(flag)
    }
}

impl From<Vec<bool>> for OptimizationMask {
    fn from(flags: Vec<bool>) -> Self {
        OptimizationMask::Explicit(flags)
    }
}

impl From<&[bool]> for OptimizationMask {
    fn from(flags: &[bool]) -> Self {
        OptimizationMask::Explicit(flags.to_vec())
    }
}

impl<const N: usize> From<[bool; N]> for OptimizationMask {
    fn from(flags: [bool; N]) -> Self {
        OptimizationMask::Explicit(flags.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_broadcasts() {
        assert_eq!(OptimizationMask::from(true).resolve(3), vec![true; 3]);
        assert!(OptimizationMask::from(false).resolve(0).is_empty());
    }

    #[test]
    fn explicit_ignores_len() {
        let mask = OptimizationMask::from([true, false]);
        assert_eq!(mask.resolve(8), vec![true, false]);
    }

    #[test]
    fn serde_accepts_bool_or_list() {
        let m: OptimizationMask = serde_json::from_str("true").unwrap();
        assert_eq!(m, OptimizationMask::Uniform(true));
        let m: OptimizationMask = serde_json::from_str("[false, true]").unwrap();
        assert_eq!(m, OptimizationMask::Explicit(vec![false, true]));
    }
}
