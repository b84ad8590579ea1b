//! Krippendorff's alpha for nominal data.
//!
//! `alpha = 1 - D_o / D_e`, computed from the coincidence matrix of all
//! pairable values. With `o_ck` the coincidences, `n_c` the marginals and `n`
//! the number of pairable values:
//!
//! ```text
//! alpha = 1 - (n - 1) * sum_{c != k} o_ck / sum_{c != k} n_c * n_k
//! ```
//!
//! Units coded by fewer than two raters are not pairable and are ignored.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// An alpha coefficient, or the marker for a degenerate input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Alpha {
    Value(f64),
    /// Fewer than two pairable values, or no variation at all.
    Undefined,
}

impl Alpha {
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Undefined => None,
        }
    }

    #[must_use]
    pub const fn is_defined(self) -> bool {
        matches!(self, Self::Value(_))
    }
}

/// Floats always carry a decimal point (`1.0`, `-0.25`); undefined is `nan`.
impl fmt::Display for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v:?}"),
            Self::Undefined => f.write_str("nan"),
        }
    }
}

/// Nominal alpha over `reliability_data[rater][unit]`; `None` is a missing value.
///
/// Raters may supply different numbers of units; absent trailing units count
/// as missing.
#[must_use]
pub fn nominal_alpha(reliability_data: &[Vec<Option<u32>>]) -> Alpha {
    let units = reliability_data.iter().map(Vec::len).max().unwrap_or(0);

    let mut marginals: BTreeMap<u32, f64> = BTreeMap::new();
    let mut disagreement = 0.0;
    let mut values = Vec::with_capacity(reliability_data.len());

    for unit in 0..units {
        values.clear();
        values.extend(
            reliability_data
                .iter()
                .filter_map(|rater| rater.get(unit).copied().flatten()),
        );
        let pairable = values.len();
        if pairable < 2 {
            continue;
        }

        let weight = 1.0 / (pairable - 1) as f64;
        for (i, c) in values.iter().enumerate() {
            *marginals.entry(*c).or_default() += 1.0;
            for (j, k) in values.iter().enumerate() {
                if i != j && c != k {
                    disagreement += weight;
                }
            }
        }
    }

    let n: f64 = marginals.values().sum();
    let expected = n.mul_add(n, -marginals.values().map(|nc| nc * nc).sum::<f64>());
    if n <= 1.0 || expected <= 0.0 {
        return Alpha::Undefined;
    }

    Alpha::Value(1.0 - (n - 1.0) * disagreement / expected)
}

/// Convenience for two complete rater columns of 0/1 flags.
#[must_use]
pub fn nominal_alpha_pairs(coder1: &[u32], coder2: &[u32]) -> Alpha {
    let lift = |values: &[u32]| values.iter().copied().map(Some).collect::<Vec<_>>();
    nominal_alpha(&[lift(coder1), lift(coder2)])
}
