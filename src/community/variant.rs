//! Modularity variants for signed networks.
//!
//! A signed network contributes two modularity terms, one from its positive
//! edges and one from its negative edges. The variant fixes how the two are
//! weighted against each other:
//!
//! ```text
//! Q = d0 * Q⁺ - d1 * Q⁻
//! ```
//!
//! | Variant          | d0            | d1            |
//! |------------------|---------------|---------------|
//! | `standard`       | 1/s0          | 1/(s0 + s1)   |
//! | `positive-only`  | 1/s0          | 0             |
//! | `simple`         | 1/s0          | 1/s1          |
//! | `gja`            | 1/(s0 + s1)   | 1/(s0 + s1)   |
//! | `negative-only`  | 0             | 1/s1          |
//!
//! where s0 and s1 are the total positive and total (absolute) negative
//! weight.
//!
//! ## References
//!
//! Rubinov & Sporns (2011). "Weight-conserving characterization of complex
//! functional brain networks." NeuroImage 56(4).
//!
//! Gómez, Jensen & Arenas (2009). "Analysis of community structure in
//! networks of correlated data." Physical Review E 80, 016114.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// How positive and negative contributions are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModularityVariant {
    /// Positive term scaled by s0, negative term down-weighted by s0 + s1.
    #[default]
    Standard,
    /// Negative edges are ignored.
    PositiveOnly,
    /// Each term scaled by its own total.
    Simple,
    /// Both terms scaled by s0 + s1 (Gómez, Jensen & Arenas).
    Gja,
    /// Positive edges are ignored.
    NegativeOnly,
}

/// Scaling constants for one run.
///
/// `s0`/`s1` are never zero: an empty sign is normalized to 1 and its
/// coefficient forced to 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling {
    /// Coefficient of the positive term.
    pub d0: f64,
    /// Coefficient of the negative term.
    pub d1: f64,
    /// Total positive weight (null-model normalizer).
    pub s0: f64,
    /// Total negative weight (null-model normalizer).
    pub s1: f64,
}

impl ModularityVariant {
    /// All variants, in declaration order.
    pub const ALL: [ModularityVariant; 5] = [
        ModularityVariant::Standard,
        ModularityVariant::PositiveOnly,
        ModularityVariant::Simple,
        ModularityVariant::Gja,
        ModularityVariant::NegativeOnly,
    ];

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            ModularityVariant::Standard => "standard",
            ModularityVariant::PositiveOnly => "positive-only",
            ModularityVariant::Simple => "simple",
            ModularityVariant::Gja => "gja",
            ModularityVariant::NegativeOnly => "negative-only",
        }
    }

    /// Compute the scaling constants from the total positive weight `s0`
    /// and total negative weight `s1`.
    pub fn scaling(self, s0: f64, s1: f64) -> Scaling {
        let inv = |x: f64| if x > 0.0 { 1.0 / x } else { 0.0 };
        let (d0, d1) = match self {
            ModularityVariant::Simple => (inv(s0), inv(s1)),
            ModularityVariant::Gja => (inv(s0 + s1), inv(s0 + s1)),
            ModularityVariant::Standard => (inv(s0), inv(s0 + s1)),
            ModularityVariant::PositiveOnly => (inv(s0), 0.0),
            ModularityVariant::NegativeOnly => (0.0, inv(s1)),
        };

        let (s0, d0) = if s0 == 0.0 { (1.0, 0.0) } else { (s0, d0) };
        let (s1, d1) = if s1 == 0.0 { (1.0, 0.0) } else { (s1, d1) };
        Scaling { d0, d1, s0, s1 }
    }
}

impl fmt::Display for ModularityVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModularityVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" | "sta" => Ok(ModularityVariant::Standard),
            "positive-only" | "pos" => Ok(ModularityVariant::PositiveOnly),
            "simple" | "smp" => Ok(ModularityVariant::Simple),
            "gja" => Ok(ModularityVariant::Gja),
            "negative-only" | "neg" => Ok(ModularityVariant::NegativeOnly),
            other => Err(Error::InvalidConfiguration {
                qtype: other.to_string(),
            }),
        }
    }
}
