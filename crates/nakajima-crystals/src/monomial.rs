//! Modified Nakajima monomials.
//!
//! A monomial is either a product of `Y_{i,k}` variables or a product of the
//! factors `A_{i,k}`, tagged by [`Flavor`]. The same crystal element can be
//! written either way; see [`crate::MonomialAlgebra::to_y`].

use std::fmt;

use nakajima_integers::Integer;
use num_traits::{One, Zero};

use crate::error::CrystalError;
use crate::exponents::{ExponentMap, Key, Level};

/// Which variables a monomial is written in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// Products of `Y_{i,k}`.
    #[default]
    Y,
    /// Products of `A_{i,k}`.
    A,
}

impl Flavor {
    /// The variable letter.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Y => 'Y',
            Self::A => 'A',
        }
    }
}

/// An immutable monomial in `Y` or `A` variables.
///
/// Equality and hashing depend on the flavor and the set of
/// `(key, exponent)` entries only.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Monomial {
    flavor: Flavor,
    exponents: ExponentMap,
}

impl Monomial {
    /// The empty product, rendered `1`.
    #[must_use]
    pub fn identity(flavor: Flavor) -> Self {
        Self {
            flavor,
            exponents: ExponentMap::new(),
        }
    }

    pub(crate) fn from_exponents(flavor: Flavor, exponents: ExponentMap) -> Self {
        Self { flavor, exponents }
    }

    /// Builds a monomial from `{(i, k): exponent}` entries.
    ///
    /// Repeated keys accumulate and zero exponents are dropped. Index
    /// membership is checked by the crystal containers, which know the
    /// index set.
    ///
    /// # Errors
    ///
    /// Returns [`CrystalError::NegativeLevel`] if some `k < 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use nakajima_crystals::{Flavor, Monomial};
    ///
    /// let m = Monomial::from_map(Flavor::Y, [((1, 0), -1), ((1, 1), -1), ((2, 0), 1)]).unwrap();
    /// assert_eq!(m.to_string(), "Y(1,0)^-1 Y(1,1)^-1 Y(2,0)");
    /// ```
    pub fn from_map<I, E>(flavor: Flavor, entries: I) -> Result<Self, CrystalError>
    where
        I: IntoIterator<Item = (Key, E)>,
        E: Into<Integer>,
    {
        let mut exponents = ExponentMap::new();
        for ((index, level), exponent) in entries {
            if level < 0 {
                return Err(CrystalError::NegativeLevel { index, level });
            }
            exponents.accumulate((index, level), &exponent.into());
        }
        Ok(Self { flavor, exponents })
    }

    /// Returns the flavor.
    #[must_use]
    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Returns the exponent map.
    #[must_use]
    pub fn exponents(&self) -> &ExponentMap {
        &self.exponents
    }

    /// Returns the exponent of `(index, level)`, zero if absent.
    #[must_use]
    pub fn exponent(&self, index: usize, level: Level) -> Integer {
        self.exponents
            .get(index, level)
            .cloned()
            .unwrap_or_else(Integer::zero)
    }

    /// Returns true for the empty product.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.exponents.is_empty()
    }

    /// The indices mentioned by this monomial, ascending and deduplicated.
    #[must_use]
    pub fn indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.exponents.iter().map(|(&(i, _), _)| i).collect();
        indices.sort_unstable();
        indices.dedup();
        indices
    }

    /// LaTeX markup, e.g. `Y_{0,0}^{-1} Y_{1,1}^{2} Y_{2,0} `.
    ///
    /// Every factor is followed by a space; the identity is
    /// `\boldsymbol{1}`.
    #[must_use]
    pub fn to_latex(&self) -> String {
        if self.is_identity() {
            return "\\boldsymbol{1}".to_string();
        }
        let symbol = self.flavor.symbol();
        let mut out = String::new();
        for ((i, k), e) in self.exponents.sorted() {
            out.push_str(&format!("{symbol}_{{{i},{k}}}"));
            if !e.is_one() {
                out.push_str(&format!("^{{{e}}}"));
            }
            out.push(' ');
        }
        out
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return write!(f, "1");
        }
        let symbol = self.flavor.symbol();
        for (n, ((i, k), e)) in self.exponents.sorted().into_iter().enumerate() {
            if n > 0 {
                write!(f, " ")?;
            }
            write!(f, "{symbol}({i},{k})")?;
            if !e.is_one() {
                write!(f, "^{e}")?;
            }
        }
        Ok(())
    }
}
