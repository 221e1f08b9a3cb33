//! # Nakajima
//!
//! Crystals of modified Nakajima monomials for symmetrizable Kac-Moody
//! algebras.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: exponents, weights and pairings never overflow
//! - **Cartan Data**: finite types A-G, affine `A_n^(1)`, or any generalized
//!   Cartan matrix through the `CartanDatum` trait
//! - **Two Realizations**: `B(infinity)` and `B(Lambda)` in Y-monomials,
//!   `B(infinity)` also in A-monomials
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use nakajima::prelude::*;
//!
//! let b4: CartanType = "B4".parse().unwrap();
//! let crystal = InfinityCrystal::new(Arc::new(b4), None, Flavor::Y).unwrap();
//! let one = crystal.module_generators()[0].clone();
//! let m = crystal.f_string(&one, &[1, 3, 4]).unwrap().unwrap();
//! assert_eq!(crystal.e_string(&m, &[4, 3, 1]).unwrap(), Some(one));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use nakajima_cartan as cartan;
pub use nakajima_crystals as crystals;
pub use nakajima_integers as integers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use nakajima_cartan::{CartanDatum, CartanFamily, CartanKind, CartanType, TypedWeight, Weight};
    pub use nakajima_crystals::{
        Cardinality, CommutationMatrix, Crystal, CrystalConfig, CrystalError, CrystalRegistry, Flavor,
        HighestWeightCrystal, InfinityCrystal, Monomial,
    };
    pub use nakajima_integers::Integer;
}
