//! # nakajima-crystals
//!
//! Crystals of modified Nakajima monomials.
//!
//! This crate provides:
//! - Sparse Y- and A-monomials with canonical text and LaTeX rendering
//! - The crystal operators `e_i`, `f_i` with `weight`, `phi_i`, `epsilon_i`
//! - `B(infinity)` in either flavor and `B(Lambda)` for dominant `Lambda`
//! - A construct-once [`CrystalRegistry`] of shared containers
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use nakajima_cartan::{CartanFamily, CartanType};
//! use nakajima_crystals::{Crystal, Flavor, InfinityCrystal};
//!
//! let a2 = Arc::new(CartanType::finite(CartanFamily::A, 2).unwrap());
//! let crystal = InfinityCrystal::new(a2, None, Flavor::Y).unwrap();
//! let one = crystal.module_generators()[0].clone();
//! let m = crystal.f(&one, 1).unwrap().unwrap();
//! assert_eq!(m.to_string(), "Y(1,0)^-1 Y(1,1)^-1 Y(2,0)");
//! assert_eq!(crystal.e(&m, 1).unwrap(), Some(one));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algebra;
pub mod commutation;
pub mod config;
pub mod crystal;
pub mod error;
pub mod exponents;
pub mod highest_weight;
pub mod infinity;
pub mod monomial;
mod partial_sums;
pub mod registry;

#[cfg(test)]
mod proptests;

pub use algebra::MonomialAlgebra;
pub use commutation::CommutationMatrix;
pub use config::CrystalConfig;
pub use crystal::{Cardinality, Crystal, Neighbours};
pub use error::{CommutationError, CrystalError};
pub use exponents::{ExponentMap, Key, Level};
pub use highest_weight::HighestWeightCrystal;
pub use infinity::InfinityCrystal;
pub use monomial::{Flavor, Monomial};
pub use registry::CrystalRegistry;
