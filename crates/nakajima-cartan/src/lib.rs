//! # nakajima-cartan
//!
//! Cartan data for the Nakajima monomial engine.
//!
//! This crate provides:
//! - The [`CartanDatum`] contract consumed by the crystal containers
//! - Dense integer matrices for Cartan and commutation matrices
//! - A reference provider, [`CartanType`], for the finite families
//!   A through G, untwisted affine type A, and arbitrary generalized
//!   Cartan matrices
//! - A weight lattice realization in the basis of fundamental weights
//!
//! ## Labeling
//!
//! Finite types are labeled `1..=n` in Bourbaki order. Affine types are
//! labeled `0..=n` with `0` the affine node. Generalized Cartan matrices are
//! labeled `0..n` by row.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cartan_type;
pub mod datum;
pub mod error;
pub mod matrix;
pub mod weight;

pub use cartan_type::{CartanFamily, CartanKind, CartanType};
pub use datum::{CartanDatum, TypedWeight};
pub use error::CartanError;
pub use matrix::IntegerMatrix;
pub use weight::{Coroot, Weight, WeightLattice};
