//! # nakajima-integers
//!
//! Arbitrary precision integers for the Nakajima monomial engine.
//!
//! Every exponent, Cartan matrix entry, weight coefficient and pairing value
//! in the workspace is an [`Integer`]. The type wraps `dashu` so that repeated
//! operator application can never overflow:
//! - Small values stay inline in a machine word
//! - Large values move to the heap transparently

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
