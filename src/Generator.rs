//! Symbolic approximation of the generator of the slow process of a slow/fast reaction network.
//! Fast species are averaged out: their balance is captured by the coupling matrix `M`, and
//! Cramer-style determinant ratios `det M′ / det M` correct the contribution of every reaction
//! that feeds a fast species.
//!
//! # Examples
//! ```
//! use SlowFastCRN::Network::crn_model::{CRN, Reaction};
//! let reactions = vec![
//!     Reaction::from_pairs(&[("S", 1)], &[("F", 1)], "k1", "g1"),
//!     Reaction::from_pairs(&[("F", 1)], &[], "k2", "g2"),
//!     Reaction::from_pairs(&[("F", 1)], &[("S", 1)], "k3", "g3"),
//! ];
//! let crn = CRN::new("toy", "N", vec!["S".to_string()], vec!["F".to_string()], reactions).unwrap();
//! let generator = crn.total_generator().unwrap();
//! println!("L = {}", generator);
//! ```

/// the narrow computer-algebra interface and its binding to RustedSciThe expressions
pub mod algebra;
/// scaled rates, slow monomials, the coupling matrix M and its column-replaced variants M′
pub mod coupling_matrix;
/// slow-only sum, slow/fast coupling sum and the total generator
pub mod assembler;

mod generator_tests;
#[cfg(test)]
mod test_eval;
