//! Data model of a stochastic chemical reaction network with slow and fast species,
//! the predicates classifying reactions relative to the fast species and the connectivity
//! analysis that splits a network into independent sub-networks.
//!
//! # Examples
//! ```
//! use SlowFastCRN::Network::crn_model::{CRN, Reaction};
//! let reactions = vec![
//!     Reaction::from_pairs(&[("S", 1)], &[("F", 1)], "k1", "g1"),
//!     Reaction::from_pairs(&[("F", 1)], &[("S", 1)], "k2", "g2"),
//! ];
//! let crn = CRN::new("toy", "N", vec!["S".to_string()], vec!["F".to_string()], reactions).unwrap();
//! assert!(crn.is_connected());
//! assert_eq!(crn.component_count(), 1);
//! assert_eq!(crn.sub_crns()[0].name(), "toy_sub_1");
//! ```

pub mod crn_model;
/// key-presence predicates: slow-only, produces, consumes, consumes without producing,
/// consumes and produces
pub mod classifier;
/// graph over educt/product species sets, connected components, sub-network extraction and
/// the fast-species separation check
pub mod connectivity;

mod crn_model_tests;
