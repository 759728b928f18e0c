//! Structured description of a reaction network as it is stored in JSON:
//! ```json
//! {
//!   "name": "enzyme",
//!   "natnum": "N",
//!   "species": { "slow": ["S", "P"], "fast": ["E", "C"] },
//!   "reactions": [
//!     { "educts": { "S": 1, "E": 1 }, "products": { "C": 1 }, "rate": "k1", "scale": "g1" },
//!     { "educts": { "C": 1 }, "products": { "P": 1, "E": 1 }, "rate": "k2", "scale": "g2" }
//!   ]
//! }
//! ```
//! `load` turns a document into a validated `CRN`, `to_document` goes the other way and is used
//! to write sub-networks back to disk.
use crate::Network::crn_model::{CRN, CrnError, Reaction};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_name() -> String {
    "crn".to_string()
}

fn default_natnum() -> String {
    "N".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpeciesDocument {
    #[serde(default)]
    pub slow: Vec<String>,
    #[serde(default)]
    pub fast: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionDocument {
    #[serde(default)]
    pub educts: BTreeMap<String, i64>,
    #[serde(default)]
    pub products: BTreeMap<String, i64>,
    pub rate: String,
    pub scale: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrnDocument {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_natnum")]
    pub natnum: String,
    #[serde(default)]
    pub species: SpeciesDocument,
    #[serde(default)]
    pub reactions: Vec<ReactionDocument>,
}

fn coefficients(
    side: &BTreeMap<String, i64>,
    reaction: usize,
) -> Result<BTreeMap<String, u32>, CrnError> {
    side.iter()
        .map(|(species, value)| {
            if *value < 0 {
                return Err(CrnError::NegativeCoefficient {
                    reaction,
                    species: species.clone(),
                    value: *value,
                });
            }
            u32::try_from(*value)
                .map(|coeff| (species.clone(), coeff))
                .map_err(|_| CrnError::InvalidCoefficient {
                    reaction,
                    species: species.clone(),
                    value: *value,
                })
        })
        .collect()
}

/// builds a validated network from its structured description
pub fn load(document: &CrnDocument) -> Result<CRN, CrnError> {
    let reactions = document
        .reactions
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Ok(Reaction::new(
                coefficients(&r.educts, i + 1)?,
                coefficients(&r.products, i + 1)?,
                &r.rate,
                &r.scale,
            ))
        })
        .collect::<Result<Vec<Reaction>, CrnError>>()?;
    CRN::new(
        &document.name,
        &document.natnum,
        document.species.slow.clone(),
        document.species.fast.clone(),
        reactions,
    )
}

/// structured description of a network, only non-zero coefficients are written
pub fn to_document(crn: &CRN) -> CrnDocument {
    let side = |map: &BTreeMap<String, u32>| -> BTreeMap<String, i64> {
        map.iter().map(|(s, c)| (s.clone(), *c as i64)).collect()
    };
    CrnDocument {
        name: crn.name().to_string(),
        natnum: crn.natnum().to_string(),
        species: SpeciesDocument {
            slow: crn.slow_species().to_vec(),
            fast: crn.fast_species().to_vec(),
        },
        reactions: crn
            .reactions()
            .iter()
            .map(|r| ReactionDocument {
                educts: side(r.educts()),
                products: side(r.products()),
                rate: r.rate().to_string(),
                scale: r.scale().to_string(),
            })
            .collect(),
    }
}

impl CRN {
    pub fn from_document(document: &CrnDocument) -> Result<CRN, CrnError> {
        load(document)
    }

    pub fn to_document(&self) -> CrnDocument {
        to_document(self)
    }
}
