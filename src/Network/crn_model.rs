//! # CRN Model
//!
//! In-memory representation of a stochastic chemical reaction network whose species are split
//! into a *slow* and a *fast* timescale.
//!
//! - **`Reaction`**: educt and product multisets (species label → stoichiometric coefficient),
//!   the symbolic name of the rate constant and the symbolic name of the scaling exponent.
//! - **`CRN`**: a named list of reactions, the slow/fast partition and the name of the
//!   system-size symbol `N`.
//!
//! Both are immutable once built: every later stage (connectivity, coupling matrix, generator)
//! reads them and produces new values. Sub-networks are new `CRN` values, never views.
//!
//! Absent species have coefficient 0 and zero coefficients are dropped on construction, so a
//! species is a *key* of a side exactly when it takes part in that side of the reaction.
use log::warn;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::LazyLock;
use thiserror::Error;

static SYMBOL_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("symbol name pattern is a valid regex")
});

/// error types for construction and loading of reaction networks
#[derive(Debug, Error)]
pub enum CrnError {
    #[error("species '{0}' is declared both slow and fast")]
    SpeciesInBothPartitions(String),
    #[error("species '{0}' is declared more than once")]
    DuplicateSpecies(String),
    #[error("negative coefficient {value} of species '{species}' in reaction {reaction}")]
    NegativeCoefficient {
        reaction: usize,
        species: String,
        value: i64,
    },
    #[error("coefficient {value} of species '{species}' in reaction {reaction} is too large")]
    InvalidCoefficient {
        reaction: usize,
        species: String,
        value: i64,
    },
    #[error("'{0}' is not a valid symbol name")]
    InvalidSymbol(String),
    #[error("species '{0}' is not a fast species of this network")]
    UnknownFastSpecies(String),
    #[error("invalid reaction table:\n{}", .0.join("\n"))]
    InvalidTable(Vec<String>),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// checks that a label can be used as the name of a symbolic variable
pub fn validate_symbol_name(name: &str) -> Result<(), CrnError> {
    if SYMBOL_NAME.is_match(name) {
        Ok(())
    } else {
        Err(CrnError::InvalidSymbol(name.to_string()))
    }
}

/// rate constants and scaling exponents may also be given as plain numbers
pub fn validate_parameter(text: &str) -> Result<(), CrnError> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(()),
        _ => validate_symbol_name(text),
    }
}

/// one reaction: educts --rate, scale--> products
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    educts: BTreeMap<String, u32>,
    products: BTreeMap<String, u32>,
    rate: String,
    scale: String,
}

impl Reaction {
    pub fn new(
        educts: BTreeMap<String, u32>,
        products: BTreeMap<String, u32>,
        rate: &str,
        scale: &str,
    ) -> Self {
        Self {
            educts: educts.into_iter().filter(|(_, c)| *c > 0).collect(),
            products: products.into_iter().filter(|(_, c)| *c > 0).collect(),
            rate: rate.to_string(),
            scale: scale.to_string(),
        }
    }

    /// shorthand used mostly by tests: `Reaction::from_pairs(&[("S", 1)], &[("F", 1)], "k1", "g1")`
    pub fn from_pairs(
        educts: &[(&str, u32)],
        products: &[(&str, u32)],
        rate: &str,
        scale: &str,
    ) -> Self {
        fn collect(pairs: &[(&str, u32)]) -> BTreeMap<String, u32> {
            let mut map = BTreeMap::new();
            for (species, coeff) in pairs {
                *map.entry(species.to_string()).or_insert(0) += *coeff;
            }
            map
        }
        Self::new(collect(educts), collect(products), rate, scale)
    }

    pub fn educts(&self) -> &BTreeMap<String, u32> {
        &self.educts
    }

    pub fn products(&self) -> &BTreeMap<String, u32> {
        &self.products
    }

    /// name of the rate constant symbol
    pub fn rate(&self) -> &str {
        &self.rate
    }

    /// name of the scaling exponent symbol
    pub fn scale(&self) -> &str {
        &self.scale
    }

    /// stoichiometric coefficient of `species` among the educts, 0 if absent
    pub fn educt_coeff(&self, species: &str) -> u32 {
        self.educts.get(species).copied().unwrap_or(0)
    }

    /// stoichiometric coefficient of `species` among the products, 0 if absent
    pub fn product_coeff(&self, species: &str) -> u32 {
        self.products.get(species).copied().unwrap_or(0)
    }

    /// product coefficient minus educt coefficient
    pub fn net_change(&self, species: &str) -> i64 {
        self.product_coeff(species) as i64 - self.educt_coeff(species) as i64
    }

    pub fn has_educt(&self, species: &str) -> bool {
        self.educts.contains_key(species)
    }

    pub fn has_product(&self, species: &str) -> bool {
        self.products.contains_key(species)
    }

    /// set of species labels on the educt side
    pub fn educt_set(&self) -> BTreeSet<String> {
        self.educts.keys().cloned().collect()
    }

    /// set of species labels on the product side
    pub fn product_set(&self) -> BTreeSet<String> {
        self.products.keys().cloned().collect()
    }

    /// every species label the reaction touches, educts first
    pub fn species(&self) -> impl Iterator<Item = &String> {
        self.educts
            .keys()
            .chain(self.products.keys().filter(|s| !self.educts.contains_key(*s)))
    }
}

/// chemical reaction network with a slow/fast partition of species
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CRN {
    name: String,
    natnum: String,
    slow_species: Vec<String>,
    fast_species: Vec<String>,
    reactions: Vec<Reaction>,
}

impl CRN {
    /// Builds a network and enforces the model invariants:
    /// - every species label is a valid identifier, rates and scalings are identifiers or numbers
    /// - no label is listed twice and no label is both slow and fast
    ///
    /// Species that occur in reactions but in neither partition are accepted with a warning;
    /// they never enter a slow monomial and never count as fast.
    pub fn new(
        name: &str,
        natnum: &str,
        slow_species: Vec<String>,
        fast_species: Vec<String>,
        reactions: Vec<Reaction>,
    ) -> Result<Self, CrnError> {
        validate_symbol_name(natnum)?;
        let mut seen: HashSet<&str> = HashSet::new();
        for species in slow_species.iter() {
            validate_symbol_name(species)?;
            if !seen.insert(species) {
                return Err(CrnError::DuplicateSpecies(species.clone()));
            }
        }
        let slow: HashSet<&str> = seen.clone();
        let mut seen_fast: HashSet<&str> = HashSet::new();
        for species in fast_species.iter() {
            validate_symbol_name(species)?;
            if slow.contains(species.as_str()) {
                return Err(CrnError::SpeciesInBothPartitions(species.clone()));
            }
            if !seen_fast.insert(species) {
                return Err(CrnError::DuplicateSpecies(species.clone()));
            }
        }
        for (i, reaction) in reactions.iter().enumerate() {
            validate_parameter(reaction.rate())?;
            validate_parameter(reaction.scale())?;
            for species in reaction.species() {
                if !slow.contains(species.as_str()) && !seen_fast.contains(species.as_str()) {
                    warn!(
                        "reaction {} of '{}' uses species '{}' which is neither slow nor fast",
                        i + 1,
                        name,
                        species
                    );
                }
            }
        }
        Ok(Self::derived(
            name,
            natnum,
            slow_species,
            fast_species,
            reactions,
        ))
    }

    /// constructor for values derived from an already validated network
    pub(crate) fn derived(
        name: &str,
        natnum: &str,
        slow_species: Vec<String>,
        fast_species: Vec<String>,
        reactions: Vec<Reaction>,
    ) -> Self {
        Self {
            name: name.to_string(),
            natnum: natnum.to_string(),
            slow_species,
            fast_species,
            reactions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// name of the system-size symbol N
    pub fn natnum(&self) -> &str {
        &self.natnum
    }

    pub fn slow_species(&self) -> &[String] {
        &self.slow_species
    }

    pub fn fast_species(&self) -> &[String] {
        &self.fast_species
    }

    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    pub fn is_slow(&self, species: &str) -> bool {
        self.slow_species.iter().any(|s| s == species)
    }

    pub fn is_fast(&self, species: &str) -> bool {
        self.fast_species.iter().any(|s| s == species)
    }

    /// educts of `reaction` restricted to the slow species of this network
    pub fn slow_educts(&self, reaction: &Reaction) -> BTreeMap<String, u32> {
        reaction
            .educts()
            .iter()
            .filter(|(species, _)| self.is_slow(species))
            .map(|(species, coeff)| (species.clone(), *coeff))
            .collect()
    }
}
