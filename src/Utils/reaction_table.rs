//! Raw reaction table, the hand-edited form of a network.
//!
//! A blank table is created with a fixed number of reactions and slow species `S1..Sn` and fast
//! species `E1..Em`. Every coefficient starts as an empty string so the user only fills in what
//! takes part in a reaction. `validate` lists everything that is wrong in one go, `fix_values`
//! turns the filled-in table into a canonical one and `to_document` produces the structured
//! network description that the rest of the crate works with.
use super::crn_document::{CrnDocument, ReactionDocument, SpeciesDocument};
use crate::Network::crn_model::CrnError;
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableReaction {
    pub index: usize,
    pub educts: BTreeMap<String, Value>,
    pub products: BTreeMap<String, Value>,
    pub rate_unscaled: Value,
    pub scaling: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionTable {
    pub reactions_count: usize,
    pub slow_species_count: usize,
    pub fast_species_count: usize,
    pub reactions: Vec<TableReaction>,
}

pub fn slow_label(i: usize) -> String {
    format!("S{}", i)
}

pub fn fast_label(i: usize) -> String {
    format!("E{}", i)
}

fn is_slow_key(key: &str) -> bool {
    key.starts_with('S')
}

fn is_fast_key(key: &str) -> bool {
    key.starts_with('E')
}

fn is_digit_string(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// `""`, a digit string or a non-negative integer
fn valid_slow_value(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty() || is_digit_string(s),
        Value::Number(n) => n.is_u64(),
        _ => false,
    }
}

/// `""`, 0, 1, "0" or "1"
fn valid_fast_value(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty() || s == "0" || s == "1",
        Value::Number(n) => matches!(n.as_u64(), Some(0) | Some(1)),
        _ => false,
    }
}

fn is_one(value: &Value) -> bool {
    match value {
        Value::String(s) => s == "1",
        Value::Number(n) => n.as_u64() == Some(1),
        _ => false,
    }
}

fn check_side(
    side: &BTreeMap<String, Value>,
    side_name: &str,
    index: usize,
    errors: &mut Vec<String>,
) {
    for (key, value) in side.iter().filter(|(k, _)| is_slow_key(k)) {
        if !valid_slow_value(value) {
            errors.push(format!(
                "Invalid value in {}[{}] for reaction {}: '{}'. Allowed values: '', 'x' (where x >= 0), or natural number.",
                side_name, key, index, value
            ));
        }
    }
    let mut ones = 0;
    for (key, value) in side.iter().filter(|(k, _)| is_fast_key(k)) {
        if !valid_fast_value(value) {
            errors.push(format!(
                "Invalid value in {}[{}] for reaction {}: '{}'. Allowed values: '', '0', '1'.",
                side_name, key, index, value
            ));
        }
        if is_one(value) {
            ones += 1;
            if ones > 1 {
                errors.push(format!(
                    "More than one '1' found in {}[{}] for reaction {}. Only one fast species per side is allowed.",
                    side_name, key, index
                ));
            }
        }
    }
}

/// canonical coefficient: "" -> 0, "12" -> 12, 2.7 -> 2, anything else unchanged
fn fixed_coefficient(value: &Value) -> Value {
    match value {
        Value::String(s) if s.is_empty() => Value::from(0),
        Value::String(s) if is_digit_string(s) => match s.parse::<u64>() {
            Ok(n) => Value::from(n),
            Err(_) => value.clone(),
        },
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) => Value::from(f.trunc() as i64),
            None => value.clone(),
        },
        _ => value.clone(),
    }
}

/// canonical symbol: "" -> `<default>`, numbers -> their string
fn fixed_symbol(value: &Value, default: String) -> Value {
    match value {
        Value::String(s) if s.is_empty() => Value::String(default),
        Value::Number(n) => Value::String(n.to_string()),
        Value::Null => Value::String(default),
        _ => value.clone(),
    }
}

fn symbol_text(value: &Value, field: &str, index: usize) -> Result<String, CrnError> {
    match value {
        Value::String(s) if !s.is_empty() => Ok(s.clone()),
        _ => Err(CrnError::InvalidTable(vec![format!(
            "{} of reaction {} is not a symbol: '{}'",
            field, index, value
        )])),
    }
}

fn integer_side(
    side: &BTreeMap<String, Value>,
    side_name: &str,
    index: usize,
) -> Result<BTreeMap<String, i64>, CrnError> {
    side.iter()
        .map(|(key, value)| match value.as_i64() {
            Some(n) => Ok((key.clone(), n)),
            None => Err(CrnError::InvalidTable(vec![format!(
                "{}[{}] of reaction {} is not an integer: '{}'",
                side_name, key, index, value
            )])),
        })
        .collect()
}

impl ReactionTable {
    /// blank table, every coefficient, rate and scaling an empty string
    pub fn template(
        reactions: usize,
        slow_species: usize,
        fast_species: usize,
    ) -> Result<ReactionTable, CrnError> {
        if reactions == 0 {
            return Err(CrnError::InvalidTable(vec![
                "number of reactions must be a positive integer".to_string(),
            ]));
        }
        let blank_side = || -> BTreeMap<String, Value> {
            (1..=slow_species)
                .map(slow_label)
                .chain((1..=fast_species).map(fast_label))
                .map(|label| (label, Value::String(String::new())))
                .collect()
        };
        let reactions_vec = (1..=reactions)
            .map(|index| TableReaction {
                index,
                educts: blank_side(),
                products: blank_side(),
                rate_unscaled: Value::String(String::new()),
                scaling: Value::String(String::new()),
            })
            .collect();
        Ok(ReactionTable {
            reactions_count: reactions,
            slow_species_count: slow_species,
            fast_species_count: fast_species,
            reactions: reactions_vec,
        })
    }

    /// all validation messages, empty when the table is fine
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        for reaction in &self.reactions {
            check_side(&reaction.educts, "educts", reaction.index, &mut errors);
            check_side(&reaction.products, "products", reaction.index, &mut errors);
        }
        errors
    }

    pub fn validate(&self) -> Result<(), CrnError> {
        let errors = self.validation_errors();
        if errors.is_empty() {
            info!("All checks of the reaction table passed");
            Ok(())
        } else {
            Err(CrnError::InvalidTable(errors))
        }
    }

    /// canonicalizes coefficients and fills in missing rate and scaling names
    pub fn fix_values(&mut self) {
        for reaction in self.reactions.iter_mut() {
            for side in [&mut reaction.educts, &mut reaction.products] {
                for (_, value) in side
                    .iter_mut()
                    .filter(|(k, _)| is_slow_key(k) || is_fast_key(k))
                {
                    *value = fixed_coefficient(value);
                }
            }
            reaction.rate_unscaled =
                fixed_symbol(&reaction.rate_unscaled, format!("k{}", reaction.index));
            reaction.scaling = fixed_symbol(&reaction.scaling, format!("g{}", reaction.index));
        }
        info!("Fixed values of the reaction table");
    }

    /// structured network description of a validated and fixed table
    pub fn to_document(&self, name: &str) -> Result<CrnDocument, CrnError> {
        let reactions = self
            .reactions
            .iter()
            .map(|r| {
                Ok(ReactionDocument {
                    educts: integer_side(&r.educts, "educts", r.index)?,
                    products: integer_side(&r.products, "products", r.index)?,
                    rate: symbol_text(&r.rate_unscaled, "rate_unscaled", r.index)?,
                    scale: symbol_text(&r.scaling, "scaling", r.index)?,
                })
            })
            .collect::<Result<Vec<ReactionDocument>, CrnError>>()?;
        Ok(CrnDocument {
            name: name.to_string(),
            natnum: "N".to_string(),
            species: SpeciesDocument {
                slow: (1..=self.slow_species_count).map(slow_label).collect(),
                fast: (1..=self.fast_species_count).map(fast_label).collect(),
            },
            reactions,
        })
    }

    /// validate, fix and convert in one step
    pub fn normalize(mut self, name: &str) -> Result<CrnDocument, CrnError> {
        self.validate()?;
        self.fix_values();
        self.to_document(name)
    }
}
