use super::crn_document::CrnDocument;
use super::reaction_table::ReactionTable;
use crate::Network::crn_model::{CRN, CrnError};
use log::{error, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub struct LoadData {
    pub file_name: String,
}

impl LoadData {
    pub fn new(file_name: String) -> Self {
        LoadData { file_name }
    }
    pub fn load_crn(&self) -> Result<CRN, CrnError> {
        load_crn_from_file(&self.file_name)
    }
    pub fn load_document(&self) -> Result<CrnDocument, CrnError> {
        load_json(&self.file_name)
    }
    pub fn load_table(&self) -> Result<ReactionTable, CrnError> {
        load_json(&self.file_name)
    }
}

/// Parses a JSON file into `T`. On a syntax or schema error the offending line is logged
/// with a pointer to the column before the error is returned.
pub fn load_json<T: DeserializeOwned>(file_name: &str) -> Result<T, CrnError> {
    let path = Path::new(file_name);
    if !path.exists() {
        error!("File '{}' does not exist", file_name);
    }
    let content = fs::read_to_string(path)?;

    match serde_json::from_str::<T>(&content) {
        Ok(data) => {
            info!("Successfully parsed '{}'", file_name);
            Ok(data)
        }
        Err(e) => {
            let error_line = e.line();
            let error_column = e.column();
            error!(
                "Error parsing '{}' at line {}, column {}: {}",
                file_name, error_line, error_column, e
            );
            // show the problematic line
            if error_line > 0 {
                if let Some(problem_line) = content.lines().nth(error_line - 1) {
                    error!("Problematic line: {}", problem_line);
                    if error_column >= 1 && error_column <= problem_line.len() + 1 {
                        let pointer = " ".repeat(error_column - 1) + "^";
                        error!("{}", pointer);
                    }
                }
            }
            Err(CrnError::Json(e))
        }
    }
}

/// loads a network description and validates it
pub fn load_crn_from_file(file_name: &str) -> Result<CRN, CrnError> {
    let document: CrnDocument = load_json(file_name)?;
    if document.reactions.is_empty() {
        warn!("Network '{}' contains no reactions", document.name);
    }
    if document.species.fast.is_empty() {
        warn!("Network '{}' declares no fast species", document.name);
    }
    let crn = CRN::from_document(&document)?;
    info!(
        "Loaded network '{}': {} reactions, {} slow and {} fast species",
        crn.name(),
        crn.reactions().len(),
        crn.slow_species().len(),
        crn.fast_species().len()
    );
    Ok(crn)
}

/// writes any serializable value as pretty JSON
pub fn save_json<T: Serialize>(value: &T, file_name: &str) -> Result<(), CrnError> {
    let content = serde_json::to_string_pretty(value)?;
    fs::write(file_name, content)?;
    info!("Data successfully saved to {}", file_name);
    Ok(())
}

pub fn save_crn_to_file(crn: &CRN, file_name: &str) -> Result<(), CrnError> {
    save_json(&crn.to_document(), file_name)
}

/// writes every sub-network next to `directory`, one file per component, returns the paths
pub fn save_sub_crns(crn: &CRN, directory: &str) -> Result<Vec<String>, CrnError> {
    fs::create_dir_all(directory)?;
    let mut written = Vec::new();
    for sub in crn.sub_crns() {
        let file_name = Path::new(directory)
            .join(format!("{}.json", sub.name()))
            .to_string_lossy()
            .to_string();
        save_crn_to_file(&sub, &file_name)?;
        written.push(file_name);
    }
    Ok(written)
}
