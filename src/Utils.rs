/// structured JSON description of a network and its conversion to and from `CRN`
pub mod crn_document;
/// human-readable reaction listing and summary table
pub mod crn_print;
pub mod load_from_file;
/// hand-edited reaction table: template, validation, normalization
pub mod reaction_table;
