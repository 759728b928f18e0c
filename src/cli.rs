pub mod cli_crn;
pub mod cli_main;
