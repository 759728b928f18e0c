use crate::Generator::assembler::GeneratorReport;
use crate::Network::crn_model::{CRN, CrnError};
use crate::Utils::crn_print::{crn_summary_table, print_crn};
use crate::Utils::load_from_file::{LoadData, load_crn_from_file, save_json, save_sub_crns};
use crate::Utils::reaction_table::ReactionTable;
use crate::settings::GeneratorSettings;
use RustedSciThe::symbolic::symbolic_engine::Expr;
use prettytable::{Table, row};
use std::fs::File;
use std::io::{self, BufWriter, Write};

pub fn get_user_input() -> Result<String, CrnError> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input)
}

fn prompt(message: &str) -> Result<String, CrnError> {
    print!("{}", message);
    io::stdout().flush()?;
    Ok(get_user_input()?.trim().to_string())
}

fn prompt_with_default(message: &str, default: &str) -> Result<String, CrnError> {
    let answer = prompt(&format!("{} [{}]: ", message, default))?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}

fn prompt_count(message: &str, positive: bool) -> Result<usize, CrnError> {
    loop {
        match prompt(message)?.parse::<usize>() {
            Ok(n) if n > 0 || !positive => return Ok(n),
            _ if positive => println!("Invalid input. Please enter a positive integer (1, 2, 3, ...)."),
            _ => println!("Invalid input. Please enter a non-negative integer (0, 1, 2, ...)."),
        }
    }
}

fn load_network() -> Result<CRN, CrnError> {
    let file_name = prompt_with_default("Network file", "crn.json")?;
    load_crn_from_file(&file_name)
}

/// empty answer means default settings
fn load_settings() -> Result<GeneratorSettings, CrnError> {
    let file_name = prompt("Generator settings file (empty for defaults): ")?;
    if file_name.is_empty() {
        Ok(GeneratorSettings::default())
    } else {
        GeneratorSettings::load_from_file(file_name)
    }
}

pub fn create_table() -> Result<(), CrnError> {
    let reactions = prompt_count("How many reactions?    ", true)?;
    let slow = prompt_count("How many slow species? ", false)?;
    let fast = prompt_count("How many fast species? ", false)?;
    let file_name = prompt_with_default("Table file", "reaction_data.json")?;
    let table = ReactionTable::template(reactions, slow, fast)?;
    save_json(&table, &file_name)?;
    println!("Blank table saved to {}, fill in the coefficients and normalize it", file_name);
    Ok(())
}

pub fn normalize_table() -> Result<(), CrnError> {
    let table_file = prompt_with_default("Table file", "reaction_data.json")?;
    let name = prompt_with_default("Network name", "crn")?;
    let out_file = prompt_with_default("Network file", "crn.json")?;
    let mut table = LoadData::new(table_file).load_table()?;
    let errors = table.validation_errors();
    if !errors.is_empty() {
        for error in errors.iter() {
            println!("\x1b[31m{}\x1b[0m", error);
        }
        return Err(CrnError::InvalidTable(errors));
    }
    println!("All checks passed successfully!");
    table.fix_values();
    let document = table.to_document(&name)?;
    // the document must describe a valid network before it is written
    CRN::from_document(&document)?;
    save_json(&document, &out_file)?;
    println!("Network saved to {}", out_file);
    Ok(())
}

pub fn print_reactions() -> Result<(), CrnError> {
    let crn = load_network()?;
    crn_summary_table(&crn).printstd();
    let out_file = prompt("Write reaction listing to file (empty to skip): ")?;
    if !out_file.is_empty() {
        let mut writer = BufWriter::new(File::create(&out_file)?);
        print_crn(&crn, &mut writer)?;
        writer.flush()?;
        println!("Reactions written to {}", out_file);
    }
    Ok(())
}

pub fn connectivity_report() -> Result<(), CrnError> {
    let crn = load_network()?;
    let components = crn.component_count();
    println!(
        "Network '{}' is {}connected, {} component(s)",
        crn.name(),
        if crn.is_connected() { "" } else { "not " },
        components
    );
    let mut table = Table::new();
    table.add_row(row!["Sub-network", "Reactions", "Fast species separated"]);
    let verdicts = crn.validate_fast_separation();
    for sub in crn.sub_crns() {
        let verdict = verdicts.get(sub.name()).copied().unwrap_or(false);
        table.add_row(row![sub.name(), sub.reactions().len(), verdict]);
    }
    table.printstd();
    Ok(())
}

pub fn write_sub_crns() -> Result<(), CrnError> {
    let crn = load_network()?;
    let directory = prompt_with_default("Output directory", ".")?;
    for file_name in save_sub_crns(&crn, &directory)? {
        println!("{}", file_name);
    }
    Ok(())
}

pub fn print_report(report: &GeneratorReport<Expr>) {
    println!("\x1b[34m=== Generator of '{}' ===\x1b[0m", report.name);
    println!("Fast species order: {}", report.fast_order.join(", "));
    if report.degenerate {
        println!("\x1b[33mdet M is zero: all determinant ratios were set to 0\x1b[0m");
    }
    println!("L = {}", report.expression);
}

pub fn generator_menu() -> Result<(), CrnError> {
    let crn = load_network()?;
    let settings = load_settings()?;
    println!("1. Whole network");
    println!("2. Every connected sub-network");
    match prompt("Choose option: ")?.as_str() {
        "2" => {
            for report in crn.component_generators(&settings)? {
                print_report(&report);
            }
        }
        _ => print_report(&crn.generator_report(&settings)?),
    }
    Ok(())
}

/// non-interactive mode: prints the generator of the network stored in `file_name`
pub fn run_from_args(file_name: &str, settings_file: Option<&str>) -> Result<(), CrnError> {
    let crn = load_crn_from_file(file_name)?;
    let settings = match settings_file {
        Some(path) => GeneratorSettings::load_from_file(path)?,
        None => GeneratorSettings::default(),
    };
    print_report(&crn.generator_report(&settings)?);
    Ok(())
}
