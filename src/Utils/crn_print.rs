use crate::Network::crn_model::{CRN, Reaction};
use prettytable::{Table, row};
use std::collections::BTreeMap;
use std::io::Write;

/// one side of a reaction: slow species first, then fast ones, then anything undeclared
fn format_side(crn: &CRN, side: &BTreeMap<String, u32>) -> String {
    let declared = crn.slow_species().iter().chain(crn.fast_species().iter());
    let undeclared = side
        .keys()
        .filter(|s| !crn.is_slow(s) && !crn.is_fast(s));
    let terms: Vec<String> = declared
        .chain(undeclared)
        .filter_map(|species| {
            side.get(species).map(|&coeff| {
                if coeff == 1 {
                    species.clone()
                } else {
                    format!("{} * {}", coeff, species)
                }
            })
        })
        .collect();
    if terms.is_empty() {
        "0".to_string()
    } else {
        terms.join(" + ")
    }
}

/// `2 * S1 + E1 ---> S2`
pub fn format_reaction(crn: &CRN, reaction: &Reaction) -> String {
    format!(
        "{} ---> {}",
        format_side(crn, reaction.educts()),
        format_side(crn, reaction.products())
    )
}

/// every reaction with its rate constant and scaling exponent
pub fn print_crn<W: Write>(crn: &CRN, out: &mut W) -> std::io::Result<()> {
    for (j, reaction) in crn.reactions().iter().enumerate() {
        writeln!(out, "Reaction {}:", j + 1)?;
        writeln!(out, "{}", format_reaction(crn, reaction))?;
        writeln!(out, "κ = {}, γ = {}", reaction.rate(), reaction.scale())?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn crn_summary_table(crn: &CRN) -> Table {
    let mut table = Table::new();
    table.add_row(row!["#", "Reaction", "Rate", "Scaling"]);
    for (j, reaction) in crn.reactions().iter().enumerate() {
        table.add_row(row![
            j + 1,
            format_reaction(crn, reaction),
            reaction.rate(),
            reaction.scale()
        ]);
    }
    table
}
