use super::cli_crn::{
    connectivity_report, create_table, generator_menu, get_user_input, normalize_table,
    print_reactions, write_sub_crns,
};
use crate::Network::crn_model::CrnError;
use std::io::{self, Write};

pub fn run_interactive_menu() {
    loop {
        show_main_menu();
        let choice = match get_user_input() {
            Ok(choice) => choice,
            Err(e) => {
                println!("Error: {}", e);
                break;
            }
        };
        let result: Result<(), CrnError> = match choice.trim() {
            "1" => create_table(),
            "2" => normalize_table(),
            "3" => print_reactions(),
            "4" => connectivity_report(),
            "5" => write_sub_crns(),
            "6" => generator_menu(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => {
                println!("Invalid choice. Please try again.");
                Ok(())
            }
        };
        if let Err(e) = result {
            println!("\x1b[31mError: {}\x1b[0m", e);
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options

Cyan (\x1b[36m) - "Enter your choice:" prompt

Red (\x1b[31m) - errors

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n SlowFastCRN: averaged generators of chemical reaction networks\n
    with slow and fast species \n \x1b[0m"
    );
    println!("\x1b[33m1. Create blank reaction table\x1b[0m");
    println!("\x1b[33m2. Normalize reaction table into network file\x1b[0m");
    println!("\x1b[33m3. Print reactions\x1b[0m");
    println!("\x1b[33m4. Connectivity and fast-species separation\x1b[0m");
    println!("\x1b[33m5. Write sub-networks\x1b[0m");
    println!("\x1b[33m6. Compute generator\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    print!("\x1b[36mEnter your choice: \x1b[0m");
    let _ = io::stdout().flush();
}
