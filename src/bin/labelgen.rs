//! Command-line interface for labelgen
//! Reads the newline-delimited token list and writes the TypeScript label
//! table the app imports.
//!
//! Usage:
//!   labelgen                      - Use the fixed app-relative paths
//!   labelgen `<input>` `<output>`     - Override either location

use clap::{Arg, Command};
use labelgen::generator::{generate, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};

fn main() {
    let matches = Command::new("labelgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate the mushroom label table from the classifier token list")
        .arg(
            Arg::new("input")
                .help("Path to the newline-delimited token list")
                .default_value(DEFAULT_INPUT_PATH)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Path of the TypeScript label file to write")
                .default_value(DEFAULT_OUTPUT_PATH)
                .index(2),
        )
        .get_matches();

    let input = matches.get_one::<String>("input").unwrap();
    let output = matches.get_one::<String>("output").unwrap();

    match generate(input, output) {
        Ok(count) => println!("Successfully wrote {} labels to {}", count, output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
