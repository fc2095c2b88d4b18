//! CLI tool for credit card brand identification.
//!
//! # Usage
//!
//! ```bash
//! # Identify the brand of a card number
//! cardid brand 4012001037141112
//!
//! # Check the Luhn checksum
//! cardid luhn 4012001037141112
//!
//! # Validate a CVV for a brand
//! cardid cvv 123 --brand visa
//!
//! # Show a brand's rule and metadata
//! cardid info visa
//!
//! # List all supported brands
//! cardid list
//! ```
//!
//! Exits nonzero on a non-match so the tool composes in scripts.

use std::process::ExitCode;

use card_identifier::{
    find_brand_detailed, get_brand_info, get_brand_info_detailed, list_brands, luhn_valid,
    validate_cvv,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cardid")]
#[command(author, version, about = "Credit card brand identification tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Identify the brand of a card number
    Brand {
        /// Card number (digits only)
        card_number: String,
    },

    /// Check a number against the Luhn checksum
    Luhn {
        /// Number to check (digits only)
        number: String,
    },

    /// Validate a CVV/CVC for a brand
    Cvv {
        /// Security code to validate
        cvv: String,

        /// Brand name, e.g. visa or amex
        #[arg(short, long)]
        brand: String,
    },

    /// Show a brand's rule and metadata
    Info {
        /// Brand name, e.g. visa or amex
        name: String,
    },

    /// List all supported brand names
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Brand { card_number } => match find_brand_detailed(&card_number) {
            Some(detail) => {
                println!("{} ({})", detail.scheme, detail.brand);
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("no matching brand");
                ExitCode::FAILURE
            }
        },

        Commands::Luhn { number } => {
            if luhn_valid(&number) {
                println!("valid");
                ExitCode::SUCCESS
            } else {
                println!("invalid");
                ExitCode::FAILURE
            }
        }

        Commands::Cvv { cvv, brand } => {
            if validate_cvv(&cvv, &brand) {
                println!("valid");
                ExitCode::SUCCESS
            } else {
                println!("invalid");
                ExitCode::FAILURE
            }
        }

        Commands::Info { name } => match (get_brand_info(&name), get_brand_info_detailed(&name)) {
            (Some(rule), Some(detail)) => {
                println!("scheme:   {}", detail.scheme);
                println!("brand:    {}", detail.brand);
                println!("type:     {}", detail.card_type);
                let lengths: Vec<String> =
                    detail.lengths.iter().map(|len| len.to_string()).collect();
                println!("lengths:  {}", lengths.join(", "));
                println!("cvv:      {} digits", detail.cvv_length);
                println!("luhn:     {}", detail.luhn);
                println!("pattern:  {}", rule.regexp_full);
                println!("bin:      {}", rule.regexp_bin);
                if !rule.priority_over.is_empty() {
                    println!("priority: {}", rule.priority_over.join(", "));
                }
                ExitCode::SUCCESS
            }
            _ => {
                eprintln!("unknown brand: {}", name);
                ExitCode::FAILURE
            }
        },

        Commands::List => {
            for name in list_brands() {
                println!("{}", name);
            }
            ExitCode::SUCCESS
        }
    }
}
