use clap::{Args, Parser, Subcommand};

use crate::command_logic::fields::{field_items, list_fields, show_field};
use crate::config::Config;
use crate::errors::AppError;
use crate::utils::read_payload;

#[derive(Parser)]
#[command(
    name = "testrail-fields",
    version = "0.1.0",
    about = "Inspect TestRail custom field definitions saved from the API",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List fields of a saved response
    List(ListArgs),
    /// Print one field re-encoded to JSON
    Show(ShowArgs),
    /// Print dropdown / multi-select items of a field
    Items(ItemsArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Path to the response body, '-' for stdin
    #[arg(long, short, required = true)]
    pub file: String,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Path to the response body, '-' for stdin
    #[arg(long, short, required = true)]
    pub file: String,
    /// Field id
    #[arg(long, short, required = true, value_parser = validate_u32_more_then_zero)]
    pub id: u32,
    /// Single line output
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args)]
pub struct ItemsArgs {
    /// Path to the response body, '-' for stdin
    #[arg(long, short, required = true)]
    pub file: String,
    /// Field id
    #[arg(long, short, required = true, value_parser = validate_u32_more_then_zero)]
    pub id: u32,
}

fn validate_u32_more_then_zero(value: &str) -> Result<u32, AppError> {
    let id: u32 = value.parse().map_err(|_| AppError::Parse(value.to_string()))?;
    if id == 0 {
        return Err(AppError::Parse(value.to_string()));
    }
    Ok(id)
}

pub fn handle_command(cli: Cli, config: &Config) -> Result<String, AppError> {
    match &cli.command {
        Commands::List(args) => list_fields(&read_payload(&args.file)?),
        Commands::Show(args) => show_field(
            &read_payload(&args.file)?,
            args.id,
            config.pretty && !args.compact,
        ),
        Commands::Items(args) => field_items(&read_payload(&args.file)?, args.id),
    }
}
