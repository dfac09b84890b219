use clap::Parser;
use std::process;
use testrail_fields::cli_app::{handle_command, Cli};
use testrail_fields::config::Config;
use testrail_fields::utils::init_logger;

fn main() {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            process::exit(1);
        }
    };
    init_logger(config.log_level.as_deref());

    match handle_command(cli, &config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
