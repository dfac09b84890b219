use std::fs;
use std::io::{self, Read};

use crate::constants::STDIN_PATH;
use crate::errors::AppError;
use crate::model::Field;

/// Read an API response body from a file, or from stdin for `-`
pub fn read_payload(path: &str) -> Result<String, AppError> {
    if path == STDIN_PATH {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    Ok(fs::read_to_string(path)?)
}

pub fn find_field(fields: &[Field], field_id: u32) -> Result<&Field, AppError> {
    fields
        .iter()
        .find(|field| field.id == field_id)
        .ok_or(AppError::FieldNotFound(field_id))
}

/// Set up env_logger: RUST_LOG wins, then the configured level, then "warn"
pub fn init_logger(log_level: Option<&str>) {
    let default_filter = log_level.unwrap_or("warn");
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}
