pub mod cli_app;
pub mod command_logic;
pub mod config;
pub mod constants;
pub mod errors;
pub mod model;
pub mod utils;

pub use errors::{AppError, DecodeError};
pub use model::{Context, Field, FieldType, Options, OptionsKind};
