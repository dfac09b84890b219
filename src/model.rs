pub mod config;
pub mod field;
pub mod field_type;
pub mod options;
pub mod wire;

pub use config::{Config, Context};
pub use field::{decode_field, decode_fields, Field};
pub use field_type::{FieldType, OptionsShape};
pub use options::{
    CheckboxOptions, DropdownOptions, IntegerOptions, MultiSelectOptions, Options, OptionsKind,
    StepResultsOptions, StepsOptions, StringOptions, TextOptions, UrlOptions, UserOptions,
};
