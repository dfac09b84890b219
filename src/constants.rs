pub const CONFIG_DIR: &str = ".config/testrail-fields";
pub const CONFIG_FILE: &str = "config.json";
pub const CONFIG_PATH_ENV: &str = "TESTRAIL_FIELDS_CONFIG";
pub const STDIN_PATH: &str = "-";

/// Standard message
#[derive(Debug)]
pub enum Message {
    FieldSummary {
        id: u32,
        system_name: String,
        field_type: String,
        configs: usize,
    },
    ConfigHeader(String),
    Item(String, String),
}

impl Message {
    pub fn to_formatted_string(&self) -> String {
        match self {
            Message::FieldSummary { id, system_name, field_type, configs } => {
                format!("{id}\t{system_name}\t{field_type}\t{configs}")
            }
            Message::ConfigHeader(config_id) => format!("# config {config_id}"),
            Message::Item(key, value) => format!("{key}\t{value}"),
        }
    }
}
