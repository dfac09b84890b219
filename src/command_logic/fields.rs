use crate::constants::Message;
use crate::errors::AppError;
use crate::model::decode_fields;
use crate::utils::find_field;

/// One summary line per field: id, system name, type and number of configs
pub fn list_fields(payload: &str) -> Result<String, AppError> {
    let fields = decode_fields(payload)?;
    Ok(fields
        .iter()
        .map(|field| {
            Message::FieldSummary {
                id: field.id,
                system_name: field.system_name.clone().unwrap_or_default(),
                field_type: field.field_type().to_string(),
                configs: field.configs.len(),
            }
            .to_formatted_string()
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Field re-encoded to its wire form
pub fn show_field(payload: &str, field_id: u32, pretty: bool) -> Result<String, AppError> {
    let fields = decode_fields(payload)?;
    let field = find_field(&fields, field_id)?;
    Ok(field.to_json(pretty)?)
}

/// Decoded item lists of a DROPDOWN or MULTI_SELECT field, per config
pub fn field_items(payload: &str, field_id: u32) -> Result<String, AppError> {
    let fields = decode_fields(payload)?;
    let field = find_field(&fields, field_id)?;

    let mut lines = Vec::new();
    for config in &field.configs {
        let Some(items) = config.options.kind.items() else {
            continue;
        };
        lines.push(Message::ConfigHeader(config.id.clone()).to_formatted_string());
        lines.extend(
            items
                .iter()
                .map(|(key, value)| Message::Item(key.clone(), value.clone()).to_formatted_string()),
        );
    }
    if lines.is_empty() {
        return Err(AppError::NoItems(field_id));
    }
    Ok(lines.join("\n"))
}
