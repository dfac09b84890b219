use log::warn;
use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};

use super::config::{Config, ConfigRecord};
use super::field_type::FieldType;
use super::wire;
use crate::errors::DecodeError;

/// Custom field definition.
///
/// The type of the field is derived from `type_id` and never sent over the
/// wire. Options of every config are decoded with the shape of that type,
/// and encoding refuses configs whose options carry another shape.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "FieldRecord")]
pub struct Field {
    pub id: u32,
    pub label: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub system_name: Option<String>,
    pub type_id: i64,
    pub display_order: i32,
    pub configs: Vec<Config>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldRecord {
    #[serde(default, deserialize_with = "wire::null_default")]
    id: u32,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    system_name: Option<String>,
    #[serde(default, deserialize_with = "wire::null_default")]
    type_id: i64,
    #[serde(default, deserialize_with = "wire::null_default")]
    display_order: i32,
    #[serde(default)]
    configs: Option<Vec<ConfigRecord>>,
}

/// Wire form of a [`Field`]
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldWire<'a> {
    id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_name: Option<&'a str>,
    type_id: i64,
    display_order: i32,
    configs: &'a [Config],
}

impl TryFrom<FieldRecord> for Field {
    type Error = DecodeError;

    fn try_from(record: FieldRecord) -> Result<Self, Self::Error> {
        let field_type = FieldType::from_type_id(record.type_id);
        if field_type == FieldType::Unknown {
            warn!(
                "Field {} has unknown typeId {}, options are decoded as {}",
                record.id,
                record.type_id,
                field_type.options_shape().name
            );
        }
        let configs = record
            .configs
            .unwrap_or_default()
            .into_iter()
            .map(|config| config.into_config(field_type))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: record.id,
            label: record.label,
            name: record.name,
            description: record.description,
            system_name: record.system_name,
            type_id: record.type_id,
            display_order: record.display_order,
            configs,
        })
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(config) = self.mismatched_configs().next() {
            return Err(S::Error::custom(DecodeError::OptionsMismatch {
                config_id: config.id.clone(),
                options_shape: config.options.field_type().options_shape().name,
                field_type: self.field_type(),
            }));
        }
        FieldWire {
            id: self.id,
            label: self.label.as_deref(),
            name: self.name.as_deref(),
            description: self.description.as_deref(),
            system_name: self.system_name.as_deref(),
            type_id: self.type_id,
            display_order: self.display_order,
            configs: &self.configs,
        }
        .serialize(serializer)
    }
}

impl Field {
    pub fn field_type(&self) -> FieldType {
        FieldType::from_type_id(self.type_id)
    }

    /// Config scoped to `project_id`, falling back to the global one
    pub fn config_for_project(&self, project_id: u32) -> Option<&Config> {
        self.configs
            .iter()
            .find(|config| config.context.covers_project(project_id))
            .or_else(|| self.configs.iter().find(|config| config.context.is_global))
    }

    /// Configs whose options do not carry the shape of the field type
    pub fn mismatched_configs(&self) -> impl Iterator<Item = &Config> {
        let field_type = self.field_type();
        self.configs
            .iter()
            .filter(move |config| config.options.field_type() != field_type)
    }

    /// Encode to JSON text; fails when a config holds options of another type
    pub fn to_json(&self, pretty: bool) -> Result<String, DecodeError> {
        let encoded = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(encoded)
    }
}

/// Decode a single field object
pub fn decode_field(json: &str) -> Result<Field, DecodeError> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a list of fields, or a single field object as a list of one
pub fn decode_fields(json: &str) -> Result<Vec<Field>, DecodeError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let fields = if value.is_array() {
        serde_json::from_value::<Vec<Field>>(value)?
    } else {
        vec![serde_json::from_value::<Field>(value)?]
    };
    Ok(fields)
}
