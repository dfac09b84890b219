use indexmap::IndexMap;
use log::debug;
use serde::ser::{Error as _, SerializeMap};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Number, Value};

use super::field_type::FieldType;
use super::wire;
use crate::errors::DecodeError;

const IS_REQUIRED: &str = "isRequired";

/// Options of a field configuration.
///
/// `is_required` and `unknown_fields` are common to every field type,
/// `kind` holds the members specific to the type. Members the model does not
/// declare are kept in `unknown_fields` and written back next to the declared
/// ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Options {
    pub is_required: bool,
    pub kind: OptionsKind,
    pub unknown_fields: Map<String, Value>,
}

/// Type specific part of [`Options`], one variant per [`FieldType`]
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OptionsKind {
    #[default]
    Unknown,
    String(StringOptions),
    Integer(IntegerOptions),
    Text(TextOptions),
    Url(UrlOptions),
    Checkbox(CheckboxOptions),
    Dropdown(DropdownOptions),
    User(UserOptions),
    Date,
    Milestone,
    Steps(StepsOptions),
    StepResults(StepResultsOptions),
    MultiSelect(MultiSelectOptions),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StringOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntegerOptions {
    #[serde(with = "wire::integer", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(deserialize_with = "wire::null_default")]
    pub rows: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UrlOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// Travels as `0` / `1` on the wire
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckboxOptions {
    #[serde(with = "wire::int_bool")]
    pub default_value: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DropdownOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(with = "wire::delimited_map", skip_serializing_if = "Option::is_none")]
    pub items: Option<IndexMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(deserialize_with = "wire::null_default")]
    pub has_expected: bool,
    #[serde(deserialize_with = "wire::null_default")]
    pub rows: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepResultsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(deserialize_with = "wire::null_default")]
    pub has_expected: bool,
    #[serde(deserialize_with = "wire::null_default")]
    pub has_actual: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MultiSelectOptions {
    #[serde(with = "wire::delimited_map", skip_serializing_if = "Option::is_none")]
    pub items: Option<IndexMap<String, String>>,
}

impl OptionsKind {
    pub fn field_type(&self) -> FieldType {
        match self {
            OptionsKind::Unknown => FieldType::Unknown,
            OptionsKind::String(_) => FieldType::String,
            OptionsKind::Integer(_) => FieldType::Integer,
            OptionsKind::Text(_) => FieldType::Text,
            OptionsKind::Url(_) => FieldType::Url,
            OptionsKind::Checkbox(_) => FieldType::Checkbox,
            OptionsKind::Dropdown(_) => FieldType::Dropdown,
            OptionsKind::User(_) => FieldType::User,
            OptionsKind::Date => FieldType::Date,
            OptionsKind::Milestone => FieldType::Milestone,
            OptionsKind::Steps(_) => FieldType::Steps,
            OptionsKind::StepResults(_) => FieldType::StepResults,
            OptionsKind::MultiSelect(_) => FieldType::MultiSelect,
        }
    }

    /// Empty options of the shape `field_type` carries
    pub fn empty(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Unknown => OptionsKind::Unknown,
            FieldType::String => OptionsKind::String(StringOptions::default()),
            FieldType::Integer => OptionsKind::Integer(IntegerOptions::default()),
            FieldType::Text => OptionsKind::Text(TextOptions::default()),
            FieldType::Url => OptionsKind::Url(UrlOptions::default()),
            FieldType::Checkbox => OptionsKind::Checkbox(CheckboxOptions::default()),
            FieldType::Dropdown => OptionsKind::Dropdown(DropdownOptions::default()),
            FieldType::User => OptionsKind::User(UserOptions::default()),
            FieldType::Date => OptionsKind::Date,
            FieldType::Milestone => OptionsKind::Milestone,
            FieldType::Steps => OptionsKind::Steps(StepsOptions::default()),
            FieldType::StepResults => OptionsKind::StepResults(StepResultsOptions::default()),
            FieldType::MultiSelect => OptionsKind::MultiSelect(MultiSelectOptions::default()),
        }
    }

    /// Item list of DROPDOWN and MULTI_SELECT options
    pub fn items(&self) -> Option<&IndexMap<String, String>> {
        match self {
            OptionsKind::Dropdown(options) => options.items.as_ref(),
            OptionsKind::MultiSelect(options) => options.items.as_ref(),
            _ => None,
        }
    }

    fn decode(field_type: FieldType, declared: Map<String, Value>) -> Result<Self, DecodeError> {
        let declared = Value::Object(declared);
        Ok(match field_type {
            FieldType::Unknown => OptionsKind::Unknown,
            FieldType::String => OptionsKind::String(serde_json::from_value(declared)?),
            FieldType::Integer => OptionsKind::Integer(serde_json::from_value(declared)?),
            FieldType::Text => OptionsKind::Text(serde_json::from_value(declared)?),
            FieldType::Url => OptionsKind::Url(serde_json::from_value(declared)?),
            FieldType::Checkbox => OptionsKind::Checkbox(serde_json::from_value(declared)?),
            FieldType::Dropdown => OptionsKind::Dropdown(serde_json::from_value(declared)?),
            FieldType::User => OptionsKind::User(serde_json::from_value(declared)?),
            FieldType::Date => OptionsKind::Date,
            FieldType::Milestone => OptionsKind::Milestone,
            FieldType::Steps => OptionsKind::Steps(serde_json::from_value(declared)?),
            FieldType::StepResults => OptionsKind::StepResults(serde_json::from_value(declared)?),
            FieldType::MultiSelect => OptionsKind::MultiSelect(serde_json::from_value(declared)?),
        })
    }

    fn encode(&self) -> Result<Map<String, Value>, serde_json::Error> {
        let encoded = match self {
            OptionsKind::Unknown | OptionsKind::Date | OptionsKind::Milestone => return Ok(Map::new()),
            OptionsKind::String(options) => serde_json::to_value(options)?,
            OptionsKind::Integer(options) => serde_json::to_value(options)?,
            OptionsKind::Text(options) => serde_json::to_value(options)?,
            OptionsKind::Url(options) => serde_json::to_value(options)?,
            OptionsKind::Checkbox(options) => serde_json::to_value(options)?,
            OptionsKind::Dropdown(options) => serde_json::to_value(options)?,
            OptionsKind::User(options) => serde_json::to_value(options)?,
            OptionsKind::Steps(options) => serde_json::to_value(options)?,
            OptionsKind::StepResults(options) => serde_json::to_value(options)?,
            OptionsKind::MultiSelect(options) => serde_json::to_value(options)?,
        };
        match encoded {
            Value::Object(members) => Ok(members),
            _ => Ok(Map::new()),
        }
    }
}

impl Options {
    pub fn new(kind: OptionsKind) -> Self {
        Self { kind, ..Self::default() }
    }

    pub fn required(mut self, is_required: bool) -> Self {
        self.is_required = is_required;
        self
    }

    /// Add a member the model does not declare.
    ///
    /// Encoding fails if `key` is `isRequired` or a declared member of the shape.
    pub fn with_unknown_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.unknown_fields.insert(key.into(), value);
        self
    }

    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    /// Decode an options object whose shape is given by `field_type`.
    ///
    /// `null` stands for an empty object. Declared members of the shape are
    /// taken out first; whatever is left over goes to `unknown_fields`.
    pub fn decode(field_type: FieldType, value: Value) -> Result<Self, DecodeError> {
        let mut members = match value {
            Value::Object(members) => members,
            Value::Null => Map::new(),
            other => return Err(DecodeError::NotAnObject(other.to_string())),
        };

        let is_required = match members.remove(IS_REQUIRED) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => flag,
            Some(other) => {
                return Err(DecodeError::UnexpectedType {
                    member: IS_REQUIRED,
                    expected: "a boolean",
                    found: other.to_string(),
                })
            }
        };

        let shape = field_type.options_shape();
        let declared: Map<String, Value> = shape
            .attributes
            .iter()
            .filter_map(|name| members.remove_entry(*name))
            .collect();
        let kind = OptionsKind::decode(field_type, declared)?;

        if !members.is_empty() {
            debug!(
                "Captured {} unknown member(s) in {}: {:?}",
                members.len(),
                shape.name,
                members.keys().collect::<Vec<_>>()
            );
        }

        Ok(Self { is_required, kind, unknown_fields: members })
    }
}

impl Serialize for Options {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let attributes = self.field_type().options_shape().attributes;
        if let Some(key) = self
            .unknown_fields
            .keys()
            .find(|key| key.as_str() == IS_REQUIRED || attributes.contains(&key.as_str()))
        {
            return Err(S::Error::custom(DecodeError::DeclaredMemberAsUnknown(key.clone())));
        }
        let declared = self.kind.encode().map_err(S::Error::custom)?;

        let mut map = serializer.serialize_map(Some(1 + declared.len() + self.unknown_fields.len()))?;
        map.serialize_entry(IS_REQUIRED, &self.is_required)?;
        for (key, value) in declared.iter().chain(self.unknown_fields.iter()) {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
