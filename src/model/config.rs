use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::field_type::FieldType;
use super::options::Options;
use super::wire;
use crate::errors::DecodeError;

/// Where a configuration applies: everywhere, or to the listed projects
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Context {
    #[serde(deserialize_with = "wire::null_default")]
    pub is_global: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_ids: Option<Vec<u32>>,
}

impl Context {
    pub fn global() -> Self {
        Self { is_global: true, project_ids: None }
    }

    pub fn projects(project_ids: Vec<u32>) -> Self {
        Self { is_global: false, project_ids: Some(project_ids) }
    }

    /// Project ids only count for non-global contexts
    pub fn covers_project(&self, project_id: u32) -> bool {
        !self.is_global
            && self
                .project_ids
                .as_ref()
                .is_some_and(|ids| ids.contains(&project_id))
    }
}

/// One configuration of a field, for a single context
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Config {
    pub id: String,
    pub context: Context,
    pub options: Options,
}

/// Wire form of a [`Config`]: `options` stays raw until the field type is known
#[derive(Debug, Deserialize)]
pub(crate) struct ConfigRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    context: Option<Context>,
    #[serde(default)]
    options: Value,
}

impl ConfigRecord {
    pub(crate) fn into_config(self, field_type: FieldType) -> Result<Config, DecodeError> {
        Ok(Config {
            id: self.id.unwrap_or_default(),
            context: self.context.unwrap_or_default(),
            options: Options::decode(field_type, self.options)?,
        })
    }
}

impl Config {
    /// Decode a configuration object for a field of type `field_type`
    pub fn decode(field_type: FieldType, value: Value) -> Result<Self, DecodeError> {
        let record: ConfigRecord = serde_json::from_value(value)?;
        record.into_config(field_type)
    }
}
