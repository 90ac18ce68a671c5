use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Custom field definitions keyed by entity name (`Product`, `Channel`, ...).
pub type CustomFields = BTreeMap<String, Vec<CustomFieldConfig>>;

/// Storage type of a custom field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CustomFieldType {
    /// Short string
    String,
    /// Translatable short string
    LocaleString,
    /// Long text
    Text,
    /// Integer
    Int,
    /// Floating point
    Float,
    /// Boolean
    Boolean,
    /// Timestamp
    Datetime,
    /// Reference to another entity
    Relation,
}

/// A single custom field on an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct CustomFieldConfig {
    /// Field name, must be a valid identifier
    pub name: String,

    /// Storage type
    #[serde(rename = "type")]
    pub field_type: CustomFieldType,

    /// Target entity for relation fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,

    /// GraphQL type exposed for relation fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphql_type: Option<String>,

    /// Load the relation eagerly
    #[serde(default)]
    pub eager: bool,

    /// Whether the field holds a list of values
    #[serde(default)]
    pub list: bool,

    /// Whether the field may be null
    #[serde(default = "default_nullable")]
    pub nullable: bool,
}

const fn default_nullable() -> bool {
    true
}

impl CustomFieldConfig {
    /// Scalar field.
    pub fn new(name: impl Into<String>, field_type: CustomFieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            entity: None,
            graphql_type: None,
            eager: false,
            list: false,
            nullable: default_nullable(),
        }
    }

    /// Relation field pointing at `entity`, exposed with the same GraphQL type.
    pub fn relation(name: impl Into<String>, entity: impl Into<String>) -> Self {
        let entity = entity.into();
        Self {
            graphql_type: Some(entity.clone()),
            entity: Some(entity),
            ..Self::new(name, CustomFieldType::Relation)
        }
    }
}
