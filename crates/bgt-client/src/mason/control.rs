//! Hypermedia control descriptors.
//!
//! A Mason control describes an affordance the server offers: where to go
//! (`href`), how (`method`), and what input it accepts (`schema`). The
//! client never hard-codes URLs; it follows controls.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, HypermediaError};

/// A single hypermedia control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Control {
    /// Target URI, possibly server-relative.
    pub href: String,

    /// HTTP method; Mason leaves it out for plain GET links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Human-readable title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Payload encoding hint (the server emits "json").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,

    /// Input schema for controls that accept a body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

impl Control {
    /// The declared HTTP method, defaulting to GET.
    pub fn method(&self) -> &str {
        self.method.as_deref().unwrap_or("GET")
    }

    /// Whether this control is a plain navigation link.
    pub fn is_get(&self) -> bool {
        self.method().eq_ignore_ascii_case("GET")
    }

    /// The control's input schema.
    ///
    /// # Errors
    ///
    /// Returns [`HypermediaError::MissingSchema`] when the control carries
    /// none.
    pub fn schema(&self) -> Result<&Schema, Error> {
        self.schema
            .as_ref()
            .ok_or_else(|| HypermediaError::MissingSchema.into())
    }
}

/// A JSON schema fragment attached to a control.
///
/// Only the parts the server actually emits are modeled: a property map
/// with descriptions and a `required` list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    /// Schema value type, "object" for everything the server emits.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,

    /// Declared properties, by field name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Property>,

    /// Field names the server requires, in declared order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl Schema {
    /// Whether the named field is listed as required.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

/// One declared schema property.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Property {
    /// Human-readable description, used as the field label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Value type ("string" for everything the server emits).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
}

/// The `@controls` map of a representation: relation name to control.
///
/// Lookup of a missing relation is a recoverable [`HypermediaError`] rather
/// than a panic; the server is trusted to send the advertised relations,
/// but its absence is reportable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Controls(BTreeMap<String, Control>);

impl Controls {
    /// Look up a control by relation name.
    ///
    /// # Errors
    ///
    /// Returns [`HypermediaError::MissingControl`] naming the relation when
    /// the representation does not carry it.
    pub fn get(&self, relation: &str) -> Result<&Control, Error> {
        self.0.get(relation).ok_or_else(|| {
            HypermediaError::MissingControl {
                relation: relation.to_string(),
            }
            .into()
        })
    }

    /// Look up a control without treating absence as an error.
    pub fn find(&self, relation: &str) -> Option<&Control> {
        self.0.get(relation)
    }

    /// Whether the representation carries the relation.
    pub fn contains(&self, relation: &str) -> bool {
        self.0.contains_key(relation)
    }

    /// Iterate over (relation, control) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Control)> {
        self.0.iter()
    }

    /// True when the representation advertises no controls at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
