//! Form construction from control schemas.

use serde::Serialize;

use crate::Result;
use crate::mason::Control;

/// A form built from a control's schema.
///
/// Rebuilt wholesale on every render; there is no incremental update.
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    /// Target href for submission.
    pub action: String,
    /// HTTP method for submission.
    pub method: String,
    /// Input fields, in render order.
    pub fields: Vec<FieldView>,
}

/// One input field of a form.
#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub name: String,
    /// Label shown next to the input: the schema property's description,
    /// or the field name when the schema gives none.
    pub label: String,
    pub value: String,
    pub required: bool,
    pub readonly: bool,
}

impl FormView {
    /// Build a form from a control's schema.
    ///
    /// Fields listed in `schema.required` come first, in declared order;
    /// remaining schema properties follow. Every field named in `required`
    /// is marked required.
    ///
    /// # Errors
    ///
    /// Fails when the control carries no schema.
    pub fn from_control(control: &Control) -> Result<Self> {
        let schema = control.schema()?;

        let mut fields = Vec::new();
        let mut push = |name: &str| {
            if fields.iter().any(|f: &FieldView| f.name == name) {
                return;
            }
            let label = schema
                .properties
                .get(name)
                .and_then(|p| p.description.clone())
                .unwrap_or_else(|| name.to_string());
            fields.push(FieldView {
                name: name.to_string(),
                label,
                value: String::new(),
                required: schema.is_required(name),
                readonly: false,
            });
        };

        for name in &schema.required {
            push(name);
        }
        for name in schema.properties.keys() {
            push(name);
        }

        Ok(Self {
            action: control.href.clone(),
            method: control.method().to_string(),
            fields,
        })
    }

    /// Set the value of an existing field.
    pub fn prefill(&mut self, name: &str, value: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value = value.to_string();
        }
    }

    /// Append a read-only display field after the schema fields.
    pub fn push_readonly(&mut self, name: &str, label: &str, value: &str) {
        self.fields.push(FieldView {
            name: name.to_string(),
            label: label.to_string(),
            value: value.to_string(),
            required: false,
            readonly: true,
        });
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.name == name)
    }
}
