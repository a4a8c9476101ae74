use chrono::{DateTime, Utc};
use serde::Serialize;

use super::form::FormFields;

/// What a backend call would carry once leads are sent somewhere.
#[derive(Debug, Clone, Serialize)]
pub struct LeadSubmission {
    pub nombre: String,
    pub cargo: String,
    pub empresa: String,
    pub telefono: String,
    pub correo: String,
    pub reto: String,
    pub submitted_at: DateTime<Utc>,
}

impl LeadSubmission {
    pub fn from_fields(fields: &FormFields, submitted_at: DateTime<Utc>) -> Self {
        Self {
            nombre: fields.nombre.trim().to_string(),
            cargo: fields.cargo.trim().to_string(),
            empresa: fields.empresa.trim().to_string(),
            telefono: fields.telefono.trim().to_string(),
            correo: fields.correo.trim().to_string(),
            reto: fields.reto.trim().to_string(),
            submitted_at,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
