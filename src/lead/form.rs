use thiserror::Error;

pub const MISSING_FIELDS_MESSAGE: &str = "Por favor completa todos los campos";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Nombre,
    Cargo,
    Empresa,
    Telefono,
    Correo,
    Reto,
}

impl FormField {
    /// Every field, in the order the form renders them.
    pub const ALL: [FormField; 6] = [
        FormField::Nombre,
        FormField::Cargo,
        FormField::Empresa,
        FormField::Telefono,
        FormField::Correo,
        FormField::Reto,
    ];

    /// Value of the input's `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Nombre => "nombre",
            FormField::Cargo => "cargo",
            FormField::Empresa => "empresa",
            FormField::Telefono => "telefono",
            FormField::Correo => "correo",
            FormField::Reto => "reto",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Nombre => "Nombre y apellido",
            FormField::Cargo => "Cargo en la empresa",
            FormField::Empresa => "Nombre de la empresa",
            FormField::Telefono => "Teléfono de contacto",
            FormField::Correo => "Correo electrónico",
            FormField::Reto => "¿Cuál es el principal reto de tu empresa hoy?",
        }
    }

    /// `type` of the `<input>` for this field. `None` for `reto`, which is a textarea.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            FormField::Nombre | FormField::Cargo | FormField::Empresa => Some("text"),
            FormField::Telefono => Some("tel"),
            FormField::Correo => Some("email"),
            FormField::Reto => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub nombre: String,
    pub cargo: String,
    pub empresa: String,
    pub telefono: String,
    pub correo: String,
    pub reto: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Nombre => &self.nombre,
            FormField::Cargo => &self.cargo,
            FormField::Empresa => &self.empresa,
            FormField::Telefono => &self.telefono,
            FormField::Correo => &self.correo,
            FormField::Reto => &self.reto,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Nombre => &mut self.nombre,
            FormField::Cargo => &mut self.cargo,
            FormField::Empresa => &mut self.empresa,
            FormField::Telefono => &mut self.telefono,
            FormField::Correo => &mut self.correo,
            FormField::Reto => &mut self.reto,
        };
        *slot = value;
    }

    /// Fields that are empty or whitespace only, in form order.
    pub fn missing(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", MISSING_FIELDS_MESSAGE)]
pub struct ValidationError {
    pub missing: Vec<FormField>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form went from `Idle` to `Submitting`.
    Started,
    /// A submission is already in flight or done; nothing changed.
    Ignored,
}

/// State behind the lead capture form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadForm {
    fields: FormFields,
    state: SubmissionState,
    error: Option<String>,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.state == SubmissionState::Submitted
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.fields.set(field, value.into());
    }

    pub fn submit(&mut self) -> Result<SubmitOutcome, ValidationError> {
        if self.state != SubmissionState::Idle {
            return Ok(SubmitOutcome::Ignored);
        }

        self.error = None;

        let missing = self.fields.missing();
        if !missing.is_empty() {
            let err = ValidationError { missing };
            self.error = Some(err.to_string());
            return Err(err);
        }

        self.state = SubmissionState::Submitting;
        Ok(SubmitOutcome::Started)
    }

    /// Called once the simulated latency has elapsed.
    pub fn complete_submission(&mut self) -> bool {
        if self.state != SubmissionState::Submitting {
            return false;
        }
        self.state = SubmissionState::Submitted;
        true
    }
}
