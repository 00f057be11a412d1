// ============================================================================
// SCHEMA - Reglas de validación declarativas por formulario
// ============================================================================
// Cada formulario es una lista ordenada de (campo, comprobación, mensaje).
// Por campo gana la primera regla que falla; no hay reglas entre campos.
// ============================================================================

use regex::Regex;

use crate::models::form::{FieldErrors, FormValues};
use crate::utils::constants::ROLE_OPTIONS;

lazy_static::lazy_static! {
    // Producción "valid e-mail address" de HTML5
    static ref EMAIL_RE: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).expect("email regex is valid");
}

/// Comprobación aplicada al valor de un campo
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Check {
    Required,
    /// Los valores vacíos pasan; de eso se encarga Required
    Email,
    /// Longitud mínima en caracteres
    MinLength(usize),
    OneOf(&'static [&'static str]),
}

impl Check {
    pub fn passes(&self, value: &str) -> bool {
        match self {
            Check::Required => !value.is_empty(),
            Check::Email => value.is_empty() || EMAIL_RE.is_match(value),
            Check::MinLength(min) => value.encode_utf16().count() >= *min,
            Check::OneOf(options) => options.iter().any(|option| *option == value),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Rule {
    pub field: &'static str,
    pub check: Check,
    pub message: &'static str,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Schema {
    trimmed: Vec<&'static str>,
    rules: Vec<Rule>,
}

impl Schema {
    pub fn new() -> Self {
        Self {
            trimmed: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Recortar espacios del campo antes de comprobarlo
    pub fn trim(mut self, field: &'static str) -> Self {
        self.trimmed.push(field);
        self
    }

    pub fn rule(mut self, field: &'static str, check: Check, message: &'static str) -> Self {
        self.rules.push(Rule { field, check, message });
        self
    }

    pub fn login() -> Self {
        Schema::new()
            .rule("userName", Check::Required, "Email is required.")
            .rule("userName", Check::Email, "Invalid email")
            .rule("password", Check::Required, "Password is required.")
            .rule("password", Check::MinLength(6), "Password must be at least 6 character")
    }

    pub fn register() -> Self {
        Schema::new()
            .trim("userName")
            .trim("email")
            .rule("userName", Check::Required, "userName is required")
            .rule("email", Check::Required, "Email is required.")
            .rule("email", Check::Email, "Invalid email.")
            .rule("password", Check::Required, "password is required")
            .rule("password", Check::MinLength(6), "password must be at least 6 characters.")
            .rule("role", Check::Required, "Role is required.")
            .rule("role", Check::OneOf(&ROLE_OPTIONS), "Invalid role selected.")
    }

    /// Campos cubiertos, en orden de declaración
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = Vec::new();
        for rule in &self.rules {
            if !fields.contains(&rule.field) {
                fields.push(rule.field);
            }
        }
        fields
    }

    pub fn validate_field(&self, field: &str, value: &str) -> Option<&'static str> {
        let value = if self.trimmed.iter().any(|trimmed| *trimmed == field) {
            value.trim()
        } else {
            value
        };

        self.rules
            .iter()
            .filter(|rule| rule.field == field)
            .find(|rule| !rule.check.passes(value))
            .map(|rule| rule.message)
    }

    pub fn validate(&self, values: &FormValues) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for field in self.fields() {
            if let Some(message) = self.validate_field(field, values.get(field)) {
                errors.insert(field, message);
            }
        }
        errors
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}
