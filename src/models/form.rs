// ============================================================================
// FORM MODELS - Valores, errores y resultado de los formularios de auth
// ============================================================================

use std::collections::BTreeMap;

use crate::error::AuthError;
use crate::models::auth::{LoginRequest, RegisterRequest, Role};
use crate::models::route::Route;
use crate::models::schema::Schema;
use crate::utils::constants::{LOGIN_PATH, REGISTER_PATH};

/// Valores del formulario: todos los campos existen siempre
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct FormValues {
    entries: Vec<(&'static str, String)>,
}

impl FormValues {
    pub fn new(fields: &[(&'static str, &str)]) -> Self {
        Self {
            entries: fields
                .iter()
                .map(|(name, value)| (*name, value.to_string()))
                .collect(),
        }
    }

    /// Valor de un campo; "" si el campo no pertenece al formulario
    pub fn get(&self, field: &str) -> &str {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    /// Actualiza un campo existente. Los campos desconocidos se ignoran.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some((_, current)) => {
                *current = value.into();
                true
            }
            None => false,
        }
    }

    /// Nombre estático del campo, si existe
    pub fn field_key(&self, field: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(name, _)| *name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(name, value)| (*name, value.as_str()))
    }
}

/// Errores de validación por campo
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, &'static str>,
}

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        self.errors.insert(field, message);
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.errors.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

/// Mensaje de página tras un envío. Un mensaje vacío no se muestra.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SubmissionResult {
    pub message: String,
    pub success: bool,
}

/// Lo que el manejador de envío devuelve al controlador
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SubmissionOutcome {
    /// Estado HTTP de éxito
    Success {
        message: String,
        navigate_to: Option<Route>,
        reset_form: bool,
    },
    /// Estado HTTP de error con el mensaje del servidor
    Rejected { message: String },
    /// Fallo de red o respuesta ilegible
    Failed { message: String },
}

impl SubmissionOutcome {
    pub fn result(&self) -> SubmissionResult {
        match self {
            SubmissionOutcome::Success { message, .. } => SubmissionResult {
                message: message.clone(),
                success: true,
            },
            SubmissionOutcome::Rejected { message } | SubmissionOutcome::Failed { message } => {
                SubmissionResult {
                    message: message.clone(),
                    success: false,
                }
            }
        }
    }
}

/// Formularios de la aplicación
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormKind {
    Login,
    Register,
}

impl FormKind {
    pub fn schema(&self) -> Schema {
        match self {
            FormKind::Login => Schema::login(),
            FormKind::Register => Schema::register(),
        }
    }

    pub fn initial_values(&self) -> FormValues {
        match self {
            FormKind::Login => FormValues::new(&[("userName", ""), ("password", "")]),
            FormKind::Register => FormValues::new(&[
                ("userName", ""),
                ("email", ""),
                ("password", ""),
                ("role", Role::default().as_str()),
            ]),
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            FormKind::Login => LOGIN_PATH,
            FormKind::Register => REGISTER_PATH,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormKind::Login => "Login",
            FormKind::Register => "Register",
        }
    }

    /// Texto del botón según si hay un envío en curso
    pub fn submit_label(&self, submitting: bool) -> &'static str {
        match (self, submitting) {
            (FormKind::Login, false) => "Login",
            (FormKind::Login, true) => "Logging in...",
            (FormKind::Register, false) => "Register",
            (FormKind::Register, true) => "Registering...",
        }
    }

    /// Mensaje genérico ante fallo de red o de parseo
    pub fn server_error_message(&self) -> &'static str {
        match self {
            FormKind::Login => "Server Error",
            FormKind::Register => "Server error.",
        }
    }

    pub fn success_outcome(&self) -> SubmissionOutcome {
        match self {
            FormKind::Login => SubmissionOutcome::Success {
                message: String::new(),
                navigate_to: Some(Route::Home),
                reset_form: false,
            },
            FormKind::Register => SubmissionOutcome::Success {
                message: "Registered successfully".to_string(),
                navigate_to: None,
                reset_form: true,
            },
        }
    }

    /// Cuerpo JSON tipado a partir de los valores ya validados
    pub fn request_body(&self, values: &FormValues) -> Result<serde_json::Value, AuthError> {
        let body = match self {
            FormKind::Login => serde_json::to_value(LoginRequest {
                user_name: values.get("userName").to_string(),
                password: values.get("password").to_string(),
            }),
            FormKind::Register => serde_json::to_value(RegisterRequest {
                user_name: values.get("userName").to_string(),
                email: values.get("email").to_string(),
                password: values.get("password").to_string(),
                role: values.get("role").parse()?,
            }),
        };
        body.map_err(|e| AuthError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_values_contain_every_field() {
        let login = FormKind::Login.initial_values();
        assert_eq!(login.fields().collect::<Vec<_>>(), vec!["userName", "password"]);

        let register = FormKind::Register.initial_values();
        assert_eq!(register.get("role"), "CUSTOMER");
        assert_eq!(register.fields().count(), 4);
    }

    #[test]
    fn unknown_fields_are_never_added() {
        let mut values = FormKind::Login.initial_values();
        assert!(!values.set("email", "ana@example.com"));
        assert_eq!(values.fields().count(), 2);
        assert_eq!(values.get("email"), "");
    }

    #[test]
    fn register_body_keeps_raw_values() {
        let mut values = FormKind::Register.initial_values();
        values.set("userName", " ana ");
        values.set("email", "ana@example.com");
        values.set("password", "secret1");

        let body = FormKind::Register.request_body(&values).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "userName": " ana ",
                "email": "ana@example.com",
                "password": "secret1",
                "role": "CUSTOMER",
            })
        );
    }

    #[test]
    fn register_body_rejects_unknown_role() {
        let mut values = FormKind::Register.initial_values();
        values.set("role", "ROOT");
        assert_eq!(
            FormKind::Register.request_body(&values),
            Err(AuthError::InvalidRole("ROOT".to_string()))
        );
    }

    #[test]
    fn outcome_maps_to_page_result() {
        let failed = SubmissionOutcome::Failed { message: "Server error.".to_string() };
        assert_eq!(
            failed.result(),
            SubmissionResult { message: "Server error.".to_string(), success: false }
        );
        assert!(FormKind::Login.success_outcome().result().success);
        assert_eq!(
            FormKind::Register.success_outcome().result().message,
            "Registered successfully"
        );
    }
}
