// ============================================================================
// FORM STATE - Estado explícito del formulario + reducer por eventos
// ============================================================================
// Valores, errores, campos tocados y flag de envío. Todas las mutaciones
// pasan por dispatch(FormEvent) y devuelven la transición a ejecutar.
// ============================================================================

use std::collections::HashSet;

use crate::models::form::{FieldErrors, FormKind, FormValues, SubmissionOutcome, SubmissionResult};
use crate::models::route::Route;
use crate::models::schema::Schema;

/// Eventos discretos que modifican el formulario
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FormEvent {
    FieldChanged { field: String, value: String },
    FieldBlurred(String),
    SubmitRequested,
    SubmissionResolved(SubmissionOutcome),
}

/// Efecto que el llamador debe ejecutar tras un evento
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Transition {
    None,
    /// Los valores pasaron el schema: enviar esta copia
    Submit(FormValues),
    Navigate(Route),
}

#[derive(Clone, Debug)]
pub struct FormState {
    kind: FormKind,
    schema: Schema,
    initial: FormValues,
    values: FormValues,
    errors: FieldErrors,
    touched: HashSet<&'static str>,
    submitting: bool,
    result: SubmissionResult,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        let initial = kind.initial_values();
        Self {
            kind,
            schema: kind.schema(),
            values: initial.clone(),
            initial,
            errors: FieldErrors::default(),
            touched: HashSet::new(),
            submitting: false,
            result: SubmissionResult::default(),
        }
    }

    pub fn dispatch(&mut self, event: FormEvent) -> Transition {
        match event {
            FormEvent::FieldChanged { field, value } => {
                if self.values.set(&field, value) {
                    self.errors = self.schema.validate(&self.values);
                } else {
                    log::warn!("⚠️ [FORM] Campo desconocido en {:?}: {}", self.kind, field);
                }
                Transition::None
            }
            FormEvent::FieldBlurred(field) => {
                if let Some(key) = self.values.field_key(&field) {
                    self.touched.insert(key);
                    self.errors = self.schema.validate(&self.values);
                }
                Transition::None
            }
            FormEvent::SubmitRequested => self.request_submit(),
            FormEvent::SubmissionResolved(outcome) => self.resolve(outcome),
        }
    }

    fn request_submit(&mut self) -> Transition {
        if self.submitting {
            log::debug!("⏳ [FORM] Envío ya en curso, ignorando submit");
            return Transition::None;
        }

        // Un intento de envío muestra los errores de todos los campos
        self.touched.extend(self.values.fields());
        self.errors = self.schema.validate(&self.values);

        if !self.errors.is_empty() {
            log::info!("❌ [FORM] {:?}: {} campo(s) inválido(s)", self.kind, self.errors.len());
            return Transition::None;
        }

        self.result = SubmissionResult::default();
        self.submitting = true;
        Transition::Submit(self.values.clone())
    }

    fn resolve(&mut self, outcome: SubmissionOutcome) -> Transition {
        self.submitting = false;
        self.result = outcome.result();

        match outcome {
            SubmissionOutcome::Success { navigate_to, reset_form, .. } => {
                if reset_form {
                    self.reset();
                }
                navigate_to.map_or(Transition::None, Transition::Navigate)
            }
            SubmissionOutcome::Rejected { .. } | SubmissionOutcome::Failed { .. } => {
                Transition::None
            }
        }
    }

    /// Volver a los valores iniciales. El mensaje de resultado se conserva.
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors = FieldErrors::default();
        self.touched.clear();
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field)
    }

    pub fn error(&self, field: &str) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    /// Error a mostrar: solo si el campo fue tocado
    pub fn visible_error(&self, field: &str) -> Option<&'static str> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.schema.validate(&self.values).is_empty()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn result(&self) -> &SubmissionResult {
        &self.result
    }
}
