// ============================================================================
// FORM CONTROLLER - Orquesta FormState + AuthViewModel
// ============================================================================

use std::rc::Rc;

use crate::models::form::FormKind;
use crate::services::{AuthTransport, TokenStorage};
use crate::state::form_state::{FormEvent, FormState, Transition};
use crate::state::reactivity::ReactiveState;
use crate::viewmodels::auth_viewmodel::AuthViewModel;

/// Controlador de un formulario concreto. Cada página crea el suyo.
pub struct FormController<T, S> {
    form: Rc<ReactiveState<FormState>>,
    auth: Rc<AuthViewModel<T, S>>,
}

impl<T, S> Clone for FormController<T, S> {
    fn clone(&self) -> Self {
        Self {
            form: self.form.clone(),
            auth: self.auth.clone(),
        }
    }
}

impl<T: AuthTransport, S: TokenStorage> FormController<T, S> {
    pub fn new(kind: FormKind, auth: Rc<AuthViewModel<T, S>>) -> Self {
        Self {
            form: Rc::new(ReactiveState::new(FormState::new(kind))),
            auth,
        }
    }

    /// Estado observable (las vistas se suscriben para sincronizar el DOM)
    pub fn form(&self) -> &ReactiveState<FormState> {
        &self.form
    }

    pub fn handle_change(&self, field: &str, value: &str) {
        self.form.update(|state| {
            state.dispatch(FormEvent::FieldChanged {
                field: field.to_string(),
                value: value.to_string(),
            })
        });
    }

    pub fn handle_blur(&self, field: &str) {
        self.form
            .update(|state| state.dispatch(FormEvent::FieldBlurred(field.to_string())));
    }

    /// Validar y, si procede, enviar. Devuelve la transición final
    /// (Navigate tras un login correcto).
    pub async fn submit(&self) -> Transition {
        let transition = self.form.update(|state| state.dispatch(FormEvent::SubmitRequested));

        let values = match transition {
            Transition::Submit(values) => values,
            other => return other,
        };

        let kind = self.form.with(|state| state.kind());
        let outcome = self.auth.submit(kind, &values).await;

        self.form
            .update(|state| state.dispatch(FormEvent::SubmissionResolved(outcome)))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use futures::future::join3;
    use serde_json::json;

    use super::*;
    use crate::error::AuthError;
    use crate::models::route::Route;
    use crate::services::api_client::mock::MockTransport;
    use crate::services::MemoryTokenStorage;

    type TestController = FormController<MockTransport, MemoryTokenStorage>;

    fn controller(kind: FormKind) -> (TestController, MockTransport, MemoryTokenStorage) {
        let transport = MockTransport::new();
        let storage = MemoryTokenStorage::new("token");
        let auth = Rc::new(AuthViewModel::new(transport.clone(), storage.clone()));
        (FormController::new(kind, auth), transport, storage)
    }

    fn fill_login(controller: &FormController<MockTransport, MemoryTokenStorage>) {
        controller.handle_change("userName", "ana@example.com");
        controller.handle_change("password", "secret1");
    }

    #[test]
    fn empty_required_fields_block_the_request() {
        let (controller, transport, _) = controller(FormKind::Register);

        assert_eq!(block_on(controller.submit()), Transition::None);

        assert!(transport.calls().is_empty());
        controller.form().with(|state| {
            assert_eq!(state.visible_error("userName"), Some("userName is required"));
            assert_eq!(state.visible_error("email"), Some("Email is required."));
            assert_eq!(state.visible_error("password"), Some("password is required"));
            assert_eq!(state.visible_error("role"), None);
            assert!(!state.is_submitting());
        });
    }

    #[test]
    fn malformed_login_email_blocks_submission() {
        let (controller, transport, _) = controller(FormKind::Login);
        controller.handle_change("userName", "ana.example.com");
        controller.handle_change("password", "secret1");

        block_on(controller.submit());

        assert!(transport.calls().is_empty());
        controller.form().with(|state| {
            assert_eq!(state.visible_error("userName"), Some("Invalid email"));
        });
    }

    #[test]
    fn short_register_password_blocks_submission() {
        let (controller, transport, _) = controller(FormKind::Register);
        controller.handle_change("userName", "ana");
        controller.handle_change("email", "ana@example.com");
        controller.handle_change("password", "12345");

        block_on(controller.submit());

        assert!(transport.calls().is_empty());
        controller.form().with(|state| {
            assert_eq!(
                state.visible_error("password"),
                Some("password must be at least 6 characters.")
            );
        });
    }

    #[test]
    fn successful_login_navigates_and_persists_token() {
        let (controller, transport, storage) = controller(FormKind::Login);
        transport.respond(200, json!({ "token": "abc123" }));
        fill_login(&controller);

        let transition = block_on(controller.submit());

        assert_eq!(transition, Transition::Navigate(Route::Home));
        assert_eq!(storage.item("token").as_deref(), Some("abc123"));
        controller.form().with(|state| {
            assert!(state.result().success);
            assert!(!state.is_submitting());
        });
    }

    #[test]
    fn failed_register_keeps_values_and_shows_message() {
        let (controller, transport, _) = controller(FormKind::Register);
        transport.respond(400, json!({ "message": "Email already exists" }));
        controller.handle_change("userName", "ana");
        controller.handle_change("email", "ana@example.com");
        controller.handle_change("password", "secret1");
        controller.handle_change("role", "OWNER");

        block_on(controller.submit());

        controller.form().with(|state| {
            assert_eq!(state.result().message, "Email already exists");
            assert!(!state.result().success);
            assert_eq!(state.value("userName"), "ana");
            assert_eq!(state.value("email"), "ana@example.com");
            assert_eq!(state.value("password"), "secret1");
            assert_eq!(state.value("role"), "OWNER");
        });
    }

    #[test]
    fn network_failure_releases_the_form() {
        let (controller, transport, _) = controller(FormKind::Register);
        transport.fail(AuthError::Network("offline".to_string()));
        controller.handle_change("userName", "ana");
        controller.handle_change("email", "ana@example.com");
        controller.handle_change("password", "secret1");

        block_on(controller.submit());

        controller.form().with(|state| {
            assert_eq!(state.result().message, "Server error.");
            assert!(!state.is_submitting());
        });
    }

    #[test]
    fn second_submit_while_in_flight_is_a_no_op() {
        let (controller, transport, _) = controller(FormKind::Login);
        transport.respond(200, json!({ "token": "abc123" }));
        let release = transport.hold();
        fill_login(&controller);

        let second_result = RefCell::new(None);
        let (first, _, _) = block_on(join3(
            controller.submit(),
            async {
                // El primer envío está bloqueado en el transporte
                assert!(controller.form().with(|state| state.is_submitting()));
                *second_result.borrow_mut() = Some(controller.submit().await);
                assert_eq!(transport.calls().len(), 1);
            },
            async move {
                release.send(()).unwrap();
            },
        ));

        assert_eq!(first, Transition::Navigate(Route::Home));
        assert_eq!(*second_result.borrow(), Some(Transition::None));
        assert_eq!(transport.calls().len(), 1);
    }

    #[test]
    fn subscribers_observe_the_submitting_flag() {
        let (controller, transport, _) = controller(FormKind::Login);
        transport.respond(200, json!({}));
        fill_login(&controller);

        let flags = Rc::new(RefCell::new(Vec::new()));
        let flags_clone = flags.clone();
        controller
            .form()
            .subscribe(move |state| flags_clone.borrow_mut().push(state.is_submitting()));

        block_on(controller.submit());

        assert_eq!(*flags.borrow(), vec![true, false]);
    }
}
