// ============================================================================
// AUTH VIEWMODEL - Manejador de envío de login / registro
// ============================================================================
// Serializa los valores, llama al transporte, interpreta la respuesta y
// persiste el token. Todos los errores terminan aquí como SubmissionOutcome.
// ============================================================================

use crate::models::form::{FormKind, FormValues, SubmissionOutcome};
use crate::services::{AuthTransport, TokenStorage};

pub struct AuthViewModel<T, S> {
    transport: T,
    storage: S,
}

impl<T: AuthTransport, S: TokenStorage> AuthViewModel<T, S> {
    pub fn new(transport: T, storage: S) -> Self {
        Self { transport, storage }
    }

    pub fn current_token(&self) -> Option<String> {
        self.storage.get()
    }

    /// Enviar valores ya validados por el schema
    pub async fn submit(&self, kind: FormKind, values: &FormValues) -> SubmissionOutcome {
        let body = match kind.request_body(values) {
            Ok(body) => body,
            Err(e) => {
                log::error!("❌ [AUTH] No se pudo construir la petición {:?}: {}", kind, e);
                return SubmissionOutcome::Failed {
                    message: kind.server_error_message().to_string(),
                };
            }
        };

        log::info!("🔐 [AUTH] Enviando {:?} para {}", kind, values.get("userName"));

        let response = match self.transport.post_json(kind.endpoint(), &body).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("❌ [AUTH] {:?} falló: {}", kind, e);
                return SubmissionOutcome::Failed {
                    message: kind.server_error_message().to_string(),
                };
            }
        };

        if !response.is_success() {
            log::warn!("⚠️ [AUTH] {:?} rechazado: HTTP {}", kind, response.status);
            return SubmissionOutcome::Rejected {
                message: response.body.message.unwrap_or_default(),
            };
        }

        match response.body.token.as_deref() {
            Some(token) => match self.storage.set(token) {
                Ok(()) => log::info!("💾 [AUTH] Token guardado"),
                Err(e) => log::error!("❌ [AUTH] Error guardando token: {}", e),
            },
            None => log::warn!("⚠️ [AUTH] Respuesta correcta sin token"),
        }

        log::info!("✅ [AUTH] {:?} completado", kind);
        kind.success_outcome()
    }

    pub async fn login(&self, values: &FormValues) -> SubmissionOutcome {
        self.submit(FormKind::Login, values).await
    }

    pub async fn register(&self, values: &FormValues) -> SubmissionOutcome {
        self.submit(FormKind::Register, values).await
    }

    /// Cerrar sesión: borrar el token guardado
    pub fn sign_out(&self) {
        match self.storage.clear() {
            Ok(()) => log::info!("👋 [AUTH] Token eliminado"),
            Err(e) => log::error!("❌ [AUTH] Error eliminando token: {}", e),
        }
    }
}
