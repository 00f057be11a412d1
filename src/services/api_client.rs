// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio: envía el JSON y devuelve estado + cuerpo
// ============================================================================

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::error::AuthError;
use crate::models::auth::AuthResponse;

/// Respuesta HTTP ya parseada
#[derive(Clone, PartialEq, Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub body: AuthResponse,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transporte de la API de autenticación
#[allow(async_fn_in_trait)]
pub trait AuthTransport {
    /// POST JSON a `path` (relativo a la URL base)
    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<ApiResponse, AuthError>;
}

/// Cliente API sobre gloo-net
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.api_base_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthTransport for ApiClient {
    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<ApiResponse, AuthError> {
        let url = self.url(path);
        log::info!("🌐 [API] POST {}", url);

        let response = Request::post(&url)
            .json(body)
            .map_err(|e| AuthError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .json::<AuthResponse>()
            .await
            .map_err(|e| AuthError::Parse(e.to_string()))?;

        log::debug!("📨 [API] {} -> HTTP {}", path, status);
        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
pub mod mock {
    // Transporte en memoria para tests: respuestas en cola y registro de llamadas

    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use futures::channel::oneshot;

    use super::*;

    #[derive(Clone, Default)]
    pub struct MockTransport {
        responses: Rc<RefCell<VecDeque<Result<ApiResponse, AuthError>>>>,
        calls: Rc<RefCell<Vec<(String, serde_json::Value)>>>,
        gate: Rc<RefCell<Option<oneshot::Receiver<()>>>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(&self, status: u16, body: serde_json::Value) -> &Self {
            let body = serde_json::from_value(body).unwrap();
            self.responses
                .borrow_mut()
                .push_back(Ok(ApiResponse { status, body }));
            self
        }

        pub fn fail(&self, error: AuthError) -> &Self {
            self.responses.borrow_mut().push_back(Err(error));
            self
        }

        /// La próxima llamada espera hasta que se envíe por el sender devuelto
        pub fn hold(&self) -> oneshot::Sender<()> {
            let (sender, receiver) = oneshot::channel();
            *self.gate.borrow_mut() = Some(receiver);
            sender
        }

        pub fn calls(&self) -> Vec<(String, serde_json::Value)> {
            self.calls.borrow().clone()
        }
    }

    impl AuthTransport for MockTransport {
        async fn post_json(
            &self,
            path: &str,
            body: &serde_json::Value,
        ) -> Result<ApiResponse, AuthError> {
            self.calls.borrow_mut().push((path.to_string(), body.clone()));

            let gate = self.gate.borrow_mut().take();
            if let Some(receiver) = gate {
                let _ = receiver.await;
            }

            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(AuthError::Network("no mock response queued".to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let client = ApiClient::with_base_url("http://localhost:8000/");
        assert_eq!(client.url("/auth/login"), "http://localhost:8000/auth/login");
    }

    #[test]
    fn success_means_2xx() {
        let response = |status| ApiResponse { status, body: AuthResponse::default() };
        assert!(response(200).is_success());
        assert!(response(201).is_success());
        assert!(!response(400).is_success());
        assert!(!response(500).is_success());
    }
}
