// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::rc::Rc;

use crate::models::form::FormKind;
use crate::models::route::Route;
use crate::services::{ApiClient, LocalTokenStorage};
use crate::state::reactivity::ReactiveState;
use crate::viewmodels::{AuthViewModel, FormController};

/// ViewModel de auth conectado al navegador
pub type BrowserAuth = AuthViewModel<ApiClient, LocalTokenStorage>;
pub type BrowserFormController = FormController<ApiClient, LocalTokenStorage>;

/// Estado global: ruta activa + capacidad de auth compartida por las páginas
#[derive(Clone)]
pub struct AppState {
    pub route: Rc<ReactiveState<Route>>,
    pub auth: Rc<BrowserAuth>,
}

impl AppState {
    pub fn new(initial_route: Route) -> Self {
        Self {
            route: Rc::new(ReactiveState::new(initial_route)),
            auth: Rc::new(AuthViewModel::new(ApiClient::new(), LocalTokenStorage::new())),
        }
    }

    pub fn current_route(&self) -> Route {
        self.route.get()
    }

    /// Controlador nuevo para la página que se está renderizando
    pub fn form_controller(&self, kind: FormKind) -> BrowserFormController {
        FormController::new(kind, self.auth.clone())
    }

    /// Navegar: apila la URL en el historial y notifica el cambio de ruta
    pub fn navigate(&self, route: Route) {
        if self.current_route() == route {
            return;
        }
        if let Err(e) = crate::dom::push_history_path(route.path()) {
            log::warn!("⚠️ [ROUTER] No se pudo actualizar el historial: {:?}", e);
        }
        log::info!("🧭 [ROUTER] Navegando a {}", route.path());
        self.route.set(route);
    }

    /// Sincronizar con la URL actual (popstate)
    pub fn sync_with_location(&self) {
        let route = Route::from_path(&crate::dom::current_pathname());
        if self.current_route() != route {
            self.route.set(route);
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.auth.current_token().is_some()
    }
}
