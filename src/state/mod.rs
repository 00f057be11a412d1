// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod form_state;
pub mod field_input;
pub mod app_state;

pub use reactivity::*;
pub use form_state::*;
pub use field_input::*;
pub use app_state::*;
