pub mod auth_viewmodel;
pub mod form_controller;

pub use auth_viewmodel::AuthViewModel;
pub use form_controller::FormController;
