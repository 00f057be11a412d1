pub mod auth_form;
pub mod field_input;
pub mod form_field;
pub mod nav_link;

pub use field_input::render_field_input;
pub use nav_link::render_nav_link;
