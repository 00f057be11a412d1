pub mod app;
pub mod header;
pub mod home;
pub mod about;
pub mod login;
pub mod register;
pub mod profile;
pub mod shared;

pub use app::render_app;
pub use header::render_header;
pub use home::render_home;
pub use about::render_about;
pub use login::render_login;
pub use register::render_register;
pub use profile::render_profile;
