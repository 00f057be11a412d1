pub mod auth;
pub mod form;
pub mod route;
pub mod schema;

pub use auth::*;
pub use form::*;
pub use route::*;
pub use schema::*;
