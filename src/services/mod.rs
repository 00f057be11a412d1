pub mod api_client;
pub mod token_storage;

pub use api_client::{ApiClient, ApiResponse, AuthTransport};
pub use token_storage::{LocalTokenStorage, MemoryTokenStorage, TokenStorage};
