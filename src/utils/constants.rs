/// Clave de localStorage para el token cuando TOKEN_STORAGE_KEY no está definida
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// Endpoints de la API de autenticación (relativos a la URL base)
pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";

/// Campo cuyo valor se muestra como fecha de calendario
pub const PUBLISHED_DATE_FIELD: &str = "published_date";

/// Valores aceptados para el campo role del registro
pub const ROLE_OPTIONS: [&str; 3] = ["ADMIN", "OWNER", "CUSTOMER"];

// Clases Tailwind compartidas entre páginas
pub const MESSAGE_SUCCESS_CLASS: &str = "text-center text-sm text-green-600";
pub const MESSAGE_ERROR_CLASS: &str = "text-center text-sm text-red-600";
pub const FIELD_ERROR_CLASS: &str = "text-sm text-red-600";
pub const BUTTON_IDLE_CLASS: &str = "w-full py-2 rounded bg-blue-600 hover:bg-blue-700 text-white";
pub const BUTTON_BUSY_CLASS: &str = "w-full py-2 rounded bg-gray-400 cursor-not-allowed";
