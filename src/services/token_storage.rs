// ============================================================================
// TOKEN STORAGE - Capacidad de persistencia del token (inyectada)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::{window, Storage};

use crate::config::CONFIG;
use crate::error::AuthError;

/// Almacén del token de autenticación
pub trait TokenStorage {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str) -> Result<(), AuthError>;
    fn clear(&self) -> Result<(), AuthError>;
}

fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Token en localStorage, guardado como string crudo (sin JSON)
#[derive(Clone, Debug)]
pub struct LocalTokenStorage {
    key: String,
}

impl LocalTokenStorage {
    pub fn new() -> Self {
        Self::with_key(&CONFIG.token_storage_key)
    }

    pub fn with_key(key: &str) -> Self {
        Self { key: key.to_string() }
    }

    fn storage(&self) -> Result<Storage, AuthError> {
        get_local_storage()
            .ok_or_else(|| AuthError::Storage("localStorage not available".to_string()))
    }
}

impl Default for LocalTokenStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStorage for LocalTokenStorage {
    fn get(&self) -> Option<String> {
        get_local_storage()?.get_item(&self.key).ok()?
    }

    fn set(&self, token: &str) -> Result<(), AuthError> {
        self.storage()?
            .set_item(&self.key, token)
            .map_err(|e| AuthError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), AuthError> {
        self.storage()?
            .remove_item(&self.key)
            .map_err(|e| AuthError::Storage(format!("{:?}", e)))
    }
}

/// Almacén en memoria (tests y entornos sin navegador). Los clones comparten datos.
#[derive(Clone, Debug)]
pub struct MemoryTokenStorage {
    key: String,
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryTokenStorage {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            items: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Lectura directa por clave
    pub fn item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn get(&self) -> Option<String> {
        self.item(&self.key)
    }

    fn set(&self, token: &str) -> Result<(), AuthError> {
        self.items
            .borrow_mut()
            .insert(self.key.clone(), token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        self.items.borrow_mut().remove(&self.key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trip() {
        let storage = MemoryTokenStorage::new("token");
        assert_eq!(storage.get(), None);

        storage.set("abc123").unwrap();
        assert_eq!(storage.get().as_deref(), Some("abc123"));
        assert_eq!(storage.item("token").as_deref(), Some("abc123"));

        storage.clear().unwrap();
        assert_eq!(storage.get(), None);
    }

    #[test]
    fn clones_share_the_same_items() {
        let storage = MemoryTokenStorage::new("token");
        let handle = storage.clone();
        storage.set("xyz").unwrap();
        assert_eq!(handle.get().as_deref(), Some("xyz"));
    }
}
