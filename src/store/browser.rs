use super::SessionStore;

/// `window.localStorage` del navegador.
pub struct BrowserStore {
    storage: web_sys::Storage,
}

impl BrowserStore {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::error!("localStorage.getItem('{key}') falló: {err:?}");
                None
            }
        }
    }

    fn put(&mut self, key: &str, value: String) {
        if let Err(err) = self.storage.set_item(key, &value) {
            log::error!("localStorage.setItem('{key}') falló: {err:?}");
        }
    }

    fn remove(&mut self, key: &str) {
        if let Err(err) = self.storage.remove_item(key) {
            log::error!("localStorage.removeItem('{key}') falló: {err:?}");
        }
    }
}
