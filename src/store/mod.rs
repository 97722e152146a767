use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

pub mod handoff;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(not(target_arch = "wasm32"))]
mod file;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

/// Almacén clave-valor que sobrevive a recargas. Es el único canal entre páginas.
///
/// Los valores son siempre texto: quien guarda estructuras las codifica él mismo
/// (ver [`put_json`] / [`get_json`]).
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// Almacén en memoria, para tests y como último recurso.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

impl<S: SessionStore + ?Sized> SessionStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: String) {
        (**self).put(key, value)
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key)
    }
}

/// Almacén por defecto de la plataforma: fichero en nativo, `localStorage` en web.
pub fn platform_store() -> Box<dyn SessionStore> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(FileStore::open(crate::config::session_file()))
    }
    #[cfg(target_arch = "wasm32")]
    {
        match BrowserStore::new() {
            Some(store) => Box::new(store),
            None => {
                log::error!("localStorage no disponible; se usa un almacén en memoria");
                Box::new(MemoryStore::new())
            }
        }
    }
}

pub fn put_json<S, T>(store: &mut S, key: &str, value: &T)
where
    S: SessionStore + ?Sized,
    T: Serialize + ?Sized,
{
    match serde_json::to_string(value) {
        Ok(json) => store.put(key, json),
        Err(err) => log::error!("No se pudo serializar '{key}': {err}"),
    }
}

/// Un valor que no se puede decodificar cuenta como ausente.
pub fn get_json<S, T>(store: &S, key: &str) -> Option<T>
where
    S: SessionStore + ?Sized,
    T: DeserializeOwned,
{
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("Valor corrupto en '{key}', se ignora: {err}");
            None
        }
    }
}

pub fn get_number<S>(store: &S, key: &str) -> Option<usize>
where
    S: SessionStore + ?Sized,
{
    let raw = store.get(key)?;
    match raw.trim().parse() {
        Ok(n) => Some(n),
        Err(err) => {
            log::warn!("Número inválido en '{key}' ({raw:?}): {err}");
            None
        }
    }
}
