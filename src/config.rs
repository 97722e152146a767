// src/config.rs
//
// De dónde salen el endpoint del generador y las rutas locales.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

#[cfg(target_arch = "wasm32")]
const DEFAULT_ENDPOINT: &str = "/generate_quiz";
#[cfg(target_arch = "wasm32")]
const ENDPOINT_STORAGE_KEY: &str = "synthsia_endpoint";
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_NATIVE_ENDPOINT: &str = "http://127.0.0.1:5000/generate_quiz";
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_SESSION_FILE: &str = "synthsia_session.json";

/// Generar preguntas de un PDF largo tarda; no cortamos antes de dos minutos.
#[cfg(not(target_arch = "wasm32"))]
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Límites del selector de número de preguntas
pub const MIN_QUESTIONS: u32 = 1;
pub const MAX_QUESTIONS: u32 = 20;
pub const DEFAULT_QUESTIONS: u32 = 10;

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().as_deref().and_then(normalize)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn generation_endpoint() -> String {
    env_value("SYNTHSIA_ENDPOINT").unwrap_or_else(|| DEFAULT_NATIVE_ENDPOINT.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn session_file() -> PathBuf {
    env_value("SYNTHSIA_SESSION_FILE")
        .unwrap_or_else(|| DEFAULT_SESSION_FILE.to_string())
        .into()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn export_dir() -> PathBuf {
    env_value("SYNTHSIA_EXPORT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// En web: variable de compilación, luego `?endpoint=` en la URL, luego un valor
/// guardado por el usuario en `localStorage`. Sin nada de eso, el mismo origen.
#[cfg(target_arch = "wasm32")]
pub fn generation_endpoint() -> String {
    let sources: [fn() -> Option<String>; 3] = [
        || option_env!("SYNTHSIA_ENDPOINT").and_then(normalize),
        endpoint_in_page_url,
        endpoint_in_browser_store,
    ];
    sources
        .iter()
        .find_map(|source| source())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

#[cfg(target_arch = "wasm32")]
fn endpoint_in_page_url() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get("endpoint").as_deref().and_then(normalize)
}

#[cfg(target_arch = "wasm32")]
fn endpoint_in_browser_store() -> Option<String> {
    use crate::store::{BrowserStore, SessionStore};
    BrowserStore::new()?
        .get(ENDPOINT_STORAGE_KEY)
        .as_deref()
        .and_then(normalize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_ignored() {
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize(" http://x/generate_quiz \n").as_deref(), Some("http://x/generate_quiz"));
    }
}
