// src/generation.rs
//
// Cliente del servicio que genera las preguntas a partir de un PDF.

use crate::model::Difficulty;
use serde::Deserialize;

/// Lo que el usuario ha preparado en la página de creación.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub file_name: String,
    pub document: Vec<u8>,
    pub difficulty: Difficulty,
    pub num_questions: u32,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    mcqs: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// Mensaje del servicio, tal cual
    #[error("{message}")]
    Service { status: u16, message: String },
    #[error("No se pudo conectar con el generador: {0}")]
    Transport(String),
    #[error("Respuesta inválida del generador: {0}")]
    InvalidResponse(String),
    #[error("{0}")]
    InvalidDocument(String),
    #[error("El generador no devolvió ninguna pregunta.")]
    Empty,
}

impl GenerationRequest {
    /// Mismas comprobaciones que hace el servicio antes de aceptar el fichero.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.file_name.trim().is_empty() {
            return Err(GenerationError::InvalidDocument(
                "Primero sube un PDF.".into(),
            ));
        }
        if !self.file_name.to_lowercase().ends_with(".pdf") {
            return Err(GenerationError::InvalidDocument(
                "Tipo de fichero no válido. Sube un PDF.".into(),
            ));
        }
        if self.document.is_empty() {
            return Err(GenerationError::InvalidDocument(format!(
                "El fichero {} está vacío.",
                self.file_name
            )));
        }
        Ok(())
    }
}

/// Traduce estado HTTP + cuerpo al contrato del servicio.
pub fn interpret_response(status: u16, body: &str) -> Result<Vec<String>, GenerationError> {
    if (200..300).contains(&status) {
        let parsed: GenerationResponse = serde_json::from_str(body)
            .map_err(|err| GenerationError::InvalidResponse(err.to_string()))?;
        if parsed.mcqs.is_empty() {
            return Err(GenerationError::Empty);
        }
        return Ok(parsed.mcqs);
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| format!("HTTP {status}"));
    Err(GenerationError::Service { status, message })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn request_quiz(endpoint: &str, request: &GenerationRequest) -> Result<Vec<String>, GenerationError> {
    use reqwest::blocking::multipart::{Form, Part};

    request.validate()?;

    let client = reqwest::blocking::Client::builder()
        .timeout(crate::config::REQUEST_TIMEOUT)
        .build()
        .map_err(|err| GenerationError::Transport(err.to_string()))?;

    let pdf = Part::bytes(request.document.clone())
        .file_name(request.file_name.clone())
        .mime_str("application/pdf")
        .map_err(|err| GenerationError::Transport(err.to_string()))?;
    let form = Form::new()
        .part("pdf_file", pdf)
        .text("difficulty", request.difficulty.as_str())
        .text("numQuestions", request.num_questions.to_string());

    log::info!(
        "Pidiendo {} preguntas ({}) a {endpoint}",
        request.num_questions,
        request.difficulty.as_str()
    );

    let response = client
        .post(endpoint)
        .multipart(form)
        .send()
        .map_err(|err| GenerationError::Transport(err.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .text()
        .map_err(|err| GenerationError::InvalidResponse(err.to_string()))?;
    interpret_response(status, &body)
}

#[cfg(target_arch = "wasm32")]
pub async fn request_quiz(endpoint: &str, request: &GenerationRequest) -> Result<Vec<String>, GenerationError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, RequestMode, Response};

    request.validate()?;

    let js_err = |err: JsValue| GenerationError::Transport(format!("{err:?}"));

    let window = web_sys::window()
        .ok_or_else(|| GenerationError::Transport("No existe window en entorno WASM.".into()))?;

    let bytes = js_sys::Uint8Array::from(request.document.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let opts = BlobPropertyBag::new();
    opts.set_type("application/pdf");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts).map_err(js_err)?;

    let form = FormData::new().map_err(js_err)?;
    form.append_with_blob_and_filename("pdf_file", &blob, &request.file_name)
        .map_err(js_err)?;
    form.append_with_str("difficulty", request.difficulty.as_str())
        .map_err(js_err)?;
    form.append_with_str("numQuestions", &request.num_questions.to_string())
        .map_err(js_err)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::Cors);
    init.set_body(&form);

    log::info!(
        "Pidiendo {} preguntas ({}) a {endpoint}",
        request.num_questions,
        request.difficulty.as_str()
    );

    let req = Request::new_with_str_and_init(endpoint, &init).map_err(js_err)?;
    let resp_value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(js_err)?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| GenerationError::InvalidResponse("La respuesta fetch no es un Response válido.".into()))?;

    let text = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .ok_or_else(|| GenerationError::InvalidResponse("response.text() no devolvió string".into()))?;

    interpret_response(response.status(), &text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, bytes: &[u8]) -> GenerationRequest {
        GenerationRequest {
            file_name: name.into(),
            document: bytes.to_vec(),
            difficulty: Difficulty::Medium,
            num_questions: 5,
        }
    }

    #[test]
    fn success_returns_raw_questions() {
        let body = r#"{"mcqs": ["Question: a", "Question: b"]}"#;
        assert_eq!(
            interpret_response(200, body),
            Ok(vec!["Question: a".to_string(), "Question: b".to_string()])
        );
    }

    #[test]
    fn error_message_is_surfaced_verbatim() {
        let err = interpret_response(413, r#"{"error":"file too large"}"#).unwrap_err();
        assert_eq!(err.to_string(), "file too large");
        assert_eq!(
            err,
            GenerationError::Service {
                status: 413,
                message: "file too large".into()
            }
        );
    }

    #[test]
    fn non_json_error_falls_back_to_status() {
        let err = interpret_response(502, "<html>Bad gateway</html>").unwrap_err();
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn malformed_success_body_is_invalid() {
        assert!(matches!(
            interpret_response(200, r#"{"questions": []}"#),
            Err(GenerationError::InvalidResponse(_))
        ));
        assert_eq!(interpret_response(200, r#"{"mcqs": []}"#), Err(GenerationError::Empty));
    }

    #[test]
    fn only_non_empty_pdfs_are_sent() {
        assert!(request("notes.pdf", b"%PDF-1.4").validate().is_ok());
        assert!(request("NOTES.PDF", b"%PDF-1.4").validate().is_ok());
        assert!(matches!(
            request("notes.docx", b"x").validate(),
            Err(GenerationError::InvalidDocument(_))
        ));
        assert!(request("notes.pdf", b"").validate().is_err());
        assert!(request("", b"x").validate().is_err());
    }
}
