use super::*;
use crate::config;
use crate::generation::{self, GenerationRequest};
use std::sync::mpsc::{self, TryRecvError};

impl QuizApp {
    pub fn is_generating(&self) -> bool {
        self.pending_generation.is_some()
    }

    /// Documento soltado sobre la ventana. En web llegan los bytes; en nativo, la ruta.
    pub fn accept_dropped_file(&mut self, file: &egui::DroppedFile) {
        if let Some(bytes) = &file.bytes {
            self.form.document_name = file.name.clone();
            self.form.document = Some(bytes.to_vec());
            self.message.clear();
            return;
        }
        if let Some(path) = &file.path {
            self.form.document_path = path.display().to_string();
            self.cargar_documento();
        }
    }

    /// Lee el fichero indicado en el campo de ruta.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn cargar_documento(&mut self) {
        let path = std::path::PathBuf::from(self.form.document_path.trim());
        match std::fs::read(&path) {
            Ok(bytes) => {
                self.form.document_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.form.document = Some(bytes);
                self.message.clear();
            }
            Err(err) => {
                self.form.document = None;
                self.form.document_name.clear();
                self.message = format!("No se pudo leer {}: {err}", path.display());
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn cargar_documento(&mut self) {}

    pub fn quitar_documento(&mut self) {
        self.form.document = None;
        self.form.document_name.clear();
        self.form.document_path.clear();
    }

    fn build_request(&self) -> GenerationRequest {
        GenerationRequest {
            file_name: self.form.document_name.clone(),
            document: self.form.document.clone().unwrap_or_default(),
            difficulty: self.form.difficulty,
            num_questions: self
                .form
                .num_questions
                .clamp(config::MIN_QUESTIONS, config::MAX_QUESTIONS),
        }
    }

    /// Lanza la petición al generador en segundo plano. El resultado se recoge
    /// en [`QuizApp::poll_generation`].
    pub fn generar_quiz(&mut self, ctx: &egui::Context) {
        if self.is_generating() {
            self.message = "⏳ Ya se está generando un quiz. Espera el resultado.".into();
            return;
        }
        let request = self.build_request();
        if let Err(err) = request.validate() {
            self.message = err.to_string();
            return;
        }

        let endpoint = config::generation_endpoint();
        let (tx, rx) = mpsc::channel::<GenerationOutcome>();
        self.pending_generation = Some(rx);
        self.message = "⏳ Generando preguntas...".into();

        let ctx = ctx.clone();
        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let outcome = generation::request_quiz(&endpoint, &request);
            let _ = tx.send(outcome);
            ctx.request_repaint();
        });
        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = generation::request_quiz(&endpoint, &request).await;
            let _ = tx.send(outcome);
            ctx.request_repaint();
        });
    }

    pub fn poll_generation(&mut self) {
        let polled = match self.pending_generation.as_ref() {
            Some(rx) => rx.try_recv(),
            None => return,
        };
        match polled {
            Ok(outcome) => {
                self.pending_generation = None;
                self.finish_generation(outcome);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.pending_generation = None;
                self.message = "La generación se interrumpió inesperadamente.".into();
            }
        }
    }

    /// Un quiz a la vez: mientras hay una generación en curso no se abre otro.
    pub(crate) fn refuse_while_generating(&mut self) -> bool {
        if self.is_generating() {
            self.message = "⏳ Espera a que termine la generación en curso.".into();
        }
        self.is_generating()
    }

    /// Aplica la respuesta del generador: o empieza el quiz o muestra el error.
    /// Solo se aplica en la página de creación; fuera de ella hay otro quiz en marcha.
    pub fn finish_generation(&mut self, outcome: GenerationOutcome) {
        if self.page != Page::Create {
            log::warn!("Generación descartada: ya no estamos en la página de creación");
            return;
        }
        match outcome {
            Ok(raws) => {
                log::info!("Generadas {} preguntas", raws.len());
                self.empezar_quiz(&raws);
            }
            Err(err) => {
                log::warn!("La generación falló: {err}");
                self.message = err.to_string();
            }
        }
    }
}
