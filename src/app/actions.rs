use super::*;
use crate::data::read_sample_quiz;
use crate::model::OptionKey;
use crate::results::{self, ExportError, TRANSCRIPT_FILE_NAME};
use crate::session::Transition;
use crate::store::handoff;

impl QuizApp {
    /// Clic en una opción. Solo cuenta la primera respuesta de cada pregunta;
    /// se guarda al momento para que una recarga no la pierda.
    pub fn responder(&mut self, key: OptionKey) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.select_option(key) {
            log::debug!("Pregunta {} respondida: {key}", session.current_index() + 1);
            handoff::save_answers(self.store.as_mut(), session.answers());
        }
    }

    /// "Siguiente" o, en la última pregunta, "Terminar quiz".
    pub fn siguiente(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        match session.go_next() {
            Transition::InProgress(session) => self.session = Some(session),
            Transition::Finished(result) => {
                handoff::publish_result(self.store.as_mut(), &result);
                self.navigate(Page::Results);
            }
        }
    }

    pub fn anterior(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.go_previous();
        }
    }

    /// Empieza un quiz con las preguntas que ya tenemos en bruto.
    pub fn empezar_quiz(&mut self, raws: &[String]) {
        if raws.is_empty() {
            self.message = "No hay preguntas que mostrar.".to_owned();
            return;
        }
        handoff::stash_generated(self.store.as_mut(), raws);
        self.navigate(Page::Quiz);
    }

    pub fn usar_quiz_de_ejemplo(&mut self) {
        if self.refuse_while_generating() {
            return;
        }
        match read_sample_quiz() {
            Some(sample) => {
                log::info!("Quiz de ejemplo: {}", sample.title);
                self.empezar_quiz(&sample.mcqs);
            }
            None => self.message = "El quiz de ejemplo no está disponible.".to_owned(),
        }
    }

    /// Repite un quiz a partir de una transcripción descargada antes.
    pub fn importar_transcripcion(&mut self, text: &str) {
        if self.refuse_while_generating() {
            return;
        }
        let blocks = results::transcript_blocks(text);
        if blocks.is_empty() {
            self.message = "La transcripción no contiene preguntas.".to_owned();
            return;
        }
        log::info!("Transcripción importada: {} preguntas", blocks.len());
        self.empezar_quiz(&blocks);
    }

    pub fn descargar_transcripcion(&mut self) {
        let outcome = match self.result.as_ref() {
            Some(result) if !result.finalized_questions.is_empty() => {
                let content = results::export_transcript(&result.finalized_questions);
                results::offer_download(TRANSCRIPT_FILE_NAME, &content)
            }
            _ => Err(ExportError::NothingToExport),
        };
        self.message = match outcome {
            Ok(location) => format!("📄 Quiz descargado: {location}"),
            Err(err) => {
                log::warn!("Descarga fallida: {err}");
                err.to_string()
            }
        };
    }
}
