use crate::config::DEFAULT_QUESTIONS;
use crate::generation::GenerationError;
use crate::model::{Difficulty, Page};
use crate::results::QuizResult;
use crate::session::QuizSession;
use crate::store::{self, SessionStore};
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Receiver;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod requests;

/// Preferencias que guarda eframe entre ejecuciones (no el quiz: eso va en el almacén).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub page: Page,
    pub difficulty: Difficulty,
    pub num_questions: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            page: Page::Create,
            difficulty: Difficulty::Medium,
            num_questions: DEFAULT_QUESTIONS,
        }
    }
}

/// Lo que el usuario va rellenando en la página de creación.
#[derive(Debug, Clone, Default)]
pub struct CreateForm {
    pub document_path: String, // solo nativo
    pub document_name: String,
    pub document: Option<Vec<u8>>,
    pub difficulty: Difficulty,
    pub num_questions: u32,
}

pub type GenerationOutcome = Result<Vec<String>, GenerationError>;

pub struct QuizApp {
    pub page: Page,
    pub session: Option<QuizSession>,
    pub result: Option<QuizResult>,
    pub form: CreateForm,
    pub message: String,
    store: Box<dyn SessionStore>,
    mounted: bool,
    pending_generation: Option<Receiver<GenerationOutcome>>,
}

impl QuizApp {
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        Self::with_preferences(store, Preferences::default())
    }

    pub fn with_preferences(store: Box<dyn SessionStore>, prefs: Preferences) -> Self {
        Self {
            page: prefs.page,
            session: None,
            result: None,
            form: CreateForm {
                difficulty: prefs.difficulty,
                num_questions: prefs.num_questions,
                ..CreateForm::default()
            },
            message: String::new(),
            store,
            // La página restaurada todavía no ha leído el almacén
            mounted: false,
            pending_generation: None,
        }
    }

    /// Entrypoint desde eframe: recupera preferencias y abre el almacén de la plataforma.
    pub fn from_creation_context(cc: &eframe::CreationContext<'_>) -> Self {
        let prefs = cc
            .storage
            .and_then(|s| eframe::get_value::<Preferences>(s, eframe::APP_KEY))
            .unwrap_or_default();
        log::debug!("Preferencias restauradas: {prefs:?}");
        Self::with_preferences(store::platform_store(), prefs)
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            page: self.page,
            difficulty: self.form.difficulty,
            num_questions: self.form.num_questions,
        }
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    pub fn store_mut(&mut self) -> &mut dyn SessionStore {
        self.store.as_mut()
    }
}
