use super::*;
use crate::store::handoff;

impl QuizApp {
    /// Cambia de página. La nueva página leerá el almacén al montarse,
    /// igual que si se hubiera cargado desde cero.
    pub fn navigate(&mut self, page: Page) {
        self.unmount_page();
        log::debug!("Página {:?} -> {:?}", self.page, page);
        self.page = page;
        self.mounted = false;
        self.message.clear();
    }

    /// Se llama al principio de cada frame. Monta la página actual si hace falta;
    /// si la página redirige, monta también la de destino.
    pub fn ensure_mounted(&mut self) {
        while !self.mounted {
            self.mounted = true;
            match self.page {
                Page::Create => {}
                Page::Quiz => self.mount_quiz(),
                Page::Results => self.mount_results(),
            }
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn mount_quiz(&mut self) {
        match QuizSession::load(self.store.as_ref()) {
            Some(session) => self.session = Some(session),
            None => {
                log::info!("No hay preguntas guardadas; vuelta a la creación de quiz");
                self.navigate(Page::Create);
                self.message = "No hay preguntas que mostrar. Crea un quiz primero.".to_owned();
            }
        }
    }

    fn mount_results(&mut self) {
        match handoff::load_result(self.store.as_ref()) {
            Some(result) => self.result = Some(result),
            None => {
                log::info!("No hay resultados guardados; vuelta a la creación de quiz");
                self.navigate(Page::Create);
            }
        }
    }

    fn unmount_page(&mut self) {
        match self.page {
            Page::Create => {}
            // Las preguntas en bruto siguen en el almacén hasta que el quiz termine
            Page::Quiz => self.session = None,
            Page::Results => {
                if self.result.take().is_some() {
                    handoff::clear_result(self.store.as_mut());
                }
            }
        }
    }

    pub fn volver_al_creador(&mut self) {
        self.navigate(Page::Create);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn quiz_page_without_questions_redirects_to_create() {
        let mut app = QuizApp::new(Box::new(MemoryStore::new()));
        app.navigate(Page::Quiz);
        app.ensure_mounted();
        assert_eq!(app.page, Page::Create);
        assert!(app.session.is_none());
        assert!(!app.message.is_empty());
        assert!(app.is_mounted());
    }

    #[test]
    fn results_page_without_data_redirects_to_create() {
        let mut app = QuizApp::with_preferences(
            Box::new(MemoryStore::new()),
            Preferences {
                page: Page::Results,
                ..Preferences::default()
            },
        );
        app.ensure_mounted();
        assert_eq!(app.page, Page::Create);
        assert!(app.result.is_none());
    }

    #[test]
    fn impossible_score_redirects_to_create() {
        let mut store = MemoryStore::new();
        store.put(handoff::QUIZ_SCORE, "5".into());
        store.put(handoff::TOTAL_QUESTIONS, "3".into());
        store.put(handoff::DOWNLOADABLE_MCQS, "[]".into());
        let mut app = QuizApp::new(Box::new(store));
        app.navigate(Page::Results);
        app.ensure_mounted();
        assert_eq!(app.page, Page::Create);
        assert!(app.result.is_none());
    }

    #[test]
    fn leaving_results_clears_result_keys() {
        let mut store = MemoryStore::new();
        handoff::publish_result(
            &mut store,
            &QuizResult {
                score: 1,
                total: 1,
                finalized_questions: vec![Default::default()],
            },
        );
        let mut app = QuizApp::new(Box::new(store));
        app.navigate(Page::Results);
        app.ensure_mounted();
        assert_eq!(app.result.as_ref().map(|r| r.score), Some(1));

        app.volver_al_creador();
        assert!(app.result.is_none());
        assert_eq!(handoff::load_result(app.store()), None);
        assert_eq!(app.store().get(handoff::QUIZ_SCORE), None);
    }
}
