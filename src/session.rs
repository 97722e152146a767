// src/session.rs

use crate::model::{OptionKey, ParsedQuestion};
use crate::parser;
use crate::results::QuizResult;
use crate::store::{SessionStore, handoff};
use std::collections::BTreeMap;

/// Estado de un intento de quiz: preguntas fijas, posición actual y respuestas.
///
/// Una respuesta, una vez dada, es definitiva: volver atrás muestra la respuesta
/// bloqueada y su explicación. Todo lo que se pinta (respuesta visible, colores de
/// las opciones) se deriva de `answers`, nunca de banderas sueltas.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<ParsedQuestion>,
    current_index: usize,
    answers: BTreeMap<usize, OptionKey>,
}

/// Resultado de pulsar "Siguiente".
#[derive(Debug)]
pub enum Transition {
    InProgress(QuizSession),
    Finished(QuizResult),
}

/// Cómo se pinta una opción de la pregunta actual.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    /// Sin responder todavía: se puede pulsar
    Open,
    ChosenCorrect,
    ChosenWrong,
    /// La correcta, cuando el usuario eligió otra
    RevealedCorrect,
    Inactive,
}

impl QuizSession {
    /// `None` si no hay preguntas: no existe un quiz vacío.
    pub fn new(questions: Vec<ParsedQuestion>) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }
        Some(Self {
            questions,
            current_index: 0,
            answers: BTreeMap::new(),
        })
    }

    /// Reconstruye la sesión a partir del almacén (preguntas en bruto + respuestas ya dadas).
    pub fn load<S: SessionStore + ?Sized>(store: &S) -> Option<Self> {
        let raws = handoff::load_generated(store)?;
        let mut session = Self::new(parser::parse_all(&raws))?;
        let len = session.questions.len();
        session.answers = handoff::load_answers(store)
            .into_iter()
            .filter(|(idx, _)| *idx < len)
            .collect();
        log::debug!(
            "Sesión cargada: {} preguntas, {} ya respondidas",
            len,
            session.answers.len()
        );
        Some(session)
    }

    pub fn questions(&self) -> &[ParsedQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> &ParsedQuestion {
        &self.questions[self.current_index]
    }

    pub fn answers(&self) -> &BTreeMap<usize, OptionKey> {
        &self.answers
    }

    pub fn answer_for(&self, index: usize) -> Option<OptionKey> {
        self.answers.get(&index).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    /// La respuesta y la explicación se ven si y solo si la pregunta está respondida.
    pub fn is_revealed(&self, index: usize) -> bool {
        self.answers.contains_key(&index)
    }

    /// "3 / 10"
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current_index + 1, self.questions.len())
    }

    /// Registra la respuesta de la pregunta actual solo si aún no tenía.
    /// Devuelve `true` si se ha guardado.
    pub fn select_option(&mut self, key: OptionKey) -> bool {
        if self.answers.contains_key(&self.current_index) {
            return false;
        }
        self.answers.insert(self.current_index, key);
        true
    }

    pub fn option_state(&self, key: OptionKey) -> OptionState {
        let question = self.current();
        match self.answer_for(self.current_index) {
            None => OptionState::Open,
            Some(chosen) if chosen == key => {
                if question.is_correct(key) {
                    OptionState::ChosenCorrect
                } else {
                    OptionState::ChosenWrong
                }
            }
            Some(_) if question.is_correct(key) => OptionState::RevealedCorrect,
            Some(_) => OptionState::Inactive,
        }
    }

    /// Aciertos: respuestas que coinciden exactamente con la letra correcta.
    pub fn score(&self) -> usize {
        self.answers
            .iter()
            .filter(|(idx, key)| {
                self.questions
                    .get(**idx)
                    .is_some_and(|q| q.is_correct(**key))
            })
            .count()
    }

    /// En la última pregunta cierra el quiz; si no, avanza una posición.
    pub fn go_next(mut self) -> Transition {
        if self.is_last() {
            return Transition::Finished(self.finish());
        }
        self.current_index = (self.current_index + 1).min(self.questions.len() - 1);
        Transition::InProgress(self)
    }

    pub fn go_previous(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }

    // Consume la sesión: las respuestas desaparecen con ella
    fn finish(self) -> QuizResult {
        let score = self.score();
        let total = self.questions.len();
        log::info!("Quiz terminado: {score} / {total}");
        QuizResult {
            score,
            total,
            finalized_questions: self.questions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, handoff};

    fn question(answer: &str) -> ParsedQuestion {
        ParsedQuestion {
            question: format!("¿Respuesta {answer}?"),
            answer: answer.to_owned(),
            ..ParsedQuestion::default()
        }
    }

    fn session(answers: &[&str]) -> QuizSession {
        QuizSession::new(answers.iter().map(|a| question(a)).collect()).unwrap()
    }

    fn advance(session: QuizSession) -> QuizSession {
        match session.go_next() {
            Transition::InProgress(s) => s,
            Transition::Finished(_) => panic!("terminó antes de tiempo"),
        }
    }

    #[test]
    fn empty_question_list_builds_nothing() {
        assert!(QuizSession::new(vec![]).is_none());
        assert!(QuizSession::load(&MemoryStore::new()).is_none());
    }

    #[test]
    fn first_answer_is_final() {
        let mut s = session(&["A"]);
        assert!(s.select_option(OptionKey::C));
        assert!(!s.select_option(OptionKey::A));
        assert_eq!(s.answer_for(0), Some(OptionKey::C));
        assert_eq!(s.answered_count(), 1);
    }

    #[test]
    fn previous_stops_at_zero() {
        let mut s = session(&["A", "B"]);
        s.go_previous();
        assert_eq!(s.current_index(), 0);
        assert!(s.is_first());
    }

    #[test]
    fn answers_survive_back_and_forth() {
        let mut s = session(&["A", "B"]);
        s.select_option(OptionKey::A);
        let mut s = advance(s);
        assert!(!s.is_revealed(1));
        s.go_previous();
        assert!(s.is_revealed(0));
        assert_eq!(s.option_state(OptionKey::A), OptionState::ChosenCorrect);
        assert!(!s.select_option(OptionKey::B));
        let s = advance(s);
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.option_state(OptionKey::A), OptionState::Open);
    }

    #[test]
    fn next_on_last_question_finishes() {
        let mut s = session(&["A", "B", "B"]);
        s.select_option(OptionKey::A);
        let mut s = advance(s);
        s.select_option(OptionKey::C);
        let mut s = advance(s);
        s.select_option(OptionKey::B);
        assert!(s.is_last());
        assert_eq!(s.position_label(), "3 / 3");
        match s.go_next() {
            Transition::Finished(result) => {
                assert_eq!(result.score, 2);
                assert_eq!(result.total, 3);
                assert_eq!(result.finalized_questions.len(), 3);
            }
            Transition::InProgress(_) => panic!("debería terminar"),
        }
    }

    #[test]
    fn unanswered_questions_never_score() {
        let s = session(&["A", "B"]);
        match s.go_next() {
            Transition::InProgress(s) => match s.go_next() {
                Transition::Finished(r) => assert_eq!((r.score, r.total), (0, 2)),
                _ => panic!(),
            },
            _ => panic!(),
        }
    }

    #[test]
    fn sentinel_answer_never_matches() {
        let mut s = session(&["N/A"]);
        s.select_option(OptionKey::A);
        assert_eq!(s.score(), 0);
        assert_eq!(s.option_state(OptionKey::A), OptionState::ChosenWrong);
        assert_eq!(s.option_state(OptionKey::B), OptionState::Inactive);
    }

    #[test]
    fn option_states_after_wrong_choice() {
        let mut s = session(&["B"]);
        for key in OptionKey::ALL {
            assert_eq!(s.option_state(key), OptionState::Open);
        }
        s.select_option(OptionKey::D);
        assert_eq!(s.option_state(OptionKey::D), OptionState::ChosenWrong);
        assert_eq!(s.option_state(OptionKey::B), OptionState::RevealedCorrect);
        assert_eq!(s.option_state(OptionKey::A), OptionState::Inactive);
    }

    #[test]
    fn score_matches_count_of_exact_matches() {
        let keys = [OptionKey::A, OptionKey::B, OptionKey::C, OptionKey::D, OptionKey::B];
        let mut s = session(&["A", "A", "C", "D", "b"]);
        for (i, key) in keys.into_iter().enumerate() {
            s.current_index = i;
            s.select_option(key);
        }
        // "b" en minúscula no coincide con B
        assert_eq!(s.score(), 3);
        assert!(s.score() <= s.len());
    }

    #[test]
    fn load_restores_answers_within_range() {
        let mut store = MemoryStore::new();
        let raw = "Question: q Options: A. 1 B. 2 C. 3 D. 4 Answer: A Explanation: e Difficulty: easy Topic: t";
        handoff::stash_generated(&mut store, &[raw.to_string(), raw.to_string()]);
        store.put(handoff::USER_ANSWERS, r#"{"1":"B","9":"A"}"#.into());

        let s = QuizSession::load(&store).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.current().answer, "A");
        assert_eq!(s.answer_for(1), Some(OptionKey::B));
        assert_eq!(s.answered_count(), 1);
    }

    #[test]
    fn load_with_corrupt_raw_list_is_empty_condition() {
        let mut store = MemoryStore::new();
        store.put(handoff::GENERATED_MCQS, "{oops".into());
        assert!(QuizSession::load(&store).is_none());
        store.put(handoff::GENERATED_MCQS, "[]".into());
        assert!(QuizSession::load(&store).is_none());
    }
}
