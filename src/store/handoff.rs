// src/store/handoff.rs
//
// Contrato por clave entre páginas. Quién escribe, quién lee y quién borra:
//
//   generatedMcqs    crear quiz  -> quiz (al montar)      borrado en publish_result
//   userAnswers      quiz        -> quiz (al recargar)    borrado en publish_result
//   quizScore        quiz        -> resultados            borrado en clear_result
//   totalQuestions   quiz        -> resultados            borrado en clear_result
//   downloadableMcqs quiz        -> resultados            borrado en clear_result

use super::{SessionStore, get_json, get_number, put_json};
use crate::model::{OptionKey, ParsedQuestion};
use crate::results::QuizResult;
use std::collections::BTreeMap;

pub const GENERATED_MCQS: &str = "generatedMcqs";
pub const USER_ANSWERS: &str = "userAnswers";
pub const QUIZ_SCORE: &str = "quizScore";
pub const TOTAL_QUESTIONS: &str = "totalQuestions";
pub const DOWNLOADABLE_MCQS: &str = "downloadableMcqs";

pub fn stash_generated<S: SessionStore + ?Sized>(store: &mut S, raws: &[String]) {
    put_json(store, GENERATED_MCQS, raws);
    // Un quiz nuevo nunca hereda respuestas del anterior
    store.remove(USER_ANSWERS);
}

pub fn load_generated<S: SessionStore + ?Sized>(store: &S) -> Option<Vec<String>> {
    get_json(store, GENERATED_MCQS)
}

pub fn save_answers<S: SessionStore + ?Sized>(store: &mut S, answers: &BTreeMap<usize, OptionKey>) {
    put_json(store, USER_ANSWERS, answers);
}

pub fn load_answers<S: SessionStore + ?Sized>(store: &S) -> BTreeMap<usize, OptionKey> {
    get_json(store, USER_ANSWERS).unwrap_or_default()
}

/// Escribe el resultado final y limpia el estado en curso del quiz.
pub fn publish_result<S: SessionStore + ?Sized>(store: &mut S, result: &QuizResult) {
    store.put(QUIZ_SCORE, result.score.to_string());
    store.put(TOTAL_QUESTIONS, result.total.to_string());
    put_json(store, DOWNLOADABLE_MCQS, &result.finalized_questions);
    store.remove(GENERATED_MCQS);
    store.remove(USER_ANSWERS);
}

/// `None` si falta la puntuación o el total, o si la puntuación supera al total.
/// Si la lista descargable está corrupta se muestra igualmente el resultado,
/// sin preguntas que exportar.
pub fn load_result<S: SessionStore + ?Sized>(store: &S) -> Option<QuizResult> {
    let score = get_number(store, QUIZ_SCORE)?;
    let total = get_number(store, TOTAL_QUESTIONS)?;
    if score > total {
        log::warn!("Resultado incoherente ({score} de {total}), se ignora");
        return None;
    }
    store.get(DOWNLOADABLE_MCQS)?;
    let finalized_questions: Vec<ParsedQuestion> =
        get_json(store, DOWNLOADABLE_MCQS).unwrap_or_default();
    Some(QuizResult {
        score,
        total,
        finalized_questions,
    })
}

pub fn clear_result<S: SessionStore + ?Sized>(store: &mut S) {
    store.remove(QUIZ_SCORE);
    store.remove(TOTAL_QUESTIONS);
    store.remove(DOWNLOADABLE_MCQS);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn result() -> QuizResult {
        QuizResult {
            score: 1,
            total: 2,
            finalized_questions: vec![ParsedQuestion::default(), ParsedQuestion::default()],
        }
    }

    #[test]
    fn answers_round_trip_with_string_indices() {
        let mut store = MemoryStore::new();
        let mut answers = BTreeMap::new();
        answers.insert(0, OptionKey::A);
        answers.insert(2, OptionKey::D);
        save_answers(&mut store, &answers);
        assert_eq!(store.get(USER_ANSWERS).as_deref(), Some(r#"{"0":"A","2":"D"}"#));
        assert_eq!(load_answers(&store), answers);
    }

    #[test]
    fn stashing_a_new_quiz_drops_old_answers() {
        let mut store = MemoryStore::new();
        store.put(USER_ANSWERS, r#"{"0":"A"}"#.into());
        stash_generated(&mut store, &["Question: x".to_string()]);
        assert!(load_answers(&store).is_empty());
        assert_eq!(load_generated(&store), Some(vec!["Question: x".to_string()]));
    }

    #[test]
    fn publish_clears_in_progress_keys() {
        let mut store = MemoryStore::new();
        stash_generated(&mut store, &["a".to_string(), "b".to_string()]);
        store.put(USER_ANSWERS, "{}".into());
        publish_result(&mut store, &result());

        assert_eq!(store.get(GENERATED_MCQS), None);
        assert_eq!(store.get(USER_ANSWERS), None);
        assert_eq!(store.get(QUIZ_SCORE).as_deref(), Some("1"));
        assert_eq!(store.get(TOTAL_QUESTIONS).as_deref(), Some("2"));
        assert_eq!(load_result(&store), Some(result()));

        clear_result(&mut store);
        assert!(store.is_empty());
        assert_eq!(load_result(&store), None);
    }

    #[test]
    fn corrupt_transcript_still_shows_score() {
        let mut store = MemoryStore::new();
        store.put(QUIZ_SCORE, "3".into());
        store.put(TOTAL_QUESTIONS, "4".into());
        store.put(DOWNLOADABLE_MCQS, "not json".into());
        let loaded = load_result(&store).unwrap();
        assert_eq!((loaded.score, loaded.total), (3, 4));
        assert!(loaded.finalized_questions.is_empty());
    }

    #[test]
    fn score_above_total_means_no_result() {
        let mut store = MemoryStore::new();
        store.put(QUIZ_SCORE, "5".into());
        store.put(TOTAL_QUESTIONS, "3".into());
        store.put(DOWNLOADABLE_MCQS, "[]".into());
        assert_eq!(load_result(&store), None);

        store.put(QUIZ_SCORE, "3".into());
        assert_eq!(load_result(&store).map(|r| r.summary().percentage_label()).as_deref(), Some("100%"));
    }

    #[test]
    fn missing_score_means_no_result() {
        let mut store = MemoryStore::new();
        store.put(TOTAL_QUESTIONS, "4".into());
        store.put(DOWNLOADABLE_MCQS, "[]".into());
        assert_eq!(load_result(&store), None);
    }
}
