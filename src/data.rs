// src/data.rs

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SampleQuiz {
    pub title: String,
    pub mcqs: Vec<String>,
}

/// Carga el quiz de ejemplo desde el YAML embebido
pub fn read_sample_quiz() -> Option<SampleQuiz> {
    let file_content = include_str!("data/sample_quiz.yaml");
    match serde_yaml::from_str(file_content) {
        Ok(quiz) => Some(quiz),
        Err(err) => {
            log::error!("No se pudo parsear el quiz de ejemplo YAML: {err}");
            None
        }
    }
}
