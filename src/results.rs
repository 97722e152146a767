// src/results.rs

use crate::model::ParsedQuestion;
use crate::parser;
use std::fmt::Write as _;

pub const TRANSCRIPT_FILE_NAME: &str = "generated_quiz.txt";
const TRANSCRIPT_HEADER: &str = "Generated Quiz:";
const SEPARATOR: &str = "----------------------------------------";

/// Resultado final de un intento. Se calcula una sola vez al terminar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub finalized_questions: Vec<ParsedQuestion>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultTier {
    Perfect,
    Great,
    Good,
    Encourage,
}

impl ResultTier {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            ResultTier::Perfect
        } else if percentage >= 80.0 {
            ResultTier::Great
        } else if percentage >= 50.0 {
            ResultTier::Good
        } else {
            ResultTier::Encourage
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ResultTier::Perfect => "¡Puntuación perfecta! 🎉 Excelente trabajo.",
            ResultTier::Great => "¡Muy bien! 👍 Dominas el tema.",
            ResultTier::Good => "¡Buen intento! Sigue practicando para mejorar. 💪",
            ResultTier::Encourage => "¡Sigue aprendiendo! Con más práctica lo conseguirás.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultSummary {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub tier: ResultTier,
}

impl ResultSummary {
    /// Porcentaje redondeado sin decimales: "67%"
    pub fn percentage_label(&self) -> String {
        format!("{:.0}%", self.percentage)
    }

    pub fn score_label(&self) -> String {
        format!("{} / {}", self.score, self.total)
    }
}

impl QuizResult {
    pub fn summary(&self) -> ResultSummary {
        let percentage = if self.total > 0 {
            self.score as f64 / self.total as f64 * 100.0
        } else {
            0.0
        };
        ResultSummary {
            score: self.score,
            total: self.total,
            percentage,
            tier: ResultTier::from_percentage(percentage),
        }
    }
}

/// Texto plano descargable con todas las preguntas, en orden.
pub fn export_transcript(questions: &[ParsedQuestion]) -> String {
    let mut content = format!("{TRANSCRIPT_HEADER}\n\n");
    for (i, q) in questions.iter().enumerate() {
        // write! sobre String no puede fallar
        let _ = writeln!(content, "Question {}: {}", i + 1, q.question);
        content.push_str("Options:\n");
        for (key, text) in q.options.iter() {
            let _ = writeln!(content, "  {key}. {text}");
        }
        let _ = writeln!(content, "Answer: {}", q.answer);
        let _ = writeln!(content, "Explanation: {}", q.explanation);
        let _ = writeln!(content, "Difficulty: {}", q.difficulty);
        let _ = writeln!(content, "Topic: {}\n", q.topic);
        let _ = writeln!(content, "{SEPARATOR}\n");
    }
    content
}

/// Lee una transcripción exportada y devuelve los bloques de pregunta en bruto.
pub fn transcript_blocks(text: &str) -> Vec<String> {
    let body = text.trim_start();
    let body = body.strip_prefix(TRANSCRIPT_HEADER).unwrap_or(body);
    body.split(SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Reimporta una transcripción para repetir el quiz.
pub fn split_transcript(text: &str) -> Vec<ParsedQuestion> {
    parser::parse_all(&transcript_blocks(text))
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("No hay preguntas para descargar.")]
    NothingToExport,
    #[error("No se pudo guardar el fichero: {0}")]
    Io(#[from] std::io::Error),
    #[error("El navegador rechazó la descarga: {0}")]
    Browser(String),
}

/// Entrega el texto al mecanismo de guardado de la plataforma.
/// Devuelve una descripción de dónde ha quedado.
#[cfg(not(target_arch = "wasm32"))]
pub fn offer_download(file_name: &str, content: &str) -> Result<String, ExportError> {
    let path = crate::config::export_dir().join(file_name);
    std::fs::write(&path, content)?;
    log::info!("Transcripción guardada en {}", path.display());
    Ok(path.display().to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn offer_download(file_name: &str, content: &str) -> Result<String, ExportError> {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let browser = |err: JsValue| ExportError::Browser(format!("{err:?}"));

    let window = web_sys::window().ok_or_else(|| ExportError::Browser("sin window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| ExportError::Browser("sin document".into()))?;
    let body = document
        .body()
        .ok_or_else(|| ExportError::Browser("sin body".into()))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let opts = BlobPropertyBag::new();
    opts.set_type("text/plain;charset=utf-8");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts).map_err(browser)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(browser)?;

    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(browser)?
        .dyn_into()
        .map_err(|_| ExportError::Browser("el elemento no es un <a>".into()))?;
    link.set_href(&url);
    link.set_download(file_name);
    body.append_child(&link).map_err(browser)?;
    link.click();
    body.remove_child(&link).map_err(browser)?;
    Url::revoke_object_url(&url).map_err(browser)?;

    log::info!("Transcripción ofrecida como descarga: {file_name}");
    Ok(file_name.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NOT_AVAILABLE, QuestionOptions};

    fn sample() -> Vec<ParsedQuestion> {
        vec![
            ParsedQuestion {
                question: "2+2?".into(),
                options: QuestionOptions::new("3", "4", "5", "6"),
                answer: "B".into(),
                explanation: "basic math".into(),
                difficulty: "easy".into(),
                topic: "math".into(),
            },
            ParsedQuestion {
                question: "Which keyword declares\na constant?".into(),
                options: QuestionOptions::new("let", "const", "static mut", "var"),
                answer: "B".into(),
                explanation: "`const` values are inlined.".into(),
                difficulty: "medium".into(),
                topic: "Rust".into(),
            },
            ParsedQuestion {
                question: "Broken one".into(),
                ..ParsedQuestion::default()
            },
        ]
    }

    fn result(score: usize, total: usize) -> QuizResult {
        QuizResult {
            score,
            total,
            finalized_questions: vec![],
        }
    }

    #[test]
    fn two_of_three_is_good() {
        let summary = result(2, 3).summary();
        assert_eq!(summary.tier, ResultTier::Good);
        assert_eq!(summary.percentage_label(), "67%");
        assert_eq!(summary.score_label(), "2 / 3");
    }

    #[test]
    fn tier_thresholds() {
        assert_eq!(result(5, 5).summary().tier, ResultTier::Perfect);
        assert_eq!(result(4, 5).summary().tier, ResultTier::Great);
        assert_eq!(result(9, 10).summary().tier, ResultTier::Great);
        assert_eq!(result(1, 2).summary().tier, ResultTier::Good);
        assert_eq!(result(2, 5).summary().tier, ResultTier::Encourage);
        assert_eq!(result(0, 3).summary().tier, ResultTier::Encourage);
    }

    #[test]
    fn zero_total_is_zero_percent() {
        let summary = result(0, 0).summary();
        assert_eq!(summary.percentage, 0.0);
        assert_eq!(summary.tier, ResultTier::Encourage);
    }

    #[test]
    fn transcript_layout() {
        let text = export_transcript(&sample()[..1]);
        let expected = "Generated Quiz:\n\n\
Question 1: 2+2?\n\
Options:\n  A. 3\n  B. 4\n  C. 5\n  D. 6\n\
Answer: B\n\
Explanation: basic math\n\
Difficulty: easy\n\
Topic: math\n\n\
----------------------------------------\n\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn exported_transcript_parses_back() {
        let questions = sample();
        let text = export_transcript(&questions);
        assert_eq!(transcript_blocks(&text).len(), 3);
        assert_eq!(split_transcript(&text), questions);
        assert_eq!(split_transcript(&text)[2].answer, NOT_AVAILABLE);
    }

    #[test]
    fn empty_transcript_has_no_blocks() {
        assert!(split_transcript(&export_transcript(&[])).is_empty());
        assert!(split_transcript("").is_empty());
    }
}
