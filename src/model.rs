use serde::{Deserialize, Serialize};
use std::fmt;

/// Valor que sustituye a cualquier campo que no se pudo extraer.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum OptionKey {
    A,
    B,
    C,
    D,
}

impl OptionKey {
    pub const ALL: [OptionKey; 4] = [OptionKey::A, OptionKey::B, OptionKey::C, OptionKey::D];

    /// Solo mayúsculas: `a` no es una opción válida.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(OptionKey::A),
            'B' => Some(OptionKey::B),
            'C' => Some(OptionKey::C),
            'D' => Some(OptionKey::D),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptionKey::A => "A",
            OptionKey::B => "B",
            OptionKey::C => "C",
            OptionKey::D => "D",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Las cuatro opciones de una pregunta. Siempre existen las cuatro claves.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionOptions {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "C")]
    pub c: String,
    #[serde(rename = "D")]
    pub d: String,
}

impl QuestionOptions {
    pub fn new(a: impl Into<String>, b: impl Into<String>, c: impl Into<String>, d: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            c: c.into(),
            d: d.into(),
        }
    }

    pub fn not_available() -> Self {
        Self::new(NOT_AVAILABLE, NOT_AVAILABLE, NOT_AVAILABLE, NOT_AVAILABLE)
    }

    pub fn get(&self, key: OptionKey) -> &str {
        match key {
            OptionKey::A => &self.a,
            OptionKey::B => &self.b,
            OptionKey::C => &self.c,
            OptionKey::D => &self.d,
        }
    }

    /// En orden de visualización (A, B, C, D)
    pub fn iter(&self) -> impl Iterator<Item = (OptionKey, &str)> + '_ {
        OptionKey::ALL.into_iter().map(move |k| (k, self.get(k)))
    }
}

impl Default for QuestionOptions {
    fn default() -> Self {
        Self::not_available()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuestion {
    pub question: String,
    pub options: QuestionOptions,
    pub answer: String, // letra A-D o "N/A"
    pub explanation: String,
    pub difficulty: String,
    pub topic: String,
}

impl ParsedQuestion {
    pub fn correct_key(&self) -> Option<OptionKey> {
        let mut chars = self.answer.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => OptionKey::from_char(c),
            _ => None,
        }
    }

    /// Acierto exacto contra la letra guardada (sensible a mayúsculas)
    pub fn is_correct(&self, key: OptionKey) -> bool {
        self.answer == key.as_str()
    }

    pub fn difficulty_tag(&self) -> DifficultyTag {
        DifficultyTag::from_label(&self.difficulty)
    }
}

impl Default for ParsedQuestion {
    fn default() -> Self {
        Self {
            question: NOT_AVAILABLE.to_owned(),
            options: QuestionOptions::not_available(),
            answer: NOT_AVAILABLE.to_owned(),
            explanation: NOT_AVAILABLE.to_owned(),
            difficulty: NOT_AVAILABLE.to_owned(),
            topic: NOT_AVAILABLE.to_owned(),
        }
    }
}

/// Pista visual para la etiqueta de dificultad. El texto original se conserva tal cual.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DifficultyTag {
    Easy,
    Medium,
    Hard,
    Other,
}

impl DifficultyTag {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "easy" => DifficultyTag::Easy,
            "medium" => DifficultyTag::Medium,
            "hard" => DifficultyTag::Hard,
            _ => DifficultyTag::Other,
        }
    }
}

/// Dificultad que se pide al servicio de generación.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Media",
            Difficulty::Hard => "Difícil",
        }
    }
}

/// Página cargada. Cada página lee lo que necesita del almacén al montarse.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Create,
    Quiz,
    Results,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_keys_are_uppercase_only() {
        assert_eq!(OptionKey::from_char('C'), Some(OptionKey::C));
        assert_eq!(OptionKey::from_char('c'), None);
        assert_eq!(OptionKey::from_char('E'), None);
    }

    #[test]
    fn options_serialize_with_letter_keys_in_order() {
        let opts = QuestionOptions::new("3", "4", "5", "6");
        let json = serde_json::to_string(&opts).unwrap();
        assert_eq!(json, r#"{"A":"3","B":"4","C":"5","D":"6"}"#);
        let keys: Vec<_> = opts.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, OptionKey::ALL.to_vec());
    }

    #[test]
    fn correct_key_ignores_sentinel() {
        let mut q = ParsedQuestion::default();
        assert_eq!(q.correct_key(), None);
        q.answer = "B".into();
        assert_eq!(q.correct_key(), Some(OptionKey::B));
        assert!(q.is_correct(OptionKey::B));
        assert!(!q.is_correct(OptionKey::A));
    }

    #[test]
    fn difficulty_tag_is_case_insensitive() {
        assert_eq!(DifficultyTag::from_label("Easy"), DifficultyTag::Easy);
        assert_eq!(DifficultyTag::from_label(" HARD "), DifficultyTag::Hard);
        assert_eq!(DifficultyTag::from_label("expert"), DifficultyTag::Other);
        assert_eq!(DifficultyTag::from_label(NOT_AVAILABLE), DifficultyTag::Other);
    }
}
