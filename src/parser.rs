// src/parser.rs
//
// Lectura tolerante del texto que devuelve el generador. Las etiquetas se buscan
// en orden fijo; cada valor termina donde empieza la siguiente etiqueta encontrada.

use crate::model::{NOT_AVAILABLE, OptionKey, ParsedQuestion, QuestionOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Question,
    Options,
    Answer,
    Explanation,
    Difficulty,
    Topic,
}

const FIELDS: [Field; 6] = [
    Field::Question,
    Field::Options,
    Field::Answer,
    Field::Explanation,
    Field::Difficulty,
    Field::Topic,
];

const OPTION_LABELS: [&str; 3] = ["B.", "C.", "D."];

impl Field {
    fn label(self) -> &'static str {
        match self {
            Field::Question => "Question",
            Field::Options => "Options:",
            Field::Answer => "Answer:",
            Field::Explanation => "Explanation:",
            Field::Difficulty => "Difficulty:",
            Field::Topic => "Topic:",
        }
    }
}

/// Etiqueta localizada: dónde empieza y dónde empieza su valor.
#[derive(Clone, Copy, Debug)]
struct Anchor {
    start: usize,
    value_start: usize,
}

/// Convierte una pregunta en texto a su forma estructurada. Nunca falla:
/// lo que no se encuentra queda como "N/A".
pub fn parse(raw: &str) -> ParsedQuestion {
    let anchors = locate_anchors(raw);
    let text = |field: Field| -> String {
        field_value(raw, &anchors, field)
            .map(str::to_owned)
            .unwrap_or_else(|| NOT_AVAILABLE.to_owned())
    };

    let options = field_value(raw, &anchors, Field::Options)
        .and_then(parse_options)
        .unwrap_or_else(QuestionOptions::not_available);

    let answer = field_value(raw, &anchors, Field::Answer)
        .and_then(|v| v.chars().next())
        .and_then(OptionKey::from_char)
        .map(|k| k.as_str().to_owned())
        .unwrap_or_else(|| NOT_AVAILABLE.to_owned());

    ParsedQuestion {
        question: text(Field::Question),
        options,
        answer,
        explanation: text(Field::Explanation),
        difficulty: text(Field::Difficulty),
        topic: text(Field::Topic),
    }
}

pub fn parse_all<S: AsRef<str>>(raws: &[S]) -> Vec<ParsedQuestion> {
    raws.iter().map(|r| parse(r.as_ref())).collect()
}

fn locate_anchors(text: &str) -> [Option<Anchor>; 6] {
    let mut anchors = [None; 6];
    let mut cursor = 0;
    for (i, field) in FIELDS.iter().enumerate() {
        if let Some(anchor) = find_anchor(text, cursor, *field) {
            cursor = anchor.value_start;
            anchors[i] = Some(anchor);
        }
    }
    anchors
}

fn find_anchor(text: &str, from: usize, field: Field) -> Option<Anchor> {
    let haystack = &text[from..];
    match field {
        // "Question:" o "Question 3:" (así es como sale en la transcripción)
        Field::Question => haystack.match_indices(field.label()).find_map(|(i, label)| {
            let after = &haystack[i + label.len()..];
            let rest = after.trim_start_matches([' ', '\t']);
            let rest = rest.trim_start_matches(|c: char| c.is_ascii_digit());
            let rest = rest.trim_start_matches([' ', '\t']);
            rest.strip_prefix(':').map(|value| Anchor {
                start: from + i,
                value_start: text.len() - value.len(),
            })
        }),
        _ => haystack.find(field.label()).map(|i| Anchor {
            start: from + i,
            value_start: from + i + field.label().len(),
        }),
    }
}

fn field_value<'a>(text: &'a str, anchors: &[Option<Anchor>; 6], field: Field) -> Option<&'a str> {
    let idx = FIELDS.iter().position(|f| *f == field)?;
    let anchor = anchors[idx]?;
    let end = anchors[idx + 1..]
        .iter()
        .flatten()
        .map(|a| a.start)
        .next()
        .unwrap_or(text.len());
    Some(text[anchor.value_start..end].trim())
}

/// El bloque debe empezar por "A." y contener "B.", "C.", "D." en ese orden.
fn parse_options(block: &str) -> Option<QuestionOptions> {
    let mut rest = block.trim_start().strip_prefix("A.")?;
    let mut values = Vec::with_capacity(4);
    for label in OPTION_LABELS {
        let idx = find_option_label(rest, label)?;
        values.push(rest[..idx].trim());
        rest = &rest[idx + label.len()..];
    }
    values.push(rest.trim());
    Some(QuestionOptions::new(values[0], values[1], values[2], values[3]))
}

// Una letra de opción solo cuenta al principio o tras un espacio/salto de línea
fn find_option_label(text: &str, label: &str) -> Option<usize> {
    text.match_indices(label)
        .map(|(i, _)| i)
        .find(|&i| i == 0 || text[..i].ends_with(char::is_whitespace))
}
