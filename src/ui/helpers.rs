// src/ui/helpers.rs
use crate::model::DifficultyTag;
use crate::session::OptionState;
use egui::{Button, Color32, CornerRadius, Frame, RichText, Stroke, Ui, Vec2};

pub fn big_button(ui: &mut Ui, label: &str, width: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, 40.0)))
        .clicked()
}

pub fn difficulty_color(tag: DifficultyTag) -> Color32 {
    match tag {
        DifficultyTag::Easy => Color32::from_rgb(34, 197, 94),
        DifficultyTag::Medium => Color32::from_rgb(234, 179, 8),
        DifficultyTag::Hard => Color32::from_rgb(239, 68, 68),
        DifficultyTag::Other => Color32::GRAY,
    }
}

/// Relleno y borde de una opción según su estado. `None` = aspecto normal.
pub fn option_colors(state: OptionState) -> Option<(Color32, Color32)> {
    match state {
        OptionState::ChosenCorrect | OptionState::RevealedCorrect => {
            Some((Color32::from_rgb(21, 128, 61), Color32::from_rgb(34, 197, 94)))
        }
        OptionState::ChosenWrong => Some((Color32::from_rgb(185, 28, 28), Color32::from_rgb(239, 68, 68))),
        OptionState::Open | OptionState::Inactive => None,
    }
}

/// Etiqueta redondeada (dificultad, tema)
pub fn badge(ui: &mut Ui, text: &str, fill: Color32) {
    Frame::default()
        .fill(fill)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(Color32::WHITE).strong());
        });
}

/// Botón de opción a todo el ancho. Devuelve si se ha pulsado.
pub fn option_button(ui: &mut Ui, label: &str, width: f32, state: OptionState) -> bool {
    let mut button = Button::new(RichText::new(label).size(16.0))
        .min_size(Vec2::new(width, 40.0));
    if let Some((fill, stroke)) = option_colors(state) {
        button = button.fill(fill).stroke(Stroke::new(1.5, stroke));
    }
    let response = ui.add(button);
    // Ya respondida: el clic no hace nada, así que tampoco mostramos la mano
    if state == OptionState::Open {
        response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked()
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_answered_options_are_coloured() {
        assert!(option_colors(OptionState::Open).is_none());
        assert!(option_colors(OptionState::Inactive).is_none());
        assert_eq!(
            option_colors(OptionState::ChosenCorrect),
            option_colors(OptionState::RevealedCorrect)
        );
        assert_ne!(
            option_colors(OptionState::ChosenCorrect),
            option_colors(OptionState::ChosenWrong)
        );
    }

    #[test]
    fn unknown_difficulty_is_gray() {
        assert_eq!(difficulty_color(DifficultyTag::Other), Color32::GRAY);
        assert_ne!(difficulty_color(DifficultyTag::Easy), difficulty_color(DifficultyTag::Hard));
    }
}
