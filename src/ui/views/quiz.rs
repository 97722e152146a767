use crate::QuizApp;
use crate::ui::helpers::{badge, difficulty_color, option_button};
use crate::ui::layout::nav_row;
use egui::{Align, CentralPanel, Color32, Context, RichText, ScrollArea};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    // Sin sesión no hay nada que pintar: navegación ya gestionada al montar
    let Some(session) = app.session.as_ref() else {
        return;
    };

    let question = session.current().clone();
    let index = session.current_index();
    let revealed = session.is_revealed(index);
    let is_last = session.is_last();
    let is_first = session.is_first();
    let position = session.position_label();
    let states: Vec<_> = question
        .options
        .iter()
        .map(|(key, text)| (key, format!("{key}. {text}"), session.option_state(key)))
        .collect();

    let mut clicked_option = None;
    let mut go_previous = false;
    let mut go_next = false;

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 20))
                .show(ui, |ui| {
                    ui.set_width(panel_width);
                    ui.heading("Tu quiz generado");
                    ui.add_space(12.0);

                    ui.horizontal(|ui| {
                        badge(ui, &question.difficulty, difficulty_color(question.difficulty_tag()));
                        ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                            badge(ui, &question.topic, Color32::from_rgb(59, 130, 246));
                        });
                    });
                    ui.add_space(10.0);

                    ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                        ui.with_layout(egui::Layout::top_down(Align::Min), |ui| {
                            ui.label(
                                RichText::new(format!("Pregunta {}: {}", index + 1, question.question))
                                    .size(18.0)
                                    .strong(),
                            );
                            ui.add_space(10.0);

                            for (key, label, state) in &states {
                                if option_button(ui, label, panel_width - 16.0, *state) {
                                    clicked_option = Some(*key);
                                }
                                ui.add_space(4.0);
                            }

                            // Respuesta y explicación: solo si la pregunta está respondida
                            if revealed {
                                ui.add_space(8.0);
                                ui.separator();
                                ui.label(
                                    RichText::new(format!("Respuesta: {}", question.answer))
                                        .size(16.0)
                                        .strong(),
                                );
                                ui.label(
                                    RichText::new(format!("Explicación: {}", question.explanation)).weak(),
                                );
                            }
                        });
                    });

                    ui.add_space(16.0);
                    let next_label = if is_last { "Terminar quiz" } else { "Siguiente →" };
                    let (prev, next) =
                        nav_row(ui, panel_width, ("← Anterior", !is_first), &position, next_label);
                    go_previous = prev;
                    go_next = next;
                });
        });
    });

    if let Some(key) = clicked_option {
        app.responder(key);
    }
    if go_previous {
        app.anterior();
    } else if go_next {
        app.siguiente();
    }
}
