use crate::QuizApp;
use crate::model::Page;
use egui::{Align, Button, CentralPanel, Context, Frame, Layout, RichText, Ui, Visuals};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new("🧠 Synthsia Quiz").strong().size(18.0));

            // Desde el quiz o los resultados siempre hay camino de vuelta
            if app.page != Page::Create && ui.button("➕ Nuevo quiz").clicked() {
                app.volver_al_creador();
                ctx.request_repaint();
            }
        });
    });
}

pub fn bottom_panel(app: &QuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if app.is_generating() {
                ui.spinner();
                ui.label("Generando preguntas...");
            } else if let Some(session) = app.session.as_ref() {
                ui.label(format!(
                    "Respondidas {} de {}",
                    session.answered_count(),
                    session.len()
                ));
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let dark = ctx.style().visuals.dark_mode;
                let label = if dark { "☀ Modo claro" } else { "🌙 Modo oscuro" };
                if ui.button(label).clicked() {
                    ctx.set_visuals(if dark { Visuals::light() } else { Visuals::dark() });
                }
            });
        });
    });
}

/// Tarjeta centrada en la ventana. `est_height` es la altura aproximada del
/// contenido, solo se usa para repartir el margen vertical.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let top_gap = (ui.available_height() - est_height).max(0.0) * 0.5;
        ui.add_space(top_gap);
        ui.vertical_centered(|ui| {
            Frame::group(ui.style())
                .fill(ui.visuals().panel_fill)
                .inner_margin(egui::Margin::same(20))
                .show(ui, |ui| {
                    ui.set_width(max_width.min(ui.available_width()));
                    inner(ui);
                });
        });
    });
}

/// Fila de navegación del quiz: botón atrás, posición y botón adelante.
/// Devuelve qué botones se han pulsado como (atrás, adelante).
pub fn nav_row(
    ui: &mut Ui,
    panel_width: f32,
    back: (&str, bool),
    position: &str,
    forward_label: &str,
) -> (bool, bool) {
    let button_size = egui::vec2((panel_width - 96.0) / 2.0, 36.0);
    let (back_label, back_enabled) = back;
    ui.horizontal(|ui| {
        let back = ui.add_enabled(back_enabled, Button::new(back_label).min_size(button_size));
        ui.add_sized([80.0, 36.0], egui::Label::new(RichText::new(position).monospace()));
        let forward = ui.add(Button::new(forward_label).min_size(button_size));
        (back.clicked(), forward.clicked())
    })
    .inner
}
