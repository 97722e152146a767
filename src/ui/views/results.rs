use crate::QuizApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let Some(summary) = app.result.as_ref().map(|r| r.summary()) else {
        return;
    };
    let mut new_quiz = false;
    let mut download = false;

    centered_panel(ctx, 420.0, 480.0, |ui| {
        let width = ui.available_width();
        ui.vertical_centered(|ui| {
            ui.heading("Resultados del quiz");
            ui.add_space(18.0);
            ui.label(RichText::new(summary.score_label()).size(56.0).strong());
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("{} de aciertos", summary.percentage_label()))
                    .size(22.0)
                    .strong(),
            );
            ui.add_space(12.0);
            ui.label(RichText::new(summary.tier.message()).size(16.0));
            ui.add_space(24.0);

            new_quiz = big_button(ui, "Generar otro quiz →", width, true);
            ui.add_space(6.0);
            download = big_button(ui, "📥 Descargar quiz", width, true);

            if !app.message.is_empty() {
                ui.add_space(10.0);
                ui.label(&app.message);
            }
        });
    });

    if download {
        app.descargar_transcripcion();
    }
    if new_quiz {
        app.volver_al_creador();
    }
}
