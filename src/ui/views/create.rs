use crate::QuizApp;
use crate::config::{MAX_QUESTIONS, MIN_QUESTIONS};
use crate::model::Difficulty;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{ComboBox, Context, RichText, Slider};

pub fn ui_create(app: &mut QuizApp, ctx: &Context) {
    // Ficheros arrastrados sobre la ventana: PDF para generar, .txt para repetir un quiz
    // Con una generación en marcha no se aceptan ficheros nuevos
    let dropped = if app.is_generating() {
        Vec::new()
    } else {
        ctx.input(|i| i.raw.dropped_files.clone())
    };
    for file in &dropped {
        if file.name.to_lowercase().ends_with(".txt") {
            if let Some(text) = dropped_text(file) {
                app.importar_transcripcion(&text);
                return;
            }
        } else {
            app.accept_dropped_file(file);
        }
    }

    centered_panel(ctx, 480.0, 520.0, |ui| {
        let width = ui.available_width();
        ui.heading("Crear un quiz");
        ui.add_space(16.0);

        // ----------- DOCUMENTO -----------
        ui.label("Sube tu PDF (o arrástralo a la ventana)");
        #[cfg(not(target_arch = "wasm32"))]
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut app.form.document_path)
                    .hint_text("ruta/al/documento.pdf")
                    .desired_width(width - 90.0),
            );
            let idle = !app.is_generating();
            if ui.add_enabled(idle, egui::Button::new("📂 Cargar")).clicked() {
                if app.form.document_path.trim().to_lowercase().ends_with(".txt") {
                    match std::fs::read_to_string(app.form.document_path.trim()) {
                        Ok(text) => app.importar_transcripcion(&text),
                        Err(err) => app.message = format!("No se pudo leer la transcripción: {err}"),
                    }
                } else {
                    app.cargar_documento();
                }
            }
        });

        if app.form.document.is_some() {
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("📄 {}", app.form.document_name)).strong());
                if ui.small_button("✖").on_hover_text("Quitar fichero").clicked() {
                    app.quitar_documento();
                }
            });
        }
        ui.add_space(12.0);

        // ----------- DIFICULTAD -----------
        ui.label("Dificultad");
        ComboBox::from_id_salt("difficulty")
            .width(width)
            .selected_text(app.form.difficulty.label())
            .show_ui(ui, |ui| {
                for d in Difficulty::ALL {
                    ui.selectable_value(&mut app.form.difficulty, d, d.label());
                }
            });
        ui.add_space(12.0);

        // ----------- NÚMERO DE PREGUNTAS -----------
        ui.label("Número de preguntas");
        ui.add(Slider::new(&mut app.form.num_questions, MIN_QUESTIONS..=MAX_QUESTIONS));
        ui.add_space(18.0);

        let can_generate = app.form.document.is_some() && !app.is_generating();
        let label = if app.is_generating() {
            "Generando..."
        } else {
            "Generar quiz →"
        };
        ui.vertical_centered(|ui| {
            if big_button(ui, label, width, can_generate) {
                app.generar_quiz(ctx);
            }
            if app.is_generating() {
                ui.add_space(6.0);
                ui.spinner();
            }
            ui.add_space(6.0);
            if big_button(ui, "🎲 Probar con un quiz de ejemplo", width, !app.is_generating()) {
                app.usar_quiz_de_ejemplo();
            }
        });

        if !app.message.is_empty() {
            ui.add_space(10.0);
            let color = ui.visuals().warn_fg_color;
            ui.label(RichText::new(&app.message).color(color));
        }
    });
}

fn dropped_text(file: &egui::DroppedFile) -> Option<String> {
    if let Some(bytes) = &file.bytes {
        return Some(String::from_utf8_lossy(bytes).into_owned());
    }
    file.path
        .as_ref()
        .and_then(|p| std::fs::read_to_string(p).ok())
}
