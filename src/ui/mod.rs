mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::Page;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Respuesta del generador (si la hay) antes de pintar nada
        self.poll_generation();
        if self.is_generating() {
            ctx.request_repaint_after(Duration::from_millis(200));
        }

        // La página actual lee el almacén la primera vez que se pinta
        self.ensure_mounted();

        top_panel(self, ctx);
        bottom_panel(self, ctx);

        // Dispatch por página
        match self.page {
            Page::Create => views::create::ui_create(self, ctx),
            Page::Quiz => views::quiz::ui_quiz(self, ctx),
            Page::Results => views::results::ui_results(self, ctx),
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.preferences());
    }
}
