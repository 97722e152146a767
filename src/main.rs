use synthsia_quiz::QuizApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();
    log::info!("Arrancando Synthsia Quiz v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Synthsia Quiz",
        options,
        Box::new(|cc| Ok(Box::new(QuizApp::from_creation_context(cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    // Si el logger ya estaba inicializado no pasa nada
    let _ = eframe::WebLogger::init(log::LevelFilter::Debug);

    wasm_bindgen_futures::spawn_local(async {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("the_canvas_id"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok());
        let Some(canvas) = canvas else {
            log::error!("No se encontró el canvas 'the_canvas_id'");
            return;
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(QuizApp::from_creation_context(cc)))),
            )
            .await;
        if let Err(err) = result {
            log::error!("No se pudo arrancar la app web: {err:?}");
        }
    });
}
