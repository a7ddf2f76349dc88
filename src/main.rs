use quiz_application::QuizApp;
use quiz_application::config::AppConfig;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = AppConfig::default();
    log::info!("starting {}", config.window_title);

    let title = config.window_title.clone();
    let options = config.native_options();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(config.visuals());
            Ok(Box::new(QuizApp::new()))
        }),
    )
}
