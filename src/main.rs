use activities_desktop::config::ClientConfig;
use activities_desktop::gui::ActivitiesApp;
use eframe::egui;
use log::info;

fn main() -> eframe::Result {
    env_logger::init();

    let config = ClientConfig::from_env();
    info!("Using activities server at {}", config.base_url);

    let builder = egui::ViewportBuilder::default()
        .with_title("Extracurricular Activities")
        .with_inner_size(egui::vec2(900.0, 640.0));

    let options = eframe::NativeOptions {
        viewport: builder,
        ..Default::default()
    };

    eframe::run_native(
        "Extracurricular Activities",
        options,
        Box::new(
            move |cc| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
                Ok(Box::new(ActivitiesApp::new(cc, config)?))
            },
        ),
    )
}
