// src/config.rs

use eframe::egui;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub dark_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Quiz Application".to_string(),
            window_size: [520.0, 640.0],
            dark_mode: true,
        }
    }
}

impl AppConfig {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.window_title.clone())
                .with_inner_size(self.window_size)
                .with_min_inner_size([360.0, 480.0]),
            ..Default::default()
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        }
    }
}
