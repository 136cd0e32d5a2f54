//! GTK application entry point

use gtk4::prelude::*;
use gtk4::{ApplicationWindow, Window};
use libadwaita::prelude::*;
use libadwaita::Application as AdwApplication;
use std::cell::RefCell;
use std::rc::Rc;

use crate::ui::gtk::tool_zero_panel::ToolZeroPanel;
use probekit_core::{LoggingController, ToolZeroSequencer};
use probekit_settings::{Config, SettingsManager};

pub fn main() {
    let app = AdwApplication::builder()
        .application_id("com.github.probekit.probekit")
        .build();

    app.connect_activate(|app| {
        let config = match SettingsManager::load_or_default() {
            Ok(manager) => manager.config().clone(),
            Err(e) => {
                tracing::warn!("Failed to load settings, using defaults: {}", e);
                Config::default()
            }
        };

        // The command stream goes to the logging controller until a host
        // runtime binding is configured; swap the Box to target hardware.
        let controller = LoggingController::new();
        let sequencer = Rc::new(RefCell::new(ToolZeroSequencer::new(
            Box::new(controller),
            config.touch_plate,
            config.probing,
            config.controller.wait_policy,
        )));

        let window = ApplicationWindow::builder()
            .application(app)
            .title("Probekit")
            .default_width(config.ui.window_width as i32)
            .default_height(config.ui.window_height as i32)
            .build();

        let parent: Window = window.clone().upcast();
        let panel = ToolZeroPanel::new(sequencer, &parent, &config);
        window.set_child(Some(&panel.widget));

        window.present();
    });

    app.run();
}
