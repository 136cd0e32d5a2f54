//! Tool zero panel
//!
//! The single trigger surface: a touch-plate summary, the Auto Tool Zero
//! button, and a status log fed from sequencer events. The button click
//! blocks the event loop for the duration of the run, dialogs included;
//! the machine controller is exclusively owned and strict sequencing
//! keeps exactly one command in flight.

use gtk4::prelude::*;
use gtk4::{
    Box, Button, Frame, Label, Orientation, PolicyType, ScrolledWindow, TextView, Window,
};
use probekit_core::{ToolZeroOutcome, ToolZeroSequencer};
use probekit_settings::Config;
use std::cell::RefCell;
use std::rc::Rc;

use crate::ui::gtk::auto_tool_zero::AutoToolZeroWindow;
use crate::ui::gtk::prompt::PromptWindow;

pub struct ToolZeroPanel {
    pub widget: Box,
    pub tool_zero_btn: Button,
    pub status_text: TextView,
    sequencer: Rc<RefCell<ToolZeroSequencer>>,
    window: Window,
}

impl ToolZeroPanel {
    pub fn new(
        sequencer: Rc<RefCell<ToolZeroSequencer>>,
        window: &Window,
        config: &Config,
    ) -> Rc<Self> {
        let widget = Box::new(Orientation::Vertical, 10);
        widget.set_margin_top(10);
        widget.set_margin_bottom(10);
        widget.set_margin_start(10);
        widget.set_margin_end(10);

        // Touch Plate Section
        let plate_frame = Frame::new(Some("Touch Plate"));
        let plate_box = Box::new(Orientation::Vertical, 5);
        plate_box.set_margin_top(5);
        plate_box.set_margin_bottom(5);
        plate_box.set_margin_start(5);
        plate_box.set_margin_end(5);

        let plate = sequencer.borrow().touch_plate();
        for (name, value) in [
            ("Height", plate.plate_height),
            ("Width", plate.plate_width),
            ("Travel height", plate.travel_height),
            ("Lift height", plate.lift_height),
        ] {
            let row = Label::new(Some(&format!("{}: {} in", name, value)));
            row.set_halign(gtk4::Align::Start);
            row.add_css_class("dim-label");
            plate_box.append(&row);
        }
        plate_frame.set_child(Some(&plate_box));
        widget.append(&plate_frame);

        // Trigger
        let tool_zero_btn = Button::with_label("Auto Tool Zero");
        tool_zero_btn.add_css_class("suggested-action");
        tool_zero_btn.set_height_request(40);
        widget.append(&tool_zero_btn);

        // Status Log Section
        let status_text = TextView::new();
        status_text.set_editable(false);
        status_text.add_css_class("monospace");
        if config.ui.show_status_log {
            let status_frame = Frame::new(Some("Status"));
            let status_scroll = ScrolledWindow::new();
            status_scroll.set_policy(PolicyType::Automatic, PolicyType::Automatic);
            status_scroll.set_vexpand(true);
            status_scroll.set_min_content_height(140);
            status_scroll.set_child(Some(&status_text));
            status_frame.set_child(Some(&status_scroll));
            widget.append(&status_frame);
        }

        let panel = Rc::new(Self {
            widget,
            tool_zero_btn,
            status_text,
            sequencer,
            window: window.clone(),
        });

        let panel_clone = panel.clone();
        panel.tool_zero_btn.connect_clicked(move |_| {
            panel_clone.on_auto_tool_zero();
        });

        panel
    }

    /// Handler for the panel's single trigger
    fn on_auto_tool_zero(&self) {
        let params = AutoToolZeroWindow::new(&self.window);
        let prompt = PromptWindow::new(&self.window);

        let mut events = self.sequencer.borrow().events().subscribe();
        let outcome = self.sequencer.borrow_mut().auto_tool_zero(&params, &prompt);

        while let Ok(event) = events.try_recv() {
            self.append_status(&event.to_string());
        }

        match outcome {
            Ok(ToolZeroOutcome::Completed) => {}
            Ok(ToolZeroOutcome::Cancelled) => {
                self.append_status("Cancelled, no commands issued");
            }
            Err(e) if e.is_cancelled() => {
                self.append_status("Prompt dismissed, sequence halted");
            }
            Err(e) => {
                tracing::error!("tool zero failed: {}", e);
                self.append_status(&format!("Error: {}", e));
            }
        }
    }

    fn append_status(&self, line: &str) {
        let buffer = self.status_text.buffer();
        let mut iter = buffer.end_iter();
        buffer.insert(&mut iter, &format!("{}\n", line));
    }
}
