//! Blocking informational prompt
//!
//! GTK counterpart of the sequencer's prompt capability. `show` owns the
//! event loop until the operator reacts: it presents a modal window and
//! iterates the default main context until the OK button is pressed or
//! the window is closed.

use gtk4::prelude::*;
use gtk4::{Align, Box, Button, Label, Orientation, Window};
use probekit_core::{DialogError, PromptDialog, Result};
use std::cell::Cell;
use std::rc::Rc;

/// Modal prompt window bound to a parent
pub struct PromptWindow {
    parent: Window,
}

impl PromptWindow {
    /// Create a prompt capability transient for `parent`
    pub fn new(parent: &Window) -> Self {
        Self {
            parent: parent.clone(),
        }
    }
}

impl PromptDialog for PromptWindow {
    fn show(&self, message: &str) -> Result<()> {
        let window = Window::builder()
            .title("Auto Tool Zero")
            .modal(true)
            .resizable(false)
            .build();
        window.set_transient_for(Some(&self.parent));

        let content = Box::new(Orientation::Vertical, 10);
        content.set_margin_top(20);
        content.set_margin_bottom(20);
        content.set_margin_start(20);
        content.set_margin_end(20);

        let label = Label::new(Some(message));
        label.set_wrap(true);
        label.set_width_chars(36);
        content.append(&label);

        let ok_btn = Button::with_label("OK");
        ok_btn.add_css_class("suggested-action");
        ok_btn.set_halign(Align::Center);
        content.append(&ok_btn);

        window.set_child(Some(&content));

        let acknowledged = Rc::new(Cell::new(false));
        let finished = Rc::new(Cell::new(false));

        let window_clone = window.clone();
        let acknowledged_clone = acknowledged.clone();
        ok_btn.connect_clicked(move |_| {
            acknowledged_clone.set(true);
            window_clone.close();
        });

        let finished_clone = finished.clone();
        window.connect_close_request(move |_| {
            finished_clone.set(true);
            glib::Propagation::Proceed
        });

        window.present();

        // Cooperative suspension: the dialog owns the loop until dismissed.
        let ctx = glib::MainContext::default();
        while !finished.get() {
            ctx.iteration(true);
        }

        if acknowledged.get() {
            Ok(())
        } else {
            // Closing the prompt without acknowledging halts the sequence;
            // no probing move runs without an explicit OK.
            Err(DialogError::Cancelled.into())
        }
    }
}
