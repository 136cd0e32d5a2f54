//! Parameter-entry dialog for a tool-zeroing run
//!
//! Collects axis selection, probe corner, pause flag, tool diameter, and
//! unit, then yields a validated [`ProbeRequest`] or an explicit
//! `Cancelled` response. The diameter is validated in the dialog: invalid
//! input shows an inline message and keeps the form open, so nothing
//! invalid ever reaches the sequencer.

use gtk4::prelude::*;
use gtk4::{Box, Button, CheckButton, Entry, Frame, Grid, Label, Orientation, Window};
use probekit_core::{
    parse_diameter, CornerPosition, DialogResponse, ParameterDialog, ProbeRequest, Result, Units,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Modal parameter form bound to a parent window
pub struct AutoToolZeroWindow {
    parent: Window,
}

impl AutoToolZeroWindow {
    /// Create a parameter-entry capability transient for `parent`
    pub fn new(parent: &Window) -> Self {
        Self {
            parent: parent.clone(),
        }
    }
}

impl ParameterDialog for AutoToolZeroWindow {
    fn collect(&self) -> Result<DialogResponse> {
        let window = Window::builder()
            .title("Auto Tool Zero")
            .modal(true)
            .resizable(false)
            .build();
        window.set_transient_for(Some(&self.parent));

        let content = Box::new(Orientation::Vertical, 10);
        content.set_margin_top(15);
        content.set_margin_bottom(15);
        content.set_margin_start(15);
        content.set_margin_end(15);

        // Axis selection
        let axes_frame = Frame::new(Some("Probe axes"));
        let axes_box = Box::new(Orientation::Horizontal, 10);
        axes_box.set_margin_top(5);
        axes_box.set_margin_bottom(5);
        axes_box.set_margin_start(5);
        axes_box.set_margin_end(5);
        let cb_x = CheckButton::with_label("X axis");
        let cb_y = CheckButton::with_label("Y axis");
        axes_box.append(&cb_x);
        axes_box.append(&cb_y);
        axes_frame.set_child(Some(&axes_box));
        content.append(&axes_frame);

        // Probe corner
        let corner_frame = Frame::new(Some("Probe corner"));
        let corner_grid = Grid::new();
        corner_grid.set_column_spacing(10);
        corner_grid.set_row_spacing(5);
        corner_grid.set_margin_top(5);
        corner_grid.set_margin_bottom(5);
        corner_grid.set_margin_start(5);
        corner_grid.set_margin_end(5);
        let rb_left_front = CheckButton::with_label("Left/Front");
        let rb_left_rear = CheckButton::with_label("Left/Rear");
        let rb_right_front = CheckButton::with_label("Right/Front");
        let rb_right_rear = CheckButton::with_label("Right/Rear");
        rb_left_rear.set_group(Some(&rb_left_front));
        rb_right_front.set_group(Some(&rb_left_front));
        rb_right_rear.set_group(Some(&rb_left_front));
        rb_right_rear.set_active(true);
        corner_grid.attach(&rb_left_front, 0, 0, 1, 1);
        corner_grid.attach(&rb_left_rear, 0, 1, 1, 1);
        corner_grid.attach(&rb_right_front, 1, 0, 1, 1);
        corner_grid.attach(&rb_right_rear, 1, 1, 1, 1);
        corner_frame.set_child(Some(&corner_grid));
        content.append(&corner_frame);

        // Pause flag
        let cb_pause = CheckButton::with_label("Pause to align tool flutes before X/Y probes");
        cb_pause.set_active(true);
        content.append(&cb_pause);

        // Diameter entry
        let dia_box = Box::new(Orientation::Horizontal, 10);
        dia_box.append(&Label::new(Some("Tool diameter:")));
        let dia_entry = Entry::new();
        dia_entry.set_hexpand(true);
        dia_box.append(&dia_entry);
        content.append(&dia_box);

        // Unit selection
        let unit_box = Box::new(Orientation::Horizontal, 10);
        unit_box.append(&Label::new(Some("Unit:")));
        let rb_inch = CheckButton::with_label("inch");
        let rb_mm = CheckButton::with_label("mm");
        rb_mm.set_group(Some(&rb_inch));
        rb_mm.set_active(true);
        unit_box.append(&rb_inch);
        unit_box.append(&rb_mm);
        content.append(&unit_box);

        // Inline validation message, hidden until needed
        let error_label = Label::new(None);
        error_label.add_css_class("error");
        error_label.set_visible(false);
        content.append(&error_label);

        // Confirm / cancel
        let btn_box = Box::new(Orientation::Horizontal, 10);
        btn_box.set_halign(gtk4::Align::End);
        let cancel_btn = Button::with_label("Cancel");
        let ok_btn = Button::with_label("OK");
        ok_btn.add_css_class("suggested-action");
        btn_box.append(&cancel_btn);
        btn_box.append(&ok_btn);
        content.append(&btn_box);

        window.set_child(Some(&content));

        let result: Rc<RefCell<Option<ProbeRequest>>> = Rc::new(RefCell::new(None));
        let finished = Rc::new(Cell::new(false));

        let window_clone = window.clone();
        let result_clone = result.clone();
        let error_label_clone = error_label.clone();
        ok_btn.connect_clicked(move |_| {
            let text = dia_entry.text();
            let diameter = match parse_diameter(text.as_str()) {
                Ok(d) => d,
                Err(e) => {
                    // Re-prompt: keep the form open, no side effects.
                    error_label_clone.set_text(&e.to_string());
                    error_label_clone.set_visible(true);
                    return;
                }
            };

            // Radio fall-through mirrors the historical panel: anything
            // not explicitly selected resolves to Right/Rear.
            let corner = if rb_left_front.is_active() {
                CornerPosition::LeftFront
            } else if rb_left_rear.is_active() {
                CornerPosition::LeftRear
            } else if rb_right_front.is_active() {
                CornerPosition::RightFront
            } else {
                CornerPosition::RightRear
            };

            let unit = if rb_inch.is_active() {
                Units::Inch
            } else {
                Units::Mm
            };

            *result_clone.borrow_mut() = Some(ProbeRequest {
                probe_x: cb_x.is_active(),
                probe_y: cb_y.is_active(),
                corner,
                pause_between_probes: cb_pause.is_active(),
                tool_radius: diameter / 2.0,
                unit,
            });
            window_clone.close();
        });

        let window_clone = window.clone();
        cancel_btn.connect_clicked(move |_| {
            window_clone.close();
        });

        let finished_clone = finished.clone();
        window.connect_close_request(move |_| {
            finished_clone.set(true);
            glib::Propagation::Proceed
        });

        window.present();

        let ctx = glib::MainContext::default();
        while !finished.get() {
            ctx.iteration(true);
        }

        match result.borrow_mut().take() {
            Some(request) => Ok(DialogResponse::Confirmed(request)),
            None => Ok(DialogResponse::Cancelled),
        }
    }
}
