use std::time::Duration;

use eframe::egui;
use eframe::egui::viewport::WindowLevel;
use eframe::egui::{
    Align, Align2, Color32, FontFamily, FontId, Key, Layout, Margin, RichText, TextStyle, Vec2,
    ViewportCommand, Visuals,
};
use log::info;
use tokio::{task, time};

use crate::cli::Settings;
use crate::display::{window_title, DisplayLoop};
use crate::format::{format_elapsed, Breakdown};
use crate::tracker::Tracker;
use crate::APP_TITLE;

/// How often the background task wakes the UI so a due tick gets polled.
const REPAINT_INTERVAL: Duration = Duration::from_millis(100);

const BASE: Color32 = Color32::from_rgb(18, 18, 20);
const PANEL: Color32 = Color32::from_rgb(28, 31, 36);
const HOVER: Color32 = Color32::from_rgb(42, 47, 53);
const PRESSED: Color32 = Color32::from_rgb(35, 39, 45);
const BORDER: Color32 = Color32::from_rgb(44, 49, 58);
const ACCENT: Color32 = Color32::from_rgb(52, 126, 219);
const CAPTION: Color32 = Color32::from_rgb(139, 145, 153);
const TEXT: Color32 = Color32::from_rgb(226, 229, 233);

const UNITS: [&str; 4] = ["DAYS", "HOURS", "MINUTES", "SECONDS"];

pub struct TimerApp {
    display: DisplayLoop,
    settings: Settings,
    on_top: bool,
    confirm_reset: bool,
    show_about: bool,
    titled: Option<Breakdown>,
    started_at: chrono::DateTime<chrono::Local>,
}

impl TimerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        cc.egui_ctx.set_visuals(dark_visuals());

        let mut style = (*cc.egui_ctx.style()).clone();
        style.spacing.button_padding = Vec2::new(14.0, 8.0);
        style.spacing.item_spacing = Vec2::new(8.0, 12.0);
        style.text_styles = [
            (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
            (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(18.0, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace)),
        ]
        .into();
        cc.egui_ctx.set_style(style);

        let ctx = cc.egui_ctx.to_owned();
        task::spawn(async move {
            let mut interval = time::interval(REPAINT_INTERVAL);

            loop {
                interval.tick().await;
                ctx.request_repaint();
            }
        });

        let tracker = Tracker::from_offset(settings.offset);
        let display = DisplayLoop::new(tracker, settings.accent_pulse);
        info!(
            "starting at {} (accent pulse: {}, compact: {}, on top: {})",
            display.readout(),
            settings.accent_pulse,
            settings.compact,
            settings.always_on_top
        );

        Self {
            display,
            on_top: settings.always_on_top,
            settings,
            confirm_reset: false,
            show_about: false,
            titled: None,
            started_at: chrono::Local::now(),
        }
    }

    /// Sends the title whenever the readout differs from what the window shows,
    /// including the very first frame.
    fn sync_title(&mut self, ctx: &egui::Context) {
        let readout = self.display.readout();
        if self.titled != Some(readout) {
            ctx.send_viewport_cmd(ViewportCommand::Title(window_title(readout)));
            self.titled = Some(readout);
        }
    }

    fn units_row(&self, ui: &mut egui::Ui) {
        let fields = self.display.readout().fields();
        let accent = self.display.accent();
        let number_size = self.settings.number_size();
        let caption_size = self.settings.caption_size();

        ui.columns(UNITS.len(), |cols| {
            for ((col, caption), value) in cols.iter_mut().zip(UNITS).zip(fields) {
                col.vertical_centered(|ui| {
                    ui.label(RichText::new(caption).size(caption_size).color(CAPTION));
                    ui.label(RichText::new(value).size(number_size).strong().color(accent));
                });
            }
        });
    }

    fn buttons_row(&mut self, ui: &mut egui::Ui) {
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("About").clicked() {
                self.show_about = true;
            }

            let label = if self.on_top {
                "On Top ✔"
            } else {
                "Stay On Top"
            };
            if ui.toggle_value(&mut self.on_top, label).changed() {
                let level = if self.on_top {
                    WindowLevel::AlwaysOnTop
                } else {
                    WindowLevel::Normal
                };
                info!("window level set to {:?}", level);
                ui.ctx().send_viewport_cmd(ViewportCommand::WindowLevel(level));
            }

            if ui.button("Reset (R)").clicked() {
                self.confirm_reset = true;
            }
        });
    }

    fn reset_dialog(&mut self, ctx: &egui::Context) {
        if !self.confirm_reset {
            return;
        }

        let mut answer = None;
        let (escape, enter) =
            ctx.input(|i| (i.key_pressed(Key::Escape), i.key_pressed(Key::Enter)));
        let focused = ctx.memory(|m| m.focused().is_some());
        if declines_reset(escape, enter, focused) {
            answer = Some(false);
        }

        egui::Window::new("Reset Timer")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Reset elapsed time to 0? Nothing is stored, so nothing else is affected.");
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        answer = Some(true);
                    }
                    if ui.button("No").clicked() {
                        answer = Some(false);
                    }
                });
            });

        match answer {
            Some(true) => {
                info!("reset after {}", format_elapsed(self.display.elapsed()));
                self.display.reset();
                self.sync_title(ctx);
                self.confirm_reset = false;
            }
            Some(false) => self.confirm_reset = false,
            None => {}
        }
    }

    fn about_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }

        let started = self.started_at.format("%Y/%m/%d %H:%M:%S").to_string();
        let mut open = true;
        let mut close = false;
        egui::Window::new("About")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.heading(APP_TITLE);
                ui.label(
                    "A lightweight placeholder you can run instead of a game so the game \
                     library keeps counting playtime. Displays an ongoing DD:HH:MM:SS timer.",
                );
                ui.label(format!("Window opened {}", started));
                ui.label(
                    RichText::new(
                        "No networking, no injection, no data collection. Just a clock. \
                         Please respect platform Terms of Service.",
                    )
                    .small()
                    .color(CAPTION),
                );
                if ui.button("Close").clicked() {
                    close = true;
                }
            });
        self.show_about = open && !close;
    }
}

impl eframe::App for TimerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.display.poll();
        self.sync_title(ctx);

        if !self.confirm_reset && ctx.input(|i| i.key_pressed(Key::R)) {
            self.confirm_reset = true;
        }

        let frame = egui::Frame::none().fill(BASE).inner_margin(Margin {
            left: 28.0,
            right: 28.0,
            top: 24.0,
            bottom: 16.0,
        });

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            self.units_row(ui);
            ui.add_space((ui.available_height() - 40.0).max(0.0));
            self.buttons_row(ui);
        });

        self.reset_dialog(ctx);
        self.about_dialog(ctx);

        ctx.request_repaint_after(self.display.until_next_tick());
    }

    fn clear_color(&self, _visuals: &Visuals) -> [f32; 4] {
        BASE.to_normalized_gamma_f32()
    }
}

/// Escape always declines; Enter declines unless a button holds focus.
fn declines_reset(escape: bool, enter: bool, focused: bool) -> bool {
    escape || (enter && !focused)
}

fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = BASE;
    visuals.window_fill = PANEL;
    visuals.override_text_color = Some(TEXT);
    visuals.selection.bg_fill = ACCENT;
    visuals.selection.stroke.color = Color32::WHITE;

    let widgets = &mut visuals.widgets;
    widgets.inactive.weak_bg_fill = PANEL;
    widgets.inactive.bg_stroke.color = BORDER;
    widgets.hovered.weak_bg_fill = HOVER;
    widgets.active.weak_bg_fill = PRESSED;
    widgets.active.bg_stroke.color = ACCENT;
    visuals
}
