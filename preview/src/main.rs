//! Desktop preview app for emberstrip effects
//!
//! Renders the strip in a window instead of driving hardware: effects
//! write into a real `PixelBuffer` and the painter applies the same
//! brightness scaling the transmitter would. Also demonstrates the
//! deadline-cancellation protocol against a shared `CancelToken`.

use std::time::{Duration as StdDuration, Instant as StdInstant, SystemTime, UNIX_EPOCH};

use eframe::egui::{self};
use emberstrip::{
    CancelToken, Effect, FireConfig, FireEffect, PaletteSweep, PixelBuffer, PlayerLayout,
    scale_color,
};

/// Number of LEDs in the simulated strip
const NUM_LEDS: usize = 200;

/// Players laid out around the strip
const NUM_PLAYERS: usize = 6;

/// Dark gap between player sections
const PADDING: usize = 10;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Simulation step interval (matches the hardware settle pacing)
const STEP_INTERVAL: StdDuration = StdDuration::from_millis(10);

/// Shared cancellation token, set by the deadline check the way a
/// one-shot hardware timer would
static CANCEL: CancelToken = CancelToken::new();

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 420.0])
            .with_title("Emberstrip Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "emberstrip-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Idle,
    Fire,
    Sweep,
    Player(usize),
}

struct PreviewApp {
    buffer: PixelBuffer<NUM_LEDS>,
    layout: PlayerLayout<NUM_PLAYERS>,
    mode: Mode,
    fire: Option<FireEffect<NUM_LEDS>>,
    sweep: PaletteSweep,
    brightness: f32,
    /// Looping-effect deadline in milliseconds, 0 = run until stopped
    duration_ms: u64,
    started_at: StdInstant,
    last_step: StdInstant,
}

impl PreviewApp {
    fn new() -> Self {
        Self {
            buffer: PixelBuffer::new(0.5),
            layout: PlayerLayout::new(NUM_LEDS, NUM_PLAYERS, PADDING)
                .expect("static geometry is valid"),
            mode: Mode::Idle,
            fire: None,
            sweep: PaletteSweep::new(),
            brightness: 0.5,
            duration_ms: 10_000,
            started_at: StdInstant::now(),
            last_step: StdInstant::now(),
        }
    }

    fn start_fire(&mut self) {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(1);
        self.fire = FireEffect::new(FireConfig::default(), seed).ok();
        self.mode = Mode::Fire;
        self.started_at = StdInstant::now();
    }

    fn start_sweep(&mut self) {
        self.sweep = PaletteSweep::new();
        self.mode = Mode::Sweep;
        self.started_at = StdInstant::now();
    }

    fn show_player(&mut self, player: usize) {
        if let Ok(mut indicator) = emberstrip::TurnIndicator::new(&self.layout, player) {
            indicator.render(self.buffer.pixels_mut());
            self.mode = Mode::Player(player);
        }
    }

    /// Advance the looping effect, honoring the cancellation protocol:
    /// the token is polled at the top of each step and reset on exit.
    fn step(&mut self) {
        let looping = matches!(self.mode, Mode::Fire | Mode::Sweep);
        if !looping {
            return;
        }

        // Deadline check stands in for the one-shot hardware timer
        if self.duration_ms > 0
            && self.started_at.elapsed() >= StdDuration::from_millis(self.duration_ms)
        {
            CANCEL.request();
        }

        if CANCEL.is_requested() {
            CANCEL.reset();
            self.mode = Mode::Idle;
            return;
        }

        if self.last_step.elapsed() < STEP_INTERVAL {
            return;
        }
        self.last_step = StdInstant::now();

        match self.mode {
            Mode::Fire => {
                if let Some(fire) = self.fire.as_mut() {
                    fire.render(self.buffer.pixels_mut());
                }
            }
            Mode::Sweep => self.sweep.render(self.buffer.pixels_mut()),
            Mode::Idle | Mode::Player(_) => {}
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.step();
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("🔥 Fire").clicked() {
                    self.start_fire();
                }
                if ui.button("Palette sweep").clicked() {
                    self.start_sweep();
                }
                if ui.button("⏹ Stop").clicked() {
                    CANCEL.request();
                }

                ui.add_space(16.0);

                ui.label("Duration (ms, 0 = until stopped):");
                ui.add(egui::DragValue::new(&mut self.duration_ms).speed(100));
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Player:");
                for player in 0..self.layout.player_count() {
                    let selected = self.mode == Mode::Player(player);
                    if ui
                        .selectable_label(selected, format!("{}", player + 1))
                        .clicked()
                    {
                        self.show_player(player);
                    }
                }

                ui.add_space(16.0);

                ui.label("Brightness:");
                let old_brightness = self.brightness;
                ui.add(egui::Slider::new(&mut self.brightness, 0.0..=1.0));
                if (self.brightness - old_brightness).abs() > f32::EPSILON {
                    self.buffer.set_brightness(self.brightness);
                }
            });

            ui.add_space(16.0);

            // === LED Display ===
            let available_width = ui.available_width();
            let led_pitch = LED_SIZE + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = NUM_LEDS.div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) =
                ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
            let origin = response.rect.min;

            let brightness = self.buffer.brightness();
            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in self.buffer.pixels().iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(LED_SIZE, LED_SIZE),
                );
                let shown = scale_color(*pixel, brightness);
                let color = egui::Color32::from_rgb(shown.r, shown.g, shown.b);
                painter.rect_filled(rect, 3.0, color);
            }
        });
    }
}
