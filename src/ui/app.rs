//! Replay viewer application

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel};

use super::board_view::BoardView;
use super::frames::Frame as ReplayFrame;
use super::theme::*;
use crate::GameState;

/// Plays a list of frames back at a fixed interval
pub struct ReplayApp {
    frames: Vec<ReplayFrame>,
    names: [String; 2],
    result: GameState,
    board_view: BoardView,
    current: usize,
    playing: bool,
    interval: Duration,
    last_step: Instant,
}

impl ReplayApp {
    pub fn new(frames: Vec<ReplayFrame>, names: [String; 2], result: GameState, interval: Duration) -> Self {
        Self {
            frames,
            names,
            result,
            board_view: BoardView::default(),
            current: 0,
            playing: true,
            interval,
            last_step: Instant::now(),
        }
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Move to the next frame; playback stops on the last one
    pub fn step_forward(&mut self) {
        if self.current + 1 < self.frames.len() {
            self.current += 1;
        }
        if self.current + 1 >= self.frames.len() {
            self.playing = false;
        }
        self.last_step = Instant::now();
    }

    pub fn step_back(&mut self) {
        self.current = self.current.saturating_sub(1);
        self.playing = false;
        self.last_step = Instant::now();
    }

    pub fn restart(&mut self) {
        self.current = 0;
        self.playing = self.frames.len() > 1;
        self.last_step = Instant::now();
    }

    pub fn toggle_play(&mut self) {
        if !self.playing && self.current + 1 >= self.frames.len() {
            self.restart();
        } else {
            self.playing = !self.playing;
            self.last_step = Instant::now();
        }
    }

    /// Advance when the frame interval has passed
    fn tick(&mut self, ctx: &Context) {
        if !self.playing {
            return;
        }
        let elapsed = self.last_step.elapsed();
        if elapsed >= self.interval {
            self.step_forward();
            ctx.request_repaint_after(self.interval);
        } else {
            ctx.request_repaint_after(self.interval - elapsed);
        }
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::Space) {
                self.toggle_play();
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                self.playing = false;
                self.step_forward();
            }
            if i.key_pressed(egui::Key::ArrowLeft) {
                self.step_back();
            }
            if i.key_pressed(egui::Key::R) {
                self.restart();
            }
        });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.label(RichText::new("REPLAY").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                Self::card_frame().show(ui, |ui| {
                    ui.label(RichText::new("AGENTS").size(10.0).color(TEXT_MUTED));
                    ui.add_space(6.0);
                    for (index, name) in self.names.iter().enumerate() {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new("●").size(16.0).color(token_color(index)));
                            ui.label(RichText::new(name).size(12.0).color(TEXT_PRIMARY));
                        });
                    }
                });
                ui.add_space(10.0);

                Self::card_frame().show(ui, |ui| {
                    ui.label(RichText::new("PLAYBACK").size(10.0).color(TEXT_MUTED));
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(format!("Move {} / {}", self.current + 1, self.frames.len()))
                            .size(14.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        if ui.button("⏮").clicked() {
                            self.restart();
                        }
                        if ui.button("◀").clicked() {
                            self.step_back();
                        }
                        let label = if self.playing { "⏸" } else { "▶" };
                        if ui.button(label).clicked() {
                            self.toggle_play();
                        }
                        if ui.button("▶▶").clicked() {
                            self.playing = false;
                            self.step_forward();
                        }
                    });
                });
                ui.add_space(10.0);

                if !self.playing && self.current + 1 >= self.frames.len() {
                    Self::card_frame().show(ui, |ui| {
                        ui.label(RichText::new("RESULT").size(10.0).color(TEXT_MUTED));
                        ui.add_space(6.0);
                        ui.label(
                            RichText::new(format!("{:?} for {}", self.result, self.names[0]))
                                .size(14.0)
                                .strong()
                                .color(WIN_HIGHLIGHT),
                        );
                    });
                }
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| match self.frames.get(self.current) {
                Some(frame) => self.board_view.show(ui, frame),
                None => {
                    ui.label(RichText::new("Empty trace").color(TEXT_MUTED));
                }
            });
        });
    }
}

impl eframe::App for ReplayApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.tick(ctx);

        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}

/// Open a window and play the frames back
pub fn run_replay(app: ReplayApp) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 560.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title("Five in a Row - Replay"),
        ..Default::default()
    };

    eframe::run_native("fiverow-replay", options, Box::new(|_cc| Ok(Box::new(app))))
}
