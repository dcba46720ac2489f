// ui.rs - egui front end: controls, the torus drawn as a grid of boxes, stats

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};

use conway::{ALIVE, PATTERNS, StrategyKind, status_line};

use crate::{GameOfLife, GameOfLifeInterface};

const MAX_BOX_SIZE: f32 = 15.0;
const MIN_BOX_SIZE: f32 = 2.0;
const SPACING: f32 = 0.5;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life (toroidal)");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_error = None;
                        self.last_update = Instant::now();
                    }
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.update_generation();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.apply_random_pattern();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Strategy:");
                let before = self.selected_strategy;
                egui::ComboBox::from_id_source("strategy_selector")
                    .selected_text(self.selected_strategy.as_str())
                    .show_ui(ui, |ui| {
                        for kind in StrategyKind::ALL {
                            ui.selectable_value(&mut self.selected_strategy, kind, kind.as_str());
                        }
                    });
                if self.selected_strategy != before {
                    self.apply_selected_strategy();
                }

                ui.separator();

                // Speed control
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Edges wrap: cells on the border see the opposite side as neighbours.");
            ui.label("Click cells to toggle them while paused.");

            if let Some(err) = &self.last_error {
                ui.colored_label(Color32::RED, format!("Stopped: {err}"));
            }

            ui.separator();

            let (rows, cols) = self.sim.grid().current().dims();
            let available = ui.available_size();
            let box_size = ((available.x / cols as f32).min((available.y - 60.0) / rows as f32) - SPACING)
                .clamp(MIN_BOX_SIZE, MAX_BOX_SIZE);
            let pitch = box_size + SPACING;

            let total_size = Vec2::new(pitch * cols as f32 - SPACING, pitch * rows as f32 - SPACING);
            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let origin = response.rect.min;

            // Fill background
            painter.rect_filled(Rect::from_min_size(origin, total_size), 0.0, Color32::BLACK);

            for (row, cells) in self.sim.grid().current().rows().enumerate() {
                for (col, &cell) in cells.iter().enumerate() {
                    let rect = Rect::from_min_size(
                        egui::pos2(origin.x + col as f32 * pitch, origin.y + row as f32 * pitch),
                        Vec2::splat(box_size),
                    );
                    let cell_color = if cell == ALIVE { self.live_color } else { self.dead_color };
                    painter.rect_filled(rect, 1.0, cell_color);
                    if box_size >= 6.0 {
                        painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                    }
                }
            }

            // Clicking maps straight to a cell (only when not running)
            if !self.is_running && response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let local = pos - origin;
                    let (row, col) = ((local.y / pitch) as usize, (local.x / pitch) as usize);
                    if row < rows && col < cols {
                        self.toggle_cell(row, col);
                    }
                }
            }

            ui.separator();

            let sim = self.simulation();
            let live_cells = sim.grid().population();
            let total = rows * cols;

            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });

            let timer = sim.timer();
            ui.monospace(format!(
                "{}  [{} | last {:?}]",
                status_line(sim.generation(), timer.elapsed()),
                sim.strategy_name(),
                timer.last(),
            ));
        });

        // Request repaint if running to keep animation smooth
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
