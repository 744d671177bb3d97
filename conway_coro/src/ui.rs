// ui.rs - egui front end for the row-coroutine viewer

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use life_engine::patterns;
use std::time::{Duration, Instant};

use crate::GameOfLife;

const BOARD_PIXELS: f32 = 780.0;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Async Conway's Game of Life (Row Coroutines)");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_cycle = None;
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
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.grid().generation()));
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
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

            ui.label("🚀 Each row runs as an async coroutine that yields cooperatively!");
            if let Some(status) = &self.status {
                ui.colored_label(Color32::LIGHT_RED, status);
            } else if let Some(period) = self.last_cycle {
                ui.label(format!("Paused: the board repeats every {period} generation(s)."));
            } else {
                ui.label("Click cells to toggle them alive/dead while paused. Editing restarts at generation 0.");
            }

            ui.separator();

            // Draw the board
            let (width, height) = (self.grid().width(), self.grid().height());
            let spacing = 0.5;
            let box_size = (BOARD_PIXELS / width.max(height) as f32 - spacing).clamp(2.0, 15.0);

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(
                (box_size + spacing) * width as f32 - spacing,
                (box_size + spacing) * height as f32 - spacing,
            );

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            let mut clicked_cell = None;
            let snapshot = self.grid().snapshot();
            for (y, row) in snapshot.rows().enumerate() {
                for (x, &alive) in row.iter().enumerate() {
                    let rect = Rect::from_min_size(
                        egui::pos2(
                            start_pos.x + x as f32 * (box_size + spacing),
                            start_pos.y + y as f32 * (box_size + spacing),
                        ),
                        Vec2::splat(box_size),
                    );

                    let cell_color = if alive { self.live_color } else { self.dead_color };
                    painter.rect_filled(rect, 1.0, cell_color);
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));

                    // Only edit while paused
                    if !self.is_running && response.clicked() {
                        if let Some(pos) = response.interact_pointer_pos() {
                            if rect.contains(pos) {
                                clicked_cell = Some((x, y));
                            }
                        }
                    }
                }
            }

            let total = width * height;
            let live_cells = snapshot.population();

            if let Some((x, y)) = clicked_cell {
                self.toggle_cell(x, y);
            }

            ui.separator();

            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });

        // Keep the animation going while running
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
