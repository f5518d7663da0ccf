use crate::capture::record::capture_timestamp;
use crate::classroom::core::{Msg, ProcessedFrame};
use crate::classroom::main::Classroom;
use crate::classroom::render::{status_line, window_title};
use crate::gesture::option::AnswerOption;
use chrono::Utc;
use eframe::egui;
use std::error::Error;
use std::time::Instant;

const LANDMARK_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 64, 64);

struct ClassroomWindow {
    classroom: Classroom,
    student_id: String,
    texture: Option<egui::TextureHandle>,
    last_tick: Instant,
    title: String,
}

impl ClassroomWindow {
    fn new(classroom: Classroom) -> Self {
        Self {
            student_id: classroom.model.student_id.clone(),
            classroom,
            texture: None,
            last_tick: Instant::now(),
            title: String::new(),
        }
    }

    fn upload_frame(&mut self, ctx: &egui::Context) {
        let Some(frame) = &self.classroom.model.frame else {
            return;
        };

        let (width, height) = frame.image.dimensions();
        let color_image =
            egui::ColorImage::from_rgb([width as usize, height as usize], frame.image.as_raw());

        if let Some(texture) = self.texture.as_mut() {
            texture.set(color_image, egui::TextureOptions::LINEAR);
        } else {
            self.texture = Some(ctx.load_texture("frame", color_image, egui::TextureOptions::LINEAR));
        }
    }

    fn tick(&mut self, ctx: &egui::Context) {
        if self.last_tick.elapsed() < self.classroom.config.frame_interval {
            return;
        }
        self.last_tick = Instant::now();

        self.classroom.dispatch(Msg::Tick);
        self.upload_frame(ctx);

        let title = window_title(&self.classroom.model);
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }
}

fn draw_overlay(painter: &egui::Painter, rect: egui::Rect, frame: &ProcessedFrame) {
    let (width, height) = frame.image.dimensions();
    let scale_x = rect.width() / width as f32;
    let scale_y = rect.height() / height as f32;
    let to_screen = |x: i32, y: i32| {
        egui::pos2(
            rect.left() + x as f32 * scale_x,
            rect.top() + y as f32 * scale_y,
        )
    };

    for (hand, label) in frame.hands.iter().zip(&frame.labels) {
        for point in hand.points() {
            painter.circle_filled(to_screen(point.x, point.y), 3.0, LANDMARK_COLOR);
        }
        painter.text(
            to_screen(hand.wrist.x, hand.wrist.y) + egui::vec2(0.0, 6.0),
            egui::Align2::CENTER_TOP,
            label.as_str(),
            egui::FontId::proportional(14.0),
            egui::Color32::WHITE,
        );
    }
}

impl eframe::App for ClassroomWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick(ctx);

        let mut msgs = vec![];
        let model = &self.classroom.model;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                match (&self.texture, &model.frame) {
                    (Some(texture), Some(frame)) => {
                        let response = ui.add(
                            egui::Image::new(egui::load::SizedTexture::from_handle(texture))
                                .shrink_to_fit(),
                        );
                        draw_overlay(&ui.painter_at(response.rect), response.rect, frame);
                    }
                    _ => {
                        ui.add_space(120.0);
                        ui.spinner();
                        ui.add_space(120.0);
                    }
                }

                ui.add_space(8.0);

                let mut selected = model.correct_option;
                egui::ComboBox::from_id_source("correct_option")
                    .selected_text(AnswerOption::selection_text(selected))
                    .show_ui(ui, |ui| {
                        for option in AnswerOption::CHOICES {
                            ui.selectable_value(&mut selected, Some(option), option.as_str());
                        }
                    });
                if let Some(option) = selected.filter(|_| selected != model.correct_option) {
                    msgs.push(Msg::CorrectOptionSelected(option));
                }

                let student_id = ui.add(
                    egui::TextEdit::singleline(&mut self.student_id).hint_text("Enter Student ID"),
                );
                if student_id.changed() {
                    msgs.push(Msg::StudentIdChanged(self.student_id.clone()));
                }

                if ui.button("📸 Capture Snapshot").clicked() {
                    let now = Utc::now().with_timezone(&self.classroom.config.logger_timezone);
                    msgs.push(Msg::CaptureRequested {
                        timestamp: capture_timestamp(&now),
                    });
                }

                ui.add_space(8.0);
                ui.label(status_line(model));
            });
        });

        for msg in msgs {
            self.classroom.dispatch(msg);
        }

        ctx.request_repaint_after(self.classroom.config.frame_interval);
    }
}

pub fn run(classroom: Classroom) -> Result<(), Box<dyn Error>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([720.0, 700.0]),
        ..Default::default()
    };

    let window = ClassroomWindow::new(classroom);

    eframe::run_native("Gesture Quiz", options, Box::new(|_cc| Box::new(window)))
        .map_err(|e| e.to_string().into())
}
