mod graph;

use crate::{
    mapper::{AxisValues, Orientation},
    pipe::{MapperFailure, MapperInformation, Mapper2UI, UI2Mapper},
    tracker,
};
use egui::{Color32, DragValue, TextStyle, vec2};
use log::info;

const GRAPH_LEN: usize = 100;

pub struct UI {
    tx: std::sync::mpsc::Sender<UI2Mapper>,
    rx: std::sync::mpsc::Receiver<Mapper2UI>,
    port: u16,
    info: Option<MapperInformation>,
    startup_failure: Option<MapperFailure>,
    runtime_failure: Option<MapperFailure>,
    latest: Option<(Orientation, AxisValues)>,
    graph: [[f32; 3]; GRAPH_LEN],
}

/// Scales an axis triple into `[-1, 1]` for graphing.
fn normalize(axes: &AxisValues, axis_max: i32) -> [f32; 3] {
    let max = axis_max.max(1) as f32;
    [axes.x, axes.y, axes.z].map(|value| (value as f32 / max).clamp(-1.0, 1.0))
}

impl UI {
    pub fn new(
        tx: std::sync::mpsc::Sender<UI2Mapper>,
        rx: std::sync::mpsc::Receiver<Mapper2UI>,
        cc: &eframe::CreationContext,
    ) -> Self {
        cc.egui_ctx.style_mut(|style| {
            for (style, font) in &mut style.text_styles {
                match style {
                    TextStyle::Body => font.size = 19.0,
                    TextStyle::Heading => font.size = 36.0,
                    _ => {}
                }
            }
        });

        Self {
            tx,
            rx,
            port: tracker::DEFAULT_PORT,
            info: None,
            startup_failure: None,
            runtime_failure: None,
            latest: None,
            graph: [[0.0; 3]; GRAPH_LEN],
        }
    }

    pub fn run(tx: std::sync::mpsc::Sender<UI2Mapper>, rx: std::sync::mpsc::Receiver<Mapper2UI>) -> eframe::Result<()> {
        let rtn =
            eframe::run_native("HeadStick", Default::default(), Box::new(|cc| Ok(Box::new(UI::new(tx, rx, cc)))));
        info!("Frontend stopped");
        rtn
    }

    fn receive(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                Mapper2UI::Running(inf) => {
                    self.info = Some(inf);
                }
                Mapper2UI::Failure(inf) => {
                    if self.info.is_none() {
                        self.startup_failure = Some(inf);
                    } else {
                        self.runtime_failure = Some(inf);
                    }
                }
                Mapper2UI::SampleUpdate(sample, axes) => {
                    let axis_max = self.info.as_ref().map_or(1, |inf| inf.axis_max);
                    self.graph.rotate_left(1);
                    self.graph[GRAPH_LEN - 1] = normalize(&axes, axis_max);
                    self.latest = Some((sample, axes));
                }
            }
        }
    }
}

impl eframe::App for UI {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint();
        self.receive();

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(failure) = &self.startup_failure {
                ui.scope(|ui| {
                    ui.heading(egui::RichText::from("Startup Failed").color(Color32::RED));

                    ui.separator();

                    ui.label(format!("{}", failure));
                });

                return;
            }

            let Some(inf) = &self.info else {
                ui.heading("Not Running.");
                ui.separator();

                ui.horizontal(|ui| {
                    ui.label("OpenTrack UDP port: ");
                    ui.add(DragValue::new(&mut self.port).range(1..=u16::MAX));
                });

                if ui.add_sized(vec2(200.0, 50.0), egui::Button::new("Start")).clicked() {
                    let _ = self.tx.send(UI2Mapper::Start(self.port));
                }

                return;
            };

            ui.heading(&inf.device_name);
            ui.label(format!("Listening on UDP port {}, axes span ±{}", inf.port, inf.axis_max));
            ui.separator();

            if let Some(failure) = &self.runtime_failure {
                ui.label(egui::RichText::from(format!("{}", failure)).color(Color32::RED));
                ui.separator();
            }

            match &self.latest {
                Some((sample, axes)) => {
                    egui::Grid::new("values").num_columns(3).show(ui, |ui| {
                        ui.label(egui::RichText::from("Yaw → X").color(Color32::RED));
                        ui.label(format!("{:>8.2}°", sample.yaw));
                        ui.label(format!("{:>7}", axes.x));
                        ui.end_row();
                        ui.label(egui::RichText::from("Pitch → Y").color(Color32::GREEN));
                        ui.label(format!("{:>8.2}°", sample.pitch));
                        ui.label(format!("{:>7}", axes.y));
                        ui.end_row();
                        ui.label(egui::RichText::from("Roll → Z").color(Color32::BLUE));
                        ui.label(format!("{:>8.2}°", sample.roll));
                        ui.label(format!("{:>7}", axes.z));
                        ui.end_row();
                    });
                }
                None => {
                    ui.label("Waiting for tracking data...");
                }
            }

            ui.separator();
            graph::graph(&self.graph, ui);
        });
    }

    fn on_exit(&mut self, _ctx: Option<&eframe::glow::Context>) { let _ = self.tx.send(UI2Mapper::Shutdown); }
}
