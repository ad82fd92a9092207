//! Native window backend, built on eframe.

use crate::geometry::Point2D;
use crate::plot::Axes;
use crate::plot::Color;
use crate::plot::Viewport;
use eframe::egui;
use std::fmt;

/// Initial inner size of the window, in logical pixels.
pub const DEFAULT_SIZE: [f32; 2] = [640.0, 480.0];

#[derive(Debug)]
pub enum Error {
    /// The windowing or rendering backend failed.
    Backend(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Backend(msg) => write!(f, "window error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<eframe::Error> for Error {
    fn from(err: eframe::Error) -> Error {
        Error::Backend(err.to_string())
    }
}

fn color32(c: Color) -> egui::Color32 {
    egui::Color32::from_rgb(c.r, c.g, c.b)
}

fn pos2(p: Point2D) -> egui::Pos2 {
    egui::pos2(p.x as f32, p.y as f32)
}

struct PlotWindow {
    axes: Axes,
}

impl eframe::App for PlotWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(color32(Color::WHITE)))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                let viewport = Viewport::new(
                    f64::from(rect.left()),
                    f64::from(rect.top()),
                    f64::from(rect.width()),
                    f64::from(rect.height()),
                );
                let transform = self.axes.transform(viewport);

                for line in self.axes.lines() {
                    let stroke = egui::Stroke::new(line.width() as f32, color32(line.color()));
                    for [p1, p2] in line.segments() {
                        painter.line_segment(
                            [pos2(transform.apply(*p1)), pos2(transform.apply(*p2))],
                            stroke,
                        );
                    }
                }
            });
    }
}

/// Opens a window showing `axes` and blocks until the user closes it.
pub fn show(axes: Axes, title: &str) -> Result<(), Error> {
    tracing::info!(lines = axes.lines().len(), "opening window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size(DEFAULT_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(|_cc| Ok(Box::new(PlotWindow { axes }))),
    )?;

    Ok(())
}
