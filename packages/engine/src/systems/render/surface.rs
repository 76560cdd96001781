use std::convert::Infallible;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::core::Vec2;

const FULL_TURN: f64 = 2.0 * std::f64::consts::PI;

/// The drawing operations the renderer needs from its host
pub trait DrawSurface {
    type Error;

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn begin_path(&mut self);
    fn set_fill_color(&mut self, color: &str);
    fn fill_circle(&mut self, center: Vec2, radius: f64) -> Result<(), Self::Error>;
    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f64);
}

/// The canvas context is a JS handle; drawing through it needs no `&mut`,
/// so the borrowed handle is the surface.
impl DrawSurface for &CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::clear_rect(*self, x, y, w, h);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(*self);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64) -> Result<(), JsValue> {
        self.arc(center.x, center.y, radius, 0.0, FULL_TURN)?;
        self.fill();
        Ok(())
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f64) {
        self.move_to(from.x, from.y);
        self.line_to(to.x, to.y);
        self.set_line_width(width);
        self.stroke();
    }
}

/// One recorded draw call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { x: f64, y: f64, w: f64, h: f64 },
    BeginPath,
    FillColor(String),
    Circle { center: Vec2, radius: f64 },
    Line { from: Vec2, to: Vec2, width: f64 },
}

/// Headless surface that keeps every call, in order
#[derive(Default, Debug)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Circle { .. })).count()
    }

    pub fn lines(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Line { .. })).count()
    }
}

impl DrawSurface for RecordingSurface {
    type Error = Infallible;

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(DrawCommand::Clear { x, y, w, h });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.commands.push(DrawCommand::FillColor(color.to_string()));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Circle { center, radius });
        Ok(())
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f64) {
        self.commands.push(DrawCommand::Line { from, to, width });
    }
}
