//! Probability distribution chart.
//!
//! [`layout_slices`] is pure geometry; [`Chart`] is the only place that
//! touches [`web_sys::CanvasRenderingContext2d`]. [`ChartSurface`] owns the
//! single live chart bound to the canvas and destroys the previous instance
//! before mounting a replacement.

use std::f64::consts::PI;

use shared::ordered_classes;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

/// One color per category position; the assignment never changes across
/// renders.
pub const SLICE_COLORS: [&str; shared::CLASS_COUNT] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF",
    "#FF9F40", "#33CC99", "#FF66B2", "#99CCFF", "#FFCC99",
];

const CHART_TITLE: &str = "Disease Probability Distribution";

/// Slices start at 12 o'clock and run clockwise.
const START_ANGLE: f64 = -PI / 2.0;

const PIE_CENTER_X: f64 = 130.0;
const PIE_CENTER_Y: f64 = 152.0;
const PIE_RADIUS: f64 = 110.0;
const LEGEND_X: f64 = 264.0;
const LEGEND_Y0: f64 = 48.0;
const LEGEND_ROW_H: f64 = 21.0;
const LEGEND_SWATCH: f64 = 12.0;

/// Geometry and color for one category slice.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub label: String,
    pub color: &'static str,
    pub start: f64,
    pub end: f64,
    pub fraction: f64,
}

/// Lays the probabilities out as contiguous angular spans in category order.
/// A non-positive total produces zero-span slices so the legend can still be
/// drawn.
pub fn layout_slices(probabilities: &[f32]) -> Vec<Slice> {
    let total: f64 = probabilities.iter().map(|p| f64::from(*p)).sum();
    let mut angle = START_ANGLE;

    ordered_classes()
        .zip(probabilities)
        .enumerate()
        .map(|(i, (class, &p))| {
            let fraction = if total > 0.0 { f64::from(p) / total } else { 0.0 };
            let start = angle;
            angle += fraction * 2.0 * PI;
            Slice {
                label: class.to_string(),
                color: SLICE_COLORS[i],
                start,
                end: angle,
                fraction,
            }
        })
        .collect()
}

/// Owns the single live chart bound to the canvas surface.
pub struct ChartSurface {
    chart: Option<Chart>,
}

impl ChartSurface {
    pub fn new() -> Self {
        Self { chart: None }
    }

    pub fn is_mounted(&self) -> bool {
        self.chart.is_some()
    }

    /// Builds and draws a chart for `probabilities` on the canvas with the
    /// given element id. Any previously mounted chart is destroyed first;
    /// rendering twice with the same input redraws the same pixels and still
    /// leaves exactly one instance.
    pub fn render(&mut self, canvas_id: &str, probabilities: &[f32]) -> Result<(), JsValue> {
        let canvas = lookup_canvas(canvas_id)?;

        if let Some(previous) = self.chart.take() {
            previous.destroy();
        }

        let chart = Chart::new(canvas, layout_slices(probabilities))?;
        chart.draw()?;
        self.chart = Some(chart);
        Ok(())
    }
}

impl Default for ChartSurface {
    fn default() -> Self {
        Self::new()
    }
}

fn lookup_canvas(canvas_id: &str) -> Result<HtmlCanvasElement, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(canvas_id))
        .ok_or_else(|| JsValue::from_str("chart canvas not found"))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("chart surface is not a canvas"))
}

/// One mounted chart: a 2D context plus its laid-out slices.
struct Chart {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    slices: Vec<Slice>,
}

impl Chart {
    fn new(canvas: HtmlCanvasElement, slices: Vec<Slice>) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, slices })
    }

    fn draw(&self) -> Result<(), JsValue> {
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        self.ctx.clear_rect(0.0, 0.0, width, height);

        self.draw_title(width)?;
        self.draw_pie()?;
        self.draw_legend()
    }

    fn draw_title(&self, width: f64) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str("#333333");
        self.ctx.set_font("14px sans-serif");
        self.ctx.set_text_align("center");
        self.ctx.fill_text(CHART_TITLE, width / 2.0, 18.0)
    }

    fn draw_pie(&self) -> Result<(), JsValue> {
        for slice in &self.slices {
            if slice.fraction <= 0.0 {
                continue;
            }
            self.ctx.begin_path();
            self.ctx.move_to(PIE_CENTER_X, PIE_CENTER_Y);
            self.ctx
                .arc(PIE_CENTER_X, PIE_CENTER_Y, PIE_RADIUS, slice.start, slice.end)?;
            self.ctx.close_path();
            self.ctx.set_fill_style_str(slice.color);
            self.ctx.fill();
        }
        Ok(())
    }

    fn draw_legend(&self) -> Result<(), JsValue> {
        self.ctx.set_font("10px sans-serif");
        self.ctx.set_text_align("left");

        for (i, slice) in self.slices.iter().enumerate() {
            let y = LEGEND_Y0 + LEGEND_ROW_H * i as f64;
            self.ctx.set_fill_style_str(slice.color);
            self.ctx.fill_rect(LEGEND_X, y, LEGEND_SWATCH, LEGEND_SWATCH);
            self.ctx.set_fill_style_str("#333333");
            self.ctx
                .fill_text(&slice.label, LEGEND_X + LEGEND_SWATCH + 6.0, y + LEGEND_SWATCH - 2.0)?;
        }
        Ok(())
    }

    /// Clears the surface so a replacement starts from blank pixels.
    fn destroy(self) {
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }
}
