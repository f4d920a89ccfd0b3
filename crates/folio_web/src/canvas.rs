//! 2D canvas drawing surface.

use std::f64::consts::TAU;

use folio_fx::{Color, DrawSurface, FxError, FxResult};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// [`DrawSurface`] over a `<canvas>` element's 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Colour currently set as fill style, with its CSS text.
    fill: Option<(Color, String)>,
}

impl CanvasSurface {
    /// Acquires the canvas's 2D context.
    ///
    /// # Errors
    ///
    /// [`FxError::SurfaceUnavailable`] if the context cannot be created.
    pub fn new(canvas: HtmlCanvasElement) -> FxResult<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| FxError::SurfaceUnavailable(format!("{e:?}")))?
            .ok_or_else(|| FxError::SurfaceUnavailable("no 2d context".to_owned()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FxError::SurfaceUnavailable("context is not 2d".to_owned()))?;

        Ok(Self {
            canvas,
            ctx,
            fill: None,
        })
    }

    /// Sets the canvas backing-store size.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// The canvas element.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn use_fill(&mut self, color: Color) {
        if matches!(&self.fill, Some((current, _)) if *current == color) {
            return;
        }
        let css = color.to_css();
        self.ctx.set_fill_style_str(&css);
        self.fill = Some((color, css));
    }
}

impl DrawSurface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, f64::from(w), f64::from(h));
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.use_fill(color);
        self.ctx.begin_path();
        // Negative radii throw; arc() reports it and the circle is skipped.
        if self
            .ctx
            .arc(f64::from(x), f64::from(y), f64::from(radius), 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }
}
