//! Drawing surfaces.
//!
//! The particle field only needs three primitives: report a size, clear,
//! and fill a circle. The browser canvas implements them in `folio_web`;
//! [`CommandBuffer`] records them for headless use and tests.

use crate::style::Color;

/// A 2D surface the particle field can paint on.
pub trait DrawSurface {
    /// Surface size `(width, height)` in the surface's own pixels. For a
    /// canvas that is its backing store size.
    fn size(&self) -> (u32, u32);

    /// Clears the whole surface to transparent.
    fn clear(&mut self);

    /// Fills a circle centred on `(x, y)`.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Whole-surface clear.
    Clear,
    /// Filled circle.
    Circle {
        /// Centre X.
        x: f32,
        /// Centre Y.
        y: f32,
        /// Radius.
        radius: f32,
        /// Fill color.
        color: Color,
    },
}

/// Surface that records commands instead of rasterising them.
#[derive(Debug, Clone)]
pub struct CommandBuffer {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    /// Creates a recorder of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::with_capacity(256),
        }
    }

    /// Changes the reported size, as a viewport resize would.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Commands recorded since the last clear (the clear included).
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of circles in the current frame.
    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

impl DrawSurface for CommandBuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        // A clear invalidates everything drawn before it.
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_starts_new_frame() {
        let mut buffer = CommandBuffer::new(100, 50);

        buffer.fill_circle(1.0, 2.0, 0.5, Color::WHITE);
        buffer.clear();
        buffer.fill_circle(3.0, 4.0, 1.0, Color::WHITE);

        assert_eq!(buffer.commands().len(), 2);
        assert_eq!(buffer.commands()[0], DrawCommand::Clear);
        assert_eq!(buffer.circle_count(), 1);
    }

    #[test]
    fn test_resize_reports_new_size() {
        let mut buffer = CommandBuffer::new(100, 50);
        buffer.set_size(640, 480);
        assert_eq!(buffer.size(), (640, 480));
    }
}
