//! Outline path data renderers replay.
//!
//! A [`Path`] is an ordered list of commands, not a rasterized shape:
//! back-ends translate each command into their own path type
//! (`cairo_t`, `SkPath`, `lyon`, ...).

use crate::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { control: Point, to: Point },
    Close,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, to: Point) {
        self.commands.push(PathCommand::MoveTo(to));
    }

    pub fn line_to(&mut self, to: Point) {
        self.commands.push(PathCommand::LineTo(to));
    }

    /// Quadratic bezier from the current point through `control` to `to`.
    pub fn quad_to(&mut self, control: Point, to: Point) {
        self.commands.push(PathCommand::QuadTo { control, to });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
