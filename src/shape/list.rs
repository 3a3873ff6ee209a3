use egui::{Pos2, Vec2};

use super::{Shape, ShapeType};

/// The canvas's ordered shape collection.
///
/// Insertion order is paint order: later shapes draw over earlier ones.
/// Shapes are never removed; they are mutated in place only by
/// drag-translation.
#[derive(Debug, Default)]
pub struct ShapeList {
    shapes: Vec<ShapeType>,
}

impl ShapeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: ShapeType) {
        self.shapes.push(shape);
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShapeType> {
        self.shapes.iter()
    }

    /// Hit-test in insertion order and return the id of the FIRST match.
    ///
    /// Note this picks the earliest-added overlapping shape, not the
    /// topmost-painted one. Kept this way on purpose; see DESIGN.md.
    pub fn hit_test(&self, point: Pos2) -> Option<usize> {
        self.shapes.iter().find(|s| s.hit_test(point)).map(Shape::id)
    }

    pub fn get(&self, id: usize) -> Option<&ShapeType> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Translate the shape with the given id. Returns false if no shape has
    /// that id.
    pub fn translate(&mut self, id: usize, delta: Vec2) -> bool {
        match self.shapes.iter_mut().find(|s| s.id() == id) {
            Some(shape) => {
                shape.translate(delta);
                true
            }
            None => false,
        }
    }
}
