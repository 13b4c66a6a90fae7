//! Behavioral Pattern: Visitor
//! Example: area and middle-point calculations over a fixed set of shapes
//!
//! Shapes only know how to `accept` a visitor; the visitor picks the
//! handler for the concrete shape.
//!
//! Run with: cargo run --bin visitor

use std::f64::consts::PI;

use tracing::debug;

use crate::error::CatalogError;
use crate::transcript::Transcript;

pub trait Shape {
    fn kind(&self) -> &'static str;
    fn accept(&self, visitor: &mut dyn Visitor);
}

pub trait Visitor {
    fn visit_square(&mut self, square: &Square);
    fn visit_circle(&mut self, circle: &Circle);
    fn visit_rectangle(&mut self, rectangle: &Rectangle);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub side: f64,
}

impl Shape for Square {
    fn kind(&self) -> &'static str {
        "Square"
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_square(self);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Shape for Circle {
    fn kind(&self) -> &'static str {
        "Circle"
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_circle(self);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub l: f64,
    pub b: f64,
}

impl Shape for Rectangle {
    fn kind(&self) -> &'static str {
        "rectangle"
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_rectangle(self);
    }
}

// =============================================================================
// Concrete visitors
// =============================================================================

/// Announces and records the area of each visited shape.
pub struct AreaCalculator {
    out: Transcript,
    areas: Vec<f64>,
}

impl AreaCalculator {
    pub fn new(out: &Transcript) -> Self {
        AreaCalculator {
            out: out.clone(),
            areas: Vec::new(),
        }
    }

    pub fn areas(&self) -> &[f64] {
        &self.areas
    }

    fn record(&mut self, shape: &str, area: f64) {
        debug!(shape, area, "area computed");
        self.out.line(format!("Calculating area for {shape}"));
        self.areas.push(area);
    }
}

impl Visitor for AreaCalculator {
    fn visit_square(&mut self, square: &Square) {
        self.record("square", square.side * square.side);
    }

    fn visit_circle(&mut self, circle: &Circle) {
        self.record("circle", PI * circle.radius * circle.radius);
    }

    fn visit_rectangle(&mut self, rectangle: &Rectangle) {
        self.record("rectangle", rectangle.l * rectangle.b);
    }
}

/// Middle point of each visited shape, with the shape anchored at the origin.
pub struct MiddleCoordinates {
    out: Transcript,
    points: Vec<(f64, f64)>,
}

impl MiddleCoordinates {
    pub fn new(out: &Transcript) -> Self {
        MiddleCoordinates {
            out: out.clone(),
            points: Vec::new(),
        }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    fn record(&mut self, shape: &str, point: (f64, f64)) {
        debug!(shape, x = point.0, y = point.1, "middle point computed");
        self.out
            .line(format!("Calculating middle point coordinates for {shape}"));
        self.points.push(point);
    }
}

impl Visitor for MiddleCoordinates {
    fn visit_square(&mut self, square: &Square) {
        let half = square.side / 2.0;
        self.record("square", (half, half));
    }

    // Circles are centered on the origin.
    fn visit_circle(&mut self, _circle: &Circle) {
        self.record("circle", (0.0, 0.0));
    }

    fn visit_rectangle(&mut self, rectangle: &Rectangle) {
        self.record("rectangle", (rectangle.l / 2.0, rectangle.b / 2.0));
    }
}

pub fn sample_shapes() -> Vec<Box<dyn Shape>> {
    vec![
        Box::new(Square { side: 2.0 }),
        Box::new(Circle { radius: 3.0 }),
        Box::new(Rectangle { l: 2.0, b: 3.0 }),
    ]
}

pub fn demo(out: &Transcript) -> Result<(), CatalogError> {
    let shapes = sample_shapes();

    let mut area_calculator = AreaCalculator::new(out);
    for shape in &shapes {
        shape.accept(&mut area_calculator);
    }

    out.blank();
    let mut middle_coordinates = MiddleCoordinates::new(out);
    for shape in &shapes {
        shape.accept(&mut middle_coordinates);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
    }

    impl Visitor for Recorder {
        fn visit_square(&mut self, _square: &Square) {
            self.calls.push("square");
        }

        fn visit_circle(&mut self, _circle: &Circle) {
            self.calls.push("circle");
        }

        fn visit_rectangle(&mut self, _rectangle: &Rectangle) {
            self.calls.push("rectangle");
        }
    }

    #[test]
    fn test_each_shape_dispatches_to_its_own_handler_once() {
        let expected = [("Square", "square"), ("Circle", "circle"), ("rectangle", "rectangle")];

        for (shape, (kind, handler)) in sample_shapes().iter().zip(expected) {
            let mut recorder = Recorder::default();
            shape.accept(&mut recorder);

            assert_eq!(shape.kind(), kind);
            assert_eq!(recorder.calls, vec![handler]);
        }
    }

    #[test]
    fn test_area_calculator_values() {
        let out = Transcript::new();
        let mut calculator = AreaCalculator::new(&out);
        for shape in sample_shapes() {
            shape.accept(&mut calculator);
        }

        let areas = calculator.areas();
        assert_eq!(areas[0], 4.0);
        assert!((areas[1] - 9.0 * PI).abs() < 1e-9);
        assert_eq!(areas[2], 6.0);
    }

    #[test]
    fn test_middle_coordinates_values() {
        let out = Transcript::new();
        let mut middle = MiddleCoordinates::new(&out);
        for shape in sample_shapes() {
            shape.accept(&mut middle);
        }

        assert_eq!(middle.points(), &[(1.0, 1.0), (0.0, 0.0), (1.0, 1.5)]);
    }

    #[test]
    fn test_demo_lines() {
        let out = Transcript::new();
        demo(&out).unwrap();
        assert_eq!(
            out.lines(),
            vec![
                "Calculating area for square",
                "Calculating area for circle",
                "Calculating area for rectangle",
                "",
                "Calculating middle point coordinates for square",
                "Calculating middle point coordinates for circle",
                "Calculating middle point coordinates for rectangle",
            ]
        );
    }
}
