use crate::errors::FractalError;
use crate::geo_types::svg::{Arrangement, Style, ToSvg};
use crate::render::RenderSink;
use geo_types::{LineString, MultiLineString, MultiPoint, Point, Polygon};
use svg::node::element::{Circle, Path};
use svg::Document;

/// # Turtle Module
///
/// This provides logo-style turtle features, and is the crate's own
/// [`RenderSink`]: it just writes down every line, filled region and dot it
/// is asked to draw, so they can be turned into geo_types geometry or SVG.
#[derive(Clone, Debug)]
pub struct Turtle {
    lines: Vec<Vec<Point<f64>>>,
    fills: Vec<Polygon<f64>>,
    filling: Option<Vec<Point<f64>>>,
    dots: Vec<Point<f64>>,
    position: Point<f64>,
    heading: f64,
    pen: bool,
}

/// Helper function to convert degrees to radians
pub fn degrees(deg: f64) -> f64 {
    std::f64::consts::PI * (deg / 180.0)
}

impl Default for Turtle {
    fn default() -> Self {
        Turtle::new()
    }
}

impl Turtle {
    /// Starts at the origin, heading along +x, pen up.
    pub fn new() -> Self {
        Turtle {
            lines: vec![],
            fills: vec![],
            filling: None,
            dots: vec![],
            position: Point::new(0.0f64, 0.0f64),
            heading: 0.0,
            pen: false,
        }
    }

    pub fn position(&self) -> Point<f64> {
        self.position
    }

    /// Heading in radians, counterclockwise from +x.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen
    }

    fn goto(&mut self, pos: Point<f64>) {
        if self.pen {
            if let Some(line) = self.lines.last_mut() {
                line.push(pos)
            }
        }
        if let Some(fill) = self.filling.as_mut() {
            fill.push(pos)
        }
        self.position = pos;
    }

    /// All the strokes drawn so far. Pen-down blips that never moved are dropped.
    pub fn to_multiline(&self) -> MultiLineString<f64> {
        self.lines
            .iter()
            .filter(|line| line.len() > 1)
            .map(|line| LineString::from(line.clone()))
            .collect()
    }

    /// Regions closed off by begin_fill/end_fill.
    pub fn fills(&self) -> &[Polygon<f64>] {
        &self.fills
    }

    pub fn to_polygon(&self) -> Result<Polygon<f64>, geo_types::Error> {
        match self.fills.len() {
            1 => Ok(self.fills[0].clone()),
            _ => Err(geo_types::Error::MismatchedGeometry {
                expected: "Single filled region",
                found: "Multiple or zero filled regions",
            }),
        }
    }

    pub fn dots(&self) -> MultiPoint<f64> {
        MultiPoint::new(self.dots.clone())
    }

    /// Everything recorded, as one SVG document. Fills go underneath the
    /// strokes, dots on top.
    pub fn to_svg(&self, arrangement: &Arrangement, style: &Style) -> Result<Document, FractalError> {
        let mut extents = self.to_multiline();
        extents
            .0
            .extend(self.fills.iter().map(|poly| poly.exterior().clone()));
        if !self.dots.is_empty() {
            extents.0.push(LineString::from(self.dots.clone()));
        }
        let transformation = arrangement.transformation(&extents)?;

        let mut document = arrangement.create_svg_document();
        for fill in &self.fills {
            let outline = MultiLineString::new(vec![fill.exterior().clone()])
                .transformed(&transformation);
            document = document.add(
                Path::new()
                    .set("fill", style.fill.clone().unwrap_or_else(|| "none".to_string()))
                    .set("stroke", "none")
                    .set("d", outline.to_path_data().close()),
            );
        }
        let strokes = self.to_multiline().transformed(&transformation);
        if !strokes.0.is_empty() {
            document = document.add(
                Path::new()
                    .set("fill", "none")
                    .set("stroke", style.stroke.clone())
                    .set("stroke-width", style.stroke_width)
                    .set("d", strokes.to_path_data()),
            );
        }
        for dot in &self.dots {
            let p = transformation * nalgebra::Point2::new(dot.x(), dot.y());
            document = document.add(
                Circle::new()
                    .set("cx", p.x)
                    .set("cy", p.y)
                    .set("r", style.dot_radius)
                    .set("fill", style.stroke.clone()),
            );
        }
        Ok(document)
    }
}

impl RenderSink for Turtle {
    fn move_to(&mut self, point: Point<f64>) {
        self.position = point;
        if self.pen {
            self.lines.push(vec![point]);
        }
        if let Some(fill) = self.filling.as_mut() {
            fill.push(point)
        }
    }

    fn pen_up(&mut self) {
        self.pen = false;
    }

    fn pen_down(&mut self) {
        if !self.pen {
            self.pen = true;
            self.lines.push(vec![self.position]);
        }
    }

    fn forward(&mut self, distance: f64) {
        let pos = self.position
            + Point::new(distance * self.heading.cos(), distance * self.heading.sin());
        self.goto(pos);
    }

    fn turn_left(&mut self, angle: f64) {
        self.heading += degrees(angle);
    }

    fn turn_right(&mut self, angle: f64) {
        self.heading -= degrees(angle);
    }

    fn line_to(&mut self, point: Point<f64>) {
        self.pen_down();
        self.goto(point);
    }

    fn plot_point(&mut self, point: Point<f64>) {
        self.position = point;
        self.dots.push(point);
    }

    fn begin_fill(&mut self) {
        self.filling = Some(vec![self.position]);
    }

    fn end_fill(&mut self) {
        if let Some(outline) = self.filling.take() {
            if outline.len() > 2 {
                self.fills.push(Polygon::new(LineString::from(outline), vec![]));
            }
        }
    }
}
