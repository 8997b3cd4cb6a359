use crate::errors::FractalError;
use geo::bounding_rect::BoundingRect;
use geo_types::{coord, Coord, LineString, MultiLineString, Rect};
use nalgebra::{Affine2, Matrix3, Point2 as NPoint2};
use serde::{Deserialize, Serialize};
use svg::node::element::path::Data;
use svg::Document;

/// An arrangement is a plan for transformation of geometry onto an SVG page:
/// scale uniformly to fit inside `margin` mm of the page edge, then centre.
/// Pages are in mm, and `invert` flips y so turtle-space (y up) lands the
/// right way round in SVG-space (y down).
#[derive(Clone, Debug, PartialEq)]
pub struct Arrangement {
    pub margin: f64,
    pub page: Rect<f64>,
    pub invert: bool,
}

/// Stroke/fill settings applied when a drawing is written out.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Style {
    pub stroke: String,
    pub stroke_width: f64,
    pub fill: Option<String>,
    pub dot_radius: f64,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            stroke: "black".to_string(),
            stroke_width: 0.3,
            fill: None,
            dot_radius: 0.25,
        }
    }
}

fn translate_scale(scale: f64, tx: f64, ty: f64) -> Affine2<f64> {
    Affine2::from_matrix_unchecked(Matrix3::new(
        scale, 0.0, tx,
        0.0, scale, ty,
        0.0, 0.0, 1.0,
    ))
}

fn flip_y(bounds: &Rect<f64>) -> Affine2<f64> {
    Affine2::from_matrix_unchecked(Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, -1.0, bounds.min().y + bounds.max().y,
        0.0, 0.0, 1.0,
    ))
}

impl Arrangement {
    pub fn fit_center_margin(margin: f64, page: Rect<f64>, invert: bool) -> Arrangement {
        Arrangement {
            margin,
            page,
            invert,
        }
    }

    /// The affine transform that places geometry with the given bounds.
    pub fn transformation(&self, geometry: &MultiLineString<f64>) -> Result<Affine2<f64>, FractalError> {
        let gbox = geometry.bounding_rect().ok_or(FractalError::EmptyGeometry)?;
        let bounds = &self.page;
        let scale = fit_scale(
            bounds.width() - 2.0 * self.margin,
            bounds.height() - 2.0 * self.margin,
            &gbox,
        )?;
        let bcenter = bounds.center();
        let gcenter = gbox.center();
        let tx = translate_scale(
            scale,
            bcenter.x - gcenter.x * scale,
            bcenter.y - gcenter.y * scale,
        );
        Ok(if self.invert { flip_y(bounds) * tx } else { tx })
    }

    pub fn create_svg_document(&self) -> Document {
        let page = &self.page;
        Document::new()
            .set(
                "viewBox",
                (page.min().x, page.min().y, page.width(), page.height()),
            )
            .set("width", format!("{}mm", page.width()))
            .set("height", format!("{}mm", page.height()))
    }
}

/// Uniform scale that fits `gbox` into a width x height window. Degenerate
/// (zero width or height) geometry only constrains the other axis.
fn fit_scale(width: f64, height: f64, gbox: &Rect<f64>) -> Result<f64, FractalError> {
    let sx = if gbox.width() > 0.0 { Some(width / gbox.width()) } else { None };
    let sy = if gbox.height() > 0.0 { Some(height / gbox.height()) } else { None };
    match (sx, sy) {
        (Some(sx), Some(sy)) => Ok(sx.min(sy)),
        (Some(s), None) | (None, Some(s)) => Ok(s),
        (None, None) => Err(FractalError::EmptyGeometry),
    }
}

pub trait ToSvg {
    /// Run an already-computed transformation over every coordinate.
    fn transformed(&self, transformation: &Affine2<f64>) -> Self;

    /// Convert the Geometry into an SVG PathData item
    fn to_path_data(&self) -> Data;
}

impl ToSvg for MultiLineString<f64> {
    fn transformed(&self, transformation: &Affine2<f64>) -> Self {
        let linestrings: Vec<LineString<f64>> = self
            .iter()
            .map(|linestring| {
                LineString::from(
                    linestring
                        .coords()
                        .map(|c| {
                            let pt = transformation * NPoint2::new(c.x, c.y);
                            coord! {x: pt.x, y: pt.y}
                        })
                        .collect::<Vec<Coord<f64>>>(),
                )
            })
            .collect();
        MultiLineString::new(linestrings)
    }

    fn to_path_data(&self) -> Data {
        let mut svg_data = Data::new();
        for tline in self {
            for point in tline.points().take(1) {
                svg_data = svg_data.move_to((point.x(), point.y()));
            }
            for point in tline.points().skip(1) {
                svg_data = svg_data.line_to((point.x(), point.y()));
            }
        }
        svg_data
    }
}
