//! Scene files. A [`Plot`] is a small RON document naming one fractal and
//! the page it goes on:
//!
//! ```ron
//! (
//!     width: 297.0,
//!     height: 210.0,
//!     margin: 10.0,
//!     scene: Koch(base_length: 250.0, depth: 3, snowflake: true),
//! )
//! ```
//!
//! Depths and iteration counts are signed here so that a bad file gets a
//! proper error instead of a parse failure.

use std::path::Path;

use geo_types::{coord, point, Point, Rect};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::errors::{checked_depth, checked_iterations, finite, FractalError};
use crate::fractals::chaos::ChaosGame;
use crate::fractals::{koch, sierpinski};
use crate::geo_types::svg::{Arrangement, Style};
use crate::render::{plot_points, Instruction};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Scene {
    Koch {
        base_length: f64,
        depth: i64,
        #[serde(default)]
        snowflake: bool,
    },
    Sierpinski {
        apex: (f64, f64),
        side: f64,
        depth: i64,
        #[serde(default)]
        holes: bool,
    },
    Chaos {
        #[serde(default = "default_anchors")]
        anchors: Vec<(f64, f64)>,
        iterations: i64,
        #[serde(default = "default_seed_anchor")]
        seed_anchor: usize,
        /// None draws from OS entropy.
        #[serde(default)]
        rng_seed: Option<u64>,
        #[serde(default = "default_scale")]
        scale: f64,
    },
}

fn default_anchors() -> Vec<(f64, f64)> {
    ChaosGame::default()
        .anchors()
        .iter()
        .map(|p| (p.x(), p.y()))
        .collect()
}

fn default_seed_anchor() -> usize {
    ChaosGame::default().seed_anchor()
}

fn default_scale() -> f64 {
    1.0
}

fn to_point(name: &'static str, (x, y): (f64, f64)) -> Result<Point<f64>, FractalError> {
    Ok(point! {x: finite(name, x)?, y: finite(name, y)?})
}

impl Scene {
    pub fn name(&self) -> &'static str {
        match self {
            Scene::Koch { snowflake: true, .. } => "koch-snowflake",
            Scene::Koch { .. } => "koch",
            Scene::Sierpinski { holes: true, .. } => "sierpinski-gasket",
            Scene::Sierpinski { .. } => "sierpinski",
            Scene::Chaos { .. } => "chaos-game",
        }
    }

    /// Validate everything, then generate. Nothing is produced for a scene
    /// with a bad parameter.
    pub fn instructions(&self) -> Result<Vec<Instruction>, FractalError> {
        match self {
            Scene::Koch {
                base_length,
                depth,
                snowflake,
            } => {
                let base_length = finite("base_length", *base_length)?;
                let depth = checked_depth(*depth, koch::MAX_DEPTH)?;
                Ok(if *snowflake {
                    koch::snowflake(base_length, depth)
                } else {
                    // Starts wherever the sink is; the page arrangement
                    // re-centres the drawing anyway.
                    let mut out = vec![Instruction::PenDown];
                    out.extend(koch::curve(base_length, depth));
                    out
                })
            }
            Scene::Sierpinski {
                apex,
                side,
                depth,
                holes,
            } => {
                let apex = to_point("apex", *apex)?;
                let side = finite("side", *side)?;
                let depth = checked_depth(*depth, sierpinski::MAX_DEPTH)?;
                let triangles = if *holes {
                    sierpinski::gasket(apex, side, depth)
                } else {
                    sierpinski::leaves(apex, side, depth)
                };
                Ok(sierpinski::trace(&triangles))
            }
            Scene::Chaos {
                anchors,
                iterations,
                seed_anchor,
                rng_seed,
                scale,
            } => {
                let anchors = match anchors.as_slice() {
                    [a, b, c] => [
                        to_point("anchors", *a)?,
                        to_point("anchors", *b)?,
                        to_point("anchors", *c)?,
                    ],
                    _ => {
                        return Err(FractalError::Config(format!(
                            "the chaos game needs exactly 3 anchors, got {}",
                            anchors.len()
                        )))
                    }
                };
                let scale = finite("scale", *scale)?;
                let iterations = checked_iterations(*iterations)?;
                let game = ChaosGame::new(anchors, *seed_anchor)?.scaled(scale);
                let rng = match rng_seed {
                    Some(seed) => SmallRng::seed_from_u64(*seed),
                    None => SmallRng::from_entropy(),
                };
                Ok(plot_points(game.points(rng, iterations)).collect())
            }
        }
    }
}

/// A page and the one scene to put on it. Sizes are in mm.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Plot {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_margin")]
    pub margin: f64,
    #[serde(default)]
    pub style: Style,
    pub scene: Scene,
}

fn default_width() -> f64 {
    297.0
}

fn default_height() -> f64 {
    210.0
}

fn default_margin() -> f64 {
    10.0
}

impl Plot {
    pub fn from_ron(source: &str) -> Result<Plot, FractalError> {
        ron::from_str(source).map_err(|err| FractalError::Config(err.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Plot, FractalError> {
        let source = std::fs::read_to_string(path.as_ref()).map_err(|err| {
            FractalError::Config(format!("{}: {}", path.as_ref().display(), err))
        })?;
        Plot::from_ron(&source)
    }

    /// Fit to the page inside the margin, y flipped for SVG.
    pub fn arrangement(&self) -> Arrangement {
        Arrangement::fit_center_margin(
            self.margin,
            Rect::new(coord! {x: 0.0, y: 0.0}, coord! {x: self.width, y: self.height}),
            true,
        )
    }
}
