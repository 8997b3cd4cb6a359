//! Koch and Sierpinski line-art for pen-plotters.
//!
//! The generators in [`fractals`] are pure: they turn a handful of numbers
//! (and, for the chaos game, a random source) into [`render::Instruction`]s
//! or points. Anything that can follow those implements
//! [`render::RenderSink`]; the bundled [`turtle::Turtle`] records them as
//! geo_types geometry and writes SVG.
//!
//! ```rust
//! use plotty_fractals::prelude::*;
//!
//! let mut turtle = Turtle::new();
//! render(&koch::snowflake(10.0, 2), &mut turtle);
//! assert_eq!(turtle.fills().len(), 1);
//! ```

/// Errors for parameter validation and output.
pub mod errors;

/// Extensions/Traits for geo_types geometry: distances, triangles, and SVG.
pub mod geo_types;

/// Pen commands and the sink trait that consumes them.
pub mod render;

/// Turtle graphics implementation; the recording sink.
pub mod turtle;

/// Koch, Sierpinski and chaos-game generators.
pub mod fractals;

/// RON scene files.
pub mod config;

/// Make your life easy! Just import prelude::* and go.
pub mod prelude {
    pub use crate::config::{Plot, Scene};
    pub use crate::errors::FractalError;
    pub use crate::fractals::chaos::ChaosGame;
    pub use crate::fractals::{koch, sierpinski};
    pub use crate::geo_types::shapes::Triangle;
    pub use crate::geo_types::svg::{Arrangement, Style, ToSvg};
    pub use crate::geo_types::PointDistance;
    pub use crate::render::{render, Instruction, RenderSink};
    pub use crate::turtle::{degrees, Turtle};
}
