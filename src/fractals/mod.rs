//! The generators. Each one is a pure function of its parameters (plus an
//! injected random source for the chaos game) and produces instructions or
//! points for a [`crate::render::RenderSink`].

/// Koch curve and snowflake.
pub mod koch;

/// Sierpinski triangle by recursive subdivision.
pub mod sierpinski;

/// Sierpinski triangle by the chaos game.
pub mod chaos;
