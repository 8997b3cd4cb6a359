//! The drawing side of the crate. Generators only ever produce
//! [`Instruction`]s (or plain points); whatever implements [`RenderSink`] owns
//! the cursor, the pen, and the pixels.

use geo_types::Point;

/// A single pen command. Angles are in degrees, like a logo turtle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Instruction {
    Forward(f64),
    TurnLeft(f64),
    TurnRight(f64),
    PenUp,
    PenDown,
    MoveTo(Point<f64>),
    LineTo(Point<f64>),
    PlotPoint(Point<f64>),
    BeginFill,
    EndFill,
}

impl Instruction {
    /// Send this instruction to a sink.
    pub fn apply<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        match *self {
            Instruction::Forward(distance) => sink.forward(distance),
            Instruction::TurnLeft(angle) => sink.turn_left(angle),
            Instruction::TurnRight(angle) => sink.turn_right(angle),
            Instruction::PenUp => sink.pen_up(),
            Instruction::PenDown => sink.pen_down(),
            Instruction::MoveTo(point) => sink.move_to(point),
            Instruction::LineTo(point) => sink.line_to(point),
            Instruction::PlotPoint(point) => sink.plot_point(point),
            Instruction::BeginFill => sink.begin_fill(),
            Instruction::EndFill => sink.end_fill(),
        }
    }
}

/// # RenderSink
///
/// The capability set a drawing backend has to offer. Everything is
/// sequential and `&mut`; no sink method feeds anything back into generation.
///
/// `move_to` repositions without drawing, `line_to` always draws a straight
/// edge from the current position, and `forward` draws only while the pen is
/// down. Filling is optional, so the bracket methods default to no-ops.
pub trait RenderSink {
    fn move_to(&mut self, point: Point<f64>);
    fn pen_up(&mut self);
    fn pen_down(&mut self);
    fn forward(&mut self, distance: f64);
    fn turn_left(&mut self, degrees: f64);
    fn turn_right(&mut self, degrees: f64);
    fn line_to(&mut self, point: Point<f64>);
    fn plot_point(&mut self, point: Point<f64>);
    fn begin_fill(&mut self) {}
    fn end_fill(&mut self) {}
}

/// Replay an instruction stream into a sink, in order.
pub fn render<'a, I, S>(instructions: I, sink: &mut S)
where
    I: IntoIterator<Item = &'a Instruction>,
    S: RenderSink + ?Sized,
{
    let mut count = 0usize;
    for instruction in instructions {
        instruction.apply(sink);
        count += 1;
    }
    tracing::debug!(instructions = count, "rendered");
}

/// Wrap a stream of points as `PlotPoint` instructions.
pub fn plot_points<I>(points: I) -> impl Iterator<Item = Instruction>
where
    I: IntoIterator<Item = Point<f64>>,
{
    points.into_iter().map(Instruction::PlotPoint)
}
