//! Koch curves, as turtle instructions.
//!
//! A depth 0 curve is one "bump": four segments of the base length with a
//! 60 degree spike in the middle, spanning three base lengths. Every extra
//! level of depth swaps each segment for a bump a third the size.

use crate::render::Instruction;
use geo_types::{point, Point};

/// Turn between consecutive segments of a bump, in degrees.
pub const ANGLE: f64 = 60.0;

const SCALE: f64 = 1.0 / 3.0;

/// Deepest curve a scene may ask for; past this the instruction count runs
/// into the tens of millions.
pub const MAX_DEPTH: u32 = 10;

/// The turns between the four parts of a bump.
const TURNS: [Instruction; 3] = [
    Instruction::TurnLeft(ANGLE),
    Instruction::TurnRight(2.0 * ANGLE),
    Instruction::TurnLeft(ANGLE),
];

fn bump(out: &mut Vec<Instruction>, length: f64) {
    out.push(Instruction::Forward(length));
    for turn in TURNS {
        out.push(turn);
        out.push(Instruction::Forward(length));
    }
}

fn segment(out: &mut Vec<Instruction>, length: f64, depth: u32) {
    if depth == 0 {
        bump(out, length);
        return;
    }
    segment(out, SCALE * length, depth - 1);
    for turn in TURNS {
        out.push(turn);
        segment(out, SCALE * length, depth - 1);
    }
}

/// Number of instructions [`curve`] produces for a given depth.
pub fn instruction_count(depth: u32) -> usize {
    // I(0) = 7, I(d) = 4 I(d-1) + 3; saturates instead of overflowing
    let bumps = 4usize.saturating_pow(depth);
    bumps.saturating_mul(8) - 1
}

/// # curve
///
/// One Koch curve, heading wherever the sink is heading when it starts, and
/// ending with the same heading. Spans `3 * base_length` end to end.
///
/// ```rust
/// use plotty_fractals::fractals::koch;
/// use plotty_fractals::render::Instruction;
///
/// let bump = koch::curve(300.0, 0);
/// assert_eq!(bump.len(), 7);
/// assert_eq!(bump[0], Instruction::Forward(300.0));
/// ```
pub fn curve(base_length: f64, depth: u32) -> Vec<Instruction> {
    let mut out = Vec::with_capacity(instruction_count(depth.min(MAX_DEPTH)));
    segment(&mut out, base_length, depth);
    tracing::debug!(base_length, depth, instructions = out.len(), "koch curve");
    out
}

/// Bottom-left corner of the snowflake's base triangle. With this as the
/// start the outline is centred on the origin.
pub fn snowflake_corner(base_length: f64) -> Point<f64> {
    point! {x: -1.5 * base_length, y: -(3.0f64.sqrt() / 2.0) * base_length}
}

/// # snowflake
///
/// Three curves around a triangle of side `3 * base_length`, clockwise from
/// the bottom-left corner so every bump points outwards, wrapped in a fill
/// bracket. Assumes the sink starts out heading along +x.
pub fn snowflake(base_length: f64, depth: u32) -> Vec<Instruction> {
    let side = curve(base_length, depth);
    let mut out = Vec::with_capacity(3 * side.len() + 8);
    out.push(Instruction::PenUp);
    out.push(Instruction::MoveTo(snowflake_corner(base_length)));
    out.push(Instruction::PenDown);
    out.push(Instruction::BeginFill);
    out.push(Instruction::TurnLeft(ANGLE));
    out.extend_from_slice(&side);
    for _ in 0..2 {
        out.push(Instruction::TurnRight(2.0 * ANGLE));
        out.extend_from_slice(&side);
    }
    out.push(Instruction::EndFill);
    tracing::debug!(base_length, depth, instructions = out.len(), "koch snowflake");
    out
}

/// Total distance covered by `Forward` instructions.
pub fn path_length(instructions: &[Instruction]) -> f64 {
    instructions
        .iter()
        .map(|i| match i {
            Instruction::Forward(d) => *d,
            _ => 0.0,
        })
        .sum()
}
