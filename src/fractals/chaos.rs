//! The chaos game: start on an anchor, then keep jumping halfway towards a
//! randomly picked anchor. The points pile up on a Sierpinski triangle.

use crate::errors::FractalError;
use crate::geo_types::shapes::Triangle;
use crate::geo_types::PointDistance;
use geo_types::{point, Point};
use rand::Rng;

/// Three anchors and the one the walk starts from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChaosGame {
    anchors: [Point<f64>; 3],
    seed_anchor: usize,
}

impl Default for ChaosGame {
    /// Roughly unit-sized triangle, nudged upwards, starting from the top.
    fn default() -> Self {
        ChaosGame {
            anchors: [
                point! {x: -1.0, y: -0.7},
                point! {x: 1.0, y: -0.7},
                point! {x: 0.0, y: 3.0f64.sqrt() - 0.7},
            ],
            seed_anchor: 2,
        }
    }
}

impl ChaosGame {
    pub fn new(anchors: [Point<f64>; 3], seed_anchor: usize) -> Result<ChaosGame, FractalError> {
        if seed_anchor >= anchors.len() {
            return Err(FractalError::InvalidAnchor(seed_anchor));
        }
        Ok(ChaosGame {
            anchors,
            seed_anchor,
        })
    }

    pub fn anchors(&self) -> [Point<f64>; 3] {
        self.anchors
    }

    pub fn seed_anchor(&self) -> usize {
        self.seed_anchor
    }

    /// Same game with every anchor multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> ChaosGame {
        ChaosGame {
            anchors: self.anchors.map(|p| p * factor),
            seed_anchor: self.seed_anchor,
        }
    }

    /// The triangle every chaos point lands in.
    pub fn hull(&self) -> Triangle {
        Triangle::new(self.anchors[0], self.anchors[1], self.anchors[2])
    }

    /// Endless walk, not including the anchors.
    pub fn walk<R: Rng>(&self, rng: R) -> ChaosWalk<R> {
        ChaosWalk {
            anchors: self.anchors,
            current: self.anchors[self.seed_anchor],
            rng,
        }
    }

    /// The three anchors followed by `iterations` steps of the walk.
    pub fn points<R: Rng>(&self, rng: R, iterations: usize) -> impl Iterator<Item = Point<f64>> {
        tracing::debug!(iterations, seed_anchor = self.seed_anchor, "chaos game");
        self.anchors
            .into_iter()
            .chain(self.walk(rng).take(iterations))
    }
}

/// Lazy chaos-game walk. Each `next` picks an anchor uniformly and moves to
/// the midpoint.
#[derive(Clone, Debug)]
pub struct ChaosWalk<R> {
    anchors: [Point<f64>; 3],
    current: Point<f64>,
    rng: R,
}

impl<R> ChaosWalk<R> {
    pub fn current(&self) -> Point<f64> {
        self.current
    }
}

impl<R: Rng> Iterator for ChaosWalk<R> {
    type Item = Point<f64>;

    fn next(&mut self) -> Option<Point<f64>> {
        let target = self.anchors[self.rng.gen_range(0..self.anchors.len())];
        self.current = self.current.midpoint(&target);
        Some(self.current)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn unit_game(seed_anchor: usize) -> ChaosGame {
        ChaosGame::new(
            [
                point! {x: 0.0, y: 0.0},
                point! {x: 1.0, y: 0.0},
                point! {x: 0.5, y: 0.866},
            ],
            seed_anchor,
        )
        .expect("anchor index in range")
    }

    #[test]
    fn test_zero_iterations_is_just_anchors() {
        let game = unit_game(2);
        let points: Vec<Point<f64>> = game.points(SmallRng::seed_from_u64(0), 0).collect();
        assert_eq!(points, game.anchors().to_vec());
    }

    #[test]
    fn test_invalid_seed_anchor() {
        let anchors = ChaosGame::default().anchors();
        assert_eq!(
            ChaosGame::new(anchors, 3),
            Err(FractalError::InvalidAnchor(3))
        );
    }

    #[test]
    fn test_first_step_from_seed() {
        let game = unit_game(2);
        let seed = game.anchors()[2];
        let first = game
            .walk(SmallRng::seed_from_u64(11))
            .next()
            .expect("walk never ends");
        // Halfway between the seed and one of the anchors.
        assert!(game
            .anchors()
            .iter()
            .any(|a| seed.midpoint(a).distance(&first) < 1e-12));
    }

    #[test]
    fn test_each_step_is_a_midpoint() {
        let game = ChaosGame::default();
        let walk: Vec<Point<f64>> = game.walk(SmallRng::seed_from_u64(5)).take(200).collect();
        for pair in walk.windows(2) {
            assert!(game
                .anchors()
                .iter()
                .any(|a| pair[0].midpoint(a).distance(&pair[1]) < 1e-12));
        }
    }

    #[test]
    fn test_uses_every_anchor() {
        let game = ChaosGame::default();
        let mut hits = [0usize; 3];
        let walk: Vec<Point<f64>> = game.walk(SmallRng::seed_from_u64(99)).take(3001).collect();
        for pair in walk.windows(2) {
            for (i, a) in game.anchors().iter().enumerate() {
                if pair[0].midpoint(a).distance(&pair[1]) < 1e-12 {
                    hits[i] += 1;
                }
            }
        }
        // 3000 fair draws: each anchor should come up roughly 1000 times.
        for h in hits {
            assert!((800..1200).contains(&h), "{:?}", hits);
        }
    }

    #[test]
    fn test_scaled() {
        let game = ChaosGame::default().scaled(400.0);
        assert!(game.anchors()[0].distance(&point! {x: -400.0, y: -280.0}) < 1e-9);
        assert_eq!(game.seed_anchor(), 2);
    }

    #[test]
    fn test_walk_is_lazy() {
        let mut walk = ChaosGame::default().walk(SmallRng::seed_from_u64(1));
        assert_eq!(walk.current(), ChaosGame::default().anchors()[2]);
        let step = walk.next().expect("walk never ends");
        assert_eq!(walk.current(), step);
    }

    proptest! {
        #[test]
        fn prop_point_count(iterations in 0usize..2000, seed in any::<u64>(), anchor in 0usize..3) {
            let game = unit_game(anchor);
            let n = game.points(SmallRng::seed_from_u64(seed), iterations).count();
            prop_assert_eq!(n, iterations + 3);
        }

        #[test]
        fn prop_points_stay_in_hull(iterations in 0usize..2000, seed in any::<u64>()) {
            let game = ChaosGame::default().scaled(400.0);
            let hull = game.hull();
            for p in game.points(SmallRng::seed_from_u64(seed), iterations) {
                prop_assert!(hull.contains_point(&p, 1e-9));
            }
        }

        #[test]
        fn prop_same_seed_same_points(seed in any::<u64>()) {
            let game = ChaosGame::default();
            let a: Vec<Point<f64>> = game.points(SmallRng::seed_from_u64(seed), 500).collect();
            let b: Vec<Point<f64>> = game.points(SmallRng::seed_from_u64(seed), 500).collect();
            prop_assert_eq!(a, b);
        }
    }
}
