use super::*;

/// Backtracking placement that tries each row's columns in a seeded random order.
///
/// The result is reproducible for a given `(size, seed)` pair and fails on exactly the
/// sizes [`BacktrackingPlacer`] fails on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShuffledPlacer {
    seed: u64,
}

impl ShuffledPlacer {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinePlacer for ShuffledPlacer {
    fn place(self, size: Coord) -> Result<Board> {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let column_orders = (0..size)
            .map(|_| {
                let mut order: Vec<Coord> = (0..size).collect();
                order.shuffle(&mut rng);
                order
            })
            .collect();

        log::debug!("Shuffled placement with seed {}", self.seed);
        place_with_orders(size, column_orders)
    }
}
