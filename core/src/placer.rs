use alloc::vec::Vec;
use ndarray::Array2;
use rand::Rng;
use rand::rngs::SmallRng;
use rand::seq::index;

use crate::*;

/// Source of mine layouts, asked for a fresh one on every reset.
pub trait MinePlacer {
    fn place(&mut self, config: GameConfig) -> Result<MineLayout>;
}

/// Uniformly random placement driven by an injected RNG.
#[derive(Clone, Debug)]
pub struct RandomPlacer<R> {
    rng: R,
}

impl<R: Rng> RandomPlacer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPlacer<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MinePlacer for RandomPlacer<R> {
    fn place(&mut self, config: GameConfig) -> Result<MineLayout> {
        let rows = usize::from(config.rows());
        let total = usize::from(config.total_cells());
        let mines = usize::from(config.mines());

        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        // sampled indices are distinct, each subset equally likely
        for i in index::sample(&mut self.rng, total, mines) {
            let coords = ((i / rows) as Coord, (i % rows) as Coord);
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(MineLayout::from_mine_mask(mine_mask))
    }
}

/// Fixed mine positions, the same layout on every reset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PresetPlacer {
    mines: Vec<Coord2>,
}

impl PresetPlacer {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MinePlacer for PresetPlacer {
    fn place(&mut self, config: GameConfig) -> Result<MineLayout> {
        let layout = MineLayout::from_mine_coords(config.size(), &self.mines)?;
        if layout.mine_count() != config.mines() {
            log::warn!(
                "Preset has {} distinct mines, configuration expects {}",
                layout.mine_count(),
                config.mines()
            );
            return Err(GameError::InvalidConfiguration {
                size: config.size(),
                mines: config.mines(),
            });
        }
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(size: Coord2, mines: CellCount) -> GameConfig {
        GameConfig::new(size, mines).unwrap()
    }

    #[test]
    fn random_placement_has_exact_mine_count() {
        let mut placer = RandomPlacer::from_seed(7);
        for mines in [0, 1, 6, 20, 34, 35] {
            let layout = placer.place(config((5, 7), mines)).unwrap();
            assert_eq!(layout.size(), (5, 7));
            assert_eq!(layout.mine_count(), mines);
        }
    }

    #[test]
    fn random_placement_is_deterministic_per_seed() {
        let a = RandomPlacer::from_seed(42).place(GameConfig::classic()).unwrap();
        let b = RandomPlacer::from_seed(42).place(GameConfig::classic()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn random_placement_changes_between_resets() {
        let mut placer = RandomPlacer::from_seed(3);
        let config = config((16, 16), 40);
        let first = placer.place(config).unwrap();
        let layouts_differ = (0..8).any(|_| placer.place(config).unwrap() != first);
        assert!(layouts_differ);
    }

    #[test]
    fn random_placement_reaches_every_cell() {
        let mut placer = RandomPlacer::from_seed(11);
        let config = config((3, 2), 1);
        let mut seen = Array2::<bool>::default(config.size().to_nd_index());
        for _ in 0..200 {
            let layout = placer.place(config).unwrap();
            for x in 0..config.cols() {
                for y in 0..config.rows() {
                    if layout.contains_mine((x, y)) {
                        seen[(x, y).to_nd_index()] = true;
                    }
                }
            }
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn preset_placement_returns_given_mines() {
        let mut placer = PresetPlacer::new([(0, 0), (4, 6)]);
        let layout = placer.place(config((5, 7), 2)).unwrap();
        assert!(layout.contains_mine((0, 0)));
        assert!(layout.contains_mine((4, 6)));
        assert!(!layout.contains_mine((2, 3)));
    }

    #[test]
    fn preset_placement_rejects_count_mismatch() {
        let mut placer = PresetPlacer::new([(0, 0), (0, 0)]);
        assert_eq!(
            placer.place(config((5, 7), 2)),
            Err(GameError::InvalidConfiguration {
                size: (5, 7),
                mines: 2
            })
        );
    }
}
