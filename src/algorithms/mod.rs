mod growing_tree;

use rand::{thread_rng, Rng, SeedableRng as _};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{dims::Dims, gameboard::Maze};
pub use growing_tree::{GrowingTree, Outcome, Step};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Source of uniformly distributed integers, which drives the generation.
///
/// Any [`rand::Rng`] can be used, custom sources make it possible to replay exact draws.
pub trait RandomSource {
    /// Returns an integer from `min..max`, `max` must be greater than `min`.
    fn uniform(&mut self, min: usize, max: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform(&mut self, min: usize, max: usize) -> usize {
        self.gen_range(min..max)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenError {
    #[error("invalid maze size {0:?}, both dimensions must be positive")]
    InvalidSize(Dims),
}

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("cannot parse maze spec: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error(transparent)]
    Invalid(#[from] GenError),
}

/// Generates the whole maze at once.
pub fn generate<R: RandomSource>(size: Dims, rng: R) -> Result<Maze, GenError> {
    Ok(GrowingTree::new(size, rng)?.run())
}

/// Description of a maze to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeSpec {
    /// Size of the maze, `(width, depth)`.
    pub size: Dims,

    /// Seed of the maze.
    ///
    /// Used for deterministic generation.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl MazeSpec {
    pub fn new(size: Dims) -> Self {
        Self { size, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses and validates spec written in RON.
    pub fn from_ron(text: &str) -> Result<Self, SpecError> {
        let spec: Self = ron::from_str(text)?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<(), GenError> {
        if !self.size.all_positive() {
            return Err(GenError::InvalidSize(self.size));
        }

        Ok(())
    }

    pub fn rng(&self) -> Random {
        let seed = self.seed.unwrap_or_else(|| {
            let seed = thread_rng().gen();
            log::info!("No seed given, using {}", seed);
            seed
        });

        Random::seed_from_u64(seed)
    }

    pub fn generator(&self) -> Result<GrowingTree<Random>, GenError> {
        GrowingTree::new(self.size, self.rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_spec() {
        let spec = MazeSpec::from_ron("(size: (4, 3), seed: Some(5))").unwrap();
        assert_eq!(spec, MazeSpec::new(Dims(4, 3)).with_seed(5));

        let spec = MazeSpec::from_ron("(size: (2, 7))").unwrap();
        assert_eq!(spec.seed, None);
    }

    #[test]
    fn reject_invalid_spec() {
        assert!(matches!(
            MazeSpec::from_ron("(size: (0, 3))"),
            Err(SpecError::Invalid(GenError::InvalidSize(Dims(0, 3))))
        ));
        assert!(matches!(
            MazeSpec::from_ron("(size: 4)"),
            Err(SpecError::Parse(_))
        ));
        assert_eq!(
            MazeSpec::new(Dims(3, -1)).validate(),
            Err(GenError::InvalidSize(Dims(3, -1)))
        );
    }

    #[test]
    fn seeded_spec_is_deterministic() {
        let spec = MazeSpec::new(Dims(9, 7)).with_seed(42);
        let first = spec.generator().unwrap().run();
        let second = spec.generator().unwrap().run();
        assert_eq!(first, second);
        assert!(first.is_perfect());
    }

    #[test]
    fn unseeded_spec_generates() {
        let maze = MazeSpec::new(Dims(5, 5)).generator().unwrap().run();
        assert!(maze.is_perfect());
    }

    #[test]
    fn generate_rejects_bad_size() {
        assert_eq!(
            generate(Dims(0, 0), thread_rng()).unwrap_err(),
            GenError::InvalidSize(Dims(0, 0))
        );
        assert_eq!(generate(Dims(3, 4), thread_rng()).unwrap().cell_count(), 12);
    }
}
