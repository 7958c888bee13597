use crate::error::{MazeError, Result};

pub const MIN_CELLS: usize = 2;
pub const MAX_CELLS: usize = 100;
pub const DEFAULT_CELLS: usize = 20;

/// Generation parameters. The maze is `cells * cells`.
/// `seed: None` draws from the thread RNG.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub cells: usize,
    pub seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            cells: DEFAULT_CELLS,
            seed: None,
        }
    }
}

impl Params {
    /// Defaults overridden by `MAZE_CELLS` and `MAZE_SEED` when they parse.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let cells = lookup("MAZE_CELLS").and_then(|s| s.trim().parse().ok());
        let seed = lookup("MAZE_SEED").and_then(|s| s.trim().parse().ok());
        Self {
            cells: cells.unwrap_or(defaults.cells),
            seed: seed.or(defaults.seed),
        }
    }

    /// The generator assumes `MIN_CELLS..=MAX_CELLS` and never rechecks it.
    pub fn validate(&self) -> Result<()> {
        if (MIN_CELLS..=MAX_CELLS).contains(&self.cells) {
            Ok(())
        } else {
            Err(MazeError::InvalidSize {
                cells: self.cells,
                min: MIN_CELLS,
                max: MAX_CELLS,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let p = Params::default();
        assert_eq!(p.cells, 20);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        for cells in [0, 1, 101, 1000] {
            let p = Params { cells, seed: None };
            assert_eq!(
                p.validate(),
                Err(MazeError::InvalidSize { cells, min: 2, max: 100 })
            );
        }
        for cells in [2, 50, 100] {
            assert!(Params { cells, seed: None }.validate().is_ok());
        }
    }

    #[test]
    fn env_overrides() {
        let p = Params::from_lookup(|k| match k {
            "MAZE_CELLS" => Some("12".into()),
            "MAZE_SEED" => Some(" 99 ".into()),
            _ => None,
        });
        assert_eq!(p, Params { cells: 12, seed: Some(99) });

        let p = Params::from_lookup(|k| (k == "MAZE_CELLS").then(|| "lots".into()));
        assert_eq!(p, Params::default());
    }
}
