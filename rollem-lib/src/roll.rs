/// Final value of a roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Total {
    /// Sum of the dice, modifier included
    Sum(i64),
    /// Percentile reading of `2d10` or `1d100`
    Percent(u64),
}

impl std::fmt::Display for Total {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Total::Sum(n) => write!(f, "{n}"),
            Total::Percent(n) => write!(f, "{n}%"),
        }
    }
}

/// Keep a roll result along with the line shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    rolls: Vec<u64>,
    total: Total,
    display: String,
}

impl Outcome {
    pub(crate) fn new(rolls: Vec<u64>, total: Total, display: String) -> Self {
        Outcome {
            rolls,
            total,
            display,
        }
    }

    /// Every die thrown, in order
    pub fn get_rolls(&self) -> &[u64] {
        &self.rolls
    }

    pub fn get_total(&self) -> Total {
        self.total
    }

    pub fn as_str(&self) -> &str {
        &self.display
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display)
    }
}

/// Interface for rolling dices
pub trait Source {
    /// Return a value in `1..=sides`
    fn throw(&mut self, sides: u64) -> u64;
}
