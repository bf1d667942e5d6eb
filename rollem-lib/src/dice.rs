use crate::error::Error;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::parser;
use crate::roll;
use std::str::FromStr;

/// Optional dice modifier applied once the dice are thrown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Modifier {
    #[default]
    None,
    /// Read `2d10` or `1d100` as a percentage
    Percent,
    Add(u64),
    Subtract(u64),
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Modifier::None => Ok(()),
            Modifier::Percent => write!(f, "%"),
            Modifier::Add(n) => write!(f, "+{n}"),
            Modifier::Subtract(n) => write!(f, "-{n}"),
        }
    }
}

/// A dice set exactly as it was written.
///
/// Missing counts and sides stay `None` so that `d6` and `0d6` can be told
/// apart; defaults are only applied when the expression is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Expression {
    count: Option<u64>,
    sides: Option<u64>,
    modifier: Modifier,
}

impl Expression {
    pub fn new(count: Option<u64>, sides: Option<u64>, modifier: Modifier) -> Self {
        Expression {
            count,
            sides,
            modifier,
        }
    }

    pub fn get_count(&self) -> Option<u64> {
        self.count
    }

    pub fn get_sides(&self) -> Option<u64> {
        self.sides
    }

    pub fn get_modifier(&self) -> Modifier {
        self.modifier
    }

    /// Throw the dice using the provided source
    pub fn roll_with_source<S: roll::Source>(&self, source: &mut S) -> Result<roll::Outcome> {
        Evaluator::eval(self, source)
    }
}

impl FromStr for Expression {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(count) = self.count {
            write!(f, "{count}")?;
        }
        write!(f, "d")?;
        if let Some(sides) = self.sides {
            write!(f, "{sides}")?;
        }
        write!(f, "{}", self.modifier)
    }
}
