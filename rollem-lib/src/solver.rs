use crate::dice::Expression;
use crate::error::Result;
use crate::parser;
use crate::roll;
use rand::Rng;

/// Default random dice roller
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> roll::Source for RandomSource<'_, T> {
    fn throw(&mut self, sides: u64) -> u64 {
        self.generator.gen_range(1..=sides)
    }
}

/// Represent a solver and holds the query string
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solver(String);

impl Solver {
    pub fn new(input: &str) -> Self {
        Solver(input.trim().to_owned())
    }

    /// Fall back to `default` when the query holds no dice set at all
    pub fn or_default(self, default: &str) -> Self {
        if self.0.is_empty() {
            Solver::new(default)
        } else {
            self
        }
    }

    /// Parse the query without rolling anything
    pub fn expression(&self) -> Result<Expression> {
        parser::parse(&self.0)
    }

    /// Solve the roll expression using the default Rng source
    pub fn solve(&self) -> Result<roll::Outcome> {
        self.solve_with(&mut rand::thread_rng())
    }

    /// Solve the roll expression using the provided Rng source
    pub fn solve_with<R: Rng>(&self, generator: &mut R) -> Result<roll::Outcome> {
        self.solve_with_source(&mut RandomSource { generator })
    }

    /// Solve the roll expression using the provided source
    pub fn solve_with_source<S: roll::Source>(&self, source: &mut S) -> Result<roll::Outcome> {
        self.expression()?.roll_with_source(source)
    }

    /// Return the query string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
