use crate::dice::Expression;
use crate::dice::Modifier;
use crate::error::Error;
use crate::error::Result;
use pest::iterators::Pair;
use pest_derive::Parser;
use tracing::debug;

/// Pest parser
#[derive(Parser)]
#[grammar = "rollem.pest"]
pub struct Parser;

impl Parser {
    /// Extract the leftmost dice set found in `input`
    pub fn parse_expression(input: &str) -> Result<Expression> {
        let mut pairs =
            <Self as pest::Parser<Rule>>::parse(Rule::command, input).map_err(|error| {
                debug!("no dice set in `{}`: {}", input, error);
                Error::Malformed(input.to_owned())
            })?;
        let dice = pairs
            .next()
            .ok_or_else(|| Error::Malformed(input.to_owned()))?;
        let (mut count, mut sides, mut modifier) = (None, None, Modifier::None);
        for pair in dice.into_inner() {
            match pair.as_rule() {
                Rule::count => count = Some(Self::extract_number(pair)),
                Rule::sides => sides = Some(Self::extract_number(pair)),
                Rule::percent => modifier = Modifier::Percent,
                Rule::add => modifier = Modifier::Add(Self::extract_modifier_value(pair)),
                Rule::sub => modifier = Modifier::Subtract(Self::extract_modifier_value(pair)),
                _ => unreachable!("{:#?}", pair),
            }
        }
        Ok(Expression::new(count, sides, modifier))
    }

    /// Digit runs too long for `u64` saturate, range checks happen later
    fn extract_number(pair: Pair<Rule>) -> u64 {
        pair.as_str().parse::<u64>().unwrap_or(u64::MAX)
    }

    fn extract_modifier_value(modifier: Pair<Rule>) -> u64 {
        modifier
            .into_inner()
            .next()
            .map(Self::extract_number)
            .unwrap_or_default()
    }
}

/// Parse a dice set such as `3d6+2`, `2d10%` or `d100`
pub fn parse(input: &str) -> Result<Expression> {
    Parser::parse_expression(input)
}
