pub mod dice;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod responder;
pub mod roll;
pub mod settings;
pub mod solver;
