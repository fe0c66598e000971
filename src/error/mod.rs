mod analyzer;
mod parser;

pub use analyzer::AnalyzerError;
pub use parser::ParserError;

use crate::loader::LoadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Parser(#[from] ParserError),

    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),
}

pub type Result<T> = std::result::Result<T, Error>;
