//! tfacclint
//!
//! A static-analysis check for Terraform provider acceptance tests. It scans
//! Go source for composite literals of
//! `github.com/hashicorp/terraform/helper/resource.TestCase` and reports every
//! construction that never sets `CheckDestroy`, the hook that verifies test
//! infrastructure was actually destroyed. Parsing uses Tree-sitter; type
//! identity is resolved through the unit's import table.

pub mod analyzer;
pub mod cli;
pub mod error;
pub mod loader;
pub mod logging;
pub mod output;
pub mod parser;
pub mod resolver;
pub mod utils;

pub use analyzer::{Analyzer, CheckReport, ConstructionSite};
pub use error::{Error, Result};
pub use output::Finding;
pub use parser::{GoParser, TreeProvider};
pub use resolver::{ImportResolver, ResolvedType, TypeResolver};
