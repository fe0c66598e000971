mod finding;
mod formatter;

pub use finding::Finding;
pub use formatter::{JsonOutput, OutputFormatter};
