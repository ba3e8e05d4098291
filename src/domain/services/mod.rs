mod prompt;
mod response_parser;
mod shopping_link;

pub use prompt::*;
pub use response_parser::*;
pub use shopping_link::*;
