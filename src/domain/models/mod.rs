mod analysis;
mod language;
mod model_analysis;

pub use analysis::*;
pub use language::*;
pub use model_analysis::*;
