mod analyze_topic;

pub use analyze_topic::*;
