pub mod pattern_type;

pub use pattern_type::PatternType;
