pub mod aggregate;

pub use aggregate::{
    PatternStoreError, ResultPattern, ResultPatternDraft, ResultPatternId,
};
