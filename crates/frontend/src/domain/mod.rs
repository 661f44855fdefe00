pub mod result_pattern;
