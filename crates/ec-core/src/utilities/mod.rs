/// Date-string parsing helpers.
pub mod data_parsers;
