mod parse_tests;
mod source_tests;
