mod lexer_error_tests;
mod source_tests;
mod utils;
