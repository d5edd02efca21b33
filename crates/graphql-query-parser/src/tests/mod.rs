mod graphql_parser_property_tests;
mod lexer_tests;
mod source_position_tests;
mod utils;
