#![no_main]

use graphql_query_parser::Lexer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    for _ in Lexer::new(s) {}
});
