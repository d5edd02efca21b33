#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(doc) = graphql_query_parser::parse(s) {
        // Printed output must always be accepted again.
        let printed = doc.to_source();
        assert_eq!(graphql_query_parser::parse(&printed).ok(), Some(doc));
    }
});
