#![no_main]

use graphql_lang::Source;
use graphql_lang::TokenKind;
use graphql_lang::next_token;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let source = Source::new(s);
    let mut position = 0;
    while let Ok(token) = next_token(&source, position) {
        if token.kind == TokenKind::Eof {
            break;
        }
        position = token.end;
    }
});
