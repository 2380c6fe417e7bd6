use leptjson::{parse, stringify};

#[macro_use]
extern crate afl;

fn main() {
    fuzz!(|data: &[u8]| {
        let Ok(text) = std::str::from_utf8(data) else {
            return;
        };

        // The parser must never panic on arbitrary input, and every value
        // it successfully produces must round-trip through the stringifier.
        if let Ok(v) = parse(text) {
            let out = stringify(&v);
            let _ = parse(&out).expect("a value this crate produced must re-parse");
        }
    });
}
