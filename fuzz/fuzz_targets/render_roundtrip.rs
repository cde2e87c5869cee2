#![no_main]

// Renders arbitrary bytes and checks the header parses back to the same bytes.

use libfuzzer_sys::{arbitrary, fuzz_target};
use png_to_embed::{parse_header, render_header, rendered_len};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub use_underscore_name: bool,
    pub data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let identifier = if input.use_underscore_name {
        "_g_ImageData"
    } else {
        "icon"
    };

    let text = render_header(identifier, &input.data);
    assert_eq!(text.len(), rendered_len(identifier.len(), input.data.len()));

    let parsed = parse_header(&text).expect("Rendered header should parse");
    assert_eq!(parsed.identifier, identifier);
    assert_eq!(parsed.bytes, input.data, "Embedded bytes don't match input");
});
