#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shiguredo_contenttype::{HeaderLookup, MediaType, headers};

#[derive(Arbitrary, Debug)]
struct FuzzHeaders {
    headers: Vec<(String, String)>,
}

fuzz_target!(|input: FuzzHeaders| {
    let content_type = headers::media_type(&input.headers);
    if input.headers.first_header(headers::CONTENT_TYPE).is_none() {
        assert_eq!(content_type, Ok(MediaType::default()));
    }

    let available = [
        MediaType::new("application", "json"),
        MediaType::new("text", "html"),
    ];
    if let Ok((selected, _)) = headers::acceptable_media_type(&input.headers, &available) {
        assert!(available.contains(&selected));
    }

    let _ = headers::language(&input.headers);
});
