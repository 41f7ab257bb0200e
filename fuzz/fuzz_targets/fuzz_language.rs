#![no_main]

use libfuzzer_sys::fuzz_target;
use shiguredo_contenttype::Language;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(language) = Language::parse(s) {
            let displayed = language.to_string();
            assert_eq!(displayed, displayed.to_ascii_lowercase());
            assert_eq!(Language::parse(&displayed).as_ref(), Ok(&language));
        }
    }
});
