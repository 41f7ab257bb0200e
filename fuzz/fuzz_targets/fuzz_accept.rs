#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shiguredo_contenttype::{MediaType, acceptable_media_type};

#[derive(Arbitrary, Debug)]
struct FuzzNegotiation {
    accept: String,
    available: Vec<String>,
}

fuzz_target!(|input: FuzzNegotiation| {
    let available: Vec<MediaType> = input
        .available
        .iter()
        .filter_map(|s| MediaType::parse(s).ok())
        .collect();

    let result = acceptable_media_type(&input.accept, &available);

    // 同じ入力なら同じ結果
    assert_eq!(acceptable_media_type(&input.accept, &available), result);

    if let Ok((selected, _)) = result {
        assert!(available.contains(&selected));
    }
});
