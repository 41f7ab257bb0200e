#![no_main]

use libfuzzer_sys::fuzz_target;
use shiguredo_contenttype::{MediaType, Weight};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(mt) = MediaType::parse(s) {
            let _ = mt.mime();
            let _ = mt.is_wildcard();
            for (name, _) in mt.parameters().iter() {
                assert!(mt.parameter(name).is_some());
            }

            // Display 出力は同じ MediaType に戻る
            let displayed = mt.to_string();
            assert_eq!(MediaType::parse(&displayed).as_ref(), Ok(&mt));
            assert!(mt.matches(&mt));
        } else {
            assert!(MediaType::parse_or_empty(s).is_empty());
        }

        if let Ok(weight) = Weight::parse(s) {
            assert!(weight <= Weight::MAX);
            assert_eq!(Weight::parse(&weight.to_string()), Ok(weight));
        }
    }
});
