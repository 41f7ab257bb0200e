//! PBT テスト共通ユーティリティ

use proptest::prelude::*;

// ========================================
// トークン / パラメータ生成 (RFC 7230)
// ========================================

/// 小文字のトークン (ワイルドカードを除く)
pub fn lowercase_token() -> impl Strategy<Value = String> {
    "[a-z0-9!#$%&'+.^_`|~-]{1,8}".prop_map(|s| s)
}

/// 大文字を含むトークン
pub fn mixed_case_token() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9!#$%&'+.^_`|~-]{1,8}".prop_map(|s| s)
}

/// quoted-string にしないと表せない小文字の値 (空文字列を含む)
pub fn quoted_value() -> impl Strategy<Value = String> {
    r#"[a-z0-9 \t"\\;,=/()]{0,12}"#.prop_map(|s| s)
}

/// パラメータ値 (トークンまたは quoted-string)
pub fn parameter_value() -> impl Strategy<Value = String> {
    prop_oneof![lowercase_token(), quoted_value()]
}

/// キーが一意なパラメータ列
pub fn unique_parameters(max: usize) -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::btree_map(lowercase_token(), parameter_value(), 0..=max)
        .prop_map(|map| map.into_iter().collect())
}

// ========================================
// q 値生成 (RFC 7231 Section 5.3.1)
// ========================================

/// 0-1000 の値を最短の q 値表記にする
pub fn qvalue_string(value: u16) -> String {
    if value >= 1000 {
        return "1".to_string();
    }
    if value == 0 {
        return "0".to_string();
    }

    let mut frac = format!("{:03}", value);
    while frac.ends_with('0') {
        frac.pop();
    }
    format!("0.{}", frac)
}

// ========================================
// 言語タグ生成
// ========================================

/// 実在する主言語
pub fn known_language() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("en"),
        Just("ja"),
        Just("de"),
        Just("lv"),
        Just("sl"),
        Just("zh"),
        Just("es"),
        Just("lav"),
        Just("haw"),
    ]
}

/// 実在する文字体系
pub fn known_script() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("Latn"), Just("Cyrl"), Just("Hant"), Just("Jpan")]
}

/// 実在する地域
pub fn known_region() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("US"),
        Just("JP"),
        Just("LV"),
        Just("CH"),
        Just("419"),
        Just("428"),
    ]
}

/// バリアント (5-8 文字の英数字)
pub fn variant() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{5,8}".prop_map(|s| s)
}
