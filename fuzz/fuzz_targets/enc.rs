#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_components::pct_enc::{decode, encode, encode_with, table::UNRESERVED, Encoding, Rule};
use uri_components_fuzz::{EncodingWrapper, RuleWrapper};

fuzz_target!(|input: (&str, RuleWrapper, EncodingWrapper)| {
    let (data, rule, encoding) = input;
    let rule = Rule::from(rule);
    let encoding = Encoding::from(encoding);

    let encoded = encode(data, rule.allowed());
    assert!(rule.allowed().validate(encoded.as_bytes()));
    assert_eq!(encode(&encoded, rule.allowed()), encoded);

    let canonical = encode(&decode(data, rule.preserved()), rule.allowed()).into_owned();
    let again = encode(&decode(&canonical, rule.preserved()), rule.allowed());
    assert_eq!(again, canonical);

    let rendered = encode_with(data, rule, encoding);
    // Unreserved characters are kept, except '~' in the legacy form.
    for (x, y) in data.bytes().zip(rendered.bytes()) {
        if !UNRESERVED.allows_ascii(x) || x == b'~' {
            break;
        }
        assert_eq!(x, y);
    }
});
