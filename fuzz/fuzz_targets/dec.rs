#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_components::pct_enc::{decode, Rule};
use uri_components_fuzz::RuleWrapper;

fuzz_target!(|input: (&str, RuleWrapper)| {
    let (data, rule) = input;
    let preserved = Rule::from(rule).preserved();
    let once = decode(data, preserved);
    assert_eq!(decode(&once, preserved), once);
});
