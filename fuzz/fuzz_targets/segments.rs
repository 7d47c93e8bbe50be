#![no_main]
use libfuzzer_sys::{arbitrary::Arbitrary, fuzz_target};
use uri_components::segments::{Anchor, Position, Segments};

#[derive(Arbitrary, Debug)]
enum Op<'a> {
    Append(Vec<&'a str>, Option<(&'a str, u8)>),
    Prepend(Vec<&'a str>, Option<(&'a str, u8)>),
    Remove(Vec<&'a str>),
    Clear,
}

fn insert(segs: &mut Segments, values: Vec<&str>, position: Position, anchor: Option<(&str, u8)>) {
    let before = segs.clone();
    let n = values.len();
    let anchor = anchor.map(|(value, nth)| Anchor::new(value).nth(nth.into()));
    match segs.set(values, position, anchor) {
        Ok(()) => assert_eq!(segs.len(), before.len() + n),
        Err(_) => assert_eq!(*segs, before),
    }
}

fuzz_target!(|input: (&str, Vec<Op<'_>>)| {
    let (data, ops) = input;

    let segs = Segments::new(Some(data), '/');
    let joined = segs.to_string();
    assert_eq!(joined, data.strip_prefix('/').unwrap_or(data));

    let mut segs = segs;
    for op in ops {
        match op {
            Op::Append(values, anchor) => insert(&mut segs, values, Position::Append, anchor),
            Op::Prepend(values, anchor) => insert(&mut segs, values, Position::Prepend, anchor),
            Op::Remove(values) => {
                let len = segs.len();
                segs.remove(values.clone());
                assert!(values.iter().all(|v| !segs.has(v)));
                assert!(segs.len() <= len);
            }
            Op::Clear => {
                segs.clear();
                assert!(segs.is_empty());
            }
        }
    }
});
