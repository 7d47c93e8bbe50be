use uri_components::{pct_enc::Encoding, segments::Anchor, Error, Host, Label};

fn host() -> Host {
    Host::new(Some("secure.example.com")).unwrap()
}

#[test]
fn labels() {
    let host = host();
    assert!(host.labels().eq(["secure", "example", "com"]));
    assert_eq!(host.label(1), Label::new("example"));
    assert_eq!(host.label(3), None);
    assert!(host.has_label("com"));
    assert!(!host.has_label("org"));
    assert_eq!(host.segments().as_slice(), ["secure", "example", "com"]);
    assert_eq!(host.labels().next_back().map(Label::as_str), Some("com"));
}

#[test]
fn edit_labels() {
    let host = host();
    assert_eq!(
        host.prepend("master", None).unwrap().as_str(),
        Some("master.secure.example.com")
    );
    assert_eq!(host.remove("secure").unwrap().as_str(), Some("example.com"));
    assert_eq!(host.remove("toto").unwrap(), host);
    assert_eq!(
        host.append("shop", Some(Anchor::new("secure")))
            .unwrap()
            .as_str(),
        Some("secure.shop.example.com")
    );
    assert_eq!(
        host.append("www.shop", Some(Anchor::new("secure")))
            .unwrap()
            .as_str(),
        Some("secure.www.shop.example.com")
    );
    assert_eq!(host.as_str(), Some("secure.example.com"));
}

#[test]
fn list_items_are_single_labels() {
    let host = host();
    assert_eq!(
        host.append(["a.b"], None),
        Err(Error::InvalidHostLabel { index: 3 })
    );
    assert_eq!(
        host.prepend(["www", "a.b"], None),
        Err(Error::InvalidHostLabel { index: 1 })
    );
    assert_eq!(
        host.append(["www", "shop"], Some(Anchor::new("secure")))
            .unwrap()
            .as_str(),
        Some("secure.www.shop.example.com")
    );
}

#[test]
fn values_ignore_case() {
    let host = Host::new(Some("www.example.com")).unwrap();
    assert!(host.has_label("WWW"));
    assert!(host.has_label("Example"));
    assert!(!host.has_label("EXAMPLES"));
    assert_eq!(
        host.append("shop", Some(Anchor::new("WWW"))).unwrap().as_str(),
        Some("www.shop.example.com")
    );
    assert_eq!(
        host.prepend("api", Some(Anchor::new("COM"))).unwrap().as_str(),
        Some("www.example.api.com")
    );
    assert_eq!(host.remove("WWW").unwrap().as_str(), Some("example.com"));
    assert_eq!(host.remove(["Example", "Com"]).unwrap().as_str(), Some("www"));
}

#[test]
fn normalization() {
    let host = Host::new(Some(".shop.fremium.com")).unwrap();
    assert_eq!(host.as_str(), Some("shop.fremium.com"));

    let host = Host::new(Some(&["shop", "premium", "org"].join("."))).unwrap();
    assert_eq!(host.uri_component(), "shop.premium.org");

    let host = Host::new(Some("WWW.Example.COM")).unwrap();
    assert_eq!(host, Host::new(Some("www.example.com")).unwrap());
    assert_eq!(host.content(Encoding::LegacyForm).as_deref(), Some("www.example.com"));
}

#[test]
fn absent_and_empty() {
    let absent = Host::new(None).unwrap();
    assert!(absent.is_absent());
    assert_eq!(absent.uri_component(), "");
    assert_eq!(absent.labels().count(), 0);
    assert!(absent.remove("a").unwrap().is_absent());
    assert_eq!(absent.append("a", None).unwrap().as_str(), Some("a"));

    let empty = Host::new(Some("")).unwrap();
    assert!(!empty.is_absent());
    assert!(empty.is_empty());
    assert_ne!(empty, absent);
}

#[test]
fn bad_characters() {
    assert_eq!(
        host().with_content(Some("_bad.host.com")),
        Err(Error::InvalidHostLabel { index: 0 })
    );
    assert_eq!(
        Host::new(Some("a.-b.c")),
        Err(Error::InvalidHostLabel { index: 1 })
    );
    assert_eq!(
        Host::new(Some("a..c")),
        Err(Error::InvalidHostLabel { index: 1 })
    );
    assert_eq!(
        host().append("b_d", None),
        Err(Error::InvalidHostLabel { index: 3 })
    );
}

#[test]
fn bad_length() {
    let label = "banana".repeat(23);
    assert_eq!(
        host().append(label.as_str(), Some(Anchor::new("secure"))),
        Err(Error::LabelTooLong)
    );
}

#[test]
fn too_many_labels() {
    let labels = vec!["a"; 128];
    assert_eq!(Host::new(Some(&labels.join("."))), Err(Error::TooManyLabels));
    assert_eq!(
        Host::new(Some(&labels[1..].join("."))).unwrap().labels().count(),
        127
    );
}

#[test]
fn host_too_long() {
    let labels = vec!["banana-slip"; 23];
    assert_eq!(Host::new(Some(&labels.join("."))), Err(Error::HostTooLong));
}

#[test]
fn label_views() {
    const WWW: &Label = Label::new_or_panic("www");
    assert_eq!(WWW.as_str(), "www");
    assert_eq!(WWW.to_string(), "www");
    assert_eq!(format!("{:?}", WWW), "\"www\"");

    assert!(Label::new("a-b").is_some());
    assert!(Label::new("-ab").is_none());
    assert!(Label::new("ab-").is_none());
    assert!(Label::new(&"a".repeat(63)).is_some());
    assert!(Label::new(&"a".repeat(64)).is_none());
    assert!(Label::new("é").is_none());
}
