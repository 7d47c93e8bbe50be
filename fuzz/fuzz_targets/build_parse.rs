#![no_main]
use libfuzzer_sys::{arbitrary::Arbitrary, fuzz_target};
use uri_components::Url;

#[derive(Arbitrary, Clone, Copy, Debug)]
struct UrlComponents<'a> {
    scheme: Option<&'a str>,
    user: Option<&'a str>,
    pass: Option<&'a str>,
    host: Option<&'a str>,
    port: Option<u16>,
    path: Option<&'a str>,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

fuzz_target!(|c: UrlComponents<'_>| {
    if c.pass.is_some() && c.user.is_none() {
        return;
    }
    let missing_host = c.host.map_or(true, str::is_empty);
    if missing_host && (c.user.is_some() || c.port.is_some()) {
        return;
    }

    let port = c.port.map(|p| p.to_string());
    let Ok(u1) = Url::new()
        .with_scheme(c.scheme)
        .and_then(|u| u.with_host(c.host))
        .and_then(|u| u.with_port(port.as_deref()))
    else {
        return;
    };
    let u1 = u1
        .with_user(c.user)
        .with_pass(c.pass)
        .with_path(c.path)
        .with_query(c.query)
        .with_fragment(c.fragment);

    let s1 = u1.to_string();
    let u2 = Url::parse(&s1).unwrap();

    assert_eq!(u1.scheme(), u2.scheme());
    assert_eq!(u1.host(), u2.host());
    assert_eq!(u1.port(), u2.port());
    assert_eq!(u1.user().is_absent(), u2.user().is_absent());
    assert_eq!(u1.pass().is_absent(), u2.pass().is_absent());
    assert_eq!(u1.query().is_absent(), u2.query().is_absent());
    assert_eq!(u1.fragment().is_absent(), u2.fragment().is_absent());
    assert_eq!(s1, u2.to_string());
});
