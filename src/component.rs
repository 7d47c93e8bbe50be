//! URI components.
//!
//! Every component holds an optional value: an *absent* component is
//! omitted from a URI together with its delimiter, while an *empty* one
//! still renders its delimiter (a bare `"#"`, for example).
//!
//! Components are immutable. The `with_*` methods and the segment
//! operations of [`Path`] and [`Host`] return new values.
//!
//! [`Host`]: crate::Host

use crate::{
    pct_enc::{self, table, Encoding, Rule},
    segments::{Anchor, Input, Segments},
    Error,
};
use alloc::{
    borrow::Cow,
    string::{String, ToString},
};
use core::{hash, marker::PhantomData};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A trait used by [`Component`] to specify how its value is transcoded
/// and delimited.
pub trait Kind: 'static {
    /// The rule used for percent-encoding and decoding.
    const RULE: Rule;
    /// The delimiter placed before a present value in a URI.
    const PREFIX: &'static str;
}

/// Kinds of text components.
pub mod kind {
    #![allow(missing_debug_implementations)]

    use super::Kind;
    use crate::pct_enc::Rule;

    /// The user name in the userinfo subcomponent.
    pub struct User(());

    impl Kind for User {
        const RULE: Rule = Rule::User;
        const PREFIX: &'static str = "";
    }

    /// The password in the userinfo subcomponent.
    pub struct Pass(());

    impl Kind for Pass {
        const RULE: Rule = Rule::Pass;
        const PREFIX: &'static str = ":";
    }

    /// The path component.
    pub struct Path(());

    impl Kind for Path {
        const RULE: Rule = Rule::Path;
        const PREFIX: &'static str = "";
    }

    /// The query component.
    pub struct Query(());

    impl Kind for Query {
        const RULE: Rule = Rule::QueryFragment;
        const PREFIX: &'static str = "?";
    }

    /// The fragment component.
    pub struct Fragment(());

    impl Kind for Fragment {
        const RULE: Rule = Rule::QueryFragment;
        const PREFIX: &'static str = "#";
    }
}

/// A [user] component.
///
/// [user]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.1
pub type User = Component<kind::User>;

/// A [password] component.
///
/// [password]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.1
pub type Pass = Component<kind::Pass>;

/// A [path] component.
///
/// [path]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.3
pub type Path = Component<kind::Path>;

/// A [query] component.
///
/// [query]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.4
pub type Query = Component<kind::Query>;

/// A [fragment] component.
///
/// [fragment]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.5
pub type Fragment = Component<kind::Fragment>;

/// A text component whose value is percent-encoded on output.
///
/// The value is stored in a canonical form: percent-encoded octets are
/// decoded on construction, except for those that [`Kind::RULE`]
/// [preserves]. Two components are equal if their canonical values are.
///
/// [preserves]: Rule::preserved
///
/// # Examples
///
/// ```
/// use uri_components::{component::Fragment, pct_enc::Encoding};
///
/// let frag = Fragment::new(Some("doc 3"));
/// assert_eq!(frag.content(Encoding::Rfc3986).as_deref(), Some("doc%203"));
/// assert_eq!(frag.content(Encoding::NoEncoding).as_deref(), Some("doc 3"));
/// assert_eq!(frag.uri_component(), "#doc%203");
///
/// assert_eq!(Fragment::new(Some("doc%203")), frag);
/// assert_eq!(Fragment::new(Some("")).uri_component(), "#");
/// assert_eq!(Fragment::new(None).uri_component(), "");
/// ```
pub struct Component<K: Kind> {
    value: Option<String>,
    _marker: PhantomData<K>,
}

impl<K: Kind> Component<K> {
    fn from_canonical(value: Option<String>) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    fn canonicalize(content: &str) -> Cow<'_, str> {
        pct_enc::decode(content, K::RULE.preserved())
    }

    /// Creates a component from an optional raw value.
    #[must_use]
    pub fn new(content: Option<&str>) -> Self {
        Self::from_canonical(content.map(|s| Self::canonicalize(s).into_owned()))
    }

    /// Creates an absent component.
    #[must_use]
    pub fn absent() -> Self {
        Self::from_canonical(None)
    }

    /// Returns the stored canonical value.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Checks whether the component is absent.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    /// Returns the value rendered in the given mode, or `None` if absent.
    #[must_use]
    pub fn content(&self, encoding: Encoding) -> Option<Cow<'_, str>> {
        pct_enc::transcode(self.raw(), K::RULE, encoding)
    }

    /// Returns a component with the given raw value.
    ///
    /// Returns `self` untouched if the canonical value does not change.
    #[must_use]
    pub fn with_content(self, content: Option<&str>) -> Self {
        let canonical = content.map(Self::canonicalize);
        if canonical.as_deref() == self.raw() {
            return self;
        }
        Self::from_canonical(canonical.map(Cow::into_owned))
    }

    /// Returns the [RFC 3986](Encoding::Rfc3986) content preceded by its
    /// delimiter, or an empty string if absent.
    #[must_use]
    pub fn uri_component(&self) -> String {
        self.uri_component_with(Encoding::Rfc3986)
    }

    /// Returns the content rendered in the given mode preceded by its
    /// delimiter, or an empty string if absent.
    #[must_use]
    pub fn uri_component_with(&self, encoding: Encoding) -> String {
        match self.content(encoding) {
            Some(content) => [K::PREFIX, &*content].concat(),
            None => String::new(),
        }
    }
}

impl<K: Kind> Clone for Component<K> {
    fn clone(&self) -> Self {
        Self::from_canonical(self.value.clone())
    }
}

impl<K: Kind> Default for Component<K> {
    /// Creates an absent component.
    fn default() -> Self {
        Self::absent()
    }
}

impl<K: Kind> PartialEq for Component<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: Kind> Eq for Component<K> {}

impl<K: Kind> hash::Hash for Component<K> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

#[cfg(feature = "serde")]
impl<K: Kind> Serialize for Component<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, K: Kind> Deserialize<'de> for Component<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(Self::new(value.as_deref()))
    }
}

/// Extension methods for the [path] component.
///
/// The segments of a path are separated by `'/'`. A path that starts
/// with `'/'` keeps its leading `'/'` when segments are edited.
///
/// [path]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.3
///
/// # Examples
///
/// ```
/// use uri_components::{component::Path, segments::Anchor};
///
/// let path = Path::new(Some("/test/query.php"));
/// assert_eq!(path.segments().as_slice(), ["test", "query.php"]);
///
/// let path = path.append("sullivent", Some(Anchor::new("test")))?;
/// assert_eq!(path.raw(), Some("/test/sullivent/query.php"));
///
/// let path = path.prepend(["master", "rev iew"], None)?;
/// assert_eq!(path.uri_component(), "/master/rev%20iew/test/sullivent/query.php");
/// # Ok::<_, uri_components::Error>(())
/// ```
impl Component<kind::Path> {
    /// Checks whether the path is absolute, i.e., starting with `'/'`.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.raw().is_some_and(|s| s.starts_with('/'))
    }

    /// Returns the segments of the path.
    ///
    /// The empty string before a leading `'/'` is not a segment.
    #[must_use]
    pub fn segments(&self) -> Segments {
        Segments::new(self.raw(), '/')
    }

    /// Checks whether a segment equals the given value.
    ///
    /// The value is compared in its canonical form, with any `'/'`
    /// in it percent-encoded.
    #[must_use]
    pub fn has_segment(&self, value: &str) -> bool {
        self.segments().has(&Self::canonical_segment(value))
    }

    /// Returns the segment at the given index.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<String> {
        self.segments().get(index).map(ToString::to_string)
    }

    /// Returns a path with segments inserted after an anchor, or at the end.
    ///
    /// A `'/'` inside an item of a list input is percent-encoded, so the
    /// item stays one segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OccurrenceOutOfRange`] as [`Segments::append`] does.
    pub fn append(
        &self,
        values: impl Into<Input>,
        anchor: Option<Anchor<'_>>,
    ) -> Result<Self, Error> {
        self.edit_at(anchor, |segs, anchor| segs.append(values, anchor))
    }

    /// Returns a path with segments inserted before an anchor, or at the front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OccurrenceOutOfRange`] as [`Segments::prepend`] does.
    pub fn prepend(
        &self,
        values: impl Into<Input>,
        anchor: Option<Anchor<'_>>,
    ) -> Result<Self, Error> {
        self.edit_at(anchor, |segs, anchor| segs.prepend(values, anchor))
    }

    /// Returns a path without the segments equal to any of the given values.
    #[must_use]
    pub fn remove(&self, values: impl Into<Input>) -> Self {
        let values: Input = values
            .into()
            .into_list('/')
            .iter()
            .map(|v| Self::canonical_segment(v).into_owned())
            .collect();
        let mut segs = self.segments();
        segs.remove(values);
        self.with_segments(&segs)
    }

    /// Returns a path with no segments, keeping a leading `'/'`.
    #[must_use]
    pub fn clear(&self) -> Self {
        self.with_segments(&Segments::new(None, '/'))
    }

    fn canonical_segment(value: &str) -> Cow<'_, str> {
        if value.contains('/') {
            Cow::Owned(Self::canonicalize(&value.replace('/', "%2F")).into_owned())
        } else {
            Self::canonicalize(value)
        }
    }

    fn edit_at(
        &self,
        anchor: Option<Anchor<'_>>,
        edit: impl FnOnce(&mut Segments, Option<Anchor<'_>>) -> Result<(), Error>,
    ) -> Result<Self, Error> {
        let value = anchor.map(|a| Self::canonical_segment(a.value()));
        let anchor = anchor
            .zip(value.as_deref())
            .map(|(a, v)| Anchor::new(v).nth(a.occurrence()));

        let mut segs = self.segments();
        edit(&mut segs, anchor)?;
        Ok(self.with_segments(&segs))
    }

    /// Joins the segments back, keeping the rootedness of `self`.
    fn with_segments(&self, segs: &Segments) -> Self {
        if self.is_absent() && segs.is_empty() {
            return self.clone();
        }

        let mut buf = String::new();
        if self.is_absolute() {
            buf.push('/');
        }
        buf.push_str(&segs.join_escaped());
        self.clone().with_content(Some(&buf))
    }
}

/// A [scheme] component.
///
/// The scheme is stored in lowercase and renders without encoding.
///
/// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
///
/// # Examples
///
/// ```
/// use uri_components::{component::Scheme, Error};
///
/// let scheme = Scheme::new(Some("HTTPS"))?;
/// assert_eq!(scheme.as_str(), Some("https"));
/// assert_eq!(scheme.uri_component(), "https:");
///
/// assert_eq!(Scheme::new(Some("1ab")), Err(Error::InvalidScheme { index: 0 }));
/// assert_eq!(Scheme::new(Some("ht tp")), Err(Error::InvalidScheme { index: 2 }));
/// # Ok::<_, Error>(())
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Scheme {
    value: Option<String>,
}

impl Scheme {
    /// Creates a scheme from an optional value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScheme`] if the value does not match
    /// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
    pub fn new(scheme: Option<&str>) -> Result<Self, Error> {
        let Some(scheme) = scheme else {
            return Ok(Self::default());
        };
        let bytes = scheme.as_bytes();
        match bytes.first() {
            Some(x) if x.is_ascii_alphabetic() => {}
            _ => return Err(Error::InvalidScheme { index: 0 }),
        }
        if let Some(i) = bytes.iter().position(|&x| !table::SCHEME.allows_ascii(x)) {
            return Err(Error::InvalidScheme { index: i });
        }
        Ok(Self {
            value: Some(scheme.to_ascii_lowercase()),
        })
    }

    /// Returns the scheme, or `None` if absent.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Checks whether the component is absent.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    /// Returns the scheme; it is the same in every mode.
    #[must_use]
    pub fn content(&self, _encoding: Encoding) -> Option<Cow<'_, str>> {
        self.as_str().map(Cow::Borrowed)
    }

    /// Returns a scheme with the given value.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn with_content(self, scheme: Option<&str>) -> Result<Self, Error> {
        let new = Self::new(scheme)?;
        Ok(if new == self { self } else { new })
    }

    /// Returns the scheme followed by `':'`, or an empty string if absent.
    #[must_use]
    pub fn uri_component(&self) -> String {
        match self.as_str() {
            Some(scheme) => [scheme, ":"].concat(),
            None => String::new(),
        }
    }
}

/// A [port] component.
///
/// [port]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.3
///
/// # Examples
///
/// ```
/// use uri_components::{component::Port, Error};
///
/// let port = Port::new(Some("443"))?;
/// assert_eq!(port.as_u16(), Some(443));
/// assert_eq!(port.uri_component(), ":443");
///
/// assert!(Port::new(Some(""))?.is_absent());
/// assert_eq!(Port::new(Some("+80")), Err(Error::InvalidPort));
/// assert_eq!(Port::new(Some("65536")), Err(Error::InvalidPort));
/// # Ok::<_, Error>(())
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Port {
    value: Option<u16>,
}

impl Port {
    /// Creates a port from an optional decimal string.
    ///
    /// An empty string is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPort`] if the string contains anything other
    /// than ASCII digits or does not fit in a `u16`.
    pub fn new(port: Option<&str>) -> Result<Self, Error> {
        match port {
            None | Some("") => Ok(Self::default()),
            Some(s) if s.bytes().all(|x| x.is_ascii_digit()) => s
                .parse()
                .map(|port| Self::from_u16(Some(port)))
                .map_err(|_| Error::InvalidPort),
            Some(_) => Err(Error::InvalidPort),
        }
    }

    /// Creates a port from an optional number.
    #[must_use]
    pub const fn from_u16(port: Option<u16>) -> Self {
        Self { value: port }
    }

    /// Returns the port number, or `None` if absent.
    #[must_use]
    pub const fn as_u16(&self) -> Option<u16> {
        self.value
    }

    /// Checks whether the component is absent.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    /// Returns the port in decimal; it is the same in every mode.
    #[must_use]
    pub fn content(&self, _encoding: Encoding) -> Option<Cow<'static, str>> {
        self.value.map(|port| Cow::Owned(port.to_string()))
    }

    /// Returns a port with the given value.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn with_content(self, port: Option<&str>) -> Result<Self, Error> {
        Self::new(port)
    }

    /// Returns the port preceded by `':'`, or an empty string if absent.
    #[must_use]
    pub fn uri_component(&self) -> String {
        match self.value {
            Some(port) => alloc::format!(":{port}"),
            None => String::new(),
        }
    }
}

#[cfg(feature = "serde")]
macro_rules! impl_serde_validated {
    ($($ty:ty => $get:ident),* $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    self.$get().serialize(serializer)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let value = Option::<String>::deserialize(deserializer)?;
                    Self::new(value.as_deref()).map_err(de::Error::custom)
                }
            }
        )*
    };
}

#[cfg(feature = "serde")]
impl_serde_validated! {
    Scheme => as_str,
    crate::Host => as_str,
}

#[cfg(feature = "serde")]
impl Serialize for Port {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Port {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<u16>::deserialize(deserializer).map(Self::from_u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_content_keeps_equal_value() {
        let user = User::new(Some("a%20b"));
        assert_eq!(user.raw(), Some("a b"));
        let same = user.clone().with_content(Some("a b"));
        assert_eq!(same, user);

        let other = user.with_content(None);
        assert!(other.is_absent());
    }

    #[test]
    fn edit_absent_path() {
        let path = Path::absent();
        assert!(path.remove("a").is_absent());
        assert!(path.clear().is_absent());
        assert_eq!(path.append("a", None).unwrap().raw(), Some("a"));
    }
}
