use crate::{
    pct_enc::{table, Encoding},
    segments::{Anchor, Input, Segments},
    Error,
};
use alloc::{borrow::Cow, string::String};
use ref_cast::{ref_cast_custom, RefCastCustom};

const MAX_HOST_LEN: usize = 255;
const MAX_LABEL_LEN: usize = 63;
const MAX_LABELS: usize = 127;

/// A label of a [`Host`].
///
/// A label consists of 1 to 63 ASCII letters, digits and hyphens,
/// and neither begins nor ends with a hyphen.
///
/// # Examples
///
/// ```
/// use uri_components::Label;
///
/// const LABEL_WWW: &Label = Label::new_or_panic("www");
///
/// assert_eq!(Label::new("www"), Some(LABEL_WWW));
/// assert!(Label::new("-www").is_none());
/// assert!(Label::new("_bad").is_none());
/// assert!(Label::new("").is_none());
/// ```
#[derive(RefCastCustom, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Label {
    inner: str,
}

const fn is_valid_label(s: &[u8]) -> bool {
    match s {
        [] | [b'-', ..] | [.., b'-'] => false,
        _ => s.len() <= MAX_LABEL_LEN && table::LABEL.validate(s),
    }
}

impl Label {
    #[ref_cast_custom]
    #[inline]
    pub(crate) const fn new_validated(label: &str) -> &Label;

    /// Converts a string slice to `&Label`, returning `None` if the conversion fails.
    #[inline]
    #[must_use]
    pub const fn new(s: &str) -> Option<&Label> {
        if is_valid_label(s.as_bytes()) {
            Some(Label::new_validated(s))
        } else {
            None
        }
    }

    /// Converts a string slice to `&Label`.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid label. For a non-panicking
    /// variant, use [`new`](Self::new).
    #[inline]
    #[must_use]
    pub const fn new_or_panic(s: &str) -> &Label {
        match Self::new(s) {
            Some(label) => label,
            None => panic!("invalid host label"),
        }
    }

    /// Returns the label as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool {
        &self.inner == other
    }
}

impl PartialEq<Label> for str {
    fn eq(&self, other: &Label) -> bool {
        self == &other.inner
    }
}

/// A [host] component made of labels separated by `'.'`.
///
/// The host is stored in lowercase, without a leading `'.'`. An empty host,
/// as in `file:///etc/hosts`, has no labels. IP literals in brackets are
/// not supported.
///
/// [host]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
///
/// # Examples
///
/// ```
/// use uri_components::{segments::Anchor, Host};
///
/// let host = Host::new(Some("secure.example.com"))?;
/// assert!(host.labels().eq(["secure", "example", "com"]));
///
/// let host = host.append("shop", Some(Anchor::new("secure")))?;
/// assert_eq!(host.as_str(), Some("secure.shop.example.com"));
///
/// let host = host.remove("secure")?.prepend("master", None)?;
/// assert_eq!(host.uri_component(), "master.shop.example.com");
///
/// assert_eq!(Host::new(Some(".shop.fremium.com"))?.as_str(), Some("shop.fremium.com"));
/// # Ok::<_, uri_components::Error>(())
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Host {
    value: Option<String>,
}

impl Host {
    /// Creates a host from an optional value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHostLabel`] if a label is not valid,
    /// [`Error::LabelTooLong`], [`Error::HostTooLong`] or
    /// [`Error::TooManyLabels`] if a limit is exceeded.
    pub fn new(host: Option<&str>) -> Result<Self, Error> {
        let Some(host) = host else {
            return Ok(Self::default());
        };
        let host = host.strip_prefix('.').unwrap_or(host).to_ascii_lowercase();
        validate(&host)?;
        Ok(Self { value: Some(host) })
    }

    /// Returns the host, or `None` if absent.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Checks whether the component is absent.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    /// Checks whether the host is absent or empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_str().map_or(true, str::is_empty)
    }

    /// Returns the host; it is the same in every mode since a host
    /// only contains ASCII letters, digits, hyphens and dots.
    #[must_use]
    pub fn content(&self, _encoding: Encoding) -> Option<Cow<'_, str>> {
        self.as_str().map(Cow::Borrowed)
    }

    /// Returns a host with the given value.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn with_content(self, host: Option<&str>) -> Result<Self, Error> {
        let new = Self::new(host)?;
        Ok(if new == self { self } else { new })
    }

    /// Returns the host, or an empty string if absent.
    #[must_use]
    pub fn uri_component(&self) -> String {
        self.as_str().map(String::from).unwrap_or_default()
    }

    /// Returns an iterator over the labels of the host.
    pub fn labels(&self) -> impl DoubleEndedIterator<Item = &Label> {
        self.as_str()
            .filter(|s| !s.is_empty())
            .into_iter()
            .flat_map(|s| s.split('.'))
            .map(Label::new_validated)
    }

    /// Returns the labels of the host as a segment list.
    #[must_use]
    pub fn segments(&self) -> Segments {
        Segments::new(self.as_str(), '.')
    }

    /// Checks whether a label equals the given value, ignoring ASCII case.
    #[must_use]
    pub fn has_label(&self, value: &str) -> bool {
        self.labels().any(|label| label.as_str().eq_ignore_ascii_case(value))
    }

    /// Returns the label at the given index.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<&Label> {
        self.labels().nth(index)
    }

    /// Returns a host with labels inserted after an anchor, or at the end.
    ///
    /// The anchor value is matched ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OccurrenceOutOfRange`] as [`Segments::append`] does,
    /// or any error of [`new`](Self::new) if the result is not a valid host.
    /// An item of a list input that contains `'.'` is not a valid label.
    pub fn append(
        &self,
        values: impl Into<Input>,
        anchor: Option<Anchor<'_>>,
    ) -> Result<Self, Error> {
        self.edit_at(anchor, |segs, anchor| segs.append(values, anchor))
    }

    /// Returns a host with labels inserted before an anchor, or at the front.
    ///
    /// # Errors
    ///
    /// See [`append`](Self::append).
    pub fn prepend(
        &self,
        values: impl Into<Input>,
        anchor: Option<Anchor<'_>>,
    ) -> Result<Self, Error> {
        self.edit_at(anchor, |segs, anchor| segs.prepend(values, anchor))
    }

    /// Returns a host without the labels equal to any of the given values,
    /// ignoring ASCII case.
    ///
    /// Removing every label leaves an empty host, not an absent one.
    ///
    /// # Errors
    ///
    /// Never fails for now, since removing labels from a valid host
    /// leaves a valid host.
    pub fn remove(&self, values: impl Into<Input>) -> Result<Self, Error> {
        let values: Input = values
            .into()
            .into_list('.')
            .iter()
            .map(|v| v.to_ascii_lowercase())
            .collect();
        let mut segs = self.segments();
        segs.remove(values);
        self.with_segments(&segs)
    }

    fn edit_at(
        &self,
        anchor: Option<Anchor<'_>>,
        edit: impl FnOnce(&mut Segments, Option<Anchor<'_>>) -> Result<(), Error>,
    ) -> Result<Self, Error> {
        let value = anchor.map(|a| a.value().to_ascii_lowercase());
        let anchor = anchor
            .zip(value.as_deref())
            .map(|(a, v)| Anchor::new(v).nth(a.occurrence()));

        let mut segs = self.segments();
        edit(&mut segs, anchor)?;
        self.with_segments(&segs)
    }

    fn with_segments(&self, segs: &Segments) -> Result<Self, Error> {
        if self.is_absent() && segs.is_empty() {
            return Ok(self.clone());
        }
        self.clone().with_content(Some(&segs.join_escaped()))
    }
}

fn validate(host: &str) -> Result<(), Error> {
    if host.is_empty() {
        return Ok(());
    }
    if host.len() > MAX_HOST_LEN {
        return Err(Error::HostTooLong);
    }

    let mut count = 0;
    for (i, label) in host.split('.').enumerate() {
        if label.len() > MAX_LABEL_LEN {
            return Err(Error::LabelTooLong);
        }
        if Label::new(label).is_none() {
            return Err(Error::InvalidHostLabel { index: i });
        }
        count += 1;
    }
    if count > MAX_LABELS {
        return Err(Error::TooManyLabels);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::ToString, vec, vec::Vec};

    #[test]
    fn limits() {
        let label = "banana".repeat(23);
        assert_eq!(validate(&label), Err(Error::LabelTooLong));

        let host = vec!["a"; 128].join(".");
        assert_eq!(host.len(), 255);
        assert_eq!(validate(&host), Err(Error::TooManyLabels));
        assert_eq!(validate(&vec!["a"; 127].join(".")), Ok(()));

        let host = vec!["banana-slip"; 23].join(".");
        assert_eq!(validate(&host), Err(Error::HostTooLong));
    }

    #[test]
    fn invalid_labels() {
        assert_eq!(validate("_bad.host.com"), Err(Error::InvalidHostLabel { index: 0 }));
        assert_eq!(validate("a..b"), Err(Error::InvalidHostLabel { index: 1 }));
        assert_eq!(validate("example.com."), Err(Error::InvalidHostLabel { index: 2 }));
        assert_eq!(validate("exa mple.com"), Err(Error::InvalidHostLabel { index: 0 }));
        assert_eq!(validate("127.0.0.1"), Ok(()));
    }

    #[test]
    fn labels_of_empty_host() {
        let host = Host::new(Some("")).unwrap();
        assert_eq!(host.labels().count(), 0);
        assert!(host.is_empty());
        assert!(!host.is_absent());

        let labels: Vec<_> = Host::new(Some("A.b"))
            .unwrap()
            .labels()
            .map(|l| l.to_string())
            .collect();
        assert_eq!(labels, ["a", "b"]);
    }
}
