//! Ordered lists of segments joined by a separator.
//!
//! A host is a list of labels joined by `'.'` and a path is a list of
//! segments joined by `'/'`. [`Segments`] models both.

use crate::{pct_enc::encode_byte, Error};
use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::slice;

/// Values given to a segment operation.
///
/// A scalar is split on the separator of the list it is used with,
/// after a leading separator is dropped. A list is used as is, and a
/// separator inside one of its items stays part of that item.
///
/// # Examples
///
/// ```
/// use uri_components::segments::{Input, Segments};
///
/// let mut path = Segments::new(Some("a"), '/');
/// path.append("/b/c", None)?;
/// path.append(["d/e"], None)?;
/// assert_eq!(path.as_slice(), ["a", "b", "c", "d/e"]);
/// assert_eq!(path.join_escaped(), "a/b/c/d%2Fe");
/// # Ok::<_, uri_components::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    /// A single string.
    Scalar(String),
    /// An ordered list of strings.
    List(Vec<String>),
}

impl Input {
    /// Normalizes the input to an ordered list.
    ///
    /// An empty scalar stands for one empty segment.
    #[must_use]
    pub fn into_list(self, separator: char) -> Vec<String> {
        match self {
            Self::Scalar(s) => {
                let s = s.strip_prefix(separator).unwrap_or(s.as_str());
                s.split(separator).map(ToString::to_string).collect()
            }
            Self::List(list) => list,
        }
    }
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Self::Scalar(s.into())
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        Self::Scalar(s)
    }
}

impl From<Vec<String>> for Input {
    fn from(list: Vec<String>) -> Self {
        Self::List(list)
    }
}

impl From<Vec<&str>> for Input {
    fn from(list: Vec<&str>) -> Self {
        list.into_iter().collect()
    }
}

impl From<&[&str]> for Input {
    fn from(list: &[&str]) -> Self {
        list.iter().copied().collect()
    }
}

impl<const N: usize> From<[&str; N]> for Input {
    fn from(list: [&str; N]) -> Self {
        list.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Input {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}

/// An existing segment relative to which new segments are inserted.
///
/// Since a value may appear more than once, the anchor also names which
/// occurrence of the value to use, counted from zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Anchor<'a> {
    value: &'a str,
    occurrence: usize,
}

impl<'a> Anchor<'a> {
    /// Creates an anchor at the first occurrence of a value.
    #[must_use]
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            occurrence: 0,
        }
    }

    /// Moves the anchor to the given occurrence of its value.
    #[must_use]
    pub fn nth(self, occurrence: usize) -> Self {
        Self { occurrence, ..self }
    }

    /// Returns the anchor value.
    #[must_use]
    pub fn value(&self) -> &'a str {
        self.value
    }

    /// Returns the occurrence of the anchor value, counted from zero.
    #[must_use]
    pub fn occurrence(&self) -> usize {
        self.occurrence
    }
}

impl<'a> From<&'a str> for Anchor<'a> {
    fn from(value: &'a str) -> Self {
        Self::new(value)
    }
}

/// Where [`Segments::set`] inserts new segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Position {
    /// After the anchor, or at the end.
    #[default]
    Append,
    /// Before the anchor, or at the front.
    Prepend,
}

/// An ordered list of segments joined by a separator.
///
/// # Examples
///
/// ```
/// use uri_components::segments::{Anchor, Segments};
///
/// let mut segs = Segments::new(Some("/test/query.php"), '/');
/// assert_eq!(segs.as_slice(), ["test", "query.php"]);
///
/// segs.append("sullivent", Some(Anchor::new("test")))?;
/// assert_eq!(segs.to_string(), "test/sullivent/query.php");
/// # Ok::<_, uri_components::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segments {
    separator: char,
    items: Vec<String>,
}

impl Segments {
    /// Splits a string on the given separator.
    ///
    /// A leading separator is dropped. An absent or empty string
    /// yields an empty list.
    #[must_use]
    pub fn new(s: Option<&str>, separator: char) -> Self {
        let items = match s {
            Some(s) if !s.is_empty() => Input::from(s).into_list(separator),
            _ => Vec::new(),
        };
        Self { separator, items }
    }

    /// Creates a list from segments that are used as is.
    #[must_use]
    pub fn from_list(items: Vec<String>, separator: char) -> Self {
        Self { separator, items }
    }

    /// Returns the separator.
    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Returns all segments, in order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Returns an iterator over the segments.
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.items.iter()
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checks whether a segment equals the given value.
    #[must_use]
    pub fn has(&self, value: &str) -> bool {
        self.items.iter().any(|item| item == value)
    }

    /// Returns the segment at the given index, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Removes every segment equal to any of the given values.
    ///
    /// The other segments keep their relative order.
    pub fn remove(&mut self, values: impl Into<Input>) {
        let values = values.into().into_list(self.separator);
        self.items.retain(|item| !values.contains(item));
    }

    /// Removes all segments.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Inserts segments after an anchor, or at the end if there is no anchor
    /// or the anchor value is not found.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OccurrenceOutOfRange`] if the anchor value is found,
    /// but not as many times as the anchor occurrence requires.
    pub fn append(
        &mut self,
        values: impl Into<Input>,
        anchor: Option<Anchor<'_>>,
    ) -> Result<(), Error> {
        let at = match self.locate(anchor)? {
            Some(i) => i + 1,
            None => self.items.len(),
        };
        self.insert_at(at, values.into());
        Ok(())
    }

    /// Inserts segments before an anchor, or at the front if there is no anchor
    /// or the anchor value is not found.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OccurrenceOutOfRange`] if the anchor value is found,
    /// but not as many times as the anchor occurrence requires.
    pub fn prepend(
        &mut self,
        values: impl Into<Input>,
        anchor: Option<Anchor<'_>>,
    ) -> Result<(), Error> {
        let at = self.locate(anchor)?.unwrap_or(0);
        self.insert_at(at, values.into());
        Ok(())
    }

    /// Inserts segments at the given position, relative to an optional anchor.
    ///
    /// # Errors
    ///
    /// See [`append`](Self::append) and [`prepend`](Self::prepend).
    pub fn set(
        &mut self,
        values: impl Into<Input>,
        position: Position,
        anchor: Option<Anchor<'_>>,
    ) -> Result<(), Error> {
        match position {
            Position::Append => self.append(values, anchor),
            Position::Prepend => self.prepend(values, anchor),
        }
    }

    /// Finds the index of the anchor.
    fn locate(&self, anchor: Option<Anchor<'_>>) -> Result<Option<usize>, Error> {
        let Some(anchor) = anchor else {
            return Ok(None);
        };

        let mut matches = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| *item == anchor.value)
            .map(|(i, _)| i);

        if let Some(i) = matches.clone().nth(anchor.occurrence) {
            return Ok(Some(i));
        }
        match matches.count() {
            0 => Ok(None),
            found => Err(Error::OccurrenceOutOfRange {
                occurrence: anchor.occurrence,
                found,
            }),
        }
    }

    fn insert_at(&mut self, at: usize, values: Input) {
        let values = values.into_list(self.separator);
        self.items.splice(at..at, values);
    }

    /// Joins the segments with the separator, percent-encoding every
    /// separator found inside a segment.
    ///
    /// Unlike the [`Display`](core::fmt::Display) form, splitting the result
    /// again yields as many segments as there are in the list.
    #[must_use]
    pub fn join_escaped(&self) -> String {
        let mut sep_buf = [0; 4];
        let sep = &*self.separator.encode_utf8(&mut sep_buf);
        let escaped: String = sep.bytes().map(encode_byte).collect();

        let mut buf = String::new();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                buf.push_str(sep);
            }
            if item.contains(sep) {
                buf.push_str(&item.replace(sep, &escaped));
            } else {
                buf.push_str(item);
            }
        }
        buf
    }

    /// Consumes the list and yields the segments.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl<'a> IntoIterator for &'a Segments {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn segs(items: &[&str]) -> Segments {
        Segments::from_list(items.iter().map(|s| s.to_string()).collect(), '/')
    }

    #[test]
    fn locate() {
        let s = segs(&["a", "b", "a", "c"]);
        assert_eq!(s.locate(None), Ok(None));
        assert_eq!(s.locate(Some(Anchor::new("a"))), Ok(Some(0)));
        assert_eq!(s.locate(Some(Anchor::new("a").nth(1))), Ok(Some(2)));
        assert_eq!(s.locate(Some(Anchor::new("c"))), Ok(Some(3)));
        assert_eq!(s.locate(Some(Anchor::new("x").nth(5))), Ok(None));
        assert_eq!(
            s.locate(Some(Anchor::new("a").nth(2))),
            Err(Error::OccurrenceOutOfRange {
                occurrence: 2,
                found: 2
            })
        );
    }

    #[test]
    fn scalar_input() {
        assert_eq!(Input::from("a/b").into_list('/'), ["a", "b"]);
        assert_eq!(Input::from("/a").into_list('/'), ["a"]);
        assert_eq!(Input::from("").into_list('/'), [""]);
        assert_eq!(Input::from("a.b").into_list('/'), ["a.b"]);
        assert_eq!(Input::from(["a/b"]).into_list('/'), ["a/b"]);
    }

    #[test]
    fn join_escaped() {
        let s = segs(&["a", "d/e", "", "f"]);
        assert_eq!(s.to_string(), "a/d/e//f");
        assert_eq!(s.join_escaped(), "a/d%2Fe//f");

        let labels = Segments::from_list(vec!["www".into(), "a.b".into()], '.');
        assert_eq!(labels.join_escaped(), "www.a%2Eb");
    }
}
