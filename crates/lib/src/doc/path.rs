//! Path types for addressing values inside a record's data tree.
//!
//! A path is a dot-separated string such as `"nested.super.value"` or
//! `"list.0"`. Each segment is either a map key or, when the value being
//! descended is a list, a non-negative decimal index.
//!
//! Unlike file-system paths, paths here are never normalized: `"a..b"` has
//! three segments, the middle one empty, and an empty segment only matches a
//! map entry whose key is the empty string.
//!
//! # Core Types
//!
//! - [`Path`] - An unsized borrowed path type (always behind a reference)
//! - [`Segment`] - A single component of a path
//!
//! # Usage
//!
//! ```rust
//! use insights::doc::Path;
//!
//! let path = Path::new("list.0");
//! let segments: Vec<&str> = path.segments().map(|s| s.as_str()).collect();
//! assert_eq!(segments, vec!["list", "0"]);
//! assert_eq!(path.to_string(), "list.0");
//! assert_eq!(Path::new("").to_string(), "(empty path)");
//! ```

use std::fmt;

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// A borrowed path into a data tree.
///
/// `Path` is unsized and always used behind a reference, the way `str` is.
/// Any string is a valid path.
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

impl Path {
    /// Wraps a string slice as a path.
    pub fn new<S: AsRef<str> + ?Sized>(s: &S) -> &Path {
        // SAFETY: Path is repr(transparent) over str
        unsafe { &*(s.as_ref() as *const str as *const Path) }
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns true if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over the path's segments.
    ///
    /// The empty path yields no segments. Any other path yields one more
    /// segment than it has separators, including empty ones.
    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> {
        let mut split = self.inner.split(SEPARATOR);
        if self.inner.is_empty() {
            split.next();
        }
        split.map(Segment)
    }

    /// Returns the number of segments in the path.
    pub fn len(&self) -> usize {
        if self.inner.is_empty() {
            0
        } else {
            self.inner.matches(SEPARATOR).count() + 1
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", &self.inner)
        }
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        &self.inner == other
    }
}

impl PartialEq<&str> for Path {
    fn eq(&self, other: &&str) -> bool {
        &self.inner == *other
    }
}

/// A single segment of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment<'a>(&'a str);

impl<'a> Segment<'a> {
    /// Returns the segment as a string slice, for use as a map key.
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Interprets the segment as a list index.
    ///
    /// Only plain ASCII digits are accepted: no sign, no whitespace, no
    /// other characters. Values that do not fit in `usize` are rejected.
    pub fn as_index(&self) -> Option<usize> {
        if self.0.is_empty() || !self.0.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.0.parse().ok()
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
