use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::ops::Div;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use url::Url;

use crate::error::{Error, Result};

/// Canonical separator for location identifiers. Host APIs on every
/// supported platform accept it.
const SEPARATOR: char = '/';

/// An immutable description of a file system location.
///
/// A `Location` is a value, not a handle: creating or dropping one never
/// touches the file system, and whether the described entry exists is a
/// separate question answered by [`Location::exists`]. Derived locations
/// (`parent`, `join`) are computed purely on the identifier text.
///
/// Each value also carries a private attribute map where callers can stash
/// arbitrary metadata. The map never participates in equality, ordering,
/// hashing or serialization, so two locations with the same identifier are
/// interchangeable no matter what was stashed on either.
#[derive(Debug, Clone, Default)]
pub struct Location {
    path: String,
    attributes: HashMap<String, serde_json::Value>,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), attributes: HashMap::new() }
    }

    /// Converts a `file://` URL into a location.
    pub fn from_url(url: &Url) -> Result<Self> {
        let path = url
            .to_file_path()
            .map_err(|_| Error::NotAFileUrl(url.clone()))?;
        Ok(Self::new(path.to_string_lossy()))
    }

    /// Parses `text` as a URL and converts it into a location.
    pub fn parse_url(text: &str) -> Result<Self> {
        let url = Url::parse(text).map_err(|source| Error::InvalidUrl {
            text: text.to_string(),
            source,
        })?;
        Self::from_url(&url)
    }

    /// The `file://` URL for this location. Only absolute locations have
    /// one.
    pub fn url(&self) -> Result<Url> {
        Url::from_file_path(&self.path).map_err(|_| Error::NotAbsolute(self.path.clone()))
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }

    /// Final path component. The root is its own name and the empty
    /// location has an empty name. Trailing separators are not significant.
    pub fn name(&self) -> &str {
        let trimmed = self.path.trim_end_matches(SEPARATOR);
        if trimmed.is_empty() {
            return if self.path.is_empty() { "" } else { "/" };
        }
        match trimmed.rfind(SEPARATOR) {
            Some(idx) => &trimmed[idx + 1..],
            None => trimmed,
        }
    }

    /// Extension of the final component, without the dot. Names with no
    /// dot, a leading dot only, or a trailing dot have none.
    pub fn extension(&self) -> &str {
        let name = self.name();
        match name.rfind('.') {
            Some(idx) if idx > 0 && idx + 1 < name.len() => &name[idx + 1..],
            _ => "",
        }
    }

    /// Final component with its extension removed.
    pub fn stem(&self) -> &str {
        let name = self.name();
        match name.rfind('.') {
            Some(idx) if idx > 0 && idx + 1 < name.len() => &name[..idx],
            _ => name,
        }
    }

    /// Location with the final component removed.
    ///
    /// The parent of the root is the root and the parent of a bare name is
    /// the empty location, so `parent(join(p, name))` restores `p` for any
    /// canonical `p`.
    pub fn parent(&self) -> Location {
        let trimmed = self.path.trim_end_matches(SEPARATOR);
        if trimmed.is_empty() {
            return if self.path.is_empty() {
                Location::default()
            } else {
                Location::new("/")
            };
        }
        match trimmed.rfind(SEPARATOR) {
            Some(0) => Location::new("/"),
            Some(idx) => Location::new(&trimmed[..idx]),
            None => Location::default(),
        }
    }

    /// Appends `child` with exactly one separator in between, regardless of
    /// trailing separators on `self` or leading ones on `child`. Joining
    /// onto the empty location adopts `child` as-is, and joining an empty
    /// `child` is the identity.
    pub fn join(&self, child: impl AsRef<str>) -> Location {
        let child = child.as_ref();
        if self.path.is_empty() {
            return Location::new(child);
        }
        let child = child.trim_matches(SEPARATOR);
        if child.is_empty() {
            return Location::new(self.path.clone());
        }
        let base = self.path.trim_end_matches(SEPARATOR);
        if base.is_empty() {
            return Location::new(format!("/{child}"));
        }
        Location::new(format!("{base}/{child}"))
    }

    /// Non-empty components of the identifier, in order.
    pub fn components(&self) -> Vec<&str> {
        self.path
            .split(SEPARATOR)
            .filter(|part| !part.is_empty())
            .collect()
    }

    pub fn is_absolute(&self) -> bool {
        Path::new(&self.path).is_absolute()
    }

    pub fn exists(&self) -> bool {
        Path::new(&self.path).exists()
    }

    pub fn is_dir(&self) -> bool {
        Path::new(&self.path).is_dir()
    }

    pub fn is_file(&self) -> bool {
        Path::new(&self.path).is_file()
    }

    /// Looks up a caller-stashed attribute.
    pub fn attribute(&self, key: &str) -> Option<&serde_json::Value> {
        self.attributes.get(key)
    }

    /// Stashes an arbitrary value on this location. Identity is unaffected.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn take_attribute(&mut self, key: &str) -> Option<serde_json::Value> {
        self.attributes.remove(key)
    }

    pub fn attributes(&self) -> &HashMap<String, serde_json::Value> {
        &self.attributes
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        self.path.cmp(&other.path)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

impl FromStr for Location {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Location {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Location {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for Location {
    fn from(path: &Path) -> Self {
        Self::new(path.to_string_lossy())
    }
}

impl From<PathBuf> for Location {
    fn from(path: PathBuf) -> Self {
        Self::new(path.to_string_lossy())
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl AsRef<Path> for Location {
    fn as_ref(&self) -> &Path {
        Path::new(&self.path)
    }
}

impl Div<&str> for &Location {
    type Output = Location;

    fn div(self, child: &str) -> Location {
        self.join(child)
    }
}

impl Div<&str> for Location {
    type Output = Location;

    fn div(self, child: &str) -> Location {
        self.join(child)
    }
}

impl Div<&Location> for &Location {
    type Output = Location;

    fn div(self, child: &Location) -> Location {
        self.join(child.as_str())
    }
}

impl Div<&Location> for Location {
    type Output = Location;

    fn div(self, child: &Location) -> Location {
        self.join(child.as_str())
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        String::deserialize(deserializer).map(Location::new)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_join_inserts_exactly_one_separator() {
        assert_eq!(Location::new("a").join("b").as_str(), "a/b");
        assert_eq!(Location::new("a/").join("b").as_str(), "a/b");
        assert_eq!(Location::new("a").join("/b").as_str(), "a/b");
        assert_eq!(Location::new("a/").join("/b/").as_str(), "a/b");
    }

    #[test]
    fn test_join_edge_bases() {
        assert_eq!(Location::new("").join("b").as_str(), "b");
        assert_eq!(Location::new("/").join("b").as_str(), "/b");
        assert_eq!(Location::new("base").join("").as_str(), "base");
        assert_eq!(Location::new("/").join("").as_str(), "/");
    }

    #[test]
    fn test_join_is_associative() {
        for base in ["", "/", "base", "/base/sub", "rel/x"] {
            let base = Location::new(base);
            let two_steps = base.join("x").join("y");
            let one_step = base.join("x/y");
            assert_eq!(two_steps, one_step);
        }
    }

    #[test]
    fn test_parent_restores_join_base() {
        for base in ["", "/", "a", "/a/b", "rel/x"] {
            let base = Location::new(base);
            assert_eq!(base.join("child").parent(), base);
        }
    }

    #[test]
    fn test_parent_edges() {
        assert_eq!(Location::new("/a/b").parent().as_str(), "/a");
        assert_eq!(Location::new("/a/b/").parent().as_str(), "/a");
        assert_eq!(Location::new("/a").parent().as_str(), "/");
        assert_eq!(Location::new("a").parent().as_str(), "");
        assert_eq!(Location::new("/").parent().as_str(), "/");
        assert_eq!(Location::new("").parent().as_str(), "");
    }

    #[test]
    fn test_name() {
        assert_eq!(Location::new("/a/b.txt").name(), "b.txt");
        assert_eq!(Location::new("/a/b/").name(), "b");
        assert_eq!(Location::new("b.txt").name(), "b.txt");
        assert_eq!(Location::new("/").name(), "/");
        assert_eq!(Location::new("").name(), "");
    }

    #[test]
    fn test_extension_and_stem() {
        let archive = Location::new("/pkg/archive.tar.gz");
        assert_eq!(archive.extension(), "gz");
        assert_eq!(archive.stem(), "archive.tar");

        assert_eq!(Location::new("/a/.gitignore").extension(), "");
        assert_eq!(Location::new("/a/.gitignore").stem(), ".gitignore");
        assert_eq!(Location::new("/a/plain").extension(), "");
        assert_eq!(Location::new("/a/trailing.").extension(), "");
        assert_eq!(Location::new("/a/note.md").stem(), "note");
    }

    #[test]
    fn test_components() {
        assert_eq!(Location::new("/a/b/c").components(), vec!["a", "b", "c"]);
        assert_eq!(Location::new("a//b/").components(), vec!["a", "b"]);
        assert!(Location::new("/").components().is_empty());
    }

    #[test]
    fn test_equality_ignores_stashed_attributes() {
        let plain = Location::new("/a/b");
        let mut tagged = Location::new("/a/b");
        tagged.set_attribute("color", "red");
        tagged.set_attribute("weight", 7);

        assert_eq!(plain, tagged);
        assert_eq!(tagged.attribute("color"), Some(&serde_json::json!("red")));
        assert_eq!(plain.attribute("color"), None);
    }

    #[test]
    fn test_take_attribute_removes_the_entry() {
        let mut location = Location::new("/a");
        location.set_attribute("marker", true);
        assert_eq!(location.take_attribute("marker"), Some(serde_json::json!(true)));
        assert_eq!(location.take_attribute("marker"), None);
    }

    #[test]
    fn test_ordering_is_ordinal() {
        assert!(Location::new("Zoo") < Location::new("apple"));
        assert!(Location::new("a/b") < Location::new("a/c"));
    }

    #[test]
    fn test_div_operator_matches_join() {
        let base = Location::new("/srv");
        assert_eq!(&base / "data", base.join("data"));
        assert_eq!(base.clone() / "data", base.join("data"));
        let child = Location::new("data/logs");
        assert_eq!(&base / &child, Location::new("/srv/data/logs"));
    }

    #[test]
    fn test_url_round_trip() {
        let location = Location::new("/tmp/some dir/file.txt");
        let url = location.url().unwrap();
        assert_eq!(url.as_str(), "file:///tmp/some%20dir/file.txt");
        assert_eq!(Location::from_url(&url).unwrap(), location);
    }

    #[test]
    fn test_url_requires_absolute_location() {
        let err = Location::new("relative/path").url().unwrap_err();
        assert!(matches!(err, Error::NotAbsolute(_)));
    }

    #[test]
    fn test_parse_url_rejects_malformed_text() {
        let err = Location::parse_url("not a url at all").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[test]
    fn test_from_url_rejects_remote_schemes() {
        let url = Url::parse("https://example.com/file.txt").unwrap();
        let err = Location::from_url(&url).unwrap_err();
        assert!(matches!(err, Error::NotAFileUrl(_)));
    }

    #[test]
    fn test_serde_uses_the_bare_identifier() {
        let mut location = Location::new("/a/b");
        location.set_attribute("hidden", true);

        let json = serde_json::to_string(&location).unwrap();
        assert_eq!(json, "\"/a/b\"");

        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(back, location);
        assert!(back.attributes().is_empty());
    }

    #[test]
    fn test_from_str_never_fails() {
        let location: Location = "/etc/hosts".parse().unwrap();
        assert_eq!(location.name(), "hosts");
    }
}
