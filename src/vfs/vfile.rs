use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::utils;

/// Contents of a virtual file: either text or a raw byte buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contents {
    Text(String),
    Buffer(Vec<u8>),
}

impl Contents {
    pub fn is_buffer(&self) -> bool {
        matches!(self, Contents::Buffer(_))
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Contents::Text(text) => text.as_bytes(),
            Contents::Buffer(buf) => buf,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<String> for Contents {
    fn from(text: String) -> Self {
        Contents::Text(text)
    }
}

impl From<&str> for Contents {
    fn from(text: &str) -> Self {
        Contents::Text(text.to_owned())
    }
}

impl From<Vec<u8>> for Contents {
    fn from(buf: Vec<u8>) -> Self {
        Contents::Buffer(buf)
    }
}

impl From<&[u8]> for Contents {
    fn from(buf: &[u8]) -> Self {
        Contents::Buffer(buf.to_vec())
    }
}

/// Free-form metadata attached to a `VFile`.
///
/// Arbitrary JSON fields are kept apart from the optional symlink target, so no user key can
/// mark a file as a link. A file that carries a link target is reported as a link by
/// `VFile::is_link()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VFileData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link_path: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    fields: Map<String, Value>,
}

impl VFileData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata marking the owner as a symlink pointing at `target`.
    pub fn link(target: impl Into<String>) -> Self {
        Self {
            link_path: Some(target.into()),
            fields: Map::new(),
        }
    }

    pub fn link_path(&self) -> Option<&str> {
        self.link_path.as_deref()
    }

    pub fn set_link_path(&mut self, target: Option<String>) {
        self.link_path = target;
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Inserts a field, returning the previous value stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for VFileData {
    fn from(fields: Map<String, Value>) -> Self {
        Self {
            link_path: None,
            fields,
        }
    }
}

/// A path-addressed record in a `VFiles` collection.
///
/// Only `path`, `contents` and `data` are stored. Everything else (`basename()`, `extname()`,
/// `dirname()`, `is_directory()`...) is derived from them on demand.
///
/// ### Example
/// ```
/// use vfiles::VFile;
///
/// let file = VFile::file("src/lib.rs", "pub mod vfs;");
/// assert_eq!(file.dirname(), "src");
/// assert_eq!(file.basename(), "lib");
/// assert_eq!(file.extname(), ".rs");
/// assert_eq!(file.filename(), "lib.rs");
/// assert!(!file.is_directory());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VFile {
    path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<VFileData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contents: Option<Contents>,
}

impl VFile {
    pub fn new(
        path: impl Into<String>,
        contents: Option<Contents>,
        data: Option<VFileData>,
    ) -> VFile {
        VFile {
            path: path.into(),
            data,
            contents,
        }
    }

    pub fn file(path: impl Into<String>, contents: impl Into<Contents>) -> VFile {
        Self::new(path, Some(contents.into()), None)
    }

    /// Creates a directory placeholder. A trailing separator is appended if `path` lacks one.
    pub fn dir(path: impl Into<String>) -> VFile {
        let mut path = path.into();
        if !utils::is_dir_path(&path) {
            path.push(utils::SEPARATOR);
        }
        Self::new(path, None, None)
    }

    pub fn symlink(path: impl Into<String>, target: impl Into<String>) -> VFile {
        Self::new(path, None, Some(VFileData::link(target)))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn data(&self) -> Option<&VFileData> {
        self.data.as_ref()
    }

    pub fn data_mut(&mut self) -> &mut VFileData {
        self.data.get_or_insert_with(VFileData::default)
    }

    pub fn contents(&self) -> Option<&Contents> {
        self.contents.as_ref()
    }

    pub fn set_contents(&mut self, contents: Option<Contents>) {
        self.contents = contents;
    }

    /// Text contents, if the file holds text.
    pub fn text(&self) -> Option<&str> {
        match &self.contents {
            Some(Contents::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Raw bytes of the contents, whatever their kind.
    pub fn bytes(&self) -> Option<&[u8]> {
        self.contents.as_ref().map(Contents::as_bytes)
    }

    pub fn basename(&self) -> &str {
        utils::basename(&self.path)
    }

    pub fn extname(&self) -> &str {
        utils::extname(&self.path)
    }

    pub fn filename(&self) -> &str {
        utils::segment(&self.path)
    }

    pub fn dirname(&self) -> &str {
        utils::dirname(&self.path)
    }

    pub fn is_directory(&self) -> bool {
        utils::is_dir_path(&self.path)
    }

    pub fn is_link(&self) -> bool {
        self.link_target().is_some()
    }

    pub fn link_target(&self) -> Option<&str> {
        self.data.as_ref().and_then(VFileData::link_path)
    }

    pub fn is_buffer(&self) -> bool {
        self.contents.as_ref().is_some_and(Contents::is_buffer)
    }

    /// Ancestor directory paths (trailing-separator form), shallowest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &str> {
        utils::ancestors(&self.path)
    }
}
