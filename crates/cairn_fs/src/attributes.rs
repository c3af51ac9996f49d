use std::collections::HashMap;
use std::fs::Metadata;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use strum_macros::{Display, EnumIter};

use crate::error::Error;

/// Keys of the host attribute bag.
///
/// Not every file system populates every key. Looking up an unpopulated
/// key through the typed projections reports
/// [`Error::AttributeNotFound`] instead of guessing a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum AttributeKey {
    Size,
    CreationDate,
    ModificationDate,
    AccessDate,
    EntryKind,
    ReadOnly,
    PosixPermissions,
    OwnerId,
    GroupId,
    ReferenceCount,
    DeviceId,
    Inode,
}

/// A value from the host attribute bag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue {
    UInt(u64),
    Date(DateTime<Utc>),
    Mode(u32),
    Kind(EntryKind),
    Flag(bool),
}

/// Classification of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
}

/// One snapshot of the host attributes of a single path.
///
/// A snapshot is taken by [`CairnFS::attributes`](crate::CairnFS::attributes)
/// and never refreshes itself; the convenience accessors on `CairnFS` fetch
/// a new bag per call instead.
#[derive(Debug, Clone)]
pub struct Attributes {
    path: String,
    entries: HashMap<AttributeKey, AttributeValue>,
}

impl Attributes {
    fn from_metadata(path: &Path, meta: &Metadata) -> Self {
        let mut entries = HashMap::new();
        entries.insert(AttributeKey::Size, AttributeValue::UInt(meta.len()));
        entries.insert(AttributeKey::EntryKind, AttributeValue::Kind(kind_of(meta)));
        entries.insert(
            AttributeKey::ReadOnly,
            AttributeValue::Flag(meta.permissions().readonly()),
        );

        // Timestamps are best-effort; hosts without a birth time simply
        // leave CreationDate unpopulated.
        if let Ok(time) = meta.created() {
            entries.insert(AttributeKey::CreationDate, AttributeValue::Date(time.into()));
        }
        if let Ok(time) = meta.modified() {
            entries.insert(
                AttributeKey::ModificationDate,
                AttributeValue::Date(time.into()),
            );
        }
        if let Ok(time) = meta.accessed() {
            entries.insert(AttributeKey::AccessDate, AttributeValue::Date(time.into()));
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;

            entries.insert(
                AttributeKey::PosixPermissions,
                AttributeValue::Mode(meta.mode() & 0o7777),
            );
            entries.insert(AttributeKey::OwnerId, AttributeValue::UInt(meta.uid() as u64));
            entries.insert(AttributeKey::GroupId, AttributeValue::UInt(meta.gid() as u64));
            entries.insert(
                AttributeKey::ReferenceCount,
                AttributeValue::UInt(meta.nlink()),
            );
            entries.insert(AttributeKey::DeviceId, AttributeValue::UInt(meta.dev()));
            entries.insert(AttributeKey::Inode, AttributeValue::UInt(meta.ino()));
        }

        Self { path: path.display().to_string(), entries }
    }

    pub fn get(&self, key: AttributeKey) -> Option<&AttributeValue> {
        self.entries.get(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = AttributeKey> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn uint(&self, key: AttributeKey) -> std::result::Result<u64, Error> {
        match self.get(key) {
            Some(AttributeValue::UInt(value)) => Ok(*value),
            Some(_) => Err(self.type_error(key)),
            None => Err(self.not_found(key)),
        }
    }

    pub fn date(&self, key: AttributeKey) -> std::result::Result<DateTime<Utc>, Error> {
        match self.get(key) {
            Some(AttributeValue::Date(value)) => Ok(*value),
            Some(_) => Err(self.type_error(key)),
            None => Err(self.not_found(key)),
        }
    }

    pub fn mode(&self, key: AttributeKey) -> std::result::Result<u32, Error> {
        match self.get(key) {
            Some(AttributeValue::Mode(value)) => Ok(*value),
            Some(_) => Err(self.type_error(key)),
            None => Err(self.not_found(key)),
        }
    }

    pub fn kind(&self, key: AttributeKey) -> std::result::Result<EntryKind, Error> {
        match self.get(key) {
            Some(AttributeValue::Kind(value)) => Ok(*value),
            Some(_) => Err(self.type_error(key)),
            None => Err(self.not_found(key)),
        }
    }

    pub fn flag(&self, key: AttributeKey) -> std::result::Result<bool, Error> {
        match self.get(key) {
            Some(AttributeValue::Flag(value)) => Ok(*value),
            Some(_) => Err(self.type_error(key)),
            None => Err(self.not_found(key)),
        }
    }

    fn not_found(&self, key: AttributeKey) -> Error {
        Error::AttributeNotFound { key, path: self.path.clone() }
    }

    fn type_error(&self, key: AttributeKey) -> Error {
        Error::AttributeType { key, path: self.path.clone() }
    }
}

fn kind_of(meta: &Metadata) -> EntryKind {
    if meta.file_type().is_symlink() {
        EntryKind::Symlink
    } else if meta.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    }
}

impl crate::CairnFS {
    /// Fetches the host attribute bag for `path`.
    ///
    /// The bag describes the entry itself; symlinks are not followed.
    pub fn attributes<T: AsRef<Path>>(path: T) -> Result<Attributes> {
        let meta = std::fs::symlink_metadata(path.as_ref()).with_context(|| {
            format!("Failed to read attributes of {}", path.as_ref().display())
        })?;
        Ok(Attributes::from_metadata(path.as_ref(), &meta))
    }

    pub fn file_size<T: AsRef<Path>>(path: T) -> Result<u64> {
        Ok(Self::attributes(path)?.uint(AttributeKey::Size)?)
    }

    pub fn creation_date<T: AsRef<Path>>(path: T) -> Result<DateTime<Utc>> {
        Ok(Self::attributes(path)?.date(AttributeKey::CreationDate)?)
    }

    pub fn modification_date<T: AsRef<Path>>(path: T) -> Result<DateTime<Utc>> {
        Ok(Self::attributes(path)?.date(AttributeKey::ModificationDate)?)
    }

    pub fn access_date<T: AsRef<Path>>(path: T) -> Result<DateTime<Utc>> {
        Ok(Self::attributes(path)?.date(AttributeKey::AccessDate)?)
    }

    pub fn entry_kind<T: AsRef<Path>>(path: T) -> Result<EntryKind> {
        Ok(Self::attributes(path)?.kind(AttributeKey::EntryKind)?)
    }

    pub fn is_read_only<T: AsRef<Path>>(path: T) -> Result<bool> {
        Ok(Self::attributes(path)?.flag(AttributeKey::ReadOnly)?)
    }

    #[cfg(unix)]
    pub fn posix_permissions<T: AsRef<Path>>(path: T) -> Result<u32> {
        Ok(Self::attributes(path)?.mode(AttributeKey::PosixPermissions)?)
    }

    #[cfg(unix)]
    pub fn owner_id<T: AsRef<Path>>(path: T) -> Result<u64> {
        Ok(Self::attributes(path)?.uint(AttributeKey::OwnerId)?)
    }

    #[cfg(unix)]
    pub fn group_id<T: AsRef<Path>>(path: T) -> Result<u64> {
        Ok(Self::attributes(path)?.uint(AttributeKey::GroupId)?)
    }

    #[cfg(unix)]
    pub fn reference_count<T: AsRef<Path>>(path: T) -> Result<u64> {
        Ok(Self::attributes(path)?.uint(AttributeKey::ReferenceCount)?)
    }

    #[cfg(unix)]
    pub fn device_id<T: AsRef<Path>>(path: T) -> Result<u64> {
        Ok(Self::attributes(path)?.uint(AttributeKey::DeviceId)?)
    }

    #[cfg(unix)]
    pub fn inode<T: AsRef<Path>>(path: T) -> Result<u64> {
        Ok(Self::attributes(path)?.uint(AttributeKey::Inode)?)
    }
}
