//! Order-preserving decoding of the `files` object.

use serde::de::{Deserializer, MapAccess, Visitor};
use std::fmt;

use super::FileEntry;

type OrderedFiles = Vec<(String, Option<FileEntry>)>;

/// Decodes `files` (object or `null`) into `(key, entry)` pairs in source order.
pub(super) fn ordered_files<'de, D>(deserializer: D) -> Result<OrderedFiles, D::Error>
where
    D: Deserializer<'de>,
{
    struct FilesVisitor;

    impl<'de> Visitor<'de> for FilesVisitor {
        type Value = OrderedFiles;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of filename to file entry, or null")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_none<E>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_map(FilesVisitor)
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut files = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, entry)) = map.next_entry::<String, Option<FileEntry>>()? {
                files.push((name, entry));
            }
            Ok(files)
        }
    }

    deserializer.deserialize_option(FilesVisitor)
}
