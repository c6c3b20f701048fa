//! In-memory virtual files for UI applications.
//! Keeps a flat, ordered list of path-addressed entries (files, directories, symlinks) that a
//! UI layer can render and mutate without touching the disk.
//!
//! ### Overview
//!
//! `vfiles` models a project tree the way a browser-side editor usually does: as a plain list of
//! records whose hierarchy is implied by their paths. It defines the `VFile` record, whose
//! derived fields are parsed from the path on demand, and the `VFiles` collection, which keeps
//! paths unique and fills in missing parent directories on insertion.
//!
//! **Key ideas**:
//! - **Flat state**: the collection is an ordered `Vec`, replaced wholesale on every mutation.
//! - **Path conventions**: `/`-separated strings; directories end with `/`.
//! - **Auto-parents**: inserting `a/b/c.txt` also inserts `a/` and `a/b/` when they are missing.
//! - **Forgiving parsing**: odd paths yield degenerate derived fields rather than errors.
//!
//! ```
//! use vfiles::{Position, VFile, VFiles};
//!
//! let mut files = VFiles::new();
//! files.set_vfile(VFile::file("docs/intro.md", "# Hi"), Position::Append).unwrap();
//!
//! let intro = files.get("docs/intro.md").unwrap();
//! assert_eq!(intro.basename(), "intro");
//! assert!(files.get("docs/").unwrap().is_directory());
//! ```

mod core;
mod vfs;

pub use crate::core::Result;
pub use vfs::{Contents, Position, VFile, VFileData, VFiles};
