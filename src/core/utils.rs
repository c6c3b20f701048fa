//! String-level path helpers shared by `VFile` and `VFiles`.
//!
//! Paths are plain `/`-separated strings. They are never normalized, so `a//b` and `./a` are kept
//! exactly as written, and every helper here degrades gracefully instead of failing.

use std::borrow::Cow;

pub const SEPARATOR: char = '/';

/// Everything before the last separator, or `""` when there is none.
pub fn dirname(path: &str) -> &str {
    path.rfind(SEPARATOR).map_or("", |i| &path[..i])
}

/// The final segment (everything after the last separator).
/// Empty for directory paths, which end with a separator.
pub fn segment(path: &str) -> &str {
    path.rfind(SEPARATOR).map_or(path, |i| &path[i + 1..])
}

/// Extension of the final segment including the dot.
/// A leading dot (`.gitignore`) marks a hidden file, not an extension.
pub fn extname(path: &str) -> &str {
    let segment = segment(path);
    match segment.rfind('.') {
        Some(i) if i > 0 => &segment[i..],
        _ => "",
    }
}

/// Final segment without its extension.
pub fn basename(path: &str) -> &str {
    let segment = segment(path);
    &segment[..segment.len() - extname(path).len()]
}

pub fn is_dir_path(path: &str) -> bool {
    path.ends_with(SEPARATOR)
}

/// Ancestor directories of `path` in trailing-separator form, shallowest first.
///
/// `a/b/c.txt` yields `a/`, `a/b/`; `a/b/` yields `a/`. A leading separator never produces a
/// root entry, so `/a/x` yields only `/a/`.
pub fn ancestors(path: &str) -> impl Iterator<Item = &str> {
    let body = path.strip_suffix(SEPARATOR).unwrap_or(path);
    body.match_indices(SEPARATOR)
        .map(|(i, _)| i)
        .filter(|&i| i > 0)
        .map(move |i| &body[..=i])
}

/// Directory form of `path`: a trailing separator is appended if missing.
/// The empty path stays empty and denotes the top level of the collection.
pub fn as_dir(path: &str) -> Cow<'_, str> {
    if path.is_empty() || is_dir_path(path) {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("{path}{SEPARATOR}"))
    }
}

/// Checks whether `path` lies strictly below the directory `dir` (given in directory form).
pub fn is_descendant(path: &str, dir: &str) -> bool {
    path.len() > dir.len() && path.starts_with(dir)
}

/// Checks whether `path` is an immediate child of the directory `dir` (given in directory form).
/// The top level (`""`) holds every path without ancestors, which agrees with `dirname()`
/// returning `""` for both `readme.md` and `/readme.md`.
pub fn is_child(path: &str, dir: &str) -> bool {
    if dir.is_empty() {
        return !path.is_empty() && ancestors(path).next().is_none();
    }
    if !is_descendant(path, dir) {
        return false;
    }
    let rest = &path[dir.len()..];
    let rest = rest.strip_suffix(SEPARATOR).unwrap_or(rest);
    !rest.is_empty() && !rest.contains(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod parsing {
        use super::*;

        #[test]
        fn test_plain_file() {
            assert_eq!(dirname("src/lib.rs"), "src");
            assert_eq!(segment("src/lib.rs"), "lib.rs");
            assert_eq!(extname("src/lib.rs"), ".rs");
            assert_eq!(basename("src/lib.rs"), "lib");
        }

        #[test]
        fn test_no_extension() {
            assert_eq!(extname("src/Makefile"), "");
            assert_eq!(basename("src/Makefile"), "Makefile");
        }

        #[test]
        fn test_multiple_dots() {
            assert_eq!(extname("dist/app.min.js"), ".js");
            assert_eq!(basename("dist/app.min.js"), "app.min");
        }

        #[test]
        fn test_trailing_dot() {
            assert_eq!(extname("notes."), ".");
            assert_eq!(basename("notes."), "notes");
        }

        #[test]
        fn test_dotfile() {
            assert_eq!(extname("home/.bashrc"), "");
            assert_eq!(basename("home/.bashrc"), ".bashrc");
            assert_eq!(extname(".env.local"), ".local");
            assert_eq!(basename(".env.local"), ".env");
        }

        #[test]
        fn test_dot_in_directory_name() {
            assert_eq!(extname("v1.2/notes"), "");
            assert_eq!(basename("v1.2/notes"), "notes");
            assert_eq!(dirname("v1.2/notes"), "v1.2");
        }

        #[test]
        fn test_root_level() {
            assert_eq!(dirname("readme.md"), "");
            assert_eq!(dirname("/readme.md"), "");
            assert_eq!(segment("/readme.md"), "readme.md");
        }

        #[test]
        fn test_trailing_slash() {
            assert!(is_dir_path("a/b/"));
            assert_eq!(dirname("a/b/"), "a/b");
            assert_eq!(segment("a/b/"), "");
            assert_eq!(extname("a/b.d/"), "");
            assert_eq!(basename("a/b.d/"), "");
        }

        #[test]
        fn test_degenerate() {
            assert_eq!(dirname(""), "");
            assert_eq!(basename(""), "");
            assert_eq!(extname(""), "");
            assert_eq!(dirname("/"), "");
            assert_eq!(segment("//"), "");
        }
    }

    mod ancestors {
        use super::*;

        fn collect(path: &str) -> Vec<&str> {
            ancestors(path).collect()
        }

        #[test]
        fn test_nested_file() {
            assert_eq!(collect("a/b/c.txt"), vec!["a/", "a/b/"]);
        }

        #[test]
        fn test_directory_excludes_itself() {
            assert_eq!(collect("a/b/"), vec!["a/"]);
        }

        #[test]
        fn test_root_level_has_none() {
            assert!(collect("c.txt").is_empty());
            assert!(collect("a/").is_empty());
            assert!(collect("/c.txt").is_empty());
            assert!(collect("/").is_empty());
            assert!(collect("").is_empty());
        }

        #[test]
        fn test_absolute_skips_root() {
            assert_eq!(collect("/a/b/c"), vec!["/a/", "/a/b/"]);
        }
    }

    mod hierarchy {
        use super::*;

        #[test]
        fn test_as_dir() {
            assert_eq!(as_dir("a"), "a/");
            assert_eq!(as_dir("a/"), "a/");
            assert_eq!(as_dir(""), "");
        }

        #[test]
        fn test_is_descendant() {
            assert!(is_descendant("a/b", "a/"));
            assert!(is_descendant("a/b/c/", "a/"));
            assert!(!is_descendant("a/", "a/"));
            assert!(!is_descendant("ab/c", "a/"));
            assert!(is_descendant("x", ""));
        }

        #[test]
        fn test_is_child() {
            assert!(is_child("a/b", "a/"));
            assert!(is_child("a/b/", "a/"));
            assert!(!is_child("a/b/c", "a/"));
            assert!(is_child("top.txt", ""));
            assert!(is_child("dir/", ""));
            assert!(!is_child("dir/x", ""));
        }

        #[test]
        fn test_absolute_top_level_child() {
            assert!(is_child("/readme.md", ""));
            assert!(is_child("/docs/", ""));
            assert!(!is_child("/docs/a.md", ""));
            assert!(!is_child("", ""));
            assert!(is_child("/readme.md", "/"));
        }
    }
}
