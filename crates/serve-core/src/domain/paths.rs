//! Path normalization.
//!
//! Every path the scaffolder touches or reports goes through
//! [`normalize_path`], so console output and disk operations agree no matter
//! how the base directory was spelled (absolute, relative, with `.` or `..`).
//!
//! Resolution is purely lexical: symlinks are not followed and the paths do
//! not have to exist.

use std::path::{Component, Path, PathBuf};

use super::entities::project::underscore;

/// Join `segments` onto `working_dir`, resolve `.`/`..`, and express the
/// result relative to `working_dir`.
///
/// Returns `.` when the result is the working directory itself. Absolute
/// segments replace everything before them, as with [`Path::join`].
pub fn normalize_path<I, P>(working_dir: &Path, segments: I) -> PathBuf
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut joined = working_dir.to_path_buf();
    for segment in segments {
        joined.push(segment);
    }

    let absolute = lexical_clean(&joined);
    let base = lexical_clean(working_dir);
    relative_to(&absolute, &base)
}

/// Build the project root: `base_directory/underscore(name)`, normalized.
///
/// A blank `name` leaves the base directory as the location.
pub fn normalize_location(working_dir: &Path, base_directory: &Path, name: Option<&str>) -> PathBuf {
    match name.filter(|n| !n.trim().is_empty()) {
        Some(name) => normalize_path(working_dir, [base_directory, Path::new(&underscore(name))]),
        None => normalize_path(working_dir, [base_directory]),
    }
}

/// Resolve `.` and `..` components without touching the filesystem.
///
/// `..` above the root is dropped, matching `File.expand_path("/..")` == `/`.
pub fn lexical_clean(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    parts.iter().collect()
}

fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path_parts: Vec<_> = path.components().collect();
    let base_parts: Vec<_> = base.components().collect();

    let common = path_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push("..");
    }
    for part in &path_parts[common..] {
        relative.push(part);
    }

    if relative.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        relative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wd() -> PathBuf {
        PathBuf::from("/tmp/work")
    }

    #[test]
    fn working_dir_itself_is_dot() {
        assert_eq!(normalize_path(&wd(), ["."]), PathBuf::from("."));
        assert_eq!(normalize_path(&wd(), ["/tmp/work"]), PathBuf::from("."));
    }

    #[test]
    fn nested_relative_segments_are_joined() {
        assert_eq!(
            normalize_path(&wd(), ["blog_site", "public/images"]),
            PathBuf::from("blog_site/public/images")
        );
    }

    #[test]
    fn absolute_segment_is_reexpressed_relative() {
        assert_eq!(
            normalize_path(&wd(), ["/tmp/work/blog_site", "tmp"]),
            PathBuf::from("blog_site/tmp")
        );
    }

    #[test]
    fn parent_segments_climb_out_of_working_dir() {
        assert_eq!(
            normalize_path(&wd(), ["/tmp/elsewhere/site"]),
            PathBuf::from("../elsewhere/site")
        );
        assert_eq!(normalize_path(&wd(), ["../.."]), PathBuf::from("../.."));
    }

    #[test]
    fn dot_and_dotdot_are_resolved() {
        assert_eq!(
            normalize_path(&wd(), ["./a/../b/./c", "."]),
            PathBuf::from("b/c")
        );
    }

    #[test]
    fn trailing_slash_segments_are_harmless() {
        assert_eq!(
            normalize_path(&wd(), ["site", "public/"]),
            PathBuf::from("site/public")
        );
    }

    #[test]
    fn lexical_clean_stops_at_root() {
        assert_eq!(lexical_clean(Path::new("/../../etc")), PathBuf::from("/etc"));
        assert_eq!(lexical_clean(Path::new("../a")), PathBuf::from("../a"));
    }

    #[test]
    fn location_spellings_agree() {
        let absolute = normalize_location(&wd(), Path::new("/tmp/work/sites"), Some("blog-site"));
        let relative = normalize_location(&wd(), Path::new("sites"), Some("blog-site"));
        let dotted = normalize_location(&wd(), Path::new("other/../sites/."), Some("blog-site"));

        assert_eq!(absolute, PathBuf::from("sites/blog_site"));
        assert_eq!(absolute, relative);
        assert_eq!(relative, dotted);
    }

    #[test]
    fn location_without_name_is_base_directory() {
        assert_eq!(
            normalize_location(&wd(), Path::new("old_site"), None),
            PathBuf::from("old_site")
        );
        assert_eq!(
            normalize_location(&wd(), Path::new("old_site"), Some("  ")),
            PathBuf::from("old_site")
        );
    }
}
