//! Portrait lookup for option ids.

use std::path::{Path, PathBuf};

const PHOTO_EXTENSION: &str = "jpg";
const PLACEHOLDER_FILE: &str = "default.jpg";

/// What to show for an option's portrait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// `<dir>/<id>.jpg`
    Photo(PathBuf),
    /// `<dir>/default.jpg`
    Placeholder(PathBuf),
    /// Nothing on disk at all.
    Blank,
}

impl ImageRef {
    /// File name to show under the option, if any.
    pub fn label(&self) -> Option<String> {
        match self {
            ImageRef::Photo(path) | ImageRef::Placeholder(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            ImageRef::Blank => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssetResolver {
    photos_dir: PathBuf,
}

impl AssetResolver {
    pub fn new<P: AsRef<Path>>(photos_dir: P) -> Self {
        Self {
            photos_dir: photos_dir.as_ref().to_path_buf(),
        }
    }

    /// Photo for `id`, else the default portrait, else blank.
    pub fn resolve_image(&self, id: &str) -> ImageRef {
        if is_plain_file_stem(id) {
            let photo = self.photos_dir.join(format!("{}.{}", id, PHOTO_EXTENSION));
            if photo.is_file() {
                return ImageRef::Photo(photo);
            }
        }

        let placeholder = self.photos_dir.join(PLACEHOLDER_FILE);
        if placeholder.is_file() {
            ImageRef::Placeholder(placeholder)
        } else {
            ImageRef::Blank
        }
    }
}

// Ids come from user-edited sheets; keep them from walking out of the photo dir.
fn is_plain_file_stem(id: &str) -> bool {
    !id.is_empty() && !id.contains(['/', '\\']) && id != "." && id != ".."
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("quote-quiz-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_directory_is_blank() {
        let resolver = AssetResolver::new("/nonexistent/quote-quiz/photos");
        assert_eq!(resolver.resolve_image("p1"), ImageRef::Blank);
        assert_eq!(ImageRef::Blank.label(), None);
    }

    #[test]
    fn test_photo_then_placeholder() {
        let dir = scratch_dir("assets");
        fs::write(dir.join("p1.jpg"), b"jpg").unwrap();
        let resolver = AssetResolver::new(&dir);

        assert_eq!(resolver.resolve_image("p1"), ImageRef::Photo(dir.join("p1.jpg")));
        assert_eq!(resolver.resolve_image("p2"), ImageRef::Blank);

        fs::write(dir.join(PLACEHOLDER_FILE), b"jpg").unwrap();
        let placeholder = resolver.resolve_image("p2");
        assert_eq!(placeholder, ImageRef::Placeholder(dir.join(PLACEHOLDER_FILE)));
        assert_eq!(placeholder.label().as_deref(), Some("default.jpg"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_path_like_ids_fall_back() {
        let resolver = AssetResolver::new("/nonexistent");
        assert_eq!(resolver.resolve_image("../etc/passwd"), ImageRef::Blank);
        assert!(!is_plain_file_stem(".."));
        assert!(!is_plain_file_stem("a/b"));
        assert!(is_plain_file_stem("p1"));
    }
}
