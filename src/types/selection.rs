use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Image paths chosen for conversion, in the order they were picked, along
/// with the rows highlighted in the list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageSelection {
    paths: Vec<PathBuf>,
    highlighted: BTreeSet<usize>,
}

impl ImageSelection {
    /// Swaps in a new set of images. Highlighted rows refer to the old list,
    /// so they are dropped too.
    pub fn replace(&mut self, paths: Vec<PathBuf>) {
        self.paths = paths;
        self.highlighted.clear();
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Base names shown in the list.
    pub fn display_names(&self) -> Vec<String> {
        self.paths
            .iter()
            .map(|path| {
                path.file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string())
            })
            .collect()
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.contains(&index)
    }

    pub fn toggle_highlight(&mut self, index: usize) {
        if index >= self.paths.len() {
            return;
        }
        if !self.highlighted.remove(&index) {
            self.highlighted.insert(index);
        }
    }

    /// First highlighted row, if any.
    pub fn first_highlighted(&self) -> Option<usize> {
        self.highlighted.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_replace_discards_previous_selection() {
        let mut selection = ImageSelection::default();
        selection.replace(paths(&["/a/one.png", "/a/two.jpg"]));
        selection.replace(paths(&["/b/three.jpeg", "/b/four.png", "/b/five.png"]));

        assert_eq!(selection.len(), 3);
        assert_eq!(
            selection.display_names(),
            vec!["three.jpeg", "four.png", "five.png"]
        );
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let mut selection = ImageSelection::default();
        selection.replace(paths(&["/x/a.png", "/y/b.png", "/x/a.png"]));
        assert_eq!(selection.display_names(), vec!["a.png", "b.png", "a.png"]);
    }

    #[test]
    fn test_highlight_cleared_on_replace() {
        let mut selection = ImageSelection::default();
        selection.replace(paths(&["a.png", "b.png"]));
        selection.toggle_highlight(1);
        assert_eq!(selection.first_highlighted(), Some(1));

        selection.replace(paths(&["c.png"]));
        assert_eq!(selection.first_highlighted(), None);
    }

    #[test]
    fn test_first_highlighted_is_lowest_row() {
        let mut selection = ImageSelection::default();
        selection.replace(paths(&["a.png", "b.png", "c.png"]));
        selection.toggle_highlight(2);
        selection.toggle_highlight(0);
        assert_eq!(selection.first_highlighted(), Some(0));

        selection.toggle_highlight(0);
        assert_eq!(selection.first_highlighted(), Some(2));
    }

    #[test]
    fn test_out_of_range_highlight_is_ignored() {
        let mut selection = ImageSelection::default();
        selection.toggle_highlight(0);
        assert_eq!(selection.first_highlighted(), None);
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_image(Path::new("photo.JPG")));
        assert!(is_supported_image(Path::new("scan.png")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }
}
