//! The ordered list of accepted files and its removal semantics.

use serde::{Deserialize, Serialize};

use crate::batch::AcceptedFile;

/// Ordered collection of accepted files held by the widget.
///
/// Removal keeps the observable contract of the remove capability: a
/// missing or zero index clears the whole list, so the first entry
/// only ever leaves through a clear or a batch replacement. Mutating
/// operations return the displaced entries so the caller can release
/// their preview handles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileList(Vec<AcceptedFile>);

impl FileList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns `true` if the list holds no files.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of files in the list.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the file at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&AcceptedFile> {
        self.0.get(index)
    }

    /// Returns a slice of all files in order.
    #[must_use]
    pub fn as_slice(&self) -> &[AcceptedFile] {
        &self.0
    }

    /// Iterate over the files in order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, AcceptedFile> {
        self.0.iter()
    }

    /// Consumes the list and returns the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<AcceptedFile> {
        self.0
    }

    /// Replace the whole list with a resolved batch's files.
    ///
    /// Returns the displaced entries; their preview handles are now
    /// unreferenced and should be revoked.
    pub fn replace(&mut self, files: Vec<AcceptedFile>) -> Vec<AcceptedFile> {
        std::mem::replace(&mut self.0, files)
    }

    /// Apply the remove capability.
    ///
    /// `None` or `Some(0)` clears the whole list. `Some(i)` with
    /// `1 <= i < len` removes exactly the file at position `i`. An
    /// out-of-range positive index is a no-op. Clearing an already
    /// empty list is a no-op, so clears are idempotent.
    ///
    /// Returns the removed entries; their preview handles are now
    /// unreferenced and should be revoked.
    pub fn remove(&mut self, index: Option<usize>) -> Vec<AcceptedFile> {
        match index {
            None | Some(0) => std::mem::take(&mut self.0),
            Some(i) if i < self.0.len() => vec![self.0.remove(i)],
            Some(_) => Vec::new(),
        }
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a AcceptedFile;
    type IntoIter = std::slice::Iter<'a, AcceptedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn file(name: &str) -> AcceptedFile {
        AcceptedFile {
            preview_url: format!("blob:{name}"),
            encoded_content: format!("data:text/plain;base64,{name}"),
            mime_type: "text/plain".to_owned(),
            name: name.to_owned(),
            size_bytes: 1,
        }
    }

    fn list_of(names: &[&str]) -> FileList {
        let mut list = FileList::new();
        list.replace(names.iter().map(|name| file(name)).collect());
        list
    }

    fn names(list: &FileList) -> Vec<&str> {
        list.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn new_list_is_empty() {
        let list = FileList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.get(0).is_none());
    }

    #[test]
    fn replace_returns_displaced_entries() {
        let mut list = list_of(&["a", "b"]);
        let displaced = list.replace(vec![file("c")]);
        assert_eq!(names(&list), ["c"]);
        assert_eq!(displaced.len(), 2);
        assert_eq!(displaced[0].name, "a");
        assert_eq!(displaced[1].name, "b");
    }

    #[test]
    fn replace_with_empty_clears() {
        let mut list = list_of(&["a"]);
        let displaced = list.replace(Vec::new());
        assert!(list.is_empty());
        assert_eq!(displaced.len(), 1);
    }

    #[test]
    fn remove_none_clears_everything() {
        let mut list = list_of(&["a", "b", "c"]);
        let removed = list.remove(None);
        assert!(list.is_empty());
        assert_eq!(removed.len(), 3);
    }

    #[test]
    fn remove_zero_clears_everything() {
        let mut list = list_of(&["a", "b", "c"]);
        let removed = list.remove(Some(0));
        assert!(list.is_empty());
        assert_eq!(removed.len(), 3);
    }

    #[test]
    fn remove_positive_index_removes_exactly_one() {
        let mut list = list_of(&["a", "b", "c"]);
        let removed = list.remove(Some(1));
        assert_eq!(names(&list), ["a", "c"]);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].name, "b");
    }

    #[test]
    fn remove_last_index() {
        let mut list = list_of(&["a", "b", "c"]);
        let removed = list.remove(Some(2));
        assert_eq!(names(&list), ["a", "b"]);
        assert_eq!(removed[0].name, "c");
    }

    #[test]
    fn remove_out_of_range_is_a_no_op() {
        let mut list = list_of(&["a", "b"]);
        let removed = list.remove(Some(5));
        assert_eq!(names(&list), ["a", "b"]);
        assert!(removed.is_empty());
    }

    #[test]
    fn clearing_twice_is_idempotent() {
        let mut list = list_of(&["a"]);
        assert_eq!(list.remove(None).len(), 1);
        assert!(list.remove(None).is_empty());
        assert!(list.is_empty());
    }

    #[test]
    fn first_entry_survives_positive_index_removals() {
        // Index 0 doubles as the clear index, so position 0 cannot be
        // removed on its own.
        let mut list = list_of(&["keep", "drop"]);
        list.remove(Some(1));
        assert_eq!(names(&list), ["keep"]);
    }

    #[test]
    fn list_serde_round_trip() {
        let list = list_of(&["a", "b"]);
        let json = serde_json::to_string(&list).unwrap();
        let back: FileList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
