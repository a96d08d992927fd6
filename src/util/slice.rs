// Set-like helpers over plain slices
//
// Every helper borrows its input and returns a fresh Vec, so callers can
// compare the old and new sequences afterwards.

/// Index of the first element equal to `candidate`
pub fn contains<T: PartialEq>(items: &[T], candidate: &T) -> Option<usize> {
    contains_by(items, candidate, |a, b| a == b)
}

/// Like [`contains`], using an explicit equality function
pub fn contains_by<T, F>(items: &[T], candidate: &T, eq: F) -> Option<usize>
where
    F: Fn(&T, &T) -> bool,
{
    items.iter().position(|item| eq(item, candidate))
}

/// Copy of `items` with `candidate` appended, unless an equal element is already present
pub fn append_if_missing<T: PartialEq + Clone>(items: &[T], candidate: T) -> Vec<T> {
    append_if_missing_by(items, candidate, |a, b| a == b)
}

pub fn append_if_missing_by<T, F>(items: &[T], candidate: T, eq: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut result = items.to_vec();
    if contains_by(items, &candidate, eq).is_none() {
        result.push(candidate);
    }
    result
}

/// Copy of `items` without the first element equal to `candidate`.
///
/// The remaining elements keep their relative order.
pub fn remove_if_present<T: PartialEq + Clone>(items: &[T], candidate: &T) -> Vec<T> {
    remove_if_present_by(items, candidate, |a, b| a == b)
}

pub fn remove_if_present_by<T, F>(items: &[T], candidate: &T, eq: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut result = items.to_vec();
    if let Some(index) = contains_by(items, candidate, eq) {
        result.remove(index);
    }
    result
}

/// Copy of `items` without the first element equal to `candidate`, filling
/// the gap with the last element instead of shifting the tail.
pub fn swap_remove_if_present<T: PartialEq + Clone>(items: &[T], candidate: &T) -> Vec<T> {
    let mut result = items.to_vec();
    if let Some(index) = contains(items, candidate) {
        result.swap_remove(index);
    }
    result
}

// Extension trait so the helpers read as methods on slices and Vecs
pub trait SliceSetExt<T> {
    fn find_equal(&self, candidate: &T) -> Option<usize>;
    fn with_appended(&self, candidate: T) -> Vec<T>;
    fn without(&self, candidate: &T) -> Vec<T>;
}

impl<T: PartialEq + Clone> SliceSetExt<T> for [T] {
    fn find_equal(&self, candidate: &T) -> Option<usize> {
        contains(self, candidate)
    }

    fn with_appended(&self, candidate: T) -> Vec<T> {
        append_if_missing(self, candidate)
    }

    fn without(&self, candidate: &T) -> Vec<T> {
        remove_if_present(self, candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        foobar: bool,
        list: Vec<String>,
    }

    fn entry(foobar: bool, list: &[&str]) -> Entry {
        Entry {
            foobar,
            list: list.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn entries() -> Vec<Entry> {
        vec![
            entry(false, &["hello", "world"]),
            entry(true, &["best", "line", "on", "the", "citadel"]),
            entry(true, &["I", "gotta", "go"]),
        ]
    }

    #[test]
    fn test_contains_scalar() {
        let items = vec![1, 2, 3, 4, 5];
        assert_eq!(contains(&items, &2), Some(1));
        assert_eq!(contains(&items, &10), None);
    }

    #[test]
    fn test_contains_struct() {
        let items = entries();
        assert_eq!(contains(&items, &entry(true, &["I", "gotta", "go"])), Some(2));
        assert_eq!(contains(&items, &entry(false, &[])), None);
    }

    #[test]
    fn test_contains_empty() {
        let items: Vec<i32> = Vec::new();
        assert_eq!(contains(&items, &0), None);
    }

    #[test]
    fn test_contains_returns_first_match() {
        assert_eq!(contains(&[7, 3, 7], &7), Some(0));
    }

    #[test]
    fn test_contains_by_custom_equality() {
        let items = vec!["Role", "Alphabet"];
        let found = contains_by(&items, &"alphabet", |a, b| a.eq_ignore_ascii_case(b));
        assert_eq!(found, Some(1));
    }

    #[test]
    fn test_append_if_missing_scalar() {
        let items = vec![1, 2, 3, 4, 5];
        assert_eq!(append_if_missing(&items, 3), items);
        assert_eq!(append_if_missing(&items, 6), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_append_if_missing_struct() {
        let items = entries()[..2].to_vec();
        assert_eq!(append_if_missing(&items, entry(false, &["hello", "world"])), items);
        assert_eq!(append_if_missing(&items, entry(true, &["I", "gotta", "go"])), entries());
    }

    #[test]
    fn test_remove_if_present_scalar() {
        let items = vec![1, 2, 3, 4, 5];
        assert_eq!(remove_if_present(&items, &10), items);
        assert_eq!(remove_if_present(&items, &3), vec![1, 2, 4, 5]);
        assert!(remove_if_present(&Vec::<i32>::new(), &0).is_empty());
        assert!(remove_if_present(&[1], &1).is_empty());
    }

    #[test]
    fn test_remove_if_present_struct() {
        let items = entries();
        assert_eq!(remove_if_present(&items, &entry(false, &[])), items);
        assert_eq!(
            remove_if_present(&items, &entry(false, &["hello", "world"])),
            vec![
                entry(true, &["best", "line", "on", "the", "citadel"]),
                entry(true, &["I", "gotta", "go"]),
            ]
        );
    }

    #[test]
    fn test_remove_if_present_only_first_occurrence() {
        assert_eq!(remove_if_present(&[1, 2, 1], &1), vec![2, 1]);
    }

    #[test]
    fn test_swap_remove_if_present() {
        let items = vec![1, 2, 3, 4, 5];
        assert_eq!(swap_remove_if_present(&items, &3), vec![1, 2, 5, 4]);
        assert_eq!(swap_remove_if_present(&items, &10), items);

        let items = entries();
        assert_eq!(
            swap_remove_if_present(&items, &entry(false, &["hello", "world"])),
            vec![
                entry(true, &["I", "gotta", "go"]),
                entry(true, &["best", "line", "on", "the", "citadel"]),
            ]
        );
    }

    #[test]
    fn test_slice_ext() {
        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!(items.find_equal(&"b".to_string()), Some(1));
        assert_eq!(items.with_appended("c".to_string()).len(), 3);
        assert_eq!(items.without(&"a".to_string()), vec!["b".to_string()]);
    }
}
