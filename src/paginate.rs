//! Splits the sorted articles into listing pages (`menu_0.html`,
//! `menu_1.html`, ...). Page 0 holds the most recent articles; each page
//! links to its newer neighbour (`index - 1`) and its older neighbour
//! (`index + 1`) when they exist.

use std::num::NonZeroUsize;

/// One chunk of the collection plus its navigation state.
#[derive(Debug)]
pub struct ListingPage<'a, T> {
    /// The 0-based position of the page.
    pub index: usize,

    /// The items on this page, in collection order.
    pub items: &'a [T],

    /// False only for the first page.
    pub has_newer: bool,

    /// False only for the last page.
    pub has_older: bool,
}

impl<T> ListingPage<'_, T> {
    pub fn file_name(&self) -> String {
        file_name(self.index)
    }

    /// The file name of the page holding the next-newer items, if any.
    pub fn newer_file_name(&self) -> Option<String> {
        match self.has_newer {
            true => Some(file_name(self.index - 1)),
            false => None,
        }
    }

    /// The file name of the page holding the next-older items, if any.
    pub fn older_file_name(&self) -> Option<String> {
        match self.has_older {
            true => Some(file_name(self.index + 1)),
            false => None,
        }
    }
}

/// The file name of the listing page at `index`.
pub fn file_name(index: usize) -> String {
    format!("menu_{}.html", index)
}

/// Partitions `items` into consecutive pages of at most `page_size` items.
/// Only the last page may be short. No items means no pages.
pub fn paginate<T>(items: &[T], page_size: NonZeroUsize) -> Vec<ListingPage<'_, T>> {
    let total_pages = items.len().div_ceil(page_size.get());
    items
        .chunks(page_size.get())
        .enumerate()
        .map(|(index, chunk)| ListingPage {
            index,
            items: chunk,
            has_newer: index > 0,
            has_older: index < total_pages - 1,
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_empty() {
        let items: [u32; 0] = [];
        assert!(paginate(&items, size(3)).is_empty());
    }

    #[test]
    fn test_two_full_pages() {
        let items = ["01-04", "01-03", "01-02", "01-01"];
        let pages = paginate(&items, size(2));
        assert_eq!(pages.len(), 2);

        assert_eq!(pages[0].index, 0);
        assert_eq!(pages[0].items, ["01-04", "01-03"]);
        assert!(!pages[0].has_newer);
        assert!(pages[0].has_older);

        assert_eq!(pages[1].index, 1);
        assert_eq!(pages[1].items, ["01-02", "01-01"]);
        assert!(pages[1].has_newer);
        assert!(!pages[1].has_older);
    }

    #[test]
    fn test_single_page_has_no_navigation() {
        let pages = paginate(&[1, 2, 3], size(10));
        assert_eq!(pages.len(), 1);
        assert!(!pages[0].has_newer);
        assert!(!pages[0].has_older);
        assert_eq!(pages[0].newer_file_name(), None);
        assert_eq!(pages[0].older_file_name(), None);
    }

    #[test]
    fn test_navigation_file_names() {
        let pages = paginate(&[1, 2, 3, 4, 5], size(2));
        assert_eq!(pages[0].file_name(), "menu_0.html");
        assert_eq!(pages[0].older_file_name().as_deref(), Some("menu_1.html"));
        assert_eq!(pages[1].newer_file_name().as_deref(), Some("menu_0.html"));
        assert_eq!(pages[1].older_file_name().as_deref(), Some("menu_2.html"));
        assert_eq!(pages[2].newer_file_name().as_deref(), Some("menu_1.html"));
        assert_eq!(pages[2].older_file_name(), None);
    }

    #[test]
    fn test_chunks_partition_the_items() {
        for len in 1..=12 {
            let items: Vec<usize> = (0..len).collect();
            for page_size in 1..=5 {
                let pages = paginate(&items, size(page_size));
                let (last, full) = pages.split_last().unwrap();
                assert!(full.iter().all(|p| p.items.len() == page_size));
                assert!((1..=page_size).contains(&last.items.len()));

                let concatenated: Vec<usize> =
                    pages.iter().flat_map(|p| p.items.iter().copied()).collect();
                assert_eq!(concatenated, items);

                for (i, page) in pages.iter().enumerate() {
                    assert_eq!(page.index, i);
                    assert_eq!(page.has_newer, i != 0);
                    assert_eq!(page.has_older, i != pages.len() - 1);
                }
            }
        }
    }
}
