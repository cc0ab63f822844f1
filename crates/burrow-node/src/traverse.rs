//! Walking a chain of nodes.
//!
//! [`traverse`] is lazy and unguarded: a chain whose links loop back on
//! themselves yields addresses forever. Use [`collect_list`] when the chain
//! might be malformed; it remembers every node it has seen and fails with
//! [`ArenaError::CycleDetected`] instead of looping.

use std::iter::FusedIterator;

use burrow_arena::Arena;
use burrow_core::{Address, ArenaError};
use indexmap::IndexSet;

use crate::store;

/// Lazy iterator over the node addresses of a list.
///
/// Each step validates the current pointer, yields it, then follows its
/// `next` link. The first invalid pointer is yielded as an error and ends
/// the iteration.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Traverse<'a> {
    arena: &'a Arena,
    cursor: Option<Address>,
}

/// Iterate over the list starting at `head`.
///
/// Every call starts fresh from `head`; the iterator holds no state in the
/// arena. `None` produces an empty iteration.
pub fn traverse(arena: &Arena, head: Option<Address>) -> Traverse<'_> {
    Traverse { arena, cursor: head }
}

impl Iterator for Traverse<'_> {
    type Item = Result<Address, ArenaError>;

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = self.cursor.take()?;
        match store::next(self.arena, ptr) {
            Ok(link) => {
                self.cursor = link;
                Some(Ok(ptr))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

impl FusedIterator for Traverse<'_> {}

/// Collect the node addresses of a list, in order, refusing cycles.
///
/// # Errors
///
/// - [`ArenaError::InvalidPointer`] if any link names an unallocated record.
/// - [`ArenaError::CycleDetected`] if a node is reached twice.
pub fn collect_list(arena: &Arena, head: Option<Address>) -> Result<Vec<Address>, ArenaError> {
    let mut seen = IndexSet::new();
    for ptr in traverse(arena, head) {
        let ptr = ptr?;
        if !seen.insert(ptr) {
            return Err(ArenaError::CycleDetected {
                at: ptr,
                visited: seen.len(),
            });
        }
    }
    Ok(seen.into_iter().collect())
}

/// Collect the values of a list, in order, refusing cycles.
pub fn values(arena: &Arena, head: Option<Address>) -> Result<Vec<i32>, ArenaError> {
    collect_list(arena, head)?
        .into_iter()
        .map(|ptr| store::value(arena, ptr))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::check_node_pointer;
    use crate::store::{build_list, create_node, set_next, value};

    fn arena() -> Arena {
        Arena::new(256).unwrap()
    }

    #[test]
    fn three_nodes_built_tail_first_traverse_in_order() {
        let mut arena = arena();
        let n3 = create_node(&mut arena, 30, None).unwrap();
        let n2 = create_node(&mut arena, 20, Some(n3)).unwrap();
        let n1 = create_node(&mut arena, 10, Some(n2)).unwrap();

        let addrs: Vec<Address> = traverse(&arena, Some(n1))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(addrs, vec![n1, n2, n3]);

        let vals: Vec<i32> = addrs.iter().map(|&p| value(&arena, p).unwrap()).collect();
        assert_eq!(vals, vec![10, 20, 30]);
    }

    #[test]
    fn empty_list_yields_nothing() {
        let arena = arena();
        assert_eq!(traverse(&arena, None).count(), 0);
        assert_eq!(values(&arena, None).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn traversal_is_restartable_from_head() {
        let mut arena = arena();
        let head = build_list(&mut arena, &[1, 2]).unwrap();
        assert_eq!(traverse(&arena, head).count(), 2);
        assert_eq!(traverse(&arena, head).count(), 2);
    }

    #[test]
    fn invalid_head_yields_single_error() {
        let mut arena = arena();
        arena.alloc(4).unwrap();
        let mut it = traverse(&arena, Some(Address(0)));
        assert!(matches!(
            it.next(),
            Some(Err(ArenaError::InvalidPointer { pointer: 0, .. }))
        ));
        assert!(it.next().is_none());
    }

    #[test]
    fn traversal_error_is_the_pointer_check_error() {
        let mut arena = arena();
        let a = create_node(&mut arena, 1, Some(Address(12))).unwrap();
        let expected = check_node_pointer(&arena, Some(Address(12))).unwrap_err();
        let items: Vec<_> = traverse(&arena, Some(a)).collect();
        assert_eq!(items, vec![Ok(a), Err(expected)]);
    }

    #[test]
    fn dangling_link_stops_after_valid_prefix() {
        let mut arena = arena();
        let a = create_node(&mut arena, 1, Some(Address(200))).unwrap();
        let items: Vec<_> = traverse(&arena, Some(a)).collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Ok(a));
        assert!(matches!(
            items[1],
            Err(ArenaError::InvalidPointer { pointer: 200, .. })
        ));
    }

    #[test]
    fn unguarded_traversal_of_cycle_never_ends() {
        let mut arena = arena();
        let a = create_node(&mut arena, 1, None).unwrap();
        let b = create_node(&mut arena, 2, Some(a)).unwrap();
        set_next(&mut arena, a, Some(b)).unwrap();
        let walked: Vec<_> = traverse(&arena, Some(a)).take(10).collect();
        assert_eq!(walked.len(), 10);
        assert!(walked.iter().all(Result::is_ok));
    }

    #[test]
    fn collect_list_detects_cycle() {
        let mut arena = arena();
        let head = build_list(&mut arena, &[1, 2, 3]).unwrap().unwrap();
        let last = *collect_list(&arena, Some(head)).unwrap().last().unwrap();
        set_next(&mut arena, last, Some(head)).unwrap();
        assert_eq!(
            collect_list(&arena, Some(head)).unwrap_err(),
            ArenaError::CycleDetected {
                at: head,
                visited: 3,
            }
        );
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let mut arena = arena();
        let a = create_node(&mut arena, 5, None).unwrap();
        set_next(&mut arena, a, Some(a)).unwrap();
        assert!(matches!(
            values(&arena, Some(a)),
            Err(ArenaError::CycleDetected { visited: 1, .. })
        ));
    }

    #[test]
    fn values_reads_list_in_order() {
        let mut arena = arena();
        let head = build_list(&mut arena, &[7, -3, 0, i32::MAX]).unwrap();
        assert_eq!(values(&arena, head).unwrap(), vec![7, -3, 0, i32::MAX]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn built_lists_read_back_in_order(
                vals in proptest::collection::vec(any::<i32>(), 0..32),
            ) {
                let mut arena = arena();
                let head = build_list(&mut arena, &vals).unwrap();
                prop_assert_eq!(values(&arena, head).unwrap(), vals.clone());
                prop_assert_eq!(traverse(&arena, head).count(), vals.len());
                prop_assert_eq!(arena.offset(), vals.len() * crate::NODE_SIZE);
            }
        }
    }
}
