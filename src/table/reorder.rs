//! Row Reordering
//!
//! In-memory moves for drag-and-drop. Nothing here is persisted.

use crate::models::Entity;

/// Move the element at `from` to `to`, shifting the elements in between by
/// one. Out-of-range indices leave the slice untouched.
pub fn array_move<T>(items: &mut [T], from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else {
        items[to..=from].rotate_right(1);
    }
}

/// Move the row `active` to the position of row `over`, both by id.
/// Returns false when either id is not loaded.
pub fn move_by_id<R: Entity>(rows: &mut [R], active: R::Id, over: R::Id) -> bool {
    let from = rows.iter().position(|r| r.id() == active);
    let to = rows.iter().position(|r| r.id() == over);
    match (from, to) {
        (Some(from), Some(to)) => {
            array_move(rows, from, to);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Apartment;

    fn apartments(ids: &[i64]) -> Vec<Apartment> {
        ids.iter()
            .map(|id| Apartment {
                id: *id,
                name: format!("A{}", id),
                area: None,
            })
            .collect()
    }

    fn ids(rows: &[Apartment]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_move_down_shifts_left() {
        let mut v = vec!['a', 'b', 'c', 'd', 'e'];
        array_move(&mut v, 1, 3);
        assert_eq!(v, vec!['a', 'c', 'd', 'b', 'e']);
    }

    #[test]
    fn test_move_up_shifts_right() {
        let mut v = vec!['a', 'b', 'c', 'd', 'e'];
        array_move(&mut v, 4, 0);
        assert_eq!(v, vec!['e', 'a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_move_out_of_range_is_noop() {
        let mut v = vec![1, 2, 3];
        array_move(&mut v, 0, 3);
        array_move(&mut v, 5, 1);
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn test_every_forward_move() {
        for i in 0..6usize {
            for j in (i + 1)..6usize {
                let mut v: Vec<usize> = (0..6).collect();
                array_move(&mut v, i, j);
                assert_eq!(v[j], i);
                for k in i..j {
                    assert_eq!(v[k], k + 1);
                }
                assert_eq!(v.len(), 6);
            }
        }
    }

    #[test]
    fn test_move_by_id_uses_identity() {
        let mut rows = apartments(&[10, 20, 30, 40]);
        assert!(move_by_id(&mut rows, 20, 40));
        assert_eq!(ids(&rows), vec![10, 30, 40, 20]);
        assert!(!move_by_id(&mut rows, 99, 10));
        assert_eq!(ids(&rows), vec![10, 30, 40, 20]);
    }
}
