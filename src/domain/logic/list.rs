//! The list edit algebra: pure copy-then-replace operations.
//!
//! Every function takes the current list by reference and returns a fully
//! new list, mirroring the clone-splice-replace pattern the editor uses.
//! Nothing here mutates shared state; the caller decides what to do with
//! the replacement.

use crate::ports::IdMinter;

use super::errors::LogicError;
use super::item::LogicItem;

/// Returns a copy of `list` with `item` appended.
pub fn appended(list: &[LogicItem], item: LogicItem) -> Vec<LogicItem> {
    let mut copy = list.to_vec();
    copy.push(item);
    copy
}

/// Returns a copy of `list` with the item at `idx` removed.
pub fn removed(list: &[LogicItem], idx: usize) -> Result<Vec<LogicItem>, LogicError> {
    LogicError::check_index(idx, list.len())?;
    let mut copy = list.to_vec();
    copy.remove(idx);
    Ok(copy)
}

/// Returns a copy of `list` with the item at `idx` deep-duplicated into
/// `idx + 1`. The duplicate carries fresh ids throughout.
pub fn duplicated(
    list: &[LogicItem],
    idx: usize,
    minter: &dyn IdMinter,
) -> Result<Vec<LogicItem>, LogicError> {
    LogicError::check_index(idx, list.len())?;
    let mut copy = list.to_vec();
    let duplicate = copy[idx].duplicated(minter);
    copy.insert(idx + 1, duplicate);
    Ok(copy)
}

/// Returns a copy of `list` with the item at `from` relocated to `to`.
///
/// Relocation, not swap: the item is removed and reinserted, shifting the
/// items in between. `relocated(list, i, i)` returns an identical list.
pub fn relocated(list: &[LogicItem], from: usize, to: usize) -> Result<Vec<LogicItem>, LogicError> {
    LogicError::check_index(from, list.len())?;
    LogicError::check_index(to, list.len())?;
    let mut copy = list.to_vec();
    let item = copy.remove(from);
    copy.insert(to, item);
    Ok(copy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SequenceMinter;
    use crate::domain::foundation::QuestionId;

    fn list_of(n: usize, minter: &SequenceMinter) -> Vec<LogicItem> {
        (0..n)
            .map(|_| LogicItem::default_for_question(&QuestionId::from("q1"), minter))
            .collect()
    }

    #[test]
    fn relocate_shifts_rather_than_swaps() {
        let minter = SequenceMinter::new("id");
        let list = list_of(4, &minter);
        let ids: Vec<_> = list.iter().map(|i| i.id.clone()).collect();

        let moved = relocated(&list, 0, 2).unwrap();
        let moved_ids: Vec<_> = moved.iter().map(|i| i.id.clone()).collect();

        assert_eq!(
            moved_ids,
            vec![ids[1].clone(), ids[2].clone(), ids[0].clone(), ids[3].clone()]
        );
    }

    #[test]
    fn relocate_to_self_is_a_no_op() {
        let minter = SequenceMinter::new("id");
        let list = list_of(3, &minter);
        assert_eq!(relocated(&list, 1, 1).unwrap(), list);
    }

    #[test]
    fn duplicate_then_delete_restores_the_original() {
        let minter = SequenceMinter::new("id");
        let list = list_of(3, &minter);

        let with_copy = duplicated(&list, 1, &minter).unwrap();
        assert_eq!(with_copy.len(), 4);

        let restored = removed(&with_copy, 2).unwrap();
        assert_eq!(restored, list);
    }

    #[test]
    fn removed_rejects_out_of_bounds() {
        let minter = SequenceMinter::new("id");
        let list = list_of(2, &minter);
        assert_eq!(
            removed(&list, 2),
            Err(LogicError::IndexOutOfBounds { index: 2, len: 2 })
        );
    }
}
