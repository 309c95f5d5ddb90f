use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::*;

/// Picks the categories for a new board.
///
/// The pool is shuffled first and filtered afterwards, so every qualifying category has the same chance of landing
/// in any column. Categories with fewer than [`MIN_CLUES_PER_CATEGORY`] clues are skipped and at most
/// [`BOARD_COLUMNS`] are returned. A pool without enough qualifying entries yields a shorter selection instead of an
/// error. Duplicate entries are kept as given.
pub fn select_categories<R: Rng + ?Sized>(
    pool: &[CategorySummary],
    rng: &mut R,
) -> Vec<CategorySummary> {
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);

    let selected: Vec<_> = shuffled
        .into_iter()
        .filter(CategorySummary::has_enough_clues)
        .take(BOARD_COLUMNS.into())
        .collect();

    if selected.len() < usize::from(BOARD_COLUMNS) {
        log::warn!(
            "Only {} of {} categories qualify, board will have {} columns",
            selected.len(),
            pool.len(),
            selected.len()
        );
    }
    selected
}

pub fn selected_ids(selection: &[CategorySummary]) -> Vec<CategoryId> {
    selection.iter().map(|summary| summary.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use alloc::format;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn pool(clue_counts: &[u32]) -> Vec<CategorySummary> {
        clue_counts
            .iter()
            .enumerate()
            .map(|(i, &count)| CategorySummary::new(i as u64, format!("cat {}", i), count))
            .collect()
    }

    #[test]
    fn selects_six_qualifying_categories_from_pool() {
        let pool = pool(&[5, 1, 9, 12, 0, 6, 5, 4, 30, 7, 2, 5]);

        for seed in 0..32 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let selected = select_categories(&pool, &mut rng);

            assert_eq!(selected.len(), 6);
            assert!(selected.iter().all(|summary| summary.clue_count >= 5));
            assert!(selected.iter().all(|summary| pool.contains(summary)));

            let ids: BTreeSet<_> = selected.iter().map(|summary| summary.id).collect();
            assert_eq!(ids.len(), 6);
        }
    }

    #[test]
    fn short_pool_yields_short_selection() {
        let pool = pool(&[5, 1, 8, 2, 10]);
        let mut rng = SmallRng::seed_from_u64(7);

        let selected = select_categories(&pool, &mut rng);

        assert_eq!(selected.len(), 3);
        let ids: BTreeSet<_> = selected_ids(&selected).into_iter().collect();
        assert_eq!(ids, BTreeSet::from([CategoryId(0), CategoryId(2), CategoryId(4)]));
    }

    #[test]
    fn empty_pool_yields_empty_selection() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(select_categories(&[], &mut rng).is_empty());
    }

    #[test]
    fn duplicates_are_not_removed() {
        let summary = CategorySummary::new(42, "same", 5);
        let pool = alloc::vec![summary.clone(); 8];
        let mut rng = SmallRng::seed_from_u64(3);

        let selected = select_categories(&pool, &mut rng);

        assert_eq!(selected, alloc::vec![summary; 6]);
    }

    #[test]
    fn order_varies_with_randomness() {
        let pool = pool(&[5; 12]);
        let orders: BTreeSet<_> = (0..16)
            .map(|seed| {
                let mut rng = SmallRng::seed_from_u64(seed);
                selected_ids(&select_categories(&pool, &mut rng))
            })
            .collect();

        assert!(orders.len() > 1);
    }
}
