use minefield::{Minefield, RevealResult, FIELD_HEIGHT, FIELD_WIDTH};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

const CELLS: usize = FIELD_WIDTH * FIELD_HEIGHT;

fn random_field(seed: u64, mines: usize) -> Minefield {
    Minefield::with_rng(FIELD_WIDTH, FIELD_HEIGHT, mines, SmallRng::seed_from_u64(seed)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placement_matches_requested_count(seed in any::<u64>(), mines in 0..CELLS) {
        let field = random_field(seed, mines);
        prop_assert_eq!(field.mine_count(), mines);
        prop_assert_eq!(field.cells().filter(|(_, c)| c.is_mined).count(), mines);
    }

    #[test]
    fn counts_match_neighbourhood(seed in any::<u64>(), mines in 0..40usize) {
        let field = random_field(seed, mines);
        for (pos, cell) in field.cells() {
            if cell.is_mined {
                continue;
            }
            let expected = field
                .neighbors(pos)
                .filter(|&(r, c)| field.cell(r, c).unwrap().is_mined)
                .count();
            prop_assert_eq!(cell.adjacent_mines as usize, expected);
        }
    }

    #[test]
    fn first_reveal_never_loses(seed in any::<u64>(), mines in 1..80usize, pick in any::<prop::sample::Index>()) {
        let mut field = random_field(seed, mines);
        let before = field.mines();
        let target = before.iter_set_bits().nth(pick.index(mines)).unwrap();

        let result = field.reveal_cell(target.0, target.1, true).unwrap();
        prop_assert_eq!(result, RevealResult::Safe);

        let after = field.mines();
        prop_assert_eq!(after.count_ones(), mines);
        prop_assert!(!after.get(target.0, target.1).unwrap());
        // exactly one new mine, on a previously free cell
        let added: Vec<_> = (after & !before).iter_set_bits().collect();
        let removed: Vec<_> = (before & !after).iter_set_bits().collect();
        prop_assert_eq!(added.len(), 1);
        prop_assert_eq!(removed, vec![target]);
        prop_assert!(field.cell(target.0, target.1).unwrap().is_explored);
    }

    #[test]
    fn flood_fill_is_bounded_by_numbers(seed in any::<u64>(), mines in 1..30usize, pick in any::<prop::sample::Index>()) {
        let mut field = random_field(seed, mines);
        let safe: Vec<_> = field.cells().filter(|(_, c)| !c.is_mined).map(|(p, _)| p).collect();
        let start = safe[pick.index(safe.len())];
        prop_assert_eq!(field.reveal_cell(start.0, start.1, false).unwrap(), RevealResult::Safe);

        for (pos, cell) in field.cells() {
            if !cell.is_explored {
                continue;
            }
            prop_assert!(!cell.is_mined);
            // a revealed blank spreads to all of its neighbours
            if cell.adjacent_mines == 0 {
                for (r, c) in field.neighbors(pos) {
                    prop_assert!(field.cell(r, c).unwrap().is_explored);
                }
            }
            // everything but the start was reached through a revealed blank
            if pos != start {
                let reached = field.neighbors(pos).any(|(r, c)| {
                    let n = field.cell(r, c).unwrap();
                    n.is_explored && n.adjacent_mines == 0
                });
                prop_assert!(reached);
            }
        }
    }

    #[test]
    fn detonation_is_side_effect_free(seed in any::<u64>(), mines in 1..80usize, pick in any::<prop::sample::Index>()) {
        let mut field = random_field(seed, mines);
        let target = field.mines().iter_set_bits().nth(pick.index(mines)).unwrap();
        let explored = field.explored();
        let layout = field.mines();

        prop_assert_eq!(field.reveal_cell(target.0, target.1, false).unwrap(), RevealResult::Detonated);
        prop_assert_eq!(field.explored(), explored);
        prop_assert_eq!(field.mines(), layout);
    }

    #[test]
    fn double_mark_is_identity(seed in any::<u64>(), mines in 0..80usize, row in 0..FIELD_HEIGHT, col in 0..FIELD_WIDTH) {
        let mut field = random_field(seed, mines);
        let before = field.cell(row, col).unwrap();
        field.mark_cell(row, col).unwrap();
        prop_assert_ne!(field.cell(row, col).unwrap().is_marked, before.is_marked);
        field.mark_cell(row, col).unwrap();
        prop_assert_eq!(field.cell(row, col).unwrap(), before);
    }

    #[test]
    fn marking_exactly_the_mines_wins(seed in any::<u64>(), mines in 1..80usize) {
        let mut field = random_field(seed, mines);
        let layout: Vec<_> = field.mines().iter_set_bits().collect();
        for &(r, c) in &layout {
            prop_assert!(!field.check_win());
            field.mark_cell(r, c).unwrap();
        }
        prop_assert!(field.check_win());
    }
}
