//! Property tests over random grids

use proptest::prelude::*;

use life_census::catalogue::Catalogue;
use life_census::census::{count_others, take_census, Classifier};
use life_census::core::types::Cell;
use life_census::grid::{evolve_into, live_neighbors, CellGrid, Grid, VisitedMask};

fn arb_grid() -> impl Strategy<Value = CellGrid> {
    (1usize..14).prop_flat_map(|size| {
        prop::collection::vec(prop::bool::weighted(0.3), size * size).prop_map(move |cells| {
            let mut grid = Grid::square(size);
            for (i, alive) in cells.into_iter().enumerate() {
                grid.set(i / size, i % size, Cell::from(alive));
            }
            grid
        })
    })
}

proptest! {
    #[test]
    fn neighbour_count_in_range(grid in arb_grid()) {
        for row in 0..grid.height {
            for col in 0..grid.width {
                prop_assert!(live_neighbors(&grid, row, col) <= 8);
            }
        }
    }

    #[test]
    fn every_live_cell_ends_visited(grid in arb_grid()) {
        let catalogue = Catalogue::full().unwrap();
        let mut visited: VisitedMask = Grid::square(grid.width);
        Classifier::new(&catalogue).classify_all(&grid, &mut visited);
        count_others(&grid, &mut visited);
        for (row, col) in grid.live_cells() {
            prop_assert_eq!(visited.get(row, col), Some(&true));
        }
    }

    #[test]
    fn isolated_subset_only_prunes(grid in arb_grid()) {
        // Scanning every variant at every anchor must agree with the pruned scan
        let catalogue = Catalogue::full().unwrap();
        let census = take_census(&grid, &catalogue);

        let mut visited: VisitedMask = Grid::square(grid.width);
        let mut brute = Vec::new();
        for row in 0..grid.height {
            for col in 0..grid.width {
                if visited.get(row, col) == Some(&true) {
                    continue;
                }
                let hit = catalogue
                    .variants()
                    .find(|v| life_census::census::matches_at(&grid, &v.pattern, row, col));
                if let Some(variant) = hit {
                    for r in 0..variant.pattern.height() {
                        for c in 0..variant.pattern.width() {
                            visited.set(row + r, col + c, true);
                        }
                    }
                    brute.push((variant.form, row, col));
                }
            }
        }

        let pruned: Vec<_> = census.classified.iter().map(|c| (c.form, c.row, c.col)).collect();
        prop_assert_eq!(pruned, brute);
    }

    #[test]
    fn parallel_evolution_matches_sequential(grid in arb_grid()) {
        let mut sequential = Grid::square(grid.width);
        let mut parallel = Grid::square(grid.width);
        evolve_into(&grid, &mut sequential, usize::MAX);
        evolve_into(&grid, &mut parallel, 0);
        prop_assert_eq!(sequential, parallel);
    }
}
