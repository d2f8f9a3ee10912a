//! This module contains the logic for solving Sudoku.
//!
//! Most importantly, this module contains the definition of the
//! [Solver](trait.Solver.html) trait and the
//! [BacktrackingSolver](struct.BacktrackingSolver.html) as a generally usable
//! implementation.

use crate::{Sudoku, SudokuGrid};
use crate::constraint::Constraint;

/// An enumeration of the possible outcomes of solving a Sudoku. A Sudoku
/// either has a solution, in which case the first one found by the solver is
/// reported, or it has none at all.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the Sudoku is not solveable at all.
    Impossible,

    /// Indicates that the Sudoku has a solution, which is wrapped in this
    /// instance.
    Found(SudokuGrid)
}

impl Solution {

    /// Indicates whether this solution is a `Solution::Found` variant.
    pub fn is_found(&self) -> bool {
        match self {
            Solution::Found(_) => true,
            Solution::Impossible => false
        }
    }

    /// Gets the solved grid wrapped in this solution, or `None` if the Sudoku
    /// was impossible.
    pub fn grid(&self) -> Option<&SudokuGrid> {
        match self {
            Solution::Found(grid) => Some(grid),
            Solution::Impossible => None
        }
    }
}

/// A trait for structs which have the ability to solve Sudoku. Implementers
/// receive the puzzle together with its constraint and report either a grid
/// which fulfills that constraint or that no such grid exists.
pub trait Solver {

    /// Solves, or attempts to solve, the provided Sudoku. If a solution is
    /// found, it shall be a full grid which contains all clues of the input
    /// and fulfills the input's constraint. Otherwise,
    /// `Solution::Impossible` shall be returned.
    fn solve(&self, sudoku: &Sudoku<impl Constraint + Clone>) -> Solution;
}

/// A [Solver](trait.Solver.html) which solves Sudoku by recursively testing
/// all valid numbers for each empty cell, undoing the assignment whenever the
/// remaining grid cannot be completed. This means two things:
///
/// * Its worst-case runtime is exponential, i.e. it may be very slow if the
/// Sudoku has many missing digits.
/// * It is exhaustive, i.e. it finds a solution whenever one exists.
///
/// The search is deterministic: empty cells are filled in left-to-right,
/// top-to-bottom order and digits are tried in ascending order, so the same
/// puzzle always yields the same solution, even if multiple exist.
///
/// If the clues of the puzzle already violate the constraint, the Sudoku is
/// reported impossible without any search.
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    fn solve_rec(sudoku: &mut Sudoku<impl Constraint + Clone>) -> Solution {
        let (column, row) = match sudoku.grid().first_empty_cell() {
            Some(coordinates) => coordinates,
            None => return Solution::Found(sudoku.grid().clone())
        };

        for number in 1..=9 {
            if sudoku.is_valid_number(column, row, number).unwrap() {
                sudoku.grid_mut().set_cell(column, row, number).unwrap();
                let solution = BacktrackingSolver::solve_rec(sudoku);

                if solution.is_found() {
                    return solution;
                }

                sudoku.grid_mut().clear_cell(column, row).unwrap();
            }
        }

        Solution::Impossible
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, sudoku: &Sudoku<impl Constraint + Clone>) -> Solution {
        if !sudoku.is_valid() {
            return Solution::Impossible;
        }

        let mut clone = sudoku.clone();
        BacktrackingSolver::solve_rec(&mut clone)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::constraint::{DefaultConstraint, RowConstraint};

    fn test_solves_correctly<C>(puzzle: &str, solution: &str, constraint: C)
    where
        C: Constraint + Clone
    {
        let sudoku = Sudoku::parse(puzzle, constraint).unwrap();
        let solver = BacktrackingSolver;
        let found_solution = solver.solve(&sudoku);

        if let Solution::Found(grid) = found_solution {
            let expected_grid = SudokuGrid::parse(solution).unwrap();
            assert_eq!(expected_grid, grid, "Solver gave wrong grid.");
        }
        else {
            panic!("Solveable sudoku marked as impossible.");
        }
    }

    // The first example Sudoku is taken from the World Puzzle Federation
    // Sudoku Grand Prix, 2020 Round 8, Puzzle 2.
    // Puzzles: https://gp.worldpuzzle.org/sites/default/files/Puzzles/2020/2020_SudokuRound8.pdf
    // Solutions: https://gp.worldpuzzle.org/sites/default/files/Puzzles/2020/2020_SudokuRound8_SB.pdf

    #[test]
    fn backtracking_solves_classic_sudoku() {
        let puzzle = "\
             , , , ,8,1, , , ,\
             , ,2, , ,7,8, , ,\
             ,5,3, , , ,1,7, ,\
            3,7, , , , , , , ,\
            6, , , , , , , ,3,\
             , , , , , , ,2,4,\
             ,6,9, , , ,2,3, ,\
             , ,5,9, , ,4, , ,\
             , , ,6,5, , , , ";
        let solution = "\
            7,4,6,2,8,1,3,5,9,\
            9,1,2,5,3,7,8,4,6,\
            8,5,3,4,9,6,1,7,2,\
            3,7,4,1,2,5,6,9,8,\
            6,2,8,7,4,9,5,1,3,\
            5,9,1,3,6,8,7,2,4,\
            1,6,9,8,7,4,2,3,5,\
            2,8,5,9,1,3,4,6,7,\
            4,3,7,6,5,2,9,8,1";
        test_solves_correctly(puzzle, solution, DefaultConstraint);
    }

    #[test]
    fn backtracking_solves_easy_sudoku() {
        let puzzle = "\
            5,3, , ,7, , , , ,\
            6, , ,1,9,5, , , ,\
             ,9,8, , , , ,6, ,\
            8, , , ,6, , , ,3,\
            4, , ,8, ,3, , ,1,\
            7, , , ,2, , , ,6,\
             ,6, , , , ,2,8, ,\
             , , ,4,1,9, , ,5,\
             , , , ,8, , ,7,9";
        let solution = "\
            5,3,4,6,7,8,9,1,2,\
            6,7,2,1,9,5,3,4,8,\
            1,9,8,3,4,2,5,6,7,\
            8,5,9,7,6,1,4,2,3,\
            4,2,6,8,5,3,7,9,1,\
            7,1,3,9,2,4,8,5,6,\
            9,6,1,5,3,7,2,8,4,\
            2,8,7,4,1,9,6,3,5,\
            3,4,5,2,8,6,1,7,9";
        test_solves_correctly(puzzle, solution, DefaultConstraint);
    }

    #[test]
    fn backtracking_preserves_givens() {
        let puzzle = Sudoku::parse("\
            5,3, , ,7, , , , ,\
            6, , ,1,9,5, , , ,\
             ,9,8, , , , ,6, ,\
            8, , , ,6, , , ,3,\
            4, , ,8, ,3, , ,1,\
            7, , , ,2, , , ,6,\
             ,6, , , , ,2,8, ,\
             , , ,4,1,9, , ,5,\
             , , , ,8, , ,7,9", DefaultConstraint).unwrap();
        let solution = BacktrackingSolver.solve(&puzzle);

        if let Solution::Found(grid) = solution {
            assert!(puzzle.is_valid_solution(&grid));
        }
        else {
            panic!("Solveable sudoku marked as impossible.");
        }
    }

    #[test]
    fn backtracking_is_deterministic() {
        let sudoku = Sudoku::new_empty(DefaultConstraint);
        let first = BacktrackingSolver.solve(&sudoku);
        let second = BacktrackingSolver.solve(&sudoku);

        assert!(first.is_found());
        assert_eq!(first, second);
    }

    #[test]
    fn backtracking_fills_empty_grid() {
        let sudoku = Sudoku::new_empty(DefaultConstraint);
        let solution = BacktrackingSolver.solve(&sudoku);

        if let Solution::Found(grid) = solution {
            assert!(grid.is_full());
            assert!(DefaultConstraint.check(&grid));
        }
        else {
            panic!("Empty grid marked as impossible.");
        }
    }

    #[test]
    fn backtracking_does_not_mutate_input() {
        let sudoku = Sudoku::parse("\
            5,3, , ,7, , , , ,\
            6, , ,1,9,5, , , ,\
             ,9,8, , , , ,6, ,\
            8, , , ,6, , , ,3,\
            4, , ,8, ,3, , ,1,\
            7, , , ,2, , , ,6,\
             ,6, , , , ,2,8, ,\
             , , ,4,1,9, , ,5,\
             , , , ,8, , ,7,9", DefaultConstraint).unwrap();
        let grid_before = sudoku.grid().clone();
        BacktrackingSolver.solve(&sudoku);

        assert_eq!(&grid_before, sudoku.grid());
    }

    #[test]
    fn backtracking_detects_contradictory_givens() {
        // Two 5s in the first row.
        let sudoku = Sudoku::parse("\
            5, , , , , , , ,5,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ", DefaultConstraint).unwrap();

        assert_eq!(Solution::Impossible, BacktrackingSolver.solve(&sudoku));
    }

    #[test]
    fn backtracking_detects_unsolveable_cell() {
        // The cell (0, 0) is empty, but all digits are excluded: 1 to 5 by
        // the first row, 6 and 7 by the first column, 8 and 9 by the top-left
        // block.
        let sudoku = Sudoku::parse("\
             ,1,2,3,4,5, , , ,\
             ,8,9, , , , , , ,\
             , , , , , , , , ,\
            6, , , , , , , , ,\
            7, , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ", DefaultConstraint).unwrap();

        assert_eq!(Solution::Impossible, BacktrackingSolver.solve(&sudoku));
    }

    #[test]
    fn backtracking_returns_solved_grid_unchanged() {
        let code = "\
            5,3,4,6,7,8,9,1,2,\
            6,7,2,1,9,5,3,4,8,\
            1,9,8,3,4,2,5,6,7,\
            8,5,9,7,6,1,4,2,3,\
            4,2,6,8,5,3,7,9,1,\
            7,1,3,9,2,4,8,5,6,\
            9,6,1,5,3,7,2,8,4,\
            2,8,7,4,1,9,6,3,5,\
            3,4,5,2,8,6,1,7,9";
        let sudoku = Sudoku::parse(code, DefaultConstraint).unwrap();
        let expected = SudokuGrid::parse(code).unwrap();

        assert_eq!(Solution::Found(expected),
            BacktrackingSolver.solve(&sudoku));
    }

    #[test]
    fn backtracking_rejects_full_invalid_grid() {
        // The solved example grid with the top-left 5 replaced by a second 3.
        let sudoku = Sudoku::parse("\
            3,3,4,6,7,8,9,1,2,\
            6,7,2,1,9,5,3,4,8,\
            1,9,8,3,4,2,5,6,7,\
            8,5,9,7,6,1,4,2,3,\
            4,2,6,8,5,3,7,9,1,\
            7,1,3,9,2,4,8,5,6,\
            9,6,1,5,3,7,2,8,4,\
            2,8,7,4,1,9,6,3,5,\
            3,4,5,2,8,6,1,7,9", DefaultConstraint).unwrap();

        assert_eq!(Solution::Impossible, BacktrackingSolver.solve(&sudoku));
    }

    #[test]
    fn backtracking_works_with_single_constraint() {
        // With only the row constraint, the solver fills every row with the
        // digits in ascending order.
        let sudoku = Sudoku::new_empty(RowConstraint);
        let solution = BacktrackingSolver.solve(&sudoku);

        if let Solution::Found(grid) = solution {
            assert!(grid.is_full());
            assert!(RowConstraint.check(&grid));

            for row in 0..SudokuGrid::SIZE {
                for column in 0..SudokuGrid::SIZE {
                    assert_eq!(Some(column as u8 + 1),
                        grid.get_cell(column, row).unwrap());
                }
            }
        }
        else {
            panic!("Empty grid marked as impossible.");
        }
    }

    #[test]
    fn solution_accessors() {
        let grid = SudokuGrid::new();
        let found = Solution::Found(grid.clone());
        let impossible = Solution::Impossible;

        assert!(found.is_found());
        assert_eq!(Some(&grid), found.grid());
        assert!(!impossible.is_found());
        assert_eq!(None, impossible.grid());
    }
}
