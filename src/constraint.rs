//! This module defines constraints which can be applied to Sudoku grids, thus
//! specifying the rules of the puzzle.
//!
//! For classic Sudoku rules, [DefaultConstraint] can be used. Conceptually,
//! it is a conjunction of [RowConstraint], [ColumnConstraint], and
//! [BlockConstraint], which express the three uniqueness rules individually.
//!
//! A constraint can be queried in three ways: [Constraint::check_number]
//! verifies a proposed number for a specified cell before it is entered,
//! [Constraint::check_cell] verifies the number actually present in a cell,
//! and [Constraint::check] verifies the entire grid. The solver relies on
//! `check_number` to prune the search and on `check` to reject puzzles whose
//! clues are already contradictory.

use crate::SudokuGrid;
use crate::util::DigitSet;

use serde::{Deserialize, Serialize};

#[inline]
fn default_check<C>(this: &C, grid: &SudokuGrid) -> bool
where
    C: Constraint + ?Sized
{
    for row in 0..SudokuGrid::SIZE {
        for column in 0..SudokuGrid::SIZE {
            if !this.check_cell(grid, column, row) {
                return false;
            }
        }
    }

    true
}

#[inline]
fn default_check_cell<C>(this: &C, grid: &SudokuGrid, column: usize,
    row: usize) -> bool
where
    C: Constraint + ?Sized
{
    if let Some(number) = grid.get_cell(column, row).unwrap() {
        this.check_number(grid, column, row, number)
    }
    else {
        true
    }
}

/// A constraint defines some property on a Sudoku grid. These are essentially
/// the rules of the Sudoku. In classic Sudoku these are "No duplicates in a
/// row" (`RowConstraint`), "No duplicates in a column" (`ColumnConstraint`),
/// and "No duplicates in a block" (`BlockConstraint`).
///
/// Implementors of this trait only need to implement the `check_number`
/// associated function, which verifies a proposed number for a specified
/// cell. `check_cell` and `check` are implemented by default based on it,
/// however `check` in particular may be very inefficient compared to a
/// specialized implementation (it checks every cell using `check_number`).
pub trait Constraint {

    /// Checks whether the given [SudokuGrid] matches this constraint, that
    /// is, every cell matches this constraint. By default, this runs
    /// `check_cell` on every cell of the grid, which may be inefficient, so
    /// custom implementations may be advantageous.
    fn check(&self, grid: &SudokuGrid) -> bool {
        default_check(self, grid)
    }

    /// Checks whether the cell at the given position in the [SudokuGrid]
    /// fulfills the constraint. This is the same as calling `check_number`
    /// with the same coordinates and the number which is actually filled in
    /// that cell. If the cell is empty, this function always returns `true`.
    fn check_cell(&self, grid: &SudokuGrid, column: usize, row: usize)
            -> bool {
        default_check_cell(self, grid, column, row)
    }

    /// Checks whether the given `number` would fit into the cell specified by
    /// `column` and `row` into the `grid` without violating this constraint.
    /// This function does *not* have to check whether `number` is actually a
    /// valid Sudoku digit (i.e. in the interval [1, 9]). If you require this
    /// guarantee, use
    /// [Sudoku::is_valid_number](crate::Sudoku::is_valid_number) instead.
    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
        number: u8) -> bool;
}

/// A [Constraint] that there are no duplicates in each row.
#[derive(Clone, Deserialize, Serialize)]
pub struct RowConstraint;

impl Constraint for RowConstraint {
    fn check(&self, grid: &SudokuGrid) -> bool {
        let mut set = DigitSet::new();

        for row in 0..SudokuGrid::SIZE {
            set.clear();

            for column in 0..SudokuGrid::SIZE {
                if let Some(number) = grid.get_cell(column, row).unwrap() {
                    if !set.insert(number).unwrap() {
                        return false;
                    }
                }
            }
        }

        true
    }

    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
            number: u8) -> bool {
        for other_column in 0..SudokuGrid::SIZE {
            if other_column != column &&
                    grid.has_number(other_column, row, number).unwrap() {
                return false;
            }
        }

        true
    }
}

/// A [Constraint] that there are no duplicates in each column.
#[derive(Clone, Deserialize, Serialize)]
pub struct ColumnConstraint;

impl Constraint for ColumnConstraint {
    fn check(&self, grid: &SudokuGrid) -> bool {
        let mut set = DigitSet::new();

        for column in 0..SudokuGrid::SIZE {
            set.clear();

            for row in 0..SudokuGrid::SIZE {
                if let Some(number) = grid.get_cell(column, row).unwrap() {
                    if !set.insert(number).unwrap() {
                        return false;
                    }
                }
            }
        }

        true
    }

    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
            number: u8) -> bool {
        for other_row in 0..SudokuGrid::SIZE {
            if other_row != row &&
                    grid.has_number(column, other_row, number).unwrap() {
                return false;
            }
        }

        true
    }
}

fn check_number_block(grid: &SudokuGrid, column: usize, row: usize,
        number: u8, bop: impl Fn(bool, bool) -> bool) -> bool {
    let block_column =
        (column / SudokuGrid::BLOCK_SIZE) * SudokuGrid::BLOCK_SIZE;
    let block_row = (row / SudokuGrid::BLOCK_SIZE) * SudokuGrid::BLOCK_SIZE;

    for other_row in block_row..(block_row + SudokuGrid::BLOCK_SIZE) {
        for other_column in
                block_column..(block_column + SudokuGrid::BLOCK_SIZE) {
            if bop(other_row != row, other_column != column) &&
                    grid.has_number(other_column, other_row, number).unwrap() {
                return false;
            }
        }
    }

    true
}

fn check_blocks(grid: &SudokuGrid) -> bool {
    let mut set = DigitSet::new();

    for block_row in 0..SudokuGrid::BLOCK_SIZE {
        for block_column in 0..SudokuGrid::BLOCK_SIZE {
            set.clear();

            let start_column = block_column * SudokuGrid::BLOCK_SIZE;
            let start_row = block_row * SudokuGrid::BLOCK_SIZE;

            for row in start_row..(start_row + SudokuGrid::BLOCK_SIZE) {
                for column in
                        start_column..(start_column + SudokuGrid::BLOCK_SIZE) {
                    if let Some(number) =
                            grid.get_cell(column, row).unwrap() {
                        if !set.insert(number).unwrap() {
                            return false;
                        }
                    }
                }
            }
        }
    }

    true
}

/// A [Constraint] that there are no duplicates in each block.
#[derive(Clone, Deserialize, Serialize)]
pub struct BlockConstraint;

impl Constraint for BlockConstraint {
    fn check(&self, grid: &SudokuGrid) -> bool {
        check_blocks(grid)
    }

    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
            number: u8) -> bool {
        check_number_block(grid, column, row, number, |a, b| a || b)
    }
}

/// Similar to [BlockConstraint], but does not check numbers in the same row
/// and column to save some time. For use in the [DefaultConstraint].
#[derive(Clone, Deserialize, Serialize)]
struct BlockConstraintNoLineColumn;

impl Constraint for BlockConstraintNoLineColumn {
    fn check(&self, grid: &SudokuGrid) -> bool {
        check_blocks(grid)
    }

    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
            number: u8) -> bool {
        check_number_block(grid, column, row, number, |a, b| a && b)
    }
}

/// The default Sudoku [Constraint] which is a logical conjunction of
/// [RowConstraint], [ColumnConstraint], and [BlockConstraint]. Checking a
/// number against this constraint answers whether placing it would violate
/// any of the classic Sudoku uniqueness rules.
#[derive(Clone, Deserialize, Serialize)]
pub struct DefaultConstraint;

impl Constraint for DefaultConstraint {
    fn check(&self, grid: &SudokuGrid) -> bool {
        RowConstraint.check(grid) &&
        ColumnConstraint.check(grid) &&
        BlockConstraintNoLineColumn.check(grid)
    }

    fn check_cell(&self, grid: &SudokuGrid, column: usize, row: usize)
            -> bool {
        RowConstraint.check_cell(grid, column, row) &&
        ColumnConstraint.check_cell(grid, column, row) &&
        BlockConstraintNoLineColumn.check_cell(grid, column, row)
    }

    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
            number: u8) -> bool {
        RowConstraint.check_number(grid, column, row, number) &&
        ColumnConstraint.check_number(grid, column, row, number) &&
        BlockConstraintNoLineColumn.check_number(grid, column, row, number)
    }
}
