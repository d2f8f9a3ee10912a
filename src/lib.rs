// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements an easy-to-understand engine for classic 9x9 Sudoku.
//! It supports the following key features:
//!
//! * Parsing and printing Sudoku
//! * Checking validity of Sudoku and solutions according to standard rules
//! * Solving Sudoku using an exhaustive backtracking algorithm
//!
//! # Parsing and printing Sudoku
//!
//! See [SudokuGrid::parse] for the exact format of a Sudoku code.
//!
//! Codes can be used to exchange Sudoku, while pretty prints can be used to
//! display a Sudoku in a clearer manner. An example of how to parse and
//! display a Sudoku grid is provided below.
//!
//! ```
//! use sudoku_classic::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("\
//!     5,3, , ,7, , , , ,\
//!     6, , ,1,9,5, , , ,\
//!      ,9,8, , , , ,6, ,\
//!     8, , , ,6, , , ,3,\
//!     4, , ,8, ,3, , ,1,\
//!     7, , , ,2, , , ,6,\
//!      ,6, , , , ,2,8, ,\
//!      , , ,4,1,9, , ,5,\
//!      , , , ,8, , ,7,9").unwrap();
//! println!("{}", grid);
//! ```
//!
//! Alternatively, a grid can be created from a raw matrix of numbers, where 0
//! stands for an empty cell, using [SudokuGrid::from_cells].
//!
//! # Checking validity of Sudoku
//!
//! To check validity, an instance of [Sudoku] not only contains the numbers
//! (stored in a [SudokuGrid]), but also some constraint which specifies the
//! rules. For classic Sudoku rules,
//! [DefaultConstraint](constraint::DefaultConstraint) can be used.
//!
//! It is possible to check an entire Sudoku, individual cells, or potential
//! changes to individual cells that do not require changing the Sudoku's
//! state.
//!
//! ```
//! use sudoku_classic::Sudoku;
//! use sudoku_classic::constraint::DefaultConstraint;
//!
//! let mut sudoku = Sudoku::parse("\
//!     5,3, , ,7, , , , ,\
//!     6, , ,1,9,5, , , ,\
//!      ,9,8, , , , ,6, ,\
//!     8, , , ,6, , , ,3,\
//!     4, , ,8, ,3, , ,1,\
//!     7, , , ,2, , , ,6,\
//!      ,6, , , , ,2,8, ,\
//!      , , ,4,1,9, , ,5,\
//!      , , , ,8, , ,7,9", DefaultConstraint).unwrap();
//! assert!(sudoku.is_valid());
//!
//! // Some (unfortunately wrong) user input to the third cell of the top row:
//! // there already is a 3 in that row.
//! sudoku.grid_mut().set_cell(2, 0, 3).unwrap();
//! assert!(!sudoku.is_valid_cell(2, 0).unwrap());
//! ```
//!
//! Similarly, it is also possible to check a singular cell with a potential
//! new entry, before changing the Sudoku, using [Sudoku::is_valid_number].
//!
//! # Solving Sudoku
//!
//! This crate offers a [Solver](solver::Solver) trait for structs that can
//! solve Sudoku. As a default implementation,
//! [BacktrackingSolver](solver::BacktrackingSolver) is provided, which finds
//! a solution to every solveable Sudoku by exhaustive search.
//!
//! To use it, first instantiate a Sudoku and then call
//! [Solver.solve](solver::Solver::solve) on a backtracking solver (as it is a
//! zero-sized struct, no instantiation is required).
//!
//! ```
//! use sudoku_classic::{Sudoku, SudokuGrid};
//! use sudoku_classic::constraint::DefaultConstraint;
//! use sudoku_classic::solver::{BacktrackingSolver, Solution, Solver};
//!
//! // The same Sudoku as in our previous example.
//! let sudoku = Sudoku::parse("\
//!     5,3, , ,7, , , , ,\
//!     6, , ,1,9,5, , , ,\
//!      ,9,8, , , , ,6, ,\
//!     8, , , ,6, , , ,3,\
//!     4, , ,8, ,3, , ,1,\
//!     7, , , ,2, , , ,6,\
//!      ,6, , , , ,2,8, ,\
//!      , , ,4,1,9, , ,5,\
//!      , , , ,8, , ,7,9", DefaultConstraint).unwrap();
//! let solution = BacktrackingSolver.solve(&sudoku);
//!
//! let expected_solution_grid = SudokuGrid::parse("\
//!     5,3,4,6,7,8,9,1,2,\
//!     6,7,2,1,9,5,3,4,8,\
//!     1,9,8,3,4,2,5,6,7,\
//!     8,5,9,7,6,1,4,2,3,\
//!     4,2,6,8,5,3,7,9,1,\
//!     7,1,3,9,2,4,8,5,6,\
//!     9,6,1,5,3,7,2,8,4,\
//!     2,8,7,4,1,9,6,3,5,\
//!     3,4,5,2,8,6,1,7,9").unwrap();
//!
//! assert_eq!(Solution::Found(expected_solution_grid), solution);
//! ```
//!
//! If there is no solution, the solver will return `Solution::Impossible`.
//!
//! # Note regarding performance
//!
//! The backtracking search is exhaustive and unaccelerated, so puzzles with
//! very few clues may take noticeably longer than ordinary riddles. It is
//! recommended to use at least `opt-level = 2`, even in tests that solve
//! Sudoku.

pub mod constraint;
pub mod error;
pub mod solver;
pub mod util;

use constraint::Constraint;
use error::{
    SudokuError,
    SudokuParseError,
    SudokuParseResult,
    SudokuResult
};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

const CELL_COUNT: usize = SudokuGrid::SIZE * SudokuGrid::SIZE;

/// A Sudoku grid is composed of 81 cells that are organized into 9 rows of 9
/// columns each, which are further divided into 9 blocks of 3x3 cells. Each
/// cell may or may not be occupied by a digit from 1 to 9.
///
/// The dimensions are fixed by the type, so a grid of a wrong shape cannot be
/// constructed. The only invariants that remain checked at runtime are the
/// ranges of numbers and coordinates.
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// Serialization and deserialization view the grid as the raw `[[u8; 9]; 9]`
/// matrix returned by [SudokuGrid::to_cells], so a grid exchanged as JSON is
/// an array of 9 rows of 9 numbers, with 0 for empty cells.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "[[u8; 9]; 9]")]
#[serde(try_from = "[[u8; 9]; 9]")]
pub struct SudokuGrid {
    cells: [Option<u8>; CELL_COUNT]
}

fn to_char(cell: Option<u8>) -> char {
    if let Some(n) = cell {
        (b'0' + n) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SudokuGrid::SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % SudokuGrid::BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.get_cell(x, y).unwrap()), ' ', '║',
        true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let top_row = top_row();
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();
        let bottom_row = bottom_row();

        for y in 0..SudokuGrid::SIZE {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if y % SudokuGrid::BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

fn to_string(cell: &Option<u8>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SudokuGrid::SIZE + column
}

fn verify_coordinates(column: usize, row: usize) -> SudokuResult<()> {
    if column >= SudokuGrid::SIZE || row >= SudokuGrid::SIZE {
        Err(SudokuError::OutOfBounds)
    }
    else {
        Ok(())
    }
}

impl SudokuGrid {

    /// The width and height of a Sudoku grid, in cells.
    pub const SIZE: usize = 9;

    /// The width and height of one sub-block of a Sudoku grid, in cells. To
    /// ensure a square grid, this is also the number of blocks that compose
    /// the grid in each direction.
    pub const BLOCK_SIZE: usize = 3;

    /// Creates a new, empty Sudoku grid.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: [None; CELL_COUNT]
        }
    }

    /// Creates a Sudoku grid from a raw matrix of numbers, given as an array
    /// of 9 rows of 9 entries each. An entry of 0 denotes an empty cell, the
    /// numbers 1 to 9 denote a cell filled with that digit.
    ///
    /// # Errors
    ///
    /// If any entry is greater than 9. In that case,
    /// `SudokuError::InvalidNumber` is returned.
    pub fn from_cells(cells: [[u8; 9]; 9]) -> SudokuResult<SudokuGrid> {
        let mut grid = SudokuGrid::new();

        for (row, row_cells) in cells.iter().enumerate() {
            for (column, &cell) in row_cells.iter().enumerate() {
                if cell > 9 {
                    return Err(SudokuError::InvalidNumber);
                }

                if cell != 0 {
                    grid.cells[index(column, row)] = Some(cell);
                }
            }
        }

        Ok(grid)
    }

    /// Converts this grid into a raw matrix of numbers in a way that is
    /// consistent with [SudokuGrid::from_cells]. Empty cells are represented
    /// by 0.
    pub fn to_cells(&self) -> [[u8; 9]; 9] {
        let mut cells = [[0u8; 9]; 9];

        for row in 0..SudokuGrid::SIZE {
            for column in 0..SudokuGrid::SIZE {
                if let Some(number) = self.cells[index(column, row)] {
                    cells[row][column] = number;
                }
            }
        }

        cells
    }

    /// Parses a code encoding a Sudoku grid. The code is a comma-separated
    /// list of 81 entries, which are either empty or a digit from 1 to 9. The
    /// entries are assigned left-to-right, top-to-bottom, where each row is
    /// completed before the next one is started. Whitespace in the entries is
    /// ignored to allow for more intuitive formatting.
    ///
    /// As an example, the code
    /// `1, ,2, , ,3, ,4, , , ,3, ,1, ,2, ,…` (with 81 entries in total)
    /// fills the first cells of the top row with 1 and 2 and so on.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let mut grid = SudokuGrid::new();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let number = entry.parse::<u8>()?;

            if number == 0 || number > 9 {
                return Err(SudokuParseError::InvalidNumber);
            }

            grid.cells[i] = Some(number);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_classic::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<u8>> {
        verify_coordinates(column, row)?;
        Ok(self.cells[index(column, row)])
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to check whether it is in the specified cell.
    /// If it is *not* in the range `[1, 9]`, `false` will always be returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: u8)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: u8)
            -> SudokuResult<()> {
        verify_coordinates(column, row)?;

        if number == 0 || number > 9 {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        verify_coordinates(column, row)?;
        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells. While on average Sudoku with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some number must be filled
    /// in `other` with the same number. If this condition is met, `true` is
    /// returned, and `false` otherwise.
    pub fn is_subset(&self, other: &SudokuGrid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(self_number) =>
                        match other_cell {
                            Some(other_number) => self_number == other_number,
                            None => false
                        },
                    None => true
                }
            })
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some number
    /// must be filled in this one with the same number. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    pub fn is_superset(&self, other: &SudokuGrid) -> bool {
        other.is_subset(self)
    }

    /// Finds the first empty cell of this grid in left-to-right,
    /// top-to-bottom order, where each row is finished before the next one is
    /// considered. The result is returned in the form `(column, row)`. If
    /// this grid is full, `None` is returned.
    pub fn first_empty_cell(&self) -> Option<(usize, usize)> {
        for row in 0..SudokuGrid::SIZE {
            for column in 0..SudokuGrid::SIZE {
                if self.cells[index(column, row)].is_none() {
                    return Some((column, row));
                }
            }
        }

        None
    }

    /// Gets a reference to the array which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Option<u8>; CELL_COUNT] {
        &self.cells
    }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}

impl TryFrom<[[u8; 9]; 9]> for SudokuGrid {
    type Error = SudokuError;

    fn try_from(cells: [[u8; 9]; 9]) -> SudokuResult<SudokuGrid> {
        SudokuGrid::from_cells(cells)
    }
}

impl From<SudokuGrid> for [[u8; 9]; 9] {
    fn from(grid: SudokuGrid) -> [[u8; 9]; 9] {
        grid.to_cells()
    }
}

/// A Sudoku represents a grid of numbers with an associated constraint. The
/// numbers may or may not fulfill the constraint, but there is a method to
/// check it.
///
/// There is no guarantee that the Sudoku is solveable at all, however there
/// are ways to check that (see the [solver] module).
#[derive(Clone)]
pub struct Sudoku<C: Constraint + Clone> {
    grid: SudokuGrid,
    constraint: C
}

impl<C: Constraint + Clone> Sudoku<C> {

    /// Creates a new Sudoku with the provided constraint and an empty grid.
    ///
    /// # Arguments
    ///
    /// * `constraint`: The constraint which is checked by this Sudoku. Grid
    /// configurations which violate this constraint will be seen as invalid
    /// by [Sudoku::is_valid].
    pub fn new_empty(constraint: C) -> Sudoku<C> {
        Sudoku {
            grid: SudokuGrid::new(),
            constraint
        }
    }

    /// Creates a new Sudoku with the provided constraint and a given grid,
    /// which may already contain some numbers. Note that it is *not* checked
    /// whether the given grid fulfills the constraint - it is perfectly legal
    /// to create an invalid Sudoku here.
    ///
    /// # Arguments
    ///
    /// * `grid`: The initial [SudokuGrid] which contains the numbers with
    /// which the Sudoku is filled.
    /// * `constraint`: The constraint which is checked by this Sudoku. Grid
    /// configurations which violate this constraint will be seen as invalid
    /// by [Sudoku::is_valid].
    pub fn new_with_grid(grid: SudokuGrid, constraint: C) -> Sudoku<C> {
        Sudoku {
            grid,
            constraint
        }
    }

    /// Parses the code into a [SudokuGrid] using [SudokuGrid::parse] and
    /// wraps the result in a Sudoku with the given constraint. Note that it
    /// is not required that the code matches the constraint. It is perfectly
    /// legal to parse an invalid Sudoku.
    ///
    /// # Arguments
    ///
    /// * `code`: The code that specifies the grid. See [SudokuGrid::parse]
    /// for a language specification.
    /// * `constraint`: The constraint which is checked by this Sudoku. Grid
    /// configurations which violate this constraint will be seen as invalid
    /// by [Sudoku::is_valid].
    ///
    /// # Errors
    ///
    /// If the parsing fails. See [SudokuGrid::parse] for further information.
    pub fn parse(code: &str, constraint: C) -> SudokuParseResult<Sudoku<C>> {
        Ok(Sudoku::new_with_grid(SudokuGrid::parse(code)?, constraint))
    }

    /// Gets a reference to the `SudokuGrid` of this Sudoku.
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    /// Gets a mutable reference to the `SudokuGrid` of this Sudoku.
    pub fn grid_mut(&mut self) -> &mut SudokuGrid {
        &mut self.grid
    }

    /// Gets a reference to the `Constraint` of this Sudoku.
    pub fn constraint(&self) -> &C {
        &self.constraint
    }

    /// Indicates whether the entire grid matches the constraint.
    pub fn is_valid(&self) -> bool {
        self.constraint.check(&self.grid)
    }

    /// Indicates whether the cell at the given location matches the
    /// constraint. That is, if the specified cell violates the constraint,
    /// `false` is returned, and `true` otherwise.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn is_valid_cell(&self, column: usize, row: usize)
            -> SudokuResult<bool> {
        verify_coordinates(column, row)?;
        Ok(self.constraint.check_cell(&self.grid, column, row))
    }

    /// Indicates whether the given number would be valid in the cell at the
    /// given location. That is, if the number violated the constraint,
    /// `false` is returned, and `true` otherwise. All arguments are validated
    /// before any cell is inspected.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to check whether it is valid in the given cell.
    /// Must be in the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn is_valid_number(&self, column: usize, row: usize, number: u8)
            -> SudokuResult<bool> {
        verify_coordinates(column, row)?;

        if number == 0 || number > 9 {
            return Err(SudokuError::InvalidNumber);
        }

        Ok(self.constraint.check_number(&self.grid, column, row, number))
    }

    /// Indicates whether the given [SudokuGrid] is a valid solution to this
    /// puzzle. That is the case if all digits from this Sudoku can be found
    /// in the `solution`, it matches the constraint of this Sudoku, and it is
    /// full.
    pub fn is_valid_solution(&self, solution: &SudokuGrid) -> bool {
        self.grid.is_subset(solution) &&
            self.constraint.check(solution) &&
            solution.is_full()
    }
}
