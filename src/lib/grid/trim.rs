use std::fmt::{Display, Formatter};

use tracing::debug;

use crate::grid::Grid;
use crate::palettes::Code;

fn is_blank<'a, I: IntoIterator<Item = &'a Code>>(line: I) -> bool {
	line.into_iter().all(Code::is_off)
}

/// Removes every all-"off" row, then every all-"off" column of what is left.
///
/// Empty lines are dropped wherever they are, interior ones included. That shifts
/// the position of every cell after them, so a frame meant for fixed-position
/// hardware should go through [`trim_borders_only`] instead.
pub fn trim(grid: &Grid<Code>) -> Grid<Code> {
	let keep_rows = (0..grid.rows())
		.filter(|&r| !is_blank(grid.row(r).unwrap_or_default()))
		.collect::<Vec<usize>>();
	let all_cols = (0..grid.cols()).collect::<Vec<usize>>();
	let reduced = grid.select(&keep_rows, &all_cols);

	// columns are judged on the row-reduced grid
	let keep_cols = (0..reduced.cols())
		.filter(|&c| !is_blank(reduced.column(c)))
		.collect::<Vec<usize>>();
	let all_rows = (0..reduced.rows()).collect::<Vec<usize>>();
	let trimmed = reduced.select(&all_rows, &keep_cols);

	debug!(
		rows_removed = grid.rows() - trimmed.rows(),
		cols_removed = grid.cols() - trimmed.cols(),
		"trimmed {}x{} grid to {}x{}", grid.rows(), grid.cols(), trimmed.rows(), trimmed.cols()
	);

	trimmed
}

/// Like [`trim`], but only strips leading and trailing all-"off" rows and columns.
/// Interior empty lines stay where they are.
pub fn trim_borders_only(grid: &Grid<Code>) -> Grid<Code> {
	let filled_rows = (0..grid.rows())
		.filter(|&r| !is_blank(grid.row(r).unwrap_or_default()))
		.collect::<Vec<usize>>();

	let (first_row, last_row) = match (filled_rows.first(), filled_rows.last()) {
		(Some(&first), Some(&last)) => (first, last),
		_ => {
			debug!("grid has no lit cells, trimmed to 0x0");
			return Grid::empty();
		}
	};

	let filled_cols = (0..grid.cols())
		.filter(|&c| !is_blank(grid.column(c).skip(first_row).take(last_row - first_row + 1)))
		.collect::<Vec<usize>>();
	let (first_col, last_col) = match (filled_cols.first(), filled_cols.last()) {
		(Some(&first), Some(&last)) => (first, last),
		_ => return Grid::empty(),
	};

	let rows = (first_row..=last_row).collect::<Vec<usize>>();
	let cols = (first_col..=last_col).collect::<Vec<usize>>();
	let trimmed = grid.select(&rows, &cols);

	debug!("trimmed borders of {}x{} grid to {}x{}", grid.rows(), grid.cols(), trimmed.rows(), trimmed.cols());

	trimmed
}

/// How empty rows and columns are removed before a frame is saved.
#[derive(clap::ValueEnum, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum TrimMode {
	/// Any all-"off" row or column, interior ones included
	#[default] All,
	/// Only leading and trailing all-"off" rows and columns
	Borders,
	/// Keep the grid as it is
	None,
}

impl TrimMode {
	pub fn apply(&self, grid: &Grid<Code>) -> Grid<Code> {
		match self {
			TrimMode::All => trim(grid),
			TrimMode::Borders => trim_borders_only(grid),
			TrimMode::None => grid.clone(),
		}
	}
}

impl Display for TrimMode {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			TrimMode::All => write!(f, "all"),
			TrimMode::Borders => write!(f, "borders"),
			TrimMode::None => write!(f, "none"),
		}
	}
}
