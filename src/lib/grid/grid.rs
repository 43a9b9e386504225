use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CodecError, Result};

/// A rectangular 2-D grid stored row-major.
///
/// A grid without rows always has zero columns; there is no row to measure a width from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
	rows: usize,
	cols: usize,
	cells: Vec<T>,
}

impl<T> Default for Grid<T> {
	fn default() -> Self {
		Self::empty()
	}
}

impl<T> Grid<T> {
	/// The 0×0 grid.
	pub fn empty() -> Self {
		Self { rows: 0, cols: 0, cells: Vec::new() }
	}

	pub fn filled(rows: usize, cols: usize, value: T) -> Self
	where
		T: Clone,
	{
		if rows == 0 {
			return Self::empty();
		}

		Self { rows, cols, cells: vec![value; rows * cols] }
	}

	/// Builds a grid from a list of rows, rejecting ragged input.
	pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
		let cols = rows.first().map(Vec::len).unwrap_or(0);
		let row_count = rows.len();

		let mut cells = Vec::with_capacity(row_count * cols);
		for (i, row) in rows.into_iter().enumerate() {
			if row.len() != cols {
				return Err(CodecError::RaggedGrid { row: i, expected: cols, found: row.len() });
			}
			cells.extend(row);
		}

		Ok(Self { rows: row_count, cols, cells })
	}

	pub fn rows(&self) -> usize {
		self.rows
	}

	pub fn cols(&self) -> usize {
		self.cols
	}

	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}

	pub fn get(&self, row: usize, col: usize) -> Option<&T> {
		if row >= self.rows || col >= self.cols {
			return None;
		}
		self.cells.get(row * self.cols + col)
	}

	pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
		if row >= self.rows || col >= self.cols {
			return None;
		}
		self.cells.get_mut(row * self.cols + col)
	}

	/// Replaces a cell, returning the previous value. Out-of-range coordinates
	/// leave the grid unchanged and return `None`.
	pub fn set(&mut self, row: usize, col: usize, value: T) -> Option<T> {
		self.get_mut(row, col).map(|cell| std::mem::replace(cell, value))
	}

	pub fn row(&self, row: usize) -> Option<&[T]> {
		if row >= self.rows {
			return None;
		}
		Some(&self.cells[row * self.cols..(row + 1) * self.cols])
	}

	pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
		// not chunks(): a width of zero is legal here
		(0..self.rows).map(move |r| &self.cells[r * self.cols..(r + 1) * self.cols])
	}

	pub fn column(&self, col: usize) -> impl Iterator<Item = &T> + '_ {
		(0..self.rows).filter_map(move |r| self.get(r, col))
	}

	pub fn to_rows(&self) -> Vec<Vec<T>>
	where
		T: Clone,
	{
		self.iter_rows().map(|r| r.to_vec()).collect()
	}

	pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Grid<U> {
		Grid {
			rows: self.rows,
			cols: self.cols,
			cells: self.cells.iter().map(f).collect(),
		}
	}

	/// Like [`Grid::map`], stopping at the first cell `f` rejects.
	pub fn try_map<U, E, F: FnMut(&T) -> std::result::Result<U, E>>(&self, f: F) -> std::result::Result<Grid<U>, E> {
		Ok(Grid {
			rows: self.rows,
			cols: self.cols,
			cells: self.cells.iter().map(f).collect::<std::result::Result<Vec<U>, E>>()?,
		})
	}

	/// Swaps the axes: cell `(r, c)` of the result is cell `(c, r)` of `self`.
	pub fn transposed(&self) -> Grid<T>
	where
		T: Clone,
	{
		if self.cols == 0 {
			return Grid::empty();
		}

		let mut cells = Vec::with_capacity(self.cells.len());
		for c in 0..self.cols {
			for r in 0..self.rows {
				cells.push(self.cells[r * self.cols + c].clone());
			}
		}

		Grid { rows: self.cols, cols: self.rows, cells }
	}

	/// Copies the given rows and columns, in the given order, into a new grid.
	pub(crate) fn select(&self, rows: &[usize], cols: &[usize]) -> Grid<T>
	where
		T: Clone,
	{
		if rows.is_empty() {
			return Grid::empty();
		}

		let mut cells = Vec::with_capacity(rows.len() * cols.len());
		for &r in rows {
			for &c in cols {
				cells.push(self.cells[r * self.cols + c].clone());
			}
		}

		Grid { rows: rows.len(), cols: cols.len(), cells }
	}
}

impl<T: Serialize> Serialize for Grid<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.collect_seq(self.iter_rows())
	}
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Grid<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
		Grid::from_rows(rows).map_err(de::Error::custom)
	}
}
