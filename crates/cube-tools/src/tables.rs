//! Persisted lookup tables: the in-memory 2D table and the store that reads
//! and writes table files.

use std::fs;
use std::io::ErrorKind;
use std::ops::{Index, IndexMut};
use std::path::PathBuf;

use cube_core::errors::{CubeError, ErrorInfo};
use tracing::debug;

use crate::codec::{self, TableElement};
use crate::config::is_single_component;
use crate::storage::StorageLocation;

/// Rectangular table of `i16` values stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table2D {
    rows: usize,
    cols: usize,
    values: Vec<i16>,
}

impl Table2D {
    /// Zero-filled table.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![0; rows * cols],
        }
    }

    /// Wraps row-major values; `values.len()` must equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, values: Vec<i16>) -> Result<Self, CubeError> {
        if rows.checked_mul(cols) != Some(values.len()) {
            return Err(CubeError::Table(
                ErrorInfo::new(
                    "table-shape",
                    format!("{rows}x{cols} table cannot hold {} values", values.len()),
                )
                .with_context("rows", rows.to_string())
                .with_context("cols", cols.to_string()),
            ));
        }
        Ok(Self { rows, cols, values })
    }

    /// Builds a table from nested rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<i16>>) -> Result<Self, CubeError> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(row) = rows.iter().position(|row| row.len() != cols) {
            return Err(CubeError::Table(
                ErrorInfo::new("table-ragged", "rows have different lengths")
                    .with_context("row", row.to_string())
                    .with_context("expected", cols.to_string()),
            ));
        }
        let height = rows.len();
        Ok(Self {
            rows: height,
            cols,
            values: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at `(row, col)`, if inside the table.
    pub fn get(&self, row: usize, col: usize) -> Option<i16> {
        if row < self.rows && col < self.cols {
            Some(self.values[row * self.cols + col])
        } else {
            None
        }
    }

    /// One row, if inside the table.
    pub fn row(&self, row: usize) -> Option<&[i16]> {
        (row < self.rows).then(|| &self.values[row * self.cols..(row + 1) * self.cols])
    }

    /// All values in row-major order.
    pub fn as_slice(&self) -> &[i16] {
        &self.values
    }

    /// Copies the table into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<i16>> {
        (0..self.rows)
            .map(|row| self.values[row * self.cols..(row + 1) * self.cols].to_vec())
            .collect()
    }
}

impl Index<(usize, usize)> for Table2D {
    type Output = i16;

    fn index(&self, (row, col): (usize, usize)) -> &i16 {
        assert!(
            row < self.rows && col < self.cols,
            "({row}, {col}) outside {}x{}",
            self.rows,
            self.cols
        );
        &self.values[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Table2D {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut i16 {
        assert!(
            row < self.rows && col < self.cols,
            "({row}, {col}) outside {}x{}",
            self.rows,
            self.cols
        );
        &mut self.values[row * self.cols + col]
    }
}

/// Reads and writes table files inside a [`StorageLocation`].
///
/// Every call opens its file, finishes with it, and closes it before
/// returning. Concurrent writers to the same name race; nothing here locks.
#[derive(Debug, Clone)]
pub struct TableStore {
    location: StorageLocation,
}

impl TableStore {
    /// Store rooted at `location`.
    pub fn new(location: StorageLocation) -> Self {
        Self { location }
    }

    /// Store under the platform's user-local data directory.
    pub fn platform_default() -> Result<Self, CubeError> {
        Ok(Self::new(StorageLocation::platform_default()?))
    }

    /// Storage location used by this store.
    pub fn location(&self) -> &StorageLocation {
        &self.location
    }

    /// File path for a table name. Names must be a single path component.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, CubeError> {
        if !is_single_component(name) {
            return Err(CubeError::Table(
                ErrorInfo::new("table-name", format!("invalid table name {name:?}"))
                    .with_hint("table names are plain file names"),
            ));
        }
        Ok(self.location.table_dir().join(name))
    }

    /// Whether a table file with this name exists.
    pub fn exists(&self, name: &str) -> Result<bool, CubeError> {
        Ok(self.path_for(name)?.is_file())
    }

    /// Writes `rows`, `cols`, then every value as `i16`.
    pub fn write_table_2d(&self, name: &str, table: &Table2D) -> Result<(), CubeError> {
        self.write_array(name, &[table.rows, table.cols], &table.values)
    }

    /// Reads a table written by [`TableStore::write_table_2d`].
    pub fn read_table_2d(&self, name: &str) -> Result<Table2D, CubeError> {
        let decoded = self.read_array::<i16>(name, 2)?;
        Ok(Table2D {
            rows: decoded.dims[0],
            cols: decoded.dims[1],
            values: decoded.values,
        })
    }

    /// Writes the length, then every value as `i8`.
    pub fn write_table_flat(&self, name: &str, values: &[i8]) -> Result<(), CubeError> {
        self.write_array(name, &[values.len()], values)
    }

    /// Reads a table written by [`TableStore::write_table_flat`].
    pub fn read_table_flat(&self, name: &str) -> Result<Vec<i8>, CubeError> {
        Ok(self.read_array::<i8>(name, 1)?.values)
    }

    /// Reads the table, or builds and persists it when the file is missing.
    pub fn load_or_build_2d(
        &self,
        name: &str,
        build: impl FnOnce() -> Table2D,
    ) -> Result<Table2D, CubeError> {
        if self.exists(name)? {
            return self.read_table_2d(name);
        }
        debug!(table = name, "table missing, building");
        let table = build();
        self.write_table_2d(name, &table)?;
        Ok(table)
    }

    /// Flat counterpart of [`TableStore::load_or_build_2d`].
    pub fn load_or_build_flat(
        &self,
        name: &str,
        build: impl FnOnce() -> Vec<i8>,
    ) -> Result<Vec<i8>, CubeError> {
        if self.exists(name)? {
            return self.read_table_flat(name);
        }
        debug!(table = name, "table missing, building");
        let values = build();
        self.write_table_flat(name, &values)?;
        Ok(values)
    }

    fn write_array<T: TableElement>(
        &self,
        name: &str,
        dims: &[usize],
        values: &[T],
    ) -> Result<(), CubeError> {
        let path = self.path_for(name)?;
        let bytes = codec::encode(dims, values).map_err(|err| err.with_context("name", name))?;
        self.location.ensure_storage_location()?;
        fs::write(&path, &bytes).map_err(|err| {
            CubeError::Storage(
                ErrorInfo::new("table-write", err.to_string())
                    .with_context("name", name)
                    .with_context("path", path.display().to_string()),
            )
        })?;
        debug!(table = name, path = %path.display(), ?dims, bytes = bytes.len(), "wrote table");
        Ok(())
    }

    fn read_array<T: TableElement>(
        &self,
        name: &str,
        rank: usize,
    ) -> Result<codec::DecodedTable<T>, CubeError> {
        let path = self.path_for(name)?;
        self.location.ensure_storage_location()?;
        let bytes = fs::read(&path).map_err(|err| {
            let code = if err.kind() == ErrorKind::NotFound {
                "table-missing"
            } else {
                "table-read"
            };
            CubeError::Storage(
                ErrorInfo::new(code, err.to_string())
                    .with_context("name", name)
                    .with_context("path", path.display().to_string()),
            )
        })?;
        let decoded = codec::decode::<T>(&bytes, rank).map_err(|err| {
            err.with_context("name", name)
                .with_context("path", path.display().to_string())
        })?;
        debug!(table = name, path = %path.display(), dims = ?decoded.dims, "read table");
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_keeps_row_major_order() {
        let table =
            Table2D::from_rows(vec![vec![1, -2], vec![300, 0], vec![-32768, 32767]]).unwrap();
        assert_eq!(table.rows(), 3);
        assert_eq!(table.cols(), 2);
        assert_eq!(table.as_slice(), &[1, -2, 300, 0, -32768, 32767]);
        assert_eq!(table[(2, 0)], -32768);
        assert_eq!(table.get(1, 0), Some(300));
        assert_eq!(table.get(3, 0), None);
        assert_eq!(table.row(2), Some(&[-32768, 32767][..]));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Table2D::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(err.info().code, "table-ragged");
    }

    #[test]
    fn from_vec_checks_shape() {
        assert!(Table2D::from_vec(2, 3, vec![0; 6]).is_ok());
        assert_eq!(
            Table2D::from_vec(2, 3, vec![0; 5]).unwrap_err().info().code,
            "table-shape"
        );
    }

    #[test]
    fn rows_without_columns_keep_their_height() {
        let table = Table2D::from_rows(vec![vec![], vec![]]).unwrap();
        assert_eq!((table.rows(), table.cols()), (2, 0));
        assert_eq!(table.to_rows(), vec![Vec::<i16>::new(), Vec::new()]);
    }

    #[test]
    fn index_mut_updates_value() {
        let mut table = Table2D::new(2, 2);
        table[(1, 1)] = 7;
        assert_eq!(table.as_slice(), &[0, 0, 0, 7]);
    }

    #[test]
    fn path_names_must_be_plain() {
        let store = TableStore::new(StorageLocation::new(&crate::StorageConfig::with_base("/x")));
        for name in ["", "..", "a/b", "a\\b"] {
            assert_eq!(store.path_for(name).unwrap_err().info().code, "table-name");
        }
        assert_eq!(
            store.path_for("twist.bin").unwrap(),
            PathBuf::from("/x/CubeRobot/Tables/twist.bin")
        );
    }
}
