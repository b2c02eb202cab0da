//! Length-prefixed array codec shared by every table format.
//!
//! Layout: `rank` little-endian `i32` dimensions, then the product of the
//! dimensions worth of fixed-width little-endian elements in row-major order.
//! A 2D table is rank 2 with `i16` elements; a flat table is rank 1 with `i8`
//! elements.

use cube_core::errors::{CubeError, ErrorInfo};

/// Width in bytes of every dimension in the header.
pub const DIMENSION_WIDTH: usize = 4;

/// Fixed-width element that can be stored in a table file.
pub trait TableElement: Copy {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Appends the little-endian encoding of `self`.
    fn put(self, out: &mut Vec<u8>);

    /// Decodes one element from exactly [`Self::WIDTH`] bytes.
    fn take(bytes: &[u8]) -> Self;
}

impl TableElement for i8 {
    const WIDTH: usize = 1;

    fn put(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }

    fn take(bytes: &[u8]) -> Self {
        i8::from_le_bytes([bytes[0]])
    }
}

impl TableElement for i16 {
    const WIDTH: usize = 2;

    fn put(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }

    fn take(bytes: &[u8]) -> Self {
        i16::from_le_bytes([bytes[0], bytes[1]])
    }
}

/// Dimensions and values recovered from an encoded table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedTable<T> {
    /// Dimensions in header order.
    pub dims: Vec<usize>,
    /// Values in row-major order.
    pub values: Vec<T>,
}

/// Encodes `values` with the given shape.
pub fn encode<T: TableElement>(dims: &[usize], values: &[T]) -> Result<Vec<u8>, CubeError> {
    let expected = element_count(dims)?;
    if expected != values.len() {
        return Err(CubeError::Table(
            ErrorInfo::new(
                "table-shape",
                format!("shape {dims:?} needs {expected} values, got {}", values.len()),
            )
            .with_context("dims", format!("{dims:?}")),
        ));
    }

    let mut out = Vec::with_capacity(dims.len() * DIMENSION_WIDTH + values.len() * T::WIDTH);
    for &dim in dims {
        let dim = i32::try_from(dim).map_err(|_| {
            CubeError::Table(
                ErrorInfo::new("table-shape", format!("dimension {dim} does not fit in an i32"))
                    .with_context("dims", format!("{dims:?}")),
            )
        })?;
        out.extend_from_slice(&dim.to_le_bytes());
    }
    for &value in values {
        value.put(&mut out);
    }
    Ok(out)
}

/// Decodes a table of the given rank. Bytes after the payload are ignored.
pub fn decode<T: TableElement>(bytes: &[u8], rank: usize) -> Result<DecodedTable<T>, CubeError> {
    let header_len = rank * DIMENSION_WIDTH;
    if bytes.len() < header_len {
        return Err(truncated(header_len, bytes.len()));
    }

    let mut dims = Vec::with_capacity(rank);
    for chunk in bytes[..header_len].chunks_exact(DIMENSION_WIDTH) {
        let dim = i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let dim = usize::try_from(dim).map_err(|_| {
            CubeError::Table(
                ErrorInfo::new("table-shape", format!("negative dimension {dim} in header"))
                    .with_context("rank", rank.to_string()),
            )
        })?;
        dims.push(dim);
    }

    // Checked before allocating so a corrupt header cannot request more
    // memory than the file could ever fill.
    let payload_len = element_count(&dims)?
        .checked_mul(T::WIDTH)
        .ok_or_else(|| overflow(&dims))?;
    let available = bytes.len() - header_len;
    if available < payload_len {
        return Err(truncated(header_len + payload_len, bytes.len()));
    }

    let values = bytes[header_len..header_len + payload_len]
        .chunks_exact(T::WIDTH)
        .map(T::take)
        .collect();
    Ok(DecodedTable { dims, values })
}

fn element_count(dims: &[usize]) -> Result<usize, CubeError> {
    dims.iter()
        .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
        .ok_or_else(|| overflow(dims))
}

fn overflow(dims: &[usize]) -> CubeError {
    CubeError::Table(
        ErrorInfo::new("table-shape", "table size overflows the address space")
            .with_context("dims", format!("{dims:?}")),
    )
}

fn truncated(expected: usize, actual: usize) -> CubeError {
    CubeError::Table(
        ErrorInfo::new(
            "table-truncated",
            format!("expected at least {expected} bytes, found {actual}"),
        )
        .with_context("expected", expected.to_string())
        .with_context("actual", actual.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_layout_is_length_then_bytes() {
        let bytes = encode::<i8>(&[3], &[-128, 0, 127]).unwrap();
        assert_eq!(bytes, vec![3, 0, 0, 0, 0x80, 0x00, 0x7f]);
    }

    #[test]
    fn grid_layout_is_rows_cols_then_little_endian_values() {
        let bytes = encode::<i16>(&[1, 2], &[1, -2]).unwrap();
        assert_eq!(bytes, vec![1, 0, 0, 0, 2, 0, 0, 0, 0x01, 0x00, 0xfe, 0xff]);
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let err = encode::<i16>(&[2, 2], &[1, 2, 3]).unwrap_err();
        assert_eq!(err.info().code, "table-shape");
    }

    #[test]
    fn oversized_dimension_is_rejected() {
        let dims = [usize::try_from(i32::MAX).unwrap() + 1, 0];
        let err = encode::<i16>(&dims, &[]).unwrap_err();
        assert_eq!(err.info().code, "table-shape");
    }

    #[test]
    fn negative_dimension_is_rejected() {
        let mut bytes = (-1i32).to_le_bytes().to_vec();
        bytes.extend_from_slice(&[0; 8]);
        let err = decode::<i8>(&bytes, 1).unwrap_err();
        assert_eq!(err.info().code, "table-shape");
    }

    #[test]
    fn short_header_is_truncated() {
        let err = decode::<i16>(&[2, 0, 0, 0, 2], 2).unwrap_err();
        assert_eq!(err.info().code, "table-truncated");
    }

    #[test]
    fn huge_declared_shape_fails_without_allocating() {
        let mut bytes = i32::MAX.to_le_bytes().to_vec();
        bytes.extend_from_slice(&i32::MAX.to_le_bytes());
        bytes.extend_from_slice(&[0; 16]);
        let err = decode::<i16>(&bytes, 2).unwrap_err();
        assert_eq!(err.info().code, "table-truncated");
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut bytes = encode::<i8>(&[2], &[5, -5]).unwrap();
        bytes.extend_from_slice(&[9, 9, 9]);
        let decoded = decode::<i8>(&bytes, 1).unwrap();
        assert_eq!(decoded.values, vec![5, -5]);
    }
}
