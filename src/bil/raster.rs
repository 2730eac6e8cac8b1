use serde::Serialize;

/// Elevation grid decoded from a `.bil` file.
#[derive(Debug, Clone, PartialEq)]
pub struct BilRaster {
    rows: usize,
    columns: usize,
    /// number of cells replaced by the no-data placeholder while decoding
    void_count: usize,
    /// row-major elevation values, `rows * columns` long
    data: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RasterStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl BilRaster {
    pub(super) fn new(rows: usize, columns: usize, void_count: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(rows * columns, data.len());

        BilRaster {
            rows,
            columns,
            void_count,
            data,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.columns
    }

    /// (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        Some(self.data[col + row * self.columns])
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.columns;
        Some(&self.data[start..start + self.columns])
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.columns).map(<[f64]>::to_vec).collect()
    }

    pub fn void_count(&self) -> usize {
        self.void_count
    }

    pub fn stats(&self) -> RasterStats {
        let (min, max, sum) = self.data.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), &z| (min.min(z), max.max(z), sum + z),
        );

        RasterStats {
            min,
            max,
            mean: sum / self.data.len() as f64,
        }
    }
}
