//! Reader and contract checks for generated CSV datasets.
//!
//! Tests parse the generator's output back into rows and assert the output
//! contract in one call rather than re-implementing the checks per suite.

use std::collections::HashSet;

use thiserror::Error;

/// Header every dataset must start with.
pub const EXPECTED_HEADER: [&str; 3] = ["source", "target", "weight"];

/// One parsed edge row.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DatasetRow {
    /// Index parsed from the `Node<i>` source label.
    pub source: usize,
    /// Index parsed from the `Node<j>` target label.
    pub target: usize,
    /// Signed weight.
    pub weight: i32,
}

/// Failures raised while parsing or checking a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The CSV reader rejected the input.
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    /// The header row was missing or wrong.
    #[error("unexpected header {found:?}")]
    Header {
        /// Header fields actually found.
        found: Vec<String>,
    },
    /// A row did not have exactly three fields.
    #[error("row {row} has {fields} fields")]
    FieldCount {
        /// One-based data row number.
        row: usize,
        /// Number of fields found.
        fields: usize,
    },
    /// A node label was not `Node<decimal>`.
    #[error("row {row} has malformed node label `{label}`")]
    NodeLabel {
        /// One-based data row number.
        row: usize,
        /// Offending label.
        label: String,
    },
    /// A weight was not a decimal integer.
    #[error("row {row} has malformed weight `{raw}`")]
    WeightFormat {
        /// One-based data row number.
        row: usize,
        /// Offending field.
        raw: String,
    },
    /// Indices were not ordered `source < target < num_nodes`.
    #[error("row {row} violates 0 <= {first} < {second} < {num_nodes}")]
    Bounds {
        /// One-based data row number.
        row: usize,
        /// Parsed source index.
        first: usize,
        /// Parsed target index.
        second: usize,
        /// Node count the dataset was generated with.
        num_nodes: usize,
    },
    /// A pair appeared more than once.
    #[error("row {row} repeats pair ({first}, {second})")]
    DuplicatePair {
        /// One-based data row number.
        row: usize,
        /// Parsed source index.
        first: usize,
        /// Parsed target index.
        second: usize,
    },
    /// A weight magnitude fell outside `[1, 10]`.
    #[error("row {row} has out-of-range weight {weight}")]
    WeightRange {
        /// One-based data row number.
        row: usize,
        /// Parsed weight.
        weight: i32,
    },
    /// Rows were not in generation order.
    #[error("row {row} is out of order")]
    Order {
        /// One-based data row number.
        row: usize,
    },
}

/// A parsed dataset.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Dataset {
    /// Data rows in file order.
    pub rows: Vec<DatasetRow>,
}

impl Dataset {
    /// Parses `text` and checks it against the output contract for a graph
    /// of `num_nodes` nodes.
    ///
    /// # Errors
    /// Returns the first [`DatasetError`] encountered.
    ///
    /// # Examples
    /// ```
    /// use graphgen_test_support::dataset::Dataset;
    ///
    /// let dataset = Dataset::parse_checked("source,target,weight\nNode0,Node2,-4\n", 3)?;
    /// assert_eq!(dataset.rows.len(), 1);
    /// assert_eq!(dataset.negative_count(), 1);
    /// # Ok::<(), graphgen_test_support::dataset::DatasetError>(())
    /// ```
    pub fn parse_checked(text: &str, num_nodes: usize) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());
        let mut records = reader.records();

        let header = match records.next() {
            Some(record) => record?,
            None => return Err(DatasetError::Header { found: Vec::new() }),
        };
        if header.iter().ne(EXPECTED_HEADER) {
            return Err(DatasetError::Header {
                found: header.iter().map(ToOwned::to_owned).collect(),
            });
        }

        let mut rows = Vec::new();
        let mut seen = HashSet::new();
        let mut previous: Option<(usize, usize)> = None;
        for (offset, record) in records.enumerate() {
            let row_number = offset.saturating_add(1);
            let row = parse_row(&record?, row_number)?;
            check_row(row, row_number, num_nodes)?;
            if !seen.insert((row.source, row.target)) {
                return Err(DatasetError::DuplicatePair {
                    row: row_number,
                    first: row.source,
                    second: row.target,
                });
            }
            if previous.is_some_and(|pair| pair >= (row.source, row.target)) {
                return Err(DatasetError::Order { row: row_number });
            }
            previous = Some((row.source, row.target));
            rows.push(row);
        }
        Ok(Self { rows })
    }

    /// Number of rows with a negative weight.
    #[must_use]
    pub fn negative_count(&self) -> usize {
        self.rows.iter().filter(|row| row.weight < 0).count()
    }
}

fn parse_row(record: &csv::StringRecord, row: usize) -> Result<DatasetRow, DatasetError> {
    let fields: Vec<&str> = record.iter().collect();
    let [source, target, weight] = fields.as_slice() else {
        return Err(DatasetError::FieldCount {
            row,
            fields: fields.len(),
        });
    };
    Ok(DatasetRow {
        source: parse_node(source, row)?,
        target: parse_node(target, row)?,
        weight: weight.parse().map_err(|_| DatasetError::WeightFormat {
            row,
            raw: (*weight).to_owned(),
        })?,
    })
}

fn parse_node(label: &str, row: usize) -> Result<usize, DatasetError> {
    label
        .strip_prefix("Node")
        .filter(|digits| {
            !digits.is_empty()
                && digits.bytes().all(|byte| byte.is_ascii_digit())
                && (digits.len() == 1 || !digits.starts_with('0'))
        })
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| DatasetError::NodeLabel {
            row,
            label: label.to_owned(),
        })
}

fn check_row(row: DatasetRow, row_number: usize, num_nodes: usize) -> Result<(), DatasetError> {
    if row.source >= row.target || row.target >= num_nodes {
        return Err(DatasetError::Bounds {
            row: row_number,
            first: row.source,
            second: row.target,
            num_nodes,
        });
    }
    if !(1..=10).contains(&row.weight.unsigned_abs()) {
        return Err(DatasetError::WeightRange {
            row: row_number,
            weight: row.weight,
        });
    }
    Ok(())
}
