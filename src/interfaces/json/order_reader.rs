use crate::domain::order::OrderRequest;
use crate::error::{PricingError, Result};
use std::io::BufRead;

/// Reads order requests from a JSON-lines source.
///
/// Each non-blank line holds one [`OrderRequest`]. Lines are numbered from 1
/// so errors and outputs can be traced back to the input.
pub struct OrderReader<R: BufRead> {
    reader: R,
}

impl<R: BufRead> OrderReader<R> {
    pub fn new(source: R) -> Self {
        Self { reader: source }
    }

    /// Lazily parses orders, yielding `(line number, order)` pairs. Blank lines are skipped.
    pub fn orders(self) -> impl Iterator<Item = (usize, Result<OrderRequest>)> {
        self.reader
            .lines()
            .enumerate()
            .filter_map(|(index, line)| {
                let line_no = index + 1;
                match line {
                    Ok(line) if line.trim().is_empty() => None,
                    Ok(line) => Some((
                        line_no,
                        serde_json::from_str(&line).map_err(PricingError::from),
                    )),
                    Err(e) => Some((line_no, Err(PricingError::from(e)))),
                }
            })
    }
}
