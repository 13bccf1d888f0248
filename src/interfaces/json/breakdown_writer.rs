use crate::domain::breakdown::PriceBreakdown;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct QuotedOrder<'a> {
    order: usize,
    #[serde(flatten)]
    breakdown: &'a PriceBreakdown,
}

/// Writes price breakdowns as JSON lines, tagged with the input line they price.
pub struct BreakdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> BreakdownWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { writer: sink }
    }

    pub fn write(&mut self, order: usize, breakdown: &PriceBreakdown) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &QuotedOrder { order, breakdown })?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
