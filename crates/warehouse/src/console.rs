use std::io::{self, Write};

use stockroom_inventory::{Report, ReportSink};

/// Sink that prints every report as one line of text.
#[derive(Debug)]
pub struct ConsoleSink<W> {
    out: W,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_report(&mut self, report: &Report) -> io::Result<()> {
        if matches!(report, Report::Heading(_)) {
            writeln!(self.out)?;
        }
        writeln!(self.out, "{report}")
    }
}

impl<W: Write> ReportSink for ConsoleSink<W> {
    fn report(&mut self, report: Report) {
        if let Err(e) = self.write_report(&report) {
            tracing::error!(error = %e, "failed to write report line");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{InventoryError, ItemId};
    use stockroom_inventory::Operation;

    #[test]
    fn writes_one_line_per_report_with_spaced_headings() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.report(Report::Heading("Grocery Items".to_string()));
        sink.report(Report::Success("Item 2 removed successfully.".to_string()));
        sink.report(Report::Failure {
            operation: Operation::RemoveItem,
            error: InventoryError::NotFound(ItemId::new(999)),
        });

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            text,
            "\n--- Grocery Items ---\nItem 2 removed successfully.\nError removing item: item with id 999 not found\n"
        );
    }
}
