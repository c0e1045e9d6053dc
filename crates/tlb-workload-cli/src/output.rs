//! Output formatting for CLI

use clap::ValueEnum;
use std::io::Write;
use tlb_workload::WorkloadTrace;

use crate::error::CliResult;

/// Output format for generated traces
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// One labelled line per workload
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

/// Write `traces` to `out` in the requested format.
pub fn render<W: Write>(traces: &[WorkloadTrace], format: OutputFormat, out: &mut W) -> CliResult<()> {
    match format {
        OutputFormat::Text => {
            for trace in traces {
                writeln!(out, "{}", trace.render_line())?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, traces)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
