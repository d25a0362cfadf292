pub mod canvas;
pub mod flow;
pub mod simulator;

pub use self::canvas::CanvasPropertyChecker;
pub use self::flow::EventFlowLister;
pub use self::simulator::EventSimulator;

use std::io::Write;

/// Horizontal rule framing every report section
pub const RULE: &str = "======================================================================";

/// Writes a blank line, then `title` between two rules
pub(crate) fn section_header<W: Write>(out: &mut W, title: &str) -> anyhow::Result<()> {
    writeln!(out, "\n{RULE}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{RULE}")?;
    Ok(())
}

/// Writes a blank line, then a closing rule
pub(crate) fn section_footer<W: Write>(out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "\n{RULE}")?;
    Ok(())
}
