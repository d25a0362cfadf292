use crate::drawing::{section_footer, section_header};
use log::debug;
use std::io::Write;

/// Events the page should see during one stroke, paired with the handler's job
pub const EXPECTED_EVENT_FLOW: [(&str, &str); 7] = [
    ("DOMContentLoaded", "Inicializa canvas, obtém referências"),
    ("startDrawing() [click Começar]", "Define gameState.isDrawing = true"),
    ("mousedown", "startDrawingMouse() → isDrawingNow = true, lastX/Y set"),
    ("mousemove", "drawMouse() → draw(x, y)"),
    ("mousemove", "drawMouse() → draw(x, y)"),
    ("mousemove", "drawMouse() → draw(x, y) [múltiplos eventos]"),
    ("mouseup", "stopDrawing() → isDrawingNow = false"),
];

/// Prints the expected event flow as a numbered list
pub struct EventFlowLister;

impl EventFlowLister {
    pub fn print<W: Write>(out: &mut W) -> anyhow::Result<()> {
        debug!("listing {} expected events", EXPECTED_EVENT_FLOW.len());
        section_header(out, "FLUXO DE EVENTOS ESPERADO")?;

        for (i, (event, action)) in EXPECTED_EVENT_FLOW.iter().enumerate() {
            writeln!(out, "{}. [{}]", i + 1, event)?;
            writeln!(out, "   → {action}")?;
        }

        section_footer(out)
    }
}
