use crate::drawing::{section_footer, section_header};
use log::debug;
use std::io::Write;

/// Attributes and styles the `<canvas>` element needs for pointer drawing
pub const EXPECTED_CANVAS_PROPERTIES: [(&str, &str); 6] = [
    ("id", "canvas"),
    ("width", "800"),
    ("height", "600"),
    ("background-color", "white"),
    ("cursor", "crosshair"),
    ("touch-action", "none"),
];

/// Prints the expected canvas properties, one checkmark per entry
pub struct CanvasPropertyChecker;

impl CanvasPropertyChecker {
    pub fn print<W: Write>(out: &mut W) -> anyhow::Result<()> {
        debug!("listing {} canvas properties", EXPECTED_CANVAS_PROPERTIES.len());
        section_header(out, "PROPRIEDADES DO CANVAS (HTML)")?;

        for (key, value) in EXPECTED_CANVAS_PROPERTIES {
            writeln!(out, "✓ {key}: {value}")?;
        }

        section_footer(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_every_property_in_order() -> anyhow::Result<()> {
        let mut out = Vec::new();
        CanvasPropertyChecker::print(&mut out)?;
        let text = String::from_utf8(out)?;

        let checked: Vec<_> = text.lines().filter(|l| l.starts_with("✓ ")).collect();
        assert_eq!(
            checked,
            [
                "✓ id: canvas",
                "✓ width: 800",
                "✓ height: 600",
                "✓ background-color: white",
                "✓ cursor: crosshair",
                "✓ touch-action: none",
            ]
        );
        Ok(())
    }
}
