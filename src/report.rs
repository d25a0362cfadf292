//! The full debug report: banner, selected sections, summary and next steps

use crate::choices::{Scenario, Section};
use crate::drawing::{CanvasPropertyChecker, EventFlowLister, EventSimulator, RULE};
use crate::models::LogicVerdict;
use log::info;
use std::io::Write;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_PLAYER_ID: &str = "test123";

/// What to print and which game page the closing instructions point to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub section: Section,
    pub scenario: Scenario,
    pub base_url: String,
    pub player_id: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            section: Section::All,
            scenario: Scenario::HappyPath,
            base_url: DEFAULT_BASE_URL.to_owned(),
            player_id: DEFAULT_PLAYER_ID.to_owned(),
        }
    }
}

impl ReportOptions {
    /// Game page URL to open for the manual browser test
    pub fn game_url(&self) -> String {
        format!(
            "{}/game?player_id={}",
            self.base_url.trim_end_matches('/'),
            self.player_id
        )
    }
}

/// Writes the whole report to `out`
pub fn run<W: Write>(options: &ReportOptions, out: &mut W) -> anyhow::Result<()> {
    info!("rendering {:?} report", options.section);
    banner(out)?;

    let verdict = if options.section.includes_logic() {
        Some(EventSimulator::new(options.scenario).run(out)?)
    } else {
        None
    };
    if options.section.includes_events() {
        EventFlowLister::print(out)?;
    }
    if options.section.includes_canvas() {
        CanvasPropertyChecker::print(out)?;
    }

    summary(out, options, verdict)?;
    next_steps(out, options)?;
    out.flush()?;
    Ok(())
}

fn banner<W: Write>(out: &mut W) -> anyhow::Result<()> {
    let bar = "=".repeat(68);
    writeln!(out, "\n")?;
    writeln!(out, "╔{bar}╗")?;
    writeln!(
        out,
        "║ INKLY DEBUG: TESTE DE FUNCIONALIDADE DE DESENHO                      ║"
    )?;
    writeln!(out, "╚{bar}╝")?;
    Ok(())
}

fn summary<W: Write>(
    out: &mut W,
    options: &ReportOptions,
    verdict: Option<LogicVerdict>,
) -> anyhow::Result<()> {
    writeln!(out, "\n{RULE}")?;
    writeln!(out, "RESUMO DOS TESTES:")?;
    writeln!(out, "{RULE}")?;

    match verdict {
        Some(LogicVerdict::Passed) => writeln!(out, "✓ Lógica de gameState: OK")?,
        Some(LogicVerdict::Failed) => writeln!(out, "✗ Lógica de gameState: FALHOU")?,
        None => {}
    }
    if options.section.includes_events() {
        writeln!(out, "✓ Fluxo de eventos: OK")?;
    }
    if options.section.includes_canvas() {
        writeln!(out, "✓ Propriedades do canvas: OK")?;
    }
    Ok(())
}

fn next_steps<W: Write>(out: &mut W, options: &ReportOptions) -> anyhow::Result<()> {
    writeln!(out, "\nPróximo passo: Testar em navegador com console aberto")?;
    writeln!(out, "1. Abra {}", options.game_url())?;
    writeln!(out, "2. Abra Developer Tools (F12)")?;
    writeln!(out, "3. Vá para aba 'Console'")?;
    writeln!(out, "4. Clique em 'Começar'")?;
    writeln!(out, "5. Tente desenhar no canvas")?;
    writeln!(out, "6. Verifique se há logs [INKLY] no console")?;
    writeln!(out, "{RULE}")?;
    Ok(())
}
