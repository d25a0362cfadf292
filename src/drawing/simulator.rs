use crate::choices::Scenario;
use crate::drawing::RULE;
use crate::models::{CanvasEvent, DrawingState, Handled, LogicVerdict};
use crate::utils::geometry::Point;
use log::{debug, info};
use std::io::Write;

/// Where the simulated player presses the button
pub const POINTER_DOWN_AT: Point = Point::new(100, 100);
/// Where the simulated player drags to
pub const POINTER_MOVE_TO: Point = Point::new(150, 150);

/// Formats a flag the way the debug console of the game prints it
const fn flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Walks the `game.js` drawing handlers through one stroke and narrates every step
///
/// The walk-through always has six steps: initial state, the "Começar" click,
/// mousedown, mousemove, the resulting `draw(x, y)` call and mouseup. Under
/// [`Scenario::SkipStart`] the click never happens, so the guards in the
/// mouse handlers reject the stroke and the narration shows why.
pub struct EventSimulator {
    state: DrawingState,
    scenario: Scenario,
}

impl EventSimulator {
    pub fn new(scenario: Scenario) -> Self {
        Self {
            state: DrawingState::new(),
            scenario,
        }
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    /// Runs all six steps, writing the narration to `out`
    pub fn run<W: Write>(&mut self, out: &mut W) -> anyhow::Result<LogicVerdict> {
        info!("simulating drawing logic ({:?})", self.scenario);
        writeln!(out, "{RULE}")?;
        writeln!(out, "TESTE DE LÓGICA: game.js")?;
        writeln!(out, "{RULE}")?;

        self.initial_state(out)?;
        self.start_click(out)?;
        self.pointer_down(out)?;
        let stroke = self.pointer_move(out)?;
        self.draw_logic(out, POINTER_MOVE_TO)?;
        self.pointer_up(out)?;

        let verdict = if stroke.is_applied() {
            LogicVerdict::Passed
        } else {
            LogicVerdict::Failed
        };
        debug!("logic verdict: {verdict:?}");

        writeln!(out, "\n{RULE}")?;
        match verdict {
            LogicVerdict::Passed => writeln!(out, "TESTE DE LÓGICA: PASSOU ✓")?,
            LogicVerdict::Failed => writeln!(out, "TESTE DE LÓGICA: FALHOU ✗")?,
        }
        writeln!(out, "{RULE}")?;

        Ok(verdict)
    }

    fn initial_state<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "\n1. ESTADO INICIAL:")?;
        writeln!(
            out,
            "   gameState.isDrawing = {}",
            flag(self.state.is_drawing_enabled)
        )?;
        writeln!(out, "   isDrawingNow = {}", flag(self.state.is_pointer_down))?;
        Ok(())
    }

    fn start_click<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "\n2. USUARIO CLICA EM 'COMEÇAR':")?;
        match self.scenario {
            Scenario::HappyPath => {
                self.state.handle(&CanvasEvent::StartClicked);
                writeln!(
                    out,
                    "   gameState.isDrawing = {} ✓",
                    flag(self.state.is_drawing_enabled)
                )?;
            }
            Scenario::SkipStart => {
                writeln!(out, "   (clique não acontece neste cenário)")?;
                writeln!(
                    out,
                    "   gameState.isDrawing = {}",
                    flag(self.state.is_drawing_enabled)
                )?;
            }
        }
        Ok(())
    }

    fn pointer_down<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "\n3. USUARIO CLICA (MOUSEDOWN) NO CANVAS:")?;
        match self.state.handle(&CanvasEvent::PointerDown(POINTER_DOWN_AT)) {
            Handled::Applied => {
                writeln!(out, "   ✓ isDrawingNow = {}", flag(self.state.is_pointer_down))?;
                writeln!(
                    out,
                    "   ✓ gameState.hasDrawn = {}",
                    flag(self.state.has_drawn_anything)
                )?;
                writeln!(out, "   ✓ lastX, lastY = {}", self.state.last)?;
            }
            Handled::Ignored(failures) => {
                for failure in failures {
                    writeln!(out, "   ❌ ERRO: {failure}, event ignorado")?;
                }
            }
        }
        Ok(())
    }

    fn pointer_move<W: Write>(&mut self, out: &mut W) -> anyhow::Result<Handled> {
        writeln!(out, "\n4. USUARIO MOVE O MOUSE (MOUSEMOVE) NO CANVAS:")?;
        let handled = self.state.handle(&CanvasEvent::PointerMove(POINTER_MOVE_TO));
        match &handled {
            Handled::Applied => {
                writeln!(
                    out,
                    "   ✓ draw({}, {}) será chamado",
                    POINTER_MOVE_TO.x, POINTER_MOVE_TO.y
                )?;
                writeln!(out, "   ✓ lastX, lastY atualizado para {}", self.state.last)?;
            }
            Handled::Ignored(failures) => {
                writeln!(out, "   ❌ ERRO: drawMouse ignorado")?;
                for failure in failures {
                    writeln!(out, "      - {failure}")?;
                }
            }
        }
        Ok(handled)
    }

    /// Narrates `draw(x, y)` from the current `lastX`/`lastY`
    ///
    /// On the happy path step 4 already moved `lastX`/`lastY` to `to`,
    /// so the segment collapses to a single point.
    fn draw_logic<W: Write>(&self, out: &mut W, to: Point) -> anyhow::Result<()> {
        let from = self.state.last;
        writeln!(out, "\n5. LÓGICA DE draw(x, y):")?;
        writeln!(out, "   - Cor: {}", self.state.color_hex)?;
        writeln!(out, "   - Pincel: {}", self.state.brush_kind)?;
        writeln!(out, "   - Tamanho: {}", self.state.brush_size_px)?;
        writeln!(out, "   - Desenhar linha de ({from}) para ({to})")?;
        writeln!(out, "   ✓ ctx.beginPath()")?;
        writeln!(out, "   ✓ ctx.moveTo({from})")?;
        writeln!(out, "   ✓ ctx.lineTo({to})")?;
        writeln!(out, "   ✓ ctx.stroke()")?;
        Ok(())
    }

    fn pointer_up<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "\n6. USUARIO SOLTA O BOTÃO (MOUSEUP):")?;
        self.state.handle(&CanvasEvent::PointerUp);
        writeln!(out, "   ✓ isDrawingNow = {}", flag(self.state.is_pointer_down))?;
        Ok(())
    }
}
