use crate::choice;

choice!(Section,
    All => "All - Logic walk-through, event flow and canvas properties",
    Logic => "Logic - Narrated game.js state transitions",
    Events => "Events - Expected event flow table",
    Canvas => "Canvas - Expected canvas element properties"
);

choice!(Scenario,
    HappyPath => "Happy Path - Click 'Começar', then draw one stroke",
    SkipStart => "Skip Start - Draw without clicking 'Começar' first"
);

impl Section {
    /// Whether the logic walk-through runs under this selection
    pub fn includes_logic(self) -> bool {
        matches!(self, Section::All | Section::Logic)
    }

    pub fn includes_events(self) -> bool {
        matches!(self, Section::All | Section::Events)
    }

    pub fn includes_canvas(self) -> bool {
        matches!(self, Section::All | Section::Canvas)
    }
}
