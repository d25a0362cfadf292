use inkly_debug::choices::{Scenario, Section};
use inkly_debug::{run, ReportOptions};
use std::process::Command;

const GOLDEN: &str = include_str!("golden_default.txt");

fn render(options: &ReportOptions) -> String {
    let mut out = Vec::new();
    run(options, &mut out).expect("report renders");
    String::from_utf8(out).expect("report is utf-8")
}

#[test]
fn default_report_matches_golden() {
    assert_eq!(render(&ReportOptions::default()), GOLDEN);
}

#[test]
fn output_is_deterministic() {
    let options = ReportOptions::default();
    assert_eq!(render(&options), render(&options));
}

#[test]
fn pass_lines_appear_exactly_once() {
    let text = render(&ReportOptions::default());
    assert_eq!(text.matches("TESTE DE LÓGICA: PASSOU").count(), 1);
    assert_eq!(text.matches("✓ Lógica de gameState: OK").count(), 1);
}

#[test]
fn event_flow_has_seven_entries_in_order() {
    let options = ReportOptions {
        section: Section::Events,
        ..ReportOptions::default()
    };
    let text = render(&options);

    let events: Vec<_> = text
        .lines()
        .filter_map(|l| {
            let (num, rest) = l.split_once(". [")?;
            num.parse::<usize>().ok()?;
            rest.strip_suffix(']')
        })
        .collect();
    assert_eq!(
        events,
        [
            "DOMContentLoaded",
            "startDrawing() [click Começar]",
            "mousedown",
            "mousemove",
            "mousemove",
            "mousemove",
            "mouseup",
        ]
    );
}

#[test]
fn canvas_table_has_six_entries() {
    let options = ReportOptions {
        section: Section::Canvas,
        ..ReportOptions::default()
    };
    let text = render(&options);
    let table = text.split("RESUMO DOS TESTES").next().unwrap_or_default();

    let props: Vec<_> = table
        .lines()
        .filter_map(|l| l.strip_prefix("✓ "))
        .filter_map(|l| l.split_once(": "))
        .collect();
    assert_eq!(
        props,
        [
            ("id", "canvas"),
            ("width", "800"),
            ("height", "600"),
            ("background-color", "white"),
            ("cursor", "crosshair"),
            ("touch-action", "none"),
        ]
    );
}

#[test]
fn no_exception_text() {
    for scenario in [Scenario::HappyPath, Scenario::SkipStart] {
        let options = ReportOptions {
            scenario,
            ..ReportOptions::default()
        };
        let text = render(&options).to_lowercase();
        for needle in ["exception", "traceback", "panicked", "stack backtrace"] {
            assert!(!text.contains(needle), "{needle} in {scenario:?} output");
        }
    }
}

#[test]
fn skip_start_reports_failed_logic() {
    let options = ReportOptions {
        scenario: Scenario::SkipStart,
        ..ReportOptions::default()
    };
    let text = render(&options);
    assert!(text.contains("TESTE DE LÓGICA: FALHOU ✗"));
    assert!(text.contains("✗ Lógica de gameState: FALHOU"));
    assert!(!text.contains("✓ Lógica de gameState: OK"));
    assert!(text.contains("✓ Fluxo de eventos: OK"));
}

#[test]
fn custom_player_id_lands_in_instructions() {
    let options = ReportOptions {
        base_url: "http://127.0.0.1:5000".to_owned(),
        player_id: "debugger".to_owned(),
        ..ReportOptions::default()
    };
    let text = render(&options);
    assert!(text.contains("1. Abra http://127.0.0.1:5000/game?player_id=debugger\n"));
}

#[test]
fn binary_prints_golden_and_exits_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_inkly-debug"))
        .env_remove("RUST_LOG")
        .output()
        .expect("binary runs");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), GOLDEN);
    assert!(output.stderr.is_empty());
}
