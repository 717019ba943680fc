//! Behavioural tests for the console report produced by a run.

use proctor::reporting::Style;
use proctor::{Manager, Outcome, Verbosity};
use rstest::rstest;

fn alpha() -> Outcome {
    Outcome::Pass
}

fn beta() -> Outcome {
    Outcome::Fail
}

fn gamma() -> Outcome {
    Outcome::Skip
}

fn render(manager: &mut Manager<'_>, verbosity: Verbosity) -> (usize, String) {
    let mut buffer = Vec::new();
    let Ok(failed) = manager.test_with_writer(verbosity, &mut buffer) else {
        panic!("writing into a Vec cannot fail");
    };
    (failed, String::from_utf8_lossy(&buffer).into_owned())
}

fn scenario_manager(style: Style) -> Manager<'static> {
    let mut manager = Manager::with_style(style);
    manager.initialize("scenario");
    manager.add("gamma", gamma);
    manager.add("beta", beta);
    manager.add("alpha", alpha);
    manager
}

fn position(output: &str, needle: &str) -> usize {
    let Some(index) = output.find(needle) else {
        panic!("report should contain {needle:?}:\n{output}");
    };
    index
}

#[test]
fn verbose_scenario_reports_counts_and_order() {
    let mut manager = scenario_manager(Style::plain());
    let (failed, output) = render(&mut manager, Verbosity::Verbose);

    assert_eq!(failed, 1);
    let alpha = position(&output, "├─ ✔ alpha -> Pass");
    let beta = position(&output, "├─ ✗ beta -> Fail");
    let gamma = position(&output, "└─ ■ gamma -> Skip");
    assert!(alpha < beta && beta < gamma, "entries must be name-sorted");
    assert!(output.contains("   └─ Time: NONE"));
    assert!(output.contains("Passed: 1/2"));
    assert!(output.contains("Failed: 1/2"));
    assert!(output.contains("Skipped: 1"));
    assert!(output.contains("Total Elapsed Time: "));
}

#[test]
fn normal_output_omits_timing() {
    let mut manager = scenario_manager(Style::plain());
    let (_, output) = render(&mut manager, Verbosity::Normal);

    assert!(output.contains("  Testing: scenario"));
    assert!(output.contains("└─ ■ gamma -> Skip"));
    assert!(output.contains("Passed: 1/2"));
    assert!(!output.contains("Time:"));
    assert!(!output.contains("Total Elapsed Time"));
}

#[test]
fn quiet_output_is_empty() {
    let mut manager = scenario_manager(Style::plain());
    let (failed, output) = render(&mut manager, Verbosity::Quiet);
    assert_eq!(failed, 1);
    assert!(output.is_empty());
}

#[rstest]
#[case(Verbosity::Normal)]
#[case(Verbosity::Verbose)]
fn empty_run_reports_zero_denominators(#[case] verbosity: Verbosity) {
    let mut manager = Manager::with_style(Style::plain());
    let (failed, output) = render(&mut manager, verbosity);
    assert_eq!(failed, 0);
    assert!(output.contains("Passed: 0/0"));
    assert!(output.contains("Failed: 0/0"));
    assert!(output.contains("Skipped: 0"));
    assert!(!output.contains("├─"));
    assert!(!output.contains("└─"));
}

#[test]
fn last_connector_tracks_sorted_order_not_insertion() {
    let mut manager = Manager::with_style(Style::plain());
    manager.add("zeta", alpha);
    manager.add("alpha", alpha);
    let (_, output) = render(&mut manager, Verbosity::Normal);
    assert!(output.contains("├─ ✔ alpha -> Pass"));
    assert!(output.contains("└─ ✔ zeta -> Pass"));
}

#[test]
fn colored_style_paints_symbols_only() {
    let mut manager = scenario_manager(Style::colored());
    let (failed, output) = render(&mut manager, Verbosity::Normal);
    assert_eq!(failed, 1);
    assert!(output.contains("├─ \x1b[32m✔\x1b[0m alpha -> Pass"));
    assert!(output.contains("├─ \x1b[31m✗\x1b[0m beta -> Fail"));
    assert!(output.contains("└─ \x1b[33m■\x1b[0m gamma -> Skip"));
    assert!(output.contains("\x1b[1mscenario\x1b[0m"));
    assert!(output.contains("Passed: 1/2"));
}

#[test]
fn plain_style_emits_no_escape_codes() {
    let mut manager = scenario_manager(Style::plain());
    let (_, output) = render(&mut manager, Verbosity::Verbose);
    assert!(!output.contains('\x1b'));
}
