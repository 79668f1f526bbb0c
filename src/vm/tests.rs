use super::*;
use crate::errors::ErrorKind;

fn run(source: &str) -> RunResult {
    super::run(source, VMOptions::default())
}

fn output(source: &str) -> Vec<String> {
    let result = run(source);
    assert_eq!(result.error, None);
    result.output
}

fn error(source: &str) -> RunError {
    run(source).error.expect("expected a run error")
}

const EXIT_RECORD: &str = "Exiting INTERFUCK IDE";

#[test]
fn test_empty_program_is_missing_exit() {
    let result = run("");
    assert_eq!(result.error, Some(RunError::MissingExit));
    assert_eq!(result.output, Vec::<String>::new());
}

#[test]
fn test_missing_exit_produces_no_output() {
    // Even a program full of valid actions runs nothing without EXIT.
    let result = run("PLEASE DO :1.\n5\nPLEASE CALL :4.");
    assert_eq!(result.error, Some(RunError::MissingExit));
    assert_eq!(result.error.unwrap().kind(), ErrorKind::Stupid);
    assert_eq!(result.output, Vec::<String>::new());
    assert_eq!(result.actions_run, 0);
}

#[test]
fn test_exit_inside_comment_does_not_count() {
    assert_eq!(error("PLEASE CALL :4. // PLEASE EXIT :6."), RunError::MissingExit);
}

#[test]
fn test_call_on_empty_databer() {
    assert_eq!(output("PLEASE CALL :4.\nPLEASE EXIT :6."), vec!["empty", EXIT_RECORD]);
}

#[test]
fn test_value_outside_table_renders_decimal() {
    let source = "PLEASE DO :1.\n100\nPLEASE CALL :4.\nPLEASE EXIT :6.";
    assert_eq!(output(source), vec!["100", EXIT_RECORD]);
}

#[test]
fn test_negative_value_renders_decimal() {
    let source = "PLEASE DO :1.\n-5\nPLEASE CALL :4.\nPLEASE EXIT :6.";
    assert_eq!(output(source), vec!["-5", EXIT_RECORD]);
}

#[test]
fn test_hello() {
    let mut source = String::new();
    for value in [9, 6, 13, 13, 16] {
        source.push_str(&format!("PLEASE DO :1.\n{value}\n"));
    }
    source.push_str("PLEASE CALL :4.\nPLEASE EXIT :6.");
    assert_eq!(output(&source), vec!["hello", EXIT_RECORD]);
}

#[test]
fn test_update_and_remove_between_calls() {
    let source = "\
PLEASE DO :1.
2
PLEASE DO :1.
3
PLEASE DO :1.
4
PLEASE CALL :4.
PLEASE LET :3. 1
27
PLEASE CALL :4.
PLEASE DONT :2. 2
PLEASE CALL :4.
PLEASE EXIT :6.";
    assert_eq!(output(source), vec!["abc", "azc", "az", EXIT_RECORD]);
}

#[test]
fn test_removal_shifts_indices() {
    // Removing index 0 twice removes the two originally-adjacent first
    // elements, not elements 0 and 2.
    let source = "\
PLEASE DO :1.
2
PLEASE DO :1.
3
PLEASE DO :1.
4
PLEASE DONT :2. 0
PLEASE DONT :2. 0
PLEASE CALL :4.
PLEASE EXIT :6.";
    let result = run(source);
    assert_eq!(result.error, None);
    assert_eq!(result.output, vec!["c", EXIT_RECORD]);
    assert_eq!(result.databer.datalings(), &[4]);
}

#[test]
fn test_code_64_renders_as_two_characters() {
    assert_eq!(output("PLEASE DO :1.\n64\nPLEASE CALL :4.\nPLEASE EXIT :6."), vec!["10", EXIT_RECORD]);
    // Codes 55 and 54 in sequence produce the same text; the ambiguity is
    // part of the language.
    let source = "PLEASE DO :1.\n55\nPLEASE DO :1.\n54\nPLEASE CALL :4.\nPLEASE EXIT :6.";
    assert_eq!(output(source), vec!["10", EXIT_RECORD]);
}

#[test]
fn test_do_followed_by_exit_has_no_value() {
    let result = run("PLEASE DO :1.\nPLEASE EXIT :6.");
    assert_eq!(
        result.error,
        Some(RunError::ExpectedValue { command: crate::parser::DO })
    );
    assert_eq!(result.output, Vec::<String>::new());
}

#[test]
fn test_breach_clears_databer() {
    let source = "\
PLEASE DO :1.
2
PLEASE BREACH :5.
PLEASE CALL :4.
PLEASE EXIT :6.";
    let result = run(source);
    assert_eq!(result.error, None);
    assert_eq!(result.output, vec!["empty", EXIT_RECORD]);
    assert!(result.databer.is_empty());
}

#[test]
fn test_exit_ignores_remaining_lines() {
    // Anything after EXIT never runs, including lines that would fail.
    let source = "PLEASE EXIT :6.\nPLEASE DONT :2. 99\nutter nonsense";
    assert_eq!(output(source), vec![EXIT_RECORD]);
}

#[test]
fn test_remove_out_of_range() {
    let err = error("PLEASE DONT :2. 0\nPLEASE EXIT :6.");
    assert_eq!(err, RunError::RemoveOutOfRange { index: 0 });
    assert_eq!(err.kind(), ErrorKind::Stupid);
}

#[test]
fn test_update_out_of_range() {
    let source = "PLEASE DO :1.\n2\nPLEASE LET :3. 1\n5\nPLEASE EXIT :6.";
    assert_eq!(error(source), RunError::UpdateOutOfRange { index: 1 });
}

#[test]
fn test_output_before_failure_is_kept() {
    let source = "\
PLEASE DO :1.
2
PLEASE CALL :4.
PLEASE DONT :2. 5
PLEASE EXIT :6.";
    let result = run(source);
    assert_eq!(result.output, vec!["a"]);
    assert_eq!(result.error, Some(RunError::RemoveOutOfRange { index: 5 }));
    // The returned Databer is the state at the moment of failure.
    assert_eq!(result.databer.datalings(), &[2]);
}

#[test]
fn test_unrecognized_line() {
    let err = error("do something\nPLEASE EXIT :6.");
    assert_eq!(err, RunError::UnrecognizedAction { line: "do something".to_string() });
    assert_eq!(err.kind(), ErrorKind::Stupid);
}

#[test]
fn test_validation_error_kinds() {
    assert_eq!(error("PLEASE FROB :1\nPLEASE EXIT :6.").kind(), ErrorKind::Amnesia);
    assert_eq!(error("PLEASE DO .1\nPLEASE EXIT :6.").kind(), ErrorKind::Amnesia);
    assert_eq!(error("PLEASE DO :1..\nPLEASE EXIT :6.").kind(), ErrorKind::OrbOverload);
    assert_eq!(error("PLEASE FROB :7.\nPLEASE EXIT :6.").kind(), ErrorKind::Syntax);
}

#[test]
fn test_comments_and_blank_lines() {
    let source = "\
// builds a single-letter word
PLEASE DO :1.

2 // the letter a

PLEASE CALL :4. // show it
PLEASE EXIT :6.";
    assert_eq!(output(source), vec!["a", EXIT_RECORD]);
}

#[test]
fn test_trace_records() {
    let source = "\
PLEASE DO :1.
2
PLEASE LET :3. 0
3
PLEASE DONT :2. 0
PLEASE BREACH :5.
PLEASE EXIT :6.";
    let result = super::run(source, VMOptions { trace: true, ..VMOptions::default() });
    assert_eq!(result.error, None);
    assert_eq!(
        result.output,
        vec![
            "Created Dataling with value: 2 at index 0",
            "Updated Dataling at index 0 with value: 3",
            "Removed Dataling at index: 0",
            "All Datalings removed from Databer",
            EXIT_RECORD,
        ]
    );
}

#[test]
fn test_final_state_is_exposed() {
    let source = "\
PLEASE DO :1.
2
PLEASE DO :1.
3
PLEASE LET :3. 1
27
PLEASE EXIT :6.";
    let result = run(source);
    assert_eq!(result.error, None);
    assert_eq!(result.databer.datalings(), &[2, 27]);
    assert_eq!(result.databer.len(), 2);
}

#[test]
fn test_action_cap() {
    let source = "PLEASE CALL :4.\nPLEASE CALL :4.\nPLEASE CALL :4.\nPLEASE EXIT :6.";
    let options = VMOptions { max_actions: 2, ..VMOptions::default() };
    let result = super::run(source, options);
    assert_eq!(result.error, Some(RunError::TooManyActions { limit: 2 }));
    assert_eq!(result.error.unwrap().kind(), ErrorKind::Stupid);
    assert_eq!(result.output, vec!["empty", "empty"]);
    assert_eq!(result.actions_run, 2);
}

#[test]
fn test_actions_run_counts_exit() {
    let result = run("PLEASE CALL :4.\nPLEASE EXIT :6.");
    assert_eq!(result.actions_run, 2);
}
