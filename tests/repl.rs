//! End-to-end sessions driven through in-memory I/O.

use std::io::Cursor;

use bstree::repl::Session;

/// Runs a full scripted session and returns everything it wrote.
fn run_session(script: &str) -> String {
    let mut output = Vec::new();
    {
        let mut session = Session::new(Cursor::new(script), &mut output);
        session
            .run()
            .expect("an in-memory session never hits an I/O error");
    }
    String::from_utf8(output).expect("session output is UTF-8")
}

#[test]
fn seeded_session_prints_all_three_traversals() {
    let output = run_session("5 3 8 1 4 7 9\nE\n");

    assert!(output.contains("Pre-order: 5 3 1 4 8 7 9 \n"));
    assert!(output.contains("In-order: 1 3 4 5 7 8 9 \n"));
    assert!(output.contains("Post-order: 1 4 3 7 9 8 5 \n"));
    assert!(output.contains("Command List:"));
    assert!(output.contains("// PROGRAM EXITED //"));
}

#[test]
fn seeding_skips_junk_zeros_and_duplicates() {
    let output = run_session("2 two 1 1 0 3\nE\n");

    assert!(output.contains("In-order: 1 2 3 \n"));
}

#[test]
fn commands_drive_the_tree() {
    let output = run_session("5 3 8 1 4 7 9\nP 5\nS 5\nP 1\nS 9\nD 3\nI 6\nE\n");

    // Answers appear on the same line as the prompt that asked for them.
    assert!(output.contains("Command? 4\n"));
    assert!(output.contains("Command? 7\n"));
    assert!(output.contains("1 has no predecessor.\n"));
    assert!(output.contains("9 has no successor.\n"));
    assert!(output.contains("In-order: 1 4 5 7 8 9 \n"));
    assert!(output.contains("In-order: 1 4 5 6 7 8 9 \n"));
}

#[test]
fn errors_are_reported_and_the_loop_continues() {
    let output = run_session("5\nI 0\nI 5\nD 9\nP 9\nQ\nI\nI x\n\nD 5\nD 1\nE\n");

    assert!(output.contains("Error: cannot add a zero value into the tree\n"));
    assert!(output.contains("Error: 5 already exists in this tree\n"));
    assert!(output.contains("Error: 9 does not exist in this tree\n"));
    assert!(output.contains("Error: invalid command\n"));
    assert!(output.contains("Error: please enter a value for this command\n"));
    assert!(output.contains("Error: please enter an integer\n"));
    // Deleting the only value empties the tree; the next delete reports it.
    assert!(output.contains("In-order: \n"));
    assert!(output.contains("Error: this tree is empty\n"));
    assert!(output.contains("// PROGRAM EXITED //"));
}

#[test]
fn help_is_printed_on_request() {
    let output = run_session("1\nH\nE\n");

    // Once after seeding and once for the H command.
    assert_eq!(output.matches("Command List:").count(), 2);
}

#[test]
fn end_of_input_ends_the_session() {
    let output = run_session("1 2 3\n");

    assert!(output.contains("In-order: 1 2 3 \n"));
    assert!(!output.contains("// PROGRAM EXITED //"));
}

#[test]
fn end_of_input_before_seeding_is_an_empty_session() {
    let output = run_session("");

    assert!(output.contains("> "));
    assert!(!output.contains("Pre-order:"));
}
