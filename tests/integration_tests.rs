//! Integration tests for the read-dispatch loop.
//!
//! These tests run the driver over in-memory input and check the status lines
//! and diagnostics it writes, the same way a terminal session would see them.

use toy::{
    driver::{Driver, Summary, PROMPT},
    lexer::lexer::Lexer,
    parser::parser::parse,
};

struct Output {
    summary: Summary,
    out: String,
    diagnostics: String,
}

fn run(source: &str, prompt: bool, dump_ast: bool) -> Output {
    let mut out = Vec::new();
    let mut diagnostics = Vec::new();

    let summary = Driver::new(Box::new(&mut out), Box::new(&mut diagnostics))
        .with_prompt(prompt)
        .with_ast_dump(dump_ast)
        .run(Lexer::new(source.chars(), Some("test.toy".to_string())))
        .unwrap();

    Output {
        summary,
        out: String::from_utf8(out).unwrap(),
        diagnostics: String::from_utf8(diagnostics).unwrap(),
    }
}

#[test]
fn test_session_status_lines() {
    let output = run("def foo(x y) x+y*2;\nextern sin(a);\nfoo(1, 2);\n", false, false);

    assert_eq!(
        output.out,
        "Parsed a function definition\nParsed an extern\nParsed a top level expression\n"
    );
    assert_eq!(output.diagnostics, "");
    assert_eq!(output.summary, Summary { parsed: 3, failed: 0 });
}

#[test]
fn test_failed_definition_reports_once() {
    let output = run("def foo(", false, false);

    assert_eq!(output.out, "Error failed to parse definition\n");
    assert_eq!(output.diagnostics, "Error expected ')' in prototype\n");
    assert_eq!(output.summary, Summary { parsed: 0, failed: 1 });
}

#[test]
fn test_failed_extern_and_expression() {
    let output = run("extern 1; 2 +", false, false);

    assert_eq!(
        output.out,
        "Error failed to parse extern\nError failed to parse top level expression\n"
    );
    assert_eq!(
        output.diagnostics,
        "Error expected function name in prototype\nError unknown token when expecting an expression\n"
    );
}

#[test]
fn test_recovery_skips_one_token() {
    // `)` is rejected and skipped, then `4` parses on its own
    let output = run(") 4", false, false);

    assert_eq!(
        output.out,
        "Error failed to parse top level expression\nParsed a top level expression\n"
    );
    assert_eq!(output.summary, Summary { parsed: 1, failed: 1 });
}

#[test]
fn test_every_attempt_gets_a_status_line() {
    let source = "def f(x) (x; extern g(; h(1 2); 1+2";
    let output = run(source, false, false);
    let outcomes = parse(source, None);

    assert_eq!(output.out.lines().count(), outcomes.len());
    assert_eq!(
        output.summary.parsed + output.summary.failed,
        outcomes.len()
    );
    assert_eq!(
        output.diagnostics.lines().count(),
        outcomes.iter().filter(|outcome| outcome.is_err()).count()
    );
}

#[test]
fn test_prompt_on_diagnostic_channel() {
    let output = run("1; 2", true, false);

    // One prompt before the first read, then one per dispatch
    assert_eq!(output.diagnostics, PROMPT.repeat(5));
    assert_eq!(output.out.lines().count(), 2);
}

#[test]
fn test_ast_dump() {
    let output = run("def sq(x) x*x\nsq(1+2)", false, true);

    assert_eq!(
        output.out,
        "Parsed a function definition\n(def sq (x) (* x x))\nParsed a top level expression\n(top-level (call sq (+ 1 2)))\n"
    );
}

#[test]
fn test_comments_and_empty_input() {
    let output = run("# nothing to see\n", false, false);

    assert_eq!(output.out, "");
    assert_eq!(output.summary, Summary::default());
}

#[test]
fn test_reader_input() {
    let mut out = Vec::new();
    let mut diagnostics = Vec::new();

    let summary = Driver::new(Box::new(&mut out), Box::new(&mut diagnostics))
        .run(Lexer::from_reader("extern cos(x)\ncos(0.5)".as_bytes(), None))
        .unwrap();

    assert_eq!(summary, Summary { parsed: 2, failed: 0 });
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Parsed an extern\nParsed a top level expression\n"
    );
}
