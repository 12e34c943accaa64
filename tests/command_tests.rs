//! Execution tests. A `/bin/sh -c` script stands in for pdftotext, so these run
//! without Xpdf or Poppler installed; the script sees the options as `$1..`
//! followed by the input path and the `-` stdout marker.
#![cfg(unix)]

use std::io::Read;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use pdftotext::{Command, CommandOption, ExecError, Error, TextMode};

const ECHO_ARGS: &str = r#"printf '%s\n' "$@""#;

fn sh(script: &str, options: Vec<CommandOption>) -> Command {
    let mut opts = vec![
        CommandOption::CustomPath("/bin/sh".into()),
        CommandOption::Arg("-c".into()),
        CommandOption::Arg(script.into()),
        CommandOption::Arg("pdftotext".into()),
    ];
    opts.extend(options);
    Command::new(opts)
}

/// Runs a script that accepts the document only when `$1 $2` is the expected
/// password flag and value, mimicking pdftotext on an encrypted file.
fn encrypted(flag: &str, password: &str, options: Vec<CommandOption>) -> Command {
    let script = format!(
        r#"if [ "$1" = "{flag}" ] && [ "$2" = "{password}" ]; then echo "secret text"; else echo "Command Line Error: Incorrect password" >&2; exit 1; fi"#
    );
    sh(&script, options)
}

#[test]
fn run_passes_options_then_input_then_stdout_marker() {
    let cmd = sh(
        ECHO_ARGS,
        vec![
            CommandOption::NoPageBreak,
            CommandOption::Encoding("UTF-8".into()),
            CommandOption::Mode(TextMode::Layout),
        ],
    );

    let mut out = cmd.run("doc.pdf").unwrap();
    let mut text = String::new();
    out.read_to_string(&mut text).unwrap();

    assert_eq!(text, "-nopgbrk\n-enc\nUTF-8\n-layout\ndoc.pdf\n-\n");
}

#[test]
fn arguments_are_never_shell_interpolated() {
    let tricky = "a b; echo pwned $(id -u) `id -u`.pdf";
    let cmd = sh(
        ECHO_ARGS,
        vec![CommandOption::UserPassword("p'a\"ss $HOME".into())],
    );

    let text = cmd.run_to_string(tricky).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines, ["-upw", "p'a\"ss $HOME", tricky, "-"]);
}

#[test]
fn composite_margin_reaches_the_process_in_trbl_order() {
    let cmd = sh(
        ECHO_ARGS,
        vec![CommandOption::Margin {
            top: 1,
            right: 2,
            bottom: 3,
            left: 4,
        }],
    );

    let text = cmd.run_to_string("doc.pdf").unwrap();
    assert_eq!(
        text,
        "-margint\n1\n-marginr\n2\n-marginb\n3\n-marginl\n4\ndoc.pdf\n-\n"
    );
}

#[test]
fn non_zero_exit_is_an_execution_error_with_stderr() {
    let cmd = sh(
        r#"echo "I/O Error: Couldn't open file '$1'" >&2; exit 1"#,
        vec![],
    );

    let err = cmd.run("/nonexistent/input.pdf").unwrap_err();

    match &err {
        Error::Execution(ExecError::Exit { code, stderr }) => {
            assert_eq!(*code, Some(1));
            assert!(stderr.contains("Couldn't open file '/nonexistent/input.pdf'"));
        }
        other => panic!("expected exit error, got {other:?}"),
    }
    assert!(err.stderr().is_some());
    assert!(err.to_string().contains("exit code 1"));
}

#[test]
fn failed_run_returns_no_partial_output() {
    let cmd = sh("echo partial text; exit 3", vec![]);

    let err = cmd.run("doc.pdf").unwrap_err();
    assert!(matches!(
        err,
        Error::Execution(ExecError::Exit { code: Some(3), .. })
    ));
}

#[test]
fn missing_executable_is_a_spawn_error() {
    let cmd = Command::new([CommandOption::CustomPath(
        "/definitely/not/here/pdftotext".into(),
    )]);

    let err = cmd.run("doc.pdf").unwrap_err();

    match err {
        Error::Execution(ExecError::Spawn { path, source }) => {
            assert_eq!(path, Path::new("/definitely/not/here/pdftotext"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected spawn error, got {other:?}"),
    }
}

#[test]
fn password_protected_document_needs_the_right_password() {
    let no_password = encrypted("-upw", "s3cret", vec![]);
    let err = no_password.run("locked.pdf").unwrap_err();
    assert!(err.stderr().unwrap().contains("Incorrect password"));

    let wrong = encrypted(
        "-upw",
        "s3cret",
        vec![CommandOption::UserPassword("guess".into())],
    );
    assert!(wrong.run("locked.pdf").is_err());

    let user = encrypted(
        "-upw",
        "s3cret",
        vec![CommandOption::UserPassword("s3cret".into())],
    );
    assert_eq!(user.run_to_string("locked.pdf").unwrap(), "secret text\n");

    let owner = encrypted(
        "-opw",
        "0wner",
        vec![CommandOption::OwnerPassword("0wner".into())],
    );
    assert_eq!(owner.run_to_string("locked.pdf").unwrap(), "secret text\n");
}

#[test]
fn invalid_utf8_output_is_an_io_error_when_decoding() {
    let cmd = sh(r"printf '\377\376'", vec![]);

    let raw = cmd.run("doc.pdf").unwrap().into_inner();
    assert_eq!(raw, [0xff, 0xfe]);

    let err = cmd.run_to_string("doc.pdf").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn timeout_kills_a_hung_process() {
    let cmd = sh("exec sleep 30", vec![]);

    let started = Instant::now();
    let err = cmd
        .run_with_timeout("doc.pdf", Duration::from_millis(200))
        .unwrap_err();

    assert!(matches!(err, Error::Timeout(d) if d == Duration::from_millis(200)));
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[test]
fn timeout_returns_while_a_forked_helper_keeps_the_pipes_open() {
    // the backgrounded sleep outlives its killed parent and holds stdout/stderr
    let cmd = sh("sleep 5 & wait", vec![]);

    let started = Instant::now();
    let err = cmd
        .run_with_timeout("doc.pdf", Duration::from_millis(200))
        .unwrap_err();

    assert!(matches!(err, Error::Timeout(_)));
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[test]
fn unrepresentable_timeout_waits_without_a_deadline() {
    let cmd = Command::new([CommandOption::CustomPath("/bin/echo".into())]);

    let out = cmd
        .run_with_timeout("doc.pdf", Duration::from_secs(u64::MAX))
        .unwrap();

    assert_eq!(out.into_inner(), b"doc.pdf -\n");
}

#[test]
fn timeout_does_not_affect_a_fast_process() {
    let cmd = sh(ECHO_ARGS, vec![CommandOption::Mode(TextMode::Raw)]);

    let out = cmd
        .run_with_timeout("doc.pdf", Duration::from_secs(20))
        .unwrap();

    assert_eq!(out.into_inner(), b"-raw\ndoc.pdf\n-\n");
}

#[test]
fn timed_run_still_reports_exit_failures() {
    let cmd = sh("echo broken >&2; exit 2", vec![]);

    let err = cmd
        .run_with_timeout("doc.pdf", Duration::from_secs(20))
        .unwrap_err();

    assert_eq!(err.stderr(), Some("broken\n"));
}

#[test]
fn large_output_does_not_block_a_timed_run() {
    // more than a pipe buffer on both streams
    let cmd = sh(
        "i=0; while [ $i -lt 20000 ]; do echo line-$i; echo err-$i >&2; i=$((i+1)); done",
        vec![],
    );

    let text = cmd
        .run_with_timeout("doc.pdf", Duration::from_secs(60))
        .map(|c| String::from_utf8(c.into_inner()).unwrap())
        .unwrap();

    assert_eq!(text.lines().count(), 20000);
    assert_eq!(text.lines().next_back(), Some("line-19999"));
}

#[test]
fn cancellation_kills_the_process() {
    let cmd = sh("exec sleep 30", vec![]);
    let cancel = AtomicBool::new(false);

    let started = Instant::now();
    let result = thread::scope(|s| {
        s.spawn(|| {
            thread::sleep(Duration::from_millis(150));
            cancel.store(true, Ordering::SeqCst);
        });
        cmd.run_until_cancelled("doc.pdf", &cancel)
    });

    assert!(matches!(result, Err(Error::Cancelled)));
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[test]
fn concurrent_runs_keep_their_output_apart() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let cmd = sh(ECHO_ARGS, vec![CommandOption::PageFrom(i)]);
                let input = format!("doc-{i}.pdf");
                (i, cmd.run_to_string(&input).unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (i, text) = handle.join().unwrap();
        assert_eq!(text, format!("-f\n{i}\ndoc-{i}.pdf\n-\n"));
    }
}

#[test]
fn one_command_can_be_shared_across_threads() {
    let cmd = sh(ECHO_ARGS, vec![CommandOption::NoTextDiagonal]);

    thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let cmd = &cmd;
                s.spawn(move || cmd.run_to_string(format!("in-{i}.pdf")).unwrap())
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("-nodiag\nin-{i}.pdf\n-\n"));
        }
    });
}

#[test]
fn describe_never_runs_the_command() {
    let cmd = sh("exit 99", vec![CommandOption::Mode(TextMode::Simple2)]);
    assert_eq!(
        cmd.describe(),
        "/bin/sh -c exit 99 pdftotext -simple2 <inpath>"
    );
}
