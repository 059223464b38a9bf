use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const DOC: &str = "\
\\documentclass{article}
Some prose.
\\begin{code}
int main(void)
{
\\end{code}
More prose.
\\begin{code}
    return 0;
}
\\end{code}
The end.
";

fn litc() -> Command {
    Command::cargo_bin("litc").expect("binary should be built")
}

#[test]
fn test_extract_from_stdin_to_stdout() {
    litc()
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("int main(void)\n{\n\n    return 0;\n}\n");
}

#[test]
fn test_extract_from_file_argument() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("prog.tex");
    fs::write(&input, "intro\n\\begin{code}\nx=1\n\\end{code}\noutro\n")?;

    litc().arg(&input).assert().success().stdout("x=1\n");
    Ok(())
}

#[test]
fn test_annotate_mode() {
    litc()
        .args(["--mode", "annotate"])
        .write_stdin("intro\n\\begin{code}\nx=1\n\\end{code}\noutro\n")
        .assert()
        .success()
        .stdout("// intro\n// \\begin{code}\nx=1\n// \\end{code}\n// outro\n");
}

#[test]
fn test_annotate_with_custom_prefix() {
    litc()
        .args(["-m", "annotate", "-c", "# "])
        .write_stdin("text\n\\begin{code}\nprint(1)\n\\end{code}\n")
        .assert()
        .success()
        .stdout("# text\n# \\begin{code}\nprint(1)\n# \\end{code}\n");
}

#[test]
fn test_markdown_markers() {
    litc()
        .args(["--begin", "```python", "--end", "```"])
        .write_stdin("# Heading\n```python\nprint('hi')\n```\n")
        .assert()
        .success()
        .stdout("print('hi')\n");
}

#[test]
fn test_output_file_is_truncated_and_rerun_is_identical() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("doc.tex");
    let output = dir.path().join("out.c");
    fs::write(&input, DOC)?;
    fs::write(&output, "old contents that must disappear\n")?;

    litc().arg("-o").arg(&output).arg(&input).assert().success().stdout("");
    let first = fs::read(&output)?;
    assert_eq!(first, b"int main(void)\n{\n\n    return 0;\n}\n");

    litc().arg("-o").arg(&output).arg(&input).assert().success();
    assert_eq!(fs::read(&output)?, first);
    Ok(())
}

#[test]
fn test_identical_markers_rejected() {
    litc()
        .args(["-b", "```", "-e", "```"])
        .write_stdin("```\nx\n```\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be different"));
}

#[test]
fn test_spurious_end_reports_line() {
    litc()
        .write_stdin("intro\n\\end{code}\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("end marker '\\end{code}'").and(predicate::str::contains("line 2")));
}

#[test]
fn test_unterminated_block_reports_begin_line() {
    litc()
        .write_stdin("\\begin{code}\na\n\\begin{code}\nb\n\\end{code}\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1").and(predicate::str::contains("missing the end marker")));
}

#[test]
fn test_zero_code_blocks_fails() {
    litc()
        .write_stdin("only prose here\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("zero code blocks"));
}

#[test]
fn test_empty_input_fails() {
    litc()
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("zero code blocks"));
}

#[test]
fn test_missing_input_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    litc()
        .arg(dir.path().join("missing.tex"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open file"));
    Ok(())
}

#[test]
fn test_failed_scan_leaves_output_truncated() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let output = dir.path().join("out.c");
    fs::write(&output, "previous build\n")?;

    litc()
        .arg("--output")
        .arg(&output)
        .write_stdin("\\begin{code}\nnever closed\n")
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&output)?, "");
    Ok(())
}

#[test]
fn test_output_flag_given_twice_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    litc()
        .arg("-o")
        .arg(dir.path().join("a.c"))
        .arg("-o")
        .arg(dir.path().join("b.c"))
        .write_stdin(DOC)
        .assert()
        .failure();
    Ok(())
}

#[test]
fn test_report_written_on_success() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let report = dir.path().join("report.json");

    litc().arg("--report").arg(&report).write_stdin(DOC).assert().success();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report)?)?;
    assert_eq!(value["blocks"], 2);
    assert_eq!(value["mode"], "extract");
    assert_eq!(value["input"], "stdin");
    assert_eq!(value["lines_emitted"], 5);
    assert_eq!(value["code_lines"], 4);
    Ok(())
}

#[test]
fn test_non_utf8_code_lines_are_copied_byte_for_byte() {
    let output = litc()
        .write_stdin(&b"\\begin{code}\nchar c = '\xe9';\n\\end{code}\n"[..])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(output, b"char c = '\xe9';\n".to_vec());
}

#[test]
fn test_non_utf8_prose_survives_annotate_mode() {
    let output = litc()
        .args(["-m", "annotate"])
        .write_stdin(&b"caf\xe9\n\\begin{code}\nx\n\\end{code}\n"[..])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(output, b"// caf\xe9\n// \\begin{code}\nx\n// \\end{code}\n".to_vec());
}

#[test]
fn test_comment_prefix_starting_with_hyphen() {
    litc()
        .args(["-m", "annotate", "-c", "-- "])
        .write_stdin("module Main where\n\\begin{code}\nmain = pure ()\n\\end{code}\n")
        .assert()
        .success()
        .stdout("-- module Main where\n-- \\begin{code}\nmain = pure ()\n-- \\end{code}\n");
}

#[test]
fn test_markers_starting_with_hyphen() {
    litc()
        .args(["-b", "<!--code", "-e", "-->"])
        .write_stdin("<p>intro</p>\n<!--code\nlet x = 1;\n-->\n")
        .assert()
        .success()
        .stdout("let x = 1;\n");

    litc()
        .args(["--begin", "--- code", "--end", "--- end"])
        .write_stdin("--- code\ny\n--- end\n")
        .assert()
        .success()
        .stdout("y\n");
}

#[test]
fn test_nested_begin_names_the_marker_and_its_line() {
    litc()
        .write_stdin("prose\n\\begin{code}\na\n\\begin{code}\nb\n\\end{code}\n")
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("opened at 'stdin' line 2")
                .and(predicate::str::contains("begin marker '\\begin{code}' at line 4")),
        );
}
