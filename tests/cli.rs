//! Command-line tests for the folder-tree binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const SAMPLE: &str = "pages\n  about.md\nposts\n";

fn folder_tree_cmd() -> Command {
    Command::cargo_bin("folder-tree").unwrap()
}

#[test]
fn renders_stdin_as_html() {
    folder_tree_cmd()
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "<ul class=\"depth-0 folder-tree\"><li><i class=\"icon-folder-close\"></i>",
        ))
        .stdout(predicate::str::contains(
            "<li><i class=\"icon-folder-close\"></i><span class=\"name\">posts</span></li>",
        ));
}

#[test]
fn dash_path_reads_stdin() {
    folder_tree_cmd()
        .args(["-", "--format", "treeviz"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("├─ 📁 pages\n│ └─ 📄 about.md\n└─ 📁 posts\n");
}

#[test]
fn renders_file_argument() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", SAMPLE).unwrap();

    folder_tree_cmd()
        .arg(file.path())
        .args(["--format", "treeviz"])
        .assert()
        .success()
        .stdout("├─ 📁 pages\n│ └─ 📄 about.md\n└─ 📁 posts\n");
}

#[test]
fn pretty_flag_indents_html() {
    folder_tree_cmd()
        .arg("--pretty")
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\n    <ul class=\"depth-1\">\n      <li><i class=\"icon-file-alt\"></i>",
        ));
}

#[test]
fn config_file_sets_default_format() {
    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "[output]\nformat = \"json\"").unwrap();

    folder_tree_cmd()
        .arg("--config")
        .arg(config.path())
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"about.md\""));
}

#[test]
fn records_flag_dumps_flat_records() {
    folder_tree_cmd()
        .arg("--records")
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"is_container\": false"))
        .stdout(predicate::str::contains("\"indent\": 2"));
}

#[test]
fn illegal_nesting_fails() {
    folder_tree_cmd()
        .write_stdin("pages\n    about.md\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Illegal nesting: 4 spaces at line #2 \"about.md\"",
        ));
}

#[test]
fn unknown_format_fails() {
    folder_tree_cmd()
        .args(["--format", "pdf"])
        .write_stdin(SAMPLE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Format 'pdf' not found"));
}

#[test]
fn lists_formats() {
    folder_tree_cmd()
        .arg("--list-formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("html"))
        .stdout(predicate::str::contains("treeviz"))
        .stdout(predicate::str::contains("yaml"));
}
