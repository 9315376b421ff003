//! End-to-end dialog tests against stand-in zenity scripts
//!
//! Each script plays the part of zenity for one scenario. They are all
//! written once, before any test spawns a process, so no script is ever
//! executed while still open for writing.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::sync::OnceLock;

use chrono::NaiveDate;
use tempfile::TempDir;

use zenity_dialogs::{
    Auth, CalendarDialog, ColorDialog, Dialog, DialogBuilder, DialogKind, DialogRequest,
    DialogResult, FileSelectionDialog, FormField, FormsDialog, MessageDialog, PasswordDialog,
    ProgressDialog, Rgb, ScaleDialog, TextInfoDialog, ZenityConfig, ZenityError,
};

const SCRIPTS: &[(&str, &str)] = &[
    ("echo-args", "echo \"$*\""),
    ("color", "echo 'rgb(10,20,30)'"),
    ("color-bad", "echo 'rgb(a,b,c)'"),
    (
        "password",
        "for a in \"$@\"; do\n  if [ \"$a\" = \"--username\" ]; then echo 'bob|secret'; exit 0; fi\ndone\necho secret",
    ),
    ("password-piped", "echo 'pa|ss'"),
    ("forms", "echo 'Alice|30|NYC'"),
    ("progress", "while read line; do echo \"got $line\"; done"),
    ("accept", "exit 0"),
    ("reject", "exit 1"),
    ("calendar", "echo 2024-02-29"),
    ("scale", "echo 42"),
    ("files", "echo '/tmp/a.txt|/tmp/b.txt'"),
    ("files-colon", "echo '/tmp/a.txt:/tmp/b.txt'"),
    ("text", "printf 'line one\\nline two\\n'"),
    ("lines", "echo first; echo second; echo third"),
    ("sleep", "exec sleep 30"),
];

fn fixtures() -> &'static TempDir {
    static DIR: OnceLock<TempDir> = OnceLock::new();
    DIR.get_or_init(|| {
        let dir = TempDir::new().expect("Failed to create fixture dir");
        for (name, body) in SCRIPTS {
            let path = dir.path().join(name);
            std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write script");
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
                .expect("Failed to chmod script");
        }
        dir
    })
}

fn fake(name: &str) -> PathBuf {
    fixtures().path().join(name)
}

#[test]
fn test_process_receives_built_arguments() {
    for kind in DialogKind::ALL {
        let request = DialogRequest::new(kind)
            .binary(fake("echo-args"))
            .option("window_icon", "dialog-information")
            .option("text", "hello");
        let expected = request.args()[1..].join(" ");

        let mut dialog = Dialog::open(request).unwrap();
        assert_eq!(dialog.read().unwrap(), expected);
        assert!(expected.starts_with(&format!("--{} --window-icon dialog-information --text hello", kind)));
    }
}

#[test]
fn test_generic_result_uses_preset_decoder() {
    let request = DialogRequest::from_name("color-selection")
        .unwrap()
        .binary(fake("color"));
    let mut dialog = Dialog::open(request).unwrap();
    assert_eq!(
        dialog.result().unwrap(),
        DialogResult::Color(Some(Rgb { red: 10, green: 20, blue: 30 }))
    );
}

#[test]
fn test_color_prompt() {
    let color = ColorDialog::new().binary(fake("color")).prompt().unwrap();
    assert_eq!(color, Some(Rgb { red: 10, green: 20, blue: 30 }));

    let color = ColorDialog::new().binary(fake("color-bad")).prompt().unwrap();
    assert_eq!(color, None);
}

#[test]
fn test_password_prompt() {
    let auth = PasswordDialog::new().binary(fake("password")).prompt().unwrap();
    assert_eq!(
        auth,
        Auth {
            username: None,
            password: "secret".to_string(),
        }
    );

    let auth = PasswordDialog::new()
        .binary(fake("password"))
        .username(true)
        .prompt()
        .unwrap();
    assert_eq!(auth.username.as_deref(), Some("bob"));
    assert_eq!(auth.password, "secret");
}

#[test]
fn test_password_falsy_username_is_not_split() {
    let auth = PasswordDialog::new()
        .binary(fake("password-piped"))
        .option("username", "false")
        .prompt()
        .unwrap();
    assert_eq!(
        auth,
        Auth {
            username: None,
            password: "pa|ss".to_string(),
        }
    );
}

#[test]
fn test_forms_prompt() {
    let form = FormsDialog::new()
        .binary(fake("forms"))
        .field(FormField::entry("Name"))
        .field(FormField::new("entry", "Age").unwrap())
        .field(FormField::entry("City"))
        .prompt()
        .unwrap();

    assert_eq!(form.len(), 3);
    assert_eq!(form["Name"], "Alice");
    assert_eq!(form["Age"], "30");
    assert_eq!(form["City"], "NYC");
}

#[test]
fn test_progress_updates_and_completion() {
    let mut progress = ProgressDialog::new()
        .binary(fake("progress"))
        .show()
        .unwrap();

    progress.set_progress(50).unwrap();
    assert_eq!(progress.dialog_mut().read().unwrap(), "got 50");
    assert!(progress.is_running());
    assert_eq!(progress.progress(), 50);

    progress.set_text("Halfway").unwrap();
    assert_eq!(progress.dialog_mut().read().unwrap(), "got # Halfway");

    // the final value is written, but the dialog is killed before it has to
    // be read back
    progress.set_progress(100).unwrap();
    assert_eq!(progress.progress(), 100);
    assert!(!progress.is_running());
}

#[test]
fn test_question_exit_code() {
    assert!(MessageDialog::question("Continue?")
        .binary(fake("accept"))
        .confirm()
        .unwrap());
    assert!(!MessageDialog::question("Continue?")
        .binary(fake("reject"))
        .confirm()
        .unwrap());
}

#[test]
fn test_calendar_prompt_date() {
    let date = CalendarDialog::new()
        .binary(fake("calendar"))
        .date_format("%Y-%m-%d")
        .prompt_date()
        .unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29));

    let date = CalendarDialog::new()
        .binary(fake("calendar"))
        .prompt_date()
        .unwrap();
    assert_eq!(date, None);
}

#[test]
fn test_scale_prompt() {
    let value = ScaleDialog::new().binary(fake("scale")).prompt().unwrap();
    assert_eq!(value, Some(42));
}

#[test]
fn test_file_selection_multiple() {
    let files = FileSelectionDialog::new()
        .binary(fake("files"))
        .multiple()
        .prompt()
        .unwrap();
    assert_eq!(files, vec![PathBuf::from("/tmp/a.txt"), PathBuf::from("/tmp/b.txt")]);
}

#[test]
fn test_file_selection_configured_separator() {
    let mut config = ZenityConfig::default();
    config.defaults.insert("separator".to_string(), ":".to_string());

    let files = FileSelectionDialog::new()
        .config(&config)
        .binary(fake("files-colon"))
        .multiple()
        .prompt()
        .unwrap();
    assert_eq!(files, vec![PathBuf::from("/tmp/a.txt"), PathBuf::from("/tmp/b.txt")]);
}

#[test]
fn test_text_info_reads_all_lines() {
    let text = TextInfoDialog::new()
        .binary(fake("text"))
        .editable(true)
        .prompt()
        .unwrap();
    assert_eq!(text, "line one\nline two");
}

#[test]
fn test_history_records_reads() {
    let mut dialog = Dialog::open(DialogRequest::new(DialogKind::List).binary(fake("lines"))).unwrap();
    dialog.read().unwrap();
    dialog.read().unwrap();
    assert_eq!(dialog.history(), &["first", "second"]);
}

#[test]
fn test_deferred_start() {
    let request = DialogRequest::new(DialogKind::Entry)
        .binary(fake("scale"))
        .start(false);
    let mut dialog = Dialog::open(request).unwrap();
    assert!(!dialog.is_started());

    dialog.run().unwrap();
    assert_eq!(dialog.read().unwrap(), "42");
    // a second run keeps the same process
    dialog.run().unwrap();
    assert_eq!(dialog.read().unwrap(), "");
}

#[test]
fn test_stop_terminates_process() {
    let mut dialog = Dialog::open(DialogRequest::new(DialogKind::Info).binary(fake("sleep"))).unwrap();
    assert!(dialog.is_running());
    dialog.stop().unwrap();
    assert!(!dialog.is_running());
}

#[test]
fn test_missing_binary() {
    let missing = fixtures().path().join("no-such-zenity");
    let err = ColorDialog::new().binary(missing).prompt().unwrap_err();
    assert!(matches!(err, ZenityError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
}
