#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

pub fn hl() -> Command {
    cargo_bin_cmd!("helferlist")
}

/// Event with two jobs whose names collide after truncation, a helper in
/// two shifts and one empty shift.
pub const EVENT_YAML: &str = r#"
name: Summer Fest
ask_phone: true
ask_shirt: true
ask_nutrition: true
helpers:
  - id: 1
    firstname: Anna
    surname: Doe
    email: anna@example.org
    phone: "+49 170 1234567"
    shirt: M
    nutrition: vegan
  - id: 2
    firstname: Ben
    surname: Roe
    email: ben@example.org
    phone: "0171 555"
    shirt: XL_GIRLY
    nutrition: other
    comment: "=no nuts"
  - id: 3
    firstname: Cleo
    surname: Poe
    email: cleo@example.org
    nutrition: vegetarian
    infection_instruction: needed
jobs:
  - name: Kitchen Crew Morning Shift A
    infection_instruction: true
    coordinators: [1]
    shifts:
      - name: Breakfast
        begin: 2024-06-01T07:00:00
        end: 2024-06-01T10:00:00
        number: 2
        helpers: [1, 3]
      - begin: 2024-06-02T07:00:00
        end: 2024-06-02T10:00:00
        number: 2
        helpers: []
  - name: Kitchen Crew Morning Shift B
    shifts:
      - name: Lunch
        begin: 2024-06-01T11:00:00
        end: 2024-06-01T14:00:00
        unlimited: true
        helpers: [2, 1]
"#;

/// Path inside the system temp dir, any previous file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_helferlist.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Writes the sample event as YAML and returns its path.
pub fn sample_event(name: &str) -> String {
    let path = temp_path(name, "yaml");
    fs::write(&path, EVENT_YAML).expect("write sample event");
    path
}

/// Configuration path that does not exist yet, so defaults apply.
pub fn isolated_config(name: &str) -> String {
    temp_path(&format!("{name}_config"), "conf")
}

/// Reads one entry of an xlsx file (a zip archive) as text.
pub fn xlsx_entry(path: &str, entry: &str) -> String {
    let file = fs::File::open(path).expect("open xlsx");
    let mut archive = zip::ZipArchive::new(file).expect("xlsx is a zip archive");
    let mut content = String::new();
    archive
        .by_name(entry)
        .expect("entry present")
        .read_to_string(&mut content)
        .expect("read entry");
    content
}
