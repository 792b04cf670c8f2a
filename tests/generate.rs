use std::fs;

use l2_fixture_gen::{generate, render_to_string, ArrayLength};

#[test]
fn writes_header_to_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.h");
    let len = ArrayLength::new(9).unwrap();

    let written = generate(&path, len).unwrap();
    assert_eq!(written, path);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        render_to_string(len).unwrap()
    );
}

#[test]
fn overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.h");
    fs::write(&path, "stale contents that are much longer than the new header ".repeat(100))
        .unwrap();

    generate(&path, ArrayLength::new(1).unwrap()).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains("stale"));
    assert!(text.contains("uint32_t l2_data_flat[1] = {\n\t0\n};\n"));
}

#[test]
fn same_length_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.h");
    let b = dir.path().join("b.h");
    let len = ArrayLength::new(1000).unwrap();

    generate(&a, len).unwrap();
    generate(&b, len).unwrap();
    generate(&b, len).unwrap();
    assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
}

#[test]
fn missing_directory_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("data.h");

    let err = generate(&path, ArrayLength::new(4).unwrap()).unwrap_err();
    assert!(format!("{err:#}").contains("no_such_dir"));
    assert!(err.root_cause().downcast_ref::<std::io::Error>().is_some());
}
