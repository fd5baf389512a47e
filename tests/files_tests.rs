use std::fs;

use quizgrade::files;
use uuid::Uuid;

#[test]
fn reads_lines_without_terminators() {
    let root = std::env::temp_dir().join(format!("quizgrade-files-{}", Uuid::new_v4()));
    fs::create_dir_all(&root).expect("create temp root");
    let path = root.join("key.txt");
    fs::write(&path, "MC:1\r\n\nFREE:a:2\n").expect("write file");

    assert_eq!(files::read_lines(&path).expect("read lines"), vec!["MC:1", "", "FREE:a:2"]);
    assert_eq!(files::read_file(&path).expect("read file"), "MC:1\r\n\nFREE:a:2\n");
    assert!(files::exists(&path));
    assert!(!files::is_dir(&path));
    assert!(files::is_dir(&root));
    assert!(!files::exists(&root.join("missing")));
    assert!(!files::is_dir(&root.join("missing")));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn invalid_utf8_is_replaced_not_rejected() {
    let root = std::env::temp_dir().join(format!("quizgrade-files-{}", Uuid::new_v4()));
    fs::create_dir_all(&root).expect("create temp root");
    let path = root.join("latin1");
    fs::write(&path, b"caf\xe9").expect("write file");

    assert_eq!(files::read_file(&path).expect("read file"), "caf\u{FFFD}");

    let _ = fs::remove_dir_all(root);
}
