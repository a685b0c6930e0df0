use phonebook_core::Contact;
use phonebook_store::error::StoreError;
use phonebook_store::{load, save, ContactStore};
use std::fs;
use tempfile::TempDir;

fn contact(last_name: &str, phone: &str) -> Contact {
    Contact {
        last_name: last_name.to_string(),
        first_name: "Ivan".to_string(),
        patronymic: String::new(),
        organization: String::new(),
        work_phone: String::new(),
        personal_phone: phone.to_string(),
    }
}

#[test]
fn load_missing_file_is_empty() {
    let temp = TempDir::new().expect("temp dir");
    let contacts = load(&temp.path().join("phone_book.txt")).expect("load");
    assert!(contacts.is_empty());
}

#[test]
fn save_then_load_preserves_order() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("nested").join("phone_book.txt");
    let contacts = vec![
        contact("Zaitsev", "+79990000001"),
        contact("Abramov", "+79990000002"),
    ];

    save(&path, &contacts).expect("save");
    let raw = fs::read_to_string(&path).expect("read");
    assert_eq!(
        raw,
        "Zaitsev,Ivan,,,,+79990000001\nAbramov,Ivan,,,,+79990000002\n"
    );
    assert_eq!(load(&path).expect("load"), contacts);
    assert!(!temp.path().join("nested").join("phone_book.txt.tmp").exists());
}

#[cfg(unix)]
#[test]
fn save_restricts_file_permissions() {
    use std::os::unix::fs::PermissionsExt;
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("phone_book.txt");
    save(&path, &[contact("Ivanov", "+79990000001")]).expect("save");
    let mode = fs::metadata(&path).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn load_skips_blank_lines() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("phone_book.txt");
    fs::write(&path, "Ivanov,Ivan,,,,+79990000001\n\nPetrov,Ivan,,,,+79990000002\n")
        .expect("write");
    let contacts = load(&path).expect("load");
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[1].last_name, "Petrov");
}

#[test]
fn load_reports_malformed_line_number() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("phone_book.txt");
    fs::write(&path, "Ivanov,Ivan,,,,+79990000001\nbroken,line\n").expect("write");
    let err = load(&path).expect_err("malformed");
    assert!(matches!(err, StoreError::MalformedRecord { line: 2, .. }));
}

#[test]
fn append_persists_immediately() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("phone_book.txt");
    let mut store = ContactStore::open(&path).expect("open");
    assert!(store.is_empty());

    store
        .append(contact("Ivanov", "+79990000001"))
        .expect("append");
    store
        .append(contact("Petrov", "+79990000002"))
        .expect("append");

    let reopened = ContactStore::open(&path).expect("reopen");
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.contacts()[0].last_name, "Ivanov");
    assert_eq!(reopened.contacts()[1].last_name, "Petrov");
}

#[test]
fn replace_updates_in_place() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("phone_book.txt");
    let mut store = ContactStore::open(&path).expect("open");
    store
        .append(contact("Ivanov", "+79990000001"))
        .expect("append");
    store
        .append(contact("Petrov", "+79990000002"))
        .expect("append");

    store
        .replace(0, contact("Sidorov", "+79990000003"))
        .expect("replace");

    let reopened = ContactStore::open(&path).expect("reopen");
    assert_eq!(reopened.contacts()[0].last_name, "Sidorov");
    assert_eq!(reopened.contacts()[1].last_name, "Petrov");
}

#[test]
fn replace_out_of_range_leaves_collection_unchanged() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("phone_book.txt");
    let mut store = ContactStore::open(&path).expect("open");
    store
        .append(contact("Ivanov", "+79990000001"))
        .expect("append");
    let before = fs::read_to_string(&path).expect("read");

    let err = store
        .replace(1, contact("Sidorov", "+79990000003"))
        .expect_err("out of range");
    assert!(matches!(
        err,
        StoreError::IndexOutOfRange { index: 1, len: 1 }
    ));
    assert_eq!(store.contacts(), &[contact("Ivanov", "+79990000001")]);
    assert_eq!(fs::read_to_string(&path).expect("read"), before);
}

#[test]
fn failed_save_rolls_back_append_and_replace() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("phone_book.txt");
    let mut store = ContactStore::open(&path).expect("open");
    store
        .append(contact("Ivanov", "+79990000001"))
        .expect("append");
    let before = fs::read_to_string(&path).expect("read");

    // A directory in the staging slot makes every save fail.
    fs::create_dir(temp.path().join("phone_book.txt.tmp")).expect("block staging");

    store
        .append(contact("Petrov", "+79990000002"))
        .expect_err("append should fail");
    assert_eq!(store.contacts(), &[contact("Ivanov", "+79990000001")]);

    store
        .replace(0, contact("Sidorov", "+79990000003"))
        .expect_err("replace should fail");
    assert_eq!(store.contacts(), &[contact("Ivanov", "+79990000001")]);

    assert_eq!(fs::read_to_string(&path).expect("read"), before);
}
