use wasm_bindgen_test::wasm_bindgen_test;

use crate::storage::generate_session_storage;
use crate::storage::generate_storage;
use crate::storage::probe;
use crate::storage::LocalStorage;
use crate::storage::MemStorage;
use crate::storage::SessionStorage;
use crate::storage::StorageInterface;

fn raw_local() -> web_sys::Storage {
    web_sys::window().unwrap().local_storage().unwrap().unwrap()
}

fn raw_session() -> web_sys::Storage {
    web_sys::window()
        .unwrap()
        .session_storage()
        .unwrap()
        .unwrap()
}

#[wasm_bindgen_test]
fn test_can_use_in_browser() {
    assert!(LocalStorage::can_use());
    assert!(SessionStorage::can_use());
}

#[wasm_bindgen_test]
fn test_local_storage_roundtrip() {
    let storage = LocalStorage::new().unwrap();

    assert_eq!(storage.get("test_local_roundtrip").unwrap(), None);

    storage.set("test_local_roundtrip", "bar").unwrap();
    assert_eq!(
        storage.get("test_local_roundtrip").unwrap(),
        Some("bar".into())
    );

    // the write must be visible in the platform store itself
    assert_eq!(
        raw_local().get_item("test_local_roundtrip").unwrap(),
        Some("bar".to_string())
    );

    storage.remove("test_local_roundtrip").unwrap();
    assert_eq!(storage.get("test_local_roundtrip").unwrap(), None);
}

#[wasm_bindgen_test]
fn test_session_storage_roundtrip() {
    let storage = SessionStorage::new().unwrap();

    storage.set("test_session_roundtrip", "bar").unwrap();
    assert_eq!(
        raw_session().get_item("test_session_roundtrip").unwrap(),
        Some("bar".to_string())
    );

    storage.remove("test_session_roundtrip").unwrap();
    assert_eq!(storage.get("test_session_roundtrip").unwrap(), None);
}

#[wasm_bindgen_test]
fn test_probe_leaves_no_key_behind() {
    let before = raw_local().length().unwrap();
    assert!(probe(&LocalStorage::new().unwrap()));
    assert_eq!(raw_local().length().unwrap(), before);
}

#[wasm_bindgen_test]
fn test_generate_storage_selects_local_storage() {
    let storage = generate_storage();

    storage.set("test_factory_local", "bar").unwrap();
    assert_eq!(
        raw_local().get_item("test_factory_local").unwrap(),
        Some("bar".to_string())
    );

    storage.remove("test_factory_local").unwrap();
}

#[wasm_bindgen_test]
fn test_generate_session_storage_selects_session_storage() {
    let storage = generate_session_storage();

    storage.set("test_factory_session", "bar").unwrap();
    assert_eq!(
        raw_session().get_item("test_factory_session").unwrap(),
        Some("bar".to_string())
    );

    storage.remove("test_factory_session").unwrap();
}

#[wasm_bindgen_test]
fn test_memstorage_works_in_browser() {
    let store = MemStorage::new();
    store.set("foo", "bar").unwrap();
    assert_eq!(store.get("foo").unwrap(), Some("bar".into()));
    store.remove("foo").unwrap();
    assert_eq!(store.get("foo").unwrap(), None);
}
