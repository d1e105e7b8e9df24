use super::*;

#[test]
fn paths_are_normalized_and_traversal_rejected() {
    assert_eq!(
        normalize_object_path("walks//w1/./photo.jpg").unwrap(),
        "walks/w1/photo.jpg"
    );
    assert_eq!(
        normalize_object_path("walks\\w1\\photo.jpg").unwrap(),
        "walks/w1/photo.jpg"
    );
    assert!(normalize_object_path("/abs/photo.jpg").is_err());
    assert!(normalize_object_path("walks/../secrets").is_err());
    assert!(normalize_object_path("").is_err());
    assert!(normalize_object_path("././.").is_err());
}

#[tokio::test]
async fn memory_store_round_trips_objects() {
    let store = MemoryObjectStore::new("http://localhost:8080");
    let meta = store
        .put("walks/w1/photo.jpg", b"jpegbytes", "image/jpeg")
        .await
        .unwrap();
    assert_eq!(meta.path, "walks/w1/photo.jpg");
    assert_eq!(meta.size, 9);

    let (data, meta) = store.get("walks/w1/photo.jpg").await.unwrap().unwrap();
    assert_eq!(data, b"jpegbytes");
    assert_eq!(meta.content_type, "image/jpeg");

    assert!(store.get("walks/w1/missing.jpg").await.unwrap().is_none());
    assert_eq!(
        store.public_url("walks/w1/photo.jpg"),
        "http://localhost:8080/media/walks/w1/photo.jpg"
    );
}

#[tokio::test]
async fn fs_store_persists_and_infers_content_type() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsObjectStore::new(dir.path(), "http://localhost:8080");

    store
        .put("walks/w1/photo.png", b"pngbytes", "image/png")
        .await
        .unwrap();

    let (data, meta) = store.get("walks/w1/photo.png").await.unwrap().unwrap();
    assert_eq!(data, b"pngbytes");
    assert_eq!(meta.content_type, "image/png");
    assert_eq!(meta.size, 8);

    assert!(store.get("walks/w1/nope.png").await.unwrap().is_none());
}

#[tokio::test]
async fn fs_store_rejects_traversal() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsObjectStore::new(dir.path(), "http://localhost:8080");
    assert!(store.put("../escape.bin", b"x", "image/png").await.is_err());
    assert!(store.get("../escape.bin").await.is_err());
}
