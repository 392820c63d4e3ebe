//! Unit tests for media storage

use super::*;
use image::{Rgb, RgbImage};
use tempfile::TempDir;

fn encoded(format: ImageFormat, width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([200, 30, 30]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, format).unwrap();
    out.into_inner()
}

fn test_store() -> (TempDir, MediaStore) {
    let dir = TempDir::new().unwrap();
    let store = MediaStore::new(dir.path().join("media"));
    (dir, store)
}

#[test]
fn test_save_bytes_round_trip() {
    let (_dir, store) = test_store();
    let bytes = encoded(ImageFormat::Png, 4, 3);

    let stored = store.save_bytes("messi.png", &bytes).unwrap();

    assert_eq!(stored.reference.as_str(), "messi.png");
    assert_eq!((stored.width, stored.height), (4, 3));
    assert_eq!(stored.format, "png");
    assert!(store.exists(&stored.reference));
    assert_eq!(store.read(&stored.reference).unwrap(), bytes);
}

#[test]
fn test_save_from_path() {
    let (dir, store) = test_store();
    let bytes = encoded(ImageFormat::Jpeg, 8, 8);
    let source = dir.path().join("Ronaldo Nazário.jpeg");
    std::fs::write(&source, &bytes).unwrap();

    let stored = store.save(&source).unwrap();

    assert_eq!(stored.reference.as_str(), "Ronaldo_Naz_rio.jpeg");
    assert_eq!(stored.format, "jpeg");
    assert_eq!(store.read(&stored.reference).unwrap(), bytes);
}

#[test]
fn test_name_collision_gets_suffix() {
    let (_dir, store) = test_store();
    let bytes = encoded(ImageFormat::Png, 2, 2);

    let first = store.save_bytes("player.png", &bytes).unwrap();
    let second = store.save_bytes("player.png", &bytes).unwrap();

    assert_eq!(first.reference.as_str(), "player.png");
    assert_ne!(first.reference, second.reference);

    let name = second.reference.as_str();
    assert!(name.starts_with("player_"));
    assert!(name.ends_with(".png"));
    assert_eq!(name.len(), "player_".len() + SUFFIX_LEN + ".png".len());
    assert!(store.exists(&first.reference));
    assert!(store.exists(&second.reference));
}

#[test]
fn test_rejects_non_image() {
    let (_dir, store) = test_store();

    match store.save_bytes("notes.png", b"definitely not an image") {
        Err(PlayerError::InvalidImage { path, .. }) => assert_eq!(path, "notes.png"),
        other => panic!("Expected InvalidImage, got {:?}", other),
    }

    assert!(!store.root().join("notes.png").exists());
}

#[test]
fn test_rejects_truncated_image() {
    let (_dir, store) = test_store();
    let bytes = encoded(ImageFormat::Png, 16, 16);

    let result = store.save_bytes("broken.png", &bytes[..bytes.len() / 2]);
    assert!(matches!(result, Err(PlayerError::InvalidImage { .. })));
}

#[test]
fn test_extension_follows_detected_format() {
    let (_dir, store) = test_store();
    let bytes = encoded(ImageFormat::Png, 2, 2);

    let stored = store.save_bytes("photo.jpg", &bytes).unwrap();
    assert_eq!(stored.reference.as_str(), "photo.png");
}

#[test]
fn test_storage_name_parts() {
    assert_eq!(
        storage_name_parts("Kylian Mbappé.PNG", ImageFormat::Png),
        ("Kylian_Mbapp_".to_string(), "png".to_string())
    );
    assert_eq!(
        storage_name_parts("..", ImageFormat::Gif),
        ("image".to_string(), "gif".to_string())
    );
    assert_eq!(
        storage_name_parts("shot.jpg", ImageFormat::Jpeg),
        ("shot".to_string(), "jpg".to_string())
    );
}

#[test]
fn test_long_names_fit_reference_bound() {
    let (_dir, store) = test_store();
    let bytes = encoded(ImageFormat::Png, 2, 2);
    let long_name = format!("{}.png", "a".repeat(300));

    let first = store.save_bytes(&long_name, &bytes).unwrap();
    let second = store.save_bytes(&long_name, &bytes).unwrap();

    assert!(first.reference.as_str().len() <= MAX_IMAGE_REF_LEN);
    assert!(second.reference.as_str().len() <= MAX_IMAGE_REF_LEN);
}

#[test]
fn test_read_missing_image() {
    let (_dir, store) = test_store();
    let reference = ImageRef::new("ghost.png").unwrap();

    assert!(!store.exists(&reference));
    assert!(matches!(
        store.read(&reference),
        Err(PlayerError::ImageMissing { .. })
    ));
}

#[test]
fn test_delete() {
    let (_dir, store) = test_store();
    let stored = store
        .save_bytes("gone.png", &encoded(ImageFormat::Png, 1, 1))
        .unwrap();

    assert!(store.delete(&stored.reference).unwrap());
    assert!(!store.exists(&stored.reference));
    assert!(!store.delete(&stored.reference).unwrap());
}

#[test]
fn test_resolve_stays_under_root() {
    let store = MediaStore::new("/srv/media");
    let reference = ImageRef::new("players/pele.png").unwrap();

    let path = store.resolve(&reference);
    assert!(path.starts_with("/srv/media"));
    assert!(path.ends_with("players/pele.png"));
}
