use std::io;

use bytes::Bytes;
use futures::stream;

use recap::application::ports::{AudioStore, AudioStoreError};
use recap::domain::AudioObject;
use recap::infrastructure::storage::LocalAudioStore;

fn create_test_store() -> (tempfile::TempDir, LocalAudioStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalAudioStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

async fn put(store: &LocalAudioStore, object: &AudioObject, content: &'static str) -> u64 {
    let chunks = vec![Ok(Bytes::from(content))];
    store
        .upload(object, Box::pin(stream::iter(chunks)))
        .await
        .unwrap()
}

#[tokio::test]
async fn given_chunked_stream_when_uploading_then_returns_total_size() {
    let (_dir, store) = create_test_store();
    let object = AudioObject::new("meetings", "audio/standup.mp3");

    let chunks = vec![Ok(Bytes::from("hello ")), Ok(Bytes::from("world"))];
    let size = store
        .upload(&object, Box::pin(stream::iter(chunks)))
        .await
        .unwrap();

    assert_eq!(size, 11);
}

#[tokio::test]
async fn given_uploaded_object_when_heading_then_returns_size() {
    let (_dir, store) = create_test_store();
    let object = AudioObject::new("meetings", "audio/standup.mp3");
    put(&store, &object, "twelve bytes").await;

    let size = store.head(&object).await.unwrap();

    assert_eq!(size, 12);
}

#[tokio::test]
async fn given_unknown_object_when_heading_then_returns_not_found() {
    let (_dir, store) = create_test_store();

    let result = store.head(&AudioObject::new("meetings", "audio/missing.mp3")).await;

    assert!(matches!(result, Err(AudioStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_stream_error_when_uploading_then_returns_io_error() {
    let (_dir, store) = create_test_store();
    let object = AudioObject::new("meetings", "audio/broken.mp3");

    let chunks = vec![
        Ok(Bytes::from("partial")),
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "client went away")),
    ];
    let result = store.upload(&object, Box::pin(stream::iter(chunks))).await;

    assert!(matches!(result, Err(AudioStoreError::Io(_))));
}

#[tokio::test]
async fn given_objects_in_two_buckets_when_listing_then_keys_are_bucket_relative() {
    let (_dir, store) = create_test_store();
    put(&store, &AudioObject::new("meetings", "audio/a.mp3"), "a").await;
    put(&store, &AudioObject::new("meetings", "audio/b.wav"), "bb").await;
    put(&store, &AudioObject::new("meetings", "other/c.mp3"), "c").await;
    put(&store, &AudioObject::new("archive", "audio/d.mp3"), "d").await;

    let mut keys: Vec<String> = store
        .list("meetings", "audio/")
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.key)
        .collect();
    keys.sort();

    assert_eq!(keys, ["audio/a.mp3", "audio/b.wav"]);
}

#[tokio::test]
async fn given_empty_bucket_when_listing_then_returns_nothing() {
    let (_dir, store) = create_test_store();

    let objects = store.list("nowhere", "audio/").await.unwrap();

    assert!(objects.is_empty());
}
