mod common;

use common::{add_member, date, storage};
use family_hub::choices::Role;
use family_hub::config::Config;
use family_hub::forms::{FormError, Upload};
use family_hub::gallery::{GalleryService, PhotoUpload};
use family_hub::repositories::{NotFoundError, PhotoFilter, PhotoRepository, TagRepository};

const MB: u64 = 1024 * 1024;

#[tokio::test]
async fn test_upload_validates_title_and_file() {
    let storage = storage().await;
    let config = Config::default();
    let gallery = GalleryService::new(&storage, &config);

    let short_title = PhotoUpload::new("A", Upload::new("beach.jpg", MB), date(2024, 7, 3));
    let err = gallery.upload(None, &short_title).await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<FormError>(),
        Some(&FormError::TooShort { field: "title", min: 2 })
    );

    let too_big = PhotoUpload::new("Beach", Upload::new("beach.jpg", 11 * MB), date(2024, 7, 3));
    let err = gallery.upload(None, &too_big).await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<FormError>(),
        Some(&FormError::FileTooLarge { field: "image", max_mb: 10 })
    );

    let not_image = PhotoUpload::new("Beach", Upload::new("beach.pdf", MB), date(2024, 7, 3));
    let err = gallery.upload(None, &not_image).await.unwrap_err();
    assert_eq!(err.downcast_ref::<FormError>(), Some(&FormError::NotAnImage { field: "image" }));

    assert_eq!(PhotoRepository::count_public(&storage.conn).await.unwrap(), 0);
}

#[tokio::test]
async fn test_browse_filters_public_photos() {
    let storage = storage().await;
    let config = Config::default();
    let gallery = GalleryService::new(&storage, &config);

    let hana = add_member(&storage, "Hana", Role::Daughter).await;
    let beach = gallery.create_tag("beach", None).await.unwrap();
    let album = gallery.create_album(None, "Summer 2024", "", true).await.unwrap();

    let mut first = PhotoUpload::new("Sand castle", Upload::new("castle.PNG", MB), date(2024, 7, 3));
    first.tags = vec![beach.uuid];
    first.members = vec![hana.uuid];
    first.album = Some(album.uuid);
    first.location = "Enoshima".to_string();
    let first = gallery.upload(None, &first).await.unwrap();
    assert_eq!(first.image_path, "family_photos/2024/07/castle.PNG");

    let mut second = PhotoUpload::new("New year", Upload::new("ny.jpg", MB), date(2025, 1, 1));
    second.members = vec![hana.uuid];
    gallery.upload(None, &second).await.unwrap();

    let mut hidden = PhotoUpload::new("Private beach", Upload::new("p.jpg", MB), date(2024, 8, 1));
    hidden.tags = vec![beach.uuid];
    hidden.is_public = false;
    gallery.upload(None, &hidden).await.unwrap();

    let page = gallery.browse(&PhotoFilter::default(), 1).await.unwrap();
    let titles: Vec<&str> = page.items.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["New year", "Sand castle"]);

    let by_tag = PhotoFilter {
        tag: Some(beach.uuid),
        ..Default::default()
    };
    assert_eq!(gallery.browse(&by_tag, 1).await.unwrap().total, 1);

    let by_text = PhotoFilter {
        search: Some("enoshima".to_string()),
        ..Default::default()
    };
    assert_eq!(gallery.browse(&by_text, 1).await.unwrap().items[0].uuid, first.uuid);

    let by_year = PhotoFilter {
        year: Some(2025),
        member: Some(hana.uuid),
        ..Default::default()
    };
    assert_eq!(gallery.browse(&by_year, 1).await.unwrap().items[0].title, "New year");

    let by_album = PhotoFilter {
        album: Some(album.uuid),
        ..Default::default()
    };
    assert_eq!(gallery.browse(&by_album, 1).await.unwrap().total, 1);

    assert_eq!(PhotoRepository::years(&storage.conn).await.unwrap(), vec![2025, 2024]);
}

#[tokio::test]
async fn test_page_numbers_are_clamped() {
    let storage = storage().await;
    let mut config = Config::default();
    config.gallery.photos_per_page = 2;
    let gallery = GalleryService::new(&storage, &config);

    for day in 1..=5 {
        let upload = PhotoUpload::new(format!("Day {}", day), Upload::new("d.jpg", MB), date(2024, 5, day));
        gallery.upload(None, &upload).await.unwrap();
    }

    let last = gallery.browse(&PhotoFilter::default(), 99).await.unwrap();
    assert_eq!(last.number, 3);
    assert_eq!(last.num_pages, 3);
    assert_eq!(last.items.len(), 1);
    assert!(!last.has_next());
    assert!(last.has_previous());

    let first = gallery.browse(&PhotoFilter::default(), 0).await.unwrap();
    assert_eq!(first.number, 1);
    assert_eq!(first.items[0].title, "Day 5");
}

#[tokio::test]
async fn test_toggle_favorite_and_stats() {
    let storage = storage().await;
    let config = Config::default();
    let gallery = GalleryService::new(&storage, &config);

    let photo = gallery
        .upload(None, &PhotoUpload::new("Picnic", Upload::new("picnic.webp", MB), date(2024, 4, 1)))
        .await
        .unwrap();

    assert!(gallery.toggle_favorite(&photo.uuid).await.unwrap());
    let stats = gallery.stats().await.unwrap();
    assert_eq!(stats.public_photos, 1);
    assert_eq!(stats.favorites, 1);

    assert!(!gallery.toggle_favorite(&photo.uuid).await.unwrap());
    assert_eq!(gallery.stats().await.unwrap().favorites, 0);

    let err = gallery.toggle_favorite(&uuid::Uuid::new_v4()).await.unwrap_err();
    assert!(err.downcast_ref::<NotFoundError>().is_some());
}

#[tokio::test]
async fn test_bulk_favorite_and_publish() {
    let storage = storage().await;
    let config = Config::default();
    let gallery = GalleryService::new(&storage, &config);

    let beach = gallery
        .upload(None, &PhotoUpload::new("Beach", Upload::new("beach.jpg", MB), date(2024, 8, 1)))
        .await
        .unwrap();
    let hike = gallery
        .upload(None, &PhotoUpload::new("Hike", Upload::new("hike.png", MB), date(2024, 8, 2)))
        .await
        .unwrap();

    assert_eq!(gallery.set_favorites(&[beach.uuid, hike.uuid], true).await.unwrap(), 2);
    assert_eq!(gallery.stats().await.unwrap().favorites, 2);

    assert_eq!(gallery.set_public(&[hike.uuid], false).await.unwrap(), 1);
    let stats = gallery.stats().await.unwrap();
    assert_eq!(stats.public_photos, 1);
    assert_eq!(stats.favorites, 1);
    assert!(gallery.detail(&hike.uuid).await.is_err());

    assert_eq!(gallery.set_public(&[hike.uuid], true).await.unwrap(), 1);
    assert_eq!(gallery.set_favorites(&[beach.uuid], false).await.unwrap(), 1);
    let stats = gallery.stats().await.unwrap();
    assert_eq!(stats.public_photos, 2);
    assert_eq!(stats.favorites, 1);
}

#[tokio::test]
async fn test_related_photos_share_album_or_tag() {
    let storage = storage().await;
    let config = Config::default();
    let gallery = GalleryService::new(&storage, &config);

    let beach = gallery.create_tag("beach", None).await.unwrap();
    let food = gallery.create_tag("food", None).await.unwrap();
    let album = gallery.create_album(None, "Trip", "", true).await.unwrap();

    let mut anchor = PhotoUpload::new("Anchor", Upload::new("a.jpg", MB), date(2024, 7, 1));
    anchor.tags = vec![beach.uuid];
    anchor.album = Some(album.uuid);
    let anchor = gallery.upload(None, &anchor).await.unwrap();

    let mut same_tag = PhotoUpload::new("Same tag", Upload::new("b.jpg", MB), date(2024, 7, 2));
    same_tag.tags = vec![beach.uuid, food.uuid];
    gallery.upload(None, &same_tag).await.unwrap();

    let mut same_album = PhotoUpload::new("Same album", Upload::new("c.jpg", MB), date(2024, 7, 3));
    same_album.album = Some(album.uuid);
    gallery.upload(None, &same_album).await.unwrap();

    let mut other = PhotoUpload::new("Other", Upload::new("d.jpg", MB), date(2024, 7, 4));
    other.tags = vec![food.uuid];
    gallery.upload(None, &other).await.unwrap();

    let detail = gallery.detail(&anchor.uuid).await.unwrap();
    let related: Vec<&str> = detail.related.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(related, vec!["Same album", "Same tag"]);
    assert_eq!(detail.album.map(|a| a.title), Some("Trip".to_string()));
    assert_eq!(detail.tags.len(), 1);
}

#[tokio::test]
async fn test_tags_are_unique_and_ranked_by_public_photos() {
    let storage = storage().await;
    let config = Config::default();
    let gallery = GalleryService::new(&storage, &config);

    let beach = gallery.create_tag(" beach ", Some("#FF0000")).await.unwrap();
    assert_eq!(beach.name, "beach");
    assert_eq!(beach.color, "#ff0000");
    assert!(gallery.create_tag("beach", None).await.is_err());
    assert!(gallery.create_tag("x", None).await.is_err());

    let unused = gallery.create_tag("unused", None).await.unwrap();
    let mut upload = PhotoUpload::new("Waves", Upload::new("w.jpg", MB), date(2024, 7, 1));
    upload.tags = vec![beach.uuid];
    let photo = gallery.upload(None, &upload).await.unwrap();

    let popular = TagRepository::popular(&storage.conn, 10).await.unwrap();
    assert_eq!(popular.len(), 1);
    assert_eq!(popular[0].0.uuid, beach.uuid);
    assert_eq!(popular[0].1, 1);

    // Deleting a tag keeps the photo
    assert!(TagRepository::delete(&storage.conn, &beach.uuid).await.unwrap());
    assert!(PhotoRepository::get_by_id(&storage.conn, &photo.uuid).await.unwrap().is_some());
    assert!(PhotoRepository::tags_of(&storage.conn, &photo.uuid).await.unwrap().is_empty());
    assert_eq!(TagRepository::count_all(&storage.conn).await.unwrap(), 1);
    let _ = unused;
}
