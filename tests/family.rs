mod common;

use common::{add_member, date, storage};
use family_hub::choices::Role;
use family_hub::config::Config;
use family_hub::forms::{FormError, Upload};
use family_hub::family::{FamilyService, MemberInput};
use family_hub::gallery::{GalleryService, PhotoUpload};
use family_hub::repositories::{MemberFilter, MemberRepository, NotFoundError};

#[tokio::test]
async fn test_register_member() {
    let storage = storage().await;
    let config = Config::default();
    let family = FamilyService::new(&storage, &config);

    let input = MemberInput {
        birthday: Some(date(2015, 4, 1)),
        photo: Some(Upload::new("hana.png", 1024)),
        hobby: " piano ".to_string(),
        ..MemberInput::new(" Hana ", Role::Daughter)
    };
    let member = family.register(&input).await.unwrap();
    assert_eq!(member.name, "Hana");
    assert_eq!(member.hobby, "piano");
    assert_eq!(member.photo_path.as_deref(), Some("family_members/hana.png"));
    assert_eq!(member.display_name(), "Hana (daughter)");
}

#[tokio::test]
async fn test_member_photo_limit_is_smaller() {
    let storage = storage().await;
    let config = Config::default();
    let family = FamilyService::new(&storage, &config);

    let input = MemberInput {
        photo: Some(Upload::new("big.jpg", 6 * 1024 * 1024)),
        ..MemberInput::new("Ken", Role::Son)
    };
    let err = family.register(&input).await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<FormError>(),
        Some(&FormError::FileTooLarge { field: "photo", max_mb: 5 })
    );

    let err = family.register(&MemberInput::new("   ", Role::Son)).await.unwrap_err();
    assert_eq!(err.downcast_ref::<FormError>(), Some(&FormError::Required { field: "name" }));
}

#[tokio::test]
async fn test_directory_search_and_ordering() {
    let storage = storage().await;
    let config = Config::default();
    let family = FamilyService::new(&storage, &config);

    let ken = family
        .register(&MemberInput {
            favorite_food: "ramen".to_string(),
            ..MemberInput::new("Ken", Role::Son)
        })
        .await
        .unwrap();
    add_member(&storage, "Taro", Role::Father).await;
    add_member(&storage, "Aiko", Role::Son).await;
    let hidden = add_member(&storage, "Jiro", Role::Other).await;
    assert_eq!(family.set_active(&[hidden.uuid], false).await.unwrap(), 1);

    let all = family.directory(&MemberFilter::default(), 1).await.unwrap();
    let names: Vec<&str> = all.items.iter().map(|m| m.name.as_str()).collect();
    // Ordered by stored role, then name
    assert_eq!(names, vec!["Taro", "Aiko", "Ken"]);
    assert_eq!(MemberRepository::count_active(&storage.conn).await.unwrap(), 3);

    let food = MemberFilter {
        search: Some("RAMEN".to_string()),
        role: None,
    };
    let found = family.directory(&food, 1).await.unwrap();
    assert_eq!(found.total, 1);
    assert_eq!(found.items[0].uuid, ken.uuid);

    let fathers = MemberFilter {
        search: None,
        role: Some(Role::Father),
    };
    assert_eq!(family.directory(&fathers, 1).await.unwrap().items[0].name, "Taro");
}

#[tokio::test]
async fn test_profile_shows_age_glyph_and_photos() {
    let storage = storage().await;
    let config = Config::default();
    let family = FamilyService::new(&storage, &config);
    let gallery = GalleryService::new(&storage, &config);

    let grandma = family
        .register(&MemberInput {
            birthday: Some(date(1950, 10, 20)),
            ..MemberInput::new("Sachiko", Role::Grandmother)
        })
        .await
        .unwrap();

    for day in 1..=12 {
        let mut upload = PhotoUpload::new(format!("Visit {}", day), Upload::new("v.jpg", 1024), date(2024, 1, day));
        upload.members = vec![grandma.uuid];
        gallery.upload(None, &upload).await.unwrap();
    }

    let profile = family.profile(&grandma.uuid, date(2025, 10, 19)).await.unwrap();
    assert_eq!(profile.age, Some(74));
    assert_eq!(profile.role_glyph, "👵");
    assert_eq!(profile.photos.len(), 10);
    assert_eq!(profile.photos[0].title, "Visit 12");

    MemberRepository::set_active(&storage.conn, &[grandma.uuid], false).await.unwrap();
    let err = family.profile(&grandma.uuid, date(2025, 10, 19)).await.unwrap_err();
    assert!(err.downcast_ref::<NotFoundError>().is_some());
}
