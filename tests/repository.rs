use property_hub::domain::lead::NewLead;
use property_hub::domain::property::{ListingType, NewProperty, UpdateProperty};
use property_hub::domain::user::{NewUser, UpdateUser};
use property_hub::repository::{
    DieselRepository, LeadReader, LeadWriter, PropertyListQuery, PropertyReader, PropertyWriter,
    UserReader, UserWriter,
};

mod common;

fn new_property(title: &str, location: &str, price: i64, bedrooms: i32, t: ListingType) -> NewProperty {
    NewProperty::new(
        title.to_string(),
        price,
        location.to_string(),
        vec![format!("https://img/{title}.jpg")],
        bedrooms,
        2,
        1000.0,
        t,
    )
}

fn seeded_repo(test_db: &common::TestDb) -> DieselRepository {
    let repo = DieselRepository::new(test_db.pool());
    for p in [
        new_property("3BHK Apartment", "South Delhi, Delhi", 8_500_000, 3, ListingType::Sale),
        new_property("Luxury Villa", "Mumbai, Maharashtra", 35_000_000, 5, ListingType::Sale),
        new_property("2BHK Flat", "Whitefield, Bengaluru", 6_800_000, 2, ListingType::Rent),
    ] {
        repo.create_property(&p).unwrap();
    }
    repo
}

#[test]
fn test_property_repository_crud() {
    let test_db = common::TestDb::new("test_property_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_property(&new_property(
            "Penthouse",
            "Pune, Maharashtra",
            12_500_000,
            3,
            ListingType::Sale,
        ))
        .unwrap();
    assert_eq!(created.title, "Penthouse");
    assert_eq!(created.images, vec!["https://img/Penthouse.jpg".to_string()]);
    assert!(created.created_at.is_some());

    let id: i32 = created.id.parse().unwrap();
    let fetched = repo.get_property_by_id(id).unwrap().unwrap();
    assert_eq!(fetched, created);

    let updated = repo
        .update_property(
            id,
            &UpdateProperty {
                title: "Penthouse in Koregaon Park".to_string(),
                price: 12_600_000,
                location: "Pune, Maharashtra".to_string(),
                images: fetched.images.clone(),
                bedrooms: 3,
                bathrooms: 3,
                area: 2100.0,
                listing_type: ListingType::Sale,
            },
        )
        .unwrap();
    assert_eq!(updated.title, "Penthouse in Koregaon Park");
    assert_eq!(updated.price, 12_600_000);

    let with_images = repo
        .add_property_images(id, &["https://img/extra.webp".to_string()])
        .unwrap();
    assert_eq!(with_images.images.len(), 2);

    repo.delete_property(id).unwrap();
    assert!(repo.get_property_by_id(id).unwrap().is_none());
    assert!(repo.delete_property(id).is_err());
}

#[test]
fn test_open_filter_returns_everything() {
    let test_db = common::TestDb::new("test_open_filter.db");
    let repo = seeded_repo(&test_db);

    let all = repo.list_properties(PropertyListQuery::new()).unwrap();
    assert_eq!(all.len(), 3);
    // Stable ordering for a fixed collection state.
    let ids: Vec<_> = all.iter().map(|p| p.id.clone()).collect();
    let again: Vec<_> = repo
        .list_properties(PropertyListQuery::new())
        .unwrap()
        .iter()
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(ids, again);
}

#[test]
fn test_numeric_filters_are_thresholds() {
    let test_db = common::TestDb::new("test_numeric_filters.db");
    let repo = seeded_repo(&test_db);

    let expensive = repo
        .list_properties(PropertyListQuery::new().min_price(8_500_000))
        .unwrap();
    assert_eq!(expensive.len(), 2);
    assert!(expensive.iter().all(|p| p.price >= 8_500_000));

    let cheap = repo
        .list_properties(PropertyListQuery::new().max_price(8_500_000))
        .unwrap();
    assert_eq!(cheap.len(), 2);
    assert!(cheap.iter().all(|p| p.price <= 8_500_000));

    let roomy = repo
        .list_properties(PropertyListQuery::new().min_bedrooms(3))
        .unwrap();
    assert_eq!(roomy.len(), 2);
    assert!(roomy.iter().all(|p| p.bedrooms >= 3));
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let test_db = common::TestDb::new("test_search.db");
    let repo = seeded_repo(&test_db);

    let lower = repo
        .list_properties(PropertyListQuery::new().search("delhi"))
        .unwrap();
    let upper = repo
        .list_properties(PropertyListQuery::new().search("DELHI"))
        .unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower.len(), 1);
    assert_eq!(lower[0].location, "South Delhi, Delhi");

    // Title is searched too, with partial matching.
    let villas = repo
        .list_properties(PropertyListQuery::new().search("vill"))
        .unwrap();
    assert_eq!(villas.len(), 1);
    assert_eq!(villas[0].title, "Luxury Villa");
}

#[test]
fn test_combined_filters_are_anded() {
    let test_db = common::TestDb::new("test_combined_filters.db");
    let repo = seeded_repo(&test_db);

    let result = repo
        .list_properties(
            PropertyListQuery::new()
                .listing_type(ListingType::Sale)
                .min_price(10_000_000)
                .min_bedrooms(4),
        )
        .unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "Luxury Villa");
}

#[test]
fn test_lead_repository_crud() {
    let test_db = common::TestDb::new("test_lead_repository_crud.db");
    let repo = seeded_repo(&test_db);

    let property = &repo.list_properties(PropertyListQuery::new()).unwrap()[0];
    let property_id: i32 = property.id.parse().unwrap();

    let lead = repo
        .create_lead(&NewLead::new(
            Some(property_id),
            "Asha".to_string(),
            "Asha@Example.com".to_string(),
            "9999999999".to_string(),
            "Interested in a visit".to_string(),
        ))
        .unwrap();
    assert_eq!(lead.email, "asha@example.com");
    assert_eq!(lead.property_id, Some(property_id));

    let leads = repo.list_leads().unwrap();
    assert_eq!(leads.len(), 1);

    // Deleting the listing detaches, not deletes, the enquiry.
    repo.delete_property(property_id).unwrap();
    let leads = repo.list_leads().unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].property_id, None);
}

#[test]
fn test_failed_delete_rolls_back_lead_detachment() {
    let test_db = common::TestDb::new("test_delete_rollback.db");
    let repo = DieselRepository::new(test_db.pool());

    // An enquiry pointing at an id that was never created; the test pool
    // does not enforce foreign keys, so the insert goes through.
    let lead = repo
        .create_lead(&NewLead::new(
            Some(999),
            "Asha".to_string(),
            "asha@example.com".to_string(),
            String::new(),
            String::new(),
        ))
        .unwrap();
    assert_eq!(lead.property_id, Some(999));

    // The delete finds nothing to remove and fails; the detach that ran
    // before it must not stick.
    assert!(repo.delete_property(999).is_err());
    let leads = repo.list_leads().unwrap();
    assert_eq!(leads[0].property_id, Some(999));
}

#[test]
fn test_user_repository_crud() {
    let test_db = common::TestDb::new("test_user_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let user = repo
        .create_user(&NewUser::new(
            "Agent".to_string(),
            "agent@example.com".to_string(),
            "argon2-hash".to_string(),
        ))
        .unwrap();

    let (found, hash) = repo
        .get_user_credentials("agent@example.com")
        .unwrap()
        .unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(hash, "argon2-hash");

    // Unique email constraint.
    assert!(
        repo.create_user(&NewUser::new(
            "Other".to_string(),
            "agent@example.com".to_string(),
            "hash2".to_string(),
        ))
        .is_err()
    );

    let updated = repo
        .update_user(
            user.id,
            &UpdateUser {
                name: "Agent Two".to_string(),
                email: "agent2@example.com".to_string(),
            },
        )
        .unwrap();
    assert_eq!(updated.name, "Agent Two");

    repo.set_password_hash(user.id, "new-hash").unwrap();
    assert_eq!(
        repo.get_password_hash(user.id).unwrap().unwrap(),
        "new-hash"
    );
}
