use storefront_admin::domain::bank::NewBank;
use storefront_admin::domain::product_variant::NewProductVariant;
use storefront_admin::domain::review::NewReview;
use storefront_admin::domain::seller_field::SellerFieldSettings;
use storefront_admin::domain::state::NewState;
use storefront_admin::domain::types::{
    AuthorName, BankId, BankName, CountryName, Price, ProductName, Rating, ReviewComment, Sku,
    StateName, StockLevel, VariantOption,
};
use storefront_admin::listing::{FilterableList, StatusFilter};
use storefront_admin::repository::errors::RepositoryError;
use storefront_admin::repository::{
    BankReader, BankWriter, DieselRepository, ProductVariantReader, ProductVariantWriter,
    ReviewReader, ReviewWriter, SellerFieldReader, SellerFieldWriter, StateReader, StateWriter,
};

mod common;

fn new_bank(name: &str, is_active: bool) -> NewBank {
    NewBank::new(
        BankName::new(name).unwrap(),
        CountryName::new("India").unwrap(),
        None,
        is_active,
    )
}

fn new_variant(sku: &str, stock: i32) -> NewProductVariant {
    NewProductVariant {
        product: ProductName::new("Linen shirt").unwrap(),
        sku: Sku::new(sku).unwrap(),
        color: Some(VariantOption::new("Red").unwrap()),
        size: None,
        price: "1299.50".parse::<Price>().unwrap(),
        stock: StockLevel::new(stock).unwrap(),
    }
}

#[test]
fn test_bank_repository_crud() {
    let test_db = common::TestDb::new("test_bank_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let federal = repo.create_bank(&new_bank("Federal Bank", true)).unwrap();
    repo.create_bank(&new_bank("Axis Bank", false)).unwrap();

    let banks = repo.list_banks().unwrap();
    let names: Vec<_> = banks.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Axis Bank", "Federal Bank"]);

    let updated = repo.set_bank_active(federal.id, false).unwrap();
    assert!(!updated.is_active);
    assert!(!repo.get_bank_by_id(federal.id).unwrap().unwrap().is_active);

    assert!(repo.get_bank_by_id(BankId::new(999).unwrap()).unwrap().is_none());
    assert!(matches!(
        repo.set_bank_active(BankId::new(999).unwrap(), true),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_duplicate_bank_is_a_constraint_violation() {
    let test_db = common::TestDb::new("test_duplicate_bank.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_bank(&new_bank("Federal Bank", true)).unwrap();
    let result = repo.create_bank(&new_bank("Federal Bank", true));

    assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
}

#[test]
fn test_states_feed_the_filterable_list() {
    let test_db = common::TestDb::new("test_states_feed_the_filterable_list.db");
    let repo = DieselRepository::new(test_db.pool());
    let india = CountryName::new("India").unwrap();

    for (name, active) in [("Kerala", true), ("Tamil Nadu", false), ("Goa", true)] {
        repo.create_state(&NewState::new(
            StateName::new(name).unwrap(),
            india.clone(),
            active,
        ))
        .unwrap();
    }

    let mut list = FilterableList::new(repo.list_states().unwrap(), 10);
    let view = list.set_status_filter(StatusFilter::Active);
    let names: Vec<_> = view.items.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Goa", "Kerala"]);

    let kerala = repo.list_states().unwrap().remove(1);
    let toggled = repo.set_state_active(kerala.id, false).unwrap();
    assert!(!toggled.is_active);
    assert!(!repo.get_state_by_id(kerala.id).unwrap().unwrap().is_active);
}

#[test]
fn test_seller_fields_are_seeded_and_updated() {
    let test_db = common::TestDb::new("test_seller_fields.db");
    let repo = DieselRepository::new(test_db.pool());

    let fields = repo.list_seller_fields().unwrap();
    assert_eq!(fields.len(), 7);
    assert_eq!(fields[0].label.as_str(), "Business name");
    let website = fields.iter().find(|f| f.label.as_str() == "Website").unwrap();
    assert!(!website.visible);

    let business = fields[0].id;
    let updated = repo
        .update_seller_fields(&[
            SellerFieldSettings::new(business, false, true),
            SellerFieldSettings::new(website.id, true, true),
        ])
        .unwrap();
    assert_eq!(updated, 2);

    let fields = repo.list_seller_fields().unwrap();
    let business = fields.iter().find(|f| f.id == business).unwrap();
    assert!(!business.visible && !business.required);
    let website = fields.iter().find(|f| f.label.as_str() == "Website").unwrap();
    assert!(website.visible && website.required);
}

#[test]
fn test_product_variant_sku_is_unique() {
    let test_db = common::TestDb::new("test_product_variant_sku_is_unique.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo.create_product_variant(&new_variant("LS-RED-M", 4)).unwrap();
    assert_eq!(created.price.minor_units(), 129950);
    assert!(created.size.is_none());

    let duplicate = repo.create_product_variant(&new_variant("LS-RED-M", 1));
    assert!(matches!(duplicate, Err(RepositoryError::ConstraintViolation(_))));

    repo.create_product_variant(&new_variant("LS-RED-L", 0)).unwrap();
    let variants = repo.list_product_variants().unwrap();
    assert_eq!(variants.len(), 2);
}

#[test]
fn test_review_publication() {
    let test_db = common::TestDb::new("test_review_publication.db");
    let repo = DieselRepository::new(test_db.pool());

    let review = repo
        .create_review(&NewReview {
            author: AuthorName::new("Asha").unwrap(),
            product: ProductName::new("Linen shirt").unwrap(),
            rating: Rating::new(5).unwrap(),
            comment: ReviewComment::new("Great fit <script>alert(1)</script>").unwrap(),
        })
        .unwrap();
    assert!(!review.is_published);
    assert!(!review.comment.as_str().contains("<script>"));

    let published = repo.set_review_published(review.id, true).unwrap();
    assert!(published.is_published);

    let reviews = repo.list_reviews().unwrap();
    assert_eq!(reviews.len(), 1);
    assert!(reviews[0].is_published);
}
