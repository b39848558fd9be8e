use super::*;
use crate::domain::{
    Credentials, KeyValueStore, MarketError, NewProduct, NewUser, Product, ValidationError,
};
use crate::infrastructure::{create_noop_metrics, MemoryStore};
use crate::session::Session;
use anyhow::Result;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

// Initialize tracing once for all tests
static TRACING_INIT: std::sync::Once = std::sync::Once::new();

fn init_tracing() {
    // ---
    TRACING_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_ansi(false) // No colorization, makes logs easier to read.
            .with_test_writer()
            .init();
    });
}

/// Memory store whose writes can be switched off to simulate I/O failure.
#[derive(Default)]
struct FlakyStore {
    // ---
    inner: MemoryStore,
    fail_writes: AtomicBool,
    reads: AtomicUsize,
}

#[async_trait::async_trait]
impl KeyValueStore for FlakyStore {
    // ---
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key).await
    }
    async fn set(&self, key: &str, value: String) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            anyhow::bail!("disk full");
        }
        self.inner.set(key, value).await
    }
    async fn remove(&self, key: &str) -> Result<()> {
        self.inner.remove(key).await
    }
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

fn setup() -> (Marketplace, Arc<FlakyStore>) {
    // ---
    init_tracing();
    let store = Arc::new(FlakyStore::default());
    let metrics = create_noop_metrics().expect("noop metrics");
    (Marketplace::new(store.clone(), "@", metrics), store)
}

fn registration(email: &str) -> NewUser {
    // ---
    NewUser {
        name: "Thorin Oakenshield".to_string(),
        email: email.to_string(),
        phone: "0123456789".to_string(),
        password: "arkenstone".to_string(),
        confirm_password: "arkenstone".to_string(),
    }
}

fn credentials(email: &str, password: &str) -> Credentials {
    // ---
    Credentials {
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn listing(title: &str, category: &str, price: &str) -> NewProduct {
    // ---
    NewProduct {
        title: title.to_string(),
        price: price.to_string(),
        description: "Pick up at the library".to_string(),
        category: category.to_string(),
        condition: "Good".to_string(),
        image_url: None,
    }
}

async fn logged_in(market: &Marketplace, email: &str) -> Session {
    // ---
    market.register(registration(email)).await.expect("register");
    market
        .login(credentials(email, "arkenstone"))
        .await
        .expect("login")
}

fn titles(products: &[Product]) -> Vec<&str> {
    // ---
    products.iter().map(|p| p.title.as_str()).collect()
}

// ============================================================================
// Accounts
// ============================================================================

#[tokio::test]
async fn register_persists_user() {
    // ---
    let (market, store) = setup();

    let user = market
        .register(registration("thorin@erebor.me"))
        .await
        .expect("register");

    assert_eq!(user.email, "thorin@erebor.me");
    assert!(user.id.parse::<i64>().is_ok());

    let blob = store.get("@users").await.unwrap().expect("users key");
    assert!(blob.contains("thorin@erebor.me"));
    assert!(market.current_session().await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_email_is_rejected_once_persisted() {
    // ---
    let (market, _store) = setup();
    market.register(registration("bilbo@shire.me")).await.unwrap();

    let err = market
        .register(registration("bilbo@shire.me"))
        .await
        .unwrap_err();
    assert!(matches!(err, MarketError::DuplicateEmail));

    let users = market.collections.users().await.unwrap();
    assert_eq!(
        users.iter().filter(|u| u.email == "bilbo@shire.me").count(),
        1
    );
}

#[tokio::test]
async fn email_match_is_case_sensitive() {
    // ---
    let (market, _store) = setup();
    market.register(registration("bilbo@shire.me")).await.unwrap();

    market
        .register(registration("Bilbo@shire.me"))
        .await
        .expect("differently cased email is a different account");

    let err = market
        .login(credentials("BILBO@shire.me", "arkenstone"))
        .await
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidCredentials));
}

#[tokio::test]
async fn invalid_registration_writes_nothing() {
    // ---
    let (market, store) = setup();
    let mut form = registration("gandalf@valinor.me");
    form.confirm_password = "you shall not pass".to_string();

    let err = market.register(form).await.unwrap_err();

    assert!(matches!(
        err,
        MarketError::Validation(ValidationError::PasswordMismatch)
    ));
    assert!(store.get("@users").await.unwrap().is_none());
}

#[tokio::test]
async fn concurrent_duplicate_registrations_persist_one_user() {
    // ---
    let (market, _store) = setup();
    let market = Arc::new(market);

    let attempts = (0..8).map(|_| {
        let market = market.clone();
        tokio::spawn(async move { market.register(registration("frodo@shire.me")).await })
    });

    let mut successes = 0;
    for handle in attempts {
        if handle.await.unwrap().is_ok() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(market.collections.users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn login_requires_exact_match() {
    // ---
    let (market, _store) = setup();
    market.register(registration("sam@shire.me")).await.unwrap();

    let err = market
        .login(credentials("sam@shire.me", "Arkenstone"))
        .await
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidCredentials));
    assert!(market.current_session().await.unwrap().is_none());

    let err = market
        .login(credentials("nobody@shire.me", "arkenstone"))
        .await
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidCredentials));
    assert!(market.current_session().await.unwrap().is_none());

    let session = market
        .login(credentials("sam@shire.me", "arkenstone"))
        .await
        .expect("login");
    assert_eq!(session.user().email, "sam@shire.me");
    assert_eq!(market.current_session().await.unwrap(), Some(session));
}

#[tokio::test]
async fn blank_login_fields_are_validation_errors() {
    // ---
    let (market, store) = setup();

    let err = market.login(credentials("  ", "secret")).await.unwrap_err();
    assert!(matches!(
        err,
        MarketError::Validation(ValidationError::MissingCredentials)
    ));

    let err = market.login(credentials("ada@campus.edu", "")).await.unwrap_err();
    assert!(matches!(
        err,
        MarketError::Validation(ValidationError::MissingCredentials)
    ));
    assert_eq!(store.reads.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn logout_clears_session() {
    // ---
    let (market, store) = setup();
    logged_in(&market, "merry@shire.me").await;
    assert!(store.get("@currentUser").await.unwrap().is_some());

    market.logout().await.expect("logout");

    assert!(market.current_session().await.unwrap().is_none());
    assert!(matches!(
        market.require_session().await.unwrap_err(),
        MarketError::NotLoggedIn
    ));

    // Unconditional: logging out twice is fine.
    market.logout().await.expect("second logout");
}

#[tokio::test]
async fn profile_counts_own_products() {
    // ---
    let (market, _store) = setup();
    let pippin = logged_in(&market, "pippin@shire.me").await;
    market
        .create_product(listing("Pipe", "Other", "3"), &pippin)
        .await
        .unwrap();
    market
        .create_product(listing("Cloak", "Clothing", "20"), &pippin)
        .await
        .unwrap();

    let merry = logged_in(&market, "merry@shire.me").await;
    market
        .create_product(listing("Horn", "Other", "8"), &merry)
        .await
        .unwrap();

    let profile = market.profile(&pippin).await.unwrap();
    assert_eq!(profile.user.email, "pippin@shire.me");
    assert_eq!(profile.products_count, 2);
}

// ============================================================================
// Catalog
// ============================================================================

#[tokio::test]
async fn create_product_copies_seller_and_fills_placeholder() {
    // ---
    let (market, _store) = setup();
    let session = logged_in(&market, "elrond@rivendell.me").await;

    let product = market
        .create_product(listing("Map of the Misty Mountains", "Books", "12.5"), &session)
        .await
        .expect("create");

    assert!(product.is_available());
    assert_eq!(product.price, 12.5);
    assert_eq!(product.seller_id, session.user_id());
    assert_eq!(product.seller_name, session.user().name);
    assert_eq!(product.seller_phone, session.user().phone);
    assert_eq!(product.image_url, crate::domain::placeholder_image("Books"));

    let fetched = market.get_product(&product.id).await.unwrap();
    assert_eq!(fetched, product);
}

#[tokio::test]
async fn supplied_image_is_kept() {
    // ---
    let (market, _store) = setup();
    let session = logged_in(&market, "arwen@rivendell.me").await;
    let mut form = listing("Evenstar pendant", "Other", "99");
    form.image_url = Some("https://img.example/evenstar.png".to_string());

    let product = market.create_product(form, &session).await.unwrap();

    assert_eq!(product.image_url, "https://img.example/evenstar.png");
}

#[tokio::test]
async fn bad_price_leaves_collection_unchanged() {
    // ---
    let (market, _store) = setup();
    let session = logged_in(&market, "boromir@gondor.me").await;
    market
        .create_product(listing("Shield", "Sports", "40"), &session)
        .await
        .unwrap();

    for price in ["0", "-1", "forty", ""] {
        let err = market
            .create_product(listing("Horn of Gondor", "Other", price), &session)
            .await
            .unwrap_err();
        assert!(matches!(err, MarketError::Validation(_)), "price {price:?}");
    }

    assert_eq!(market.collections.products().await.unwrap().len(), 1);
}

#[tokio::test]
async fn list_all_returns_available_in_insertion_order() {
    // ---
    let (market, store) = setup();
    let session = logged_in(&market, "legolas@mirkwood.me").await;
    for (title, category) in [("Bow", "Sports"), ("Quiver", "Sports"), ("Lembas", "Other")] {
        market
            .create_product(listing(title, category, "5"), &session)
            .await
            .unwrap();
    }

    // Mark the middle listing as no longer available, as another client might.
    let blob = store.get("@products").await.unwrap().unwrap();
    let mut raw: serde_json::Value = serde_json::from_str(&blob).unwrap();
    raw[1]["status"] = "sold".into();
    store.set("@products", raw.to_string()).await.unwrap();

    let listed = market.list_available("", "All").await.unwrap();
    assert_eq!(titles(&listed), vec!["Bow", "Lembas"]);

    let mine = market.list_by_seller(session.user_id()).await.unwrap();
    assert_eq!(titles(&mine), vec!["Bow", "Quiver", "Lembas"]);
}

#[tokio::test]
async fn search_and_category_narrow_results() {
    // ---
    let (market, _store) = setup();
    let session = logged_in(&market, "gimli@erebor.me").await;
    market
        .create_product(listing("Gaming LAPTOP 15in", "Electronics", "450"), &session)
        .await
        .unwrap();
    market
        .create_product(listing("Desk lamp", "Electronics", "10"), &session)
        .await
        .unwrap();
    market
        .create_product(listing("Laptop sleeve", "Clothing", "15"), &session)
        .await
        .unwrap();

    let found = market.list_available("laptop", "Electronics").await.unwrap();
    assert_eq!(titles(&found), vec!["Gaming LAPTOP 15in"]);

    let found = market.list_available("laptop", "All").await.unwrap();
    assert_eq!(titles(&found), vec!["Gaming LAPTOP 15in", "Laptop sleeve"]);

    let found = market.list_available("", "Books").await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn missing_product_is_not_found() {
    // ---
    let (market, _store) = setup();

    let err = market.get_product("404").await.unwrap_err();
    assert!(matches!(err, MarketError::NotFound { kind: "product", .. }));
}

#[tokio::test]
async fn failed_write_keeps_stored_state() {
    // ---
    let (market, store) = setup();
    let session = logged_in(&market, "faramir@gondor.me").await;
    market
        .create_product(listing("Ranger cloak", "Clothing", "25"), &session)
        .await
        .unwrap();

    store.fail_writes.store(true, Ordering::SeqCst);

    let err = market
        .create_product(listing("Bow", "Sports", "30"), &session)
        .await
        .unwrap_err();
    assert!(matches!(err, MarketError::Storage { .. }));
    assert_eq!(err.user_message(), "Posting failed. Please try again.");

    let err = market
        .register(registration("eowyn@rohan.me"))
        .await
        .unwrap_err();
    assert!(matches!(err, MarketError::Storage { .. }));

    store.fail_writes.store(false, Ordering::SeqCst);
    assert_eq!(market.collections.products().await.unwrap().len(), 1);
    assert_eq!(market.collections.users().await.unwrap().len(), 1);
}
