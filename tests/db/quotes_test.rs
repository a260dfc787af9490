// Integration tests for quote database operations
use std::collections::HashSet;

use motivator::error::QuoteError;
use motivator::seed;

use crate::common::{delete_category, ensure_seeded, insert_quote, setup_test_db, unique_category};

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_random_quote_matches_requested_category() {
  let db = setup_test_db()
    .await
    .expect("Failed to setup test database");
  ensure_seeded(&db).await.expect("Failed to seed quotes");

  for category in seed::categories() {
    for _ in 0..20 {
      let quote = db
        .random_quote(Some(category))
        .await
        .expect("Failed to fetch quote");
      assert_eq!(quote.category, category);
      assert!(!quote.author.is_empty());
      assert!(!quote.message.is_empty());
    }
  }
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_unfiltered_quote_samples_every_category() {
  let db = setup_test_db()
    .await
    .expect("Failed to setup test database");
  ensure_seeded(&db).await.expect("Failed to seed quotes");

  let mut seen = HashSet::new();
  for _ in 0..500 {
    let quote = db.random_quote(None).await.expect("Failed to fetch quote");
    seen.insert(quote.category);
  }

  for category in seed::categories() {
    assert!(seen.contains(category), "never sampled {}", category);
  }
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_empty_category_is_unfiltered() {
  let db = setup_test_db()
    .await
    .expect("Failed to setup test database");
  ensure_seeded(&db).await.expect("Failed to seed quotes");

  let quote = db.random_quote(Some("")).await;
  assert!(quote.is_ok());
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_unknown_category_is_not_found() {
  let db = setup_test_db()
    .await
    .expect("Failed to setup test database");

  let err = db
    .random_quote(Some("nonexistent-category"))
    .await
    .expect_err("Expected no quote for unknown category");

  match err {
    QuoteError::NotFound { category } => {
      assert_eq!(category.as_deref(), Some("nonexistent-category"));
    }
    other => panic!("Expected NotFound, got {:?}", other),
  }
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_category_match_is_exact() {
  let db = setup_test_db()
    .await
    .expect("Failed to setup test database");

  let category = unique_category("exact");
  let inserted = insert_quote(&db, "Test Author", "Test message", &category)
    .await
    .expect("Failed to insert quote");

  let quote = db
    .random_quote(Some(category.as_str()))
    .await
    .expect("Failed to fetch quote");
  assert_eq!(quote.id, inserted.id);
  assert_eq!(quote.author, "Test Author");
  assert_eq!(quote.message, "Test message");

  // No case folding
  let upper = category.to_uppercase();
  let result = db.random_quote(Some(upper.as_str())).await;
  assert!(matches!(result, Err(QuoteError::NotFound { .. })));

  delete_category(&db, &category)
    .await
    .expect("Failed to clean up quotes");
}
