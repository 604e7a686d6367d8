#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Quote lifecycle: validation, ownership and the delete cascade.

mod support;

use quotes::domain::error::DomainError;
use quotes_sdk::{QuoteDraft, QuoteId, UserId};
use support::TestContext;
use tracing_test::traced_test;

fn plato() -> QuoteDraft {
    QuoteDraft::new("Plato", "The measure of a man is what he does with power.")
}

#[tokio::test]
async fn create_sets_owner_and_lists() {
    let ctx = TestContext::new().await;
    let s = ctx.signed_in("a@x.com").await;

    let quote = ctx.services.quotes.create(&s, plato()).await.unwrap();
    assert_eq!(quote.owner, s.user_id);
    assert_eq!(quote.author, "Plato");

    let all = ctx.services.quotes.list_all().await.unwrap();
    assert_eq!(all, vec![quote.clone()]);
    assert_eq!(ctx.services.quotes.get(quote.id).await.unwrap(), quote);
}

#[tokio::test]
async fn length_boundaries_are_inclusive() {
    let ctx = TestContext::new().await;
    let s = ctx.signed_in("a@x.com").await;

    let ok = QuoteDraft::new("abc", "0123456789");
    assert!(ctx.services.quotes.create(&s, ok).await.is_ok());

    let short_author = QuoteDraft::new("ab", "0123456789");
    let err = ctx.services.quotes.create(&s, short_author).await.unwrap_err();
    assert!(matches!(err, DomainError::AuthorTooShort { len: 2, min: 3 }));

    let short_text = QuoteDraft::new("abc", "012345678");
    let err = ctx.services.quotes.create(&s, short_text).await.unwrap_err();
    assert!(matches!(err, DomainError::TextTooShort { len: 9, min: 10 }));

    let long_text = QuoteDraft::new("abc", "x".repeat(301));
    let err = ctx.services.quotes.create(&s, long_text).await.unwrap_err();
    assert!(matches!(err, DomainError::TextTooLong { .. }));

    // Only the valid quote was persisted
    assert_eq!(ctx.services.quotes.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn author_is_checked_before_text() {
    let ctx = TestContext::new().await;
    let s = ctx.signed_in("a@x.com").await;
    let err = ctx
        .services
        .quotes
        .create(&s, QuoteDraft::new("X", "Y"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::AuthorTooShort { .. }));
}

#[tokio::test]
async fn owner_edits_in_place() {
    let ctx = TestContext::new().await;
    let s = ctx.signed_in("a@x.com").await;
    let quote = ctx.services.quotes.create(&s, plato()).await.unwrap();

    let edited = ctx
        .services
        .quotes
        .edit(&s, quote.id, QuoteDraft::new("Socrates", "An unexamined life is not worth living."))
        .await
        .unwrap();

    assert_eq!(edited.id, quote.id);
    assert_eq!(edited.owner, quote.owner);
    assert_eq!(edited.author, "Socrates");
    assert_eq!(ctx.services.quotes.get(quote.id).await.unwrap(), edited);
}

#[tokio::test]
#[traced_test]
async fn non_owner_cannot_edit_or_delete() {
    let ctx = TestContext::new().await;
    let owner = ctx.signed_in("a@x.com").await;
    let other = ctx.signed_in("b@x.com").await;
    let quote = ctx.services.quotes.create(&owner, plato()).await.unwrap();

    // Forbidden wins over validation failures
    let err = ctx
        .services
        .quotes
        .edit(&other, quote.id, QuoteDraft::new("X", "Y"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden { .. }));

    let err = ctx
        .services
        .quotes
        .edit(&other, quote.id, QuoteDraft::new("Valid author", "Valid text long enough"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden { .. }));

    let err = ctx.services.quotes.delete(&other, quote.id).await.unwrap_err();
    assert!(matches!(err, DomainError::Forbidden { .. }));

    assert_eq!(ctx.services.quotes.get(quote.id).await.unwrap(), quote);
    assert!(logs_contain("Editing quote"));
}

#[tokio::test]
async fn invalid_edit_by_owner_leaves_quote_unchanged() {
    let ctx = TestContext::new().await;
    let s = ctx.signed_in("a@x.com").await;
    let quote = ctx.services.quotes.create(&s, plato()).await.unwrap();

    let err = ctx
        .services
        .quotes
        .edit(&s, quote.id, QuoteDraft::new("Plato", "short"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::TextTooShort { .. }));
    assert_eq!(ctx.services.quotes.get(quote.id).await.unwrap(), quote);
}

#[tokio::test]
async fn missing_quote_is_not_found() {
    let ctx = TestContext::new().await;
    let s = ctx.signed_in("a@x.com").await;
    let missing = QuoteId(999);

    assert!(matches!(
        ctx.services.quotes.get(missing).await,
        Err(DomainError::QuoteNotFound { .. })
    ));
    assert!(matches!(
        ctx.services.quotes.edit(&s, missing, plato()).await,
        Err(DomainError::QuoteNotFound { .. })
    ));
    assert!(matches!(
        ctx.services.quotes.delete(&s, missing).await,
        Err(DomainError::QuoteNotFound { .. })
    ));
}

#[tokio::test]
async fn delete_cascades_to_every_favorite() {
    let ctx = TestContext::new().await;
    let owner = ctx.signed_in("a@x.com").await;
    let b = ctx.signed_in("b@x.com").await;
    let c = ctx.signed_in("c@x.com").await;
    let quote = ctx.services.quotes.create(&owner, plato()).await.unwrap();
    let kept = ctx
        .services
        .quotes
        .create(&owner, QuoteDraft::new("Seneca", "Luck is what happens when preparation meets opportunity."))
        .await
        .unwrap();

    for s in [&owner, &b, &c] {
        ctx.services.favorites.toggle(s, quote.id).await.unwrap();
    }
    ctx.services.favorites.toggle(&b, kept.id).await.unwrap();

    ctx.services.quotes.delete(&owner, quote.id).await.unwrap();

    for s in [&owner, &c] {
        assert!(ctx.services.favorites.favorites_of(s.user_id).await.unwrap().is_empty());
    }
    assert_eq!(
        ctx.services.favorites.favorites_of(b.user_id).await.unwrap(),
        vec![kept.clone()]
    );
    assert_eq!(ctx.services.quotes.list_all().await.unwrap(), vec![kept]);
}

#[tokio::test]
async fn list_by_owner_filters() {
    let ctx = TestContext::new().await;
    let a = ctx.signed_in("a@x.com").await;
    let b = ctx.signed_in("b@x.com").await;
    let qa = ctx.services.quotes.create(&a, plato()).await.unwrap();
    ctx.services.quotes.create(&b, plato()).await.unwrap();

    assert_eq!(ctx.services.quotes.list_by_owner(a.user_id).await.unwrap(), vec![qa]);
    assert!(ctx.services.quotes.list_by_owner(UserId(999)).await.unwrap().is_empty());
}

#[tokio::test]
async fn user_quotes_requires_existing_user() {
    let ctx = TestContext::new().await;
    let a = ctx.signed_in("a@x.com").await;
    ctx.services.quotes.create(&a, plato()).await.unwrap();

    let uq = ctx.services.quotes.user_quotes(a.user_id).await.unwrap();
    assert_eq!(uq.user.email, "a@x.com");
    assert_eq!(uq.quotes.len(), 1);

    let err = ctx.services.quotes.user_quotes(UserId(999)).await.unwrap_err();
    assert!(matches!(err, DomainError::UserNotFound { .. }));
}

#[tokio::test]
async fn home_feed_excludes_current_user() {
    let ctx = TestContext::new().await;
    let a = ctx.signed_in("a@x.com").await;
    let b = ctx.signed_in("b@x.com").await;
    let q = ctx.services.quotes.create(&b, plato()).await.unwrap();
    ctx.services.favorites.toggle(&a, q.id).await.unwrap();

    let feed = ctx.services.quotes.home_feed(&a).await.unwrap();
    assert_eq!(feed.quotes, vec![q.clone()]);
    assert_eq!(feed.users.len(), 1);
    assert_eq!(feed.users[0].id, b.user_id);
    assert_eq!(feed.favorite_ids, vec![q.id]);

    let feed_b = ctx.services.quotes.home_feed(&b).await.unwrap();
    assert!(feed_b.favorite_ids.is_empty());
    assert_eq!(feed_b.users[0].id, a.user_id);
}
