#![allow(clippy::unwrap_used, clippy::expect_used)]

//! The in-process `QuotesApi` client delegates to the services and maps errors
//! into `QuotesError`.

mod support;

use quotes_kit::SecretString;
use quotes_sdk::{QuoteDraft, QuotesError, Session, SessionToken, ToggleOutcome};
use support::new_user;

#[tokio::test]
async fn client_runs_the_scenario() {
    let client = support::test_module().await.client();

    let a = client.register(new_user("a@x.com", "pw1", "pw1")).await.unwrap();
    let s1 = client.login("a@x.com", &SecretString::new("pw1")).await.unwrap();
    assert_eq!(client.current_user(&s1.token).await, Some(a));

    let q = client
        .contribute(&s1, QuoteDraft::new("Plato", "The measure of a man..."))
        .await
        .unwrap();

    client.register(new_user("b@x.com", "pw2", "pw2")).await.unwrap();
    let s2 = client.login("b@x.com", &SecretString::new("pw2")).await.unwrap();

    assert_eq!(client.toggle_favorite(&s2, q.id).await.unwrap(), ToggleOutcome::Added);
    assert_eq!(client.favorites(&s2).await.unwrap(), vec![q.clone()]);
    assert_eq!(client.toggle_favorite(&s2, q.id).await.unwrap(), ToggleOutcome::Removed);

    let err = client
        .edit_quote(&s2, q.id, QuoteDraft::new("X", "Y"))
        .await
        .unwrap_err();
    assert!(matches!(err, QuotesError::Forbidden { .. }));

    client.delete_quote(&s1, q.id).await.unwrap();
    assert!(client.home_feed(&s1).await.unwrap().quotes.is_empty());
    assert!(client.user_quotes(&s2, a).await.unwrap().quotes.is_empty());

    client.logout(&s1).await.unwrap();
    assert_eq!(client.current_user(&s1.token).await, None);
}

#[tokio::test]
async fn client_maps_domain_errors() {
    let client = support::test_module().await.client();

    let err = client
        .register(new_user("a@x.com", "pw1", "pw2"))
        .await
        .unwrap_err();
    assert!(matches!(err, QuotesError::Validation { ref field, .. } if field == "confirmPassword"));

    let err = client
        .login("nobody@x.com", &SecretString::new("pw"))
        .await
        .unwrap_err();
    assert!(matches!(err, QuotesError::Unauthorized { .. }));

    client.register(new_user("a@x.com", "pw1", "pw1")).await.unwrap();
    let err = client
        .register(new_user("a@x.com", "pw1", "pw1"))
        .await
        .unwrap_err();
    assert!(matches!(err, QuotesError::Conflict { .. }));

    let s = client.login("a@x.com", &SecretString::new("pw1")).await.unwrap();
    let err = client
        .delete_quote(&s, quotes_sdk::QuoteId(7))
        .await
        .unwrap_err();
    assert_eq!(err, QuotesError::not_found("Quote", 7));
}

#[tokio::test]
async fn client_rejects_revoked_session() {
    let client = support::test_module().await.client();

    client.register(new_user("a@x.com", "pw1", "pw1")).await.unwrap();
    let s1 = client.login("a@x.com", &SecretString::new("pw1")).await.unwrap();
    let q = client
        .contribute(&s1, QuoteDraft::new("Plato", "The measure of a man..."))
        .await
        .unwrap();
    client.logout(&s1).await.unwrap();

    let err = client
        .contribute(&s1, QuoteDraft::new("Seneca", "Luck is what happens..."))
        .await
        .unwrap_err();
    assert!(matches!(err, QuotesError::Unauthorized { .. }));

    let err = client.delete_quote(&s1, q.id).await.unwrap_err();
    assert!(matches!(err, QuotesError::Unauthorized { .. }));
    assert!(client.favorites(&s1).await.is_err());
    assert!(client.home_feed(&s1).await.is_err());
}

#[tokio::test]
async fn client_rejects_forged_session() {
    let client = support::test_module().await.client();

    let a = client.register(new_user("a@x.com", "pw1", "pw1")).await.unwrap();
    let s1 = client.login("a@x.com", &SecretString::new("pw1")).await.unwrap();
    let q = client
        .contribute(&s1, QuoteDraft::new("Plato", "The measure of a man..."))
        .await
        .unwrap();

    let forged = Session {
        token: SessionToken::new("forged"),
        user_id: a,
        expires_at: s1.expires_at,
    };
    let err = client.delete_quote(&forged, q.id).await.unwrap_err();
    assert!(matches!(err, QuotesError::Unauthorized { .. }));
    let err = client.user_quotes(&forged, a).await.unwrap_err();
    assert!(matches!(err, QuotesError::Unauthorized { .. }));

    assert_eq!(client.user_quotes(&s1, a).await.unwrap().quotes, vec![q]);
}

#[tokio::test]
async fn client_acts_as_the_stored_session_user() {
    let client = support::test_module().await.client();

    let a = client.register(new_user("a@x.com", "pw1", "pw1")).await.unwrap();
    let s1 = client.login("a@x.com", &SecretString::new("pw1")).await.unwrap();
    let q = client
        .contribute(&s1, QuoteDraft::new("Plato", "The measure of a man..."))
        .await
        .unwrap();

    let b = client.register(new_user("b@x.com", "pw2", "pw2")).await.unwrap();
    let s2 = client.login("b@x.com", &SecretString::new("pw2")).await.unwrap();

    // b's token with a's id: the token decides who acts
    let spoofed = Session {
        user_id: a,
        ..s2.clone()
    };
    let err = client.delete_quote(&spoofed, q.id).await.unwrap_err();
    assert!(matches!(err, QuotesError::Forbidden { .. }));

    let mine = client
        .contribute(&spoofed, QuoteDraft::new("Seneca", "Luck is what happens..."))
        .await
        .unwrap();
    assert_eq!(mine.owner, b);
}
