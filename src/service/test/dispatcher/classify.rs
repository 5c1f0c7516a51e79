use super::*;

/// Tests that ordinary chat is ignored.
///
/// Verifies that a message not starting with a command token produces no output, no
/// error and no platform or catalog calls.
///
/// Expected: Ok with no messages
#[tokio::test]
async fn ignores_non_command_message() {
    let catalog = empty_catalog();
    let (dispatcher, tracker) = dispatcher_with(catalog.clone());
    let platform = FakePlatform::new();
    track(&tracker, "u1", "alice", Some("vc-1")).await;

    let result = dispatcher
        .dispatch(&platform, &message("u1", "alice", "let's play !join"))
        .await;

    assert!(result.unwrap().is_empty());
    assert!(platform.calls().is_empty());
    assert_eq!(catalog.fetches(), 0);
}

/// Tests that commands are case-sensitive.
///
/// Expected: Ok with no messages and no session
#[tokio::test]
async fn ignores_uppercase_token() {
    let (dispatcher, tracker) = dispatcher_with(empty_catalog());
    let platform = FakePlatform::new();
    track(&tracker, "u1", "alice", Some("vc-1")).await;

    let result = dispatcher
        .dispatch(&platform, &message("u1", "alice", "!JOIN"))
        .await;

    assert!(result.unwrap().is_empty());
    assert!(dispatcher.active_session().await.is_none());
}

/// Tests prefix matching with trailing text.
///
/// Expected: `!join now` behaves like `!join`
#[tokio::test]
async fn trailing_text_still_matches() {
    let (dispatcher, tracker) = dispatcher_with(empty_catalog());
    let platform = FakePlatform::new();
    track(&tracker, "u1", "alice", Some("vc-1")).await;

    let outbound = dispatcher
        .dispatch(&platform, &message("u1", "alice", "!join now"))
        .await
        .unwrap();

    assert_eq!(outbound.len(), 1);
    assert!(dispatcher.active_session().await.is_some());
}
