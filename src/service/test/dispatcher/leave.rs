use super::*;

/// Tests `!leave` without a prior `!join`.
///
/// Expected: Err(NoActiveSession), no output, no platform calls
#[tokio::test]
async fn leave_without_session_is_no_active_session() {
    let (dispatcher, _tracker) = dispatcher_with(empty_catalog());
    let platform = FakePlatform::new();

    let result = dispatcher
        .dispatch(&platform, &message("u1", "alice", "!leave"))
        .await;

    assert!(matches!(result, Err(DispatchError::NoActiveSession)));
    assert!(platform.calls().is_empty());
}

/// Tests leaving an active session.
///
/// Expected: Ok with no messages, session released on the platform and cleared
#[tokio::test]
async fn leave_releases_active_session() {
    let (dispatcher, tracker) = dispatcher_with(empty_catalog());
    let platform = FakePlatform::new();
    track(&tracker, "u1", "alice", Some("vc-1")).await;
    dispatcher
        .dispatch(&platform, &message("u1", "alice", "!join"))
        .await
        .unwrap();

    let outbound = dispatcher
        .dispatch(&platform, &message("u1", "alice", "!leave"))
        .await
        .unwrap();

    assert!(outbound.is_empty());
    assert_eq!(platform.count_calls("leave_voice:vc-1"), 1);
    assert!(dispatcher.active_session().await.is_none());
}

/// Tests leaving twice.
///
/// Expected: second `!leave` reports NoActiveSession
#[tokio::test]
async fn second_leave_has_no_session() {
    let (dispatcher, tracker) = dispatcher_with(empty_catalog());
    let platform = FakePlatform::new();
    track(&tracker, "u1", "alice", Some("vc-1")).await;
    dispatcher
        .dispatch(&platform, &message("u1", "alice", "!join"))
        .await
        .unwrap();
    dispatcher
        .dispatch(&platform, &message("u1", "alice", "!leave"))
        .await
        .unwrap();

    let result = dispatcher
        .dispatch(&platform, &message("u1", "alice", "!leave"))
        .await;

    assert!(matches!(result, Err(DispatchError::NoActiveSession)));
}
