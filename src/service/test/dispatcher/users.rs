use super::*;

fn texts(outbound: &[OutboundMessage]) -> Vec<String> {
    let mut texts: Vec<String> = outbound.iter().map(OutboundMessage::summary).collect();
    texts.sort();
    texts
}

/// Tests listing users sharing the sender's channel.
///
/// u1 and u2 are both in vc-2 and u1 sends `!users`; the sender is listed as well.
///
/// Expected: two messages to vc-2 naming u1 and u2
#[tokio::test]
async fn lists_users_in_sender_channel() {
    let (dispatcher, tracker) = dispatcher_with(empty_catalog());
    let platform = FakePlatform::new();
    track(&tracker, "u1", "alice", Some("vc-2")).await;
    track(&tracker, "u2", "bob", Some("vc-2")).await;
    track(&tracker, "u3", "carol", Some("vc-3")).await;

    let outbound = dispatcher
        .dispatch(&platform, &message("u1", "alice", "!users"))
        .await
        .unwrap();

    assert_eq!(outbound.len(), 2);
    assert!(outbound.iter().all(|message| message.channel_id == "vc-2"));
    assert_eq!(
        texts(&outbound),
        vec![
            "aliceさんが参加してます".to_string(),
            "bobさんが参加してます".to_string(),
        ]
    );
}

/// Tests `!users` from an untracked sender.
///
/// Expected: Err(MissingUserState)
#[tokio::test]
async fn unknown_sender_is_missing_user_state() {
    let (dispatcher, tracker) = dispatcher_with(empty_catalog());
    let platform = FakePlatform::new();
    track(&tracker, "u2", "bob", Some("vc-2")).await;

    let result = dispatcher
        .dispatch(&platform, &message("u1", "alice", "!users"))
        .await;

    assert!(matches!(result, Err(DispatchError::MissingUserState { .. })));
}

/// Tests `!users` from a sender out of voice.
///
/// Users who left voice must not be listed as sharing an "empty" channel.
///
/// Expected: Err(NotInVoiceChannel)
#[tokio::test]
async fn sender_out_of_voice_lists_nothing() {
    let (dispatcher, tracker) = dispatcher_with(empty_catalog());
    let platform = FakePlatform::new();
    track(&tracker, "u1", "alice", None).await;
    track(&tracker, "u2", "bob", None).await;

    let result = dispatcher
        .dispatch(&platform, &message("u1", "alice", "!users"))
        .await;

    assert!(matches!(
        result,
        Err(DispatchError::NotInVoiceChannel { .. })
    ));
}
