use super::*;

/// Tests first observation of a user.
///
/// Verifies that an unseen user is created with the supplied name and channel.
///
/// Expected: user created, transition Joined from no channel
#[tokio::test]
async fn creates_unseen_user() {
    let tracker = PresenceTracker::new();

    let update = tracker
        .on_membership_change("u1", Some("vc-1".to_string()), Some("alice".to_string()))
        .await;

    assert!(update.created);
    assert_eq!(update.user.name, "alice");
    assert_eq!(update.user.current_voice_channel.as_deref(), Some("vc-1"));
    assert_eq!(
        update.transition,
        PresenceTransition::Joined {
            previous: None,
            channel: "vc-1".to_string(),
        }
    );
}

/// Tests that the name is captured only once.
///
/// Verifies that a later change carrying a different name leaves the stored name
/// untouched while still moving the user.
///
/// Expected: original name kept, channel updated
#[tokio::test]
async fn keeps_name_from_first_observation() {
    let tracker = PresenceTracker::new();
    track(&tracker, "u1", "alice", Some("vc-1")).await;

    let update = tracker
        .on_membership_change("u1", Some("vc-2".to_string()), Some("renamed".to_string()))
        .await;

    assert!(!update.created);
    assert_eq!(update.user.name, "alice");
    assert_eq!(update.user.current_voice_channel.as_deref(), Some("vc-2"));
    assert_eq!(
        update.transition,
        PresenceTransition::Joined {
            previous: Some("vc-1".to_string()),
            channel: "vc-2".to_string(),
        }
    );
}

/// Tests leaving voice.
///
/// Verifies that an empty channel is stored rather than ignored.
///
/// Expected: channel cleared, transition Left
#[tokio::test]
async fn stores_leaving_voice() {
    let tracker = PresenceTracker::new();
    track(&tracker, "u1", "alice", Some("vc-1")).await;

    let update = tracker.on_membership_change("u1", None, None).await;

    assert_eq!(update.user.current_voice_channel, None);
    assert_eq!(
        update.transition,
        PresenceTransition::Left {
            previous: "vc-1".to_string(),
        }
    );
    assert_eq!(tracker.get("u1").await.unwrap().current_voice_channel, None);
}

/// Tests applying the same change twice.
///
/// Verifies that the upsert is idempotent.
///
/// Expected: second application reports Unchanged and state is identical
#[tokio::test]
async fn repeated_change_is_idempotent() {
    let tracker = PresenceTracker::new();
    let first = tracker
        .on_membership_change("u1", Some("vc-1".to_string()), Some("alice".to_string()))
        .await;

    let second = tracker
        .on_membership_change("u1", Some("vc-1".to_string()), Some("alice".to_string()))
        .await;

    assert_eq!(second.transition, PresenceTransition::Unchanged);
    assert_eq!(first.user, second.user);
    assert_eq!(tracker.all().await.len(), 1);
}

/// Tests first observation without a name or channel.
///
/// Verifies that a user seen leaving voice before ever being seen is still tracked
/// with an empty name.
///
/// Expected: user created with empty name and no channel
#[tokio::test]
async fn creates_user_without_name() {
    let tracker = PresenceTracker::new();

    let update = tracker.on_membership_change("u1", None, None).await;

    assert!(update.created);
    assert_eq!(update.user.name, "");
    assert_eq!(update.user.current_voice_channel, None);
    assert_eq!(update.transition, PresenceTransition::Unchanged);
}

/// Tests the last-applied event winning for one user under concurrent updates.
///
/// Runs each user's event sequence on its own task so that users interleave freely.
/// Each user's final channel must be the last one applied for that user, whatever the
/// interleaving with other users.
///
/// Expected: every user ends in the final channel of its own sequence
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn last_applied_change_wins_per_user() {
    let tracker = PresenceTracker::new();

    let mut tasks = Vec::new();
    for user in 0..16 {
        let tracker = tracker.clone();
        tasks.push(tokio::spawn(async move {
            let user_id = format!("u{}", user);
            for step in 0..50 {
                let channel = if step % 7 == 3 {
                    None
                } else {
                    Some(format!("vc-{}", (user + step) % 5))
                };
                tracker
                    .on_membership_change(&user_id, channel, Some(user_id.clone()))
                    .await;
            }
            tracker
                .on_membership_change(&user_id, Some(format!("final-{}", user)), None)
                .await;
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let users = tracker.all().await;
    assert_eq!(users.len(), 16);
    for user in users {
        let index = user.id.trim_start_matches('u');
        assert_eq!(
            user.current_voice_channel,
            Some(format!("final-{}", index))
        );
        assert_eq!(user.name, user.id);
    }
}
