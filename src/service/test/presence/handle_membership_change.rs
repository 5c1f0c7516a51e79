use super::*;

fn change(user_id: &str, channel_id: Option<&str>) -> MembershipChange {
    MembershipChange::new(
        user_id.to_string(),
        channel_id.map(str::to_string),
        Utc::now(),
    )
}

/// Tests name resolution for a new user without member data.
///
/// Verifies that the service looks the user up on the platform and stores the
/// returned name.
///
/// Expected: name from platform, one lookup
#[tokio::test]
async fn looks_up_name_of_new_user() {
    let tracker = PresenceTracker::new();
    let platform = FakePlatform::new()
        .with_user("u1", "alice", false)
        .with_channel("vc-1", "General");

    let update = PresenceService::new(&tracker, &platform)
        .handle_membership_change(&change("u1", Some("vc-1")), None)
        .await;

    assert_eq!(update.user.name, "alice");
    assert_eq!(platform.count_calls("lookup_user:"), 1);
    assert_eq!(platform.count_calls("channel_name:vc-1"), 1);
}

/// Tests that the event's member name is preferred.
///
/// Expected: name from the event, no lookup
#[tokio::test]
async fn uses_known_name_without_lookup() {
    let tracker = PresenceTracker::new();
    let platform = FakePlatform::new();

    let update = PresenceService::new(&tracker, &platform)
        .handle_membership_change(&change("u1", Some("vc-1")), Some("alice".to_string()))
        .await;

    assert_eq!(update.user.name, "alice");
    assert_eq!(platform.count_calls("lookup_user:"), 0);
}

/// Tests a failing name lookup.
///
/// Verifies that the channel update still applies and the name is left empty.
///
/// Expected: user tracked in vc-1 with empty name
#[tokio::test]
async fn failed_lookup_still_applies_channel() {
    let tracker = PresenceTracker::new();
    let platform = FakePlatform::new();

    let update = PresenceService::new(&tracker, &platform)
        .handle_membership_change(&change("u1", Some("vc-1")), None)
        .await;

    assert!(update.created);
    assert_eq!(update.user.name, "");
    assert_eq!(
        tracker.get("u1").await.unwrap().current_voice_channel.as_deref(),
        Some("vc-1")
    );
}

/// Tests that known users are not looked up again.
///
/// Expected: a single lookup across two changes
#[tokio::test]
async fn does_not_look_up_known_user() {
    let tracker = PresenceTracker::new();
    let platform = FakePlatform::new().with_user("u1", "alice", false);
    let service = PresenceService::new(&tracker, &platform);

    service
        .handle_membership_change(&change("u1", Some("vc-1")), None)
        .await;
    let update = service
        .handle_membership_change(&change("u1", None), None)
        .await;

    assert_eq!(platform.count_calls("lookup_user:"), 1);
    assert_eq!(
        update.transition,
        PresenceTransition::Left {
            previous: "vc-1".to_string(),
        }
    );
}

/// Tests a change with an empty channel id.
///
/// Verifies that the empty string coming off the gateway is treated as leaving voice.
///
/// Expected: no current channel
#[tokio::test]
async fn empty_channel_id_is_leaving_voice() {
    let tracker = PresenceTracker::new();
    let platform = FakePlatform::new();
    track(&tracker, "u1", "alice", Some("vc-1")).await;

    PresenceService::new(&tracker, &platform)
        .handle_membership_change(&change("u1", Some("")), None)
        .await;

    assert_eq!(tracker.get("u1").await.unwrap().current_voice_channel, None);
}
