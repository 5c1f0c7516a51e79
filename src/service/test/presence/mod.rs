use chrono::Utc;

use crate::{
    model::message::MembershipChange,
    service::presence::{PresenceService, PresenceTracker, PresenceTransition},
};

use super::{track, FakePlatform};

mod handle_membership_change;
mod on_membership_change;
