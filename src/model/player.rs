use serde::{Deserialize, Serialize};

use crate::model::roles::{PlayerStatus, PlayerTag, Role};

/// One seat on the board. Owned by the roster; mutated only through it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: u32,
    pub status: PlayerStatus,
    /// What the observer privately thinks this player is.
    pub suspected_role: Role,
    /// What this player has publicly claimed to be.
    pub claimed_role: Role,
    pub tags: Vec<PlayerTag>,
    pub notes: String,
    pub is_me: bool,
    #[serde(default)]
    pub is_sheriff: bool,
    #[serde(default)]
    pub is_running_for_sheriff: bool,
    #[serde(default)]
    pub has_withdrawn: bool,
    /// Declared badge transfer order, up to two slots. Free text, not
    /// validated against live seat ids.
    #[serde(default)]
    pub badge_flow: Vec<Option<u32>>,
}

impl Player {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            status: PlayerStatus::Alive,
            suspected_role: Role::Unknown,
            claimed_role: Role::Unknown,
            tags: Vec::new(),
            notes: String::new(),
            is_me: false,
            is_sheriff: false,
            is_running_for_sheriff: false,
            has_withdrawn: false,
            badge_flow: Vec::new(),
        }
    }

    pub fn has_tag(&self, tag: PlayerTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn is_alive(&self) -> bool {
        self.status == PlayerStatus::Alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let player = Player::new(3);
        let json = serde_json::to_string(&player).unwrap();
        assert!(json.contains("\"suspectedRole\""));
        assert!(json.contains("\"claimedRole\""));
        assert!(json.contains("\"isMe\""));
        assert!(json.contains("\"badgeFlow\""));
    }

    #[test]
    fn loads_snapshot_without_sheriff_fields() {
        // Shape written by older versions of the app.
        let json = r#"{
            "id": 2,
            "status": "存活",
            "suspectedRole": "未知/待定",
            "claimedRole": "预言家",
            "tags": ["金水"],
            "notes": "",
            "isMe": false
        }"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.claimed_role, Role::Seer);
        assert!(player.has_tag(PlayerTag::VerifiedGood));
        assert!(!player.is_sheriff);
        assert!(!player.is_running_for_sheriff);
        assert!(!player.has_withdrawn);
        assert!(player.badge_flow.is_empty());
    }

    #[test]
    fn round_trips_through_json() {
        let mut player = Player::new(7);
        player.status = PlayerStatus::Exiled;
        player.tags.push(PlayerTag::PushTarget);
        player.is_sheriff = true;
        player.badge_flow = vec![Some(3), None];

        let json = serde_json::to_string(&player).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, player);
    }
}
