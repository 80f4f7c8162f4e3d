use serde::{Deserialize, Serialize};

use crate::model::roles::{default_role_counts, Role, RoleCounts};

/// Per-game bookkeeping. The consumable flags are manual switches for the
/// observer's own tracking; nothing enforces one-shot use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMeta {
    #[serde(default = "first_day")]
    pub current_day: u32,
    #[serde(default)]
    pub witch_antidote_used: bool,
    #[serde(default)]
    pub witch_poison_used: bool,
    #[serde(default)]
    pub guard_last_protected_id: Option<u32>,
    /// True while the hunter's shot is still available.
    #[serde(default = "gun_available")]
    pub hunter_gun_status: bool,
    #[serde(default)]
    pub enable_sheriff: bool,
    /// Quota snapshot taken at game start. Later template edits never
    /// touch a running game.
    #[serde(default = "default_role_counts")]
    pub role_counts: RoleCounts,
}

fn first_day() -> u32 {
    1
}

fn gun_available() -> bool {
    true
}

impl Default for GameMeta {
    fn default() -> Self {
        Self {
            current_day: 1,
            witch_antidote_used: false,
            witch_poison_used: false,
            guard_last_protected_id: None,
            hunter_gun_status: true,
            enable_sheriff: false,
            role_counts: default_role_counts(),
        }
    }
}

/// The persisted meta blob: observer identity plus game bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaRecord {
    pub my_id: u32,
    pub my_role: Role,
    #[serde(default)]
    pub game_state: GameMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_on_day_one_with_gun_available() {
        let meta = GameMeta::default();
        assert_eq!(meta.current_day, 1);
        assert!(meta.hunter_gun_status);
        assert!(!meta.witch_antidote_used);
        assert!(!meta.witch_poison_used);
        assert_eq!(meta.guard_last_protected_id, None);
        assert!(!meta.enable_sheriff);
    }

    #[test]
    fn loads_meta_missing_newer_fields() {
        // Written before the sheriff toggle and guard/hunter fields existed.
        let json = r#"{
            "currentDay": 3,
            "witchAntidoteUsed": true,
            "witchPoisonUsed": false,
            "roleCounts": {"狼人": 4, "平民": 4, "预言家": 1, "女巫": 1, "猎人": 1, "白痴": 1}
        }"#;
        let meta: GameMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.current_day, 3);
        assert!(meta.witch_antidote_used);
        assert!(meta.hunter_gun_status);
        assert_eq!(meta.guard_last_protected_id, None);
        assert!(!meta.enable_sheriff);
        assert_eq!(meta.role_counts.get(&Role::Werewolf), Some(&4));
    }

    #[test]
    fn loads_record_missing_game_state() {
        // Saved before per-game bookkeeping moved into the meta blob.
        let json = r#"{"myId": 1, "myRole": "平民"}"#;
        let record: MetaRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.my_id, 1);
        assert_eq!(record.my_role, Role::Villager);
        assert_eq!(record.game_state, GameMeta::default());
    }

    #[test]
    fn meta_record_uses_original_disk_keys() {
        let record = MetaRecord {
            my_id: 5,
            my_role: Role::Witch,
            game_state: GameMeta::default(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["myId"], 5);
        assert_eq!(json["myRole"], "女巫");
        assert_eq!(json["gameState"]["currentDay"], 1);
        assert_eq!(json["gameState"]["hunterGunStatus"], true);
    }
}
