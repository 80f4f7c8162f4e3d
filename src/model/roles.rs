use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Quota configuration: how many seats each role gets.
/// Keyed by the role's Chinese display name on disk.
pub type RoleCounts = HashMap<Role, u32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "狼人")]
    Werewolf,
    #[serde(rename = "狼王")]
    WolfKing,
    #[serde(rename = "平民")]
    Villager,
    #[serde(rename = "预言家")]
    Seer,
    #[serde(rename = "女巫")]
    Witch,
    #[serde(rename = "猎人")]
    Hunter,
    #[serde(rename = "守卫")]
    Guard,
    #[serde(rename = "白痴")]
    Idiot,
    #[serde(rename = "骑士")]
    Knight,
    #[serde(rename = "未知/待定")]
    Unknown,
}

impl Role {
    pub const ALL: [Role; 10] = [
        Role::Werewolf,
        Role::WolfKing,
        Role::Villager,
        Role::Seer,
        Role::Witch,
        Role::Hunter,
        Role::Guard,
        Role::Idiot,
        Role::Knight,
        Role::Unknown,
    ];

    pub const WOLF_ROLES: [Role; 2] = [Role::Werewolf, Role::WolfKing];

    pub const GOD_ROLES: [Role; 6] = [
        Role::Seer,
        Role::Witch,
        Role::Hunter,
        Role::Guard,
        Role::Idiot,
        Role::Knight,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Role::Werewolf => "狼人",
            Role::WolfKing => "狼王",
            Role::Villager => "平民",
            Role::Seer => "预言家",
            Role::Witch => "女巫",
            Role::Hunter => "猎人",
            Role::Guard => "守卫",
            Role::Idiot => "白痴",
            Role::Knight => "骑士",
            Role::Unknown => "未知/待定",
        }
    }

    /// Style class for badges showing this role. Every role maps to
    /// exactly one class.
    pub fn color_class(self) -> &'static str {
        match self {
            Role::Werewolf => "bg-red-600/20 text-red-400 border-red-600/50",
            Role::WolfKing => "bg-red-800/20 text-red-500 border-red-700/50",
            Role::Villager => "bg-emerald-600/20 text-emerald-400 border-emerald-600/50",
            Role::Seer => "bg-fuchsia-600/20 text-fuchsia-400 border-fuchsia-600/50",
            Role::Witch => "bg-purple-600/20 text-purple-400 border-purple-600/50",
            Role::Hunter => "bg-orange-600/20 text-orange-400 border-orange-600/50",
            Role::Guard => "bg-blue-600/20 text-blue-400 border-blue-600/50",
            Role::Idiot => "bg-yellow-600/20 text-yellow-400 border-yellow-600/50",
            Role::Knight => "bg-indigo-600/20 text-indigo-400 border-indigo-600/50",
            Role::Unknown => "bg-slate-800 text-slate-400 border-slate-700",
        }
    }

    pub fn is_wolf(self) -> bool {
        Role::WOLF_ROLES.contains(&self)
    }

    pub fn is_god(self) -> bool {
        Role::GOD_ROLES.contains(&self)
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Unknown
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStatus {
    #[serde(rename = "存活")]
    Alive,
    #[serde(rename = "死亡")]
    Dead,
    #[serde(rename = "放逐")]
    Exiled,
}

impl PlayerStatus {
    pub fn display_name(self) -> &'static str {
        match self {
            PlayerStatus::Alive => "存活",
            PlayerStatus::Dead => "死亡",
            PlayerStatus::Exiled => "放逐",
        }
    }
}

impl Default for PlayerStatus {
    fn default() -> Self {
        PlayerStatus::Alive
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Manual annotations the observer pins on players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerTag {
    /// 金水: checked good by a seer.
    #[serde(rename = "金水")]
    VerifiedGood,
    /// 查杀: checked bad by a seer.
    #[serde(rename = "查杀")]
    VerifiedBad,
    /// 银水: saved by the witch.
    #[serde(rename = "银水")]
    SavedByWitch,
    /// 抗推: vote magnet.
    #[serde(rename = "抗推")]
    PushTarget,
}

pub struct TagStyle {
    pub color: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

impl PlayerTag {
    pub const ALL: [PlayerTag; 4] = [
        PlayerTag::VerifiedGood,
        PlayerTag::VerifiedBad,
        PlayerTag::SavedByWitch,
        PlayerTag::PushTarget,
    ];

    pub fn display_name(self) -> &'static str {
        self.style().label
    }

    /// Display config for this tag. Every tag maps to exactly one entry.
    pub fn style(self) -> TagStyle {
        match self {
            PlayerTag::VerifiedGood => TagStyle {
                color: "bg-yellow-500/20 text-yellow-400 border-yellow-500/50",
                icon: "💧",
                label: "金水",
            },
            PlayerTag::VerifiedBad => TagStyle {
                color: "bg-red-500/20 text-red-400 border-red-500/50",
                icon: "❌",
                label: "查杀",
            },
            PlayerTag::SavedByWitch => TagStyle {
                color: "bg-slate-200/20 text-slate-300 border-slate-400/50",
                icon: "🛡️",
                label: "银水",
            },
            PlayerTag::PushTarget => TagStyle {
                color: "bg-orange-500/20 text-orange-300 border-orange-400/50",
                icon: "🎯",
                label: "抗推",
            },
        }
    }
}

impl fmt::Display for PlayerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The standard 12-player board.
pub fn default_role_counts() -> RoleCounts {
    let mut counts = HashMap::new();
    counts.insert(Role::Werewolf, 4);
    counts.insert(Role::Villager, 4);
    counts.insert(Role::Seer, 1);
    counts.insert(Role::Witch, 1);
    counts.insert(Role::Hunter, 1);
    counts.insert(Role::Idiot, 1);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_a_color_class() {
        for role in Role::ALL {
            assert!(!role.color_class().is_empty(), "{role} missing color class");
        }
    }

    #[test]
    fn every_tag_has_a_style() {
        for tag in PlayerTag::ALL {
            let style = tag.style();
            assert!(!style.color.is_empty());
            assert!(!style.icon.is_empty());
            assert_eq!(style.label, tag.display_name());
        }
    }

    #[test]
    fn roles_serialize_as_chinese_names() {
        let json = serde_json::to_string(&Role::Seer).unwrap();
        assert_eq!(json, "\"预言家\"");
        let back: Role = serde_json::from_str("\"未知/待定\"").unwrap();
        assert_eq!(back, Role::Unknown);
    }

    #[test]
    fn role_counts_use_chinese_keys() {
        let mut counts = RoleCounts::new();
        counts.insert(Role::Werewolf, 4);
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, "{\"狼人\":4}");

        let back: RoleCounts = serde_json::from_str("{\"女巫\":1,\"平民\":3}").unwrap();
        assert_eq!(back.get(&Role::Witch), Some(&1));
        assert_eq!(back.get(&Role::Villager), Some(&3));
    }

    #[test]
    fn default_counts_are_the_standard_board() {
        let counts = default_role_counts();
        let total: u32 = counts.values().sum();
        assert_eq!(total, 12);
        assert_eq!(counts.get(&Role::Werewolf), Some(&4));
        assert_eq!(counts.get(&Role::WolfKing), None);
    }

    #[test]
    fn faction_membership() {
        assert!(Role::WolfKing.is_wolf());
        assert!(!Role::WolfKing.is_god());
        assert!(Role::Idiot.is_god());
        assert!(!Role::Villager.is_god());
        assert!(!Role::Unknown.is_wolf());
    }

    #[test]
    fn status_serializes_as_chinese() {
        let json = serde_json::to_string(&PlayerStatus::Exiled).unwrap();
        assert_eq!(json, "\"放逐\"");
    }
}
