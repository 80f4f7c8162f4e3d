use chrono::{Local, Utc};
use serde::Serialize;

use crate::model::event::GameEvent;
use crate::model::meta::GameMeta;
use crate::model::player::Player;
use crate::model::roles::Role;

/// On-demand snapshot of the whole session for download. Read-only; never
/// fed back into the app.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDoc {
    pub date: String,
    pub my_role: Role,
    pub my_id: u32,
    pub game_state: GameMeta,
    pub players: Vec<Player>,
    pub events: Vec<GameEvent>,
}

impl ExportDoc {
    pub fn new(
        my_role: Role,
        my_id: u32,
        game_state: GameMeta,
        players: Vec<Player>,
        events: Vec<GameEvent>,
    ) -> Self {
        Self {
            date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            my_role,
            my_id,
            game_state,
            players,
            events,
        }
    }

    /// Suggested download name, stamped with today's date.
    pub fn filename() -> String {
        format!("wolfpack-game-{}.json", Utc::now().format("%Y-%m-%d"))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_carries_all_session_sections() {
        let doc = ExportDoc::new(Role::Seer, 2, GameMeta::default(), vec![Player::new(1)], vec![]);
        let json: serde_json::Value = serde_json::from_str(&doc.to_json()).unwrap();
        assert_eq!(json["myRole"], "预言家");
        assert_eq!(json["myId"], 2);
        assert!(json["date"].is_string());
        assert!(json["gameState"]["roleCounts"].is_object());
        assert_eq!(json["players"].as_array().unwrap().len(), 1);
        assert_eq!(json["events"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn filename_embeds_current_date() {
        let name = ExportDoc::filename();
        let today = Utc::now().format("%Y-%m-%d").to_string();
        assert_eq!(name, format!("wolfpack-game-{today}.json"));
    }
}
