use crate::model::player::Player;
use crate::model::roles::{PlayerStatus, PlayerTag, Role, RoleCounts};

/// Field-level update for one player. Only supplied fields are merged.
#[derive(Debug, Clone, Default)]
pub struct PlayerPatch {
    pub status: Option<PlayerStatus>,
    pub suspected_role: Option<Role>,
    pub claimed_role: Option<Role>,
    pub tags: Option<Vec<PlayerTag>>,
    pub notes: Option<String>,
    pub is_running_for_sheriff: Option<bool>,
    pub has_withdrawn: Option<bool>,
}

/// The ordered collection of seats for one game. All player mutation goes
/// through here; unknown ids are silently ignored.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a fresh board: one seat per configured slot, ids 1..=N.
    /// The observer's seat gets `is_me` and the observer's own role as its
    /// suspected role. An observer id outside 1..=N is clamped into range
    /// so the board always has exactly one observer seat.
    pub fn init(counts: &RoleCounts, observer_id: u32, observer_role: Role) -> Self {
        let total: u32 = counts.values().sum();
        let observer_id = observer_id.clamp(1, total.max(1));

        let players = (1..=total)
            .map(|id| {
                let mut player = Player::new(id);
                if id == observer_id {
                    player.is_me = true;
                    player.suspected_role = observer_role;
                }
                player
            })
            .collect();

        Self { players }
    }

    pub fn from_players(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: u32) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// The seat marked as the observer's own.
    pub fn observer_id(&self) -> Option<u32> {
        self.players.iter().find(|p| p.is_me).map(|p| p.id)
    }

    /// Merge the supplied fields into the identified player. Setting one of
    /// the candidacy flags clears the other on the same player; they are
    /// never both true.
    pub fn update(&mut self, id: u32, patch: PlayerPatch) {
        let Some(player) = self.get_mut(id) else {
            return;
        };

        if let Some(status) = patch.status {
            player.status = status;
        }
        if let Some(role) = patch.suspected_role {
            player.suspected_role = role;
        }
        if let Some(role) = patch.claimed_role {
            player.claimed_role = role;
        }
        if let Some(tags) = patch.tags {
            player.tags = dedup_tags(tags);
        }
        if let Some(notes) = patch.notes {
            player.notes = notes;
        }
        if let Some(running) = patch.is_running_for_sheriff {
            player.is_running_for_sheriff = running;
            if running {
                player.has_withdrawn = false;
            }
        }
        if let Some(withdrawn) = patch.has_withdrawn {
            player.has_withdrawn = withdrawn;
            if withdrawn {
                player.is_running_for_sheriff = false;
            }
        }
    }

    /// Hand the badge to the identified player, clearing it everywhere
    /// else in the same operation. Returns false if the id is unknown.
    pub fn elect_sheriff(&mut self, id: u32) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        for player in &mut self.players {
            player.is_sheriff = player.id == id;
        }
        true
    }

    /// Add a tag if the player does not already carry it.
    pub fn add_tag(&mut self, id: u32, tag: PlayerTag) {
        let Some(player) = self.get_mut(id) else {
            return;
        };
        if !player.tags.contains(&tag) {
            player.tags.push(tag);
        }
    }

    pub fn toggle_tag(&mut self, id: u32, tag: PlayerTag) {
        let Some(player) = self.get_mut(id) else {
            return;
        };
        if let Some(pos) = player.tags.iter().position(|t| *t == tag) {
            player.tags.remove(pos);
        } else {
            player.tags.push(tag);
        }
    }

    /// Set one badge-flow slot from free text. Zero or unparseable input
    /// clears the slot; trailing empty slots are trimmed away. Values are
    /// declarations only and are not checked against live seat ids.
    pub fn set_badge_flow(&mut self, id: u32, index: usize, raw: &str) {
        if index > 1 {
            return;
        }
        let Some(player) = self.get_mut(id) else {
            return;
        };

        let value = raw.trim().parse::<u32>().ok().filter(|v| *v != 0);
        if player.badge_flow.len() <= index {
            if value.is_none() {
                return;
            }
            player.badge_flow.resize(index + 1, None);
        }
        player.badge_flow[index] = value;

        while player.badge_flow.last() == Some(&None) {
            player.badge_flow.pop();
        }
    }
}

fn dedup_tags(tags: Vec<PlayerTag>) -> Vec<PlayerTag> {
    let mut out = Vec::with_capacity(tags.len());
    for tag in tags {
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}
