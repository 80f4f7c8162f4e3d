use crate::model::player::Player;
use crate::model::roles::{Role, RoleCounts};

/// Claim pressure on one role or faction: how many players claim it versus
/// how many slots the configuration allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleStats {
    pub claimed: u32,
    pub total: u32,
    pub remaining: u32,
}

impl RoleStats {
    pub fn over_quota(&self) -> bool {
        self.claimed > self.total
    }
}

/// Stats for a single role. Pure and recomputed on every call; nothing is
/// cached between mutations.
pub fn role_stats(players: &[Player], counts: &RoleCounts, role: Role) -> RoleStats {
    let claimed = players.iter().filter(|p| p.claimed_role == role).count() as u32;
    let total = counts.get(&role).copied().unwrap_or(0);
    RoleStats {
        claimed,
        total,
        remaining: total.saturating_sub(claimed),
    }
}

fn faction_stats(players: &[Player], counts: &RoleCounts, roles: &[Role]) -> RoleStats {
    let mut claimed = 0;
    let mut total = 0;
    for role in roles {
        let stats = role_stats(players, counts, *role);
        claimed += stats.claimed;
        total += stats.total;
    }
    RoleStats {
        claimed,
        total,
        remaining: total.saturating_sub(claimed),
    }
}

pub fn wolf_stats(players: &[Player], counts: &RoleCounts) -> RoleStats {
    faction_stats(players, counts, &Role::WOLF_ROLES)
}

pub fn god_stats(players: &[Player], counts: &RoleCounts) -> RoleStats {
    faction_stats(players, counts, &Role::GOD_ROLES)
}

pub fn villager_stats(players: &[Player], counts: &RoleCounts) -> RoleStats {
    role_stats(players, counts, Role::Villager)
}

/// A player is in conflict when its claimed role is over quota. Every
/// claimant of that role is flagged, not just the latest one.
pub fn in_conflict(players: &[Player], counts: &RoleCounts, player: &Player) -> bool {
    if player.claimed_role == Role::Unknown {
        return false;
    }
    role_stats(players, counts, player.claimed_role).over_quota()
}

/// The claim/suspect pick list: Unknown plus every role with a configured
/// slot on this board.
pub fn available_roles(counts: &RoleCounts) -> Vec<Role> {
    Role::ALL
        .into_iter()
        .filter(|role| {
            *role == Role::Unknown || counts.get(role).copied().unwrap_or(0) > 0
        })
        .collect()
}
