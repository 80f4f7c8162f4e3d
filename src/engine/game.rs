use crate::engine::log::EventLog;
use crate::engine::roster::{PlayerPatch, Roster};
use crate::model::event::{EventDraft, EventKind, GameEvent};
use crate::model::export::ExportDoc;
use crate::model::meta::{GameMeta, MetaRecord};
use crate::model::player::Player;
use crate::model::roles::{PlayerStatus, PlayerTag, Role, RoleCounts};

/// One active game: the roster, its timeline, and the per-game meta.
/// Mutations that the timeline audits append their event here, in the same
/// call, so the log never drifts from the board.
#[derive(Debug, Clone)]
pub struct Game {
    roster: Roster,
    log: EventLog,
    meta: GameMeta,
    my_id: u32,
    my_role: Role,
}

impl Game {
    pub fn new(
        role_counts: RoleCounts,
        observer_id: u32,
        observer_role: Role,
        enable_sheriff: bool,
    ) -> Self {
        let roster = Roster::init(&role_counts, observer_id, observer_role);
        let my_id = roster.observer_id().unwrap_or(observer_id);
        let meta = GameMeta {
            enable_sheriff,
            role_counts,
            ..GameMeta::default()
        };
        Self {
            roster,
            log: EventLog::default(),
            meta,
            my_id,
            my_role: observer_role,
        }
    }

    /// Rebuild a game from its persisted parts.
    pub fn resume(players: Vec<Player>, record: MetaRecord, events: Vec<GameEvent>) -> Self {
        Self {
            roster: Roster::from_players(players),
            log: EventLog::from_events(events),
            meta: record.game_state,
            my_id: record.my_id,
            my_role: record.my_role,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn players(&self) -> &[Player] {
        self.roster.players()
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn meta(&self) -> &GameMeta {
        &self.meta
    }

    pub fn my_id(&self) -> u32 {
        self.my_id
    }

    pub fn my_role(&self) -> Role {
        self.my_role
    }

    pub fn meta_record(&self) -> MetaRecord {
        MetaRecord {
            my_id: self.my_id,
            my_role: self.my_role,
            game_state: self.meta.clone(),
        }
    }

    /* ===== Player mutations ===== */

    /// Change a player's status. Leaving Alive is recorded on the timeline.
    pub fn set_status(&mut self, id: u32, status: PlayerStatus) {
        if self.roster.get(id).is_none() {
            return;
        }
        self.roster.update(
            id,
            PlayerPatch {
                status: Some(status),
                ..Default::default()
            },
        );
        if status != PlayerStatus::Alive {
            self.log.append(EventDraft {
                day: self.meta.current_day,
                source_id: id,
                kind: EventKind::Death,
                description: format!("{id}号玩家状态更新为：{status}"),
                ..Default::default()
            });
        }
    }

    /// Record a public role claim. Claiming a real role is recorded on the
    /// timeline; resetting to Unknown is not.
    pub fn claim_role(&mut self, id: u32, role: Role) {
        if self.roster.get(id).is_none() {
            return;
        }
        self.roster.update(
            id,
            PlayerPatch {
                claimed_role: Some(role),
                ..Default::default()
            },
        );
        if role != Role::Unknown {
            self.log.append(EventDraft {
                day: self.meta.current_day,
                source_id: id,
                kind: EventKind::Claim,
                description: format!("{id}号玩家起跳身份：{role}"),
                ..Default::default()
            });
        }
    }

    /// The observer's private read on a player. Not logged.
    pub fn suspect_role(&mut self, id: u32, role: Role) {
        self.roster.update(
            id,
            PlayerPatch {
                suspected_role: Some(role),
                ..Default::default()
            },
        );
    }

    pub fn set_notes(&mut self, id: u32, notes: impl Into<String>) {
        self.roster.update(
            id,
            PlayerPatch {
                notes: Some(notes.into()),
                ..Default::default()
            },
        );
    }

    pub fn toggle_tag(&mut self, id: u32, tag: PlayerTag) {
        self.roster.toggle_tag(id, tag);
    }

    pub fn set_running_for_sheriff(&mut self, id: u32, running: bool) {
        self.roster.update(
            id,
            PlayerPatch {
                is_running_for_sheriff: Some(running),
                ..Default::default()
            },
        );
    }

    pub fn set_withdrawn(&mut self, id: u32, withdrawn: bool) {
        self.roster.update(
            id,
            PlayerPatch {
                has_withdrawn: Some(withdrawn),
                ..Default::default()
            },
        );
    }

    pub fn set_badge_flow(&mut self, id: u32, index: usize, raw: &str) {
        self.roster.set_badge_flow(id, index, raw);
    }

    /* ===== Coupled actions ===== */

    /// A seer result on another player: tags the target and records the
    /// check. Self-checks are ignored.
    pub fn seer_check(&mut self, seer_id: u32, target_id: u32, good: bool) {
        if seer_id == target_id {
            return;
        }
        if self.roster.get(seer_id).is_none() || self.roster.get(target_id).is_none() {
            return;
        }

        let (kind, tag, description) = if good {
            (
                EventKind::CheckGood,
                PlayerTag::VerifiedGood,
                format!("{seer_id}号 (预言家) 给 {target_id}号 发金水"),
            )
        } else {
            (
                EventKind::CheckBad,
                PlayerTag::VerifiedBad,
                format!("{seer_id}号 (预言家) 给 {target_id}号 发查杀"),
            )
        };

        self.roster.add_tag(target_id, tag);
        self.log.append(EventDraft {
            day: self.meta.current_day,
            source_id: seer_id,
            target_id: Some(target_id),
            kind,
            description,
            ..Default::default()
        });
    }

    /// The witch's save: tags the target and records it as a good check
    /// carrying the witch-action marker.
    pub fn witch_save(&mut self, witch_id: u32, target_id: u32) {
        if witch_id == target_id {
            return;
        }
        if self.roster.get(witch_id).is_none() || self.roster.get(target_id).is_none() {
            return;
        }

        self.roster.add_tag(target_id, PlayerTag::SavedByWitch);
        self.log.append(EventDraft {
            day: self.meta.current_day,
            source_id: witch_id,
            target_id: Some(target_id),
            kind: EventKind::CheckGood,
            description: format!("{witch_id}号 (女巫) 给了 {target_id}号 银水 (救人)"),
            is_witch_action: true,
            ..Default::default()
        });
    }

    /// The witch's poison: kills the target and records a single death
    /// entry carrying the witch-action marker.
    pub fn witch_poison(&mut self, witch_id: u32, target_id: u32) {
        if witch_id == target_id {
            return;
        }
        if self.roster.get(witch_id).is_none() || self.roster.get(target_id).is_none() {
            return;
        }

        self.roster.update(
            target_id,
            PlayerPatch {
                status: Some(PlayerStatus::Dead),
                ..Default::default()
            },
        );
        self.log.append(EventDraft {
            day: self.meta.current_day,
            source_id: witch_id,
            target_id: Some(target_id),
            kind: EventKind::Death,
            description: format!("{witch_id}号 (女巫) 毒死了 {target_id}号"),
            is_witch_action: true,
            ..Default::default()
        });
    }

    /// Hand the badge to a player. The cascade clears every other holder
    /// and the election lands on the timeline.
    pub fn elect_sheriff(&mut self, id: u32) {
        if !self.roster.elect_sheriff(id) {
            return;
        }
        self.log.append(EventDraft {
            day: self.meta.current_day,
            source_id: id,
            kind: EventKind::Note,
            description: format!("{id}号当选警长"),
            is_sheriff_action: true,
            ..Default::default()
        });
    }

    /// Record a vote tally against a player. System-attributed; the voters
    /// are kept both in the description and as structured ids.
    pub fn record_vote(&mut self, voter_ids: &[u32], target_id: u32) {
        if self.roster.get(target_id).is_none() {
            return;
        }

        let description = if voter_ids.is_empty() {
            format!("无人投票给 {target_id}号")
        } else {
            let voters = voter_ids
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(",");
            format!("{voters}号 投票给 {target_id}号")
        };

        self.log.append(EventDraft {
            day: self.meta.current_day,
            source_id: 0,
            target_id: Some(target_id),
            kind: EventKind::Vote,
            description,
            voter_ids: voter_ids.to_vec(),
            ..Default::default()
        });
    }

    /// Advance to the next day and mark it on the timeline. The marker is
    /// stamped with the new day.
    pub fn next_day(&mut self) {
        self.meta.current_day += 1;
        let day = self.meta.current_day;
        self.log.append(EventDraft {
            day,
            source_id: 0,
            kind: EventKind::Note,
            description: format!("--- 进入第 {day} 天 ---"),
            ..Default::default()
        });
    }

    /// Free-form note on the current day.
    pub fn add_note(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        self.log.append(EventDraft {
            day: self.meta.current_day,
            source_id: 0,
            kind: EventKind::Note,
            description: text.into(),
            ..Default::default()
        });
    }

    pub fn delete_event(&mut self, id: &str) {
        self.log.delete(id);
    }

    /* ===== Bookkeeping toggles ===== */

    pub fn set_witch_antidote_used(&mut self, used: bool) {
        self.meta.witch_antidote_used = used;
    }

    pub fn set_witch_poison_used(&mut self, used: bool) {
        self.meta.witch_poison_used = used;
    }

    pub fn set_hunter_gun_status(&mut self, available: bool) {
        self.meta.hunter_gun_status = available;
    }

    pub fn set_guard_target(&mut self, target_id: Option<u32>) {
        self.meta.guard_last_protected_id = target_id;
    }

    pub fn export(&self) -> ExportDoc {
        ExportDoc::new(
            self.my_role,
            self.my_id,
            self.meta.clone(),
            self.roster.players().to_vec(),
            self.log.events().to_vec(),
        )
    }
}
