use chrono::Utc;
use rand::Rng;

use crate::model::event::{EventDraft, EventKind, GameEvent};

/// Append-only timeline for one game. Entries are deletable by id but
/// never edited in place.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn from_events(events: Vec<GameEvent>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Stamp the draft with a fresh id and the current instant and push it
    /// to the end. Insertion order is display order.
    pub fn append(&mut self, draft: EventDraft) -> GameEvent {
        let mut id = random_event_id();
        while self.events.iter().any(|e| e.id == id) {
            id = random_event_id();
        }

        let event = GameEvent {
            id,
            day: draft.day,
            source_id: draft.source_id,
            target_id: draft.target_id,
            kind: draft.kind,
            description: draft.description,
            timestamp: Utc::now(),
            is_witch_action: draft.is_witch_action,
            is_sheriff_action: draft.is_sheriff_action,
            voter_ids: draft.voter_ids,
        };
        self.events.push(event.clone());
        event
    }

    /// Remove the matching entry; no-op if absent. Other entries are left
    /// untouched.
    pub fn delete(&mut self, id: &str) {
        self.events.retain(|e| e.id != id);
    }

    /// Distinct days that have at least one event, ascending.
    pub fn days(&self) -> Vec<u32> {
        let mut days: Vec<u32> = self.events.iter().map(|e| e.day).collect();
        days.sort_unstable();
        days.dedup();
        days
    }

    /// Events attributed to the given day, in insertion order. Grouping
    /// uses the day stamped on each event, never the live current day.
    pub fn events_for_day(&self, day: u32) -> Vec<&GameEvent> {
        self.events.iter().filter(|e| e.day == day).collect()
    }

    /// The interaction history shown on a player's card: claim and check
    /// entries touching the player, plus any witch action on them.
    pub fn related_to(&self, player_id: u32) -> Vec<&GameEvent> {
        self.events
            .iter()
            .filter(|e| e.source_id == player_id || e.target_id == Some(player_id))
            .filter(|e| {
                matches!(
                    e.kind,
                    EventKind::Claim | EventKind::CheckGood | EventKind::CheckBad
                ) || e.is_witch_action
            })
            .collect()
    }
}

fn random_event_id() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    (0..7)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(day: u32, source_id: u32, text: &str) -> EventDraft {
        EventDraft {
            day,
            source_id,
            description: text.into(),
            ..Default::default()
        }
    }

    #[test]
    fn append_assigns_fresh_ids() {
        let mut log = EventLog::default();
        let a = log.append(note(1, 1, "第一条")).id;
        let b = log.append(note(1, 2, "第二条")).id;

        assert_eq!(a.len(), 7);
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn delete_leaves_other_entries_untouched() {
        let mut log = EventLog::default();
        log.append(note(1, 1, "a"));
        let doomed = log.append(note(1, 2, "b")).id;
        log.append(note(2, 3, "c"));

        let before: Vec<GameEvent> = log
            .events()
            .iter()
            .filter(|e| e.id != doomed)
            .cloned()
            .collect();

        log.delete(&doomed);
        assert_eq!(log.events(), &before[..]);

        // Deleting again is a no-op.
        log.delete(&doomed);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn day_grouping_uses_the_stored_day() {
        let mut log = EventLog::default();
        log.append(note(1, 1, "day1 first"));
        log.append(note(2, 2, "day2"));
        log.append(note(1, 3, "day1 second"));

        assert_eq!(log.days(), vec![1, 2]);

        let day1: Vec<&str> = log
            .events_for_day(1)
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(day1, vec!["day1 first", "day1 second"]);
    }

    #[test]
    fn related_events_match_on_structured_fields() {
        let mut log = EventLog::default();
        log.append(EventDraft {
            day: 1,
            source_id: 2,
            target_id: Some(4),
            kind: EventKind::CheckGood,
            description: "2号 (预言家) 给 4号 发金水".into(),
            ..Default::default()
        });
        log.append(EventDraft {
            day: 1,
            source_id: 3,
            target_id: Some(4),
            kind: EventKind::Death,
            description: "3号 (女巫) 毒死了 4号".into(),
            is_witch_action: true,
            ..Default::default()
        });
        // A plain death entry about the same player is not an interaction.
        log.append(EventDraft {
            day: 1,
            source_id: 4,
            kind: EventKind::Death,
            description: "4号玩家状态更新为：死亡".into(),
            ..Default::default()
        });
        // A note from another player never shows up.
        log.append(note(1, 5, "随手记录"));

        let related = log.related_to(4);
        assert_eq!(related.len(), 2);
        assert_eq!(related[0].kind, EventKind::CheckGood);
        assert!(related[1].is_witch_action);
    }
}
