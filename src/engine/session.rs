use crate::engine::game::Game;
use crate::model::config::{AiConfig, AiProvider, SetupConfig};
use crate::model::event::GameEvent;
use crate::model::export::ExportDoc;
use crate::model::meta::MetaRecord;
use crate::model::player::Player;
use crate::model::roles::{default_role_counts, PlayerStatus, PlayerTag, Role};
use crate::storage::{
    Store, KEY_AI_CONFIG, KEY_LOGS, KEY_META, KEY_PLAYERS, KEY_SETUP_CONFIG,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Configuring,
    Active,
}

/// The session lifecycle: board configuration, the running game, and the
/// store they are mirrored into. Every accepted game mutation is written
/// back to the store in the same call.
pub struct Session {
    store: Store,
    setup: SetupConfig,
    ai: AiConfig,
    game: Option<Game>,
    end_requested: bool,
}

impl Session {
    /// Open the default store and resume whatever it holds.
    pub fn open() -> Self {
        Self::load(Store::open())
    }

    /// Resume from a store. A parseable players + meta pair short-circuits
    /// straight into an active game; anything absent or malformed falls
    /// back to configuration, silently.
    pub fn load(store: Store) -> Self {
        let mut setup: SetupConfig = store.load(KEY_SETUP_CONFIG);
        let ai: AiConfig = store.load(KEY_AI_CONFIG);

        let players = store.try_load::<Vec<Player>>(KEY_PLAYERS);
        let record = store.try_load::<MetaRecord>(KEY_META);
        let game = match (players, record) {
            (Some(players), Some(record)) => {
                let events: Vec<GameEvent> = store.load(KEY_LOGS);
                // Keep the board template in step with the resumed game so
                // a restart reproduces the same shape.
                setup.role_counts = record.game_state.role_counts.clone();
                setup.my_id = record.my_id;
                setup.my_role = record.my_role;
                Some(Game::resume(players, record, events))
            }
            _ => None,
        };

        let session = Self {
            store,
            setup,
            ai,
            game,
            end_requested: false,
        };
        session.save_setup();
        session.save_ai();
        session
    }

    pub fn state(&self) -> SessionState {
        if self.game.is_some() {
            SessionState::Active
        } else {
            SessionState::Configuring
        }
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn setup(&self) -> &SetupConfig {
        &self.setup
    }

    pub fn ai(&self) -> &AiConfig {
        &self.ai
    }

    /* ===== Configuration ===== */

    pub fn adjust_role_count(&mut self, role: Role, delta: i32) {
        let current = self.setup.role_counts.get(&role).copied().unwrap_or(0) as i64;
        let next = (current + delta as i64).max(0) as u32;
        self.setup.role_counts.insert(role, next);
        self.save_setup();
    }

    pub fn apply_default_roles(&mut self) {
        self.setup.role_counts = default_role_counts();
        self.save_setup();
    }

    pub fn set_my_id(&mut self, id: u32) {
        self.setup.my_id = id;
        self.save_setup();
    }

    pub fn set_my_role(&mut self, role: Role) {
        self.setup.my_role = role;
        self.save_setup();
    }

    pub fn set_enable_sheriff(&mut self, enabled: bool) {
        self.setup.enable_sheriff = enabled;
        self.save_setup();
    }

    pub fn total_players(&self) -> u32 {
        self.setup.total_players()
    }

    /// A board needs at least 6 seats before a game can start.
    pub fn can_start(&self) -> bool {
        self.total_players() >= 6
    }

    /// Snapshot the configuration into a fresh game. No-op below the
    /// minimum board size or while a game is already running.
    pub fn start_game(&mut self) {
        if self.game.is_some() || !self.can_start() {
            return;
        }
        self.game = Some(Game::new(
            self.setup.role_counts.clone(),
            self.setup.my_id,
            self.setup.my_role,
            self.setup.enable_sheriff,
        ));
        self.persist_game();
    }

    /* ===== Termination (two-step) ===== */

    pub fn request_end(&mut self) {
        if self.game.is_some() {
            self.end_requested = true;
        }
    }

    pub fn end_requested(&self) -> bool {
        self.end_requested
    }

    pub fn cancel_end(&mut self) {
        self.end_requested = false;
    }

    /// Drop the game and wipe its store keys. Board and AI preferences are
    /// kept so the next game starts from the same shape. Requires a prior
    /// `request_end`.
    pub fn confirm_end(&mut self) {
        if !self.end_requested {
            return;
        }
        self.store.clear(KEY_PLAYERS);
        self.store.clear(KEY_META);
        self.store.clear(KEY_LOGS);
        self.game = None;
        self.end_requested = false;
    }

    /* ===== Game commands ===== */

    pub fn set_status(&mut self, id: u32, status: PlayerStatus) {
        if let Some(game) = self.game.as_mut() {
            game.set_status(id, status);
            self.persist_game();
        }
    }

    pub fn claim_role(&mut self, id: u32, role: Role) {
        if let Some(game) = self.game.as_mut() {
            game.claim_role(id, role);
            self.persist_game();
        }
    }

    pub fn suspect_role(&mut self, id: u32, role: Role) {
        if let Some(game) = self.game.as_mut() {
            game.suspect_role(id, role);
            self.persist_game();
        }
    }

    pub fn set_notes(&mut self, id: u32, notes: impl Into<String>) {
        if let Some(game) = self.game.as_mut() {
            game.set_notes(id, notes);
            self.persist_game();
        }
    }

    pub fn toggle_tag(&mut self, id: u32, tag: PlayerTag) {
        if let Some(game) = self.game.as_mut() {
            game.toggle_tag(id, tag);
            self.persist_game();
        }
    }

    pub fn set_running_for_sheriff(&mut self, id: u32, running: bool) {
        if let Some(game) = self.game.as_mut() {
            game.set_running_for_sheriff(id, running);
            self.persist_game();
        }
    }

    pub fn set_withdrawn(&mut self, id: u32, withdrawn: bool) {
        if let Some(game) = self.game.as_mut() {
            game.set_withdrawn(id, withdrawn);
            self.persist_game();
        }
    }

    pub fn set_badge_flow(&mut self, id: u32, index: usize, raw: &str) {
        if let Some(game) = self.game.as_mut() {
            game.set_badge_flow(id, index, raw);
            self.persist_game();
        }
    }

    pub fn seer_check(&mut self, seer_id: u32, target_id: u32, good: bool) {
        if let Some(game) = self.game.as_mut() {
            game.seer_check(seer_id, target_id, good);
            self.persist_game();
        }
    }

    pub fn witch_save(&mut self, witch_id: u32, target_id: u32) {
        if let Some(game) = self.game.as_mut() {
            game.witch_save(witch_id, target_id);
            self.persist_game();
        }
    }

    pub fn witch_poison(&mut self, witch_id: u32, target_id: u32) {
        if let Some(game) = self.game.as_mut() {
            game.witch_poison(witch_id, target_id);
            self.persist_game();
        }
    }

    pub fn elect_sheriff(&mut self, id: u32) {
        if let Some(game) = self.game.as_mut() {
            game.elect_sheriff(id);
            self.persist_game();
        }
    }

    pub fn record_vote(&mut self, voter_ids: &[u32], target_id: u32) {
        if let Some(game) = self.game.as_mut() {
            game.record_vote(voter_ids, target_id);
            self.persist_game();
        }
    }

    pub fn next_day(&mut self) {
        if let Some(game) = self.game.as_mut() {
            game.next_day();
            self.persist_game();
        }
    }

    pub fn add_note(&mut self, text: &str) {
        if let Some(game) = self.game.as_mut() {
            game.add_note(text);
            self.persist_game();
        }
    }

    pub fn delete_event(&mut self, id: &str) {
        if let Some(game) = self.game.as_mut() {
            game.delete_event(id);
            self.persist_game();
        }
    }

    pub fn set_witch_antidote_used(&mut self, used: bool) {
        if let Some(game) = self.game.as_mut() {
            game.set_witch_antidote_used(used);
            self.persist_game();
        }
    }

    pub fn set_witch_poison_used(&mut self, used: bool) {
        if let Some(game) = self.game.as_mut() {
            game.set_witch_poison_used(used);
            self.persist_game();
        }
    }

    pub fn set_hunter_gun_status(&mut self, available: bool) {
        if let Some(game) = self.game.as_mut() {
            game.set_hunter_gun_status(available);
            self.persist_game();
        }
    }

    pub fn set_guard_target(&mut self, target_id: Option<u32>) {
        if let Some(game) = self.game.as_mut() {
            game.set_guard_target(target_id);
            self.persist_game();
        }
    }

    /* ===== AI configuration ===== */

    pub fn set_ai_config(&mut self, config: AiConfig) {
        self.ai = config;
        self.save_ai();
    }

    pub fn set_ai_provider(&mut self, provider: AiProvider) {
        self.ai.apply_provider(provider);
        self.save_ai();
    }

    /* ===== Export ===== */

    pub fn export(&self) -> Option<ExportDoc> {
        self.game.as_ref().map(|game| game.export())
    }

    /* ===== Persistence ===== */

    fn persist_game(&self) {
        let Some(game) = &self.game else {
            return;
        };
        self.store.save(KEY_PLAYERS, game.players());
        self.store.save(KEY_LOGS, game.log().events());
        self.store.save(KEY_META, &game.meta_record());
    }

    fn save_setup(&self) {
        self.store.save(KEY_SETUP_CONFIG, &self.setup);
    }

    fn save_ai(&self) {
        self.store.save(KEY_AI_CONFIG, &self.ai);
    }
}
