use std::sync::mpsc::{self, Receiver, TryRecvError};

use crate::engine::game::Game;
use crate::engine::llm_client::request_advice;
use crate::engine::prompt::AdvicePrompt;
use crate::model::chat::ChatTurn;
use crate::model::config::AiConfig;
use crate::model::roles::Role;

/// Conversation state for the advice panel: the turn history plus at most
/// one request in flight. Replies come back over a channel and are folded
/// into the history by `poll`.
pub struct Advisor {
    history: Vec<ChatTurn>,
    pending: Option<Receiver<String>>,
}

impl Advisor {
    pub fn new(my_role: Role) -> Self {
        let greeting = format!(
            "我是你的狼人杀助手。你现在的身份是【{my_role}】。有什么我可以帮你的吗？"
        );
        Self {
            history: vec![ChatTurn::model(greeting)],
            pending: None,
        }
    }

    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a request for the given query. Returns false without touching
    /// the history when the query is blank or a request is already running.
    pub fn send(&mut self, config: &AiConfig, game: &Game, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() || self.pending.is_some() {
            return false;
        }

        // The prompt sees the conversation as it was before this question.
        let prompt = AdvicePrompt::build(
            game.my_role(),
            game.players(),
            game.log().events(),
            &self.history,
            query,
        );
        self.history.push(ChatTurn::user(query));

        if !config.has_api_key() {
            self.history.push(ChatTurn::model("API Key 未配置。"));
            return true;
        }

        let (tx, rx) = mpsc::channel();
        let config = config.clone();
        let query = query.to_string();
        std::thread::spawn(move || {
            let reply = match request_advice(&config, &prompt, &query) {
                Ok(text) if text.trim().is_empty() => "无法生成建议。".to_string(),
                Ok(text) => text,
                Err(err) => format!("请求失败：{err}"),
            };
            let _ = tx.send(reply);
        });
        self.pending = Some(rx);
        true
    }

    /// Fold a finished reply into the history. Returns true when a model
    /// turn was added.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };
        match rx.try_recv() {
            Ok(reply) => {
                self.history.push(ChatTurn::model(reply));
                self.pending = None;
                true
            }
            Err(TryRecvError::Disconnected) => {
                self.history.push(ChatTurn::model("AI 服务暂时不可用。"));
                self.pending = None;
                true
            }
            Err(TryRecvError::Empty) => false,
        }
    }
}
