use serde::{Deserialize, Serialize};

use crate::model::roles::{default_role_counts, Role, RoleCounts};

/// Board preferences. Survives game termination so the next session starts
/// from the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupConfig {
    #[serde(default = "default_role_counts")]
    pub role_counts: RoleCounts,
    #[serde(default = "first_seat")]
    pub my_id: u32,
    #[serde(default = "default_my_role")]
    pub my_role: Role,
    #[serde(default)]
    pub enable_sheriff: bool,
}

fn first_seat() -> u32 {
    1
}

fn default_my_role() -> Role {
    Role::Villager
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            role_counts: default_role_counts(),
            my_id: 1,
            my_role: Role::Villager,
            enable_sheriff: false,
        }
    }
}

impl SetupConfig {
    pub fn total_players(&self) -> u32 {
        self.role_counts.values().sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    Deepseek,
    Kimi,
    Openai,
    Custom,
}

impl AiProvider {
    /// Preset endpoint and model, if this provider has one.
    pub fn preset(self) -> Option<(&'static str, &'static str)> {
        match self {
            AiProvider::Deepseek => Some(("https://api.deepseek.com", "deepseek-chat")),
            AiProvider::Kimi => Some(("https://api.moonshot.cn/v1", "moonshot-v1-8k")),
            AiProvider::Openai => Some(("https://api.openai.com/v1", "gpt-4o-mini")),
            AiProvider::Custom => None,
        }
    }
}

impl Default for AiProvider {
    fn default() -> Self {
        AiProvider::Deepseek
    }
}

/// Credentials and endpoint for the advice service. Persisted on every
/// change, in any session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiConfig {
    #[serde(default)]
    pub provider: AiProvider,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub model: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        let (base_url, model) = AiProvider::Deepseek.preset().unwrap_or_default();
        Self {
            provider: AiProvider::Deepseek,
            api_key: String::new(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }
}

impl AiConfig {
    /// Switch provider. Presets overwrite the endpoint and model; Custom
    /// keeps whatever is currently set.
    pub fn apply_provider(&mut self, provider: AiProvider) {
        self.provider = provider;
        if let Some((base_url, model)) = provider.preset() {
            self.base_url = base_url.into();
            self.model = model.into();
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
