use crate::model::chat::ChatTurn;
use crate::model::event::GameEvent;
use crate::model::player::Player;
use crate::model::roles::Role;
use chrono::Local;

/// How many past chat turns the model gets to see.
const HISTORY_WINDOW: usize = 6;

/// Builds the strategy prompt sent to the model.
/// This struct is intentionally dumb: it only formats text.
/// No parsing, no networking, no game logic.
pub struct AdvicePrompt;

impl AdvicePrompt {
    pub fn build(
        my_role: Role,
        players: &[Player],
        events: &[GameEvent],
        history: &[ChatTurn],
        query: &str,
    ) -> String {
        let mut prompt = String::new();

        push_preamble(&mut prompt, my_role);
        push_player_snapshot(&mut prompt, players);
        push_event_timeline(&mut prompt, events);
        push_task_list(&mut prompt);
        push_query_section(&mut prompt, history, query);

        prompt
    }
}

fn push_preamble(prompt: &mut String, my_role: Role) {
    prompt.push_str("你是一个专业的狼人杀 (Werewolf) 高级策略助手。\n");
    prompt.push_str("你需要根据场上的【实时局势】和【历史时间轴】来分析逻辑。\n\n");
    prompt.push_str(&format!("我的身份: {}\n\n", my_role));
}

fn push_player_snapshot(prompt: &mut String, players: &[Player]) {
    prompt.push_str("【玩家状态快照】:\n");
    for player in players {
        push_player_line(prompt, player);
    }
    prompt.push('\n');
}

fn push_player_line(prompt: &mut String, player: &Player) {
    let claimed = if player.claimed_role != Role::Unknown {
        format!("[起跳: {}]", player.claimed_role)
    } else {
        String::new()
    };
    let me_tag = if player.is_me { "(我)" } else { "" };
    let tags = if player.tags.is_empty() {
        String::new()
    } else {
        let labels: Vec<&str> = player.tags.iter().map(|t| t.display_name()).collect();
        format!("[标记: {}]", labels.join(", "))
    };
    let notes = if player.notes.is_empty() {
        String::new()
    } else {
        format!("\n   - 备注: {}", player.notes)
    };

    prompt.push_str(&format!(
        "{}号: {} [我猜是: {}] {} {} {}{}\n",
        player.id, player.status, player.suspected_role, claimed, me_tag, tags, notes
    ));
}

fn push_event_timeline(prompt: &mut String, events: &[GameEvent]) {
    prompt.push_str("【关键动作时间轴 (Evidence)】:\n");
    if events.is_empty() {
        prompt.push_str("(暂无记录)\n");
    } else {
        for event in events {
            let time = event.timestamp.with_timezone(&Local).format("%H:%M:%S");
            prompt.push_str(&format!(
                "Day {} [{}]: {}\n",
                event.day, time, event.description
            ));
        }
    }
    prompt.push('\n');
}

fn push_task_list(prompt: &mut String) {
    prompt.push_str("【你的任务】:\n");
    prompt.push_str("1. 寻找逻辑矛盾（例如：有人前一天发金水，今天又说他是狼）。\n");
    prompt.push_str("2. 如果我是好人，帮我盘出谁是狼，基于动作和票型（如果有）。\n");
    prompt.push_str("3. 如果我是狼人，根据现在的起跳情况，建议我去刀谁，或者去抗推谁。\n");
    prompt.push_str("4. 重点关注 \"起跳\" (Claim) 和 \"动作\" (Check Good/Bad) 的一致性。\n\n");
}

fn push_query_section(prompt: &mut String, history: &[ChatTurn], query: &str) {
    let start = history.len().saturating_sub(HISTORY_WINDOW);
    let lines: Vec<String> = history[start..]
        .iter()
        .map(|turn| format!("{}: {}", turn.role, turn.text))
        .collect();

    prompt.push_str(&format!("用户问题: {}\n", query));
    prompt.push_str(&format!("历史对话: {}\n\n", lines.join("\n")));
    prompt.push_str("请用中文简练回答。不要废话。\n");
}
