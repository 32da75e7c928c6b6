//! Reusable prompts using Handlebars for templating. Everything that
//! gets interpolated (user messages, earlier replies, backend errors)
//! is untrusted, so the registry runs in strict mode and only knows
//! the variables each template declares.
//!
//! Escaping is turned off. The rendered text goes to a language model
//! or a terminal, not a browser, and must match its inputs byte for
//! byte.

use std::fmt;

use handlebars::Handlebars;

#[derive(Debug)]
pub enum Prompt {
    Context,
    Apology,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl From<Prompt> for String {
    fn from(item: Prompt) -> String {
        format!("{:?}", item)
    }
}

/// The default instruction block prepended to every request.
pub const INSTRUCTIONS: &str = r"你是一個專門介紹 JacobLinCool/rhythm-rs 專案的助手。以下是關於這個專案的詳細資訊：

**專案基本資訊：**
- 專案名稱：rhythm-rs
- 作者：JacobLinCool
- 專案描述：這是一個用 Rust 程式語言開發的節奏遊戲引擎
- GitHub 連結：https://github.com/JacobLinCool/rhythm-rs
- 專案性質：開源項目

**專案特色：**
1. **太鼓達人風格遊戲引擎**：這個專案是專門為創建太鼓達人(Taiko no Tatsujin)風格的節奏遊戲而設計的引擎
2. **Rust 開發**：使用 Rust 程式語言開發，具有高性能和記憶體安全的特性
3. **遊戲功能**：
   - 支援太鼓音符系統（紅色 don 音符、藍色 kat 音符）
   - 支援鼓點滾奏(drumroll)功能
   - 支援氣球音符(balloon notes)系統
   - 具有音符軌道偏移調整功能

**太鼓達人遊戲說明：**
太鼓達人是一個非常受歡迎的日本節奏遊戲系列，玩家需要：
- 跟隨音樂節拍敲打虛擬太鼓
- 紅色音符(don)：敲打鼓面中心
- 藍色音符(kat)：敲打鼓面邊緣
- 黃色長音符：持續敲打獲得分數
- 氣球音符：需要在指定時間內敲打指定次數

**開發狀態：**
- 這是一個持續開發中的開源專案
- 有定期更新和版本發布
- 支援社群貢獻和問題回報

請用友善、專業的中文回答用戶關於這個專案的任何問題。如果用戶問到你不確定的技術細節，請誠實地告知並建議他們查看 GitHub 頁面獲取最新資訊。";

pub const TITLE: &str = "🥁 JacobLinCool/rhythm-rs 專案介紹助手";

pub const DESCRIPTION: &str = "歡迎！我是專門介紹 JacobLinCool/rhythm-rs 專案的助手。這是一個用 Rust 開發的太鼓達人風格節奏遊戲引擎。請隨時詢問我關於這個專案的任何問題！";

pub const EXAMPLES: [&str; 6] = [
    "這個專案是做什麼的？",
    "rhythm-rs 使用什麼程式語言開發？",
    "這個遊戲引擎支援哪些太鼓達人的功能？",
    "如何參與這個開源專案的開發？",
    "告訴我太鼓達人遊戲的玩法規則",
    "這個專案的 GitHub 連結是什麼？",
];

// Block helpers share a line with text on purpose. A block tag alone
// on its line is treated as standalone and strips the surrounding
// newline, which would change the serialized context.
const CONTEXT_PROMPT: &str =
    "{{instructions}}\n\n對話歷史：\n{{#each turns}}用戶：{{user}}\n助手：{{assistant}}\n{{/each}}用戶：{{message}}\n助手：";

const APOLOGY_PROMPT: &str =
    "抱歉，我遇到了一個錯誤：{{error}}。請檢查您的 Gemini API 設定，或稍後再試。";

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry.register_escape_fn(handlebars::no_escape);
    registry
        .register_template_string(&Prompt::Context.to_string(), CONTEXT_PROMPT)
        .expect("Failed to register template");
    registry
        .register_template_string(&Prompt::Apology.to_string(), APOLOGY_PROMPT)
        .expect("Failed to register template");
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prompt_names() {
        assert_eq!(Prompt::Context.to_string(), "Context");
        assert_eq!(String::from(Prompt::Apology), "Apology");
    }

    #[test]
    fn test_instructions_describe_the_project() {
        assert!(INSTRUCTIONS.starts_with("你是一個專門介紹 JacobLinCool/rhythm-rs 專案的助手"));
        assert!(INSTRUCTIONS.contains("https://github.com/JacobLinCool/rhythm-rs"));
        assert!(INSTRUCTIONS.ends_with("建議他們查看 GitHub 頁面獲取最新資訊。"));
    }

    #[test]
    fn test_render_context_without_turns() {
        let out = templates()
            .render(
                &Prompt::Context.to_string(),
                &json!({"instructions": "SYS", "turns": [], "message": "hey"}),
            )
            .unwrap();
        assert_eq!(out, "SYS\n\n對話歷史：\n用戶：hey\n助手：");
    }

    #[test]
    fn test_render_context_with_turns() {
        let out = templates()
            .render(
                &Prompt::Context.to_string(),
                &json!({
                    "instructions": "SYS",
                    "turns": [
                        {"user": "a", "assistant": "b"},
                        {"user": "c", "assistant": "d"}
                    ],
                    "message": "e"
                }),
            )
            .unwrap();
        assert_eq!(
            out,
            "SYS\n\n對話歷史：\n用戶：a\n助手：b\n用戶：c\n助手：d\n用戶：e\n助手："
        );
    }

    #[test]
    fn test_render_does_not_escape() {
        let out = templates()
            .render(
                &Prompt::Apology.to_string(),
                &json!({"error": "<401> \"Unauthorized\" & 'denied'"}),
            )
            .unwrap();
        assert!(out.contains("<401> \"Unauthorized\" & 'denied'"));
    }

    #[test]
    fn test_strict_mode_rejects_missing_variables() {
        let result = templates().render(&Prompt::Context.to_string(), &json!({"instructions": "SYS"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_render_apology() {
        let out = templates()
            .render(&Prompt::Apology.to_string(), &json!({"error": "quota exceeded"}))
            .unwrap();
        assert_eq!(
            out,
            "抱歉，我遇到了一個錯誤：quota exceeded。請檢查您的 Gemini API 設定，或稍後再試。"
        );
    }
}
