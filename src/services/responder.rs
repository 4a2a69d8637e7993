// src/services/responder.rs
use std::sync::Arc;

use crate::message::{ChatResponse, ReplySource};
use crate::services::openai::CompletionClient;

/// Persona sent with every completion request.
pub const SYSTEM_PROMPT: &str = "You are a friendly AI concierge for a restaurant \
booking service. Provide accurate, concise answers about restaurants, menus, \
opening hours and reservations. Use Vietnamese by default and switch to English \
when the user writes in English. Keep responses concise but informative.";

/// One keyword-matching rule: any keyword hit selects the canned reply.
#[derive(Debug, Clone)]
pub struct FallbackRule {
    keywords: Vec<String>,
    reply: String,
}

impl FallbackRule {
    pub fn new(keywords: &[&str], reply: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            reply: reply.to_string(),
        }
    }

    fn matches(&self, lowered_message: &str) -> bool {
        self.keywords.iter().any(|k| lowered_message.contains(k.as_str()))
    }
}

/// The canned rule table for the deployed restaurant domain. Ordered by
/// priority; the first matching rule wins.
pub fn default_rules() -> Vec<FallbackRule> {
    vec![
        FallbackRule::new(
            &["đặt bàn", "booking", "reservation"],
            "Tôi có thể giúp bạn tìm nhà hàng phù hợp và kiểm tra bàn trống. \
             Để đặt bàn, vui lòng truy cập trang đặt bàn của chúng tôi hoặc \
             liên hệ trực tiếp với nhà hàng.",
        ),
        FallbackRule::new(
            &["thực đơn", "menu", "món ăn"],
            "Bạn muốn xem thực đơn của nhà hàng nào? Hãy cho tôi biết tên nhà \
             hàng để tôi gửi danh sách món ăn nhé.",
        ),
        FallbackRule::new(
            &["giờ mở cửa", "mấy giờ", "opening hours"],
            "Giờ mở cửa tùy theo từng nhà hàng. Bạn cho tôi biết nhà hàng bạn \
             quan tâm để tôi kiểm tra giúp nhé.",
        ),
        FallbackRule::new(
            &["xin chào", "chào", "hello"],
            "Xin chào! Tôi là trợ lý đặt bàn nhà hàng. Tôi có thể giúp gì cho \
             bạn hôm nay?",
        ),
        FallbackRule::new(
            &["cảm ơn", "thank"],
            "Rất vui được hỗ trợ bạn! Nếu cần thêm thông tin về nhà hàng hay \
             đặt bàn, cứ nhắn cho tôi nhé.",
        ),
    ]
}

pub fn default_reply() -> String {
    "Xin lỗi, tôi chưa hiểu rõ yêu cầu của bạn. Bạn có thể hỏi về thực đơn, \
     giờ mở cửa hoặc đặt bàn nhé."
        .to_string()
}

/// Produces a reply for one user message. Strategy is fixed at construction:
/// with a completion client the LLM path runs first and falls back on any
/// failure; without one, only the rule table runs.
pub struct Responder {
    rules: Vec<FallbackRule>,
    default_reply: String,
    llm: Option<Arc<dyn CompletionClient>>,
}

impl Responder {
    pub fn new(
        rules: Vec<FallbackRule>,
        default_reply: String,
        llm: Option<Arc<dyn CompletionClient>>,
    ) -> Self {
        Self { rules, default_reply, llm }
    }

    pub fn with_default_rules(llm: Option<Arc<dyn CompletionClient>>) -> Self {
        Self::new(default_rules(), default_reply(), llm)
    }

    pub async fn respond(&self, user_message: &str) -> ChatResponse {
        if let Some(client) = &self.llm {
            match client.complete(SYSTEM_PROMPT, user_message).await {
                Ok(text) if !text.trim().is_empty() => {
                    return ChatResponse { reply: text, source: ReplySource::Llm };
                }
                Ok(_) => {
                    tracing::warn!("completion service returned empty text, using fallback");
                }
                Err(err) => {
                    tracing::warn!(error = %err, "completion request failed, using fallback");
                }
            }
        }

        ChatResponse {
            reply: self.fallback_reply(user_message),
            source: ReplySource::Fallback,
        }
    }

    /// First matching rule wins; no match yields the default reply.
    fn fallback_reply(&self, user_message: &str) -> String {
        let lowered = user_message.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.reply.clone())
            .unwrap_or_else(|| self.default_reply.clone())
    }
}
