//! Conversation context for the chat-completion assistant.
//!
//! Only the payload is assembled here. Sending it is up to the host.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Shown when the assistant answered with no usable content.
pub const FALLBACK_REPLY: &str = "I'm sorry, I couldn't process your request.";

/// Shown when the request itself failed.
pub const ERROR_REPLY: &str =
    "Sorry, I encountered an error while processing your request. Please try again later.";

const PERSONA: &str = "You are a helpful assistant that understands the user deeply based on \
their onboarding goals and prior reflections.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Message {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Message {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Message {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Goals and routines captured during onboarding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub what_do_you_want: Option<String>,
    #[serde(default)]
    pub what_do_you_really_want: Option<String>,
    #[serde(default)]
    pub regulars: Option<String>,
}

impl UserProfile {
    /// One-paragraph summary for the system prompt.
    pub fn context(&self) -> String {
        let want = non_blank(&self.what_do_you_want).unwrap_or("to be happy");
        let really_want =
            non_blank(&self.what_do_you_really_want).unwrap_or("financial freedom and a loving partner");

        let mut context = format!(
            "The user has the following goals and routines: They want {}. They really want {}.",
            want, really_want
        );
        if let Some(regulars) = non_blank(&self.regulars) {
            context.push_str(&format!(" They usually {}.", regulars));
        }
        context
    }
}

/// One separately editable part of a [`UserProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSection {
    Want,
    ReallyWant,
    Regulars,
}

impl ProfileSection {
    pub const ALL: [ProfileSection; 3] = [
        ProfileSection::Want,
        ProfileSection::ReallyWant,
        ProfileSection::Regulars,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ProfileSection::Want => "What do you want?",
            ProfileSection::ReallyWant => "What do you really want?",
            ProfileSection::Regulars => "What are your regulars?",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ProfileSection::Want => "Your primary desires and goals",
            ProfileSection::ReallyWant => "Your deeper motivations and aspirations",
            ProfileSection::Regulars => "Your recurring commitments and activities",
        }
    }
}

impl fmt::Display for ProfileSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileSection::Want => write!(f, "want"),
            ProfileSection::ReallyWant => write!(f, "really-want"),
            ProfileSection::Regulars => write!(f, "regulars"),
        }
    }
}

impl FromStr for ProfileSection {
    type Err = ScheduleError;

    fn from_str(s: &str) -> ScheduleResult<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "want" => Ok(ProfileSection::Want),
            "really-want" => Ok(ProfileSection::ReallyWant),
            "regulars" => Ok(ProfileSection::Regulars),
            other => Err(ScheduleError::invalid(format!(
                "Unknown profile section '{}'. Expected 'want', 'really-want' or 'regulars'",
                other
            ))),
        }
    }
}

impl UserProfile {
    /// The answer stored for `section`, if it isn't blank.
    pub fn section(&self, section: ProfileSection) -> Option<&str> {
        non_blank(self.field(section))
    }

    /// Replace one section, leaving the others alone. Blank text is refused.
    pub fn set_section(&mut self, section: ProfileSection, text: &str) -> ScheduleResult<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ScheduleError::invalid(format!(
                "\"{}\" must not be empty",
                section.title()
            )));
        }
        *self.field_mut(section) = Some(text.to_string());
        Ok(())
    }

    fn field(&self, section: ProfileSection) -> &Option<String> {
        match section {
            ProfileSection::Want => &self.what_do_you_want,
            ProfileSection::ReallyWant => &self.what_do_you_really_want,
            ProfileSection::Regulars => &self.regulars,
        }
    }

    fn field_mut(&mut self, section: ProfileSection) -> &mut Option<String> {
        match section {
            ProfileSection::Want => &mut self.what_do_you_want,
            ProfileSection::ReallyWant => &mut self.what_do_you_really_want,
            ProfileSection::Regulars => &mut self.regulars,
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Request body for an OpenAI-style chat-completions endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

/// System prompt, prior history, then the new user message.
pub fn build_request(
    model: &str,
    profile: Option<&UserProfile>,
    history: &[Message],
    user_message: &str,
) -> ChatRequest {
    let system = match profile {
        Some(profile) => format!("{} {}", PERSONA, profile.context()),
        None => PERSONA.to_string(),
    };

    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(Message::system(system));
    messages.extend(history.iter().cloned());
    messages.push(Message::user(user_message));

    ChatRequest {
        model: model.to_string(),
        messages,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: String,
}

impl ChatResponse {
    /// The first choice's text, or [`FALLBACK_REPLY`].
    pub fn reply(&self) -> &str {
        self.choices
            .first()
            .map(|c| c.message.content.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(FALLBACK_REPLY)
    }
}

/// Running chat history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new(messages: Vec<Message>) -> Self {
        Conversation { messages }
    }

    /// Build the request for `user_message` and record it in the history.
    pub fn send(&mut self, model: &str, profile: Option<&UserProfile>, user_message: &str) -> ChatRequest {
        let request = build_request(model, profile, &self.messages, user_message);
        self.messages.push(Message::user(user_message));
        request
    }

    pub fn record_reply(&mut self, reply: impl Into<String>) {
        self.messages.push(Message::assistant(reply));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_context_uses_fallbacks() {
        let context = UserProfile::default().context();
        assert_eq!(
            context,
            "The user has the following goals and routines: They want to be happy. \
             They really want financial freedom and a loving partner."
        );
    }

    #[test]
    fn profile_context_includes_regulars() {
        let profile = UserProfile {
            what_do_you_want: Some("to sleep more".into()),
            what_do_you_really_want: Some("  ".into()),
            regulars: Some("work 9-5 on weekdays".into()),
        };
        let context = profile.context();
        assert!(context.contains("They want to sleep more."));
        assert!(context.contains("financial freedom"));
        assert!(context.ends_with("They usually work 9-5 on weekdays."));
    }

    #[test]
    fn editing_one_section_keeps_the_others() {
        let mut profile = UserProfile {
            what_do_you_want: Some("to be happy".into()),
            what_do_you_really_want: Some("a garden".into()),
            regulars: None,
        };

        profile
            .set_section(ProfileSection::Regulars, "  gym Mon/Wed/Fri 7-8:30am ")
            .unwrap();

        assert_eq!(profile.section(ProfileSection::Regulars), Some("gym Mon/Wed/Fri 7-8:30am"));
        assert_eq!(profile.section(ProfileSection::Want), Some("to be happy"));
        assert_eq!(profile.section(ProfileSection::ReallyWant), Some("a garden"));
    }

    #[test]
    fn blank_section_edit_is_refused() {
        let mut profile = UserProfile {
            regulars: Some("work 9-5".into()),
            ..Default::default()
        };
        let err = profile.set_section(ProfileSection::Regulars, "   ").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(profile.section(ProfileSection::Regulars), Some("work 9-5"));
        assert_eq!(profile.section(ProfileSection::Want), None);
    }

    #[test]
    fn section_names_parse() {
        assert_eq!("regulars".parse::<ProfileSection>().unwrap(), ProfileSection::Regulars);
        assert_eq!("Really_Want".parse::<ProfileSection>().unwrap(), ProfileSection::ReallyWant);
        assert_eq!(ProfileSection::ReallyWant.to_string(), "really-want");
        assert!("hobbies".parse::<ProfileSection>().unwrap_err().is_validation());
    }

    #[test]
    fn request_orders_system_history_user() {
        let history = vec![Message::user("hi"), Message::assistant("hello")];
        let request = build_request(DEFAULT_MODEL, Some(&UserProfile::default()), &history, "plan my day");

        assert_eq!(request.model, "deepseek-chat");
        let roles: Vec<Role> = request.messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::System, Role::User, Role::Assistant, Role::User]);
        assert!(request.messages[0].content.starts_with(PERSONA));
        assert!(request.messages[0].content.contains("They want to be happy"));
        assert_eq!(request.messages[3].content, "plan my day");
    }

    #[test]
    fn request_without_profile_uses_bare_persona() {
        let request = build_request(DEFAULT_MODEL, None, &[], "hello");
        assert_eq!(request.messages[0].content, PERSONA);
    }

    #[test]
    fn request_serializes_lowercase_roles() {
        let request = build_request(DEFAULT_MODEL, None, &[], "hello");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
    }

    #[test]
    fn response_reply_falls_back() {
        let body = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"Sure!"},"finish_reason":"stop"}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.reply(), "Sure!");

        let empty: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(empty.reply(), FALLBACK_REPLY);
    }

    #[test]
    fn conversation_records_sent_messages() {
        let mut conversation = Conversation::default();
        let first = conversation.send(DEFAULT_MODEL, None, "one");
        assert_eq!(first.messages.len(), 2);

        conversation.record_reply("ok");
        let second = conversation.send(DEFAULT_MODEL, None, "two");
        assert_eq!(second.messages.len(), 4);
        assert_eq!(conversation.messages.len(), 3);
    }
}
