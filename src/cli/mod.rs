use clap::{Args, Subcommand};

use neoclient::{Message, Role};

#[derive(Args)]
pub struct Sampling {
    /// Maximum number of tokens to generate
    #[arg(long, default_value = "1024")]
    pub max_tokens: u32,

    /// Sampling temperature, conventionally between 0 and 2
    #[arg(short, long, default_value = "1.0")]
    pub temperature: f64,

    /// Nucleus sampling probability mass
    #[arg(long, default_value = "1.0")]
    pub top_p: f64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Continue a prompt (v1/completions)
    Complete {
        #[arg(short, long)]
        model: String,

        #[arg(short, long)]
        prompt: String,

        #[command(flatten)]
        sampling: Sampling,
    },

    /// Generate the next message of a conversation (v1/chat/completions)
    Chat {
        #[arg(short, long)]
        model: String,

        /// System message placed before the conversation
        #[arg(short, long)]
        system: Option<String>,

        /// Conversation turn as ROLE=CONTENT with ROLE one of system, user,
        /// assistant, tool; repeat in order. Anything else is a user turn.
        #[arg(short = 'M', long = "message", required = true)]
        messages: Vec<String>,

        /// Keep generating past end-of-sequence until max tokens is reached
        #[arg(long)]
        ignore_eos: bool,

        #[command(flatten)]
        sampling: Sampling,
    },
}

/// Parse a `ROLE=CONTENT` argument. Only a known role prefix is split off, so
/// text such as `x=1` is sent verbatim as a user turn.
pub fn parse_message(arg: &str) -> Message {
    if let Some((role, content)) = arg.split_once('=') {
        if let Ok(role) = role.parse::<Role>() {
            if role.is_known() {
                return Message::new(role, content);
            }
        }
    }
    Message::user(arg)
}

pub fn build_conversation(system: Option<String>, messages: &[String]) -> Vec<Message> {
    system
        .map(Message::system)
        .into_iter()
        .chain(messages.iter().map(|arg| parse_message(arg)))
        .collect()
}
