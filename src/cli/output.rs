//! Colored output helpers for CLI
//!
//! Provides consistent, colored terminal output for the SHAKTI client.

use crate::media::{media_url, MediaKind};
use crate::notice::{Notice, NoticeVariant};
use crate::types::{ChatMessage, ChatSummary, Sender, UserProfile};
use owo_colors::OwoColorize;

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print a success message with a checkmark
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "•".blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "⚠".yellow().bold(), message.yellow());
        } else {
            println!("  [WARN] {}", message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Print a notice the way the UI would toast it
    pub fn notice(&self, notice: &Notice) {
        let line = format!("{} - {}", notice.title, notice.description);
        match notice.variant {
            NoticeVariant::Info => self.success(&line),
            NoticeVariant::Destructive => self.error(&line),
        }
    }

    /// Print a section header
    pub fn header(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.bright_white().bold().underline());
        } else {
            println!("\n  === {} ===", title);
        }
    }

    /// Print a hint
    pub fn hint(&self, message: &str) {
        if self.colored {
            println!("\n  {} {}", "💡".dimmed(), message.dimmed().italic());
        } else {
            println!("\n  [TIP] {}", message);
        }
    }

    /// Print a key-value pair
    pub fn kv(&self, key: &str, value: &str) {
        if self.colored {
            println!("  {:>14} {}", key.dimmed(), value.bright_white());
        } else {
            println!("  {:>14} {}", key, value);
        }
    }

    pub fn chats(&self, chats: &[ChatSummary]) {
        if chats.is_empty() {
            self.info("No analyses yet. Start one with 'shakti new'.");
            return;
        }
        for chat in chats {
            if self.colored {
                println!("  {}  {}", chat.id.dimmed(), chat.title.bright_white());
            } else {
                println!("  {}  {}", chat.id, chat.title);
            }
        }
    }

    pub fn profile(&self, profile: &UserProfile) {
        self.kv("Name", &profile.name);
        self.kv("Email", &profile.email);
        self.kv("Position", &profile.position);
        self.kv("Admin", if profile.is_admin { "yes" } else { "no" });
        if let Some(created) = profile.created_at {
            self.kv("Member since", &created.format("%Y-%m-%d").to_string());
        }
        self.kv("Analyses", &profile.total_contexts.to_string());
    }

    /// Print one message of a transcript, with media resolved to URLs
    pub fn message(&self, message: &ChatMessage, api_base: &str) {
        let who = match message.sender {
            Sender::User => "you",
            Sender::Bot => "shakti",
        };
        let stamp = message.timestamp.format("%Y-%m-%d %H:%M").to_string();

        if self.colored {
            let who = match message.sender {
                Sender::User => who.cyan().bold().to_string(),
                Sender::Bot => who.magenta().bold().to_string(),
            };
            println!("\n  {} {}", who, stamp.dimmed());
        } else {
            println!("\n  {} [{}]", who, stamp);
        }

        for line in message.text().lines() {
            println!("    {}", line);
        }

        let attachments = [
            (MediaKind::Image, &message.images),
            (MediaKind::Video, &message.videos),
            (MediaKind::Pdf, &message.pdfs),
        ];
        for (kind, names) in attachments {
            for name in names {
                let url = media_url(api_base, kind, name);
                if self.colored {
                    println!("    {} {}", format!("[{}]", kind).dimmed(), url.underline());
                } else {
                    println!("    [{}] {}", kind, url);
                }
            }
        }
    }
}
