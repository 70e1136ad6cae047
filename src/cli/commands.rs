//! Command implementations for the `shakti` binary.

use super::output::Output;
use super::Commands;
use crate::api::HttpClient;
use crate::auth::{sign_in, sign_out, AuthForm, AuthMode};
use crate::chat::{ChatList, ChatSession, SendOutcome};
use crate::config::ClientConfig;
use crate::media::{DataUrl, UploadBatch, UploadRejection};
use crate::notice::Notice;
use crate::profile::{change_password, load_profile, PasswordForm};
use crate::session::{FileTokenStore, TokenStore};
use anyhow::Context;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Everything a command needs.
pub struct Env {
    pub config: ClientConfig,
    pub api: HttpClient,
    pub store: FileTokenStore,
}

impl Env {
    pub fn new(config: ClientConfig) -> anyhow::Result<Self> {
        let api = HttpClient::with_timeout(
            config.api.base_url.clone(),
            Duration::from_secs(config.api.timeout_secs),
        )
        .context("Failed to build HTTP client")?;
        let store = FileTokenStore::new(config.token_path());
        Ok(Self { config, api, store })
    }

    fn token(&self) -> Option<String> {
        self.store.load()
    }
}

/// Add files to `batch` in the order given. Type and size are checked
/// from file metadata first, so rejected files are never read. Unreadable
/// paths are errors.
pub fn attach(
    batch: &mut UploadBatch,
    paths: &[PathBuf],
) -> anyhow::Result<Vec<UploadRejection>> {
    let mut rejected = Vec::new();
    for path in paths {
        let size = std::fs::metadata(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
            .len();
        let mime = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();

        let kind = match batch.check(&mime, size) {
            Ok(kind) => kind,
            Err(rejection) => {
                debug!(path = %path.display(), %rejection, "rejected attachment");
                rejected.push(rejection);
                continue;
            }
        };

        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        if let Err(rejection) = batch.accept(kind, DataUrl::encode(&mime, &bytes)) {
            rejected.push(rejection);
        }
    }
    Ok(rejected)
}

/// Load message text and attachments into the session's composer,
/// printing each rejected file as a notice. Accepted files are kept.
fn compose(
    session: &mut ChatSession,
    message: Option<String>,
    files: &[PathBuf],
    output: &Output,
) -> anyhow::Result<()> {
    session.composer.text = message.unwrap_or_default();
    for rejection in attach(&mut session.composer.uploads, files)? {
        output.notice(&rejection.notice());
    }
    Ok(())
}

pub async fn dispatch(command: Commands, env: &Env, output: &Output) -> anyhow::Result<()> {
    let token = env.token();
    let token = token.as_deref();

    match command {
        Commands::Login { email, password } => {
            let form = AuthForm {
                email,
                password,
                ..Default::default()
            };
            let signed_in = sign_in(&env.api, &env.store, AuthMode::Login, &form).await?;
            output.notice(&signed_in.notice);
        }

        Commands::Signup {
            email,
            password,
            name,
            position,
        } => {
            let form = AuthForm {
                email,
                password,
                name,
                position,
            };
            let signed_in = sign_in(&env.api, &env.store, AuthMode::Signup, &form).await?;
            output.notice(&signed_in.notice);
        }

        Commands::Logout => {
            sign_out(&env.store);
            output.success("Signed out");
        }

        Commands::Whoami => {
            let profile = load_profile(&env.api, token).await?;
            output.header("Account");
            output.profile(&profile);
        }

        Commands::Chats => {
            if token.is_none() {
                return Err(Notice::auth_required("Please log in to view your analyses.").into());
            }
            let mut list = ChatList::default();
            list.refresh(&env.api, token).await?;
            output.header("Recent analyses");
            output.chats(list.chats());
        }

        Commands::New { message, files } => {
            let mut session = ChatSession::new_chat();
            compose(&mut session, message, &files, output)?;

            if let SendOutcome::Started(started) = session.submit(&env.api, token).await? {
                output.notice(&started.notice);
                output.kv("Id", &started.id);
                output.kv("Title", &started.title);
                output.hint(&format!("Follow up with: shakti send {} -m '...'", started.id));
            }
        }

        Commands::Show { id } => {
            let mut session = ChatSession::existing(id);
            session.load(&env.api, token).await?;
            for message in session.history() {
                output.message(message, env.api.base_url());
            }
        }

        Commands::Send { id, message, files } => {
            let mut session = ChatSession::existing(id);
            compose(&mut session, message, &files, output)?;

            let before = session.history().len();
            match session.submit(&env.api, token).await? {
                SendOutcome::Appended { .. } => {
                    for message in &session.history()[before..] {
                        output.message(message, env.api.base_url());
                    }
                }
                SendOutcome::Skipped => output.warning("Nothing to send"),
                SendOutcome::Started(_) => {}
            }
        }

        Commands::Delete { id } => {
            let mut list = ChatList::default();
            list.delete(&env.api, token, &id, None).await?;
            output.success(&format!("Deleted analysis {}", id));
            output.chats(list.chats());
        }

        Commands::Passwd { current, new } => {
            let profile = load_profile(&env.api, token).await?;
            let form = PasswordForm { current, new };
            let notice = change_password(&env.api, token, &profile.email, &form).await?;
            output.notice(&notice);
        }

        Commands::Config => {
            output.header("Configuration");
            output.kv("API base", &env.config.api.base_url);
            output.kv("Timeout", &format!("{}s", env.config.api.timeout_secs));
            output.kv("Token file", &env.store.path().display().to_string());
            output.kv("Log level", &env.config.logging.level);
            output.kv(
                "Signed in",
                if env.store.is_authenticated() { "yes" } else { "no" },
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;

    #[test]
    fn test_attach_keeps_order_and_guesses_mime() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.png");
        let second = dir.path().join("b.jpg");
        let brief = dir.path().join("brief.pdf");
        std::fs::write(&first, [0u8]).unwrap();
        std::fs::write(&second, [0u8, 0, 0]).unwrap();
        std::fs::write(&brief, b"pdf").unwrap();

        let mut batch = UploadBatch::new();
        let rejected = attach(&mut batch, &[brief, first, second]).unwrap();

        assert!(rejected.is_empty());
        assert_eq!(batch.count(MediaKind::Pdf), 1);
        let images = batch.items(MediaKind::Image);
        assert_eq!(images[0].as_str(), "data:image/png;base64,AA==");
        assert_eq!(images[1].mime(), "image/jpeg");
        assert_eq!(images[1].body(), "AAAA");
    }

    #[test]
    fn test_attach_rejects_oversized_file_from_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let huge = dir.path().join("huge.mp4");
        // Sparse: the length is set without writing any data.
        let size = 150 * 1024 * 1024;
        std::fs::File::create(&huge).unwrap().set_len(size).unwrap();

        let mut batch = UploadBatch::new();
        let rejected = attach(&mut batch, &[huge]).unwrap();

        assert_eq!(
            rejected,
            vec![UploadRejection::TooLarge {
                kind: MediaKind::Video,
                size,
                limit_mb: 100,
            }]
        );
        assert!(batch.is_empty());
    }

    #[test]
    fn test_attach_unsupported_type_is_rejection() {
        let dir = tempfile::tempdir().unwrap();
        let zip = dir.path().join("notes.zip");
        std::fs::write(&zip, b"PK").unwrap();

        let mut batch = UploadBatch::new();
        let rejected = attach(&mut batch, &[zip]).unwrap();
        assert_eq!(rejected[0].notice().title, "Invalid file type");
        assert!(batch.is_empty());
    }

    #[test]
    fn test_attach_missing_file() {
        let mut batch = UploadBatch::new();
        let err = attach(&mut batch, &[PathBuf::from("/nonexistent/shakti.png")]).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
