use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::time::Instant;
use uuid::Uuid;

use super::{ImageEditor, SaveOutcome};
use crate::{
    catalog::CatalogStore,
    error::{AppError, Result},
    models::{EditorCommand, EditorSessionView},
};

pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);
pub const DEFAULT_MAX_SESSIONS: usize = 256;

struct Session {
    editor: ImageEditor,
    touched: Instant,
}

/// Open editing sessions. A session that is absent is Idle.
///
/// Sessions untouched for longer than the idle timeout are discarded, and the
/// oldest session is dropped when opening one would exceed the cap.
#[derive(Clone)]
pub struct EditorSessions {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    idle_timeout: Duration,
    max_sessions: usize,
}

impl Default for EditorSessions {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSessions {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_IDLE_TIMEOUT, DEFAULT_MAX_SESSIONS)
    }

    pub fn with_limits(idle_timeout: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
            max_sessions: max_sessions.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    pub async fn open(&self, store: &CatalogStore, product_id: i32) -> Result<EditorSessionView> {
        let product = store
            .find_product(product_id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", product_id)))?;

        let session_id = Uuid::new_v4();
        let editor = ImageEditor::open(product);
        let view = view_of(session_id, &editor);

        let mut sessions = self.sessions.write();
        self.evict(&mut sessions);
        sessions.insert(
            session_id,
            Session {
                editor,
                touched: Instant::now(),
            },
        );
        drop(sessions);

        tracing::info!(%session_id, product_id, "Image editor session opened");

        Ok(view)
    }

    pub fn view(&self, session_id: Uuid) -> Result<EditorSessionView> {
        self.with_editor(session_id, |editor| view_of(session_id, editor))
    }

    pub async fn apply(
        &self,
        store: &CatalogStore,
        session_id: Uuid,
        command: EditorCommand,
    ) -> Result<EditorSessionView> {
        if let EditorCommand::Reset = command {
            let product_id = self.with_editor(session_id, |editor| editor.product().id)?;
            let effective = store
                .find_product(product_id)
                .await
                .ok_or_else(|| AppError::NotFound(format!("Product {} not found", product_id)))?;

            return self.with_editor(session_id, |editor| {
                editor.reset(effective);
                view_of(session_id, editor)
            });
        }

        self.with_editor(session_id, |editor| {
            editor.apply(command);
            view_of(session_id, editor)
        })
    }

    /// Saves the session's buffer. The session closes only when the save succeeds.
    pub async fn save(&self, store: &CatalogStore, session_id: Uuid) -> Result<SaveOutcome> {
        let mut editor = self.take(session_id)?;

        let outcome = editor.save(store).await;

        match &outcome {
            SaveOutcome::Saved(product) => {
                tracing::info!(%session_id, product_id = product.id, "Image editor session saved");
            }
            SaveOutcome::Rejected(_) | SaveOutcome::Failed(_) => {
                self.sessions.write().insert(
                    session_id,
                    Session {
                        editor,
                        touched: Instant::now(),
                    },
                );
            }
        }

        Ok(outcome)
    }

    pub fn cancel(&self, session_id: Uuid) -> Result<()> {
        self.take(session_id).map(|_| ())
    }

    /// Runs `f` on a live session and refreshes its idle timer.
    fn with_editor<T>(&self, session_id: Uuid, f: impl FnOnce(&mut ImageEditor) -> T) -> Result<T> {
        let mut sessions = self.sessions.write();
        let now = Instant::now();

        match sessions.get_mut(&session_id) {
            Some(session) if now.duration_since(session.touched) < self.idle_timeout => {
                session.touched = now;
                Ok(f(&mut session.editor))
            }
            Some(_) => {
                sessions.remove(&session_id);
                tracing::info!(%session_id, "Image editor session expired");
                Err(not_found(session_id))
            }
            None => Err(not_found(session_id)),
        }
    }

    fn take(&self, session_id: Uuid) -> Result<ImageEditor> {
        let session = self
            .sessions
            .write()
            .remove(&session_id)
            .ok_or_else(|| not_found(session_id))?;

        if session.touched.elapsed() >= self.idle_timeout {
            tracing::info!(%session_id, "Image editor session expired");
            return Err(not_found(session_id));
        }

        Ok(session.editor)
    }

    fn evict(&self, sessions: &mut HashMap<Uuid, Session>) {
        let now = Instant::now();
        let before = sessions.len();
        sessions.retain(|_, session| now.duration_since(session.touched) < self.idle_timeout);

        while sessions.len() >= self.max_sessions {
            let Some(oldest) = sessions
                .iter()
                .min_by_key(|(_, session)| session.touched)
                .map(|(id, _)| *id)
            else {
                break;
            };
            sessions.remove(&oldest);
        }

        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::info!(evicted, "Discarded idle image editor sessions");
        }
    }
}

fn not_found(session_id: Uuid) -> AppError {
    AppError::NotFound(format!("Editor session {} not found", session_id))
}

fn view_of(session_id: Uuid, editor: &ImageEditor) -> EditorSessionView {
    EditorSessionView {
        session_id,
        product_id: editor.product().id,
        product_name: editor.product().name.clone(),
        images: editor.images().to_vec(),
        folder_path: editor.folder_path().to_string(),
        message: editor.message().map(str::to_string),
    }
}
