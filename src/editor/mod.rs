mod registry;
mod session;

pub use registry::{DEFAULT_IDLE_TIMEOUT, DEFAULT_MAX_SESSIONS, EditorSessions};
pub use session::{
    EMPTY_IMAGES_MESSAGE, ImageEditor, SAVE_FAILED_MESSAGE, SaveOutcome, suggested_folder,
};
