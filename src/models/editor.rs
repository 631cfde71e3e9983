use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Product;

#[derive(Debug, Deserialize)]
pub struct OpenEditorRequest {
    pub product_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EditorCommand {
    AddUrl { url: String },
    AddLocal,
    SetFolder { path: String },
    Remove { index: usize },
    MoveUp { index: usize },
    MoveDown { index: usize },
    Reset,
}

#[derive(Debug, Serialize)]
pub struct EditorSessionView {
    pub session_id: Uuid,
    pub product_id: i32,
    pub product_name: String,
    pub images: Vec<String>,
    pub folder_path: String,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EditorSaveResponse {
    pub message: String,
    pub product: Product,
}
