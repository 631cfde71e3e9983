use crate::{
    catalog::CatalogStore,
    models::{EditorCommand, Product},
};

pub const EMPTY_IMAGES_MESSAGE: &str = "You must have at least one image for the product.";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to update images. Please try again.";

/// Result of a save attempt. Only `Saved` ends the editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(Product),
    Rejected(String),
    Failed(String),
}

/// Uncommitted image-list edits for a single product.
#[derive(Debug, Clone)]
pub struct ImageEditor {
    product: Product,
    images: Vec<String>,
    folder_path: String,
    message: Option<String>,
}

impl ImageEditor {
    pub fn open(product: Product) -> Self {
        Self {
            images: product.gallery(),
            folder_path: suggested_folder(&product.category),
            product,
            message: None,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn folder_path(&self) -> &str {
        &self.folder_path
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Applies a buffer command. Returns whether the buffer or folder changed.
    /// `Reset` needs the current effective record and goes through [`Self::reset`].
    pub fn apply(&mut self, command: EditorCommand) -> bool {
        match command {
            EditorCommand::AddUrl { url } => self.add_url(&url),
            EditorCommand::AddLocal => self.add_local(),
            EditorCommand::SetFolder { path } => {
                self.folder_path = path;
                true
            }
            EditorCommand::Remove { index } => self.remove(index),
            EditorCommand::MoveUp { index } => self.move_up(index),
            EditorCommand::MoveDown { index } => self.move_down(index),
            EditorCommand::Reset => false,
        }
    }

    pub fn add_url(&mut self, url: &str) -> bool {
        if url.trim().is_empty() {
            return false;
        }
        self.images.push(url.to_string());
        true
    }

    /// Appends the next sequential file in the folder: `main.jpg`, then `2.jpg`, `3.jpg`, ...
    pub fn add_local(&mut self) -> bool {
        if self.folder_path.trim().is_empty() {
            return false;
        }

        let filename = if self.images.is_empty() {
            "main.jpg".to_string()
        } else {
            format!("{}.jpg", self.images.len() + 1)
        };

        let separator = if self.folder_path.ends_with('/') { "" } else { "/" };
        self.images
            .push(format!("{}{}{}", self.folder_path, separator, filename));
        true
    }

    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.images.remove(index);
        true
    }

    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.images.len() {
            return false;
        }
        self.images.swap(index, index - 1);
        true
    }

    pub fn move_down(&mut self, index: usize) -> bool {
        if index >= self.images.len().saturating_sub(1) {
            return false;
        }
        self.images.swap(index, index + 1);
        true
    }

    /// Discards in-progress edits, reloading from the current effective record.
    pub fn reset(&mut self, effective: Product) {
        self.images = effective.gallery();
        self.product = effective;
        self.message = None;
    }

    pub async fn save(&mut self, store: &CatalogStore) -> SaveOutcome {
        if self.images.is_empty() {
            self.message = Some(EMPTY_IMAGES_MESSAGE.to_string());
            return SaveOutcome::Rejected(EMPTY_IMAGES_MESSAGE.to_string());
        }

        if !store
            .update_product_images(self.product.id, self.images.clone())
            .await
        {
            self.message = Some(SAVE_FAILED_MESSAGE.to_string());
            return SaveOutcome::Failed(SAVE_FAILED_MESSAGE.to_string());
        }

        self.message = None;
        let saved = store
            .find_product(self.product.id)
            .await
            .unwrap_or_else(|| self.product.with_images(self.images.clone()));
        SaveOutcome::Saved(saved)
    }
}

/// Folder derived from the category: lower-cased, each single space replaced by a hyphen.
pub fn suggested_folder(category: &str) -> String {
    format!("/images/products/{}/", category.to_lowercase().replace(' ', "-"))
}
