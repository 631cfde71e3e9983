use serde::{Deserialize, Serialize};

/// A sellable catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Cover image; mirrors `images[0]` whenever `images` is present.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    pub category: String,
    #[serde(default)]
    pub subcategories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasonality: Option<String>,
}

impl Product {
    /// Ordered image list, falling back to the single cover image.
    pub fn gallery(&self) -> Vec<String> {
        match &self.images {
            Some(images) if !images.is_empty() => images.clone(),
            _ => vec![self.image.clone()],
        }
    }

    /// Copy of this record with its image list replaced and the cover derived
    /// from the first entry. An empty list leaves the record unchanged.
    pub fn with_images(&self, images: Vec<String>) -> Product {
        let Some(cover) = images.first().cloned() else {
            return self.clone();
        };

        Product {
            image: cover,
            images: Some(images),
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err(format!("product {} has an empty name", self.id));
        }

        if let Some(images) = &self.images {
            match images.first() {
                None => return Err(format!("product {} has an empty image list", self.id)),
                Some(cover) if *cover != self.image => {
                    return Err(format!(
                        "product {} cover image does not match its first image",
                        self.id
                    ));
                }
                _ => {}
            }
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    /// Cover image after placeholder substitution.
    pub display_image: String,
    pub gallery: Vec<String>,
    pub photo_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct LanguageQuery {
    pub lang: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AdminProductQuery {
    pub collection: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ShowcaseResponse {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub categories: Vec<String>,
    pub products: Vec<ProductView>,
}

#[derive(Debug, Serialize)]
pub struct ProductDetailResponse {
    #[serde(flatten)]
    pub product: ProductView,
    pub view_details_label: String,
    pub request_quote_label: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateImagesRequest {
    pub images: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateImagesResponse {
    pub success: bool,
    pub product: Product,
}
