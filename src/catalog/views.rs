//! Read-only projections of the effective catalog.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use crate::models::{CategoryFacet, Product, ProductView};

/// Lower-cases and replaces each whitespace run with one hyphen
/// ("Shade  Structures" -> "shade-structures").
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }

    slug
}

/// Category groupings shown as tabs in the admin product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    All,
    Tents,
    Covers,
    Shade,
}

impl Collection {
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            Collection::All => &[],
            Collection::Tents => &["Tents"],
            Collection::Covers => &["Covers", "Vehicle Covers", "PVC Products"],
            Collection::Shade => &["Shade Structures", "Shade Solutions", "Awnings"],
        }
    }

    pub fn contains(self, product: &Product) -> bool {
        self == Collection::All || self.categories().contains(&product.category.as_str())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Collection::All),
            "tents" => Ok(Collection::Tents),
            "covers" => Ok(Collection::Covers),
            "shade" => Ok(Collection::Shade),
            other => Err(format!("Unknown collection: {}", other)),
        }
    }
}

pub fn filter_collection(products: &[Product], collection: Collection) -> Vec<Product> {
    products
        .iter()
        .filter(|p| collection.contains(p))
        .cloned()
        .collect()
}

/// Sorted, de-duplicated category names.
pub fn category_names(products: &[Product]) -> Vec<String> {
    category_facets(products).into_iter().map(|f| f.name).collect()
}

pub fn category_facets(products: &[Product]) -> Vec<CategoryFacet> {
    facets(products.iter().map(|p| p.category.as_str()))
}

pub fn subcategory_facets(products: &[Product]) -> Vec<CategoryFacet> {
    facets(
        products
            .iter()
            .flat_map(|p| p.subcategories.iter().map(String::as_str)),
    )
}

fn facets<'a>(names: impl Iterator<Item = &'a str>) -> Vec<CategoryFacet> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for name in names {
        *counts.entry(name).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(name, count)| CategoryFacet {
            name: name.to_string(),
            slug: slugify(name),
            count,
        })
        .collect()
}

/// Products whose category slug matches; also returns the category's display name.
pub fn products_in_category(products: &[Product], slug: &str) -> Option<(String, Vec<Product>)> {
    let matching: Vec<Product> = products
        .iter()
        .filter(|p| slugify(&p.category) == slug)
        .cloned()
        .collect();

    let name = matching.first()?.category.clone();
    Some((name, matching))
}

pub fn products_of_type(products: &[Product], slug: &str) -> Option<(String, Vec<Product>)> {
    let name = products
        .iter()
        .flat_map(|p| p.subcategories.iter())
        .find(|s| slugify(s) == slug)?
        .clone();

    let matching = products
        .iter()
        .filter(|p| p.subcategories.contains(&name))
        .cloned()
        .collect();

    Some((name, matching))
}

/// Substitutes a placeholder for image references that cannot be displayed.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    public_dir: Option<PathBuf>,
    placeholder: String,
}

impl ImageResolver {
    pub fn new(public_dir: Option<PathBuf>, placeholder: impl Into<String>) -> Self {
        Self {
            public_dir,
            placeholder: placeholder.into(),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn resolve(&self, reference: &str) -> String {
        if self.is_displayable(reference) {
            reference.to_string()
        } else {
            tracing::warn!(reference, "Broken image reference, using placeholder");
            self.placeholder.clone()
        }
    }

    fn is_displayable(&self, reference: &str) -> bool {
        let reference = reference.trim();
        if reference.is_empty() {
            return false;
        }

        // Only site-local paths can be checked; URLs are trusted.
        let Some(public_dir) = &self.public_dir else {
            return true;
        };
        if !reference.starts_with('/') || reference.starts_with("//") {
            return true;
        }

        let relative = Path::new(reference.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return false;
        }

        public_dir.join(relative).is_file()
    }

    pub fn render(&self, product: Product) -> ProductView {
        let gallery: Vec<String> = product.gallery().iter().map(|i| self.resolve(i)).collect();
        let display_image = self.resolve(&product.image);

        ProductView {
            photo_count: gallery.len(),
            display_image,
            gallery,
            product,
        }
    }

    pub fn render_all(&self, products: Vec<Product>) -> Vec<ProductView> {
        products.into_iter().map(|p| self.render(p)).collect()
    }
}
