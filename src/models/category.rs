use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryFacet {
    pub name: String,
    pub slug: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct FacetResponse {
    pub facets: Vec<CategoryFacet>,
}

#[derive(Debug, Serialize)]
pub struct CategoryProductsResponse {
    pub name: String,
    pub slug: String,
    pub products: Vec<super::ProductView>,
}
