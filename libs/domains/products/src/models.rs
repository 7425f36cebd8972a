use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog entry.
///
/// `id` is `None` until the repository saves the product for the first time
/// and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "CAT FISHING ROD")]
    pub name: String,
    #[schema(example = "KOREAN SHORT CAT")]
    pub maker: String,
    #[schema(example = 20000)]
    pub price: i64,
    #[schema(example = "https://example.com/images/rod.jpg")]
    pub image_url: String,
}

impl Product {
    /// Overwrite every mutable field with the DTO's values.
    pub fn apply(&mut self, dto: ProductDto) {
        self.name = dto.name;
        self.maker = dto.maker;
        self.price = dto.price;
        self.image_url = dto.image_url;
    }
}

/// Request body for creating or replacing a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub name: String,
    pub maker: String,
    pub price: i64,
    pub image_url: String,
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Self {
            id: None,
            name: dto.name,
            maker: dto.maker,
            price: dto.price,
            image_url: dto.image_url,
        }
    }
}
