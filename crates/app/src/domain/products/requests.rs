//! Product Requests

use reqwest::multipart::{Form, Part};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog filter submitted by the products page.
///
/// Empty collections mean "no constraint" for that facet; the backend
/// interprets them the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilterRequest {
    pub name: String,
    pub brands_ids: Vec<i64>,
    pub categories_ids: Vec<i64>,
    pub sizes_ids: Vec<i64>,
    pub genders_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Decimal>,
    pub sort: String,
    pub page: u32,
}

/// New or updated product submitted by the administrator dashboard.
///
/// Sent as a multipart form: scalar fields plus one binary part per image.
#[derive(Debug, Clone, Default)]
pub struct ProductUpload {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: u32,
    pub sizes_names: Vec<String>,
    pub brand_name: String,
    pub gender_name: String,
    pub category_name: String,
    pub images: Vec<ImageUpload>,
}

/// One image file attached to a product upload.
#[derive(Debug, Clone, Default)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ProductUpload {
    /// Build the multipart form the product endpoints expect.
    ///
    /// # Errors
    ///
    /// Returns an error when an image part's content type is not a valid
    /// MIME string.
    pub fn into_form(self) -> Result<Form, reqwest::Error> {
        let mut form = Form::new()
            .text("name", self.name)
            .text("description", self.description)
            .text("price", self.price.to_string())
            .text("stock", self.stock.to_string())
            .text("brandName", self.brand_name)
            .text("genderName", self.gender_name)
            .text("categoryName", self.category_name);

        for size_name in self.sizes_names {
            form = form.text("sizesNames", size_name);
        }

        for image in self.images {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.content_type)?;

            form = form.part("images", part);
        }

        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn filter_serializes_with_backend_field_names() -> TestResult {
        let filter = ProductFilterRequest {
            name: "runner".to_string(),
            brands_ids: vec![1, 2],
            min_price: Some(dec!(10)),
            sort: "price-asc".to_string(),
            page: 3,
            ..ProductFilterRequest::default()
        };

        let value = serde_json::to_value(&filter)?;

        assert_eq!(value.get("brandsIds"), Some(&serde_json::json!([1, 2])));
        assert!(value.get("minPrice").is_some());
        assert!(value.get("maxPrice").is_none(), "absent bounds are omitted");

        Ok(())
    }

    #[test]
    fn upload_builds_a_multipart_form() -> TestResult {
        let upload = ProductUpload {
            name: "Court Sneaker".to_string(),
            price: dec!(89.99),
            stock: 3,
            sizes_names: vec!["41".to_string(), "42".to_string()],
            images: vec![ImageUpload {
                file_name: "front.webp".to_string(),
                content_type: "image/webp".to_string(),
                bytes: vec![0, 1, 2],
            }],
            ..ProductUpload::default()
        };

        upload.into_form()?;

        Ok(())
    }
}
