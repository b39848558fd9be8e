//! Product listing, search and posting.

use super::{storage_failure, validation, Marketplace};
use crate::domain::{
    placeholder_image, MarketError, MarketResult, NewProduct, Product, ProductStatus,
    ALL_CATEGORIES,
};
use crate::session::Session;
use chrono::Utc;
use tracing::info;

/// True when `product` passes the search box and category chip.
fn matches_filter(product: &Product, search_lower: &str, category: &str) -> bool {
    // ---
    product.is_available()
        && product.title.to_lowercase().contains(search_lower)
        && (category == ALL_CATEGORIES || product.category == category)
}

impl Marketplace {
    // ---

    /// Available products whose title contains `search` (ignoring case)
    /// and whose category equals `category`, or any category for `"All"`.
    /// Results keep insertion order.
    #[tracing::instrument(skip(self))]
    pub async fn list_available(&self, search: &str, category: &str) -> MarketResult<Vec<Product>> {
        // ---
        let products = self
            .collections
            .products()
            .await
            .map_err(|e| storage_failure("product listing", e))?;

        let search_lower = search.to_lowercase();
        Ok(products
            .into_iter()
            .filter(|p| matches_filter(p, &search_lower, category))
            .collect())
    }

    /// Post a listing on behalf of the session user.
    ///
    /// Seller fields are copied from the session user at this moment and
    /// are not refreshed if the account changes later.
    #[tracing::instrument(skip(self, form, session), fields(seller_id = %session.user_id()))]
    pub async fn create_product(&self, form: NewProduct, session: &Session) -> MarketResult<Product> {
        // ---
        let price = validation::validate_product(&form)?;

        let image_url = match form.image_url {
            Some(url) if !url.trim().is_empty() => url,
            _ => placeholder_image(&form.category),
        };

        let seller = session.user();

        let _guard = self.collections.lock_writes().await;

        let mut products = self
            .collections
            .products()
            .await
            .map_err(|e| storage_failure("posting", e))?;

        let product = Product {
            id: self.ids.next_id(),
            title: form.title,
            price,
            category: form.category,
            condition: form.condition,
            description: form.description,
            seller_id: seller.id.clone(),
            seller_name: seller.name.clone(),
            seller_phone: seller.phone.clone(),
            image_url,
            status: ProductStatus::Available,
            posted_date: Utc::now(),
        };
        products.push(product.clone());

        self.collections
            .save_products(&products)
            .await
            .map_err(|e| storage_failure("posting", e))?;

        self.metrics.record_product_created();
        info!(product_id = %product.id, "Product posted");

        Ok(product)
    }

    pub async fn get_product(&self, id: &str) -> MarketResult<Product> {
        // ---
        let products = self
            .collections
            .products()
            .await
            .map_err(|e| storage_failure("product lookup", e))?;

        products
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| MarketError::NotFound {
                kind: "product",
                id: id.to_string(),
            })
    }

    /// Every listing posted by `seller_id`, whatever its status.
    pub async fn list_by_seller(&self, seller_id: &str) -> MarketResult<Vec<Product>> {
        // ---
        let products = self
            .collections
            .products()
            .await
            .map_err(|e| storage_failure("product listing", e))?;

        Ok(products
            .into_iter()
            .filter(|p| p.seller_id == seller_id)
            .collect())
    }
}
