use serde::Serialize;

/// Static catalog entry. Never mutated after the catalog is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Font Awesome class list, e.g. `fas fa-cog`.
    pub icon: &'static str,
}

/// Product a quote is being requested for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteTarget {
    pub product_id: String,
    pub product_name: String,
}

impl From<&ProductDescriptor> for QuoteTarget {
    fn from(product: &ProductDescriptor) -> Self {
        Self {
            product_id: product.id.to_string(),
            product_name: product.name.to_string(),
        }
    }
}
