use contracts::domain::a002_spare_part::{catalog, ProductDescriptor};

/// What one card shows, plus the descriptor its quote button opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductCardModel {
    pub product: &'static ProductDescriptor,
}

impl ProductCardModel {
    pub fn product_id(&self) -> &'static str {
        self.product.id
    }

    pub fn title(&self) -> &'static str {
        self.product.name
    }

    pub fn description(&self) -> &'static str {
        self.product.description
    }

    pub fn icon_class(&self) -> &'static str {
        self.product.icon
    }
}

/// Cards in catalog order.
#[derive(Debug, Clone)]
pub struct ProductGridViewModel {
    pub cards: Vec<ProductCardModel>,
}

impl ProductGridViewModel {
    pub fn new() -> Self {
        Self::from_products(catalog())
    }

    pub fn from_products(products: &'static [ProductDescriptor]) -> Self {
        Self {
            cards: products
                .iter()
                .map(|product| ProductCardModel { product })
                .collect(),
        }
    }
}

impl Default for ProductGridViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TWO: [ProductDescriptor; 2] = [
        ProductDescriptor {
            id: "nozzle",
            name: "Nozzle Tip",
            description: "Hardened nozzle tips.",
            icon: "fas fa-fill-drip",
        },
        ProductDescriptor {
            id: "check-ring",
            name: "Check Ring",
            description: "Non-return valve rings.",
            icon: "fas fa-circle",
        },
    ];

    #[test]
    fn test_one_card_per_catalog_entry() {
        let vm = ProductGridViewModel::new();
        assert_eq!(vm.cards.len(), 6);
        for (card, product) in vm.cards.iter().zip(catalog()) {
            assert_eq!(card.product_id(), product.id);
            assert_eq!(card.title(), product.name);
        }
    }

    #[test]
    fn test_cards_follow_given_order() {
        let vm = ProductGridViewModel::from_products(&TWO);
        let ids: Vec<_> = vm.cards.iter().map(|c| c.product_id()).collect();
        assert_eq!(ids, vec!["nozzle", "check-ring"]);
        assert_eq!(vm.cards[1].icon_class(), "fas fa-circle");
    }
}
