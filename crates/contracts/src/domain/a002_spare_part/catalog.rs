use super::descriptor::ProductDescriptor;

static PRODUCTS: [ProductDescriptor; 6] = [
    ProductDescriptor {
        id: "screw-barrel",
        name: "Screw Barrel",
        description: "High-precision screw barrels manufactured to exact specifications for optimal injection molding performance. Available in various sizes and materials.",
        icon: "fas fa-screwdriver",
    },
    ProductDescriptor {
        id: "dc-attachment",
        name: "DC Attachment",
        description: "Durable DC attachments designed for reliable connection and efficient power transmission in injection molding systems.",
        icon: "fas fa-plug",
    },
    ProductDescriptor {
        id: "ring",
        name: "Ring",
        description: "Precision-engineered rings and seals for injection molding machines, ensuring optimal sealing and performance under high pressure.",
        icon: "fas fa-circle",
    },
    ProductDescriptor {
        id: "plunger",
        name: "Plunger",
        description: "Heavy-duty plungers manufactured to withstand high-pressure injection molding operations with consistent performance.",
        icon: "fas fa-piston",
    },
    ProductDescriptor {
        id: "drive-shaft",
        name: "Drive Shaft",
        description: "Robust drive shafts engineered for smooth power transmission and long-lasting performance in demanding industrial applications.",
        icon: "fas fa-cog",
    },
    ProductDescriptor {
        id: "custom-parts",
        name: "Custom Parts",
        description: "Bespoke manufacturing services for custom injection molding components based on your technical drawings and specifications.",
        icon: "fas fa-drafting-compass",
    },
];

/// The spare parts offered on the site, in display order.
pub fn catalog() -> &'static [ProductDescriptor] {
    &PRODUCTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<_> = catalog().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog().len());
        assert_eq!(catalog().len(), 6);
    }
}
