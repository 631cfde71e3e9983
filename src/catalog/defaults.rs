use crate::models::Product;

fn product(
    id: i32,
    name: &str,
    description: &str,
    image: &str,
    category: &str,
    subcategories: &[&str],
) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        images: None,
        category: category.to_string(),
        subcategories: subcategories.iter().map(|s| s.to_string()).collect(),
        capacity: None,
        weight: None,
        seasonality: None,
    }
}

/// Built-in catalog every override is applied on top of.
pub fn default_products() -> Vec<Product> {
    let mut catalog = vec![
        Product {
            images: Some(vec![
                "/images/products/tents/main.jpg".to_string(),
                "/images/products/tents/2.jpg".to_string(),
                "/images/products/tents/3.jpg".to_string(),
            ]),
            capacity: Some("200 guests".to_string()),
            weight: Some("480 kg".to_string()),
            seasonality: Some("All seasons".to_string()),
            ..product(
                1,
                "Event Tent (Large)",
                "Spacious frame tent for weddings, corporate events and large gatherings.",
                "/images/products/tents/main.jpg",
                "Tents",
                &["Event Tents", "Frame Tents"],
            )
        },
        Product {
            capacity: Some("6 people".to_string()),
            weight: Some("14 kg".to_string()),
            seasonality: Some("3 seasons".to_string()),
            ..product(
                2,
                "Family Camping Tent",
                "Weather-resistant six person tent for family camping trips.",
                "https://images.unsplash.com/photo-1504280390367-361c6d9f38f4?w=800&q=80",
                "Tents",
                &["Camping Tents"],
            )
        },
        product(
            3,
            "Car Shade Port",
            "Durable shade structure protecting vehicles from sun and weather.",
            "https://images.unsplash.com/photo-1489824904134-891ab64532f1?w=800&q=80",
            "Shade Structures",
            &["Carports"],
        ),
        product(
            4,
            "Heavy-Duty Tarpaulin",
            "Waterproof PVC tarpaulin for outdoor applications, available in multiple sizes.",
            "https://images.unsplash.com/photo-1508873696983-2dfd5898f08b?w=800&q=80",
            "PVC Products",
            &["Tarpaulins"],
        ),
        product(
            5,
            "Retractable Awning",
            "Awning for residential and commercial frontages, installation included.",
            "https://images.unsplash.com/photo-1595111633191-7a8c1b16c722?w=800&q=80",
            "Awnings",
            &["Retractable Awnings"],
        ),
        Product {
            capacity: Some("2 stalls".to_string()),
            weight: Some("22 kg".to_string()),
            ..product(
                6,
                "Market Stall Tent",
                "Compact tent for market stalls, small events and outdoor displays.",
                "https://images.unsplash.com/photo-1523987355523-c7b5b0dd90a7?w=800&q=80",
                "Tents",
                &["Market Tents", "Pop-up Tents"],
            )
        },
        product(
            7,
            "Truck Cover",
            "Reinforced PVC cover for open trucks and trailers with eyelets every 50 cm.",
            "/images/products/vehicle-covers/main.jpg",
            "Vehicle Covers",
            &["Truck Covers"],
        ),
        product(
            8,
            "Shade Net Canopy",
            "UV-stabilised shade net stretched over a galvanised frame.",
            "/images/products/shade-solutions/main.jpg",
            "Shade Solutions",
            &["Shade Nets"],
        ),
        product(
            9,
            "Pool Cover",
            "Heavy PVC cover keeping pools clean through the dry season.",
            "/images/products/covers/main.jpg",
            "Covers",
            &["Pool Covers"],
        ),
        Product {
            capacity: Some("12 people".to_string()),
            seasonality: Some("All seasons".to_string()),
            ..product(
                10,
                "Safari Bell Tent",
                "Canvas bell tent with a PVC groundsheet for lodges and glamping.",
                "/images/products/tents/bell-tent.jpg",
                "Tents",
                &["Camping Tents", "Glamping"],
            )
        },
    ];

    catalog.sort_by_key(|p| p.id);
    catalog
}
