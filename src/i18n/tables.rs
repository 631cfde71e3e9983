pub type Table = &'static [(&'static str, &'static str)];

pub fn lookup(table: Table, key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

pub const DEFAULTS: Table = &[
    ("products.title", "Premium Outdoor Tents"),
    (
        "products.subtitle",
        "Explore our range of high-quality tents for camping, events, and outdoor adventures",
    ),
    ("products.viewDetails", "View Details"),
    ("products.requestQuote", "Request Quote"),
    ("products.ourProducts", "Our Products"),
    ("products.leadingManufacturer", "Leading manufacturer of PVC products"),
    (
        "products.professionalGrade",
        "Professional-grade tarpaulins, tents, and custom PVC products designed to withstand the African climate",
    ),
    ("product.photos", "photos"),
];

pub const EN: Table = &[
    ("nav.home", "Home"),
    ("nav.tents", "Tents"),
    ("nav.whyUs", "Why Us"),
    ("nav.location", "Find Us"),
    ("nav.contact", "Contact"),
    ("hero.title", "TENDAS DE MOZAMBIQUE"),
    (
        "hero.subtitle",
        "HIGH QUALITY TARPAULINS, TENTS AND MUCH MORE, MADE FOR THE AFRICAN SUN",
    ),
    ("hero.cta", "Explore Tents"),
    ("products.title", "Premium Outdoor Tents"),
    (
        "products.subtitle",
        "Explore our range of high-quality tents for camping, events, and outdoor adventures",
    ),
    ("products.downloadCatalog", "Download Tent Catalog"),
    ("products.viewDetails", "View Details"),
    ("products.requestQuote", "Request Quote"),
    ("contact.title", "Request a Tent Quote"),
    ("footer.allRightsReserved", "All rights reserved."),
];

pub const PT: Table = &[
    ("nav.home", "Início"),
    ("nav.tents", "Tendas"),
    ("nav.whyUs", "Porquê Nós"),
    ("nav.location", "Encontre-nos"),
    ("nav.contact", "Contacto"),
    ("hero.title", "TENDAS DE MOÇAMBIQUE"),
    (
        "hero.subtitle",
        "LONAS, TENDAS E MUITO MAIS DE ALTA QUALIDADE, FEITAS PARA O SOL AFRICANO",
    ),
    ("hero.cta", "Explorar Tendas"),
    ("products.title", "Tendas Premium para Exterior"),
    (
        "products.subtitle",
        "Explore a nossa gama de tendas de alta qualidade para campismo, eventos e aventuras ao ar livre",
    ),
    ("products.downloadCatalog", "Descarregar Catálogo de Tendas"),
    ("products.viewDetails", "Ver Detalhes"),
    ("products.requestQuote", "Pedir Orçamento"),
    ("products.ourProducts", "Os Nossos Produtos"),
    ("contact.title", "Peça um Orçamento"),
    ("footer.allRightsReserved", "Todos os direitos reservados."),
];
