//! Content Catalog
//!
//! Build-time content for every page. Nothing here changes at runtime.

use std::collections::HashSet;

use crate::config::Page;
use crate::models::{CategoryIcon, CategorySection, DisplayItem, Price};

const fn item(
    name: &'static str,
    description: &'static str,
    cents: u32,
    category: &'static str,
    image: &'static str,
) -> DisplayItem {
    DisplayItem {
        name,
        description,
        price: Price::cents(cents),
        category,
        image,
    }
}

// ========================
// Home
// ========================

/// The Haren collection shown on the home page
pub const HOME_COLLECTION: &[DisplayItem] = &[
    item(
        "The Haren Hazelnut",
        "Valrhona praline, Piedmont hazelnuts, gold leaf.",
        950,
        "Signature",
        "https://images.unsplash.com/photo-1606312619070-d48b4c652a52?q=80&w=2670&auto=format&fit=crop",
    ),
    item(
        "Tarte Citron Meringuée",
        "Sicilian lemon curd, burnt Italian meringue.",
        800,
        "Patisserie",
        "https://images.unsplash.com/photo-1519915028121-7d3463d20b13?q=80&w=2568&auto=format&fit=crop",
    ),
    item(
        "Groninger Koek (Elevated)",
        "Traditional spiced cake, ginger confit, pearl sugar.",
        650,
        "Local Heritage",
        "https://images.unsplash.com/photo-1645805740318-31bb7604ffd9?q=80&w=1170&auto=format&fit=crop",
    ),
    item(
        "Pain au Chocolat Bicolore",
        "Double fermented dough, dark chocolate baton.",
        450,
        "Viennoiserie",
        "https://images.unsplash.com/photo-1530610476181-d83430b64dcd?q=80&w=2670&auto=format&fit=crop",
    ),
];

pub struct StorySlide {
    pub title: [&'static str; 2],
    pub body: &'static str,
    pub image: Option<&'static str>,
    pub alt: &'static str,
}

/// Panels of the pinned horizontal story
pub const STORY_SLIDES: &[StorySlide] = &[
    StorySlide {
        title: ["Two Worlds", "Colliding"],
        body: "It began with a shared obsession for perfection. One brought the rigorous discipline of \
               Dutch design; the other, the chaotic beauty of French pastry arts.",
        image: Some("https://images.unsplash.com/photo-1601205741712-b261aff33a7d?q=80&w=2582&auto=format&fit=crop"),
        alt: "Baker hands",
    },
    StorySlide {
        title: ["Not Just", "Butter."],
        body: "\"We use Groningen's cream, famous for its richness, and pair it with single-origin Valrhona \
               chocolate. It is the taste of the Netherlands, dressed in Paris fashion.\"",
        image: Some("https://images.unsplash.com/photo-1579372786545-d24232daf58c?q=80&w=2670&auto=format&fit=crop"),
        alt: "Flour dust",
    },
    StorySlide {
        title: ["The Atelier", ""],
        body: "Located at Rijksstraatweg, Haren.",
        image: None,
        alt: "",
    },
];

// ========================
// Menu
// ========================

const VIENNOISERIE: &[DisplayItem] = &[
    item("Croissant au Beurre", "Isigny AOP Butter, 24 layers.", 350, "viennoiserie",
        "https://images.unsplash.com/photo-1555507036-ab1f4038808a?q=80&w=2526&auto=format&fit=crop"),
    item("Pain au Chocolat", "Valrhona dark chocolate batons.", 420, "viennoiserie",
        "https://images.pexels.com/photos/7688286/pexels-photo-7688286.jpeg"),
    item("Almond Croissant", "Double baked, frangipane cream.", 550, "viennoiserie",
        "https://images.unsplash.com/photo-1509440159596-0249088772ff?q=80&w=2672&auto=format&fit=crop"),
    item("Cruffin Salted Caramel", "Croissant-muffin hybrid.", 600, "viennoiserie",
        "https://images.unsplash.com/photo-1627308595229-7830a5c91f9f?q=80&w=2574&auto=format&fit=crop"),
];

const BOULANGERIE: &[DisplayItem] = &[
    item("Baguette Tradition", "The Paris classic. 24h ferment.", 250, "boulangerie",
        "https://images.pexels.com/photos/461060/pexels-photo-461060.jpeg"),
    item("Pain de Campagne", "Rye & whole wheat sourdough.", 650, "boulangerie",
        "https://images.unsplash.com/photo-1509440159596-0249088772ff?q=80&w=2672&auto=format&fit=crop"),
    item("Focaccia Rosemary", "Olive oil, sea salt, fresh herbs.", 550, "boulangerie",
        "https://images.pexels.com/photos/209143/pexels-photo-209143.jpeg"),
    item("Olive & Thyme Loaf", "Kalamata olives, fresh thyme.", 700, "boulangerie",
        "https://images.pexels.com/photos/209143/pexels-photo-209143.jpeg"),
];

const PATISSERIE: &[DisplayItem] = &[
    item("Paris-Brest", "Choux pastry, praline mousseline.", 900, "patisserie",
        "https://images.pexels.com/photos/267308/pexels-photo-267308.jpeg"),
    item("Opera Cake", "Coffee soaked sponge, ganache.", 950, "patisserie",
        "https://images.unsplash.com/photo-1571115177098-24ec42ed204d?q=80&w=2574&auto=format&fit=crop"),
    item("Tarte Tatin", "Caramelized apples, vanilla cream.", 850, "patisserie",
        "https://images.unsplash.com/photo-1519915028121-7d3463d20b13?q=80&w=2568&auto=format&fit=crop"),
    item("Eclair Pistachio", "Bronte pistachio, white chocolate.", 750, "patisserie",
        "https://images.pexels.com/photos/267308/pexels-photo-267308.jpeg"),
];

const COFFEE: &[DisplayItem] = &[
    item("Flat White", "Double shot, micro-foam.", 450, "coffee",
        "https://images.pexels.com/photos/302901/pexels-photo-302901.jpeg"),
    item("Espresso Tonic", "Double shot, fever tree tonic.", 500, "coffee",
        "https://images.pexels.com/photos/2659387/pexels-photo-2659387.jpeg"),
    item("V60 Pour Over", "Single origin Ethiopian beans.", 650, "coffee",
        "https://images.pexels.com/photos/2659387/pexels-photo-2659387.jpeg"),
    item("Matcha Latte", "Ceremonial grade, oat milk.", 550, "coffee",
        "https://images.unsplash.com/photo-1515823064-d6e0c04616a7?q=80&w=2671&auto=format&fit=crop"),
];

/// Menu page sections, in page order
pub const MENU_CATEGORIES: &[CategorySection] = &[
    CategorySection {
        id: "viennoiserie",
        label: "Viennoiserie",
        subtitle: "The Art of Lamination",
        icon: CategoryIcon::Croissant,
        items: VIENNOISERIE,
    },
    CategorySection {
        id: "boulangerie",
        label: "Boulangerie",
        subtitle: "Sourdough & Ancient Grains",
        icon: CategoryIcon::Wheat,
        items: BOULANGERIE,
    },
    CategorySection {
        id: "patisserie",
        label: "Pâtisserie",
        subtitle: "Refined Desserts",
        icon: CategoryIcon::Cake,
        items: PATISSERIE,
    },
    CategorySection {
        id: "coffee",
        label: "Café",
        subtitle: "Specialty Roasts",
        icon: CategoryIcon::Coffee,
        items: COFFEE,
    },
];

// ========================
// About / Contact
// ========================

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub image: &'static str,
}

pub const OWNERS: &[Profile] = &[
    Profile {
        name: "Kleo",
        role: "Head Chocolatier",
        quote: "\"Chocolate is engineering. The temperature, the snap, the crystal structure must be precise. \
                Groningen taught me that quality speaks louder than decoration.\"",
        image: "https://images.unsplash.com/photo-1583394293214-28ded15ee548?q=80&w=2680&auto=format&fit=crop",
    },
    Profile {
        name: "Jordane",
        role: "Executive Pâtissier",
        quote: "\"I brought my grandmother's sourdough starter from Lyon. Bread is alive; you cannot force it. \
                You must listen to the dough.\"",
        image: "https://images.unsplash.com/photo-1583394293214-28ded15ee548?q=80&w=2680&auto=format&fit=crop",
    },
];

/// `(days, hours)`; `None` means closed
pub const OPENING_HOURS: &[(&str, Option<&str>)] = &[
    ("Wed - Fri", Some("08:00 - 17:00")),
    ("Saturday", Some("08:00 - 16:00")),
    ("Sunday", Some("09:00 - 14:00")),
    ("Mon - Tue", None),
];

pub const ADDRESS_LINES: [&str; 3] = ["Rijksstraatweg 220", "9752 Haren", "The Netherlands"];
pub const GENERAL_EMAIL: &str = "info@orphee.nl";
pub const WHOLESALE_EMAIL: &str = "b2b@orphee.nl";
pub const ATELIER_PHONE: &str = "+31 50 123 4567";
pub const COPYRIGHT: &str = "© 2026 Orphée Pâtisserie • Holland";

/// Overlay navigation: `(href, label)`
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "Story"),
    ("/menu", "Menu Collection"),
    ("/contact", "Contact"),
];

/// Document title and meta description
pub fn page_meta(page: Page) -> (&'static str, &'static str) {
    match page {
        Page::Home => ("Orphée Pâtisserie | Jordane & Kleo", "Artisan French Bakery in Haren"),
        Page::About => ("Our Story | Orphée Pâtisserie", "The architects of taste behind Orphée Haren"),
        Page::Menu => ("La Carte | Orphée Pâtisserie", "Viennoiserie, boulangerie, pâtisserie and specialty coffee"),
        Page::Contact => ("Contact | Orphée Pâtisserie", "Weddings, wholesale and general inquiries"),
    }
}

/// Returns the first id that appears twice, if any
pub fn validate_sections(sections: &[CategorySection]) -> Result<(), &'static str> {
    let mut seen = HashSet::new();
    for section in sections {
        if !seen.insert(section.id) {
            return Err(section.id);
        }
    }
    Ok(())
}
