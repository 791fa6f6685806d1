//! Product name word lists.

use rand::Rng;

const PRODUCT_ADJECTIVES: &[&str] = &[
    "Small",
    "Ergonomic",
    "Rustic",
    "Intelligent",
    "Gorgeous",
    "Incredible",
    "Fantastic",
    "Practical",
    "Sleek",
    "Awesome",
    "Generic",
    "Handcrafted",
    "Handmade",
    "Licensed",
    "Refined",
    "Unbranded",
    "Tasty",
    "Elegant",
    "Modern",
    "Recycled",
];

const PRODUCT_MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal", "Soft",
    "Fresh", "Frozen", "Bronze", "Silk", "Marble", "Ceramic",
];

const PRODUCT_NOUNS: &[&str] = &[
    "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants", "Shirt",
    "Table", "Shoes", "Hat", "Towels", "Soap", "Tuna", "Chicken", "Fish", "Cheese", "Bacon",
    "Pizza", "Salad", "Sausages", "Chips",
];

/// Adjective, material and noun, e.g. "Sleek Bronze Keyboard"
pub fn product_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adj = PRODUCT_ADJECTIVES[rng.random_range(0..PRODUCT_ADJECTIVES.len())];
    let material = PRODUCT_MATERIALS[rng.random_range(0..PRODUCT_MATERIALS.len())];
    let noun = PRODUCT_NOUNS[rng.random_range(0..PRODUCT_NOUNS.len())];
    format!("{} {} {}", adj, material, noun)
}
