//! Placeholder content for public page sections with no live data

use shared::models::{ContentBlock, FaqEntry, Highlight, Slide};

pub fn hero() -> ContentBlock {
    ContentBlock {
        image_url: Some("/assets/hero.jpg".into()),
        icon: None,
        large_text: Some("Baked fresh every morning".into()),
        small_text: Some("Neighbourhood bakery and coffee bar".into()),
        message: Some("Come in, grab a coffee and something warm from the oven.".into()),
    }
}

pub fn carousel() -> Vec<Slide> {
    let slide = |title: &str, description: &str, image: &str| Slide {
        product_id: None,
        title: title.into(),
        description: description.into(),
        image_url: image.into(),
        gallery_image_urls: Vec::new(),
        badge: None,
        category_name: None,
    };
    vec![
        slide(
            "Country sourdough",
            "Slow fermented for 36 hours.",
            "/assets/products/sourdough.jpg",
        ),
        slide(
            "Butter croissant",
            "Laminated by hand every morning.",
            "/assets/products/croissant.jpg",
        ),
        slide(
            "Seasonal fruit tart",
            "Whatever the market had this week.",
            "/assets/products/tart.jpg",
        ),
    ]
}

pub fn faqs() -> Vec<FaqEntry> {
    let entry = |question: &str, answer: &str| FaqEntry {
        question: question.into(),
        answer: answer.into(),
    };
    vec![
        entry(
            "Do you take custom cake orders?",
            "Yes, please order at least 48 hours ahead.",
        ),
        entry(
            "Do you have gluten-free options?",
            "We bake a small gluten-free selection daily, ask at the counter.",
        ),
        entry("Can I reserve a table?", "Seating is first come, first served."),
    ]
}

pub fn location() -> ContentBlock {
    ContentBlock {
        image_url: None,
        icon: Some("map-pin".into()),
        large_text: Some("Find us".into()),
        small_text: Some("Open daily 7:00 to 18:00".into()),
        message: Some("Ask us for directions at the counter or by phone.".into()),
    }
}

pub fn story() -> Vec<ContentBlock> {
    let chapter = |large: &str, small: &str| ContentBlock {
        large_text: Some(large.into()),
        small_text: Some(small.into()),
        ..Default::default()
    };
    vec![
        chapter("The beginning", "A single oven and a family recipe."),
        chapter("Growing up", "More ovens, the same recipes."),
        chapter("Today", "Still baking everything on site, every day."),
    ]
}

pub fn highlights() -> Vec<Highlight> {
    let highlight = |image: &str, message: &str, icon: &str| Highlight {
        image_url: image.into(),
        message: message.into(),
        icon: icon.into(),
    };
    vec![
        highlight("/assets/highlights/oven.jpg", "Baked on site", "flame"),
        highlight("/assets/highlights/beans.jpg", "Locally roasted coffee", "coffee"),
        highlight("/assets/highlights/flour.jpg", "Organic flour", "leaf"),
    ]
}
