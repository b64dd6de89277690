//! Composed public page (`GET /api/site`)
//!
//! Every section carries a `fallback` flag telling the frontend whether it
//! holds live data or the built-in placeholder content.

use serde::{Deserialize, Serialize};

use super::faq::Faq;
use super::image_message::ImageMessage;
use super::misc_content::MiscContent;
use super::product::Product;
use super::review::ReviewSummary;

/// A page section and whether it was filled from fallback content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section<T> {
    pub fallback: bool,
    pub content: T,
}

impl<T> Section<T> {
    pub fn live(content: T) -> Self {
        Self {
            fallback: false,
            content,
        }
    }

    pub fn fallback(content: T) -> Self {
        Self {
            fallback: true,
            content,
        }
    }
}

/// Text/image block backed by a misc content record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    pub image_url: Option<String>,
    pub icon: Option<String>,
    pub large_text: Option<String>,
    pub small_text: Option<String>,
    pub message: Option<String>,
}

impl From<MiscContent> for ContentBlock {
    fn from(row: MiscContent) -> Self {
        Self {
            image_url: row.image_url,
            icon: row.icon,
            large_text: row.large_text,
            small_text: row.small_text,
            message: row.message,
        }
    }
}

/// Product badge as rendered on a carousel slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub text: String,
    pub color: Option<String>,
    pub icon: Option<String>,
}

/// Product carousel slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub product_id: Option<String>,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub gallery_image_urls: Vec<String>,
    pub badge: Option<Badge>,
    pub category_name: Option<String>,
}

impl From<Product> for Slide {
    fn from(p: Product) -> Self {
        let badge = p.badge_text.map(|text| Badge {
            text,
            color: p.badge_color,
            icon: p.badge_icon,
        });
        Self {
            product_id: Some(p.id),
            title: p.title,
            description: p.description,
            image_url: p.main_image_url,
            gallery_image_urls: p.gallery_image_urls,
            badge,
            category_name: p.category.map(|c| c.name),
        }
    }
}

/// Question/answer pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl From<Faq> for FaqEntry {
    fn from(f: Faq) -> Self {
        Self {
            question: f.question,
            answer: f.answer,
        }
    }
}

/// Image + message highlight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub image_url: String,
    pub message: String,
    pub icon: String,
}

impl From<ImageMessage> for Highlight {
    fn from(m: ImageMessage) -> Self {
        Self {
            image_url: m.image_url,
            message: m.message,
            icon: m.icon,
        }
    }
}

/// Everything the public page renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitePage {
    pub hero: Section<ContentBlock>,
    pub carousel: Section<Vec<Slide>>,
    pub faqs: Section<Vec<FaqEntry>>,
    pub location: Section<ContentBlock>,
    pub story: Section<Vec<ContentBlock>>,
    pub highlights: Section<Vec<Highlight>>,
    pub reviews: Section<ReviewSummary>,
}

impl SitePage {
    /// Names of the sections served from fallback content
    pub fn fallback_sections(&self) -> Vec<&'static str> {
        [
            ("hero", self.hero.fallback),
            ("carousel", self.carousel.fallback),
            ("faqs", self.faqs.fallback),
            ("location", self.location.fallback),
            ("story", self.story.fallback),
            ("highlights", self.highlights.fallback),
            ("reviews", self.reviews.fallback),
        ]
        .into_iter()
        .filter_map(|(name, fallback)| fallback.then_some(name))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryRef;

    #[test]
    fn test_slide_from_product() {
        let product = Product {
            id: "p1".into(),
            title: "Croissant".into(),
            description: "Butter".into(),
            main_image_url: "https://cdn.example.com/c.jpg".into(),
            gallery_image_urls: vec![],
            badge_text: Some("New".into()),
            badge_color: Some("#f00".into()),
            badge_icon: None,
            category_id: Some("c1".into()),
            category: Some(CategoryRef {
                id: "c1".into(),
                name: "Pastry".into(),
            }),
            created_at: 0,
        };
        let slide = Slide::from(product);
        assert_eq!(slide.image_url, "https://cdn.example.com/c.jpg");
        assert_eq!(slide.badge.unwrap().text, "New");
        assert_eq!(slide.category_name.as_deref(), Some("Pastry"));
    }

    #[test]
    fn test_slide_without_badge_text_has_no_badge() {
        let product = Product {
            id: "p1".into(),
            title: "Bagel".into(),
            description: "Plain".into(),
            main_image_url: "https://cdn.example.com/b.jpg".into(),
            gallery_image_urls: vec![],
            badge_text: None,
            badge_color: Some("#0f0".into()),
            badge_icon: None,
            category_id: None,
            category: None,
            created_at: 0,
        };
        assert!(Slide::from(product).badge.is_none());
    }
}
