//! Public page composition
//!
//! Sections are fetched concurrently and fall back independently: a failed
//! or empty query replaces only its own section.

use std::fmt::Display;

use shared::models::{
    ContentBlock, FaqEntry, FaqFilter, Highlight, MiscContent, ProductFilter, Section, SitePage,
    Slide, sections,
};

use super::fallback;
use crate::core::ServerState;
use crate::db::repository::{RepoResult, faq, image_message, misc_content, product};

/// Products shown in the carousel
const CAROUSEL_LIMIT: usize = 8;

/// Highlights shown on the page
const HIGHLIGHT_LIMIT: usize = 6;

pub async fn compose(state: &ServerState) -> SitePage {
    let pool = state.pool();
    let product_filter = ProductFilter::default();
    let faq_filter = FaqFilter::default();
    let (hero, products, faqs, location, story, highlights, reviews) = tokio::join!(
        misc_content::find_by_section(pool, sections::HERO),
        product::find_all(pool, &product_filter),
        faq::find_all(pool, &faq_filter),
        misc_content::find_by_section(pool, sections::LOCATION),
        misc_content::find_by_section(pool, sections::OUR_STORY),
        image_message::find_all(pool),
        state.reviews.summary(),
    );

    let reviews = if reviews.is_sample() {
        Section::fallback(reviews)
    } else {
        Section::live(reviews)
    };

    SitePage {
        hero: block_section("hero", hero, fallback::hero),
        carousel: list_section(
            "carousel",
            products.map(|p| p.into_iter().take(CAROUSEL_LIMIT).map(Slide::from).collect()),
            fallback::carousel,
        ),
        faqs: list_section(
            "faqs",
            faqs.map(|f| f.into_iter().map(FaqEntry::from).collect()),
            fallback::faqs,
        ),
        location: block_section("location", location, fallback::location),
        story: list_section(
            "story",
            story.map(|s| s.into_iter().map(ContentBlock::from).collect()),
            fallback::story,
        ),
        highlights: list_section(
            "highlights",
            highlights.map(|h| {
                h.into_iter()
                    .take(HIGHLIGHT_LIMIT)
                    .map(Highlight::from)
                    .collect()
            }),
            fallback::highlights,
        ),
        reviews,
    }
}

/// Live list, or fallback when the query failed or returned nothing
fn list_section<T>(
    name: &str,
    result: RepoResult<Vec<T>>,
    fallback: fn() -> Vec<T>,
) -> Section<Vec<T>> {
    match result {
        Ok(items) if !items.is_empty() => Section::live(items),
        Ok(_) => {
            tracing::debug!(section = name, "No content, using fallback");
            Section::fallback(fallback())
        }
        Err(e) => {
            warn_fallback(name, e);
            Section::fallback(fallback())
        }
    }
}

/// First record of a misc content section
fn block_section(
    name: &str,
    result: RepoResult<Vec<MiscContent>>,
    fallback: fn() -> ContentBlock,
) -> Section<ContentBlock> {
    match result {
        Ok(rows) => match rows.into_iter().next() {
            Some(row) => Section::live(row.into()),
            None => {
                tracing::debug!(section = name, "No content, using fallback");
                Section::fallback(fallback())
            }
        },
        Err(e) => {
            warn_fallback(name, e);
            Section::fallback(fallback())
        }
    }
}

fn warn_fallback(name: &str, error: impl Display) {
    tracing::warn!(section = name, error = %error, "Section query failed, using fallback");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::RepoError;

    #[test]
    fn test_list_section_falls_back_on_empty_and_error() {
        let empty: RepoResult<Vec<FaqEntry>> = Ok(vec![]);
        let section = list_section("faqs", empty, fallback::faqs);
        assert!(section.fallback);
        assert_eq!(section.content, fallback::faqs());

        let failed: RepoResult<Vec<FaqEntry>> = Err(RepoError::Database("gone".into()));
        assert!(list_section("faqs", failed, fallback::faqs).fallback);
    }

    #[test]
    fn test_list_section_keeps_live_rows() {
        let rows: RepoResult<Vec<FaqEntry>> = Ok(vec![FaqEntry {
            question: "Q?".into(),
            answer: "A".into(),
        }]);
        let section = list_section("faqs", rows, fallback::faqs);
        assert!(!section.fallback);
        assert_eq!(section.content.len(), 1);
    }
}
