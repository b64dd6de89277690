//! Admin list state
//!
//! A list is fetched once, then kept in step with the server by splicing in
//! the records each create/update/delete call returns. There is no refetch
//! and no reconciliation: if another admin edits the same records the local
//! copy stays stale until the next [`ListState::load`].

use shared::models::{CategoryWithCounts, Faq, ImageMessage, MenuItem, MiscContent, Product};

/// A record the admin list can key and search
pub trait Searchable {
    fn id(&self) -> &str;

    /// Text fields matched by [`ListState::search`]
    fn search_fields(&self) -> Vec<&str>;
}

/// Locally held collection for one admin screen
#[derive(Debug, Clone)]
pub struct ListState<T> {
    items: Vec<T>,
    loaded: bool,
    error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loaded: false,
            error: None,
        }
    }
}

impl<T: Searchable> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything with a fresh fetch
    pub fn load(&mut self, items: Vec<T>) {
        self.items = items;
        self.loaded = true;
        self.error = None;
    }

    /// Record a failed fetch; items already held are kept
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Newly created record goes first, matching newest-first listings
    pub fn insert(&mut self, item: T) {
        self.items.insert(0, item);
    }

    /// Swap in an updated record; `false` if the id is not held
    pub fn replace(&mut self, item: T) -> bool {
        match self.items.iter().position(|i| i.id() == item.id()) {
            Some(index) => {
                self.items[index] = item;
                true
            }
            None => false,
        }
    }

    /// Drop a deleted record
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.items.iter().position(|i| i.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Case-insensitive substring search; a blank query returns everything
    pub fn search(&self, query: &str) -> Vec<&T> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.iter().collect();
        }
        self.items
            .iter()
            .filter(|item| {
                item.search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }
}

impl Searchable for CategoryWithCounts {
    fn id(&self) -> &str {
        &self.category.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.category.name.as_str()]
    }
}

impl Searchable for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.category.as_ref().map(|c| c.name.as_str()));
        fields
    }
}

impl Searchable for MenuItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.description.as_deref());
        fields
    }
}

impl Searchable for Faq {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.question.as_str(), self.answer.as_str()]
    }
}

impl Searchable for ImageMessage {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.message.as_str(), self.icon.as_str()]
    }
}

impl Searchable for MiscContent {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        [
            Some(self.section.as_str()),
            self.large_text.as_deref(),
            self.small_text.as_deref(),
            self.message.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
