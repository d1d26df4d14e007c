use crate::core::catalog::{all_tags, Project};
use fnv::FnvHashSet;

/// Tag selection and search text driving the project gallery.
#[derive(Clone, Debug, Default)]
pub struct FilterState {
    pub active_tags: FnvHashSet<String>,
    pub search_text: String,
}

impl FilterState {
    /// Add the tag if absent, remove it if present. Returns whether it is now active.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.active_tags.remove(tag) {
            false
        } else {
            self.active_tags.insert(tag.to_string());
            true
        }
    }

    pub fn is_active(&self, tag: &str) -> bool {
        self.active_tags.contains(tag)
    }

    pub fn set_search(&mut self, text: &str) {
        self.search_text.clear();
        self.search_text.push_str(text);
    }

    pub fn apply<'a>(&self, catalog: &'a [Project]) -> Vec<&'a Project> {
        filter_projects(catalog, &self.active_tags, &self.search_text)
    }
}

/// True when every active tag is carried by the project (exact, case-sensitive).
#[inline]
pub fn matches_tags<S: AsRef<str>>(project: &Project, active_tags: impl IntoIterator<Item = S>) -> bool {
    active_tags
        .into_iter()
        .all(|t| project.has_tag(t.as_ref()))
}

/// True when `search` is empty or appears in the title or description, ignoring case.
#[inline]
pub fn matches_search(project: &Project, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    project.title.to_lowercase().contains(&needle)
        || project.description.to_lowercase().contains(&needle)
}

/// Projects passing both the tag filter and the search, in catalog order.
pub fn filter_projects<'a, S: AsRef<str>>(
    catalog: &'a [Project],
    active_tags: &FnvHashSet<S>,
    search: &str,
) -> Vec<&'a Project>
where
    S: std::hash::Hash + Eq,
{
    catalog
        .iter()
        .filter(|p| matches_tags(p, active_tags.iter()) && matches_search(p, search))
        .collect()
}

/// Gallery view state: the catalog, its tag list, the filter and the
/// highlighted card (an index into the filtered list).
#[derive(Clone, Debug)]
pub struct GalleryState {
    catalog: Vec<Project>,
    tags: Vec<&'static str>,
    filter: FilterState,
    active_card: usize,
}

impl GalleryState {
    pub fn new(catalog: Vec<Project>) -> Self {
        let tags = all_tags(&catalog);
        Self {
            catalog,
            tags,
            filter: FilterState::default(),
            active_card: 0,
        }
    }

    pub fn tags(&self) -> &[&'static str] {
        &self.tags
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn active_card(&self) -> usize {
        self.active_card
    }

    pub fn visible(&self) -> Vec<&Project> {
        self.filter.apply(&self.catalog)
    }

    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        self.filter.toggle_tag(tag)
    }

    pub fn set_search(&mut self, text: &str) {
        self.filter.set_search(text);
    }

    /// Highlight a card; indexes past the filtered list are ignored.
    pub fn set_active(&mut self, index: usize) -> bool {
        if index < self.visible().len() {
            self.active_card = index;
            true
        } else {
            false
        }
    }
}
