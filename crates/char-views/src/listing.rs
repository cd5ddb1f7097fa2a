//! Project list page: search and pagination over the project list view.

use char_core::entities::{OneOrMany, ProjectListing};
use char_core::serde_helpers::non_blank;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::mapping::{NO_LOCATION, UNNAMED_PROJECT, capitalize, format_start_date};

/// Default cards per page.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// What the list page was asked for. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub id: String,
    pub name: String,
    pub location: String,
    pub start_date: String,
    pub feedstock_types: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListPage {
    pub items: Vec<ProjectCard>,
    pub search: Option<String>,
    pub page: u32,
    pub page_size: u32,
    pub total: usize,
    pub total_pages: u32,
}

/// Filter, sort by name, and slice one page of project cards.
///
/// Every whitespace-separated search term must occur (ignoring case) in the
/// name, location, or a feedstock type. Out-of-range pages are clamped.
#[must_use]
pub fn build_project_list(listings: &[ProjectListing], query: &ListQuery) -> ProjectListPage {
    let search = non_blank(query.search.as_deref()).map(str::to_lowercase);
    let terms = search
        .as_deref()
        .map(|s| s.split_whitespace().collect::<Vec<_>>())
        .unwrap_or_default();

    let mut cards = listings
        .iter()
        .map(project_card)
        .filter(|card| terms.iter().all(|term| card_matches(card, term)))
        .collect::<Vec<_>>();
    cards.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.id.cmp(&b.id))
    });

    let page_size = query.page_size.max(1);
    let total = cards.len();
    let total_pages = u32::try_from(total.div_ceil(page_size as usize))
        .unwrap_or(u32::MAX)
        .max(1);
    let page = query.page.clamp(1, total_pages);
    let start = (page - 1) as usize * page_size as usize;

    ProjectListPage {
        items: cards.into_iter().skip(start).take(page_size as usize).collect(),
        search,
        page,
        page_size,
        total,
        total_pages,
    }
}

fn project_card(listing: &ProjectListing) -> ProjectCard {
    ProjectCard {
        id: listing.project_id.trim().to_string(),
        name: non_blank(listing.project_name.as_deref())
            .unwrap_or(UNNAMED_PROJECT)
            .to_string(),
        location: non_blank(listing.location.as_deref())
            .unwrap_or(NO_LOCATION)
            .to_string(),
        start_date: format_start_date(listing.start_date.as_deref()),
        feedstock_types: listing
            .feedstock_type
            .as_ref()
            .map(OneOrMany::as_slice)
            .unwrap_or_default()
            .iter()
            .filter_map(|entry| non_blank(Some(entry.as_str())))
            .map(capitalize)
            .collect(),
    }
}

fn card_matches(card: &ProjectCard, term: &str) -> bool {
    card.name.to_lowercase().contains(term)
        || card.location.to_lowercase().contains(term)
        || card
            .feedstock_types
            .iter()
            .any(|f| f.to_lowercase().contains(term))
}
