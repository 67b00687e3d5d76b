use serde::{Deserialize, Serialize};

use crate::action::{EditorAction, ItemPatch, SectionData, SectionId, SectionItem};
use crate::portfolio::Portfolio;
use crate::template::TEMPLATE_CATALOG;

/// Metadata for a stored portfolio slot. The list is part of the state shape
/// but nothing populates it yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedPortfolio {
    pub id: String,
    pub name: String,
    pub last_edited: String,
}

/// Root of the store. Owned exclusively by the store handle and replaced
/// wholesale on every action; readers always observe a complete snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorState {
    pub portfolio: Portfolio,
    /// Nullable foreign key into the template catalog. May reference an id
    /// with no catalog entry; resolution degrades to a fallback on read.
    pub selected_template_id: Option<String>,
    pub modal_open: bool,
    pub current_section: Option<SectionId>,
    /// True iff the portfolio document diverged from its last loaded or
    /// saved snapshot. UI flag changes never touch this.
    pub dirty: bool,
    pub preview_mode: bool,
    pub saved_portfolios: Vec<SavedPortfolio>,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            portfolio: Portfolio::default(),
            selected_template_id: TEMPLATE_CATALOG.first().map(|entry| entry.id.to_string()),
            modal_open: false,
            current_section: None,
            dirty: false,
            preview_mode: false,
            saved_portfolios: Vec::new(),
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Pure transition function. Total: every action yields a fresh state and
/// the input is never mutated.
pub fn reduce(state: &EditorState, action: &EditorAction) -> EditorState {
    match action {
        EditorAction::SelectTemplate { template_id } => EditorState {
            selected_template_id: Some(template_id.clone()),
            dirty: true,
            ..state.clone()
        },
        EditorAction::ReplaceSection { data } => {
            let mut next = state.clone();
            replace_section(&mut next.portfolio, data);
            next.dirty = true;
            next
        }
        EditorAction::UpdateItem {
            section,
            item_id,
            patch,
        } => {
            let mut next = state.clone();
            update_item(&mut next.portfolio, *section, item_id, patch);
            next.dirty = true;
            next
        }
        EditorAction::AddItem { section, item } => {
            let mut next = state.clone();
            add_item(&mut next.portfolio, *section, item);
            next.dirty = true;
            next
        }
        EditorAction::RemoveItem { section, item_id } => {
            let mut next = state.clone();
            remove_item(&mut next.portfolio, *section, item_id);
            next.dirty = true;
            next
        }
        EditorAction::ResetPortfolio => EditorState {
            portfolio: Portfolio::default(),
            dirty: true,
            ..state.clone()
        },
        EditorAction::LoadPortfolio { portfolio } => EditorState {
            portfolio: portfolio.clone(),
            dirty: false,
            ..state.clone()
        },
        EditorAction::ToggleModal { open, section } => {
            let mut next = state.clone();
            next.modal_open = *open;
            if let Some(section) = section {
                next.current_section = *section;
            }
            next
        }
        EditorAction::TogglePreviewMode { preview } => EditorState {
            preview_mode: *preview,
            ..state.clone()
        },
    }
}

fn replace_section(portfolio: &mut Portfolio, data: &SectionData) {
    match data {
        SectionData::Personal(personal) => portfolio.personal = personal.clone(),
        SectionData::Experience(items) => portfolio.experience = items.clone(),
        SectionData::Education(items) => portfolio.education = items.clone(),
        SectionData::Skills(items) => portfolio.skills = items.clone(),
        SectionData::Projects(items) => portfolio.projects = items.clone(),
        SectionData::Testimonials(items) => portfolio.testimonials = items.clone(),
        SectionData::Social(items) => portfolio.social = items.clone(),
    }
}

/// Merges the patch into every item whose id matches. No match, or a patch
/// aimed at a different section, leaves the document untouched.
fn update_item(portfolio: &mut Portfolio, section: SectionId, item_id: &str, patch: &ItemPatch) {
    if patch.section() != section {
        return;
    }
    match patch {
        ItemPatch::Experience(patch) => {
            for item in portfolio.experience.iter_mut().filter(|item| item.id == item_id) {
                patch.apply_to(item);
            }
        }
        ItemPatch::Education(patch) => {
            for item in portfolio.education.iter_mut().filter(|item| item.id == item_id) {
                patch.apply_to(item);
            }
        }
        ItemPatch::Skill(patch) => {
            for item in portfolio.skills.iter_mut().filter(|item| item.id == item_id) {
                patch.apply_to(item);
            }
        }
        ItemPatch::Project(patch) => {
            for item in portfolio.projects.iter_mut().filter(|item| item.id == item_id) {
                patch.apply_to(item);
            }
        }
        ItemPatch::Testimonial(patch) => {
            for item in portfolio.testimonials.iter_mut().filter(|item| item.id == item_id) {
                patch.apply_to(item);
            }
        }
        ItemPatch::Social(patch) => {
            for item in portfolio.social.iter_mut().filter(|item| item.id == item_id) {
                patch.apply_to(item);
            }
        }
    }
}

/// Appends at the end, preserving existing order. An item tagged for a
/// different section than the action names is dropped silently.
fn add_item(portfolio: &mut Portfolio, section: SectionId, item: &SectionItem) {
    if item.section() != section {
        return;
    }
    match item {
        SectionItem::Experience(item) => portfolio.experience.push(item.clone()),
        SectionItem::Education(item) => portfolio.education.push(item.clone()),
        SectionItem::Skill(item) => portfolio.skills.push(item.clone()),
        SectionItem::Project(item) => portfolio.projects.push(item.clone()),
        SectionItem::Testimonial(item) => portfolio.testimonials.push(item.clone()),
        SectionItem::Social(item) => portfolio.social.push(item.clone()),
    }
}

/// Removes every item with a matching id (zero or more).
fn remove_item(portfolio: &mut Portfolio, section: SectionId, item_id: &str) {
    match section {
        SectionId::Personal => {}
        SectionId::Experience => portfolio.experience.retain(|item| item.id != item_id),
        SectionId::Education => portfolio.education.retain(|item| item.id != item_id),
        SectionId::Skills => portfolio.skills.retain(|item| item.id != item_id),
        SectionId::Projects => portfolio.projects.retain(|item| item.id != item_id),
        SectionId::Testimonials => portfolio.testimonials.retain(|item| item.id != item_id),
        SectionId::Social => portfolio.social.retain(|item| item.id != item_id),
    }
}
