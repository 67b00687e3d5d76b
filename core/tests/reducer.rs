use foliolab_core::{
    reduce, template_by_id, EditorAction, EditorState, ItemPatch, Portfolio, SectionData,
    SectionId, SectionItem, SkillItem, SkillPatch, SocialLink, DEFAULT_TEMPLATE_ID,
};

fn skill(id: &str, name: &str, level: u8, category: &str) -> SkillItem {
    SkillItem {
        id: id.to_string(),
        name: name.to_string(),
        level,
        category: category.to_string(),
    }
}

fn content_actions() -> Vec<EditorAction> {
    vec![
        EditorAction::SelectTemplate {
            template_id: "minimal-1".to_string(),
        },
        EditorAction::ReplaceSection {
            data: SectionData::Skills(vec![skill("9", "Rust", 5, "Development")]),
        },
        EditorAction::UpdateItem {
            section: SectionId::Skills,
            item_id: "1".to_string(),
            patch: ItemPatch::Skill(SkillPatch {
                level: Some(3),
                ..SkillPatch::default()
            }),
        },
        EditorAction::AddItem {
            section: SectionId::Skills,
            item: SectionItem::Skill(skill("4", "TypeScript", 3, "Development")),
        },
        EditorAction::RemoveItem {
            section: SectionId::Skills,
            item_id: "2".to_string(),
        },
        EditorAction::ResetPortfolio,
    ]
}

#[test]
fn initial_state_selects_first_catalog_template() {
    let state = EditorState::new();
    assert_eq!(state.selected_template_id.as_deref(), Some(DEFAULT_TEMPLATE_ID));
    assert!(!state.dirty);
    assert!(!state.modal_open);
    assert!(!state.preview_mode);
    assert!(state.current_section.is_none());
    assert!(state.saved_portfolios.is_empty());
}

#[test]
fn reduce_never_mutates_input() {
    let state = EditorState::new();
    let before = state.clone();
    for action in content_actions() {
        let next = reduce(&state, &action);
        assert_eq!(state, before, "input state mutated by {action:?}");
        assert!(next.dirty, "content action must mark dirty: {action:?}");
    }
}

#[test]
fn add_then_remove_restores_section() {
    let state = EditorState::new();
    let before = state.portfolio.skills.clone();
    let added = reduce(
        &state,
        &EditorAction::AddItem {
            section: SectionId::Skills,
            item: SectionItem::Skill(skill("4", "TypeScript", 3, "Development")),
        },
    );
    let removed = reduce(
        &added,
        &EditorAction::RemoveItem {
            section: SectionId::Skills,
            item_id: "4".to_string(),
        },
    );
    assert_eq!(removed.portfolio.skills, before);
}

#[test]
fn update_with_unknown_id_is_a_noop_but_still_dirty() {
    let state = EditorState::new();
    let next = reduce(
        &state,
        &EditorAction::UpdateItem {
            section: SectionId::Skills,
            item_id: "no-such-id".to_string(),
            patch: ItemPatch::Skill(SkillPatch {
                name: Some("Changed".to_string()),
                ..SkillPatch::default()
            }),
        },
    );
    assert_eq!(next.portfolio.skills, state.portfolio.skills);
    assert!(next.dirty);
}

#[test]
fn update_merges_only_provided_fields() {
    let state = EditorState::new();
    let next = reduce(
        &state,
        &EditorAction::UpdateItem {
            section: SectionId::Skills,
            item_id: "2".to_string(),
            patch: ItemPatch::Skill(SkillPatch {
                level: Some(5),
                ..SkillPatch::default()
            }),
        },
    );
    let updated = &next.portfolio.skills[1];
    assert_eq!(updated.level, 5);
    assert_eq!(updated.name, "React");
    assert_eq!(updated.category, "Development");
}

#[test]
fn load_portfolio_clears_dirty_regardless_of_prior_state() {
    let state = EditorState::new();
    let dirtied = reduce(&state, &EditorAction::ResetPortfolio);
    assert!(dirtied.dirty);
    let loaded = reduce(
        &dirtied,
        &EditorAction::LoadPortfolio {
            portfolio: Portfolio::default(),
        },
    );
    assert!(!loaded.dirty);
    let loaded_again = reduce(
        &loaded,
        &EditorAction::LoadPortfolio {
            portfolio: Portfolio::default(),
        },
    );
    assert!(!loaded_again.dirty);
}

#[test]
fn content_actions_set_dirty_even_when_already_dirty() {
    let mut state = reduce(&EditorState::new(), &EditorAction::ResetPortfolio);
    for action in content_actions() {
        state = reduce(&state, &action);
        assert!(state.dirty, "{action:?}");
    }
}

#[test]
fn toggle_modal_preserves_section_when_omitted() {
    let state = EditorState::new();
    let opened = reduce(
        &state,
        &EditorAction::ToggleModal {
            open: true,
            section: Some(Some(SectionId::Skills)),
        },
    );
    assert!(opened.modal_open);
    assert_eq!(opened.current_section, Some(SectionId::Skills));
    let closed = reduce(
        &opened,
        &EditorAction::ToggleModal {
            open: false,
            section: None,
        },
    );
    assert!(!closed.modal_open);
    assert_eq!(closed.current_section, Some(SectionId::Skills));
}

#[test]
fn toggle_modal_can_clear_section_explicitly() {
    let state = reduce(
        &EditorState::new(),
        &EditorAction::ToggleModal {
            open: true,
            section: Some(Some(SectionId::Projects)),
        },
    );
    let cleared = reduce(
        &state,
        &EditorAction::ToggleModal {
            open: true,
            section: Some(None),
        },
    );
    assert_eq!(cleared.current_section, None);
}

#[test]
fn ui_flags_never_touch_dirty_and_stay_independent() {
    let state = EditorState::new();
    let previewing = reduce(
        &state,
        &EditorAction::TogglePreviewMode { preview: true },
    );
    assert!(previewing.preview_mode);
    assert!(!previewing.dirty);
    let with_modal = reduce(
        &previewing,
        &EditorAction::ToggleModal {
            open: true,
            section: Some(Some(SectionId::Personal)),
        },
    );
    assert!(with_modal.modal_open);
    assert!(with_modal.preview_mode, "opening the modal must not force preview off");
    assert!(!with_modal.dirty);
    let no_preview = reduce(
        &with_modal,
        &EditorAction::TogglePreviewMode { preview: false },
    );
    assert!(no_preview.modal_open, "preview toggle must not close the modal");
}

#[test]
fn selecting_unknown_template_is_tolerated() {
    let state = EditorState::new();
    let next = reduce(
        &state,
        &EditorAction::SelectTemplate {
            template_id: "nonexistent-9".to_string(),
        },
    );
    assert_eq!(next.selected_template_id.as_deref(), Some("nonexistent-9"));
    assert!(next.dirty);
    assert!(template_by_id("nonexistent-9").is_none());
}

#[test]
fn add_skill_appends_last() {
    let state = EditorState::new();
    assert_eq!(state.portfolio.skills.len(), 3);
    let next = reduce(
        &state,
        &EditorAction::AddItem {
            section: SectionId::Skills,
            item: SectionItem::Skill(skill("4", "TypeScript", 3, "Development")),
        },
    );
    assert_eq!(next.portfolio.skills.len(), 4);
    let last = next.portfolio.skills.last().unwrap();
    assert_eq!(last.id, "4");
    assert_eq!(last.name, "TypeScript");
}

#[test]
fn remove_default_experience_empties_the_section() {
    let state = EditorState::new();
    assert_eq!(state.portfolio.experience.len(), 1);
    let next = reduce(
        &state,
        &EditorAction::RemoveItem {
            section: SectionId::Experience,
            item_id: "1".to_string(),
        },
    );
    assert!(next.portfolio.experience.is_empty());
}

#[test]
fn remove_strips_every_matching_id() {
    let state = EditorState::new();
    let with_duplicate = reduce(
        &state,
        &EditorAction::AddItem {
            section: SectionId::Social,
            item: SectionItem::Social(SocialLink {
                id: "1".to_string(),
                platform: "Mastodon".to_string(),
                url: "https://example.social/@johndoe".to_string(),
                icon: "mastodon".to_string(),
            }),
        },
    );
    assert_eq!(with_duplicate.portfolio.social.len(), 4);
    let next = reduce(
        &with_duplicate,
        &EditorAction::RemoveItem {
            section: SectionId::Social,
            item_id: "1".to_string(),
        },
    );
    assert!(next.portfolio.social.iter().all(|link| link.id != "1"));
    assert_eq!(next.portfolio.social.len(), 2);
}

#[test]
fn mismatched_item_and_section_is_a_silent_noop() {
    let state = EditorState::new();
    let next = reduce(
        &state,
        &EditorAction::AddItem {
            section: SectionId::Projects,
            item: SectionItem::Skill(skill("4", "TypeScript", 3, "Development")),
        },
    );
    assert_eq!(next.portfolio, state.portfolio);
    assert!(next.dirty);
}

#[test]
fn replace_section_swaps_contents_wholesale() {
    let state = EditorState::new();
    let replacement = vec![skill("10", "Rust", 5, "Development")];
    let next = reduce(
        &state,
        &EditorAction::ReplaceSection {
            data: SectionData::Skills(replacement.clone()),
        },
    );
    assert_eq!(next.portfolio.skills, replacement);
    assert_eq!(next.portfolio.projects, state.portfolio.projects);
}

#[test]
fn reset_restores_the_default_document_and_marks_dirty() {
    let state = reduce(
        &EditorState::new(),
        &EditorAction::RemoveItem {
            section: SectionId::Experience,
            item_id: "1".to_string(),
        },
    );
    let reset = reduce(&state, &EditorAction::ResetPortfolio);
    assert_eq!(reset.portfolio, Portfolio::default());
    assert!(reset.dirty);
}
