use foliolab_core::{template_by_id, SectionId, TemplateKind, DEFAULT_TEMPLATE_ID, TEMPLATE_CATALOG};

#[test]
fn catalog_has_four_unique_entries() {
    assert_eq!(TEMPLATE_CATALOG.len(), 4);
    for (index, entry) in TEMPLATE_CATALOG.iter().enumerate() {
        assert!(
            TEMPLATE_CATALOG[index + 1..].iter().all(|other| other.id != entry.id),
            "duplicate template id {}",
            entry.id
        );
    }
}

#[test]
fn lookup_resolves_known_ids() {
    let template = template_by_id(DEFAULT_TEMPLATE_ID).unwrap();
    assert_eq!(template.name, "Sleek");
    assert_eq!(template.kind, TemplateKind::Modern);
    assert!(!template.premium);
    assert_eq!(template_by_id(" minimal-1 ").unwrap().name, "Pure");
}

#[test]
fn lookup_returns_none_for_unknown_ids() {
    assert!(template_by_id("nonexistent-9").is_none());
    assert!(template_by_id("").is_none());
}

#[test]
fn premium_flags_match_the_fixed_catalog() {
    let premium: Vec<_> = TEMPLATE_CATALOG
        .iter()
        .filter(|entry| entry.premium)
        .map(|entry| entry.id)
        .collect();
    assert_eq!(premium, ["creative-1", "professional-1"]);
}

#[test]
fn section_keys_round_trip() {
    for section in SectionId::ALL {
        assert_eq!(SectionId::from_key(section.as_str()), Some(section));
    }
    assert_eq!(SectionId::from_key("skills"), Some(SectionId::Skills));
    assert_eq!(SectionId::from_key("unknown"), None);
    assert!(SectionId::Skills.is_collection());
    assert!(!SectionId::Personal.is_collection());
}
