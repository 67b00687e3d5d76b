pub mod action;
pub mod portfolio;
pub mod state;
pub mod template;

pub use action::{
    EditorAction, EducationPatch, ExperiencePatch, ItemPatch, ProjectPatch, SectionData,
    SectionId, SectionItem, SkillPatch, SocialPatch, TestimonialPatch,
};
pub use portfolio::{
    EducationItem, ExperienceItem, PersonalInfo, Portfolio, ProjectItem, SkillItem, SocialLink,
    TestimonialItem,
};
pub use state::{reduce, EditorState, SavedPortfolio};
pub use template::{
    template_by_id, Template, TemplateColors, TemplateFonts, TemplateKind, TemplateLayout,
    DEFAULT_TEMPLATE_ID, TEMPLATE_CATALOG,
};
