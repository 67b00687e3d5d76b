use serde::{Deserialize, Serialize};

use crate::portfolio::{
    EducationItem, ExperienceItem, PersonalInfo, Portfolio, ProjectItem, SkillItem, SocialLink,
    TestimonialItem,
};

/// Closed set of Portfolio keys the edit surface can target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Personal,
    Experience,
    Education,
    Skills,
    Projects,
    Testimonials,
    Social,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Personal,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Testimonials,
        SectionId::Social,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Personal => "personal",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Testimonials => "testimonials",
            SectionId::Social => "social",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.as_str() == key.trim())
    }

    /// Personal is the only scalar section; everything else is an ordered
    /// collection.
    pub fn is_collection(self) -> bool {
        !matches!(self, SectionId::Personal)
    }
}

/// Wholesale replacement payload for one section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SectionData {
    Personal(PersonalInfo),
    Experience(Vec<ExperienceItem>),
    Education(Vec<EducationItem>),
    Skills(Vec<SkillItem>),
    Projects(Vec<ProjectItem>),
    Testimonials(Vec<TestimonialItem>),
    Social(Vec<SocialLink>),
}

impl SectionData {
    pub fn section(&self) -> SectionId {
        match self {
            SectionData::Personal(_) => SectionId::Personal,
            SectionData::Experience(_) => SectionId::Experience,
            SectionData::Education(_) => SectionId::Education,
            SectionData::Skills(_) => SectionId::Skills,
            SectionData::Projects(_) => SectionId::Projects,
            SectionData::Testimonials(_) => SectionId::Testimonials,
            SectionData::Social(_) => SectionId::Social,
        }
    }
}

/// A single collection element, tagged by the collection it belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SectionItem {
    Experience(ExperienceItem),
    Education(EducationItem),
    Skill(SkillItem),
    Project(ProjectItem),
    Testimonial(TestimonialItem),
    Social(SocialLink),
}

impl SectionItem {
    pub fn section(&self) -> SectionId {
        match self {
            SectionItem::Experience(_) => SectionId::Experience,
            SectionItem::Education(_) => SectionId::Education,
            SectionItem::Skill(_) => SectionId::Skills,
            SectionItem::Project(_) => SectionId::Projects,
            SectionItem::Testimonial(_) => SectionId::Testimonials,
            SectionItem::Social(_) => SectionId::Social,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            SectionItem::Experience(item) => &item.id,
            SectionItem::Education(item) => &item.id,
            SectionItem::Skill(item) => &item.id,
            SectionItem::Project(item) => &item.id,
            SectionItem::Testimonial(item) => &item.id,
            SectionItem::Social(item) => &item.id,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub achievements: Option<Vec<String>>,
}

impl ExperiencePatch {
    pub fn apply_to(&self, item: &mut ExperienceItem) {
        if let Some(company) = &self.company {
            item.company = company.clone();
        }
        if let Some(position) = &self.position {
            item.position = position.clone();
        }
        if let Some(start_date) = &self.start_date {
            item.start_date = start_date.clone();
        }
        if let Some(end_date) = &self.end_date {
            item.end_date = end_date.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(achievements) = &self.achievements {
            item.achievements = achievements.clone();
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

impl EducationPatch {
    pub fn apply_to(&self, item: &mut EducationItem) {
        if let Some(institution) = &self.institution {
            item.institution = institution.clone();
        }
        if let Some(degree) = &self.degree {
            item.degree = degree.clone();
        }
        if let Some(field) = &self.field {
            item.field = field.clone();
        }
        if let Some(start_date) = &self.start_date {
            item.start_date = start_date.clone();
        }
        if let Some(end_date) = &self.end_date {
            item.end_date = end_date.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub level: Option<u8>,
    pub category: Option<String>,
}

impl SkillPatch {
    pub fn apply_to(&self, item: &mut SkillItem) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(level) = self.level {
            item.level = level;
        }
        if let Some(category) = &self.category {
            item.category = category.clone();
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub featured: Option<bool>,
}

impl ProjectPatch {
    pub fn apply_to(&self, item: &mut ProjectItem) {
        if let Some(title) = &self.title {
            item.title = title.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(tags) = &self.tags {
            item.tags = tags.clone();
        }
        if let Some(image) = &self.image {
            item.image = image.clone();
        }
        if let Some(link) = &self.link {
            item.link = link.clone();
        }
        if let Some(featured) = self.featured {
            item.featured = featured;
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TestimonialPatch {
    pub name: Option<String>,
    pub position: Option<String>,
    pub company: Option<String>,
    pub text: Option<String>,
    pub avatar: Option<String>,
}

impl TestimonialPatch {
    pub fn apply_to(&self, item: &mut TestimonialItem) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(position) = &self.position {
            item.position = position.clone();
        }
        if let Some(company) = &self.company {
            item.company = company.clone();
        }
        if let Some(text) = &self.text {
            item.text = text.clone();
        }
        if let Some(avatar) = &self.avatar {
            item.avatar = avatar.clone();
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialPatch {
    pub platform: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
}

impl SocialPatch {
    pub fn apply_to(&self, item: &mut SocialLink) {
        if let Some(platform) = &self.platform {
            item.platform = platform.clone();
        }
        if let Some(url) = &self.url {
            item.url = url.clone();
        }
        if let Some(icon) = &self.icon {
            item.icon = icon.clone();
        }
    }
}

/// Field-level merge payload, one variant per collection. Fields left `None`
/// keep the item's current value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ItemPatch {
    Experience(ExperiencePatch),
    Education(EducationPatch),
    Skill(SkillPatch),
    Project(ProjectPatch),
    Testimonial(TestimonialPatch),
    Social(SocialPatch),
}

impl ItemPatch {
    pub fn section(&self) -> SectionId {
        match self {
            ItemPatch::Experience(_) => SectionId::Experience,
            ItemPatch::Education(_) => SectionId::Education,
            ItemPatch::Skill(_) => SectionId::Skills,
            ItemPatch::Project(_) => SectionId::Projects,
            ItemPatch::Testimonial(_) => SectionId::Testimonials,
            ItemPatch::Social(_) => SectionId::Social,
        }
    }
}

/// Tagged request to transition editor state. Dispatch is total: payloads
/// that do not line up with the current document (unknown ids, mismatched
/// sections) degrade to silent no-ops, never errors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EditorAction {
    SelectTemplate {
        /// Not validated against the catalog; resolution happens on read.
        template_id: String,
    },
    ReplaceSection {
        data: SectionData,
    },
    UpdateItem {
        section: SectionId,
        item_id: String,
        patch: ItemPatch,
    },
    AddItem {
        section: SectionId,
        item: SectionItem,
    },
    RemoveItem {
        section: SectionId,
        item_id: String,
    },
    ResetPortfolio,
    LoadPortfolio {
        portfolio: Portfolio,
    },
    ToggleModal {
        open: bool,
        /// `None` preserves the current section; `Some(x)` overwrites it,
        /// including clearing with `Some(None)`.
        section: Option<Option<SectionId>>,
    },
    TogglePreviewMode {
        preview: bool,
    },
}
