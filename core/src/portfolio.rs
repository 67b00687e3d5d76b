use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub title: String,
    pub bio: String,
    pub avatar: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillItem {
    pub id: String,
    pub name: String,
    /// Proficiency in [1, 5].
    pub level: u8,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image: String,
    pub link: String,
    pub featured: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestimonialItem {
    pub id: String,
    pub name: String,
    pub position: String,
    pub company: String,
    pub text: String,
    pub avatar: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: String,
    pub platform: String,
    pub url: String,
    pub icon: String,
}

/// The user-editable document. Collection order is insertion order and is
/// display-significant; ids are unique within a collection but nothing
/// enforces that here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub personal: PersonalInfo,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub skills: Vec<SkillItem>,
    pub projects: Vec<ProjectItem>,
    pub testimonials: Vec<TestimonialItem>,
    pub social: Vec<SocialLink>,
}

impl Default for Portfolio {
    fn default() -> Self {
        starter_portfolio()
    }
}

fn starter_portfolio() -> Portfolio {
    Portfolio {
        personal: PersonalInfo {
            full_name: "John Doe".to_string(),
            title: "Product Designer & Developer".to_string(),
            bio: "I am a passionate designer and developer with a focus on creating \
                  beautiful and functional digital experiences."
                .to_string(),
            avatar: String::new(),
            email: "john@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
        },
        experience: vec![ExperienceItem {
            id: "1".to_string(),
            company: "Design Studio".to_string(),
            position: "Senior UI/UX Designer".to_string(),
            start_date: "2020-01".to_string(),
            end_date: "Present".to_string(),
            description: "Leading design projects for various clients and collaborating \
                          with development teams."
                .to_string(),
            achievements: vec![
                "Redesigned the company website, increasing conversion by 30%".to_string(),
                "Established design system used across all projects".to_string(),
                "Mentored junior designers".to_string(),
            ],
        }],
        education: vec![EducationItem {
            id: "1".to_string(),
            institution: "University of Design".to_string(),
            degree: "Bachelor of Arts".to_string(),
            field: "Graphic Design".to_string(),
            start_date: "2014-09".to_string(),
            end_date: "2018-06".to_string(),
            description: "Focused on digital design and interactive media".to_string(),
        }],
        skills: vec![
            SkillItem {
                id: "1".to_string(),
                name: "UI Design".to_string(),
                level: 5,
                category: "Design".to_string(),
            },
            SkillItem {
                id: "2".to_string(),
                name: "React".to_string(),
                level: 4,
                category: "Development".to_string(),
            },
            SkillItem {
                id: "3".to_string(),
                name: "Figma".to_string(),
                level: 5,
                category: "Tools".to_string(),
            },
        ],
        projects: vec![ProjectItem {
            id: "1".to_string(),
            title: "E-commerce Redesign".to_string(),
            description: "Complete redesign of an e-commerce platform focused on improving \
                          user experience and conversion."
                .to_string(),
            tags: vec![
                "UI/UX".to_string(),
                "E-commerce".to_string(),
                "Figma".to_string(),
            ],
            image: String::new(),
            link: "https://example.com/project".to_string(),
            featured: true,
        }],
        testimonials: vec![TestimonialItem {
            id: "1".to_string(),
            name: "Jane Smith".to_string(),
            position: "CEO".to_string(),
            company: "TechStart Inc.".to_string(),
            text: "John delivered exceptional design work that perfectly captured our brand \
                   vision while improving our user experience."
                .to_string(),
            avatar: String::new(),
        }],
        social: vec![
            SocialLink {
                id: "1".to_string(),
                platform: "LinkedIn".to_string(),
                url: "https://linkedin.com/in/johndoe".to_string(),
                icon: "linkedin".to_string(),
            },
            SocialLink {
                id: "2".to_string(),
                platform: "Twitter".to_string(),
                url: "https://twitter.com/johndoe".to_string(),
                icon: "twitter".to_string(),
            },
            SocialLink {
                id: "3".to_string(),
                platform: "Dribbble".to_string(),
                url: "https://dribbble.com/johndoe".to_string(),
                icon: "dribbble".to_string(),
            },
        ],
    }
}
