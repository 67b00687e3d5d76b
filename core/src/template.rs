use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Modern,
    Minimal,
    Creative,
    Professional,
}

impl TemplateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateKind::Modern => "modern",
            TemplateKind::Minimal => "minimal",
            TemplateKind::Creative => "creative",
            TemplateKind::Professional => "professional",
        }
    }

    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Modern,
        TemplateKind::Minimal,
        TemplateKind::Creative,
        TemplateKind::Professional,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateLayout {
    SinglePage,
    MultiPage,
    CardBased,
    Timeline,
}

#[derive(Clone, Copy, Debug)]
pub struct TemplateColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct TemplateFonts {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Immutable catalog entry describing a visual skin. Defined once, never
/// mutated.
#[derive(Clone, Copy, Debug)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: TemplateKind,
    pub description: &'static str,
    pub thumbnail: &'static str,
    pub colors: TemplateColors,
    pub fonts: TemplateFonts,
    pub layout: TemplateLayout,
    pub features: &'static [&'static str],
    pub premium: bool,
}

pub const DEFAULT_TEMPLATE_ID: &str = "modern-1";

pub const TEMPLATE_CATALOG: &[Template] = &[
    Template {
        id: DEFAULT_TEMPLATE_ID,
        name: "Sleek",
        kind: TemplateKind::Modern,
        description: "A sleek, contemporary design with bold typography and ample white space.",
        thumbnail: "templates/modern.jpg",
        colors: TemplateColors {
            primary: "#0A84FF",
            secondary: "#F2F2F7",
            accent: "#34C759",
            background: "#FFFFFF",
            text: "#1C1C1E",
        },
        fonts: TemplateFonts {
            heading: "sans",
            body: "sans",
        },
        layout: TemplateLayout::SinglePage,
        features: &["Animated transitions", "Sticky navigation", "Project gallery"],
        premium: false,
    },
    Template {
        id: "minimal-1",
        name: "Pure",
        kind: TemplateKind::Minimal,
        description: "An ultra-minimalist approach focusing on content with subtle design elements.",
        thumbnail: "templates/minimal.jpg",
        colors: TemplateColors {
            primary: "#000000",
            secondary: "#F5F5F5",
            accent: "#DDDDDD",
            background: "#FFFFFF",
            text: "#333333",
        },
        fonts: TemplateFonts {
            heading: "display",
            body: "sans",
        },
        layout: TemplateLayout::SinglePage,
        features: &["Content-focused", "Elegant typography", "Subtle animations"],
        premium: false,
    },
    Template {
        id: "creative-1",
        name: "Vivid",
        kind: TemplateKind::Creative,
        description: "An expressive template with unique layouts and visual elements for creative professionals.",
        thumbnail: "templates/creative.jpg",
        colors: TemplateColors {
            primary: "#FF3B30",
            secondary: "#A2845E",
            accent: "#5E5CE6",
            background: "#FAFAFA",
            text: "#222222",
        },
        fonts: TemplateFonts {
            heading: "display",
            body: "sans",
        },
        layout: TemplateLayout::CardBased,
        features: &["Unique layouts", "Bold color options", "Interactive elements"],
        premium: true,
    },
    Template {
        id: "professional-1",
        name: "Executive",
        kind: TemplateKind::Professional,
        description: "A refined, business-focused template that conveys professionalism and expertise.",
        thumbnail: "templates/professional.jpg",
        colors: TemplateColors {
            primary: "#1E5180",
            secondary: "#F0F4F8",
            accent: "#007AFF",
            background: "#FFFFFF",
            text: "#1C1C1E",
        },
        fonts: TemplateFonts {
            heading: "sans",
            body: "sans",
        },
        layout: TemplateLayout::MultiPage,
        features: &["Business-focused sections", "Clean layout", "PDF resume integration"],
        premium: true,
    },
];

/// Absence is not a failure: callers fall back to the catalog's first entry.
pub fn template_by_id(id: &str) -> Option<&'static Template> {
    let trimmed = id.trim();
    TEMPLATE_CATALOG.iter().find(|entry| entry.id == trimmed)
}
