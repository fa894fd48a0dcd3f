//! Static site content.
//!
//! Content is read-only once loaded: lists expose lookups by id but no way to
//! insert, remove or reorder items, and ids are checked for uniqueness when a
//! list is built or deserialized.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ContentId = u32;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("duplicate content id {0}")]
    DuplicateId(ContentId),

    #[error("content list is empty")]
    EmptyList,

    #[error("invalid content document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMeta {
    pub author: String,
    pub date: String,
    pub comments: u32,
}

/// One displayable record: portfolio project, research slide or article.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ContentId,
    pub title: String,
    /// Opaque asset reference, resolved by whoever renders the page.
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ArticleMeta>,
}

impl ContentItem {
    pub fn new(
        id: ContentId,
        title: impl Into<String>,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            image: image.into(),
            description: description.into(),
            meta: None,
        }
    }

    pub fn with_meta(mut self, author: &str, date: &str, comments: u32) -> Self {
        self.meta = Some(ArticleMeta {
            author: author.to_string(),
            date: date.to_string(),
            comments,
        });
        self
    }

    /// First `max_chars` characters of the description, with `...` appended
    /// when something was cut. The cut text is kept as is, trailing
    /// whitespace included.
    pub fn summary(&self, max_chars: usize) -> String {
        let mut chars = self.description.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{head}...")
        } else {
            head
        }
    }

    /// `author | date | N comments`, for items that carry metadata.
    pub fn byline(&self) -> Option<String> {
        self.meta
            .as_ref()
            .map(|m| format!("{} | {} | {} comments", m.author, m.date, m.comments))
    }
}

/// Ordered, immutable list of items with unique ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ContentItem>", into = "Vec<ContentItem>")]
pub struct ContentList(Vec<ContentItem>);

impl TryFrom<Vec<ContentItem>> for ContentList {
    type Error = ContentError;

    fn try_from(items: Vec<ContentItem>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(ContentError::DuplicateId(item.id));
            }
        }
        Ok(Self(items))
    }
}

impl From<ContentList> for Vec<ContentItem> {
    fn from(list: ContentList) -> Self {
        list.0
    }
}

impl ContentList {
    pub fn new(items: Vec<ContentItem>) -> Result<Self, ContentError> {
        Self::try_from(items)
    }

    pub fn get(&self, id: ContentId) -> Option<&ContentItem> {
        self.0.iter().find(|item| item.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = ContentId> + '_ {
        self.0.iter().map(|item| item.id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentItem> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Featured item and the rest, in order.
    pub fn split_first(&self) -> Result<(&ContentItem, &[ContentItem]), ContentError> {
        self.0.split_first().ok_or(ContentError::EmptyList)
    }
}

impl<'a> IntoIterator for &'a ContentList {
    type Item = &'a ContentItem;
    type IntoIter = std::slice::Iter<'a, ContentItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Who the site is about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub brand: String,
    /// Hero heading, one entry per line.
    pub headline: Vec<String>,
    pub portrait: String,
    pub portrait_alt: String,
    pub contact_href: String,
    pub copyright_year: u16,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub portfolio: ContentList,
    pub research: ContentList,
    pub projects: ContentList,
}

impl SiteContent {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::from_json(&json)?;
        log::debug!(
            "loaded content from {}: {} portfolio, {} research, {} projects",
            path.display(),
            content.portfolio.len(),
            content.research.len(),
            content.projects.len()
        );
        Ok(content)
    }

    pub fn to_json_pretty(&self) -> Result<String, ContentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn builtin() -> Self {
        let profile = Profile {
            name: "Pascal".into(),
            brand: "PASCAL.".into(),
            headline: vec![
                "HELLO, I'M PASCAL".into(),
                "AN ASPIRING".into(),
                "MECHANICAL ENGINEER".into(),
            ],
            portrait: "/images/pascal-profile.jpeg".into(),
            portrait_alt: "Pascal - Aspiring Mechanical Engineer".into(),
            contact_href: "#".into(),
            copyright_year: 2024,
        };

        let portfolio = vec![
            ContentItem::new(
                1,
                "Mechanical Design Project",
                "/images/project1.jpeg",
                "An innovative mechanical design project showcasing advanced engineering principles and creative problem-solving.",
            ),
            ContentItem::new(
                2,
                "3D Printing Innovation",
                "/images/project2.jpeg",
                "Exploring the frontiers of 3D printing technology to create complex, functional prototypes for various applications.",
            ),
            ContentItem::new(
                3,
                "Robotics Prototype",
                "/images/project3.jpeg",
                "Developing a cutting-edge robotics prototype designed for efficiency and precision in industrial environments.",
            ),
            ContentItem::new(
                4,
                "Sustainable Engineering",
                "/images/project4.jpeg",
                "Implementing sustainable engineering practices to create eco-friendly solutions for modern challenges.",
            ),
            ContentItem::new(
                5,
                "CAD Modeling Showcase",
                "/images/project5.jpeg",
                "A collection of advanced CAD models demonstrating proficiency in 3D modeling and design optimization.",
            ),
            ContentItem::new(
                6,
                "Energy Efficiency Study",
                "/images/project6.jpeg",
                "Conducting comprehensive energy efficiency studies to improve system performance and reduce environmental impact.",
            ),
        ];

        let research = vec![
            ContentItem::new(1, "Advanced Materials Research", "/images/research1.jpeg", ""),
            ContentItem::new(2, "Renewable Energy Systems", "/images/research2.jpeg", ""),
            ContentItem::new(3, "Robotics and Automation", "/images/research3.jpg", ""),
            ContentItem::new(4, "Sustainable Manufacturing", "/images/research4.jpeg", ""),
        ];

        let projects = vec![
            ContentItem::new(
                1,
                "Mechanical Design Innovation: Next-Gen Robotics",
                "/images/project1.jpeg",
                "Revolutionizing industrial automation with advanced mechanical designs for robotic systems.",
            )
            .with_meta("Pascal", "Oct 15", 16),
            ContentItem::new(
                2,
                "Sustainable Energy Solutions: Solar-Powered Devices",
                "/images/project2.jpeg",
                "Developing cutting-edge solar-powered devices for everyday use, reducing carbon footprint.",
            )
            .with_meta("Pascal", "Oct 14", 32),
            ContentItem::new(
                3,
                "AI-Driven Manufacturing Optimization",
                "/images/project3.jpeg",
                "Implementing AI algorithms to enhance manufacturing efficiency and reduce waste.",
            )
            .with_meta("Pascal", "Oct 13", 24),
            ContentItem::new(
                4,
                "Biomechanical Prosthetics: Enhancing Mobility",
                "/images/project4.jpeg",
                "Creating advanced prosthetics using biomechanical principles for improved quality of life.",
            )
            .with_meta("Pascal", "Oct 12", 41),
            ContentItem::new(
                5,
                "Smart City Infrastructure: IoT Integration",
                "/images/project5.jpeg",
                "Designing IoT-based solutions for efficient urban resource management and sustainability.",
            )
            .with_meta("Pascal", "Oct 11", 28),
        ];

        // Ids above are literal and unique.
        Self {
            profile,
            portfolio: ContentList(portfolio),
            research: ContentList(research),
            projects: ContentList(projects),
        }
    }
}
