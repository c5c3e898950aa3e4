//! Typed content records, produced once a value has passed its rules

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::helpers::date::parse_date;

pub const BUTTON_COLORS: &[&str] = &["primary", "neutral", "success", "warning", "error", "info"];
pub const BUTTON_SIZES: &[&str] = &["xs", "sm", "md", "lg", "xl"];
pub const BUTTON_VARIANTS: &[&str] = &["solid", "outline", "subtle", "soft", "ghost", "link"];
pub const LINK_TARGETS: &[&str] = &["_blank", "_self"];

fn de_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_date(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", s)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonColor {
    Primary,
    Neutral,
    Success,
    Warning,
    Error,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Solid,
    Outline,
    Subtle,
    Soft,
    Ghost,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    #[serde(rename = "_blank")]
    Blank,
    #[serde(rename = "_self")]
    SelfFrame,
}

/// A link rendered as a button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    pub icon: Option<String>,
    pub to: Option<String>,
    pub color: Option<ButtonColor>,
    pub size: Option<ButtonSize>,
    pub variant: Option<ButtonVariant>,
    pub target: Option<LinkTarget>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub description: Option<String>,
    pub username: Option<String>,
    pub twitter: Option<String>,
    pub to: Option<String>,
    pub avatar: Option<Image>,
}

/// Title and description shared by page sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seo {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub links: Vec<Button>,
    pub images: Vec<Image>,
}

/// Availability block shown on the home and about pages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Now {
    #[serde(rename = "openTo")]
    pub open_to: Option<Vec<String>>,
    pub available: Option<bool>,
    #[serde(rename = "meetingLink")]
    pub meeting_link: Option<String>,
    pub currently: Option<Vec<String>>,
    pub availability: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub url: String,
    pub logo: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    #[serde(deserialize_with = "de_date")]
    pub date: NaiveDate,
    pub position: String,
    pub description: String,
    pub index: f64,
    pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub description: String,
    pub items: Vec<ExperienceItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: Author,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonials {
    pub title: String,
    pub description: String,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqQuestion {
    pub label: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqCategory {
    pub title: String,
    pub questions: Vec<FaqQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub title: String,
    pub description: String,
    pub categories: Vec<FaqCategory>,
}

/// `index.yml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomePage {
    pub seo: Option<Seo>,
    pub title: String,
    pub description: String,
    #[serde(rename = "profileImage")]
    pub profile_image: Image,
    #[serde(rename = "snsLinks")]
    pub sns_links: Vec<Button>,
    pub hero: Hero,
    pub about: Section,
    pub now: Option<Now>,
    pub experience: Experience,
    pub testimonials: Testimonials,
    pub blog: Section,
    pub faq: Faq,
}

/// `about.yml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutPage {
    pub title: String,
    pub description: String,
    #[serde(rename = "profileImage")]
    pub profile_image: Image,
    pub content: serde_yaml::Mapping,
    pub images: Vec<Image>,
    pub now: Option<Now>,
}

/// Front matter of `blog/*.md`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub description: String,
    #[serde(rename = "minRead")]
    pub min_read: f64,
    #[serde(deserialize_with = "de_date")]
    pub date: NaiveDate,
    pub image: String,
    pub author: Author,
}

/// `projects/*.yml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub url: String,
    pub tags: Vec<String>,
    #[serde(deserialize_with = "de_date")]
    pub date: NaiveDate,
}

/// `projects.yml` and `blog.yml` listing pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingPage {
    pub title: String,
    pub description: String,
    pub links: Vec<Button>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_sets_match_types() {
        for v in BUTTON_COLORS {
            serde_yaml::from_str::<ButtonColor>(v).unwrap();
        }
        for v in BUTTON_SIZES {
            serde_yaml::from_str::<ButtonSize>(v).unwrap();
        }
        for v in BUTTON_VARIANTS {
            serde_yaml::from_str::<ButtonVariant>(v).unwrap();
        }
        for v in LINK_TARGETS {
            serde_yaml::from_str::<LinkTarget>(v).unwrap();
        }
    }

    #[test]
    fn test_lenient_date_formats() {
        let yaml = "title: t\ndescription: d\nimage: i\nurl: u\ntags: []\ndate: 2024/03/05\n";
        let project: Project = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(project.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }
}
