//! Content schema - the shape each kind of site content must have
//!
//! Validation runs in two steps. The declarative [`Rule`] tree for the kind
//! is walked first so every failure is reported with its field path. A value
//! that passes is then deserialized into its typed [`ContentRecord`].

mod error;
pub mod records;
pub mod rules;

pub use error::{FieldError, FieldErrorKind, ValidationError};
pub use records::{AboutPage, BlogPost, HomePage, ListingPage, Project};
pub use rules::Rule;

use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::fmt;

use records::{BUTTON_COLORS, BUTTON_SIZES, BUTTON_VARIANTS, LINK_TARGETS};
use rules::{extend, list, object, opt, req};

/// Kind of content record, one per site collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Home,
    About,
    BlogPost,
    Project,
    Listing,
}

impl ContentKind {
    pub const ALL: [ContentKind; 5] = [
        ContentKind::Home,
        ContentKind::About,
        ContentKind::BlogPost,
        ContentKind::Project,
        ContentKind::Listing,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ContentKind::Home => "home",
            ContentKind::About => "about",
            ContentKind::BlogPost => "blog post",
            ContentKind::Project => "project",
            ContentKind::Listing => "listing",
        }
    }

    /// Field rules for this kind
    pub fn rules(&self) -> Rule {
        match self {
            ContentKind::Home => object(vec![
                opt(
                    "seo",
                    object(vec![
                        req("title", Rule::NonEmpty),
                        req("description", Rule::NonEmpty),
                    ]),
                ),
                req("title", Rule::NonEmpty),
                req("description", Rule::NonEmpty),
                req("profileImage", image()),
                req("snsLinks", list(button())),
                req(
                    "hero",
                    object(vec![req("links", list(button())), req("images", list(image()))]),
                ),
                req("about", section()),
                opt("now", now()),
                req(
                    "experience",
                    extend(
                        section(),
                        vec![req(
                            "items",
                            list(object(vec![
                                req("date", Rule::Date),
                                req("position", Rule::Str),
                                req("description", Rule::Str),
                                req("index", Rule::Number),
                                req(
                                    "company",
                                    object(vec![
                                        req("name", Rule::Str),
                                        req("url", Rule::Str),
                                        req("logo", Rule::Str),
                                        req("color", Rule::Str),
                                    ]),
                                ),
                            ])),
                        )],
                    ),
                ),
                req(
                    "testimonials",
                    extend(
                        section(),
                        vec![req(
                            "items",
                            list(object(vec![req("quote", Rule::Str), req("author", author())])),
                        )],
                    ),
                ),
                req("blog", section()),
                req(
                    "faq",
                    extend(
                        section(),
                        vec![req(
                            "categories",
                            list(object(vec![
                                req("title", Rule::NonEmpty),
                                req(
                                    "questions",
                                    list(object(vec![
                                        req("label", Rule::NonEmpty),
                                        req("content", Rule::NonEmpty),
                                    ])),
                                ),
                            ])),
                        )],
                    ),
                ),
            ]),
            ContentKind::About => extend(
                section(),
                vec![
                    req("profileImage", image()),
                    req("content", Rule::AnyObject),
                    req("images", list(image())),
                    opt("now", now()),
                ],
            ),
            ContentKind::BlogPost => extend(
                section(),
                vec![
                    req("minRead", Rule::Number),
                    req("date", Rule::Date),
                    req("image", Rule::NonEmpty),
                    req("author", author()),
                ],
            ),
            ContentKind::Project => extend(
                section(),
                vec![
                    req("image", Rule::NonEmpty),
                    req("url", Rule::NonEmpty),
                    req("tags", list(Rule::Str)),
                    req("date", Rule::Date),
                ],
            ),
            ContentKind::Listing => extend(section(), vec![req("links", list(button()))]),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn section() -> Rule {
    object(vec![
        req("title", Rule::NonEmpty),
        req("description", Rule::NonEmpty),
    ])
}

fn image() -> Rule {
    object(vec![req("src", Rule::Str), req("alt", Rule::Str)])
}

fn button() -> Rule {
    object(vec![
        req("label", Rule::Str),
        opt("icon", Rule::Str),
        opt("to", Rule::Str),
        opt("color", Rule::OneOf(BUTTON_COLORS)),
        opt("size", Rule::OneOf(BUTTON_SIZES)),
        opt("variant", Rule::OneOf(BUTTON_VARIANTS)),
        opt("target", Rule::OneOf(LINK_TARGETS)),
    ])
}

fn author() -> Rule {
    object(vec![
        req("name", Rule::Str),
        opt("description", Rule::Str),
        opt("username", Rule::Str),
        opt("twitter", Rule::Str),
        opt("to", Rule::Str),
        opt("avatar", image()),
    ])
}

fn now() -> Rule {
    object(vec![
        opt("openTo", list(Rule::Str)),
        opt("available", Rule::Bool),
        opt("meetingLink", Rule::Str),
        opt("currently", list(Rule::Str)),
        opt("availability", Rule::Str),
    ])
}

/// A record that passed validation
#[derive(Debug, Clone, PartialEq)]
pub enum ContentRecord {
    Home(Box<HomePage>),
    About(AboutPage),
    BlogPost(BlogPost),
    Project(Project),
    Listing(ListingPage),
}

impl ContentRecord {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentRecord::Home(_) => ContentKind::Home,
            ContentRecord::About(_) => ContentKind::About,
            ContentRecord::BlogPost(_) => ContentKind::BlogPost,
            ContentRecord::Project(_) => ContentKind::Project,
            ContentRecord::Listing(_) => ContentKind::Listing,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ContentRecord::Home(r) => &r.title,
            ContentRecord::About(r) => &r.title,
            ContentRecord::BlogPost(r) => &r.title,
            ContentRecord::Project(r) => &r.title,
            ContentRecord::Listing(r) => &r.title,
        }
    }
}

/// Check `record` against the rules for `kind`
pub fn validate(kind: ContentKind, record: &Value) -> Result<ContentRecord, ValidationError> {
    let errors = kind.rules().errors(record);
    if !errors.is_empty() {
        return Err(ValidationError { kind, errors });
    }

    let typed = match kind {
        ContentKind::Home => typed::<HomePage>(kind, record).map(|r| ContentRecord::Home(Box::new(r))),
        ContentKind::About => typed(kind, record).map(ContentRecord::About),
        ContentKind::BlogPost => typed(kind, record).map(ContentRecord::BlogPost),
        ContentKind::Project => typed(kind, record).map(ContentRecord::Project),
        ContentKind::Listing => typed(kind, record).map(ContentRecord::Listing),
    }?;
    Ok(typed)
}

fn typed<T: DeserializeOwned>(kind: ContentKind, record: &Value) -> Result<T, ValidationError> {
    serde_yaml::from_value(record.clone()).map_err(|e| ValidationError {
        kind,
        errors: vec![FieldError::new("", FieldErrorKind::Invalid(e.to_string()))],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    const HOME: &str = r##"
seo:
  title: Sean Ramones
  description: Portfolio
title: Hi, I'm Sean
description: I build things for the web.
profileImage:
  src: /avatars/profile-image-1.png
  alt: Sean
snsLinks:
  - label: GitHub
    icon: i-simple-icons-github
    to: https://github.com/example
    target: _blank
hero:
  links:
    - label: Book a call
      color: primary
      size: lg
      variant: solid
  images:
    - src: /hero/1.png
      alt: One
about:
  title: About
  description: A bit about me
now:
  openTo: [Freelance]
  available: true
experience:
  title: Experience
  description: Where I've worked
  items:
    - date: 2023-04-01
      position: Engineer
      description: Built the app
      index: 0
      company:
        name: Acme
        url: https://acme.example
        logo: i-lucide-box
        color: "#000"
testimonials:
  title: Testimonials
  description: Kind words
  items:
    - quote: Great to work with.
      author:
        name: Jane
        avatar:
          src: /avatars/jane.png
          alt: Jane
blog:
  title: Blog
  description: Writing
faq:
  title: FAQ
  description: Questions
  categories:
    - title: General
      questions:
        - label: Are you available?
          content: Yes.
"##;

    #[test]
    fn test_valid_home_page() {
        let record = validate(ContentKind::Home, &yaml(HOME)).unwrap();
        let ContentRecord::Home(home) = record else {
            panic!("expected a home record");
        };
        assert_eq!(home.title, "Hi, I'm Sean");
        assert_eq!(
            home.hero.links[0].color,
            Some(records::ButtonColor::Primary)
        );
        assert_eq!(
            home.experience.items[0].date,
            NaiveDate::from_ymd_opt(2023, 4, 1).unwrap()
        );
        assert_eq!(home.sns_links[0].target, Some(records::LinkTarget::Blank));
    }

    #[test]
    fn test_home_page_reports_paths() {
        let mut value = yaml(HOME);
        value["hero"]["links"][0]["color"] = Value::from("purple");
        value["experience"]["items"][0]["date"] = Value::from("2023-13-01");
        value["faq"]["categories"][0]["questions"][0]["content"] = Value::from("");
        value["testimonials"]["items"][0]["author"]
            .as_mapping_mut()
            .unwrap()
            .remove("name");

        let err = validate(ContentKind::Home, &value).unwrap_err();
        assert_eq!(err.kind, ContentKind::Home);
        assert_eq!(
            err.paths(),
            vec![
                "hero.links[0].color",
                "experience.items[0].date",
                "testimonials.items[0].author.name",
                "faq.categories[0].questions[0].content",
            ]
        );
        let message = err.to_string();
        assert!(message.contains("hero.links[0].color: \"purple\" is not one of primary"));
    }

    #[test]
    fn test_blog_post() {
        let value = yaml(
            r#"
title: "Shipping a Vue App"
description: Lessons learned.
date: 2024-10-01
image: https://img.example/a.jpg
minRead: 4
author:
  name: Sean
  avatar:
    src: avatars/profile-image-1.png
    alt: Sean
"#,
        );
        let record = validate(ContentKind::BlogPost, &value).unwrap();
        assert_eq!(record.kind(), ContentKind::BlogPost);
        assert_eq!(record.title(), "Shipping a Vue App");
        let ContentRecord::BlogPost(post) = record else {
            panic!("expected a blog post");
        };
        assert_eq!(post.min_read, 4.0);
    }

    #[test]
    fn test_blog_post_wrong_types() {
        let value = yaml("title: T\ndescription: D\ndate: 2024-10-01\nimage: ''\nminRead: four\nauthor: Sean\n");
        let err = validate(ContentKind::BlogPost, &value).unwrap_err();
        assert_eq!(err.paths(), vec!["minRead", "image", "author"]);
        assert_eq!(
            err.errors[0].kind,
            FieldErrorKind::WrongType {
                expected: "number",
                found: "string"
            }
        );
    }

    #[test]
    fn test_numbers_need_not_be_whole() {
        let post = yaml("title: T\ndescription: D\ndate: 2024-10-01\nimage: /a.png\nminRead: 2.5\nauthor:\n  name: Sean\n");
        let ContentRecord::BlogPost(post) = validate(ContentKind::BlogPost, &post).unwrap() else {
            panic!("expected a blog post");
        };
        assert_eq!(post.min_read, 2.5);

        let mut home: Value = yaml(HOME);
        home["experience"]["items"][0]["index"] = Value::Number(serde_yaml::Number::from(-1));
        let ContentRecord::Home(page) = validate(ContentKind::Home, &home).unwrap() else {
            panic!("expected a home page");
        };
        assert_eq!(page.experience.items[0].index, -1.0);
    }

    #[test]
    fn test_project() {
        let ok = yaml("title: Site\ndescription: My site\nimage: /p.png\nurl: https://x.example\ntags: [nuxt, vue]\ndate: 2025-01-20\n");
        assert!(validate(ContentKind::Project, &ok).is_ok());

        let missing = yaml("title: Site\ndescription: My site\nimage: /p.png\ntags: nuxt\n");
        let err = validate(ContentKind::Project, &missing).unwrap_err();
        assert_eq!(err.paths(), vec!["url", "tags", "date"]);
    }

    #[test]
    fn test_listing_and_about() {
        let listing = yaml("title: Projects\ndescription: Things I made\nlinks:\n  - label: GitHub\n    variant: ghost\n");
        assert!(validate(ContentKind::Listing, &listing).is_ok());

        let bad = yaml("title: Projects\ndescription: Things I made\nlinks:\n  - label: GitHub\n    target: _top\n");
        assert_eq!(
            validate(ContentKind::Listing, &bad).unwrap_err().paths(),
            vec!["links[0].target"]
        );

        let about = yaml("title: About\ndescription: Me\nprofileImage: {src: a.png, alt: me}\ncontent: {}\nimages: []\n");
        assert!(validate(ContentKind::About, &about).is_ok());

        let about_bad = yaml("title: About\ndescription: Me\nprofileImage: {src: a.png, alt: me}\ncontent: text\nimages: []\nnow: {available: maybe}\n");
        assert_eq!(
            validate(ContentKind::About, &about_bad).unwrap_err().paths(),
            vec!["content", "now.available"]
        );
    }

    #[test]
    fn test_non_object_record() {
        let err = validate(ContentKind::Project, &yaml("- a\n- b\n")).unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].path, "");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let value = yaml("title: Blog\ndescription: Posts\nlinks: []\nnavigation: false\n");
        assert!(validate(ContentKind::Listing, &value).is_ok());
    }
}
