use super::{loose, required, Adapt};
use crate::models::{PageContent, Section};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RawSection {
    #[serde(default, alias = "title", deserialize_with = "loose::text")]
    pub heading: Option<String>,
    #[serde(default, alias = "content", alias = "text", deserialize_with = "loose::text")]
    pub body: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPage {
    #[serde(default, alias = "heading", deserialize_with = "loose::text")]
    pub title: Option<String>,
    #[serde(default, alias = "cover", alias = "heroImage", deserialize_with = "loose::text")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub sections: Option<Vec<RawSection>>,
    #[serde(default, alias = "content", deserialize_with = "loose::text")]
    pub body: Option<String>,
}

impl Adapt for PageContent {
    const RESOURCE: &'static str = "page";
    const COLLECTION_KEY: &'static str = "pages";

    type Raw = RawPage;

    fn adapt(raw: RawPage) -> Result<Self, String> {
        let mut sections: Vec<Section> = raw
            .sections
            .unwrap_or_default()
            .into_iter()
            .filter_map(|s| {
                s.body.map(|body| Section {
                    heading: s.heading,
                    body,
                })
            })
            .collect();
        if sections.is_empty() {
            if let Some(body) = raw.body {
                sections.push(Section { heading: None, body });
            }
        }

        Ok(PageContent {
            title: required("title", raw.title)?,
            cover_image: raw.cover_image,
            sections,
        })
    }
}
