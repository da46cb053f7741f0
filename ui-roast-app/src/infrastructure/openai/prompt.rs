use crate::domain::{Artifact, Category, Judge, RoastPrompt, Selection};

pub struct PromptTemplate {
    /// Persona or focus phrase that always appears in the rendered prompt.
    pub marker: &'static str,
    render: fn(&str) -> String,
}

impl PromptTemplate {
    pub fn render(&self, subject: &str) -> String {
        (self.render)(subject)
    }
}

static GORDON: PromptTemplate = PromptTemplate {
    marker: "Gordon Ramsay",
    render: |subject: &str| {
        format!(
            "You are Gordon Ramsay. Roast {subject}. Be brutally funny and sarcastic, \
             then give exactly 3 clear actionable tips. Number them."
        )
    },
};

static GRANDMA: PromptTemplate = PromptTemplate {
    marker: "grandma",
    render: |subject: &str| {
        format!(
            "You are a grandma who dislikes complicated tech. Critique {subject} humorously \
             for simplicity, readability, and usability. Then give exactly 3 actionable tips \
             to make it simpler. Number them."
        )
    },
};

static IPAD_KID: PromptTemplate = PromptTemplate {
    marker: "iPad kid",
    render: |subject: &str| {
        format!(
            "You are an impatient iPad kid. Check {subject}. Comment sarcastically on confusing \
             or boring parts, then give exactly 3 concise actionable tips to make it flashy and \
             engaging. Number them."
        )
    },
};

static COLORS: PromptTemplate = PromptTemplate {
    marker: "color",
    render: |subject: &str| {
        format!(
            "You are a senior UI designer focused on color. Review the color palette, contrast \
             and consistency of {subject}. Then give exactly 3 actionable tips to improve its \
             colors. Number them."
        )
    },
};

static TYPOGRAPHY: PromptTemplate = PromptTemplate {
    marker: "typography",
    render: |subject: &str| {
        format!(
            "You are a senior UI designer focused on typography. Review font choices, sizes, \
             hierarchy and line lengths in {subject}. Then give exactly 3 actionable tips to \
             improve its typography. Number them."
        )
    },
};

static SPACING: PromptTemplate = PromptTemplate {
    marker: "spacing",
    render: |subject: &str| {
        format!(
            "You are a senior UI designer focused on spacing and layout. Review padding, margins, \
             alignment and grouping in {subject}. Then give exactly 3 actionable tips to improve \
             its spacing. Number them."
        )
    },
};

static USABILITY: PromptTemplate = PromptTemplate {
    marker: "usability",
    render: |subject: &str| {
        format!(
            "You are a UX researcher focused on usability. Review navigation, affordances and \
             calls to action in {subject}. Then give exactly 3 actionable tips to improve its \
             usability. Number them."
        )
    },
};

static CONTENT: PromptTemplate = PromptTemplate {
    marker: "content",
    render: |subject: &str| {
        format!(
            "You are a UX writer reviewing content. Critique the copy, tone and clarity of the \
             content in {subject}. Then give exactly 3 actionable tips to improve its content. \
             Number them."
        )
    },
};

static ACCESSIBILITY: PromptTemplate = PromptTemplate {
    marker: "accessibility",
    render: |subject: &str| {
        format!(
            "You are an accessibility specialist. Review {subject} for accessibility problems \
             such as contrast, target sizes, labels and keyboard use. Then give exactly 3 \
             actionable tips to improve its accessibility. Number them."
        )
    },
};

static FULL: PromptTemplate = PromptTemplate {
    marker: "full design review",
    render: |subject: &str| {
        format!(
            "You are a senior product designer doing a full design review of {subject}. Cover \
             colors, typography, spacing, usability, content and accessibility briefly, then \
             give exactly 3 actionable tips with the biggest impact. Number them."
        )
    },
};

static GENERIC: PromptTemplate = PromptTemplate {
    marker: "Roast",
    render: |subject: &str| {
        format!("Roast {subject} and provide exactly 3 actionable tips. Number them.")
    },
};

pub fn template_for(selection: Selection) -> &'static PromptTemplate {
    match selection {
        Selection::Judge(Judge::Gordon) => &GORDON,
        Selection::Judge(Judge::Grandma) => &GRANDMA,
        Selection::Judge(Judge::IpadKid) => &IPAD_KID,
        Selection::Category(Category::Colors) => &COLORS,
        Selection::Category(Category::Typography) => &TYPOGRAPHY,
        Selection::Category(Category::Spacing) => &SPACING,
        Selection::Category(Category::Usability) => &USABILITY,
        Selection::Category(Category::Content) => &CONTENT,
        Selection::Category(Category::Accessibility) => &ACCESSIBILITY,
        Selection::Category(Category::Full) => &FULL,
        Selection::Generic => &GENERIC,
    }
}

pub fn build_roast_prompt(tag: Option<&str>, artifact: &Artifact) -> RoastPrompt {
    let template = template_for(Selection::from_tag(tag));
    RoastPrompt {
        text: template.render(&artifact.subject()),
        image: artifact.image_source(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_tags() -> Vec<&'static str> {
        Judge::ALL
            .iter()
            .map(|j| j.id())
            .chain(Category::ALL.iter().map(|c| c.id()))
            .collect()
    }

    fn artifacts() -> Vec<Artifact> {
        vec![
            Artifact::File {
                name: "checkout-v2.png".into(),
                content_type: Some("image/png".into()),
                bytes: vec![0x89, 0x50],
            },
            Artifact::ImageUrl("https://cdn.example.com/shot.jpg?w=800".into()),
            Artifact::SiteUrl("https://example.com/pricing".into()),
        ]
    }

    #[test]
    fn test_every_tag_has_marker_and_artifact() {
        for tag in all_tags() {
            let template = template_for(Selection::from_tag(Some(tag)));
            for artifact in artifacts() {
                let prompt = build_roast_prompt(Some(tag), &artifact);
                assert!(!prompt.text.is_empty());
                assert!(
                    prompt.text.contains(template.marker),
                    "{tag}: marker `{}` missing",
                    template.marker
                );
                assert!(prompt.text.contains(artifact.reference()), "{tag}: artifact missing");
                assert!(prompt.text.contains("exactly 3"), "{tag}: tip count missing");
            }
        }
    }

    #[test]
    fn test_tags_map_to_distinct_templates() {
        let artifact = Artifact::SiteUrl("https://example.com".into());
        let mut prompts: Vec<String> = all_tags()
            .into_iter()
            .map(|tag| build_roast_prompt(Some(tag), &artifact).text)
            .collect();
        prompts.sort();
        prompts.dedup();
        assert_eq!(prompts.len(), Judge::ALL.len() + Category::ALL.len());
    }

    #[test]
    fn test_unknown_tag_uses_generic_template() {
        let artifact = Artifact::ImageUrl("https://example.com/ui.png".into());
        let expected = "Roast the UI screenshot at https://example.com/ui.png and provide exactly 3 actionable tips. Number them.";

        assert_eq!(build_roast_prompt(Some("simon_cowell"), &artifact).text, expected);
        assert_eq!(build_roast_prompt(None, &artifact).text, expected);
    }

    #[test]
    fn test_prompt_carries_image_source() {
        let artifacts = artifacts();
        let upload = build_roast_prompt(Some("gordon"), &artifacts[0]);
        assert!(upload
            .image
            .is_some_and(|img| img.starts_with("data:image/png;base64,")));

        let site = build_roast_prompt(Some("gordon"), &artifacts[2]);
        assert_eq!(site.image, None);
    }
}
