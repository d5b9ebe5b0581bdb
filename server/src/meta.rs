//! Open Graph Rewriting
//!
//! Fills the app shell's `<title>` and Open Graph tags for a recipe so link
//! previews show the recipe instead of the generic placeholder.

use regex::{NoExpand, Regex};

use recipe_core::Recipe;

use crate::error::PrerenderResult;

/// Values written into the shell for one page
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl PageMeta {
    pub fn for_recipe(recipe: &Recipe, site_name: &str, api_base: &str) -> Self {
        let description = recipe.description.trim();
        Self {
            title: format!("{} - {site_name}", recipe.title),
            description: (!description.is_empty()).then(|| description.to_string()),
            image_url: recipe.cover_image.map(|image| image.url(api_base)),
        }
    }

    fn tags(&self) -> String {
        let mut tags = String::new();
        let mut push = |name: &str, value: &str| {
            tags.push_str(&format!(
                "<meta name=\"{name}\" property=\"og:{name}\" content=\"{}\"/>\n",
                escape_attribute(value)
            ));
        };

        push("title", &self.title);
        if let Some(description) = &self.description {
            push("description", description);
        }
        if let Some(image_url) = &self.image_url {
            push("image", image_url);
        }
        tags
    }
}

/// Compiled patterns for editing the shell
#[derive(Debug, Clone)]
pub struct MetaRewriter {
    title: Regex,
    og_tags: Regex,
    head_end: Regex,
}

impl MetaRewriter {
    pub fn new() -> PrerenderResult<Self> {
        Ok(Self {
            title: Regex::new(r"(?is)<title>.*?</title>")?,
            og_tags: Regex::new(
                r#"(?i)<meta\b[^>]*\bproperty\s*=\s*"og:(?:title|description|image)"[^>]*>\s*"#,
            )?,
            head_end: Regex::new(r"(?i)</head>")?,
        })
    }

    /// Shell with the page's title and Open Graph tags; other markup untouched
    pub fn rewrite(&self, shell: &str, meta: &PageMeta) -> String {
        let title = format!("<title>{}</title>", escape_attribute(&meta.title));
        let shell = self.title.replace(shell, NoExpand(&title));
        let shell = self.og_tags.replace_all(&shell, "");

        let head_end = format!("{}</head>", meta.tags());
        self.head_end.replace(&shell, NoExpand(&head_end)).into_owned()
    }
}

/// Escape a value for a double-quoted HTML attribute
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_core::ImageId;

    const SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>FastKitchen</title>
  <meta name="type" property="og:type" content="website" />
  <meta name="title" property="og:title" content="FastKitchen"/>
</head>
<body><div id="root"></div></body>
</html>"#;

    fn make_recipe(title: &str, description: &str, cover: Option<i64>) -> Recipe {
        let mut recipe: Recipe = serde_json::from_str(
            r#"{"id_": 1, "title": "", "portions": 1, "cooking_time": 1}"#,
        )
        .unwrap();
        recipe.title = title.to_string();
        recipe.description = description.to_string();
        recipe.cover_image = cover.map(ImageId);
        recipe
    }

    #[test]
    fn test_page_meta() {
        let meta = PageMeta::for_recipe(
            &make_recipe("Pizza", "Crispy", Some(7)),
            "FastKitchen",
            "https://api.example/",
        );

        assert_eq!(meta.title, "Pizza - FastKitchen");
        assert_eq!(meta.description.as_deref(), Some("Crispy"));
        assert_eq!(meta.image_url.as_deref(), Some("https://api.example/image/7"));
    }

    #[test]
    fn test_blank_description_omitted() {
        let meta = PageMeta::for_recipe(&make_recipe("Pizza", "  ", None), "FK", "http://a/");
        assert_eq!(meta.description, None);
        assert_eq!(meta.image_url, None);
    }

    #[test]
    fn test_rewrite() {
        let rewriter = MetaRewriter::new().unwrap();
        let meta = PageMeta::for_recipe(
            &make_recipe("Pizza", "Crispy", Some(7)),
            "FastKitchen",
            "https://api.example/",
        );

        let html = rewriter.rewrite(SHELL, &meta);

        assert!(html.contains("<title>Pizza - FastKitchen</title>"));
        assert!(html.contains(r#"property="og:title" content="Pizza - FastKitchen""#));
        assert!(html.contains(r#"property="og:description" content="Crispy""#));
        assert!(html.contains(r#"property="og:image" content="https://api.example/image/7""#));
        assert!(html.contains(r#"property="og:type" content="website""#));
        assert_eq!(html.matches("og:title").count(), 1);
        assert!(html.contains(r#"<div id="root"></div>"#));
    }

    #[test]
    fn test_rewrite_escapes_values() {
        let rewriter = MetaRewriter::new().unwrap();
        let meta = PageMeta::for_recipe(
            &make_recipe(r#"Mac & "Cheese" <b>"#, "Tom's $1 dish", None),
            "FastKitchen",
            "http://a/",
        );

        let html = rewriter.rewrite(SHELL, &meta);

        assert!(html.contains("<title>Mac &amp; &quot;Cheese&quot; &lt;b&gt; - FastKitchen</title>"));
        assert!(html.contains(r#"content="Tom&#39;s $1 dish""#));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_escape_attribute() {
        assert_eq!(escape_attribute("a\"b<c>&'"), "a&quot;b&lt;c&gt;&amp;&#39;");
        assert_eq!(escape_attribute("plain"), "plain");
    }
}
