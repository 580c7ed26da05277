//! HTML rendering of a sanitized [`Recipe`].
//!
//! Sanitized fields are plain text, never trusted markup, so every value is
//! escaped on its way into the document. Only `http` and `https` URLs are
//! written as link or image targets.

use crate::model::Recipe;
use crate::sanitize::Ingredient;
use html_escape::{encode_double_quoted_attribute, encode_text};
use log::debug;
use url::Url;

/// Render `recipe` as an HTML fragment.
pub fn to_html(recipe: &Recipe) -> String {
    let mut html = String::new();

    html.push_str("<article class=\"recipe\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", encode_text(&recipe.name)));

    if let Some(image) = recipe
        .image
        .as_ref()
        .and_then(|image| image.as_url())
        .and_then(web_url)
    {
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">\n",
            encode_double_quoted_attribute(image.as_str()),
            encode_double_quoted_attribute(&recipe.name)
        ));
    }

    if let Some(author) = &recipe.author {
        html.push_str(&format!("<p class=\"author\">{}</p>\n", encode_text(author)));
    }

    if !recipe.description.is_empty() {
        html.push_str(&format!(
            "<p class=\"description\">{}</p>\n",
            encode_text(&recipe.description)
        ));
    }

    let details = [
        ("Yield", &recipe.recipe_yield),
        ("Prep time", &recipe.prep_time),
        ("Cook time", &recipe.cook_time),
        ("Total time", &recipe.total_time),
    ];
    if details.iter().any(|(_, value)| value.is_some()) {
        html.push_str("<dl>\n");
        for (label, value) in details {
            if let Some(value) = value {
                html.push_str(&format!("<dt>{label}</dt><dd>{}</dd>\n", encode_text(value)));
            }
        }
        html.push_str("</dl>\n");
    }

    if !recipe.ingredients.is_empty() {
        html.push_str("<ul class=\"ingredients\">\n");
        for ingredient in &recipe.ingredients {
            html.push_str(&format!("<li>{}</li>\n", render_ingredient(ingredient)));
        }
        html.push_str("</ul>\n");
    }

    if !recipe.instructions.is_empty() {
        html.push_str("<ol class=\"instructions\">\n");
        for step in &recipe.instructions {
            html.push_str(&format!("<li>{}</li>\n", encode_text(step)));
        }
        html.push_str("</ol>\n");
    }

    if let Some(url) = &recipe.url {
        match web_url(url) {
            Some(href) => html.push_str(&format!(
                "<a class=\"source\" href=\"{}\">{}</a>\n",
                encode_double_quoted_attribute(href.as_str()),
                encode_text(url)
            )),
            None => html.push_str(&format!("<p class=\"source\">{}</p>\n", encode_text(url))),
        }
    }

    html.push_str("</article>\n");
    html
}

// Absolute http(s) URL, normalized by the URL parser
fn web_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw).ok()?;
    match url.scheme() {
        "http" | "https" => Some(url),
        scheme => {
            debug!("render: not linking {scheme}: URL");
            None
        }
    }
}

fn render_ingredient(ingredient: &Ingredient) -> String {
    let mut parts = Vec::new();
    if let Some(quantity) = &ingredient.quantity {
        parts.push(format!(
            "<span class=\"quantity\">{}</span>",
            encode_text(quantity)
        ));
    }
    if let Some(unit) = &ingredient.unit {
        parts.push(format!("<span class=\"unit\">{}</span>", encode_text(unit)));
    }
    parts.push(encode_text(&ingredient.ingredient).into_owned());
    parts.join(" ")
}
