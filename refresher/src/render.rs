//! Feed renderer
//!
//! Turns posts into element descriptors and element descriptors into HTML.
//! Nothing here touches the container; see `container` for that.

use crate::domain::Post;

/// CSS classes applied to every post card
pub const POST_CLASS: &str = "card mb-2";

/// One rendered post: username shown bold, content shown plain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostElement {
    pub class: &'static str,
    pub username: String,
    pub content: String,
}

impl PostElement {
    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"{}\"><div class=\"card-body\"><strong>{}</strong>: {}</div></div>",
            self.class,
            escape_html(&self.username),
            escape_html(&self.content)
        )
    }
}

impl From<&Post> for PostElement {
    fn from(post: &Post) -> Self {
        Self {
            class: POST_CLASS,
            username: post.username.clone(),
            content: post.content.clone(),
        }
    }
}

/// Build one element per post, preserving order
pub fn render(posts: &[Post]) -> Vec<PostElement> {
    posts.iter().map(PostElement::from).collect()
}

/// Serialize elements to markup, one card per line
pub fn render_html(elements: &[PostElement]) -> String {
    let mut buf = String::new();
    for element in elements {
        buf.push_str(&element.to_html());
        buf.push('\n');
    }
    buf
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
