//! Markdown card rendering.
//!
//! [`CardRenderer::render`] is a pure function from Markdown text, a theme and
//! a date to a styled element tree. The front-end turns the tree into DOM
//! nodes; tests inspect it directly.

use chrono::NaiveDate;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag};
use shared::{MoCardConfig, Theme};

/// A node of the rendered card
#[derive(Debug, Clone, PartialEq)]
pub enum CardNode {
    Element(CardElement),
    Text(String),
}

/// An element with inline styles
#[derive(Debug, Clone, PartialEq)]
pub struct CardElement {
    pub tag: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub style: Vec<(&'static str, String)>,
    pub children: Vec<CardNode>,
}

const VOID_TAGS: [&str; 3] = ["br", "hr", "img"];

impl CardElement {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            style: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.style.push((property, value.into()));
        self
    }

    pub fn with_attribute(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn with_child(mut self, child: CardNode) -> Self {
        self.push_child(child);
        self
    }

    /// Append a child, merging adjacent text nodes
    pub fn push_child(&mut self, child: CardNode) {
        if let CardNode::Text(text) = &child {
            if let Some(CardNode::Text(last)) = self.children.last_mut() {
                last.push_str(text);
                return;
            }
        }
        self.children.push(child);
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Inline `style` attribute value
    pub fn style_attribute(&self) -> String {
        self.style
            .iter()
            .map(|(p, v)| format!("{}: {};", p, v))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag)
    }

    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                CardNode::Text(text) => out.push_str(text),
                CardNode::Element(element) => element.collect_text(out),
            }
        }
    }

    /// All descendant elements with `tag`, in document order
    pub fn descendants(&self, tag: &str) -> Vec<&CardElement> {
        let mut found = Vec::new();
        self.collect_descendants(tag, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, tag: &str, found: &mut Vec<&'a CardElement>) {
        for child in &self.children {
            if let CardNode::Element(element) = child {
                if element.tag == tag {
                    found.push(element);
                }
                element.collect_descendants(tag, found);
            }
        }
    }

    /// First element (self included) whose `data-testid` is `test_id`
    pub fn find_by_test_id(&self, test_id: &str) -> Option<&CardElement> {
        if self.attribute("data-testid") == Some(test_id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            CardNode::Element(element) => element.find_by_test_id(test_id),
            CardNode::Text(_) => None,
        })
    }

    /// Serialize to escaped HTML
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html);
        html
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attributes {
            out.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
        }
        if !self.style.is_empty() {
            out.push_str(&format!(" style=\"{}\"", escape_html(&self.style_attribute())));
        }
        out.push('>');
        if self.is_void() {
            return;
        }
        for child in &self.children {
            match child {
                CardNode::Text(text) => out.push_str(&escape_html(text)),
                CardNode::Element(element) => element.write_html(out),
            }
        }
        out.push_str(&format!("</{}>", self.tag));
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
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

/// How an open element is finished when its Markdown tag closes
enum FrameKind {
    Normal,
    CodeBlock,
    Image,
}

struct Frame {
    element: CardElement,
    kind: FrameKind,
}

/// Renders Markdown into a themed card
#[derive(Debug, Clone)]
pub struct CardRenderer {
    brand_text: String,
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::with_config(&MoCardConfig::default())
    }
}

impl CardRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &MoCardConfig) -> Self {
        Self {
            brand_text: config.brand_text.clone(),
        }
    }

    pub fn brand_text(&self) -> &str {
        &self.brand_text
    }

    /// Render `markdown` with `theme`; `today` is shown in the footer
    pub fn render(&self, markdown: &str, theme: &Theme, today: NaiveDate) -> CardElement {
        let content = render_markdown(markdown, theme);

        let footer_text = |text: String| {
            CardElement::new("span")
                .with_style("color", theme.text_secondary)
                .with_style("opacity", "0.7")
                .with_style("font-size", "0.75rem")
                .with_child(CardNode::Text(text))
        };
        let footer = CardElement::new("div")
            .with_attribute("data-testid", "card-footer")
            .with_style("display", "flex")
            .with_style("justify-content", "space-between")
            .with_style("align-items", "center")
            .with_style("padding-top", "1rem")
            .with_style("margin-top", "1rem")
            .with_style("border-top", format!("1px solid {}", theme.border_color))
            .with_child(CardNode::Element(footer_text(today.format("%Y-%m-%d").to_string())))
            .with_child(CardNode::Element(footer_text(self.brand_text.clone())));

        // `background` first: the shorthand resets background-color
        CardElement::new("div")
            .with_attribute("data-testid", "preview-card")
            .with_attribute("data-theme", theme.id)
            .with_style("background", theme.background())
            .with_style("background-color", theme.bg_color)
            .with_style("font-family", theme.font_family)
            .with_style("display", "flex")
            .with_style("flex-direction", "column")
            .with_style("justify-content", "space-between")
            .with_style("border-radius", "0.75rem")
            .with_style("padding", "2rem")
            .with_style("box-shadow", "0 4px 20px rgba(0,0,0,0.1)")
            .with_child(CardNode::Element(content))
            .with_child(CardNode::Element(footer))
    }
}

/// Render with the default brand text
pub fn render_card(markdown: &str, theme: &Theme, today: NaiveDate) -> CardElement {
    CardRenderer::default().render(markdown, theme, today)
}

fn render_markdown(markdown: &str, theme: &Theme) -> CardElement {
    let root = CardElement::new("div")
        .with_attribute("class", "card-content")
        .with_style("color", theme.text_secondary)
        .with_style("text-shadow", theme.glow_effect.unwrap_or("none"));

    let mut stack = vec![Frame {
        element: root,
        kind: FrameKind::Normal,
    }];

    for event in Parser::new(markdown) {
        match event {
            Event::Start(tag) => stack.push(open_frame(tag, theme)),
            Event::End(_) => {
                if stack.len() > 1 {
                    if let Some(frame) = stack.pop() {
                        let node = close_frame(frame);
                        append(&mut stack, node);
                    }
                }
            }
            Event::Text(text) | Event::Html(text) => {
                append(&mut stack, CardNode::Text(text.to_string()));
            }
            Event::Code(code) => {
                let element = inline_code(theme).with_child(CardNode::Text(code.to_string()));
                append(&mut stack, CardNode::Element(element));
            }
            Event::SoftBreak => append(&mut stack, CardNode::Text("\n".to_string())),
            Event::HardBreak => append(&mut stack, CardNode::Element(CardElement::new("br"))),
            Event::Rule => {
                let rule = CardElement::new("hr")
                    .with_style("border", "none")
                    .with_style("border-top", format!("1px solid {}", theme.border_color));
                append(&mut stack, CardNode::Element(rule));
            }
            _ => {}
        }
    }

    // Unbalanced input: fold whatever is still open into its parent
    while stack.len() > 1 {
        if let Some(frame) = stack.pop() {
            let node = close_frame(frame);
            append(&mut stack, node);
        }
    }

    stack
        .pop()
        .map(|frame| frame.element)
        .unwrap_or_else(|| CardElement::new("div"))
}

fn append(stack: &mut [Frame], node: CardNode) {
    if let Some(parent) = stack.last_mut() {
        parent.element.push_child(node);
    }
}

fn heading(tag: &'static str, theme: &Theme) -> CardElement {
    let element = CardElement::new(tag)
        .with_style("color", theme.text_primary)
        .with_style("font-family", theme.font_family);
    match theme.glow_effect {
        Some(glow) => element.with_style("text-shadow", glow),
        None => element,
    }
}

fn inline_code(theme: &Theme) -> CardElement {
    CardElement::new("code")
        .with_style("background-color", theme.code_background)
        .with_style("color", theme.accent_color)
        .with_style("padding", "0.2rem 0.4rem")
        .with_style("border-radius", "0.25rem")
}

fn open_frame(tag: Tag<'_>, theme: &Theme) -> Frame {
    let mut kind = FrameKind::Normal;
    let element = match tag {
        Tag::Heading { level, .. } => {
            let tag_name = match level {
                HeadingLevel::H1 => "h1",
                HeadingLevel::H2 => "h2",
                HeadingLevel::H3 => "h3",
                HeadingLevel::H4 => "h4",
                HeadingLevel::H5 => "h5",
                HeadingLevel::H6 => "h6",
            };
            heading(tag_name, theme)
        }
        Tag::Paragraph => CardElement::new("p").with_style("color", theme.text_secondary),
        Tag::Strong => CardElement::new("strong").with_style("color", theme.text_primary),
        Tag::Emphasis => CardElement::new("em").with_style("color", theme.text_secondary),
        Tag::BlockQuote => CardElement::new("blockquote")
            .with_style("border-left", format!("4px solid {}", theme.accent_color))
            .with_style("border-left-color", theme.accent_color)
            .with_style("color", theme.text_secondary)
            .with_style("padding-left", "1rem"),
        Tag::List(Some(start)) => {
            let list = CardElement::new("ol")
                .with_style("color", theme.text_secondary)
                .with_style("padding-left", "1.25rem");
            if start != 1 {
                list.with_attribute("start", start.to_string())
            } else {
                list
            }
        }
        Tag::List(None) => CardElement::new("ul")
            .with_style("color", theme.text_secondary)
            .with_style("padding-left", "1.25rem"),
        Tag::Item => CardElement::new("li").with_style("color", theme.text_secondary),
        Tag::CodeBlock(block_kind) => {
            kind = FrameKind::CodeBlock;
            let code = CardElement::new("code")
                .with_style("background-color", theme.code_background)
                .with_style("color", theme.accent_color)
                .with_style("display", "block")
                .with_style("padding", "1rem")
                .with_style("border-radius", "0.5rem")
                .with_style("overflow-x", "auto");
            match block_kind {
                CodeBlockKind::Fenced(lang) if !lang.trim().is_empty() => {
                    code.with_attribute("class", format!("language-{}", lang.trim()))
                }
                _ => code,
            }
        }
        Tag::Link { dest_url, title, .. } => {
            let link = CardElement::new("a")
                .with_attribute("href", dest_url.to_string())
                .with_style("color", theme.accent_color);
            if title.is_empty() {
                link
            } else {
                link.with_attribute("title", title.to_string())
            }
        }
        Tag::Image { dest_url, .. } => {
            kind = FrameKind::Image;
            CardElement::new("img")
                .with_attribute("src", dest_url.to_string())
                .with_style("max-width", "100%")
        }
        _ => CardElement::new("span"),
    };
    Frame { element, kind }
}

fn close_frame(frame: Frame) -> CardNode {
    match frame.kind {
        FrameKind::Normal => CardNode::Element(frame.element),
        FrameKind::CodeBlock => {
            let pre = CardElement::new("pre")
                .with_style("margin", "0")
                .with_child(CardNode::Element(frame.element));
            CardNode::Element(pre)
        }
        FrameKind::Image => {
            let mut image = frame.element;
            let alt = image.text_content();
            image.children.clear();
            CardNode::Element(image.with_attribute("alt", alt))
        }
    }
}
