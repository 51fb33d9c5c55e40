use backend::domain::{CardElement, CardNode, CardRenderer};
use chrono::NaiveDate;
use shared::{MoCardConfig, Theme};
use yew::prelude::*;
use yew::virtual_dom::{VNode, VTag, VText};

#[derive(Properties, PartialEq)]
pub struct PreviewCardProps {
    pub markdown: String,
    pub theme: &'static Theme,
    pub today: NaiveDate,
    pub config: MoCardConfig,
    /// Attached to the element that gets rasterized on export
    pub node_ref: NodeRef,
}

/// Children that get rendered; void elements never have any
fn rendered_children(element: &CardElement) -> &[CardNode] {
    if element.is_void() {
        &[]
    } else {
        &element.children
    }
}

fn to_vnode(element: &CardElement) -> VNode {
    let mut tag = VTag::new(element.tag);
    for (name, value) in &element.attributes {
        tag.add_attribute(*name, value.clone());
    }
    if !element.style.is_empty() {
        tag.add_attribute("style", element.style_attribute());
    }
    for child in rendered_children(element) {
        tag.add_child(match child {
            CardNode::Text(text) => VNode::VText(VText::new(text.clone())),
            CardNode::Element(child) => to_vnode(child),
        });
    }
    VNode::VTag(Box::new(tag))
}

#[function_component(PreviewCard)]
pub fn preview_card(props: &PreviewCardProps) -> Html {
    let renderer = use_memo(props.config.clone(), CardRenderer::with_config);
    let card = renderer.render(&props.markdown, props.theme, props.today);

    html! {
        <div class="preview-section">
            <h2>{"实时预览"}</h2>
            <div ref={props.node_ref.clone()} class="preview-frame">
                {to_vnode(&card)}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn attributes(node: &VNode) -> Vec<(String, String)> {
        match node {
            VNode::VTag(tag) => tag
                .attributes
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            _ => Vec::new(),
        }
    }

    #[wasm_bindgen_test]
    fn test_attributes_and_styles_are_kept() {
        let element = CardElement::new("a")
            .with_attribute("href", "https://example.com")
            .with_style("color", "#B22222");

        let node = to_vnode(&element);
        match &node {
            VNode::VTag(tag) => assert_eq!(tag.tag(), "a"),
            _ => panic!("expected an element"),
        }
        let attributes = attributes(&node);
        assert!(attributes.contains(&("href".to_string(), "https://example.com".to_string())));
        assert!(attributes.contains(&("style".to_string(), "color: #B22222;".to_string())));
    }

    #[wasm_bindgen_test]
    fn test_void_elements_render_without_children() {
        let image = CardElement::new("img")
            .with_attribute("src", "logo.png")
            .with_child(CardNode::Text("stray".to_string()));
        assert!(rendered_children(&image).is_empty());

        let node = to_vnode(&image);
        assert!(attributes(&node).contains(&("src".to_string(), "logo.png".to_string())));

        let paragraph = CardElement::new("p").with_child(CardNode::Text("kept".to_string()));
        assert_eq!(rendered_children(&paragraph).len(), 1);
    }

    #[wasm_bindgen_test]
    fn test_rendered_card_root_keeps_test_id() {
        let theme = backend::domain::themes::default_theme();
        let card = CardRenderer::new().render("# Hi", theme, NaiveDate::from_ymd_opt(2025, 1, 29).unwrap());
        let node = to_vnode(&card);
        assert!(attributes(&node).contains(&("data-testid".to_string(), "preview-card".to_string())));
    }
}
