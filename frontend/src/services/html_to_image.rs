//! Browser implementations of the export seams: DOM rasterization through
//! the `html-to-image` script loaded by `index.html`, and downloads through a
//! temporary anchor element.

use anyhow::anyhow;
use async_trait::async_trait;
use backend::domain::export_service::{DownloadSink, RasterError, RasterOptions, Rasterizer};
use js_sys::{Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAnchorElement, HtmlElement};
use yew::NodeRef;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = htmlToImage, js_name = toPng, catch)]
    fn to_png(node: &HtmlElement, options: &JsValue) -> Result<Promise, JsValue>;
}

/// Readable text for a rejected promise or thrown value
fn describe_js_error(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return format!(
            "{}: {}",
            String::from(error.name()),
            String::from(error.message())
        );
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn to_js_options(options: &RasterOptions) -> Result<JsValue, RasterError> {
    let object = Object::new();
    let entries = [
        ("pixelRatio", JsValue::from_f64(options.pixel_ratio)),
        ("quality", JsValue::from_f64(options.quality)),
        ("cacheBust", JsValue::from_bool(options.cache_bust)),
    ];
    for (key, value) in entries {
        Reflect::set(&object, &JsValue::from_str(key), &value)
            .map_err(|e| RasterError::new(describe_js_error(&e)))?;
    }
    Ok(object.into())
}

/// Rasterizes the element behind a [`NodeRef`]
pub struct HtmlToImageRasterizer {
    node: NodeRef,
}

impl HtmlToImageRasterizer {
    pub fn new(node: NodeRef) -> Self {
        Self { node }
    }
}

#[async_trait(?Send)]
impl Rasterizer for HtmlToImageRasterizer {
    async fn rasterize(&self, options: &RasterOptions) -> Result<String, RasterError> {
        let element = self
            .node
            .cast::<HtmlElement>()
            .ok_or_else(|| RasterError::new("preview card is not mounted"))?;
        let js_options = to_js_options(options)?;

        let promise = to_png(&element, &js_options)
            .map_err(|e| RasterError::new(describe_js_error(&e)))?;
        let data_url = JsFuture::from(promise)
            .await
            .map_err(|e| RasterError::new(describe_js_error(&e)))?;

        data_url
            .as_string()
            .ok_or_else(|| RasterError::new("toPng did not return a data URL"))
    }
}

/// Triggers a browser download by clicking a detached anchor
pub struct AnchorDownloadSink;

impl DownloadSink for AnchorDownloadSink {
    fn download(&self, filename: &str, data_url: &str) -> anyhow::Result<()> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| anyhow!("no document available"))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|e| anyhow!("failed to create anchor: {}", describe_js_error(&e)))?
            .dyn_into()
            .map_err(|_| anyhow!("created element is not an anchor"))?;

        anchor.set_download(filename);
        anchor.set_href(data_url);
        anchor.click();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_unmounted_node_is_an_error() {
        let rasterizer = HtmlToImageRasterizer::new(NodeRef::default());
        let err = rasterizer
            .rasterize(&RasterOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.message, "preview card is not mounted");
    }

    #[wasm_bindgen_test]
    fn test_describe_js_error() {
        let error = js_sys::Error::new("Tainted canvases may not be exported.");
        error.set_name("SecurityError");
        assert_eq!(
            describe_js_error(&error.into()),
            "SecurityError: Tainted canvases may not be exported."
        );
        assert_eq!(describe_js_error(&JsValue::from_str("plain")), "plain");
    }

    #[wasm_bindgen_test]
    fn test_options_are_passed_as_js_object() {
        let options = to_js_options(&RasterOptions::default()).unwrap();
        let pixel_ratio = Reflect::get(&options, &JsValue::from_str("pixelRatio")).unwrap();
        let cache_bust = Reflect::get(&options, &JsValue::from_str("cacheBust")).unwrap();
        assert_eq!(pixel_ratio.as_f64(), Some(2.0));
        assert_eq!(cache_bust.as_bool(), Some(true));
    }
}
