//! DOM-to-bitmap rasterizer bindings.
//!
//! Two capture backends, tried in order: html-to-image's `toPng`
//! (visually accurate) and html2canvas (broadly compatible). Both are
//! globals installed by `<script>` tags in the app shell and reached
//! via `js_sys::Reflect`, so a blocked or missing script degrades into
//! a capture failure for that backend instead of a crash.

use quotecard_core::CaptureSpec;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Errors that can occur while rasterizing the preview element.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// The rasterizer global is absent (script not loaded or blocked).
    #[error("{0} is not available")]
    Unavailable(&'static str),

    /// A JS call failed or the rasterizer promise rejected.
    #[error("{method} failed: {message}")]
    Js {
        method: &'static str,
        message: String,
    },

    /// The rasterizer resolved with a value of an unexpected type.
    #[error("{method} returned an unexpected value")]
    UnexpectedReturn { method: &'static str },
}

/// One DOM-subtree-to-PNG capture backend.
///
/// [`ORDERED`](Self::ORDERED) lists the backends in attempt order:
/// the first entry is the most accurate, later entries are
/// progressively more compatible fallbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMethod {
    /// `htmlToImage.toPng` — accurate, honors the capture dimensions
    /// and inline style overrides directly.
    HtmlToImage,
    /// `html2canvas` — lower fidelity, but survives CSS features the
    /// primary backend chokes on.
    Html2Canvas,
}

impl CaptureMethod {
    /// Backends in attempt order.
    pub const ORDERED: [Self; 2] = [Self::HtmlToImage, Self::Html2Canvas];

    /// Human-readable backend name for logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HtmlToImage => "html-to-image",
            Self::Html2Canvas => "html2canvas",
        }
    }

    /// Rasterize `element` to a PNG data URL.
    ///
    /// # Errors
    ///
    /// Returns a [`CaptureError`] if the backend's global is missing,
    /// the call or its promise fails, or the resolved value is not
    /// what the backend is documented to produce.
    #[allow(clippy::future_not_send)] // WASM is single-threaded
    pub async fn capture(
        self,
        element: &web_sys::Element,
        spec: &CaptureSpec,
    ) -> Result<String, CaptureError> {
        match self {
            Self::HtmlToImage => html_to_image_to_png(element, spec).await,
            Self::Html2Canvas => html2canvas_to_png(element, spec).await,
        }
    }
}

/// Look up a global on `window`, treating `undefined`/`null` as absent.
fn global_value(name: &'static str) -> Result<JsValue, CaptureError> {
    let window = web_sys::window().ok_or(CaptureError::Unavailable("window"))?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .map_err(|_| CaptureError::Unavailable(name))?;
    if value.is_undefined() || value.is_null() {
        return Err(CaptureError::Unavailable(name));
    }
    Ok(value)
}

/// Set one property on an options object.
fn set_option(
    method: &'static str,
    options: &js_sys::Object,
    key: &str,
    value: &JsValue,
) -> Result<(), CaptureError> {
    js_sys::Reflect::set(options, &JsValue::from_str(key), value)
        .map_err(|e| js_failure(method, &e))?;
    Ok(())
}

fn js_failure(method: &'static str, value: &JsValue) -> CaptureError {
    CaptureError::Js {
        method,
        message: format!("{value:?}"),
    }
}

/// Primary capture: `htmlToImage.toPng(element, options)`.
///
/// Options force the captured element to exactly the capture
/// dimensions with zero margin/padding and block display, request a
/// transparent background, and bypass the library's resource cache.
#[allow(clippy::future_not_send)] // WASM is single-threaded
async fn html_to_image_to_png(
    element: &web_sys::Element,
    spec: &CaptureSpec,
) -> Result<String, CaptureError> {
    const METHOD: &str = "html-to-image";

    let namespace = global_value("htmlToImage")?;
    let to_png: js_sys::Function =
        js_sys::Reflect::get(&namespace, &JsValue::from_str("toPng"))
            .map_err(|_| CaptureError::Unavailable("htmlToImage.toPng"))?
            .dyn_into()
            .map_err(|_| CaptureError::Unavailable("htmlToImage.toPng"))?;

    let options = js_sys::Object::new();
    set_option(METHOD, &options, "cacheBust", &JsValue::TRUE)?;
    set_option(
        METHOD,
        &options,
        "pixelRatio",
        &JsValue::from_f64(spec.pixel_ratio),
    )?;
    set_option(
        METHOD,
        &options,
        "width",
        &JsValue::from_f64(f64::from(spec.width)),
    )?;
    set_option(
        METHOD,
        &options,
        "height",
        &JsValue::from_f64(f64::from(spec.height)),
    )?;
    set_option(METHOD, &options, "backgroundColor", &JsValue::NULL)?;

    let style = js_sys::Object::new();
    set_option(
        METHOD,
        &style,
        "width",
        &JsValue::from_str(&format!("{}px", spec.width)),
    )?;
    set_option(
        METHOD,
        &style,
        "height",
        &JsValue::from_str(&format!("{}px", spec.height)),
    )?;
    set_option(METHOD, &style, "margin", &JsValue::from_str("0"))?;
    set_option(METHOD, &style, "padding", &JsValue::from_str("0"))?;
    set_option(METHOD, &style, "display", &JsValue::from_str("block"))?;
    set_option(METHOD, &options, "style", &style)?;

    let promise: js_sys::Promise = to_png
        .call2(&JsValue::NULL, element, &options)
        .map_err(|e| js_failure(METHOD, &e))?
        .dyn_into()
        .map_err(|_| CaptureError::UnexpectedReturn { method: METHOD })?;

    let value = JsFuture::from(promise)
        .await
        .map_err(|e| js_failure(METHOD, &e))?;

    value
        .as_string()
        .ok_or(CaptureError::UnexpectedReturn { method: METHOD })
}

/// Fallback capture: `html2canvas(element, options)`, then
/// `canvas.toDataURL("image/png")`.
///
/// Runs at the same pixel ratio as the primary, with cross-origin
/// image loading allowed and a transparent background.
#[allow(clippy::future_not_send)] // WASM is single-threaded
async fn html2canvas_to_png(
    element: &web_sys::Element,
    spec: &CaptureSpec,
) -> Result<String, CaptureError> {
    const METHOD: &str = "html2canvas";

    let func: js_sys::Function = global_value("html2canvas")?
        .dyn_into()
        .map_err(|_| CaptureError::Unavailable("html2canvas"))?;

    let options = js_sys::Object::new();
    set_option(
        METHOD,
        &options,
        "scale",
        &JsValue::from_f64(spec.pixel_ratio),
    )?;
    set_option(METHOD, &options, "useCORS", &JsValue::TRUE)?;
    set_option(METHOD, &options, "backgroundColor", &JsValue::NULL)?;

    let promise: js_sys::Promise = func
        .call2(&JsValue::NULL, element, &options)
        .map_err(|e| js_failure(METHOD, &e))?
        .dyn_into()
        .map_err(|_| CaptureError::UnexpectedReturn { method: METHOD })?;

    let value = JsFuture::from(promise)
        .await
        .map_err(|e| js_failure(METHOD, &e))?;

    let canvas: web_sys::HtmlCanvasElement = value
        .dyn_into()
        .map_err(|_| CaptureError::UnexpectedReturn { method: METHOD })?;

    canvas
        .to_data_url_with_type("image/png")
        .map_err(|e| js_failure(METHOD, &e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_backend_is_tried_before_the_fallback() {
        assert_eq!(CaptureMethod::ORDERED.len(), 2);
        assert_eq!(CaptureMethod::ORDERED[0], CaptureMethod::HtmlToImage);
        assert_eq!(CaptureMethod::ORDERED[1], CaptureMethod::Html2Canvas);
    }

    #[test]
    fn labels_identify_each_backend() {
        assert_eq!(CaptureMethod::HtmlToImage.label(), "html-to-image");
        assert_eq!(CaptureMethod::Html2Canvas.label(), "html2canvas");
    }
}
