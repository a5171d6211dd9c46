//! Deferred image source promotion.
//!
//! Product thumbnails are rendered as `<img loading="lazy" data-src="...">`.
//! At bind time `data-src` is copied into `src` while `loading="lazy"` stays
//! on the element, so the browser still decides when to fetch.

#[cfg(test)]
#[path = "lazy_images_test.rs"]
mod lazy_images_test;

/// Selector for images the server marked for lazy loading.
pub const LAZY_IMAGE_SELECTOR: &str = "img[loading='lazy']";

/// Decide the `src` to assign, if any.
///
/// Returns `None` when there is no usable `data-src` or `src` already points
/// at it.
pub fn promoted_source(current_src: &str, data_src: Option<&str>) -> Option<String> {
    let data_src = data_src.map(str::trim).filter(|s| !s.is_empty())?;
    if current_src == data_src {
        return None;
    }
    Some(data_src.to_owned())
}

/// Promote `data-src` on every lazy image in the document. Returns how many
/// images were updated.
#[cfg(feature = "hydrate")]
pub fn promote_all(document: &web_sys::Document) -> usize {
    use wasm_bindgen::JsCast;

    let images = match document.query_selector_all(LAZY_IMAGE_SELECTOR) {
        Ok(list) => list,
        Err(e) => {
            leptos::logging::warn!("lazy image query failed: {e:?}");
            return 0;
        }
    };
    if !native_lazy_loading() {
        leptos::logging::log!("native lazy loading unsupported; images load eagerly");
    }

    let mut promoted = 0;
    for index in 0..images.length() {
        let Some(node) = images.item(index) else {
            continue;
        };
        let Ok(img) = node.dyn_into::<web_sys::HtmlImageElement>() else {
            continue;
        };
        let data_src = img.get_attribute("data-src");
        if let Some(src) = promoted_source(&img.src(), data_src.as_deref()) {
            img.set_src(&src);
            promoted += 1;
        }
    }
    promoted
}

/// Whether `HTMLImageElement.prototype` exposes `loading`.
#[cfg(feature = "hydrate")]
fn native_lazy_loading() -> bool {
    use wasm_bindgen::JsValue;

    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(ctor) = js_sys::Reflect::get(&window, &JsValue::from_str("HTMLImageElement")) else {
        return false;
    };
    let Ok(proto) = js_sys::Reflect::get(&ctor, &JsValue::from_str("prototype")) else {
        return false;
    };
    js_sys::Reflect::has(&proto, &JsValue::from_str("loading")).unwrap_or(false)
}
