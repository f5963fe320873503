//! Browser-side "save file" helper for generated documents.

use anyhow::{anyhow, Result};
use gloo::file::{Blob, ObjectUrl};
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

/// Offer `bytes` as a download named `name` through a temporary object URL
/// and a synthetic anchor click.
pub fn save(name: &str, bytes: &[u8], mime_type: &str) -> Result<()> {
    let blob = Blob::new_with_options(bytes, Some(mime_type));
    let url = ObjectUrl::from(blob);

    let anchor: HtmlAnchorElement = gloo_utils::document()
        .create_element("a")
        .map_err(|err| anyhow!("creating the download anchor failed: {err:?}"))?
        .dyn_into()
        .map_err(|err| anyhow!("anchor has an unexpected element type: {err:?}"))?;

    anchor.set_href(&url);
    anchor.set_download(name);
    anchor.click();

    Ok(())
}
