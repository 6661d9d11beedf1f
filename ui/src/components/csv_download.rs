use kgtrack_common::csv_export::default_export_filename;
use kgtrack_common::store::KvBackend;
use kgtrack_common::tracker::Tracker;

use super::dashboard_state::today;

/// Offer the full customer list as a CSV download.
pub fn download_csv<B: KvBackend>(tracker: &Tracker<B>) {
    let csv = tracker.export_csv();
    let filename = default_export_filename(today());
    if let Err(e) = trigger_download(&filename, &csv) {
        tracing::error!(error = %e, "CSV export failed");
    }
}

#[cfg(target_family = "wasm")]
fn trigger_download(filename: &str, contents: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;
    let body = document.body().ok_or("No body")?;

    let parts = js_sys::Array::of1(&contents.into());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| format!("Blob error: {:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("URL error: {:?}", e))?;

    let link: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("Element error: {:?}", e))?
        .dyn_into()
        .map_err(|_| "Not an anchor element")?;
    link.set_href(&url);
    link.set_download(filename);
    link.style().set_property("visibility", "hidden").ok();

    body.append_child(&link)
        .map_err(|e| format!("Append error: {:?}", e))?;
    link.click();
    body.remove_child(&link).ok();
    web_sys::Url::revoke_object_url(&url).ok();
    Ok(())
}

#[cfg(not(target_family = "wasm"))]
fn trigger_download(filename: &str, contents: &str) -> Result<(), String> {
    std::fs::write(filename, contents).map_err(|e| format!("Write error: {e}"))?;
    tracing::info!(filename, "CSV written");
    Ok(())
}
