use anyhow::anyhow;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// GET `url` (http(s) or `data:`) and return the body bytes.
pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let opts = web::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web::RequestMode::Cors);
    let request =
        web::Request::new_with_str_and_init(url, &opts).map_err(|e| anyhow!("{:?}", e))?;
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow!("{:?}", e))?;
    let response: web::Response = response.dyn_into().map_err(|e| anyhow!("{:?}", e))?;
    if !response.ok() {
        return Err(anyhow!("HTTP {} for {}", response.status(), url));
    }
    let buffer = response.array_buffer().map_err(|e| anyhow!("{:?}", e))?;
    let buffer = JsFuture::from(buffer).await.map_err(|e| anyhow!("{:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
