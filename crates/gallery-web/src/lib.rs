#![cfg(target_arch = "wasm32")]
mod assets;
mod constants;
mod controls;
mod dom;
mod events;
mod frame;
mod input;
mod render;

use crate::constants::{CANVAS_ID, COORDS_URL, FILES_URL};
use gallery_core::{Dataset, EngineConfig, EngineState, FrameClock};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    dom::sync_canvas_backing_size(&canvas);
    let viewport = dom::canvas_viewport(&canvas).unwrap_or_default();

    let coords = fetch_text(&window, COORDS_URL).await?;
    let files = fetch_text(&window, FILES_URL).await?;
    let dataset = Dataset::from_sources(&coords, &files);

    let seed = window
        .location()
        .search()
        .ok()
        .and_then(|s| input::seed_from_query(&s))
        .unwrap_or_else(|| input::seed_from_unit(js_sys::Math::random()));
    log::info!(
        "[init] {} rows, viewport {}x{}, seed {}",
        dataset.len(),
        viewport.width,
        viewport.height,
        seed
    );

    let engine = Rc::new(RefCell::new(EngineState::with_dataset(
        viewport,
        EngineConfig::default(),
        &dataset,
        seed,
    )));
    let clock = FrameClock::new();

    // Page controls are authoritative at startup: pull them on the first due frame
    let config = engine.borrow().config().clone();
    if let Some(source) = controls::DomConfigSource::discover(&document, &config) {
        let mut e = engine.borrow_mut();
        e.attach_config_source(Box::new(source));
        e.notify_config_changed(clock.seconds());
        drop(e);
        controls::wire_control_listeners(&document, &engine, clock);
    }

    let store = Rc::new(RefCell::new(assets::AssetStore::default()));
    assets::load_images(&dataset, &engine, &store)?;
    assets::attach_video_hub(&document, &engine, &store);

    events::wire_input_handlers(events::InputWiring {
        engine: engine.clone(),
        canvas: canvas.clone(),
    });

    let renderer = render::CanvasRenderer::new(&canvas, store)?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        renderer,
        tooltip: dom::TooltipElements::discover(&document),
        clock,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

async fn fetch_text(window: &web::Window, url: &str) -> anyhow::Result<String> {
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!(format!("fetch {}: {:?}", url, e)))?
        .dyn_into::<web::Response>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, resp.status());
    }
    let text = resp
        .text()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    JsFuture::from(text)
        .await
        .map_err(|e| anyhow::anyhow!(format!("read {}: {:?}", url, e)))?
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("{} is not text", url))
}
