use crate::constants::{HUB_VIDEO_ID, MEDIA_HAVE_METADATA};
use crate::dom;
use gallery_core::{Dataset, EngineState};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Decoded media the renderer draws from, keyed the way the engine refers to it.
#[derive(Default)]
pub struct AssetStore {
    images: HashMap<usize, web::HtmlImageElement>,
    video: Option<web::HtmlVideoElement>,
}

impl AssetStore {
    #[inline]
    pub fn image(&self, dataset_index: usize) -> Option<&web::HtmlImageElement> {
        self.images.get(&dataset_index)
    }

    #[inline]
    pub fn video(&self) -> Option<&web::HtmlVideoElement> {
        self.video.as_ref()
    }
}

/// Start loading every dataset image. Completions arrive in any order and are
/// handed to the engine as they land.
pub fn load_images(
    dataset: &Dataset,
    engine: &Rc<RefCell<EngineState>>,
    store: &Rc<RefCell<AssetStore>>,
) -> anyhow::Result<()> {
    for row in &dataset.rows {
        let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

        let onload = {
            let engine = engine.clone();
            let store = store.clone();
            let row = row.clone();
            let img = img.clone();
            Closure::wrap(Box::new(move || {
                if engine.borrow_mut().image_loaded(&row).is_some() {
                    store.borrow_mut().images.insert(row.index, img.clone());
                }
            }) as Box<dyn FnMut()>)
        };
        let onerror = {
            let engine = engine.clone();
            let row = row.clone();
            Closure::wrap(Box::new(move || {
                engine.borrow_mut().image_failed(&row, "image failed to load");
            }) as Box<dyn FnMut()>)
        };
        img.set_onload(Some(onload.as_ref().unchecked_ref()));
        img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onload.forget();
        onerror.forget();

        img.set_src(&row.path);
    }
    log::info!("[assets] requested {} images", dataset.len());
    Ok(())
}

/// Hook the page's hub video up to the engine, if the page has one.
pub fn attach_video_hub(
    document: &web::Document,
    engine: &Rc<RefCell<EngineState>>,
    store: &Rc<RefCell<AssetStore>>,
) {
    let Some(video) = dom::element_by_id::<web::HtmlVideoElement>(document, HUB_VIDEO_ID) else {
        log::info!("[assets] no #{} element; running without a hub", HUB_VIDEO_ID);
        return;
    };
    let mut source = video.current_src();
    if source.is_empty() {
        source = video.src();
    }
    if source.is_empty() {
        log::warn!("[assets] #{} has no source", HUB_VIDEO_ID);
        return;
    }
    video.set_muted(true);
    video.set_loop(true);

    let install = {
        let engine = engine.clone();
        let store = store.clone();
        let video = video.clone();
        let source = source.clone();
        move || {
            engine.borrow_mut().set_video_hub(&source);
            store.borrow_mut().video = Some(video.clone());
            let _ = video.play();
        }
    };
    if video.ready_state() >= MEDIA_HAVE_METADATA {
        install();
    } else {
        dom::add_listener(&video, "loadedmetadata", install);
    }

    let engine = engine.clone();
    let store = store.clone();
    dom::add_listener(&video, "error", move || {
        store.borrow_mut().video = None;
        engine.borrow_mut().video_failed(&source, "media error");
    });
}
