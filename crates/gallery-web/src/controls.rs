use crate::constants::*;
use crate::dom;
use gallery_core::{ConfigSource, EngineConfig, EngineState, FrameClock, LinkKind};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone, Copy, Debug)]
enum Field {
    NodeIntensity,
    NodeMinSize,
    NodeMaxSize,
    Density(LinkKind),
}

impl Field {
    fn get(self, config: &EngineConfig) -> f32 {
        match self {
            Field::NodeIntensity => config.node_intensity,
            Field::NodeMinSize => config.node_min_size_ratio,
            Field::NodeMaxSize => config.node_max_size_ratio,
            Field::Density(kind) => config.intensity(kind),
        }
    }

    fn set(self, config: &mut EngineConfig, value: f32) {
        match self {
            Field::NodeIntensity => config.node_intensity = value,
            Field::NodeMinSize => config.node_min_size_ratio = value,
            Field::NodeMaxSize => config.node_max_size_ratio = value,
            Field::Density(kind) => config.set_intensity(kind, value),
        }
    }
}

const SLIDERS: [(&str, Field); 8] = [
    (CONTROL_NODE_INTENSITY, Field::NodeIntensity),
    (CONTROL_NODE_MIN_SIZE, Field::NodeMinSize),
    (CONTROL_NODE_MAX_SIZE, Field::NodeMaxSize),
    (CONTROL_IMAGE_IMAGE, Field::Density(LinkKind::ImageImage)),
    (CONTROL_NODE_IMAGE, Field::Density(LinkKind::NodeImage)),
    (CONTROL_NODE_NODE, Field::Density(LinkKind::NodeNode)),
    (CONTROL_HUB_IMAGE, Field::Density(LinkKind::HubImage)),
    (CONTROL_HUB_NODE, Field::Density(LinkKind::HubNode)),
];

/// Range inputs and the lines-behind checkbox, read as one [`EngineConfig`].
/// Fields without a control on the page keep their last applied value.
pub struct DomConfigSource {
    sliders: Vec<(Field, web::HtmlInputElement)>,
    lines_behind: Option<web::HtmlInputElement>,
    last: EngineConfig,
}

impl DomConfigSource {
    /// `None` when the page has no controls at all.
    pub fn discover(document: &web::Document, current: &EngineConfig) -> Option<Self> {
        let sliders: Vec<_> = SLIDERS
            .iter()
            .filter_map(|(id, field)| {
                dom::element_by_id::<web::HtmlInputElement>(document, id).map(|el| (*field, el))
            })
            .collect();
        let lines_behind: Option<web::HtmlInputElement> =
            dom::element_by_id(document, CONTROL_LINES_BEHIND);
        if sliders.is_empty() && lines_behind.is_none() {
            return None;
        }
        log::info!(
            "[config] found {} sliders, lines toggle: {}",
            sliders.len(),
            lines_behind.is_some()
        );
        Some(Self {
            sliders,
            lines_behind,
            last: current.clone(),
        })
    }
}

impl ConfigSource for DomConfigSource {
    fn read(&self) -> EngineConfig {
        let mut config = self.last.clone();
        for (field, input) in &self.sliders {
            let v = input.value_as_number();
            if v.is_finite() {
                field.set(&mut config, v as f32);
            }
        }
        if let Some(toggle) = &self.lines_behind {
            config.lines_behind = toggle.checked();
        }
        config
    }

    fn reflect(&mut self, applied: &EngineConfig) {
        for (field, input) in &self.sliders {
            input.set_value_as_number(field.get(applied) as f64);
        }
        if let Some(toggle) = &self.lines_behind {
            toggle.set_checked(applied.lines_behind);
        }
        self.last = applied.clone();
    }
}

/// Notify the engine on every edit; it applies the values once edits settle.
pub fn wire_control_listeners(
    document: &web::Document,
    engine: &Rc<RefCell<EngineState>>,
    clock: FrameClock,
) {
    let ids = SLIDERS
        .iter()
        .map(|(id, _)| *id)
        .chain(std::iter::once(CONTROL_LINES_BEHIND));
    for id in ids {
        let Some(el) = document.get_element_by_id(id) else {
            continue;
        };
        let engine = engine.clone();
        dom::add_listener(&el, "input", move || {
            engine.borrow_mut().notify_config_changed(clock.seconds());
        });
    }
}
