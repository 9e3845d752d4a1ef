//! Browser host bridge (feature `web`).
//!
//! Maps [`NodeVisual`] state onto real elements and exposes a small
//! `wasm-bindgen` façade so a page script can feed observer, pointer and
//! scroll callbacks into the engine and call [`WebMotion::frame`] from
//! `requestAnimationFrame`.

use glam::Vec2;
use rustc_hash::FxHashMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast as _;
use web_sys::HtmlElement;
use web_time::Instant;

use crate::engine::{MotionEngine, MotionEvent};
use crate::input::InputFeed;
use crate::node::{Bounds, CharUnit, GroupId, NodeDecl, NodeId, NodeVisual};
use crate::options::MotionOptions;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Route `log` output to the browser console and install the panic hook.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}

/// Current value of the platform reduced-motion preference.
///
/// Returns `false` when the window or the media query is unavailable.
#[must_use]
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .is_some_and(|mql| mql.matches())
}

fn set_style(el: &HtmlElement, name: &str, value: &str) {
    if el.style().set_property(name, value).is_err() {
        log::warn!("failed to set {name} on element");
    }
}

fn transform_css(translate: Vec2, scale: f32) -> String {
    format!(
        "translate({:.3}px, {:.3}px) scale({:.4})",
        translate.x, translate.y, scale
    )
}

/// Write one node's visual state to its element.
///
/// Reveal inner surfaces use the first element child; split titles get one
/// `<span>` per unit, created the first time the units appear.
pub fn apply_visual(el: &HtmlElement, visual: &NodeVisual) {
    set_style(el, "opacity", &format!("{:.4}", visual.opacity));
    let t = visual.transform();
    if t.is_identity() {
        set_style(el, "transform", "");
    } else {
        set_style(el, "transform", &transform_css(t.translate, t.scale));
    }
    set_style(el, "--glow", &format!("{:.4}", visual.glow));

    if let Some(progress) = visual.progress {
        set_style(el, "--progress", &format!("{progress:.4}"));
    }

    if let Some(inner) = el
        .first_element_child()
        .and_then(|c| c.dyn_into::<HtmlElement>().ok())
    {
        if visual.content_offset_pct != 0.0 {
            set_style(
                &inner,
                "transform",
                &format!("translateY({:.3}%)", visual.content_offset_pct),
            );
        } else if visual.text.is_none() && !visual.is_split() {
            set_style(&inner, "transform", "");
        }
    }

    match &visual.ripple {
        Some(r) => {
            set_style(el, "--ripple-x", &format!("{:.2}px", r.center.x));
            set_style(el, "--ripple-y", &format!("{:.2}px", r.center.y));
            set_style(el, "--ripple-radius", &format!("{:.2}px", r.radius));
            set_style(el, "--ripple-opacity", &format!("{:.4}", r.opacity));
        }
        None => set_style(el, "--ripple-opacity", "0"),
    }

    if visual.is_split() {
        apply_units(el, &visual.chars);
    } else if let Some(text) = &visual.text {
        el.set_text_content(Some(text.as_str()));
    }
}

fn apply_units(el: &HtmlElement, units: &[CharUnit]) {
    if el.child_element_count() as usize != units.len() {
        let Some(doc) = el.owner_document() else {
            log::warn!("split title has no owner document");
            return;
        };
        el.set_text_content(None);
        for unit in units {
            let Ok(span) = doc.create_element("span") else {
                log::warn!("failed to create title unit");
                return;
            };
            span.set_text_content(Some(unit.ch.to_string().as_str()));
            if el.append_child(&span).is_err() {
                log::warn!("failed to attach title unit");
                return;
            }
        }
    }
    let children = el.children();
    for (i, unit) in (0_u32..).zip(units) {
        let Some(span) = children
            .item(i)
            .and_then(|c| c.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        set_style(&span, "display", "inline-block");
        set_style(&span, "opacity", &format!("{:.4}", unit.opacity));
        set_style(
            &span,
            "transform",
            &format!("translateY({:.3}px)", unit.offset_y),
        );
    }
}

/// Engine plus the elements it drives, exported to page scripts.
#[wasm_bindgen]
pub struct WebMotion {
    engine: MotionEngine,
    feed: InputFeed,
    elements: FxHashMap<NodeId, HtmlElement>,
    live_region: Option<HtmlElement>,
}

impl std::fmt::Debug for WebMotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebMotion")
            .field("engine", &self.engine)
            .field("elements_len", &self.elements.len())
            .field("live_region", &self.live_region.is_some())
            .finish()
    }
}

#[wasm_bindgen]
impl WebMotion {
    /// Create an engine from a TOML preset (empty string for defaults).
    #[wasm_bindgen(constructor)]
    pub fn new(options_toml: &str) -> Result<WebMotion, JsValue> {
        init_logging();
        let options = if options_toml.trim().is_empty() {
            MotionOptions::default()
        } else {
            MotionOptions::from_toml(options_toml)
                .map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        let (mut engine, feed) = MotionEngine::new(options);
        let _ = engine.set_reduced_motion(prefers_reduced_motion(), Instant::now());
        Ok(Self {
            engine,
            feed,
            elements: FxHashMap::default(),
            live_region: None,
        })
    }

    /// Element whose text receives rate-limited announcements.
    pub fn set_live_region(&mut self, el: HtmlElement) {
        self.live_region = Some(el);
    }

    /// Register `el` under `id`, classified from its class list.
    ///
    /// Group membership and counter targets come from `data-group`,
    /// `data-index` and `data-target` attributes.
    pub fn register(&mut self, id: u32, el: HtmlElement) -> Result<(), JsValue> {
        let node = NodeId(u64::from(id));
        let mut decl = NodeDecl::new().text(el.text_content().unwrap_or_default());
        for marker in el.class_name().split_whitespace() {
            decl = decl.marker(marker);
        }
        if let Some(target) = el
            .get_attribute("data-target")
            .and_then(|t| t.trim().parse::<f64>().ok())
        {
            decl = decl.target(target);
        }
        let group = el
            .get_attribute("data-group")
            .and_then(|g| g.trim().parse::<u64>().ok());
        let index = el
            .get_attribute("data-index")
            .and_then(|i| i.trim().parse::<usize>().ok());
        if let (Some(group), Some(index)) = (group, index) {
            decl = decl.in_group(GroupId(group), index);
        }
        if el.class_list().contains("magnetic") {
            decl = decl.magnetic();
        }
        if el.class_list().contains("progress-bar") {
            decl = decl.progress_bar();
        }
        if let Some(speed) = el
            .get_attribute("data-parallax")
            .and_then(|s| s.trim().parse::<f32>().ok())
        {
            decl = decl.parallax(speed);
        }
        let rect = el.get_bounding_client_rect();
        #[allow(clippy::cast_possible_truncation)]
        let bounds = Bounds::new(
            rect.x() as f32,
            rect.y() as f32,
            rect.width() as f32,
            rect.height() as f32,
        );
        decl = decl.bounds(bounds);

        self.engine
            .register(node, decl, Instant::now())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        if let Some(visual) = self.engine.visual(node) {
            apply_visual(&el, visual);
        }
        let _ = self.elements.insert(node, el);
        Ok(())
    }

    /// Stop managing `id`.
    pub fn unregister(&mut self, id: u32) -> bool {
        let _ = self.elements.remove(&NodeId(u64::from(id)));
        self.engine.unregister(NodeId(u64::from(id)))
    }

    /// Intersection observer callback.
    pub fn visibility(&self, id: u32, ratio: f32) {
        let _ = self.feed.visibility(NodeId(u64::from(id)), ratio);
    }

    /// Pointer moved to page coordinates.
    pub fn pointer_move(&self, x: f32, y: f32) {
        let _ = self.feed.pointer_move(x, y);
    }

    /// Pointer left the page.
    pub fn pointer_leave(&self) {
        let _ = self.feed.pointer_leave();
    }

    /// Press start on `id`, relative to its origin.
    pub fn press(&self, id: u32, x: f32, y: f32) {
        let _ = self.feed.press(NodeId(u64::from(id)), x, y);
    }

    /// Press end on `id`.
    pub fn release(&self, id: u32) {
        let _ = self.feed.release(NodeId(u64::from(id)));
    }

    /// Hover change on `id`.
    pub fn hover(&self, id: u32, entered: bool) {
        let _ = self.feed.hover(NodeId(u64::from(id)), entered);
    }

    /// Raw scroll position.
    pub fn scroll(&self, offset: f32) {
        let _ = self.feed.scroll(offset);
    }

    /// Page or viewport size changed.
    pub fn resize(&self, content_height: f32, viewport_height: f32) {
        let _ = self.feed.resize(content_height, viewport_height);
    }

    /// Reduced-motion media query changed.
    pub fn reduced_motion(&self, reduced: bool) {
        let _ = self.feed.reduced_motion(reduced);
    }

    /// Run one frame and write every changed node to the page.
    ///
    /// Returns `true` while anything is still animating.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let busy = self.engine.frame(now);
        // Interval runs check their own due time.
        let timers = self.engine.tick_timers(now);
        self.flush();
        busy || timers
    }
}

impl WebMotion {
    fn flush(&mut self) {
        for id in self.engine.take_dirty() {
            if let (Some(el), Some(visual)) =
                (self.elements.get(&id), self.engine.visual(id))
            {
                apply_visual(el, visual);
            }
        }
        for event in self.engine.drain_events() {
            match event {
                MotionEvent::Announcement(text) => {
                    if let Some(region) = &self.live_region {
                        region.set_text_content(Some(text.as_str()));
                    }
                }
                other => log::debug!("{other:?}"),
            }
        }
    }
}
