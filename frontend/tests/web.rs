#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlCanvasElement, HtmlElement, KeyboardEvent, KeyboardEventInit, MouseEvent};

use portfolio::background::{
    Animator, AnimatorError, BackgroundConfig, CanvasSurface, SurfaceError, Viewport,
};
use portfolio::config::HOVER_FADE_MS;
use portfolio::content::CONTENT;
use portfolio::pages::home::{HomePage, HomePageProps};

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_root() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

async fn settle() {
    TimeoutFuture::new(20).await;
}

fn find(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).unwrap()
}

fn click(root: &Element, selector: &str) {
    find(root, selector)
        .unwrap_or_else(|| panic!("{} not rendered", selector))
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn render_home() -> Element {
    let root = fresh_root();
    yew::Renderer::<HomePage>::with_root_and_props(root.clone(), HomePageProps { content: &CONTENT })
        .render();
    root
}

#[wasm_bindgen_test]
async fn image_card_opens_about_overlay_and_close_button_dismisses_it() {
    let root = render_home();
    settle().await;
    assert!(find(&root, ".about-modal").is_none());

    click(&root, ".image-card");
    settle().await;
    assert!(find(&root, ".about-modal").is_some());

    click(&root, ".about-modal__close");
    settle().await;
    assert!(find(&root, ".about-modal").is_none());
}

#[wasm_bindgen_test]
async fn backdrop_closes_overlay_but_body_clicks_do_not() {
    let root = render_home();
    settle().await;

    click(&root, ".image-card");
    settle().await;

    click(&root, ".about-modal__body");
    settle().await;
    assert!(find(&root, ".about-modal").is_some(), "click inside the body closed the overlay");

    click(&root, ".about-modal");
    settle().await;
    assert!(find(&root, ".about-modal").is_none());
}

fn style_of(root: &Element, selector: &str) -> String {
    find(root, selector).unwrap().get_attribute("style").unwrap_or_default()
}

fn dispatch(root: &Element, selector: &str, kind: &str) {
    let event = MouseEvent::new(kind).unwrap();
    find(root, selector).unwrap().dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
async fn contact_card_reveals_email_while_hovered() {
    let root = render_home();
    settle().await;

    let email = find(&root, ".contact-card__email").unwrap();
    assert!(email.text_content().unwrap_or_default().contains(CONTENT.contact_email));
    assert!(style_of(&root, ".contact-card__email").contains("opacity: 0"));
    assert!(style_of(&root, ".contact-card__cta").contains("opacity: 1"));

    dispatch(&root, ".contact-card", "mouseenter");
    TimeoutFuture::new(HOVER_FADE_MS).await;
    assert!(style_of(&root, ".contact-card__email").contains("opacity: 1"));
    assert!(style_of(&root, ".contact-card__cta").contains("opacity: 0"));
    assert!(style_of(&root, ".contact-card__email").contains(&format!("{}ms", HOVER_FADE_MS)));

    dispatch(&root, ".contact-card", "mouseleave");
    TimeoutFuture::new(HOVER_FADE_MS).await;
    assert!(style_of(&root, ".contact-card__email").contains("opacity: 0"));
    assert!(style_of(&root, ".contact-card__cta").contains("opacity: 1"));
}

#[wasm_bindgen_test]
async fn animator_draws_frames_and_releases_canvas_once() {
    let container = fresh_root();
    let mut animator = Animator::mount(&container, BackgroundConfig::default()).unwrap();

    let window = web_sys::window().unwrap();
    let canvas = container
        .query_selector("canvas")
        .unwrap()
        .expect("canvas appended")
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    let ratio = window.device_pixel_ratio();
    let css_width = window.inner_width().unwrap().as_f64().unwrap().floor();
    let css_height = window.inner_height().unwrap().as_f64().unwrap().floor();
    assert_eq!(canvas.width(), (css_width * ratio).round() as u32);
    assert_eq!(canvas.height(), (css_height * ratio).round() as u32);

    TimeoutFuture::new(100).await;
    assert!(animator.is_running());
    assert!(animator.frames() > 0);

    animator.stop();
    let frames_at_stop = animator.frames();
    assert!(!animator.is_running());
    assert!(container.query_selector("canvas").unwrap().is_none());

    animator.stop();
    TimeoutFuture::new(100).await;
    assert_eq!(animator.frames(), frames_at_stop);
    drop(animator);
}

#[wasm_bindgen_test]
async fn escape_closes_about_overlay() {
    let root = render_home();
    settle().await;

    click(&root, ".image-card");
    settle().await;
    assert!(find(&root, ".about-modal").is_some());

    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
    settle().await;
    assert!(find(&root, ".about-modal").is_none());
}

/// A canvas already bound to a non-2d context, so no 2d context can be had from it.
fn claimed_canvas() -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    let claimed = ["bitmaprenderer", "webgl"]
        .iter()
        .any(|kind| matches!(canvas.get_context(kind), Ok(Some(_))));
    assert!(claimed, "browser offers no non-2d canvas context");
    canvas
}

#[wasm_bindgen_test]
fn surface_without_2d_context_is_unavailable() {
    let result = CanvasSurface::new(claimed_canvas(), Viewport::new(320, 240), 1.0);
    assert!(matches!(result, Err(SurfaceError::ContextUnavailable)));
}

#[wasm_bindgen_test]
fn failed_mount_leaves_no_canvas_behind() {
    let container = fresh_root();
    let result = Animator::mount_canvas(&container, claimed_canvas(), BackgroundConfig::default());

    assert!(matches!(
        result,
        Err(AnimatorError::Surface(SurfaceError::ContextUnavailable))
    ));
    assert!(container.query_selector("canvas").unwrap().is_none());
}
