use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlCanvasElement, MouseEvent, Window};

use super::surface::{CanvasSurface, SurfaceError};
use super::{Background, BackgroundConfig, Pointer, Viewport};

#[derive(Debug, Error)]
pub enum AnimatorError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("background container not mounted")]
    MissingContainer,
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

impl From<JsValue> for AnimatorError {
    fn from(value: JsValue) -> Self {
        AnimatorError::Dom(format!("{:?}", value))
    }
}

fn window_viewport(window: &Window) -> Result<Viewport, AnimatorError> {
    let width = window.inner_width()?.as_f64().unwrap_or_default();
    let height = window.inner_height()?.as_f64().unwrap_or_default();
    Ok(Viewport::new(width.max(0.0) as u32, height.max(0.0) as u32))
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running dot-grid backdrop attached to the page.
///
/// Created in the background component's mount effect and stopped in its
/// cleanup. Dropping it stops it too.
pub struct Animator {
    window: Window,
    background: Rc<RefCell<Background<CanvasSurface>>>,
    frame: FrameCallback,
    raf_id: Rc<Cell<Option<i32>>>,
    on_resize: Option<Closure<dyn FnMut()>>,
    on_pointer: Option<Closure<dyn FnMut(MouseEvent)>>,
}

impl Animator {
    /// Appends a full-window canvas to `container` and starts the frame loop.
    pub fn mount(container: &Element, config: BackgroundConfig) -> Result<Self, AnimatorError> {
        let window = web_sys::window().ok_or(AnimatorError::NoWindow)?;
        let document = window.document().ok_or(AnimatorError::NoDocument)?;

        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AnimatorError::Dom("created element is not a canvas".to_string()))?;
        Self::mount_canvas(container, canvas, config)
    }

    /// Like [`Animator::mount`] but draws on the given canvas. The canvas is
    /// removed again if a 2d context can't be had from it.
    pub fn mount_canvas(
        container: &Element,
        canvas: HtmlCanvasElement,
        config: BackgroundConfig,
    ) -> Result<Self, AnimatorError> {
        let window = web_sys::window().ok_or(AnimatorError::NoWindow)?;
        canvas.set_class_name("dot-grid-canvas");
        container.append_child(&canvas)?;

        let viewport = window_viewport(&window)?;
        let surface = match CanvasSurface::new(canvas.clone(), viewport, window.device_pixel_ratio()) {
            Ok(surface) => surface,
            Err(err) => {
                canvas.remove();
                return Err(err.into());
            }
        };
        let background = Rc::new(RefCell::new(Background::new(surface, config)));

        let mut animator = Self {
            window,
            background,
            frame: Rc::new(RefCell::new(None)),
            raf_id: Rc::new(Cell::new(None)),
            on_resize: None,
            on_pointer: None,
        };
        // On failure `animator` drops here and tears down whatever was wired.
        animator.listen()?;
        animator.start()?;

        info!("Background animator mounted at {}x{}", viewport.width, viewport.height);
        Ok(animator)
    }

    fn listen(&mut self) -> Result<(), AnimatorError> {
        let on_resize = {
            let background = self.background.clone();
            let window = self.window.clone();
            Closure::wrap(Box::new(move || {
                let viewport = match window_viewport(&window) {
                    Ok(viewport) => viewport,
                    Err(err) => {
                        warn!("Could not read viewport size: {}", err);
                        return;
                    }
                };
                debug!("Resizing background to {}x{}", viewport.width, viewport.height);
                if let Err(err) = background.borrow_mut().resize(viewport) {
                    warn!("Background resize failed: {}", err);
                }
            }) as Box<dyn FnMut()>)
        };
        self.window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        self.on_resize = Some(on_resize);

        let on_pointer = {
            let background = self.background.clone();
            Closure::wrap(Box::new(move |e: MouseEvent| {
                background
                    .borrow_mut()
                    .set_pointer(Pointer::new(e.client_x() as f64, e.client_y() as f64));
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        self.window
            .add_event_listener_with_callback("pointermove", on_pointer.as_ref().unchecked_ref())?;
        self.on_pointer = Some(on_pointer);

        Ok(())
    }

    fn start(&mut self) -> Result<(), AnimatorError> {
        let frame_loop = self.frame.clone();
        let background = self.background.clone();
        let raf_id = self.raf_id.clone();
        let window = self.window.clone();

        *self.frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            raf_id.set(None);
            let keep_going = match background.borrow_mut().tick() {
                Ok(running) => running,
                Err(err) => {
                    warn!("Background frame failed, stopping animation: {}", err);
                    false
                }
            };
            if !keep_going {
                return;
            }
            if let Some(callback) = frame_loop.borrow().as_ref() {
                match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    Ok(id) => raf_id.set(Some(id)),
                    Err(err) => warn!("requestAnimationFrame failed: {:?}", err),
                }
            }
        }) as Box<dyn FnMut()>));

        let id = match self.frame.borrow().as_ref() {
            Some(callback) => self
                .window
                .request_animation_frame(callback.as_ref().unchecked_ref())?,
            None => return Ok(()),
        };
        self.raf_id.set(Some(id));
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.background.borrow().is_running()
    }

    pub fn frames(&self) -> u64 {
        self.background.borrow().frames()
    }

    /// Stops the loop, detaches listeners and removes the canvas. Safe to call twice.
    pub fn stop(&mut self) {
        if !self.background.borrow_mut().shutdown() {
            return;
        }
        if let Some(id) = self.raf_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        if let Some(on_resize) = self.on_resize.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        }
        if let Some(on_pointer) = self.on_pointer.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("pointermove", on_pointer.as_ref().unchecked_ref());
        }
        // breaks the closure's reference to itself
        self.frame.borrow_mut().take();
        info!("Background animator stopped after {} frames", self.frames());
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.stop();
    }
}
