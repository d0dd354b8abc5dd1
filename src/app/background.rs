use leptos::{html, prelude::*};

use crate::ambient::SceneConfig;

/// Full-screen decorative canvas behind the page.
///
/// In the browser this owns an [`AmbientLoop`](crate::ambient::AmbientLoop)
/// for as long as the component is mounted. If no 2d context can be had the
/// canvas just stays blank.
#[component]
pub fn AmbientBackground(#[prop(optional)] config: Option<SceneConfig>) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::ambient::Scene;

        let mounted = StoredValue::new_local(None::<browser::BrowserLoop>);
        let config = config.unwrap_or_default();
        Effect::new(move |_| {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if mounted.with_value(Option::is_some) {
                return;
            }
            match browser::mount(canvas, Scene::new(config.clone())) {
                Ok(ambient) => mounted.set_value(Some(ambient)),
                Err(e) => log::warn!("ambient background disabled: {e}"),
            }
        });
        on_cleanup(move || {
            if let Some(Some(ambient)) = mounted.try_update_value(Option::take) {
                ambient.borrow_mut().stop();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    view! {
        <canvas
            node_ref=canvas_ref
            class="fixed inset-0 pointer-events-none z-0"
            data-testid="animated-background-canvas"
        />
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::{cell::RefCell, rc::Rc};

    use leptos::prelude::window;
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use crate::ambient::{
        AmbientError, AmbientLoop, FrameHandle, FrameHost, Glow, Point, Scene, Stroke, Surface,
        Viewport,
    };

    pub type BrowserLoop = Rc<RefCell<AmbientLoop<CanvasSurface, BrowserHost>>>;

    type Callback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

    pub struct CanvasSurface {
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
    }

    impl CanvasSurface {
        fn new(canvas: HtmlCanvasElement) -> Result<Self, AmbientError> {
            let ctx = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .ok_or(AmbientError::NoContext)?
                .dyn_into::<CanvasRenderingContext2d>()
                .map_err(|_| AmbientError::NoContext)?;
            Ok(Self { canvas, ctx })
        }
    }

    impl Surface for CanvasSurface {
        fn size(&self) -> Viewport {
            Viewport::new(self.canvas.width() as f64, self.canvas.height() as f64)
        }

        fn resize(&mut self, viewport: Viewport) {
            self.canvas.set_width(viewport.width.max(0.0) as u32);
            self.canvas.set_height(viewport.height.max(0.0) as u32);
        }

        fn clear(&mut self) {
            let size = self.size();
            self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
        }

        fn stroke_path(&mut self, points: &[Point], stroke: Stroke) {
            let Some((first, rest)) = points.split_first() else {
                return;
            };
            self.ctx.begin_path();
            self.ctx.set_stroke_style_str(&stroke.color.to_string());
            self.ctx.set_line_width(stroke.width);
            self.ctx.move_to(first.x, first.y);
            for p in rest {
                self.ctx.line_to(p.x, p.y);
            }
            self.ctx.stroke();
        }

        fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
            self.stroke_path(&[from, to], stroke);
        }

        fn fill_glow(&mut self, glow: &Glow) {
            let Glow {
                center,
                radius,
                color,
                bounds,
            } = *glow;
            let Ok(gradient) = self
                .ctx
                .create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)
            else {
                return;
            };
            if gradient.add_color_stop(0.0, &color.to_string()).is_err()
                || gradient
                    .add_color_stop(1.0, &color.with_alpha(0.0).to_string())
                    .is_err()
            {
                return;
            }
            self.ctx.set_fill_style_canvas_gradient(&gradient);
            self.ctx
                .fill_rect(bounds.x, bounds.y, bounds.width, bounds.height);
        }
    }

    /// Schedules frames with `requestAnimationFrame` and listens for window
    /// resizes. The callbacks only hold weak references to the loop.
    pub struct BrowserHost {
        on_frame: Callback,
        on_resize: Callback,
    }

    fn dimension(value: Result<JsValue, JsValue>) -> f64 {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    }

    impl FrameHost for BrowserHost {
        fn viewport(&self) -> Viewport {
            let window = window();
            Viewport::new(dimension(window.inner_width()), dimension(window.inner_height()))
        }

        fn request_frame(&mut self) -> Option<FrameHandle> {
            let on_frame = self.on_frame.borrow();
            let callback = on_frame.as_ref()?;
            window()
                .request_animation_frame(callback.as_ref().unchecked_ref())
                .ok()
                .map(FrameHandle)
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            if window().cancel_animation_frame(handle.0).is_err() {
                log::warn!("couldn't cancel animation frame {}", handle.0);
            }
        }

        fn detach(&mut self) {
            if let Some(callback) = self.on_resize.borrow_mut().take() {
                if window()
                    .remove_event_listener_with_callback(
                        "resize",
                        callback.as_ref().unchecked_ref(),
                    )
                    .is_err()
                {
                    log::warn!("couldn't remove resize listener");
                }
            }
            self.on_frame.borrow_mut().take();
        }
    }

    pub fn mount(canvas: HtmlCanvasElement, scene: Scene) -> Result<BrowserLoop, AmbientError> {
        let surface = CanvasSurface::new(canvas)?;
        let on_frame = Callback::default();
        let on_resize = Callback::default();
        let host = BrowserHost {
            on_frame: on_frame.clone(),
            on_resize: on_resize.clone(),
        };
        let ambient = Rc::new(RefCell::new(AmbientLoop::new(scene, surface, host)));
        let token = ambient.borrow().token();

        *on_frame.borrow_mut() = Some(Closure::new({
            let token = token.clone();
            let ambient = Rc::downgrade(&ambient);
            move || {
                if token.is_cancelled() {
                    return;
                }
                if let Some(ambient) = ambient.upgrade() {
                    ambient.borrow_mut().frame();
                }
            }
        }));

        let resize = Closure::<dyn FnMut()>::new({
            let ambient = Rc::downgrade(&ambient);
            move || {
                if token.is_cancelled() {
                    return;
                }
                if let Some(ambient) = ambient.upgrade() {
                    ambient.borrow_mut().resize();
                }
            }
        });
        if window()
            .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("couldn't listen for resizes, background keeps its initial size");
        }
        *on_resize.borrow_mut() = Some(resize);

        ambient.borrow_mut().start();
        log::debug!("ambient background mounted");
        Ok(ambient)
    }
}
