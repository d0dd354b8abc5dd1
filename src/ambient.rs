//! The animated background: a scene redrawn once per display refresh onto a
//! surface that tracks the viewport.
//!
//! [`AmbientLoop`] owns the scene, the surface and a [`FrameHost`] (the thing
//! that actually schedules frames, `requestAnimationFrame` in the browser).
//! The host calls [`AmbientLoop::frame`] for every refresh and
//! [`AmbientLoop::resize`] on every viewport resize. [`AmbientLoop::stop`]
//! cancels the pending frame and detaches the host exactly once.

mod scene;
mod surface;

pub use scene::{ConnectorConfig, GlowConfig, Scene, SceneConfig, WaveConfig, EMERALD};
pub use surface::{Glow, Point, Rect, Rgba, Stroke, Surface, Viewport};

use std::{cell::Cell, rc::Rc};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmbientError {
    #[error("2d drawing context unavailable")]
    NoContext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// Schedules frames and reports the viewport.
pub trait FrameHost {
    fn viewport(&self) -> Viewport;
    /// Asks for one `frame()` call on the next refresh. `None` when the host
    /// couldn't schedule it.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
    /// Deregisters the resize listener and drops any callbacks.
    fn detach(&mut self);
}

/// Shared flag checked before every frame. Callbacks the host hands to the
/// browser hold a clone so they can bail out without touching the loop.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

pub struct AmbientLoop<S: Surface, H: FrameHost> {
    scene: Scene,
    surface: S,
    host: H,
    time: u64,
    pending: Option<FrameHandle>,
    token: CancelToken,
    state: LoopState,
}

impl<S: Surface, H: FrameHost> AmbientLoop<S, H> {
    pub fn new(scene: Scene, surface: S, host: H) -> Self {
        Self {
            scene,
            surface,
            host,
            time: 0,
            pending: None,
            token: CancelToken::default(),
            state: LoopState::Idle,
        }
    }

    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Sizes the surface to the viewport and draws the first frame.
    pub fn start(&mut self) {
        if self.state != LoopState::Idle {
            log::debug!("ambient loop already {:?}, not starting", self.state);
            return;
        }
        self.state = LoopState::Running;
        self.surface.resize(self.host.viewport());
        self.frame();
    }

    pub fn frame(&mut self) {
        // whatever was pending is the callback running now
        self.pending = None;
        if self.token.is_cancelled() || self.state != LoopState::Running {
            return;
        }
        self.scene.draw(&mut self.surface, self.time);
        self.time += 1;
        self.pending = self.host.request_frame();
        if self.pending.is_none() {
            log::warn!("couldn't schedule next ambient frame");
        }
    }

    pub fn resize(&mut self) {
        if self.state != LoopState::Running {
            return;
        }
        self.surface.resize(self.host.viewport());
    }

    /// Returns `true` only for the call that actually stopped the loop.
    pub fn stop(&mut self) -> bool {
        if self.state == LoopState::Stopped {
            return false;
        }
        self.token.cancel();
        if let Some(handle) = self.pending.take() {
            self.host.cancel_frame(handle);
        }
        self.host.detach();
        self.state = LoopState::Stopped;
        log::debug!("ambient loop stopped after {} frames", self.time);
        true
    }
}

impl<S: Surface, H: FrameHost> Drop for AmbientLoop<S, H> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Clear { size: Viewport },
        Path { size: Viewport, points: Vec<Point>, stroke: Stroke },
        Line { size: Viewport, from: Point, to: Point, stroke: Stroke },
        Glow { size: Viewport, glow: Glow },
    }

    impl DrawCall {
        pub fn size(&self) -> Viewport {
            match self {
                Self::Clear { size }
                | Self::Path { size, .. }
                | Self::Line { size, .. }
                | Self::Glow { size, .. } => *size,
            }
        }
    }

    /// Surface that records every call together with the size it had when the
    /// call was made.
    #[derive(Clone)]
    pub struct RecordingSurface {
        size: Viewport,
        calls: Rc<RefCell<Vec<DrawCall>>>,
    }

    impl RecordingSurface {
        pub fn new(size: Viewport) -> Self {
            Self {
                size,
                calls: Rc::default(),
            }
        }

        pub fn calls(&self) -> Vec<DrawCall> {
            self.calls.borrow().clone()
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> Viewport {
            self.size
        }

        fn resize(&mut self, viewport: Viewport) {
            self.size = viewport;
        }

        fn clear(&mut self) {
            self.calls.borrow_mut().push(DrawCall::Clear { size: self.size });
        }

        fn stroke_path(&mut self, points: &[Point], stroke: Stroke) {
            self.calls.borrow_mut().push(DrawCall::Path {
                size: self.size,
                points: points.to_vec(),
                stroke,
            });
        }

        fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
            self.calls.borrow_mut().push(DrawCall::Line {
                size: self.size,
                from,
                to,
                stroke,
            });
        }

        fn fill_glow(&mut self, glow: &Glow) {
            self.calls.borrow_mut().push(DrawCall::Glow {
                size: self.size,
                glow: *glow,
            });
        }
    }

    #[derive(Debug, Default)]
    pub struct HostLog {
        pub viewport: Viewport,
        pub requested: Vec<FrameHandle>,
        pub cancelled: Vec<FrameHandle>,
        pub detached: usize,
        pub refuse_frames: bool,
    }

    /// Host that hands out increasing frame ids and lets the test fire them.
    #[derive(Clone, Default)]
    pub struct FakeHost {
        pub log: Rc<RefCell<HostLog>>,
    }

    impl FakeHost {
        pub fn with_viewport(width: f64, height: f64) -> Self {
            let host = Self::default();
            host.log.borrow_mut().viewport = Viewport::new(width, height);
            host
        }

        pub fn set_viewport(&self, width: f64, height: f64) {
            self.log.borrow_mut().viewport = Viewport::new(width, height);
        }
    }

    impl FrameHost for FakeHost {
        fn viewport(&self) -> Viewport {
            self.log.borrow().viewport
        }

        fn request_frame(&mut self) -> Option<FrameHandle> {
            let mut log = self.log.borrow_mut();
            if log.refuse_frames {
                return None;
            }
            let handle = FrameHandle(log.requested.len() as i32 + 1);
            log.requested.push(handle);
            Some(handle)
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            self.log.borrow_mut().cancelled.push(handle);
        }

        fn detach(&mut self) {
            self.log.borrow_mut().detached += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{DrawCall, FakeHost, RecordingSurface};
    use super::*;

    fn mounted(
        width: f64,
        height: f64,
    ) -> (AmbientLoop<RecordingSurface, FakeHost>, RecordingSurface, FakeHost) {
        let surface = RecordingSurface::new(Viewport::default());
        let host = FakeHost::with_viewport(width, height);
        let ambient = AmbientLoop::new(Scene::default(), surface.clone(), host.clone());
        (ambient, surface, host)
    }

    #[test]
    fn test_time_counts_frames() {
        let (mut ambient, _, host) = mounted(320.0, 200.0);
        assert_eq!(ambient.time(), 0);

        ambient.start();
        assert_eq!(ambient.time(), 1);
        for n in 2..=120 {
            ambient.frame();
            assert_eq!(ambient.time(), n);
        }
        assert_eq!(host.log.borrow().requested.len(), 120);
    }

    #[test]
    fn test_frames_before_start_do_nothing() {
        let (mut ambient, surface, _) = mounted(320.0, 200.0);
        ambient.frame();
        ambient.resize();
        assert_eq!(ambient.time(), 0);
        assert!(surface.calls().is_empty());
        assert_eq!(ambient.state(), LoopState::Idle);
    }

    #[test]
    fn test_start_sizes_surface_to_viewport() {
        let (mut ambient, surface, _) = mounted(1024.0, 768.0);
        ambient.start();
        assert_eq!(surface.calls()[0], DrawCall::Clear {
            size: Viewport::new(1024.0, 768.0)
        });
        assert_eq!(ambient.surface().size(), Viewport::new(1024.0, 768.0));
    }

    #[test]
    fn test_stop_cancels_pending_frame_once() {
        let (mut ambient, surface, host) = mounted(320.0, 200.0);
        ambient.start();
        ambient.frame();
        let drawn = surface.calls().len();

        assert!(ambient.stop());
        assert!(!ambient.stop());
        drop(ambient);

        let log = host.log.borrow();
        assert_eq!(log.cancelled, vec![FrameHandle(2)]);
        assert_eq!(log.detached, 1);
        assert_eq!(surface.calls().len(), drawn);
    }

    #[test]
    fn test_stale_frame_after_stop_draws_nothing() {
        let (mut ambient, surface, host) = mounted(320.0, 200.0);
        ambient.start();
        ambient.stop();
        let drawn = surface.calls().len();
        let requested = host.log.borrow().requested.len();

        // host fires the callback anyway
        ambient.frame();
        ambient.resize();

        assert_eq!(surface.calls().len(), drawn);
        assert_eq!(ambient.time(), 1);
        assert_eq!(host.log.borrow().requested.len(), requested);
        assert!(ambient.token().is_cancelled());
    }

    #[test]
    fn test_cancelled_token_blocks_frames() {
        let (mut ambient, surface, _) = mounted(320.0, 200.0);
        ambient.start();
        let drawn = surface.calls().len();

        ambient.token().cancel();
        ambient.frame();
        assert_eq!(surface.calls().len(), drawn);
    }

    #[test]
    fn test_drop_stops_running_loop() {
        let (mut ambient, _, host) = mounted(320.0, 200.0);
        ambient.start();
        drop(ambient);

        let log = host.log.borrow();
        assert_eq!(log.cancelled, vec![FrameHandle(1)]);
        assert_eq!(log.detached, 1);
    }

    #[test]
    fn test_stopped_loop_does_not_restart() {
        let (mut ambient, surface, _) = mounted(320.0, 200.0);
        ambient.stop();
        ambient.start();
        assert_eq!(ambient.state(), LoopState::Stopped);
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn test_resize_applies_before_next_draw() {
        let (mut ambient, surface, host) = mounted(800.0, 600.0);
        ambient.start();
        ambient.frame();

        host.set_viewport(375.0, 812.0);
        ambient.resize();
        let mark = surface.calls().len();
        ambient.frame();
        ambient.frame();

        let after = surface.calls()[mark..].to_vec();
        assert!(!after.is_empty());
        assert!(after.iter().all(|c| c.size() == Viewport::new(375.0, 812.0)));
        let before = surface.calls()[..mark].to_vec();
        assert!(before.iter().all(|c| c.size() == Viewport::new(800.0, 600.0)));
    }

    #[test]
    fn test_unschedulable_frame_leaves_nothing_to_cancel() {
        let (mut ambient, _, host) = mounted(320.0, 200.0);
        host.log.borrow_mut().refuse_frames = true;
        ambient.start();
        assert_eq!(ambient.time(), 1);

        ambient.stop();
        let log = host.log.borrow();
        assert!(log.cancelled.is_empty());
        assert_eq!(log.detached, 1);
    }
}
