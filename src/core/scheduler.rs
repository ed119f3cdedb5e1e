/// Whether the render loop currently has frames scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Paused,
}

/// Source of display-frame callbacks (e.g. `requestAnimationFrame`).
pub trait FrameScheduler {
    type Handle: Copy;
    /// Ask for one callback on the next frame. `None` if the request failed.
    fn request_frame(&mut self) -> Option<Self::Handle>;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Start/stop state machine around a [`FrameScheduler`].
///
/// While running, exactly one frame request is outstanding. `stop` cancels
/// it, so nothing is delivered until `start` is called again.
pub struct RenderLoop<S: FrameScheduler> {
    scheduler: S,
    state: LoopState,
    pending: Option<S::Handle>,
    ticks: u64,
}

impl<S: FrameScheduler> RenderLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            state: LoopState::Paused,
            pending: None,
            ticks: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn start(&mut self) {
        if self.state == LoopState::Running {
            return;
        }
        self.state = LoopState::Running;
        self.arm();
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.state = LoopState::Paused;
    }

    /// Follow page visibility: hidden pauses, visible resumes.
    pub fn set_page_visible(&mut self, visible: bool) {
        if visible {
            self.start();
        } else {
            self.stop();
        }
    }

    /// Called from the frame callback. Re-arms the next frame and returns
    /// `true` if this tick should draw; a callback that arrives while paused
    /// returns `false` and schedules nothing.
    pub fn on_frame(&mut self) -> bool {
        self.pending = None;
        if self.state == LoopState::Paused {
            return false;
        }
        self.ticks += 1;
        self.arm();
        true
    }

    fn arm(&mut self) {
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("[loop] frame request failed; pausing");
            self.state = LoopState::Paused;
        }
    }
}
