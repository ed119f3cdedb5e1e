// Host-side tests for the render loop state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod loader {
        include!("../src/core/loader.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod scheduler {
        include!("../src/core/scheduler.rs");
    }
}

use glam::Vec2;
use site::loader::LoaderPhase;
use site::scene::{FrameInput, SceneState};
use site::scheduler::*;

/// Records requests and cancellations instead of talking to a browser.
#[derive(Default)]
struct FakeScheduler {
    next: u32,
    cancelled: Vec<u32>,
    requests: usize,
    refuse: bool,
}

impl FrameScheduler for FakeScheduler {
    type Handle = u32;

    fn request_frame(&mut self) -> Option<u32> {
        if self.refuse {
            return None;
        }
        self.next += 1;
        self.requests += 1;
        Some(self.next)
    }

    fn cancel_frame(&mut self, handle: u32) {
        self.cancelled.push(handle);
    }
}

fn tick(lp: &mut RenderLoop<FakeScheduler>) -> bool {
    lp.on_frame()
}

#[test]
fn new_loop_is_paused_and_idle() {
    let lp = RenderLoop::new(FakeScheduler::default());
    assert_eq!(lp.state(), LoopState::Paused);
    assert!(!lp.has_pending_frame());
    assert_eq!(lp.scheduler().requests, 0);
}

#[test]
fn start_arms_exactly_one_frame() {
    let mut lp = RenderLoop::new(FakeScheduler::default());
    lp.start();
    lp.start();
    assert_eq!(lp.state(), LoopState::Running);
    assert_eq!(lp.scheduler().requests, 1);
    assert!(lp.has_pending_frame());
}

#[test]
fn each_running_tick_draws_once_and_rearms() {
    let mut lp = RenderLoop::new(FakeScheduler::default());
    lp.start();
    for n in 1..=30u64 {
        assert!(tick(&mut lp));
        assert_eq!(lp.ticks(), n);
        assert!(lp.has_pending_frame());
    }
    assert_eq!(lp.scheduler().requests, 31);
}

#[test]
fn stop_cancels_the_pending_frame() {
    let mut lp = RenderLoop::new(FakeScheduler::default());
    lp.start();
    tick(&mut lp);
    lp.stop();
    assert_eq!(lp.state(), LoopState::Paused);
    assert!(!lp.has_pending_frame());
    assert_eq!(lp.scheduler().cancelled, vec![2]);
}

#[test]
fn late_callback_after_stop_neither_draws_nor_rearms() {
    let mut lp = RenderLoop::new(FakeScheduler::default());
    lp.start();
    lp.stop();
    let requests = lp.scheduler().requests;
    assert!(!tick(&mut lp));
    assert_eq!(lp.ticks(), 0);
    assert_eq!(lp.scheduler().requests, requests);
    assert!(!lp.has_pending_frame());
}

#[test]
fn hidden_page_pauses_and_visible_page_resumes() {
    let mut lp = RenderLoop::new(FakeScheduler::default());
    lp.start();
    tick(&mut lp);

    lp.set_page_visible(false);
    assert_eq!(lp.state(), LoopState::Paused);
    assert!(!lp.has_pending_frame());

    // Hiding twice cancels nothing extra.
    lp.set_page_visible(false);
    assert_eq!(lp.scheduler().cancelled.len(), 1);

    lp.set_page_visible(true);
    assert_eq!(lp.state(), LoopState::Running);
    assert!(lp.has_pending_frame());
    assert!(tick(&mut lp));
    assert_eq!(lp.ticks(), 2);
}

#[test]
fn failed_request_pauses_the_loop() {
    let mut lp = RenderLoop::new(FakeScheduler {
        refuse: true,
        ..FakeScheduler::default()
    });
    lp.start();
    assert_eq!(lp.state(), LoopState::Paused);
    assert!(!lp.has_pending_frame());
}

#[test]
fn browser_driven_run_draws_one_frame_per_callback() {
    let mut lp = RenderLoop::new(FakeScheduler::default());
    let mut scene = SceneState::new(1.0);
    let mut draws = 0u32;
    lp.start();

    for frame in 0..120 {
        if frame == 60 {
            lp.set_page_visible(false);
        }
        if frame == 90 {
            lp.set_page_visible(true);
        }
        // The browser only calls back for a frame that is still requested.
        if !lp.has_pending_frame() {
            continue;
        }
        if lp.on_frame() {
            scene.advance(&FrameInput {
                elapsed_sec: frame as f32 / 60.0,
                pointer: Vec2::ZERO,
                scroll_fraction: 0.0,
                aspect: 1.0,
            });
            draws += 1;
        }
    }
    assert_eq!(draws as u64, lp.ticks());
    assert_eq!(draws, 60 + 30);
}

#[test]
fn ui_only_path_never_draws_but_loader_still_hides() {
    // Without a GPU the loop is never started.
    let lp = RenderLoop::new(FakeScheduler::default());
    assert_eq!(lp.ticks(), 0);
    assert_eq!(lp.scheduler().requests, 0);
    assert_eq!(LoaderPhase::at(0), LoaderPhase::Shown);
    assert_eq!(LoaderPhase::at(2000), LoaderPhase::Hidden);
}
