use octotablet::{
    builder::Builder,
    events::{Event, ToolEvent},
};
use std::panic::{self, AssertUnwindSafe};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PenPhase {
    Down,
    Move,
    Up,
}

/// One pen sample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PenSample {
    /// Logical pixels from the window's top-left, the same space as egui points.
    pub pos: [f32; 2],
    pub phase: PenPhase,
}

/// Pen tablet bridge: pumps octotablet events and turns them into down/move/up samples.
pub struct PenInput {
    manager: octotablet::Manager,
    last_pos: Option<[f32; 2]>,
    touching: bool,
}

impl PenInput {
    /// Connect to the tablet backend for this window. Returns `None` when no backend is
    /// usable; the mouse and touch path keep working without it.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Option<Self> {
        // The mouse already reaches the surface through egui.
        let builder = Builder::new().emulate_tool_from_mouse(false);

        // octotablet can panic on Windows/Wine if COM is missing.
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            // Safety: the manager is stored in the app, which eframe drops before the window.
            unsafe { builder.build_raw(cc) }
        }));

        match result {
            Ok(Ok(manager)) => {
                log::info!("pen tablet input enabled");
                Some(Self {
                    manager,
                    last_pos: None,
                    touching: false,
                })
            }
            Ok(Err(e)) => {
                log::error!("failed to initialize tablet: {:?}", e);
                None
            }
            Err(_) => {
                log::error!("tablet initialization panicked, continuing without pen input");
                None
            }
        }
    }

    /// Pump pending events. Call once per frame, even when the samples will be thrown away,
    /// or the backend keeps queueing them.
    pub fn poll(&mut self) -> Vec<PenSample> {
        let mut out = Vec::new();
        let events = match self.manager.pump() {
            Ok(events) => events,
            Err(_) => {
                log::warn!("tablet pump failed, dropping this frame's pen events");
                return out;
            }
        };
        for event in events {
            let Event::Tool { event, .. } = event else {
                continue;
            };
            match event {
                ToolEvent::Pose(pose) => {
                    let pos = pose.position;
                    self.last_pos = Some(pos);
                    if self.touching {
                        out.push(PenSample {
                            pos,
                            phase: PenPhase::Move,
                        });
                    }
                }
                ToolEvent::Down => {
                    // Down carries no position; poses arrive while hovering, so use the last one.
                    if let Some(pos) = self.last_pos {
                        self.touching = true;
                        out.push(PenSample {
                            pos,
                            phase: PenPhase::Down,
                        });
                    }
                }
                ToolEvent::Up | ToolEvent::Out | ToolEvent::Removed => {
                    if self.touching {
                        self.touching = false;
                        out.push(PenSample {
                            pos: self.last_pos.unwrap_or_default(),
                            phase: PenPhase::Up,
                        });
                    }
                }
                _ => {}
            }
        }
        out
    }
}
