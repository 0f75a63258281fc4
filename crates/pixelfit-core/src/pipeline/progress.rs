//! Progress checkpoints of a transcode run.

use serde::{Deserialize, Serialize};

/// Named checkpoints, in the order a run passes them.
///
/// The percentages are fixed checkpoints, not time estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    Prepare,
    Render,
    Encode,
    Search,
    Finalize,
    Package,
    Done,
}

impl Stage {
    pub fn percent(self) -> u8 {
        match self {
            Stage::Prepare => 5,
            Stage::Render => 20,
            Stage::Encode => 50,
            Stage::Search => 55,
            Stage::Finalize => 80,
            Stage::Package => 95,
            Stage::Done => 100,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Prepare => "Preparing canvas…",
            Stage::Render => "Rendering image…",
            Stage::Encode => "Encoding…",
            Stage::Search => "Finding optimal quality…",
            Stage::Finalize => "Finalising…",
            Stage::Package => "Preparing download…",
            Stage::Done => "Done!",
        }
    }

    pub fn event(self) -> ProgressEvent {
        ProgressEvent {
            stage: self,
            percent: self.percent(),
            label: self.label(),
        }
    }
}

/// A progress notification delivered at a stage boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressEvent {
    pub stage: Stage,
    pub percent: u8,
    pub label: &'static str,
}
