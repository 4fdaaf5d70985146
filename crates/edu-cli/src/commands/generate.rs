use std::collections::HashMap;

use edu_client::GenerationBackend;
use edu_core::{LaneKind, LaneStatus};
use edu_workspace::{TopicWorkspace, TriggerOutcome, VerbatimMarkup};

use crate::cli::GlobalFlags;
use crate::output;
use crate::progress::{Spinner, Spinners};

/// Trigger `lanes`, print each lane as its response lands, and fail if any
/// lane was refused or ended `failed`.
pub async fn run_lanes<B: GenerationBackend>(
    workspace: &mut TopicWorkspace<B>,
    lanes: &[LaneKind],
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let spinners = Spinners::new(flags);
    let mut active: HashMap<LaneKind, Spinner> = HashMap::new();
    let mut refused = Vec::new();

    for &kind in lanes {
        match workspace.trigger(kind) {
            TriggerOutcome::Started { .. } => {
                let spinner = spinners.spinner(&format!("{}...", kind.title()));
                active.insert(kind, spinner);
            }
            TriggerOutcome::Rejected(reason) => {
                refused.push(format!("{kind}: {}", reason.describe()));
            }
        }
    }

    while let Some(kind) = workspace.next_completion().await {
        if let Some(spinner) = active.remove(&kind) {
            spinner.finish_clear();
        }
        let view = workspace.lane_view(kind, &VerbatimMarkup);
        spinners.println(&output::render_lane(&view, flags.format)?);
    }

    if !refused.is_empty() {
        anyhow::bail!("not triggered: {}", refused.join("; "));
    }

    let failed: Vec<String> = lanes
        .iter()
        .filter(|kind| workspace.status(**kind) == LaneStatus::Failed)
        .map(ToString::to_string)
        .collect();
    if !failed.is_empty() {
        anyhow::bail!("generation failed for: {}", failed.join(", "));
    }
    Ok(())
}
