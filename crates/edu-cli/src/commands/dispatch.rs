use std::sync::Arc;

use anyhow::Context;
use edu_client::{GenerationBackend, GenerationClient};
use edu_config::EduConfig;
use edu_workspace::TopicWorkspace;

use crate::cli::{Commands, GlobalFlags};
use crate::commands::generate;

/// Build the workspace for a parsed command and run its lanes.
pub async fn dispatch(
    command: &Commands,
    config: &EduConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = GenerationClient::new(&config.backend).context("failed to build HTTP client")?;
    tracing::debug!(base_url = client.base_url(), "backend client ready");

    let mut workspace = TopicWorkspace::new(Arc::new(client));
    fill_inputs(&mut workspace, command);
    generate::run_lanes(&mut workspace, &command.lanes(), flags).await
}

/// Copy command arguments into the workspace's input fields.
pub fn fill_inputs<B: GenerationBackend>(workspace: &mut TopicWorkspace<B>, command: &Commands) {
    match command {
        Commands::LessonPlan(args)
        | Commands::Quiz(args)
        | Commands::Assignment(args)
        | Commands::Summary(args)
        | Commands::Lms(args)
        | Commands::All(args) => workspace.set_topic(args.topic.as_str()),
        Commands::Ask(args) => {
            workspace.set_qa_context(args.context.as_str());
            workspace.set_qa_question(args.question.as_str());
        }
    }
}
