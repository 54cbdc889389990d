//! AI assistant command.

use clap::Args;

use allora_app::{AppContext, domain::ai::AiPromptRequest};

use crate::errors::CliError;

#[derive(Debug, Args)]
pub struct AiArgs {
    /// Prompt text for the assistant
    prompt: String,
}

pub(crate) async fn run(args: AiArgs, context: &AppContext) -> Result<(), CliError> {
    let envelope = context.ai.prompt(AiPromptRequest { prompt: args.prompt }).await?;

    match envelope.body {
        Some(reply) => println!("{}", reply.response),
        None => println!("The assistant returned no reply."),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use testresult::TestResult;

    use allora_app::domain::ai::{AiPromptResponse, MockAiService};

    use crate::test_helpers::{empty_context, envelope};

    use super::*;

    #[tokio::test]
    async fn prompt_round_trips_through_the_service() -> TestResult {
        let mut ai = MockAiService::new();

        ai.expect_prompt()
            .once()
            .withf(|request| request.prompt == "How many orders are pending?")
            .return_once(|_| {
                Ok(envelope(AiPromptResponse {
                    response: "There are 3 pending orders.".to_string(),
                }))
            });

        let mut context = empty_context();
        context.ai = Arc::new(ai);

        run(
            AiArgs {
                prompt: "How many orders are pending?".to_string(),
            },
            &context,
        )
        .await?;

        Ok(())
    }
}
