use super::{log_call, log_result, not_implemented, CommandContext, CommandHandler};
use crate::messages::{Completion, NoPayload};
use crate::utils::error::Result;
use async_trait::async_trait;

pub struct Reset;

#[async_trait]
impl CommandHandler for Reset {
    const NAME: &'static str = "TextTerminal.Reset";
    type Command = NoPayload;
    type Completion = NoPayload;

    async fn handle(&self, ctx: &CommandContext, _command: NoPayload) -> Result<Completion<NoPayload>> {
        let device = ctx
            .device()
            .text_terminal()
            .ok_or_else(|| not_implemented("TextTerminal"))?;

        log_call("Reset", ctx.request_id);
        let result = device.reset(ctx.cancel.clone()).await?;
        log_result("Reset", ctx.request_id, &result);

        Ok(Completion::with_code(result.completion_code, result.error_description, NoPayload {}))
    }
}
