use super::{log_call, log_result, not_implemented, CommandContext, CommandHandler};
use crate::domain::ports::CardReaderDevice;
use crate::messages::card_reader::SetKeyCommand;
use crate::messages::{Completion, NoPayload};
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

fn card_reader(ctx: &CommandContext) -> Result<&dyn CardReaderDevice> {
    ctx.device().card_reader().ok_or_else(|| not_implemented("CardReader"))
}

pub struct ResetCount;

#[async_trait]
impl CommandHandler for ResetCount {
    const NAME: &'static str = "CardReader.ResetCount";
    type Command = NoPayload;
    type Completion = NoPayload;

    async fn handle(&self, ctx: &CommandContext, _command: NoPayload) -> Result<Completion<NoPayload>> {
        let device = card_reader(ctx)?;

        log_call("ResetCount", ctx.request_id);
        let result = device.reset_count().await?;
        log_result("ResetCount", ctx.request_id, &result);

        Ok(Completion::with_code(result.completion_code, result.error_description, NoPayload {}))
    }
}

pub struct SetKey;

#[async_trait]
impl CommandHandler for SetKey {
    const NAME: &'static str = "CardReader.SetKey";
    type Command = SetKeyCommand;
    type Completion = NoPayload;

    async fn handle(&self, ctx: &CommandContext, command: SetKeyCommand) -> Result<Completion<NoPayload>> {
        let encoded = command
            .key_value
            .ok_or_else(|| ServiceError::invalid_data("No key value specified."))?;
        let key = STANDARD
            .decode(encoded.as_bytes())
            .map_err(|e| ServiceError::invalid_data(format!("Invalid key value specified. {}", e)))?;
        if key.is_empty() {
            return Err(ServiceError::invalid_data("Empty key value specified."));
        }

        let device = card_reader(ctx)?;

        log_call("SetKey", ctx.request_id);
        let result = device.set_key(key).await?;
        log_result("SetKey", ctx.request_id, &result);

        Ok(Completion::with_code(result.completion_code, result.error_description, NoPayload {}))
    }
}
