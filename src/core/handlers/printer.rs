use super::{log_call, log_result, not_implemented, CommandContext, CommandHandler};
use crate::domain::model::{RetractBin, RetractError};
use crate::messages::printer::{RetractMediaCommand, RetractMediaCompletion, RetractMediaErrorCode};
use crate::messages::Completion;
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::validate_pattern;
use async_trait::async_trait;
use regex::Regex;

const TRANSPORT: &str = "transport";

/// `transport` → -1, `unitN` → N
fn retract_bin(media_control: Option<&str>) -> Result<RetractBin> {
    let Some(control) = media_control.filter(|c| !c.is_empty()) else {
        return Ok(-1);
    };
    let pattern = Regex::new(r"^transport$|^unit[0-9]+$").map_err(|e| ServiceError::internal(e.to_string()))?;
    validate_pattern("media control", control, &pattern)?;

    if control == TRANSPORT {
        return Ok(-1);
    }
    control["unit".len()..]
        .parse::<RetractBin>()
        .map_err(|_| ServiceError::invalid_data(format!("Invalid retract unit specified. {}", control)))
}

pub struct RetractMedia;

#[async_trait]
impl CommandHandler for RetractMedia {
    const NAME: &'static str = "Printer.RetractMedia";
    type Command = RetractMediaCommand;
    type Completion = RetractMediaCompletion;

    async fn handle(
        &self,
        ctx: &CommandContext,
        command: RetractMediaCommand,
    ) -> Result<Completion<RetractMediaCompletion>> {
        let bins = ctx
            .common()
            .capabilities()
            .printer
            .as_ref()
            .map_or(0, |caps| caps.retract_bins);
        if bins == 0 {
            return Err(ServiceError::invalid_data("No retract bins are supported by the device."));
        }
        let bin = retract_bin(command.media_control.as_deref())?;

        let device = ctx.device().printer().ok_or_else(|| not_implemented("Printer"))?;

        log_call("Retract", ctx.request_id);
        let result = device.retract(bin, ctx.cancel.clone()).await?;
        log_result("Retract", ctx.request_id, &result);

        let media_result = if result.error_code == Some(RetractError::NoMediaPresent) {
            Some("nomedia".to_string())
        } else if result.is_success() {
            command.media_control
        } else {
            None
        };
        let error_code = result.error_code.map(|code| match code {
            RetractError::NoMediaPresent => RetractMediaErrorCode::NoMediaPresent,
            RetractError::RetractBinFull => RetractMediaErrorCode::RetractBinFull,
            RetractError::MediaJammed => RetractMediaErrorCode::MediaJammed,
        });

        Ok(Completion::with_code(
            result.completion_code,
            result.error_description,
            RetractMediaCompletion {
                error_code,
                result: media_result,
            },
        ))
    }
}
