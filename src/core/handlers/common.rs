use super::{log_call, log_result, CommandContext, CommandHandler};
use crate::core::capability_mapping;
use crate::domain::model::{TransactionState as DeviceTransactionState, TransactionStatus};
use crate::messages::common::{
    CancelCommand, CapabilitiesCompletion, GetTransactionStateCompletion, PowerSaveControlCommand,
    SetTransactionStateCommand, TransactionState,
};
use crate::messages::{Completion, NoPayload, StatusPayload};
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use tracing::info;

pub struct Capabilities;

#[async_trait]
impl CommandHandler for Capabilities {
    const NAME: &'static str = "Common.Capabilities";
    type Command = NoPayload;
    type Completion = CapabilitiesCompletion;

    async fn handle(&self, ctx: &CommandContext, _command: NoPayload) -> Result<Completion<CapabilitiesCompletion>> {
        let common = ctx.common();
        let caps = common.capabilities();
        let common_caps = caps
            .common
            .as_ref()
            .ok_or_else(|| ServiceError::internal("No common capabilities are reported by the device class."))?;

        Ok(Completion::success(CapabilitiesCompletion {
            interfaces: capability_mapping::interfaces(common_caps, common.supported_messages()),
            common: Some(capability_mapping::common(common_caps)),
            card_reader: caps.card_reader.as_ref().map(capability_mapping::card_reader),
            cash_dispenser: caps.cash_dispenser.as_ref().map(capability_mapping::cash_dispenser),
            cash_management: caps.cash_management.as_ref().map(capability_mapping::cash_management),
            key_management: caps.key_management.as_ref().map(capability_mapping::key_management),
            keyboard: caps.keyboard.as_ref().map(capability_mapping::keyboard),
            text_terminal: caps.text_terminal.as_ref().map(capability_mapping::text_terminal),
            printer: caps.printer.as_ref().map(capability_mapping::printer),
            vendor_application: caps
                .vendor_application
                .as_ref()
                .map(capability_mapping::vendor_application),
        }))
    }
}

pub struct Status;

#[async_trait]
impl CommandHandler for Status {
    const NAME: &'static str = "Common.Status";
    type Command = NoPayload;
    type Completion = StatusPayload;

    async fn handle(&self, ctx: &CommandContext, _command: NoPayload) -> Result<Completion<StatusPayload>> {
        Ok(Completion::success(ctx.common().status_payload().await))
    }
}

pub struct GetTransactionState;

#[async_trait]
impl CommandHandler for GetTransactionState {
    const NAME: &'static str = "Common.GetTransactionState";
    type Command = NoPayload;
    type Completion = GetTransactionStateCompletion;

    async fn handle(
        &self,
        ctx: &CommandContext,
        _command: NoPayload,
    ) -> Result<Completion<GetTransactionStateCompletion>> {
        log_call("GetTransactionState", ctx.request_id);
        let result = ctx.device().get_transaction_state().await?;
        log_result("GetTransactionState", ctx.request_id, &result);

        let payload = match result.data {
            Some(state) => GetTransactionStateCompletion {
                state: match state.state {
                    TransactionStatus::Active => Some(TransactionState::Active),
                    TransactionStatus::Inactive => Some(TransactionState::Inactive),
                    TransactionStatus::Unknown => None,
                },
                transaction_id: state.transaction_id,
                extra: (!state.extra.is_empty()).then_some(state.extra),
            },
            None => GetTransactionStateCompletion::default(),
        };
        Ok(Completion::with_code(result.completion_code, result.error_description, payload))
    }
}

pub struct SetTransactionState;

#[async_trait]
impl CommandHandler for SetTransactionState {
    const NAME: &'static str = "Common.SetTransactionState";
    type Command = SetTransactionStateCommand;
    type Completion = NoPayload;

    async fn handle(
        &self,
        ctx: &CommandContext,
        command: SetTransactionStateCommand,
    ) -> Result<Completion<NoPayload>> {
        let state = DeviceTransactionState {
            state: match command.state {
                TransactionState::Active => TransactionStatus::Active,
                TransactionState::Inactive => TransactionStatus::Inactive,
            },
            transaction_id: command.transaction_id,
            extra: command.extra.unwrap_or_default(),
        };

        log_call("SetTransactionState", ctx.request_id);
        let result = ctx.device().set_transaction_state(state).await?;
        log_result("SetTransactionState", ctx.request_id, &result);

        Ok(Completion::with_code(result.completion_code, result.error_description, NoPayload {}))
    }
}

pub struct Cancel;

#[async_trait]
impl CommandHandler for Cancel {
    const NAME: &'static str = "Common.Cancel";
    type Command = CancelCommand;
    type Completion = NoPayload;

    async fn handle(&self, ctx: &CommandContext, command: CancelCommand) -> Result<Completion<NoPayload>> {
        let canceled = ctx
            .connection
            .cancel(command.request_ids.as_deref(), ctx.request_id);
        info!("[{}] 取消 {} 個 command", ctx.request_id, canceled);
        Ok(Completion::success(NoPayload {}))
    }
}

pub struct PowerSaveControl;

#[async_trait]
impl CommandHandler for PowerSaveControl {
    const NAME: &'static str = "Common.PowerSaveControl";
    type Command = PowerSaveControlCommand;
    type Completion = NoPayload;

    async fn handle(
        &self,
        ctx: &CommandContext,
        command: PowerSaveControlCommand,
    ) -> Result<Completion<NoPayload>> {
        if !ctx.common().common_capabilities().power_save_control {
            return Err(ServiceError::unsupported_command(
                "Power save control is not supported by the device.",
            ));
        }

        log_call("PowerSaveControl", ctx.request_id);
        let result = ctx
            .device()
            .power_save_control(command.max_power_save_recovery_time, ctx.cancel.clone())
            .await?;
        log_result("PowerSaveControl", ctx.request_id, &result);

        Ok(Completion::with_code(result.completion_code, result.error_description, NoPayload {}))
    }
}
