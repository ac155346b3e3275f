//! Check scanner commands the framework does not implement.

use super::{CommandContext, CommandHandler};
use crate::messages::check::SupplyReplenishCommand;
use crate::messages::{Completion, NoPayload};
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;

pub struct MediaInEnd;

#[async_trait]
impl CommandHandler for MediaInEnd {
    const NAME: &'static str = "Check.MediaInEnd";
    type Command = NoPayload;
    type Completion = NoPayload;

    async fn handle(&self, _ctx: &CommandContext, _command: NoPayload) -> Result<Completion<NoPayload>> {
        Err(ServiceError::unsupported_command("Check.MediaInEnd is not implemented."))
    }
}

pub struct SupplyReplenish;

#[async_trait]
impl CommandHandler for SupplyReplenish {
    const NAME: &'static str = "Check.SupplyReplenish";
    type Command = SupplyReplenishCommand;
    type Completion = NoPayload;

    async fn handle(&self, _ctx: &CommandContext, _command: SupplyReplenishCommand) -> Result<Completion<NoPayload>> {
        Err(ServiceError::unsupported_command("Check.SupplyReplenish is not implemented."))
    }
}
