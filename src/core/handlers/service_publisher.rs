use super::{CommandContext, CommandHandler};
use crate::messages::service_publisher::{GetServicesCompletion, ServiceEntry};
use crate::messages::{Completion, NoPayload};
use crate::utils::error::Result;
use async_trait::async_trait;

pub struct GetServices;

#[async_trait]
impl CommandHandler for GetServices {
    const NAME: &'static str = "ServicePublisher.GetServices";
    type Command = NoPayload;
    type Completion = GetServicesCompletion;

    async fn handle(&self, ctx: &CommandContext, _command: NoPayload) -> Result<Completion<GetServicesCompletion>> {
        Ok(Completion::success(GetServicesCompletion {
            vendor_name: ctx.service.vendor_name.clone(),
            services: ctx
                .service
                .service_uris
                .iter()
                .map(|uri| ServiceEntry {
                    service_uri: uri.clone(),
                })
                .collect(),
        }))
    }
}
