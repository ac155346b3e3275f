use super::{log_call, log_result, not_implemented, CommandContext, CommandHandler};
use crate::domain::model::StartLocalApplicationRequest;
use crate::domain::status::vendor::{AccessLevel, VendorApplicationProperty};
use crate::domain::status::StatusChange;
use crate::messages::vendor::{self as w, StartLocalApplicationCommand};
use crate::messages::{Completion, NoPayload};
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;

pub(crate) fn access_level(level: w::AccessLevel) -> AccessLevel {
    match level {
        w::AccessLevel::NotActive => AccessLevel::NotActive,
        w::AccessLevel::Basic => AccessLevel::Basic,
        w::AccessLevel::Intermediate => AccessLevel::Intermediate,
        w::AccessLevel::Full => AccessLevel::Full,
    }
}

pub struct StartLocalApplication;

#[async_trait]
impl CommandHandler for StartLocalApplication {
    const NAME: &'static str = "VendorApplication.StartLocalApplication";
    type Command = StartLocalApplicationCommand;
    type Completion = NoPayload;

    async fn handle(
        &self,
        ctx: &CommandContext,
        command: StartLocalApplicationCommand,
    ) -> Result<Completion<NoPayload>> {
        let app_name = command
            .app_name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ServiceError::invalid_data("No application name specified."))?;

        let supported = ctx
            .common()
            .capabilities()
            .vendor_application
            .as_ref()
            .map(|caps| caps.supported_access_levels.clone())
            .unwrap_or_default();
        let requested = command.access_level.map(access_level);
        if let Some(level) = requested {
            // notActive 不需要裝置支援
            if level != AccessLevel::NotActive && !supported.contains(&level) {
                return Err(ServiceError::invalid_data(format!(
                    "Specified access level is not supported by the device. {:?}",
                    level
                )));
            }
        }

        let device = ctx
            .device()
            .vendor_application()
            .ok_or_else(|| not_implemented("VendorApplication"))?;

        log_call("StartLocalApplication", ctx.request_id);
        let result = device
            .start_local_application(StartLocalApplicationRequest {
                app_name,
                access_level: requested,
            })
            .await?;
        log_result("StartLocalApplication", ctx.request_id, &result);

        if result.is_success() && !supported.is_empty() {
            let level = requested.unwrap_or(AccessLevel::NotActive);
            ctx.common()
                .status_changed(&StatusChange::VendorApplication(VendorApplicationProperty::AccessLevel(level)))
                .await;
        }

        Ok(Completion::with_code(result.completion_code, result.error_description, NoPayload {}))
    }
}
