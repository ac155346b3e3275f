use super::{log_call, log_result, not_implemented, CommandContext, CommandHandler};
use crate::domain::model::{
    CountError, CountRequest, DispenseError, DispenseRequest, MixAlgorithm, MixKind,
};
use crate::domain::ports::CashDispenserDevice;
use crate::domain::status::cash::OutputPosition;
use crate::messages::cash_dispenser as w;
use crate::messages::{Completion, NoPayload};
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::validate_pattern;
use async_trait::async_trait;
use regex::Regex;
use tracing::debug;

fn cash_dispenser(ctx: &CommandContext) -> Result<&dyn CashDispenserDevice> {
    ctx.device()
        .cash_dispenser()
        .ok_or_else(|| not_implemented("CashDispenser"))
}

pub(crate) fn output_position(position: w::OutputPosition) -> OutputPosition {
    match position {
        w::OutputPosition::OutDefault => OutputPosition::Default,
        w::OutputPosition::OutLeft => OutputPosition::Left,
        w::OutputPosition::OutRight => OutputPosition::Right,
        w::OutputPosition::OutCenter => OutputPosition::Center,
        w::OutputPosition::OutTop => OutputPosition::Top,
        w::OutputPosition::OutBottom => OutputPosition::Bottom,
        w::OutputPosition::OutFront => OutputPosition::Front,
        w::OutputPosition::OutRear => OutputPosition::Rear,
    }
}

/// 沒指定位置時交給裝置決定
fn checked_position(ctx: &CommandContext, position: Option<w::OutputPosition>) -> Result<Option<OutputPosition>> {
    let Some(position) = position.map(output_position) else {
        return Ok(None);
    };
    let supported = ctx
        .common()
        .capabilities()
        .cash_dispenser
        .as_ref()
        .is_some_and(|caps| caps.output_positions.contains(&position));
    if !supported {
        return Err(ServiceError::invalid_data(format!("Unsupported position. {:?}", position)));
    }
    Ok(Some(position))
}

pub struct Count;

#[async_trait]
impl CommandHandler for Count {
    const NAME: &'static str = "CashDispenser.Count";
    type Command = w::CountCommand;
    type Completion = w::CountCompletion;

    async fn handle(&self, ctx: &CommandContext, command: w::CountCommand) -> Result<Completion<w::CountCompletion>> {
        let position = checked_position(ctx, command.position)?;
        let device = cash_dispenser(ctx)?;

        let units = match command.unit.as_deref() {
            None | Some("") => Vec::new(),
            Some(unit) if unit.eq_ignore_ascii_case("all") => device
                .cash_units()
                .into_iter()
                .filter(|u| u.dispenses())
                .map(|u| u.id)
                .collect(),
            Some(unit) => {
                if !device.cash_units().iter().any(|u| u.id == unit) {
                    return Err(ServiceError::invalid_data(format!(
                        "Specified storage id is invalid. {}",
                        unit
                    )));
                }
                vec![unit.to_string()]
            }
        };
        debug!("[{}] count units: {:?}", ctx.request_id, units);

        log_call("Count", ctx.request_id);
        let result = device
            .count(CountRequest { position, units }, ctx.cancel.clone())
            .await?;
        log_result("Count", ctx.request_id, &result);

        let error_code = result.error_code.map(|code| match code {
            CountError::CashUnitError => w::CountErrorCode::CashUnitError,
            CountError::UnsupportedPosition => w::CountErrorCode::UnsupportedPosition,
            CountError::ExchangeActive => w::CountErrorCode::ExchangeActive,
        });
        Ok(Completion::with_code(
            result.completion_code,
            result.error_description,
            w::CountCompletion { error_code },
        ))
    }
}

pub struct GetMixTypes;

#[async_trait]
impl CommandHandler for GetMixTypes {
    const NAME: &'static str = "CashDispenser.GetMixTypes";
    type Command = NoPayload;
    type Completion = w::GetMixTypesCompletion;

    async fn handle(&self, ctx: &CommandContext, _command: NoPayload) -> Result<Completion<w::GetMixTypesCompletion>> {
        let device = cash_dispenser(ctx)?;

        log_call("GetMixTypes", ctx.request_id);
        let result = device.get_mix_types().await?;
        log_result("GetMixTypes", ctx.request_id, &result);

        let mixes = result.data.map(|mixes| {
            mixes
                .into_iter()
                .map(|(number, mix)| {
                    let (kind, algorithm) = match mix.kind {
                        MixKind::Individual => (w::MixKind::Individual, None),
                        MixKind::Table => (w::MixKind::Table, None),
                        MixKind::Algorithm(a) => (
                            w::MixKind::Algorithm,
                            Some(match a {
                                MixAlgorithm::MinimumBills => w::MixAlgorithm::MinimumBills,
                                MixAlgorithm::EqualEmptying => w::MixAlgorithm::EqualEmptying,
                                MixAlgorithm::MaxCashUnits => w::MixAlgorithm::MaxCashUnits,
                            }),
                        ),
                    };
                    (
                        number,
                        w::MixType {
                            kind,
                            algorithm,
                            name: mix.name,
                        },
                    )
                })
                .collect()
        });

        Ok(Completion::with_code(
            result.completion_code,
            result.error_description,
            w::GetMixTypesCompletion { mixes },
        ))
    }
}

fn dispense_error(code: DispenseError) -> w::DispenseErrorCode {
    match code {
        DispenseError::InvalidCurrency => w::DispenseErrorCode::InvalidCurrency,
        DispenseError::InvalidTellerId => w::DispenseErrorCode::InvalidTellerId,
        DispenseError::CashUnitError => w::DispenseErrorCode::CashUnitError,
        DispenseError::InvalidDenomination => w::DispenseErrorCode::InvalidDenomination,
        DispenseError::InvalidMixNumber => w::DispenseErrorCode::InvalidMixNumber,
        DispenseError::NoCurrencyMix => w::DispenseErrorCode::NoCurrencyMix,
        DispenseError::NotDispensable => w::DispenseErrorCode::NotDispensable,
        DispenseError::TooManyItems => w::DispenseErrorCode::TooManyItems,
        DispenseError::UnsupportedPosition => w::DispenseErrorCode::UnsupportedPosition,
        DispenseError::ExchangeActive => w::DispenseErrorCode::ExchangeActive,
        DispenseError::NoCashBoxPresent => w::DispenseErrorCode::NoCashBoxPresent,
        DispenseError::AmountNotInMixTable => w::DispenseErrorCode::AmountNotInMixTable,
        DispenseError::ItemsLeft => w::DispenseErrorCode::ItemsLeft,
        DispenseError::ShutterOpen => w::DispenseErrorCode::ShutterOpen,
    }
}

pub struct Dispense;

#[async_trait]
impl CommandHandler for Dispense {
    const NAME: &'static str = "CashDispenser.Dispense";
    type Command = w::DispenseCommand;
    type Completion = w::DispenseCompletion;

    async fn handle(
        &self,
        ctx: &CommandContext,
        command: w::DispenseCommand,
    ) -> Result<Completion<w::DispenseCompletion>> {
        let position = checked_position(ctx, command.position)?;

        let denomination = command
            .denomination
            .filter(|d| !d.is_empty())
            .ok_or_else(|| ServiceError::invalid_data("No denomination specified."))?;
        if command.mix.as_deref() == Some("") {
            return Err(ServiceError::invalid_data("Empty mix specified."));
        }
        let currencies = denomination.currencies.unwrap_or_default();
        if let Some((currency, amount)) = currencies.iter().find(|(_, amount)| **amount <= 0.0) {
            return Err(ServiceError::invalid_data(format!(
                "Invalid amount {} for currency {}.",
                amount, currency
            )));
        }
        let values = denomination.values.unwrap_or_default();
        if let Some((unit, _)) = values.iter().find(|(_, items)| **items == 0) {
            return Err(ServiceError::invalid_data(format!("No items requested from {}.", unit)));
        }

        let device = cash_dispenser(ctx)?;
        let request = DispenseRequest {
            position,
            mix: command.mix,
            currencies,
            values,
        };

        log_call("Dispense", ctx.request_id);
        let result = device.dispense(request, ctx, ctx.cancel.clone()).await?;
        log_result("Dispense", ctx.request_id, &result);

        let mut payload = w::DispenseCompletion {
            error_code: result.error_code.map(dispense_error),
            ..Default::default()
        };
        if let Some(data) = result.data {
            if let Some(bunches) = &data.bunches {
                let pattern = Regex::new(r"^unknown$|^[0-9]*$")
                    .map_err(|e| ServiceError::internal(e.to_string()))?;
                validate_pattern("bunches", bunches, &pattern)
                    .map_err(|e| ServiceError::internal(e.to_string()))?;
            }
            payload.denomination = Some(w::Denomination {
                currencies: (!data.currencies.is_empty()).then_some(data.currencies),
                values: (!data.values.is_empty()).then_some(data.values),
            });
            payload.bunches = data.bunches;
        }

        Ok(Completion::with_code(result.completion_code, result.error_description, payload))
    }
}
