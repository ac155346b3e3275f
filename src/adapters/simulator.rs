//! In-memory device class used by the CLI and the tests.

use crate::core::notifier::DeviceNotifier;
use crate::domain::capabilities::{
    CardReaderCapabilities, CardReaderType, CashDispenserCapabilities, CashManagementCapabilities,
    CommonCapabilities, DeviceCapabilities, DeviceInformation, DispenserType, InterfaceSupport,
    PowerOption, PrinterCapabilities, PrinterType, SecurityType, TextTerminalCapabilities,
    TextTerminalType, Track, VendorApplicationCapabilities,
};
use crate::domain::model::{
    CashUnit, CashUnitKind, CountError, CountRequest, DeviceResult, DispenseError, DispenseRequest,
    DispenseResult, Mix, MixAlgorithm, MixKind, RetractBin, RetractError,
    StartLocalApplicationRequest, TransactionState,
};
use crate::domain::ports::{
    CardReaderDevice, CashDispenserDevice, CommonDevice, Device, DispenseEvents, PrinterDevice,
    TextTerminalDevice, VendorApplicationDevice,
};
use crate::domain::status::cash::{CashManagementStatus, CashDispenserStatus, OutputPosition, UnitsState};
use crate::domain::status::check::CheckStatus;
use crate::domain::status::common::CommonProperty;
use crate::domain::status::printer::{MediaState, PrinterProperty, PrinterStatus, RetractBinProperty, RetractBinStatus};
use crate::domain::status::card_reader::CardReaderStatus;
use crate::domain::status::terminal::TextTerminalStatus;
use crate::domain::status::vendor::{AccessLevel, VendorApplicationStatus};
use crate::domain::status::{DeviceStatus, StatusChange};
use crate::messages::{CompletionCode, InterfaceName};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorOptions {
    pub interfaces: BTreeSet<InterfaceName>,
    pub retract_bins: u32,
    pub max_retract: u32,
    pub output_positions: BTreeSet<OutputPosition>,
    pub access_levels: BTreeSet<AccessLevel>,
    pub power_save_control: bool,
    /// 大於 0 時 dispense 會先送 DelayedDispenseEvent 再等這麼久
    pub dispense_delay_ms: u32,
    pub cash_units: Vec<CashUnit>,
}

impl Default for SimulatorOptions {
    fn default() -> Self {
        Self {
            interfaces: BTreeSet::from([
                InterfaceName::Common,
                InterfaceName::CardReader,
                InterfaceName::CashDispenser,
                InterfaceName::CashManagement,
                InterfaceName::Printer,
                InterfaceName::TextTerminal,
                InterfaceName::VendorApplication,
                InterfaceName::ServicePublisher,
            ]),
            retract_bins: 2,
            max_retract: 50,
            output_positions: BTreeSet::from([OutputPosition::Default, OutputPosition::Center]),
            access_levels: BTreeSet::from([AccessLevel::Basic, AccessLevel::Full]),
            power_save_control: true,
            dispense_delay_ms: 0,
            cash_units: vec![
                CashUnit {
                    id: "unit1".to_string(),
                    kind: CashUnitKind::CashOut,
                    currency: "EUR".to_string(),
                    value: 50.0,
                    count: 100,
                },
                CashUnit {
                    id: "unit2".to_string(),
                    kind: CashUnitKind::CashOut,
                    currency: "EUR".to_string(),
                    value: 20.0,
                    count: 100,
                },
                CashUnit {
                    id: "unit3".to_string(),
                    kind: CashUnitKind::Reject,
                    currency: "EUR".to_string(),
                    value: 0.0,
                    count: 0,
                },
            ],
        }
    }
}

fn declared(interface: InterfaceName) -> Option<InterfaceSupport> {
    let support = match interface {
        InterfaceName::Common => InterfaceSupport::new(
            [
                "Capabilities",
                "Status",
                "GetTransactionState",
                "SetTransactionState",
                "Cancel",
                "PowerSaveControl",
            ],
            ["StatusChangedEvent", "ErrorEvent", "NonceClearedEvent"],
        ),
        InterfaceName::CardReader => InterfaceSupport::new(["ResetCount", "SetKey"], Vec::<&str>::new()),
        InterfaceName::CashDispenser => {
            InterfaceSupport::new(["Count", "GetMixTypes", "Dispense"], ["DelayedDispenseEvent"])
        }
        InterfaceName::Printer => InterfaceSupport::new(["RetractMedia"], ["MediaAutoRetractedEvent"]),
        InterfaceName::TextTerminal => InterfaceSupport::new(["Reset"], Vec::<&str>::new()),
        InterfaceName::VendorApplication => {
            InterfaceSupport::new(["StartLocalApplication"], Vec::<&str>::new())
        }
        InterfaceName::Check => InterfaceSupport::new(["MediaInEnd", "SupplyReplenish"], Vec::<&str>::new()),
        InterfaceName::ServicePublisher => InterfaceSupport::new(["GetServices"], Vec::<&str>::new()),
        InterfaceName::CashManagement => InterfaceSupport::default(),
        _ => return None,
    };
    Some(support)
}

#[derive(Debug)]
struct SimulatorState {
    status: DeviceStatus,
    transaction: TransactionState,
    cash_units: Vec<CashUnit>,
    key: Option<Vec<u8>>,
}

pub struct SimulatedDevice {
    options: SimulatorOptions,
    report_common: bool,
    state: Mutex<SimulatorState>,
    notifier: Option<DeviceNotifier>,
}

impl Default for SimulatedDevice {
    fn default() -> Self {
        Self::new(SimulatorOptions::default())
    }
}

impl SimulatedDevice {
    pub fn new(options: SimulatorOptions) -> Self {
        let status = initial_status(&options);
        info!("模擬裝置: {:?}", options.interfaces);
        Self {
            state: Mutex::new(SimulatorState {
                status,
                transaction: TransactionState::default(),
                cash_units: options.cash_units.clone(),
                key: None,
            }),
            options,
            report_common: true,
            notifier: None,
        }
    }

    /// 不回報 common capabilities 的裝置，用來測試初始化失敗
    pub fn without_common_capabilities() -> Self {
        Self {
            report_common: false,
            ..Self::default()
        }
    }

    pub fn with_notifier(mut self, notifier: DeviceNotifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn options(&self) -> &SimulatorOptions {
        &self.options
    }

    fn state(&self) -> MutexGuard<'_, SimulatorState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn has(&self, interface: InterfaceName) -> bool {
        self.options.interfaces.contains(&interface)
    }

    /// Changes the simulated hardware and reports it like real hardware would.
    pub fn inject(&self, change: StatusChange) {
        self.state().status.apply(&change);
        if let Some(notifier) = &self.notifier {
            notifier.status_changed(change);
        }
    }

    pub fn key(&self) -> Option<Vec<u8>> {
        self.state().key.clone()
    }

    pub fn transaction(&self) -> TransactionState {
        self.state().transaction.clone()
    }
}

fn initial_status(options: &SimulatorOptions) -> DeviceStatus {
    let has = |i: InterfaceName| options.interfaces.contains(&i);
    DeviceStatus {
        card_reader: has(InterfaceName::CardReader).then(CardReaderStatus::default),
        cash_dispenser: has(InterfaceName::CashDispenser).then(CashDispenserStatus::default),
        cash_management: has(InterfaceName::CashManagement).then(|| CashManagementStatus {
            dispenser: UnitsState::Ok,
            ..Default::default()
        }),
        check: has(InterfaceName::Check).then(CheckStatus::default),
        text_terminal: has(InterfaceName::TextTerminal).then(TextTerminalStatus::default),
        printer: has(InterfaceName::Printer).then(|| PrinterStatus {
            media: MediaState::NotPresent,
            retract_bins: vec![RetractBinStatus::default(); options.retract_bins as usize],
            ..Default::default()
        }),
        vendor_application: has(InterfaceName::VendorApplication).then(VendorApplicationStatus::default),
        ..Default::default()
    }
}

#[async_trait]
impl CommonDevice for SimulatedDevice {
    fn capabilities(&self) -> DeviceCapabilities {
        let interfaces: BTreeMap<InterfaceName, InterfaceSupport> = self
            .options
            .interfaces
            .iter()
            .filter_map(|i| declared(*i).map(|support| (*i, support)))
            .collect();

        DeviceCapabilities {
            common: self.report_common.then(|| CommonCapabilities {
                service_version: Some(env!("CARGO_PKG_VERSION").to_string()),
                device_information: vec![DeviceInformation {
                    model_name: Some("Simulator".to_string()),
                    serial_number: Some("SIM-0001".to_string()),
                    ..Default::default()
                }],
                power_save_control: self.options.power_save_control,
                anti_fraud_module: false,
                interfaces,
                synchronizable_commands: Vec::new(),
            }),
            card_reader: self.has(InterfaceName::CardReader).then(|| CardReaderCapabilities {
                device_type: CardReaderType::Motor,
                read_tracks: BTreeSet::from([Track::Track1, Track::Track2, Track::Track3]),
                write_tracks: BTreeSet::new(),
                security_type: SecurityType::NotSupported,
                power_on_option: PowerOption::Exit,
                power_off_option: PowerOption::NotSupported,
                flux_sensor_programmable: false,
                read_write_access_following_exit: false,
                card_taken_sensor: true,
            }),
            cash_dispenser: self.has(InterfaceName::CashDispenser).then(|| CashDispenserCapabilities {
                dispenser_type: DispenserType::SelfServiceBill,
                max_dispense_items: 40,
                shutter_control: false,
                intermediate_stacker: 0,
                items_taken_sensor: true,
                output_positions: self.options.output_positions.clone(),
            }),
            cash_management: self.has(InterfaceName::CashManagement).then(|| CashManagementCapabilities {
                safe_door: true,
                cash_box: false,
                exchange_by_hand: true,
                ..Default::default()
            }),
            text_terminal: self.has(InterfaceName::TextTerminal).then(|| TextTerminalCapabilities {
                terminal_type: TextTerminalType::Fixed,
                resolutions: vec![(40, 16)],
                key_lock: false,
                cursor: true,
                forms: false,
            }),
            printer: self.has(InterfaceName::Printer).then(|| PrinterCapabilities {
                types: BTreeSet::from([PrinterType::Receipt]),
                retract_bins: self.options.retract_bins,
                max_retract: vec![self.options.max_retract; self.options.retract_bins as usize],
                media_taken: true,
            }),
            vendor_application: self
                .has(InterfaceName::VendorApplication)
                .then(|| VendorApplicationCapabilities {
                    supported_access_levels: self.options.access_levels.clone(),
                }),
            ..Default::default()
        }
    }

    fn status(&self) -> DeviceStatus {
        self.state().status.clone()
    }

    async fn get_transaction_state(&self) -> Result<DeviceResult<TransactionState>> {
        Ok(DeviceResult::success(self.transaction()))
    }

    async fn set_transaction_state(&self, state: TransactionState) -> Result<DeviceResult> {
        debug!("transaction: {:?}", state);
        self.state().transaction = state;
        Ok(DeviceResult::ok())
    }

    async fn power_save_control(
        &self,
        max_power_save_recovery_time: u32,
        _cancel: CancellationToken,
    ) -> Result<DeviceResult> {
        self.inject(StatusChange::Common(CommonProperty::PowerSaveRecoveryTime(
            max_power_save_recovery_time,
        )));
        Ok(DeviceResult::ok())
    }
}

impl Device for SimulatedDevice {
    fn card_reader(&self) -> Option<&dyn CardReaderDevice> {
        self.has(InterfaceName::CardReader).then_some(self as &dyn CardReaderDevice)
    }

    fn cash_dispenser(&self) -> Option<&dyn CashDispenserDevice> {
        self.has(InterfaceName::CashDispenser).then_some(self as &dyn CashDispenserDevice)
    }

    fn printer(&self) -> Option<&dyn PrinterDevice> {
        self.has(InterfaceName::Printer).then_some(self as &dyn PrinterDevice)
    }

    fn text_terminal(&self) -> Option<&dyn TextTerminalDevice> {
        self.has(InterfaceName::TextTerminal).then_some(self as &dyn TextTerminalDevice)
    }

    fn vendor_application(&self) -> Option<&dyn VendorApplicationDevice> {
        self.has(InterfaceName::VendorApplication)
            .then_some(self as &dyn VendorApplicationDevice)
    }
}

#[async_trait]
impl CardReaderDevice for SimulatedDevice {
    async fn reset_count(&self) -> Result<DeviceResult> {
        Ok(DeviceResult::ok())
    }

    async fn set_key(&self, key_value: Vec<u8>) -> Result<DeviceResult> {
        debug!("key 長度 {}", key_value.len());
        self.state().key = Some(key_value);
        Ok(DeviceResult::ok())
    }
}

fn mixes() -> BTreeMap<String, Mix> {
    BTreeMap::from([
        (
            "1".to_string(),
            Mix {
                kind: MixKind::Algorithm(MixAlgorithm::MinimumBills),
                name: Some("Minimum bills".to_string()),
            },
        ),
        (
            "2".to_string(),
            Mix {
                kind: MixKind::Algorithm(MixAlgorithm::EqualEmptying),
                name: Some("Equal emptying".to_string()),
            },
        ),
    ])
}

fn cents(value: f64) -> u64 {
    // 負數與 NaN 轉成 0
    (value * 100.0).round() as u64
}

/// 以最少張數湊出金額；回傳 unit → 張數
fn minimum_bills(units: &[CashUnit], currency: &str, amount: f64) -> Option<BTreeMap<String, u32>> {
    // 以分計算；不足一分的面額無法出鈔
    let mut candidates: Vec<(&CashUnit, u64)> = units
        .iter()
        .filter(|u| u.dispenses() && u.currency == currency)
        .map(|u| (u, cents(u.value)))
        .filter(|(_, value)| *value > 0)
        .collect();
    candidates.sort_by(|a, b| b.1.cmp(&a.1));

    let mut remaining = cents(amount);
    let mut picked = BTreeMap::new();
    for (unit, value) in candidates {
        let n = (remaining / value).min(unit.count as u64);
        if n > 0 {
            picked.insert(unit.id.clone(), n as u32);
            remaining -= n * value;
        }
    }
    (remaining == 0).then_some(picked)
}

#[async_trait]
impl CashDispenserDevice for SimulatedDevice {
    fn cash_units(&self) -> Vec<CashUnit> {
        self.state().cash_units.clone()
    }

    async fn count(
        &self,
        request: CountRequest,
        cancel: CancellationToken,
    ) -> Result<DeviceResult<(), CountError>> {
        if cancel.is_cancelled() {
            return Ok(DeviceResult::failed(CompletionCode::Canceled, "Count canceled."));
        }
        let mut state = self.state();
        for unit in state.cash_units.iter_mut().filter(|u| request.units.contains(&u.id)) {
            debug!("count {}: {} 張", unit.id, unit.count);
            unit.count = 0;
        }
        Ok(DeviceResult::ok())
    }

    async fn get_mix_types(&self) -> Result<DeviceResult<BTreeMap<String, Mix>>> {
        Ok(DeviceResult::success(mixes()))
    }

    async fn dispense(
        &self,
        request: DispenseRequest,
        events: &dyn DispenseEvents,
        cancel: CancellationToken,
    ) -> Result<DeviceResult<DispenseResult, DispenseError>> {
        if let Some(mix) = &request.mix {
            if !mixes().contains_key(mix) {
                return Ok(DeviceResult::command_error(
                    DispenseError::InvalidMixNumber,
                    format!("Unknown mix {}", mix),
                ));
            }
        }

        // 先算好要出的張數，不足就不動庫存
        let mut plan = {
            let state = self.state();
            let mut plan: BTreeMap<String, u32> = BTreeMap::new();
            for (unit, items) in &request.values {
                match state.cash_units.iter().find(|u| &u.id == unit && u.dispenses()) {
                    Some(u) if u.count >= *items => {
                        *plan.entry(unit.clone()).or_default() += items;
                    }
                    Some(_) => {
                        return Ok(DeviceResult::command_error(
                            DispenseError::TooManyItems,
                            format!("Not enough items in {}", unit),
                        ))
                    }
                    None => {
                        return Ok(DeviceResult::command_error(
                            DispenseError::InvalidDenomination,
                            format!("Unknown unit {}", unit),
                        ))
                    }
                }
            }
            for (currency, amount) in &request.currencies {
                match minimum_bills(&state.cash_units, currency, *amount) {
                    Some(picked) => {
                        for (unit, n) in picked {
                            *plan.entry(unit).or_default() += n;
                        }
                    }
                    None => {
                        return Ok(DeviceResult::command_error(
                            DispenseError::NotDispensable,
                            format!("{} {} cannot be dispensed", amount, currency),
                        ))
                    }
                }
            }
            plan
        };

        if self.options.dispense_delay_ms > 0 {
            events.delayed_dispense(self.options.dispense_delay_ms).await?;
            tokio::select! {
                _ = tokio::time::sleep(Duration::from_millis(self.options.dispense_delay_ms as u64)) => {}
                _ = cancel.cancelled() => {
                    return Ok(DeviceResult::failed(CompletionCode::Canceled, "Dispense canceled."));
                }
            }
        }

        plan.retain(|_, n| *n > 0);
        let mut state = self.state();
        let mut currencies: BTreeMap<String, f64> = BTreeMap::new();
        for unit in state.cash_units.iter_mut() {
            if let Some(n) = plan.get(&unit.id) {
                unit.count = unit.count.saturating_sub(*n);
                *currencies.entry(unit.currency.clone()).or_default() += unit.value * *n as f64;
            }
        }
        let bunches = (!plan.is_empty()).then(|| "1".to_string());
        Ok(DeviceResult::success(DispenseResult {
            currencies,
            values: plan,
            bunches,
        }))
    }
}

#[async_trait]
impl PrinterDevice for SimulatedDevice {
    async fn retract(&self, bin: RetractBin, cancel: CancellationToken) -> Result<DeviceResult<(), RetractError>> {
        if cancel.is_cancelled() {
            return Ok(DeviceResult::failed(CompletionCode::Canceled, "Retract canceled."));
        }

        let (media, count) = {
            let state = self.state();
            let Some(printer) = &state.status.printer else {
                return Ok(DeviceResult::failed(CompletionCode::InternalError, "No printer status."));
            };
            let count = usize::try_from(bin - 1)
                .ok()
                .and_then(|index| printer.retract_bins.get(index))
                .map(|b| b.count);
            (printer.media, count)
        };

        if media != MediaState::Present {
            return Ok(DeviceResult::command_error(RetractError::NoMediaPresent, "No media present."));
        }

        if bin < 0 {
            self.inject(StatusChange::Printer(PrinterProperty::Media(MediaState::Entering)));
            return Ok(DeviceResult::ok());
        }
        let Some(count) = count else {
            return Ok(DeviceResult::failed(
                CompletionCode::InvalidData,
                format!("Retract bin {} does not exist.", bin),
            ));
        };
        if count >= self.options.max_retract {
            return Ok(DeviceResult::command_error(RetractError::RetractBinFull, format!("Retract bin {} is full.", bin)));
        }

        self.inject(StatusChange::Printer(PrinterProperty::RetractBin {
            bin: (bin - 1) as usize,
            change: RetractBinProperty::Count(count + 1),
        }));
        self.inject(StatusChange::Printer(PrinterProperty::Media(MediaState::Retracted)));
        Ok(DeviceResult::ok())
    }
}

#[async_trait]
impl TextTerminalDevice for SimulatedDevice {
    async fn reset(&self, _cancel: CancellationToken) -> Result<DeviceResult> {
        Ok(DeviceResult::ok())
    }
}

#[async_trait]
impl VendorApplicationDevice for SimulatedDevice {
    async fn start_local_application(&self, request: StartLocalApplicationRequest) -> Result<DeviceResult> {
        info!("啟動 {} ({:?})", request.app_name, request.access_level);
        Ok(DeviceResult::ok())
    }
}
