mod common;

use common::Harness;
use serde_json::json;
use std::collections::BTreeSet;
use xfs4iot_framework::domain::ports::{CashDispenserDevice, CommonDevice};
use xfs4iot_framework::domain::status::printer::{MediaState, PrinterProperty};
use xfs4iot_framework::domain::status::vendor::AccessLevel;
use xfs4iot_framework::domain::status::StatusChange;
use xfs4iot_framework::messages::{InterfaceName, MessageKind};
use xfs4iot_framework::SimulatorOptions;

#[tokio::test]
async fn test_capabilities_lists_declared_interfaces() {
    let mut harness = Harness::new();
    let completion = harness.complete("Common.Capabilities", 1, json!({})).await;

    assert_eq!(completion["completionCode"], json!("success"));
    let interfaces = completion["interfaces"].as_array().unwrap();
    let printer = interfaces
        .iter()
        .find(|i| i["name"] == json!("printer"))
        .expect("printer interface");
    assert_eq!(printer["commands"]["RetractMedia"]["versions"], json!(["2.0"]));
    assert_eq!(printer["events"]["MediaAutoRetractedEvent"]["versions"], json!(["2.0"]));
    assert_eq!(completion["printer"]["retractBins"], json!(2));
    assert_eq!(completion["cashDispenser"]["positions"]["center"], json!(true));
    assert_eq!(completion["cashManagement"]["safeDoor"], json!(true));
    assert_eq!(completion["cashManagement"]["exchangeType"], json!({"byHand": true}));
    assert_eq!(completion["textTerminal"]["type"], json!("fixed"));
    assert_eq!(completion["textTerminal"]["resolutions"], json!([{"sizeX": 40, "sizeY": 16}]));
    // 模擬器沒有 KeyManagement 與 Keyboard
    assert!(completion.get("keyManagement").is_none());
    assert!(completion.get("keyboard").is_none());
}

#[tokio::test]
async fn test_capabilities_omit_undeclared_interfaces() {
    let options = SimulatorOptions {
        interfaces: BTreeSet::from([InterfaceName::Common, InterfaceName::Printer]),
        ..Default::default()
    };
    let mut harness = Harness::with_options(options);
    let completion = harness.complete("Common.Capabilities", 1, json!({})).await;
    assert_eq!(completion["completionCode"], json!("success"));
    assert!(completion.get("cashManagement").is_none());
    assert!(completion.get("textTerminal").is_none());
    assert_eq!(completion["printer"]["retractBins"], json!(2));
}

#[tokio::test]
async fn test_status_reports_every_interface() {
    let mut harness = Harness::new();
    let completion = harness.complete("Common.Status", 2, json!({})).await;
    assert_eq!(completion["common"]["device"], json!("online"));
    assert_eq!(completion["printer"]["media"], json!("notPresent"));
    assert_eq!(completion["printer"]["retractBins"], json!([{"state": "unknown", "count": 0}, {"state": "unknown", "count": 0}]));
}

#[tokio::test]
async fn test_transaction_state_round_trip() {
    let mut harness = Harness::new();
    let empty = harness.complete("Common.GetTransactionState", 1, json!({})).await;
    assert_eq!(empty, json!({"completionCode": "success"}));

    let set = harness
        .complete(
            "Common.SetTransactionState",
            2,
            json!({"state": "active", "transactionID": "tx-42", "extra": ["withdrawal"]}),
        )
        .await;
    assert_eq!(set["completionCode"], json!("success"));

    let state = harness.complete("Common.GetTransactionState", 3, json!({})).await;
    assert_eq!(state["state"], json!("active"));
    assert_eq!(state["transactionID"], json!("tx-42"));
    assert_eq!(state["extra"], json!(["withdrawal"]));
}

#[tokio::test]
async fn test_power_save_control_publishes_recovery_time() {
    let mut harness = Harness::new();
    let completion = harness
        .complete("Common.PowerSaveControl", 1, json!({"maxPowerSaveRecoveryTime": 30}))
        .await;
    assert_eq!(completion["completionCode"], json!("success"));

    let event = harness.next_event().await;
    assert_eq!(event.kind(), MessageKind::Unsolicited);
    assert_eq!(event.name(), "Common.StatusChangedEvent");
    assert_eq!(event.payload, Some(json!({"common": {"powerSaveRecoveryTime": 30}})));
}

#[tokio::test]
async fn test_power_save_control_without_support() {
    let mut harness = Harness::with_options(SimulatorOptions {
        power_save_control: false,
        ..Default::default()
    });
    let completion = harness
        .complete("Common.PowerSaveControl", 1, json!({"maxPowerSaveRecoveryTime": 30}))
        .await;
    assert_eq!(completion["completionCode"], json!("unsupportedCommand"));
}

#[tokio::test]
async fn test_set_key_requires_base64() {
    let mut harness = Harness::new();

    let missing = harness.complete("CardReader.SetKey", 1, json!({})).await;
    assert_eq!(missing["completionCode"], json!("invalidData"));

    let garbage = harness.complete("CardReader.SetKey", 2, json!({"keyValue": "***"})).await;
    assert_eq!(garbage["completionCode"], json!("invalidData"));

    let ok = harness.complete("CardReader.SetKey", 3, json!({"keyValue": "AQIDBA=="})).await;
    assert_eq!(ok["completionCode"], json!("success"));
    assert_eq!(harness.device.key(), Some(vec![1, 2, 3, 4]));
}

#[tokio::test]
async fn test_reset_count() {
    let mut harness = Harness::new();
    let completion = harness.complete("CardReader.ResetCount", 1, json!({})).await;
    assert_eq!(completion, json!({"completionCode": "success"}));
}

#[tokio::test]
async fn test_count_validates_unit_and_position() {
    let mut harness = Harness::new();

    let unknown = harness.complete("CashDispenser.Count", 1, json!({"unit": "unit99"})).await;
    assert_eq!(unknown["completionCode"], json!("invalidData"));

    let position = harness
        .complete("CashDispenser.Count", 2, json!({"unit": "unit1", "position": "outRear"}))
        .await;
    assert_eq!(position["completionCode"], json!("invalidData"));

    let all = harness.complete("CashDispenser.Count", 3, json!({"unit": "ALL"})).await;
    assert_eq!(all["completionCode"], json!("success"));

    let device = harness.device.clone();
    let units = device.cash_units();
    assert_eq!(units[0].count, 0);
    assert_eq!(units[1].count, 0);
    // reject 單元不出鈔，不會被點算
    assert_eq!(units[2].kind, xfs4iot_framework::domain::model::CashUnitKind::Reject);
}

#[tokio::test]
async fn test_get_mix_types() {
    let mut harness = Harness::new();
    let completion = harness.complete("CashDispenser.GetMixTypes", 1, json!({})).await;
    assert_eq!(
        completion["mixes"]["1"],
        json!({"type": "algorithm", "algorithm": "minimumBills", "name": "Minimum bills"})
    );
}

#[tokio::test]
async fn test_dispense_validation() {
    let mut harness = Harness::new();

    let missing = harness.complete("CashDispenser.Dispense", 1, json!({})).await;
    assert_eq!(missing["completionCode"], json!("invalidData"));

    let empty = harness
        .complete("CashDispenser.Dispense", 2, json!({"denomination": {"currencies": {}}}))
        .await;
    assert_eq!(empty["completionCode"], json!("invalidData"));

    let empty_mix = harness
        .complete(
            "CashDispenser.Dispense",
            3,
            json!({"denomination": {"currencies": {"EUR": 20.0}}, "mix": ""}),
        )
        .await;
    assert_eq!(empty_mix["completionCode"], json!("invalidData"));

    let bad_mix = harness
        .complete(
            "CashDispenser.Dispense",
            4,
            json!({"denomination": {"currencies": {"EUR": 20.0}}, "mix": "7"}),
        )
        .await;
    assert_eq!(bad_mix["completionCode"], json!("commandErrorCode"));
    assert_eq!(bad_mix["errorCode"], json!("invalidMixNumber"));

    let negative = harness
        .complete(
            "CashDispenser.Dispense",
            5,
            json!({"denomination": {"currencies": {"EUR": -50.0}}}),
        )
        .await;
    assert_eq!(negative["completionCode"], json!("invalidData"));

    let zero = harness
        .complete("CashDispenser.Dispense", 6, json!({"denomination": {"currencies": {"EUR": 0.0}}}))
        .await;
    assert_eq!(zero["completionCode"], json!("invalidData"));

    let no_items = harness
        .complete("CashDispenser.Dispense", 7, json!({"denomination": {"values": {"unit1": 0}}}))
        .await;
    assert_eq!(no_items["completionCode"], json!("invalidData"));
    assert!(no_items.get("bunches").is_none());

    // 驗證失敗不動庫存
    let units = harness.device.cash_units();
    assert!(units.iter().all(|u| u.count == 100 || u.id == "unit3"));
}

#[tokio::test]
async fn test_dispense_success() {
    let mut harness = Harness::new();
    let completion = harness
        .complete(
            "CashDispenser.Dispense",
            1,
            json!({"denomination": {"currencies": {"EUR": 90.0}}, "mix": "1", "position": "outCenter"}),
        )
        .await;

    assert_eq!(completion["completionCode"], json!("success"));
    assert_eq!(completion["denomination"]["currencies"]["EUR"], json!(90.0));
    assert_eq!(completion["denomination"]["values"], json!({"unit1": 1, "unit2": 2}));
    assert_eq!(completion["bunches"], json!("1"));
}

#[tokio::test]
async fn test_dispense_not_dispensable() {
    let mut harness = Harness::new();
    let completion = harness
        .complete("CashDispenser.Dispense", 1, json!({"denomination": {"currencies": {"EUR": 15.0}}}))
        .await;
    assert_eq!(completion["completionCode"], json!("commandErrorCode"));
    assert_eq!(completion["errorCode"], json!("notDispensable"));
}

#[tokio::test]
async fn test_delayed_dispense_event_precedes_completion() {
    let mut harness = Harness::with_options(SimulatorOptions {
        dispense_delay_ms: 20,
        ..Default::default()
    });
    let messages = harness
        .execute("CashDispenser.Dispense", 5, json!({"denomination": {"currencies": {"EUR": 20.0}}}))
        .await;

    let kinds: Vec<MessageKind> = messages.iter().map(|m| m.kind()).collect();
    assert_eq!(
        kinds,
        vec![MessageKind::Acknowledge, MessageKind::Event, MessageKind::Completion]
    );
    assert_eq!(messages[1].name(), "CashDispenser.DelayedDispenseEvent");
    assert_eq!(messages[1].payload, Some(json!({"delay": 20})));
}

#[tokio::test]
async fn test_retract_media_without_media() {
    let mut harness = Harness::new();
    let messages = harness
        .execute("Printer.RetractMedia", 1, json!({"mediaControl": "unit1"}))
        .await;
    let completion = messages.last().unwrap();
    assert_eq!(completion.header.version.as_deref(), Some("2.0"));
    let payload = completion.payload.as_ref().unwrap();
    assert_eq!(payload["completionCode"], json!("commandErrorCode"));
    assert_eq!(payload["errorCode"], json!("noMediaPresent"));
    assert_eq!(payload["result"], json!("nomedia"));
}

#[tokio::test]
async fn test_retract_media_into_bin() {
    let mut harness = Harness::new();
    harness
        .device
        .inject(StatusChange::Printer(PrinterProperty::Media(MediaState::Present)));

    let completion = harness
        .complete("Printer.RetractMedia", 1, json!({"mediaControl": "unit2"}))
        .await;
    assert_eq!(completion["completionCode"], json!("success"));
    assert_eq!(completion["result"], json!("unit2"));

    // media present、bin 計數、media retracted 三個事件依序送出
    let mut payloads = Vec::new();
    for _ in 0..3 {
        payloads.push(harness.next_event().await.payload.unwrap());
    }
    assert_eq!(payloads[0], json!({"printer": {"media": "present"}}));
    assert_eq!(payloads[1], json!({"printer": {"retractBins": [{"count": 1}]}}));
    assert_eq!(payloads[2], json!({"printer": {"media": "retracted"}}));
}

#[tokio::test]
async fn test_retract_media_rejects_bad_control() {
    let mut harness = Harness::new();
    let completion = harness
        .complete("Printer.RetractMedia", 1, json!({"mediaControl": "bin1"}))
        .await;
    assert_eq!(completion["completionCode"], json!("invalidData"));
}

#[tokio::test]
async fn test_retract_media_without_bins() {
    let mut harness = Harness::with_options(SimulatorOptions {
        retract_bins: 0,
        ..Default::default()
    });
    let completion = harness.complete("Printer.RetractMedia", 1, json!({})).await;
    assert_eq!(completion["completionCode"], json!("invalidData"));
}

#[tokio::test]
async fn test_text_terminal_reset() {
    let mut harness = Harness::new();
    let messages = harness.execute("TextTerminal.Reset", 1, json!({})).await;
    let completion = messages.last().unwrap();
    assert_eq!(completion.header.version.as_deref(), Some("2.0"));
    assert_eq!(completion.payload, Some(json!({"completionCode": "success"})));
}

#[tokio::test]
async fn test_start_local_application() {
    let mut harness = Harness::new();

    let no_name = harness.complete("VendorApplication.StartLocalApplication", 1, json!({})).await;
    assert_eq!(no_name["completionCode"], json!("invalidData"));

    let unsupported = harness
        .complete(
            "VendorApplication.StartLocalApplication",
            2,
            json!({"appName": "maintenance", "accessLevel": "intermediate"}),
        )
        .await;
    assert_eq!(unsupported["completionCode"], json!("invalidData"));

    let ok = harness
        .complete(
            "VendorApplication.StartLocalApplication",
            3,
            json!({"appName": "maintenance", "accessLevel": "full"}),
        )
        .await;
    assert_eq!(ok["completionCode"], json!("success"));

    let event = harness.next_event().await;
    assert_eq!(event.payload, Some(json!({"vendorApplication": {"accessLevel": "full"}})));
    assert_eq!(
        harness.provider.common().status().await.vendor_application.unwrap().access_level,
        AccessLevel::Full
    );
}

#[tokio::test]
async fn test_start_local_application_not_active_is_always_accepted() {
    let mut harness = Harness::with_options(SimulatorOptions {
        access_levels: BTreeSet::new(),
        ..Default::default()
    });
    let completion = harness
        .complete(
            "VendorApplication.StartLocalApplication",
            1,
            json!({"appName": "kiosk", "accessLevel": "notActive"}),
        )
        .await;
    assert_eq!(completion["completionCode"], json!("success"));
}

#[tokio::test]
async fn test_check_commands_are_unsupported() {
    let mut options = SimulatorOptions::default();
    options.interfaces.insert(InterfaceName::Check);
    let mut harness = Harness::with_options(options);

    let media_in_end = harness.complete("Check.MediaInEnd", 1, json!({})).await;
    assert_eq!(media_in_end["completionCode"], json!("unsupportedCommand"));
    let replenish = harness.complete("Check.SupplyReplenish", 2, json!({})).await;
    assert_eq!(replenish["completionCode"], json!("unsupportedCommand"));
}

#[tokio::test]
async fn test_get_services() {
    let mut harness = Harness::new();
    let messages = harness.execute("ServicePublisher.GetServices", 1, json!({})).await;
    let completion = messages.last().unwrap();
    assert_eq!(completion.header.version.as_deref(), Some("2.0"));
    assert_eq!(
        completion.payload,
        Some(json!({
            "completionCode": "success",
            "vendorName": "Test Vendor",
            "services": [{"serviceURI": "ws://127.0.0.1:5846/xfs4iot/v1.0/sim"}]
        }))
    );
}

#[tokio::test]
async fn test_device_status_is_cached() {
    let harness = Harness::new();
    assert_eq!(
        harness.device.status().printer.unwrap().media,
        MediaState::NotPresent
    );
}
