mod common;

use common::Harness;
use serde_json::json;
use std::collections::BTreeSet;
use xfs4iot_framework::messages::{AcknowledgeStatus, Envelope, InterfaceName, MessageKind};
use xfs4iot_framework::SimulatorOptions;

/// 合法的 command 先收到 ok acknowledge，再收到 completion
#[tokio::test]
async fn test_acknowledge_then_completion() {
    let mut harness = Harness::new();
    let messages = harness.execute("Common.Status", 7, json!({})).await;

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].kind(), MessageKind::Acknowledge);
    assert_eq!(messages[0].header.status, Some(AcknowledgeStatus::Ok));
    assert_eq!(messages[0].request_id(), Some(7));
    assert_eq!(messages[1].kind(), MessageKind::Completion);
    assert_eq!(messages[1].header.version.as_deref(), Some("1.0"));
    assert_eq!(messages[1].payload.as_ref().unwrap()["completionCode"], json!("success"));
}

#[tokio::test]
async fn test_unparseable_frame_is_invalid_message() {
    let mut harness = Harness::new();
    harness.send_raw("this is not json");

    let ack = harness.next().await;
    assert_eq!(ack.kind(), MessageKind::Acknowledge);
    assert_eq!(ack.header.status, Some(AcknowledgeStatus::InvalidMessage));
    assert_eq!(ack.request_id(), Some(0));
}

#[tokio::test]
async fn test_broken_header_keeps_name_and_request_id() {
    let mut harness = Harness::new();
    // type 不是合法的值，但 name 與 requestId 仍可讀
    harness.send_raw(r#"{"header":{"type":"bogus","name":"Common.Status","requestId":12}}"#);

    let ack = harness.next().await;
    assert_eq!(ack.header.status, Some(AcknowledgeStatus::InvalidMessage));
    assert_eq!(ack.name(), "Common.Status");
    assert_eq!(ack.request_id(), Some(12));
}

#[tokio::test]
async fn test_non_positive_request_id_is_rejected() {
    let mut harness = Harness::new();
    harness.command("Common.Status", 0, json!({}));
    let ack = harness.next().await;
    assert_eq!(ack.header.status, Some(AcknowledgeStatus::InvalidMessage));
    assert_eq!(ack.request_id(), Some(0));

    harness.command("Common.Status", -4, json!({}));
    let ack = harness.next().await;
    assert_eq!(ack.header.status, Some(AcknowledgeStatus::InvalidMessage));
    assert_eq!(ack.request_id(), Some(0));
}

#[tokio::test]
async fn test_only_commands_are_accepted() {
    let mut harness = Harness::new();
    harness.send(&Envelope::event("Common.Status", 3, json!({})));
    let ack = harness.next().await;
    assert_eq!(ack.header.status, Some(AcknowledgeStatus::InvalidMessage));
    assert_eq!(ack.request_id(), Some(3));
}

#[tokio::test]
async fn test_unknown_command_is_invalid_message() {
    let mut harness = Harness::new();
    let messages = harness.execute("Printer.PrintForm", 5, json!({})).await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].header.status, Some(AcknowledgeStatus::InvalidMessage));
    assert!(messages[0]
        .header
        .error_description
        .as_deref()
        .unwrap()
        .contains("Printer.PrintForm"));
}

/// 有 handler 但裝置沒宣告的 command 回 unsupportedCommand completion
#[tokio::test]
async fn test_command_not_declared_by_device() {
    let mut harness = Harness::with_options(SimulatorOptions {
        interfaces: BTreeSet::from([InterfaceName::Common]),
        ..Default::default()
    });
    let completion = harness.complete("Printer.RetractMedia", 9, json!({})).await;
    assert_eq!(completion["completionCode"], json!("unsupportedCommand"));
    assert_eq!(
        harness.provider.common().registry().version_of("Printer.RetractMedia"),
        Some("2.0")
    );
}

#[tokio::test]
async fn test_duplicate_request_id_while_in_flight() {
    let mut harness = Harness::with_options(SimulatorOptions {
        dispense_delay_ms: 500,
        ..Default::default()
    });
    let dispense = json!({"denomination": {"currencies": {"EUR": 20.0}}});
    harness.command("CashDispenser.Dispense", 21, dispense.clone());
    let ack = harness.next().await;
    assert_eq!(ack.header.status, Some(AcknowledgeStatus::Ok));

    harness.command("CashDispenser.Dispense", 21, dispense);
    let mut saw_duplicate = false;
    for _ in 0..3 {
        let message = harness.next().await;
        if message.kind() == MessageKind::Acknowledge {
            assert_eq!(message.header.status, Some(AcknowledgeStatus::InvalidRequestId));
            saw_duplicate = true;
            break;
        }
    }
    assert!(saw_duplicate);
}

#[tokio::test]
async fn test_too_many_requests() {
    let mut harness = Harness::with(
        SimulatorOptions {
            dispense_delay_ms: 1_000,
            ..Default::default()
        },
        r#"
[service]
name = "sim"
max_in_flight = 1
"#,
    );
    harness.command(
        "CashDispenser.Dispense",
        1,
        json!({"denomination": {"currencies": {"EUR": 20.0}}}),
    );
    assert_eq!(harness.next().await.header.status, Some(AcknowledgeStatus::Ok));

    harness.command("Common.Status", 2, json!({}));
    loop {
        let message = harness.next().await;
        if message.request_id() == Some(2) {
            assert_eq!(message.header.status, Some(AcknowledgeStatus::TooManyRequests));
            break;
        }
    }

    // Cancel 不受上限影響
    harness.command("Common.Cancel", 3, json!({}));
    loop {
        let message = harness.next().await;
        if message.request_id() == Some(3) {
            assert_eq!(message.header.status, Some(AcknowledgeStatus::Ok));
            break;
        }
    }
}

#[tokio::test]
async fn test_header_timeout_expires() {
    let mut harness = Harness::with_options(SimulatorOptions {
        dispense_delay_ms: 2_000,
        ..Default::default()
    });
    let command = Envelope::command(
        "CashDispenser.Dispense",
        31,
        json!({"denomination": {"currencies": {"EUR": 20.0}}}),
    )
    .with_timeout(50);
    harness.send(&command);

    let messages = harness.collect(31).await;
    let completion = messages.last().unwrap();
    assert_eq!(completion.kind(), MessageKind::Completion);
    assert_eq!(completion.payload.as_ref().unwrap()["completionCode"], json!("timeOut"));
}

#[tokio::test]
async fn test_cancel_named_request() {
    let mut harness = Harness::with_options(SimulatorOptions {
        dispense_delay_ms: 2_000,
        ..Default::default()
    });
    harness.command(
        "CashDispenser.Dispense",
        40,
        json!({"denomination": {"currencies": {"EUR": 20.0}}}),
    );
    assert_eq!(harness.next().await.header.status, Some(AcknowledgeStatus::Ok));

    harness.command("Common.Cancel", 41, json!({"requestIds": [40]}));

    let mut dispense = None;
    let mut cancel = None;
    while dispense.is_none() || cancel.is_none() {
        let message = harness.next().await;
        if message.kind() != MessageKind::Completion {
            continue;
        }
        match message.request_id() {
            Some(40) => dispense = message.payload,
            Some(41) => cancel = message.payload,
            _ => {}
        }
    }
    assert_eq!(dispense.unwrap()["completionCode"], json!("canceled"));
    assert_eq!(cancel.unwrap()["completionCode"], json!("success"));
    assert_eq!(harness.connection.in_flight(), 0);
}

#[tokio::test]
async fn test_invalid_payload_is_invalid_data() {
    let mut harness = Harness::new();
    let completion = harness
        .complete("Common.PowerSaveControl", 50, json!({"maxPowerSaveRecoveryTime": "soon"}))
        .await;
    assert_eq!(completion["completionCode"], json!("invalidData"));
    assert!(completion["errorDescription"]
        .as_str()
        .unwrap()
        .starts_with("Invalid Common.PowerSaveControl payload."));
}
