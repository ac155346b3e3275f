use super::ToWire;
use crate::domain::status::common as d;
use crate::messages::common as w;

wire_enum!(d::DeviceState => w::DeviceState,
    same [Online, Offline, PowerOff, NoDevice, HardwareError, UserError, DeviceBusy, FraudAttempt, PotentialFraud]);
wire_enum!(d::PositionState => w::DevicePosition,
    same [InPosition, NotInPosition, Unknown], absent [NotSupported]);
wire_enum!(d::AntiFraudModuleState => w::AntiFraudModule,
    same [Ok, Inoperable, DeviceDetected, Unknown], absent [NotSupported]);
wire_enum!(d::ExchangeState => w::Exchange,
    same [Active, Inactive], absent [NotSupported]);

pub(super) fn write(property: &d::CommonProperty, out: &mut w::CommonStatus) {
    match property {
        d::CommonProperty::Device(v) => out.device = v.to_wire(),
        d::CommonProperty::DevicePosition(v) => out.device_position = v.to_wire(),
        d::CommonProperty::PowerSaveRecoveryTime(v) => out.power_save_recovery_time = Some(*v),
        d::CommonProperty::AntiFraudModule(v) => out.anti_fraud_module = v.to_wire(),
        d::CommonProperty::Exchange(v) => out.exchange = v.to_wire(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_state_wire_values() {
        let cases = [
            (d::DeviceState::Online, "online"),
            (d::DeviceState::PowerOff, "powerOff"),
            (d::DeviceState::NoDevice, "noDevice"),
            (d::DeviceState::PotentialFraud, "potentialFraud"),
        ];
        for (state, expected) in cases {
            assert_eq!(
                serde_json::to_value(state.to_wire()).unwrap(),
                serde_json::json!(expected)
            );
        }
    }

    #[test]
    fn test_device_position_not_supported_is_absent() {
        assert_eq!(d::PositionState::NotSupported.to_wire(), None);
        assert_eq!(
            d::PositionState::NotInPosition.to_wire(),
            Some(w::DevicePosition::NotInPosition)
        );
    }
}
