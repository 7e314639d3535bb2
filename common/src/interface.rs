// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use pnet::datalink::{self, NetworkInterface};

use crate::debug;
use crate::error::FrameError;

/// Resolves an interface name to the OS interface, including its numeric index.
pub fn resolve_interface(name: &str) -> Result<NetworkInterface, FrameError> {
    find_interface(name, datalink::interfaces())
}

/// Looks up `name` among `interfaces`.
///
/// The error lists the names that do exist so a misconfigured `--interface`
/// can be fixed without a second command.
pub fn find_interface(
    name: &str,
    interfaces: Vec<NetworkInterface>,
) -> Result<NetworkInterface, FrameError> {
    if name.is_empty() {
        return Err(FrameError::configuration("interface name is empty"));
    }

    let available: Vec<String> = interfaces.iter().map(|i| i.name.clone()).collect();

    let interface = interfaces
        .into_iter()
        .find(|i| i.name == name)
        .ok_or_else(|| {
            FrameError::configuration(format!(
                "no interface named '{}' (available: {})",
                name,
                available.join(", ")
            ))
        })?;

    if interface.index == 0 {
        return Err(FrameError::configuration(format!(
            "interface '{}' has no index",
            name
        )));
    }

    debug!(
        verbosity = 1,
        "Resolved interface {} to index {}", interface.name, interface.index
    );

    Ok(interface)
}

/// All interfaces sorted by index.
pub fn list_interfaces() -> Vec<NetworkInterface> {
    let mut interfaces = datalink::interfaces();
    interfaces.sort_by_key(|i| i.index);
    interfaces
}

/// Whether frames with real MAC addressing make sense on this interface.
pub fn is_layer_2_capable(intf: &NetworkInterface) -> bool {
    !intf.is_point_to_point() && intf.mac.is_some()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Phase;
    use pnet::util::MacAddr;

    fn create_mock_interface(name: &str, index: u32, mac: Option<MacAddr>) -> NetworkInterface {
        NetworkInterface {
            name: name.to_string(),
            description: "An interface".to_string(),
            index,
            mac,
            ips: vec![],
            flags: 0,
        }
    }

    #[test]
    fn finds_interface_by_name() {
        let interfaces = vec![
            create_mock_interface("lo", 1, None),
            create_mock_interface("eth0", 2, Some(MacAddr::new(0, 0x0c, 0x29, 0x73, 0x6d, 0x3b))),
        ];
        let intf = find_interface("eth0", interfaces).expect("eth0 should resolve");
        assert_eq!(intf.index, 2);
    }

    #[test]
    fn missing_interface_is_configuration_error() {
        let interfaces = vec![
            create_mock_interface("lo", 1, None),
            create_mock_interface("wlan0", 3, None),
        ];
        let err = find_interface("eth0", interfaces).unwrap_err();
        assert!(matches!(err, FrameError::Configuration { .. }));
        assert_eq!(err.phase(), Phase::ResolveInterface);
        let msg = err.to_string();
        assert!(msg.contains("'eth0'"));
        assert!(msg.contains("lo, wlan0"), "available names missing: {msg}");
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = find_interface("", vec![create_mock_interface("lo", 1, None)]).unwrap_err();
        assert!(matches!(err, FrameError::Configuration { .. }));
    }

    #[test]
    fn zero_index_is_rejected() {
        let err = find_interface("ghost", vec![create_mock_interface("ghost", 0, None)]).unwrap_err();
        assert!(err.to_string().contains("has no index"));
    }

    #[test]
    fn layer_2_requires_mac() {
        let with_mac = create_mock_interface("eth0", 2, Some(MacAddr::new(1, 2, 3, 4, 5, 6)));
        let without_mac = create_mock_interface("tun0", 4, None);
        assert!(is_layer_2_capable(&with_mac));
        assert!(!is_layer_2_capable(&without_mac));
    }
}
