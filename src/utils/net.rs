use std::{
    io,
    net::{ToSocketAddrs, UdpSocket},
};

use crate::constants;

/// Address the OS would route outbound traffic from. Connecting a udp socket only
/// resolves the route, nothing goes on the wire.
pub fn get_local_addr<A: ToSocketAddrs>(target: A) -> io::Result<String> {
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.connect(target)?;

    let local_addr = socket.local_addr()?;
    Ok(local_addr.ip().to_string())
}

/// Like [`get_local_addr`] but never fails, falls back to "Unknown".
pub fn probe_local_address(target: &str) -> String {
    let local_ip = match get_local_addr(target) {
        Ok(ip) => ip,
        Err(err) => {
            tracing::warn!("could not determine local address via {target}: {err}");
            constants::UNKNOWN_ADDRESS.to_string()
        }
    };

    tracing::info!("Local IP: {local_ip}");
    local_ip
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_ipv4_shaped(addr: &str) -> bool {
        let octets: Vec<&str> = addr.split('.').collect();
        octets.len() == 4 && octets.iter().all(|o| o.parse::<u8>().is_ok())
    }

    #[test]
    fn probe_is_ipv4_or_unknown() {
        let addr = probe_local_address(constants::DEFAULT_PROBE_TARGET);
        assert!(
            addr == constants::UNKNOWN_ADDRESS || is_ipv4_shaped(&addr),
            "unexpected probe result: {addr}"
        );
    }

    #[test]
    fn loopback_target_resolves_to_loopback() {
        let addr = get_local_addr("127.0.0.1:9").unwrap();
        assert_eq!(addr, "127.0.0.1");
    }

    #[test]
    fn bad_target_falls_back_to_unknown() {
        assert_eq!(probe_local_address("not-an-address"), "Unknown");
        assert_eq!(probe_local_address("1.2.3.4:notaport"), "Unknown");
    }
}
