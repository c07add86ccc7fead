//  Copyright 2024. The Tari Project
//
//  Redistribution and use in source and binary forms, with or without modification, are permitted provided that the
//  following conditions are met:
//
//  1. Redistributions of source code must retain the above copyright notice, this list of conditions and the following
//  disclaimer.
//
//  2. Redistributions in binary form must reproduce the above copyright notice, this list of conditions and the
//  following disclaimer in the documentation and/or other materials provided with the distribution.
//
//  3. Neither the name of the copyright holder nor the names of its contributors may be used to endorse or promote
//  products derived from this software without specific prior written permission.
//
//  THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS" AND ANY EXPRESS OR IMPLIED WARRANTIES,
//  INCLUDING, BUT NOT LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
//  DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL,
//  SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
//  SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY,
//  WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE
//  USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

//! Validation of the address a service node advertises to the network.

use std::net::{Ipv4Addr, SocketAddr};

use tari_common::configuration::Network;

use crate::NotCapableReason;

/// Returns true if `addr` may be advertised as a service node address.
///
/// Service nodes must be reachable over the public IPv4 internet, so anything that is not globally routable is
/// rejected. When `allow_test_addrs` is set (isolated test networks) every address is accepted.
pub fn is_valid_service_address(addr: &SocketAddr, allow_test_addrs: bool) -> bool {
    if allow_test_addrs {
        return true;
    }
    match addr {
        SocketAddr::V4(addr) => is_routable_ipv4(addr.ip()),
        SocketAddr::V6(_) => false,
    }
}

fn is_routable_ipv4(ip: &Ipv4Addr) -> bool {
    let [a, b, ..] = ip.octets();
    let is_this_network = a == 0;
    let is_shared = a == 100 && (b & 0xc0) == 64;
    let is_reserved = a >= 240;
    !(ip.is_private() ||
        ip.is_loopback() ||
        ip.is_link_local() ||
        ip.is_unspecified() ||
        ip.is_broadcast() ||
        ip.is_documentation() ||
        ip.is_multicast() ||
        is_this_network ||
        is_shared ||
        is_reserved)
}

/// MainNet service nodes must listen on the MainNet port, and no other network may use it.
pub fn validate_service_port(network: Network, addr: &SocketAddr) -> Result<(), NotCapableReason> {
    let mainnet_port = Network::MainNet.default_p2p_port();
    let port = addr.port();
    if network.is_mainnet() {
        if port != mainnet_port {
            return Err(NotCapableReason::MainNetPortMismatch {
                port,
                expected: mainnet_port,
            });
        }
    } else if port == mainnet_port {
        return Err(NotCapableReason::MainNetPortReserved { port });
    }
    Ok(())
}
