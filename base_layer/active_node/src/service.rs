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

use std::{future::Future, time::Duration};

use log::*;
use tokio::{
    sync::watch,
    time::{self, MissedTickBehavior},
};

use crate::{services::ServiceSpecification, ActiveNodeManager, StatusInfo};

const LOG_TARGET: &str = "c::an::service";

const MIN_MANAGE_STATE_INTERVAL: Duration = Duration::from_secs(1);

/// Drives an [ActiveNodeManager] on the configured interval and publishes its status after every cycle.
pub struct ActiveNodeService<TSpec: ServiceSpecification> {
    manager: ActiveNodeManager<TSpec>,
    status_tx: watch::Sender<StatusInfo>,
}

impl<TSpec: ServiceSpecification> ActiveNodeService<TSpec> {
    pub fn new(manager: ActiveNodeManager<TSpec>) -> (Self, ActiveNodeHandle) {
        let (status_tx, status_rx) = watch::channel(manager.status_info());
        (Self { manager, status_tx }, ActiveNodeHandle { status_rx })
    }

    /// Runs management cycles until `shutdown` resolves. A cycle in progress is completed first.
    pub async fn run<S>(mut self, shutdown: S)
    where S: Future<Output = ()> {
        let period = self.manager.config().manage_state_interval.max(MIN_MANAGE_STATE_INTERVAL);
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        info!(
            target: LOG_TARGET,
            "Active node service started, managing state every {:.0?}", period
        );
        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    info!(target: LOG_TARGET, "Active node service shutting down");
                    break;
                },
                _ = interval.tick() => {
                    self.manager.manage_state().await;
                    let status = self.manager.status_info();
                    trace!(target: LOG_TARGET, "{}", status);
                    self.status_tx.send_replace(status);
                },
            }
        }
    }
}

/// Read access to the status of a running [ActiveNodeService]
#[derive(Debug, Clone)]
pub struct ActiveNodeHandle {
    status_rx: watch::Receiver<StatusInfo>,
}

impl ActiveNodeHandle {
    pub fn status(&self) -> StatusInfo {
        self.status_rx.borrow().clone()
    }

    /// Waits for the next published status. Returns `None` once the service has stopped.
    pub async fn next_status(&mut self) -> Option<StatusInfo> {
        self.status_rx.changed().await.ok()?;
        Some(self.status())
    }
}
