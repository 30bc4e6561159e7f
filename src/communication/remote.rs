//! Radio link variable handler
//!
//! Registry-facing half of the ground-station link. The transport decodes a
//! frame into a [`VarUpdate`] (tag plus value of the kind reported by
//! `var_type()`), hands it to [`RemoteHandler`], and encodes whatever comes
//! back. Wire encoding itself lives with the transport.
//!
//! # Supported Requests
//!
//! - **Set**: write one variable by tag, answered with its new value
//! - **Read**: current value of one variable by tag
//! - **List**: current value of every variable, for telemetry
//!
//! # Link Loss
//!
//! [`RemoteHandler::poll`] runs from the control loop. When no message has
//! arrived for `timeout_ms`, the link is declared lost and
//! `switches.softKill` is engaged once. Releasing the kill switch again is
//! left to the operator.

use heapless::Vec;

use crate::core::shm::{Shm, ShmError, Tag, Var, VarFlags, VarValue, MAX_VARS, SOFT_KILL};
use crate::{log_debug, log_error, log_info, log_warn};

/// One tagged value, as carried by a radio frame
#[derive(Debug, Clone, PartialEq)]
pub struct VarUpdate {
    pub tag: Tag,
    pub value: VarValue,
}

impl VarUpdate {
    /// Current value of `var`
    pub fn from_var(var: &Var<'_>) -> Self {
        Self {
            tag: var.tag(),
            value: var.value(),
        }
    }
}

/// Remote handler error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RemoteError {
    /// No variable with this tag
    #[error("unknown tag {0}")]
    NotFound(Tag),
    /// Variable is produced on board and cannot be written remotely
    #[error("variable tag {0} is read-only to the radio")]
    ReadOnly(Tag),
    /// Registry refused the value
    #[error(transparent)]
    Shm(#[from] ShmError),
}

/// Radio link state as seen by the watchdog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// Nothing received since boot
    Waiting,
    /// Last message within the timeout
    Connected,
    /// Timeout expired; kill switch engaged
    Lost,
}

/// Variable protocol handler and link watchdog
pub struct RemoteHandler {
    timeout_ms: u64,
    last_msg_ms: Option<u64>,
    link: LinkState,
}

impl RemoteHandler {
    /// Default link-loss timeout
    pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

    pub fn new(timeout_ms: u64) -> Self {
        Self {
            timeout_ms,
            last_msg_ms: None,
            link: LinkState::Waiting,
        }
    }

    pub fn link_state(&self) -> LinkState {
        self.link
    }

    /// Record that a frame arrived from the ground station
    ///
    /// Called for every received message, including ones that carry no
    /// variable update.
    pub fn mark_received(&mut self, now_ms: u64) {
        if self.link == LinkState::Lost {
            log_info!("Radio link restored");
        }
        self.last_msg_ms = Some(now_ms);
        self.link = LinkState::Connected;
    }

    /// Apply a remote write
    ///
    /// Returns the variable's value after the write so the transport can echo
    /// it back.
    pub fn handle_set(
        &mut self,
        shm: &Shm<'_>,
        update: &VarUpdate,
        now_ms: u64,
    ) -> Result<VarUpdate, RemoteError> {
        self.mark_received(now_ms);

        let var = shm
            .var_by_tag_if_exists(update.tag)
            .ok_or(RemoteError::NotFound(update.tag))?;

        if var.flags().contains(VarFlags::REMOTE_READ_ONLY) {
            log_warn!("Remote write to read-only variable {}", var.name());
            return Err(RemoteError::ReadOnly(update.tag));
        }

        if let Err(err) = var.set_value(&update.value) {
            log_warn!(
                "Remote write to {} rejected: sent {}, declared {}",
                var.name(),
                update.value.var_type().as_str(),
                var.var_type().as_str()
            );
            return Err(err.into());
        }

        log_debug!("Remote set {}.{}", var.group(), var.name());
        Ok(VarUpdate::from_var(var))
    }

    /// Current value of one variable
    pub fn handle_request_read(&self, shm: &Shm<'_>, tag: Tag) -> Option<VarUpdate> {
        shm.var_by_tag_if_exists(tag).map(VarUpdate::from_var)
    }

    /// Current value of every variable, in registry order
    pub fn handle_request_list(&self, shm: &Shm<'_>) -> Vec<VarUpdate, MAX_VARS> {
        let mut updates = Vec::new();
        for var in shm.vars() {
            if updates.push(VarUpdate::from_var(var)).is_err() {
                break;
            }
        }
        updates
    }

    /// Run the link watchdog
    pub fn poll(&mut self, shm: &Shm<'_>, now_ms: u64) -> LinkState {
        let Some(last) = self.last_msg_ms else {
            return LinkState::Waiting;
        };

        if now_ms.saturating_sub(last) <= self.timeout_ms {
            return self.link;
        }

        if self.link != LinkState::Lost {
            self.link = LinkState::Lost;
            log_warn!("Radio link lost after {} ms", now_ms.saturating_sub(last));
            engage_soft_kill(shm);
        }
        self.link
    }
}

impl Default for RemoteHandler {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TIMEOUT_MS)
    }
}

fn engage_soft_kill(shm: &Shm<'_>) {
    match shm.var_if_exists(SOFT_KILL) {
        Some(var) => {
            if var.set(true).is_err() {
                log_error!("{} is not a bool", SOFT_KILL);
            }
        }
        None => log_warn!("No {} variable to engage", SOFT_KILL),
    }
}
