// libdesfire/src/device/handle.rs

use std::marker::PhantomData;

use log::{debug, trace, warn};

use crate::constants::PPS0_PPS1_PRESENT;
use crate::device::config::ActivationConfig;
use crate::protocol::codec;
use crate::protocol::responses::{Ats, decode_ats};
use crate::protocol::{Command, Frame, Response};
use crate::status::StatusCode;
use crate::tag::Tag;
use crate::transport::Transport;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Device handle that enforces activation state at compile time.
///
/// An `Uninitialized` device only knows how to activate a card; exchanges
/// with the card are only available on an `Initialized` device together
/// with the [`Tag`] session returned by [`Device::initialize`].
pub struct Device<State = Uninitialized> {
    transport: Box<dyn Transport>,
    config: ActivationConfig,
    _state: PhantomData<State>,
}

/// Status byte and data of one (possibly chained) exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub status: StatusCode,
    pub data: Vec<u8>,
}

impl Exchange {
    /// Return the data if the card answered OPERATION_OK, otherwise the
    /// status as an application-tier error for `command`.
    pub fn require_ok(self, command: u8) -> Result<Vec<u8>> {
        if self.status == StatusCode::OperationOk {
            Ok(self.data)
        } else {
            Err(Error::Application {
                command,
                status: self.status,
            })
        }
    }
}

impl<State> Device<State> {
    pub fn config(&self) -> &ActivationConfig {
        &self.config
    }
}

impl Device<Uninitialized> {
    /// Create a Device from an existing Transport instance. This is
    /// primarily intended for tests where a MockTransport is provided.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Result<Self> {
        Self::with_config(transport, ActivationConfig::default())
    }

    pub fn with_config(transport: Box<dyn Transport>, config: ActivationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            transport,
            config,
            _state: PhantomData,
        })
    }

    /// Activate the card in the field (RATS, then PPS when configured) and
    /// open a session for it.
    ///
    /// On failure the card is halted (best effort) so the next attempt
    /// starts from a known state.
    pub fn initialize(mut self) -> Result<(Device<Initialized>, Tag)> {
        let ats = match self.activate() {
            Ok(ats) => ats,
            Err(e) => {
                warn!("activation failed: {}", e);
                if let Err(halt_err) = self.transport.halt() {
                    warn!("halt after failed activation: {}", halt_err);
                }
                return Err(e);
            }
        };

        if self.config.cid != 0 && !ats.supports_cid() {
            warn!(
                "card does not announce CID support, using cid {} anyway",
                self.config.cid
            );
        }
        debug!("card activated: fsc={} fwi={}", ats.fsc(), ats.fwi());

        let tag = Tag::builder().cid(self.config.cid).ats(ats).build()?;
        let device = Device {
            transport: self.transport,
            config: self.config,
            _state: PhantomData,
        };
        Ok((device, tag))
    }

    fn activate(&mut self) -> Result<Ats> {
        let raw = self.transport.request_ats(self.config.rats_param())?;
        trace!("ATS: {}", bytes_to_hex_spaced(&raw));
        let ats = decode_ats(&raw)?;

        if let Some(rates) = self.config.pps {
            debug!("PPS dsi={} dri={}", rates.dsi, rates.dri);
            self.transport.protocol_and_parameter_selection(
                self.config.cid,
                PPS0_PPS1_PRESENT,
                rates.pps1(),
            )?;
        }
        Ok(ats)
    }
}

impl Device<Initialized> {
    /// Send one I-block carrying `cmd` and return the card's status byte and
    /// data.
    ///
    /// The session PCB only advances once the answer was received and its
    /// envelope accepted, so a failed round trip can be retried by
    /// restarting the whole command.
    pub fn exchange(&mut self, tag: &mut Tag, cmd: &Command) -> Result<Exchange> {
        let mut frame = codec::encode_command_frame(tag.pcb(), tag.cid(), cmd)?;
        let crc = self.transport.calculate_crc(&frame)?;
        frame.extend_from_slice(&crc);
        trace!("> {}", bytes_to_hex_spaced(&frame));

        let rx = self.transport.transceive(&frame, true)?;
        trace!("< {}", bytes_to_hex_spaced(&rx));

        let resp = Frame::decode_response(&rx, tag.pcb())?;
        if let Some(cid) = resp.cid {
            if cid & 0x0F != tag.cid() {
                warn!(
                    "{}: answer carries cid {} instead of {}",
                    cmd.name(),
                    cid & 0x0F,
                    tag.cid()
                );
            }
        }
        tag.advance_pcb();

        Ok(Exchange {
            status: resp.status,
            data: resp.data,
        })
    }

    /// Exchange `cmd` and keep sending ADDITIONAL_FRAME requests while the
    /// card announces more data. Frame data is concatenated in arrival
    /// order; more than `capacity` bytes in total is [`Error::NoRoom`].
    ///
    /// The returned status is the one of the last frame.
    pub fn exchange_chained(
        &mut self,
        tag: &mut Tag,
        cmd: &Command,
        capacity: usize,
    ) -> Result<Exchange> {
        let mut data = Vec::new();
        let mut frames = 1usize;
        let mut ex = self.exchange(tag, cmd)?;
        loop {
            let required = data.len() + ex.data.len();
            if required > capacity {
                return Err(Error::NoRoom { capacity, required });
            }
            data.extend_from_slice(&ex.data);

            if ex.status != StatusCode::AdditionalFrame {
                debug!(
                    "{}: {} bytes in {} frame(s), status {}",
                    cmd.name(),
                    data.len(),
                    frames,
                    ex.status
                );
                return Ok(Exchange {
                    status: ex.status,
                    data,
                });
            }

            frames += 1;
            ex = self.exchange(tag, &Command::AdditionalFrame)?;
        }
    }

    /// Run a command to completion and decode its answer.
    ///
    /// Chaining commands follow ADDITIONAL_FRAME; for all others it is an
    /// application error. A successful SelectApplication updates the
    /// session's selected application.
    pub fn execute(&mut self, tag: &mut Tag, cmd: &Command) -> Result<Response> {
        debug!("{} (pcb {:#04x})", cmd.name(), tag.pcb());
        let ex = if cmd.supports_chaining() {
            self.exchange_chained(tag, cmd, cmd.response_capacity())?
        } else {
            self.exchange(tag, cmd)?
        };
        let data = ex.require_ok(cmd.command_code())?;
        let response = Response::decode(cmd.command_code(), &data)?;

        if let Command::SelectApplication { aid } = cmd {
            tag.set_selected_application(*aid);
        }
        Ok(response)
    }

    /// Halt the card and end its session.
    pub fn halt(mut self, tag: Tag) -> Result<Device<Uninitialized>> {
        debug!("halting card (cid {})", tag.cid());
        drop(tag);
        self.transport.halt()?;
        Ok(Device {
            transport: self.transport,
            config: self.config,
            _state: PhantomData,
        })
    }
}
