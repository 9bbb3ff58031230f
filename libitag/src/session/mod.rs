// libitag/src/session/mod.rs

//! Tag session orchestration.
//!
//! A session drives the strictly sequential exchange pattern: GetTagId
//! establishes a `TagContext`, every later command echoes that context, and
//! an `IncompleteResponse` status triggers exactly one GetPreviousResponse
//! retransmit whose result stands as final.

use log::debug;

use crate::flight::{self, FlightData};
use crate::layout::LayoutType;
use crate::protocol::status::ApduError;
use crate::protocol::{Command, Response};
use crate::transport::Transport;
use crate::types::TagContext;
use crate::{Error, Result};

/// A live exchange session with one tag.
///
/// At most one command is outstanding at a time; the context is replaced
/// wholesale on reconnect and never mutated.
pub struct TagSession<T: Transport> {
    transport: T,
    context: Option<TagContext>,
}

impl<T: Transport> TagSession<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            context: None,
        }
    }

    /// Access the underlying transport (mainly for test inspection).
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Perform the GetTagId round trip and adopt the returned context for
    /// the rest of the session.
    pub fn connect(&mut self) -> Result<TagContext> {
        let raw = self
            .transport
            .transmit(&Command::GetTagId.encode(&TagContext::ZERO))?;

        if !Response::is_success(&raw) {
            return Err(Response::classify_error(&raw).into());
        }

        let resp = Response::parse(&raw)?;
        let context = resp
            .context()
            .ok_or(Error::Apdu(ApduError::MissingDataInResponse))?;

        debug!("tag session established: tag_id={}", context.tag_id.to_hex());
        self.context = Some(context);
        Ok(context)
    }

    /// The context for this session, connecting first if none exists yet.
    fn context(&mut self) -> Result<TagContext> {
        match self.context {
            Some(context) => Ok(context),
            None => self.connect(),
        }
    }

    /// Read and decode the flight record stored on the tag. Returns Ok(None)
    /// when the tag answered successfully but carried no decodable record.
    pub fn get_flight_data(&mut self) -> Result<Option<FlightData>> {
        let resp = self.execute(&Command::GetFlightData)?;
        Ok(flight::decode(resp.payload()))
    }

    /// Validate, encode, and write a flight record to the tag. An invalid
    /// record is rejected before anything touches the transport.
    pub fn update_data(&mut self, data: &FlightData) -> Result<()> {
        data.validate()?;
        let payload = flight::encode(data)?;
        self.update_data_raw(payload)
    }

    /// Write a pre-encoded payload to the tag.
    pub fn update_data_raw(&mut self, payload: Vec<u8>) -> Result<()> {
        self.execute(&Command::UpdateData { payload })?;
        Ok(())
    }

    /// Provision the tag with one of the embedded layout blobs.
    pub fn update_layout(&mut self, layout: LayoutType) -> Result<()> {
        self.execute(&Command::UpdateLayout { layout })?;
        Ok(())
    }

    /// Send a command and parse its response, applying the one-shot
    /// continuation protocol.
    ///
    /// When the tag reports `IncompleteResponse` it has deferred a large
    /// response; the session issues a single GetPreviousResponse built from
    /// the same context and surfaces that second result, success or error,
    /// as final.
    fn execute(&mut self, cmd: &Command) -> Result<Response> {
        let context = self.context()?;

        debug!(
            "sending command {:02x?} ({} payload bytes)",
            cmd.command_id(),
            cmd.payload().len()
        );
        let raw = self.transport.transmit(&cmd.encode(&context))?;
        if Response::is_success(&raw) {
            return Response::parse(&raw);
        }

        let err = Response::classify_error(&raw);
        if err != ApduError::IncompleteResponse {
            return Err(err.into());
        }

        debug!("response deferred, issuing GetPreviousResponse");
        let raw = self
            .transport
            .transmit(&Command::GetPreviousResponse.encode(&context))?;
        if Response::is_success(&raw) {
            Response::parse(&raw)
        } else {
            Err(Response::classify_error(&raw).into())
        }
    }
}
