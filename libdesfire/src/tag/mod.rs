// libdesfire/src/tag/mod.rs

use crate::constants::PCB_BLOCK_0;
use crate::device::{Device, Initialized};
use crate::protocol::frame::toggle_pcb;
use crate::protocol::responses::{Ats, FileSettings, KeySettings, VersionInfo};
use crate::types::{Aid, FileId};
use crate::Result;

pub mod builder;
pub mod operations;

pub use builder::TagBuilder;

/// Session state of one activated DESFire card.
///
/// Holds the block number of the next I-block, the card identifier and
/// the currently selected application. A fresh session starts at PCB 0x0A
/// on the PICC level. Halting the card consumes the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    cid: u8,
    pcb: u8,
    selected_application: Aid,
    ats: Option<Ats>,
}

impl Tag {
    pub fn builder() -> TagBuilder {
        TagBuilder::new()
    }

    pub(crate) fn new(cid: u8, ats: Option<Ats>) -> Self {
        Self {
            cid,
            pcb: PCB_BLOCK_0,
            selected_application: Aid::MASTER,
            ats,
        }
    }

    pub fn cid(&self) -> u8 {
        self.cid
    }

    /// PCB the next exchange will use.
    pub fn pcb(&self) -> u8 {
        self.pcb
    }

    pub fn selected_application(&self) -> Aid {
        self.selected_application
    }

    pub fn ats(&self) -> Option<&Ats> {
        self.ats.as_ref()
    }

    pub(crate) fn advance_pcb(&mut self) {
        self.pcb = toggle_pcb(self.pcb);
    }

    pub(crate) fn set_selected_application(&mut self, aid: Aid) {
        self.selected_application = aid;
    }

    pub fn select_application(
        &mut self,
        device: &mut Device<Initialized>,
        aid: Aid,
    ) -> Result<()> {
        operations::select_application(self, device, aid)
    }

    pub fn get_version(&mut self, device: &mut Device<Initialized>) -> Result<VersionInfo> {
        operations::get_version(self, device)
    }

    pub fn get_application_ids(&mut self, device: &mut Device<Initialized>) -> Result<Vec<Aid>> {
        operations::get_application_ids(self, device)
    }

    pub fn get_file_ids(&mut self, device: &mut Device<Initialized>) -> Result<Vec<FileId>> {
        operations::get_file_ids(self, device)
    }

    pub fn get_file_settings(
        &mut self,
        device: &mut Device<Initialized>,
        file: FileId,
    ) -> Result<FileSettings> {
        operations::get_file_settings(self, device, file)
    }

    pub fn get_key_settings(&mut self, device: &mut Device<Initialized>) -> Result<KeySettings> {
        operations::get_key_settings(self, device)
    }

    pub fn get_key_version(&mut self, device: &mut Device<Initialized>, key: u8) -> Result<u8> {
        operations::get_key_version(self, device, key)
    }

    /// Read `length` bytes from `offset`; a length of 0 reads to the end
    /// of the file.
    pub fn read_data(
        &mut self,
        device: &mut Device<Initialized>,
        file: FileId,
        offset: u32,
        length: u32,
    ) -> Result<Vec<u8>> {
        operations::read_data(self, device, file, offset, length)
    }

    /// Read `buf.len()` bytes from `offset` into `buf`, returning the
    /// number of bytes the card delivered.
    pub fn read_data_into(
        &mut self,
        device: &mut Device<Initialized>,
        file: FileId,
        offset: u32,
        buf: &mut [u8],
    ) -> Result<usize> {
        operations::read_data_into(self, device, file, offset, buf)
    }

    pub fn get_value(&mut self, device: &mut Device<Initialized>, file: FileId) -> Result<i32> {
        operations::get_value(self, device, file)
    }
}
