// libdesfire/src/tag/builder.rs

use crate::constants::MAX_CID;
use crate::protocol::responses::Ats;
use crate::tag::Tag;
use crate::{Error, Result};

/// Builder for a [`Tag`] session.
///
/// `Device::initialize` uses it after activation; tests use it to start a
/// session on a card that is already active.
#[derive(Debug, Default)]
pub struct TagBuilder {
    cid: u8,
    ats: Option<Ats>,
}

impl TagBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cid(mut self, cid: u8) -> Self {
        self.cid = cid;
        self
    }

    pub fn ats(mut self, ats: Ats) -> Self {
        self.ats = Some(ats);
        self
    }

    pub fn build(self) -> Result<Tag> {
        if self.cid > MAX_CID {
            return Err(Error::InvalidCid(self.cid));
        }
        Ok(Tag::new(self.cid, self.ats))
    }
}
