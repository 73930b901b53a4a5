// libdesfire/src/protocol/responses/application.rs

use crate::constants::{AID_LEN, MAX_APPLICATION_IDS_LEN};
use crate::protocol::parser::aid_at;
use crate::types::Aid;
use crate::{Error, Result};

/// Decode the accumulated GetApplicationIDs payload.
///
/// The payload is a plain concatenation of 3-byte AIDs. It must not exceed
/// room for 28 applications and its length must be a multiple of 3.
pub fn decode_application_ids(data: &[u8]) -> Result<Vec<Aid>> {
    if data.len() > MAX_APPLICATION_IDS_LEN {
        return Err(Error::NoRoom {
            capacity: MAX_APPLICATION_IDS_LEN,
            required: data.len(),
        });
    }
    if data.len() % AID_LEN != 0 {
        return Err(Error::MisalignedApplicationIds { len: data.len() });
    }

    (0..data.len() / AID_LEN)
        .map(|i| aid_at(data, i * AID_LEN))
        .collect()
}
