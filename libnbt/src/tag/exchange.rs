// libnbt/src/tag/exchange.rs

use std::marker::PhantomData;
use std::ops::Deref;

use crate::protocol::Response;
use crate::types::StatusWord;

/// Successful response of one exchange.
///
/// The guard mutably borrows the tag it came from, so a second exchange
/// cannot start while it is alive. Dropping it releases the response.
#[derive(Debug)]
pub struct ResponseGuard<'a> {
    response: Response,
    _channel: PhantomData<&'a mut ()>,
}

impl<'a> ResponseGuard<'a> {
    pub(crate) fn new(response: Response) -> Self {
        Self {
            response,
            _channel: PhantomData,
        }
    }

    /// Response data field.
    pub fn data(&self) -> &[u8] {
        &self.response.data
    }

    /// Status word of the response, always 0x9000.
    pub fn status_word(&self) -> StatusWord {
        self.response.sw
    }

    /// Take ownership of the data field, releasing the guard.
    pub fn into_data(self) -> Vec<u8> {
        self.response.data
    }
}

impl Deref for ResponseGuard<'_> {
    type Target = Response;

    fn deref(&self) -> &Response {
        &self.response
    }
}
