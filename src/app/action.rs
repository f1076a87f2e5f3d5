use crate::share::{SharePayload, SharePlatform};

/// Side effects the main loop carries out on behalf of the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CopyLink { url: String },
    OpenIntent { platform: SharePlatform, url: String },
    NativeShare { command: Vec<String>, payload: SharePayload },
    Quit,
}
