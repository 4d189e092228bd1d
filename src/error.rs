//! Error of safe_storage

/// A wrap `Result` contains custom errors.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors collections in safe-storage.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error raised by the sled backend.
    #[cfg(feature = "std")]
    #[error("Sled error: {0}")]
    Sled(#[from] sled::Error),

    /// IO error raised while preparing the backing store.
    #[cfg(feature = "std")]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value was not valid UTF-8.
    #[error("Couldn't decode stored value as UTF-8")]
    Utf8Encoding(#[from] std::string::FromUtf8Error),

    /// Error raised by a browser storage API.
    #[cfg(feature = "wasm")]
    #[error("WebSys error: {}", dump_js_value(.0))]
    WebSys(wasm_bindgen::JsValue),

    /// No `window` object in the current context, e.g. a worker.
    #[cfg(feature = "wasm")]
    #[error("Window object is not available")]
    WindowNotAvailable,

    /// The platform storage object itself is not available.
    #[cfg(feature = "wasm")]
    #[error("Platform storage is not available")]
    StorageNotAvailable,
}

#[cfg(feature = "wasm")]
fn dump_js_value(value: &wasm_bindgen::JsValue) -> String {
    js_sys::JSON::stringify(value)
        .map(String::from)
        .unwrap_or_else(|_| "unprintable JsValue".to_string())
}
