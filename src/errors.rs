use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading input.");

// Decoding-related.
define_client_error!(InvalidBarcode, "Invalid barcode format.");

// Store-related.
define_client_error!(EmptyStore, "No records to {operation}.", { operation: &str });
define_client_error!(
    RecordIndexOutOfBounds,
    "Record index {index} is out of bounds (records: {len}).",
    { index: usize, len: usize }
);

// Export-related.
define_client_error!(WriteError, "Error writing file '{path}'.", { path: &str });
define_internal_error!(
    SpreadsheetEncodingFailed,
    "Failed to encode {format} spreadsheet.",
    { format: &str }
);
