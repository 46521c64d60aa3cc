// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod barcode_datasource;
        pub(crate) mod csv_datasource;
        pub(crate) mod xlsx_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod barcode_date_model;
        pub(crate) mod declared_value_model;
        pub(crate) mod package_count_model;
        pub(crate) mod scaled_weight_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod remitos_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod export_sheet;
        pub(crate) mod record_store;
        pub(crate) mod remito;
    }
    pub(crate) mod logic {
        pub(crate) mod export_naming;
    }
    pub(crate) mod repositories {
        pub(crate) mod remitos_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod scan_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod status_messages;
    pub(crate) mod table_printer;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::export_sheet::*;
        pub use crate::domain::entities::record_store::*;
        pub use crate::domain::entities::remito::*;
    }

    pub mod decoder {
        pub use crate::data::datasources::barcode_datasource::{decode_barcode, MIN_BARCODE_LEN};
    }

    pub mod messages {
        pub use crate::presentation::status_messages::*;
    }
}
