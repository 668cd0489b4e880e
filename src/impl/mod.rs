// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod cards_json_datasource;
        pub(crate) mod sync_config_ron_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod card_model;
        pub(crate) mod iso_instant_model;
        pub(crate) mod sync_config_model;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod assembled_card;
        pub(crate) mod booking;
        pub(crate) mod booking_row;
        pub(crate) mod calendar_event;
        pub(crate) mod card;
        pub(crate) mod service_flags;
        pub(crate) mod sync_config;
        pub(crate) mod sync_run;
    }
    pub(crate) mod logic {
        pub(crate) mod description_parser;
        pub(crate) mod event_assembler;
        pub(crate) mod label_dictionary;
        pub(crate) mod label_normalizer;
        pub(crate) mod service_flag_classifier;
        pub(crate) mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod booking_store;
        pub(crate) mod calendar_gateway;
        pub(crate) mod card_source;
        pub(crate) mod run_logger;
    }
    pub(crate) mod usecases {
        pub(crate) mod sync_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod booking_field_fmt;
    pub(crate) mod description_printer;
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
        pub use crate::domain::entities::assembled_card::*;
        pub use crate::domain::entities::booking::*;
        pub use crate::domain::entities::booking_row::*;
        pub use crate::domain::entities::calendar_event::*;
        pub use crate::domain::entities::card::*;
        pub use crate::domain::entities::service_flags::*;
        pub use crate::domain::entities::sync_config::*;
        pub use crate::domain::entities::sync_run::*;
    }

    pub mod repositories {
        pub use crate::domain::repositories::booking_store::*;
        pub use crate::domain::repositories::calendar_gateway::*;
        pub use crate::domain::repositories::card_source::*;
        pub use crate::domain::repositories::run_logger::*;
    }

    pub mod usecases {
        pub use crate::domain::usecases::sync_usecase::SyncUsecase;
    }
}
