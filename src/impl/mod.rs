// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod members_csv_datasource;
        pub(crate) mod settings_ron_datasource;
        pub(crate) mod transactions_csv_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod engine_settings_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod role_model;
        pub(crate) mod transaction_type_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod in_memory_store;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod debtor;
        pub(crate) mod dispatch;
        pub(crate) mod dues_rules;
        pub(crate) mod engine_config;
        pub(crate) mod intake;
        pub(crate) mod member;
        pub(crate) mod month;
        pub(crate) mod reconciliation;
        pub(crate) mod summary;
        pub(crate) mod transaction;
    }
    pub(crate) mod logic {
        pub(crate) mod arrears_notifier;
        pub(crate) mod drift_detector;
        pub(crate) mod dues_calculator;
        pub(crate) mod financial_summary;
        pub(crate) mod member_intake;
        pub(crate) mod payment_reconciler;
        pub(crate) mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod member_repository;
        pub(crate) mod messaging_gateway;
        pub(crate) mod transaction_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod notify_arrears_usecase;
        pub(crate) mod toggle_payment_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod reminder_template;
    pub(crate) mod report_printer;
    pub(crate) mod utils;
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
        pub use crate::domain::entities::debtor::*;
        pub use crate::domain::entities::dispatch::*;
        pub use crate::domain::entities::dues_rules::*;
        pub use crate::domain::entities::engine_config::*;
        pub use crate::domain::entities::intake::*;
        pub use crate::domain::entities::member::*;
        pub use crate::domain::entities::month::*;
        pub use crate::domain::entities::reconciliation::*;
        pub use crate::domain::entities::summary::*;
        pub use crate::domain::entities::transaction::*;
    }

    pub mod repositories {
        pub use crate::data::repositories::in_memory_store::*;
        pub use crate::domain::repositories::member_repository::*;
        pub use crate::domain::repositories::messaging_gateway::*;
        pub use crate::domain::repositories::transaction_repository::*;
    }

    pub mod dispatch {
        pub use crate::domain::usecases::notify_arrears_usecase::{
            dispatch_cancellation, DispatchCancellation, DispatchCanceller,
        };
    }
}
