mod frame_controller;
mod json_contract;
mod page_config;
mod page_controller;
mod page_markup;
mod ui_controller;
mod visibility_controller;

pub use json_contract::{
    MUTATION_LOG_JSON_SCHEMA_V1, MutationLogJsonContractV1, mutations_from_json_compat_str,
    mutations_to_json_contract_v1_pretty,
};
pub use page_config::PageConfig;
pub use page_controller::PageController;
pub use page_markup::{NumericElement, PageMarkup, ProgressRing, StatCard};
pub use visibility_controller::WatcherKind;
