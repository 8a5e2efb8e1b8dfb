mod output;
mod record;
mod system;

pub use output::{present_export, present_print};
pub use record::{
    build_card, build_record_list, present_card, present_empty_state, present_record_list,
};
pub use system::{present_datasets, present_notes};
