pub mod slice;

pub use slice::{
    append_if_missing, append_if_missing_by, contains, contains_by, remove_if_present,
    remove_if_present_by, swap_remove_if_present, SliceSetExt,
};
