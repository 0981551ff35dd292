//! Miscellaneous components used in the library.

mod grounded_extension_computer;
pub(crate) use grounded_extension_computer::grounded_extension;

mod scc_computer;
pub(crate) use scc_computer::strongly_connected_components;
