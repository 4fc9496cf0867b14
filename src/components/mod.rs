//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render from plain props; pages own the signals and pass
//! derived values down.

pub mod alert;
pub mod confidence_meter;
pub mod drop_zone;
pub mod file_list;
pub mod range_slider;
pub mod result_view;
pub mod source_list;
pub mod tab_bar;
