//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one piece of the dashboard each and report user input
//! through callbacks; the page owns the `DashboardState` signal.

pub mod add_vehicle_dialog;
pub mod stat_card;
pub mod status_badge;
pub mod status_select;
pub mod vehicle_table;
