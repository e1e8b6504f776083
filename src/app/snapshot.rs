//! The plain-data read contract exposed to the rendering layer.

use crate::directory::domain::{Role, UserAccount};
use crate::request::domain::ServiceRequest;
use crate::session::domain::Section;
use crate::site::domain::ServiceSite;
use crate::workboard::domain::WorkTask;
use serde::Serialize;

/// Point-in-time view of everything the rendering layer needs.
///
/// Snapshots are plain data: collections in insertion order plus the
/// current session and navigation state. Each call to
/// [`crate::app::DashboardController::snapshot`] rebuilds one from
/// scratch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    /// All service requests, in insertion order.
    pub requests: Vec<ServiceRequest>,
    /// All work tasks, in seed order.
    pub tasks: Vec<WorkTask>,
    /// All serviced sites, in seed order.
    pub sites: Vec<ServiceSite>,
    /// All user accounts, in insertion order.
    pub users: Vec<UserAccount>,
    /// Role of the signed-in user, or `None` when anonymous.
    pub role: Option<Role>,
    /// Display name of the signed-in user, or `None` when anonymous.
    pub display_name: Option<String>,
    /// The section the rendering layer currently shows.
    pub active_section: Section,
    /// Whether the sidebar is collapsed.
    pub sidebar_collapsed: bool,
}
