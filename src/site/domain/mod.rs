//! Domain model for serviced sites.

mod ids;
mod site;

pub use ids::SiteId;
pub use site::ServiceSite;
