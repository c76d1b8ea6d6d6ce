//! Briefing API gateways: live HTTP and canned demo.

pub mod demo_gateway;
pub mod http_gateway;

pub use demo_gateway::DemoGateway;
pub use http_gateway::HttpBriefingGateway;
