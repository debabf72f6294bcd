//! Service layer for business logic
//!
//! Short code minting, path resolution and the simulated redirect, tied
//! together by [`LinkService`] for whatever front end sits on top.

mod link_service;
pub mod redirect;
pub mod resolver;

pub use link_service::*;
pub use redirect::{Navigator, RedirectHandle, RedirectSimulator, RedirectState};
pub use resolver::{Route, RoutingTable, resolve};
