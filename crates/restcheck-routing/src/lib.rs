//! REST route expectation builder.
//!
//! Given a resource token, an optional explicit action list, and
//! [`RouteOptions`], [`RouteExpectationBuilder`] produces the ordered
//! sequence of route expectations a RESTful controller must satisfy. The
//! expectations are plain values; asserting them against an actual router
//! is the host test suite's job.
//!
//! # Example
//!
//! ```
//! use restcheck_core::{ActionKind, HttpMethod, RouteOptions};
//! use restcheck_routing::RouteExpectationBuilder;
//!
//! # fn main() -> restcheck_core::Result<()> {
//! let routes = RouteExpectationBuilder::new("widget").build()?;
//! assert_eq!(routes.len(), 7);
//! assert_eq!(routes[0].method, HttpMethod::Get);
//! assert_eq!(routes[0].path, "/widgets");
//! assert_eq!(routes[0].params.action, ActionKind::Index);
//!
//! let routes = RouteExpectationBuilder::new("profile")
//!     .options(RouteOptions::new().singular())
//!     .build()?;
//! assert_eq!(routes.len(), 6);
//! assert_eq!(routes[0].path, "/profile");
//! # Ok(())
//! # }
//! ```

mod builder;

pub use builder::{rest_routes, RouteExpectationBuilder};
