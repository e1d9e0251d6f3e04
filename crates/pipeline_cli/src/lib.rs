//! Walkthroughs of function composition and piping built on [`composer`]:
//! a user report built from composed stages, a request middleware chain, and a
//! left-to-right string pipeline.

pub mod args;
pub mod demo;
pub mod middleware;
pub mod report;
pub mod users;
