//! Rail booking server.
//!
//! An in-memory booking core for a rail operator: passenger and crew
//! registration, train composition under locomotive wagon limits, journey
//! scheduling with crew sufficiency checks, and oversell-proof
//! class-segregated ticket sales. A thin axum front end (`web`) and a
//! boarding-list exporter (`export`) sit outside the core and call in
//! through the services in `booking`.

pub mod booking;
pub mod domain;
pub mod export;
pub mod seed;
pub mod store;
pub mod web;
