//! Trailer load-planning engine.
//!
//! Given a set of freight loads and a target trailer's physical/legal
//! spec, deterministically assigns pallets to trailer slots, computes the
//! weight distribution and axle balance, flags constraint violations, and
//! produces several ranked alternative loading plans.
//!
//! # Domain Model
//!
//! - [`TrailerSpec`](domain::TrailerSpec): trailer parameters with defaults
//! - [`Load`](domain::Load): freight shipment broken into pallets
//! - [`Placement`](domain::Placement): one pallet in a (slot, lane) cell
//! - [`SuggestedPlan`](domain::SuggestedPlan): one scored candidate plan
//!
//! # Pipeline
//!
//! Data flows one direction: loads + spec → ordering → placements →
//! violations → summary → scored plan. Every stage is a pure function
//! over in-memory input; constraint breaches come back as
//! [`Violation`](domain::Violation) data, never as errors.

pub mod console;
pub mod constraints;
pub mod demo_data;
pub mod domain;
pub mod dto;
pub mod placement;
pub mod planner;
pub mod summary;
