//! Core functionality for studio pricing
//!
//! This module contains the pricing kernel and its data structures.

pub mod pricing; // Unified pricing and cost-allocation engine
