//! Aerothermal models.
//!
//! This module contains models for convective heating of surfaces exposed to
//! rocket exhaust plumes.

pub mod impingement;
