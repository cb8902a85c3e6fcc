//! UI module - swatch widgets shared by the grid views

pub mod components;
