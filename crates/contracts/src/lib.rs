//! Общие DTO консоли гипервизора: то, чем фронтенд обменивается с REST API.

pub mod domain;
