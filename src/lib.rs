//! Core library for the calculate-sales command line application.
//!
//! The library turns a directory of daily branch sales records into a single
//! per-branch summary. Parsing and filesystem adapters live under
//! [`calculate::sales::io`], the registry and record types inside
//! [`calculate::sales::model`], the accumulation rules in
//! [`calculate::sales::aggregate`], and the end-to-end orchestration under
//! [`calculate::sales::pipeline`].

pub mod calculate;

pub use calculate::sales::{
    ErrorKind, Result, SalesError, aggregate, error, io, model, pipeline,
};
