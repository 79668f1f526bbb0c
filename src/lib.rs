//! # hcpl
//! An interpreter for the HyperCall Programming Language (HCPL), a
//! line-oriented esoteric language with one data structure, six commands,
//! and strict expectations about politeness.
//!
//! ## Introduction
//! An HCPL program is a sequence of lines. Every action line starts with
//! `PLEASE`, names one of six commands, and must carry exactly one Orb (`.`)
//! and exactly one Semi-Orb (`:`). The program operates on the *Databer*, an
//! ordered container of integer *Datalings*, and must ask to leave with
//! `PLEASE EXIT :6.` — programs that forget their manners are refused before
//! a single action runs.
//!
//! ```
//! use hcpl::vm::{run, VMOptions};
//!
//! let source = "
//! PLEASE DO :1.
//! 9
//! PLEASE DO :1.
//! 10
//! PLEASE CALL :4.
//! PLEASE EXIT :6.
//! ";
//! let result = run(source, VMOptions::default());
//! assert!(result.error.is_none());
//! assert_eq!(result.output[0], "hi");
//! ```
pub mod chars;
pub mod errors;
pub mod ops;
pub mod parser;
pub mod vm;
