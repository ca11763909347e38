//! End-to-end sessions driven by scripted console input.

mod session;
