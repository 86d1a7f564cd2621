#![cfg(unix)]

mod commands_test;
mod dispatch_test;
mod exit_codes_test;
mod support;
