//! Stub handlers for the server lifecycle verbs.
//!
//! The management API does not expose these operations yet; the verbs are
//! registered so the CLI surface is stable, but they only print a notice.

pub(crate) fn handle_server_start() {
    println!("this is not yet implemented");
}

pub(crate) fn handle_server_stop() {
    println!("this is not yet implemented");
}

pub(crate) fn handle_server_list() {
    println!("this is not yet implemented");
}
